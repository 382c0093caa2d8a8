use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Failed to parse API response: {reason}")]
    Parse { reason: String },

    #[error("Unknown booking field: {name}")]
    UnknownField { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_code_and_url() {
        let err = RentalError::Status {
            status: 503,
            url: "http://localhost/api/properties".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/api/properties"));
    }

    #[test]
    fn parse_error_display() {
        let err = RentalError::Parse {
            reason: "missing field `name`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing field `name`"));
        assert!(msg.contains("parse"));
    }

    #[test]
    fn unknown_field_display() {
        let err = RentalError::UnknownField {
            name: "shoeSize".into(),
        };
        assert!(err.to_string().contains("shoeSize"));
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RentalError = io_err.into();
        assert!(matches!(err, RentalError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }
}
