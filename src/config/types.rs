use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RentalError, Result};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

impl Config {
    /// Rejects values the HTTP client or the redirect timer cannot work with.
    pub fn validate(&self) -> Result<()> {
        let base_url = Url::parse(&self.api.base_url).map_err(|e| {
            RentalError::Config(format!("api.base_url {:?}: {e}", self.api.base_url))
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(RentalError::Config(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                self.api.base_url
            )));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(RentalError::Config(
                "api.request_timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Where the rental REST API lives and how to talk to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// How long the confirmation view stays up before returning to the listing.
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_secs: u64,
}

impl BookingConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_secs(self.redirect_delay_secs)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            redirect_delay_secs: default_redirect_delay(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".into()
}

fn default_user_agent() -> String {
    concat!("mcp-rental-front/", env!("CARGO_PKG_VERSION")).into()
}

fn default_timeout() -> u64 {
    30
}

fn default_redirect_delay() -> u64 {
    3
}
