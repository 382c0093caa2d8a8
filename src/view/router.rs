use tokio::sync::mpsc;
use tracing::{info, warn};

/// Pages reachable from the navigation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Property { id: String },
    Booking,
    NotFound { path: String },
}

impl Route {
    /// Resolves a path. `/property/{id}` and the bare `/{id}` both reach the
    /// detail page; query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let path_only = trimmed.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["booking"] => Self::Booking,
            ["property"] => Self::NotFound {
                path: trimmed.to_string(),
            },
            ["property", id] | [id] => Self::Property {
                id: (*id).to_string(),
            },
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Property { id } => format!("/property/{id}"),
            Self::Booking => "/booking".into(),
            Self::NotFound { path } => path.clone(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Handle through which pages ask the application shell to change page.
/// Requests are queued; the shell applies them in order.
#[derive(Debug, Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<Route>,
}

impl Navigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn push(&self, route: Route) {
        info!(route = %route, "navigation requested");
        if self.tx.send(route).is_err() {
            warn!("navigation dropped, router is gone");
        }
    }
}
