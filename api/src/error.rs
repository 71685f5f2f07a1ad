use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An HTTP redirect the caller should issue instead of rendering the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub status: u16,
    pub location: String,
}

impl Redirect {
    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            status: 303,
            location: location.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("redirect ({}) to {}", .0.status, .0.location)]
    Redirect(Redirect),

    #[error("metrics store failed: {0}")]
    Store(String),

    /// Raised by [`SessionProvider`](crate::SessionProvider) implementations, e.g. a failed sign-out.
    #[error("session provider failed: {0}")]
    Session(String),

    #[error("dashboard config is malformed: {0}")]
    Config(#[source] serde_json::Error),
}
