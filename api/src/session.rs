//! Session collaborator. Credentials never reach this crate; only the resolved user does.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    pub fn new<T: Into<String>>(user_id: T) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    /// The validated session for the current request, if any.
    async fn safe_get_session(&self) -> Option<Session>;

    async fn sign_out(&self) -> Result<(), ApiError>;
}
