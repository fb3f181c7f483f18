//! Client Error Taxonomy

use thiserror::Error;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Every failure a client operation can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected locally; no request was made
    #[error("{0}")]
    Validation(String),

    /// The server refused the bearer token
    #[error("session is no longer authorized")]
    Unauthorized,

    /// Non-2xx response other than an authorization failure
    #[error("request failed with status {status}{}", suffix(.message))]
    RequestFailed {
        status: u16,
        message: Option<String>,
    },

    /// The server could not be reached or the response was unreadable
    #[error("transport error: {0}")]
    Transport(String),

    /// Durable storage refused a write
    #[error("storage error: {0}")]
    Storage(String),
}

fn suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text shown to the user: validation text or the server's own message,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::RequestFailed {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
