//! Error types for Bot API setup requests.

use thiserror::Error;

/// Errors from building, sending or formatting a Bot API request.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Transport failure (DNS, TCP, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Telegram answered with a non-2xx status. `body` is already pretty-printed when it was JSON.
    #[error("Telegram API returned HTTP {status}")]
    Api { status: u16, body: String },

    /// Response body is not JSON; `body` is kept verbatim.
    #[error("Telegram API returned a non-JSON body (HTTP {status})")]
    MalformedResponse { status: u16, body: String },

    /// Payload serialization or response parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SetupError {
    /// Response body to print for errors that carry one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            SetupError::Api { body, .. } | SetupError::MalformedResponse { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}

/// Result type for setup operations; uses [`SetupError`].
pub type Result<T> = std::result::Result<T, SetupError>;
