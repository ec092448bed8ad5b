//! Error type shared by the evaluation and data API clients
//!
//! Callers branch on the kind: transport failures never reached the service,
//! application failures carry the status and the best message the body had.

use thiserror::Error;

/// Failure talking to one of the external HTTP services
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or IO failure before a response was read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("service responded with {status}: {message}")]
    Application { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Pull a human message out of an error body: `{"error": "..."}` if present, else the raw text
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(serde_json::Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
