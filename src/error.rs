use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Authentication failed: {reason}")]
    Authentication { reason: String },
    #[error("Radar returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Unexpected response from Radar: {reason}")]
    InvalidResponse { reason: String },
    #[error("Could not determine home directory")]
    HomeDirectoryNotFound,
}

impl Error {
    /// Authentication failure with a human-readable reason
    pub fn authentication(reason: impl Into<String>) -> Self {
        Self::Authentication {
            reason: reason.into(),
        }
    }

    /// Response body that does not have the expected shape
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Non-success HTTP status, keeping the body for diagnostics
    #[must_use]
    pub fn http_status(status: u16, body: String) -> Self {
        Self::HttpStatus {
            status,
            body: if body.trim().is_empty() {
                crate::constants::EMPTY_RESPONSE.to_string()
            } else {
                body
            },
        }
    }

    /// Configuration value that failed validation
    #[must_use]
    pub fn invalid_config(key: &str, reason: &str) -> Self {
        Self::Config(format!("invalid value for '{key}': {reason}"))
    }
}
