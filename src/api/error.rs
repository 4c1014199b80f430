//! Errors raised while fetching photos.

use thiserror::Error;

/// Errors that can occur during a photo fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Connection, TLS or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the expected JSON
    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// No access key could be resolved
    #[error("Access key missing: set {env_var} or api.access_key")]
    MissingCredential { env_var: String },

    /// Request URL could not be built from the configured base URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether the server answered with an error status, as opposed to the
    /// request never producing a usable response.
    pub fn is_http(&self) -> bool {
        matches!(self, FetchError::Http { .. })
    }

    /// Get error type string for log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Http { .. } => "http_error",
            FetchError::Transport(_) => "transport_error",
            FetchError::Parse(_) => "parse_error",
            FetchError::MissingCredential { .. } => "missing_credential",
            FetchError::InvalidUrl(_) => "invalid_url",
        }
    }
}
