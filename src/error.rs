use thiserror::Error;

/// Errors that can occur while talking to the recipe provider or setting up the app
#[derive(Error, Debug)]
pub enum HubError {
    /// Transport-level failure (DNS, connection, timeout)
    #[error("Failed to fetch: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Provider is unavailable for a reason reported as plain text
    #[error("{0}")]
    Unavailable(String),

    /// Command cannot be applied to the current page
    #[error("{0}")]
    Unsupported(String),

    /// Configured base address is not a usable URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Parse(err.to_string())
    }
}
