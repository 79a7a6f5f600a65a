//! Error types for the Slack notifier.

use thiserror::Error;
use wildfly_monitor::TransportError;

/// Result type alias for Slack operations.
pub type Result<T> = std::result::Result<T, SlackError>;

/// Errors that can occur while posting to Slack.
#[derive(Error, Debug)]
pub enum SlackError {
    /// Slack answered with a non-success status.
    #[error("Request Error: Http Status is {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<SlackError> for TransportError {
    fn from(err: SlackError) -> Self {
        match err {
            SlackError::Status { status, body } => TransportError::Status { status, body },
            other => TransportError::Request(other.to_string()),
        }
    }
}
