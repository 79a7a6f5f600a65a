//! Error types for the state monitor.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors that can occur in the state monitor.
///
/// Every variant is fatal: configuration problems stop the process before the
/// polling loop starts, and an unreadable marker directory ends the loop.
/// Notification failures are reported through [`TransportError`] instead and
/// never surface here.
///
/// [`TransportError`]: crate::sink::TransportError
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Config file could not be read.
    #[error("not found config file: {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the expected shape.
    #[error("parse error config file: {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required setting is missing or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An allow-list entry names no known marker.
    #[error("unknown marker in notify_marker: {0}")]
    UnknownMarker(String),

    /// Marker directory could not be listed.
    #[error("failed to read marker directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

