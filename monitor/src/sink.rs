//! Notification sink abstraction.
//!
//! The monitor only knows how to build a [`FormattedMessage`]; delivering it to
//! a chat service is up to a [`NotificationSink`] implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::marker::Color;

/// A labeled value shown in a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageField {
    /// Field label.
    pub title: String,

    /// Field value.
    pub value: String,
}

impl MessageField {
    /// Create a new field.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A chat message ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    /// Short plain-text summary for clients that cannot render fields.
    pub fallback: String,

    /// Severity color.
    pub color: Color,

    /// Labeled fields.
    pub fields: Vec<MessageField>,
}

impl FormattedMessage {
    /// Create a message with no fields.
    pub fn new(fallback: impl Into<String>, color: Color) -> Self {
        Self {
            fallback: fallback.into(),
            color,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, title: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MessageField::new(title, value));
        self
    }

    /// Value of the first field with the given title.
    pub fn field(&self, title: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.title == title)
            .map(|f| f.value.as_str())
    }
}

/// Delivery of a notification failed.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The service answered with a non-success status.
    #[error("notification rejected with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request could not be completed.
    #[error("notification request failed: {0}")]
    Request(String),
}

/// Destination for deployment notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Name of this sink, for logs.
    fn name(&self) -> &str;

    /// Deliver `message` to `channel`.
    async fn send(
        &self,
        channel: &str,
        message: &FormattedMessage,
    ) -> std::result::Result<(), TransportError>;
}
