//! Slack webhook payload.

use serde::{Deserialize, Serialize};
use wildfly_monitor::FormattedMessage;

/// Display name of the bot posting notifications.
pub const DEFAULT_USERNAME: &str = "Wildfly State Monitor";

/// Avatar of the bot posting notifications.
pub const DEFAULT_ICON_URL: &str = "http://design.jboss.org/wildfly/logo/final/wildfly_icon_64px.png";

/// Body of a webhook post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackPayload {
    pub channel: String,
    pub username: String,
    pub icon_url: String,
    pub attachments: Vec<Attachment>,
}

/// A colored message attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: String,
    pub color: String,
    pub fields: Vec<AttachmentField>,
}

/// A titled value inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
}

impl From<&FormattedMessage> for Attachment {
    fn from(message: &FormattedMessage) -> Self {
        Self {
            fallback: message.fallback.clone(),
            color: message.color.as_str().to_string(),
            fields: message
                .fields
                .iter()
                .map(|f| AttachmentField {
                    title: f.title.clone(),
                    value: f.value.clone(),
                })
                .collect(),
        }
    }
}

impl SlackPayload {
    /// Build a single-attachment payload for `message`.
    pub fn new(
        channel: impl Into<String>,
        username: impl Into<String>,
        icon_url: impl Into<String>,
        message: &FormattedMessage,
    ) -> Self {
        Self {
            channel: channel.into(),
            username: username.into(),
            icon_url: icon_url.into(),
            attachments: vec![Attachment::from(message)],
        }
    }
}
