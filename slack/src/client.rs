//! Slack incoming-webhook notifier.

use async_trait::async_trait;
use tracing::debug;
use wildfly_monitor::{FormattedMessage, NotificationSink, TransportError};

use crate::error::{Result, SlackError};
use crate::payload::{DEFAULT_ICON_URL, DEFAULT_USERNAME, SlackPayload};

/// Posts notifications to a Slack incoming webhook.
///
/// The payload is sent as the `payload` field of a form-encoded body, which
/// both incoming webhooks and the legacy `chat.postMessage` hook accept.
pub struct SlackNotifier {
    /// Webhook URL.
    api_url: String,

    /// HTTP client.
    client: reqwest::Client,

    /// Bot display name.
    username: String,

    /// Bot avatar.
    icon_url: String,
}

impl SlackNotifier {
    /// Create a notifier for the given webhook URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: reqwest::Client::new(),
            username: DEFAULT_USERNAME.to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
        }
    }

    /// Set the bot display name.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the bot avatar.
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Post `message` to `channel`.
    pub async fn post(&self, channel: &str, message: &FormattedMessage) -> Result<()> {
        let payload = SlackPayload::new(channel, &self.username, &self.icon_url, message);
        let body = serde_json::to_string(&payload)?;

        debug!("Posting notification to Slack channel {channel}");

        let response = self
            .client
            .post(&self.api_url)
            .form(&[("payload", body)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationSink for SlackNotifier {
    fn name(&self) -> &str {
        "slack"
    }

    async fn send(
        &self,
        channel: &str,
        message: &FormattedMessage,
    ) -> std::result::Result<(), TransportError> {
        self.post(channel, message).await.map_err(TransportError::from)
    }
}
