//! Filtered notification dispatch.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::filter::NotifyFilter;
use crate::marker::Marker;
use crate::sink::{FormattedMessage, NotificationSink};

/// Field label carrying the host the monitor runs on.
pub const HOSTNAME_FIELD: &str = "HostName";

/// Field label carrying the marker description.
pub const MESSAGE_FIELD: &str = "Message";

/// Outcome of dispatching one batch of markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Notifications delivered.
    pub sent: usize,

    /// Markers dropped by the filter.
    pub skipped: usize,

    /// Notifications the sink failed to deliver.
    pub failed: usize,
}

/// Sends one notification per allowed marker.
pub struct Dispatcher {
    sink: Arc<dyn NotificationSink>,
    channel: String,
    hostname: String,
    filter: NotifyFilter,
}

impl Dispatcher {
    /// Create a dispatcher delivering to `channel` through `sink`.
    pub fn new(
        sink: Arc<dyn NotificationSink>,
        channel: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            channel: channel.into(),
            hostname: hostname.into(),
            filter: NotifyFilter::allow_all(),
        }
    }

    /// Restrict notifications to the markers allowed by `filter`.
    pub fn with_filter(mut self, filter: NotifyFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &NotifyFilter {
        &self.filter
    }

    /// Build the notification for `marker`.
    pub fn format(&self, marker: &Marker) -> FormattedMessage {
        FormattedMessage::new(marker.description, marker.color())
            .with_field(HOSTNAME_FIELD, self.hostname.as_str())
            .with_field(MESSAGE_FIELD, marker.description)
    }

    /// Notify every allowed marker, in order.
    ///
    /// Sink failures are logged and counted; they never stop the batch.
    /// Delivery is at most once.
    pub async fn dispatch<'a, I>(&self, markers: I) -> DispatchReport
    where
        I: IntoIterator<Item = &'a &'static Marker>,
    {
        let mut report = DispatchReport::default();

        for marker in markers {
            info!(
                name = marker.name,
                description = marker.description,
                "Change State"
            );

            if !self.filter.allows(marker) {
                debug!(name = marker.name, "Marker not in notify list, skipping");
                report.skipped += 1;
                continue;
            }

            let message = self.format(marker);
            match self.sink.send(&self.channel, &message).await {
                Ok(()) => {
                    info!(
                        sink = self.sink.name(),
                        channel = %self.channel,
                        color = %message.color,
                        "Send notification"
                    );
                    report.sent += 1;
                }
                Err(e) => {
                    error!(
                        sink = self.sink.name(),
                        name = marker.name,
                        error = %e,
                        "Failed to send notification"
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::sink::{FormattedMessage, NotificationSink, TransportError};

    /// Sink that records messages and fails for selected descriptions.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) sent: Mutex<Vec<(String, FormattedMessage)>>,
        pub(crate) fail_on: Vec<&'static str>,
    }

    impl RecordingSink {
        pub(crate) fn failing_on(fail_on: Vec<&'static str>) -> Self {
            Self {
                fail_on,
                ..Default::default()
            }
        }

        pub(crate) fn messages(&self) -> Vec<FormattedMessage> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        async fn send(
            &self,
            channel: &str,
            message: &FormattedMessage,
        ) -> Result<(), TransportError> {
            if self.fail_on.contains(&message.fallback.as_str()) {
                return Err(TransportError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            self.sent
                .lock()
                .unwrap()
                .push((channel.to_string(), message.clone()));
            Ok(())
        }
    }

    /// Sink whose sends never complete.
    pub(crate) struct HangingSink;

    #[async_trait]
    impl NotificationSink for HangingSink {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn send(&self, _: &str, _: &FormattedMessage) -> Result<(), TransportError> {
            std::future::pending().await
        }
    }
}
