//! # Slack
//!
//! Slack incoming-webhook implementation of
//! [`wildfly_monitor::NotificationSink`].
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wildfly_monitor::Dispatcher;
//! use wildfly_slack::SlackNotifier;
//!
//! let sink = Arc::new(SlackNotifier::new("https://hooks.slack.com/services/..."));
//! let dispatcher = Dispatcher::new(sink, "#deploy", hostname);
//! ```

pub mod client;
pub mod error;
pub mod payload;

pub use client::SlackNotifier;
pub use error::{Result, SlackError};
pub use payload::{Attachment, AttachmentField, SlackPayload};
