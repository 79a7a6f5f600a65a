//! # WildFly Monitor
//!
//! This crate watches the deployment markers WildFly writes next to deployed
//! archives and sends a chat notification whenever the set of markers changes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       State Monitor                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  sleep / shutdown ──► sample ──► has_changed ──► Dispatcher     │
//! │                         │             │              │          │
//! │                         ▼             ▼              ▼          │
//! │                   MarkerCatalog   baseline     NotifyFilter     │
//! │                                                      │          │
//! │                                                      ▼          │
//! │                                             NotificationSink    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first sample of a run only records a baseline. After that, any change
//! re-announces every marker currently present, subject to the notify filter.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod marker;
pub mod monitor;
pub mod sampler;
pub mod sink;
pub mod state;

pub use config::Config;
pub use dispatch::{DispatchReport, Dispatcher};
pub use error::{MonitorError, Result};
pub use filter::NotifyFilter;
pub use marker::{Color, Marker, MarkerCategory};
pub use monitor::{PollOutcome, StateMonitor};
pub use sampler::sample;
pub use sink::{FormattedMessage, MessageField, NotificationSink, TransportError};
pub use state::{ObservedState, StateComparison, has_changed};

/// Re-exported so callers can drive [`StateMonitor::run`] without a direct
/// `tokio-util` dependency.
pub use tokio_util::sync::CancellationToken;
