//! The polling loop.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::dispatch::{DispatchReport, Dispatcher};
use crate::error::Result;
use crate::sampler;
use crate::state::{ObservedState, StateComparison, has_changed};

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// First sample of the run, recorded without notifying.
    Baseline,

    /// Nothing changed since the previous sample.
    Unchanged,

    /// The state changed and the new state was dispatched.
    Changed(DispatchReport),
}

/// Polls a marker directory and notifies on state changes.
///
/// The monitor owns the only mutable state of a run: the baseline the next
/// sample is compared against.
pub struct StateMonitor {
    /// Directory holding the marker files.
    marker_dir: PathBuf,

    /// Time between samples.
    interval: Duration,

    /// How consecutive samples are compared.
    comparison: StateComparison,

    /// Notification dispatch.
    dispatcher: Dispatcher,

    /// Last observed state, `None` until the first sample.
    baseline: Option<ObservedState>,
}

impl StateMonitor {
    /// Create a monitor for `marker_dir`.
    pub fn new(marker_dir: impl Into<PathBuf>, interval: Duration, dispatcher: Dispatcher) -> Self {
        Self {
            marker_dir: marker_dir.into(),
            interval,
            comparison: StateComparison::default(),
            dispatcher,
            baseline: None,
        }
    }

    /// Set how consecutive samples are compared.
    pub fn with_comparison(mut self, comparison: StateComparison) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn marker_dir(&self) -> &Path {
        &self.marker_dir
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The state the next sample is compared against.
    pub fn baseline(&self) -> Option<&ObservedState> {
        self.baseline.as_ref()
    }

    /// Sample the directory once and dispatch if the state changed.
    ///
    /// Dispatch is awaited inline with no timeout, so a sink that never
    /// answers stalls the poll.
    pub async fn poll_once(&mut self) -> Result<PollOutcome> {
        let current = sampler::sample(&self.marker_dir)?;

        let Some(previous) = self.baseline.as_ref() else {
            debug!(markers = current.len(), "Recorded baseline state");
            self.baseline = Some(current);
            return Ok(PollOutcome::Baseline);
        };

        if !has_changed(previous, &current, self.comparison) {
            return Ok(PollOutcome::Unchanged);
        }

        info!(markers = current.len(), "Change State");
        let report = self.dispatcher.dispatch(&current).await;
        self.baseline = Some(current);

        Ok(PollOutcome::Changed(report))
    }

    /// Poll until `shutdown` is cancelled.
    ///
    /// Returns `Ok(())` on shutdown and the sampling error if the marker
    /// directory becomes unreadable. Cancellation interrupts the wait between
    /// polls; it does not interrupt a dispatch in progress.
    pub async fn run(mut self, shutdown: CancellationToken) -> Result<()> {
        info!(
            dir = %self.marker_dir.display(),
            interval_secs = self.interval.as_secs(),
            "Start Monitoring..."
        );

        loop {
            if shutdown.is_cancelled() {
                break;
            }

            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {}
            }

            if let Err(e) = self.poll_once().await {
                error!(error = %e, "Failed to sample marker directory");
                return Err(e);
            }
        }

        info!("Shutdown requested, stopping monitor");
        Ok(())
    }
}
