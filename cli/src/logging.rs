//! Log sink setup.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON log subscriber.
///
/// Logs are appended to `log_path` when set, and written to stdout otherwise.
/// The returned guard flushes buffered lines on drop and must be held for the
/// life of the process.
pub fn init(log_path: Option<&Path>) -> Result<WorkerGuard> {
    let (writer, guard) = match log_path.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed open log file. {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(guard)
}

/// Install a plain stderr subscriber, for errors raised before the configured
/// log sink is available.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unwritable_log_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("monitor.log");

        let err = init(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed open log file."));
    }
}
