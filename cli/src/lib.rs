//! WildFly state monitor binary support.
//!
//! Wires configuration, logging, the Slack sink and signal handling around
//! [`wildfly_monitor::StateMonitor`].

pub mod cli;
pub mod hostname;
pub mod logging;
pub mod shutdown;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use wildfly_monitor::{CancellationToken, Config, Dispatcher, StateMonitor};
use wildfly_slack::SlackNotifier;

pub use cli::Cli;

/// Run the monitor to completion and map the outcome to an exit status.
pub async fn run(cli: Cli) -> ExitCode {
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            logging::init_stderr();
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let _guard = match logging::init(config.app.log_path.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            logging::init_stderr();
            error!(error = %e, "Failed to set up logging");
            return ExitCode::FAILURE;
        }
    };

    match monitor(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Monitoring stopped with an error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn monitor(config: Config) -> Result<()> {
    let filter = config.notify_filter()?;
    if !filter.is_empty() {
        info!(
            markers = ?filter.names().collect::<Vec<_>>(),
            "Notifying only selected markers"
        );
    }

    let sink = Arc::new(SlackNotifier::new(&config.slack.api_url));
    let dispatcher =
        Dispatcher::new(sink, &config.slack.channel, hostname::get()).with_filter(filter);
    let monitor = StateMonitor::new(config.marker_dir(), config.poll_interval(), dispatcher)
        .with_comparison(config.comparison());

    let shutdown = CancellationToken::new();
    shutdown::install(shutdown.clone()).context("failed to install signal handlers")?;

    let result = monitor.run(shutdown).await;
    info!("End Monitoring");
    result?;

    Ok(())
}
