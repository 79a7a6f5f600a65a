//! Termination signal handling.

use tracing::info;
use wildfly_monitor::CancellationToken;

/// Cancel `token` on SIGINT or SIGTERM.
///
/// Both handlers are registered before this returns, so a signal delivered
/// right after startup is not lost.
#[cfg(unix)]
pub fn install(token: CancellationToken) -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => info!("received SIGINT, initiating graceful shutdown"),
            _ = sigterm.recv() => info!("received SIGTERM, initiating graceful shutdown"),
            () = token.cancelled() => return,
        }
        token.cancel();
    });

    Ok(())
}

/// Cancel `token` on Ctrl+C.
#[cfg(not(unix))]
pub fn install(token: CancellationToken) -> std::io::Result<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
                    return;
                }
                info!("received Ctrl+C, initiating graceful shutdown");
            }
            () = token.cancelled() => return,
        }
        token.cancel();
    });

    Ok(())
}
