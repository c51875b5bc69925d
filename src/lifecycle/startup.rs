//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize observability (metrics exporter, when enabled)
//! - Resolve the application entry point before anything binds (fail fast)
//! - Start background tasks (signal listener, source watcher)
//! - Hand control to the serve loop last, so traffic starts only when ready

use thiserror::Error;
use tokio::sync::mpsc;

use crate::app::entrypoint::EntryPoint;
use crate::app::{AppRegistry, ResolveError};
use crate::config::BootstrapConfig;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::reload::{SourceWatcher, Supervisor, SupervisorError};

/// Error type for startup. All variants abort the process with a non-zero
/// exit before or during the serve loop.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to start source watcher: {0}")]
    Watch(#[from] notify::Error),

    #[error(transparent)]
    Supervisor(#[from] SupervisorError),
}

/// Bring the service up in dependency order and run it to completion.
pub async fn run(config: BootstrapConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let registry = AppRegistry::with_builtins();

    // Fail fast: the entry point must resolve before the listener binds.
    let entry = EntryPoint::parse(&config.entrypoint.target)?;
    registry.resolve(&entry)?;
    tracing::info!(entrypoint = %entry, "Entry point resolved");

    let shutdown = Shutdown::new();
    signals::spawn(shutdown.clone());

    // The watcher guard must outlive the serve loop; events stop when it
    // drops, which the supervisor treats as reload disabled.
    let (reload_rx, _watcher) = if config.reload.enabled {
        let (watcher, rx) = SourceWatcher::new(&config.reload);
        let guard = watcher.run()?;
        (rx, Some(guard))
    } else {
        let (_tx, rx) = mpsc::unbounded_channel();
        (rx, None)
    };

    let supervisor = Supervisor::new(config, registry, reload_rx, shutdown.subscribe());
    supervisor.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_entry_point_aborts_startup() {
        let mut config = BootstrapConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.entrypoint.target = "missing:app".into();
        config.reload.enabled = false;

        let err = run(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Resolve(_)));
    }
}
