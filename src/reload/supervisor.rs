//! Serve loop with restart-on-change.

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::app::entrypoint::EntryPoint;
use crate::app::{AppRegistry, ResolveError};
use crate::config::BootstrapConfig;
use crate::http::HttpServer;
use crate::net::{Listener, ListenerError};
use crate::observability::metrics;
use crate::reload::watcher::ReloadEvent;

/// Error type for the serve loop. Any of these is fatal to the process.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Why one serve generation ended.
enum ExitReason {
    Reload,
    Shutdown,
}

/// Owns the serve loop: resolve the entry point, bind, serve, and start over
/// whenever the source tree changes.
pub struct Supervisor {
    config: BootstrapConfig,
    registry: AppRegistry,
    reload_rx: mpsc::UnboundedReceiver<ReloadEvent>,
    shutdown_rx: broadcast::Receiver<()>,
    reload_closed: bool,
}

impl Supervisor {
    pub fn new(
        config: BootstrapConfig,
        registry: AppRegistry,
        reload_rx: mpsc::UnboundedReceiver<ReloadEvent>,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Self {
        Self {
            config,
            registry,
            reload_rx,
            shutdown_rx,
            reload_closed: false,
        }
    }

    /// Run until shutdown. Each iteration is one serve generation: the
    /// application is rebuilt and the listener rebound, so a reload is
    /// observable as the port briefly dropping and re-accepting.
    pub async fn run(mut self) -> Result<(), SupervisorError> {
        let entry = EntryPoint::parse(&self.config.entrypoint.target)?;

        loop {
            let factory = self.registry.resolve(&entry)?;
            let listener = Listener::bind(&self.config.listener).await?;
            let server = HttpServer::new(&self.config, factory.as_ref());

            let (stop_tx, stop_rx) = oneshot::channel::<()>();
            let serve = server.run(listener, async move {
                let _ = stop_rx.await;
            });

            let wait = async {
                let reason = self.wait_for_exit().await;
                let _ = stop_tx.send(());
                reason
            };

            let (reason, served) = tokio::join!(wait, serve);
            served?;

            match reason {
                ExitReason::Reload => {
                    // Coalesce changes that landed while restarting.
                    while self.reload_rx.try_recv().is_ok() {}
                    metrics::record_reload();
                    tracing::info!(entrypoint = %entry, "Restarting server after source change");
                }
                ExitReason::Shutdown => {
                    tracing::info!("Shutdown requested, leaving serve loop");
                    return Ok(());
                }
            }
        }
    }

    async fn wait_for_exit(&mut self) -> ExitReason {
        loop {
            tokio::select! {
                maybe = self.reload_rx.recv(), if !self.reload_closed => match maybe {
                    Some(event) => {
                        tracing::info!(path = %event.path.display(), "Reload triggered");
                        return ExitReason::Reload;
                    }
                    // Watcher is gone; keep serving without reload.
                    None => self.reload_closed = true,
                },
                _ = self.shutdown_rx.recv() => return ExitReason::Shutdown,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use crate::lifecycle::Shutdown;

    use super::*;

    fn test_config() -> BootstrapConfig {
        let mut config = BootstrapConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config
    }

    #[tokio::test]
    async fn unresolvable_entry_point_is_fatal() {
        let mut config = test_config();
        config.entrypoint.target = "missing:app".into();

        let shutdown = Shutdown::new();
        let (_reload_tx, reload_rx) = mpsc::unbounded_channel();
        let supervisor = Supervisor::new(
            config,
            AppRegistry::with_builtins(),
            reload_rx,
            shutdown.subscribe(),
        );

        let err = supervisor.run().await.unwrap_err();
        assert!(matches!(err, SupervisorError::Resolve(_)));
    }

    #[tokio::test]
    async fn shutdown_terminates_serve_loop() {
        let shutdown = Shutdown::new();
        let (_reload_tx, reload_rx) = mpsc::unbounded_channel();
        let supervisor = Supervisor::new(
            test_config(),
            AppRegistry::with_builtins(),
            reload_rx,
            shutdown.subscribe(),
        );

        let handle = tokio::spawn(supervisor.run());
        tokio::time::sleep(Duration::from_millis(200)).await;
        shutdown.trigger();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("supervisor should stop promptly")
            .expect("task should not panic");
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn closed_reload_channel_keeps_serving() {
        let shutdown = Shutdown::new();
        let (reload_tx, reload_rx) = mpsc::unbounded_channel::<ReloadEvent>();
        drop(reload_tx);

        let supervisor = Supervisor::new(
            test_config(),
            AppRegistry::with_builtins(),
            reload_rx,
            shutdown.subscribe(),
        );

        let handle = tokio::spawn(supervisor.run());
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!handle.is_finished(), "loop must outlive a dead watcher");

        shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("supervisor should stop promptly")
            .expect("task should not panic");
        assert!(result.is_ok());
    }
}
