//! Shared utilities for bootstrap integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use service_bootstrap::app::AppRegistry;
use service_bootstrap::config::BootstrapConfig;
use service_bootstrap::lifecycle::Shutdown;
use service_bootstrap::reload::{ReloadEvent, Supervisor, SupervisorError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A bootstrap instance running in-process for one test.
#[allow(dead_code)]
pub struct BootstrapHandle {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub reload_tx: mpsc::UnboundedSender<ReloadEvent>,
    pub task: JoinHandle<Result<(), SupervisorError>>,
}

/// Default config bound to a fixed loopback port.
pub fn test_config(port: u16) -> BootstrapConfig {
    let mut config = BootstrapConfig::default();
    config.listener.bind_address = format!("127.0.0.1:{port}");
    config
}

/// Spawn a supervisor over the builtin registry. Reload events are injected
/// through the returned channel instead of a filesystem watcher.
pub fn spawn_bootstrap(config: BootstrapConfig) -> BootstrapHandle {
    let addr: SocketAddr = config.listener.bind_address.parse().unwrap();
    let shutdown = Shutdown::new();
    let (reload_tx, reload_rx) = mpsc::unbounded_channel();

    let supervisor = Supervisor::new(
        config,
        AppRegistry::with_builtins(),
        reload_rx,
        shutdown.subscribe(),
    );
    let task = tokio::spawn(supervisor.run());

    BootstrapHandle {
        addr,
        shutdown,
        reload_tx,
        task,
    }
}

/// Poll until the listener accepts a TCP connection or the deadline passes.
pub async fn wait_until_serving(addr: SocketAddr) -> bool {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    false
}

/// GET a URL, retrying through the restart window, until 200 or deadline.
#[allow(dead_code)]
pub async fn get_until_ok(client: &reqwest::Client, url: &str) -> Option<reqwest::Response> {
    for _ in 0..50 {
        if let Ok(res) = client.get(url).send().await {
            if res.status().is_success() {
                return Some(res);
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    None
}
