//! Binary entry point for the service bootstrap.

use std::path::Path;

use service_bootstrap::config::loader;
use service_bootstrap::lifecycle::startup;
use service_bootstrap::observability::logging;

/// Optional override file; absent, the fixed defaults apply.
const CONFIG_PATH: &str = "bootstrap.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = loader::load_or_default(Path::new(CONFIG_PATH))?;

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        entrypoint = %config.entrypoint.target,
        reload_enabled = config.reload.enabled,
        "service-bootstrap starting"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
