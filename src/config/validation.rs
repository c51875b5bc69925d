//! Configuration validation.
//!
//! Serde handles syntactic checks; this module covers the semantic ones:
//! addresses must parse, timeouts must be non-zero, the entry point must at
//! least be well-formed before startup tries to resolve it. All errors are
//! collected and reported together rather than stopping at the first.

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

use crate::app::entrypoint::EntryPoint;
use crate::app::ResolveError;
use crate::config::schema::BootstrapConfig;

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.backlog must be greater than zero")]
    ZeroBacklog,

    #[error("entrypoint.target: {0}")]
    EntryPoint(ResolveError),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("reload.paths must not be empty when reload is enabled")]
    NoWatchPaths,

    #[error("reload.debounce_ms must be greater than zero when reload is enabled")]
    ZeroDebounce,

    #[error("observability.metrics_address `{0}` is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// All validation failures for one config, joined for display.
#[derive(Debug)]
pub struct ValidationReport(pub Vec<ValidationError>);

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

/// Validate a deserialized configuration.
///
/// Pure function; returns every failure, not just the first.
pub fn validate_config(config: &BootstrapConfig) -> Result<(), ValidationReport> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.backlog == 0 {
        errors.push(ValidationError::ZeroBacklog);
    }

    if let Err(e) = EntryPoint::parse(&config.entrypoint.target) {
        errors.push(ValidationError::EntryPoint(e));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.reload.enabled {
        if config.reload.paths.is_empty() {
            errors.push(ValidationError::NoWatchPaths);
        }
        if config.reload.debounce_ms == 0 {
            errors.push(ValidationError::ZeroDebounce);
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport(errors))
    }
}
