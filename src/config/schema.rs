//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! bootstrap. All types derive Serde traits for deserialization from the
//! optional override file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the service bootstrap.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Listener configuration (bind address, backlog).
    pub listener: ListenerConfig,

    /// Application entry point to serve.
    pub entrypoint: EntryPointConfig,

    /// Restart-on-source-change behavior.
    pub reload: ReloadConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. All interfaces on the fixed service port.
    pub bind_address: String,

    /// Listen backlog passed to the socket.
    pub backlog: u32,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8006".to_string(),
            backlog: 1024,
        }
    }
}

/// Named application entry point, resolved against the registry at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EntryPointConfig {
    /// Target in `module:attribute` form (the dotted `module.attribute`
    /// spelling is also accepted).
    pub target: String,
}

impl Default for EntryPointConfig {
    fn default() -> Self {
        Self {
            target: "status:app".to_string(),
        }
    }
}

/// Restart-on-change configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReloadConfig {
    /// Enable the source-tree watcher.
    pub enabled: bool,

    /// Paths watched recursively for changes.
    pub paths: Vec<PathBuf>,

    /// Quiet window after an emitted event; changes inside it are coalesced.
    pub debounce_ms: u64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            paths: vec![PathBuf::from(".")],
            debounce_ms: 300,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
