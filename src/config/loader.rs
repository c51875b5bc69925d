//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::BootstrapConfig;
use crate::config::validation::{validate_config, ValidationReport};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration validation failed: {0}")]
    Validation(ValidationReport),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<BootstrapConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: BootstrapConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the override file if present; otherwise use the fixed defaults.
pub fn load_or_default(path: &Path) -> Result<BootstrapConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(BootstrapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_file() {
        let file = write_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:8006"
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8006");
    }

    #[test]
    fn rejects_malformed_toml() {
        let file = write_config("listener = not-a-table");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_semantically_invalid_file() {
        let file = write_config(
            r#"
            [listener]
            bind_address = "no-port"
            "#,
        );
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_or_default(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8006");
    }
}
