//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! bootstrap.toml (optional)
//!     → loader.rs (parse & deserialize, defaults when absent)
//!     → validation.rs (semantic checks)
//!     → BootstrapConfig (validated, immutable)
//!     → handed to lifecycle::startup
//! ```
//!
//! # Design Decisions
//! - Defaults reproduce the fixed launch values: bind `0.0.0.0:8006`,
//!   entry point `status:app`, reload enabled.
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BootstrapConfig;
pub use schema::EntryPointConfig;
pub use schema::ListenerConfig;
pub use schema::ReloadConfig;
