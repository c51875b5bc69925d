//! Application entry point resolution.
//!
//! The bootstrap does not know what it serves. It is handed a named entry
//! point (`module:attribute`), looks the name up in the [`AppRegistry`], and
//! gets back a factory that builds the application router. Everything behind
//! that router is the application's own business.
//!
//! # Data Flow
//! ```text
//! entrypoint.target ("status:app")
//!     → entrypoint.rs (parse into module + attribute)
//!     → registry.rs  (resolve to an AppFactory)
//!     → AppFactory::build() per serve generation
//!     → axum::Router handed to the HTTP server
//! ```

pub mod entrypoint;
pub mod registry;
pub mod status;

use axum::Router;
use thiserror::Error;

pub use entrypoint::EntryPoint;
pub use registry::AppRegistry;

/// Builds the application router served by the bootstrap.
///
/// `build` is called once per serve generation, so a restart observes a
/// freshly constructed application rather than carried-over state.
pub trait AppFactory: Send + Sync {
    fn build(&self) -> Router;
}

/// Error type for entry point parsing and resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("malformed entry point `{0}`: expected `module:attribute`")]
    Malformed(String),

    #[error("no application module named `{0}` is registered")]
    UnknownModule(String),

    #[error("module `{module}` has no attribute `{attribute}`")]
    UnknownAttribute { module: String, attribute: String },
}
