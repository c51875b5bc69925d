//! Service Bootstrap
//!
//! A small harness that turns a named application entry point into a running
//! HTTP service: bind a fixed port, dispatch requests to the resolved
//! application, and restart the serve loop when the source tree changes.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌─────────────────────────────────────────────────┐
//!                  │                SERVICE BOOTSTRAP                │
//!                  │                                                 │
//!   bootstrap.toml │  ┌─────────┐   ┌───────────┐   ┌─────────────┐ │
//!   ───────────────┼─▶│ config  │──▶│ lifecycle │──▶│ supervisor  │ │
//!                  │  └─────────┘   │  startup  │   │ serve loop  │ │
//!                  │                └───────────┘   └──────┬──────┘ │
//!                  │                                       │        │
//!                  │       ┌───────────────────────────────┤        │
//!                  │       ▼                               ▼        │
//!   HTTP clients   │  ┌─────────┐   ┌─────────┐   ┌──────────────┐  │
//!   ───────────────┼─▶│   net   │──▶│  http   │──▶│ app registry │  │
//!                  │  │listener │   │ server  │   │ entry point  │  │
//!                  │  └─────────┘   └─────────┘   └──────────────┘  │
//!                  │       ▲                                        │
//!   source tree    │  ┌────┴────┐   ┌─────────────────────────────┐ │
//!   ───────────────┼─▶│ reload  │   │ observability: tracing and  │ │
//!   (file change)  │  │ watcher │   │ optional metrics exporter   │ │
//!                  │  └─────────┘   └─────────────────────────────┘ │
//!                  └─────────────────────────────────────────────────┘
//! ```
//!
//! A source-file change drops the listener, rebuilds the application from its
//! factory, rebinds, and serves again. Request semantics live entirely in the
//! registered application; the bootstrap only owns the port and the restart.

// Core subsystems
pub mod app;
pub mod config;
pub mod http;
pub mod net;
pub mod reload;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::BootstrapConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
