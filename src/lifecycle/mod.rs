//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → metrics → registry / entry point check → watcher → serve loop
//!
//! Shutdown (shutdown.rs):
//!     Signal received → broadcast → stop accepting → drain → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: any failure before the listener binds is fatal
//! - Traffic only when ready: the serve loop starts last
//! - Restart-on-crash is an orchestrator concern, not handled here

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
