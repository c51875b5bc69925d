//! Restart-on-source-change subsystem.
//!
//! # Data Flow
//! ```text
//! source tree
//!     → watcher.rs (notify events, filtered + debounced)
//!     → ReloadEvent over an unbounded channel
//!     → supervisor.rs (serve loop)
//!     → drop listener → rebuild app → rebind → serve again
//! ```
//!
//! # Design Decisions
//! - Reload restarts the serve loop in-process; the listener visibly drops
//!   and re-accepts, mirroring a re-exec without losing the process
//! - A dead watcher degrades to no-reload; it never kills the serve loop
//! - Events arriving while restarting are coalesced, not queued up

pub mod supervisor;
pub mod watcher;

pub use supervisor::{Supervisor, SupervisorError};
pub use watcher::{ReloadEvent, SourceWatcher};
