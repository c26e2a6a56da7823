//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build registry → Start watcher → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger → every subscriber's receiver resolves → server drains
//!
//! Signals (signals.rs):
//!     Ctrl+C / SIGTERM or an explicit trigger → graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after the registry is built

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
