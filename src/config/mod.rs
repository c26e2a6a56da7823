//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → registry + navigation settings built from it
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server rebuilds its state and swaps it atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - Only `[routing]` is hot-reloadable. `[listener]`, `[timeouts]` and
//!   `[observability]` are read at startup; the server logs a warning when a
//!   reload changes them (see [`SiteConfig::restart_required`])
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, RoutingConfig, SiteConfig, TimeoutConfig};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
