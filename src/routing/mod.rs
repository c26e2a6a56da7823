//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     page factories
//!     → descriptor.rs (RouteDescriptor per page)
//!     → registry.rs (named, ordered, frozen)
//!
//! Navigation event (requested path):
//!     registry.flatten_all() (pre-order)
//!     → matcher.rs (exact / prefix, strategy tie-break)
//!     → Return: matched route or None (fallback)
//!
//! Rendering:
//!     registry.all_routes()
//!     → renderer.rs (explicit RouteNode tree)
//! ```
//!
//! # Design Decisions
//! - Registry is immutable after build and shared by reference
//! - No regex (plain string prefix matching)
//! - Deterministic: same registry and path always give the same route

pub mod descriptor;
pub mod matcher;
pub mod registry;
pub mod renderer;

pub use descriptor::{RouteDescriptor, RouteParams, ROOT_PATH};
pub use matcher::{is_active, MatchKind, MatchStrategy, RouteMatch, RouteMatcher};
pub use registry::{RegistryError, RouteName, RouteRegistry};
pub use renderer::{render_routes, RouteNode};
