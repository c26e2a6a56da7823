//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → /api/* → api handlers (JSON)
//!     → any other path → registry.resolve() → response.rs (HTML shell)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{AppState, HttpServer, SiteState, X_ROUTE_MATCH};
