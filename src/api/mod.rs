//! JSON API over the route registry.
//!
//! # Endpoints
//! - `GET /api/status` — version and match strategy
//! - `GET /api/routes` — rendered route tree and flattened match order
//! - `GET /api/resolve?path=` — resolution of one path
//! - `GET /api/navigation?path=` — nav items and layout state for a path
//! - `GET /api/profile` — static profile content

pub mod handlers;

use axum::{routing::get, Router};

use self::handlers::*;
use crate::http::server::AppState;

pub fn setup_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/routes", get(get_routes))
        .route("/api/resolve", get(get_resolve))
        .route("/api/navigation", get(get_navigation))
        .route("/api/profile", get(get_profile))
}
