//! Portfolio site: route registry, matcher and page server.

pub mod api;
pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod pages;
pub mod routing;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteDescriptor, RouteRegistry};
