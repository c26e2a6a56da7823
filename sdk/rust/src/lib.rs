//! Typed client for the portfolio site's JSON API.

pub mod client;

pub use client::{
    Mount, NavItem, NavigationResponse, ResolveResponse, RoutesResponse, SiteClient, SystemStatus,
};
