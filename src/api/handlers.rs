use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::Profile;
use crate::http::server::AppState;
use crate::navigation::{nav_items, LayoutState, NavItem};
use crate::observability::metrics;
use crate::pages::PageId;
use crate::routing::{render_routes, MatchKind, MatchStrategy, RouteName, RouteNode, ROOT_PATH};

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    #[serde(default = "root_path")]
    pub path: String,
}

fn root_path() -> String {
    ROOT_PATH.to_string()
}

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub strategy: MatchStrategy,
}

#[derive(Serialize)]
pub struct RoutesResponse {
    pub strategy: MatchStrategy,
    pub routes: Vec<RouteNode>,
    /// Paths in the order the matcher scans them.
    pub match_order: Vec<String>,
    /// Full paths that carry a page body.
    pub mounts: Vec<Mount>,
}

#[derive(Serialize)]
pub struct Mount {
    pub path: String,
    pub page: PageId,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub path: String,
    pub matched: bool,
    pub kind: Option<MatchKind>,
    pub route: Option<RouteName>,
    pub route_path: Option<String>,
    pub page: Option<PageId>,
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub path: String,
    pub items: Vec<NavItem>,
    pub layout: LayoutState,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let site = state.inner.load();
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        strategy: site.registry.strategy(),
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let site = state.inner.load();
    Json(RoutesResponse {
        strategy: site.registry.strategy(),
        routes: render_routes(site.registry.all_routes()),
        match_order: site
            .registry
            .flatten_all()
            .iter()
            .map(|r| r.path.clone())
            .collect(),
        mounts: site
            .mounts
            .iter()
            .map(|(path, page)| Mount {
                path: path.clone(),
                page: *page,
            })
            .collect(),
    })
}

pub async fn get_resolve(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<ResolveResponse> {
    let start = Instant::now();
    let site = state.inner.load();
    let resolved = site.registry.resolve(&query.path);

    metrics::record_resolution(resolved.map(|m| m.kind));
    tracing::debug!(
        path = %query.path,
        kind = ?resolved.map(|m| m.kind),
        "Resolve requested"
    );

    let response = ResolveResponse {
        matched: resolved.is_some(),
        kind: resolved.map(|m| m.kind),
        route: resolved.and_then(|m| site.registry.name_of(m.route)),
        route_path: resolved.map(|m| m.route.path.clone()),
        page: resolved.map(|m| m.route.page),
        path: query.path,
    };
    metrics::record_latency("resolve", start);
    Json(response)
}

pub async fn get_navigation(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<NavigationResponse> {
    let site = state.inner.load();
    Json(NavigationResponse {
        items: nav_items(&site.registry, &query.path, &site.hidden_nav),
        layout: LayoutState::for_path(&site.registry, &query.path),
        path: query.path,
    })
}

pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.inner.load().profile.clone())
}
