//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the API and page handlers
//! - Wire up middleware (timeout, security headers, request ID, tracing)
//! - Bind server to listener
//! - Resolve every page request through the route registry
//! - Swap in reloaded configuration without restarting

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::setup_api_router;
use crate::config::SiteConfig;
use crate::content::Profile;
use crate::http::response::{render_page, PageError};
use crate::lifecycle::signals::shutdown_signal;
use crate::navigation::LayoutState;
use crate::observability::metrics;
use crate::pages::{site_registry, PageId};
use crate::routing::{render_routes, RegistryError, RouteName, RouteNode, RouteRegistry};

/// Header reporting how the page path was resolved.
pub const X_ROUTE_MATCH: &str = "x-route-match";

/// Everything a request needs, rebuilt on config reload.
#[derive(Debug)]
pub struct SiteState {
    pub registry: RouteRegistry,
    pub hidden_nav: Vec<RouteName>,
    pub profile: Profile,
    /// `(full path, page)` pairs from the rendered route tree.
    pub mounts: Vec<(String, PageId)>,
}

impl SiteState {
    pub fn new(registry: RouteRegistry, hidden_nav: Vec<RouteName>, profile: Profile) -> Self {
        let mounts = render_routes(registry.all_routes())
            .iter()
            .flat_map(RouteNode::mount_paths)
            .collect();
        Self {
            registry,
            hidden_nav,
            profile,
            mounts,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, RegistryError> {
        Ok(Self::new(
            site_registry(config.routing.strategy)?,
            config.routing.hidden_nav.clone(),
            Profile::load(),
        ))
    }

    /// The page mounted at exactly `path`, if any.
    pub fn mounted_page(&self, path: &str) -> Option<PageId> {
        self.mounts
            .iter()
            .find(|(mount, _)| mount == path)
            .map(|(_, page)| *page)
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<ArcSwap<SiteState>>,
}

/// HTTP server for the portfolio site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, RegistryError> {
        let site = SiteState::from_config(&config)?;
        tracing::info!(
            routes = site.registry.flatten_all().len(),
            strategy = ?site.registry.strategy(),
            "Route registry built"
        );

        let state = AppState {
            inner: Arc::new(ArcSwap::from_pointee(site)),
        };
        let router = Self::build_router(&config, state.clone());

        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        Router::new()
            .merge(setup_api_router())
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires or the process is signalled.
    ///
    /// Configs arriving on `config_updates` replace the site state in place.
    /// Only the routing section takes effect; other changed sections are
    /// logged and keep their startup values.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SiteConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let inner = self.state.inner.clone();
        let startup = self.config;
        tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                let ignored = startup.restart_required(&config);
                if !ignored.is_empty() {
                    tracing::warn!(
                        sections = ?ignored,
                        "Reloaded config changes sections that need a restart; keeping startup values"
                    );
                }
                match SiteState::from_config(&config) {
                    Ok(site) => {
                        inner.store(Arc::new(site));
                        tracing::info!(strategy = ?config.routing.strategy, "Site state swapped");
                    }
                    Err(e) => tracing::error!(error = %e, "Rejected reloaded config"),
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Page handler.
/// Resolves the path and renders either the page shell or the fallback shell.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Result<Response, PageError> {
    let start = Instant::now();
    let site = state.inner.load();
    let path = uri.path();

    let layout = LayoutState::for_path(&site.registry, path);
    let kind = match &layout {
        LayoutState::Content { page, kind, .. } => {
            tracing::debug!(path = %path, page = ?page, kind = ?kind, "Route resolved");
            Some(*kind)
        }
        LayoutState::Fallback => {
            tracing::debug!(path = %path, "No route matched, serving fallback");
            None
        }
    };
    let match_header = kind.map(|k| k.as_str()).unwrap_or("none");

    metrics::record_resolution(kind);
    metrics::record_page(layout.is_fallback());

    let html = render_page(&site, path, &layout)?;
    metrics::record_latency("page", start);

    Ok((
        StatusCode::OK,
        [(HeaderName::from_static(X_ROUTE_MATCH), HeaderValue::from_static(match_header))],
        Html(html),
    )
        .into_response())
}
