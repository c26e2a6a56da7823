//! Top navigation and layout state.
//!
//! # Data Flow
//! ```text
//! current path
//!     → registry.resolve() → LayoutState (content or fallback)
//!     → is_active(link, path) per nav link → NavItem[]
//! ```

use serde::Serialize;

use crate::pages::PageId;
use crate::routing::{is_active, MatchKind, RouteName, RouteRegistry};

/// Routes shown in the top navigation, in display order.
pub const NAV_ORDER: [RouteName; 5] = [
    RouteName::Home,
    RouteName::About,
    RouteName::Companies,
    RouteName::Communities,
    RouteName::Contact,
];

/// A rendered navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: RouteName,
    pub title: &'static str,
    pub link: String,
    pub active: bool,
}

/// Build the navigation bar for `current_path`.
///
/// Names listed in `hidden` and names missing from the registry are skipped.
pub fn nav_items(registry: &RouteRegistry, current_path: &str, hidden: &[RouteName]) -> Vec<NavItem> {
    NAV_ORDER
        .iter()
        .filter(|name| !hidden.contains(name))
        .filter_map(|name| {
            registry.get(*name).map(|route| NavItem {
                name: *name,
                title: route.page.title(),
                link: route.path.clone(),
                active: is_active(&route.path, current_path),
            })
        })
        .collect()
}

/// What the layout mounts for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LayoutState {
    /// A route matched; render its page.
    Content {
        path: String,
        page: PageId,
        kind: MatchKind,
        route: Option<RouteName>,
        inverted_header: bool,
    },
    /// Nothing matched yet; render the loading indicator.
    Fallback,
}

impl LayoutState {
    pub fn for_path(registry: &RouteRegistry, path: &str) -> Self {
        match registry.resolve(path) {
            Some(m) => {
                let route = registry.name_of(m.route);
                LayoutState::Content {
                    path: m.route.path.clone(),
                    page: m.route.page,
                    kind: m.kind,
                    route,
                    inverted_header: route == Some(RouteName::About),
                }
            }
            None => LayoutState::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LayoutState::Fallback)
    }

    pub fn page(&self) -> Option<PageId> {
        match self {
            LayoutState::Content { page, .. } => Some(*page),
            LayoutState::Fallback => None,
        }
    }
}
