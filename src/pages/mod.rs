//! Site pages and their route factories.
//!
//! Each page exposes a zero-argument factory returning its route descriptor.
//! [`site_registry`] calls every factory exactly once, in navigation order.

use serde::Serialize;

use crate::routing::{MatchStrategy, RegistryError, RouteDescriptor, RouteName, RouteRegistry};

/// Handle for a renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    About,
    Companies,
    Communities,
    Contact,
}

impl PageId {
    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Companies => "Companies",
            PageId::Communities => "Communities",
            PageId::Contact => "Contact",
        }
    }

    /// Meta description.
    pub fn description(&self) -> &'static str {
        match self {
            PageId::Home => "Welcome to the world of possibilities!",
            PageId::About => "Information about me as a human being",
            PageId::Companies => "Companies I started or worked with",
            PageId::Communities => "Communities I belong to",
            PageId::Contact => "Send me a quick one",
        }
    }
}

pub fn home_route() -> RouteDescriptor {
    RouteDescriptor::new("/", PageId::Home)
}

pub fn about_route() -> RouteDescriptor {
    RouteDescriptor::new("/about", PageId::About)
}

pub fn companies_route() -> RouteDescriptor {
    RouteDescriptor::new("/companies", PageId::Companies).with_path_view("/companies#{slug}")
}

pub fn communities_route() -> RouteDescriptor {
    RouteDescriptor::new("/communities", PageId::Communities)
}

pub fn contact_route() -> RouteDescriptor {
    RouteDescriptor::new("/contact", PageId::Contact)
}

/// Build the site's registry.
pub fn site_registry(strategy: MatchStrategy) -> Result<RouteRegistry, RegistryError> {
    RouteRegistry::builder()
        .strategy(strategy)
        .register(RouteName::Home, home_route())
        .register(RouteName::About, about_route())
        .register(RouteName::Companies, companies_route())
        .register(RouteName::Communities, communities_route())
        .register(RouteName::Contact, contact_route())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteParams;

    #[test]
    fn test_site_registry_order() {
        let registry = site_registry(MatchStrategy::default()).unwrap();
        let pages: Vec<PageId> = registry.all_routes().iter().map(|r| r.page).collect();
        assert_eq!(
            pages,
            vec![
                PageId::Home,
                PageId::About,
                PageId::Companies,
                PageId::Communities,
                PageId::Contact,
            ]
        );
    }

    #[test]
    fn test_company_link_targets_section() {
        let registry = site_registry(MatchStrategy::default()).unwrap();
        let companies = registry.companies().unwrap();
        let params = RouteParams {
            slug: Some("serchservice".into()),
            ..Default::default()
        };
        assert_eq!(companies.link_to(&params), "/companies#serchservice");
        assert_eq!(companies.link_to(&RouteParams::default()), "/companies#{slug}");
    }

    #[test]
    fn test_every_route_resolves_to_itself() {
        let registry = site_registry(MatchStrategy::default()).unwrap();
        for route in registry.flatten_all() {
            let m = registry.resolve(&route.path).unwrap();
            assert_eq!(m.route, route);
        }
    }
}
