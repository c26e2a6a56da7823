//! Route registry.
//!
//! # Responsibilities
//! - Own the canonical, ordered set of top-level routes
//! - Flatten the route tree for matching
//! - Named lookup of well-known routes
//!
//! # Design Decisions
//! - Built once through [`RegistryBuilder`], immutable afterwards
//! - Passed around by reference / `Arc`, never a global
//! - Declaration order is preserved everywhere (render and match order)

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::descriptor::RouteDescriptor;
use crate::routing::matcher::{MatchStrategy, RouteMatch, RouteMatcher};

/// Logical names of the site's registered routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteName {
    Home,
    About,
    Companies,
    Communities,
    Contact,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::About => "about",
            RouteName::Companies => "companies",
            RouteName::Communities => "communities",
            RouteName::Contact => "contact",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry construction errors. Only raised by programming mistakes.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("route name `{0}` registered twice")]
    DuplicateName(RouteName),

    #[error("path `{path}` declared twice under `{parent}`")]
    DuplicatePath { parent: String, path: String },
}

/// Builder collecting named routes in declaration order.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<(RouteName, RouteDescriptor)>,
    strategy: MatchStrategy,
}

impl RegistryBuilder {
    /// Add a named top-level route.
    pub fn register(mut self, name: RouteName, descriptor: RouteDescriptor) -> Self {
        self.entries.push((name, descriptor));
        self
    }

    /// Tie-break strategy used by [`RouteRegistry::resolve`].
    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Freeze the registry, rejecting duplicate names and sibling paths.
    pub fn build(self) -> Result<RouteRegistry, RegistryError> {
        let mut names = HashSet::new();
        for (name, _) in &self.entries {
            if !names.insert(*name) {
                return Err(RegistryError::DuplicateName(*name));
            }
        }

        let top_level: Vec<&RouteDescriptor> = self.entries.iter().map(|(_, d)| d).collect();
        check_siblings("<root>", &top_level)?;

        Ok(RouteRegistry {
            entries: self.entries,
            matcher: RouteMatcher::new(self.strategy),
        })
    }
}

fn check_siblings(parent: &str, siblings: &[&RouteDescriptor]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for route in siblings {
        if !seen.insert(route.path.as_str()) {
            return Err(RegistryError::DuplicatePath {
                parent: parent.to_string(),
                path: route.path.clone(),
            });
        }
        let children: Vec<&RouteDescriptor> = route.children.iter().collect();
        check_siblings(&route.path, &children)?;
    }
    Ok(())
}

/// The application's fixed set of routes.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    entries: Vec<(RouteName, RouteDescriptor)>,
    matcher: RouteMatcher,
}

impl RouteRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Top-level routes in declaration order.
    pub fn all_routes(&self) -> Vec<&RouteDescriptor> {
        self.entries.iter().map(|(_, d)| d).collect()
    }

    /// `route` followed by the depth-first, pre-order expansion of its children.
    pub fn gather_routes(route: &RouteDescriptor) -> Vec<&RouteDescriptor> {
        let mut out = vec![route];
        for child in &route.children {
            out.extend(Self::gather_routes(child));
        }
        out
    }

    /// Every route in the registry, parents before children.
    pub fn flatten_all(&self) -> Vec<&RouteDescriptor> {
        self.all_routes()
            .into_iter()
            .flat_map(Self::gather_routes)
            .collect()
    }

    /// Resolve a requested path against the flattened registry.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.matcher.resolve(path, &self.flatten_all())
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.matcher.strategy()
    }

    pub fn get(&self, name: RouteName) -> Option<&RouteDescriptor> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, d)| d)
    }

    /// Name of a top-level route, compared by identity.
    pub fn name_of(&self, route: &RouteDescriptor) -> Option<RouteName> {
        self.entries
            .iter()
            .find(|(_, d)| std::ptr::eq(d, route))
            .map(|(n, _)| *n)
    }

    pub fn home(&self) -> Option<&RouteDescriptor> {
        self.get(RouteName::Home)
    }

    pub fn about(&self) -> Option<&RouteDescriptor> {
        self.get(RouteName::About)
    }

    pub fn companies(&self) -> Option<&RouteDescriptor> {
        self.get(RouteName::Companies)
    }

    pub fn communities(&self) -> Option<&RouteDescriptor> {
        self.get(RouteName::Communities)
    }

    pub fn contact(&self) -> Option<&RouteDescriptor> {
        self.get(RouteName::Contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageId;

    fn nested_registry() -> RouteRegistry {
        RouteRegistry::builder()
            .register(RouteName::Home, RouteDescriptor::new("/", PageId::Home))
            .register(
                RouteName::About,
                RouteDescriptor::new("/about", PageId::About).with_children(vec![
                    RouteDescriptor::new("/about/skills", PageId::About).with_children(vec![
                        RouteDescriptor::new("/about/skills/music", PageId::About),
                    ]),
                    RouteDescriptor::new("/about/more", PageId::About),
                ]),
            )
            .register(RouteName::Contact, RouteDescriptor::new("/contact", PageId::Contact))
            .build()
            .unwrap()
    }

    #[test]
    fn test_all_routes_top_level_only() {
        let registry = nested_registry();
        let paths: Vec<&str> = registry.all_routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about", "/contact"]);
    }

    #[test]
    fn test_flatten_pre_order() {
        let registry = nested_registry();
        let paths: Vec<&str> = registry.flatten_all().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/about",
                "/about/skills",
                "/about/skills/music",
                "/about/more",
                "/contact",
            ]
        );
    }

    #[test]
    fn test_flatten_length_counts_descendants() {
        let registry = nested_registry();
        fn count(route: &RouteDescriptor) -> usize {
            1 + route.children.iter().map(count).sum::<usize>()
        }
        let expected: usize = registry.all_routes().into_iter().map(count).sum();
        assert_eq!(registry.flatten_all().len(), expected);
    }

    #[test]
    fn test_flatten_is_repeatable() {
        let registry = nested_registry();
        assert_eq!(registry.flatten_all(), registry.flatten_all());
    }

    #[test]
    fn test_gather_leaf() {
        let leaf = RouteDescriptor::new("/contact", PageId::Contact);
        assert_eq!(RouteRegistry::gather_routes(&leaf), vec![&leaf]);
    }

    #[test]
    fn test_named_accessors() {
        let registry = nested_registry();
        assert_eq!(registry.home().map(|r| r.path.as_str()), Some("/"));
        assert_eq!(registry.contact().map(|r| r.path.as_str()), Some("/contact"));
        assert!(registry.companies().is_none());

        let about = registry.about().unwrap();
        assert_eq!(registry.name_of(about), Some(RouteName::About));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteRegistry::builder()
            .register(RouteName::Home, RouteDescriptor::new("/", PageId::Home))
            .register(RouteName::Home, RouteDescriptor::new("/home", PageId::Home))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName(RouteName::Home));
    }

    #[test]
    fn test_duplicate_sibling_path_rejected() {
        let err = RouteRegistry::builder()
            .register(
                RouteName::About,
                RouteDescriptor::new("/about", PageId::About).with_children(vec![
                    RouteDescriptor::new("skills", PageId::About),
                    RouteDescriptor::new("skills", PageId::About),
                ]),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicatePath {
                parent: "/about".into(),
                path: "skills".into(),
            }
        );
    }
}
