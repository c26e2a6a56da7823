//! Route matching logic.
//!
//! # Responsibilities
//! - Match a requested path exactly against a route path
//! - Match a requested path by string prefix (root excluded on both sides)
//! - Pick a single route from the flattened registry
//!
//! # Design Decisions
//! - Path matching is case-sensitive, plain string comparison
//! - No regex, O(n) scan over the flattened routes
//! - Not found is `None`, never an error
//! - Tie-break between exact and prefix matches is a [`MatchStrategy`]

use serde::{Deserialize, Serialize};

use crate::routing::descriptor::{RouteDescriptor, ROOT_PATH};

/// Trait for matching a requested path against one route.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if `requested` selects `route`.
    fn matches(&self, route: &RouteDescriptor, requested: &str) -> bool;
}

/// Matches when the requested path equals the route path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn matches(&self, route: &RouteDescriptor, requested: &str) -> bool {
        route.path == requested
    }
}

/// Matches when the requested path starts with the route path.
/// The root path never matches by prefix, nor is it matched by prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixMatcher;

impl Matcher for PrefixMatcher {
    fn matches(&self, route: &RouteDescriptor, requested: &str) -> bool {
        requested.starts_with(route.path.as_str()) && !route.is_root() && requested != ROOT_PATH
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, route: &RouteDescriptor, requested: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(route, requested))
    }
}

/// How exact and prefix matches are ordered against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Scan the whole set for an exact match, then scan again for a prefix match.
    #[default]
    ExactFirst,

    /// Single scan with exact OR prefix; the first route satisfying either
    /// wins, so an earlier prefix match shadows a later exact match.
    FirstMatch,
}

/// Which condition selected the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Prefix,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
        }
    }
}

/// A resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDescriptor,
    pub kind: MatchKind,
}

/// Resolves requested paths against a flattened route list.
#[derive(Debug)]
pub struct RouteMatcher {
    strategy: MatchStrategy,
    combined: AnyMatcher,
}

impl RouteMatcher {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self {
            strategy,
            combined: AnyMatcher::new(vec![Box::new(ExactMatcher), Box::new(PrefixMatcher)]),
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Find the route for `requested` in `flattened` (pre-order registry order).
    pub fn resolve<'a>(
        &self,
        requested: &str,
        flattened: &[&'a RouteDescriptor],
    ) -> Option<RouteMatch<'a>> {
        match self.strategy {
            MatchStrategy::ExactFirst => {
                let exact = flattened
                    .iter()
                    .find(|r| ExactMatcher.matches(r, requested))
                    .map(|r| RouteMatch { route: *r, kind: MatchKind::Exact });

                exact.or_else(|| {
                    flattened
                        .iter()
                        .find(|r| PrefixMatcher.matches(r, requested))
                        .map(|r| RouteMatch { route: *r, kind: MatchKind::Prefix })
                })
            }
            MatchStrategy::FirstMatch => flattened
                .iter()
                .find(|r| self.combined.matches(r, requested))
                .map(|r| RouteMatch {
                    route: *r,
                    kind: if ExactMatcher.matches(r, requested) {
                        MatchKind::Exact
                    } else {
                        MatchKind::Prefix
                    },
                }),
        }
    }
}

impl Clone for RouteMatcher {
    fn clone(&self) -> Self {
        Self::new(self.strategy)
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new(MatchStrategy::default())
    }
}

/// Whether a navigation link should be highlighted for the current path.
///
/// Same exact-or-prefix rule as route matching; neither side may be root or
/// empty for a prefix hit.
pub fn is_active(link: &str, current: &str) -> bool {
    current == link
        || (current.starts_with(link)
            && link != ROOT_PATH
            && current != ROOT_PATH
            && !link.is_empty()
            && !current.is_empty())
}
