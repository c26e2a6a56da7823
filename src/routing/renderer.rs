//! Route tree materialization.
//!
//! Turns registry descriptors into an explicit tree of [`RouteNode`]s for
//! whatever consumes nested routing configuration. The page server picks page
//! bodies from the linearized mount table; `/api/routes` serves both.

use serde::Serialize;

use crate::pages::PageId;
use crate::routing::descriptor::RouteDescriptor;

/// One node of the rendered route tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteNode {
    /// A path bound directly to a page.
    Leaf { path: String, page: PageId },

    /// A wrapper with no content of its own. `index` is rendered at the
    /// parent path itself; children are mounted beneath it.
    Parent {
        path: String,
        index: PageId,
        children: Vec<RouteNode>,
    },
}

impl RouteNode {
    /// Linearize the subtree into `(mount path, page)` pairs in render order.
    pub fn mount_paths(&self) -> Vec<(String, PageId)> {
        let mut out = Vec::new();
        self.collect_mounts("", &mut out);
        out
    }

    fn collect_mounts(&self, base: &str, out: &mut Vec<(String, PageId)>) {
        match self {
            RouteNode::Leaf { path, page } => out.push((join(base, path), *page)),
            RouteNode::Parent { path, index, children } => {
                let full = join(base, path);
                out.push((full.clone(), *index));
                for child in children {
                    child.collect_mounts(&full, out);
                }
            }
        }
    }
}

/// Render routes in declaration order, recursing into children.
pub fn render_routes<'a, I>(routes: I) -> Vec<RouteNode>
where
    I: IntoIterator<Item = &'a RouteDescriptor>,
{
    routes.into_iter().map(render_route).collect()
}

fn render_route(route: &RouteDescriptor) -> RouteNode {
    if route.is_parent() {
        RouteNode::Parent {
            path: route.path.clone(),
            index: route.page,
            children: render_routes(&route.children),
        }
    } else {
        RouteNode::Leaf {
            path: route.path.clone(),
            page: route.page,
        }
    }
}

/// Join a child path under its parent. Absolute child paths are kept as is.
fn join(base: &str, path: &str) -> String {
    if base.is_empty() || path.starts_with('/') {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}
