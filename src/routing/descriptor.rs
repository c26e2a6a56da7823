//! Route descriptors.
//!
//! A descriptor names one navigable page: the path it is mounted at, the
//! page it renders and, for parent routes, the ordered list of child routes.
//! Descriptors are built once by the page factories and never mutated.

use serde::Serialize;

use crate::pages::PageId;

/// Root path. Never acts as a prefix for other requests.
pub const ROOT_PATH: &str = "/";

/// One navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    /// Path segment, unique among siblings.
    pub path: String,

    /// Page rendered for this route. Opaque to the routing core.
    pub page: PageId,

    /// Child routes in declaration order. Empty for leaf routes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,

    /// Optional display template, e.g. `/companies/{slug}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_view: Option<String>,
}

impl RouteDescriptor {
    /// Create a leaf route.
    pub fn new(path: impl Into<String>, page: PageId) -> Self {
        Self {
            path: path.into(),
            page,
            children: Vec::new(),
            path_view: None,
        }
    }

    /// Attach child routes, turning this descriptor into a parent route.
    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Attach a display template used by [`RouteDescriptor::link_to`].
    pub fn with_path_view(mut self, template: impl Into<String>) -> Self {
        self.path_view = Some(template.into());
        self
    }

    /// Returns true if this route has children.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }

    /// Build a link to this route.
    ///
    /// An explicit `link` param is appended to the path. Otherwise the
    /// `path_view` template is filled from the params, falling back to the
    /// plain path.
    pub fn link_to(&self, params: &RouteParams) -> String {
        if let Some(link) = &params.link {
            return format!("{}/{}", self.path, link);
        }

        match &self.path_view {
            Some(template) => params.fill(template),
            None => self.path.clone(),
        }
    }
}

/// Values substituted into route links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub scope: Option<String>,
    pub invite: Option<String>,
    pub email_address: Option<String>,
    pub token: Option<String>,
    pub link: Option<String>,
}

impl RouteParams {
    fn lookup(&self, key: &str) -> Option<&str> {
        let value = match key {
            "slug" => &self.slug,
            "name" => &self.name,
            "scope" => &self.scope,
            "invite" => &self.invite,
            "email_address" => &self.email_address,
            "token" => &self.token,
            "link" => &self.link,
            _ => return None,
        };
        value.as_deref()
    }

    /// Replace `{key}` placeholders. Unknown or unset keys are left as is.
    fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.lookup(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_uses_plain_path() {
        let route = RouteDescriptor::new("/about", PageId::About);
        assert_eq!(route.link_to(&RouteParams::default()), "/about");
    }

    #[test]
    fn test_link_param_is_appended() {
        let route = RouteDescriptor::new("/companies", PageId::Companies)
            .with_path_view("/companies/{slug}");
        let params = RouteParams {
            link: Some("serchservice".into()),
            slug: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(route.link_to(&params), "/companies/serchservice");
    }

    #[test]
    fn test_path_view_substitution() {
        let route = RouteDescriptor::new("/companies", PageId::Companies)
            .with_path_view("/companies/{slug}/{missing}");
        let params = RouteParams {
            slug: Some("serchservice".into()),
            ..Default::default()
        };
        assert_eq!(route.link_to(&params), "/companies/serchservice/{missing}");
    }

    #[test]
    fn test_unterminated_placeholder_kept() {
        let route = RouteDescriptor::new("/x", PageId::Home).with_path_view("/x/{slug");
        assert_eq!(route.link_to(&RouteParams::default()), "/x/{slug");
    }

    #[test]
    fn test_parent_flag() {
        let leaf = RouteDescriptor::new("/about", PageId::About);
        assert!(!leaf.is_parent());

        let parent = RouteDescriptor::new("/about", PageId::About)
            .with_children(vec![RouteDescriptor::new("skills", PageId::About)]);
        assert!(parent.is_parent());
    }
}
