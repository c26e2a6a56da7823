//! HTML page shells.
//!
//! Every page path gets the same document skeleton from `base.html`: head
//! with title and description, then the top navigation with the active link
//! marked. The page body is the page mounted at exactly the requested path.
//! A path that only resolves by prefix keeps the layout with no body, and an
//! unresolved path gets the fallback loader.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::content::{Company, Profile};
use crate::http::server::SiteState;
use crate::navigation::{nav_items, LayoutState, NavItem};
use crate::pages::PageId;
use crate::routing::{RouteParams, RouteRegistry};

const SITE_NAME: &str = "iamevaristus";

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("template error: {0}")]
    Template(String),
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError::Template(err.to_string())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Page rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Head and navigation shared by every page.
pub struct Shell {
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub nav: Vec<NavItem>,
    pub inverted: bool,
}

/// A company together with its link into the companies page.
pub struct CompanyCard<'a> {
    pub company: &'a Company,
    pub link: String,
}

/// Layout only, for paths that resolve without a mounted page.
#[derive(Template)]
#[template(path = "base.html")]
pub struct LayoutTemplate {
    pub shell: Shell,
}

/// Loading indicator for unresolved paths.
#[derive(Template)]
#[template(path = "fallback.html")]
pub struct FallbackTemplate {
    pub shell: Shell,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub shell: Shell,
    pub profile: &'a Profile,
    pub featured: Vec<CompanyCard<'a>>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub shell: Shell,
    pub profile: &'a Profile,
}

#[derive(Template)]
#[template(path = "companies.html")]
pub struct CompaniesTemplate<'a> {
    pub shell: Shell,
    pub companies: Vec<CompanyCard<'a>>,
}

#[derive(Template)]
#[template(path = "communities.html")]
pub struct CommunitiesTemplate {
    pub shell: Shell,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub shell: Shell,
    pub profile: &'a Profile,
}

/// Render the full document for `path`.
pub fn render_page(site: &SiteState, path: &str, layout: &LayoutState) -> Result<String, PageError> {
    let nav = nav_items(&site.registry, path, &site.hidden_nav);

    let Some(resolved) = layout.page() else {
        let shell = shell("Loading", "", nav, false);
        return Ok(FallbackTemplate { shell }.render()?);
    };

    let inverted = matches!(layout, LayoutState::Content { inverted_header: true, .. });
    let html = match site.mounted_page(path) {
        Some(page) => {
            let shell = shell(page.title(), page.description(), nav, inverted);
            render_body(site, page, shell)?
        }
        None => {
            let shell = shell(resolved.title(), resolved.description(), nav, inverted);
            LayoutTemplate { shell }.render()?
        }
    };
    Ok(html)
}

fn shell(title: &'static str, description: &'static str, nav: Vec<NavItem>, inverted: bool) -> Shell {
    Shell {
        site_name: SITE_NAME,
        title,
        description,
        nav,
        inverted,
    }
}

fn render_body(site: &SiteState, page: PageId, shell: Shell) -> askama::Result<String> {
    let profile = &site.profile;
    match page {
        PageId::Home => HomeTemplate {
            shell,
            profile,
            featured: company_cards(&site.registry, profile.featured_companies()),
        }
        .render(),
        PageId::About => AboutTemplate { shell, profile }.render(),
        PageId::Companies => CompaniesTemplate {
            shell,
            companies: company_cards(&site.registry, profile.companies.iter()),
        }
        .render(),
        PageId::Communities => CommunitiesTemplate { shell }.render(),
        PageId::Contact => ContactTemplate { shell, profile }.render(),
    }
}

fn company_cards<'a>(
    registry: &RouteRegistry,
    companies: impl Iterator<Item = &'a Company>,
) -> Vec<CompanyCard<'a>> {
    let route = registry.companies();
    companies
        .map(|company| {
            let params = RouteParams {
                slug: Some(company.slug.to_string()),
                ..Default::default()
            };
            let link = match route {
                Some(route) => route.link_to(&params),
                None => format!("#{}", company.slug),
            };
            CompanyCard { company, link }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::routing::{RouteDescriptor, RouteName};

    fn site() -> SiteState {
        SiteState::from_config(&SiteConfig::default()).unwrap()
    }

    fn render(site: &SiteState, path: &str) -> String {
        let layout = LayoutState::for_path(&site.registry, path);
        render_page(site, path, &layout).unwrap()
    }

    #[test]
    fn test_content_shell() {
        let html = render(&site(), "/companies");

        assert!(html.contains("<title>Companies | iamevaristus</title>"));
        assert!(html.contains("aria-current=\"page\">Companies</a>"));
        assert!(html.contains("Serchservice Inc."));
        assert!(html.contains("id=\"serchservice\""));
        assert!(html.contains("href=\"/companies#serchservice\""));
        assert!(!html.contains(">Communities</a>"));
    }

    #[test]
    fn test_content_is_html_escaped() {
        let site = site();

        let html = render(&site, "/companies");
        assert!(html.contains("CEO &"));
        assert!(!html.contains("CEO & Founder"));

        let html = render(&site, "/about");
        assert!(html.contains("Frameworks &"));
        assert!(!html.contains("Frameworks & Libraries"));
    }

    #[test]
    fn test_fallback_shell() {
        let html = render(&site(), "/unknown");

        assert!(html.contains("<title>Loading | iamevaristus</title>"));
        assert!(html.contains("class=\"loader\""));
        assert!(!html.contains("class=\"active\""));
    }

    #[test]
    fn test_home_lists_featured_companies() {
        let html = render(&site(), "/");

        assert!(html.contains("<h2>Featured Companies</h2>"));
        assert!(html.contains("href=\"/companies#serchservice\">Serchservice Inc.</a>"));
        assert!(html.contains("Visit website"));
        assert!(html.contains("15th August, 2022"));
    }

    #[test]
    fn test_about_sections() {
        let html = render(&site(), "/about");

        assert!(html.contains("class=\"top-nav inverted\""));
        assert!(html.contains("<h2>Who I Am</h2>"));
        assert!(html.contains("<h2>My Passions</h2>"));
        assert!(html.contains("<h3>Building Scalable Products</h3>"));
        for tab in ["Programming Skills", "Music Skills", "Soft Skills", "Interests"] {
            assert!(html.contains(&format!("<h2>{tab}</h2>")), "missing tab {tab}");
        }
    }

    #[test]
    fn test_prefix_hit_keeps_layout_without_body() {
        let html = render(&site(), "/about/extra");

        assert!(html.contains("<title>About | iamevaristus</title>"));
        assert!(html.contains("class=\"top-nav inverted\""));
        assert!(html.contains("aria-current=\"page\">About</a>"));
        assert!(!html.contains("Who I Am"));
        assert!(!html.contains("class=\"loader\""));
    }

    #[test]
    fn test_body_comes_from_mount_table() {
        let registry = RouteRegistry::builder()
            .register(RouteName::Home, RouteDescriptor::new("/", PageId::Home))
            .register(
                RouteName::About,
                RouteDescriptor::new("/about", PageId::About)
                    .with_children(vec![RouteDescriptor::new("team", PageId::Communities)]),
            )
            .build()
            .unwrap();
        let site = SiteState::new(registry, Vec::new(), Profile::load());

        // Resolves to /about by prefix, but /about/team is mounted.
        let html = render(&site, "/about/team");
        assert!(html.contains("<h1>Communities</h1>"));
        assert!(!html.contains("Who I Am"));
    }
}
