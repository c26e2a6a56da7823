use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
    pub strategy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesResponse {
    pub strategy: String,
    pub routes: serde_json::Value,
    pub match_order: Vec<String>,
    pub mounts: Vec<Mount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mount {
    pub path: String,
    pub page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub path: String,
    pub matched: bool,
    pub kind: Option<String>,
    pub route: Option<String>,
    pub route_path: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub title: String,
    pub link: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub path: String,
    pub items: Vec<NavItem>,
    pub layout: serde_json::Value,
}

pub struct SiteClient {
    client: Client,
    base_url: String,
}

impl SiteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .no_proxy()
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn status(&self) -> Result<SystemStatus, Box<dyn std::error::Error>> {
        self.get_json("/api/status", None).await
    }

    pub async fn routes(&self) -> Result<RoutesResponse, Box<dyn std::error::Error>> {
        self.get_json("/api/routes", None).await
    }

    /// Resolve `path` against the site's registry.
    pub async fn resolve(&self, path: &str) -> Result<ResolveResponse, Box<dyn std::error::Error>> {
        self.get_json("/api/resolve", Some(path)).await
    }

    pub async fn navigation(&self, path: &str) -> Result<NavigationResponse, Box<dyn std::error::Error>> {
        self.get_json("/api/navigation", Some(path)).await
    }

    /// Fetch the HTML shell for a page path.
    pub async fn page(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: Option<&str>,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let mut req = self.client.get(format!("{}{}", self.base_url, endpoint));
        if let Some(path) = path {
            req = req.query(&[("path", path)]);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Site returned error status {}: {}", status, text).into());
        }

        Ok(serde_json::from_str::<T>(&text)?)
    }
}
