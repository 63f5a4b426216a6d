//! CMS content delivery.
//!
//! Page content lives outside the landing configuration, as one JSON
//! document per page plus a site-wide settings document. A
//! [`ContentLoader`] fetches both from a [`ContentSource`] and lays them over
//! the current configuration. Fetching is best effort: any failure leaves
//! the configuration as it was.

use std::{
    future::Future,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use landing::{LandingPageConfig, SiteSettings, apply_content};
use serde_json::Value;
use url::Url;

/// Somewhere page content can be fetched from.
pub trait ContentSource {
    /// Content document of `page`.
    fn page(&self, page: &str) -> impl Future<Output = anyhow::Result<Value>> + Send;

    /// Site-wide settings document.
    fn settings(&self) -> impl Future<Output = anyhow::Result<Value>> + Send;
}

/// Content stored on disk as `<root>/pages/<page>.json` and
/// `<root>/settings.json`.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_json(path: &Path) -> anyhow::Result<Value> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
    }
}

impl ContentSource for DirSource {
    async fn page(&self, page: &str) -> anyhow::Result<Value> {
        Self::read_json(&self.root.join("pages").join(format!("{page}.json"))).await
    }

    async fn settings(&self) -> anyhow::Result<Value> {
        Self::read_json(&self.root.join("settings.json")).await
    }
}

/// Content served over HTTP under `<base>/content/`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(base).with_context(|| format!("Invalid content url: {base}"))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("pagecraft-content-loader")
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {e}"))?;

        Ok(Self { base, client })
    }

    async fn get_json(&self, path: &str) -> anyhow::Result<Value> {
        let url = self.base.join(path)?;
        debug!("fetching {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch {url}: {e}"))?;

        if !response.status().is_success() {
            bail!("HTTP error {}: {url}", response.status());
        }

        response
            .json()
            .await
            .map_err(|e| anyhow!("Invalid JSON from {url}: {e}"))
    }
}

impl ContentSource for HttpSource {
    async fn page(&self, page: &str) -> anyhow::Result<Value> {
        self.get_json(&format!("content/pages/{page}.json")).await
    }

    async fn settings(&self) -> anyhow::Result<Value> {
        self.get_json("content/settings.json").await
    }
}

/// Page name for a URL path: `/pricing.html` → `pricing`, `/` → `home`.
pub fn page_name_from_path(path: &str) -> String {
    let path = path.strip_suffix('/').unwrap_or(path);
    let path = path.strip_suffix(".html").unwrap_or(path);
    if path.is_empty() || path == "/index" {
        return "home".to_string();
    }
    path.strip_prefix('/').unwrap_or(path).to_string()
}

/// Lays fetched content over a configuration.
pub struct ContentLoader<S> {
    source: S,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// `current` with the content of `page` and the site settings applied.
    pub async fn load(&self, page: &str, current: &LandingPageConfig) -> LandingPageConfig {
        let merged = apply_content(current, self.source.page(page).await);

        let settings = match self.source.settings().await {
            Ok(value) => serde_json::from_value::<SiteSettings>(value).map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };
        match settings {
            Ok(settings) => settings.apply(&merged),
            Err(e) => {
                debug!("site settings unavailable: {e}");
                merged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{Json, Router, routing::get};
    use landing::default_content;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_page_name_from_path() {
        assert_eq!(page_name_from_path(""), "home");
        assert_eq!(page_name_from_path("/"), "home");
        assert_eq!(page_name_from_path("/index.html"), "home");
        assert_eq!(page_name_from_path("/index"), "home");
        assert_eq!(page_name_from_path("/pricing.html"), "pricing");
        assert_eq!(page_name_from_path("/about/"), "about");
        assert_eq!(page_name_from_path("/blog/post"), "blog/post");
    }

    fn write_content(root: &Path) {
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::write(
            root.join("pages/home.json"),
            json!({ "faq": { "headline": "From the CMS", "items": [] } }).to_string(),
        )
        .unwrap();
        fs::write(root.join("settings.json"), r#"{"nav_cta":"Call us"}"#).unwrap();
    }

    #[tokio::test]
    async fn test_dir_source_overlay() {
        let dir = tempfile::tempdir().unwrap();
        write_content(dir.path());
        let current = default_content().unwrap();

        let loader = ContentLoader::new(DirSource::new(dir.path()));
        let loaded = loader.load("home", &current).await;

        assert_eq!(loaded.faq.unwrap().headline, "From the CMS");
        let nav = loaded.navigation.unwrap();
        assert!(nav.items.iter().filter(|i| i.is_button).all(|i| i.label == "Call us"));
        assert_eq!(loaded.hero, current.hero);
    }

    #[tokio::test]
    async fn test_missing_content_keeps_current() {
        let dir = tempfile::tempdir().unwrap();
        let current = default_content().unwrap();

        let loader = ContentLoader::new(DirSource::new(dir.path()));
        assert_eq!(loader.load("pricing", &current).await, current);
    }

    #[tokio::test]
    async fn test_http_source() {
        let app = Router::new()
            .route(
                "/cms/content/pages/home.json",
                get(|| async { Json(json!({ "faq": { "headline": "Remote", "items": [] } })) }),
            )
            .route(
                "/cms/content/settings.json",
                get(|| async { Json(json!({ "nav_cta": "Book now" })) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        let source = HttpSource::new(&format!("http://{addr}/cms")).unwrap();
        let current = default_content().unwrap();
        let loader = ContentLoader::new(source.clone());

        let loaded = loader.load("home", &current).await;
        assert_eq!(loaded.faq.unwrap().headline, "Remote");

        // 404 is an error at the source and a no-op for the loader
        assert!(source.page("pricing").await.is_err());
        let loaded = ContentLoader::new(source).load("pricing", &current).await;
        assert_eq!(loaded.faq, current.faq);
    }

    #[test]
    fn test_http_source_rejects_bad_url() {
        assert!(HttpSource::new("not a url").is_err());
    }
}
