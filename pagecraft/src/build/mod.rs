//! Static page build.
//!
//! Building a site means:
//!
//! - Loading the site configuration (`.pagecraft.toml`)
//! - Loading the landing configuration and section list
//! - Laying CMS content over the configuration, when a source is configured
//! - Composing the page and generating its SEO head
//! - Writing `<output>/index.html`
//!
//! # Example
//!
//! ```rust,no_run
//! use pagecraft::ctx::AppContext;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut ctx = AppContext::new(".");
//! let report = ctx.build(None, None).await?;
//! println!("{} sections in {}", report.sections.len(), report.index.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use landing::{LandingPageConfig, SectionId};
use url::Url;

use crate::{
    build::config::ContentSourceConfig,
    content::{ContentLoader, DirSource, HttpSource, page_name_from_path},
    ctx::AppContext,
};

/// Site configuration types and structures.
pub mod config;

/// Result of a page build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The written document.
    pub index: PathBuf,
    /// Sections present in the document, in output order.
    pub sections: Vec<SectionId>,
}

/// Lays the content of `page` from `source` over `current`.
///
/// Never fails: an unusable source leaves `current` as it is.
pub async fn overlay_from_source(
    source: &ContentSourceConfig,
    base: &Path,
    page: &str,
    current: &LandingPageConfig,
) -> LandingPageConfig {
    match source {
        ContentSourceConfig::Dir(dir) => {
            ContentLoader::new(DirSource::new(base.join(dir)))
                .load(page, current)
                .await
        }
        ContentSourceConfig::Url(url) => match HttpSource::new(url) {
            Ok(source) => ContentLoader::new(source).load(page, current).await,
            Err(e) => {
                warn!("content source unavailable: {e:#}");
                current.clone()
            }
        },
    }
}

impl AppContext {
    /// Builds the page from the site configuration.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the site configuration file.
    ///   Defaults to `.pagecraft.toml` in the workspace directory.
    /// * `out_dir` - Overrides the configured output directory.
    ///
    /// # Returns
    ///
    /// The path of the written document and the sections it contains.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, a required
    /// section is missing, or the output cannot be written.
    pub async fn build(
        &mut self,
        config_path: Option<PathBuf>,
        out_dir: Option<PathBuf>,
    ) -> anyhow::Result<BuildReport> {
        let site = self.prepare_site_config(config_path).await?;
        let ws = self.load_workspace()?;

        let ws = match &site.content.source {
            Some(source) => {
                let page = Url::parse(&site.site.url)
                    .map(|u| page_name_from_path(u.path()))
                    .unwrap_or_else(|_| "home".to_string());
                info!("loading content for page `{page}`");
                let config = overlay_from_source(source, &self.paths.workspace, &page, &ws.config).await;
                ws.with_config(config)?
            }
            None => ws,
        };

        let page = ws.compose()?;
        let sections = page.ids();
        let html = self.render_document(&ws.config, page)?;

        let out_dir = match out_dir {
            Some(dir) => self.resolve(dir),
            None => self.resolve(&site.output.dir),
        };
        tokio::fs::create_dir_all(&out_dir)
            .await
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        let index = out_dir.join("index.html");
        tokio::fs::write(&index, html)
            .await
            .with_context(|| format!("Failed to write {}", index.display()))?;

        println!(
            "{}",
            format!(
                "Page built\r\n  sections: {}\r\n  output: {}",
                sections.len(),
                index.display()
            )
            .bold()
            .green()
        );
        Ok(BuildReport { index, sections })
    }
}
