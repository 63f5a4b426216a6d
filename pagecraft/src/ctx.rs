//! Application context and state management.
//!
//! This module provides the [`AppContext`] type which holds the global state
//! for the pagecraft application: the workspace paths and the loaded site
//! configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use landing::{ComposedPage, LandingPageConfig, trusted};
use pagebuilder::Workspace;
use seohead::{FaqEntry, HeadFragment, SeoOptions, generate_head};
use serde::Deserialize;
use tokio::fs;

use crate::{build::config::SiteConfig, utils::expand_env_in_toml};

/// Default site configuration file name.
pub const SITE_CONFIG_FILE: &str = ".pagecraft.toml";

/// Path configuration grouping all path-related fields.
#[derive(Default, Clone)]
pub struct PathConfig {
    /// Workspace root directory. Relative paths in the site configuration
    /// are resolved against it.
    pub workspace: PathBuf,
    /// Path to the site configuration file.
    pub site_config: Option<PathBuf>,
}

/// The main application context holding all state.
#[derive(Default, Clone)]
pub struct AppContext {
    pub paths: PathConfig,
    /// Loaded site configuration.
    pub site: Option<SiteConfig>,
}

impl AppContext {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathConfig {
                workspace: workspace.into(),
                site_config: None,
            },
            site: None,
        }
    }

    /// Resolves `path` against the workspace directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = self.value_replace_with_var(path.as_ref().as_os_str());
        self.paths.workspace.join(path)
    }

    /// Replaces variable placeholders in a string.
    ///
    /// Currently supports `${workspaceFolder}` which is replaced with the
    /// workspace directory path.
    pub fn value_replace_with_var<S>(&self, value: S) -> String
    where
        S: AsRef<std::ffi::OsStr>,
    {
        let raw = value.as_ref().to_string_lossy();
        raw.replace(
            "${workspaceFolder}",
            format!("{}", self.paths.workspace.display()).as_ref(),
        )
    }

    /// Loads the site configuration.
    ///
    /// `config_path` defaults to `.pagecraft.toml` in the workspace
    /// directory. `${env:VAR}` placeholders are expanded before the document
    /// is interpreted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn prepare_site_config(
        &mut self,
        config_path: Option<PathBuf>,
    ) -> anyhow::Result<SiteConfig> {
        let config_path = match config_path {
            Some(path) => self.resolve(path),
            None => self.paths.workspace.join(SITE_CONFIG_FILE),
        };
        self.paths.site_config = Some(config_path.clone());

        let content = fs::read_to_string(&config_path)
            .await
            .with_context(|| format!("can not open site config: {}", config_path.display()))?;

        let mut value: toml::Value = toml::from_str(&content)
            .with_context(|| format!("invalid site config: {}", config_path.display()))?;
        expand_env_in_toml(&mut value);
        let site = SiteConfig::deserialize(value)
            .with_context(|| format!("invalid site config: {}", config_path.display()))?;

        debug!("site config: {site:?}");
        self.site = Some(site.clone());
        Ok(site)
    }

    /// The loaded site configuration.
    pub fn site(&self) -> anyhow::Result<&SiteConfig> {
        self.site
            .as_ref()
            .ok_or_else(|| anyhow!("site configuration not loaded"))
    }

    /// Loads the landing configuration and section list named by the site
    /// configuration.
    pub fn load_workspace(&self) -> anyhow::Result<Workspace> {
        let site = self.site()?;
        let landing = self.resolve(&site.content.landing);
        let sections = site.content.sections.as_ref().map(|p| self.resolve(p));

        println!(
            "{}",
            format!("Loading landing page: {}", landing.display())
                .bold()
                .purple()
        );
        Workspace::load(&landing, sections.as_ref())
            .with_context(|| format!("failed to load {}", landing.display()))
    }

    /// SEO head for `config`, using the page identity of the site
    /// configuration. FAQ content becomes FAQPage structured data.
    pub fn site_head(&self, config: &LandingPageConfig) -> anyhow::Result<HeadFragment> {
        let site = self.site()?;
        let mut options = SeoOptions::new(
            &site.site.url,
            &site.site.title,
            &site.site.description,
            &site.site.brand,
        )
        .with_page_type(site.site.page_type);

        if let Some(image) = &site.site.og_image {
            options = options.with_og_image(image);
        }
        if let Some(faq) = &config.faq {
            options = options.with_faq(
                faq.items
                    .iter()
                    .map(|item| FaqEntry {
                        question: item.question.clone(),
                        answer: item.answer.clone(),
                    })
                    .collect(),
            );
        }

        Ok(generate_head(&options, &site.seo)?)
    }

    /// Wraps a composed `page` of `config` in a standalone document with
    /// the site head.
    pub fn render_document(
        &self,
        config: &LandingPageConfig,
        page: ComposedPage,
    ) -> anyhow::Result<String> {
        let head = self.site_head(config)?.render()?;
        Ok(page.into_document(trusted(head)))
    }
}
