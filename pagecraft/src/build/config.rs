//! Site configuration types.
//!
//! Configuration is stored in `.pagecraft.toml` at the workspace root.
//!
//! # Configuration File Format
//!
//! ```toml
//! [site]
//! url = "${env:SITE_URL}"
//! title = "PageCraft | Build landing pages"
//! description = "Launch a landing page in minutes."
//! brand = "PageCraft"
//! page_type = "home"
//!
//! [content]
//! landing = "landing.json"
//! sections = "sections.json"
//! source = { dir = "content" }
//!
//! [output]
//! dir = "dist"
//!
//! [seo]
//! theme_color = "#0a0a0a"
//! ```

use std::path::PathBuf;

use schemars::JsonSchema;
use seohead::{PageType, SeoDefaults};
use serde::{Deserialize, Serialize};

/// Root site configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SiteConfig {
    /// Page identity used for the SEO head.
    pub site: SiteInfo,
    /// Where page content comes from.
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Overrides of the site-wide SEO defaults.
    #[serde(default)]
    pub seo: SeoDefaults,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SiteInfo {
    /// Canonical URL of the page.
    pub url: String,
    pub title: String,
    pub description: String,
    pub brand: String,
    #[serde(default)]
    pub page_type: PageType,
    /// Open Graph image, absolute or relative to the site origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContentConfig {
    /// Landing page configuration file (JSON or TOML).
    #[serde(default = "default_landing")]
    pub landing: PathBuf,
    /// Section list file; the default list is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<PathBuf>,
    /// CMS content laid over the landing configuration at build time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ContentSourceConfig>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            landing: default_landing(),
            sections: None,
            source: None,
        }
    }
}

fn default_landing() -> PathBuf {
    PathBuf::from("landing.json")
}

/// Location of CMS-managed content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSourceConfig {
    /// Directory holding `pages/<page>.json` and `settings.json`.
    Dir(PathBuf),
    /// Site serving `/content/pages/<page>.json` and `/content/settings.json`.
    Url(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}
