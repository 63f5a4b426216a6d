//! # pagecraft
//!
//! Build, preview and publish configuration-driven landing pages.
//!
//! ## Features
//!
//! - **Build**: Compose the landing page and write a standalone HTML document
//! - **CMS Content**: Overlay page content from a directory or over HTTP
//! - **SEO**: Meta, Open Graph, Twitter Card and JSON-LD head generation
//! - **Sections**: Show and toggle the builder's section list
//! - **Preview Server**: Live preview and editing API
//!
//! ## Modules
//!
//! - [`build`] - Site configuration and the static build
//! - [`content`] - CMS content sources and loader
//! - [`ctx`] - Application context and state management
//! - [`sections`] - Section list command
//! - [`utils`] - Common utilities and helper functions

/// Site configuration and the static build.
pub mod build;

/// CMS content sources and loader.
///
/// Content is fetched per page from a directory or an HTTP site and laid
/// over the landing configuration.
pub mod content;

/// Application context and state management.
pub mod ctx;

/// Section list command.
pub mod sections;

/// Common utilities and helper functions.
pub mod utils;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
