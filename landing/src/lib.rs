//! # landing - Configuration-driven landing pages
//!
//! Typed content schema, section visibility rules, design-token mapping and
//! the composition pipeline that renders a landing page from a
//! [`LandingPageConfig`].
//!
//! ## Features
//!
//! - Closed design-token set mapped to CSS custom properties
//! - Section registry with required/optional sections and pure toggling
//! - Fixed canonical section order, fail-fast on missing required content
//! - Auto-escaped HTML rendering with maud
//! - Stat count-up easing with a tokio frame driver
//! - All-or-nothing overlay of CMS-delivered content
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use landing::{compose, default_content, default_sections, resolve_visibility, toggle_section};
//!
//! let config = default_content().unwrap();
//! let sections = toggle_section(&default_sections(), "pricing");
//! let visibility = resolve_visibility(&sections);
//!
//! let page = compose(&config, Some(&visibility)).unwrap();
//! let html = page.into_document(landing::minimal_head("Preview"));
//! ```
//!
//! ## Modules
//!
//! - [`tokens`] - Design tokens and their CSS variables
//! - [`schema`] - Content records
//! - [`sections`] - Section registry, visibility and toggling
//! - [`render`] - Composition pipeline and section presentations
//! - [`animate`] - Count-up animation
//! - [`overlay`] - CMS content overlay
//! - [`error`] - Error types and result definitions

#[macro_use]
extern crate log;

/// Stat count-up easing and frame driver.
pub mod animate;

/// Built-in starter content.
pub mod defaults;

/// Error types and result definitions.
pub mod error;

/// Icon registry.
pub mod icons;

/// Overlay of externally managed content.
pub mod overlay;

/// Composition pipeline.
pub mod render;

/// Content schema.
pub mod schema;

/// Section registry, visibility resolution and toggling.
pub mod sections;

/// Design tokens.
pub mod tokens;

// Re-export main types for convenience
pub use animate::{AnimationOutcome, CountUp, animate_count, ease_out_cubic};
pub use defaults::default_content;
pub use error::{LandingError, Result};
pub use overlay::{SiteSettings, apply_content, format_title};
pub use render::{ComposedPage, RenderContext, RenderedSection, compose, minimal_head, trusted};
pub use schema::LandingPageConfig;
pub use sections::{
    SectionConfig, SectionId, UnknownSection, Visibility, default_sections, resolve_visibility,
    toggle_section,
};
pub use tokens::{DesignTokens, TokenContext, resolve_tokens};

/// Current version of the landing implementation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
