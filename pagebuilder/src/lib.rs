//! # pagebuilder
//!
//! Editing surface for landing page configurations.
//!
//! The builder keeps one authoritative [`Workspace`]: the page configuration
//! and the ordered section list. Edits produce a new workspace that replaces
//! the old one as a whole; nothing is patched in place.
//!
//! ## Features
//!
//! - JSON and TOML configuration files, chosen by extension
//! - Section toggling with required sections locked on
//! - Automatic timestamped backup before saving changes
//! - Preview and editing HTTP server (requires the `web` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagebuilder::Workspace;
//!
//! let ws = Workspace::load("landing.json", Some("sections.json")).unwrap();
//! let ws = ws.toggle("pricing");
//! ws.save().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Builder state and persistence
//! - [`error`] - Error types and result definitions
//! - [`web`] - Preview server (requires `web` feature)

#[macro_use]
extern crate log;

/// Builder state and persistence.
pub mod data;

/// Error types and result definitions.
pub mod error;

/// Preview and editing server.
///
/// This module is only available when the `web` feature is enabled.
#[cfg(feature = "web")]
pub mod web;

pub use data::{FileFormat, Workspace};
pub use error::{BuildError, Result};
