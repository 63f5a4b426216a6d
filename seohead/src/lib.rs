//! # seohead - SEO head fragments
//!
//! Generates the `<head>` metadata of a page from a small structured input:
//! core meta tags, Open Graph, Twitter Card and JSON-LD structured data
//! (Organization, WebSite, Product, FAQPage, BreadcrumbList).
//!
//! Output is deterministic and every interpolated string is escaped for the
//! context it lands in.
//!
//! ```rust
//! use seohead::{PageType, SeoDefaults, SeoOptions, generate_head};
//!
//! let options = SeoOptions::new(
//!     "https://example.com/about",
//!     "About | Acme",
//!     "Who we are.",
//!     "Acme",
//! )
//! .with_page_type(PageType::About);
//!
//! let head = generate_head(&options, &SeoDefaults::default()).unwrap();
//! assert!(head.to_string().contains("<title>About | Acme</title>"));
//! ```

#[macro_use]
extern crate log;

pub mod breadcrumbs;
pub mod error;
pub mod escape;
pub mod head;

pub use breadcrumbs::{Breadcrumb, default_breadcrumbs};
pub use error::{Result, SeoError};
pub use head::{
    FaqEntry, HeadFragment, HeadTag, MetaKey, PageType, ProductData, SeoDefaults, SeoOptions,
    generate_head,
};
