//! Head fragment generation.
//!
//! [`generate_head`] is a pure function of its inputs: the same options and
//! defaults always yield the same tags in the same order.

use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::{
    breadcrumbs::{Breadcrumb, default_breadcrumbs},
    error::{Result, SeoError},
    escape::{escape_attr, escape_json_ld, escape_text},
};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Kind of page the head is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    #[default]
    Home,
    Product,
    Pricing,
    About,
    BlogPost,
    Contact,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            PageType::Home => "home",
            PageType::Product => "product",
            PageType::Pricing => "pricing",
            PageType::About => "about",
            PageType::BlogPost => "blog-post",
            PageType::Contact => "contact",
        }
    }

    fn og_type(self) -> &'static str {
        match self {
            PageType::BlogPost => "article",
            _ => "website",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [
            PageType::Home,
            PageType::Product,
            PageType::Pricing,
            PageType::About,
            PageType::BlogPost,
            PageType::Contact,
        ]
        .into_iter()
        .find(|t| t.as_str() == s)
        .ok_or_else(|| format!("unknown page type `{s}`"))
    }
}

/// Product described by a product page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Offer price; no offer is emitted without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// ISO 4217 code, `USD` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Per-page input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoOptions {
    /// Canonical page URL.
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub page_type: PageType,
    pub brand: String,
    /// Absolute, or relative to the page origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faq: Vec<FaqEntry>,
    /// Explicit trail; derived from the URL path when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<Breadcrumb>>,
}

impl SeoOptions {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
            page_type: PageType::default(),
            brand: brand.into(),
            og_image: None,
            product: None,
            faq: Vec::new(),
            breadcrumbs: None,
        }
    }

    pub fn with_page_type(mut self, page_type: PageType) -> Self {
        self.page_type = page_type;
        self
    }

    pub fn with_og_image(mut self, og_image: impl Into<String>) -> Self {
        self.og_image = Some(og_image.into());
        self
    }

    pub fn with_product(mut self, product: ProductData) -> Self {
        self.product = Some(product);
        self
    }

    pub fn with_faq(mut self, faq: Vec<FaqEntry>) -> Self {
        self.faq = faq;
        self
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = Some(breadcrumbs);
        self
    }
}

/// Site-wide values shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SeoDefaults {
    pub theme_color: String,
    pub favicon: String,
    /// Path of the fallback Open Graph image, relative to the origin.
    pub og_image: String,
    pub og_image_width: u32,
    pub og_image_height: u32,
    /// Origins to open early connections to.
    pub preconnect: Vec<String>,
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            theme_color: "#0a0a0a".to_string(),
            favicon: "/favicon.ico".to_string(),
            og_image: "/images/og-default.png".to_string(),
            og_image_width: 1200,
            og_image_height: 630,
            preconnect: vec![
                "https://fonts.googleapis.com".to_string(),
                "https://fonts.gstatic.com".to_string(),
            ],
        }
    }
}

/// Which attribute names a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name,
    Property,
}

/// One declaration of the fragment. Values are stored unescaped.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadTag {
    Charset,
    Viewport,
    Title(String),
    Meta {
        key: MetaKey,
        name: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
        mime: Option<&'static str>,
        crossorigin: bool,
    },
    JsonLd(Value),
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Name,
            name,
            content: content.into(),
        }
    }

    fn property(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            key: MetaKey::Property,
            name,
            content: content.into(),
        }
    }

    fn link(rel: &'static str, href: impl Into<String>) -> Self {
        HeadTag::Link {
            rel,
            href: href.into(),
            mime: None,
            crossorigin: false,
        }
    }

    /// Escaped HTML for this tag, without indentation.
    pub fn render(&self) -> Result<String> {
        Ok(match self {
            HeadTag::Charset => r#"<meta charset="UTF-8">"#.to_string(),
            HeadTag::Viewport => {
                r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
                    .to_string()
            }
            HeadTag::Title(title) => format!("<title>{}</title>", escape_text(title)),
            HeadTag::Meta { key, name, content } => {
                let attr = match key {
                    MetaKey::Name => "name",
                    MetaKey::Property => "property",
                };
                format!(r#"<meta {attr}="{name}" content="{}">"#, escape_attr(content))
            }
            HeadTag::Link {
                rel,
                href,
                mime,
                crossorigin,
            } => {
                let mut tag = format!(r#"<link rel="{rel}" href="{}""#, escape_attr(href));
                if let Some(mime) = mime {
                    tag.push_str(&format!(r#" type="{mime}""#));
                }
                if *crossorigin {
                    tag.push_str(" crossorigin");
                }
                tag.push('>');
                tag
            }
            HeadTag::JsonLd(value) => {
                let json = serde_json::to_string_pretty(value)?;
                let body = escape_json_ld(&json).replace('\n', "\n  ");
                format!("<script type=\"application/ld+json\">\n  {body}\n  </script>")
            }
        })
    }
}

/// Ordered head declarations for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadFragment {
    pub tags: Vec<HeadTag>,
}

impl HeadFragment {
    /// Structured-data blocks, in output order.
    pub fn json_ld(&self) -> impl Iterator<Item = &Value> {
        self.tags.iter().filter_map(|t| match t {
            HeadTag::JsonLd(v) => Some(v),
            _ => None,
        })
    }

    /// The fragment as HTML, one indented tag per line.
    pub fn render(&self) -> Result<String> {
        let lines = self
            .tags
            .iter()
            .map(|t| t.render().map(|html| format!("  {html}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}

impl fmt::Display for HeadFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}

fn parse_page_url(raw: &str) -> Result<(Url, String)> {
    let url = Url::parse(raw).map_err(|e| SeoError::invalid_url(raw, e))?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(SeoError::invalid_url(raw, "url has no origin"));
    }
    Ok((url, origin.ascii_serialization()))
}

fn resolve_image(image: &str, origin: &str) -> String {
    if image.starts_with("http") {
        image.to_string()
    } else if image.starts_with('/') {
        format!("{origin}{image}")
    } else {
        format!("{origin}/{image}")
    }
}

fn organization(brand: &str, origin: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": brand,
        "url": origin,
        "logo": format!("{origin}/images/logo.png"),
        "sameAs": []
    })
}

fn website(brand: &str, origin: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": brand,
        "url": origin,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{origin}/search?q={{search_term_string}}"),
            "query-input": "required name=search_term_string"
        }
    })
}

fn product(data: &ProductData, brand: &str) -> Value {
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "name": data.name,
        "description": data.description,
    });
    if let Some(obj) = value.as_object_mut() {
        if let Some(image) = &data.image {
            obj.insert("image".to_string(), json!(image));
        }
        obj.insert("brand".to_string(), json!({ "@type": "Brand", "name": brand }));
        if let Some(price) = data.price.as_deref().filter(|p| !p.is_empty()) {
            obj.insert(
                "offers".to_string(),
                json!({
                    "@type": "Offer",
                    "price": price,
                    "priceCurrency": data.currency.as_deref().unwrap_or("USD"),
                    "availability": "https://schema.org/InStock"
                }),
            );
        }
    }
    value
}

fn faq_page(items: &[FaqEntry]) -> Value {
    let entities: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": { "@type": "Answer", "text": item.answer }
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities
    })
}

fn breadcrumb_list(crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": c.name,
                "item": c.url
            })
        })
        .collect();
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

/// Generates the head declarations for one page.
///
/// # Errors
///
/// [`SeoError::InvalidUrl`] when `options.url` is not an absolute URL with
/// an origin.
pub fn generate_head(options: &SeoOptions, defaults: &SeoDefaults) -> Result<HeadFragment> {
    let (url, origin) = parse_page_url(&options.url)?;
    let og_image = resolve_image(
        options.og_image.as_deref().unwrap_or(defaults.og_image.as_str()),
        &origin,
    );

    let mut tags = vec![
        HeadTag::Charset,
        HeadTag::Viewport,
        HeadTag::Title(options.title.clone()),
        HeadTag::name("description", &options.description),
        HeadTag::link("canonical", &options.url),
        HeadTag::name("robots", "index, follow"),
        HeadTag::name("theme-color", &defaults.theme_color),
        HeadTag::Link {
            rel: "icon",
            href: defaults.favicon.clone(),
            mime: Some("image/x-icon"),
            crossorigin: false,
        },
    ];

    for hint in &defaults.preconnect {
        tags.push(HeadTag::Link {
            rel: "preconnect",
            href: hint.clone(),
            mime: None,
            crossorigin: hint.contains("gstatic"),
        });
    }

    tags.extend([
        HeadTag::property("og:title", &options.title),
        HeadTag::property("og:description", &options.description),
        HeadTag::property("og:image", &og_image),
        HeadTag::property("og:image:width", defaults.og_image_width.to_string()),
        HeadTag::property("og:image:height", defaults.og_image_height.to_string()),
        HeadTag::property("og:url", &options.url),
        HeadTag::property("og:type", options.page_type.og_type()),
        HeadTag::property("og:site_name", &options.brand),
        HeadTag::name("twitter:card", "summary_large_image"),
        HeadTag::name("twitter:title", &options.title),
        HeadTag::name("twitter:description", &options.description),
        HeadTag::name("twitter:image", &og_image),
    ]);

    if options.page_type == PageType::Home {
        tags.push(HeadTag::JsonLd(organization(&options.brand, &origin)));
        tags.push(HeadTag::JsonLd(website(&options.brand, &origin)));
    }

    if let (PageType::Product, Some(data)) = (options.page_type, &options.product) {
        tags.push(HeadTag::JsonLd(product(data, &options.brand)));
    }

    if !options.faq.is_empty() {
        tags.push(HeadTag::JsonLd(faq_page(&options.faq)));
    }

    let crumbs = match &options.breadcrumbs {
        Some(crumbs) => crumbs.clone(),
        None => default_breadcrumbs(&url),
    };
    tags.push(HeadTag::JsonLd(breadcrumb_list(&crumbs)));

    debug!(
        "generated {} head tags for {} ({})",
        tags.len(),
        options.url,
        options.page_type
    );
    Ok(HeadFragment { tags })
}
