//! Breadcrumb trails.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `painting` → `Painting`, `our-story` → `Our story`.
fn crumb_name(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}

/// Trail derived from the path of `url`: `Home` at the origin, then one
/// crumb per non-empty path segment.
pub fn default_breadcrumbs(url: &Url) -> Vec<Breadcrumb> {
    let origin = url.origin().ascii_serialization();
    let mut crumbs = vec![Breadcrumb::new("Home", format!("{origin}/"))];

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
        crumbs.push(Breadcrumb::new(crumb_name(segment), format!("{origin}{path}")));
    }
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(url: &str) -> Vec<Breadcrumb> {
        default_breadcrumbs(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_default_breadcrumbs() {
        assert_eq!(
            crumbs("https://example.com/services/painting"),
            vec![
                Breadcrumb::new("Home", "https://example.com/"),
                Breadcrumb::new("Services", "https://example.com/services"),
                Breadcrumb::new("Painting", "https://example.com/services/painting"),
            ]
        );
    }

    #[test]
    fn test_root_and_empty_segments() {
        assert_eq!(crumbs("https://example.com"), vec![Breadcrumb::new("Home", "https://example.com/")]);
        let trail = crumbs("https://example.com//about-us/?q=1#top");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1], Breadcrumb::new("About us", "https://example.com/about-us"));
    }

    #[test]
    fn test_port_is_kept_in_origin() {
        let trail = crumbs("http://localhost:8080/blog");
        assert_eq!(trail[0].url, "http://localhost:8080/");
        assert_eq!(trail[1].url, "http://localhost:8080/blog");
    }
}
