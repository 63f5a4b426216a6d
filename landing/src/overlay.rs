//! Overlay of externally managed content onto a configuration.
//!
//! Content delivered by a CMS replaces whole sections of the current
//! configuration. The overlay is all-or-nothing: when the merged document is
//! not a valid, complete configuration the current one is kept as is.
//! Failures never propagate, the page simply keeps what it had.

use std::fmt;

use maud::html;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Result, schema::LandingPageConfig, sections::SectionId};

const TOKENS_KEY: &str = "tokens";

fn is_overlay_key(key: &str) -> bool {
    key == TOKENS_KEY || SectionId::CANONICAL.iter().any(|id| id.as_str() == key)
}

fn merge(current: &LandingPageConfig, overlay: Map<String, Value>) -> Result<LandingPageConfig> {
    let mut doc = serde_json::to_value(current)?;
    if let Some(base) = doc.as_object_mut() {
        for (key, value) in overlay {
            if is_overlay_key(&key) {
                base.insert(key, value);
            } else {
                trace!("ignoring content key {key:?}");
            }
        }
    }
    Ok(serde_json::from_value(doc)?)
}

/// Returns `current` with the fetched sections laid over it.
///
/// `fetched` is the outcome of a content fetch. Any failure, whether of the
/// fetch itself, a non-object payload, a payload that does not deserialize or
/// one that drops a required section, yields a clone of `current`.
pub fn apply_content<E: fmt::Display>(
    current: &LandingPageConfig,
    fetched: std::result::Result<Value, E>,
) -> LandingPageConfig {
    let overlay = match fetched {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            debug!("content is not an object ({}), keeping current", kind(&other));
            return current.clone();
        }
        Err(e) => {
            debug!("content fetch failed: {e}");
            return current.clone();
        }
    };

    match merge(current, overlay) {
        Ok(merged) if merged.missing_required().is_empty() => merged,
        Ok(merged) => {
            debug!(
                "content drops required sections {:?}, keeping current",
                merged.missing_required()
            );
            current.clone()
        }
        Err(e) => {
            debug!("content rejected: {e}");
            current.clone()
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Site-wide settings delivered next to page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteSettings {
    /// Label of the navigation call-to-action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_cta: Option<String>,
}

impl SiteSettings {
    /// Applies the settings to a copy of `config`.
    pub fn apply(&self, config: &LandingPageConfig) -> LandingPageConfig {
        let mut out = config.clone();
        if let (Some(label), Some(nav)) = (&self.nav_cta, out.navigation.as_mut()) {
            for item in nav.items.iter_mut().filter(|i| i.is_button) {
                item.label.clone_from(label);
            }
        }
        out
    }
}

/// Escapes `text` and turns `*word*` spans into `<em>word</em>`.
pub fn format_title(text: &str) -> String {
    let escape = |s: &str| html! { (s) }.into_string();

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('*') {
        out.push_str(&escape(&rest[..open]));
        let after = &rest[open + 1..];
        match after.find('*') {
            Some(close) if close > 0 => {
                out.push_str("<em>");
                out.push_str(&escape(&after[..close]));
                out.push_str("</em>");
                rest = &after[close + 1..];
            }
            _ => {
                out.push('*');
                rest = after;
            }
        }
    }
    out.push_str(&escape(rest));
    out
}
