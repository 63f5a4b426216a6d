//! Design tokens and their mapping onto CSS custom properties.
//!
//! A [`DesignTokens`] value is always complete: every color role, font role
//! and radius must be present, so the resolver never needs a per-key
//! fallback. [`resolve_tokens`] flattens the record into a [`TokenContext`]
//! that is threaded, read-only, through a single composition pass.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete set of design tokens for one page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    /// Semantic color roles.
    pub colors: ColorTokens,
    /// Font stacks.
    pub fonts: FontTokens,
    /// Corner radii.
    pub border_radius: RadiusTokens,
}

/// Semantic color roles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub surface_alt: String,
    pub text: String,
    pub text_muted: String,
    pub text_inverse: String,
    pub border: String,
}

/// Heading and body font stacks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FontTokens {
    pub heading: String,
    pub body: String,
}

/// Corner radii from small to fully rounded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RadiusTokens {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

const SYSTEM_FONT_STACK: &str =
    "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: "#6366f1".into(),
            primary_light: "#818cf8".into(),
            primary_dark: "#4f46e5".into(),
            secondary: "#a855f7".into(),
            accent: "#06b6d4".into(),
            background: "#ffffff".into(),
            surface: "#f8fafc".into(),
            surface_alt: "#f1f5f9".into(),
            text: "#0f172a".into(),
            text_muted: "#64748b".into(),
            text_inverse: "#ffffff".into(),
            border: "#e2e8f0".into(),
        }
    }
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            heading: SYSTEM_FONT_STACK.into(),
            body: SYSTEM_FONT_STACK.into(),
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: "0.375rem".into(),
            md: "0.5rem".into(),
            lg: "0.75rem".into(),
            full: "9999px".into(),
        }
    }
}

/// Names of every CSS variable produced by [`resolve_tokens`], in emission order.
pub const TOKEN_KEYS: [&str; 18] = [
    "color-primary",
    "color-primary-light",
    "color-primary-dark",
    "color-secondary",
    "color-accent",
    "color-bg",
    "color-surface",
    "color-surface-alt",
    "color-text",
    "color-text-muted",
    "color-text-inverse",
    "color-border",
    "font-heading",
    "font-body",
    "radius-sm",
    "radius-md",
    "radius-lg",
    "radius-full",
];

/// Resolved token values keyed by CSS variable name (without the `--` prefix).
///
/// The context is immutable once built; a new pass builds a new context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenContext {
    vars: Vec<(&'static str, String)>,
}

impl TokenContext {
    /// Looks up a variable value by name, e.g. `"color-primary"`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.vars.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Inline style declarations setting every variable, e.g.
    /// `--color-primary: #6366f1; --color-primary-light: ...`.
    pub fn to_style(&self) -> String {
        self.vars
            .iter()
            .map(|(k, v)| format!("--{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A `var(--name)` reference usable from presentation styles.
    pub fn var(name: &str) -> String {
        format!("var(--{name})")
    }
}

/// Flattens design tokens into CSS variable name/value pairs.
///
/// Values are passed through unchanged; color syntax is not validated.
pub fn resolve_tokens(tokens: &DesignTokens) -> TokenContext {
    let c = &tokens.colors;
    let f = &tokens.fonts;
    let r = &tokens.border_radius;
    let values = [
        &c.primary,
        &c.primary_light,
        &c.primary_dark,
        &c.secondary,
        &c.accent,
        &c.background,
        &c.surface,
        &c.surface_alt,
        &c.text,
        &c.text_muted,
        &c.text_inverse,
        &c.border,
        &f.heading,
        &f.body,
        &r.sm,
        &r.md,
        &r.lg,
        &r.full,
    ];

    TokenContext {
        vars: TOKEN_KEYS
            .iter()
            .zip(values)
            .map(|(k, v)| (*k, v.clone()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_resolve_contains_every_key() {
        let ctx = resolve_tokens(&DesignTokens::default());
        let keys: HashSet<_> = ctx.iter().map(|(k, _)| k).collect();
        let expected: HashSet<_> = TOKEN_KEYS.iter().copied().collect();
        assert_eq!(keys, expected);
        assert_eq!(ctx.len(), TOKEN_KEYS.len());
    }

    #[test]
    fn test_values_pass_through_unmodified() {
        let mut tokens = DesignTokens::default();
        tokens.colors.primary = "not-a-color".to_string();
        tokens.colors.background = "#000".to_string();
        tokens.fonts.heading = "'DM Serif Display', serif".to_string();
        tokens.border_radius.full = "50%".to_string();

        let ctx = resolve_tokens(&tokens);
        assert_eq!(ctx.get("color-primary"), Some("not-a-color"));
        assert_eq!(ctx.get("color-bg"), Some("#000"));
        assert_eq!(ctx.get("font-heading"), Some("'DM Serif Display', serif"));
        assert_eq!(ctx.get("radius-full"), Some("50%"));
        assert_eq!(ctx.get("color-surface-alt"), Some("#f1f5f9"));
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let tokens = DesignTokens::default();
        assert_eq!(resolve_tokens(&tokens), resolve_tokens(&tokens));
    }

    #[test]
    fn test_to_style() {
        let style = resolve_tokens(&DesignTokens::default()).to_style();
        assert!(style.starts_with("--color-primary: #6366f1;"));
        assert!(style.ends_with("--radius-full: 9999px;"));
        assert_eq!(TokenContext::var("color-text"), "var(--color-text)");
    }

    #[test]
    fn test_partial_tokens_are_rejected() {
        let json = r##"{
            "colors": {"primary": "#fff"},
            "fonts": {"heading": "a", "body": "b"},
            "borderRadius": {"sm": "1", "md": "2", "lg": "3", "full": "4"}
        }"##;
        assert!(serde_json::from_str::<DesignTokens>(json).is_err());
    }
}
