//! Icon registry.
//!
//! Content refers to icons by opaque name. Names are resolved at render time
//! against a closed set; anything unknown renders as no icon.

use maud::{Markup, html};

/// Icons the presentations know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Palette,
    MousePointer,
    Rocket,
    LayoutGrid,
    Sparkles,
    BarChart3,
    Globe,
    Layers,
    Users,
    ArrowRight,
    Check,
    X,
    Star,
}

impl Icon {
    const ALL: [Icon; 13] = [
        Icon::Palette,
        Icon::MousePointer,
        Icon::Rocket,
        Icon::LayoutGrid,
        Icon::Sparkles,
        Icon::BarChart3,
        Icon::Globe,
        Icon::Layers,
        Icon::Users,
        Icon::ArrowRight,
        Icon::Check,
        Icon::X,
        Icon::Star,
    ];

    /// Content-facing name, e.g. `"BarChart3"`.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Palette => "Palette",
            Icon::MousePointer => "MousePointer",
            Icon::Rocket => "Rocket",
            Icon::LayoutGrid => "LayoutGrid",
            Icon::Sparkles => "Sparkles",
            Icon::BarChart3 => "BarChart3",
            Icon::Globe => "Globe",
            Icon::Layers => "Layers",
            Icon::Users => "Users",
            Icon::ArrowRight => "ArrowRight",
            Icon::Check => "Check",
            Icon::X => "X",
            Icon::Star => "Star",
        }
    }

    /// Resolves an icon by its content-facing name.
    pub fn lookup(name: &str) -> Option<Icon> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }

    fn path(self) -> &'static str {
        match self {
            Icon::Palette => "M12 22a10 10 0 1 1 10-10c0 2.8-2.2 4-4 4h-2a2 2 0 0 0-1 3.7A1.5 1.5 0 0 1 12 22z",
            Icon::MousePointer => "M3 3l7 17 2.5-7.5L20 10z",
            Icon::Rocket => "M5 15c-1.5 1.3-2 5-2 5s3.7-.5 5-2m4-3-3-3a22 22 0 0 1 2-4A13 13 0 0 1 22 2c0 2.7-.8 7.5-6 11a22 22 0 0 1-4 2z",
            Icon::LayoutGrid => "M3 3h7v7H3zM14 3h7v7h-7zM14 14h7v7h-7zM3 14h7v7H3z",
            Icon::Sparkles => "M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z",
            Icon::BarChart3 => "M3 3v18h18M18 17V9M13 17V5M8 17v-3",
            Icon::Globe => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20",
            Icon::Layers => "M12 2 2 7l10 5 10-5zM2 17l10 5 10-5M2 12l10 5 10-5",
            Icon::Users => "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.9M16 3.1a4 4 0 0 1 0 7.8",
            Icon::ArrowRight => "M5 12h14M12 5l7 7-7 7",
            Icon::Check => "M20 6 9 17l-5-5",
            Icon::X => "M18 6 6 18M6 6l12 12",
            Icon::Star => "M12 2l3.1 6.3 6.9 1-5 4.9 1.2 6.8-6.2-3.2L5.8 21 7 14.2 2 9.3l6.9-1z",
        }
    }

    /// Inline SVG for this icon.
    pub fn svg(self, size: u32) -> Markup {
        html! {
            svg class={ "icon icon-" (self.name().to_lowercase()) }
                width=(size) height=(size) viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
                path d=(self.path()) {}
            }
        }
    }
}

/// Renders the named icon, or nothing when the name is unknown.
pub fn render_icon(name: &str, size: u32) -> Markup {
    match Icon::lookup(name) {
        Some(icon) => icon.svg(size),
        None => {
            debug!("unknown icon {name:?}, rendering without icon");
            html! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        for icon in Icon::ALL {
            assert_eq!(Icon::lookup(icon.name()), Some(icon));
        }
        assert_eq!(Icon::lookup("palette"), None);
    }

    #[test]
    fn test_unknown_icon_renders_nothing() {
        assert_eq!(render_icon("NoSuchIcon", 20).into_string(), "");
    }

    #[test]
    fn test_known_icon_renders_svg() {
        let svg = render_icon("Rocket", 24).into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("icon-rocket"));
        assert!(svg.contains("width=\"24\""));
    }
}
