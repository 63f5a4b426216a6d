//! Composition pipeline.
//!
//! [`compose`] walks the canonical section order once, decides for each
//! section whether it renders, and concatenates the presentations. The pass
//! borrows the configuration and visibility map for its duration only and
//! never mutates them.

use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

use crate::{
    error::{LandingError, Result},
    schema::LandingPageConfig,
    sections::{SectionId, Visibility},
    tokens::{TokenContext, resolve_tokens},
};

mod sections;

pub use sections::Present;

/// Read-only state shared by every presentation in one pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Resolved design tokens.
    pub tokens: &'a TokenContext,
}

impl<'a> RenderContext<'a> {
    pub fn new(tokens: &'a TokenContext) -> Self {
        Self { tokens }
    }

    /// CSS reference to a token, with the resolved value as fallback so a
    /// section still renders correctly outside the page wrapper.
    pub fn var(&self, name: &str) -> String {
        match self.tokens.get(name) {
            Some(value) => format!("var(--{name}, {value})"),
            None => TokenContext::var(name),
        }
    }
}

/// Output of one section presentation.
#[derive(Debug, Clone)]
pub struct RenderedSection {
    pub id: SectionId,
    pub markup: Markup,
}

/// Sections rendered by one composition pass, in canonical order.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    /// Inline style carrying the CSS variables for every section.
    pub style: String,
    pub sections: Vec<RenderedSection>,
}

impl ComposedPage {
    /// Ids of the rendered sections, in output order.
    pub fn ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// The page body: every section inside a wrapper carrying the tokens.
    pub fn body(&self) -> Markup {
        html! {
            div class="landing-page" style=(self.style) {
                @for section in &self.sections {
                    (section.markup)
                }
            }
        }
    }

    /// A standalone HTML document with `head` placed inside `<head>`.
    pub fn into_document(self, head: impl Render) -> String {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    (head)
                }
                body {
                    (self.body())
                }
            }
        }
        .into_string()
    }
}

impl Render for ComposedPage {
    fn render(&self) -> Markup {
        self.body()
    }
}

/// Head markup for a document rendered without SEO metadata.
pub fn minimal_head(title: &str) -> Markup {
    html! {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (title) }
    }
}

/// Wraps already escaped markup, e.g. a generated head fragment.
pub fn trusted(html: impl Into<String>) -> PreEscaped<String> {
    PreEscaped(html.into())
}

/// Composes the page from its configuration.
///
/// A section renders when its content is present and its visibility is not
/// explicitly `false`. When `visibility` is `None`, or lacks an id, the
/// section counts as visible.
///
/// # Errors
///
/// Returns [`LandingError::MissingRequiredSection`] for the first required
/// section without content; nothing is rendered in that case.
pub fn compose(config: &LandingPageConfig, visibility: Option<&Visibility>) -> Result<ComposedPage> {
    if let Some(section) = config.missing_required().into_iter().next() {
        return Err(LandingError::missing_section(section));
    }

    let tokens = resolve_tokens(&config.tokens);
    let ctx = RenderContext::new(&tokens);

    let mut sections = Vec::new();
    for id in SectionId::CANONICAL {
        let visible = visibility.is_none_or(|v| v.is_enabled_or(id.as_str(), true));
        if !visible {
            trace!("section {id} hidden");
            continue;
        }

        let markup = match id {
            SectionId::Navigation => config.navigation.as_ref().map(|c| c.present(&ctx)),
            SectionId::Hero => config.hero.as_ref().map(|c| c.present(&ctx)),
            SectionId::SocialProofBar => config.social_proof_bar.as_ref().map(|c| c.present(&ctx)),
            SectionId::ProblemAgitation => {
                config.problem_agitation.as_ref().map(|c| c.present(&ctx))
            }
            SectionId::HowItWorks => config.how_it_works.as_ref().map(|c| c.present(&ctx)),
            SectionId::Features => config.features.as_ref().map(|c| c.present(&ctx)),
            SectionId::Testimonials => config.testimonials.as_ref().map(|c| c.present(&ctx)),
            SectionId::Pricing => config.pricing.as_ref().map(|c| c.present(&ctx)),
            SectionId::Faq => config.faq.as_ref().map(|c| c.present(&ctx)),
            SectionId::FinalCta => config.final_cta.as_ref().map(|c| c.present(&ctx)),
            SectionId::Footer => config.footer.as_ref().map(|c| c.present(&ctx)),
        };

        match markup {
            Some(markup) => sections.push(RenderedSection { id, markup }),
            None => trace!("section {id} has no content, skipped"),
        }
    }

    debug!("composed {} sections", sections.len());

    Ok(ComposedPage {
        style: tokens.to_style(),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        defaults::default_content,
        sections::{default_sections, resolve_visibility, toggle_section},
    };

    fn required_ids() -> Vec<SectionId> {
        SectionId::CANONICAL
            .into_iter()
            .filter(|id| id.is_required())
            .collect()
    }

    #[test]
    fn test_compose_default_renders_everything_in_order() {
        let config = default_content().unwrap();
        let page = compose(&config, None).unwrap();
        assert_eq!(page.ids(), SectionId::CANONICAL);
    }

    #[test]
    fn test_disabled_optional_section_is_omitted() {
        let config = default_content().unwrap();
        let sections = toggle_section(&default_sections(), "pricing");
        let vis = resolve_visibility(&sections);

        let page = compose(&config, Some(&vis)).unwrap();
        assert!(!page.contains(SectionId::Pricing));

        let ids = page.ids();
        let rendered_required: Vec<_> = ids.iter().copied().filter(|id| id.is_required()).collect();
        assert_eq!(rendered_required, required_ids());

        let mut expected = SectionId::CANONICAL.to_vec();
        expected.retain(|id| *id != SectionId::Pricing);
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_missing_hero_fails_fast() {
        let mut config = default_content().unwrap();
        config.hero = None;
        let err = compose(&config, None).unwrap_err();
        assert!(matches!(
            err,
            LandingError::MissingRequiredSection {
                section: SectionId::Hero
            }
        ));
    }

    #[test]
    fn test_absent_optional_content_is_skipped() {
        let mut config = default_content().unwrap();
        config.faq = None;
        config.social_proof_bar = None;
        let page = compose(&config, None).unwrap();
        assert!(!page.contains(SectionId::Faq));
        assert!(!page.contains(SectionId::SocialProofBar));
        assert_eq!(page.sections.len(), 9);
    }

    #[test]
    fn test_missing_visibility_key_defaults_to_visible() {
        let config = default_content().unwrap();
        let vis: Visibility = [("faq".to_string(), false)].into_iter().collect();
        let page = compose(&config, Some(&vis)).unwrap();
        assert!(!page.contains(SectionId::Faq));
        assert!(page.contains(SectionId::Pricing));
        assert_eq!(page.sections.len(), 10);
    }

    #[test]
    fn test_toggling_does_not_reorder() {
        let config = default_content().unwrap();
        let mut sections = default_sections();
        sections.reverse();
        let sections = toggle_section(&sections, "faq");
        let page = compose(&config, Some(&resolve_visibility(&sections))).unwrap();
        let ids = page.ids();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| SectionId::CANONICAL.iter().position(|c| c == id));
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_compose_does_not_mutate_inputs() {
        let config = default_content().unwrap();
        let vis = resolve_visibility(&default_sections());
        let (config_before, vis_before) = (config.clone(), vis.clone());
        compose(&config, Some(&vis)).unwrap();
        assert_eq!(config, config_before);
        assert_eq!(vis, vis_before);
    }

    #[test]
    fn test_document_carries_tokens() {
        let mut config = default_content().unwrap();
        config.tokens.colors.primary = "#ff0000".to_string();
        let html = compose(&config, None)
            .unwrap()
            .into_document(minimal_head("Preview"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Preview</title>"));
        assert!(html.contains("--color-primary: #ff0000;"));
        assert!(html.contains("id=\"features\""));
    }
}
