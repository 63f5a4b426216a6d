//! Content schema for a landing page.
//!
//! Every record is plain data. Field names follow the camelCase JSON layout
//! produced by the editing surface and the CMS.
//!
//! Section slots on [`LandingPageConfig`] are all `Option`: optional sections
//! may legitimately be absent, while an absent required section is a
//! misconfiguration reported by [`crate::compose`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{sections::SectionId, tokens::DesignTokens};

/// A link with visible text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

impl CallToAction {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: String,
    pub href: String,
    /// Rendered as a call-to-action button instead of a plain link.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_button: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NavigationContent {
    pub logo: String,
    pub items: Vec<NavItem>,
}

/// Layout variant of the hero section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeroVariant {
    SplitDiagonal,
    FullBleed,
    #[default]
    StackedCenter,
    EditorialAsymmetric,
    TypographicImpact,
    BentoGrid,
}

impl HeroVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            HeroVariant::SplitDiagonal => "split-diagonal",
            HeroVariant::FullBleed => "full-bleed",
            HeroVariant::StackedCenter => "stacked-center",
            HeroVariant::EditorialAsymmetric => "editorial-asymmetric",
            HeroVariant::TypographicImpact => "typographic-impact",
            HeroVariant::BentoGrid => "bento-grid",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: CallToAction,
    #[serde(rename = "secondaryCTA", default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<String>,
    #[serde(default)]
    pub variant: HeroVariant,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SocialProofBarContent {
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PainPoint {
    pub heading: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemAgitationContent {
    pub headline: String,
    pub description: String,
    pub pain_points: Vec<PainPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Step {
    pub number: u32,
    /// Icon identifier, resolved by [`crate::icons::Icon::lookup`].
    pub icon: String,
    pub heading: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HowItWorksContent {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Feature {
    pub heading: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeaturesContent {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    /// Substring of `quote` to emphasise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    pub name: String,
    pub role: String,
    pub company: String,
    pub avatar_initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TestimonialsContent {
    pub headline: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub description: String,
    pub price_monthly: f64,
    pub price_annual: f64,
    pub features: Vec<PlanFeature>,
    pub cta: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recommended: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PricingContent {
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FaqContent {
    pub headline: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinalCtaContent {
    pub headline: String,
    pub description: String,
    pub cta: CallToAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_element: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SocialLink {
    pub platform: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FooterContent {
    pub logo: String,
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub legal: String,
}

/// The full content of one landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageConfig {
    /// Design tokens applied to every section.
    #[serde(default)]
    pub tokens: DesignTokens,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof_bar: Option<SocialProofBarContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_agitation: Option<ProblemAgitationContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_it_works: Option<HowItWorksContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<FeaturesContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<TestimonialsContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqContent>,
    #[serde(rename = "finalCTA", default, skip_serializing_if = "Option::is_none")]
    pub final_cta: Option<FinalCtaContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterContent>,
}

impl LandingPageConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Whether content for `id` is present.
    pub fn has_section(&self, id: SectionId) -> bool {
        match id {
            SectionId::Navigation => self.navigation.is_some(),
            SectionId::Hero => self.hero.is_some(),
            SectionId::SocialProofBar => self.social_proof_bar.is_some(),
            SectionId::ProblemAgitation => self.problem_agitation.is_some(),
            SectionId::HowItWorks => self.how_it_works.is_some(),
            SectionId::Features => self.features.is_some(),
            SectionId::Testimonials => self.testimonials.is_some(),
            SectionId::Pricing => self.pricing.is_some(),
            SectionId::Faq => self.faq.is_some(),
            SectionId::FinalCta => self.final_cta.is_some(),
            SectionId::Footer => self.footer.is_some(),
        }
    }

    /// Required sections with no content, in canonical order.
    pub fn missing_required(&self) -> Vec<SectionId> {
        SectionId::CANONICAL
            .into_iter()
            .filter(|id| id.is_required() && !self.has_section(*id))
            .collect()
    }
}
