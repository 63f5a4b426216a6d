//! Section registry, visibility resolution and toggling.
//!
//! The editing surface owns an ordered `Vec<SectionConfig>`; everything in
//! this module treats it as immutable input and returns fresh values, so a
//! caller can detect changes by comparison and keep old values for undo.

use std::{collections::HashMap, fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The closed set of sections a landing page is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SectionId {
    #[serde(rename = "navigation")]
    Navigation,
    #[serde(rename = "hero")]
    Hero,
    #[serde(rename = "socialProofBar")]
    SocialProofBar,
    #[serde(rename = "problemAgitation")]
    ProblemAgitation,
    #[serde(rename = "howItWorks")]
    HowItWorks,
    #[serde(rename = "features")]
    Features,
    #[serde(rename = "testimonials")]
    Testimonials,
    #[serde(rename = "pricing")]
    Pricing,
    #[serde(rename = "faq")]
    Faq,
    #[serde(rename = "finalCTA")]
    FinalCta,
    #[serde(rename = "footer")]
    Footer,
}

impl SectionId {
    /// Render order. Never changed by visibility or toggling.
    pub const CANONICAL: [SectionId; 11] = [
        SectionId::Navigation,
        SectionId::Hero,
        SectionId::SocialProofBar,
        SectionId::ProblemAgitation,
        SectionId::HowItWorks,
        SectionId::Features,
        SectionId::Testimonials,
        SectionId::Pricing,
        SectionId::Faq,
        SectionId::FinalCta,
        SectionId::Footer,
    ];

    /// Identifier as used in configuration documents and visibility maps.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Navigation => "navigation",
            SectionId::Hero => "hero",
            SectionId::SocialProofBar => "socialProofBar",
            SectionId::ProblemAgitation => "problemAgitation",
            SectionId::HowItWorks => "howItWorks",
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::Faq => "faq",
            SectionId::FinalCta => "finalCTA",
            SectionId::Footer => "footer",
        }
    }

    /// Human readable label shown by the editing surface.
    pub fn display_name(self) -> &'static str {
        match self {
            SectionId::Navigation => "Navigation",
            SectionId::Hero => "Hero",
            SectionId::SocialProofBar => "Social Proof Bar",
            SectionId::ProblemAgitation => "Problem Agitation",
            SectionId::HowItWorks => "How It Works",
            SectionId::Features => "Features / Benefits",
            SectionId::Testimonials => "Testimonials",
            SectionId::Pricing => "Pricing",
            SectionId::Faq => "FAQ",
            SectionId::FinalCta => "Final CTA",
            SectionId::Footer => "Footer",
        }
    }

    /// Whether the page must always carry this section.
    pub fn is_required(self) -> bool {
        !matches!(
            self,
            SectionId::SocialProofBar
                | SectionId::ProblemAgitation
                | SectionId::Pricing
                | SectionId::Faq
        )
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown section identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::CANONICAL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// One entry of the editable section list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionConfig {
    /// Section identifier, matched against [`SectionId::as_str`].
    pub id: String,
    /// Label for the editing surface.
    pub name: String,
    /// Stored enabled flag. Ignored for required sections.
    pub enabled: bool,
    /// Required sections cannot be turned off.
    pub required: bool,
}

impl SectionConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, required: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            required,
        }
    }

    /// The visibility this entry resolves to.
    pub fn resolved(&self) -> bool {
        self.required || self.enabled
    }
}

/// The section list the builder starts from: every section enabled, in
/// canonical order.
pub fn default_sections() -> Vec<SectionConfig> {
    SectionId::CANONICAL
        .into_iter()
        .map(|id| SectionConfig::new(id.as_str(), id.display_name(), id.is_required()))
        .collect()
}

/// Resolved visibility keyed by section id.
///
/// Only ids present in the source sequence have an entry. What an absent id
/// means is decided by each caller through [`Visibility::is_enabled_or`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Visibility(HashMap<String, bool>);

impl Visibility {
    /// Resolved flag for `id`, if the id was present.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.0.get(id).copied()
    }

    /// Resolved flag for `id`, or `fallback` when the id is absent.
    pub fn is_enabled_or(&self, id: &str, fallback: bool) -> bool {
        self.get(id).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, bool)> for Visibility {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Folds the section list into a visibility map.
///
/// Required entries always resolve to `true`. On duplicate ids the last
/// entry wins.
pub fn resolve_visibility(sections: &[SectionConfig]) -> Visibility {
    let mut map = HashMap::with_capacity(sections.len());
    for s in sections {
        map.insert(s.id.clone(), s.resolved());
    }
    Visibility(map)
}

/// Returns a copy of `sections` with the entry `id` flipped.
///
/// Toggling a required section, or an id that is not in the list, returns
/// an identical copy. On duplicate ids only the last entry, the one
/// [`resolve_visibility`] reads, is flipped.
pub fn toggle_section(sections: &[SectionConfig], id: &str) -> Vec<SectionConfig> {
    let Some(index) = sections.iter().rposition(|s| s.id == id) else {
        debug!("toggle ignored, no section {id:?}");
        return sections.to_vec();
    };
    if sections[index].required {
        debug!("toggle ignored, section {id:?} is required");
        return sections.to_vec();
    }

    let mut next = sections.to_vec();
    next[index].enabled = !next[index].enabled;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optional_ids() -> Vec<&'static str> {
        SectionId::CANONICAL
            .into_iter()
            .filter(|id| !id.is_required())
            .map(SectionId::as_str)
            .collect()
    }

    #[test]
    fn test_default_sections() {
        let sections = default_sections();
        assert_eq!(sections.len(), 11);
        assert!(sections.iter().all(|s| s.enabled));
        let required: Vec<_> = sections
            .iter()
            .filter(|s| s.required)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            required,
            [
                "navigation",
                "hero",
                "howItWorks",
                "features",
                "testimonials",
                "finalCTA",
                "footer"
            ]
        );
        assert_eq!(sections[5].name, "Features / Benefits");
    }

    #[test]
    fn test_section_id_round_trip_through_str() {
        for id in SectionId::CANONICAL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "finalCta".parse::<SectionId>(),
            Err(UnknownSection("finalCta".to_string()))
        );
    }

    #[test]
    fn test_toggle_required_is_noop() {
        let mut sections = default_sections();
        sections[1].enabled = false; // stored flag on a required entry
        for s in sections.clone().iter().filter(|s| s.required) {
            assert_eq!(toggle_section(&sections, &s.id), sections);
        }
    }

    #[test]
    fn test_toggle_optional_flips_only_target() {
        let sections = default_sections();
        let toggled = toggle_section(&sections, "pricing");
        assert_eq!(toggled.len(), sections.len());
        for (before, after) in sections.iter().zip(&toggled) {
            assert_eq!(before.id, after.id);
            if before.id == "pricing" {
                assert_eq!(after.enabled, !before.enabled);
            } else {
                assert_eq!(before, after);
            }
        }
        // input untouched
        assert!(sections.iter().all(|s| s.enabled));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let sections = default_sections();
        for id in optional_ids() {
            let twice = toggle_section(&toggle_section(&sections, id), id);
            assert_eq!(twice, sections);
        }
    }

    #[test]
    fn test_toggle_duplicate_flips_last_entry() {
        let sections = vec![
            SectionConfig::new("faq", "FAQ", false),
            SectionConfig {
                enabled: false,
                ..SectionConfig::new("faq", "FAQ", false)
            },
        ];
        assert_eq!(resolve_visibility(&sections).get("faq"), Some(false));

        let toggled = toggle_section(&sections, "faq");
        assert_eq!(toggled[0], sections[0]);
        assert!(toggled[1].enabled);
        assert_eq!(resolve_visibility(&toggled).get("faq"), Some(true));
        assert_eq!(toggle_section(&toggled, "faq"), sections);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let sections = default_sections();
        assert_eq!(toggle_section(&sections, "gallery"), sections);
    }

    #[test]
    fn test_visibility_required_override() {
        let mut sections = default_sections();
        for s in sections.iter_mut() {
            s.enabled = false;
        }
        let vis = resolve_visibility(&sections);
        for s in &sections {
            assert_eq!(vis.get(&s.id), Some(s.required));
        }
    }

    #[test]
    fn test_visibility_keys_are_exactly_input_ids() {
        let sections = vec![
            SectionConfig::new("hero", "Hero", true),
            SectionConfig::new("faq", "FAQ", false),
        ];
        let vis = resolve_visibility(&sections);
        assert_eq!(vis.len(), 2);
        assert_eq!(vis.get("pricing"), None);
        assert!(vis.is_enabled_or("pricing", true));
        assert!(!vis.is_enabled_or("pricing", false));
    }

    #[test]
    fn test_visibility_last_write_wins() {
        let mut first = SectionConfig::new("faq", "FAQ", false);
        first.enabled = true;
        let mut second = first.clone();
        second.enabled = false;
        let vis = resolve_visibility(&[first, second]);
        assert_eq!(vis.get("faq"), Some(false));
    }
}
