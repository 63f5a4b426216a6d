//! Built-in starter content.

use crate::{error::Result, schema::LandingPageConfig};

const DEFAULT_CONTENT: &str = include_str!("../assets/default-content.json");

/// The starter page the builder opens with.
pub fn default_content() -> Result<LandingPageConfig> {
    LandingPageConfig::from_json(DEFAULT_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::HeroVariant, tokens::DesignTokens};

    #[test]
    fn test_default_content_is_complete() {
        let config = default_content().unwrap();
        assert!(config.missing_required().is_empty());
        assert_eq!(config.tokens, DesignTokens::default());

        let hero = config.hero.unwrap();
        assert_eq!(hero.variant, HeroVariant::StackedCenter);
        assert_eq!(config.features.unwrap().features.len(), 6);
        let pricing = config.pricing.unwrap();
        assert_eq!(pricing.plans.iter().filter(|p| p.recommended).count(), 1);
    }
}
