//! Error types for landing page composition.

use thiserror::Error;

use crate::sections::SectionId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LandingError>;

/// Errors produced while loading or composing a landing page.
#[derive(Debug, Error)]
pub enum LandingError {
    /// A section the page cannot ship without has no content.
    ///
    /// Fatal to the composition pass; no partial output is produced.
    #[error("required section `{section}` is missing from the configuration")]
    MissingRequiredSection {
        /// The section that was expected.
        section: SectionId,
    },

    /// A configuration document could not be parsed.
    #[error("invalid landing page configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl LandingError {
    /// Creates a [`LandingError::MissingRequiredSection`] error.
    pub fn missing_section(section: SectionId) -> Self {
        Self::MissingRequiredSection { section }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_message() {
        let err = LandingError::missing_section(SectionId::Hero);
        assert_eq!(
            err.to_string(),
            "required section `hero` is missing from the configuration"
        );
    }
}
