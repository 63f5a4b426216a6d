//! Error types for head generation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeoError>;

#[derive(Debug, Error)]
pub enum SeoError {
    /// The page URL cannot be parsed or has no `scheme://host` origin.
    #[error("invalid page url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A structured-data block could not be serialized.
    #[error("json-ld serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeoError {
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
