//! Error types for the editing surface.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid toml: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("toml serialization failed: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Only `.json` and `.toml` files are read and written.
    #[error("unsupported config file extension: {ext:?}")]
    UnsupportedFormat { ext: String },

    #[error(transparent)]
    Landing(#[from] landing::LandingError),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
