use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{BuildError, Result};

/// On-disk encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        match ext {
            "json" => Ok(FileFormat::Json),
            "toml" | "tml" => Ok(FileFormat::Toml),
            _ => Err(BuildError::UnsupportedFormat {
                ext: ext.to_string(),
            }),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, s: &str) -> Result<T> {
        Ok(match self {
            FileFormat::Json => serde_json::from_str(s)?,
            FileFormat::Toml => toml::from_str(s)?,
        })
    }

    pub fn to_string_pretty<T: Serialize>(self, value: &T) -> Result<String> {
        Ok(match self {
            FileFormat::Json => serde_json::to_string_pretty(value)?,
            FileFormat::Toml => toml::to_string_pretty(value)?,
        })
    }
}
