use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use landing::{
    ComposedPage, DesignTokens, LandingError, LandingPageConfig, SectionConfig, Visibility,
    compose, default_content, default_sections, resolve_visibility,
    schema::{HeroContent, NavigationContent},
    toggle_section,
};
use serde::{Deserialize, Serialize};

use crate::{
    data::format::FileFormat,
    error::{BuildError, Result},
};

/// On-disk layout of the section list; TOML has no top-level arrays.
#[derive(Debug, Serialize, Deserialize)]
struct SectionsDoc {
    sections: Vec<SectionConfig>,
}

/// Builder state: the page configuration and the editable section list.
///
/// Edits never modify a workspace in place. Every edit returns a new
/// workspace that replaces the previous one as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub config: LandingPageConfig,
    pub sections: Vec<SectionConfig>,
    /// Where [`Workspace::save`] writes the configuration.
    pub config_path: Option<PathBuf>,
    /// Where [`Workspace::save`] writes the section list.
    pub sections_path: Option<PathBuf>,
}

impl Workspace {
    /// In-memory workspace with the default section list.
    pub fn new(config: LandingPageConfig) -> Self {
        Self {
            config,
            sections: default_sections(),
            config_path: None,
            sections_path: None,
        }
    }

    /// Workspace seeded with the built-in starter content.
    pub fn starter() -> Result<Self> {
        Ok(Self::new(default_content()?))
    }

    /// Loads the configuration from `config_path` and, when the file
    /// exists, the section list from `sections_path`.
    pub fn load(config_path: impl AsRef<Path>, sections_path: Option<impl AsRef<Path>>) -> Result<Self> {
        let config_path = config_path.as_ref().to_path_buf();
        let config: LandingPageConfig = read_file(&config_path)?;

        let sections_path = sections_path.map(|p| p.as_ref().to_path_buf());
        let sections = match &sections_path {
            Some(path) if path.exists() => read_file::<SectionsDoc>(path)?.sections,
            _ => default_sections(),
        };

        debug!(
            "loaded {} with {} sections",
            config_path.display(),
            sections.len()
        );

        Ok(Self {
            config,
            sections,
            config_path: Some(config_path),
            sections_path,
        })
    }

    pub fn with_paths(mut self, config_path: impl Into<PathBuf>, sections_path: Option<PathBuf>) -> Self {
        self.config_path = Some(config_path.into());
        self.sections_path = sections_path;
        self
    }

    /// Replaces the configuration.
    ///
    /// # Errors
    ///
    /// [`LandingError::MissingRequiredSection`] when `config` lacks a
    /// required section; the current workspace stays valid.
    pub fn with_config(&self, config: LandingPageConfig) -> Result<Self> {
        if let Some(section) = config.missing_required().into_iter().next() {
            return Err(LandingError::missing_section(section).into());
        }
        Ok(Self {
            config,
            ..self.clone()
        })
    }

    pub fn with_sections(&self, sections: Vec<SectionConfig>) -> Self {
        Self {
            sections,
            ..self.clone()
        }
    }

    /// Toggles a section. Required and unknown ids leave the list as is.
    pub fn toggle(&self, id: &str) -> Self {
        self.with_sections(toggle_section(&self.sections, id))
    }

    pub fn update_tokens(&self, tokens: DesignTokens) -> Self {
        let mut next = self.clone();
        next.config.tokens = tokens;
        next
    }

    pub fn update_hero(&self, hero: HeroContent) -> Self {
        let mut next = self.clone();
        next.config.hero = Some(hero);
        next
    }

    pub fn update_navigation(&self, navigation: NavigationContent) -> Self {
        let mut next = self.clone();
        next.config.navigation = Some(navigation);
        next
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn visibility(&self) -> Visibility {
        resolve_visibility(&self.sections)
    }

    pub fn compose(&self) -> Result<ComposedPage> {
        Ok(compose(&self.config, Some(&self.visibility()))?)
    }

    /// Writes the configuration and section list to their paths, keeping a
    /// timestamped copy of each file it overwrites.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.config_path {
            write_with_backup(path, &self.config)?;
        }
        if let Some(path) = &self.sections_path {
            let doc = SectionsDoc {
                sections: self.sections.clone(),
            };
            write_with_backup(path, &doc)?;
        }
        Ok(())
    }
}

fn read_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
    format.parse(&content)
}

/// `landing.json` → `landing.bk-<unix-secs>.json`, or
/// `landing.bk-<unix-secs>-<n>.json` when that name is already taken.
pub fn backup_path(path: &Path) -> PathBuf {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let mut backup = path.with_extension(format!("bk-{secs}.{ext}"));
    let mut n = 1u32;
    while backup.exists() {
        backup = path.with_extension(format!("bk-{secs}-{n}.{ext}"));
        n += 1;
    }
    backup
}

/// Writes `value` to `path`, keeping the previous contents as a backup.
/// Unchanged files are left alone.
fn write_with_backup<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = FileFormat::from_path(path)?.to_string_pretty(value)?;

    if path.exists() {
        let previous = fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        if previous == content {
            debug!("{} unchanged", path.display());
            return Ok(());
        }
        let backup = backup_path(path);
        fs::write(&backup, previous).map_err(|e| BuildError::io(&backup, e))?;
        debug!("backup {}", backup.display());
    }
    fs::write(path, content).map_err(|e| BuildError::io(path, e))?;
    info!("saved {}", path.display());
    Ok(())
}
