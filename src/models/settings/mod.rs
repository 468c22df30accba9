// Settings module
// Timetable display settings, stored as TOML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::services::timetable::DEFAULT_ONLY_LABEL;

/// First grid line available to events; lines before it hold the labels.
pub const DEFAULT_BASE_OFFSET: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableSettings {
    pub base_offset: u32,
    /// Break-week sentinel to force onto the week reference; the reference's
    /// own label is kept when unset
    pub break_label: Option<String>,
    /// Prefix shown before the week label of single-week sessions
    pub only_label: String,
}

impl Default for TimetableSettings {
    fn default() -> Self {
        Self {
            base_offset: DEFAULT_BASE_OFFSET,
            break_label: None,
            only_label: DEFAULT_ONLY_LABEL.to_string(),
        }
    }
}

impl TimetableSettings {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse timetable settings")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize timetable settings")
    }

    /// Load settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "KenBoyle", "TimetableGrid") {
            dirs.config_dir().join("timetable.toml")
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from("timetable.toml")
        }
    }
}
