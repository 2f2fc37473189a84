use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Current settings version. Files written by a newer build are refused
/// rather than silently losing fields on the next save.
pub const CURRENT_VERSION: u32 = 1;

/// How reports are laid out, persisted as JSON next to the host's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Schema version. A file without one is read as the current version.
    pub config_version: u32,
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Joins the checked entries of a list line.
    pub list_separator: String,
    pub styles: DocumentStyles,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            indent_width: 2,
            list_separator: ", ".to_string(),
            styles: DocumentStyles::default(),
        }
    }
}

/// Load settings, filling absent fields with their defaults.
pub fn load_settings(path: &Path) -> Result<ReportSettings, ExportError> {
    let contents = std::fs::read_to_string(path)?;

    // Check the version on the raw JSON before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let version = check_version(&json)?;

    let mut settings: ReportSettings = serde_json::from_value(json)?;
    settings.config_version = CURRENT_VERSION;
    tracing::debug!(path = %path.display(), version, "settings loaded");
    Ok(settings)
}

fn check_version(json: &serde_json::Value) -> Result<u32, ExportError> {
    let obj = json
        .as_object()
        .ok_or_else(|| ExportError::InvalidSettings("settings are not a JSON object".into()))?;
    let version = match obj.get("config_version") {
        None => CURRENT_VERSION,
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| ExportError::InvalidSettings(format!("bad config_version {v}")))?,
    };
    if version > CURRENT_VERSION {
        return Err(ExportError::UnsupportedSettingsVersion {
            found: version,
            supported: CURRENT_VERSION,
        });
    }
    Ok(version)
}

pub fn save_settings(path: &Path, settings: &ReportSettings) -> Result<(), ExportError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = settings.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = temp_path(path);
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "report settings saved");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
