//! User settings for the sidebar
//!
//! Loaded from `settings.json` in the config directory. Every field has a
//! default so a partial or missing file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lang::DEFAULT_LANGUAGE;
use crate::models::PlanLimits;

/// Settings filename in the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// How to pick between compact and full navigation chrome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Decide from the window width
    #[default]
    Auto,
    Mobile,
    Desktop,
}

/// Release channel, used for the version string in the menu footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    #[default]
    Stable,
    Beta,
    Debug,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Language pack code
    pub language: String,
    /// Use premium quotas
    pub premium: bool,
    pub layout: LayoutMode,
    /// JSON snapshot seeding the store; a built-in sample is used when unset
    pub state_file: Option<PathBuf>,
    pub release: ReleaseChannel,
    /// Skip sidebar transitions
    pub reduce_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            premium: false,
            layout: LayoutMode::Auto,
            state_file: None,
            release: ReleaseChannel::Stable,
            reduce_motion: false,
        }
    }
}

impl Settings {
    /// Load settings from the config directory, defaulting when absent
    pub fn load() -> Result<Self> {
        Ok(config::load_json_or_default(SETTINGS_FILE)?)
    }

    /// Load settings from a specific file, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(config::load_json_file_or_default(path)?)
    }

    /// Whether a settings file exists in the config directory
    pub fn exists() -> bool {
        config::config_exists(SETTINGS_FILE)
    }

    /// Write these settings to the config directory
    pub fn save(&self) -> Result<()> {
        Ok(config::save_json(SETTINGS_FILE, self)?)
    }

    /// Path of the user's string overrides for the configured language
    pub fn lang_overrides_path(&self) -> Option<PathBuf> {
        config::config_path(&format!("lang-{}.json", self.language))
    }

    /// Apply the configured tier to a set of quotas
    pub fn apply_tier(&self, limits: PlanLimits) -> PlanLimits {
        PlanLimits {
            is_premium: self.premium || limits.is_premium,
            ..limits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LimitKind;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.layout, LayoutMode::Auto);
        assert!(settings.state_file.is_none());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "language": "ar", "layout": "mobile" }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.language, "ar");
        assert_eq!(settings.layout, LayoutMode::Mobile);
        assert_eq!(settings.release, ReleaseChannel::Stable);
        assert!(!settings.reduce_motion);
    }

    #[test]
    fn test_reduce_motion_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "reduceMotion": true }"#).unwrap();
        assert!(Settings::load_from(&path).unwrap().reduce_motion);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_apply_tier() {
        let settings = Settings {
            premium: true,
            ..Settings::default()
        };
        let limits = settings.apply_tier(PlanLimits::default());
        assert_eq!(limits.current(LimitKind::DialogFilters), 30);
    }
}
