//! Display configuration for the kiosk
//!
//! Loaded from an optional `kiosk.toml` next to the binary; every field has
//! a default so the kiosk runs with no file at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse kiosk configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Overlay language. Hindi is a placeholder toggle for now; all copy ships
/// in English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

/// Top-level kiosk display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Window title
    pub title: String,
    /// Borderless fullscreen for the museum floor
    pub fullscreen: bool,
    /// Attract mode: orbit input disabled, model auto-rotates at the larger
    /// display scale
    pub attract_mode: bool,
    /// Root directory for models and environments
    pub asset_dir: String,
    /// Start-screen background video reference (playback is delegated to the
    /// platform shell; kept here so the asset stays named in one place)
    pub start_video: Option<String>,
    /// Default overlay language
    pub language: Language,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            title: "Gaganyaan Exploration".to_string(),
            fullscreen: true,
            attract_mode: false,
            asset_dir: "assets".to_string(),
            start_video: None,
            language: Language::English,
        }
    }
}

impl KioskConfig {
    /// Parse a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = KioskConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, KioskConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = KioskConfig::from_toml_str(
            r#"
            fullscreen = false
            attract_mode = true
            language = "hindi"
            start_video = "videos/gaganyaan-screen-background.mp4"
            "#,
        )
        .expect("config parses");
        assert!(!config.fullscreen);
        assert!(config.attract_mode);
        assert_eq!(config.language, Language::Hindi);
        assert_eq!(
            config.start_video.as_deref(),
            Some("videos/gaganyaan-screen-background.mp4")
        );
        // Untouched fields keep their defaults
        assert_eq!(config.asset_dir, "assets");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(KioskConfig::from_toml_str("fullscreen = \"maybe\"").is_err());
    }
}
