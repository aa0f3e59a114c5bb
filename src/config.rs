//! Configuration handling for the card maker

use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Link origin used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "https://salami-qr.app";

/// Rasterization scale used when nothing is configured
pub const DEFAULT_CAPTURE_SCALE: f32 = 2.0;

/// Card footer used when nothing is configured
pub const DEFAULT_FOOTER: &str = "Created by Monsur Alam";

/// User configuration. Every field is optional; resolvers fill in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CardConfig {
    /// Where exported PNG and PDF files are written
    pub output_dir: Option<PathBuf>,
    /// Origin that share links are built on
    pub base_url: Option<String>,
    /// Pixel density of the rendered card
    pub capture_scale: Option<f32>,
    /// Text printed at the bottom of the card; empty hides the footer
    pub footer_text: Option<String>,
}

impl CardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("app", "salami-qr", "salami-card")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: CardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file, returning where it was written
    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        self.save_to(&path)?;
        Ok(Some(path))
    }

    fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        output_dir: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Self {
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Non-positive or non-finite scales fall back to the default
    pub fn resolved_capture_scale(&self) -> f32 {
        self.capture_scale
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_CAPTURE_SCALE)
    }

    pub fn resolved_footer(&self) -> String {
        self.footer_text
            .clone()
            .unwrap_or_else(|| DEFAULT_FOOTER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CardConfig::default();
        assert!(config.output_dir.is_none());
        assert!(config.base_url.is_none());
        assert!(config.capture_scale.is_none());
        assert!(config.footer_text.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = CardConfig::default();
        assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.resolved_capture_scale(), 2.0);
        assert_eq!(config.resolved_footer(), DEFAULT_FOOTER);
        // Either the download dir or the working dir, never empty
        assert!(!config.resolved_output_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_invalid_scale_falls_back() {
        let config = CardConfig {
            capture_scale: Some(0.0),
            ..Default::default()
        };
        assert_eq!(config.resolved_capture_scale(), DEFAULT_CAPTURE_SCALE);

        let config = CardConfig {
            capture_scale: Some(f32::NAN),
            ..Default::default()
        };
        assert_eq!(config.resolved_capture_scale(), DEFAULT_CAPTURE_SCALE);
    }

    #[test]
    fn test_empty_footer_is_kept() {
        let config = CardConfig {
            footer_text: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.resolved_footer(), "");
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = CardConfig {
            output_dir: Some(PathBuf::from("/from/file")),
            base_url: Some("https://file.example".to_string()),
            ..Default::default()
        }
        .with_overrides(Some(PathBuf::from("/from/cli")), None);

        assert_eq!(config.resolved_output_dir(), PathBuf::from("/from/cli"));
        assert_eq!(config.resolved_base_url(), "https://file.example");
    }

    #[test]
    fn test_serialization() {
        let config = CardConfig {
            output_dir: Some(PathBuf::from("/tmp/cards")),
            base_url: Some("https://example.com".to_string()),
            capture_scale: Some(3.0),
            footer_text: Some("Eid Mubarak".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: CardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: CardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CardConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"base_url": "https://example.com", "theme": "dark"}"#;
        let parsed: CardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.base_url, Some("https://example.com".to_string()));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = CardConfig {
            capture_scale: Some(1.5),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = CardConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let loaded = CardConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, CardConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(CardConfig::load_from(&path).is_err());
    }
}
