//! Configuration handling for the lead form

use crate::endpoint::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the endpoint URL
pub const ENDPOINT_ENV: &str = "LEAD_WIZARD_ENDPOINT";

const DEFAULT_ACCENT: Color = Color::Rgb(0xae, 0x25, 0x35);
const DEFAULT_SIGNATURE: &str = "Ember Casas";

/// User configuration for the lead form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeadFormConfig {
    /// Where completed leads are posted
    pub endpoint_url: Option<String>,
    /// Dialog accent as `#rrggbb`
    pub accent_color: Option<String>,
    /// Name signed under the thank-you message
    pub signature: Option<String>,
    /// Brand shown in the header and footer
    pub brand_name: Option<String>,
    /// HTTP timeout. None waits as long as the transport does.
    pub request_timeout_secs: Option<u64>,
}

impl LeadFormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "embercasas", "lead-wizard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "embercasas", "lead-wizard")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                config.endpoint_url = Some(url);
            }
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: LeadFormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Write a config file with the built-in defaults spelled out, unless one
    /// already exists. Failures are logged and the app runs on defaults.
    pub fn init_file() {
        let Some(path) = Self::config_path() else {
            return;
        };
        match Self::init_file_at(&path) {
            Ok(true) => tracing::info!(path = %path.display(), "wrote default configuration"),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not write default configuration")
            }
        }
    }

    /// Returns true when a file was written
    fn init_file_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::explicit_defaults().save_to(path)?;
        Ok(true)
    }

    fn explicit_defaults() -> Self {
        Self {
            endpoint_url: Some(DEFAULT_ENDPOINT.to_string()),
            accent_color: Some("#ae2535".to_string()),
            signature: Some(DEFAULT_SIGNATURE.to_string()),
            brand_name: Some(DEFAULT_SIGNATURE.to_string()),
            request_timeout_secs: None,
        }
    }

    /// Save configuration to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint_url.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn signature(&self) -> &str {
        self.signature.as_deref().unwrap_or(DEFAULT_SIGNATURE)
    }

    pub fn brand_name(&self) -> &str {
        self.brand_name.as_deref().unwrap_or(DEFAULT_SIGNATURE)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Accent color for dialogs, falling back to the brand red on bad input
    pub fn accent(&self) -> Color {
        self.accent_color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(DEFAULT_ACCENT)
    }
}

/// Parse `#rrggbb`
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LeadFormConfig::default();
        assert!(config.endpoint_url.is_none());
        assert!(config.accent_color.is_none());
        assert!(config.signature.is_none());
        assert!(config.brand_name.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = LeadFormConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.signature(), "Ember Casas");
        assert_eq!(config.brand_name(), "Ember Casas");
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.accent(), Color::Rgb(0xae, 0x25, 0x35));
    }

    #[test]
    fn test_serialization() {
        let config = LeadFormConfig {
            endpoint_url: Some("http://localhost:8080/exec".to_string()),
            accent_color: Some("#00ff00".to_string()),
            signature: Some("The Team".to_string()),
            brand_name: Some("Acme Homes".to_string()),
            request_timeout_secs: Some(30),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: LeadFormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.endpoint(), "http://localhost:8080/exec");
        assert_eq!(parsed.accent(), Color::Rgb(0, 255, 0));
        assert_eq!(parsed.signature(), "The Team");
        assert_eq!(parsed.brand_name(), "Acme Homes");
        assert_eq!(parsed.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: LeadFormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"signature": "Sam", "unknown_field": "value"}"#;
        let parsed: LeadFormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.signature(), "Sam");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ae2535"), Some(Color::Rgb(0xae, 0x25, 0x35)));
        assert_eq!(parse_hex_color(" #FFFFFF "), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("ae2535"), None);
        assert_eq!(parse_hex_color("#ae25"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_invalid_accent_falls_back() {
        let config = LeadFormConfig {
            accent_color: Some("red".to_string()),
            ..Default::default()
        };
        assert_eq!(config.accent(), DEFAULT_ACCENT);
    }

    #[test]
    fn test_explicit_defaults_match_accessors() {
        let explicit = LeadFormConfig::explicit_defaults();
        let implicit = LeadFormConfig::default();
        assert_eq!(explicit.endpoint(), implicit.endpoint());
        assert_eq!(explicit.accent(), implicit.accent());
        assert_eq!(explicit.signature(), implicit.signature());
        assert_eq!(explicit.brand_name(), implicit.brand_name());
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("lead-wizard-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_config_path_ends_with_config_json() {
        if let Some(path) = LeadFormConfig::config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
        }
    }

    #[test]
    fn test_init_file_writes_defaults_once() {
        let dir = scratch_dir();
        let path = dir.join("nested").join("config.json");

        assert!(LeadFormConfig::init_file_at(&path).unwrap());
        let written: LeadFormConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.endpoint_url.as_deref(), Some(DEFAULT_ENDPOINT));
        assert_eq!(written.accent_color.as_deref(), Some("#ae2535"));

        fs::write(&path, r#"{"signature": "Sam"}"#).unwrap();
        assert!(!LeadFormConfig::init_file_at(&path).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("Sam"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_init_file_fails_when_dir_is_a_file() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = LeadFormConfig::init_file_at(&blocker.join("config.json"));
        assert!(result.is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
