//! SiteConfig - Runtime Configuration
//!
//! Loaded from `site.toml` under the platform config directory; every
//! field has a default so a missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const CONFIG_FILE: &str = "site.toml";

fn default_endpoint() -> String {
    "https://formspree.io/f/encodius".to_string()
}

fn default_status_clear_ms() -> u64 {
    crate::constants::STATUS_CLEAR_MS
}

fn default_viewport_width() -> f32 {
    crate::constants::DEFAULT_VIEWPORT_WIDTH
}

fn default_viewport_height() -> f32 {
    crate::constants::DEFAULT_VIEWPORT_HEIGHT
}

/// Main runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Contact form POST endpoint
    #[serde(default = "default_endpoint")]
    pub contact_endpoint: String,
    /// Status message auto-clear delay
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u64,
    /// Headless viewport geometry
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: default_endpoint(),
            status_clear_ms: default_status_clear_ms(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl SiteConfig {
    /// Auto-clear delay as a duration
    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "encodius", "encodius-site")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load the configuration from the default location
pub fn load() -> Result<SiteConfig> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(SiteConfig::default())
}

/// Save the configuration to the default location
pub fn save(config: &SiteConfig) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let config = SiteConfig {
            contact_endpoint: "https://example.test/contact".to_string(),
            status_clear_ms: 1200,
            ..Default::default()
        };
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("site.toml");

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded.contact_endpoint, config.contact_endpoint);
        assert_eq!(loaded.status_clear_ms, 1200);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("site.toml");
        fs::write(&path, "not = valid = toml").expect("write");

        let loaded = load_from_path(&path).expect("load should not error");
        assert_eq!(loaded.status_clear_ms, crate::constants::STATUS_CLEAR_MS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("site.toml");
        fs::write(&path, "contact_endpoint = \"https://example.test/c\"").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.contact_endpoint, "https://example.test/c");
        assert_eq!(loaded.status_clear_ms, crate::constants::STATUS_CLEAR_MS);
    }
}
