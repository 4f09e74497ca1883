//! Site-settings configuration loading from settings.toml
//!
//! The settings defined here are used to seed missing `globals` rows on
//! `init`; they never overwrite values an admin has already changed.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire settings.toml file
#[derive(Debug, Deserialize)]
pub struct SettingsConfig {
    /// List of default site settings to seed
    pub settings: Vec<SettingConfig>,
}

/// A single default setting destined for the `globals` table
#[derive(Debug, Deserialize, Clone)]
pub struct SettingConfig {
    /// Setting key (e.g., `"site.title"`)
    pub key: String,
    /// Integer payload, if numeric
    #[serde(default)]
    pub int_value: Option<i32>,
    /// String payload, if textual
    #[serde(default)]
    pub string_value: Option<String>,
}

/// Loads site-settings configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is
/// invalid, or required fields are missing.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<SettingsConfig> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(format!("Failed to read settings file: {e}")))?;

    toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("Failed to parse settings.toml: {e}")))
}

/// Loads site-settings configuration from the default location
/// (./settings.toml)
pub fn load_default_settings() -> Result<SettingsConfig> {
    load_settings("settings.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings_config() {
        let toml_str = r#"
            [[settings]]
            key = "site.title"
            string_value = "Inkpress Comics"

            [[settings]]
            key = "site.pages_per_feed"
            int_value = 10
        "#;

        let config: SettingsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.settings.len(), 2);
        assert_eq!(config.settings[0].key, "site.title");
        assert_eq!(
            config.settings[0].string_value.as_deref(),
            Some("Inkpress Comics")
        );
        assert_eq!(config.settings[0].int_value, None);
        assert_eq!(config.settings[1].int_value, Some(10));
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let toml_str = r#"
            [[settings]]
            string_value = "no key here"
        "#;

        let result: std::result::Result<SettingsConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_settings("/definitely/not/here/settings.toml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
