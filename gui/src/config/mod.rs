// Application configuration, deserialized from the embedded default config.
// Theme tokens are not configured here; this covers app identity, default
// selections and feature switches.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub meta: MetaSettings,
    pub defaults: DefaultSettings,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub name: String,
    pub short_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSettings {
    pub title: String,
    pub title_template: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSettings {
    /// Preset theme id used before any stored preference applies.
    pub theme: String,
    pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub i18n: bool,
    pub notifications: bool,
    pub dark_mode: bool,
}

impl AppConfig {
    /// Loads the embedded default configuration. The file ships inside the
    /// binary, so a parse failure is a build defect, not a runtime state.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

/// Directory holding the persisted theme preference slot.
pub fn preferences_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config").join("trading-terminal"),
        None => PathBuf::from(".trading-terminal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.short_name, "TT");
        assert_eq!(config.defaults.locale, "en-US");
        assert!(config.features.dark_mode);
    }

    #[test]
    fn default_theme_is_a_registered_preset() {
        let config = AppConfig::load_default().unwrap();
        assert!(theme::preset_themes()
            .iter()
            .any(|t| t.id == config.defaults.theme));
    }
}
