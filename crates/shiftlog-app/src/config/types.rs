//! Configuration types

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL; the built-in default is used when unset
    #[serde(default)]
    pub url: Option<String>,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the startup splash
    #[serde(default = "default_true")]
    pub show_splash: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_splash: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.ui.show_splash);
        assert_eq!(settings.backend.url, None);
    }

    #[test]
    fn test_partial_ui_table_keeps_defaults() {
        let settings: Settings = toml::from_str("[ui]\n").unwrap();
        assert!(settings.ui.show_splash);
    }

    #[test]
    fn test_full_settings_deserialize() {
        let settings: Settings = toml::from_str(
            r#"
[backend]
url = "http://factory.local:9000"

[ui]
show_splash = false
"#,
        )
        .unwrap();
        assert_eq!(
            settings.backend.url.as_deref(),
            Some("http://factory.local:9000")
        );
        assert!(!settings.ui.show_splash);
    }
}
