//! Settings file loading and backend URL resolution

use std::path::{Path, PathBuf};

use shiftlog_client::{normalize_base_url, DEFAULT_BACKEND_URL};
use shiftlog_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "shiftlog";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable that overrides the configured backend URL
pub const BACKEND_URL_ENV: &str = "SHIFTLOG_BACKEND_URL";

/// `<config_dir>/shiftlog/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// A missing file yields defaults; an unreadable or invalid file yields
/// defaults and logs a warning.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Backend URL from the environment, ignoring empty values
pub fn backend_url_from_env() -> Option<String> {
    std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Pick the backend base URL: CLI flag, then environment, then settings
/// file, then the built-in default. The winner is validated and its trailing
/// slash trimmed.
pub fn resolve_backend_url(
    cli: Option<&str>,
    env: Option<&str>,
    settings: &Settings,
) -> Result<String> {
    let (source, raw) = if let Some(url) = cli {
        ("command line", url)
    } else if let Some(url) = env {
        (BACKEND_URL_ENV, url)
    } else if let Some(url) = settings.backend.url.as_deref() {
        ("config file", url)
    } else {
        ("default", DEFAULT_BACKEND_URL)
    };

    let url = normalize_base_url(raw)?;
    info!("Backend URL {} (from {})", url, source);
    Ok(url)
}
