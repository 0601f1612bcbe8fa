//! Configuration for shiftlog
//!
//! Supports:
//! - `<config_dir>/shiftlog/config.toml` - user settings
//! - `SHIFTLOG_BACKEND_URL` - backend override from the environment

pub mod settings;
pub mod types;

pub use settings::{
    backend_url_from_env, default_config_path, load_settings, resolve_backend_url,
    BACKEND_URL_ENV,
};
pub use types::*;
