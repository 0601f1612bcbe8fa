//! shiftlog - terminal data entry for factory shift records
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use shiftlog_app::config::{self, Settings};
use shiftlog_core::prelude::*;

/// Record production, packing and downtime entries for the current shift
#[derive(Parser, Debug)]
#[command(name = "shiftlog", version)]
#[command(about = "Record production, packing and downtime entries for the current shift", long_about = None)]
struct Args {
    /// Backend base URL (overrides SHIFTLOG_BACKEND_URL and the config file)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Settings file (defaults to <config dir>/shiftlog/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    shiftlog_core::logging::init()?;

    let settings = load_settings(args.config.as_deref());
    let env_url = config::backend_url_from_env();
    let backend_url =
        config::resolve_backend_url(args.backend_url.as_deref(), env_url.as_deref(), &settings)?;

    shiftlog_tui::run(settings, backend_url).await
}

fn load_settings(explicit: Option<&std::path::Path>) -> Settings {
    match explicit.map(PathBuf::from).or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available, using default settings");
            Settings::default()
        }
    }
}
