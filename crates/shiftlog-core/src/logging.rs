//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/shiftlog/logs/` so they never land on
/// the terminal the UI is drawing on.
/// Log level is controlled by the `SHIFTLOG_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SHIFTLOG_LOG=debug shiftlog
/// SHIFTLOG_LOG=shiftlog_client=trace shiftlog
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "shiftlog.log");

    // Default to info for our crates, allow override via SHIFTLOG_LOG
    let env_filter =
        EnvFilter::try_from_env("SHIFTLOG_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("shiftlog starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn default_filter() -> &'static str {
    "shiftlog=info,shiftlog_core=info,shiftlog_client=info,shiftlog_app=info,shiftlog_tui=info,warn"
}

/// `<data_local_dir>/shiftlog/logs`
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("shiftlog").join("logs")
}
