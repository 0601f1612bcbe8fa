//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use shiftlog_core::prelude::*;

/// Enter raw mode and the alternate screen.
///
/// Installs a panic hook first so a panic restores the terminal and lands in
/// the log file, which is the only place it is visible while the TUI owns
/// the screen.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::try_restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
