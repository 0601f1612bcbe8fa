//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use shiftlog_app::SubmitStatus;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
}

// --- Submission status ---

/// Style for the status line under a form
pub fn submit_status(status: &SubmitStatus) -> Style {
    match status {
        SubmitStatus::Idle => text_muted(),
        SubmitStatus::Saving => Style::default().fg(palette::STATUS_YELLOW),
        SubmitStatus::Submitted { .. } => Style::default()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        SubmitStatus::Failed { .. } => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

/// Submit button style.
///
/// A disabled button is muted whether or not it has focus.
pub fn submit_button(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (true, true) => focused_selected(),
        (true, false) => accent_bold(),
        (false, _) => text_muted().add_modifier(Modifier::DIM),
    }
}
