//! Terminal-independent key input.
//!
//! The TUI converts crossterm key events into [`InputKey`] so that the form
//! logic in this crate never depends on a terminal library.

/// A single key press as seen by the form handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (already shifted)
    Char(char),
    /// Character with Ctrl held (Ctrl+s, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Keys that quit from any screen, including the splash
    pub fn is_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c' | 'q'))
    }
}
