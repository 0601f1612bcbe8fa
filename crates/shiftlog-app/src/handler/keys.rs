//! Key event handlers

use crate::form::FieldKind;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab};

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, splash included
    if key.is_quit() {
        return Some(Message::Quit);
    }

    // The splash cannot be dismissed by the user
    if state.splash.is_visible() {
        return None;
    }

    handle_key_form(state, key)
}

/// Handle key events while a form is shown
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focused = state.form.entry().focused_kind();

    match key {
        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        InputKey::F(n @ 1..=3) => Tab::from_index(usize::from(n) - 1).map(Message::SelectTab),
        InputKey::CharCtrl('n') => Some(Message::NextTab),
        InputKey::CharCtrl('p') => Some(Message::PrevTab),

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Home => Some(Message::FocusFirst),
        InputKey::End => Some(Message::FocusLast),

        // ─────────────────────────────────────────────────────────
        // Selects
        // ─────────────────────────────────────────────────────────
        InputKey::Right if focused == FieldKind::Select => {
            Some(Message::CycleOption { forward: true })
        }
        InputKey::Left if focused == FieldKind::Select => {
            Some(Message::CycleOption { forward: false })
        }

        // ─────────────────────────────────────────────────────────
        // Submit
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::Enter => match focused {
            FieldKind::Submit => Some(Message::Submit),
            FieldKind::TextArea => Some(Message::InputChar('\n')),
            _ => Some(Message::FocusNext),
        },

        // ─────────────────────────────────────────────────────────
        // Text editing
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('u') => Some(Message::ClearField),
        InputKey::Delete if focused.is_editable_text() => Some(Message::ClearField),
        InputKey::Backspace if focused.is_editable_text() => Some(Message::Backspace),
        InputKey::Char(c) if focused.accepts(c) => Some(Message::InputChar(c)),

        _ => None,
    }
}
