//! Main update function - handles state transitions (TEA pattern)

use shiftlog_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::action(UpdateAction::CancelSplashTimer)
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Splash progress is read from the clock at render time
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            if state.select_tab(tab) {
                debug!("Switched to {:?} tab ({})", tab, state.form.id());
            }
            UpdateResult::none()
        }
        Message::NextTab => {
            let tab = state.active_tab.next();
            UpdateResult::message(Message::SelectTab(tab))
        }
        Message::PrevTab => {
            let tab = state.active_tab.prev();
            UpdateResult::message(Message::SelectTab(tab))
        }

        // ─────────────────────────────────────────────────────────
        // Form Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.form.entry_mut().focus_next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.form.entry_mut().focus_prev();
            UpdateResult::none()
        }
        Message::FocusFirst => {
            state.form.entry_mut().set_focus(0);
            UpdateResult::none()
        }
        Message::FocusLast => {
            let form = state.form.entry_mut();
            let last = form.field_count() - 1;
            form.set_focus(last);
            UpdateResult::none()
        }
        Message::InputChar(c) => {
            state.form.entry_mut().input_char(c);
            UpdateResult::none()
        }
        Message::Backspace => {
            state.form.entry_mut().backspace();
            UpdateResult::none()
        }
        Message::ClearField => {
            state.form.entry_mut().clear_field();
            UpdateResult::none()
        }
        Message::CycleOption { forward } => {
            state.form.entry_mut().cycle_focused(forward);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::Submit => handle_submit(state),

        Message::SubmissionCompleted { form_id, outcome } => {
            if state.form.id() != form_id {
                debug!(
                    "Dropping submission result for unmounted {} (current {})",
                    form_id,
                    state.form.id()
                );
                return UpdateResult::none();
            }
            state.form.entry_mut().apply_outcome(outcome);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Splash
        // ─────────────────────────────────────────────────────────
        Message::SplashElapsed => {
            if state.splash.dismiss() {
                debug!("Splash dismissed");
                UpdateResult::action(UpdateAction::CancelSplashTimer)
            } else {
                UpdateResult::none()
            }
        }
    }
}

fn handle_submit(state: &mut AppState) -> UpdateResult {
    let zone = state.zone;
    let form = state.form.entry_mut();

    if !form.can_submit() {
        debug!(
            "Submit ignored for {} (submittable={}, in_flight={})",
            form.id(),
            form.is_submittable(),
            form.in_flight()
        );
        return UpdateResult::none();
    }

    match form.begin_submit(&zone) {
        Some(submission) => {
            info!(
                "Submitting {} record to {}",
                submission.kind().label(),
                submission.endpoint()
            );
            UpdateResult::action(UpdateAction::SubmitRecord {
                form_id: form.id(),
                submission,
            })
        }
        None => {
            warn!(
                "Could not build {} record: {}",
                form.record_kind().label(),
                form.status().display_text()
            );
            UpdateResult::none()
        }
    }
}
