//! Message types for the application (TEA pattern)

use shiftlog_client::{Receipt, SubmitError};

use crate::form::FormId;
use crate::input_key::InputKey;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout; drives splash progress redraws
    Tick,

    /// Quit immediately (Ctrl+C, Ctrl+Q, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Form Editing (applies to the focused field)
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    FocusFirst,
    /// Jump to the submit button
    FocusLast,
    InputChar(char),
    Backspace,
    ClearField,
    /// Step the focused select to the next or previous option
    CycleOption {
        forward: bool,
    },

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// Submit the active form if allowed
    Submit,

    /// Backend answered a submission started by `form_id`
    SubmissionCompleted {
        form_id: FormId,
        outcome: Result<Receipt, SubmitError>,
    },

    // ─────────────────────────────────────────────────────────
    // Splash
    // ─────────────────────────────────────────────────────────
    /// Splash delay elapsed
    SplashElapsed,
}
