//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping

pub(crate) mod keys;
pub(crate) mod update;


use shiftlog_core::Submission;

use crate::form::FormId;
use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Post a record to the backend in the background. The result comes back
    /// as `Message::SubmissionCompleted` tagged with `form_id`.
    SubmitRecord {
        form_id: FormId,
        submission: Submission,
    },

    /// Schedule `Message::SplashElapsed` after the splash duration
    StartSplashTimer,

    /// Release the splash timer (dismissed or shutting down)
    CancelSplashTimer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
