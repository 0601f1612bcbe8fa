//! Submission failure taxonomy

use thiserror::Error;

/// Why a submission did not produce a shift assignment.
///
/// `Display` is the exact text shown after the `Error: ` prefix in the form's
/// status line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never completed (connection refused, DNS, reset...).
    /// Carries the transport's own message verbatim.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("{}", detail.as_deref().unwrap_or("Failed"))]
    Rejected { status: u16, detail: Option<String> },

    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// The record could not be built from the form (e.g. bad date-time);
    /// nothing was sent.
    #[error("{0}")]
    Invalid(String),
}

impl SubmitError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        Self::Rejected { status, detail }
    }

    /// Text for the status line, without the `Error: ` prefix
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<shiftlog_core::Error> for SubmitError {
    fn from(err: shiftlog_core::Error) -> Self {
        SubmitError::Invalid(err.to_string())
    }
}
