//! Entry form controllers
//!
//! Each tab mounts one form. A form owns its field values, which field has
//! focus, and the status of its most recent submission. Nothing is shared
//! between forms; switching tabs builds a fresh one.
//!
//! The three forms implement [`EntryForm`], which supplies the editing,
//! focus and submission plumbing on top of a small per-form surface
//! (`field`, `text_mut`, `cycle_select`, `build_submission`, ...).

mod downtime;
mod packing;
mod production;

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Utc};
use shiftlog_client::{Receipt, SubmitError};
use shiftlog_core::{local_to_instant, RecordKind, Result, Submission};

pub use downtime::{DowntimeField, DowntimeForm};
pub use packing::{PackingField, PackingForm};
pub use production::{ProductionField, ProductionForm};

/// Identity of one mounted form instance.
///
/// Submission results carry the id of the form that started them so a result
/// arriving after a tab switch can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormId(pub u64);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form#{}", self.0)
    }
}

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Request in flight
    Saving,
    Submitted {
        shift: String,
    },
    Failed {
        message: String,
    },
}

impl SubmitStatus {
    /// The status line text; empty when idle
    pub fn display_text(&self) -> String {
        match self {
            SubmitStatus::Idle => String::new(),
            SubmitStatus::Saving => "Saving...".to_string(),
            SubmitStatus::Submitted { shift } => format!("Submitted to {} shift", shift),
            SubmitStatus::Failed { message } => format!("Error: {}", message),
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SubmitStatus::Saving)
    }
}

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Non-negative integer; digits only
    Count,
    /// Local wall-clock date-time, `YYYY-MM-DDTHH:MM`
    DateTime,
    /// One of a fixed option list, or nothing
    Select,
    /// Multi-line free text
    TextArea,
    /// The submit button
    Submit,
}

impl FieldKind {
    /// Whether `c` may be typed into a field of this kind
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FieldKind::Text => !c.is_control(),
            FieldKind::TextArea => c == '\n' || !c.is_control(),
            FieldKind::Count => c.is_ascii_digit(),
            FieldKind::DateTime => c.is_ascii_digit() || matches!(c, '-' | 'T' | ':'),
            FieldKind::Select | FieldKind::Submit => false,
        }
    }

    pub fn is_editable_text(&self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Count | FieldKind::DateTime | FieldKind::TextArea
        )
    }
}

/// Read-only description of one input, for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    /// Title of the section box the field sits in
    pub section: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Current value; empty means unset
    pub value: &'a str,
    pub placeholder: Option<&'static str>,
    /// Option labels for selects (empty otherwise)
    pub options: &'static [&'static str],
}

impl<'a> FieldView<'a> {
    pub fn text(section: &'static str, label: &'static str, value: &'a str) -> Self {
        Self {
            section,
            label,
            kind: FieldKind::Text,
            value,
            placeholder: None,
            options: &[],
        }
    }

    pub fn select(
        section: &'static str,
        label: &'static str,
        value: &'a str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            kind: FieldKind::Select,
            options,
            ..Self::text(section, label, value)
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn submit() -> Self {
        Self::text("", "Submit", "").with_kind(FieldKind::Submit)
    }
}

/// Timezone used to interpret the date-time field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Zone {
    /// The machine's local timezone
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn to_instant(&self, raw: &str) -> Result<DateTime<Utc>> {
        match self {
            Zone::Local => local_to_instant(raw, &Local),
            Zone::Fixed(offset) => local_to_instant(raw, offset),
        }
    }
}

/// Step a select through `None` ("Select") followed by each option, wrapping.
pub fn cycle_option<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }

    // Position 0 is the empty choice, options follow
    let slots = options.len() + 1;
    let pos = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % slots
    } else {
        (pos + slots - 1) % slots
    };

    if next == 0 {
        None
    } else {
        Some(options[next - 1])
    }
}

/// Shared behaviour of the three entry forms
pub trait EntryForm {
    fn id(&self) -> FormId;

    fn record_kind(&self) -> RecordKind;

    fn status(&self) -> &SubmitStatus;

    fn set_status(&mut self, status: SubmitStatus);

    /// Number of focusable slots, the submit button included
    fn field_count(&self) -> usize;

    fn focus(&self) -> usize;

    fn set_focus(&mut self, index: usize);

    /// View of the field at `index`
    fn field(&self, index: usize) -> FieldView<'_>;

    /// Backing string of a text-like field, `None` for selects and the button
    fn text_mut(&mut self, index: usize) -> Option<&mut String>;

    /// Step the select at `index`; no-op for other kinds
    fn cycle_select(&mut self, index: usize, forward: bool);

    /// True iff every required field is non-empty
    fn is_submittable(&self) -> bool;

    /// Build the outgoing record from the current field values
    fn build_submission(&self, zone: &Zone) -> Result<Submission>;

    /// Clear what a successful submission consumes (count or description)
    fn reset_after_success(&mut self);

    // ─────────────────────────────────────────────────────────
    // Provided
    // ─────────────────────────────────────────────────────────

    fn in_flight(&self) -> bool {
        self.status().is_saving()
    }

    fn can_submit(&self) -> bool {
        self.is_submittable() && !self.in_flight()
    }

    fn fields(&self) -> Vec<FieldView<'_>> {
        (0..self.field_count()).map(|i| self.field(i)).collect()
    }

    fn focused_kind(&self) -> FieldKind {
        self.field(self.focus()).kind
    }

    fn focus_next(&mut self) {
        let next = (self.focus() + 1) % self.field_count();
        self.set_focus(next);
    }

    fn focus_prev(&mut self) {
        let count = self.field_count();
        let prev = (self.focus() + count - 1) % count;
        self.set_focus(prev);
    }

    /// Type a character into the focused field if it accepts it
    fn input_char(&mut self, c: char) {
        let focus = self.focus();
        let kind = self.field(focus).kind;
        if !kind.accepts(c) {
            return;
        }
        if let Some(text) = self.text_mut(focus) {
            text.push(c);
        }
    }

    fn backspace(&mut self) {
        let focus = self.focus();
        if let Some(text) = self.text_mut(focus) {
            text.pop();
        }
    }

    /// Empty the focused field (selects go back to "Select")
    fn clear_field(&mut self) {
        let focus = self.focus();
        if let Some(text) = self.text_mut(focus) {
            text.clear();
            return;
        }
        // Cycle until the select lands on the empty choice
        for _ in 0..=self.field(focus).options.len() {
            if self.field(focus).value.is_empty() {
                break;
            }
            self.cycle_select(focus, true);
        }
    }

    fn cycle_focused(&mut self, forward: bool) {
        let focus = self.focus();
        self.cycle_select(focus, forward);
    }

    /// Start a submission.
    ///
    /// Returns the record to post, or `None` when submission is not allowed
    /// or the record could not be built (the status then shows the error).
    fn begin_submit(&mut self, zone: &Zone) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        self.set_status(SubmitStatus::Saving);
        match self.build_submission(zone) {
            Ok(submission) => Some(submission),
            Err(e) => {
                self.set_status(SubmitStatus::Failed {
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Record the backend's answer
    fn apply_outcome(&mut self, outcome: std::result::Result<Receipt, SubmitError>) {
        match outcome {
            Ok(receipt) => {
                self.set_status(SubmitStatus::Submitted {
                    shift: receipt.shift,
                });
                self.reset_after_success();
            }
            Err(e) => self.set_status(SubmitStatus::Failed {
                message: e.user_message(),
            }),
        }
    }
}
