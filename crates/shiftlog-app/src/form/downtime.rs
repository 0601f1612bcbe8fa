//! Downtime incident form

use shiftlog_core::prelude::*;
use shiftlog_core::{local_now_minutes, DowntimeRecord, RecordKind, Submission};

use super::{EntryForm, FieldKind, FieldView, FormId, SubmitStatus, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DowntimeField {
    OperatorName,
    Description,
    Timestamp,
    Submit,
}

impl DowntimeField {
    pub const ALL: [DowntimeField; 4] = [
        DowntimeField::OperatorName,
        DowntimeField::Description,
        DowntimeField::Timestamp,
        DowntimeField::Submit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct DowntimeForm {
    id: FormId,
    pub operator_name: String,
    /// Multi-line; newlines are kept as typed
    pub description: String,
    pub timestamp: String,
    status: SubmitStatus,
    focus: usize,
}

impl DowntimeForm {
    pub fn new(id: FormId) -> Self {
        Self {
            id,
            operator_name: String::new(),
            description: String::new(),
            timestamp: local_now_minutes(),
            status: SubmitStatus::Idle,
            focus: 0,
        }
    }

    pub fn focused_field(&self) -> DowntimeField {
        DowntimeField::ALL[self.focus]
    }
}

impl EntryForm for DowntimeForm {
    fn id(&self) -> FormId {
        self.id
    }

    fn record_kind(&self) -> RecordKind {
        RecordKind::Downtime
    }

    fn status(&self) -> &SubmitStatus {
        &self.status
    }

    fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    fn field_count(&self) -> usize {
        DowntimeField::ALL.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(DowntimeField::ALL.len() - 1);
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        match DowntimeField::ALL[index] {
            DowntimeField::OperatorName => {
                FieldView::text("Operator name", "Name", &self.operator_name)
                    .with_placeholder("Enter operator name")
            }
            DowntimeField::Description => {
                FieldView::text("Downtime description", "Description", &self.description)
                    .with_kind(FieldKind::TextArea)
            }
            DowntimeField::Timestamp => {
                FieldView::text("Date & Time", "Date & Time", &self.timestamp)
                    .with_kind(FieldKind::DateTime)
            }
            DowntimeField::Submit => FieldView::submit(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match DowntimeField::ALL.get(index)? {
            DowntimeField::OperatorName => Some(&mut self.operator_name),
            DowntimeField::Description => Some(&mut self.description),
            DowntimeField::Timestamp => Some(&mut self.timestamp),
            DowntimeField::Submit => None,
        }
    }

    fn cycle_select(&mut self, _index: usize, _forward: bool) {}

    fn is_submittable(&self) -> bool {
        !self.operator_name.is_empty() && !self.description.is_empty() && !self.timestamp.is_empty()
    }

    fn build_submission(&self, zone: &Zone) -> Result<Submission> {
        Ok(DowntimeRecord {
            operator_name: self.operator_name.clone(),
            description: self.description.clone(),
            timestamp: zone.to_instant(&self.timestamp)?,
        }
        .into())
    }

    fn reset_after_success(&mut self) {
        self.description.clear();
    }
}
