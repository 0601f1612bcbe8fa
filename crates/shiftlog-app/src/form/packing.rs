//! Packing count form

use shiftlog_core::prelude::*;
use shiftlog_core::{
    coerce_count, local_now_minutes, OperatorType, PackingRecord, RecordKind, Submission,
    DEVICE_TYPES, OPERATOR_TYPE_LABELS,
};

use super::{cycle_option, EntryForm, FieldKind, FieldView, FormId, SubmitStatus, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingField {
    OperatorName,
    DeviceType,
    OperatorType,
    JobType,
    PackingCount,
    Timestamp,
    Submit,
}

impl PackingField {
    pub const ALL: [PackingField; 7] = [
        PackingField::OperatorName,
        PackingField::DeviceType,
        PackingField::OperatorType,
        PackingField::JobType,
        PackingField::PackingCount,
        PackingField::Timestamp,
        PackingField::Submit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct PackingForm {
    id: FormId,
    pub operator_name: String,
    pub device_type: Option<&'static str>,
    pub operator_type: Option<OperatorType>,
    pub job_type: String,
    pub count: String,
    pub timestamp: String,
    status: SubmitStatus,
    focus: usize,
}

impl PackingForm {
    pub fn new(id: FormId) -> Self {
        Self {
            id,
            operator_name: String::new(),
            device_type: None,
            operator_type: None,
            job_type: String::new(),
            count: String::new(),
            timestamp: local_now_minutes(),
            status: SubmitStatus::Idle,
            focus: 0,
        }
    }

    pub fn set_device_type(&mut self, device: &str) -> bool {
        match DEVICE_TYPES.iter().find(|d| **d == device) {
            Some(d) => {
                self.device_type = Some(d);
                true
            }
            None => false,
        }
    }

    pub fn focused_field(&self) -> PackingField {
        PackingField::ALL[self.focus]
    }
}

impl EntryForm for PackingForm {
    fn id(&self) -> FormId {
        self.id
    }

    fn record_kind(&self) -> RecordKind {
        RecordKind::Packing
    }

    fn status(&self) -> &SubmitStatus {
        &self.status
    }

    fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    fn field_count(&self) -> usize {
        PackingField::ALL.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(PackingField::ALL.len() - 1);
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        const COUNT_SECTION: &str = "Packing count and Date/Time";

        match PackingField::ALL[index] {
            PackingField::OperatorName => {
                FieldView::text("Operator name", "Name", &self.operator_name)
                    .with_placeholder("Enter operator name")
            }
            PackingField::DeviceType => FieldView::select(
                "Device type",
                "Device",
                self.device_type.unwrap_or(""),
                &DEVICE_TYPES,
            ),
            PackingField::OperatorType => FieldView::select(
                "Operator type",
                "Type",
                self.operator_type.map(|o| o.label()).unwrap_or(""),
                &OPERATOR_TYPE_LABELS,
            ),
            PackingField::JobType => FieldView::text("Job type", "Job Type", &self.job_type)
                .with_placeholder("Enter job type"),
            PackingField::PackingCount => {
                FieldView::text(COUNT_SECTION, "Packing Count", &self.count)
                    .with_kind(FieldKind::Count)
                    .with_placeholder("0")
            }
            PackingField::Timestamp => FieldView::text(COUNT_SECTION, "Date & Time", &self.timestamp)
                .with_kind(FieldKind::DateTime),
            PackingField::Submit => FieldView::submit(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match PackingField::ALL.get(index)? {
            PackingField::OperatorName => Some(&mut self.operator_name),
            PackingField::JobType => Some(&mut self.job_type),
            PackingField::PackingCount => Some(&mut self.count),
            PackingField::Timestamp => Some(&mut self.timestamp),
            _ => None,
        }
    }

    fn cycle_select(&mut self, index: usize, forward: bool) {
        match PackingField::ALL.get(index) {
            Some(PackingField::DeviceType) => {
                self.device_type = cycle_option(&DEVICE_TYPES, self.device_type, forward);
            }
            Some(PackingField::OperatorType) => {
                self.operator_type = cycle_option(&OperatorType::ALL, self.operator_type, forward);
            }
            _ => {}
        }
    }

    fn is_submittable(&self) -> bool {
        !self.operator_name.is_empty()
            && self.device_type.is_some()
            && self.operator_type.is_some()
            && !self.job_type.is_empty()
            && !self.count.is_empty()
            && !self.timestamp.is_empty()
    }

    fn build_submission(&self, zone: &Zone) -> Result<Submission> {
        let record = PackingRecord {
            operator_name: self.operator_name.clone(),
            device_type: self
                .device_type
                .ok_or(Error::missing_field("device_type"))?
                .to_string(),
            operator_type: self
                .operator_type
                .ok_or(Error::missing_field("operator_type"))?,
            job_type: self.job_type.clone(),
            packing_count: coerce_count(&self.count)?,
            timestamp: zone.to_instant(&self.timestamp)?,
        };
        Ok(record.into())
    }

    fn reset_after_success(&mut self) {
        self.count.clear();
    }
}
