//! Production count form

use shiftlog_core::prelude::*;
use shiftlog_core::{
    coerce_count, local_now_minutes, stations_for, OperatorType, ProductionRecord, RecordKind,
    Submission, TestType, DEVICE_TYPES, OPERATOR_TYPE_LABELS, TEST_TYPE_LABELS,
};

use super::{cycle_option, EntryForm, FieldKind, FieldView, FormId, SubmitStatus, Zone};

/// Focusable slots of the production form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionField {
    OperatorName,
    OperatorId,
    OperatorType,
    TestType,
    TestStation,
    DeviceType,
    ProductionCount,
    Timestamp,
    Submit,
}

impl ProductionField {
    pub const ALL: [ProductionField; 9] = [
        ProductionField::OperatorName,
        ProductionField::OperatorId,
        ProductionField::OperatorType,
        ProductionField::TestType,
        ProductionField::TestStation,
        ProductionField::DeviceType,
        ProductionField::ProductionCount,
        ProductionField::Timestamp,
        ProductionField::Submit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct ProductionForm {
    id: FormId,
    pub operator_name: String,
    pub operator_id: String,
    pub operator_type: Option<OperatorType>,
    test_type: Option<TestType>,
    test_station: Option<&'static str>,
    pub device_type: Option<&'static str>,
    /// Raw count text as typed
    pub count: String,
    /// Local wall-clock date-time text
    pub timestamp: String,
    status: SubmitStatus,
    focus: usize,
}

impl ProductionForm {
    pub fn new(id: FormId) -> Self {
        Self {
            id,
            operator_name: String::new(),
            operator_id: String::new(),
            operator_type: None,
            test_type: None,
            test_station: None,
            device_type: None,
            count: String::new(),
            timestamp: local_now_minutes(),
            status: SubmitStatus::Idle,
            focus: 0,
        }
    }

    pub fn test_type(&self) -> Option<TestType> {
        self.test_type
    }

    pub fn test_station(&self) -> Option<&'static str> {
        self.test_station
    }

    /// Stations valid for the current test type
    pub fn station_options(&self) -> &'static [&'static str] {
        stations_for(self.test_type)
    }

    /// Change the test type. Always clears the chosen station, even when the
    /// type is unchanged.
    pub fn set_test_type(&mut self, test_type: Option<TestType>) {
        self.test_type = test_type;
        self.test_station = None;
    }

    /// Choose a station by label. Returns false (and changes nothing) when the
    /// label is not valid for the current test type.
    pub fn set_test_station(&mut self, station: &str) -> bool {
        match self.station_options().iter().find(|s| **s == station) {
            Some(s) => {
                self.test_station = Some(s);
                true
            }
            None => false,
        }
    }

    /// Choose a device by label. Returns false for unknown devices.
    pub fn set_device_type(&mut self, device: &str) -> bool {
        match DEVICE_TYPES.iter().find(|d| **d == device) {
            Some(d) => {
                self.device_type = Some(d);
                true
            }
            None => false,
        }
    }

    pub fn focused_field(&self) -> ProductionField {
        ProductionField::ALL[self.focus]
    }
}

impl EntryForm for ProductionForm {
    fn id(&self) -> FormId {
        self.id
    }

    fn record_kind(&self) -> RecordKind {
        RecordKind::Production
    }

    fn status(&self) -> &SubmitStatus {
        &self.status
    }

    fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    fn field_count(&self) -> usize {
        ProductionField::ALL.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(ProductionField::ALL.len() - 1);
    }

    fn field(&self, index: usize) -> FieldView<'_> {
        const COUNT_SECTION: &str = "Production count and Date/Time";

        match ProductionField::ALL[index] {
            ProductionField::OperatorName => {
                FieldView::text("Operator name", "Name", &self.operator_name)
                    .with_placeholder("Enter operator name")
            }
            ProductionField::OperatorId => FieldView::text("Operator ID", "ID", &self.operator_id)
                .with_placeholder("Enter operator ID"),
            ProductionField::OperatorType => FieldView::select(
                "Operator type",
                "Type",
                self.operator_type.map(|o| o.label()).unwrap_or(""),
                &OPERATOR_TYPE_LABELS,
            ),
            ProductionField::TestType => FieldView::select(
                "Type of testing",
                "Testing",
                self.test_type.map(|t| t.label()).unwrap_or(""),
                &TEST_TYPE_LABELS,
            ),
            ProductionField::TestStation => FieldView::select(
                "Test station",
                "Station",
                self.test_station.unwrap_or(""),
                self.station_options(),
            ),
            ProductionField::DeviceType => FieldView::select(
                "Device type",
                "Device",
                self.device_type.unwrap_or(""),
                &DEVICE_TYPES,
            ),
            ProductionField::ProductionCount => {
                FieldView::text(COUNT_SECTION, "Production Count", &self.count)
                    .with_kind(FieldKind::Count)
                    .with_placeholder("0")
            }
            ProductionField::Timestamp => {
                FieldView::text(COUNT_SECTION, "Date & Time", &self.timestamp)
                    .with_kind(FieldKind::DateTime)
            }
            ProductionField::Submit => FieldView::submit(),
        }
    }

    fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match ProductionField::ALL.get(index)? {
            ProductionField::OperatorName => Some(&mut self.operator_name),
            ProductionField::OperatorId => Some(&mut self.operator_id),
            ProductionField::ProductionCount => Some(&mut self.count),
            ProductionField::Timestamp => Some(&mut self.timestamp),
            _ => None,
        }
    }

    fn cycle_select(&mut self, index: usize, forward: bool) {
        match ProductionField::ALL.get(index) {
            Some(ProductionField::OperatorType) => {
                self.operator_type = cycle_option(&OperatorType::ALL, self.operator_type, forward);
            }
            Some(ProductionField::TestType) => {
                let next = cycle_option(&TestType::ALL, self.test_type, forward);
                self.set_test_type(next);
            }
            Some(ProductionField::TestStation) => {
                self.test_station = cycle_option(self.station_options(), self.test_station, forward);
            }
            Some(ProductionField::DeviceType) => {
                self.device_type = cycle_option(&DEVICE_TYPES, self.device_type, forward);
            }
            _ => {}
        }
    }

    fn is_submittable(&self) -> bool {
        !self.operator_name.is_empty()
            && !self.operator_id.is_empty()
            && self.operator_type.is_some()
            && self.test_type.is_some()
            && self.test_station.is_some()
            && self.device_type.is_some()
            && !self.count.is_empty()
            && !self.timestamp.is_empty()
    }

    fn build_submission(&self, zone: &Zone) -> Result<Submission> {
        let record = ProductionRecord {
            operator_name: self.operator_name.clone(),
            operator_id: self.operator_id.clone(),
            operator_type: self
                .operator_type
                .ok_or(Error::missing_field("operator_type"))?,
            test_type: self.test_type.ok_or(Error::missing_field("test_type"))?,
            test_station: self
                .test_station
                .ok_or(Error::missing_field("test_station"))?
                .to_string(),
            device_type: self
                .device_type
                .ok_or(Error::missing_field("device_type"))?
                .to_string(),
            production_count: coerce_count(&self.count)?,
            timestamp: zone.to_instant(&self.timestamp)?,
        };
        Ok(record.into())
    }

    fn reset_after_success(&mut self) {
        self.count.clear();
    }
}
