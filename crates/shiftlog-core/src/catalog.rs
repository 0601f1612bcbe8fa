//! Static option catalogs for the entry forms
//!
//! Fixed lists of operator types, test types, test stations (keyed by test
//! type) and device types. Labels are exactly what the backend expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Classification of the worker submitting data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    Onrole,
    Apprentices,
}

impl OperatorType {
    /// All operator types in display order
    pub const ALL: [OperatorType; 2] = [OperatorType::Onrole, OperatorType::Apprentices];

    pub fn label(&self) -> &'static str {
        match self {
            OperatorType::Onrole => "Onrole",
            OperatorType::Apprentices => "Apprentices",
        }
    }
}

/// Testing category; decides which stations can be chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestType {
    #[serde(rename = "HV")]
    Hv,
    #[serde(rename = "FT")]
    Ft,
}

impl TestType {
    /// All test types in display order
    pub const ALL: [TestType; 2] = [TestType::Hv, TestType::Ft];

    pub fn label(&self) -> &'static str {
        match self {
            TestType::Hv => "HV",
            TestType::Ft => "FT",
        }
    }

    /// Stations that belong to this test type
    pub fn stations(&self) -> &'static [&'static str] {
        match self {
            TestType::Hv => &HV_STATIONS,
            TestType::Ft => &FT_STATIONS,
        }
    }
}

macro_rules! impl_label_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| format!("unknown {}: {}", $what, s))
            }
        }
    };
}

impl_label_traits!(OperatorType, "operator type");
impl_label_traits!(TestType, "test type");

/// Operator type labels in display order, for select widgets
pub const OPERATOR_TYPE_LABELS: [&str; 2] = ["Onrole", "Apprentices"];

/// Test type labels in display order, for select widgets
pub const TEST_TYPE_LABELS: [&str; 2] = ["HV", "FT"];

pub const HV_STATIONS: [&str; 5] = ["HSPA-27", "HSPA-23", "HSPA-2", "HSPA-1", "HSPA-24"];

pub const FT_STATIONS: [&str; 6] = ["WUPS-1", "WUPS-2", "WUPS-3", "WUPS-6", "7SR5", "AFT2"];

pub const DEVICE_TYPES: [&str; 23] = [
    "RC E4",
    "RC E4 EXT",
    "RM E6",
    "RM E6 EXT",
    "RM E8",
    "RM E8 EXT",
    "RM E10",
    "RM E10 EXT",
    "RM E12",
    "RM 12 EXT",
    "7SJ66 1/2",
    "7SJ66 1/3",
    "7SR10",
    "7SR45",
    "7SR46",
    "7SR5 S6",
    "7SR5 S8",
    "7SR5 12",
    "SIP4 1/6",
    "SIP4 1/1",
    "SIP4 1/2",
    "SIP4 1/3",
    "7SR119",
];

/// Station options for the selected test type.
///
/// No test type selected yields an empty list.
pub fn stations_for(test_type: Option<TestType>) -> &'static [&'static str] {
    match test_type {
        Some(t) => t.stations(),
        None => &[],
    }
}
