//! # shiftlog-core - Core Domain Types
//!
//! Foundation crate for shiftlog. Provides the option catalogs, the three
//! submission record types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalogs (`catalog`)
//! - [`OperatorType`], [`TestType`] - Fixed two-value enumerations
//! - [`stations_for()`] - Test stations valid for a test type
//! - [`DEVICE_TYPES`] - Device models that can be tested or packed
//!
//! ### Records (`record`)
//! - [`ProductionRecord`], [`PackingRecord`], [`DowntimeRecord`] - JSON bodies
//! - [`Submission`] - A record tagged with the endpoint it is posted to
//! - [`local_to_instant()`] - Local wall-clock date-time to UTC instant
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for terminal, record and configuration failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use shiftlog_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod record;

/// Prelude for common imports used throughout all shiftlog crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::{
    stations_for, OperatorType, TestType, DEVICE_TYPES, FT_STATIONS, HV_STATIONS,
    OPERATOR_TYPE_LABELS, TEST_TYPE_LABELS,
};
pub use error::{Error, Result, ResultExt};
pub use record::{
    coerce_count, local_now_minutes, local_to_instant, DowntimeRecord, PackingRecord,
    ProductionRecord, RecordKind, Submission, LOCAL_DATETIME_FORMAT,
};
