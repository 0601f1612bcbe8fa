//! shiftlog-client - Backend communication for shiftlog
//!
//! Posts submission records as JSON to the backend's REST endpoints and
//! decodes the shift assignment (or the backend's error detail) from the
//! response.
//!
//! The backend is abstracted behind [`ShiftBackend`] so the application layer
//! can be exercised against a scripted fake (`test-helpers` feature).

pub mod backend;
pub mod error;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use backend::{
    normalize_base_url, HttpBackend, LocalShiftBackend, Receipt, ShiftBackend, DEFAULT_BACKEND_URL,
};
pub use error::SubmitError;
