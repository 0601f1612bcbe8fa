//! Backend trait and the reqwest-based HTTP implementation

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shiftlog_core::prelude::*;
use shiftlog_core::{RecordKind, Submission};

use crate::error::SubmitError;

/// Used when neither the CLI, environment nor settings name a backend
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Successful submission response.
///
/// The backend may send more than the shift; extra fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Backend-assigned shift label (e.g. "Morning")
    pub shift: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Receipt {
    pub fn new(shift: impl Into<String>) -> Self {
        Self {
            shift: shift.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Anything that can accept a submission and assign it a shift.
///
/// Implementors provide [`ShiftBackend`] (Send futures, usable from spawned
/// tasks); `LocalShiftBackend` follows from the blanket impl.
#[trait_variant::make(ShiftBackend: Send)]
pub trait LocalShiftBackend {
    /// Post one record. Resolves once the backend has answered.
    async fn submit(&self, submission: &Submission) -> std::result::Result<Receipt, SubmitError>;
}

/// Posts records to `{base_url}{endpoint}` over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a record type's endpoint
    pub fn url_for(&self, kind: RecordKind) -> String {
        format!("{}{}", self.base_url, kind.endpoint())
    }
}

impl ShiftBackend for HttpBackend {
    async fn submit(&self, submission: &Submission) -> std::result::Result<Receipt, SubmitError> {
        let url = self.url_for(submission.kind());
        debug!("POST {}", url);

        let resp = self
            .http
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                let message = describe_transport_error(&e);
                warn!("Submission to {} failed: {}", url, message);
                SubmitError::transport(message)
            })?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(|e| {
            let message = describe_transport_error(&e);
            warn!("Reading response from {} failed: {}", url, message);
            SubmitError::transport(message)
        })?;

        let outcome = decode_response(status, &body);
        match &outcome {
            Ok(receipt) => info!(
                "{} submission accepted (HTTP {}), shift={}",
                submission.kind().label(),
                status,
                receipt.shift
            ),
            Err(e) => info!(
                "{} submission failed (HTTP {}): {}",
                submission.kind().label(),
                status,
                e
            ),
        }
        outcome
    }
}

/// Turn a status code and raw body into a receipt or an error.
///
/// The body is parsed as JSON first regardless of status; a non-2xx status
/// then yields the body's `detail` (or `Failed` when absent or empty).
pub fn decode_response(status: u16, body: &[u8]) -> std::result::Result<Receipt, SubmitError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| SubmitError::Decode(format!("Invalid JSON in response: {}", e)))?;

    if !(200..300).contains(&status) {
        return Err(SubmitError::rejected(status, error_detail(&value)));
    }

    serde_json::from_value(value)
        .map_err(|e| SubmitError::Decode(format!("Unexpected response: {}", e)))
}

/// `detail` as shown to the user; falsy values fall back to "Failed"
fn error_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // Validation errors arrive as structured JSON
        other => Some(other.to_string()),
    }
}

/// reqwest's top-level message plus its underlying causes
fn describe_transport_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Validate and normalize a backend base URL.
///
/// Only `http` and `https` are accepted; a trailing `/` is trimmed.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed =
        url::Url::parse(trimmed).map_err(|e| Error::invalid_backend_url(trimmed, e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(Error::invalid_backend_url(
            trimmed,
            format!("unsupported scheme '{}'", other),
        )),
    }
}
