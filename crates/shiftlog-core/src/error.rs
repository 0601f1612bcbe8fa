//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Record Errors
    // ─────────────────────────────────────────────────────────────
    /// The local date-time could not be parsed, or does not exist in the
    /// local timezone (DST gap). Displays like the browser's RangeError.
    #[error("Invalid time value")]
    InvalidTimestamp { input: String },

    /// An all-digit count that does not fit the wire integer
    #[error("Count is too large: {input}")]
    CountOutOfRange { input: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
        }
    }

    pub fn count_out_of_range(input: impl Into<String>) -> Self {
        Self::CountOutOfRange {
            input: input.into(),
        }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_backend_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBackendUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with `context` and pass it on
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::invalid_backend_url("nope", "relative URL without a base");
        assert_eq!(
            err.to_string(),
            "Invalid backend URL 'nope': relative URL without a base"
        );

        let err = Error::terminal("no tty");
        assert_eq!(err.to_string(), "Terminal error: no tty");
    }

    #[test]
    fn test_invalid_timestamp_matches_browser_wording() {
        let err = Error::invalid_timestamp("2024-13-45T99:99");
        assert_eq!(err.to_string(), "Invalid time value");
    }

    #[test]
    fn test_count_out_of_range_names_the_input() {
        let err = Error::count_out_of_range("18446744073709551616");
        assert_eq!(err.to_string(), "Count is too large: 18446744073709551616");
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = Error::missing_field("device_type");
        assert_eq!(err.to_string(), "Missing required field: device_type");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("creating log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
