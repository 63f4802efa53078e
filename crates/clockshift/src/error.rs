//! Error types for request validation and input parsing.
//!
//! The conversion engine itself cannot fail; every variant here is raised while
//! turning caller input into engine arguments.

use thiserror::Error;

/// HTTP-style status for a successful conversion.
pub const STATUS_OK: u16 = 200;

/// HTTP-style status for every rejected request.
pub const STATUS_BAD_REQUEST: u16 = 400;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The request body was not parseable JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The `command` marker was absent or did not equal `convert_datetime`.
    #[error("Invalid command")]
    MalformedCommand,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A field was present but could not be coerced to its expected type.
    #[error("{field} must be {expected}, got {found}")]
    TypeCoercion {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("utc_datetime '{0}' does not match format YYYY-MM-DD HH:MM")]
    MalformedTimestamp(String),

    #[error("timezone_offset must be between -12 and +12")]
    OffsetOutOfRange(i64),
}

impl ConvertError {
    /// Status code a transport should report for this failure.
    ///
    /// Every failure is a client error; there are no server-side failure modes.
    pub fn status_code(&self) -> u16 {
        STATUS_BAD_REQUEST
    }
}

/// Convenience alias used throughout clockshift.
pub type Result<T> = std::result::Result<T, ConvertError>;
