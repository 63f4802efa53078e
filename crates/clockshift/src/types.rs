//! Value types crossing the engine boundary.
//!
//! Each type enforces its invariant at construction, so the engine only ever
//! sees inputs it can convert.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Input pattern for UTC timestamps: no seconds, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Rendered local date pattern.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rendered local time pattern.
pub const TIME_FORMAT: &str = "%H:%M";

/// Smallest caller-supplied offset, in hours.
pub const MIN_OFFSET_HOURS: i64 = -12;

/// Largest caller-supplied offset, in hours.
pub const MAX_OFFSET_HOURS: i64 = 12;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A civil date and time with no zone attached, interpreted as UTC.
///
/// Only constructed by parsing `YYYY-MM-DD HH:MM` with a year in `1..=9999`,
/// which keeps every timestamp at least a day away from chrono's limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTimestamp(NaiveDateTime);

impl UtcTimestamp {
    /// The underlying naive datetime.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl FromStr for UtcTimestamp {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        // chrono alone tolerates extra or missing whitespace and a signed year.
        if !has_timestamp_shape(s) {
            return Err(ConvertError::MalformedTimestamp(s.to_string()));
        }

        let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map_err(|_| ConvertError::MalformedTimestamp(s.to_string()))?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&naive.year()) {
            return Err(ConvertError::MalformedTimestamp(s.to_string()));
        }

        Ok(Self(naive))
    }
}

/// Exactly `DDDD-DD-DD DD:DD`: 16 ASCII bytes, separators at fixed positions.
fn has_timestamp_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// A caller-supplied whole-hour UTC offset in `[-12, +12]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetHours(i64);

impl OffsetHours {
    /// UTC itself.
    pub const ZERO: OffsetHours = OffsetHours(0);

    /// Validate `hours` against the `[-12, +12]` range.
    ///
    /// # Errors
    /// Returns `ConvertError::OffsetOutOfRange` for anything outside the range.
    pub fn new(hours: i64) -> Result<Self> {
        if (MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(ConvertError::OffsetOutOfRange(hours))
        }
    }

    pub fn hours(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for OffsetHours {
    type Error = ConvertError;

    fn try_from(hours: i64) -> Result<Self> {
        Self::new(hours)
    }
}

/// A converted local date and time, rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalResult {
    /// Local date as `YYYY-MM-DD`.
    ///
    /// A shift across the ends of the 1..=9999 input range leaves it:
    /// `0000-12-31`, or `+10000-01-01` with chrono's explicit sign.
    pub date: String,
    /// Local time of day as `HH:MM`.
    pub time: String,
}

impl LocalResult {
    pub fn from_naive(local: &NaiveDateTime) -> Self {
        Self {
            date: local.format(DATE_FORMAT).to_string(),
            time: local.format(TIME_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for LocalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
