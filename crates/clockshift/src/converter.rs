//! UTC to local conversion -- applies a fixed offset plus an optional DST hour.
//!
//! The DST decision is made on the UTC input before any offset is applied. The
//! total shift may reach +13 hours (offset +12 with DST); only the caller's
//! offset is range-checked.

use chrono::{Duration, NaiveDateTime};

use crate::dst::is_dst_period;
use crate::error::Result;
use crate::types::{LocalResult, OffsetHours, UtcTimestamp};

/// Extra hours contributed by DST: 1 when requested and `utc` is in the window.
pub fn dst_adjustment(utc: UtcTimestamp, is_dst: bool) -> i64 {
    if is_dst && is_dst_period(utc.naive()) {
        1
    } else {
        0
    }
}

/// Shift `utc` into local time.
///
/// Calendar rollover (day, month, year, leap years) is handled by chrono.
/// `UtcTimestamp` years are bounded to `1..=9999`, so the addition cannot leave
/// chrono's representable range.
pub fn to_local(utc: UtcTimestamp, offset: OffsetHours, is_dst: bool) -> NaiveDateTime {
    let total_hours = offset.hours() + dst_adjustment(utc, is_dst);
    utc.naive() + Duration::hours(total_hours)
}

/// Convert a UTC timestamp to a rendered local date and time.
///
/// # Example
///
/// ```rust
/// use clockshift::{convert, OffsetHours, UtcTimestamp};
///
/// let utc: UtcTimestamp = "2024-03-10 23:30".parse().unwrap();
/// let local = convert(utc, OffsetHours::new(2).unwrap(), false);
/// assert_eq!((local.date.as_str(), local.time.as_str()), ("2024-03-11", "01:30"));
/// ```
pub fn convert(utc: UtcTimestamp, offset: OffsetHours, is_dst: bool) -> LocalResult {
    LocalResult::from_naive(&to_local(utc, offset, is_dst))
}

/// Parse and validate raw inputs, then [`convert`].
///
/// # Arguments
/// - `utc` -- UTC timestamp string (e.g., "2024-01-15 10:00")
/// - `offset` -- whole-hour offset, must be within `[-12, 12]`
/// - `is_dst` -- whether to apply the DST hour inside the window
///
/// # Errors
/// Returns `ConvertError::OffsetOutOfRange` if `offset` is outside `[-12, 12]`.
/// Returns `ConvertError::MalformedTimestamp` if `utc` does not match `YYYY-MM-DD HH:MM`.
pub fn convert_str(utc: &str, offset: i64, is_dst: bool) -> Result<LocalResult> {
    let offset = OffsetHours::new(offset)?;
    let utc: UtcTimestamp = utc.parse()?;
    Ok(convert(utc, offset, is_dst))
}
