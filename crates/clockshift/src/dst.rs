//! U.S.-style daylight saving window: second Sunday of March through the first
//! Sunday of November.
//!
//! Both boundaries sit at 00:00 of their day and the window is half-open, so
//! the March instant is inside and the November instant is not. Only the year
//! of the instant being tested is consulted.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// The `[start, end)` DST window of a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstWindow {
    /// Second Sunday of March, 00:00 (inclusive).
    pub start: NaiveDateTime,
    /// First Sunday of November, 00:00 (exclusive).
    pub end: NaiveDateTime,
}

impl DstWindow {
    /// Compute the window for `year`.
    ///
    /// Returns `None` only for years chrono cannot represent.
    pub fn for_year(year: i32) -> Option<Self> {
        let start = second_sunday_of_march(year)?;
        let end = first_sunday_of_november(year)?;
        Some(Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        })
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Advance `date` to the first Sunday on or after it.
///
/// Adds `(6 - weekday) mod 7` days with Monday = 0, so a Sunday maps to itself.
pub fn first_sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    let ahead = (6 - weekday) % 7;
    date + Days::new(u64::from(ahead))
}

/// First Sunday on or after March 1, plus one week.
pub fn second_sunday_of_march(year: i32) -> Option<NaiveDate> {
    let march_first = NaiveDate::from_ymd_opt(year, 3, 1)?;
    first_sunday_on_or_after(march_first).checked_add_days(Days::new(7))
}

/// First Sunday on or after November 1.
pub fn first_sunday_of_november(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 11, 1).map(first_sunday_on_or_after)
}

/// Whether `instant` falls inside the DST window of its own year.
pub fn is_dst_period(instant: NaiveDateTime) -> bool {
    DstWindow::for_year(instant.year()).is_some_and(|window| window.contains(instant))
}
