//! Tests for the DST window: boundary dates per year and the half-open predicate.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use clockshift::dst::{
    first_sunday_of_november, first_sunday_on_or_after, is_dst_period, second_sunday_of_march,
    DstWindow,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Boundary dates
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn first_sunday_on_or_after_sunday_is_same_day() {
    // 2026-03-01 is a Sunday
    assert_eq!(first_sunday_on_or_after(date(2026, 3, 1)), date(2026, 3, 1));
}

#[test]
fn first_sunday_on_or_after_saturday_is_next_day() {
    // 2025-03-01 is a Saturday
    assert_eq!(first_sunday_on_or_after(date(2025, 3, 1)), date(2025, 3, 2));
}

#[test]
fn first_sunday_on_or_after_monday_is_six_days_later() {
    // 2024-01-01 is a Monday
    assert_eq!(first_sunday_on_or_after(date(2024, 1, 1)), date(2024, 1, 7));
}

#[test]
fn known_windows() {
    assert_eq!(second_sunday_of_march(2024), Some(date(2024, 3, 10)));
    assert_eq!(first_sunday_of_november(2024), Some(date(2024, 11, 3)));

    assert_eq!(second_sunday_of_march(2025), Some(date(2025, 3, 9)));
    assert_eq!(first_sunday_of_november(2025), Some(date(2025, 11, 2)));
}

#[test]
fn march_and_november_first_on_sunday() {
    // In 2015 and 2026 both March 1 and November 1 are Sundays: the March
    // boundary is one week later, the November boundary is the 1st itself.
    for year in [2015, 2026] {
        assert_eq!(second_sunday_of_march(year), Some(date(year, 3, 8)));
        assert_eq!(first_sunday_of_november(year), Some(date(year, 11, 1)));
    }
}

#[test]
fn boundaries_are_always_sundays_in_range() {
    for year in 1900..=2100 {
        let start = second_sunday_of_march(year).unwrap();
        let end = first_sunday_of_november(year).unwrap();
        assert_eq!(start.weekday(), Weekday::Sun, "march {year}");
        assert_eq!(end.weekday(), Weekday::Sun, "november {year}");
        assert!((8..=14).contains(&start.day()), "march {year}: {start}");
        assert!((1..=7).contains(&end.day()), "november {year}: {end}");
    }
}

#[test]
fn window_boundaries_are_midnight() {
    let window = DstWindow::for_year(2024).unwrap();
    assert_eq!(window.start, at(2024, 3, 10, 0, 0));
    assert_eq!(window.end, at(2024, 11, 3, 0, 0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Predicate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn march_boundary_is_inclusive() {
    assert!(is_dst_period(at(2024, 3, 10, 0, 0)));
    assert!(!is_dst_period(at(2024, 3, 9, 23, 59)));
}

#[test]
fn november_boundary_is_exclusive() {
    assert!(!is_dst_period(at(2024, 11, 3, 0, 0)));
    assert!(is_dst_period(at(2024, 11, 2, 23, 59)));
}

#[test]
fn midsummer_is_in_window() {
    assert!(is_dst_period(at(2024, 6, 15, 10, 0)));
}

#[test]
fn winter_is_outside_window() {
    assert!(!is_dst_period(at(2024, 1, 15, 10, 0)));
    assert!(!is_dst_period(at(2024, 12, 31, 23, 59)));
}

#[test]
fn window_uses_the_instant_own_year() {
    // Early January never belongs to the previous year's window.
    assert!(!is_dst_period(at(2025, 1, 1, 0, 0)));
    let window_2025 = DstWindow::for_year(2025).unwrap();
    assert!(!window_2025.contains(at(2024, 6, 15, 10, 0)));
}
