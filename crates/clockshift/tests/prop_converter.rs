//! Property-based tests for the conversion engine using proptest.
//!
//! These check invariants over arbitrary valid inputs rather than the specific
//! examples in `converter_tests.rs`.

use chrono::{Duration, NaiveDate};
use clockshift::dst::DstWindow;
use clockshift::{convert, dst_adjustment, is_dst_period, to_local, OffsetHours, UtcTimestamp};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Generate a valid UTC timestamp string in the 1900-2200 range.
/// Day is capped at 28 to avoid invalid month/day combos.
fn arb_utc() -> impl Strategy<Value = String> {
    (1900i32..=2200, 1u32..=12, 1u32..=28, 0u32..=23, 0u32..=59)
        .prop_map(|(y, m, d, h, min)| format!("{:04}-{:02}-{:02} {:02}:{:02}", y, m, d, h, min))
}

fn arb_offset() -> impl Strategy<Value = i64> {
    -12i64..=12
}

fn parse(s: &str) -> UtcTimestamp {
    s.parse().expect("strategy only yields valid timestamps")
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn conversion_is_total_and_well_formed(utc in arb_utc(), hours in arb_offset(), is_dst in any::<bool>()) {
        let result = convert(parse(&utc), OffsetHours::new(hours).unwrap(), is_dst);
        prop_assert!(NaiveDate::parse_from_str(&result.date, "%Y-%m-%d").is_ok());
        prop_assert_eq!(result.time.len(), 5);
        prop_assert_eq!(&result.time[2..3], ":");
    }

    #[test]
    fn dst_flag_off_is_offset_only(utc in arb_utc(), hours in arb_offset()) {
        let ts = parse(&utc);
        let expected = ts.naive() + Duration::hours(hours);
        prop_assert_eq!(to_local(ts, OffsetHours::new(hours).unwrap(), false), expected);
    }

    #[test]
    fn dst_adjustment_is_zero_or_one(utc in arb_utc(), is_dst in any::<bool>()) {
        let ts = parse(&utc);
        let adjustment = dst_adjustment(ts, is_dst);
        prop_assert!(adjustment == 0 || adjustment == 1);
        prop_assert_eq!(adjustment == 1, is_dst && is_dst_period(ts.naive()));
    }

    #[test]
    fn dst_shift_is_exactly_one_hour_more(utc in arb_utc(), hours in arb_offset()) {
        let ts = parse(&utc);
        let offset = OffsetHours::new(hours).unwrap();
        let with_dst = to_local(ts, offset, true);
        let without = to_local(ts, offset, false);
        let delta = (with_dst - without).num_hours();
        prop_assert_eq!(delta, dst_adjustment(ts, true));
    }

    #[test]
    fn rerender_with_zero_offset_is_idempotent(utc in arb_utc(), hours in arb_offset(), is_dst in any::<bool>()) {
        let first = convert(parse(&utc), OffsetHours::new(hours).unwrap(), is_dst);
        let again = convert(parse(&first.to_string()), OffsetHours::ZERO, false);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn window_boundaries_hold_for_any_year(year in 1900i32..=2200) {
        let window = DstWindow::for_year(year).unwrap();
        let one_minute = Duration::minutes(1);

        prop_assert!(is_dst_period(window.start));
        prop_assert!(!is_dst_period(window.start - one_minute));
        prop_assert!(!is_dst_period(window.end));
        prop_assert!(is_dst_period(window.end - one_minute));
    }
}
