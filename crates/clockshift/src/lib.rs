//! # clockshift
//!
//! Deterministic UTC to local civil time conversion for calendar clients.
//!
//! A conversion takes a UTC timestamp (`YYYY-MM-DD HH:MM`), a fixed whole-hour
//! offset in `[-12, +12]` and a DST flag. When the flag is set and the UTC
//! instant falls inside the U.S.-style DST window of its year, one extra hour is
//! added on top of the offset.
//!
//! ## Quick start
//!
//! ```rust
//! use clockshift::{convert, OffsetHours, UtcTimestamp};
//!
//! let utc: UtcTimestamp = "2024-06-15 10:00".parse().unwrap();
//! let offset = OffsetHours::new(-5).unwrap();
//!
//! let local = convert(utc, offset, true);
//! assert_eq!(local.date, "2024-06-15");
//! assert_eq!(local.time, "06:00");
//! ```
//!
//! ## Modules
//!
//! - [`dst`] -- DST window for a year and the in-window predicate
//! - [`converter`] -- UTC + offset (+ DST hour) → local date and time
//! - [`request`] -- JSON request validation, coercion and response mapping
//! - [`types`] -- `UtcTimestamp`, `OffsetHours`, `LocalResult`
//! - [`error`] -- Error types

pub mod converter;
pub mod dst;
pub mod error;
pub mod request;
pub mod types;

pub use converter::{convert, convert_str, dst_adjustment, to_local};
pub use dst::{is_dst_period, DstWindow};
pub use error::ConvertError;
pub use request::{handle_json, handle_request, Reply, CONVERT_COMMAND};
pub use types::{LocalResult, OffsetHours, UtcTimestamp};
