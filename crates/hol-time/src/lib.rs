//! # hol-time
//!
//! Date, weekday, and month types plus the Gregorian arithmetic helpers
//! (nth-weekday-of-month, nearest-weekday, day offsetting) that every
//! holiday rule is built from.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Nth-weekday and nearest-weekday helpers.
pub mod gregorian;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use gregorian::{nth_weekday_from, nth_weekday_of_month};
pub use month::Month;
pub use weekday::Weekday;
