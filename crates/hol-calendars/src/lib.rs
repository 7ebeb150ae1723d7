//! # hol-calendars
//!
//! Non-Gregorian calendar converters used by holiday rules: the Easter
//! computus (Julian, Orthodox, and Western), the Julian calendar drift,
//! the Ethiopian leap-year rule, the Thai/Khmer lunisolar calendar, and
//! precomputed Hijri feast tables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Easter Sunday computus.
pub mod easter;

/// Ethiopian calendar helpers.
pub mod ethiopian;

/// Hijri (Islamic lunar) feast tables.
pub mod islamic;

/// Julian-to-Gregorian calendar drift.
pub mod julian;

/// Thai/Khmer lunisolar calendar.
pub mod thai;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use easter::{easter_sunday, EasterMethod};
pub use ethiopian::is_ethiopian_leap_year;
pub use islamic::{IslamicCalendar, IslamicFeast};
pub use julian::julian_calendar_drift;
pub use thai::{CalendarStyle, ThaiLunisolar};
