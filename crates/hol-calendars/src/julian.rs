//! Julian-to-Gregorian calendar drift.

/// Extra days (beyond the 13 accumulated by 1900) that the Julian
/// calendar lags the Gregorian calendar in a given year.
///
/// Fixed feasts kept on the Julian calendar (e.g. Orthodox Christmas on
/// December 25 Julian = January 7 Gregorian) move by this amount:
/// 0 through 2099, 1 from 2100, and so on.
pub fn julian_calendar_drift(year: i32) -> i32 {
    if year <= 1582 {
        -13
    } else {
        year / 100 - year / 400 - 15
    }
}
