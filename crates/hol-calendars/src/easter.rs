//! Easter Sunday computus.
//!
//! The three classical methods: the original Julian computus (result on
//! the Julian calendar), the Orthodox variant (Julian computus mapped to
//! the Gregorian calendar, valid from 1583), and the revised Western
//! computus introduced with the Gregorian reform.

use hol_core::errors::{Error, Result};
use hol_time::Date;

/// Which computus to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasterMethod {
    /// Original computus; the resulting date is on the Julian calendar.
    Julian,
    /// Original computus mapped to the Gregorian calendar.
    Orthodox,
    /// Revised computus on the Gregorian calendar.
    Western,
}

/// Compute Easter Sunday for a given year.
///
/// Returns an error when the resulting date falls outside the supported
/// date range.
pub fn easter_sunday(year: i32, method: EasterMethod) -> Result<Date> {
    if !(1800..=2299).contains(&year) {
        return Err(Error::Date(format!(
            "easter computus: year {year} out of range [1800, 2299]"
        )));
    }

    let y = year;
    let g = y % 19; // golden number - 1

    let (i, j, e) = match method {
        EasterMethod::Julian | EasterMethod::Orthodox => {
            let i = (19 * g + 15) % 30; // days from March 21 to the Paschal full moon
            let j = (y + y / 4 + i) % 7; // weekday of the full moon
            let e = if method == EasterMethod::Orthodox {
                // Julian-to-Gregorian correction, valid for years > 1600.
                10 + y / 100 - 16 - (y / 100 - 16) / 4
            } else {
                0
            };
            (i, j, e)
        }
        EasterMethod::Western => {
            let c = y / 100;
            let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
            (i, j, 0)
        }
    };

    // p is the number of days from March 21 to the Sunday on or before
    // the Paschal full moon; p can be negative for the Julian method.
    let p = i - j + e;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    Date::from_ymd(y, month as u8, day as u8)
}
