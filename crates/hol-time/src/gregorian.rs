//! Nth-weekday and nearest-weekday helpers.
//!
//! These are the building blocks for floating holiday rules such as
//! "third Monday of January" or "first Saturday after July 1".

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;
use hol_core::errors::{Error, Result};

/// Resolve the `n`-th occurrence of `weekday` in `month`/`year`.
///
/// Positive `n` counts from the start of the month (1 = first), negative
/// `n` counts from the end (-1 = last).  Returns `Ok(None)` when the
/// month has no such occurrence (e.g. a fifth Monday), and an error when
/// `n` is zero or the year is out of range.
pub fn nth_weekday_of_month(
    n: i8,
    weekday: Weekday,
    month: Month,
    year: i32,
) -> Result<Option<Date>> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "nth weekday ordinal must be non-zero".into(),
        ));
    }
    let last = days_in_month(year, month.number());

    let day = if n > 0 {
        let first = Date::from_ymd(year, month.number(), 1)?;
        let to_first = (7 + weekday.ordinal() - first.weekday().ordinal()) % 7;
        1 + to_first as i16 + (n as i16 - 1) * 7
    } else {
        let end = Date::from_ymd(year, month.number(), last)?;
        let from_last = (7 + end.weekday().ordinal() - weekday.ordinal()) % 7;
        last as i16 - from_last as i16 + (n as i16 + 1) * 7
    };

    if day < 1 || day > last as i16 {
        return Ok(None);
    }
    Ok(Some(Date::from_ymd(year, month.number(), day as u8)?))
}

/// Resolve the `n`-th `weekday` on or after (`n > 0`) or on or before
/// (`n < 0`) the given date.  `n = 1` returns `from` itself when it
/// already falls on `weekday`.
pub fn nth_weekday_from(n: i8, weekday: Weekday, from: Date) -> Result<Date> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "nth weekday ordinal must be non-zero".into(),
        ));
    }
    let delta = if n > 0 {
        (n as i32 - 1) * 7 + ((7 + weekday.ordinal() - from.weekday().ordinal()) % 7) as i32
    } else {
        (n as i32 + 1) * 7 - ((7 + from.weekday().ordinal() - weekday.ordinal()) % 7) as i32
    };
    from.add_days(delta)
}
