//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch.
//! Serial 1 corresponds to January 1, 1800; the valid range is
//! 1800-01-01 to 2299-12-31, which comfortably covers every rule table
//! shipped with the library.

use crate::weekday::Weekday;
use hol_core::errors::{Error, Result};

/// A Gregorian calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1800.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2299.
    pub const MAX: Date = Date(182_621);

    /// Serial number of the Unix epoch, 1970-01-01.
    const UNIX_EPOCH_SERIAL: i64 = 62_092;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` is non-positive or past [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1800..=2299).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1800, 2299]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a Unix timestamp (seconds since 1970-01-01 UTC,
    /// fractional seconds allowed), truncated to the calendar day.
    pub fn from_unix_timestamp(timestamp: f64) -> Result<Self> {
        if !timestamp.is_finite() {
            return Err(Error::Date(format!("timestamp {timestamp} is not finite")));
        }
        let days = (timestamp / 86_400.0).floor() as i64;
        let serial = Self::UNIX_EPOCH_SERIAL + days;
        if serial <= 0 || serial > Self::MAX.0 as i64 {
            return Err(Error::Date(format!("timestamp {timestamp} out of range")));
        }
        Ok(Date(serial as i32))
    }

    /// Parse a date string.
    ///
    /// Accepted formats: ISO `YYYY-MM-DD`, `YYYY/MM/DD`, and US `M/D/YYYY`.
    pub fn parse(text: &str) -> Result<Self> {
        let parse_err = || Error::DateParse(text.to_owned());

        let separator = if text.contains('-') {
            '-'
        } else if text.contains('/') {
            '/'
        } else {
            return Err(parse_err());
        };

        let parts: Vec<&str> = text.trim().split(separator).collect();
        if parts.len() != 3 {
            return Err(parse_err());
        }

        let numbers: Vec<i32> = parts
            .iter()
            .map(|p| p.parse::<i32>().map_err(|_| parse_err()))
            .collect::<Result<_>>()?;

        let (year, month, day) = if parts[0].len() == 4 {
            (numbers[0], numbers[1], numbers[2])
        } else if parts[2].len() == 4 {
            // US order: month/day/year.
            (numbers[2], numbers[0], numbers[1])
        } else {
            return Err(parse_err());
        };

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(parse_err());
        }
        Date::from_ymd(year, month as u8, day as u8).map_err(|_| parse_err())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the year (1800–2299).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1800-01-01) is a Wednesday (ordinal 3).
        let w = ((self.0 + 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month(y, m);
        Date(serial_from_ymd(y, m, last))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Date::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years in [1800, 1800) .. counted via the prefix sum below.
const LEAPS_BEFORE_EPOCH: i32 = 436; // f(1799) with f(n) = n/4 - n/100 + n/400

/// Convert (year, month, day) to a serial number.  Serial 1 = 1800-01-01.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let mut serial = (year - 1800) * 365;
    // Leap days in [1800, year)
    serial += (year - 1) / 4 - (year - 1) / 100 + (year - 1) / 400 - LEAPS_BEFORE_EPOCH;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    // Estimate the year, then adjust until the serial falls within it.
    let mut y = serial / 365 + 1800;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if y < 2299 && serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1800, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Wednesday);
    }

    #[test]
    fn test_max() {
        let d = Date::from_ymd(2299, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1800, 1, 1),
            (1900, 2, 28), // non-leap century
            (1940, 11, 30),
            (2000, 2, 29), // leap century
            (2023, 6, 15),
            (2299, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        // 2022-01-01 is a Saturday
        assert_eq!(Date::from_ymd(2022, 1, 1).unwrap().weekday(), Weekday::Saturday);
        // 1970-01-01 is a Thursday
        assert_eq!(Date::from_ymd(1970, 1, 1).unwrap().weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2, Date::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        // Roll across a leap day
        let feb28 = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(feb28 + 2, Date::from_ymd(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29);
    }

    #[test]
    fn test_unix_timestamp() {
        assert_eq!(
            Date::from_unix_timestamp(0.0).unwrap(),
            Date::from_ymd(1970, 1, 1).unwrap()
        );
        // 2014-01-01 12:10:45 UTC
        assert_eq!(
            Date::from_unix_timestamp(1_388_578_245.5).unwrap(),
            Date::from_ymd(2014, 1, 1).unwrap()
        );
        assert!(Date::from_unix_timestamp(f64::NAN).is_err());
    }

    #[test]
    fn test_parse() {
        let expected = Date::from_ymd(2014, 1, 2).unwrap();
        assert_eq!(Date::parse("2014-01-02").unwrap(), expected);
        assert_eq!(Date::parse("2014/01/02").unwrap(), expected);
        assert_eq!(Date::parse("1/2/2014").unwrap(), expected);
        assert_eq!(Date::parse("01/02/2014").unwrap(), expected);

        assert!(Date::parse("not a date").is_err());
        assert!(Date::parse("2014-13-01").is_err());
        assert!(Date::parse("2014-02-30").is_err());
    }

    proptest! {
        #[test]
        fn serial_ymd_roundtrip(serial in 1i32..=182_621) {
            let d = Date::from_serial(serial).unwrap();
            let rebuilt = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
            prop_assert_eq!(d, rebuilt);
        }

        #[test]
        fn consecutive_serials_are_consecutive_days(serial in 1i32..182_621) {
            let d = Date::from_serial(serial).unwrap();
            let next = Date::from_serial(serial + 1).unwrap();
            prop_assert_eq!(next - d, 1);
            prop_assert_eq!(
                next.weekday().ordinal(),
                d.weekday().ordinal() % 7 + 1
            );
        }
    }
}
