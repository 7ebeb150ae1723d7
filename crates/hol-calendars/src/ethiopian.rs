//! Ethiopian calendar helpers.

/// Whether the Ethiopian year beginning in the given Gregorian year is a
/// leap year.  Ethiopian leap years precede Gregorian ones, so fixed
/// Ethiopian feasts fall one Gregorian day later from September of such
/// a year through the following August.
pub fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_ethiopian_leap_year(2003));
        assert!(is_ethiopian_leap_year(2007));
        assert!(is_ethiopian_leap_year(2011));
        assert!(!is_ethiopian_leap_year(2004));
        assert!(!is_ethiopian_leap_year(2000));
    }
}
