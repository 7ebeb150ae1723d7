//! Thai/Khmer lunisolar calendar.
//!
//! The Thai lunar calendar intercalates in a three-way cycle:
//! Pakatimat (normal) years have 354 days, Athikawan (extra-day) years
//! 355, and Athikamat (extra-month) years 384, the extra month being a
//! repeat of month 8 ("month 8.8") that delays every later feast by a
//! month.  Year types are tabulated, not computed, so conversions work
//! only for 1941..=2057; anything outside that span yields `None`.
//!
//! The Khmer calendar shares the year cycle but does not delay the
//! month-3 and month-6 feasts in extra-month years.

use hol_time::Date;

/// Which national style of the lunisolar calendar to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarStyle {
    /// Thai style: Athikamat years delay the month-3/month-6 feasts.
    Thai,
    /// Khmer style: month-3/month-6 feasts are never delayed.
    Khmer,
}

/// Extra-day (355-day) years, tabulated from the B.E. 2300–2600 calendar.
const ATHIKAWAN_YEARS: [i32; 22] = [
    1945, 1949, 1952, 1957, 1963, 1970, 1973, 1979, 1987, 1990, 1997, 2000, 2006, 2009, 2016,
    2020, 2025, 2032, 2035, 2043, 2046, 2052,
];

/// Extra-month (384-day) years, tabulated from the B.E. 2300–2600 calendar.
const ATHIKAMAT_YEARS: [i32; 43] = [
    1942, 1944, 1947, 1950, 1953, 1956, 1958, 1961, 1964, 1966, 1969, 1972, 1975, 1977, 1980,
    1983, 1985, 1988, 1991, 1994, 1996, 1999, 2002, 2004, 2007, 2010, 2012, 2015, 2018, 2021,
    2023, 2026, 2029, 2031, 2034, 2037, 2040, 2042, 2045, 2048, 2050, 2053, 2056,
];

const START_YEAR: i32 = 1941;
const END_YEAR: i32 = 2057;

#[derive(Clone, Copy, PartialEq, Eq)]
enum YearType {
    Pakatimat,
    Athikawan,
    Athikamat,
}

fn year_type(year: i32) -> YearType {
    if ATHIKAMAT_YEARS.binary_search(&year).is_ok() {
        YearType::Athikamat
    } else if ATHIKAWAN_YEARS.binary_search(&year).is_ok() {
        YearType::Athikawan
    } else {
        YearType::Pakatimat
    }
}

/// Thai/Khmer lunisolar calendar converter.
#[derive(Debug, Clone, Copy)]
pub struct ThaiLunisolar {
    style: CalendarStyle,
}

impl ThaiLunisolar {
    /// Create a converter for the given calendar style.
    pub fn new(style: CalendarStyle) -> Self {
        ThaiLunisolar { style }
    }

    /// Start date of the lunar year beginning in the previous Gregorian
    /// year (usually in November or December).  `None` outside
    /// 1941..=2057.
    pub fn start_date(&self, year: i32) -> Option<Date> {
        if !(START_YEAR..=END_YEAR).contains(&year) {
            return None;
        }
        // Anchor: lunar year 1941 started on 1940-11-30.  Accumulate
        // whole lunar years from there.
        let mut start = Date::from_ymd(1940, 11, 30).ok()?;
        for y in START_YEAR..year {
            let days = match year_type(y) {
                YearType::Athikamat => 384,
                YearType::Athikawan => 355,
                YearType::Pakatimat => 354,
            };
            start = start + days;
        }
        Some(start)
    }

    /// Offset helper: `athikamat` applies only in extra-month years (and
    /// for the month-3/month-6 feasts only in the Thai style).
    fn feast(&self, year: i32, offsets: [i32; 3], early_month: bool) -> Option<Date> {
        let start = self.start_date(year)?;
        let delta = match year_type(year) {
            YearType::Athikamat if early_month && self.style == CalendarStyle::Khmer => offsets[1],
            YearType::Athikamat => offsets[0],
            YearType::Athikawan => offsets[1],
            YearType::Pakatimat => offsets[2],
        };
        Some(start + delta)
    }

    /// Makha Bucha / Meak Bochea: full moon of month 3 (month 4 in Thai
    /// extra-month years).
    pub fn makha_bucha(&self, year: i32) -> Option<Date> {
        self.feast(year, [102, 73, 73], true)
    }

    /// Visakha Bucha / Visaka Bochea: full moon of month 6 (month 7 in
    /// Thai extra-month years).
    pub fn visakha_bucha(&self, year: i32) -> Option<Date> {
        self.feast(year, [191, 161, 161], true)
    }

    /// Atthami Bucha: 8th waning day of month 6 (month 7 in Thai
    /// extra-month years).
    pub fn atthami_bucha(&self, year: i32) -> Option<Date> {
        self.feast(year, [199, 169, 169], true)
    }

    /// Asarnha Bucha: full moon of month 8 (month 8.8 in extra-month
    /// years).
    pub fn asarnha_bucha(&self, year: i32) -> Option<Date> {
        self.feast(year, [250, 221, 220], false)
    }

    /// Khao Phansa, start of Buddhist Lent: 1st waning day of month 8
    /// (month 8.8 in extra-month years).
    pub fn khao_phansa(&self, year: i32) -> Option<Date> {
        self.feast(year, [251, 222, 221], false)
    }

    /// Ok Phansa, end of Buddhist Lent: full moon of month 11.
    pub fn ok_phansa(&self, year: i32) -> Option<Date> {
        self.feast(year, [339, 310, 309], false)
    }

    /// Pchum Ben: new moon of month 10.
    pub fn pchum_ben(&self, year: i32) -> Option<Date> {
        self.feast(year, [324, 295, 294], false)
    }

    /// Loy Krathong / Bon Om Touk: full moon of month 12.
    pub fn loy_krathong(&self, year: i32) -> Option<Date> {
        self.feast(year, [368, 339, 338], false)
    }

    /// Preah Neangkoal, the Khmer Royal Ploughing Ceremony: 4th waning
    /// day of month 6.  Never delayed by the extra month.
    pub fn preah_neangkoal(&self, year: i32) -> Option<Date> {
        Some(self.start_date(year)? + 165)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn thai() -> ThaiLunisolar {
        ThaiLunisolar::new(CalendarStyle::Thai)
    }

    fn khmer() -> ThaiLunisolar {
        ThaiLunisolar::new(CalendarStyle::Khmer)
    }

    #[test]
    fn test_start_date_anchor() {
        assert_eq!(thai().start_date(1941), Some(date(1940, 11, 30)));
        // 1941 is Pakatimat: the next lunar year starts 354 days later.
        assert_eq!(thai().start_date(1942), Some(date(1940, 11, 30) + 354));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(thai().start_date(1940), None);
        assert_eq!(thai().start_date(2058), None);
        assert_eq!(thai().makha_bucha(2060), None);
    }

    #[test]
    fn test_visakha_bucha_2010() {
        // Documented seed: Visakha Bucha 2010 (an Athikamat year).
        assert_eq!(thai().visakha_bucha(2010), Some(date(2010, 5, 28)));
    }

    #[test]
    fn test_makha_bucha_2010() {
        // 2010 lunar year starts 2009-11-18; Athikamat offset 102.
        let start = thai().start_date(2010).unwrap();
        assert_eq!(start, date(2009, 11, 18));
        assert_eq!(thai().makha_bucha(2010), Some(start + 102));
        assert_eq!(thai().makha_bucha(2010), Some(date(2010, 2, 28)));
    }

    #[test]
    fn test_khmer_style_early_feasts() {
        // In an extra-month year the Khmer feasts of months 3 and 6 keep
        // the normal-year offsets.
        let start = khmer().start_date(2010).unwrap();
        assert_eq!(khmer().makha_bucha(2010), Some(start + 73));
        assert_eq!(khmer().visakha_bucha(2010), Some(start + 161));
        // Month-8+ feasts are still delayed.
        assert_eq!(khmer().pchum_ben(2010), Some(start + 324));
    }

    #[test]
    fn test_preah_neangkoal_fixed_offset() {
        for year in [2009, 2010, 2016] {
            let start = khmer().start_date(year).unwrap();
            assert_eq!(khmer().preah_neangkoal(year), Some(start + 165));
        }
    }

    #[test]
    fn test_year_type_tables_sorted() {
        assert!(ATHIKAWAN_YEARS.windows(2).all(|w| w[0] < w[1]));
        assert!(ATHIKAMAT_YEARS.windows(2).all(|w| w[0] < w[1]));
    }
}
