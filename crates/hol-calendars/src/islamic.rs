//! Hijri (Islamic lunar) feast tables.
//!
//! The Hijri year is roughly 11 days shorter than the Gregorian one, so
//! a feast can fall zero, one, or twice in a Gregorian year.  Dates are
//! shipped as precomputed Gregorian tables rather than computed at
//! runtime; the default tables are astronomical estimates, and entities
//! with officially confirmed dates may overlay their own tables.

use hol_core::errors::Result;
use hol_time::Date;

/// A feast tracked on the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IslamicFeast {
    /// Eid al-Fitr, 1 Shawwal.
    EidAlFitr,
    /// Eid al-Adha, 10 Dhu al-Hijjah.
    EidAlAdha,
    /// Mawlid, 12 Rabi al-Awwal.
    Mawlid,
}

/// One table row: Gregorian year and its (month, day) occurrences.
pub type FeastRow = (i32, &'static [(u8, u8)]);

/// A per-feast table of Gregorian dates, sorted by year.
pub type FeastTable = &'static [FeastRow];

/// A feast occurrence: the resolved date plus whether it is an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeastDate {
    /// Resolved Gregorian date.
    pub date: Date,
    /// `true` when the date comes from the default estimated tables.
    pub estimated: bool,
}

// ── Default (estimated) tables ────────────────────────────────────────────────

const EID_AL_FITR_DATES: FeastTable = &[
    (2002, &[(12, 4)]),
    (2003, &[(11, 25)]),
    (2004, &[(11, 14)]),
    (2005, &[(11, 3)]),
    (2006, &[(10, 23)]),
    (2007, &[(10, 12)]),
    (2008, &[(9, 30)]),
    (2009, &[(9, 20)]),
    (2010, &[(9, 9)]),
    (2011, &[(8, 30)]),
    (2012, &[(8, 19)]),
    (2013, &[(8, 8)]),
    (2014, &[(7, 28)]),
    (2015, &[(7, 17)]),
    (2016, &[(7, 6)]),
    (2017, &[(6, 26)]),
    (2018, &[(6, 15)]),
    (2019, &[(6, 5)]),
    (2020, &[(5, 24)]),
    (2021, &[(5, 13)]),
    (2022, &[(5, 2)]),
    (2023, &[(4, 21)]),
    (2024, &[(4, 10)]),
    (2025, &[(3, 30)]),
];

const EID_AL_ADHA_DATES: FeastTable = &[
    (2002, &[(2, 21)]),
    (2003, &[(2, 11)]),
    (2004, &[(2, 1)]),
    (2005, &[(1, 22)]),
    (2006, &[(1, 10), (12, 31)]),
    (2007, &[(12, 20)]),
    (2008, &[(12, 8)]),
    (2009, &[(11, 27)]),
    (2010, &[(11, 16)]),
    (2011, &[(11, 6)]),
    (2012, &[(10, 25)]),
    (2013, &[(10, 15)]),
    (2014, &[(10, 4)]),
    (2015, &[(9, 24)]),
    (2016, &[(9, 12)]),
    (2017, &[(9, 1)]),
    (2018, &[(8, 22)]),
    (2019, &[(8, 12)]),
    (2020, &[(7, 31)]),
    (2021, &[(7, 20)]),
    (2022, &[(7, 9)]),
    (2023, &[(6, 28)]),
    (2024, &[(6, 16)]),
    (2025, &[(6, 6)]),
];

const MAWLID_DATES: FeastTable = &[
    (2013, &[(1, 24)]),
    (2014, &[(1, 14)]),
    (2015, &[(1, 3), (12, 24)]),
    (2016, &[(12, 12)]),
    (2017, &[(12, 1)]),
    (2018, &[(11, 21)]),
    (2019, &[(11, 10)]),
    (2020, &[(10, 29)]),
    (2021, &[(10, 19)]),
    (2022, &[(10, 9)]),
    (2023, &[(9, 28)]),
    (2024, &[(9, 15)]),
    (2025, &[(9, 4)]),
];

fn lookup(table: FeastTable, year: i32) -> Option<&'static [(u8, u8)]> {
    table
        .binary_search_by_key(&year, |row| row.0)
        .ok()
        .map(|idx| table[idx].1)
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Hijri feast resolver with optional confirmed per-entity overlays.
#[derive(Debug, Clone, Copy, Default)]
pub struct IslamicCalendar {
    eid_al_fitr: Option<FeastTable>,
    eid_al_adha: Option<FeastTable>,
    mawlid: Option<FeastTable>,
}

impl IslamicCalendar {
    /// Calendar backed purely by the default estimated tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay a confirmed Eid al-Fitr table.
    pub fn with_eid_al_fitr(mut self, table: FeastTable) -> Self {
        self.eid_al_fitr = Some(table);
        self
    }

    /// Overlay a confirmed Eid al-Adha table.
    pub fn with_eid_al_adha(mut self, table: FeastTable) -> Self {
        self.eid_al_adha = Some(table);
        self
    }

    /// Overlay a confirmed Mawlid table.
    pub fn with_mawlid(mut self, table: FeastTable) -> Self {
        self.mawlid = Some(table);
        self
    }

    /// Resolve the occurrences of `feast` in a Gregorian year.
    ///
    /// Years absent from every table yield an empty list, never an
    /// error.  Confirmed overlay entries win over the default estimates
    /// for the years they cover.
    pub fn feast_dates(&self, feast: IslamicFeast, year: i32) -> Result<Vec<FeastDate>> {
        let (custom, default) = match feast {
            IslamicFeast::EidAlFitr => (self.eid_al_fitr, EID_AL_FITR_DATES),
            IslamicFeast::EidAlAdha => (self.eid_al_adha, EID_AL_ADHA_DATES),
            IslamicFeast::Mawlid => (self.mawlid, MAWLID_DATES),
        };

        let (days, estimated) = match custom.and_then(|table| lookup(table, year)) {
            Some(days) => (days, false),
            None => match lookup(default, year) {
                Some(days) => (days, true),
                None => return Ok(Vec::new()),
            },
        };

        days.iter()
            .map(|&(m, d)| {
                Ok(FeastDate {
                    date: Date::from_ymd(year, m, d)?,
                    estimated,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_single_occurrence() {
        let cal = IslamicCalendar::new();
        let dates = cal.feast_dates(IslamicFeast::EidAlFitr, 2022).unwrap();
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].date, date(2022, 5, 2));
        assert!(dates[0].estimated);
    }

    #[test]
    fn test_double_occurrence() {
        // 2006 had two Eid al-Adha celebrations.
        let cal = IslamicCalendar::new();
        let dates = cal.feast_dates(IslamicFeast::EidAlAdha, 2006).unwrap();
        assert_eq!(
            dates.iter().map(|fd| fd.date).collect::<Vec<_>>(),
            vec![date(2006, 1, 10), date(2006, 12, 31)]
        );
    }

    #[test]
    fn test_out_of_table_year() {
        let cal = IslamicCalendar::new();
        assert!(cal.feast_dates(IslamicFeast::EidAlFitr, 1995).unwrap().is_empty());
        assert!(cal.feast_dates(IslamicFeast::Mawlid, 2100).unwrap().is_empty());
    }

    #[test]
    fn test_confirmed_overlay() {
        const CONFIRMED: FeastTable = &[(2022, &[(5, 3)])];
        let cal = IslamicCalendar::new().with_eid_al_fitr(CONFIRMED);

        let dates = cal.feast_dates(IslamicFeast::EidAlFitr, 2022).unwrap();
        assert_eq!(dates[0].date, date(2022, 5, 3));
        assert!(!dates[0].estimated);

        // Years outside the overlay fall back to the estimates.
        let dates = cal.feast_dates(IslamicFeast::EidAlFitr, 2021).unwrap();
        assert_eq!(dates[0].date, date(2021, 5, 13));
        assert!(dates[0].estimated);
    }

    #[test]
    fn test_tables_sorted_by_year() {
        for table in [EID_AL_FITR_DATES, EID_AL_ADHA_DATES, MAWLID_DATES] {
            assert!(table.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
