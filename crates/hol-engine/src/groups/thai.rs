//! Thai Buddhist lunar feasts.

use hol_calendars::{CalendarStyle, ThaiLunisolar};
use hol_core::errors::Result;
use hol_time::Date;

use crate::entity::Registrar;

/// Thai Buddhist feast helpers.
///
/// Every helper silently registers nothing for years outside the
/// lunisolar calendar's 1941..=2057 span.
#[derive(Debug, Clone, Copy)]
pub struct ThaiBuddhistHolidays {
    calendar: ThaiLunisolar,
}

impl ThaiBuddhistHolidays {
    /// Thai-style calendar (extra-month years delay every feast).
    pub fn thai() -> Self {
        ThaiBuddhistHolidays {
            calendar: ThaiLunisolar::new(CalendarStyle::Thai),
        }
    }

    /// Khmer-style calendar.
    pub fn khmer() -> Self {
        ThaiBuddhistHolidays {
            calendar: ThaiLunisolar::new(CalendarStyle::Khmer),
        }
    }

    /// The underlying lunisolar calendar.
    pub fn calendar(&self) -> &ThaiLunisolar {
        &self.calendar
    }

    fn add(
        ctx: &mut Registrar<'_>,
        name: &str,
        date: Option<Date>,
    ) -> Result<Option<Date>> {
        match date {
            Some(date) => Ok(Some(ctx.add_date(name, date)?)),
            None => Ok(None),
        }
    }

    /// Makha Bucha / Meak Bochea.
    pub fn add_makha_bucha(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.makha_bucha(ctx.year()))
    }

    /// Visakha Bucha / Visaka Bochea.
    pub fn add_visakha_bucha(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.visakha_bucha(ctx.year()))
    }

    /// Atthami Bucha.
    pub fn add_atthami_bucha(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.atthami_bucha(ctx.year()))
    }

    /// Asarnha Bucha.
    pub fn add_asarnha_bucha(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.asarnha_bucha(ctx.year()))
    }

    /// Khao Phansa, the start of Buddhist Lent.
    pub fn add_khao_phansa(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.khao_phansa(ctx.year()))
    }

    /// Ok Phansa, the end of Buddhist Lent.
    pub fn add_ok_phansa(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.ok_phansa(ctx.year()))
    }

    /// Pchum Ben, the Khmer ancestors' festival, optionally shifted to
    /// cover its multi-day span.
    pub fn add_pchum_ben(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
        days: i32,
    ) -> Result<Option<Date>> {
        let date = match self.calendar.pchum_ben(ctx.year()) {
            Some(date) => Some(date.add_days(days)?),
            None => None,
        };
        Self::add(ctx, name, date)
    }

    /// Loy Krathong / Bon Om Touk, optionally shifted for its span.
    pub fn add_loy_krathong(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
        days: i32,
    ) -> Result<Option<Date>> {
        let date = match self.calendar.loy_krathong(ctx.year()) {
            Some(date) => Some(date.add_days(days)?),
            None => None,
        };
        Self::add(ctx, name, date)
    }

    /// Preah Neangkoal, the Khmer Royal Ploughing Ceremony.
    pub fn add_preah_neangkoal(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
    ) -> Result<Option<Date>> {
        Self::add(ctx, name, self.calendar.preah_neangkoal(ctx.year()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{HolidayEntity, Registrar};
    use hol_core::Category;
    use std::collections::{BTreeMap, BTreeSet};

    struct Stub;
    impl HolidayEntity for Stub {
        fn code(&self) -> &'static str {
            "ZZ"
        }
        fn populate(&self, _: &mut Registrar<'_>, _: Category) -> Result<()> {
            Ok(())
        }
    }

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn with_ctx<F: FnOnce(&mut Registrar<'_>)>(year: i32, f: F) -> BTreeMap<Date, String> {
        let mut entries = BTreeMap::new();
        let mut workdays = BTreeSet::new();
        let mut ctx = Registrar::new(year, true, None, &Stub, &mut entries, &mut workdays);
        f(&mut ctx);
        entries
    }

    #[test]
    fn test_visakha_bucha() {
        let entries = with_ctx(2010, |ctx| {
            ThaiBuddhistHolidays::thai()
                .add_visakha_bucha(ctx, "Visakha Bucha")
                .unwrap();
        });
        assert_eq!(entries.get(&date(2010, 5, 28)).unwrap(), "Visakha Bucha");
    }

    #[test]
    fn test_out_of_range_registers_nothing() {
        let entries = with_ctx(2060, |ctx| {
            let buddhist = ThaiBuddhistHolidays::thai();
            assert_eq!(buddhist.add_makha_bucha(ctx, "Makha Bucha").unwrap(), None);
        });
        assert!(entries.is_empty());
    }
}
