//! Islamic lunar feasts.

use hol_calendars::{IslamicCalendar, IslamicFeast};
use hol_core::errors::Result;
use hol_time::Date;

use crate::entity::Registrar;
use crate::observed::ObservedRule;

/// Islamic feast helpers backed by a Hijri table set.
///
/// Feast dates from the default tables are registered with the entity's
/// estimated label; confirmed overlay tables register plain names.
#[derive(Debug, Clone, Copy, Default)]
pub struct IslamicHolidays {
    calendar: IslamicCalendar,
}

impl IslamicHolidays {
    /// Helpers over a specific (possibly overlaid) Hijri calendar.
    pub fn new(calendar: IslamicCalendar) -> Self {
        IslamicHolidays { calendar }
    }

    /// Register every occurrence of a feast in the populate year,
    /// shifted by `days` from the feast date.
    pub fn add_feast_day(
        &self,
        ctx: &mut Registrar<'_>,
        feast: IslamicFeast,
        name: &str,
        days: i32,
    ) -> Result<Vec<Date>> {
        let mut added = Vec::new();
        for occurrence in self.calendar.feast_dates(feast, ctx.year())? {
            let date = occurrence.date.add_days(days)?;
            ctx.add_estimated(name, date, occurrence.estimated)?;
            added.push(date);
        }
        Ok(added)
    }

    /// Like [`IslamicHolidays::add_feast_day`], applying an observance
    /// rule to each occurrence.
    pub fn add_feast_day_observed(
        &self,
        ctx: &mut Registrar<'_>,
        feast: IslamicFeast,
        name: &str,
        days: i32,
        rule: ObservedRule,
    ) -> Result<Vec<Date>> {
        let mut added = Vec::new();
        for occurrence in self.calendar.feast_dates(feast, ctx.year())? {
            let date = occurrence.date.add_days(days)?;
            ctx.add_observed_estimated(name, date, rule, occurrence.estimated)?;
            added.push(date);
        }
        Ok(added)
    }

    /// Eid al-Fitr.
    pub fn add_eid_al_fitr(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Vec<Date>> {
        self.add_feast_day(ctx, IslamicFeast::EidAlFitr, name, 0)
    }

    /// Second day of Eid al-Fitr.
    pub fn add_eid_al_fitr_day_two(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
    ) -> Result<Vec<Date>> {
        self.add_feast_day(ctx, IslamicFeast::EidAlFitr, name, 1)
    }

    /// Eid al-Adha.
    pub fn add_eid_al_adha(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Vec<Date>> {
        self.add_feast_day(ctx, IslamicFeast::EidAlAdha, name, 0)
    }

    /// Second day of Eid al-Adha.
    pub fn add_eid_al_adha_day_two(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
    ) -> Result<Vec<Date>> {
        self.add_feast_day(ctx, IslamicFeast::EidAlAdha, name, 1)
    }

    /// Third day of Eid al-Adha.
    pub fn add_eid_al_adha_day_three(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
    ) -> Result<Vec<Date>> {
        self.add_feast_day(ctx, IslamicFeast::EidAlAdha, name, 2)
    }

    /// Mawlid, the Prophet's birthday.
    pub fn add_mawlid(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Vec<Date>> {
        self.add_feast_day(ctx, IslamicFeast::Mawlid, name, 0)
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
    fn test_two_day_feast() {
        let entries = with_ctx(2022, |ctx| {
            let islamic = IslamicHolidays::default();
            islamic.add_eid_al_fitr(ctx, "Orozo Ait").unwrap();
            islamic.add_eid_al_fitr_day_two(ctx, "Orozo Ait").unwrap();
        });
        assert_eq!(entries.get(&date(2022, 5, 2)).unwrap(), "Orozo Ait (estimated)");
        assert_eq!(entries.get(&date(2022, 5, 3)).unwrap(), "Orozo Ait (estimated)");
    }

    #[test]
    fn test_double_gregorian_occurrence() {
        let entries = with_ctx(2006, |ctx| {
            IslamicHolidays::default()
                .add_eid_al_adha(ctx, "Kurman Ait")
                .unwrap();
        });
        assert!(entries.contains_key(&date(2006, 1, 10)));
        assert!(entries.contains_key(&date(2006, 12, 31)));
    }

    #[test]
    fn test_out_of_table_year_registers_nothing() {
        let entries = with_ctx(1995, |ctx| {
            IslamicHolidays::default()
                .add_eid_al_fitr(ctx, "Eid al-Fitr")
                .unwrap();
        });
        assert!(entries.is_empty());
    }
}
