//! Christian feasts, movable and fixed.

use hol_calendars::{easter_sunday, julian_calendar_drift, EasterMethod};
use hol_core::errors::Result;
use hol_time::{Date, Month};

use crate::entity::Registrar;

/// Christian feast helpers for one liturgical calendar.
#[derive(Debug, Clone, Copy)]
pub struct ChristianCalendar {
    method: EasterMethod,
}

impl ChristianCalendar {
    /// Feasts computed with the given Easter method.
    pub fn new(method: EasterMethod) -> Self {
        ChristianCalendar { method }
    }

    /// Western (Gregorian) liturgical calendar.
    pub fn western() -> Self {
        Self::new(EasterMethod::Western)
    }

    /// Orthodox liturgical calendar.
    pub fn orthodox() -> Self {
        Self::new(EasterMethod::Orthodox)
    }

    /// Easter Sunday of a year under this calendar's method.
    pub fn easter(&self, year: i32) -> Result<Date> {
        easter_sunday(year, self.method)
    }

    fn add_easter_offset(
        &self,
        ctx: &mut Registrar<'_>,
        name: &str,
        days: i32,
    ) -> Result<Date> {
        let date = self.easter(ctx.year())?.add_days(days)?;
        ctx.add_date(name, date)
    }

    // ── Movable feasts ───────────────────────────────────────────────────────

    /// Easter Sunday.
    pub fn add_easter_sunday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, 0)
    }

    /// Easter Monday.
    pub fn add_easter_monday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, 1)
    }

    /// Good Friday.
    pub fn add_good_friday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, -2)
    }

    /// Holy Saturday.
    pub fn add_holy_saturday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, -1)
    }

    /// Palm Sunday.
    pub fn add_palm_sunday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, -7)
    }

    /// Ash Wednesday.
    pub fn add_ash_wednesday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, -46)
    }

    /// Carnival Monday.
    pub fn add_carnival_monday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, -48)
    }

    /// Carnival Tuesday (Shrove Tuesday).
    pub fn add_carnival_tuesday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, -47)
    }

    /// Ascension Day.
    pub fn add_ascension_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, 39)
    }

    /// Whit Sunday (Pentecost).
    pub fn add_whit_sunday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, 49)
    }

    /// Whit Monday.
    pub fn add_whit_monday(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, 50)
    }

    /// Corpus Christi.
    pub fn add_corpus_christi(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        self.add_easter_offset(ctx, name, 60)
    }

    // ── Fixed feasts ─────────────────────────────────────────────────────────

    /// Christmas Day: December 25, or January 7 plus the Julian drift
    /// for calendars that keep the Julian date.
    pub fn add_christmas_day(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        match self.method {
            EasterMethod::Western => ctx.add(name, Month::December, 25),
            EasterMethod::Julian | EasterMethod::Orthodox => {
                // December 25 Julian of the previous year.
                let date = Date::from_ymd(ctx.year(), 1, 7)?
                    .add_days(julian_calendar_drift(ctx.year() - 1))?;
                ctx.add_date(name, date)
            }
        }
    }

    /// Second day of Christmas (Boxing Day in the Western calendar).
    pub fn add_christmas_day_two(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        let first = match self.method {
            EasterMethod::Western => Date::from_ymd(ctx.year(), 12, 25)?,
            EasterMethod::Julian | EasterMethod::Orthodox => {
                Date::from_ymd(ctx.year(), 1, 7)?
                    .add_days(julian_calendar_drift(ctx.year() - 1))?
            }
        };
        ctx.add_date(name, first.add_days(1)?)
    }

    /// Christmas Eve (Western calendar only).
    pub fn add_christmas_eve(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::December, 24)
    }

    /// Epiphany, January 6.
    pub fn add_epiphany(&self, ctx: &mut Registrar<'_>, name: &str) -> Result<Date> {
        ctx.add(name, Month::January, 6)
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
    fn test_western_movable_feasts() {
        // Easter 2024 is March 31.
        let entries = with_ctx(2024, |ctx| {
            let calendar = ChristianCalendar::western();
            calendar.add_good_friday(ctx, "Good Friday").unwrap();
            calendar.add_easter_monday(ctx, "Easter Monday").unwrap();
            calendar.add_whit_monday(ctx, "Whit Monday").unwrap();
        });
        assert_eq!(entries.get(&date(2024, 3, 29)).unwrap(), "Good Friday");
        assert_eq!(entries.get(&date(2024, 4, 1)).unwrap(), "Easter Monday");
        assert_eq!(entries.get(&date(2024, 5, 20)).unwrap(), "Whit Monday");
    }

    #[test]
    fn test_orthodox_christmas() {
        let entries = with_ctx(2022, |ctx| {
            ChristianCalendar::orthodox()
                .add_christmas_day(ctx, "Christmas Day")
                .unwrap();
        });
        assert_eq!(entries.get(&date(2022, 1, 7)).unwrap(), "Christmas Day");
    }

    #[test]
    fn test_orthodox_christmas_drifts_after_2100() {
        let entries = with_ctx(2102, |ctx| {
            ChristianCalendar::orthodox()
                .add_christmas_day(ctx, "Christmas Day")
                .unwrap();
        });
        assert_eq!(entries.get(&date(2102, 1, 8)).unwrap(), "Christmas Day");
    }
}
