//! Ethiopia.
//!
//! The Ethiopian calendar runs about eight years behind the Gregorian
//! one and inserts its leap day in September, so the fixed national
//! holidays slide one Gregorian day in the year before an Ethiopian
//! leap year.

use hol_calendars::is_ethiopian_leap_year;
use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::{ChristianCalendar, InternationalHolidays, IslamicHolidays};
use hol_engine::{HolidayEntity, Registrar};
use hol_time::Month;

/// Federal Democratic Republic of Ethiopia.
pub struct Ethiopia;

impl HolidayEntity for Ethiopia {
    fn code(&self) -> &'static str {
        "ET"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ETH"]
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();
        let international = InternationalHolidays;
        let christian = ChristianCalendar::orthodox();
        let islamic = IslamicHolidays::default();

        christian.add_christmas_day(ctx, "Ethiopian Christmas Day")?;

        // The Ethiopian year that began the previous September decides
        // whether January feasts slide a day.
        let jan_shift = u8::from(is_ethiopian_leap_year(year - 1));
        ctx.add("Ethiopian Epiphany", Month::January, 19 + jan_shift)?;

        if year >= 1897 {
            ctx.add("Adwa Victory Day", Month::March, 2)?;
        }

        christian.add_good_friday(ctx, "Ethiopian Good Friday")?;
        christian.add_easter_sunday(ctx, "Ethiopian Easter Sunday")?;

        international.add_labour_day(ctx, "International Labor Day")?;

        if year >= 1942 {
            ctx.add("Patriots' Victory Day", Month::May, 5)?;
        }
        if year >= 1992 {
            ctx.add("Downfall of Dergue Regime Day", Month::May, 28)?;
        }

        let sep_shift = u8::from(is_ethiopian_leap_year(year));
        ctx.add("Ethiopian New Year", Month::September, 11 + sep_shift)?;
        ctx.add("Finding of True Cross", Month::September, 27 + sep_shift)?;

        islamic.add_eid_al_fitr(ctx, "Eid al-Fitr")?;
        islamic.add_eid_al_adha(ctx, "Eid al-Adha")?;
        islamic.add_mawlid(ctx, "Prophet's Birthday")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_engine::Holidays;
    use hol_time::Date;
    use std::sync::Arc;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holidays_for(years: &[i32]) -> Holidays {
        Holidays::builder(Arc::new(Ethiopia))
            .years(years)
            .build()
            .unwrap()
    }

    #[test]
    fn test_2023_leap_shift() {
        // 2023 % 4 == 3: September feasts slide one day.
        let et = holidays_for(&[2023]);
        assert_eq!(
            et.get(date(2023, 9, 12)).unwrap(),
            Some("Ethiopian New Year".into())
        );
        assert_eq!(
            et.get(date(2023, 9, 28)).unwrap(),
            Some("Finding of True Cross".into())
        );
        // January feasts shift when the previous year was leap.
        assert!(et.contains(date(2023, 1, 19)).unwrap());
    }

    #[test]
    fn test_2024_january_shift() {
        let et = holidays_for(&[2024]);
        assert_eq!(
            et.get(date(2024, 1, 20)).unwrap(),
            Some("Ethiopian Epiphany".into())
        );
        assert!(et.contains(date(2024, 9, 11)).unwrap());
    }

    #[test]
    fn test_orthodox_easter_2024() {
        let et = holidays_for(&[2024]);
        assert_eq!(
            et.get(date(2024, 5, 3)).unwrap(),
            Some("Ethiopian Good Friday".into())
        );
        assert_eq!(
            et.get(date(2024, 5, 5)).unwrap(),
            Some("Ethiopian Easter Sunday".into())
        );
    }

    #[test]
    fn test_christmas_on_january_7() {
        let et = holidays_for(&[2022]);
        assert_eq!(
            et.get(date(2022, 1, 7)).unwrap(),
            Some("Ethiopian Christmas Day".into())
        );
    }

    #[test]
    fn test_islamic_feasts_estimated() {
        let et = holidays_for(&[2024]);
        assert_eq!(
            et.get(date(2024, 4, 10)).unwrap(),
            Some("Eid al-Fitr (estimated)".into())
        );
        assert_eq!(
            et.get(date(2024, 6, 16)).unwrap(),
            Some("Eid al-Adha (estimated)".into())
        );
    }
}
