//! Kyrgyzstan.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::{ChristianCalendar, InternationalHolidays, IslamicHolidays};
use hol_engine::{Catalog, HolidayEntity, Registrar};
use hol_time::Month;

const RU: Catalog = &[
    ("New Year's Day", "Новый год"),
    ("Christmas Day", "Рождество Христово"),
    ("Fatherland Defender's Day", "День защитника Отечества"),
    ("International Women's Day", "Международный женский день"),
    ("Nooruz Mairamy", "Праздник Нооруз"),
    (
        "Day of the People's April Revolution",
        "День народной Апрельской революции",
    ),
    ("International Workers' Day", "Праздник труда"),
    ("Constitution Day", "День Конституции"),
    ("Victory Day", "День Победы"),
    ("Independence Day", "День независимости"),
    (
        "Days of History and Commemoration of Ancestors",
        "Дни истории и памяти предков",
    ),
    ("Orozo Ait", "Орозо айт"),
    ("Kurman Ait", "Курман айт"),
    ("%s (estimated)", "%s (примерная дата)"),
];

/// Kyrgyz Republic.
pub struct Kyrgyzstan;

impl HolidayEntity for Kyrgyzstan {
    fn code(&self) -> &'static str {
        "KG"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["KGZ"]
    }

    fn start_year(&self) -> i32 {
        1991
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        &["en_US", "ru"]
    }

    fn catalog(&self, language: &str) -> Option<Catalog> {
        (language == "ru").then_some(RU)
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let international = InternationalHolidays;
        let christian = ChristianCalendar::orthodox();
        let islamic = IslamicHolidays::default();

        international.add_new_years_day(ctx, "New Year's Day")?;
        christian.add_christmas_day(ctx, "Christmas Day")?;
        ctx.add("Fatherland Defender's Day", Month::February, 23)?;
        international.add_womens_day(ctx, "International Women's Day")?;
        ctx.add("Nooruz Mairamy", Month::March, 21)?;
        if ctx.year() >= 2016 {
            ctx.add("Day of the People's April Revolution", Month::April, 7)?;
        }
        international.add_labour_day(ctx, "International Workers' Day")?;
        ctx.add("Constitution Day", Month::May, 5)?;
        international.add_world_war_two_victory_day(ctx, "Victory Day")?;
        ctx.add("Independence Day", Month::August, 31)?;
        ctx.add(
            "Days of History and Commemoration of Ancestors",
            Month::November,
            7,
        )?;
        ctx.add(
            "Days of History and Commemoration of Ancestors",
            Month::November,
            8,
        )?;

        islamic.add_eid_al_fitr(ctx, "Orozo Ait")?;
        islamic.add_eid_al_fitr_day_two(ctx, "Orozo Ait")?;
        islamic.add_eid_al_adha(ctx, "Kurman Ait")?;
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
        Holidays::builder(Arc::new(Kyrgyzstan))
            .years(years)
            .build()
            .unwrap()
    }

    #[test]
    fn test_2022() {
        let kg = holidays_for(&[2022]);
        assert_eq!(kg.get(date(2022, 1, 1)).unwrap(), Some("New Year's Day".into()));
        assert_eq!(kg.get(date(2022, 1, 7)).unwrap(), Some("Christmas Day".into()));
        assert_eq!(
            kg.get(date(2022, 5, 2)).unwrap(),
            Some("Orozo Ait (estimated)".into())
        );
        assert_eq!(
            kg.get(date(2022, 5, 3)).unwrap(),
            Some("Orozo Ait (estimated)".into())
        );
        assert!(kg.contains(date(2022, 11, 7)).unwrap());
        assert!(kg.contains(date(2022, 11, 8)).unwrap());
    }

    #[test]
    fn test_april_revolution_from_2016() {
        let kg = holidays_for(&[2015, 2016]);
        assert!(!kg.contains(date(2015, 4, 7)).unwrap());
        assert!(kg.contains(date(2016, 4, 7)).unwrap());
    }

    #[test]
    fn test_russian_catalog() {
        let kg = Holidays::builder(Arc::new(Kyrgyzstan))
            .years(&[2024])
            .language("ru")
            .build()
            .unwrap();
        assert_eq!(kg.get(date(2024, 1, 1)).unwrap(), Some("Новый год".into()));
        assert_eq!(
            kg.get(date(2024, 4, 10)).unwrap(),
            Some("Орозо айт (примерная дата)".into())
        );
    }
}
