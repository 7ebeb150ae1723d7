//! Thailand.
//!
//! Observance ("in lieu") days were only decreed for 1961–1973,
//! 1995–1997, and 2001 onwards, so the shift rules are gated per year
//! rather than by a single cut-over.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::{InternationalHolidays, ThaiBuddhistHolidays};
use hol_engine::observed::{SAT_SUN_TO_NEXT_MON, SAT_SUN_TO_NEXT_MON_TUE};
use hol_engine::{
    Catalog, HolidayEntity, ObservedRule, Registrar, Shift, SpecialDay, StaticHolidays,
};
use hol_time::{nth_weekday_of_month, Date, Month, Weekday};

const SAT_TO_NEXT_MON: ObservedRule =
    ObservedRule::new().with(Weekday::Saturday, Shift::Days(2));

const SAT_SUN_TO_NEXT_TUE: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::Days(3))
    .with(Weekday::Sunday, Shift::Days(2));

// Songkran spans three days, so a weekend overlap yields exactly one
// in-lieu day found by scanning forward from the first day.
const SONGKRAN_IN_LIEU: ObservedRule = ObservedRule::new()
    .with(Weekday::Thursday, Shift::NextWorkday)
    .with(Weekday::Friday, Shift::NextWorkday)
    .with(Weekday::Saturday, Shift::NextWorkday)
    .with(Weekday::Sunday, Shift::NextWorkday);

const TH: Catalog = &[
    ("New Year's Day", "วันขึ้นปีใหม่"),
    ("National Children's Day", "วันเด็กแห่งชาติ"),
    ("Chakri Memorial Day", "วันจักรี"),
    ("Songkran Festival", "วันสงกรานต์"),
    ("National Labour Day", "วันแรงงานแห่งชาติ"),
    ("National Day", "วันชาติ"),
    ("Coronation Day", "วันฉัตรมงคล"),
    ("HM Queen Suthida's Birthday", "วันเฉลิมพระชนมพรรษาพระบรมราชินี"),
    (
        "HM King Maha Vajiralongkorn's Birthday",
        "วันเฉลิมพระชนมพรรษาพระวชิรเกล้าเจ้าอยู่หัว",
    ),
    (
        "HM Queen Sirikit the Queen Mother's Birthday",
        "วันเฉลิมพระชนมพรรษาสมเด็จพระบรมราชชนนีพันปีหลวง",
    ),
    ("HM Queen Sirikit's Birthday", "วันเฉลิมพระชนมพรรษาสมเด็จพระนางเจ้าสิริกิติ์"),
    ("National Mother's Day", "วันแม่แห่งชาติ"),
    ("HM King Bhumibol Adulyadej Memorial Day", "วันนวมินทรมหาราช"),
    ("HM King Chulalongkorn Memorial Day", "วันปิยมหาราช"),
    (
        "HM King Bhumibol Adulyadej's Birthday",
        "วันเฉลิมพระชนมพรรษาพระบาทสมเด็จพระเจ้าอยู่หัวภูมิพลอดุลยเดช",
    ),
    ("National Father's Day", "วันพ่อแห่งชาติ"),
    ("Constitution Day", "วันรัฐธรรมนูญ"),
    ("New Year's Eve", "วันสิ้นปี"),
    ("Makha Bucha", "วันมาฆบูชา"),
    ("Visakha Bucha", "วันวิสาขบูชา"),
    ("Asarnha Bucha", "วันอาสาฬหบูชา"),
    ("Buddhist Lent Day", "วันเข้าพรรษา"),
    ("Teacher's Day", "วันครู"),
    ("Thai Veterans Day", "วันทหารผ่านศึก"),
    ("National Science Day", "วันวิทยาศาสตร์แห่งชาติ"),
    ("Loy Krathong", "วันลอยกระทง"),
    ("%s (in lieu)", "ชดเชย%s"),
];

const SPECIAL: &[SpecialDay] = &[
    SpecialDay { year: 2016, month: 10, day: 14, name: "Day of Mourning for HM King Bhumibol Adulyadej", category: Category::Public },
    SpecialDay { year: 2017, month: 10, day: 26, name: "HM King Bhumibol Adulyadej's Royal Cremation Ceremony", category: Category::Public },
    SpecialDay { year: 2019, month: 5, day: 6, name: "HM King Maha Vajiralongkorn's Coronation Celebrations", category: Category::Public },
    // Songkran 2020 was cancelled for Covid-19 and held later that year.
    SpecialDay { year: 2020, month: 7, day: 27, name: "Songkran Festival", category: Category::Public },
    SpecialDay { year: 2020, month: 9, day: 4, name: "Songkran Festival", category: Category::Public },
    SpecialDay { year: 2020, month: 9, day: 7, name: "Songkran Festival", category: Category::Public },
    SpecialDay { year: 2020, month: 11, day: 19, name: "Bridge Public Holiday", category: Category::Public },
    SpecialDay { year: 2020, month: 11, day: 20, name: "Bridge Public Holiday", category: Category::Public },
    SpecialDay { year: 2022, month: 7, day: 29, name: "Bridge Public Holiday", category: Category::Public },
    SpecialDay { year: 2022, month: 12, day: 30, name: "Bridge Public Holiday", category: Category::Public },
    SpecialDay { year: 2024, month: 4, day: 12, name: "Bridge Public Holiday", category: Category::Public },
    SpecialDay { year: 2024, month: 12, day: 30, name: "Bridge Public Holiday", category: Category::Public },
];

const STATIC: StaticHolidays = StaticHolidays {
    special: SPECIAL,
    substituted: &[],
};

/// Kingdom of Thailand.
pub struct Thailand;

impl Thailand {
    fn in_lieu_active(year: i32) -> bool {
        (1961..=1973).contains(&year) || (1995..=1997).contains(&year) || year >= 2001
    }

    fn add_in_lieu(
        ctx: &mut Registrar<'_>,
        name: &str,
        date: Date,
        rule: ObservedRule,
    ) -> Result<()> {
        if Self::in_lieu_active(ctx.year()) {
            ctx.apply_observed(name, date, rule, false)?;
        }
        Ok(())
    }

    fn add_observed(ctx: &mut Registrar<'_>, name: &str, month: Month, day: u8) -> Result<()> {
        let date = ctx.add(name, month, day)?;
        Self::add_in_lieu(ctx, name, date, SAT_SUN_TO_NEXT_MON)
    }

    fn populate_public(&self, ctx: &mut Registrar<'_>) -> Result<()> {
        let year = ctx.year();
        let international = InternationalHolidays;
        let buddhist = ThaiBuddhistHolidays::thai();

        let new_year = international.add_new_years_day(ctx, "New Year's Day")?;
        Self::add_in_lieu(ctx, "New Year's Day", new_year, SAT_SUN_TO_NEXT_MON)?;

        // First Monday of October until 1963, second Saturday of January
        // since 1965; the 1964 switch came too late for an event.
        if year >= 1955 && year != 1964 {
            let date = if year <= 1963 {
                nth_weekday_of_month(1, Weekday::Monday, Month::October, year)?
            } else {
                nth_weekday_of_month(2, Weekday::Saturday, Month::January, year)?
            };
            if let Some(date) = date {
                ctx.add_date("National Children's Day", date)?;
            }
        }

        Self::add_observed(ctx, "Chakri Memorial Day", Month::April, 6)?;

        // Songkran: Apr 13-15 for 1948-1953 and 1998 onwards, Apr 13 only
        // for 1957-1988, Apr 12-14 for 1989-1997; cancelled in 2020.
        if (1948..=1953).contains(&year) || (year >= 1957 && year != 2020) {
            let name = "Songkran Festival";
            let first = if (1957..=1988).contains(&year) {
                Self::add_observed(ctx, name, Month::April, 13)?;
                None
            } else if (1989..=1997).contains(&year) {
                let first = ctx.add(name, Month::April, 12)?;
                ctx.add(name, Month::April, 13)?;
                ctx.add(name, Month::April, 14)?;
                Some(first)
            } else {
                let first = ctx.add(name, Month::April, 13)?;
                ctx.add(name, Month::April, 14)?;
                ctx.add(name, Month::April, 15)?;
                Some(first)
            };
            if year >= 1995 {
                if let Some(first) = first {
                    Self::add_in_lieu(ctx, name, first, SONGKRAN_IN_LIEU)?;
                }
            }
        }

        if year >= 1974 {
            let date = international.add_labour_day(ctx, "National Labour Day")?;
            Self::add_in_lieu(ctx, "National Labour Day", date, SAT_SUN_TO_NEXT_MON)?;
        }

        // June 24 until Sarit Thanarat moved it onto Rama IX's birthday.
        if year <= 1959 {
            Self::add_observed(ctx, "National Day", Month::June, 24)?;
        } else {
            Self::add_observed(ctx, "National Day", Month::December, 5)?;
        }

        if (1958..=2016).contains(&year) {
            Self::add_observed(ctx, "Coronation Day", Month::May, 5)?;
        } else if year >= 2020 {
            Self::add_observed(ctx, "Coronation Day", Month::May, 4)?;
        }

        if year >= 2019 {
            Self::add_observed(ctx, "HM Queen Suthida's Birthday", Month::June, 3)?;
        }
        if year >= 2017 {
            Self::add_observed(
                ctx,
                "HM King Maha Vajiralongkorn's Birthday",
                Month::July,
                28,
            )?;
        }
        if year >= 1976 {
            let name = if year >= 2017 {
                "HM Queen Sirikit the Queen Mother's Birthday"
            } else {
                "HM Queen Sirikit's Birthday"
            };
            Self::add_observed(ctx, name, Month::August, 12)?;
        }

        if (1950..=1957).contains(&year) {
            Self::add_observed(ctx, "National Mother's Day", Month::April, 15)?;
        } else if year >= 1976 {
            Self::add_observed(ctx, "National Mother's Day", Month::August, 12)?;
        }

        if year >= 2017 {
            Self::add_observed(
                ctx,
                "HM King Bhumibol Adulyadej Memorial Day",
                Month::October,
                13,
            )?;
        }
        Self::add_observed(ctx, "HM King Chulalongkorn Memorial Day", Month::October, 23)?;
        if year >= 1960 {
            Self::add_observed(
                ctx,
                "HM King Bhumibol Adulyadej's Birthday",
                Month::December,
                5,
            )?;
        }
        if year >= 1980 {
            Self::add_observed(ctx, "National Father's Day", Month::December, 5)?;
        }
        Self::add_observed(ctx, "Constitution Day", Month::December, 10)?;

        ctx.add("New Year's Eve", Month::December, 31)?;
        // The in-lieu for the previous New Year's Eve lands in this year.
        // The first supported year has no predecessor.
        if year >= 1995 && year != 2024 {
            if let Ok(eve) = Date::from_ymd(year - 1, 12, 31) {
                Self::add_in_lieu(ctx, "New Year's Eve", eve, SAT_SUN_TO_NEXT_TUE)?;
            }
        }

        if let Some(date) = buddhist.add_makha_bucha(ctx, "Makha Bucha")? {
            Self::add_in_lieu(ctx, "Makha Bucha", date, SAT_SUN_TO_NEXT_MON)?;
        }
        if let Some(date) = buddhist.add_visakha_bucha(ctx, "Visakha Bucha")? {
            Self::add_in_lieu(ctx, "Visakha Bucha", date, SAT_SUN_TO_NEXT_MON)?;
        }
        if let Some(date) = buddhist.add_asarnha_bucha(ctx, "Asarnha Bucha")? {
            Self::add_in_lieu(ctx, "Asarnha Bucha", date, SAT_SUN_TO_NEXT_MON_TUE)?;
        }
        if let Some(date) = buddhist.add_khao_phansa(ctx, "Buddhist Lent Day")? {
            Self::add_in_lieu(ctx, "Buddhist Lent Day", date, SAT_TO_NEXT_MON)?;
        }
        Ok(())
    }

    fn populate_bank(&self, ctx: &mut Registrar<'_>) -> Result<()> {
        // Bank of Thailand records only go back to late 1942.
        if ctx.year() <= 1942 {
            return Ok(());
        }
        if ctx.year() <= 2021 {
            ctx.add(
                "Additional Closing Day for Bank for Agriculture and Agricultural Cooperatives",
                Month::April,
                1,
            )?;
        }
        if ctx.year() <= 2018 {
            ctx.add("Mid-Year Closing Day", Month::July, 1)?;
        }
        Ok(())
    }

    fn populate_school(&self, ctx: &mut Registrar<'_>) -> Result<()> {
        if ctx.year() >= 1957 {
            ctx.add("Teacher's Day", Month::January, 16)?;
        }
        Ok(())
    }

    fn populate_workday(&self, ctx: &mut Registrar<'_>) -> Result<()> {
        if ctx.year() >= 1948 {
            ctx.add("Thai Veterans Day", Month::February, 3)?;
        }
        if ctx.year() >= 1982 {
            ctx.add("National Science Day", Month::August, 18)?;
        }
        ThaiBuddhistHolidays::thai().add_loy_krathong(ctx, "Loy Krathong", 0)?;
        Ok(())
    }
}

impl HolidayEntity for Thailand {
    fn code(&self) -> &'static str {
        "TH"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["THA"]
    }

    fn start_year(&self) -> i32 {
        1941
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public, Category::Bank, Category::School, Category::Workday]
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        &["en_US", "th"]
    }

    fn catalog(&self, language: &str) -> Option<Catalog> {
        (language == "th").then_some(TH)
    }

    fn observed_rule(&self) -> ObservedRule {
        SAT_SUN_TO_NEXT_MON
    }

    fn observed_label(&self) -> &'static str {
        "%s (in lieu)"
    }

    fn static_holidays(&self) -> Option<&'static StaticHolidays> {
        Some(&STATIC)
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        match category {
            Category::Public => self.populate_public(ctx),
            Category::Bank => self.populate_bank(ctx),
            Category::School => self.populate_school(ctx),
            Category::Workday => self.populate_workday(ctx),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_engine::Holidays;
    use std::sync::Arc;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn holidays_for(years: &[i32]) -> Holidays {
        Holidays::builder(Arc::new(Thailand))
            .years(years)
            .build()
            .unwrap()
    }

    #[test]
    fn test_makha_bucha_2010() {
        let th = holidays_for(&[2010]);
        assert_eq!(th.get(date(2010, 2, 28)).unwrap(), Some("Makha Bucha".into()));
        // 2010-02-28 is a Sunday, in-lieu on Monday.
        assert_eq!(
            th.get(date(2010, 3, 1)).unwrap(),
            Some("Makha Bucha (in lieu)".into())
        );
    }

    #[test]
    fn test_songkran_in_lieu_2024() {
        // Apr 13 2024 is a Saturday: festival runs Sat-Mon, in-lieu Tuesday.
        let th = holidays_for(&[2024]);
        for day in 13..=15 {
            assert!(th.contains(date(2024, 4, day)).unwrap());
        }
        assert_eq!(
            th.get(date(2024, 4, 16)).unwrap(),
            Some("Songkran Festival (in lieu)".into())
        );
    }

    #[test]
    fn test_songkran_cancelled_2020() {
        let th = holidays_for(&[2020]);
        assert!(!th.contains(date(2020, 4, 13)).unwrap());
        // Held later that year instead.
        assert_eq!(
            th.get(date(2020, 7, 27)).unwrap(),
            Some("Songkran Festival".into())
        );
    }

    #[test]
    fn test_no_in_lieu_outside_decreed_years() {
        // 1999-01-01 does not get in-lieu treatment (gate inactive), and
        // neither does 1994.
        let th = holidays_for(&[1994]);
        // 1994-12-10 Constitution Day was a Saturday.
        assert!(th.contains(date(1994, 12, 10)).unwrap());
        assert!(!th.contains(date(1994, 12, 12)).unwrap());
    }

    #[test]
    fn test_new_years_eve_in_lieu_crosses_year() {
        // 2022-12-31 was a Saturday; the in-lieu lands on 2023-01-03.
        let th = holidays_for(&[2023]);
        assert_eq!(
            th.get(date(2023, 1, 3)).unwrap(),
            Some("New Year's Eve (in lieu)".into())
        );
    }

    #[test]
    fn test_bank_category() {
        let th = Holidays::builder(Arc::new(Thailand))
            .years(&[2018])
            .categories(&[Category::Bank])
            .build()
            .unwrap();
        assert!(th.contains(date(2018, 4, 1)).unwrap());
        assert!(th.contains(date(2018, 7, 1)).unwrap());
        assert!(!th.contains(date(2018, 1, 1)).unwrap());
    }

    #[test]
    fn test_thai_catalog() {
        let th = Holidays::builder(Arc::new(Thailand))
            .years(&[2024])
            .language("th")
            .build()
            .unwrap();
        assert_eq!(th.get(date(2024, 1, 1)).unwrap(), Some("วันขึ้นปีใหม่".into()));
    }
}
