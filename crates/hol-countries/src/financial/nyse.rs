//! New York Stock Exchange trading holidays.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::ChristianCalendar;
use hol_engine::observed::{SAT_TO_PREV_FRI_SUN_TO_NEXT_MON, SUN_TO_NEXT_MON};
use hol_engine::{HolidayEntity, ObservedRule, Registrar, SpecialDay, StaticHolidays};
use hol_time::{nth_weekday_of_month, Month, Weekday};

// One-off closings: storms, state funerals, and other market-wide
// suspensions.
const SPECIAL: &[SpecialDay] = &[
    SpecialDay { year: 1963, month: 11, day: 25, name: "Day of Mourning for President John F. Kennedy", category: Category::Public },
    SpecialDay { year: 1968, month: 4, day: 9, name: "Day of Mourning for Martin Luther King Jr.", category: Category::Public },
    SpecialDay { year: 1968, month: 7, day: 5, name: "Day after Independence Day", category: Category::Public },
    SpecialDay { year: 1969, month: 2, day: 10, name: "Heavy snowstorm", category: Category::Public },
    SpecialDay { year: 1969, month: 3, day: 31, name: "Day of Mourning for President Dwight D. Eisenhower", category: Category::Public },
    SpecialDay { year: 1969, month: 7, day: 21, name: "Lunar landing of Apollo 11", category: Category::Public },
    SpecialDay { year: 1972, month: 12, day: 28, name: "Day of Mourning for President Harry S. Truman", category: Category::Public },
    SpecialDay { year: 1973, month: 1, day: 25, name: "Day of Mourning for President Lyndon B. Johnson", category: Category::Public },
    SpecialDay { year: 1977, month: 7, day: 14, name: "New York City blackout", category: Category::Public },
    SpecialDay { year: 1985, month: 9, day: 27, name: "Hurricane Gloria", category: Category::Public },
    SpecialDay { year: 1994, month: 4, day: 27, name: "Day of Mourning for President Richard M. Nixon", category: Category::Public },
    SpecialDay { year: 2001, month: 9, day: 11, name: "Closed following the terrorist attacks of September 11", category: Category::Public },
    SpecialDay { year: 2001, month: 9, day: 12, name: "Closed following the terrorist attacks of September 11", category: Category::Public },
    SpecialDay { year: 2001, month: 9, day: 13, name: "Closed following the terrorist attacks of September 11", category: Category::Public },
    SpecialDay { year: 2001, month: 9, day: 14, name: "Closed following the terrorist attacks of September 11", category: Category::Public },
    SpecialDay { year: 2004, month: 6, day: 11, name: "Day of Mourning for President Ronald W. Reagan", category: Category::Public },
    SpecialDay { year: 2012, month: 10, day: 29, name: "Hurricane Sandy", category: Category::Public },
    SpecialDay { year: 2012, month: 10, day: 30, name: "Hurricane Sandy", category: Category::Public },
];

const STATIC: StaticHolidays = StaticHolidays {
    special: SPECIAL,
    substituted: &[],
};

/// New York Stock Exchange trading calendar.
pub struct NewYorkStockExchange;

impl HolidayEntity for NewYorkStockExchange {
    fn code(&self) -> &'static str {
        "XNYS"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["NYSE"]
    }

    fn start_year(&self) -> i32 {
        1863
    }

    fn observed_rule(&self) -> ObservedRule {
        SAT_TO_PREV_FRI_SUN_TO_NEXT_MON
    }

    fn static_holidays(&self) -> Option<&'static StaticHolidays> {
        Some(&STATIC)
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();

        // A Saturday January 1 is not made up; Sunday moves to Monday.
        let new_year = ctx.add("New Year's Day", Month::January, 1)?;
        ctx.apply_observed("New Year's Day", new_year, SUN_TO_NEXT_MON, false)?;

        if year >= 1998 {
            if let Some(date) =
                nth_weekday_of_month(3, Weekday::Monday, Month::January, year)?
            {
                ctx.add_date("Martin Luther King Jr. Day", date)?;
            }
        }

        let name = "Washington's Birthday";
        if year >= 1971 {
            if let Some(date) =
                nth_weekday_of_month(3, Weekday::Monday, Month::February, year)?
            {
                ctx.add_date(name, date)?;
            }
        } else {
            ctx.add_observed(name, Month::February, 22)?;
        }

        ChristianCalendar::western().add_good_friday(ctx, "Good Friday")?;

        let name = "Memorial Day";
        if year >= 1971 {
            if let Some(date) = nth_weekday_of_month(-1, Weekday::Monday, Month::May, year)? {
                ctx.add_date(name, date)?;
            }
        } else {
            ctx.add_observed(name, Month::May, 30)?;
        }

        if year >= 2022 {
            ctx.add_observed("Juneteenth National Independence Day", Month::June, 19)?;
        }

        ctx.add_observed("Independence Day", Month::July, 4)?;

        if year >= 1887 {
            if let Some(date) =
                nth_weekday_of_month(1, Weekday::Monday, Month::September, year)?
            {
                ctx.add_date("Labor Day", date)?;
            }
        }

        if let Some(date) =
            nth_weekday_of_month(4, Weekday::Thursday, Month::November, year)?
        {
            ctx.add_date("Thanksgiving Day", date)?;
        }

        ctx.add_observed("Christmas Day", Month::December, 25)?;
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
        Holidays::builder(Arc::new(NewYorkStockExchange))
            .years(years)
            .build()
            .unwrap()
    }

    #[test]
    fn test_2024_closings() {
        let nyse = holidays_for(&[2024]);
        assert!(nyse.contains(date(2024, 1, 1)).unwrap());
        assert!(nyse.contains(date(2024, 1, 15)).unwrap());
        assert!(nyse.contains(date(2024, 2, 19)).unwrap());
        assert!(nyse.contains(date(2024, 3, 29)).unwrap());
        assert!(nyse.contains(date(2024, 5, 27)).unwrap());
        assert!(nyse.contains(date(2024, 6, 19)).unwrap());
        assert!(nyse.contains(date(2024, 7, 4)).unwrap());
        assert!(nyse.contains(date(2024, 9, 2)).unwrap());
        assert!(nyse.contains(date(2024, 11, 28)).unwrap());
        assert!(nyse.contains(date(2024, 12, 25)).unwrap());
        // The exchange does not close for Columbus Day or Veterans Day.
        assert!(!nyse.contains(date(2024, 10, 14)).unwrap());
        assert!(!nyse.contains(date(2024, 11, 11)).unwrap());
    }

    #[test]
    fn test_new_year_saturday_not_made_up() {
        // 2022-01-01 was a Saturday: no closing on 2021-12-31.
        let nyse = holidays_for(&[2021, 2022]);
        assert!(!nyse.contains(date(2021, 12, 31)).unwrap());
        assert!(nyse.contains(date(2022, 1, 1)).unwrap());
        // 2023-01-01 Sunday: observed Monday.
        let nyse = holidays_for(&[2023]);
        assert_eq!(
            nyse.get(date(2023, 1, 2)).unwrap(),
            Some("New Year's Day (observed)".into())
        );
    }

    #[test]
    fn test_independence_day_nearest_weekday() {
        // 2020-07-04 Saturday: closed Friday July 3.
        let nyse = holidays_for(&[2020, 2021]);
        assert_eq!(
            nyse.get(date(2020, 7, 3)).unwrap(),
            Some("Independence Day (observed)".into())
        );
        // 2021-07-04 Sunday: closed Monday July 5.
        assert!(nyse.contains(date(2021, 7, 5)).unwrap());
    }

    #[test]
    fn test_historical_closings() {
        let nyse = holidays_for(&[1969, 2001, 2012]);
        assert!(nyse.contains(date(1969, 7, 21)).unwrap());
        for day in 11..=14 {
            assert!(nyse.contains(date(2001, 9, day)).unwrap());
        }
        assert!(nyse.contains(date(2012, 10, 29)).unwrap());
        assert!(nyse.contains(date(2012, 10, 30)).unwrap());
    }

    #[test]
    fn test_juneteenth_from_2022() {
        let nyse = holidays_for(&[2021, 2022]);
        assert!(!nyse.contains(date(2021, 6, 19)).unwrap());
        assert!(nyse.contains(date(2022, 6, 20)).unwrap()); // Sunday anchor, observed Monday
    }
}
