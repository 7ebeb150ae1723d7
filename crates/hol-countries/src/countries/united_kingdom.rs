//! United Kingdom.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::ChristianCalendar;
use hol_engine::observed::{SAT_SUN_TO_NEXT_MON, SAT_SUN_TO_NEXT_MON_TUE};
use hol_engine::{
    HolidayEntity, ObservedRule, Registrar, Shift, SpecialDay, StaticHolidays,
};
use hol_time::{nth_weekday_of_month, Month, Weekday};

// Scotland's January 2 holiday trails the observed New Year's Day.
const NEW_YEAR_HOLIDAY_RULE: ObservedRule = ObservedRule::new()
    .with(Weekday::Saturday, Shift::Days(2))
    .with(Weekday::Sunday, Shift::Days(2))
    .with(Weekday::Monday, Shift::Days(1));

const SPECIAL: &[SpecialDay] = &[
    SpecialDay { year: 1977, month: 6, day: 7, name: "Silver Jubilee of Elizabeth II", category: Category::Public },
    SpecialDay { year: 1981, month: 7, day: 29, name: "Wedding of Charles and Diana", category: Category::Public },
    SpecialDay { year: 1999, month: 12, day: 31, name: "Millennium Celebrations", category: Category::Public },
    SpecialDay { year: 2002, month: 6, day: 3, name: "Golden Jubilee of Elizabeth II", category: Category::Public },
    SpecialDay { year: 2011, month: 4, day: 29, name: "Wedding of William and Catherine", category: Category::Public },
    SpecialDay { year: 2012, month: 6, day: 5, name: "Diamond Jubilee of Elizabeth II", category: Category::Public },
    SpecialDay { year: 2022, month: 6, day: 3, name: "Platinum Jubilee of Elizabeth II", category: Category::Public },
    SpecialDay { year: 2022, month: 9, day: 19, name: "State Funeral of Queen Elizabeth II", category: Category::Public },
    SpecialDay { year: 2023, month: 5, day: 8, name: "Coronation of Charles III", category: Category::Public },
];

const STATIC: StaticHolidays = StaticHolidays {
    special: SPECIAL,
    substituted: &[],
};

/// United Kingdom of Great Britain and Northern Ireland.
pub struct UnitedKingdom;

impl UnitedKingdom {
    fn add_late_summer(ctx: &mut Registrar<'_>) -> Result<()> {
        if ctx.year() >= 1971 {
            if let Some(date) =
                nth_weekday_of_month(-1, Weekday::Monday, Month::August, ctx.year())?
            {
                ctx.add_date("Late Summer Bank Holiday", date)?;
            }
        }
        Ok(())
    }

    fn add_easter_monday(ctx: &mut Registrar<'_>) -> Result<()> {
        ChristianCalendar::western().add_easter_monday(ctx, "Easter Monday")?;
        Ok(())
    }
}

impl HolidayEntity for UnitedKingdom {
    fn code(&self) -> &'static str {
        "GB"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["GBR", "UK"]
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        &["ENG", "NIR", "SCT", "WLS"]
    }

    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("England", "ENG"),
            ("Northern Ireland", "NIR"),
            ("Scotland", "SCT"),
            ("Wales", "WLS"),
        ]
    }

    fn start_year(&self) -> i32 {
        1872
    }

    fn observed_rule(&self) -> ObservedRule {
        SAT_SUN_TO_NEXT_MON
    }

    fn observed_since(&self) -> Option<i32> {
        Some(1875)
    }

    fn static_holidays(&self) -> Option<&'static StaticHolidays> {
        Some(&STATIC)
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();

        if year >= 1975 {
            ctx.add_observed("New Year's Day", Month::January, 1)?;
        }

        ChristianCalendar::western().add_good_friday(ctx, "Good Friday")?;

        if year >= 1978 {
            // Moved to May 8 for the VE Day anniversaries.
            if year == 1995 || year == 2020 {
                ctx.add("May Day", Month::May, 8)?;
            } else if let Some(date) =
                nth_weekday_of_month(1, Weekday::Monday, Month::May, year)?
            {
                ctx.add_date("May Day", date)?;
            }
        }

        if year >= 1971 {
            let name = "Spring Bank Holiday";
            match year {
                2002 | 2012 => {
                    ctx.add(name, Month::June, 4)?;
                }
                2022 => {
                    ctx.add(name, Month::June, 2)?;
                }
                _ => {
                    if let Some(date) =
                        nth_weekday_of_month(-1, Weekday::Monday, Month::May, year)?
                    {
                        ctx.add_date(name, date)?;
                    }
                }
            }
        }

        let christmas = ctx.add("Christmas Day", Month::December, 25)?;
        ctx.apply_observed("Christmas Day", christmas, SAT_SUN_TO_NEXT_MON_TUE, false)?;
        let boxing = ctx.add("Boxing Day", Month::December, 26)?;
        ctx.apply_observed("Boxing Day", boxing, SAT_SUN_TO_NEXT_MON_TUE, false)?;
        Ok(())
    }

    fn populate_subdivision(
        &self,
        ctx: &mut Registrar<'_>,
        subdiv: &str,
        category: Category,
    ) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();
        match subdiv {
            "ENG" | "WLS" => {
                Self::add_easter_monday(ctx)?;
                Self::add_late_summer(ctx)?;
            }
            "SCT" => {
                let date = ctx.add("New Year Holiday", Month::January, 2)?;
                ctx.apply_observed("New Year Holiday", date, NEW_YEAR_HOLIDAY_RULE, false)?;
                if let Some(date) =
                    nth_weekday_of_month(1, Weekday::Monday, Month::August, year)?
                {
                    ctx.add_date("Summer Bank Holiday", date)?;
                }
                if year >= 2006 {
                    ctx.add_observed("St. Andrew's Day", Month::November, 30)?;
                }
            }
            "NIR" => {
                if year >= 1903 {
                    ctx.add_observed("St. Patrick's Day", Month::March, 17)?;
                }
                Self::add_easter_monday(ctx)?;
                ctx.add_observed("Battle of the Boyne", Month::July, 12)?;
                Self::add_late_summer(ctx)?;
            }
            _ => {}
        }
        Ok(())
    }
}
