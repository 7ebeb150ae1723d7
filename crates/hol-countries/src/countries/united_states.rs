//! United States of America.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::ChristianCalendar;
use hol_engine::observed::{SAT_TO_PREV_FRI, SAT_TO_PREV_FRI_SUN_TO_NEXT_MON, SUN_TO_NEXT_MON};
use hol_engine::{HolidayEntity, ObservedRule, Registrar};
use hol_time::{nth_weekday_of_month, Date, Month, Weekday};

/// United States of America.
pub struct UnitedStates;

impl UnitedStates {
    fn populate_public(&self, ctx: &mut Registrar<'_>) -> Result<()> {
        let year = ctx.year();

        let name = "New Year's Day";
        ctx.add_observed(name, Month::January, 1)?;
        // A Saturday January 1 of the next year is observed on this
        // year's December 31.  The final supported year has no successor.
        if let Ok(next_new_year) = Date::from_ymd(year + 1, 1, 1) {
            ctx.apply_observed(name, next_new_year, SAT_TO_PREV_FRI, false)?;
        }

        if year >= 1986 {
            if let Some(date) =
                nth_weekday_of_month(3, Weekday::Monday, Month::January, year)?
            {
                ctx.add_date("Martin Luther King Jr. Day", date)?;
            }
        }

        if year >= 1879 {
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
        }

        if year >= 1888 {
            let name = "Memorial Day";
            if year >= 1971 {
                if let Some(date) =
                    nth_weekday_of_month(-1, Weekday::Monday, Month::May, year)?
                {
                    ctx.add_date(name, date)?;
                }
            } else {
                ctx.add_observed(name, Month::May, 30)?;
            }
        }

        if year >= 2021 {
            ctx.add_observed("Juneteenth National Independence Day", Month::June, 19)?;
        }

        ctx.add_observed("Independence Day", Month::July, 4)?;

        if year >= 1894 {
            if let Some(date) =
                nth_weekday_of_month(1, Weekday::Monday, Month::September, year)?
            {
                ctx.add_date("Labor Day", date)?;
            }
        }

        if year >= 1937 {
            let name = "Columbus Day";
            if year >= 1971 {
                if let Some(date) =
                    nth_weekday_of_month(2, Weekday::Monday, Month::October, year)?
                {
                    ctx.add_date(name, date)?;
                }
            } else {
                ctx.add_observed(name, Month::October, 12)?;
            }
        }

        if year >= 1938 {
            let name = if year >= 1954 {
                "Veterans Day"
            } else {
                "Armistice Day"
            };
            if (1971..=1977).contains(&year) {
                if let Some(date) =
                    nth_weekday_of_month(4, Weekday::Monday, Month::October, year)?
                {
                    ctx.add_date(name, date)?;
                }
            } else {
                ctx.add_observed(name, Month::November, 11)?;
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

    fn add_day_after_thanksgiving(ctx: &mut Registrar<'_>, name: &str) -> Result<()> {
        if let Some(thanksgiving) =
            nth_weekday_of_month(4, Weekday::Thursday, Month::November, ctx.year())?
        {
            ctx.add_date(name, thanksgiving.add_days(1)?)?;
        }
        Ok(())
    }

    fn populate_unofficial(&self, ctx: &mut Registrar<'_>) -> Result<()> {
        if ctx.year() >= 1847 {
            ctx.add("Valentine's Day", Month::February, 14)?;
        }
        ctx.add("St. Patrick's Day", Month::March, 17)?;
        ctx.add("Halloween", Month::October, 31)?;
        Ok(())
    }
}

impl HolidayEntity for UnitedStates {
    fn code(&self) -> &'static str {
        "US"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["USA"]
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        &["CA", "NY", "TX"]
    }

    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("California", "CA"),
            ("New York", "NY"),
            ("Texas", "TX"),
        ]
    }

    fn start_year(&self) -> i32 {
        1871
    }

    fn supported_categories(&self) -> &'static [Category] {
        &[Category::Public, Category::Unofficial]
    }

    fn observed_rule(&self) -> ObservedRule {
        SAT_TO_PREV_FRI_SUN_TO_NEXT_MON
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        match category {
            Category::Public => self.populate_public(ctx),
            Category::Unofficial => self.populate_unofficial(ctx),
            _ => Ok(()),
        }
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
            "CA" => {
                if (1971..=2009).contains(&year) {
                    ctx.add_observed("Lincoln's Birthday", Month::February, 12)?;
                }
                if year >= 2014 {
                    ctx.add("Susan B. Anthony Day", Month::February, 15)?;
                }
                if year >= 1995 {
                    let date = ctx.add("Cesar Chavez Day", Month::March, 31)?;
                    ctx.apply_observed("Cesar Chavez Day", date, SUN_TO_NEXT_MON, false)?;
                }
                if year >= 1975 {
                    Self::add_day_after_thanksgiving(ctx, "Day After Thanksgiving")?;
                }
            }
            "NY" => {
                if year >= 1971 {
                    ctx.add_observed("Lincoln's Birthday", Month::February, 12)?;
                }
                if year >= 2004 {
                    ctx.add("Susan B. Anthony Day", Month::February, 15)?;
                }
                // The Tuesday after the first Monday of November.
                if year >= 2015 || (year >= 2008 && year % 2 == 0) {
                    if let Some(monday) =
                        nth_weekday_of_month(1, Weekday::Monday, Month::November, year)?
                    {
                        ctx.add_date("Election Day", monday.add_days(1)?)?;
                    }
                }
            }
            "TX" => {
                if year >= 1931 {
                    ctx.add("Confederate Memorial Day", Month::January, 19)?;
                }
                if year >= 1874 {
                    ctx.add("Texas Independence Day", Month::March, 2)?;
                }
                if year >= 2000 {
                    ctx.add("Cesar Chavez Day", Month::March, 31)?;
                }
                ChristianCalendar::western().add_good_friday(ctx, "Good Friday")?;
                if year >= 1875 {
                    ctx.add("San Jacinto Day", Month::April, 21)?;
                }
                if year >= 1980 {
                    ctx.add("Emancipation Day In Texas", Month::June, 19)?;
                }
                if year >= 1973 {
                    ctx.add("Lyndon Baines Johnson Day", Month::August, 27)?;
                }
                if year >= 1975 {
                    Self::add_day_after_thanksgiving(ctx, "Friday After Thanksgiving")?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
