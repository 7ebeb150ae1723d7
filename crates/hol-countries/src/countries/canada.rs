//! Canada.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::ChristianCalendar;
use hol_engine::observed::{SAT_SUN_TO_NEXT_MON, SUN_TO_NEXT_MON};
use hol_engine::{Catalog, HolidayEntity, ObservedRule, Registrar, Shift};
use hol_time::{nth_weekday_from, nth_weekday_of_month, Date, Month, Weekday};

// Boxing Day follows Christmas: a Sunday anchor jumps to Tuesday since
// Monday is taken by the observed Christmas Day.
const SUN_TO_NEXT_TUE: ObservedRule =
    ObservedRule::new().with(Weekday::Sunday, Shift::Days(2));

const FR: Catalog = &[
    ("New Year's Day", "Jour de l'An"),
    ("Good Friday", "Vendredi saint"),
    ("Canada Day", "Fête du Canada"),
    ("Dominion Day", "Fête du Dominion"),
    ("Labour Day", "Fête du Travail"),
    ("Christmas Day", "Noël"),
    ("Boxing Day", "Lendemain de Noël"),
    ("Family Day", "Fête de la famille"),
    ("Victoria Day", "Fête de la Reine"),
    ("Thanksgiving Day", "Action de grâce"),
    ("National Patriots' Day", "Journée nationale des patriotes"),
    ("Saint Jean Baptiste Day", "Fête nationale du Québec"),
    ("British Columbia Day", "Fête de la Colombie-Britannique"),
    ("%s (observed)", "%s (observé)"),
];

/// Canada.
pub struct Canada;

impl Canada {
    /// Victoria Day falls on the Monday preceding May 25.
    fn monday_before_may_25(year: i32) -> Result<Date> {
        nth_weekday_from(-1, Weekday::Monday, Date::from_ymd(year, 5, 24)?)
    }
}

impl HolidayEntity for Canada {
    fn code(&self) -> &'static str {
        "CA"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["CAN"]
    }

    fn subdivisions(&self) -> &'static [&'static str] {
        &["BC", "ON", "QC"]
    }

    fn subdivision_aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("British Columbia", "BC"),
            ("Ontario", "ON"),
            ("Quebec", "QC"),
        ]
    }

    fn default_subdivision(&self) -> Option<&'static str> {
        Some("ON")
    }

    fn start_year(&self) -> i32 {
        1867
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        &["en_US", "fr"]
    }

    fn catalog(&self, language: &str) -> Option<Catalog> {
        (language == "fr").then_some(FR)
    }

    fn observed_rule(&self) -> ObservedRule {
        SAT_SUN_TO_NEXT_MON
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();

        ctx.add_observed("New Year's Day", Month::January, 1)?;

        ChristianCalendar::western().add_good_friday(ctx, "Good Friday")?;

        if year >= 1879 {
            let name = if year >= 1983 {
                "Canada Day"
            } else {
                "Dominion Day"
            };
            ctx.add_observed(name, Month::July, 1)?;
        }

        if year >= 1894 {
            if let Some(date) =
                nth_weekday_of_month(1, Weekday::Monday, Month::September, year)?
            {
                ctx.add_date("Labour Day", date)?;
            }
        }

        ctx.add_observed("Christmas Day", Month::December, 25)?;
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
            "BC" => {
                if year >= 2013 {
                    let nth = if year >= 2019 { 3 } else { 2 };
                    if let Some(date) =
                        nth_weekday_of_month(nth, Weekday::Monday, Month::February, year)?
                    {
                        ctx.add_date("Family Day", date)?;
                    }
                }
                if year >= 1974 {
                    if let Some(date) =
                        nth_weekday_of_month(1, Weekday::Monday, Month::August, year)?
                    {
                        ctx.add_date("British Columbia Day", date)?;
                    }
                }
            }
            "ON" => {
                if year >= 2008 {
                    if let Some(date) =
                        nth_weekday_of_month(3, Weekday::Monday, Month::February, year)?
                    {
                        ctx.add_date("Family Day", date)?;
                    }
                }
                if year >= 1953 {
                    ctx.add_date("Victoria Day", Self::monday_before_may_25(year)?)?;
                }
                if year >= 1931 {
                    let date = if year == 1935 {
                        // Explicitly moved for the federal election.
                        Date::from_ymd(1935, 10, 24)?
                    } else {
                        nth_weekday_of_month(2, Weekday::Monday, Month::October, year)?
                            .ok_or_else(|| {
                                hol_core::errors::Error::Runtime(
                                    "second Monday of October must exist".into(),
                                )
                            })?
                    };
                    ctx.add_date("Thanksgiving Day", date)?;
                }
                let boxing = Date::from_ymd(year, 12, 26)?;
                ctx.add_date("Boxing Day", boxing)?;
                ctx.apply_observed("Boxing Day", boxing, SUN_TO_NEXT_TUE, false)?;
            }
            "QC" => {
                if year >= 2003 {
                    ctx.add_date("National Patriots' Day", Self::monday_before_may_25(year)?)?;
                }
                if year >= 1925 {
                    let date = Date::from_ymd(year, 6, 24)?;
                    ctx.add_date("Saint Jean Baptiste Day", date)?;
                    ctx.apply_observed("Saint Jean Baptiste Day", date, SUN_TO_NEXT_MON, false)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
