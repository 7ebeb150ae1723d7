//! Cambodia.

use hol_core::errors::Result;
use hol_core::Category;
use hol_engine::groups::{InternationalHolidays, ThaiBuddhistHolidays};
use hol_engine::{Catalog, HolidayEntity, Registrar, SpecialDay, StaticHolidays};
use hol_time::Month;

// Sangkranta starts April 14 in these years (2001-2050 pattern), April
// 13 otherwise.
const SANGKRANTA_APR_14_YEARS: &[i32] = &[
    2017, 2018, 2021, 2022, 2023, 2025, 2026, 2027, 2029, 2030, 2031,
];

const KM: Catalog = &[
    ("International New Year Day", "ទិវាចូលឆ្នាំសាកល"),
    (
        "Day of Victory over the Genocidal Regime",
        "ទិវាជ័យជម្នះលើរបបប្រល័យពូជសាសន៍",
    ),
    ("International Women's Rights Day", "ទិវាអន្តរជាតិនារី"),
    ("Khmer New Year's Day", "ពិធីបុណ្យចូលឆ្នាំថ្មីប្រពៃណីជាតិ"),
    ("International Labor Day", "ទិវាពលកម្មអន្តរជាតិ"),
    ("Constitution Day", "ទិវាប្រកាសរដ្ឋធម្មនុញ្ញ"),
    ("Independence Day", "ពិធីបុណ្យឯករាជ្យជាតិ"),
    ("International Human Rights Day", "ទិវាសិទ្ធិមនុស្សអន្តរជាតិ"),
    ("Meak Bochea Day", "ពិធីបុណ្យមាឃបូជា"),
    ("Visaka Bochea Day", "ពិធីបុណ្យវិសាខបូជា"),
    ("Royal Ploughing Ceremony", "ព្រះរាជពិធីច្រត់ព្រះនង្គ័ល"),
    ("Pchum Ben Day", "ពិធីបុណ្យភ្ផុំបិណ្ឌ"),
    (
        "Water Festival",
        "ព្រះរាជពិធីបុណ្យអុំទូក បណ្តែតប្រទីប និងសំពះព្រះខែអកអំបុក",
    ),
    ("Special Public Holiday", "វិស្សមកាលពិសេស"),
    ("Paris Peace Agreement's Day", "ទិវារំលឹកសន្ធិសញ្ញាសន្តិភាពទីក្រុងប៉ារីស"),
];

const SPECIAL: &[SpecialDay] = &[
    SpecialDay { year: 2016, month: 5, day: 2, name: "Special Public Holiday", category: Category::Public },
    SpecialDay { year: 2016, month: 5, day: 16, name: "Special Public Holiday", category: Category::Public },
    SpecialDay { year: 2018, month: 5, day: 21, name: "Special Public Holiday", category: Category::Public },
    SpecialDay { year: 2019, month: 9, day: 30, name: "Special Public Holiday", category: Category::Public },
    SpecialDay { year: 2020, month: 5, day: 11, name: "Special Public Holiday", category: Category::Public },
    // Khmer New Year 2020 was postponed to August for Covid-19.
    SpecialDay { year: 2020, month: 8, day: 17, name: "Khmer New Year's Replacement Holiday", category: Category::Public },
    SpecialDay { year: 2020, month: 8, day: 18, name: "Khmer New Year's Replacement Holiday", category: Category::Public },
    SpecialDay { year: 2020, month: 8, day: 19, name: "Khmer New Year's Replacement Holiday", category: Category::Public },
    SpecialDay { year: 2020, month: 8, day: 20, name: "Khmer New Year's Replacement Holiday", category: Category::Public },
    SpecialDay { year: 2020, month: 8, day: 21, name: "Khmer New Year's Replacement Holiday", category: Category::Public },
    SpecialDay { year: 2024, month: 4, day: 16, name: "Khmer New Year's Day", category: Category::Public },
];

const STATIC: StaticHolidays = StaticHolidays {
    special: SPECIAL,
    substituted: &[],
};

/// Kingdom of Cambodia.
pub struct Cambodia;

impl HolidayEntity for Cambodia {
    fn code(&self) -> &'static str {
        "KH"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["KHM"]
    }

    fn start_year(&self) -> i32 {
        1993
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        &["en_US", "km"]
    }

    fn catalog(&self, language: &str) -> Option<Catalog> {
        (language == "km").then_some(KM)
    }

    fn static_holidays(&self) -> Option<&'static StaticHolidays> {
        Some(&STATIC)
    }

    fn populate(&self, ctx: &mut Registrar<'_>, category: Category) -> Result<()> {
        if category != Category::Public {
            return Ok(());
        }
        let year = ctx.year();
        let international = InternationalHolidays;
        let buddhist = ThaiBuddhistHolidays::khmer();

        international.add_new_years_day(ctx, "International New Year Day")?;
        ctx.add("Day of Victory over the Genocidal Regime", Month::January, 7)?;
        international.add_womens_day(ctx, "International Women's Rights Day")?;

        if year != 2020 {
            let name = "Khmer New Year's Day";
            let day = if SANGKRANTA_APR_14_YEARS.contains(&year) {
                14
            } else {
                13
            };
            let first = ctx.add(name, Month::April, day)?;
            ctx.add_date(name, first.add_days(1)?)?;
            ctx.add_date(name, first.add_days(2)?)?;
        }

        international.add_labour_day(ctx, "International Labor Day")?;

        if year >= 2005 {
            let name = "Birthday of His Majesty Preah Bat Samdech Preah Boromneath \
                        NORODOM SIHAMONI, King of Cambodia";
            ctx.add(name, Month::May, 14)?;
            if year <= 2019 {
                ctx.add(name, Month::May, 13)?;
                ctx.add(name, Month::May, 15)?;
            }
        }

        if year == 2018 || year == 2019 {
            ctx.add("National Day of Remembrance", Month::May, 20)?;
        }

        if year <= 2019 {
            international.add_childrens_day(ctx, "International Children Day")?;
        }

        if year >= 1994 {
            ctx.add(
                "Birthday of Her Majesty the Queen-Mother NORODOM MONINEATH SIHANOUK \
                 of Cambodia",
                Month::June,
                18,
            )?;
        }

        ctx.add("Constitution Day", Month::September, 24)?;

        if year >= 2012 {
            ctx.add(
                "Mourning Day of the Late King-Father NORODOM SIHANOUK of Cambodia",
                Month::October,
                15,
            )?;
        }

        if year <= 2019 {
            ctx.add("Paris Peace Agreement's Day", Month::October, 23)?;
        }

        if year >= 2004 {
            ctx.add(
                "Coronation Day of His Majesty Preah Bat Samdech Preah Boromneath \
                 NORODOM SIHAMONI, King of Cambodia",
                Month::October,
                29,
            )?;
        }

        ctx.add("Independence Day", Month::November, 9)?;

        if year <= 2019 {
            international.add_human_rights_day(ctx, "International Human Rights Day")?;
        }

        // Lunar holidays, Khmer style.
        if year <= 2019 {
            buddhist.add_makha_bucha(ctx, "Meak Bochea Day")?;
        }
        buddhist.add_visakha_bucha(ctx, "Visaka Bochea Day")?;
        buddhist.add_preah_neangkoal(ctx, "Royal Ploughing Ceremony")?;

        // Pchum Ben spans two days, three from 2017 onwards.
        buddhist.add_pchum_ben(ctx, "Pchum Ben Day", -1)?;
        buddhist.add_pchum_ben(ctx, "Pchum Ben Day", 0)?;
        if year >= 2017 {
            buddhist.add_pchum_ben(ctx, "Pchum Ben Day", 1)?;
        }

        for offset in -1..=1 {
            buddhist.add_loy_krathong(ctx, "Water Festival", offset)?;
        }
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
        Holidays::builder(Arc::new(Cambodia))
            .years(years)
            .build()
            .unwrap()
    }

    #[test]
    fn test_sangkranta_start_day() {
        let kh = holidays_for(&[2019, 2022]);
        // April 13 start in 2019, April 14 start in 2022.
        assert!(kh.contains(date(2019, 4, 13)).unwrap());
        assert!(!kh.contains(date(2019, 4, 16)).unwrap());
        assert!(!kh.contains(date(2022, 4, 13)).unwrap());
        assert!(kh.contains(date(2022, 4, 14)).unwrap());
        assert!(kh.contains(date(2022, 4, 16)).unwrap());
    }

    #[test]
    fn test_sangkranta_2020_postponed() {
        let kh = holidays_for(&[2020]);
        assert!(!kh.contains(date(2020, 4, 13)).unwrap());
        assert!(!kh.contains(date(2020, 4, 14)).unwrap());
        for day in 17..=21 {
            assert_eq!(
                kh.get(date(2020, 8, day)).unwrap(),
                Some("Khmer New Year's Replacement Holiday".into())
            );
        }
    }

    #[test]
    fn test_defunct_days_dropped_in_2020() {
        let kh = holidays_for(&[2019, 2020]);
        assert!(kh.contains(date(2019, 6, 1)).unwrap());
        assert!(kh.contains(date(2019, 10, 23)).unwrap());
        assert!(kh.contains(date(2019, 12, 10)).unwrap());
        assert!(!kh.contains(date(2020, 6, 1)).unwrap());
        assert!(!kh.contains(date(2020, 10, 23)).unwrap());
        assert!(!kh.contains(date(2020, 12, 10)).unwrap());
    }

    #[test]
    fn test_king_sihamoni_birthday_span() {
        let kh = holidays_for(&[2019, 2022]);
        // Three days through 2019, a single day afterwards.
        assert!(kh.contains(date(2019, 5, 13)).unwrap());
        assert!(kh.contains(date(2019, 5, 14)).unwrap());
        assert!(kh.contains(date(2019, 5, 15)).unwrap());
        assert!(!kh.contains(date(2022, 5, 13)).unwrap());
        assert!(kh.contains(date(2022, 5, 14)).unwrap());
    }

    #[test]
    fn test_water_festival_span() {
        // Loy Krathong 2024 falls on November 15 in the Khmer reckoning.
        let kh = holidays_for(&[2024]);
        assert!(kh.contains(date(2024, 11, 14)).unwrap());
        assert!(kh.contains(date(2024, 11, 15)).unwrap());
        assert!(kh.contains(date(2024, 11, 16)).unwrap());
    }

    #[test]
    fn test_khmer_catalog() {
        let kh = Holidays::builder(Arc::new(Cambodia))
            .years(&[2024])
            .language("km")
            .build()
            .unwrap();
        assert_eq!(
            kh.get(date(2024, 1, 1)).unwrap(),
            Some("ទិវាចូលឆ្នាំសាកល".into())
        );
    }
}
