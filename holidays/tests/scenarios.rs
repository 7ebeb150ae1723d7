//! End-to-end scenarios through the façade entry points.

use holidays::{country_holidays, financial_holidays, Category, Date};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn kyrgyzstan_2022() {
    let kg = country_holidays("KG")
        .unwrap()
        .years(&[2022])
        .build()
        .unwrap();

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
}

#[test]
fn julian_calendar_drift_seeds() {
    use holidays::calendars::julian_calendar_drift;

    assert_eq!(julian_calendar_drift(1900), 0);
    assert_eq!(julian_calendar_drift(2000), 0);
    assert_eq!(julian_calendar_drift(2100), 1);
    assert_eq!(julian_calendar_drift(1582), -13);

    // The drift moves Orthodox Christmas off January 7 after 2100.
    let kg = country_holidays("KG")
        .unwrap()
        .years(&[2102])
        .build()
        .unwrap();
    assert_eq!(kg.get(date(2102, 1, 8)).unwrap(), Some("Christmas Day".into()));
}

#[test]
fn thailand_makha_bucha_2010() {
    let th = country_holidays("TH")
        .unwrap()
        .years(&[2010])
        .build()
        .unwrap();
    assert_eq!(th.get(date(2010, 2, 28)).unwrap(), Some("Makha Bucha".into()));
}

#[test]
fn merged_canada_united_states_2014() {
    let ca = country_holidays("CA")
        .unwrap()
        .years(&[2014])
        .build()
        .unwrap();
    assert_eq!(ca.subdiv(), Some("ON"));
    let us = country_holidays("US")
        .unwrap()
        .years(&[2014])
        .build()
        .unwrap();

    let both = ca.merged(us).unwrap();
    assert!(both.contains(date(2014, 7, 1)).unwrap());
    assert!(both.contains(date(2014, 7, 4)).unwrap());
}

#[test]
fn merge_membership_is_commutative() {
    let build = |code: &str| {
        country_holidays(code)
            .unwrap()
            .years(&[2021])
            .build()
            .unwrap()
    };

    let ab = build("US").merged(build("GB")).unwrap();
    let ba = build("GB").merged(build("US")).unwrap();
    let mut day = date(2021, 1, 1);
    let end = date(2021, 12, 31);
    while day <= end {
        assert_eq!(
            ab.contains(day).unwrap(),
            ba.contains(day).unwrap(),
            "membership differs on {day}"
        );
        day = day + 1;
    }
}

#[test]
fn no_expansion_when_disabled() {
    let us = country_holidays("US")
        .unwrap()
        .years(&[2013, 2015])
        .expand(false)
        .build()
        .unwrap();

    // Lookups in unlisted years return nothing and never grow the set.
    assert!(!us.contains(date(2014, 7, 4)).unwrap());
    assert_eq!(
        us.years().into_iter().collect::<Vec<_>>(),
        vec![2013, 2015]
    );
    assert!(us.contains(date(2013, 7, 4)).unwrap());
}

#[test]
fn expansion_populates_on_demand() {
    let us = country_holidays("US").unwrap().build().unwrap();
    assert!(us.years().is_empty());
    assert!(us.contains(date(2024, 12, 25)).unwrap());
    assert!(us.years().contains(&2024));
    // Repeat lookups are idempotent.
    assert!(us.contains(date(2024, 12, 25)).unwrap());
    assert_eq!(us.years().len(), 1);
}

#[test]
fn date_key_forms_agree() {
    let us = country_holidays("US")
        .unwrap()
        .years(&[2024])
        .build()
        .unwrap();
    assert!(us.contains("2024-07-04").unwrap());
    assert!(us.contains("2024/07/04").unwrap());
    assert!(us.contains("7/4/2024").unwrap());
    assert!(us.contains(date(2024, 7, 4)).unwrap());
    assert!(us.contains(1720051200_i64).unwrap());
    assert!(us.contains("bogus").is_err());
}

#[test]
fn financial_market_calendars() {
    let nyse = financial_holidays("NYSE")
        .unwrap()
        .years(&[2024])
        .build()
        .unwrap();
    assert!(nyse.contains(date(2024, 3, 29)).unwrap());
    assert!(!nyse.contains(date(2024, 11, 11)).unwrap());

    let ecb = financial_holidays("XECB")
        .unwrap()
        .years(&[2024])
        .build()
        .unwrap();
    assert!(ecb.contains(date(2024, 4, 1)).unwrap());

    assert!(financial_holidays("XXXX").is_err());
}

#[test]
fn unknown_codes_and_subdivisions() {
    assert!(country_holidays("ZZ").is_err());
    assert!(country_holidays("CA")
        .unwrap()
        .subdiv("ZZ")
        .build()
        .is_err());
    assert!(country_holidays("US")
        .unwrap()
        .categories(&[Category::Bank])
        .build()
        .is_err());
}

#[test]
fn subdivision_aliases_resolve() {
    let ca = country_holidays("ca")
        .unwrap()
        .subdiv("quebec")
        .years(&[2024])
        .build()
        .unwrap();
    assert_eq!(ca.subdiv(), Some("QC"));
    assert!(ca.contains(date(2024, 6, 24)).unwrap());
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_round_trip_through_registry() {
    let original = country_holidays("GB")
        .unwrap()
        .subdiv("SCT")
        .years(&[2022])
        .build()
        .unwrap();

    let json = serde_json::to_string(&original.snapshot()).unwrap();
    let snapshot: holidays::Snapshot = serde_json::from_str(&json).unwrap();
    let restored = holidays::restore(snapshot).unwrap();

    assert_eq!(original, restored);
    // Lazy expansion still works against the re-resolved entity.
    assert!(restored.contains(date(2023, 1, 2)).unwrap());
}
