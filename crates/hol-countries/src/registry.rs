//! Entity registry.
//!
//! Maps ISO 3166-1 country codes and MIC-style market codes (plus their
//! aliases) to entity constructors.  Lookup is case-insensitive.

use std::sync::Arc;

use hol_core::errors::{Error, Result};
use hol_engine::HolidayEntity;

use crate::countries::{
    Cambodia, Canada, Ethiopia, Kyrgyzstan, Thailand, UnitedKingdom, UnitedStates,
};
use crate::financial::{EuropeanCentralBank, NewYorkStockExchange};

type Constructor = fn() -> Arc<dyn HolidayEntity>;

const COUNTRIES: &[Constructor] = &[
    || Arc::new(Cambodia),
    || Arc::new(Canada),
    || Arc::new(Ethiopia),
    || Arc::new(Kyrgyzstan),
    || Arc::new(Thailand),
    || Arc::new(UnitedKingdom),
    || Arc::new(UnitedStates),
];

const FINANCIAL: &[Constructor] = &[
    || Arc::new(EuropeanCentralBank),
    || Arc::new(NewYorkStockExchange),
];

fn lookup(table: &[Constructor], code: &str) -> Option<Arc<dyn HolidayEntity>> {
    table.iter().map(|make| make()).find(|entity| {
        entity.code().eq_ignore_ascii_case(code)
            || entity
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(code))
    })
}

/// Resolve a country code to its entity.
pub fn country_entity(code: &str) -> Result<Arc<dyn HolidayEntity>> {
    lookup(COUNTRIES, code).ok_or_else(|| Error::UnknownEntity(code.to_owned()))
}

/// Resolve a financial-market code to its entity.
pub fn financial_entity(code: &str) -> Result<Arc<dyn HolidayEntity>> {
    lookup(FINANCIAL, code).ok_or_else(|| Error::UnknownEntity(code.to_owned()))
}

/// Resolve any known code, country or market.  Used when restoring
/// snapshots.
pub fn entity_for(code: &str) -> Result<Arc<dyn HolidayEntity>> {
    lookup(COUNTRIES, code)
        .or_else(|| lookup(FINANCIAL, code))
        .ok_or_else(|| Error::UnknownEntity(code.to_owned()))
}

/// Supported country codes with their subdivision codes.
pub fn supported_countries() -> Vec<(&'static str, &'static [&'static str])> {
    COUNTRIES
        .iter()
        .map(|make| {
            let entity = make();
            (entity.code(), entity.subdivisions())
        })
        .collect()
}

/// Supported financial-market codes.
pub fn supported_financial() -> Vec<&'static str> {
    FINANCIAL.iter().map(|make| make().code()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_and_alias() {
        assert_eq!(country_entity("US").unwrap().code(), "US");
        assert_eq!(country_entity("usa").unwrap().code(), "US");
        assert_eq!(country_entity("gbr").unwrap().code(), "GB");
        assert_eq!(financial_entity("NYSE").unwrap().code(), "XNYS");
        assert_eq!(financial_entity("tar").unwrap().code(), "XECB");
    }

    #[test]
    fn test_tables_are_disjoint() {
        assert!(country_entity("XNYS").is_err());
        assert!(financial_entity("US").is_err());
        assert!(matches!(
            entity_for("ZZ"),
            Err(Error::UnknownEntity(code)) if code == "ZZ"
        ));
    }

    #[test]
    fn test_supported_listings() {
        let countries = supported_countries();
        assert_eq!(countries.len(), 7);
        let (_, gb_subdivs) = countries
            .iter()
            .find(|(code, _)| *code == "GB")
            .unwrap();
        assert!(gb_subdivs.contains(&"SCT"));
        assert_eq!(supported_financial(), vec!["XECB", "XNYS"]);
    }
}
