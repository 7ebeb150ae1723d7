//! # holidays
//!
//! Country, subdivision, and market holiday calendars generated on the
//! fly.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates and adds the code-based entry points.
//! Application code should depend on this crate rather than the
//! individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holidays::country_holidays;
//!
//! let us = country_holidays("US").unwrap().years(&[2024]).build().unwrap();
//! assert!(us.contains("2024-07-04").unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types: errors, categories, shared constants.
pub use hol_core as core;

/// Dates, weekdays, and Gregorian helpers.
pub use hol_time as time;

/// Non-Gregorian calendar arithmetic.
pub use hol_calendars as calendars;

/// The resolution engine: containers, entities, observed rules.
pub use hol_engine as engine;

/// Country and market entities with the code registry.
pub use hol_countries as countries;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use hol_core::errors::{Error, Result};
pub use hol_core::Category;
pub use hol_engine::{Holidays, HolidaysBuilder, NameLookup};
pub use hol_time::Date;

#[cfg(feature = "serde")]
pub use hol_engine::Snapshot;

/// Builder for a country's holiday container.  Accepts ISO 3166-1
/// alpha-2 or alpha-3 codes, case-insensitive.
///
/// ```rust
/// let ca = holidays::country_holidays("CA")
///     .unwrap()
///     .subdiv("QC")
///     .years(&[2024])
///     .build()
///     .unwrap();
/// assert!(ca.contains("2024-06-24").unwrap());
/// ```
pub fn country_holidays(code: &str) -> Result<HolidaysBuilder> {
    Ok(Holidays::builder(hol_countries::registry::country_entity(code)?))
}

/// Builder for a financial market's holiday container.  Accepts MIC
/// codes such as `XNYS` or aliases such as `NYSE`.
pub fn financial_holidays(code: &str) -> Result<HolidaysBuilder> {
    Ok(Holidays::builder(hol_countries::registry::financial_entity(code)?))
}

/// Restore a container from a snapshot, resolving entity codes through
/// the registry.
#[cfg(feature = "serde")]
pub fn restore(snapshot: Snapshot) -> Result<Holidays> {
    Holidays::from_snapshot(snapshot, |code| {
        hol_countries::registry::entity_for(code)
    })
}
