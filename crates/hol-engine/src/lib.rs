//! # hol-engine
//!
//! The holiday resolution engine: the lazily-populated [`Holidays`]
//! container, the observed-shift rules, the [`HolidayEntity`] trait
//! with its populate [`Registrar`], and the capability groups entities
//! compose their rule sets from.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Entities, static tables, and the populate context.
pub mod entity;

/// Capability groups (Christian, Islamic, Thai Buddhist, international).
pub mod groups;

/// The holiday container and its builder.
pub mod holidays;

/// Observed-holiday shift rules.
pub mod observed;

/// Serializable container snapshots.
#[cfg(feature = "serde")]
pub mod snapshot;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use entity::{
    resolve_subdivision, Catalog, HolidayEntity, Registrar, SpecialDay, StaticHolidays,
    SubstitutedDay,
};
pub use groups::{
    ChristianCalendar, InternationalHolidays, IslamicHolidays, ThaiBuddhistHolidays,
};
pub use holidays::{DateKey, Holidays, HolidaysBuilder, NameLookup};
pub use observed::{ObservedRule, Shift};
#[cfg(feature = "serde")]
pub use snapshot::Snapshot;
