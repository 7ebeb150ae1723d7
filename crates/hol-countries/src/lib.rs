//! # hol-countries
//!
//! The holiday entities shipped with holidays-rs: country rule modules,
//! financial-market calendars, and the registry that resolves ISO and
//! MIC codes to entity constructors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Country entities.
pub mod countries;

/// Financial-market entities.
pub mod financial;

/// Code-to-entity registry.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use registry::{entity_for, supported_countries, supported_financial};
