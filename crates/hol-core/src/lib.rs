//! # hol-core
//!
//! Core types shared across the holidays-rs workspace — the error
//! hierarchy, the `ensure!` / `fail!` macros, and the holiday
//! `Category` enum.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Holiday categories (public, bank, school, ...).
pub mod category;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use category::Category;
pub use errors::{Error, Result};

/// Separator used when several holidays fall on the same date and their
/// names are joined into a single string.
pub const HOLIDAY_NAME_DELIMITER: &str = "; ";
