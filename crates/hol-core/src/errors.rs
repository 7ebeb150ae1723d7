//! Error types for holidays-rs.
//!
//! The library never recovers or retries internally; every operation is a
//! pure, synchronous computation that either succeeds or returns one of
//! these variants to the caller.

use thiserror::Error;

/// The top-level error type used throughout holidays-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// A key could not be converted to a calendar date.
    #[error("cannot parse date from {0:?}")]
    DateParse(String),

    /// Strict lookup missed (the date is not a holiday).
    #[error("no holiday on {0}")]
    NoHoliday(String),

    /// Invalid argument (zero slice step, empty bound, n == 0, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested entity code is not implemented.
    #[error("entity {0:?} is not implemented")]
    UnknownEntity(String),

    /// The requested subdivision does not exist for the entity.
    #[error("entity {entity:?} does not have subdivision {subdiv:?}")]
    UnknownSubdivision {
        /// The entity whose subdivision was requested.
        entity: String,
        /// The unrecognized subdivision code.
        subdiv: String,
    },

    /// A requested holiday category is not supported by the entity.
    #[error("entity {entity:?} does not support category {category:?}")]
    UnsupportedCategory {
        /// The entity whose category was requested.
        entity: String,
        /// The unsupported category name.
        category: String,
    },
}

/// Shorthand `Result` type used throughout holidays-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hol_core::ensure;
/// fn positive(n: i32) -> hol_core::Result<i32> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use hol_core::fail;
/// fn always_err() -> hol_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
