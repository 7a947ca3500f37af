//! Error types for dayoff.
//!
//! Day-off resolution itself never fails: a missing year, region, month or
//! day simply means "no exception". Errors only arise when building dates
//! from user input or when date arithmetic leaves the supported range.
//! The `ensure!` macro defined here covers the precondition checks in
//! those constructors.

use thiserror::Error;

/// The error type shared by every dayoff crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic out of the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Text that could not be parsed into the requested type.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was being parsed (e.g. `"date"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },
}

/// Shorthand `Result` type used throughout dayoff.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` unless `$cond` holds.
///
/// # Example
/// ```
/// use dayoff_core::{ensure, errors::Error};
/// fn weekday_index(n: u8) -> dayoff_core::errors::Result<u8> {
///     ensure!((1..=7).contains(&n), "weekday {n} out of range [1, 7]");
///     Ok(n)
/// }
/// assert!(weekday_index(3).is_ok());
/// assert!(weekday_index(8).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_day(day: u8) -> Result<u8> {
        crate::ensure!(day >= 1, "day must be positive");
        Ok(day)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked_day(1), Ok(1));
        assert_eq!(
            checked_day(0),
            Err(Error::Precondition("day must be positive".into()))
        );
    }

    #[test]
    fn parse_error_message() {
        let e = Error::Parse {
            what: "date",
            input: "2025-13-01".into(),
        };
        assert_eq!(e.to_string(), "cannot parse date from \"2025-13-01\"");
    }
}
