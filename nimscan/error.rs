//! Errors raised before or during a pipeline run

use derive_more::{Display, Error};
use std::num::NonZeroU32;

/// Validation failure of a pipeline run. Nothing is computed once one is raised.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Domain parameter that must be strictly positive was not
    #[display("Invalid parameter: {name} must be positive, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,

        /// Value that was supplied
        value: u32,
    },

    /// Position with a different number of piles than the rest of the run
    #[display("Arity mismatch: expected {expected} piles, found {found}")]
    ArityMismatch {
        /// Number of piles every position must have
        expected: usize,

        /// Number of piles of the rejected position
        found: usize,
    },
}

impl Error {
    /// Fail with [`Error::InvalidParameter`] if `value` is zero
    ///
    /// # Errors
    /// - `value` is zero
    pub const fn ensure_positive(name: &'static str, value: u32) -> Result<NonZeroU32, Self> {
        match NonZeroU32::new(value) {
            Some(value) => Ok(value),
            None => Err(Self::InvalidParameter { name, value }),
        }
    }

    /// Fail with [`Error::ArityMismatch`] if arities differ
    ///
    /// # Errors
    /// - `expected != found`
    pub const fn ensure_arity(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::ArityMismatch { expected, found })
        }
    }
}

#[test]
fn messages() {
    assert_eq!(
        Error::InvalidParameter {
            name: "prime",
            value: 0
        }
        .to_string(),
        "Invalid parameter: prime must be positive, got 0"
    );
    assert_eq!(
        Error::ArityMismatch {
            expected: 3,
            found: 2
        }
        .to_string(),
        "Arity mismatch: expected 3 piles, found 2"
    );
}

#[test]
fn guards() {
    assert_eq!(
        Error::ensure_positive("max_value", 7).map(NonZeroU32::get),
        Ok(7)
    );
    assert!(Error::ensure_positive("max_value", 0).is_err());
    assert_eq!(Error::ensure_arity(2, 2), Ok(()));
    assert_eq!(
        Error::ensure_arity(2, 3),
        Err(Error::ArityMismatch {
            expected: 2,
            found: 3
        })
    );
}
