//! Admissible pile sizes

use crate::{display, error::Error, numeric::binomial};
use std::fmt::Display;

/// Ascending, duplicate-free sequence of values a single pile can take
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    // Invariant: strictly increasing
    values: Vec<u32>,
}

impl Domain {
    /// Every heap size from empty up to `max_value`, i.e. `0..=max_value`
    pub fn additive(max_value: u32) -> Self {
        Self {
            values: (0..=max_value).collect(),
        }
    }

    /// Values in `1..=max_value` that are not multiples of `prime`
    ///
    /// # Errors
    /// - `max_value` or `prime` is zero
    pub fn restricted(max_value: u32, prime: u32) -> Result<Self, Error> {
        let max_value = Error::ensure_positive("max_value", max_value)?.get();
        let prime = Error::ensure_positive("prime", prime)?.get();
        Ok(Self {
            values: (1..=max_value).filter(|v| v % prime != 0).collect(),
        })
    }

    /// Domain from arbitrary values, sorted and deduplicated
    pub fn from_values(mut values: Vec<u32>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Get admissible values in ascending order
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of admissible values
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no admissible values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if `value` is admissible
    pub fn contains(&self, value: u32) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Number of non-decreasing positions of given arity over this domain.
    /// See [`binomial::count_positions`]
    pub fn count_positions(&self, arity: usize) -> Option<u128> {
        binomial::count_positions(self.len(), arity)
    }

    /// Number of ordered positions of given arity over this domain.
    /// See [`binomial::count_tuples`]
    pub fn count_tuples(&self, arity: usize) -> Option<u128> {
        binomial::count_tuples(self.len(), arity)
    }
}

/// Values in `1..=max_value` that are not multiples of `prime`. See [`Domain::restricted`]
///
/// # Errors
/// - `max_value` or `prime` is zero
pub fn restrict_domain(max_value: u32, prime: u32) -> Result<Vec<u32>, Error> {
    Domain::restricted(max_value, prime).map(|domain| domain.values)
}

impl Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        display::commas(f, self.values())?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restricted_domain() {
        assert_eq!(
            Domain::restricted(10, 3).unwrap().values(),
            &[1, 2, 4, 5, 7, 8, 10]
        );
        assert_eq!(restrict_domain(5, 7).unwrap(), vec![1, 2, 3, 4, 5]);
        assert!(Domain::restricted(4, 1).unwrap().is_empty());
        assert_eq!(Domain::restricted(2, 2).unwrap().values(), &[1]);
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            Domain::restricted(0, 3),
            Err(Error::InvalidParameter {
                name: "max_value",
                value: 0
            })
        );
        assert_eq!(
            restrict_domain(10, 0),
            Err(Error::InvalidParameter {
                name: "prime",
                value: 0
            })
        );
    }

    #[test]
    fn additive_domain() {
        assert_eq!(Domain::additive(4).values(), &[0, 1, 2, 3, 4]);
        assert_eq!(Domain::additive(0).values(), &[0]);
    }

    #[test]
    fn from_values() {
        let domain = Domain::from_values(vec![5, 1, 5, 3]);
        assert_eq!(domain.values(), &[1, 3, 5]);
        assert!(domain.contains(3));
        assert!(!domain.contains(4));
        assert_eq!(domain.to_string(), "{1, 3, 5}");
    }

    #[test]
    fn counts() {
        let domain = Domain::restricted(10, 3).unwrap();
        assert_eq!(domain.count_positions(2), Some(28));
        assert_eq!(domain.count_tuples(2), Some(49));
    }
}
