//! Exclusion of positions that cannot take part in the multiplicative game.
//!
//! A position is excluded if **either** every pile is smaller than the prime, **or** some pile is
//! a multiple of the prime (its product would then be zero modulo the prime). Either criterion
//! alone is enough to exclude.

use crate::{error::Error, position::Position};
use std::num::NonZeroU32;

/// Exclusion rule relative to a fixed prime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExclusionFilter {
    prime: NonZeroU32,
}

impl ExclusionFilter {
    /// Create exclusion filter for a prime
    ///
    /// # Errors
    /// - `prime` is zero
    pub fn new(prime: u32) -> Result<Self, Error> {
        Ok(Self::from_non_zero(Error::ensure_positive("prime", prime)?))
    }

    /// Create exclusion filter for an already validated prime
    #[inline]
    pub const fn from_non_zero(prime: NonZeroU32) -> Self {
        Self { prime }
    }

    /// Get the prime
    #[inline]
    pub const fn prime(&self) -> NonZeroU32 {
        self.prime
    }

    /// Check if all piles are below the prime. Vacuously true for the empty position.
    pub fn all_below_prime(&self, position: &Position) -> bool {
        position.piles().iter().all(|&pile| pile < self.prime.get())
    }

    /// Check if some pile is divisible by the prime
    pub fn has_multiple_of_prime(&self, position: &Position) -> bool {
        position
            .piles()
            .iter()
            .any(|&pile| pile % self.prime.get() == 0)
    }

    /// Check if position should be dropped before classification
    pub fn is_excluded(&self, position: &Position) -> bool {
        self.all_below_prime(position) || self.has_multiple_of_prime(position)
    }

    /// Lazily keep only positions that are not excluded
    pub fn filter<I>(self, positions: I) -> impl Iterator<Item = Position>
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .filter(move |position| !self.is_excluded(position))
    }
}

/// Check if position should be dropped before classification. See [`ExclusionFilter`]
///
/// # Errors
/// - `prime` is zero
pub fn is_excluded(position: &Position, prime: u32) -> Result<bool, Error> {
    Ok(ExclusionFilter::new(prime)?.is_excluded(position))
}

/// Keep only positions that are not excluded, preserving their order. See [`ExclusionFilter`]
///
/// # Errors
/// - `prime` is zero
pub fn filter_positions<I>(positions: I, prime: u32) -> Result<Vec<Position>, Error>
where
    I: IntoIterator<Item = Position>,
{
    Ok(ExclusionFilter::new(prime)?.filter(positions).collect())
}
