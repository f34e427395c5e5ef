//! Multiplicative Nim.
//!
//! Piles range over `1..=max_value` with multiples of a prime `p` removed. A position is losing
//! iff the product of its piles is congruent to one modulo `p`. Before classification, positions
//! with all piles below `p`, or with any pile divisible by `p`, are excluded.

use crate::{
    classify::{LosingCondition, ProductResidue},
    domain::Domain,
    error::Error,
    filter::ExclusionFilter,
    games::Analysis,
    generator::{GenerationMode, Positions, generate_positions},
    position::Position,
};
use std::num::NonZeroU32;
use tracing::{debug, instrument};

/// Multiplicative Nim over a restricted domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicativeNim {
    max_value: u32,
    prime: NonZeroU32,
    domain: Domain,
}

impl MultiplicativeNim {
    /// Piles range over `1..=max_value` without multiples of `prime`
    ///
    /// # Errors
    /// - `max_value` or `prime` is zero
    pub fn new(max_value: u32, prime: u32) -> Result<Self, Error> {
        let domain = Domain::restricted(max_value, prime)?;
        let prime = Error::ensure_positive("prime", prime)?;
        Ok(Self {
            max_value,
            prime,
            domain,
        })
    }

    /// Get largest pile size
    #[inline]
    pub const fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Get the prime
    #[inline]
    pub const fn prime(&self) -> NonZeroU32 {
        self.prime
    }

    /// Get admissible pile sizes
    #[inline]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Closed-form number of positions with `arity` piles in
    /// [`GenerationMode::UniqueCombinations`] mode
    pub fn count_positions(&self, arity: usize) -> Option<u128> {
        self.domain.count_positions(arity)
    }

    /// Lazily generate positions with `arity` piles over the restricted domain
    pub fn generate_positions(&self, arity: usize, mode: GenerationMode) -> Positions<'_> {
        generate_positions(&self.domain, arity, mode)
    }

    /// Exclusion rule of this game
    #[inline]
    pub const fn exclusion_filter(&self) -> ExclusionFilter {
        ExclusionFilter::from_non_zero(self.prime)
    }

    /// Drop positions with all piles below the prime or any pile divisible by it
    pub fn filter_positions<I>(&self, positions: I) -> Vec<Position>
    where
        I: IntoIterator<Item = Position>,
    {
        self.exclusion_filter().filter(positions).collect()
    }

    /// Keep positions whose product is congruent to one modulo the prime
    ///
    /// # Errors
    /// - Some position does not have `arity` piles
    pub fn find_losing_positions<I>(
        &self,
        positions: I,
        arity: usize,
    ) -> Result<Vec<Position>, Error>
    where
        I: IntoIterator<Item = Position>,
    {
        ProductResidue::from_non_zero(self.prime, arity).classify(positions)
    }

    /// Run generation, exclusion and classification in one streaming pass
    ///
    /// # Errors
    /// - Never in practice, generated positions always have `arity` piles
    #[instrument(skip(self), fields(max_value = self.max_value, prime = self.prime.get()))]
    pub fn analyze(&self, arity: usize, mode: GenerationMode) -> Result<Analysis, Error> {
        let mut generated = 0;
        let mut filtered = 0;

        let candidates = self
            .generate_positions(arity, mode)
            .inspect(|_| generated += 1);
        let survivors = self
            .exclusion_filter()
            .filter(candidates)
            .inspect(|_| filtered += 1);
        let losing = self.find_losing_positions(survivors, arity)?;

        debug!(
            generated,
            filtered,
            losing = losing.len(),
            "Classified multiplicative positions"
        );

        Ok(Analysis {
            generated,
            filtered,
            losing,
        })
    }
}
