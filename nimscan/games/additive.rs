//! Classic Nim where a position is lost for the player to move iff the xor of all piles is zero.

use crate::{
    classify::{LosingCondition, NimSum},
    domain::Domain,
    error::Error,
    games::Analysis,
    generator::{GenerationMode, Positions, generate_positions},
    position::Position,
};
use tracing::{debug, instrument};

/// Additive Nim positions with piles of at most `max_value` stones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditiveNim {
    max_value: u32,
    domain: Domain,
}

impl AdditiveNim {
    /// Piles range over `0..=max_value`
    pub fn new(max_value: u32) -> Self {
        Self {
            max_value,
            domain: Domain::additive(max_value),
        }
    }

    /// Get largest pile size
    #[inline]
    pub const fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Get admissible pile sizes
    #[inline]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Every ordered position with `arity` piles, `(max_value + 1)^arity` of them
    pub fn generate_positions(&self, arity: usize) -> Positions<'_> {
        generate_positions(&self.domain, arity, GenerationMode::AllTuples)
    }

    /// Keep positions with zero nim-sum
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
        NimSum::new(arity).classify(positions)
    }

    /// Generate every position with `arity` piles and keep the losing ones. Nothing is excluded
    /// in the additive game so `generated == filtered`.
    ///
    /// # Errors
    /// - Never in practice, generated positions always have `arity` piles
    #[instrument(skip(self), fields(max_value = self.max_value))]
    pub fn analyze(&self, arity: usize) -> Result<Analysis, Error> {
        let mut generated = 0;
        let positions = self.generate_positions(arity).inspect(|_| generated += 1);
        let losing = self.find_losing_positions(positions, arity)?;
        debug!(generated, losing = losing.len(), "Classified additive positions");

        Ok(Analysis {
            generated,
            filtered: generated,
            losing,
        })
    }
}
