//! Losing position conditions

use crate::{error::Error, position::Position};
use std::num::NonZeroU32;

/// Rule deciding whether the player to move from a position loses under optimal play
pub trait LosingCondition {
    /// Number of piles every classified position must have
    fn arity(&self) -> usize;

    /// Check if position is losing. Arity is not checked.
    fn is_losing(&self, position: &Position) -> bool;

    /// Keep losing positions, preserving their order
    ///
    /// # Errors
    /// - Some position has different arity than [`LosingCondition::arity`]. Nothing is returned
    ///   then, even if other positions were fine.
    fn classify<I>(&self, positions: I) -> Result<Vec<Position>, Error>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut losing = Vec::new();
        for position in positions {
            position.ensure_arity(self.arity())?;
            if self.is_losing(&position) {
                losing.push(position);
            }
        }
        Ok(losing)
    }
}

/// Additive Nim: losing iff nim-sum (xor) of all piles is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NimSum {
    arity: usize,
}

impl NimSum {
    /// Condition for positions with `arity` piles
    #[inline]
    pub const fn new(arity: usize) -> Self {
        Self { arity }
    }
}

impl LosingCondition for NimSum {
    fn arity(&self) -> usize {
        self.arity
    }

    fn is_losing(&self, position: &Position) -> bool {
        position.nim_sum().is_zero()
    }
}

/// Multiplicative Nim: losing iff product of all piles is congruent to one modulo a prime.
///
/// The product is reduced after every factor so it is exact for arbitrarily large piles and
/// arities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductResidue {
    prime: NonZeroU32,
    arity: usize,
}

impl ProductResidue {
    /// Condition for positions with `arity` piles
    ///
    /// # Errors
    /// - `prime` is zero
    pub fn new(prime: u32, arity: usize) -> Result<Self, Error> {
        let prime = Error::ensure_positive("prime", prime)?;
        Ok(Self { prime, arity })
    }

    /// Condition for already validated prime
    #[inline]
    pub const fn from_non_zero(prime: NonZeroU32, arity: usize) -> Self {
        Self { prime, arity }
    }

    /// Get the prime
    #[inline]
    pub const fn prime(&self) -> NonZeroU32 {
        self.prime
    }
}

impl LosingCondition for ProductResidue {
    fn arity(&self) -> usize {
        self.arity
    }

    fn is_losing(&self, position: &Position) -> bool {
        position.product_residue(self.prime).is_one()
    }
}
