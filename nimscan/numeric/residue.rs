//! Residue classes modulo a fixed positive modulus.
//!
//! Products of piles grow as `max_value^arity`, so instead of forming the product and reducing it
//! once, every factor is reduced as it is multiplied in. Both operands are below `2^32`, so the
//! intermediate value always fits in `u64` and the result is exact for any number of factors.

use auto_ops::impl_op_ex;
use std::{fmt::Display, num::NonZeroU32};

/// Element of the ring of integers modulo `modulus`
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Residue {
    // Invariant: value < modulus
    value: u32,
    modulus: NonZeroU32,
}

impl Residue {
    /// Residue class of `value`
    #[inline]
    pub const fn new(value: u32, modulus: NonZeroU32) -> Self {
        Self {
            value: value % modulus.get(),
            modulus,
        }
    }

    /// Multiplicative identity, which collapses to zero modulo one
    #[inline]
    pub const fn one(modulus: NonZeroU32) -> Self {
        Self::new(1, modulus)
    }

    /// Reduced product of all `factors`. Empty product is [`Residue::one`].
    pub fn product<I>(factors: I, modulus: NonZeroU32) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        factors
            .into_iter()
            .fold(Self::one(modulus), |acc, factor| acc * factor)
    }

    /// Least non-negative representative
    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Modulus of the residue class
    #[inline]
    pub const fn modulus(&self) -> NonZeroU32 {
        self.modulus
    }

    /// Check if the residue is congruent to one. Never true modulo one.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.value == 1
    }

    /// Check if the residue is congruent to zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    #[inline]
    const fn mul_raw(self, rhs: u32) -> Self {
        let modulus = self.modulus.get() as u64;
        let value = (self.value as u64 * (rhs as u64 % modulus)) % modulus;
        Self {
            value: value as u32,
            modulus: self.modulus,
        }
    }
}

impl_op_ex!(*|lhs: &Residue, rhs: &u32| -> Residue { lhs.mul_raw(*rhs) });
impl_op_ex!(*=|lhs: &mut Residue, rhs: &u32| { *lhs = lhs.mul_raw(*rhs) });

impl Display for Residue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}
