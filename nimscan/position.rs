//! Nim position: a tuple of pile sizes

use crate::{
    display,
    error::Error,
    numeric::{nimber::Nimber, residue::Residue},
};
use std::{fmt::Display, num::NonZeroU32};

/// Fixed-arity tuple of pile sizes.
///
/// Equality, ordering and hashing are by value of all piles, in order, so positions can be used
/// directly as set keys. Ordering is lexicographic, which is also the order in which
/// [generators](crate::generator) emit them.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Position {
    piles: Vec<u32>,
}

impl Position {
    /// Create new position from pile sizes
    #[inline]
    pub const fn new(piles: Vec<u32>) -> Self {
        Self { piles }
    }

    /// Get pile sizes
    #[inline]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Number of piles
    #[inline]
    pub fn arity(&self) -> usize {
        self.piles.len()
    }

    /// Take the pile sizes
    #[inline]
    pub fn into_piles(self) -> Vec<u32> {
        self.piles
    }

    /// Fail with [`Error::ArityMismatch`] unless the position has exactly `expected` piles
    ///
    /// # Errors
    /// - Position has a different number of piles
    #[inline]
    pub fn ensure_arity(&self, expected: usize) -> Result<(), Error> {
        Error::ensure_arity(expected, self.arity())
    }

    /// Check if piles are in non-decreasing order, i.e. position is the canonical representative
    /// of its multiset
    pub fn is_sorted(&self) -> bool {
        self.piles.is_sorted()
    }

    /// Nim sum of all piles
    pub fn nim_sum(&self) -> Nimber {
        self.piles.iter().copied().map(Nimber::new).sum()
    }

    /// Product of all piles modulo `modulus`
    pub fn product_residue(&self, modulus: NonZeroU32) -> Residue {
        Residue::product(self.piles.iter().copied(), modulus)
    }

    /// Display position together with its nim-sum, e.g. `(1, 2, 3) (XOR: 1 ^ 2 ^ 3 = 0)`
    pub const fn nim_sum_equation(&self) -> NimSumEquation<'_> {
        NimSumEquation { position: self }
    }
}

impl From<Vec<u32>> for Position {
    fn from(piles: Vec<u32>) -> Self {
        Self::new(piles)
    }
}

impl<const N: usize> From<[u32; N]> for Position {
    fn from(piles: [u32; N]) -> Self {
        Self::new(piles.to_vec())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::parens(f, |f| display::commas(f, self.piles()))
    }
}

/// See [`Position::nim_sum_equation`]
#[derive(Debug, Clone, Copy)]
pub struct NimSumEquation<'a> {
    position: &'a Position,
}

impl Display for NimSumEquation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (XOR: ", self.position)?;
        display::sep(f, " ^ ", self.position.piles())?;
        write!(f, " = {})", self.position.nim_sum().value())
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl Position {
    /// Arbitrary position with exactly `arity` piles, each below `max_pile`
    pub fn arbitrary_with_arity(g: &mut quickcheck::Gen, arity: usize, max_pile: u32) -> Self {
        use quickcheck::Arbitrary;

        let piles = (0..arity)
            .map(|_| u32::arbitrary(g) % max_pile.max(1))
            .collect();
        Self::new(piles)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let arity = usize::arbitrary(g) % 5;
        Self::arbitrary_with_arity(g, arity, 32)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.piles.shrink().map(Self::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Position::from([1, 2, 3]).to_string(), "(1, 2, 3)");
        assert_eq!(Position::from([7]).to_string(), "(7)");
        assert_eq!(Position::default().to_string(), "()");
    }

    #[test]
    fn nim_sum_equation() {
        assert_eq!(
            Position::from([1, 2, 3]).nim_sum_equation().to_string(),
            "(1, 2, 3) (XOR: 1 ^ 2 ^ 3 = 0)"
        );
        assert_eq!(
            Position::from([4, 1]).nim_sum_equation().to_string(),
            "(4, 1) (XOR: 4 ^ 1 = 5)"
        );
    }

    #[test]
    fn value_semantics() {
        let a = Position::from([1, 2, 3]);
        let b = Position::new(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, Position::from([3, 2, 1]));
        assert!(Position::from([1, 2, 3]) < Position::from([1, 3, 0]));
        assert!(a.is_sorted());
        assert!(!Position::from([3, 2, 1]).is_sorted());
    }

    #[test]
    fn arity_guard() {
        let p = Position::from([1, 2]);
        assert_eq!(p.arity(), 2);
        assert_eq!(p.ensure_arity(2), Ok(()));
        assert_eq!(
            p.ensure_arity(3),
            Err(Error::ArityMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn product_residue() {
        let three = NonZeroU32::new(3).unwrap();
        assert!(Position::from([2, 2]).product_residue(three).is_one());
        assert!(Position::from([1, 4]).product_residue(three).is_one());
        assert!(!Position::from([2, 4]).product_residue(three).is_one());
    }
}
