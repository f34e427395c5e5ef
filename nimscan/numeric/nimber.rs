//! Nimber is a number that represents a Nim heap of a given size.

use auto_ops::impl_op_ex;
use std::{fmt::Display, iter::Sum};

/// Number that represents a Nim heap of given size.
///
/// Addition is overloaded to Nim sum.
#[repr(transparent)]
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nimber(u32);

impl Nimber {
    /// Construct new nimber
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying nimber value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Check if the nimber is zero i.e. the heap sum is a loss for the player to move
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Nimber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// xor is correct, that's how nimbers additon works
impl_op_ex!(+|lhs: &Nimber, rhs: &Nimber| -> Nimber { Nimber(lhs.0 ^ rhs.0) });
impl_op_ex!(+=|lhs: &mut Nimber, rhs: &Nimber| { lhs.0 ^= rhs.0 });

impl Sum for Nimber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a Nimber> for Nimber {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, n| acc + n)
    }
}

impl Display for Nimber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "0")
        } else if self.0 == 1 {
            write!(f, "*")
        } else {
            write!(f, "*{}", self.0)
        }
    }
}

#[test]
fn nim_sum_works() {
    assert_eq!(Nimber::new(1) + Nimber::new(2), Nimber::new(3));
    assert_eq!(Nimber::new(5) + Nimber::new(5), Nimber::new(0));

    let sum: Nimber = [1, 2, 3].into_iter().map(Nimber::new).sum();
    assert!(sum.is_zero());

    let sum: Nimber = [4, 1, 2].iter().copied().map(Nimber::from).sum();
    assert_eq!(sum, Nimber::new(7));

    assert_eq!(Vec::<Nimber>::new().iter().sum::<Nimber>(), Nimber::new(0));
}

#[test]
fn display() {
    assert_eq!(Nimber::new(0).to_string(), "0");
    assert_eq!(Nimber::new(1).to_string(), "*");
    assert_eq!(Nimber::new(6).to_string(), "*6");
}
