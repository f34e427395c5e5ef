//! Venn-style comparison of two or three position sets.
//!
//! Every distinct position of the inputs lands in exactly one of seven [`Bucket`]s, decided only
//! by which inputs contain it. Multiplicity within an input is ignored.

use crate::{error::Error, position::Position};
use ahash::AHashSet;
use std::fmt::Display;

/// Region of the three-set Venn diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bucket {
    /// In `a` only
    OnlyA = 0,
    /// In `b` only
    OnlyB = 1,
    /// In `c` only
    OnlyC = 2,
    /// In `a` and `b`, not in `c`
    AAndBNotC = 3,
    /// In `a` and `c`, not in `b`
    AAndCNotB = 4,
    /// In `b` and `c`, not in `a`
    BAndCNotA = 5,
    /// In all three
    AAndBAndC = 6,
}

impl Bucket {
    /// All buckets in label order
    pub const ALL: [Self; 7] = [
        Self::OnlyA,
        Self::OnlyB,
        Self::OnlyC,
        Self::AAndBNotC,
        Self::AAndCNotB,
        Self::BAndCNotA,
        Self::AAndBAndC,
    ];

    /// Stable snake case label
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnlyA => "only_a",
            Self::OnlyB => "only_b",
            Self::OnlyC => "only_c",
            Self::AAndBNotC => "a_and_b_not_c",
            Self::AAndCNotB => "a_and_c_not_b",
            Self::BAndCNotA => "b_and_c_not_a",
            Self::AAndBAndC => "a_and_b_and_c",
        }
    }

    /// Bucket of an element with given membership, `None` if it is in no set
    pub const fn from_membership(in_a: bool, in_b: bool, in_c: bool) -> Option<Self> {
        match (in_a, in_b, in_c) {
            (false, false, false) => None,
            (true, false, false) => Some(Self::OnlyA),
            (false, true, false) => Some(Self::OnlyB),
            (false, false, true) => Some(Self::OnlyC),
            (true, true, false) => Some(Self::AAndBNotC),
            (true, false, true) => Some(Self::AAndCNotB),
            (false, true, true) => Some(Self::BAndCNotA),
            (true, true, true) => Some(Self::AAndBAndC),
        }
    }
}

impl Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Disjoint decomposition of the union of up to three position sets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    // Invariant: each bucket is sorted ascending, buckets are pairwise disjoint
    buckets: [Vec<Position>; 7],
}

impl Partition {
    /// Partition three position lists
    ///
    /// # Errors
    /// - Positions do not all have the same number of piles
    pub fn of_three<A, B, C>(a: A, b: B, c: C) -> Result<Self, Error>
    where
        A: IntoIterator<Item = Position>,
        B: IntoIterator<Item = Position>,
        C: IntoIterator<Item = Position>,
    {
        let mut arity = None;
        let a = Self::collect_set(a, &mut arity)?;
        let b = Self::collect_set(b, &mut arity)?;
        let c = Self::collect_set(c, &mut arity)?;

        let union = a.iter().chain(&b).chain(&c).collect::<AHashSet<&Position>>();
        let mut partition = Self::default();
        for position in union {
            if let Some(bucket) = Bucket::from_membership(
                a.contains(position),
                b.contains(position),
                c.contains(position),
            ) {
                partition.buckets[bucket as usize].push(position.clone());
            }
        }

        for bucket in &mut partition.buckets {
            bucket.sort_unstable();
        }
        Ok(partition)
    }

    /// Partition two position lists. Every bucket involving `c` is empty.
    ///
    /// # Errors
    /// - Positions do not all have the same number of piles
    pub fn of_two<A, B>(a: A, b: B) -> Result<Self, Error>
    where
        A: IntoIterator<Item = Position>,
        B: IntoIterator<Item = Position>,
    {
        Self::of_three(a, b, [])
    }

    /// Positions in given bucket, sorted ascending
    #[inline]
    pub fn bucket(&self, bucket: Bucket) -> &[Position] {
        &self.buckets[bucket as usize]
    }

    /// All buckets in label order, including empty ones
    pub fn buckets(&self) -> impl Iterator<Item = (Bucket, &[Position])> {
        Bucket::ALL
            .into_iter()
            .map(|bucket| (bucket, self.bucket(bucket)))
    }

    /// Number of distinct positions in the union
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Check if all inputs were empty
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    fn collect_set<I>(
        positions: I,
        arity: &mut Option<usize>,
    ) -> Result<AHashSet<Position>, Error>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut set = AHashSet::new();
        for position in positions {
            match arity {
                Some(expected) => position.ensure_arity(*expected)?,
                None => *arity = Some(position.arity()),
            }
            set.insert(position);
        }
        Ok(set)
    }
}
