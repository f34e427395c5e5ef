//! Lazy position generators over a [`Domain`].
//!
//! Positions are produced one at a time from a vector of domain indices advanced like an
//! odometer, so even `|domain|^arity` candidates never need to be held in memory at once.

use crate::{domain::Domain, position::Position};
use std::iter::FusedIterator;

/// Which positions to enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationMode {
    /// Every ordered tuple, permutations are distinct positions
    AllTuples,

    /// One non-decreasing representative per multiset (combinations with repetition)
    #[default]
    UniqueCombinations,
}

impl GenerationMode {
    /// [`GenerationMode::AllTuples`] if duplicates (permutations) are wanted
    #[inline]
    pub const fn from_allow_duplicates(allow_duplicates: bool) -> Self {
        if allow_duplicates {
            Self::AllTuples
        } else {
            Self::UniqueCombinations
        }
    }

    /// Number of positions of given arity the mode yields over `domain`, `None` on `u128`
    /// overflow
    pub fn count(self, domain: &Domain, arity: usize) -> Option<u128> {
        match self {
            Self::AllTuples => domain.count_tuples(arity),
            Self::UniqueCombinations => domain.count_positions(arity),
        }
    }
}

/// Positions of given arity over `domain` in lexicographic order. See [`Positions`]
#[inline]
pub fn generate_positions(domain: &Domain, arity: usize, mode: GenerationMode) -> Positions<'_> {
    Positions::new(domain, arity, mode)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Restartable iterator of positions, outer (leftmost) pile varies slowest.
///
/// Arity zero yields exactly one empty position in both modes. An empty domain with positive
/// arity yields nothing.
#[derive(Debug, Clone)]
pub struct Positions<'d> {
    domain: &'d [u32],
    mode: GenerationMode,

    /// Index into `domain` of every pile of the next position
    indices: Vec<usize>,

    state: State,

    /// Positions left to yield, `None` if the total does not fit in `usize`
    remaining: Option<usize>,
}

impl<'d> Positions<'d> {
    fn new(domain: &'d Domain, arity: usize, mode: GenerationMode) -> Self {
        let mut positions = Self {
            domain: domain.values(),
            mode,
            indices: vec![0; arity],
            state: State::Fresh,
            remaining: None,
        };
        positions.restart();
        positions
    }

    /// Rewind to the first position
    pub fn restart(&mut self) {
        self.indices.fill(0);
        self.state = State::Fresh;
        let total = match self.mode {
            GenerationMode::AllTuples => {
                crate::numeric::binomial::count_tuples(self.domain.len(), self.arity())
            }
            GenerationMode::UniqueCombinations => {
                crate::numeric::binomial::count_positions(self.domain.len(), self.arity())
            }
        };
        self.remaining = total.and_then(|total| usize::try_from(total).ok());
    }

    /// Number of piles of every generated position
    #[inline]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// Enumeration mode
    #[inline]
    pub const fn mode(&self) -> GenerationMode {
        self.mode
    }

    fn current(&self) -> Position {
        Position::new(self.indices.iter().map(|&i| self.domain[i]).collect())
    }

    /// Move indices to the next position, `false` once the last one was passed
    fn advance(&mut self) -> bool {
        let last = self.domain.len().saturating_sub(1);
        let Some(pivot) = self.indices.iter().rposition(|&i| i < last) else {
            return false;
        };
        self.indices[pivot] += 1;
        let reset_to = match self.mode {
            GenerationMode::AllTuples => 0,
            GenerationMode::UniqueCombinations => self.indices[pivot],
        };
        self.indices[pivot + 1..].fill(reset_to);
        true
    }
}

impl Iterator for Positions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                if self.domain.is_empty() && self.arity() > 0 {
                    self.state = State::Done;
                    return None;
                }
                self.state = State::Running;
            }
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.state, self.remaining) {
            (State::Done, _) => (0, Some(0)),
            (_, Some(remaining)) => (remaining, Some(remaining)),
            (_, None) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Positions<'_> {}
