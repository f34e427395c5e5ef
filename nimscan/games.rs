//! Complete losing position pipelines: domain, generation, exclusion and classification

pub mod additive;
pub mod multiplicative;

use crate::position::Position;

/// Outcome of a single pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Number of candidate positions produced by the generator
    pub generated: usize,

    /// Number of candidates that survived exclusion
    pub filtered: usize,

    /// Losing positions, in generation order
    pub losing: Vec<Position>,
}
