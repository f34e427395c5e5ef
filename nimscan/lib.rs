//! Losing position enumeration for variants of Nim.
//!
//! Positions are drawn from a [`Domain`](crate::domain::Domain) by a lazy
//! [generator](crate::generator), narrowed by the [exclusion filter](crate::filter) and
//! classified by a [losing condition](crate::classify::LosingCondition). Two complete pipelines
//! are provided: [additive Nim](crate::games::additive) where losing positions have zero
//! nim-sum, and [multiplicative Nim](crate::games::multiplicative) where the product of piles is
//! congruent to one modulo a prime. Results of several runs can be compared with
//! [`Partition`](crate::partition::Partition).

#![warn(missing_docs)]

pub mod classify;
pub mod domain;
pub mod error;
pub mod filter;
pub mod games;
pub mod generator;
pub mod numeric;
pub mod partition;
pub mod position;

mod display;

pub use error::Error;
