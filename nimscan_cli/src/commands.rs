pub mod additive;
pub mod compare;
pub mod multiplicative;

use tracing::warn;

/// Candidate sets above that size are worth a warning, they take a while to scan
const LARGE_CANDIDATE_COUNT: u128 = 10_000_000;

fn warn_if_large(candidates: Option<u128>) {
    match candidates {
        Some(count) if count <= LARGE_CANDIDATE_COUNT => {}
        Some(count) => warn!(count, "Scanning a large number of candidate positions"),
        None => warn!("Number of candidate positions does not fit in 128 bits"),
    }
}
