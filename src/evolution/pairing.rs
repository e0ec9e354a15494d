//! Mating pool construction.
//!
//! The pool is conceptually `parents × parents` in row-major order. The
//! engine never materializes it: [`pool_size`] and [`pair_at`] address the
//! same pairs by index. [`mating_pool`] builds it explicitly.

use crate::error::{EvolveError, Result};

/// Builds the full ordered mating pool `parents × parents`.
///
/// Every parent is paired with every parent, itself included, in row-major
/// order: `(p0, p0), (p0, p1), …, (p1, p0), …`. The pool has exactly
/// `parents.len()²` entries.
pub fn mating_pool<G>(parents: &[G]) -> Vec<(&G, &G)> {
    let mut pool = Vec::with_capacity(parents.len() * parents.len());
    for a in parents {
        for b in parents {
            pool.push((a, b));
        }
    }
    pool
}

/// Number of pairs in the mating pool of `parents` parents.
///
/// # Errors
/// [`EvolveError::Configuration`] if `parents²` overflows `usize`.
pub fn pool_size(parents: usize) -> Result<usize> {
    parents.checked_mul(parents).ok_or_else(|| {
        EvolveError::Configuration(format!("mating pool of {parents} parents overflows usize"))
    })
}

/// Returns the pair at `index` of the row-major mating pool.
///
/// Equal to `mating_pool(parents)[index]` without building the pool.
///
/// # Panics
/// Panics if `parents` is empty or `index >= parents.len()²`.
pub fn pair_at<G>(parents: &[G], index: usize) -> (&G, &G) {
    let k = parents.len();
    (&parents[index / k], &parents[index % k])
}
