/*!
# Utilities

Combinatorial building blocks shared by the exact solvers:
- [`Combinations`] / [`SubsetMasks`]: all `k`-subsets of an `n`-element input,
- [`Powerset`]: all subsets ordered by size (ascending or descending),
- [`Permutations`]: all permutations via a factorial-base counter,
- [`SubsetIndex`]: a bijection between vertices and bit positions (and thus between vertex
  sets and integer masks),
- exact counting helpers such as [`binomial`] and [`factorial`].
*/

use num::{One, Zero};

use crate::prelude::*;

pub mod counting;
pub mod permutations;
pub mod subset_index;
pub mod subsets;

pub use counting::*;
pub use permutations::Permutations;
pub use subset_index::*;
pub use subsets::*;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
