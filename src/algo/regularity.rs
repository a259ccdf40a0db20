/*!
# Regularity

A graph is `k`-regular if every vertex has degree `k`. It is *strongly regular* with
parameters `srg(n, k, λ, μ)` if moreover every pair of adjacent vertices has exactly `λ`
common neighbors and every pair of non-adjacent vertices has exactly `μ` common neighbors.
*/

use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Parameters certifying a strongly regular graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StronglyRegular {
    /// Number of vertices
    pub n: NumNodes,
    /// Degree of every vertex
    pub k: NumNodes,
    /// Common neighbors of every adjacent pair
    pub lambda: NumNodes,
    /// Common neighbors of every non-adjacent pair
    pub mu: NumNodes,
}

impl Display for StronglyRegular {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "srg({}, {}, {}, {})", self.n, self.k, self.lambda, self.mu)
    }
}

/// Smallest order for which a strongly regular witness is reported (`C5` is the smallest
/// non-trivial strongly regular graph)
pub const MIN_STRONGLY_REGULAR_ORDER: NumNodes = 5;

/// Regularity queries
pub trait Regularity: AdjacencyList + AdjacencyTest {
    /// Returns the common degree of all vertices, or `None` if degrees differ.
    /// The empty graph is `0`-regular.
    fn regularity(&self) -> Option<NumNodes> {
        let mut degrees = self.degrees();
        let Some(first) = degrees.next() else {
            return Some(0);
        };
        degrees.all(|d| d == first).then_some(first)
    }

    /// Returns *true* if all vertices have the same degree
    fn is_regular(&self) -> bool {
        self.regularity().is_some()
    }

    /// Returns the parameters `srg(n, k, λ, μ)` if the graph is strongly regular.
    ///
    /// Graphs with fewer than [`MIN_STRONGLY_REGULAR_ORDER`] vertices as well as complete and
    /// edgeless graphs (where `λ` or `μ` is not defined) yield `None`.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// let srg = cycle_graph(5).strongly_regular().unwrap();
    /// assert_eq!(srg.to_string(), "srg(5, 2, 0, 1)");
    /// assert!(cycle_graph(6).strongly_regular().is_none());
    /// ```
    fn strongly_regular(&self) -> Option<StronglyRegular> {
        let n = self.number_of_nodes();
        if n < MIN_STRONGLY_REGULAR_ORDER {
            return None;
        }
        let k = self.regularity()?;

        let neighborhoods = self
            .vertices()
            .map(|u| (u, self.neighbors_of_as_bitset(u)))
            .collect_vec();

        let mut lambda = None;
        let mut mu = None;
        for ((u, nu), (v, nv)) in neighborhoods.iter().tuple_combinations() {
            let common = nu.iter_set_bits().filter(|&w| nv.get_bit(w)).count() as NumNodes;
            let slot = if self.has_edge(*u, *v) {
                &mut lambda
            } else {
                &mut mu
            };
            match *slot {
                None => *slot = Some(common),
                Some(c) if c != common => return None,
                _ => {}
            }
        }

        Some(StronglyRegular {
            n,
            k,
            lambda: lambda?,
            mu: mu?,
        })
    }
}

impl<G> Regularity for G where G: AdjacencyList + AdjacencyTest {}
