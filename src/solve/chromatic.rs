/*!
# Chromatic Number

Inclusion–exclusion algorithm of Björklund and Husfeldt: a graph is `k`-colorable iff

```text
    c_k = Σ_{S ⊆ V} (-1)^{|S|} · a(V \ S)^k  >  0
```

where `a(X)` is the number of non-empty independent sets of `G[X]`. The sums are exact
[`BigInt`]s since the terms are huge and cancel out.

Independent sets are counted by branching on a vertex `v` of degree at least three,
`i(G) = i(G - v) + i(G - N[v])`, until the maximum degree is at most two. Then every component is
a path or a cycle whose number of independent sets is a Fibonacci resp. Lucas number.
*/

use num::{BigInt, One, Signed, Zero};
use tracing::{debug, trace};

use crate::algo::BipartiteTest;

use super::*;

/// Counts independent sets (including the empty set) of induced subgraphs given as masks
#[derive(Debug, Clone)]
pub struct IndependentSetCounter {
    neighbors: Vec<SubsetMask>,
    fib: Vec<u64>,
}

impl IndependentSetCounter {
    /// Indexes all vertices of `graph`.
    /// Fails if the graph has more than [`MAX_MASK_VERTICES`] vertices.
    pub fn new(graph: &SimpleGraph) -> Result<Self> {
        let index = SubsetIndex::of_graph(graph)?;
        Ok(Self::with_index(graph, &index))
    }

    pub fn with_index(graph: &SimpleGraph, index: &SubsetIndex) -> Self {
        // fib[c] is the number of independent sets of a path on c vertices
        let mut fib = vec![1u64, 2];
        while fib.len() <= index.len() {
            let c = fib.len();
            fib.push(fib[c - 1] + fib[c - 2]);
        }

        Self {
            neighbors: index.neighborhood_masks(graph),
            fib,
        }
    }

    /// Number of independent sets of the subgraph induced by `mask`
    pub fn count(&self, mask: SubsetMask) -> u64 {
        let mut total = 0;
        let mut pending = vec![mask];

        while let Some(mask) = pending.pop() {
            let branch = MaskBits::new(mask)
                .find(|&v| (self.neighbors[v] & mask).count_ones() > 2);

            match branch {
                Some(v) => {
                    let without = mask & !(1 << v);
                    pending.push(without);
                    pending.push(without & !self.neighbors[v]);
                }
                None => total += self.count_paths_and_cycles(mask),
            }
        }
        total
    }

    /// Requires maximum degree at most two within `mask`
    fn count_paths_and_cycles(&self, mut mask: SubsetMask) -> u64 {
        let mut product = 1;
        while mask != 0 {
            let start = mask.trailing_zeros() as usize;
            let mut component: SubsetMask = 1 << start;
            let mut frontier = component;
            while frontier != 0 {
                let v = frontier.trailing_zeros() as usize;
                frontier &= frontier - 1;
                let fresh = self.neighbors[v] & mask & !component;
                component |= fresh;
                frontier |= fresh;
            }
            mask &= !component;

            let size = component.count_ones() as usize;
            let is_cycle = size >= 3
                && MaskBits::new(component)
                    .all(|v| (self.neighbors[v] & component).count_ones() == 2);

            product *= if is_cycle {
                self.fib[size - 1] + self.fib[size - 3]
            } else {
                self.fib[size]
            };
        }
        product
    }
}

/// Computes the chromatic number.
///
/// Graphs without vertices have chromatic number `0`, edgeless graphs `1` and bipartite graphs
/// `2`. All other graphs must have at most [`MAX_MASK_VERTICES`] vertices, and the running time
/// grows as `O(2^n)` BigInt operations per color count.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let mut solver = ChromaticNumber::new(&complete_graph(4));
/// assert_eq!(solver.solve(&Control::new()).unwrap(), Outcome::Found(4));
/// ```
#[derive(Debug, Clone)]
pub struct ChromaticNumber {
    graph: SimpleGraph,
}

impl ChromaticNumber {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    /// Fast paths that do not need inclusion–exclusion
    fn trivial_bound(&self) -> Option<NumNodes> {
        if self.graph.is_empty() {
            Some(0)
        } else if self.graph.is_edgeless() {
            Some(1)
        } else if self.graph.is_bipartite() {
            Some(2)
        } else {
            None
        }
    }

    /// Returns `c_k` for all `k` in `0..=n`, or `None` if cancelled
    fn cover_counts(&self, index: &SubsetIndex, control: &Control) -> Result<Option<Vec<BigInt>>> {
        let n = index.len();
        let counter = IndependentSetCounter::with_index(&self.graph, index);
        let full = index.full_mask();

        let mut sums = vec![BigInt::zero(); n + 1];
        let mut progress = control.progress(n as u64 + 1);

        for size in 0..=n {
            if control.is_cancelled() {
                return Ok(None);
            }
            trace!(size, "chromatic number: subsets removed");

            let negative = size % 2 == 1;
            for (i, removed) in index.subsets_of_size(size)?.enumerate() {
                if i % 1024 == 1023 && control.is_cancelled() {
                    return Ok(None);
                }

                let nonempty = counter.count(full & !removed) - 1;
                if nonempty == 0 {
                    continue;
                }

                let base = BigInt::from(nonempty);
                let mut power = BigInt::one();
                for sum in sums.iter_mut().skip(1) {
                    power *= &base;
                    if negative {
                        *sum -= &power;
                    } else {
                        *sum += &power;
                    }
                }
            }
            progress.advance(1);
        }

        progress.finish();
        Ok(Some(sums))
    }
}

impl Solver for ChromaticNumber {
    type Output = NumNodes;

    fn solve(&mut self, control: &Control) -> Result<Outcome<NumNodes>> {
        debug!(
            n = self.graph.number_of_nodes(),
            m = self.graph.number_of_edges(),
            "chromatic number started"
        );

        if let Some(chi) = self.trivial_bound() {
            control.progress(1).finish();
            debug!(chi, "chromatic number by fast path");
            return Ok(Outcome::Found(chi));
        }

        let index = SubsetIndex::of_graph(&self.graph)?;
        let Some(sums) = self.cover_counts(&index, control)? else {
            debug!("chromatic number cancelled");
            return Ok(Outcome::Cancelled);
        };

        // not bipartite, so 3 <= chi <= n
        let (mut lower, mut upper) = (3, index.len());
        while lower < upper {
            let mid = (lower + upper) / 2;
            if sums[mid].is_positive() {
                upper = mid;
            } else {
                lower = mid + 1;
            }
        }

        debug!(chi = lower, "chromatic number finished");
        Ok(Outcome::Found(lower as NumNodes))
    }
}
