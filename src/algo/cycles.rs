use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// Chordless cycles on four vertices
pub trait FourCycles: AdjacencyList + AdjacencyTest {
    /// Returns every induced `C4` exactly once as `[s, x, t, y]` (in cyclic order) where `s < t`
    /// is the first non-adjacent pair in handle order and `x < y` are their common neighbors.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// assert_eq!(cycle_graph(4).four_cycles(), vec![[0, 1, 2, 3]]);
    /// assert!(complete_graph(4).four_cycles().is_empty());
    /// ```
    fn four_cycles(&self) -> Vec<[Node; 4]> {
        let mut seen: FxHashSet<[Node; 4]> = FxHashSet::default();
        let mut cycles = Vec::new();
        if self.number_of_nodes() < 4 {
            return cycles;
        }

        let nodes = self.vertices().collect_vec();
        for (i, &s) in nodes.iter().enumerate() {
            let ns = self.neighbors_of_as_bitset(s);

            for &t in &nodes[i + 1..] {
                if self.has_edge(s, t) {
                    continue;
                }

                let common = self
                    .neighbors_of(t)
                    .filter(|&w| ns.get_bit(w))
                    .sorted_unstable()
                    .collect_vec();

                for (&x, &y) in common.iter().tuple_combinations() {
                    if self.has_edge(x, y) {
                        continue;
                    }
                    let mut key = [s, x, t, y];
                    key.sort_unstable();
                    if seen.insert(key) {
                        cycles.push([s, x, t, y]);
                    }
                }
            }
        }
        cycles
    }

    /// Returns *true* if the graph contains an induced `C4`
    fn has_four_cycle(&self) -> bool {
        !self.four_cycles().is_empty()
    }
}

impl<G> FourCycles for G where G: AdjacencyList + AdjacencyTest {}
