/*!
# Bipartite Graphs

Tests whether a graph is bipartite and computes a bipartition via BFS 2-coloring of every
connected component. The search stops at the first edge whose endpoints receive the same
color.
*/

use super::*;

/// Testing and computing bipartitions.
///
/// A bipartition is represented by one of its sides as [`NodeBitSet`]; all vertices not in the
/// set form the other side.
pub trait BipartiteTest: AdjacencyList {
    /// Returns *true* if no edge has both endpoints on the same side.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// let g = path_graph(4);
    /// assert!(g.is_bipartition(&node_bitset_of(4, [0, 2])));
    /// assert!(!g.is_bipartition(&node_bitset_of(4, [0, 1])));
    /// ```
    fn is_bipartition(&self, side: &NodeBitSet) -> bool {
        self.edges()
            .all(|Edge(u, v)| side.get_bit(u) != side.get_bit(v))
    }

    /// Computes one side of a bipartition, or `None` if the graph is not bipartite.
    /// The empty graph yields an empty side.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// let side = path_graph(10).compute_bipartition().unwrap();
    /// assert_eq!(side.cardinality(), 5);
    /// assert!(cycle_graph(5).compute_bipartition().is_none());
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet> {
        let mut colors: Vec<Option<bool>> = vec![None; self.vertex_bound() as usize];

        for root in self.vertices() {
            if colors[root as usize].is_some() {
                continue;
            }

            for visit in self.bfs(root) {
                let u = visit.node;
                let color = match visit.predecessor {
                    Some(p) => colors[p as usize].map(|c| !c).unwrap_or(false),
                    None => false,
                };
                colors[u as usize] = Some(color);

                if self
                    .neighbors_of(u)
                    .any(|v| colors[v as usize] == Some(color))
                {
                    return None;
                }
            }
        }

        let mut side = self.vertex_bitset_unset();
        side.set_bits(self.vertices().filter(|&u| colors[u as usize] == Some(true)));
        Some(side)
    }

    /// Returns both sides of a bipartition as sorted vertex lists
    fn bipartition_sides(&self) -> Option<(Vec<Node>, Vec<Node>)> {
        let side = self.compute_bipartition()?;
        Some(self.vertices().partition(|&u| !side.get_bit(u)))
    }

    /// Returns *true* if the graph is bipartite
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn small_cases() {
        let empty = SimpleGraph::empty();
        let side = empty.compute_bipartition().unwrap();
        assert_eq!(side.cardinality(), 0);

        assert!(complete_graph(2).is_bipartite());
        assert!(!complete_graph(3).is_bipartite());
        assert!(cycle_graph(6).is_bipartite());
        assert!(!cycle_graph(7).is_bipartite());

        let (left, right) = star_graph(4).bipartition_sides().unwrap();
        assert_eq!(left, vec![0]);
        assert_eq!(right, vec![1, 2, 3, 4]);
    }

    #[test]
    fn bipartite_iff_two_colorable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in 1..9 {
            for _ in 0..40 {
                let g = random_gnp(rng, n, 0.3);
                let brute = brute_force_colorable(&g, 2);
                assert_eq!(g.is_bipartite(), brute);

                if let Some(side) = g.compute_bipartition() {
                    assert!(g.is_bipartition(&side));
                }
            }
        }
    }
}
