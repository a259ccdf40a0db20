/*!
# Chordal Graphs

A vertex is *simplicial* if its open neighborhood is a clique. A graph is chordal iff it can
be reduced completely by repeatedly removing simplicial vertices; the removal order is a
*perfect elimination ordering* (PEO).
*/

use itertools::Itertools;

use super::*;

/// Simplicial vertices, chordality and perfect elimination orderings
pub trait Chordal: AdjacencyList + AdjacencyTest {
    /// Returns *true* if the neighborhood of `u` is a clique.
    /// ** Panics if `u` is not a vertex **
    fn is_simplicial(&self, u: Node) -> bool {
        self.is_clique(self.neighbors_of(u))
    }

    /// Returns all simplicial vertices in handle order
    fn simplicial_vertices(&self) -> Vec<Node> {
        self.vertices().filter(|&u| self.is_simplicial(u)).collect()
    }

    /// Returns *true* if every cycle of length at least four has a chord.
    ///
    /// All simplicial vertices are removed round by round until at most three vertices are left
    /// (always chordal) or no vertex is simplicial (not chordal).
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// assert!(complete_graph(5).is_chordal());
    /// assert!(path_graph(6).is_chordal());
    /// assert!(!cycle_graph(4).is_chordal());
    /// ```
    fn is_chordal(&self) -> bool {
        let mut alive = self.vertex_bitset_set();
        let mut remaining = self.number_of_nodes();

        while remaining > 3 {
            let simplicial = alive
                .iter_set_bits()
                .filter(|&u| is_simplicial_within(self, &alive, u))
                .collect_vec();
            if simplicial.is_empty() {
                return false;
            }
            for u in simplicial {
                alive.clear_bit(u);
                remaining -= 1;
            }
        }
        true
    }

    /// Returns a perfect elimination ordering, or `None` if the graph is not chordal.
    /// In each step the simplicial vertex with the smallest handle is eliminated.
    fn perfect_elimination_ordering(&self) -> Option<Vec<Node>> {
        let mut alive = self.vertex_bitset_set();
        let mut order = Vec::with_capacity(self.len());

        while order.len() < self.len() {
            let u = alive
                .iter_set_bits()
                .find(|&u| is_simplicial_within(self, &alive, u))?;
            alive.clear_bit(u);
            order.push(u);
        }
        Some(order)
    }

    /// Returns *true* if `order` is a perfect elimination ordering of all vertices
    fn is_perfect_elimination_ordering(&self, order: &[Node]) -> bool {
        if order.len() != self.len() || order.iter().any(|&u| !self.has_vertex(u)) {
            return false;
        }

        let mut alive = self.vertex_bitset_set();
        for &u in order {
            if !alive.get_bit(u) || !is_simplicial_within(self, &alive, u) {
                return false;
            }
            alive.clear_bit(u);
        }
        true
    }
}

impl<G> Chordal for G where G: AdjacencyList + AdjacencyTest {}

/// Simplicial test in the subgraph induced by `alive`
fn is_simplicial_within<G>(graph: &G, alive: &NodeBitSet, u: Node) -> bool
where
    G: AdjacencyList + AdjacencyTest,
{
    let neighbors = graph.neighbors_of(u).filter(|&v| alive.get_bit(v)).collect_vec();
    neighbors
        .iter()
        .tuple_combinations()
        .all(|(&v, &w)| graph.has_edge(v, w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn small_graphs() {
        assert!(SimpleGraph::empty().is_chordal());
        assert!(cycle_graph(3).is_chordal());
        for n in 4..10 {
            assert!(!cycle_graph(n).is_chordal());
            assert_eq!(cycle_graph(n).perfect_elimination_ordering(), None);
        }

        let mut c4 = cycle_graph(4);
        c4.add_edge(0, 2).unwrap();
        assert!(c4.is_chordal());
        assert_eq!(c4.simplicial_vertices(), vec![1, 3]);
    }

    #[test]
    fn peo_iff_chordal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        for n in 1..12 {
            for _ in 0..30 {
                let g = random_gnp(rng, n, 0.4);
                let peo = g.perfect_elimination_ordering();
                assert_eq!(peo.is_some(), g.is_chordal());
                if let Some(peo) = peo {
                    assert!(g.is_perfect_elimination_ordering(&peo));
                }
            }
        }
    }

    #[test]
    fn invalid_orderings() {
        let g = path_graph(3);
        assert!(g.is_perfect_elimination_ordering(&[0, 1, 2]));
        assert!(!g.is_perfect_elimination_ordering(&[1, 0, 2]));
        assert!(!g.is_perfect_elimination_ordering(&[0, 1]));
    }
}
