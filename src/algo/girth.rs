use super::*;

/// Shortest cycles
pub trait Girth: AdjacencyList {
    /// Returns the length of a shortest cycle, or `None` if the graph is acyclic.
    ///
    /// From every root a BFS records hop distances and tree predecessors; every non-tree edge
    /// `{x, y}` closes a walk of length `dist(x) + dist(y) + 1`, and the minimum over all roots
    /// equals the girth.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// assert_eq!(cycle_graph(5).girth(), Some(5));
    /// assert_eq!(complete_graph(4).girth(), Some(3));
    /// assert_eq!(path_graph(5).girth(), None);
    /// ```
    fn girth(&self) -> Option<NumNodes> {
        let mut best: Option<NumNodes> = None;
        let mut dist: Vec<Option<NumNodes>> = vec![None; self.vertex_bound() as usize];

        for root in self.vertices() {
            dist.iter_mut().for_each(|d| *d = None);

            for visit in self.bfs(root) {
                let u = visit.node;
                dist[u as usize] = Some(visit.depth);

                for v in self.neighbors_of(u) {
                    if Some(v) == visit.predecessor {
                        continue;
                    }
                    if let Some(dv) = dist[v as usize] {
                        let length = visit.depth + dv + 1;
                        best = Some(best.map_or(length, |b| b.min(length)));
                    }
                }

                // walks closed later have length at least `2 * depth`
                if best.is_some_and(|b| 2 * visit.depth >= b) {
                    break;
                }
            }

            if best == Some(3) {
                break;
            }
        }

        best
    }

    /// Returns *true* if the graph contains no cycle (is a forest)
    fn is_acyclic(&self) -> bool {
        self.girth().is_none()
    }
}

impl<G> Girth for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn known_girths() {
        assert_eq!(SimpleGraph::empty().girth(), None);
        assert_eq!(complete_graph(3).girth(), Some(3));
        for n in 3..12 {
            assert_eq!(cycle_graph(n).girth(), Some(n));
        }
        assert!(star_graph(5).is_acyclic());

        // two cycles sharing a vertex
        let mut g = cycle_graph(6);
        let extra = g.add_vertices(3);
        g.add_edges([(0, extra[0]), (extra[0], extra[1]), (extra[1], extra[2]), (extra[2], 0)])
            .unwrap();
        assert_eq!(g.girth(), Some(4));
    }

    #[test]
    fn forest_iff_edges_match_components() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);
        for _ in 0..100 {
            let g = random_gnp(rng, 15, 0.12);
            let forest = g.number_of_edges() + g.number_of_connected_components()
                == g.number_of_nodes();
            assert_eq!(g.is_acyclic(), forest);
        }
    }
}
