/*!
# Claws

A *claw* is an induced star `K_{1,3}`: a center adjacent to three pairwise non-adjacent arms.
For every edge `{u, v}` the candidates for the two remaining arms of a claw centered at `u`
with arm `v` are `N(u) \ N(v) \ {v}`; any non-adjacent pair among them completes a claw.

The minimum claw-deletion edge set is computed by the
[`ClawDeletion`](crate::solve::ClawDeletion) solver.
*/

use std::collections::BTreeSet;

use itertools::Itertools;

use super::*;

/// An induced `K_{1,3}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Claw {
    /// Vertex adjacent to all arms
    pub center: Node,
    /// Three pairwise non-adjacent neighbors of the center
    pub arms: [Node; 3],
    /// Handles of the edges `{center, arms[i]}`
    pub edges: [EdgeId; 3],
}

/// All claws of a graph aggregated by center
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClawCollection {
    /// Every vertex that is the center of some claw
    pub centers: BTreeSet<Node>,
    /// Every `(center, arm)` pair of some claw
    pub arms: BTreeSet<(Node, Node)>,
}

impl ClawCollection {
    fn add(&mut self, center: Node, arms: [Node; 3]) {
        self.centers.insert(center);
        for arm in arms {
            self.arms.insert((center, arm));
        }
    }

    /// Returns *true* if no claw was recorded
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

/// Claw detection
pub trait ClawDetection: AdjacencyList + AdjacencyTest + EdgeLookup {
    /// Returns some claw of the graph, if any.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// let claw = star_graph(3).find_claw().unwrap();
    /// assert_eq!(claw.center, 0);
    /// assert!(cycle_graph(5).find_claw().is_none());
    /// ```
    fn find_claw(&self) -> Option<Claw> {
        if self.number_of_nodes() < 4 {
            return None;
        }
        self.vertices()
            .find_map(|v| claws_with_arm(self, v).next())
    }

    /// Returns *true* if the graph has no induced `K_{1,3}`
    fn is_claw_free(&self) -> bool {
        self.find_claw().is_none()
    }

    /// Collects the centers and `(center, arm)` pairs of all claws
    fn claws(&self) -> ClawCollection {
        let mut collection = ClawCollection::default();
        if self.number_of_nodes() < 4 {
            return collection;
        }
        for v in self.vertices() {
            for claw in claws_with_arm(self, v) {
                collection.add(claw.center, claw.arms);
            }
        }
        collection
    }
}

impl<G> ClawDetection for G where G: AdjacencyList + AdjacencyTest + EdgeLookup {}

/// All claws (with repetitions) whose first arm is `v`
fn claws_with_arm<G>(graph: &G, v: Node) -> impl Iterator<Item = Claw> + '_
where
    G: AdjacencyList + AdjacencyTest + EdgeLookup,
{
    graph.neighbors_of(v).flat_map(move |u| {
        let candidates = graph
            .neighbors_of(u)
            .filter(|&w| w != v && !graph.has_edge(v, w))
            .collect_vec();

        candidates
            .into_iter()
            .tuple_combinations()
            .filter(|&(x, y)| !graph.has_edge(x, y))
            .filter_map(move |(x, y)| {
                let arms = [v, x, y];
                let edges = [
                    graph.edge_between(u, v)?,
                    graph.edge_between(u, x)?,
                    graph.edge_between(u, y)?,
                ];
                Some(Claw {
                    center: u,
                    arms,
                    edges,
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn is_claw<G: AdjacencyTest>(graph: &G, claw: &Claw) -> bool {
        claw.arms.iter().all(|&a| graph.has_edge(claw.center, a))
            && graph.is_independent_set(claw.arms)
    }

    #[test]
    fn stars() {
        assert!(star_graph(2).is_claw_free());
        let claws = star_graph(4).claws();
        assert_eq!(claws.centers.into_iter().collect_vec(), vec![0]);
        assert_eq!(claws.arms.len(), 4);
    }

    #[test]
    fn claw_free_families() {
        assert!(complete_graph(6).is_claw_free());
        assert!(cycle_graph(8).is_claw_free());
        assert!(path_graph(8).is_claw_free());
        assert!(SimpleGraph::empty().claws().is_empty());
    }

    #[test]
    fn found_claws_are_claws() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        for _ in 0..100 {
            let g = random_gnp(rng, 10, 0.3);
            let collection = g.claws();
            match g.find_claw() {
                Some(claw) => {
                    assert!(is_claw(&g, &claw));
                    assert!(collection.centers.contains(&claw.center));
                    for (i, &e) in claw.edges.iter().enumerate() {
                        assert_eq!(
                            g.endpoints(e),
                            Some(Edge(claw.center, claw.arms[i]).normalized())
                        );
                    }
                }
                None => assert!(collection.is_empty()),
            }
        }
    }
}
