/*!
# Cut Vertices and Bridges

A vertex (edge) is a cut vertex (bridge) if removing it strictly increases the number of
connected components. Both are found by removing each candidate in turn and recounting the
components, which takes `O(|V| (|V| + |E|))` resp. `O(|E| (|V| + |E|))` time. Removal is
simulated by the component search; the graph itself is never modified.

Only vertices of degree at least two can be cut vertices, so others are skipped.
*/

use super::*;

/// Cut vertices and bridges
pub trait CutsAndBridges: AdjacencyList + EdgeLookup {
    /// Returns *true* if removing `u` increases the number of components.
    /// ** Panics if `u` is not a vertex **
    fn is_cut_vertex(&self, u: Node) -> bool {
        self.degree_of(u) >= 2
            && self.number_of_components_without_node(u) > self.number_of_connected_components()
    }

    /// Returns the first cut vertex (in handle order) if any
    fn find_cut_vertex(&self) -> Option<Node> {
        let components = self.number_of_connected_components();
        self.vertices().find(|&u| {
            self.degree_of(u) >= 2 && self.number_of_components_without_node(u) > components
        })
    }

    /// Returns all cut vertices in handle order.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// assert_eq!(path_graph(4).find_all_cut_vertices(), vec![1, 2]);
    /// assert!(cycle_graph(4).find_all_cut_vertices().is_empty());
    /// ```
    fn find_all_cut_vertices(&self) -> Vec<Node> {
        let components = self.number_of_connected_components();
        self.vertices()
            .filter(|&u| {
                self.degree_of(u) >= 2 && self.number_of_components_without_node(u) > components
            })
            .collect()
    }

    /// Returns *true* if removing the edge increases the number of components
    fn is_bridge(&self, e: EdgeId) -> bool {
        self.endpoints(e).is_some_and(|edge| {
            self.number_of_components_without_edge(edge) > self.number_of_connected_components()
        })
    }

    /// Returns the first bridge (in edge handle order) if any
    fn find_bridge(&self) -> Option<EdgeId> {
        let components = self.number_of_connected_components();
        self.edges_with_ids()
            .find(|&(_, edge)| self.number_of_components_without_edge(edge) > components)
            .map(|(e, _)| e)
    }

    /// Returns all bridges in edge handle order.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// let g = path_graph(4);
    /// assert_eq!(g.find_all_bridges().len(), 3);
    /// ```
    fn find_all_bridges(&self) -> Vec<EdgeId> {
        let components = self.number_of_connected_components();
        self.edges_with_ids()
            .filter(|&(_, edge)| self.number_of_components_without_edge(edge) > components)
            .map(|(e, _)| e)
            .collect()
    }
}

impl<G> CutsAndBridges for G where G: AdjacencyList + EdgeLookup {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn single_edge() {
        let g = path_graph(2);
        let e = g.edge_between(0, 1).unwrap();
        assert_eq!(g.find_bridge(), Some(e));
        assert!(g.is_bridge(e));
        assert_eq!(g.find_cut_vertex(), None);
    }

    #[test]
    fn triangle_and_path() {
        let k3 = complete_graph(3);
        assert_eq!(k3.find_cut_vertex(), None);
        assert_eq!(k3.find_bridge(), None);

        let p4 = path_graph(4);
        assert_eq!(p4.find_all_cut_vertices(), vec![1, 2]);
        assert_eq!(
            p4.find_all_bridges()
                .into_iter()
                .filter_map(|e| p4.endpoints(e))
                .collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn bowtie() {
        let mut g = complete_graph(3);
        let extra = g.add_vertices(2);
        g.add_edges([(0, extra[0]), (0, extra[1]), (extra[0], extra[1])])
            .unwrap();

        assert_eq!(g.find_all_cut_vertices(), vec![0]);
        assert!(g.find_all_bridges().is_empty());
    }

    #[test]
    fn first_and_all_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for _ in 0..60 {
            let g = random_gnp(rng, 12, 0.2);
            let all_cuts = g.find_all_cut_vertices();
            assert_eq!(g.find_cut_vertex(), all_cuts.first().copied());

            let components = g.number_of_connected_components();
            for &u in &all_cuts {
                let mut h = g.clone();
                h.remove_vertex(u).unwrap();
                assert!(h.number_of_connected_components() > components);
            }

            let all_bridges = g.find_all_bridges();
            assert_eq!(g.find_bridge(), all_bridges.first().copied());
            for (e, _) in g.edges_with_ids() {
                let mut h = g.clone();
                h.remove_edge_by_id(e);
                assert_eq!(
                    h.number_of_connected_components() > components,
                    all_bridges.contains(&e)
                );
            }
        }
    }
}
