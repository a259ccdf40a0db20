/*!
# Translation

Conversion between [`BasicGraph`] and the handle-based graphs of the crate. Both directions
number the vertices densely in ascending order and return the [`Translation`] between the two
identifier spaces.
*/

use fxhash::FxHashMap;

use super::*;

/// Bijection between [`Node`] handles and [`BasicGraph`] vertices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    to_vertex: FxHashMap<Node, Vertex>,
    to_node: FxHashMap<Vertex, Node>,
}

impl Translation {
    fn insert(&mut self, u: Node, v: Vertex) {
        self.to_vertex.insert(u, v);
        self.to_node.insert(v, u);
    }

    pub fn len(&self) -> usize {
        self.to_vertex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_vertex.is_empty()
    }

    /// Vertex of the [`BasicGraph`] representing `u`
    pub fn vertex_of(&self, u: Node) -> Option<Vertex> {
        self.to_vertex.get(&u).copied()
    }

    /// Handle represented by vertex `v`
    pub fn node_of(&self, v: Vertex) -> Option<Node> {
        self.to_node.get(&v).copied()
    }

    /// Translates vertices to handles, skipping unknown ones
    pub fn nodes_of(&self, vertices: &[Vertex]) -> Vec<Node> {
        vertices.iter().filter_map(|&v| self.node_of(v)).collect()
    }

    /// Translates handles to vertices, skipping unknown ones
    pub fn vertices_of(&self, nodes: &[Node]) -> Vec<Vertex> {
        nodes.iter().filter_map(|&u| self.vertex_of(u)).collect()
    }
}

impl BasicGraph {
    /// Copies `graph`; its `i`-th vertex in handle order becomes vertex `i`
    pub fn from_simple<G>(graph: &G) -> (Self, Translation)
    where
        G: AdjacencyList,
    {
        let mut translation = Translation::default();
        let mut basic = BasicGraph::new();
        for (v, u) in (0..).zip(graph.vertices()) {
            translation.insert(u, v);
            basic.insert_vertex(v);
        }

        for Edge(u, w) in graph.edges() {
            if let (Some(a), Some(b)) = (translation.vertex_of(u), translation.vertex_of(w)) {
                basic.link(a, b);
            }
        }
        (basic, translation)
    }

    /// Copies the graph into a [`SimpleGraph`]; its `i`-th vertex in ascending order becomes
    /// handle `i`
    pub fn to_simple(&self) -> (SimpleGraph, Translation) {
        let vertices = self.vertices();
        let mut translation = Translation::default();
        for (u, &v) in (0..).zip(&vertices) {
            translation.insert(u, v);
        }

        let mut graph = SimpleGraph::new(vertices.len() as NumNodes);
        for (a, b) in self.edges() {
            if let (Some(u), Some(w)) = (translation.node_of(a), translation.node_of(b)) {
                graph.link(u, w);
            }
        }
        (graph, translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::*, gens::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn from_simple_with_gaps() {
        let mut graph = SimpleGraph::from_edges(5, [(0, 1), (1, 3), (3, 4)]).unwrap();
        graph.remove_vertex(2).unwrap();

        let (basic, translation) = BasicGraph::from_simple(&graph);
        assert_eq!(basic.vertices(), vec![0, 1, 2, 3]);
        assert_eq!(basic.edges(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(basic.size(), graph.number_of_edges() as usize);
        assert!(basic.is_adjacent(2, 1));
        assert_eq!(translation.len(), 4);
        assert_eq!(translation.vertex_of(3), Some(2));
        assert_eq!(translation.vertex_of(2), None);
        assert_eq!(translation.node_of(3), Some(4));
        assert_eq!(translation.nodes_of(&[0, 2, 9]), vec![0, 3]);
        assert_eq!(translation.vertices_of(&[4, 1]), vec![3, 1]);
    }

    #[test]
    fn to_simple_with_gaps() {
        let basic = BasicGraph::from_edges([(10, 20), (20, 5)]).unwrap();
        let (graph, translation) = basic.to_simple();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(translation.node_of(5), Some(0));
        assert_eq!(translation.node_of(20), Some(2));
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn chordality_agrees_with_simple_graphs() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xba51c);
        for _ in 0..100 {
            let graph = random_gnp(&mut rng, 9, 0.35);
            let (basic, _) = BasicGraph::from_simple(&graph);
            assert_eq!(basic.order(), graph.len());
            assert_eq!(basic.size(), graph.number_of_edges() as usize);
            assert_eq!(basic.is_chordal(), graph.is_chordal());
            assert_eq!(basic.is_connected(), graph.is_connected());

            let (back, _) = basic.to_simple();
            assert_eq!(back.ordered_edges(), graph.ordered_edges());
        }
    }
}
