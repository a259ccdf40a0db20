/*!
# Induced Subgraphs

Iterates over all vertex-induced subgraphs of a graph ordered by their number of vertices.
Searches for the largest (or smallest) subgraph with some property simply take the first
match of a descending (or ascending) iteration.
*/

use super::*;

/// All induced subgraphs of a graph, grouped by order.
///
/// Every subgraph keeps the vertex handles of the parent graph.
///
/// # Example
/// ```
/// use grapher::{prelude::*, algo::*, gens::*};
///
/// let g = path_graph(3);
/// let largest_independent = InducedSubgraphs::descending(&g)
///     .unwrap()
///     .find(|sub| sub.is_edgeless())
///     .unwrap();
/// assert_eq!(largest_independent.vertices().collect::<Vec<_>>(), vec![0, 2]);
/// ```
pub struct InducedSubgraphs<'a> {
    graph: &'a SimpleGraph,
    subsets: Powerset<Node>,
}

impl<'a> InducedSubgraphs<'a> {
    /// Fails if the graph has more than [`MAX_MASK_ELEMENTS`] vertices
    pub fn new(graph: &'a SimpleGraph, order: SizeOrder) -> Result<Self> {
        Ok(Self {
            graph,
            subsets: Powerset::new(graph.vertices(), order)?,
        })
    }

    /// From the empty subgraph to the full graph
    pub fn ascending(graph: &'a SimpleGraph) -> Result<Self> {
        Self::new(graph, SizeOrder::Ascending)
    }

    /// From the full graph to the empty subgraph
    pub fn descending(graph: &'a SimpleGraph) -> Result<Self> {
        Self::new(graph, SizeOrder::Descending)
    }

    /// Number of vertices of the subgraphs currently produced
    pub fn current_order(&self) -> usize {
        self.subsets.current_size()
    }
}

impl Iterator for InducedSubgraphs<'_> {
    type Item = SimpleGraph;

    fn next(&mut self) -> Option<SimpleGraph> {
        let nodes = self.subsets.next()?;
        Some(self.graph.induced_subgraph(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_order() {
        let g = crate::gens::cycle_graph(5);
        let orders: Vec<NumNodes> = InducedSubgraphs::ascending(&g)
            .unwrap()
            .map(|sub| sub.number_of_nodes())
            .collect();
        assert_eq!(orders.len(), 32);
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));

        let mut desc = InducedSubgraphs::descending(&g).unwrap();
        let full = desc.next().unwrap();
        assert_eq!(full.ordered_edges(), g.ordered_edges());
        assert_eq!(desc.next().unwrap().number_of_edges(), 3);
        assert_eq!(desc.current_order(), 4);
    }

    #[test]
    fn empty_graph_has_one_subgraph() {
        let g = SimpleGraph::empty();
        assert_eq!(InducedSubgraphs::ascending(&g).unwrap().count(), 1);
    }

    #[test]
    fn too_many_vertices() {
        let g = SimpleGraph::new(64);
        assert!(InducedSubgraphs::ascending(&g).is_err());
    }
}
