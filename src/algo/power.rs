/*!
# Graph Powers

The `k`-th power of a graph has the same vertices and connects two vertices iff their
distance is at most `k` in the original graph.
*/

use super::*;

/// Default number of hops of a [`PowerGraph`]
pub const DEFAULT_POWER_HOPS: NumNodes = 2;

/// Builder for graph powers.
///
/// # Example
/// ```
/// use grapher::{prelude::*, algo::*, gens::*};
///
/// let square = PowerGraph::new().build(&cycle_graph(5));
/// assert_eq!(square.number_of_edges(), 10);
///
/// let cube = PowerGraph::new().with_hops(3).build(&path_graph(5));
/// assert!(cube.has_edge(0, 3));
/// assert!(!cube.has_edge(0, 4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PowerGraph {
    hops: NumNodes,
}

impl Default for PowerGraph {
    fn default() -> Self {
        Self {
            hops: DEFAULT_POWER_HOPS,
        }
    }
}

impl PowerGraph {
    /// Power graph builder with [`DEFAULT_POWER_HOPS`] hops
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum distance of adjacent vertices
    pub fn set_hops(&mut self, hops: NumNodes) {
        self.hops = hops;
    }

    /// Sets the maximum distance of adjacent vertices
    pub fn with_hops(mut self, hops: NumNodes) -> Self {
        self.set_hops(hops);
        self
    }

    /// Number of hops of the builder
    pub fn hops(&self) -> NumNodes {
        self.hops
    }

    /// Builds the power of `graph`. The result keeps the vertex handles of `graph`; all edges
    /// are new.
    pub fn build<G>(&self, graph: &G) -> SimpleGraph
    where
        G: AdjacencyList,
    {
        let mut power = SimpleGraph::new(graph.vertex_bound());
        for u in 0..graph.vertex_bound() {
            if !graph.has_vertex(u) {
                power.try_remove_vertex(u);
            }
        }

        for u in graph.vertices() {
            for v in graph.open_neighborhood_within(u, self.hops).iter_set_bits() {
                if u < v {
                    power.link(u, v);
                }
            }
        }
        power
    }
}
