/*!
# Eulerian Graphs

Every vertex of an Eulerian graph has even degree. Only the degree condition is checked,
connectivity of the edge set is left to the caller.
*/

use super::*;

/// Degree parity queries
pub trait Eulerian: AdjacencyList {
    /// Returns *true* if every vertex has even degree (vacuously true for the empty graph).
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// assert!(cycle_graph(5).is_eulerian());
    /// assert!(!path_graph(2).is_eulerian());
    /// assert!(SimpleGraph::empty().is_eulerian());
    /// ```
    fn is_eulerian(&self) -> bool {
        self.degrees().all(|d| d % 2 == 0)
    }

    /// Returns all vertices of odd degree in handle order
    fn odd_degree_vertices(&self) -> Vec<Node> {
        self.vertices()
            .filter(|&u| self.degree_of(u) % 2 == 1)
            .collect()
    }
}

impl<G> Eulerian for G where G: AdjacencyList {}
