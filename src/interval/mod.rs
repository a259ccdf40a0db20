/*!
# Interval Graphs

An integer-indexed graph representation ([`BasicGraph`]) together with the machinery to
recognize interval graphs:
- chordality via simplicial elimination and perfect elimination orderings from LexBFS,
- asteroidal triples (a graph is interval iff it is chordal and AT-free),
- maximal cliques and clique trees ([`CliqueTree`]),
- clique chains ([`CliqueChain`]), an ordering of the maximal cliques in which every vertex
  occupies a contiguous run.

[`IntervalRecognition`] answers the same questions for every graph of the crate, with results
expressed in the graph's own [`Node`] handles.

```
use grapher::{gens::*, interval::*};

assert!(star_graph(3).is_interval());
assert!(!cycle_graph(4).is_interval());

let chain = path_graph(4).clique_chain().unwrap().unwrap();
assert_eq!(chain, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);
```
*/

mod basic;
mod clique_chain;
mod clique_tree;
mod translate;

use crate::prelude::*;

pub use basic::*;
pub use clique_chain::*;
pub use clique_tree::*;
pub use translate::*;

/// Vertex identifier of a [`BasicGraph`]
pub type Vertex = u32;

/// A clique as a sorted list of vertices
pub type Clique = Vec<Vertex>;

/// Interval graph recognition for every graph of the crate
pub trait IntervalRecognition: AdjacencyList + Sized {
    /// Returns the lexicographically smallest asteroidal triple, if one exists
    fn asteroidal_triple(&self) -> Option<[Node; 3]> {
        let (basic, translation) = BasicGraph::from_simple(self);
        let [a, b, c] = basic.asteroidal_triple()?;
        Some([
            translation.node_of(a)?,
            translation.node_of(b)?,
            translation.node_of(c)?,
        ])
    }

    /// Returns *true* if no three vertices form an asteroidal triple
    fn is_at_free(&self) -> bool {
        BasicGraph::from_simple(self).0.is_at_free()
    }

    /// Returns *true* if the graph is the intersection graph of intervals on a line
    fn is_interval(&self) -> bool {
        BasicGraph::from_simple(self).0.is_interval()
    }

    /// Returns a clique chain of the graph, or `None` if the graph is not an interval graph
    fn clique_chain(&self) -> Result<Option<Vec<Vec<Node>>>> {
        let (basic, translation) = BasicGraph::from_simple(self);
        let Some(chain) = CliqueChain::of_graph(&basic)? else {
            return Ok(None);
        };
        Ok(Some(
            chain
                .iter()
                .map(|clique| translation.nodes_of(clique))
                .collect(),
        ))
    }
}

impl<G> IntervalRecognition for G where G: AdjacencyList {}

/// Sorted intersection of two sorted vertex lists
pub(crate) fn intersection(first: &[Vertex], second: &[Vertex]) -> Vec<Vertex> {
    let (mut i, mut j) = (0, 0);
    let mut result = Vec::new();
    while i < first.len() && j < second.len() {
        match first[i].cmp(&second[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                result.push(first[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;

    #[test]
    fn recognition_on_simple_graphs() {
        assert!(complete_graph(4).is_interval());
        assert!(path_graph(6).is_interval());
        assert!(star_graph(3).is_interval());
        assert!(SimpleGraph::new(0).is_interval());

        let c4 = cycle_graph(4);
        assert!(c4.is_at_free());
        assert!(!c4.is_interval());

        assert_eq!(cycle_graph(6).asteroidal_triple(), Some([0, 2, 4]));
    }

    #[test]
    fn asteroidal_triple_in_handles() {
        // subdivided claw on handles shifted by a removed vertex
        let mut graph = SimpleGraph::from_edges(
            8,
            [(1, 2), (2, 3), (1, 4), (4, 5), (1, 6), (6, 7)],
        )
        .unwrap();
        graph.remove_vertex(0).unwrap();
        assert_eq!(graph.asteroidal_triple(), Some([3, 5, 7]));
        assert!(!graph.is_interval());
        assert_eq!(graph.clique_chain().unwrap(), None);
    }

    #[test]
    fn clique_chain_with_gaps() {
        let mut graph = path_graph(4);
        graph.remove_vertex(1).unwrap();
        let chain = graph.clique_chain().unwrap().unwrap();
        assert_eq!(chain, vec![vec![0], vec![2, 3]]);
    }

    #[test]
    fn sorted_intersection() {
        assert_eq!(intersection(&[0, 2, 4, 6], &[1, 2, 3, 6]), vec![2, 6]);
        assert!(intersection(&[], &[1]).is_empty());
    }
}
