/*!
# Graph Generators

This module provides deterministic graph families, substructures that can be added to an
existing graph, and a builder for random `G(n,p)` graphs.

- [`path_graph`], [`cycle_graph`], [`complete_graph`], [`star_graph`] create the classical
  families on vertices `0..n`,
- [`disjoint_union`] places two graphs side by side,
- [`GeneratorSubstructures`] adds paths, cycles and cliques to any editable graph,
- [`Gnp`] and [`random_gnp`] draw Erdős–Rényi graphs.

```rust
use grapher::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(3);
let g = random_gnp(rng, 10, 0.5);
assert_eq!(g.number_of_nodes(), 10);

let k4 = complete_graph(4);
assert_eq!(k4.number_of_edges(), 6);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Path `0 - 1 - ... - (n-1)`
pub fn path_graph(n: NumNodes) -> SimpleGraph {
    let mut g = SimpleGraph::new(n);
    for u in 1..n {
        g.link(u - 1, u);
    }
    g
}

/// Cycle `0 - 1 - ... - (n-1) - 0`. For `n < 3` this is a path as parallel edges and
/// self-loops are not allowed.
pub fn cycle_graph(n: NumNodes) -> SimpleGraph {
    let mut g = path_graph(n);
    if n >= 3 {
        g.link(n - 1, 0);
    }
    g
}

/// Complete graph `K_n`
pub fn complete_graph(n: NumNodes) -> SimpleGraph {
    let mut g = SimpleGraph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            g.link(u, v);
        }
    }
    g
}

/// Star `K_{1,arms}` with center `0` and leaves `1..=arms`
pub fn star_graph(arms: NumNodes) -> SimpleGraph {
    let mut g = SimpleGraph::new(arms + 1);
    for u in 1..=arms {
        g.link(0, u);
    }
    g
}

/// Disjoint union of two graphs.
///
/// The vertices of `first` keep their handles, a vertex `u` of `second` becomes
/// `u + first.vertex_bound()`.
///
/// # Example
/// ```
/// use grapher::{prelude::*, gens::*};
///
/// let g = disjoint_union(&path_graph(2), &path_graph(3));
/// assert_eq!(g.ordered_edges(), vec![Edge(0, 1), Edge(2, 3), Edge(3, 4)]);
/// ```
pub fn disjoint_union(first: &SimpleGraph, second: &SimpleGraph) -> SimpleGraph {
    let offset = first.vertex_bound();
    let mut g = SimpleGraph::with_capacity(
        (offset + second.vertex_bound()) as usize,
        (first.number_of_edges() + second.number_of_edges()) as usize,
    );

    for u in first.vertices() {
        g.insert_vertex(u);
    }
    for u in second.vertices() {
        g.insert_vertex(u + offset);
    }

    for Edge(u, v) in first.edges() {
        g.link(u, v);
    }
    for Edge(u, v) in second.edges() {
        g.link(u + offset, v + offset);
    }
    g
}

/// Random `G(n,p)` graph on vertices `0..n`.
/// ** Panics if `p` is not a valid probability **
pub fn random_gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> SimpleGraph
where
    R: Rng,
{
    Gnp::new().nodes(n).prob(p).build(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families() {
        assert_eq!(path_graph(0).number_of_nodes(), 0);
        assert_eq!(path_graph(4).number_of_edges(), 3);
        assert_eq!(cycle_graph(2).number_of_edges(), 1);
        assert_eq!(cycle_graph(6).number_of_edges(), 6);
        assert_eq!(complete_graph(6).number_of_edges(), 15);
        assert_eq!(star_graph(4).degree_of(0), 4);
        assert_eq!(star_graph(0).number_of_nodes(), 1);
    }

    #[test]
    fn union_keeps_gaps() {
        let mut a = path_graph(3);
        a.remove_vertex(2).unwrap();
        let g = disjoint_union(&a, &complete_graph(3));
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![0, 1, 3, 4, 5]);
        assert_eq!(g.number_of_edges(), 4);
        assert!(g.has_edge(3, 5));
    }
}
