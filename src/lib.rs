/*!
`grapher` is a library of exact and structural algorithms on **simple undirected graphs**
(no self-loops, no parallel edges), written for interactive graph editors: graphs are small,
edited often, and questions such as "what is the chromatic number?" are answered exactly.

# Representation

Vertices are `u32` handles ([`Node`]) and edges are opaque [`EdgeId`] handles into the arenas
of a [`SimpleGraph`](crate::repr::SimpleGraph). Neither kind of handle is ever reused, so
clones, induced subgraphs and results of algorithms can refer to vertices of the input graph
directly. The endpoints of an edge are described by the tuple-struct `Edge(Node, Node)`.

# Design

Polynomial-time questions are answered by traits with blanket implementations over the
operation traits in [`ops`], e.g. `graph.is_bipartite()` or `graph.find_all_bridges()`.

Exponential-time questions are answered by configurable solver structs implementing
[`Solver`](crate::solve::Solver). Every solver receives a [`Control`](crate::solve::Control)
carrying a cooperative cancellation token and an optional, throttled progress listener, and
returns an [`Outcome`](crate::solve::Outcome) that keeps "no solution" apart from "cancelled".

# Usage

There are *6* submodules you probably want to interact with:
- [`prelude`] includes vertices, edges, errors, the operation traits and [`SimpleGraph`](crate::repr::SimpleGraph),
- [`algo`] includes structural inspectors (connectivity, bipartiteness, cut vertices, girth, chordality, claws, distances, ...),
- [`solve`] includes the cancellation/progress framework and the exact solvers (chromatic number, optimal coloring, dominating set, Hamiltonian path/cycle, maximum flow, ...),
- [`interval`] includes the integer-indexed [`BasicGraph`](crate::interval::BasicGraph) with interval graph recognition and clique chains,
- [`gens`] includes deterministic substructures (paths, cycles, cliques) and random `G(n,p)` graphs,
- [`utils`] includes subset, powerset and permutation enumerators.

In most use-cases, `use grapher::{prelude::*, algo::*, solve::*};` suffices.

```
use grapher::{prelude::*, algo::*, solve::*};

let c5 = SimpleGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
assert_eq!(c5.girth(), Some(5));
assert!(!c5.is_bipartite());

let chi = ChromaticNumber::new(&c5).solve(&Control::new()).unwrap();
assert_eq!(chi, Outcome::Found(3));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod interval;
pub mod node;
pub mod ops;
pub mod repr;
pub mod solve;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `grapher::prelude` includes definitions for vertices and edges, errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
