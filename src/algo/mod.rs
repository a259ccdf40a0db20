/*!
# Graph Algorithms

This module provides the **structural inspectors**: polynomial-time (or small brute-force)
questions about a graph. All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use grapher::algo::*;
```
and gain access to traversal, connectivity, bipartiteness, cut vertices, girth, chordality and
many other classical graph routines.
Most inspectors are traits with blanket implementations over the operation traits, so they are
available on every graph representation. If possible, results are provided as **iterators**.
*/

mod bipartite;
mod chordal;
mod claws;
mod connectivity;
mod cuts;
mod cycles;
mod distances;
mod eulerian;
mod girth;
mod power;
mod regularity;
mod subgraph;
mod summary;
mod traversal;

use crate::{prelude::*, utils::*};

pub use bipartite::*;
pub use chordal::*;
pub use claws::*;
pub use connectivity::*;
pub use cuts::*;
pub use cycles::*;
pub use distances::*;
pub use eulerian::*;
pub use girth::*;
pub use power::*;
pub use regularity::*;
pub use subgraph::*;
pub use summary::*;
pub use traversal::*;
