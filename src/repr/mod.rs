/*!
# Graph Representations

[`SimpleGraph`] is the graph type all algorithms of this crate operate on: a simple undirected
graph stored in an arena of vertex slots and an arena of edge slots. Handles into both arenas
are never reused, so vertices and edges keep their identity across edits and clones.
*/

use crate::{error::*, ops::*, *};

mod neighborhood;
mod simple;

pub use neighborhood::*;
pub use simple::*;
