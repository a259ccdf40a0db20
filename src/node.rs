/*!
# Vertex Handles

Vertices of a [`SimpleGraph`](crate::repr::SimpleGraph) are addressed by plain `u32` handles.
A handle is the index of the vertex slot inside the graph's arena: handles are handed out in
increasing order and are never reused after a vertex was removed. Hence a handle is stable
for the whole lifetime of a graph (and of all its clones).

Since handles may have gaps, algorithms that need dense indices use
[`vertex_bound`](crate::ops::GraphNodeOrder::vertex_bound) to size their buffers, or
compress the live handles with a [`SubsetIndex`](crate::utils::SubsetIndex).
*/

use stream_bitset::bitset::BitSetImpl;

/// Vertex handle
pub type Node = u32;

/// Handle value that never refers to a live vertex
pub const INVALID_NODE: Node = Node::MAX;

/// Number of vertices; bounded by `2^32 - 1`
pub type NumNodes = Node;

/// BitSet indexed by vertex handles
pub type NodeBitSet = BitSetImpl<Node>;

/// Builds a `NodeBitSet` over `0..bound` containing exactly the given vertices
pub fn node_bitset_of<I>(bound: NumNodes, nodes: I) -> NodeBitSet
where
    I: IntoIterator<Item = Node>,
{
    NodeBitSet::new_with_bits_set(bound, nodes)
}
