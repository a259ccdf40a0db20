/*!
# Subset Indexing

Exponential solvers address vertex subsets by integers. A [`SubsetIndex`] fixes an order of
the (at most [`MAX_MASK_ELEMENTS`]) vertices of a graph: vertex `nodes[i]` owns bit `i`.
This yields a bijection between the subsets of `V` and the masks in `[0, 2^|V|)`, and between
the vertices and the positions in `[0, |V|)`.
*/

use fxhash::FxHashMap;

use super::*;

/// Bijection between a vertex list and bit positions
#[derive(Debug, Clone, Default)]
pub struct SubsetIndex {
    nodes: Vec<Node>,
    positions: FxHashMap<Node, usize>,
}

impl SubsetIndex {
    /// Indexes the given vertices in iteration order.
    /// Fails if there are more than [`MAX_MASK_ELEMENTS`] of them.
    pub fn new<I>(nodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        if nodes.len() > MAX_MASK_ELEMENTS {
            return Err(GraphError::invalid_argument(format!(
                "at most {MAX_MASK_ELEMENTS} vertices can be indexed by masks, got {}",
                nodes.len()
            )));
        }
        let positions = nodes.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        Ok(Self { nodes, positions })
    }

    /// Indexes all vertices of a graph in increasing handle order
    pub fn of_graph<G>(graph: &G) -> Result<Self>
    where
        G: GraphNodeOrder,
    {
        Self::new(graph.vertices())
    }

    /// Number of indexed vertices
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if no vertex is indexed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of subsets `2^len`
    pub fn number_of_subsets(&self) -> u64 {
        1u64 << self.nodes.len()
    }

    /// Indexed vertices in position order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Vertex at position `pos`.
    /// ** Panics if `pos >= len` **
    pub fn node(&self, pos: usize) -> Node {
        self.nodes[pos]
    }

    /// Position of vertex `u` if it is indexed
    pub fn position(&self, u: Node) -> Option<usize> {
        self.positions.get(&u).copied()
    }

    /// Mask with all positions set
    pub fn full_mask(&self) -> SubsetMask {
        (1u64 << self.nodes.len()) - 1
    }

    /// Mask of the given vertices; vertices that are not indexed are ignored
    pub fn mask_of<I>(&self, nodes: I) -> SubsetMask
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .filter_map(|u| self.position(u))
            .fold(0, |mask, i| mask | (1 << i))
    }

    /// Vertices selected by `mask` in position order
    pub fn nodes_of(&self, mask: SubsetMask) -> Vec<Node> {
        MaskBits::new(mask).map(|i| self.nodes[i]).collect()
    }

    /// All masks of subsets with exactly `k` vertices
    pub fn subsets_of_size(&self, k: usize) -> Result<SubsetMasks> {
        SubsetMasks::new(self.nodes.len(), k)
    }

    /// Open neighborhood mask of every position (neighbors outside the index are ignored)
    pub fn neighborhood_masks<G>(&self, graph: &G) -> Vec<SubsetMask>
    where
        G: AdjacencyList,
    {
        self.nodes
            .iter()
            .map(|&u| self.mask_of(graph.neighbors_of(u)))
            .collect()
    }
}
