/*!
# Graph Operations

Traits describing what can be asked of (and done to) a graph. All algorithms of this crate are
written against these traits and provided as blanket implementations, so any representation
implementing them gets the full algorithm suite for free.

Vertex handles may contain gaps (see [`crate::node`]); methods documented with
"** Panics if `u` is not a vertex **" assume the caller only passes live handles.
*/

use itertools::Itertools;

use crate::{error::*, *};

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphNodeOrder {
    /// Returns the number of (live) vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an upper bound (exclusive) on all vertex handles ever issued by the graph.
    /// Use this to size buffers indexed by vertex handles.
    fn vertex_bound(&self) -> NumNodes;

    /// Returns an iterator over all live vertices in increasing handle order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `u` is a live vertex of the graph
    fn has_vertex(&self, u: Node) -> bool;

    /// Returns an empty bitset with one entry per vertex handle
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.vertex_bound())
    }

    /// Returns a bitset with exactly the live vertices set
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.vertex_bound(), self.vertices())
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge set of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u` is not a vertex **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the closed neighborhood of a given vertex.
    /// ** Panics if `u` is not a vertex **
    fn closed_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u` is not a vertex **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the degrees of all vertices in the order of [`GraphNodeOrder::vertices`]
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns a distribution `(degree, count)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        self.degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .sorted_by_key(|(d, _)| *d)
            .collect_vec()
    }

    /// Returns the maximum degree in the graph (0 for the empty graph)
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the minimum degree in the graph (0 for the empty graph)
    fn min_degree(&self) -> NumNodes {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns all vertices sorted ascendingly by degree (ties by handle)
    fn vertices_by_degree(&self) -> Vec<Node> {
        self.vertices()
            .sorted_by_key(|&u| (self.degree_of(u), u))
            .collect_vec()
    }

    /// Returns the open neighborhood of `u` as bitset.
    /// ** Panics if `u` is not a vertex **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.vertex_bound(), self.neighbors_of(u))
    }

    /// Returns the closed neighborhood of `u` as bitset.
    /// ** Panics if `u` is not a vertex **
    fn closed_neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.vertex_bound(), self.closed_neighbors_of(u))
    }

    /// Returns the union of the closed neighborhoods of all given vertices
    fn closed_neighbors_of_set<I>(&self, nodes: I) -> NodeBitSet
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = self.vertex_bitset_unset();
        for u in nodes {
            set.set_bit(u);
            set.set_bits(self.neighbors_of(u));
        }
        set
    }

    /// Returns the vertices adjacent to the given set but not part of it
    fn open_neighbors_of_set<I>(&self, nodes: I) -> NodeBitSet
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        let mut set = self.closed_neighbors_of_set(nodes.iter().copied());
        for u in nodes {
            set.clear_bit(u);
        }
        set
    }

    /// Returns an iterator over all edges, each reported exactly once in normalized form
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u < v)
                .map(move |v| Edge(u, v))
        })
    }

    /// Returns all edges (normalized) in sorted order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().sorted().collect_vec()
    }
}

/// Adjacency queries
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `{u, v}` exists.
    /// Returns *false* if either endpoint is not a vertex.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if the given vertices are pairwise adjacent
    fn is_clique<I>(&self, nodes: I) -> bool
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        nodes
            .iter()
            .tuple_combinations()
            .all(|(&u, &v)| self.has_edge(u, v))
    }

    /// Returns *true* if no two of the given vertices are adjacent
    fn is_independent_set<I>(&self, nodes: I) -> bool
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        nodes
            .iter()
            .tuple_combinations()
            .all(|(&u, &v)| !self.has_edge(u, v))
    }
}

/// Access to edges via their handles
pub trait EdgeLookup: GraphEdgeOrder {
    /// Returns the handle of the edge `{u, v}` if it exists
    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId>;

    /// Returns the endpoints of the edge if the handle is live
    fn endpoints(&self, e: EdgeId) -> Option<Edge>;

    /// Returns an iterator over all live edges together with their handles (in handle order)
    fn edges_with_ids(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_;

    /// Returns an iterator over `(neighbor, edge)` pairs incident to `u`.
    /// ** Panics if `u` is not a vertex **
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_;

    /// Returns *true* if the edge handle is live
    fn has_edge_id(&self, e: EdgeId) -> bool {
        self.endpoints(e).is_some()
    }

    /// Returns the endpoint of `e` that is not `u`
    fn opposite(&self, e: EdgeId, u: Node) -> Option<Node> {
        self.endpoints(e)?.opposite(u)
    }

    /// Returns *true* if `u` is an endpoint of `e`
    fn is_incident(&self, e: EdgeId, u: Node) -> bool {
        self.endpoints(e).is_some_and(|edge| edge.is_incident_to(u))
    }
}

/// Creates a graph with a given number of vertices
pub trait GraphNew {
    /// Creates a graph with vertices `0..n` and no edges
    fn new(n: NumNodes) -> Self;
}

/// Adding and removing vertices
pub trait GraphVertexEditing {
    /// Adds a new isolated vertex and returns its (fresh) handle
    fn add_vertex(&mut self) -> Node;

    /// Adds `n` new isolated vertices and returns their handles
    fn add_vertices(&mut self, n: NumNodes) -> Vec<Node> {
        (0..n).map(|_| self.add_vertex()).collect()
    }

    /// Makes the handle `u` a live vertex (reusing the handle of a vertex of another graph).
    /// Returns *true* if the vertex was newly inserted.
    fn insert_vertex(&mut self, u: Node) -> bool;

    /// Removes `u` together with all incident edges.
    /// Fails with [`GraphError::MissingVertex`] if `u` is not a vertex.
    fn remove_vertex(&mut self, u: Node) -> Result<()>;

    /// Removes `u` if it exists and returns *true* in this case
    fn try_remove_vertex(&mut self, u: Node) -> bool {
        self.remove_vertex(u).is_ok()
    }

    /// Removes all given vertices that exist
    fn remove_vertices<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            self.try_remove_vertex(u);
        }
    }
}

/// Adding and removing edges
pub trait GraphEdgeEditing {
    /// Adds the edge `{u, v}` and returns its fresh handle.
    /// Fails with [`GraphError::InvalidEdge`] on self-loops, missing endpoints or duplicates.
    fn add_edge(&mut self, u: Node, v: Node) -> Result<EdgeId>;

    /// Adds the edge `{u, v}` if not present and returns the handle of the (new or old) edge.
    /// Fails on self-loops and missing endpoints.
    fn ensure_edge(&mut self, u: Node, v: Node) -> Result<EdgeId>;

    /// Adds all given edges, failing on the first invalid one
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `{u, v}` and returns its handle.
    /// Fails with [`GraphError::InvalidEdge`] if the edge does not exist.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<EdgeId>;

    /// Removes the edge `{u, v}` if it exists and returns *true* in this case
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.remove_edge(u, v).is_ok()
    }

    /// Removes the edge with the given handle and returns its endpoints
    fn remove_edge_by_id(&mut self, e: EdgeId) -> Option<Edge>;

    /// Removes all edges incident to `u` and returns how many were removed.
    /// ** Panics if `u` is not a vertex **
    fn remove_edges_at_node(&mut self, u: Node) -> NumNodes;
}

/// Builds graphs from edge lists
pub trait GraphFromScratch: Sized {
    /// Creates a graph with vertices `0..n` and the given edges
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
