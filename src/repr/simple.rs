use itertools::Itertools;

use super::*;

/// A simple undirected graph (no self-loops, no parallel edges) with stable vertex and edge
/// handles.
///
/// # Example
/// ```
/// use grapher::prelude::*;
///
/// let mut g = SimpleGraph::new(3);
/// let e = g.add_edge(0, 1).unwrap();
/// assert_eq!(g.endpoints(e), Some(Edge(0, 1)));
///
/// assert!(g.add_edge(1, 1).is_err());
/// assert!(g.add_edge(1, 0).is_err());
///
/// g.remove_vertex(1).unwrap();
/// assert_eq!(g.number_of_edges(), 0);
/// assert_eq!(g.add_vertex(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleGraph {
    slots: Vec<Option<IncidenceList>>,
    edges: Vec<Option<Edge>>,
    num_nodes: NumNodes,
    num_edges: NumEdges,
}

impl SimpleGraph {
    /// Creates a graph without vertices
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a graph without vertices but with preallocated arenas
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            slots: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            num_nodes: 0,
            num_edges: 0,
        }
    }

    fn incidences(&self, u: Node) -> &IncidenceList {
        self.slots[u as usize]
            .as_ref()
            .unwrap_or_else(|| panic!("vertex {u} is not part of the graph"))
    }

    fn incidences_mut(&mut self, u: Node) -> Option<&mut IncidenceList> {
        self.slots.get_mut(u as usize)?.as_mut()
    }

    fn check_endpoints(&self, u: Node, v: Node) -> Result<()> {
        if u == v {
            return Err(GraphError::invalid_edge(u, v, EdgeFault::SelfLoop));
        }
        for w in [u, v] {
            if !self.has_vertex(w) {
                return Err(GraphError::invalid_edge(u, v, EdgeFault::MissingEndpoint(w)));
            }
        }
        Ok(())
    }

    /// Connects two live, distinct and non-adjacent vertices without further checks
    pub(crate) fn link(&mut self, u: Node, v: Node) -> EdgeId {
        debug_assert!(self.check_endpoints(u, v).is_ok());
        debug_assert!(!self.has_edge(u, v));

        let e = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(Edge(u, v).normalized()));
        self.num_edges += 1;

        if let Some(list) = self.incidences_mut(u) {
            list.push(v, e);
        }
        if let Some(list) = self.incidences_mut(v) {
            list.push(u, e);
        }
        e
    }

    fn unlink(&mut self, u: Node, v: Node) -> Option<EdgeId> {
        let e = self.incidences_mut(u)?.remove(v)?;
        if let Some(list) = self.incidences_mut(v) {
            list.remove(u);
        }
        self.edges[e.index()] = None;
        self.num_edges -= 1;
        Some(e)
    }

    /// Returns the subgraph induced by the given vertices.
    ///
    /// The subgraph keeps the vertex handles of `self` (handles that are not vertices of `self`
    /// are ignored) while all edges receive fresh handles.
    ///
    /// # Example
    /// ```
    /// use grapher::prelude::*;
    ///
    /// let g = SimpleGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let sub = g.induced_subgraph([0, 1, 3]);
    ///
    /// assert_eq!(sub.vertices().collect::<Vec<_>>(), vec![0, 1, 3]);
    /// assert_eq!(sub.ordered_edges(), vec![Edge(0, 1), Edge(0, 3)]);
    /// ```
    pub fn induced_subgraph<I>(&self, nodes: I) -> SimpleGraph
    where
        I: IntoIterator<Item = Node>,
    {
        let mut sub = SimpleGraph::with_capacity(self.slots.len(), 0);
        sub.slots.resize(self.slots.len(), None);
        for u in nodes {
            if self.has_vertex(u) {
                sub.insert_vertex(u);
            }
        }

        for Edge(u, v) in self.edges() {
            if sub.has_vertex(u) && sub.has_vertex(v) {
                sub.link(u, v);
            }
        }
        sub
    }

    /// Contracts `merged` into `kept`: every neighbor of `merged` (other than `kept`) becomes a
    /// neighbor of `kept`, then `merged` is removed.
    pub fn merge_vertices(&mut self, kept: Node, merged: Node) -> Result<()> {
        if kept == merged {
            return Err(GraphError::invalid_argument(format!(
                "cannot merge vertex {kept} into itself"
            )));
        }
        for u in [kept, merged] {
            if !self.has_vertex(u) {
                return Err(GraphError::MissingVertex(u));
            }
        }

        let neighbors = self.neighbors_of(merged).filter(|&w| w != kept).collect_vec();
        self.remove_vertex(merged)?;
        for w in neighbors {
            if !self.has_edge(kept, w) {
                self.link(kept, w);
            }
        }
        Ok(())
    }
}

impl GraphNodeOrder for SimpleGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    fn vertex_bound(&self) -> NumNodes {
        self.slots.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(u, slot)| slot.as_ref().map(|_| u as Node))
    }

    fn has_vertex(&self, u: Node) -> bool {
        self.slots.get(u as usize).is_some_and(|slot| slot.is_some())
    }
}

impl GraphEdgeOrder for SimpleGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for SimpleGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incidences(u).neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.incidences(u).len()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().filter_map(|e| *e)
    }
}

impl AdjacencyTest for SimpleGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_between(u, v).is_some()
    }
}

impl EdgeLookup for SimpleGraph {
    fn edge_between(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.slots.get(u as usize)?.as_ref()?.edge_to(v)
    }

    fn endpoints(&self, e: EdgeId) -> Option<Edge> {
        *self.edges.get(e.index())?
    }

    fn edges_with_ids(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (EdgeId(i as u32), e)))
    }

    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.incidences(u).incidences()
    }
}

impl GraphNew for SimpleGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            slots: vec![Some(IncidenceList::default()); n as usize],
            edges: Vec::new(),
            num_nodes: n,
            num_edges: 0,
        }
    }
}

impl GraphVertexEditing for SimpleGraph {
    fn add_vertex(&mut self) -> Node {
        let u = self.slots.len() as Node;
        self.slots.push(Some(IncidenceList::default()));
        self.num_nodes += 1;
        u
    }

    fn insert_vertex(&mut self, u: Node) -> bool {
        if self.has_vertex(u) {
            return false;
        }
        if self.slots.len() <= u as usize {
            self.slots.resize(u as usize + 1, None);
        }
        self.slots[u as usize] = Some(IncidenceList::default());
        self.num_nodes += 1;
        true
    }

    fn remove_vertex(&mut self, u: Node) -> Result<()> {
        if !self.has_vertex(u) {
            return Err(GraphError::MissingVertex(u));
        }
        self.remove_edges_at_node(u);
        self.slots[u as usize] = None;
        self.num_nodes -= 1;
        Ok(())
    }
}

impl GraphEdgeEditing for SimpleGraph {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<EdgeId> {
        self.check_endpoints(u, v)?;
        if self.has_edge(u, v) {
            return Err(GraphError::invalid_edge(u, v, EdgeFault::Duplicate));
        }
        Ok(self.link(u, v))
    }

    fn ensure_edge(&mut self, u: Node, v: Node) -> Result<EdgeId> {
        self.check_endpoints(u, v)?;
        Ok(match self.edge_between(u, v) {
            Some(e) => e,
            None => self.link(u, v),
        })
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<EdgeId> {
        self.check_endpoints(u, v)?;
        self.unlink(u, v)
            .ok_or(GraphError::invalid_edge(u, v, EdgeFault::Absent))
    }

    fn remove_edge_by_id(&mut self, e: EdgeId) -> Option<Edge> {
        let edge = self.endpoints(e)?;
        self.unlink(edge.0, edge.1);
        Some(edge)
    }

    fn remove_edges_at_node(&mut self, u: Node) -> NumNodes {
        let Some(list) = self.incidences_mut(u) else {
            panic!("vertex {u} is not part of the graph");
        };
        let incidences = list.take();

        for &(v, e) in &incidences {
            if let Some(list) = self.incidences_mut(v) {
                list.remove(u);
            }
            self.edges[e.index()] = None;
        }
        self.num_edges -= incidences.len() as NumEdges;
        incidences.len() as NumNodes
    }
}
