use std::fmt::{Debug, Display};

use crate::Node;

/// The (unordered) endpoint pair of an edge.
///
/// Graphs in this crate are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same
/// connection; use [`Edge::normalized`] before comparing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Number of edges; bounded by `2^32 - 1`
pub type NumEdges = u32;

/// Opaque handle of an edge inside a [`SimpleGraph`](crate::repr::SimpleGraph).
///
/// Edge handles are unique within a graph and never reused, even if the same endpoint pair is
/// connected again after the edge was removed. Clones of a graph keep all edge handles.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EdgeId(pub(crate) u32);

impl EdgeId {
    /// Returns the arena index of this handle
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if `u` is one of the endpoints
    pub fn is_incident_to(&self, u: Node) -> bool {
        self.0 == u || self.1 == u
    }

    /// Returns the endpoint opposite to `u` or `None` if `u` is no endpoint
    pub fn opposite(&self, u: Node) -> Option<Node> {
        if self.0 == u {
            Some(self.1)
        } else if self.1 == u {
            Some(self.0)
        } else {
            None
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_opposite() {
        let e = Edge(5, 2);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(2, 5));
        assert_eq!(e.reverse(), Edge(2, 5));
        assert_eq!(e.opposite(5), Some(2));
        assert_eq!(e.opposite(2), Some(5));
        assert_eq!(e.opposite(3), None);
        assert!(Edge(1, 1).is_loop());
        assert_eq!(format!("{e}"), "(5,2)");
        assert_eq!(format!("{}", EdgeId(7)), "e7");
    }
}
