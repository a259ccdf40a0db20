use smallvec::SmallVec;

use super::*;

/// Incidence list of a single vertex: pairs of `(neighbor, edge handle)`.
///
/// Most vertices of hand-drawn graphs have a handful of neighbors, so the list lives inline
/// until it outgrows its inline capacity.
#[derive(Clone, Debug, Default)]
pub struct IncidenceList {
    entries: SmallVec<[(Node, EdgeId); 6]>,
}

impl IncidenceList {
    /// Returns the number of incident edges
    pub fn len(&self) -> NumNodes {
        self.entries.len() as NumNodes
    }

    /// Returns *true* if no edge is incident
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all neighbors
    pub fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries.iter().map(|&(v, _)| v)
    }

    /// Iterates over all `(neighbor, edge)` pairs
    pub fn incidences(&self) -> impl Iterator<Item = (Node, EdgeId)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the handle of the edge towards `v` if present
    pub fn edge_to(&self, v: Node) -> Option<EdgeId> {
        self.entries.iter().find(|&&(w, _)| w == v).map(|&(_, e)| e)
    }

    /// Returns *true* if `v` is a neighbor
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.edge_to(v).is_some()
    }

    /// Appends an incidence without checking for duplicates
    pub fn push(&mut self, v: Node, e: EdgeId) {
        debug_assert!(!self.has_neighbor(v));
        self.entries.push((v, e));
    }

    /// Removes the incidence towards `v` and returns its edge handle
    pub fn remove(&mut self, v: Node) -> Option<EdgeId> {
        let pos = self.entries.iter().position(|&(w, _)| w == v)?;
        Some(self.entries.swap_remove(pos).1)
    }

    /// Removes and returns all incidences
    pub fn take(&mut self) -> SmallVec<[(Node, EdgeId); 6]> {
        std::mem::take(&mut self.entries)
    }
}
