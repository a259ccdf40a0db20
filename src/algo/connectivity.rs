use itertools::Itertools;

use super::*;

/// Connected components and reachability
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components; each component is sorted by handle.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*};
    ///
    /// let g = SimpleGraph::from_edges(5, [(0, 1), (3, 4)]).unwrap();
    /// let ccs: Vec<_> = g.connected_components().collect();
    /// assert_eq!(ccs, vec![vec![0, 1], vec![2], vec![3, 4]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components (`0` for the empty graph)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns *true* if the graph has exactly one connected component.
    /// The empty graph is not connected.
    fn is_connected(&self) -> bool {
        let mut ccs = self.connected_components();
        ccs.next().is_some() && ccs.next().is_none()
    }

    /// Returns the component containing `u`, sorted by handle.
    /// ** Panics if `u` is not a vertex **
    fn connected_component_of(&self, u: Node) -> Vec<Node> {
        self.bfs(u).map(|visit| visit.node).sorted_unstable().collect_vec()
    }

    /// Returns the size of the largest component (`0` for the empty graph)
    fn largest_component_size(&self) -> NumNodes {
        self.connected_components()
            .map(|cc| cc.len() as NumNodes)
            .max()
            .unwrap_or(0)
    }

    /// Returns *true* if `s` and `t` are vertices in the same component
    fn path_exists(&self, s: Node, t: Node) -> bool {
        self.has_vertex(s) && self.has_vertex(t) && self.bfs(s).any(|visit| visit.node == t)
    }

    /// Returns the number of components of the graph with `u` removed
    fn number_of_components_without_node(&self, u: Node) -> NumNodes {
        self.connected_components()
            .exclude_node(u)
            .count() as NumNodes
    }

    /// Returns the number of components of the graph with the edge `{u, v}` removed
    fn number_of_components_without_edge(&self, edge: Edge) -> NumNodes {
        self.connected_components()
            .ignore_edge(edge)
            .count() as NumNodes
    }
}

impl<G> Connectivity for G where G: AdjacencyList {}

/// Iterator over connected components, see [`Connectivity::connected_components`]
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    excluded: Vec<Node>,
    ignored_edge: Option<Edge>,
    bfs: Option<BfsSearch<'a, G>>,
    started: bool,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            excluded: Vec::new(),
            ignored_edge: None,
            bfs: None,
            started: false,
        }
    }

    /// Ignores vertex `u` (and its edges); must be called before iterating
    pub fn exclude_node(mut self, u: Node) -> Self {
        debug_assert!(!self.started);
        self.excluded.push(u);
        self
    }

    /// Ignores the edge `{u, v}`; must be called before iterating
    pub fn ignore_edge(mut self, edge: Edge) -> Self {
        debug_assert!(!self.started);
        self.ignored_edge = Some(edge);
        self
    }

    fn start(&mut self) {
        self.started = true;
        let Some(root) = self
            .graph
            .vertices()
            .find(|u| !self.excluded.contains(u))
        else {
            return;
        };

        let mut bfs = BfsSearch::new(self.graph, root).with_nodes_excluded(self.excluded.iter().copied());
        if let Some(edge) = self.ignored_edge {
            bfs.set_ignored_edge(edge);
        }
        self.bfs = Some(bfs);
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Vec<Node>> {
        if !self.started {
            self.start();
        }
        let bfs = self.bfs.as_mut()?;

        loop {
            let mut cc = bfs.by_ref().map(|visit| visit.node).collect_vec();
            if !cc.is_empty() {
                cc.sort_unstable();
                return Some(cc);
            }
            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}
