/*!
# Traversal

Breadth-first search as a lazy iterator plus the derived queries most inspectors need
(BFS distances, shortest paths, bounded-hop neighborhoods).

The search can be restricted before it starts: vertices can be excluded (treated as already
visited), a single edge can be ignored, and the search depth can be bounded.
*/

use std::collections::VecDeque;

use super::*;

/// A vertex reached by a [`BfsSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// The reached vertex
    pub node: Node,
    /// Vertex from which `node` was discovered (`None` for roots)
    pub predecessor: Option<Node>,
    /// Number of hops from the root
    pub depth: NumNodes,
}

/// Breadth-first search iterator.
///
/// # Example
/// ```
/// use grapher::{prelude::*, algo::*};
///
/// let g = SimpleGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
/// let depths: Vec<_> = g.bfs(0).map(|v| (v.node, v.depth)).collect();
/// assert_eq!(depths, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
/// ```
pub struct BfsSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Visit>,
    max_depth: Option<NumNodes>,
    ignored_edge: Option<Edge>,
}

impl<'a, G> BfsSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search rooted at `start`.
    /// ** Panics if `start` is not a vertex **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.has_vertex(start), "vertex {start} is not part of the graph");
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([Visit {
                node: start,
                predecessor: None,
                depth: 0,
            }]),
            max_depth: None,
            ignored_edge: None,
        }
    }

    /// Excludes a vertex from the search: it is treated as if it was already visited.
    /// Has no effect on the root and should be called directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        if u < self.visited.number_of_bits() {
            self.visited.set_bit(u);
        }
    }

    /// Builder variant of [`BfsSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Excludes multiple vertices, see [`BfsSearch::exclude_node`]
    pub fn with_nodes_excluded<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            self.exclude_node(u);
        }
        self
    }

    /// Ignores the edge `{u, v}` during the search
    pub fn set_ignored_edge(&mut self, edge: Edge) {
        self.ignored_edge = Some(edge.normalized());
    }

    /// Builder variant of [`BfsSearch::set_ignored_edge`]
    pub fn with_edge_ignored(mut self, edge: Edge) -> Self {
        self.set_ignored_edge(edge);
        self
    }

    /// Vertices at depth `max_depth` are reported but not expanded
    pub fn set_max_depth(&mut self, max_depth: NumNodes) {
        self.max_depth = Some(max_depth);
    }

    /// Builder variant of [`BfsSearch::set_max_depth`]
    pub fn with_max_depth(mut self, max_depth: NumNodes) -> Self {
        self.set_max_depth(max_depth);
        self
    }

    /// Returns *true* if `u` was already discovered (or excluded)
    pub fn did_visit_node(&self, u: Node) -> bool {
        u < self.visited.number_of_bits() && self.visited.get_bit(u)
    }

    /// Restarts the (exhausted) search at the smallest undiscovered vertex.
    /// Returns *false* if every vertex was discovered.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        let Some(u) = self.graph.vertices().find(|&u| !self.visited.get_bit(u)) else {
            return false;
        };
        self.visited.set_bit(u);
        self.queue.push_back(Visit {
            node: u,
            predecessor: None,
            depth: 0,
        });
        true
    }
}

impl<G> Iterator for BfsSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let visit = self.queue.pop_front()?;
        if self.max_depth.is_some_and(|d| visit.depth >= d) {
            return Some(visit);
        }

        let u = visit.node;
        for v in self.graph.neighbors_of(u) {
            if self.ignored_edge == Some(Edge(u, v).normalized()) {
                continue;
            }
            if !self.visited.set_bit(v) {
                self.queue.push_back(Visit {
                    node: v,
                    predecessor: Some(u),
                    depth: visit.depth + 1,
                });
            }
        }
        Some(visit)
    }
}

/// Traversal based queries provided for every graph
pub trait Traversal: AdjacencyList {
    /// Returns a BFS iterator rooted at `start`.
    /// ** Panics if `start` is not a vertex **
    fn bfs(&self, start: Node) -> BfsSearch<'_, Self> {
        BfsSearch::new(self, start)
    }

    /// Returns the hop distance from `start` to every vertex, indexed by handle
    /// (`None` for unreachable vertices and unused handles).
    /// ** Panics if `start` is not a vertex **
    fn bfs_distances(&self, start: Node) -> Vec<Option<NumNodes>> {
        let mut distances = vec![None; self.vertex_bound() as usize];
        for visit in self.bfs(start) {
            distances[visit.node as usize] = Some(visit.depth);
        }
        distances
    }

    /// Returns a shortest path from `s` to `t` (both included) if one exists.
    /// Returns `None` if either endpoint is not a vertex.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*};
    ///
    /// let g = SimpleGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (0, 4), (4, 3)]).unwrap();
    /// assert_eq!(g.shortest_path(0, 3), Some(vec![0, 4, 3]));
    /// ```
    fn shortest_path(&self, s: Node, t: Node) -> Option<Vec<Node>> {
        if !self.has_vertex(s) || !self.has_vertex(t) {
            return None;
        }

        let mut predecessor = vec![INVALID_NODE; self.vertex_bound() as usize];
        for visit in self.bfs(s) {
            if let Some(p) = visit.predecessor {
                predecessor[visit.node as usize] = p;
            }
            if visit.node == t {
                let mut path = vec![t];
                let mut u = t;
                while u != s {
                    u = predecessor[u as usize];
                    path.push(u);
                }
                path.reverse();
                return Some(path);
            }
        }
        None
    }

    /// Returns all vertices within `hops` hops of `u` (including `u`).
    /// ** Panics if `u` is not a vertex **
    fn closed_neighborhood_within(&self, u: Node, hops: NumNodes) -> NodeBitSet {
        let mut set = self.vertex_bitset_unset();
        set.set_bits(self.bfs(u).with_max_depth(hops).map(|visit| visit.node));
        set
    }

    /// Returns all vertices within `hops` hops of `u` (excluding `u`).
    /// ** Panics if `u` is not a vertex **
    fn open_neighborhood_within(&self, u: Node, hops: NumNodes) -> NodeBitSet {
        let mut set = self.closed_neighborhood_within(u, hops);
        set.clear_bit(u);
        set
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;

    #[test]
    fn bfs_on_cycle() {
        let g = cycle_graph(6);
        let visits = g.bfs(0).collect_vec();
        assert_eq!(visits.len(), 6);
        assert_eq!(visits[0].predecessor, None);
        assert_eq!(visits.iter().map(|v| v.depth).max(), Some(3));

        let distances = g.bfs_distances(0);
        assert_eq!(
            distances,
            vec![Some(0), Some(1), Some(2), Some(3), Some(2), Some(1)]
        );
    }

    #[test]
    fn excluded_and_ignored() {
        let g = path_graph(5);
        assert_eq!(g.bfs(0).with_node_excluded(2).count(), 2);
        assert_eq!(g.bfs(0).with_edge_ignored(Edge(3, 2)).count(), 3);
    }

    #[test]
    fn restart_covers_everything() {
        let mut g = path_graph(3);
        g.add_vertices(2);
        let mut bfs = g.bfs(0);
        let mut roots = 0;
        loop {
            roots += bfs.by_ref().filter(|v| v.predecessor.is_none()).count();
            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }
        assert_eq!(roots, 3);
    }

    #[test]
    fn bounded_neighborhoods() {
        let g = path_graph(7);
        let within = g.closed_neighborhood_within(3, 2);
        assert_eq!(within.iter_set_bits().collect_vec(), vec![1, 2, 3, 4, 5]);

        let open = g.open_neighborhood_within(0, 1);
        assert_eq!(open.iter_set_bits().collect_vec(), vec![1]);

        assert_eq!(g.closed_neighborhood_within(3, 0).cardinality(), 1);
    }

    #[test]
    fn paths() {
        let mut g = path_graph(4);
        g.add_vertex();
        assert_eq!(g.shortest_path(0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(g.shortest_path(2, 2), Some(vec![2]));
        assert_eq!(g.shortest_path(0, 4), None);
        assert_eq!(g.shortest_path(0, 99), None);
    }
}
