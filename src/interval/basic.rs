/*!
# Basic Graphs

[`BasicGraph`] stores a simple undirected graph as a map from integer vertex identifiers to
their neighborhoods. Identifiers need not be contiguous; [`BasicGraph::add_vertex`] always picks
the identifier following the largest one in use.
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use super::*;

/// Named simple graph over integer vertex identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicGraph {
    name: String,
    adjacency: FxHashMap<Vertex, FxHashSet<Vertex>>,
}

impl BasicGraph {
    /// Creates an empty, unnamed graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with the vertices `0..n` and no edges
    pub fn with_vertices(n: Vertex) -> Self {
        let mut graph = Self::new();
        for v in 0..n {
            graph.insert_vertex(v);
        }
        graph
    }

    /// Creates a graph with the given edges; endpoints are added as needed
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Sets the name of the graph
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the name of the graph
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vertices
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.adjacency.values().map(|set| set.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Smallest identifier larger than every vertex (`0` for the empty graph)
    pub fn vertex_bound(&self) -> Vertex {
        self.adjacency.keys().max().map_or(0, |&v| v + 1)
    }

    /// All vertices in ascending order
    pub fn vertices(&self) -> Vec<Vertex> {
        self.adjacency.keys().copied().sorted_unstable().collect()
    }

    /// All edges `(u, v)` with `u < v` in ascending order
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        self.adjacency
            .iter()
            .flat_map(|(&u, set)| set.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
            .sorted_unstable()
            .collect()
    }

    pub fn has_vertex(&self, v: Vertex) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn is_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        self.adjacency.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// Open neighborhood of `v`, or `None` if `v` is not a vertex
    pub fn neighborhood(&self, v: Vertex) -> Option<&FxHashSet<Vertex>> {
        self.adjacency.get(&v)
    }

    /// Open neighborhood of `v` in ascending order (empty if `v` is not a vertex)
    pub fn neighbors(&self, v: Vertex) -> Vec<Vertex> {
        self.adjacency
            .get(&v)
            .map(|set| set.iter().copied().sorted_unstable().collect())
            .unwrap_or_default()
    }

    /// Closed neighborhood of `v`, or `None` if `v` is not a vertex
    pub fn closed_neighborhood(&self, v: Vertex) -> Option<FxHashSet<Vertex>> {
        let mut closed = self.adjacency.get(&v)?.clone();
        closed.insert(v);
        Some(closed)
    }

    pub fn degree(&self, v: Vertex) -> Option<usize> {
        self.adjacency.get(&v).map(|set| set.len())
    }

    /// Adds the vertex following the largest identifier in use and returns it
    pub fn add_vertex(&mut self) -> Vertex {
        let v = self.vertex_bound();
        self.adjacency.insert(v, FxHashSet::default());
        v
    }

    /// Adds `v` if it is not a vertex yet; returns *true* if it was added
    pub fn insert_vertex(&mut self, v: Vertex) -> bool {
        if self.has_vertex(v) {
            return false;
        }
        self.adjacency.insert(v, FxHashSet::default());
        true
    }

    /// Connects `u` and `v`, adding missing endpoints. Returns *true* if the edge is new.
    /// Fails on self-loops.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        if u == v {
            return Err(GraphError::invalid_edge(u, v, EdgeFault::SelfLoop));
        }
        Ok(self.link(u, v))
    }

    /// Unchecked edge insertion for `u != v`
    pub(crate) fn link(&mut self, u: Vertex, v: Vertex) -> bool {
        let new = self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        new
    }

    /// Removes the edge between `u` and `v`; returns *true* if it existed
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        let removed = self.adjacency.get_mut(&u).is_some_and(|set| set.remove(&v));
        if removed && let Some(set) = self.adjacency.get_mut(&v) {
            set.remove(&u);
        }
        removed
    }

    /// Removes `v` and its incident edges; returns *true* if `v` was a vertex
    pub fn remove_vertex(&mut self, v: Vertex) -> bool {
        let Some(neighbors) = self.adjacency.remove(&v) else {
            return false;
        };
        for u in neighbors {
            if let Some(set) = self.adjacency.get_mut(&u) {
                set.remove(&v);
            }
        }
        true
    }

    /// Removes all given vertices and returns how many of them were vertices
    pub fn remove_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Vertex>,
    {
        vertices
            .into_iter()
            .filter(|&v| self.remove_vertex(v))
            .count()
    }

    /// Subgraph induced by `vertices` with the same name and identifiers
    pub fn induced_subgraph(&self, vertices: &[Vertex]) -> Self {
        let keep: FxHashSet<Vertex> = vertices
            .iter()
            .copied()
            .filter(|&v| self.has_vertex(v))
            .collect();
        let adjacency = keep
            .iter()
            .map(|&v| {
                let set = self.adjacency[&v]
                    .iter()
                    .copied()
                    .filter(|u| keep.contains(u))
                    .collect();
                (v, set)
            })
            .collect();
        Self {
            name: self.name.clone(),
            adjacency,
        }
    }

    /// Disjoint union; the vertices of `second` are shifted past the largest vertex of `first`
    pub fn disjoint_union(first: &Self, second: &Self) -> Self {
        let offset = first.vertex_bound();
        let mut union = first.clone();
        union.name = format!("{} \\cup {}", first.name, second.name);
        for v in second.adjacency.keys() {
            union.insert_vertex(v + offset);
        }
        for (u, v) in second.edges() {
            union.link(u + offset, v + offset);
        }
        union
    }

    /// Disjoint union with every vertex of `first` connected to every vertex of `second`
    pub fn join(first: &Self, second: &Self) -> Self {
        let offset = first.vertex_bound();
        let mut join = Self::disjoint_union(first, second);
        join.name = format!("{} \\join {}", first.name, second.name);
        for u in first.vertices() {
            for v in second.vertices() {
                join.link(u, v + offset);
            }
        }
        join
    }

    /// Returns *true* if `vertices` are pairwise adjacent vertices of the graph
    pub fn is_clique(&self, vertices: &[Vertex]) -> bool {
        vertices.iter().all(|&v| self.has_vertex(v))
            && vertices
                .iter()
                .tuple_combinations()
                .all(|(&u, &v)| self.is_adjacent(u, v))
    }

    /// Returns *true* if `vertices` form a clique that no further vertex extends
    pub fn is_maximal_clique(&self, vertices: &[Vertex]) -> bool {
        if !self.is_clique(vertices) {
            return false;
        }
        let Some((&first, rest)) = vertices.split_first() else {
            return self.is_empty();
        };
        !self.adjacency[&first].iter().any(|&candidate| {
            !rest.contains(&candidate) && rest.iter().all(|&v| self.is_adjacent(candidate, v))
        })
    }

    /// Returns *true* if the graph is non-empty and every vertex reaches every other one
    pub fn is_connected(&self) -> bool {
        match self.adjacency.keys().next() {
            Some(&start) => self.reachable_from(start, &FxHashSet::default()).len() == self.order(),
            None => false,
        }
    }

    /// Connected components, each sorted, ordered by their smallest vertex
    pub fn components(&self) -> Vec<Vec<Vertex>> {
        let mut seen = FxHashSet::default();
        let mut components = Vec::new();
        for v in self.vertices() {
            if seen.contains(&v) {
                continue;
            }
            let component: Vec<Vertex> = self
                .reachable_from(v, &FxHashSet::default())
                .into_keys()
                .sorted_unstable()
                .collect();
            seen.extend(component.iter().copied());
            components.push(component);
        }
        components
    }

    /// Number of edges on a shortest path between `u` and `v`, or `None` if they are disconnected
    pub fn shortest_path(&self, u: Vertex, v: Vertex) -> Result<Option<usize>> {
        for w in [u, v] {
            if !self.has_vertex(w) {
                return Err(GraphError::MissingVertex(w));
            }
        }
        Ok(self
            .reachable_from(u, &FxHashSet::default())
            .get(&v)
            .copied())
    }

    /// BFS distances from `start` in the graph without `blocked`
    fn reachable_from(
        &self,
        start: Vertex,
        blocked: &FxHashSet<Vertex>,
    ) -> FxHashMap<Vertex, usize> {
        let mut distances = FxHashMap::default();
        if blocked.contains(&start) {
            return distances;
        }
        distances.insert(start, 0);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            let next = distances[&u] + 1;
            for &v in self.adjacency.get(&u).into_iter().flatten() {
                if !blocked.contains(&v) && !distances.contains_key(&v) {
                    distances.insert(v, next);
                    queue.push_back(v);
                }
            }
        }
        distances
    }

    /// Returns *true* if the neighborhood of `v` is a clique (`false` if `v` is not a vertex)
    pub fn is_simplicial(&self, v: Vertex) -> bool {
        self.adjacency.get(&v).is_some_and(|set| {
            set.iter()
                .tuple_combinations()
                .all(|(&u, &w)| self.is_adjacent(u, w))
        })
    }

    /// Returns *true* if every cycle of length at least four has a chord.
    ///
    /// Simplicial vertices are removed round by round until at most three vertices are left.
    pub fn is_chordal(&self) -> bool {
        let mut remaining = self.clone();
        while remaining.order() > 3 {
            let simplicial = remaining
                .vertices()
                .into_iter()
                .filter(|&v| remaining.is_simplicial(v))
                .collect_vec();
            if simplicial.is_empty() {
                return false;
            }
            remaining.remove_vertices(simplicial);
        }
        true
    }

    /// Lexicographic breadth-first search; ties are broken towards the smallest identifier
    pub fn lex_bfs(&self) -> Vec<Vertex> {
        let n = self.order();
        let mut labels: FxHashMap<Vertex, Vec<usize>> =
            self.adjacency.keys().map(|&v| (v, Vec::new())).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(v) = labels
            .iter()
            .max_by(|(u, lu), (v, lv)| lu.cmp(lv).then(v.cmp(u)))
            .map(|(&v, _)| v)
        {
            labels.remove(&v);
            let stamp = n - order.len();
            for w in self.adjacency.get(&v).into_iter().flatten() {
                if let Some(label) = labels.get_mut(w) {
                    label.push(stamp);
                }
            }
            order.push(v);
        }
        order
    }

    /// Reverse LexBFS order if it is a perfect elimination ordering, `None` otherwise
    pub fn perfect_elimination_ordering(&self) -> Option<Vec<Vertex>> {
        let mut order = self.lex_bfs();
        order.reverse();
        self.is_perfect_elimination_ordering(&order)
            .then_some(order)
    }

    /// Returns *true* if `order` lists every vertex once and the later neighbors of each vertex
    /// form a clique
    pub fn is_perfect_elimination_ordering(&self, order: &[Vertex]) -> bool {
        if order.len() != self.order() {
            return false;
        }
        let Some(position) = self.positions(order) else {
            return false;
        };
        order.iter().all(|&v| {
            let later = self.right_neighborhood(v, &position);
            later
                .iter()
                .tuple_combinations()
                .all(|(&u, &w)| self.is_adjacent(u, w))
        })
    }

    /// Position of every vertex in `order`, `None` on repetitions or unknown vertices
    pub(crate) fn positions(&self, order: &[Vertex]) -> Option<FxHashMap<Vertex, usize>> {
        let mut position = FxHashMap::default();
        for (i, &v) in order.iter().enumerate() {
            if !self.has_vertex(v) || position.insert(v, i).is_some() {
                return None;
            }
        }
        Some(position)
    }

    /// `v` together with its neighbors that come after it in the ordering, sorted
    pub(crate) fn right_neighborhood(
        &self,
        v: Vertex,
        position: &FxHashMap<Vertex, usize>,
    ) -> Clique {
        let Some(&own) = position.get(&v) else {
            return Vec::new();
        };
        self.adjacency
            .get(&v)
            .into_iter()
            .flatten()
            .copied()
            .filter(|u| position.get(u).is_some_and(|&p| p > own))
            .chain(std::iter::once(v))
            .sorted_unstable()
            .collect()
    }

    /// Maximal cliques of a chordal graph, ordered by the elimination position of their first
    /// vertex. Returns `None` if the graph is not chordal.
    pub fn maximal_cliques(&self) -> Option<Vec<Clique>> {
        let order = self.perfect_elimination_ordering()?;
        Some(self.maximal_cliques_along(&order))
    }

    /// Maximal cliques read off a perfect elimination ordering
    pub(crate) fn maximal_cliques_along(&self, order: &[Vertex]) -> Vec<Clique> {
        let position = self.positions(order).unwrap_or_default();
        let candidates = order
            .iter()
            .map(|&v| self.right_neighborhood(v, &position))
            .collect_vec();

        candidates
            .iter()
            .filter(|candidate| {
                !candidates.iter().any(|other| {
                    other.len() > candidate.len()
                        && candidate.iter().all(|v| other.binary_search(v).is_ok())
                })
            })
            .cloned()
            .collect()
    }

    /// Returns `Ok(true)` if every two of `a`, `b`, `c` are joined by a path avoiding the closed
    /// neighborhood of the third. Fails unless the three are distinct vertices.
    pub fn is_asteroidal_triple(&self, a: Vertex, b: Vertex, c: Vertex) -> Result<bool> {
        for v in [a, b, c] {
            if !self.has_vertex(v) {
                return Err(GraphError::MissingVertex(v));
            }
        }
        if a == b || b == c || a == c {
            return Err(GraphError::invalid_argument(format!(
                "an asteroidal triple needs three distinct vertices, got ({a}, {b}, {c})"
            )));
        }
        Ok(self.connected_avoiding(a, b, c)
            && self.connected_avoiding(a, c, b)
            && self.connected_avoiding(b, c, a))
    }

    /// Is there a path between `a` and `b` that avoids the closed neighborhood of `c`?
    fn connected_avoiding(&self, a: Vertex, b: Vertex, c: Vertex) -> bool {
        let blocked = self.closed_neighborhood(c).unwrap_or_default();
        self.reachable_from(a, &blocked).contains_key(&b)
    }

    /// Component labels of the graph without the closed neighborhood of `c`
    fn components_avoiding(&self, c: Vertex) -> FxHashMap<Vertex, usize> {
        let blocked = self.closed_neighborhood(c).unwrap_or_default();
        let mut labels = FxHashMap::default();
        let mut next = 0;
        for v in self.vertices() {
            if blocked.contains(&v) || labels.contains_key(&v) {
                continue;
            }
            for u in self.reachable_from(v, &blocked).into_keys() {
                labels.insert(u, next);
            }
            next += 1;
        }
        labels
    }

    /// Returns the lexicographically smallest asteroidal triple, if one exists
    pub fn asteroidal_triple(&self) -> Option<[Vertex; 3]> {
        let vertices = self.vertices();
        let labels: FxHashMap<Vertex, FxHashMap<Vertex, usize>> = vertices
            .iter()
            .map(|&c| (c, self.components_avoiding(c)))
            .collect();

        let linked = |a: Vertex, b: Vertex, c: Vertex| {
            labels.get(&c).is_some_and(|label| {
                matches!((label.get(&a), label.get(&b)), (Some(x), Some(y)) if x == y)
            })
        };

        vertices
            .iter()
            .tuple_combinations()
            .map(|(&a, &b, &c)| [a, b, c])
            .find(|&[a, b, c]| linked(a, b, c) && linked(a, c, b) && linked(b, c, a))
    }

    /// Returns *true* if the graph has no asteroidal triple
    pub fn is_at_free(&self) -> bool {
        self.asteroidal_triple().is_none()
    }

    /// Returns *true* if the graph is chordal and AT-free, i.e. an interval graph
    pub fn is_interval(&self) -> bool {
        self.is_chordal() && self.is_at_free()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_interval_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn path(n: Vertex) -> BasicGraph {
        BasicGraph::from_edges((1..n).map(|v| (v - 1, v))).unwrap()
    }

    fn cycle(n: Vertex) -> BasicGraph {
        BasicGraph::from_edges((0..n).map(|v| (v, (v + 1) % n))).unwrap()
    }

    fn subdivided_claw() -> BasicGraph {
        BasicGraph::from_edges([(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]).unwrap()
    }

    #[test]
    fn vertex_identifiers() {
        let mut graph = BasicGraph::new();
        assert_eq!(graph.add_vertex(), 0);
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);

        assert!(graph.remove_vertex(1));
        assert!(!graph.remove_vertex(1));
        assert_eq!(graph.add_vertex(), 3);

        assert!(graph.insert_vertex(7));
        assert!(!graph.insert_vertex(7));
        assert_eq!(graph.add_vertex(), 8);
        assert_eq!(graph.vertices(), vec![0, 2, 3, 7, 8]);
    }

    #[test]
    fn edges() {
        let mut graph = BasicGraph::new().with_name("g");
        assert_eq!(graph.name(), "g");

        assert!(graph.add_edge(4, 2).unwrap());
        assert!(!graph.add_edge(2, 4).unwrap());
        assert!(matches!(
            graph.add_edge(3, 3),
            Err(GraphError::InvalidEdge {
                fault: EdgeFault::SelfLoop,
                ..
            })
        ));

        assert_eq!(graph.vertices(), vec![2, 4]);
        assert!(graph.is_adjacent(2, 4) && graph.is_adjacent(4, 2));

        graph.add_edge(2, 5).unwrap();
        assert_eq!(graph.edges(), vec![(2, 4), (2, 5)]);
        assert_eq!(graph.neighbors(2), vec![4, 5]);
        assert_eq!(graph.degree(2), Some(2));
        assert_eq!(graph.size(), 2);

        assert!(graph.remove_edge(4, 2));
        assert!(!graph.remove_edge(4, 2));
        assert!(!graph.is_adjacent(2, 4));

        assert!(graph.remove_vertex(2));
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.neighbors(5), Vec::<Vertex>::new());
    }

    #[test]
    fn union_and_join() {
        let mut first = path(3).with_name("a");
        first.insert_vertex(4);
        let second = BasicGraph::from_edges([(0, 1)]).unwrap().with_name("b");

        let union = BasicGraph::disjoint_union(&first, &second);
        assert_eq!(union.name(), "a \\cup b");
        assert_eq!(union.vertices(), vec![0, 1, 2, 4, 5, 6]);
        assert_eq!(union.edges(), vec![(0, 1), (1, 2), (5, 6)]);
        assert!(!union.is_connected());

        let join = BasicGraph::join(&path(2), &BasicGraph::with_vertices(1));
        assert_eq!(join.edges(), vec![(0, 1), (0, 2), (1, 2)]);
        assert!(join.is_clique(&[0, 1, 2]));
        assert!(join.is_maximal_clique(&[0, 1, 2]));
    }

    #[test]
    fn connectivity_and_distances() {
        assert!(!BasicGraph::new().is_connected());
        assert!(BasicGraph::with_vertices(1).is_connected());
        assert!(path(5).is_connected());
        assert!(!BasicGraph::with_vertices(2).is_connected());

        let p4 = path(4);
        assert_eq!(p4.shortest_path(0, 3).unwrap(), Some(3));
        assert_eq!(p4.shortest_path(2, 2).unwrap(), Some(0));
        assert_eq!(p4.shortest_path(0, 9), Err(GraphError::MissingVertex(9)));

        let mut split = p4.clone();
        split.remove_edge(1, 2);
        assert_eq!(split.shortest_path(0, 3).unwrap(), None);
        assert_eq!(split.components(), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn cliques() {
        let graph = BasicGraph::from_edges([(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
        assert!(graph.is_clique(&[0, 1, 2]));
        assert!(graph.is_clique(&[3]));
        assert!(!graph.is_clique(&[1, 3]));
        assert!(!graph.is_clique(&[7]));

        assert!(graph.is_maximal_clique(&[0, 1, 2]));
        assert!(graph.is_maximal_clique(&[2, 3]));
        assert!(!graph.is_maximal_clique(&[0, 1]));
        assert!(!graph.is_maximal_clique(&[]));
        assert!(BasicGraph::new().is_maximal_clique(&[]));
    }

    #[test]
    fn chordality() {
        assert!(cycle(3).is_chordal());
        assert!(!cycle(4).is_chordal());
        assert!(!cycle(7).is_chordal());
        assert!(path(8).is_chordal());
        assert!(subdivided_claw().is_chordal());
        assert!(BasicGraph::new().is_chordal());

        let mut chorded = cycle(5);
        chorded.add_edge(0, 2).unwrap();
        assert!(!chorded.is_chordal());
        chorded.add_edge(0, 3).unwrap();
        assert!(chorded.is_chordal());
    }

    #[test]
    fn lex_bfs_orders() {
        assert_eq!(path(4).lex_bfs(), vec![0, 1, 2, 3]);
        assert_eq!(path(4).perfect_elimination_ordering(), Some(vec![3, 2, 1, 0]));

        let graph = BasicGraph::from_edges([(0, 1), (1, 2), (2, 3), (1, 4), (2, 4)]).unwrap();
        assert_eq!(graph.lex_bfs(), vec![0, 1, 2, 4, 3]);
        assert_eq!(
            graph.maximal_cliques(),
            Some(vec![vec![2, 3], vec![1, 2, 4], vec![0, 1]])
        );

        assert_eq!(cycle(4).perfect_elimination_ordering(), None);
        assert_eq!(cycle(4).maximal_cliques(), None);
        assert!(!path(3).is_perfect_elimination_ordering(&[0, 0, 1]));
        assert!(!path(3).is_perfect_elimination_ordering(&[1, 0, 2]));
        assert!(path(3).is_perfect_elimination_ordering(&[0, 2, 1]));
    }

    #[test]
    fn chordality_tests_agree() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x1f2e3d);
        for _ in 0..200 {
            let n = rng.random_range(1..10);
            let mut graph = BasicGraph::with_vertices(n);
            for (u, v) in (0..n).tuple_combinations() {
                if rng.random_bool(0.4) {
                    graph.add_edge(u, v).unwrap();
                }
            }
            assert_eq!(
                graph.is_chordal(),
                graph.perfect_elimination_ordering().is_some()
            );
        }
    }

    #[test]
    fn asteroidal_triples() {
        let claw = subdivided_claw();
        assert_eq!(claw.asteroidal_triple(), Some([2, 4, 6]));
        assert!(claw.is_asteroidal_triple(2, 4, 6).unwrap());
        assert!(!claw.is_asteroidal_triple(1, 4, 6).unwrap());
        assert!(claw.is_asteroidal_triple(2, 2, 6).is_err());
        assert_eq!(
            claw.is_asteroidal_triple(2, 4, 9),
            Err(GraphError::MissingVertex(9))
        );
        assert!(!claw.is_interval());

        assert!(cycle(4).is_at_free());
        assert!(!cycle(4).is_interval());
        assert_eq!(cycle(6).asteroidal_triple(), Some([0, 2, 4]));

        let mut star = BasicGraph::new();
        for leaf in 1..4 {
            star.add_edge(0, leaf).unwrap();
        }
        assert!(star.is_interval());
        assert!(path(6).is_interval());
    }

    #[test]
    fn random_interval_graphs() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let n = rng.random_range(1..12);
            let graph = random_interval_graph(&mut rng, n, 20);
            assert!(graph.is_chordal());
            assert!(graph.is_at_free());
            assert!(graph.is_interval());
        }
    }
}
