/*!
# Distances

All-pairs shortest paths (Floyd–Warshall with unit weights) and the derived diameter and
center queries.
*/

use super::*;

/// All-pairs hop distances with path reconstruction
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    nodes: Vec<Node>,
    position: Vec<Option<usize>>,
    dist: Vec<Option<NumNodes>>,
    next: Vec<Option<usize>>,
}

impl DistanceMatrix {
    /// Runs Floyd–Warshall on the graph in `O(|V|^3)`
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList,
    {
        let nodes: Vec<Node> = graph.vertices().collect();
        let n = nodes.len();
        let mut position = vec![None; graph.vertex_bound() as usize];
        for (i, &u) in nodes.iter().enumerate() {
            position[u as usize] = Some(i);
        }

        let mut dist = vec![None; n * n];
        let mut next = vec![None; n * n];
        for (i, &u) in nodes.iter().enumerate() {
            dist[i * n + i] = Some(0);
            next[i * n + i] = Some(i);
            for v in graph.neighbors_of(u) {
                if let Some(j) = position[v as usize] {
                    dist[i * n + j] = Some(1);
                    next[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(dik) = dist[i * n + k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(dkj) = dist[k * n + j] else {
                        continue;
                    };
                    if dist[i * n + j].is_none_or(|dij| dik + dkj < dij) {
                        dist[i * n + j] = Some(dik + dkj);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        Self {
            nodes,
            position,
            dist,
            next,
        }
    }

    fn pos(&self, u: Node) -> Option<usize> {
        *self.position.get(u as usize)?
    }

    /// Hop distance between `u` and `v` (`None` if disconnected or not vertices)
    pub fn distance(&self, u: Node, v: Node) -> Option<NumNodes> {
        let n = self.nodes.len();
        self.dist[self.pos(u)? * n + self.pos(v)?]
    }

    /// A shortest path from `u` to `v` (both included)
    pub fn path(&self, u: Node, v: Node) -> Option<Vec<Node>> {
        let n = self.nodes.len();
        let (mut i, j) = (self.pos(u)?, self.pos(v)?);
        self.dist[i * n + j]?;

        let mut path = vec![u];
        while i != j {
            i = self.next[i * n + j]?;
            path.push(self.nodes[i]);
        }
        Some(path)
    }

    /// Largest distance from `u` to any vertex (`None` if some vertex is unreachable)
    pub fn eccentricity(&self, u: Node) -> Option<NumNodes> {
        let n = self.nodes.len();
        let i = self.pos(u)?;
        self.dist[i * n..(i + 1) * n]
            .iter()
            .try_fold(0, |ecc, d| d.map(|d| ecc.max(d)))
    }
}

/// Diameter and center
pub trait Distances: AdjacencyList + Sized {
    /// Computes all-pairs distances
    fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::new(self)
    }

    /// Returns the length of a longest shortest path, or `None` if the graph is empty or
    /// disconnected. A single vertex has diameter `0`.
    ///
    /// # Example
    /// ```
    /// use grapher::{prelude::*, algo::*, gens::*};
    ///
    /// assert_eq!(path_graph(4).diameter(), Some(3));
    /// assert_eq!(cycle_graph(7).diameter(), Some(3));
    /// assert_eq!(SimpleGraph::new(2).diameter(), None);
    /// ```
    fn diameter(&self) -> Option<NumNodes> {
        self.diameter_path().map(|path| path.len() as NumNodes - 1)
    }

    /// Returns a longest shortest path (the first one in handle order), or `None` if the graph
    /// is empty or disconnected
    fn diameter_path(&self) -> Option<Vec<Node>> {
        if !self.is_connected() {
            return None;
        }

        let matrix = self.distance_matrix();
        let mut best: Option<(NumNodes, Node, Node)> = None;
        for u in self.vertices() {
            for v in self.vertices() {
                let d = matrix.distance(u, v)?;
                if best.is_none_or(|(b, _, _)| d > b) {
                    best = Some((d, u, v));
                }
            }
        }

        let (_, u, v) = best?;
        matrix.path(u, v)
    }

    /// Returns a vertex of minimum eccentricity (the first one in handle order).
    ///
    /// Distances between different components are replaced by the *anti-size* of the
    /// vertex's component, i.e. the size of the largest component minus the size of its own
    /// component. Returns `None` only for the empty graph.
    fn center(&self) -> Option<Node> {
        let matrix = self.distance_matrix();
        let anti_size = component_anti_sizes(self);

        let mut best: Option<Node> = None;
        let mut min_ecc = self.number_of_nodes();
        for u in self.vertices() {
            let ecc = self
                .vertices()
                .filter(|&v| v != u)
                .map(|v| matrix.distance(u, v).unwrap_or(anti_size[u as usize]))
                .max()
                .unwrap_or(0);
            if ecc < min_ecc {
                min_ecc = ecc;
                best = Some(u);
            }
        }
        best
    }
}

impl<G> Distances for G where G: AdjacencyList {}

/// Largest component size minus own component size, indexed by handle
fn component_anti_sizes<G>(graph: &G) -> Vec<NumNodes>
where
    G: AdjacencyList,
{
    let components: Vec<Vec<Node>> = graph.connected_components().collect();
    let largest = components.iter().map(|cc| cc.len()).max().unwrap_or(0);

    let mut anti_size = vec![0; graph.vertex_bound() as usize];
    for cc in &components {
        for &u in cc {
            anti_size[u as usize] = (largest - cc.len()) as NumNodes;
        }
    }
    anti_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn trivial_graphs() {
        let empty = SimpleGraph::empty();
        assert_eq!(empty.diameter(), None);
        assert_eq!(empty.center(), None);

        let single = SimpleGraph::new(1);
        assert_eq!(single.diameter(), Some(0));
        assert_eq!(single.center(), Some(0));

        assert_eq!(path_graph(2).diameter(), Some(1));
    }

    #[test]
    fn path_center() {
        let g = path_graph(5);
        assert_eq!(g.center(), Some(2));
        assert_eq!(g.diameter_path(), Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(g.distance_matrix().eccentricity(2), Some(2));
    }

    #[test]
    fn disconnected_center() {
        // the triangle has anti-size 4, the middle of the path has eccentricity 3
        let g = disjoint_union(&complete_graph(3), &path_graph(7));
        assert_eq!(g.diameter(), None);
        assert_eq!(g.center(), Some(6));

        // ties are broken by the first vertex
        let h = disjoint_union(&complete_graph(3), &path_graph(5));
        assert_eq!(h.center(), Some(0));

        let two_triangles = disjoint_union(&complete_graph(3), &complete_graph(3));
        assert_eq!(two_triangles.diameter(), None);
        assert_eq!(two_triangles.center(), Some(0));
    }

    #[test]
    fn matrix_matches_bfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        for _ in 0..30 {
            let g = random_gnp(rng, 15, 0.15);
            let matrix = g.distance_matrix();
            for u in g.vertices() {
                let bfs = g.bfs_distances(u);
                for v in g.vertices() {
                    assert_eq!(matrix.distance(u, v), bfs[v as usize]);
                    if let Some(path) = matrix.path(u, v) {
                        assert_eq!(path.len() as NumNodes - 1, bfs[v as usize].unwrap());
                        assert!(path.windows(2).all(|w| g.has_edge(w[0], w[1])));
                    }
                }
            }
        }
    }
}
