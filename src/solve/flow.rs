/*!
# Maximum Flow

Unit-capacity maximum flow between two vertices of an undirected graph (Ford–Fulkerson with
breadth-first augmenting paths). Each edge carries at most one unit of flow in one direction.
In the residual graph an edge `{u, v}` can be traversed from `u` to `v` unless it already carries
flow from `u` to `v`; traversing it against existing flow cancels that flow.

The flow value equals the maximum number of edge-disjoint paths between the two vertices.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;
use tracing::{debug, trace};

use super::*;

/// Maximum flow value and the edges carrying flow (sorted by handle)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResult {
    pub value: NumEdges,
    pub edges: Vec<EdgeId>,
}

/// Computes a maximum unit-capacity flow from `source` to `target`.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let flow = MaxFlow::new(&cycle_graph(6), 0, 3)
///     .solve(&Control::new())
///     .unwrap()
///     .found()
///     .unwrap();
/// assert_eq!(flow.value, 2);
/// assert_eq!(flow.edges.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct MaxFlow {
    graph: SimpleGraph,
    source: Node,
    target: Node,
}

impl MaxFlow {
    pub fn new(graph: &SimpleGraph, source: Node, target: Node) -> Self {
        Self {
            graph: graph.clone(),
            source,
            target,
        }
    }

    /// Uses a selection of exactly two vertices as source and target
    pub fn from_selection(graph: &SimpleGraph, selection: &[Node]) -> Result<Self> {
        match *selection {
            [source, target] => Ok(Self::new(graph, source, target)),
            _ => Err(GraphError::invalid_argument(format!(
                "flow needs exactly two selected vertices, got {}",
                selection.len()
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        for u in [self.source, self.target] {
            if !self.graph.has_vertex(u) {
                return Err(GraphError::MissingVertex(u));
            }
        }
        if self.source == self.target {
            return Err(GraphError::invalid_argument(format!(
                "source and target must differ, both are {}",
                self.source
            )));
        }
        Ok(())
    }

    /// Breadth-first search in the residual graph; returns the augmenting path from source to
    /// target
    fn augmenting_path(&self, flow: &FxHashSet<(Node, Node)>) -> Option<Vec<Node>> {
        let g = &self.graph;
        let mut predecessor = vec![INVALID_NODE; g.vertex_bound() as usize];
        predecessor[self.source as usize] = self.source;

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            for v in g.neighbors_of(u) {
                if predecessor[v as usize] != INVALID_NODE || flow.contains(&(u, v)) {
                    continue;
                }
                predecessor[v as usize] = u;

                if v == self.target {
                    let mut path = vec![v];
                    let mut w = v;
                    while w != self.source {
                        w = predecessor[w as usize];
                        path.push(w);
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(v);
            }
        }
        None
    }
}

impl Solver for MaxFlow {
    type Output = FlowResult;

    fn solve(&mut self, control: &Control) -> Result<Outcome<FlowResult>> {
        self.validate()?;
        debug!(
            source = self.source,
            target = self.target,
            "maximum flow started"
        );

        let bound = self
            .graph
            .degree_of(self.source)
            .min(self.graph.degree_of(self.target));
        let mut progress = control.progress(bound as u64);

        let mut flow: FxHashSet<(Node, Node)> = FxHashSet::default();
        let mut value: NumEdges = 0;

        loop {
            if control.is_cancelled() {
                debug!("maximum flow cancelled");
                return Ok(Outcome::Cancelled);
            }

            let Some(path) = self.augmenting_path(&flow) else {
                break;
            };
            trace!(length = path.len() - 1, "augmenting path");

            for w in path.windows(2) {
                let (u, v) = (w[0], w[1]);
                if !flow.remove(&(v, u)) {
                    flow.insert((u, v));
                }
            }
            value += 1;
            progress.advance(1);
        }

        let mut edges: Vec<EdgeId> = flow
            .iter()
            .filter_map(|&(u, v)| self.graph.edge_between(u, v))
            .collect();
        edges.sort_unstable();

        progress.finish();
        debug!(value, "maximum flow finished");
        Ok(Outcome::Found(FlowResult { value, edges }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn max_flow(graph: &SimpleGraph, s: Node, t: Node) -> FlowResult {
        MaxFlow::new(graph, s, t)
            .solve(&Control::new())
            .unwrap()
            .found()
            .unwrap()
    }

    #[test]
    fn invalid_terminals() {
        let g = path_graph(3);
        assert!(MaxFlow::new(&g, 0, 0).solve(&Control::new()).is_err());
        assert!(MaxFlow::new(&g, 0, 9).solve(&Control::new()).is_err());
        assert!(MaxFlow::from_selection(&g, &[0]).is_err());
        assert!(MaxFlow::from_selection(&g, &[0, 1, 2]).is_err());
        assert!(MaxFlow::from_selection(&g, &[0, 2]).is_ok());
    }

    #[test]
    fn small_graphs() {
        assert_eq!(max_flow(&path_graph(4), 0, 3).value, 1);
        assert_eq!(max_flow(&complete_graph(5), 0, 4).value, 4);
        assert_eq!(max_flow(&SimpleGraph::new(2), 0, 1), FlowResult {
            value: 0,
            edges: vec![],
        });

        let split = disjoint_union(&complete_graph(3), &complete_graph(3));
        assert_eq!(max_flow(&split, 0, 4).value, 0);
    }

    #[test]
    fn cancellation_of_reverse_flow() {
        // the first BFS path 0-1-3-5 blocks 0-2-3-1-4-5 unless 1-3 is cancelled
        let g = SimpleGraph::from_edges(
            6,
            [(0, 1), (0, 2), (1, 3), (2, 3), (1, 4), (3, 5), (4, 5)],
        )
        .unwrap();
        let flow = max_flow(&g, 0, 5);
        assert_eq!(flow.value, 2);
        assert_eq!(flow.edges.len(), 6);
        assert!(!flow.edges.contains(&g.edge_between(1, 3).unwrap()));
    }

    #[test]
    fn matches_minimum_cut() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        for _ in 0..40 {
            let g = random_gnp(rng, 7, 0.4);
            if g.number_of_edges() > 14 {
                continue;
            }
            let flow = max_flow(&g, 0, 6);
            assert_eq!(flow.value as usize, brute_force_min_cut(&g, 0, 6));
            assert!(flow.edges.len() >= flow.value as usize);
        }
    }
}
