/*!
# Claw Deletion

Searches a smallest edge set whose removal leaves a claw-free graph. Any solution must remove one
of the three edges of every claw, so a bounded search tree branches over the edges of the first
claw found; the budget is increased one by one until the search succeeds.

The search tree is walked with an explicit stack whose height never exceeds the budget.
*/

use tracing::{debug, trace};

use crate::algo::ClawDetection;

use super::*;

/// Computes a minimum claw-deletion edge set, reported as (sorted) edge handles of the input.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let star = star_graph(4);
/// let deleted = ClawDeletion::new(&star).solve(&Control::new()).unwrap().found().unwrap();
/// assert_eq!(deleted.len(), 2);
///
/// let none = ClawDeletion::new(&cycle_graph(6)).solve(&Control::new()).unwrap();
/// assert_eq!(none, Outcome::Found(vec![]));
/// ```
#[derive(Debug, Clone)]
pub struct ClawDeletion {
    graph: SimpleGraph,
}

/// A branching point: the edges of a claw and the index of the next edge to try
type Branch = ([Edge; 3], usize);

impl ClawDeletion {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    /// Depth-bounded search; `None` if cancelled, `Some(None)` if no solution within `budget`
    fn search(&self, budget: usize, control: &Control) -> Result<Option<Option<Vec<Edge>>>> {
        let mut work = self.graph.clone();
        let mut removed: Vec<Edge> = Vec::with_capacity(budget);
        let mut stack: Vec<Branch> = Vec::with_capacity(budget);

        loop {
            if control.is_cancelled() {
                return Ok(None);
            }

            match work.find_claw() {
                None => return Ok(Some(Some(removed))),
                Some(claw) if removed.len() < budget => {
                    stack.push((claw.arms.map(|arm| Edge(claw.center, arm)), 0));
                }
                Some(_) => {}
            }

            // move on to the next untried branch
            loop {
                let Some((edges, next)) = stack.last_mut() else {
                    return Ok(Some(None));
                };
                if *next > 0
                    && let Some(Edge(u, v)) = removed.pop()
                {
                    work.link(u, v);
                }
                if *next == edges.len() {
                    stack.pop();
                    continue;
                }

                let edge = edges[*next];
                *next += 1;
                work.remove_edge(edge.0, edge.1)?;
                removed.push(edge);
                break;
            }
        }
    }
}

impl Solver for ClawDeletion {
    type Output = Vec<EdgeId>;

    fn solve(&mut self, control: &Control) -> Result<Outcome<Vec<EdgeId>>> {
        let m = self.graph.number_of_edges() as usize;
        debug!(n = self.graph.number_of_nodes(), m, "claw deletion started");

        let mut progress = control.progress(m as u64 + 1);
        for budget in 0..=m {
            trace!(budget, "claw deletion budget");
            let Some(found) = self.search(budget, control)? else {
                debug!("claw deletion cancelled");
                return Ok(Outcome::Cancelled);
            };

            if let Some(removed) = found {
                let mut edges: Vec<EdgeId> = removed
                    .into_iter()
                    .filter_map(|Edge(u, v)| self.graph.edge_between(u, v))
                    .collect();
                edges.sort_unstable();

                progress.finish();
                debug!(deleted = edges.len(), "claw deletion finished");
                return Ok(Outcome::Found(edges));
            }
            progress.advance(1);
        }

        // removing all edges always succeeds
        Ok(Outcome::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn delete(graph: &SimpleGraph) -> Vec<EdgeId> {
        ClawDeletion::new(graph)
            .solve(&Control::new())
            .unwrap()
            .found()
            .unwrap()
    }

    fn without(graph: &SimpleGraph, edges: &[EdgeId]) -> SimpleGraph {
        let mut rest = graph.clone();
        for &e in edges {
            rest.remove_edge_by_id(e).unwrap();
        }
        rest
    }

    #[test]
    fn stars() {
        assert!(delete(&star_graph(2)).is_empty());
        assert_eq!(delete(&star_graph(3)).len(), 1);
        assert_eq!(delete(&star_graph(5)).len(), 3);
    }

    #[test]
    fn reports_original_handles() {
        let mut g = complete_graph(4);
        g.remove_edge(1, 2).unwrap();
        g.remove_edge(1, 3).unwrap();
        g.remove_edge(2, 3).unwrap();
        let deleted = delete(&g);
        assert_eq!(deleted.len(), 1);
        assert!(without(&g, &deleted).is_claw_free());
        assert!(g.endpoints(deleted[0]).is_some());
    }

    #[test]
    fn random_graphs_become_claw_free() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for _ in 0..15 {
            let g = random_gnp(rng, 7, 0.35);
            let deleted = delete(&g);
            assert!(without(&g, &deleted).is_claw_free());

            // minimality: no smaller subset of the edges works
            if let Some(k) = deleted.len().checked_sub(1) {
                let edges: Vec<EdgeId> = g.edges_with_ids().map(|(e, _)| e).collect();
                let smaller = Combinations::new(edges, k)
                    .unwrap()
                    .any(|subset| without(&g, &subset).is_claw_free());
                assert!(!smaller);
            }
        }
    }

    #[test]
    fn cancelled() {
        let control = Control::new();
        control.cancel();
        let outcome = ClawDeletion::new(&star_graph(3)).solve(&control).unwrap();
        assert!(outcome.is_cancelled());
    }
}
