/*!
# Regular Deletion

Searches a smallest vertex set whose removal leaves a regular graph, by enumerating the induced
subgraphs from large to small.
*/

use tracing::debug;

use crate::algo::{InducedSubgraphs, Regularity};

use super::*;

/// Computes a minimum vertex deletion set leaving a regular induced subgraph, optionally of a
/// prescribed degree.
///
/// Without a prescribed degree a solution always exists (the empty graph is `0`-regular). With
/// degree `d > 0` the outcome is [`Outcome::Absent`] if no induced subgraph is `d`-regular.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let control = Control::new();
/// let deleted = RegularDeletion::new(&star_graph(3)).solve(&control).unwrap();
/// assert_eq!(deleted, Outcome::Found(vec![0]));
///
/// let deleted = RegularDeletion::new(&star_graph(3)).with_degree(1).solve(&control).unwrap();
/// assert_eq!(deleted.found().map(|set| set.len()), Some(2));
///
/// let deleted = RegularDeletion::new(&star_graph(3)).with_degree(2).solve(&control).unwrap();
/// assert!(deleted.is_absent());
/// ```
#[derive(Debug, Clone)]
pub struct RegularDeletion {
    graph: SimpleGraph,
    degree: Option<NumNodes>,
}

impl RegularDeletion {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
            degree: None,
        }
    }

    /// Requires the remaining graph to be `degree`-regular
    pub fn set_degree(&mut self, degree: Option<NumNodes>) {
        self.degree = degree;
    }

    /// Requires the remaining graph to be `degree`-regular
    pub fn with_degree(mut self, degree: NumNodes) -> Self {
        self.set_degree(Some(degree));
        self
    }
}

impl Solver for RegularDeletion {
    type Output = Vec<Node>;

    fn solve(&mut self, control: &Control) -> Result<Outcome<Vec<Node>>> {
        debug!(
            n = self.graph.number_of_nodes(),
            degree = ?self.degree,
            "regular deletion started"
        );

        let subgraphs = InducedSubgraphs::descending(&self.graph)?;
        let mut progress = control.progress_for(&self.graph);

        for sub in subgraphs {
            if control.is_cancelled() {
                debug!("regular deletion cancelled");
                return Ok(Outcome::Cancelled);
            }
            progress.advance(1);

            let Some(k) = sub.regularity() else {
                continue;
            };
            if self.degree.is_none_or(|d| d == k) {
                let deleted: Vec<Node> = self
                    .graph
                    .vertices()
                    .filter(|&u| !sub.has_vertex(u))
                    .collect();
                progress.finish();
                debug!(deleted = deleted.len(), regularity = k, "regular deletion finished");
                return Ok(Outcome::Found(deleted));
            }
        }

        progress.finish();
        Ok(Outcome::Absent)
    }
}
