/*!
# Minimum Dominating Set

A set `D` dominates a graph if every vertex is in `D` or adjacent to a vertex of `D`. A minimum
dominating set is the union of minimum dominating sets of the connected components, each found
by enumerating the subsets of the component by increasing size.
*/

use tracing::{debug, trace};

use crate::algo::Connectivity;

use super::*;

/// Computes a minimum dominating set (sorted by handle).
///
/// Every connected component may have at most [`MAX_MASK_VERTICES`] vertices.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let two_triangles = disjoint_union(&complete_graph(3), &complete_graph(3));
/// let set = ExactDominatingSet::new(&two_triangles)
///     .solve(&Control::new())
///     .unwrap()
///     .found()
///     .unwrap();
/// assert_eq!(set, vec![0, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ExactDominatingSet {
    graph: SimpleGraph,
}

impl ExactDominatingSet {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }

    /// Smallest dominating set of a connected component, or `None` if cancelled.
    /// Every enumerated subset advances `progress` by one.
    fn dominate_component(
        &self,
        component: &[Node],
        control: &Control,
        progress: &mut Progress<'_>,
    ) -> Result<Option<Vec<Node>>> {
        let index = SubsetIndex::new(component.iter().copied())?;
        let closed: Vec<SubsetMask> = index
            .neighborhood_masks(&self.graph)
            .into_iter()
            .enumerate()
            .map(|(i, mask)| mask | (1 << i))
            .collect();
        let full = index.full_mask();

        for positions in Powerset::ascending(0..index.len())? {
            if control.is_cancelled() {
                return Ok(None);
            }
            progress.advance(1);

            let dominated = positions.iter().fold(0, |mask, &i| mask | closed[i]);
            if dominated == full {
                return Ok(Some(positions.into_iter().map(|i| index.node(i)).collect()));
            }
        }

        Ok(Some(component.to_vec()))
    }
}

impl Solver for ExactDominatingSet {
    type Output = Vec<Node>;

    fn solve(&mut self, control: &Control) -> Result<Outcome<Vec<Node>>> {
        debug!(
            n = self.graph.number_of_nodes(),
            m = self.graph.number_of_edges(),
            "dominating set started"
        );

        let components: Vec<Vec<Node>> = self.graph.connected_components().collect();
        let goal = components
            .iter()
            .map(|c| saturating_two_power(c.len() as u32))
            .fold(0u64, u64::saturating_add);
        let mut progress = control.progress(goal);
        let mut offset = 0u64;
        let mut dominating = Vec::new();

        for component in components {
            let Some(set) = self.dominate_component(&component, control, &mut progress)? else {
                debug!("dominating set cancelled");
                return Ok(Outcome::Cancelled);
            };
            trace!(size = component.len(), dominating = set.len(), "component dominated");

            dominating.extend(set);
            offset = offset.saturating_add(saturating_two_power(component.len() as u32));
            progress.set_current(offset);
        }

        dominating.sort_unstable();
        progress.finish();
        debug!(size = dominating.len(), "dominating set finished");
        Ok(Outcome::Found(dominating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::time::Duration;

    fn dominate(graph: &SimpleGraph) -> Vec<Node> {
        ExactDominatingSet::new(graph)
            .solve(&Control::new())
            .unwrap()
            .found()
            .unwrap()
    }

    #[test]
    fn small_graphs() {
        assert!(dominate(&SimpleGraph::empty()).is_empty());
        assert_eq!(dominate(&SimpleGraph::new(3)), vec![0, 1, 2]);
        assert_eq!(dominate(&star_graph(5)), vec![0]);
        assert_eq!(dominate(&path_graph(3)), vec![1]);
        assert_eq!(dominate(&cycle_graph(6)).len(), 2);
    }

    #[test]
    fn minimum_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        for n in 1..11 {
            for _ in 0..10 {
                let g = random_gnp(rng, n, 0.25);
                let set = dominate(&g);
                assert!(is_dominating_set(&g, &set));
                assert_eq!(set.len(), brute_force_domination_number(&g));
            }
        }
    }

    #[test]
    fn cancelled() {
        let control = Control::new();
        control.cancel();
        let outcome = ExactDominatingSet::new(&path_graph(4)).solve(&control).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);

        // nothing to enumerate
        let outcome = ExactDominatingSet::new(&SimpleGraph::empty()).solve(&control).unwrap();
        assert_eq!(outcome, Outcome::Found(vec![]));
    }

    #[test]
    fn reports_progress_per_subset() {
        let (listener, events) = ChannelListener::new();
        let control = Control::new()
            .with_listener(listener)
            .with_min_interval(Duration::ZERO);

        let set = ExactDominatingSet::new(&cycle_graph(12))
            .solve(&control)
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(set.len(), 4);

        let checkpoints: Vec<(u64, u64)> = events
            .try_iter()
            .filter_map(|e| match e {
                ProgressEvent::Checkpoint { current, goal } => Some((current, goal)),
                ProgressEvent::Percentage(_) => None,
            })
            .collect();
        assert!(checkpoints.iter().all(|&(_, goal)| goal == 1 << 12));
        assert!(checkpoints.iter().any(|&(current, goal)| 0 < current && current < goal));
        assert!(checkpoints.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(checkpoints.last(), Some(&(1 << 12, 1 << 12)));
    }
}
