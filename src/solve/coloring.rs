/*!
# Optimal Coloring

Turns the chromatic number `k` into an explicit `k`-coloring by repeatedly querying
[`ChromaticNumber`] on modified graphs:

- if making the current vertex `u` adjacent to all other vertices keeps the chromatic number at
  `k`, `u` (with everything merged into it so far) becomes a color class of its own,
- otherwise a binary search over the non-neighbors `w_1, w_2, ...` of `u` finds the largest `p`
  such that adding the edges `u w_1, ..., u w_p` keeps the chromatic number at `k`. Then `u` and
  `w_{p+1}` share a color in every optimal coloring, so `w_{p+1}` is merged into `u`.

Each step fixes one vertex, hence `O(n log n)` chromatic number computations suffice.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::algo::BipartiteTest;

use super::*;

/// Color classes: pairwise disjoint independent sets covering all vertices
pub type ColorClasses = Vec<Vec<Node>>;

/// Computes a coloring with the minimum number of colors.
///
/// Classes are sorted internally and by their smallest vertex.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let classes = OptimalColoring::new(&cycle_graph(5))
///     .solve(&Control::new())
///     .unwrap()
///     .found()
///     .unwrap();
/// assert_eq!(classes, vec![vec![0], vec![1, 3], vec![2, 4]]);
/// ```
#[derive(Debug, Clone)]
pub struct OptimalColoring {
    graph: SimpleGraph,
    chromatic_number: Option<NumNodes>,
}

impl OptimalColoring {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
            chromatic_number: None,
        }
    }

    /// Uses a known chromatic number instead of computing it
    pub fn set_chromatic_number(&mut self, k: NumNodes) {
        self.chromatic_number = Some(k);
    }

    /// Uses a known chromatic number instead of computing it
    pub fn with_chromatic_number(mut self, k: NumNodes) -> Self {
        self.set_chromatic_number(k);
        self
    }

    fn sorted(mut classes: ColorClasses) -> ColorClasses {
        classes.retain(|class| !class.is_empty());
        for class in &mut classes {
            class.sort_unstable();
        }
        classes.sort_unstable();
        classes
    }

    /// Searches the largest `p` such that connecting `u` to `candidates[..p]` keeps the
    /// chromatic number at `k`. Requires that connecting all candidates raises it.
    fn largest_safe_prefix(
        work: &SimpleGraph,
        u: Node,
        candidates: &[Node],
        k: NumNodes,
        control: &Control,
    ) -> Result<Outcome<usize>> {
        let (mut lower, mut upper) = (0, candidates.len() - 1);
        while lower < upper {
            let mid = (lower + upper).div_ceil(2);
            let mut trial = work.clone();
            for &w in &candidates[..mid] {
                trial.link(u, w);
            }
            match ChromaticNumber::new(&trial).solve(control)? {
                Outcome::Found(chi) if chi == k => lower = mid,
                Outcome::Found(_) => upper = mid - 1,
                _ => return Ok(Outcome::Cancelled),
            }
        }
        Ok(Outcome::Found(lower))
    }
}

impl Solver for OptimalColoring {
    type Output = ColorClasses;

    fn solve(&mut self, control: &Control) -> Result<Outcome<ColorClasses>> {
        let inner = control.silent();
        let k = match self.chromatic_number {
            Some(k) => k,
            None => match ChromaticNumber::new(&self.graph).solve(&inner)? {
                Outcome::Found(k) => k,
                _ => return Ok(Outcome::Cancelled),
            },
        };
        debug!(n = self.graph.number_of_nodes(), k, "optimal coloring started");

        match k {
            0 => return Ok(Outcome::Found(Vec::new())),
            1 => return Ok(Outcome::Found(vec![self.graph.vertices().collect()])),
            2 => {
                if let Some((left, right)) = self.graph.bipartition_sides() {
                    return Ok(Outcome::Found(Self::sorted(vec![left, right])));
                }
            }
            _ => {}
        }

        let mut work = self.graph.clone();
        let mut groups: FxHashMap<Node, Vec<Node>> =
            work.vertices().map(|u| (u, vec![u])).collect();
        let mut classes = ColorClasses::new();
        let mut progress = control.progress(self.graph.number_of_nodes() as u64);

        let mut pending = work.vertices().collect_vec();
        pending.reverse();
        while let Some(u) = pending.pop() {
            if control.is_cancelled() {
                debug!("optimal coloring cancelled");
                return Ok(Outcome::Cancelled);
            }

            let candidates = work
                .vertices()
                .filter(|&w| w != u && !work.has_edge(u, w))
                .collect_vec();

            let mut universal = work.clone();
            for &w in &candidates {
                universal.link(u, w);
            }
            let isolate = candidates.is_empty()
                || match ChromaticNumber::new(&universal).solve(&inner)? {
                    Outcome::Found(chi) => chi == k,
                    _ => return Ok(Outcome::Cancelled),
                };

            if isolate {
                trace!(u, "own color class");
                work = universal;
                let class = groups.remove(&u).unwrap_or_default();
                progress.advance(class.len() as u64);
                classes.push(class);
                continue;
            }

            let p = match Self::largest_safe_prefix(&work, u, &candidates, k, &inner)? {
                Outcome::Found(p) => p,
                _ => return Ok(Outcome::Cancelled),
            };
            let merged = candidates[p];
            trace!(u, merged, "merge");

            for &w in &candidates[..p] {
                work.link(u, w);
            }
            work.merge_vertices(u, merged)?;
            pending.retain(|&w| w != merged);
            pending.push(u);

            let absorbed = groups.remove(&merged).unwrap_or_default();
            groups.entry(u).or_default().extend(absorbed);
        }

        progress.finish();
        debug!(classes = classes.len(), "optimal coloring finished");
        Ok(Outcome::Found(Self::sorted(classes)))
    }
}
