/*!
# Hamiltonian Paths and Cycles

Subset dynamic program of Bellman, Held and Karp: `ends[S]` is the set of vertices `v` such that
some path visits exactly the vertices of `S` and ends in `v`. Singletons are the base case and

```text
    v ∈ ends[S]  <=>  ends[S \ {v}] ∩ N(v) ≠ ∅
```

The table has `2^n` entries of `n` bits each, hence a (configurable) vertex limit applies. A walk is
reconstructed backwards from an accepting entry by locating a real edge at each step.

Before running the program, cheap necessary conditions are checked: a graph with a Hamiltonian
path is connected and no vertex removal leaves more than two components; a graph with a
Hamiltonian cycle is connected and has no cut vertex at all.
*/

use itertools::Itertools;
use tracing::{debug, error, trace};

use crate::algo::{Connectivity, CutsAndBridges};

use super::*;

/// Default vertex limit of the Hamiltonian solvers
pub const DEFAULT_HAMILTONIAN_LIMIT: usize = 25;

/// Largest supported vertex limit
pub const MAX_HAMILTONIAN_LIMIT: usize = 32;

/// A Hamiltonian path or cycle: vertices in visiting order and the traversed edges (for a cycle
/// the last edge closes it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamiltonianWalk {
    pub vertices: Vec<Node>,
    pub edges: Vec<EdgeId>,
}

/// DP table over position masks
struct EndTable {
    index: SubsetIndex,
    neighbors: Vec<SubsetMask>,
    ends: Vec<u32>,
}

impl EndTable {
    fn new(graph: &SimpleGraph) -> Result<Self> {
        let index = SubsetIndex::of_graph(graph)?;
        let neighbors = index.neighborhood_masks(graph);
        Ok(Self {
            ends: vec![0; index.number_of_subsets() as usize],
            index,
            neighbors,
        })
    }

    /// Fills the table for paths starting anywhere (`start = None`) or at a fixed position.
    /// Returns *false* if cancelled.
    fn fill(&mut self, start: Option<usize>, control: &Control) -> Result<bool> {
        let n = self.index.len();
        match start {
            Some(s) => self.ends[1 << s] = 1 << s,
            None => (0..n).for_each(|v| self.ends[1 << v] = 1 << v),
        }

        // one step per subset; the empty set and singletons are settled
        let mut progress = control.progress(self.index.number_of_subsets());
        progress.advance(n as u64 + 1);
        for size in 2..=n {
            if control.is_cancelled() {
                return Ok(false);
            }
            trace!(size, "hamiltonian table: subset size");

            for mask in self.index.subsets_of_size(size)? {
                progress.advance(1);
                if let Some(s) = start
                    && mask & (1 << s) == 0
                {
                    continue;
                }

                let mut ends = 0u32;
                for v in MaskBits::new(mask) {
                    let before = self.ends[(mask & !(1 << v)) as usize] as SubsetMask;
                    if before & self.neighbors[v] != 0 {
                        ends |= 1 << v;
                    }
                }
                self.ends[mask as usize] = ends;
            }
        }

        progress.finish();
        Ok(true)
    }

    fn full_ends(&self) -> SubsetMask {
        self.ends[self.index.full_mask() as usize] as SubsetMask
    }

    /// Walks the table backwards from `(full, last)`; returns positions in visiting order
    fn reconstruct(&self, last: usize) -> Result<Vec<usize>> {
        let mut mask = self.index.full_mask();
        let mut v = last;
        let mut order = vec![v];

        while mask.count_ones() > 1 {
            mask &= !(1 << v);
            let candidates = self.ends[mask as usize] as SubsetMask & self.neighbors[v];
            if candidates == 0 {
                let msg = format!(
                    "no predecessor of vertex {} for a subset of {} vertices",
                    self.index.node(v),
                    mask.count_ones()
                );
                error!("{msg}");
                return Err(GraphError::InconsistentTable(msg));
            }
            v = candidates.trailing_zeros() as usize;
            order.push(v);
        }

        order.reverse();
        Ok(order)
    }

    /// Maps positions to vertices and locates the edges between consecutive vertices
    fn walk(&self, graph: &SimpleGraph, order: &[usize], closed: bool) -> Result<HamiltonianWalk> {
        let vertices = order.iter().map(|&i| self.index.node(i)).collect_vec();

        let mut pairs = vertices.iter().copied().tuple_windows().collect_vec();
        if closed {
            pairs.push((vertices[vertices.len() - 1], vertices[0]));
        }

        let edges = pairs
            .into_iter()
            .map(|(u, v)| {
                graph.edge_between(u, v).ok_or_else(|| {
                    let msg = format!("table claims an edge between {u} and {v}");
                    error!("{msg}");
                    GraphError::InconsistentTable(msg)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(HamiltonianWalk { vertices, edges })
    }
}

fn check_limit(graph: &SimpleGraph, limit: usize) -> Result<()> {
    let n = graph.len();
    if n > limit {
        return Err(GraphError::invalid_argument(format!(
            "hamiltonian search is limited to {limit} vertices, got {n}"
        )));
    }
    Ok(())
}

/// Searches a Hamiltonian path.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let walk = HamiltonianPath::new(&star_graph(2))
///     .solve(&Control::new())
///     .unwrap()
///     .found()
///     .unwrap();
/// assert_eq!(walk.vertices, vec![2, 0, 1]);
/// assert_eq!(walk.edges.len(), 2);
///
/// assert!(HamiltonianPath::new(&star_graph(3)).solve(&Control::new()).unwrap().is_absent());
/// ```
#[derive(Debug, Clone)]
pub struct HamiltonianPath {
    graph: SimpleGraph,
    limit: usize,
}

impl HamiltonianPath {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
            limit: DEFAULT_HAMILTONIAN_LIMIT,
        }
    }

    /// Sets the largest number of vertices accepted (at most [`MAX_HAMILTONIAN_LIMIT`])
    pub fn set_vertex_limit(&mut self, limit: usize) {
        self.limit = limit.min(MAX_HAMILTONIAN_LIMIT);
    }

    /// Sets the largest number of vertices accepted (at most [`MAX_HAMILTONIAN_LIMIT`])
    pub fn with_vertex_limit(mut self, limit: usize) -> Self {
        self.set_vertex_limit(limit);
        self
    }

    fn obviously_absent(&self) -> bool {
        let g = &self.graph;
        !g.is_connected()
            || g
                .find_all_cut_vertices()
                .into_iter()
                .any(|u| g.number_of_components_without_node(u) > 2)
    }
}

impl Solver for HamiltonianPath {
    type Output = HamiltonianWalk;

    fn solve(&mut self, control: &Control) -> Result<Outcome<HamiltonianWalk>> {
        debug!(
            n = self.graph.number_of_nodes(),
            m = self.graph.number_of_edges(),
            "hamiltonian path started"
        );

        if self.obviously_absent() {
            debug!("hamiltonian path excluded by connectivity");
            return Ok(Outcome::Absent);
        }
        check_limit(&self.graph, self.limit)?;

        let mut table = EndTable::new(&self.graph)?;
        if !table.fill(None, control)? {
            debug!("hamiltonian path cancelled");
            return Ok(Outcome::Cancelled);
        }

        let ends = table.full_ends();
        if ends == 0 {
            debug!("no hamiltonian path");
            return Ok(Outcome::Absent);
        }

        let order = table.reconstruct(ends.trailing_zeros() as usize)?;
        let walk = table.walk(&self.graph, &order, false)?;
        debug!("hamiltonian path found");
        Ok(Outcome::Found(walk))
    }
}

/// Searches a Hamiltonian cycle. Graphs with fewer than three vertices have none.
///
/// The search starts at a vertex of minimum degree, which is also the first vertex of the
/// reported cycle.
///
/// # Example
/// ```
/// use grapher::{gens::*, solve::*};
///
/// let cycle = HamiltonianCycle::new(&complete_graph(3))
///     .solve(&Control::new())
///     .unwrap()
///     .found()
///     .unwrap();
/// assert_eq!(cycle.vertices.len(), 3);
/// assert_eq!(cycle.edges.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct HamiltonianCycle {
    graph: SimpleGraph,
    limit: usize,
}

impl HamiltonianCycle {
    pub fn new(graph: &SimpleGraph) -> Self {
        Self {
            graph: graph.clone(),
            limit: DEFAULT_HAMILTONIAN_LIMIT,
        }
    }

    /// Sets the largest number of vertices accepted (at most [`MAX_HAMILTONIAN_LIMIT`])
    pub fn set_vertex_limit(&mut self, limit: usize) {
        self.limit = limit.min(MAX_HAMILTONIAN_LIMIT);
    }

    /// Sets the largest number of vertices accepted (at most [`MAX_HAMILTONIAN_LIMIT`])
    pub fn with_vertex_limit(mut self, limit: usize) -> Self {
        self.set_vertex_limit(limit);
        self
    }

    fn obviously_absent(&self) -> bool {
        let g = &self.graph;
        g.number_of_nodes() < 3 || !g.is_connected() || g.find_cut_vertex().is_some()
    }
}

impl Solver for HamiltonianCycle {
    type Output = HamiltonianWalk;

    fn solve(&mut self, control: &Control) -> Result<Outcome<HamiltonianWalk>> {
        debug!(
            n = self.graph.number_of_nodes(),
            m = self.graph.number_of_edges(),
            "hamiltonian cycle started"
        );

        if self.obviously_absent() {
            debug!("hamiltonian cycle excluded by connectivity");
            return Ok(Outcome::Absent);
        }
        check_limit(&self.graph, self.limit)?;

        let mut table = EndTable::new(&self.graph)?;
        let start = self
            .graph
            .vertices()
            .min_by_key(|&u| self.graph.degree_of(u))
            .and_then(|u| table.index.position(u))
            .unwrap_or(0);

        if !table.fill(Some(start), control)? {
            debug!("hamiltonian cycle cancelled");
            return Ok(Outcome::Cancelled);
        }

        let closing = table.full_ends() & table.neighbors[start];
        if closing == 0 {
            debug!("no hamiltonian cycle");
            return Ok(Outcome::Absent);
        }

        let order = table.reconstruct(closing.trailing_zeros() as usize)?;
        debug_assert_eq!(order.first(), Some(&start));
        let walk = table.walk(&self.graph, &order, true)?;
        debug!("hamiltonian cycle found");
        Ok(Outcome::Found(walk))
    }
}
