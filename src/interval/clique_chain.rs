/*!
# Clique Chains

A clique chain orders the maximal cliques of a graph such that every vertex occupies a
contiguous run of cliques. Such an ordering exists iff the graph is an interval graph.

The chain is computed by partition refinement on an ordered list of clique classes, starting
with a single class of all maximal cliques:
- Without pending pivots, the clique last discovered along the elimination ordering is split
  off behind the first class with more than one clique.
- Otherwise a pivot vertex `x` is taken. The first class holding a clique of `x` is split into
  `[rest, cliques with x]`, the last one into `[cliques with x, rest]`.

After each split, every clique tree link running between the separated cliques and the rest is
removed and the vertices shared along it become pivots.
*/

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Maximal cliques in chain order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliqueChain {
    cliques: Vec<Clique>,
}

impl CliqueChain {
    /// Refines `tree` into a chain. `order` must be the perfect elimination ordering of `graph`
    /// the cliques of `tree` were read off.
    ///
    /// If `graph` is not an interval graph, the result is some ordering of the cliques that is
    /// not consecutive.
    pub fn new(tree: &CliqueTree, graph: &BasicGraph, order: &[Vertex]) -> Result<Self> {
        let cliques = tree.cliques();
        let position = graph
            .positions(order)
            .filter(|_| order.len() == graph.order())
            .ok_or_else(|| {
                GraphError::invalid_argument("the ordering must list every vertex exactly once")
            })?;

        let index: FxHashMap<&[Vertex], usize> = cliques
            .iter()
            .enumerate()
            .map(|(i, clique)| (clique.as_slice(), i))
            .collect();
        let discovered = order
            .iter()
            .filter_map(|&v| {
                let right = graph.right_neighborhood(v, &position);
                index.get(right.as_slice()).copied()
            })
            .collect_vec();

        let mut classes: Vec<Vec<usize>> = Vec::new();
        if !cliques.is_empty() {
            classes.push((0..cliques.len()).collect());
        }
        let mut links = tree.links().collect_vec();
        let mut pivots: Vec<Vertex> = Vec::new();
        let mut processed = FxHashSet::default();

        while let Some(open) = classes.iter().position(|class| class.len() > 1) {
            let separated = if let Some(x) = pivots.pop() {
                if !processed.insert(x) {
                    continue;
                }
                let separated = cliques
                    .iter()
                    .map(|clique| clique.binary_search(&x).is_ok())
                    .collect_vec();
                let holds = |class: &Vec<usize>| class.iter().any(|&c| separated[c]);
                let (Some(first), Some(last)) = (
                    classes.iter().position(holds),
                    classes.iter().rposition(holds),
                ) else {
                    continue;
                };
                trace!(pivot = x, first, last, "refining clique classes");

                let (inside, outside): (Vec<usize>, Vec<usize>) =
                    classes[last].iter().copied().partition(|&c| separated[c]);
                classes[last] = outside;
                classes.insert(last, inside);
                if first != last {
                    let (inside, outside): (Vec<usize>, Vec<usize>) =
                        classes[first].iter().copied().partition(|&c| separated[c]);
                    classes[first] = inside;
                    classes.insert(first, outside);
                }
                separated
            } else {
                let clique = discovered
                    .iter()
                    .copied()
                    .find(|c| classes[open].contains(c))
                    .ok_or_else(|| {
                        GraphError::InconsistentTable(format!(
                            "no clique of class {open} is discovered by the ordering"
                        ))
                    })?;
                classes[open].retain(|&c| c != clique);
                classes.insert(open + 1, vec![clique]);

                let mut separated = vec![false; cliques.len()];
                separated[clique] = true;
                separated
            };

            links.retain(|&(child, parent)| {
                if separated[child] == separated[parent] {
                    return true;
                }
                pivots.extend(intersection(&cliques[child], &cliques[parent]));
                false
            });
            classes.retain(|class| !class.is_empty());
        }

        Ok(Self {
            cliques: classes
                .iter()
                .filter_map(|class| class.first())
                .map(|&c| cliques[c].clone())
                .collect(),
        })
    }

    /// Computes a clique chain component by component.
    /// Returns `None` if the graph is not an interval graph.
    ///
    /// # Example
    /// ```
    /// use grapher::interval::*;
    ///
    /// // a path with a triangle over its middle edge
    /// let graph = BasicGraph::from_edges([(0, 1), (1, 2), (2, 3), (1, 4), (2, 4)]).unwrap();
    /// let chain = CliqueChain::of_graph(&graph).unwrap().unwrap();
    /// assert_eq!(chain.cliques(), &[vec![0, 1], vec![1, 2, 4], vec![2, 3]]);
    /// assert!(chain.is_consecutive());
    /// ```
    pub fn of_graph(graph: &BasicGraph) -> Result<Option<Self>> {
        let mut cliques = Vec::new();
        for component in graph.components() {
            let subgraph = graph.induced_subgraph(&component);
            let Some(order) = subgraph.perfect_elimination_ordering() else {
                debug!(graph = graph.name(), "not chordal, no clique chain");
                return Ok(None);
            };
            let tree = CliqueTree::new(subgraph.maximal_cliques_along(&order));
            cliques.extend(Self::new(&tree, &subgraph, &order)?.cliques);
        }

        let chain = Self { cliques };
        if !chain.is_consecutive() {
            debug!(graph = graph.name(), "cliques cannot be arranged consecutively");
            return Ok(None);
        }
        Ok(Some(chain))
    }

    pub fn cliques(&self) -> &[Clique] {
        &self.cliques
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clique> + '_ {
        self.cliques.iter()
    }

    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    pub fn into_cliques(self) -> Vec<Clique> {
        self.cliques
    }

    /// Returns *true* if the cliques containing any vertex are contiguous in the chain
    pub fn is_consecutive(&self) -> bool {
        let mut closed: FxHashSet<Vertex> = FxHashSet::default();
        let mut previous: &[Vertex] = &[];
        for clique in &self.cliques {
            for &v in previous {
                if clique.binary_search(&v).is_err() {
                    closed.insert(v);
                }
            }
            if clique.iter().any(|v| closed.contains(v)) {
                return false;
            }
            previous = clique;
        }
        true
    }
}

impl From<Vec<Clique>> for CliqueChain {
    fn from(mut cliques: Vec<Clique>) -> Self {
        for clique in &mut cliques {
            clique.sort_unstable();
        }
        Self { cliques }
    }
}
