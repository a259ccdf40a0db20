/*!
# Clique Trees

A clique tree of a chordal graph connects its maximal cliques such that, for every vertex, the
cliques containing it induce a subtree. It is obtained as a maximum weight spanning tree of the
clique intersection graph, where two cliques are joined with the size of their intersection as
weight. Cliques of different components are never joined, so disconnected graphs yield a forest.
*/

use itertools::Itertools;

use super::*;

/// Maximal cliques linked from child to parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueTree {
    cliques: Vec<Clique>,
    parents: Vec<Option<usize>>,
}

impl CliqueTree {
    /// Links the cliques with Prim's algorithm on intersection sizes; each tree is rooted at
    /// its clique with the smallest index and ties prefer smaller indices.
    pub fn new(cliques: Vec<Clique>) -> Self {
        let k = cliques.len();
        let mut parents = vec![None; k];
        let mut in_tree = vec![false; k];
        let mut best: Vec<(usize, Option<usize>)> = vec![(0, None); k];

        while let Some(next) = (0..k)
            .filter(|&i| !in_tree[i])
            .max_by(|&i, &j| best[i].0.cmp(&best[j].0).then(j.cmp(&i)))
        {
            in_tree[next] = true;
            parents[next] = best[next].1;
            for other in (0..k).filter(|&i| !in_tree[i]) {
                let weight = intersection(&cliques[next], &cliques[other]).len();
                if weight > best[other].0 {
                    best[other] = (weight, Some(next));
                }
            }
        }

        Self { cliques, parents }
    }

    /// Clique tree of a chordal graph, `None` if the graph is not chordal
    pub fn of_graph(graph: &BasicGraph) -> Option<Self> {
        graph.maximal_cliques().map(Self::new)
    }

    pub fn cliques(&self) -> &[Clique] {
        &self.cliques
    }

    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    /// Parent of clique `i`, `None` for roots
    pub fn parent(&self, i: usize) -> Option<usize> {
        self.parents.get(i).copied().flatten()
    }

    /// All links `(child, parent)` ordered by child
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|parent| (child, parent)))
    }

    /// Vertices shared by clique `i` and its parent
    pub fn separator(&self, i: usize) -> Option<Vec<Vertex>> {
        let parent = self.parent(i)?;
        Some(intersection(&self.cliques[i], &self.cliques[parent]))
    }

    /// Returns *true* if the cliques containing `v` induce a connected subtree
    pub fn is_subtree(&self, v: Vertex) -> bool {
        let holds = self
            .cliques
            .iter()
            .map(|clique| clique.binary_search(&v).is_ok())
            .collect_vec();
        let members = holds.iter().filter(|&&h| h).count();
        let links = self
            .links()
            .filter(|&(child, parent)| holds[child] && holds[parent])
            .count();
        members == 0 || links + 1 == members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_interval_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn star() {
        let star = BasicGraph::from_edges([(0, 1), (0, 2), (0, 3)]).unwrap();
        let tree = CliqueTree::of_graph(&star).unwrap();
        assert_eq!(tree.cliques(), &[vec![0, 3], vec![0, 2], vec![0, 1]]);
        assert_eq!(tree.links().collect_vec(), vec![(1, 0), (2, 0)]);
        assert_eq!(tree.separator(2), Some(vec![0]));
        assert_eq!(tree.separator(0), None);
    }

    #[test]
    fn path_links_in_sequence() {
        let path = BasicGraph::from_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
        let tree = CliqueTree::of_graph(&path).unwrap();
        assert_eq!(tree.cliques(), &[vec![2, 3], vec![1, 2], vec![0, 1]]);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(2), Some(1));
    }

    #[test]
    fn forest_for_components() {
        let graph = BasicGraph::from_edges([(0, 1), (2, 3), (3, 4)]).unwrap();
        let tree = CliqueTree::of_graph(&graph).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.links().count(), 1);
        assert!(CliqueTree::of_graph(&BasicGraph::new()).unwrap().is_empty());
    }

    #[test]
    fn non_chordal() {
        let c4 = BasicGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert!(CliqueTree::of_graph(&c4).is_none());
    }

    #[test]
    fn subtree_property() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xc11c);
        for _ in 0..100 {
            let n = rng.random_range(1..14);
            let graph = random_interval_graph(&mut rng, n, 16);
            let tree = CliqueTree::of_graph(&graph).unwrap();

            assert!(tree.len() <= graph.order());
            assert!(tree.cliques().iter().all(|c| graph.is_maximal_clique(c)));
            assert_eq!(tree.links().count() + graph.components().len(), tree.len());
            assert!(graph.vertices().into_iter().all(|v| tree.is_subtree(v)));
        }
    }
}
