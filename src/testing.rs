//! Brute-force oracles for the tests of the exact solvers

use itertools::Itertools;
use rand::Rng;

use crate::{algo::*, interval::*, prelude::*, utils::*};

/// Returns *true* if the vertices can be colored with `k` colors such that adjacent vertices
/// receive different colors (exhaustive backtracking over all assignments)
pub fn brute_force_colorable(graph: &SimpleGraph, k: usize) -> bool {
    fn extend(graph: &SimpleGraph, nodes: &[Node], colors: &mut Vec<usize>, k: usize) -> bool {
        let Some(&u) = nodes.get(colors.len()) else {
            return true;
        };
        for c in 0..k {
            let conflict = nodes[..colors.len()]
                .iter()
                .zip(colors.iter())
                .any(|(&v, &cv)| cv == c && graph.has_edge(u, v));
            if !conflict {
                colors.push(c);
                if extend(graph, nodes, colors, k) {
                    return true;
                }
                colors.pop();
            }
        }
        false
    }

    let nodes = graph.vertices().collect_vec();
    extend(graph, &nodes, &mut Vec::new(), k)
}

/// Smallest `k` such that the graph is `k`-colorable
pub fn brute_force_chromatic_number(graph: &SimpleGraph) -> usize {
    (0..)
        .find(|&k| brute_force_colorable(graph, k))
        .unwrap_or_default()
}

/// Returns *true* if consecutive vertices are adjacent
pub fn is_walk(graph: &SimpleGraph, nodes: &[Node]) -> bool {
    nodes.windows(2).all(|w| graph.has_edge(w[0], w[1]))
}

/// Searches all vertex permutations for a Hamiltonian path
pub fn brute_force_hamiltonian_path(graph: &SimpleGraph) -> bool {
    !graph.is_empty() && Permutations::new(graph.vertices()).any(|perm| is_walk(graph, &perm))
}

/// Searches all vertex permutations for a Hamiltonian cycle
pub fn brute_force_hamiltonian_cycle(graph: &SimpleGraph) -> bool {
    graph.number_of_nodes() >= 3
        && Permutations::new(graph.vertices())
            .any(|perm| is_walk(graph, &perm) && graph.has_edge(perm[0], perm[perm.len() - 1]))
}

/// Returns *true* if every vertex is in `set` or adjacent to a vertex of `set`
pub fn is_dominating_set(graph: &SimpleGraph, set: &[Node]) -> bool {
    graph.closed_neighbors_of_set(set.iter().copied()).cardinality() == graph.number_of_nodes()
}

/// Size of a smallest dominating set
pub fn brute_force_domination_number(graph: &SimpleGraph) -> usize {
    Powerset::ascending(graph.vertices())
        .unwrap()
        .find(|set| is_dominating_set(graph, set))
        .map_or(0, |set| set.len())
}

/// Size of a smallest edge set separating `s` from `t`, which equals the maximum number of
/// edge-disjoint `s-t` paths
pub fn brute_force_min_cut(graph: &SimpleGraph, s: Node, t: Node) -> usize {
    let edges = graph.ordered_edges();
    for cut in Powerset::ascending(edges).unwrap() {
        let mut rest = graph.clone();
        for Edge(u, v) in &cut {
            rest.remove_edge(*u, *v).unwrap();
        }
        if rest.shortest_path(s, t).is_none() {
            return cut.len();
        }
    }
    unreachable!("removing all edges separates distinct vertices")
}

/// Intersection graph of `n` random intervals within `0..span`
pub fn random_interval_graph(rng: &mut impl Rng, n: Vertex, span: u32) -> BasicGraph {
    let intervals = (0..n)
        .map(|_| {
            let start = rng.random_range(0..span);
            (start, rng.random_range(start..span))
        })
        .collect_vec();

    let mut graph = BasicGraph::with_vertices(n);
    for ((u, &(a, b)), (v, &(c, d))) in (0..n).zip(&intervals).tuple_combinations() {
        if a <= d && c <= b {
            graph.add_edge(u, v).unwrap();
        }
    }
    graph
}
