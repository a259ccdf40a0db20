/*!
# Substructure Generators

This module provides utility methods to add **substructures** to an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

Edges that already exist are kept, so substructures may overlap. Self-loops and edges to
missing vertices are rejected.

# Example

```rust
use grapher::{prelude::*, gens::*};

let mut g = SimpleGraph::new(5);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();
g.connect_clique([0, 2, 4]).unwrap();

assert_eq!(
    g.ordered_edges(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first (if there are at least three nodes).
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**.
    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.ensure_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied())?;
        if nodes.len() >= 3 {
            self.ensure_edge(nodes[nodes.len() - 1], nodes[0])?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, nodes: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.ensure_edge(u, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_path() {
        let mut g = SimpleGraph::new(6);
        g.connect_path([]).unwrap();
        g.connect_path([1]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([0, 3, 1, 4]).unwrap();
        assert_eq!(g.ordered_edges(), vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]);
    }

    #[test]
    fn connect_cycle() {
        let mut g = SimpleGraph::new(6);
        g.connect_cycle([1]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_cycle([1, 2]).unwrap();
        assert_eq!(g.number_of_edges(), 1);

        g.connect_cycle([0, 3, 1, 4]).unwrap();
        assert_eq!(g.number_of_edges(), 5);
        assert!(g.has_edge(4, 0));
    }

    #[test]
    fn connect_clique() {
        let mut g = SimpleGraph::new(6);
        g.connect_clique([1, 2, 4]).unwrap();
        assert_eq!(g.number_of_edges(), 3);
        g.connect_clique([1, 2, 4, 5]).unwrap();
        assert_eq!(g.number_of_edges(), 6);
    }

    #[test]
    fn rejects_invalid_edges() {
        let mut g = SimpleGraph::new(3);
        assert!(g.connect_path([0, 0]).is_err());
        assert!(g.connect_clique([0, 7]).is_err());
    }
}
