/*!
# Graph Summary

A one-shot classification of a graph combining the cheap structural inspectors.
*/

use std::fmt::{self, Display};

use crate::interval::IntervalRecognition;

use super::*;

/// Coarse shape of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphShape {
    /// No vertices
    Empty,
    /// A single vertex
    Trivial,
    /// Connected and acyclic
    Tree,
    /// Disconnected and acyclic
    Forest,
    /// Connected with a cycle
    Connected,
    /// Disconnected with a cycle
    Disconnected,
}

impl Display for GraphShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphShape::Empty => "empty",
            GraphShape::Trivial => "trivial",
            GraphShape::Tree => "tree",
            GraphShape::Forest => "forest",
            GraphShape::Connected => "connected",
            GraphShape::Disconnected => "disconnected",
        };
        f.write_str(name)
    }
}

/// Structural overview of a graph.
///
/// # Example
/// ```
/// use grapher::{algo::*, gens::*};
///
/// let summary = GraphSummary::of(&cycle_graph(5));
/// assert_eq!(summary.shape, GraphShape::Connected);
/// assert_eq!(summary.girth, Some(5));
/// assert_eq!(summary.regularity, Some(2));
/// assert!(!summary.chordal);
/// assert!(summary.to_string().contains("srg(5, 2, 0, 1)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub order: NumNodes,
    pub size: NumEdges,
    pub components: NumNodes,
    pub shape: GraphShape,
    pub girth: Option<NumNodes>,
    pub complete: bool,
    pub bipartite: bool,
    pub chordal: bool,
    pub interval: bool,
    pub claw_free: bool,
    pub eulerian: bool,
    pub regularity: Option<NumNodes>,
    pub strongly_regular: Option<StronglyRegular>,
}

impl GraphSummary {
    /// Runs all polynomial inspectors on `graph`
    pub fn of(graph: &SimpleGraph) -> Self {
        let order = graph.number_of_nodes();
        let size = graph.number_of_edges();
        let components = graph.number_of_connected_components();
        let girth = graph.girth();

        let shape = match (order, components, girth) {
            (0, _, _) => GraphShape::Empty,
            (1, _, _) => GraphShape::Trivial,
            (_, 1, None) => GraphShape::Tree,
            (_, _, None) => GraphShape::Forest,
            (_, 1, Some(_)) => GraphShape::Connected,
            _ => GraphShape::Disconnected,
        };

        let order64 = order as u64;
        Self {
            order,
            size,
            components,
            shape,
            girth,
            complete: size as u64 * 2 == order64 * order64.saturating_sub(1),
            bipartite: graph.is_bipartite(),
            chordal: graph.is_chordal(),
            interval: graph.is_interval(),
            claw_free: graph.is_claw_free(),
            eulerian: graph.is_eulerian(),
            regularity: graph.regularity(),
            strongly_regular: graph.strongly_regular(),
        }
    }
}

impl Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} graph with {} vertices, {} edges and {} components",
            self.shape, self.order, self.size, self.components
        )?;
        match self.girth {
            Some(girth) => writeln!(f, "girth: {girth}")?,
            None => writeln!(f, "girth: acyclic")?,
        }

        let flags = [
            ("complete", self.complete),
            ("bipartite", self.bipartite),
            ("chordal", self.chordal),
            ("interval", self.interval),
            ("claw-free", self.claw_free),
            ("eulerian", self.eulerian),
        ];
        let properties: Vec<&str> = flags
            .iter()
            .filter(|(_, holds)| *holds)
            .map(|(name, _)| *name)
            .collect();
        writeln!(f, "properties: {}", properties.join(", "))?;

        match (self.regularity, self.strongly_regular) {
            (_, Some(srg)) => write!(f, "regularity: {srg}"),
            (Some(k), None) => write!(f, "regularity: {k}-regular"),
            (None, None) => write!(f, "regularity: irregular"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;

    #[test]
    fn shapes() {
        assert_eq!(GraphSummary::of(&SimpleGraph::empty()).shape, GraphShape::Empty);
        assert_eq!(GraphSummary::of(&SimpleGraph::new(1)).shape, GraphShape::Trivial);
        assert_eq!(GraphSummary::of(&star_graph(3)).shape, GraphShape::Tree);
        assert_eq!(
            GraphSummary::of(&disjoint_union(&path_graph(2), &path_graph(3))).shape,
            GraphShape::Forest
        );
        assert_eq!(
            GraphSummary::of(&disjoint_union(&complete_graph(3), &path_graph(3))).shape,
            GraphShape::Disconnected
        );
    }

    #[test]
    fn complete_graph_summary() {
        let summary = GraphSummary::of(&complete_graph(4));
        assert!(summary.complete);
        assert!(summary.chordal);
        assert!(summary.interval);
        assert!(!summary.bipartite);
        assert!(!summary.eulerian);
        assert_eq!(summary.regularity, Some(3));
        assert_eq!(summary.strongly_regular, None);
        assert_eq!(summary.components, 1);
    }

    #[test]
    fn display() {
        let text = GraphSummary::of(&star_graph(3)).to_string();
        assert!(text.starts_with("tree graph with 4 vertices, 3 edges and 1 components"));
        assert!(text.contains("girth: acyclic"));
        assert!(text.contains("bipartite"));
        assert!(!text.contains("claw-free"));
        assert!(text.ends_with("regularity: irregular"));
    }
}
