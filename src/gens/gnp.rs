use crate::utils::Probability;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge of a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Each unordered pair `u < v` is drawn exactly once, so the generated edges are normalized and
/// free of self-loops.
///
/// # Example
/// ```
/// use grapher::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let g = Gnp::new().nodes(8).prob(1.0).build(rng);
/// assert_eq!(g.number_of_edges(), 28);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `prob` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(_) if self.n < 2 => 0.0,
            GnpType::AvgDeg(d) => {
                let p = d / (self.n - 1) as f64;
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }

    /// Draws a graph on the vertices `0..n`
    pub fn build<R>(&self, rng: &mut R) -> SimpleGraph
    where
        R: Rng,
    {
        let mut g = SimpleGraph::new(self.n);
        for Edge(u, v) in self.stream(rng) {
            g.link(u, v);
        }
        g
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n-1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.probability();
        let n = self.n;
        (0..n)
            .flat_map(move |u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0);
        assert!(Gnp::new().nodes(10).prob(0.0).build(rng).is_edgeless());
        assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(rng).len(), 45);
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let n = 200;
        let g = Gnp::new().nodes(n).avg_deg(10.0).build(rng);
        let avg = 2.0 * g.number_of_edges() as f64 / n as f64;
        assert!((7.0..13.0).contains(&avg), "{avg}");
    }

    #[test]
    fn edges_are_normalized() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let edges = Gnp::new().nodes(30).prob(0.3).generate(rng);
        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
