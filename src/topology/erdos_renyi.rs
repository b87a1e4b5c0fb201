//! Erdős–Rényi G(n, p) generator.

use rand::Rng;

use crate::graph::Graph;

/// Link every unordered pair of `0..n` independently with probability `p`.
///
/// `p` must already be validated to lie in `[0, 1]`.
pub(crate) fn generate<R: Rng>(n: usize, p: f64, rng: &mut R) -> Graph {
    let mut graph = Graph::with_nodes(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}
