//! Watts–Strogatz small-world generator.

use rand::Rng;

use crate::graph::Graph;

/// Build a ring lattice on `0..n` with degree `k`, then rewire.
///
/// Lattice edges are visited ring distance by ring distance. Each one is
/// rewired with probability `beta`: its far endpoint moves to a uniformly
/// random node that is neither the near endpoint nor already adjacent to
/// it. Nodes already linked to every other node keep their edge. Requires an
/// even `k` with `0 < k < n`.
pub(crate) fn generate<R: Rng>(n: usize, k: usize, beta: f64, rng: &mut R) -> Graph {
    let mut graph = Graph::with_nodes(n);
    let half = k / 2;

    for offset in 1..=half {
        for u in 0..n {
            graph.add_edge(u, (u + offset) % n);
        }
    }

    for offset in 1..=half {
        for u in 0..n {
            if !rng.gen_bool(beta) {
                continue;
            }
            if graph.degree(u) >= n - 1 {
                continue;
            }
            let v = (u + offset) % n;
            let mut w = rng.gen_range(0..n);
            while w == u || graph.has_edge(u, w) {
                w = rng.gen_range(0..n);
            }
            graph.remove_edge(u, v);
            graph.add_edge(u, w);
        }
    }

    graph
}
