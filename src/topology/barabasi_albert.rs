//! Barabási–Albert preferential attachment generator.
//!
//! Growth starts from `m` seed nodes without edges. Node `m` links to all of
//! them; every later node links to `m` distinct existing nodes drawn with
//! probability proportional to their degree. The result always carries
//! exactly `m * (n - m)` edges.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::{Graph, NodeId};

/// Grow a scale-free graph on `0..n`. Requires `1 <= m < n`.
pub(crate) fn generate<R: Rng>(n: usize, m: usize, rng: &mut R) -> Graph {
    let mut graph = Graph::with_nodes(n);

    // Each node appears once per incident edge, so a uniform pick from this
    // list is a degree-proportional pick.
    let mut repeated_nodes: Vec<NodeId> = Vec::with_capacity(2 * m * n.saturating_sub(m));

    for source in m..n {
        let targets: Vec<NodeId> = if source == m {
            (0..m).collect()
        } else {
            sample_by_degree(&repeated_nodes, m, rng)
        };

        for &target in &targets {
            graph.add_edge(source, target);
        }
        repeated_nodes.extend(targets.iter().copied());
        repeated_nodes.extend(std::iter::repeat(source).take(m));
    }

    graph
}

/// Draw `count` distinct nodes from the degree-weighted list
fn sample_by_degree<R: Rng>(repeated_nodes: &[NodeId], count: usize, rng: &mut R) -> Vec<NodeId> {
    let mut chosen = BTreeSet::new();
    while chosen.len() < count {
        let Some(&node) = repeated_nodes.choose(rng) else {
            break;
        };
        chosen.insert(node);
    }
    chosen.into_iter().collect()
}
