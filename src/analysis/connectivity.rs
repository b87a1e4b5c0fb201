//! Connectivity metrics.
//!
//! Pure functions over a graph snapshot: connected components, giant
//! component size and average shortest-path length.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{Graph, NodeId};

/// Find connected components using an iterative DFS.
///
/// Members of each component are sorted, and components are ordered by
/// their smallest member.
pub fn connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());
    let mut components: Vec<Vec<NodeId>> = Vec::new();

    for start_node in graph.nodes() {
        if visited.contains(&start_node) {
            continue;
        }

        let mut component: Vec<NodeId> = Vec::new();
        let mut stack: Vec<NodeId> = vec![start_node];
        visited.insert(start_node);

        while let Some(node) = stack.pop() {
            component.push(node);
            for neighbor in graph.neighbors(node) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Node count of the largest connected component, 0 for an empty graph
pub fn giant_component_size(graph: &Graph) -> usize {
    connected_components(graph)
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}

/// True when the graph is non-empty and every node reaches every other
pub fn is_connected(graph: &Graph) -> bool {
    !graph.is_empty() && connected_components(graph).len() == 1
}

/// Mean hop distance over all unordered node pairs.
///
/// Returns `f64::INFINITY` for an empty or disconnected graph. A single
/// node has no pairs and yields `0.0`.
pub fn average_shortest_path_length(graph: &Graph) -> f64 {
    let n = graph.node_count();
    match n {
        0 => f64::INFINITY,
        1 => 0.0,
        _ if !is_connected(graph) => f64::INFINITY,
        _ => {
            // Summing from every source counts each pair twice
            let total: usize = graph
                .nodes()
                .map(|source| bfs_distances(graph, source).values().sum::<usize>())
                .sum();
            total as f64 / (n * (n - 1)) as f64
        }
    }
}

/// Hop distance from `source` to every node it reaches
fn bfs_distances(graph: &Graph, source: NodeId) -> HashMap<NodeId, usize> {
    let mut distances: HashMap<NodeId, usize> = HashMap::with_capacity(graph.node_count());
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let next = distances[&node] + 1;
        for neighbor in graph.neighbors(node) {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
