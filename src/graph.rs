//! Undirected simple graph.
//!
//! Nodes are `usize` identifiers and adjacency is kept in ordered maps, so
//! iteration over nodes and edges is always ascending. Seeded simulations
//! depend on that ordering to reproduce the same removal sequence.

use std::collections::{BTreeMap, BTreeSet};

/// Node identifier. Generated graphs use `0..n`.
pub type NodeId = usize;

/// A mutable undirected graph without self-loops or parallel edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with nodes `0..n` and no edges
    pub fn with_nodes(n: usize) -> Self {
        Graph {
            adjacency: (0..n).map(|id| (id, BTreeSet::new())).collect(),
            edge_count: 0,
        }
    }

    /// Insert an isolated node. Returns false if it was already present.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        true
    }

    /// Insert the edge `{u, v}`.
    ///
    /// Self-loops, edges touching absent nodes and edges that already exist
    /// are rejected and leave the graph untouched.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if u == v || !self.has_node(u) || !self.has_node(v) || self.has_edge(u, v) {
            return false;
        }
        if let Some(neighbors) = self.adjacency.get_mut(&u) {
            neighbors.insert(v);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&v) {
            neighbors.insert(u); // Undirected
        }
        self.edge_count += 1;
        true
    }

    /// Remove the edge `{u, v}` if present
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let removed = self
            .adjacency
            .get_mut(&u)
            .map(|neighbors| neighbors.remove(&v))
            .unwrap_or(false);
        if !removed {
            return false;
        }
        if let Some(neighbors) = self.adjacency.get_mut(&v) {
            neighbors.remove(&u);
        }
        self.edge_count -= 1;
        true
    }

    /// Remove a node together with every incident edge.
    ///
    /// Returns the former neighbours, or `None` if the node was not present.
    pub fn remove_node(&mut self, node: NodeId) -> Option<Vec<NodeId>> {
        let neighbors = self.adjacency.remove(&node)?;
        for neighbor in &neighbors {
            if let Some(back) = self.adjacency.get_mut(neighbor) {
                back.remove(&node);
            }
        }
        self.edge_count -= neighbors.len();
        Some(neighbors.into_iter().collect())
    }

    pub fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .map(|neighbors| neighbors.contains(&v))
            .unwrap_or(false)
    }

    /// Degree of `node`, 0 when the node is absent
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map(BTreeSet::len).unwrap_or(0)
    }

    /// Neighbours of `node` in ascending order
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(&node).into_iter().flatten().copied()
    }

    /// Present nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Every edge once as `(u, v)` with `u < v`, sorted
    pub fn edge_list(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (&u, neighbors) in &self.adjacency {
            for &v in neighbors {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_nodes() {
        let graph = Graph::with_nodes(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(Graph::new().is_empty());
    }

    #[test]
    fn test_add_edge_rejects_invalid() {
        let mut graph = Graph::with_nodes(3);
        assert!(graph.add_edge(0, 1));
        assert!(!graph.add_edge(1, 0), "duplicate edge must be rejected");
        assert!(!graph.add_edge(2, 2), "self-loop must be rejected");
        assert!(!graph.add_edge(0, 7), "absent node must be rejected");
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 0));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = Graph::with_nodes(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        assert!(graph.remove_edge(1, 0));
        assert!(!graph.remove_edge(0, 1));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        // Star around node 0 plus the edge 1-2
        let mut graph = Graph::with_nodes(4);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(0, 3);
        graph.add_edge(1, 2);

        let neighbors = graph.remove_node(0).unwrap();
        assert_eq!(neighbors, vec![1, 2, 3]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_list(), vec![(1, 2)]);
        assert!(graph.neighbors(3).next().is_none());
        assert!(graph.remove_node(0).is_none());
    }

    #[test]
    fn test_edge_list_is_sorted_and_unique() {
        let mut graph = Graph::with_nodes(4);
        graph.add_edge(3, 0);
        graph.add_edge(2, 1);
        graph.add_edge(0, 1);
        assert_eq!(graph.edge_list(), vec![(0, 1), (0, 3), (1, 2)]);
    }

    #[test]
    fn test_add_node() {
        let mut graph = Graph::new();
        assert!(graph.add_node(5));
        assert!(!graph.add_node(5));
        assert_eq!(graph.degree(5), 0);
        assert_eq!(graph.degree(6), 0);
    }
}
