//! Simulation state and per-step records.

use serde::Serialize;

use crate::analysis::{connectivity, ThresholdDetector};
use crate::graph::{Graph, NodeId};
use crate::topology::NetworkModel;

/// One removal, recorded after the node and its edges are gone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemovalStep {
    pub node_id: NodeId,
    /// Steps taken so far (this one included) over the original node count
    pub removed_at_fraction: f64,
    pub giant_component_size: usize,
    /// `f64::INFINITY` when the surviving graph is empty or disconnected
    pub avg_shortest_path: f64,
}

/// Parallel series for plotting metrics against the removed fraction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResilienceCurve {
    pub removed_fractions: Vec<f64>,
    pub giant_component_sizes: Vec<usize>,
    pub average_shortest_paths: Vec<f64>,
}

/// Everything one simulation run owns
#[derive(Debug, Clone)]
pub struct SimulationState {
    model: NetworkModel,
    graph: Graph,
    node_count: usize,
    history: Vec<RemovalStep>,
    detector: ThresholdDetector,
}

impl SimulationState {
    pub(crate) fn new(model: NetworkModel, graph: Graph) -> Self {
        SimulationState {
            model,
            node_count: model.node_count(),
            graph,
            history: Vec::new(),
            detector: ThresholdDetector::new(),
        }
    }

    pub fn model(&self) -> &NetworkModel {
        &self.model
    }

    /// The live graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Original node count, the denominator of every removed fraction
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Steps in removal order
    pub fn history(&self) -> &[RemovalStep] {
        &self.history
    }

    pub fn last_step(&self) -> Option<&RemovalStep> {
        self.history.last()
    }

    pub fn steps_taken(&self) -> usize {
        self.history.len()
    }

    pub fn critical_threshold(&self) -> Option<f64> {
        self.detector.threshold()
    }

    /// True once every original node has been removed
    pub fn is_exhausted(&self) -> bool {
        self.node_count > 0 && self.history.len() >= self.node_count
    }

    /// Removed node identifiers in removal order
    pub fn removed_nodes(&self) -> Vec<NodeId> {
        self.history.iter().map(|step| step.node_id).collect()
    }

    pub fn curve(&self) -> ResilienceCurve {
        ResilienceCurve {
            removed_fractions: self.history.iter().map(|s| s.removed_at_fraction).collect(),
            giant_component_sizes: self.history.iter().map(|s| s.giant_component_size).collect(),
            average_shortest_paths: self.history.iter().map(|s| s.avg_shortest_path).collect(),
        }
    }

    /// Delete `node_id`, measure the remaining graph and record the step.
    ///
    /// Nothing in here can fail, so the graph mutation, the history append
    /// and the threshold update always happen together. The caller picks a
    /// node that is present.
    pub(crate) fn apply_removal(&mut self, node_id: NodeId) -> (RemovalStep, bool) {
        self.graph.remove_node(node_id);

        let giant_component_size = connectivity::giant_component_size(&self.graph);
        let avg_shortest_path = connectivity::average_shortest_path_length(&self.graph);
        let removed_at_fraction = (self.history.len() + 1) as f64 / self.node_count as f64;

        let step = RemovalStep {
            node_id,
            removed_at_fraction,
            giant_component_size,
            avg_shortest_path,
        };
        self.history.push(step.clone());
        let latched = self.detector.observe(removed_at_fraction, giant_component_size);

        (step, latched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_state() -> SimulationState {
        let mut graph = Graph::with_nodes(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(0, 2);
        SimulationState::new(NetworkModel::ErdosRenyi { n: 3, p: 1.0 }, graph)
    }

    #[test]
    fn test_apply_removal_records_metrics() {
        let mut state = triangle_state();

        let (step, latched) = state.apply_removal(1);
        assert!(!latched);
        assert_eq!(step.node_id, 1);
        assert_eq!(step.giant_component_size, 2);
        assert_eq!(step.avg_shortest_path, 1.0);
        assert!((step.removed_at_fraction - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(state.graph().node_count(), 2);

        let (step, latched) = state.apply_removal(0);
        assert!(latched);
        assert_eq!(step.giant_component_size, 1);
        assert_eq!(step.avg_shortest_path, 0.0);
        assert_eq!(state.critical_threshold(), Some(2.0 / 3.0));
        assert_eq!(state.removed_nodes(), vec![1, 0]);
        assert!(!state.is_exhausted());

        let (step, _) = state.apply_removal(2);
        assert_eq!(step.giant_component_size, 0);
        assert!(step.avg_shortest_path.is_infinite());
        assert!(state.is_exhausted());
        assert_eq!(state.critical_threshold(), Some(2.0 / 3.0));
    }

    #[test]
    fn test_curve_mirrors_history() {
        let mut state = triangle_state();
        state.apply_removal(2);
        state.apply_removal(0);

        let curve = state.curve();
        assert_eq!(curve.removed_fractions.len(), 2);
        assert_eq!(curve.giant_component_sizes, vec![2, 1]);
        assert_eq!(curve.average_shortest_paths, vec![1.0, 0.0]);
        assert_eq!(state.last_step().map(|s| s.node_id), Some(0));
    }

    #[test]
    fn test_empty_network_is_never_exhausted() {
        let state = SimulationState::new(NetworkModel::ErdosRenyi { n: 0, p: 0.5 }, Graph::new());
        assert!(!state.is_exhausted());
        assert_eq!(state.steps_taken(), 0);
        assert!(state.curve().removed_fractions.is_empty());
    }
}
