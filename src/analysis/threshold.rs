//! Critical threshold detection.
//!
//! The critical threshold is the smallest removed fraction at which the
//! giant component holds fewer than [`COLLAPSE_SIZE`] nodes, i.e. no two
//! surviving nodes are linked. It is read off the observed trajectory and
//! latches: once set, later observations never move it.

use crate::simulation::RemovalStep;

/// Giant component size below which the network counts as collapsed
pub const COLLAPSE_SIZE: usize = 2;

/// Latching detector fed one observation per removal step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdDetector {
    threshold: Option<f64>,
}

impl ThresholdDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a giant component of this size means collapse
    pub fn is_collapsed(giant_component_size: usize) -> bool {
        giant_component_size < COLLAPSE_SIZE
    }

    /// Record one step. Returns true only for the observation that latches.
    pub fn observe(&mut self, removed_fraction: f64, giant_component_size: usize) -> bool {
        if self.threshold.is_some() || !Self::is_collapsed(giant_component_size) {
            return false;
        }
        self.threshold = Some(removed_fraction);
        true
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Read the threshold off a recorded history
    pub fn scan(steps: &[RemovalStep]) -> Option<f64> {
        steps
            .iter()
            .find(|step| Self::is_collapsed(step.giant_component_size))
            .map(|step| step.removed_at_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(node_id: usize, fraction: f64, giant: usize) -> RemovalStep {
        RemovalStep {
            node_id,
            removed_at_fraction: fraction,
            giant_component_size: giant,
            avg_shortest_path: f64::INFINITY,
        }
    }

    #[test]
    fn test_latches_on_first_collapse() {
        let mut detector = ThresholdDetector::new();
        assert!(!detector.observe(0.1, 5));
        assert!(!detector.observe(0.2, 2));
        assert!(detector.observe(0.3, 1));
        assert_eq!(detector.threshold(), Some(0.3));

        // Later collapses leave it untouched
        assert!(!detector.observe(0.4, 0));
        assert_eq!(detector.threshold(), Some(0.3));
    }

    #[test]
    fn test_scan_matches_live_latch() {
        let history = vec![step(4, 0.25, 3), step(1, 0.5, 2), step(0, 0.75, 1), step(2, 1.0, 0)];
        assert_eq!(ThresholdDetector::scan(&history), Some(0.75));

        let mut detector = ThresholdDetector::new();
        for s in &history {
            detector.observe(s.removed_at_fraction, s.giant_component_size);
        }
        assert_eq!(detector.threshold(), ThresholdDetector::scan(&history));
    }

    #[test]
    fn test_scan_without_collapse() {
        assert_eq!(ThresholdDetector::scan(&[step(3, 0.1, 8)]), None);
        assert_eq!(ThresholdDetector::scan(&[]), None);
    }
}
