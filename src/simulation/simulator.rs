//! Random-failure simulator.
//!
//! [`ResilienceSimulator`] owns one [`SimulationState`] and the random
//! source that picks which node fails next. Every mutation goes through
//! `&mut self`; the simulator never sleeps, polls or spawns, so pacing an
//! automated attack is left to the per-step callback.

use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{Result, SimulationError};
use crate::graph::NodeId;
use crate::simulation::state::{RemovalStep, SimulationState};
use crate::topology::{self, NetworkModel};

/// Why a multi-step run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The giant component collapsed below two nodes
    ThresholdReached,
    /// Every original node has been removed
    Exhausted,
    /// A fixed-length attack ran all of its steps
    StepLimit,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::ThresholdReached => write!(f, "critical threshold reached"),
            TerminationReason::Exhausted => write!(f, "all nodes removed"),
            TerminationReason::StepLimit => write!(f, "step limit reached"),
        }
    }
}

/// How far an automated attack should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPlan {
    /// Stop at the critical threshold, or when nothing is left
    UntilThreshold,
    /// Remove every node
    Exhaust,
    /// Remove at most this many nodes
    Steps(usize),
}

/// Drives random node removal over a generated network
#[derive(Debug)]
pub struct ResilienceSimulator<R = StdRng> {
    state: SimulationState,
    rng: R,
}

impl ResilienceSimulator<StdRng> {
    /// Build a network and a simulator seeded from `seed` (entropy if `None`)
    pub fn new(model: NetworkModel, seed: Option<u64>) -> Result<Self> {
        Self::with_rng(model, topology::seeded_rng(seed))
    }
}

impl<R: Rng + SeedableRng> ResilienceSimulator<R> {
    /// Discard the current run and start over on a fresh network.
    ///
    /// The random source is reseeded, so the same `(model, seed)` replays the
    /// same construction and removal sequence. On an invalid model the
    /// previous run is kept.
    pub fn reset(&mut self, model: NetworkModel, seed: Option<u64>) -> Result<&SimulationState> {
        let mut rng: R = topology::seeded_rng(seed);
        let graph = topology::build_with_rng(&model, &mut rng)?;
        self.rng = rng;
        self.state = SimulationState::new(model, graph);
        info!("Simulation reset: {} (seed {:?})", model, seed);
        Ok(&self.state)
    }
}

impl<R: Rng> ResilienceSimulator<R> {
    /// Build a network drawing all randomness from `rng`
    pub fn with_rng(model: NetworkModel, mut rng: R) -> Result<Self> {
        let graph = topology::build_with_rng(&model, &mut rng)?;
        Ok(ResilienceSimulator {
            state: SimulationState::new(model, graph),
            rng,
        })
    }

    /// Read-only view of the current run
    pub fn current_snapshot(&self) -> &SimulationState {
        &self.state
    }

    /// Remove one node chosen uniformly among those still present.
    ///
    /// Fails with `AlreadyExhausted` once all original nodes are gone and
    /// with `EmptyGraph` on a network built without nodes. A failing call
    /// leaves the state untouched.
    pub fn remove_random_node(&mut self) -> Result<RemovalStep> {
        if self.state.is_exhausted() {
            return Err(SimulationError::AlreadyExhausted);
        }

        let candidates: Vec<NodeId> = self.state.graph().nodes().collect();
        let Some(&node_id) = candidates.choose(&mut self.rng) else {
            return Err(SimulationError::EmptyGraph);
        };

        let (step, latched) = self.state.apply_removal(node_id);
        debug!(
            "Removed node {} ({:.3} removed): giant component {}, average path {}",
            step.node_id, step.removed_at_fraction, step.giant_component_size, step.avg_shortest_path
        );
        if latched {
            info!(
                "Critical threshold reached at removed fraction {:.3}",
                step.removed_at_fraction
            );
        }

        Ok(step)
    }

    /// Remove nodes until the threshold latches or nothing is left
    pub fn run_until_threshold_or_exhausted(&mut self) -> Result<TerminationReason> {
        self.run_until_threshold_or_exhausted_with(|_| {})
    }

    /// Same as [`run_until_threshold_or_exhausted`](Self::run_until_threshold_or_exhausted),
    /// calling `on_step` after every removal.
    pub fn run_until_threshold_or_exhausted_with<F>(&mut self, on_step: F) -> Result<TerminationReason>
    where
        F: FnMut(&RemovalStep),
    {
        self.run_attack(AttackPlan::UntilThreshold, on_step)
    }

    /// Run an automated attack according to `plan`
    pub fn run_attack<F>(&mut self, plan: AttackPlan, mut on_step: F) -> Result<TerminationReason>
    where
        F: FnMut(&RemovalStep),
    {
        let mut taken = 0;
        let reason = loop {
            if plan == AttackPlan::UntilThreshold && self.state.critical_threshold().is_some() {
                break TerminationReason::ThresholdReached;
            }
            if self.state.is_exhausted() {
                break TerminationReason::Exhausted;
            }
            if let AttackPlan::Steps(limit) = plan {
                if taken >= limit {
                    break TerminationReason::StepLimit;
                }
            }

            let step = self.remove_random_node()?;
            taken += 1;
            on_step(&step);
        };

        info!("Attack finished after {} removals: {}", taken, reason);
        Ok(reason)
    }
}
