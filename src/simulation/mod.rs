//! Resilience simulation.
//!
//! Owns a generated network, removes nodes at random and records how
//! connectivity degrades after each removal.

pub mod state;
pub mod simulator;

pub use state::{RemovalStep, ResilienceCurve, SimulationState};
pub use simulator::{AttackPlan, ResilienceSimulator, TerminationReason};
