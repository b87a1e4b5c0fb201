//! # Resilsim - random-failure resilience of generated networks
//!
//! This library builds a network from a classic random-graph model, removes
//! its nodes one at a time in random order, and tracks how connectivity
//! degrades.
//!
//! ## Overview
//!
//! After every removal the simulator records the size of the giant
//! (largest connected) component and the average shortest-path length of
//! the surviving graph. The removed fraction at which the giant component
//! first drops below two nodes is latched as the critical threshold.
//!
//! ## Key Features
//!
//! - **Network Models**: Erdős–Rényi, Barabási–Albert and Watts–Strogatz
//! - **Reproducible**: a single seed drives both construction and removal order
//! - **Caller-driven**: single steps or whole attacks, with a per-step callback
//! - **Reports**: JSON and text reports of the removal history
//!
//! ## Architecture
//!
//! - `graph`: undirected simple graph
//! - `topology`: network model definitions and graph generators
//! - `analysis`: connectivity metrics, threshold detection and reports
//! - `simulation`: simulation state and the resilience simulator
//! - `config`: YAML configuration structures
//! - `config_loader`: configuration loading and CLI overrides
//! - `error`: engine error type
//!
//! ## Example Usage
//!
//! ```rust
//! use resilsim::simulation::{ResilienceSimulator, TerminationReason};
//! use resilsim::topology::NetworkModel;
//!
//! let model = NetworkModel::ErdosRenyi { n: 10, p: 1.0 };
//! let mut simulator = ResilienceSimulator::new(model, Some(42))?;
//!
//! let reason = simulator.run_until_threshold_or_exhausted_with(|step| {
//!     println!("removed {} -> giant component {}", step.node_id, step.giant_component_size);
//! })?;
//!
//! assert_eq!(reason, TerminationReason::ThresholdReached);
//! assert_eq!(simulator.current_snapshot().critical_threshold(), Some(0.9));
//! # Ok::<(), resilsim::error::SimulationError>(())
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return `Result<T, SimulationError>`. Configuration and
//! report IO use `color_eyre` for error reporting with context.

pub mod error;
pub mod graph;
pub mod topology;
pub mod analysis;
pub mod simulation;
pub mod config;
pub mod config_loader;
