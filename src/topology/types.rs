//! Network model definitions.
//!
//! This file contains the three random-graph models the simulator can
//! build, along with their parameter validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Random-graph model and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum NetworkModel {
    /// G(n, p): every pair of nodes is linked with probability `p`
    ErdosRenyi {
        #[serde(default = "default_node_count")]
        n: usize,
        #[serde(default = "default_edge_probability")]
        p: f64,
    },
    /// Preferential attachment, `m` edges per new node
    BarabasiAlbert {
        #[serde(default = "default_node_count")]
        n: usize,
        #[serde(default = "default_attachment")]
        m: usize,
    },
    /// Ring lattice of degree `k` with rewiring probability `beta`
    WattsStrogatz {
        #[serde(default = "default_node_count")]
        n: usize,
        #[serde(default = "default_lattice_degree")]
        k: usize,
        #[serde(default = "default_rewiring_probability")]
        beta: f64,
    },
}

fn default_node_count() -> usize {
    10
}

fn default_edge_probability() -> f64 {
    0.5
}

fn default_attachment() -> usize {
    2
}

fn default_lattice_degree() -> usize {
    4
}

fn default_rewiring_probability() -> f64 {
    0.1
}

impl NetworkModel {
    /// Number of nodes the built graph will have
    pub fn node_count(&self) -> usize {
        match *self {
            Self::ErdosRenyi { n, .. }
            | Self::BarabasiAlbert { n, .. }
            | Self::WattsStrogatz { n, .. } => n,
        }
    }

    /// Human-readable model name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ErdosRenyi { .. } => "Erdős–Rényi",
            Self::BarabasiAlbert { .. } => "Barabási–Albert",
            Self::WattsStrogatz { .. } => "Watts–Strogatz",
        }
    }

    /// Check the parameters before any construction happens
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::ErdosRenyi { p, .. } => check_probability("p", p),
            Self::BarabasiAlbert { n, m } => {
                if m < 1 || m >= n {
                    return Err(SimulationError::InvalidParameter(format!(
                        "Barabási–Albert requires 1 <= m < n, got m={} n={}",
                        m, n
                    )));
                }
                Ok(())
            }
            Self::WattsStrogatz { n, k, beta } => {
                if k == 0 {
                    return Err(SimulationError::InvalidParameter(
                        "Watts–Strogatz degree k must be positive".to_string(),
                    ));
                }
                if k % 2 != 0 {
                    return Err(SimulationError::InvalidParameter(format!(
                        "Watts–Strogatz degree k must be even, got {}",
                        k
                    )));
                }
                if k >= n {
                    return Err(SimulationError::InvalidParameter(format!(
                        "Watts–Strogatz degree k must be smaller than n, got k={} n={}",
                        k, n
                    )));
                }
                check_probability("beta", beta)
            }
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    // NaN fails the range check as well
    if !(0.0..=1.0).contains(&value) {
        return Err(SimulationError::InvalidParameter(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl Default for NetworkModel {
    fn default() -> Self {
        NetworkModel::ErdosRenyi {
            n: default_node_count(),
            p: default_edge_probability(),
        }
    }
}

impl fmt::Display for NetworkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ErdosRenyi { n, p } => write!(f, "{} (n={}, p={})", self.name(), n, p),
            Self::BarabasiAlbert { n, m } => write!(f, "{} (n={}, m={})", self.name(), n, m),
            Self::WattsStrogatz { n, k, beta } => {
                write!(f, "{} (n={}, k={}, beta={})", self.name(), n, k, beta)
            }
        }
    }
}
