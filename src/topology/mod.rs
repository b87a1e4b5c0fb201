//! Network topology module.
//!
//! Builds the initial graph for a simulation from one of the supported
//! random-graph models:
//!
//! - **Erdős–Rényi**: independent edges with probability `p`
//! - **Barabási–Albert**: scale-free growth by preferential attachment
//! - **Watts–Strogatz**: small-world ring lattice with random rewiring
//!
//! Construction is pure: the caller supplies the random source, and
//! parameters are validated before a single node is allocated.

pub mod types;
pub mod erdos_renyi;
pub mod barabasi_albert;
pub mod watts_strogatz;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::graph::Graph;

// Re-export key types for easier access
pub use types::NetworkModel;

/// Build a graph for `model`, seeded when `seed` is given.
pub fn build(model: &NetworkModel, seed: Option<u64>) -> Result<Graph> {
    let mut rng: StdRng = seeded_rng(seed);
    build_with_rng(model, &mut rng)
}

/// Build a graph for `model` drawing randomness from `rng`.
pub fn build_with_rng<R: Rng>(model: &NetworkModel, rng: &mut R) -> Result<Graph> {
    model.validate()?;

    let graph = match *model {
        NetworkModel::ErdosRenyi { n, p } => {
            if p == 0.0 && n > 1 {
                warn!("Erdős–Rényi with p=0 produces {} isolated nodes", n);
            }
            erdos_renyi::generate(n, p, rng)
        }
        NetworkModel::BarabasiAlbert { n, m } => barabasi_albert::generate(n, m, rng),
        NetworkModel::WattsStrogatz { n, k, beta } => watts_strogatz::generate(n, k, beta, rng),
    };

    info!(
        "Built {} graph: {} nodes, {} edges",
        model,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Random source seeded from `seed`, or from OS entropy when absent
pub fn seeded_rng<R: SeedableRng>(seed: Option<u64>) -> R {
    match seed {
        Some(seed) => R::seed_from_u64(seed),
        None => R::from_entropy(),
    }
}
