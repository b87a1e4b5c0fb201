//! Report generation for resilience simulations.
//!
//! Generates both JSON and human-readable text reports.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::Serialize;

use crate::simulation::{RemovalStep, SimulationState, TerminationReason};
use crate::topology::NetworkModel;

/// Serializable summary of one simulation run.
///
/// Infinite average path lengths serialize as `null` in JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ResilienceReport {
    pub model: NetworkModel,
    pub node_count: usize,
    pub seed: Option<u64>,
    pub termination: Option<TerminationReason>,
    pub critical_threshold: Option<f64>,
    pub remaining_nodes: usize,
    pub remaining_edges: usize,
    pub steps: Vec<RemovalStep>,
}

impl ResilienceReport {
    pub fn from_state(
        state: &SimulationState,
        seed: Option<u64>,
        termination: Option<TerminationReason>,
    ) -> Self {
        ResilienceReport {
            model: *state.model(),
            node_count: state.node_count(),
            seed,
            termination,
            critical_threshold: state.critical_threshold(),
            remaining_nodes: state.graph().node_count(),
            remaining_edges: state.graph().edge_count(),
            steps: state.history().to_vec(),
        }
    }
}

/// Generate JSON report
pub fn generate_json_report(report: &ResilienceReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Generate human-readable text report
pub fn generate_text_report(report: &ResilienceReport, output_path: &Path) -> Result<()> {
    fs::write(output_path, render_text_report(report))
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

/// Render the text report.
///
/// The step table is in removal order; the step that latched the critical
/// threshold is followed by a marker line.
pub fn render_text_report(report: &ResilienceReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push("=".repeat(80));
    lines.push("                  NETWORK RESILIENCE UNDER RANDOM NODE FAILURE".to_string());
    lines.push("=".repeat(80));
    lines.push(String::new());

    lines.push(format!("Model: {}", report.model));
    lines.push(format!(
        "Seed: {}",
        report.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    ));
    lines.push(format!("Original nodes: {}", report.node_count));
    lines.push(format!("Steps taken: {}", report.steps.len()));
    lines.push(format!(
        "Remaining: {} nodes, {} edges",
        report.remaining_nodes, report.remaining_edges
    ));
    if let Some(termination) = report.termination {
        lines.push(format!("Termination: {}", termination));
    }
    match report.critical_threshold {
        Some(threshold) => lines.push(format!("Critical threshold: {:.3}", threshold)),
        None => lines.push("Critical threshold: not reached".to_string()),
    }
    lines.push(String::new());

    if !report.steps.is_empty() {
        lines.push("-".repeat(80));
        lines.push(format!(
            "{:>6}  {:>8}  {:>10}  {:>8}  {:>10}",
            "Step", "Node", "Removed", "Giant", "Avg path"
        ));
        lines.push("-".repeat(80));

        let mut marked = false;
        for (index, step) in report.steps.iter().enumerate() {
            lines.push(format!(
                "{:>6}  {:>8}  {:>10.3}  {:>8}  {:>10}",
                index + 1,
                step.node_id,
                step.removed_at_fraction,
                step.giant_component_size,
                format_path_length(step.avg_shortest_path)
            ));
            if !marked && Some(step.removed_at_fraction) == report.critical_threshold {
                lines.push("        ^ CRITICAL THRESHOLD REACHED".to_string());
                marked = true;
            }
        }
        lines.push(String::new());

        let removed: Vec<String> = report.steps.iter().map(|s| s.node_id.to_string()).collect();
        lines.push(format!("Removed nodes (in order): {}", removed.join(", ")));
        lines.push(String::new());
    }

    // Footer
    lines.push("=".repeat(80));
    lines.push(String::new());

    lines.join("\n")
}

fn format_path_length(length: f64) -> String {
    if length.is_finite() {
        format!("{:.3}", length)
    } else {
        "inf".to_string()
    }
}

/// Print a summary to stdout
pub fn print_summary(report: &ResilienceReport) {
    println!("\n=== RESILIENCE SIMULATION SUMMARY ===\n");
    println!("Model: {}", report.model);
    println!("Removed: {} of {} nodes", report.steps.len(), report.node_count);
    if let Some(last) = report.steps.last() {
        println!("Final giant component: {}", last.giant_component_size);
    }
    match report.critical_threshold {
        Some(threshold) => println!("Critical threshold: {:.3}", threshold),
        None => println!("Critical threshold: not reached"),
    }
    println!();
}
