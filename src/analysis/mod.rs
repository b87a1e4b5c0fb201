//! Resilience analysis for simulated networks.
//!
//! This module provides the connectivity metrics recomputed after every
//! removal, critical threshold detection, and report generation.

pub mod connectivity;
pub mod threshold;
pub mod report;

pub use connectivity::{average_shortest_path_length, giant_component_size};
pub use threshold::ThresholdDetector;
pub use report::{generate_json_report, generate_text_report, render_text_report, ResilienceReport};
