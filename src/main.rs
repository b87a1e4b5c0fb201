use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::thread;

use resilsim::analysis::report::{self, ResilienceReport};
use resilsim::config::{Config, ReportFormat};
use resilsim::config_loader::{self, CliOverrides};
use resilsim::simulation::ResilienceSimulator;

/// Simulate how generated networks degrade under random node failures
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the simulation configuration YAML file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for network construction and node selection
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report output path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => Config::default(),
    };
    let overrides = CliOverrides {
        seed: args.seed,
        report: args.output.clone(),
        format: args.format,
    };
    config_loader::apply_overrides(&mut config, &overrides)?;

    // Initialize logging with the configured default filter level
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level())).init();

    info!("Starting resilience simulation");
    info!("Network model: {}", config.network);
    if let Some(path) = &args.config {
        info!("Configuration file: {:?}", path);
    }

    let seed = config.general.seed;
    let mut simulator = ResilienceSimulator::new(config.network, seed)
        .wrap_err("Failed to build the network")?;

    let step_delay = config.attack.step_delay;
    let termination = simulator
        .run_attack(config.attack.plan(), |step| {
            info!(
                "Removed node {} ({:.1}% removed): giant component {}, average path {:.3}",
                step.node_id,
                step.removed_at_fraction * 100.0,
                step.giant_component_size,
                step.avg_shortest_path
            );
            if let Some(delay) = step_delay {
                thread::sleep(delay);
            }
        })
        .wrap_err("Attack aborted")?;
    info!("Simulation finished: {}", termination);

    let report = ResilienceReport::from_state(simulator.current_snapshot(), seed, Some(termination));
    match (&config.output.report, config.output.format) {
        (Some(path), ReportFormat::Json) => report::generate_json_report(&report, path)?,
        (Some(path), ReportFormat::Text) => report::generate_text_report(&report, path)?,
        (None, ReportFormat::Json) => {
            let json = serde_json::to_string_pretty(&report)
                .wrap_err("Failed to serialize report to JSON")?;
            println!("{}", json);
        }
        (None, ReportFormat::Text) => print!("{}", report::render_text_report(&report)),
    }

    if config.output.report.is_some() {
        report::print_summary(&report);
    }

    Ok(())
}
