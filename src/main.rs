use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use ringstage::bench::measure_performance;
use ringstage::config::{default_config_path, load_config, BenchPlan};
use ringstage::scenarios::{build_scenarios, default_scenarios, Scenario};

/// Measure copy vs move cost of BoundedRing insertion and extraction.
#[derive(Debug, Parser)]
#[command(name = "ringbench", version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<String>,

    /// Iterations per scenario (overrides config)
    #[arg(long)]
    iterations: Option<u32>,

    /// Payload size in bytes (overrides config)
    #[arg(long)]
    payload_bytes: Option<usize>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn resolve_plan(args: &Args) -> Result<BenchPlan, Box<dyn std::error::Error>> {
    let mut plan = match &args.config {
        Some(path) => load_config(path)?,
        None => {
            let path = default_config_path();
            if Path::new(&path).exists() {
                load_config(&path)?
            } else {
                info!("No config at {}, using defaults", path);
                BenchPlan::default()
            }
        }
    };

    if let Some(n) = args.iterations {
        plan.settings.iterations = n;
    }
    if let Some(n) = args.payload_bytes {
        plan.settings.payload_bytes = n;
    }
    if args.no_progress {
        plan.settings.show_progress = false;
    }
    Ok(plan)
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let plan = match resolve_plan(&args) {
        Ok(plan) => plan,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = &plan.settings;
    let mut scenarios: Vec<Box<dyn Scenario>> = if plan.scenarios.is_empty() {
        default_scenarios(settings.payload_bytes)
    } else {
        plan.scenarios
            .iter()
            .flat_map(|(id, kind)| build_scenarios(id, *kind, settings.payload_bytes))
            .collect()
    };

    info!(
        "Running {} scenarios, {} iterations, {} byte payloads",
        scenarios.len(),
        settings.iterations,
        settings.payload_bytes
    );

    for scenario in scenarios.iter_mut() {
        info!("Scenario '{}': {}", scenario.id(), scenario.label());
        let elapsed = measure_performance(
            settings.iterations,
            || scenario.run_once(),
            settings.show_progress,
        );
        println!("{}: {} ms", scenario.label(), elapsed.as_millis());
    }

    ExitCode::SUCCESS
}
