//! Project several assumption files and compare them against their baselines
//!
//! Outputs one line per scenario, ranked by total savings

use anyhow::{Context, Result};
use clap::Parser;
use staffing_roi::{
    assumptions::{load_assumptions, CellSchema, ResolvePolicy},
    projection::{ProjectionConfig, ProjectionEngine, RampPolicy, DEFAULT_HORIZON_MONTHS},
    scenario::{write_comparison_csv, Scenario, ScenarioRunner},
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "compare_scenarios", about = "Rank staffing-mix scenarios by savings against baseline")]
struct Args {
    /// Assumption files (.csv or .json), one per scenario
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,

    /// Months to project
    #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS)]
    horizon: u32,

    /// How gated categories build their provider count
    #[arg(long, value_enum, default_value_t = RampPolicy::AccumulateFromGate)]
    ramp_policy: RampPolicy,

    /// Clamp negative inputs to 0 instead of rejecting them
    #[arg(long)]
    clamp_negatives: bool,

    /// Write the comparison table to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let policy = if args.clamp_negatives { ResolvePolicy::Clamp } else { ResolvePolicy::Reject };

    println!("Loading {} scenarios...", args.scenarios.len());
    let scenarios = args
        .scenarios
        .iter()
        .map(|path| -> Result<Scenario> {
            let assumptions = load_assumptions(path, CellSchema::default(), policy)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok(Scenario::new(name, assumptions))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = ProjectionConfig::default()
        .with_horizon(args.horizon)
        .with_ramp_policy(args.ramp_policy);
    let runner = ScenarioRunner::new(ProjectionEngine::new(config));

    let proj_start = Instant::now();
    let outcomes = runner.run(&scenarios).context("Cannot compute projections until inputs are corrected")?;
    println!("Projections complete in {:?}", proj_start.elapsed());

    println!(
        "\n{:<24} {:>16} {:>16} {:>16} {:>16}",
        "Scenario", "Actual", "Baseline", "Savings", "Outcome"
    );
    for outcome in &outcomes {
        let summary = &outcome.result.summary;
        println!(
            "{:<24} {:>16.2} {:>16.2} {:>16.2} {:>16}",
            outcome.name,
            summary.total_actual_cost,
            summary.total_baseline_cost,
            summary.total_savings,
            outcome.savings_outcome().to_string()
        );
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_comparison_csv(&outcomes, BufWriter::new(file))?;
        println!("\nComparison written to {}", path.display());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
