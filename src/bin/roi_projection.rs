//! Project shift coverage and staffing cost for one assumption file
//!
//! Prints a summary of totals and savings, and optionally writes the monthly
//! rows to CSV or the full result to JSON.

use anyhow::{Context, Result};
use clap::Parser;
use staffing_roi::{
    assumptions::{load_assumptions, CellSchema, ResolvePolicy},
    projection::{ProjectionConfig, ProjectionEngine, RampPolicy, DEFAULT_HORIZON_MONTHS},
    report::{format_summary, write_json, write_rows_csv},
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "roi_projection", about = "Staffing deployment ROI projection")]
struct Args {
    /// Assumption file (.csv with name,value rows or .json object)
    #[arg(short, long)]
    assumptions: PathBuf,

    /// Extra `key,alias` rows mapping worksheet labels or cells to assumptions
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Months to project
    #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS)]
    horizon: u32,

    /// How gated categories build their provider count
    #[arg(long, value_enum, default_value_t = RampPolicy::AccumulateFromGate)]
    ramp_policy: RampPolicy,

    /// Clamp negative inputs to 0 instead of rejecting them
    #[arg(long)]
    clamp_negatives: bool,

    /// Write monthly rows to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the full result as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let mut schema = CellSchema::default();
    if let Some(path) = &args.schema {
        schema
            .extend_from_csv(path)
            .with_context(|| format!("Failed to load schema {}", path.display()))?;
    }
    let policy = if args.clamp_negatives { ResolvePolicy::Clamp } else { ResolvePolicy::Reject };

    let assumptions = load_assumptions(&args.assumptions, schema, policy)
        .with_context(|| format!("Failed to load assumptions from {}", args.assumptions.display()))?;

    let config = ProjectionConfig::default()
        .with_horizon(args.horizon)
        .with_ramp_policy(args.ramp_policy);
    let engine = ProjectionEngine::new(config);
    let result = engine.project(&assumptions).context("Cannot compute projection until inputs are corrected")?;

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_rows_csv(&result, BufWriter::new(file))?;
        println!("Monthly rows written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_json(&result, BufWriter::new(file))?;
        println!("Result written to {}", path.display());
    }

    print!("{}", format_summary(&result));
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
