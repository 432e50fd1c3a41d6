//! print-order - CLI tool to recalculate print order quantities.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use print_order_rs::{calculate_order_file, render_summary, validate_order, CalcConfig};

/// Recalculate print, fabric and panel quantities of a print order.
#[derive(Parser, Debug)]
#[command(name = "print-order")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input order JSON file path
    #[arg(short, long)]
    input: PathBuf,

    /// Calculation config JSON (precisions, rounding, extra conversions)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the recalculated order to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the recalculated order as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Validate only, don't print results
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &args.config {
        Some(path) => CalcConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CalcConfig::default(),
    };

    info!("Processing: {}", args.input.display());

    let order = calculate_order_file(&args.input, &config)
        .with_context(|| format!("Failed to calculate {}", args.input.display()))?;

    info!("Recalculated {} item(s)", order.items.len());

    // Validate: advisory only, results are printed regardless
    let validation = validate_order(&order, &config.conversion_table());

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    // Validate-only mode
    if args.validate {
        if validation.is_clean() {
            info!("Validation passed");
        } else {
            info!("Validation finished with {} warning(s)", validation.warnings.len());
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&order)?);
    } else {
        print!("{}", render_summary(&order));
    }

    if let Some(output_path) = &args.output {
        let json = serde_json::to_string_pretty(&order)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Written: {}", output_path.display());
    }

    Ok(())
}
