//! Provider Descriptor Emitter
//!
//! Builds the Yandex Cloud provider descriptor from the mapping tables,
//! validates it, and writes it as JSON for the downstream SDK generation
//! pipeline.
//!
//! Usage:
//!   # Emit the descriptor to stdout
//!   tfbridge-gen
//!
//!   # Emit to a file
//!   tfbridge-gen --output descriptor.json
//!
//!   # Validate the tables without emitting anything
//!   tfbridge-gen --check

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tfbridge-gen")]
#[command(about = "Emit the validated Yandex provider descriptor as JSON")]
struct Args {
    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,

    /// Validate the mapping tables and report sizes without emitting JSON
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let info = tfbridge_yandex::provider_info().context("Mapping table validation failed")?;

    if args.check {
        eprintln!(
            "ok: {} resources, {} data sources, no token collisions",
            info.resources.len(),
            info.data_sources.len()
        );
        return Ok(());
    }

    let json =
        serde_json::to_string_pretty(&info).context("Failed to serialize provider descriptor")?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &json)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
