// ABOUTME: Greenprint CLI - unified command-line tool for running pipelines and checking model artifacts
// ABOUTME: Dispatches `run <pipeline>` to the shared runner and `health` to the artifact checker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence
//!
//! Usage:
//! ```bash
//! # Personalised recommendations for a request on stdin
//! echo '{"commute_mode": "car", "distance_km": 30}' | greenprint-cli run enhanced
//!
//! # Force the closed-form reference models
//! greenprint-cli run carbon --backend reference < lifestyle.json
//!
//! # Check metadata and weights in a models directory
//! greenprint-cli health --models-dir ./models
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use greenprint::entry::{run_health_entry, run_pipeline_entry, EntryArgs};
use greenprint::PipelineKind;

#[derive(Parser)]
#[command(
    name = "greenprint-cli",
    version,
    about = "Greenprint carbon inference CLI",
    long_about = "Runs the carbon, future, and recommendation pipelines over a JSON request on stdin, and checks model artifacts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    entry: EntryArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Run one pipeline over a JSON request read from stdin
    Run {
        /// Pipeline to run
        #[arg(value_enum)]
        pipeline: PipelineKind,
    },
    /// Report whether each pipeline's metadata and weights are usable
    Health,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { pipeline } => run_pipeline_entry(pipeline, &cli.entry),
        Command::Health => run_health_entry(&cli.entry),
    }
}
