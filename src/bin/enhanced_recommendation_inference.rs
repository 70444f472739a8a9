// ABOUTME: Personalised recommendation entry point reading one JSON request from stdin
// ABOUTME: Thin wrapper over the shared pipeline runner and error boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use std::process::ExitCode;

use clap::Parser;
use greenprint::entry::{run_pipeline_entry, EntryArgs};
use greenprint::PipelineKind;

/// Estimate emission and return profile-targeted recommendations for a request on stdin
#[derive(Parser)]
#[command(name = "enhanced-recommendation-inference", version)]
struct Args {
    #[command(flatten)]
    entry: EntryArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run_pipeline_entry(PipelineKind::Enhanced, &args.entry)
}
