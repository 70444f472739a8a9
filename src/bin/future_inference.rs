// ABOUTME: Future emission surrogate entry point reading one JSON request from stdin
// ABOUTME: Thin wrapper over the shared pipeline runner and error boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use std::process::ExitCode;

use clap::Parser;
use greenprint::entry::{run_pipeline_entry, EntryArgs};
use greenprint::PipelineKind;

/// Project future household emission from a lifestyle questionnaire read on stdin
#[derive(Parser)]
#[command(name = "future-inference", version)]
struct Args {
    #[command(flatten)]
    entry: EntryArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    run_pipeline_entry(PipelineKind::Future, &args.entry)
}
