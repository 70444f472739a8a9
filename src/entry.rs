// ABOUTME: Shared entry-point plumbing for every inference binary
// ABOUTME: Reads one request from stdin, runs a pipeline, and converts any failure into one error document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! # Entry Points
//!
//! The error boundary lives here: every failure of a request is caught once,
//! logged, and turned into `{"error": ..., ...zeroed fields}` on stdout with
//! exit status 1.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use greenprint_core::errors::{AppError, AppResult, ErrorCode};
use greenprint_intelligence::PredictorBackend;
use serde_json::{json, Map, Value};
use tracing::{error, info_span};
use uuid::Uuid;

use crate::config::InferenceConfig;
use crate::health::HealthChecker;
use crate::logging;
use crate::output::app_error_payload;
use crate::pipeline::{PipelineKind, PipelineRunner};

/// Flags shared by every binary
#[derive(Debug, Clone, Default, Args)]
pub struct EntryArgs {
    /// Directory holding the metadata and weights files
    #[arg(long, value_name = "DIR", global = true)]
    pub models_dir: Option<PathBuf>,

    /// Predictor backend: auto, network or reference
    #[arg(long, value_name = "BACKEND", global = true)]
    pub backend: Option<PredictorBackend>,

    /// Log workspace crates at debug level on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl EntryArgs {
    /// Environment configuration with these flags applied on top
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the environment is invalid
    pub fn load_config(&self) -> AppResult<InferenceConfig> {
        Ok(InferenceConfig::from_env()?.with_overrides(self.models_dir.clone(), self.backend))
    }
}

/// Parse a request document; anything but a JSON object is rejected
///
/// # Errors
///
/// Returns [`ErrorCode::InvalidInput`] for malformed JSON and
/// [`ErrorCode::InvalidFormat`] for a document that is not an object
pub fn parse_request(input: &str) -> AppResult<Map<String, Value>> {
    let document: Value = serde_json::from_str(input).map_err(|e| {
        AppError::new(ErrorCode::InvalidInput, format!("Invalid JSON input: {e}")).with_source(e)
    })?;
    match document {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::new(
            ErrorCode::InvalidFormat,
            format!("Expected a JSON object, got {}", json_type(&other)),
        )),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read the whole request from `reader` and parse it
///
/// # Errors
///
/// Returns [`ErrorCode::StorageError`] if reading fails, otherwise the errors
/// of [`parse_request`]
pub fn read_request<R: Read>(mut reader: R) -> AppResult<Map<String, Value>> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(|e| {
        AppError::new(ErrorCode::StorageError, format!("Failed to read request: {e}")).with_source(e)
    })?;
    parse_request(&input)
}

/// Read one request and run `kind` on it
///
/// # Errors
///
/// Returns an error if the request cannot be read, metadata cannot be loaded,
/// or the predictor fails
pub fn process<R: Read>(runner: &PipelineRunner, kind: PipelineKind, reader: R) -> AppResult<Value> {
    let fields = read_request(reader)?;
    let output = runner.run(kind, &fields)?;
    Ok(serde_json::to_value(output)?)
}

/// Turn a pipeline result into the document to print and the exit status
#[must_use]
pub fn respond(kind: PipelineKind, request_id: &str, result: AppResult<Value>) -> (Value, u8) {
    match result {
        Ok(document) => (document, 0),
        Err(e) => {
            let e = e.with_request_id(request_id);
            error!(
                pipeline = %kind,
                request_id,
                code = ?e.code,
                resource = e.context.resource_id.as_deref().unwrap_or_default(),
                "request failed: {e}"
            );
            (app_error_payload(kind, &e), e.code.exit_status())
        }
    }
}

fn init_logging(verbose: bool) -> AppResult<()> {
    logging::init_from_env(verbose)
        .map_err(|e| AppError::internal(format!("Failed to initialise logging: {e:#}")))
}

fn execute(kind: PipelineKind, args: &EntryArgs, request_id: &str) -> AppResult<Value> {
    init_logging(args.verbose)?;
    let _span = info_span!("request", pipeline = %kind, request_id).entered();
    let runner = PipelineRunner::new(args.load_config()?);
    process(&runner, kind, io::stdin().lock())
}

fn write_document(document: &Value) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, document)?;
    writeln!(stdout)?;
    stdout.flush()
}

fn emit(document: &Value, status: u8) -> ExitCode {
    match write_document(document) {
        Ok(()) => ExitCode::from(status),
        Err(e) => {
            error!("failed to write result document: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run one pipeline over stdin and print its document on stdout
#[must_use]
pub fn run_pipeline_entry(kind: PipelineKind, args: &EntryArgs) -> ExitCode {
    let request_id = Uuid::new_v4().to_string();
    let (document, status) = respond(kind, &request_id, execute(kind, args, &request_id));
    emit(&document, status)
}

/// Check every pipeline's artifacts and print the report on stdout
#[must_use]
pub fn run_health_entry(args: &EntryArgs) -> ExitCode {
    let config = init_logging(args.verbose).and_then(|()| args.load_config());
    match config {
        Ok(config) => {
            let response = HealthChecker::new(&config).check();
            match serde_json::to_value(&response) {
                Ok(document) => emit(&document, response.status.exit_status()),
                Err(e) => emit(&json!({ "error": e.to_string() }), 1),
            }
        }
        Err(e) => {
            error!(code = ?e.code, "health check failed: {e}");
            emit(&json!({ "error": e.message }), e.code.exit_status())
        }
    }
}
