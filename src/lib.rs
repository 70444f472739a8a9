// ABOUTME: Main library entry point for the Greenprint inference tools
// ABOUTME: Shared pipelines, configuration, logging, and the error boundary behind every binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Greenprint
//!
//! Household carbon footprint estimation with small surrogate models. Each
//! binary reads one JSON document on stdin and writes one JSON document on
//! stdout:
//!
//! | Binary | Pipeline |
//! |---|---|
//! | `carbon-inference` | [`PipelineKind::Carbon`] |
//! | `future-inference` | [`PipelineKind::Future`] |
//! | `recommendation-inference` | [`PipelineKind::Recommendation`] |
//! | `enhanced-recommendation-inference` | [`PipelineKind::Enhanced`] |
//! | `greenprint-cli` | `run <pipeline>` and `health` |
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use greenprint::config::InferenceConfig;
//! use greenprint::pipeline::PipelineRunner;
//! use greenprint_core::errors::AppResult;
//! use greenprint_core::models::UserInput;
//!
//! fn main() -> AppResult<()> {
//!     let runner = PipelineRunner::new(InferenceConfig::from_env()?);
//!     let output = runner.run_enhanced(&UserInput::default())?;
//!     println!("{}", output.personalization_note);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Stdin/stdout plumbing and the error boundary
pub mod entry;

/// Model artifact health checks
pub mod health;

/// Structured logging to stderr
pub mod logging;

/// Metadata loading and the per-process cache
pub mod metadata;

/// Result and error documents
pub mod output;

/// The inference pipelines
pub mod pipeline;

pub use config::InferenceConfig;
pub use entry::EntryArgs;
pub use pipeline::{PipelineKind, PipelineRunner};
