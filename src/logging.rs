// ABOUTME: Logging configuration and structured logging setup for the inference entry points
// ABOUTME: Configures log levels and formatters, always writing to stderr so stdout stays a JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Structured logging configuration
//!
//! Every entry point prints exactly one JSON document on stdout, so all log
//! output goes to stderr. The default level is `warn`; `--verbose` raises the
//! workspace crates to `debug`.

use std::env;
use std::io;

use anyhow::{Context, Result};
use greenprint_core::constants::service_names;
use serde_json::json;
use tracing::{debug, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{Environment, LogLevel};

/// Crates whose level follows [`LoggingConfig::level`]
const WORKSPACE_TARGETS: [&str; 3] = ["greenprint", "greenprint_intelligence", "greenprint_core"];

/// Logging configuration
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)] // Independent toggles for the fmt layer
pub struct LoggingConfig {
    /// Level applied to the workspace crates
    pub level: LogLevel,
    /// Raw `RUST_LOG` directives, which take precedence over `level`
    pub directives: Option<String>,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Multi-field human format
    Pretty,
    /// Single-line human format
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            directives: None,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::GREENPRINT.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let directives = env::var("RUST_LOG").ok().filter(|value| !value.trim().is_empty());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();
        let is_production = environment.is_production();

        Self {
            level: env::var("LOG_LEVEL")
                .map(|value| LogLevel::from_str_or_default(&value))
                .unwrap_or(LogLevel::Warn),
            directives,
            format: if is_production { LogFormat::Json } else { format },
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::GREENPRINT.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Raise the workspace crates to `debug`
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = LogLevel::Debug;
        }
        self
    }

    /// Build the filter: `RUST_LOG` wins, otherwise `warn` globally and
    /// `level` for the workspace crates
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        if let Some(directives) = &self.directives {
            return EnvFilter::new(directives);
        }
        WORKSPACE_TARGETS.iter().fold(
            EnvFilter::new(Level::WARN.as_str()),
            |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level.to_tracing_level())
                        .parse()
                        .unwrap_or_else(|_| Level::WARN.into()),
                )
            },
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()
            }
        }
        .context("failed to install the tracing subscriber")?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "rust_log": self.directives,
            }
        });
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "logging initialised: {summary}"
        );
    }
}

/// Initialize logging from the environment, honouring `--verbose`
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env(verbose: bool) -> Result<()> {
    LoggingConfig::from_env().with_verbose(verbose).init()
}
