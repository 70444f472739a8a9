// ABOUTME: Environment configuration for the inference entry points
// ABOUTME: Resolves the models directory, predictor backend, environment, and engine limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Environment-based configuration
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `GREENPRINT_MODELS_DIR` | directory holding metadata and weights | `./models`, then the platform data dir |
//! | `GREENPRINT_PREDICTOR` | `auto`, `network` or `reference` | `auto` |
//! | `ENVIRONMENT` | `development`, `production` or `testing` | `development` |
//! | `GREENPRINT_MAX_SCENARIOS` | scenario alternatives returned | 3 |
//! | `GREENPRINT_MAX_PERSONALIZED` | personalised recommendations returned | 6 |
//!
//! Command-line flags take precedence over the environment.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use greenprint_core::constants::service_names;
use greenprint_core::errors::{AppError, AppResult, ErrorCode};
use greenprint_intelligence::{PredictorBackend, RecommendationEngineConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, Level};

/// Directory searched first when no models directory is configured
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Configuration shared by every inference entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceConfig {
    /// Directory holding `*_meta.json` and `*.weights.json` artifacts
    pub models_dir: PathBuf,
    /// Predictor implementation
    pub backend: PredictorBackend,
    /// Deployment environment
    pub environment: Environment,
    /// Recommendation limits
    pub engine: RecommendationEngineConfig,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            backend: PredictorBackend::default(),
            environment: Environment::default(),
            engine: RecommendationEngineConfig::default(),
        }
    }
}

impl InferenceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GREENPRINT_PREDICTOR` names an
    /// unknown backend or the engine limits are invalid
    pub fn from_env() -> AppResult<Self> {
        let backend = match env::var("GREENPRINT_PREDICTOR") {
            Ok(value) => value.parse::<PredictorBackend>().map_err(|message| {
                AppError::new(ErrorCode::ConfigInvalid, message)
                    .with_resource_id("GREENPRINT_PREDICTOR")
            })?,
            Err(_) => PredictorBackend::default(),
        };

        let engine = RecommendationEngineConfig::from_env().map_err(|e| {
            AppError::new(ErrorCode::ConfigInvalid, e.to_string()).with_source(e)
        })?;

        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            models_dir: resolve_models_dir(env::var_os("GREENPRINT_MODELS_DIR").map(PathBuf::from)),
            backend,
            environment,
            engine,
        };
        debug!(
            service = service_names::GREENPRINT,
            models_dir = %config.models_dir.display(),
            backend = %config.backend,
            environment = %config.environment,
            "inference configuration loaded"
        );
        Ok(config)
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(
        mut self,
        models_dir: Option<PathBuf>,
        backend: Option<PredictorBackend>,
    ) -> Self {
        if let Some(dir) = models_dir {
            self.models_dir = dir;
        }
        if let Some(backend) = backend {
            self.backend = backend;
        }
        self
    }

    /// Path of an artifact inside the models directory
    #[must_use]
    pub fn artifact(&self, file_name: &str) -> PathBuf {
        self.models_dir.join(file_name)
    }
}

/// Pick the models directory: explicit setting, `./models`, the platform data
/// directory, then `./models` again as the place errors will point at
fn resolve_models_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    let local = PathBuf::from(DEFAULT_MODELS_DIR);
    if local.is_dir() {
        return local;
    }
    dirs::data_dir()
        .map(|data| data.join(service_names::GREENPRINT).join(DEFAULT_MODELS_DIR))
        .filter(|dir| Path::is_dir(dir))
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_environment_parsing() {
        assert!(Environment::from_str_or_default("prod").is_production());
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_explicit_models_dir_wins() {
        let dir = resolve_models_dir(Some(PathBuf::from("/opt/greenprint/models")));
        assert_eq!(dir, PathBuf::from("/opt/greenprint/models"));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = InferenceConfig::default()
            .with_overrides(None, Some(PredictorBackend::Reference));
        assert_eq!(config.models_dir, PathBuf::from(DEFAULT_MODELS_DIR));
        assert_eq!(config.backend, PredictorBackend::Reference);
        assert_eq!(
            config.artifact("carbon_meta.json"),
            PathBuf::from("models/carbon_meta.json")
        );
    }
}
