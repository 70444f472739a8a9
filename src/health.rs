// ABOUTME: Model artifact health checks for operational visibility
// ABOUTME: Reports per pipeline whether metadata and weights exist, parse, and agree on input width
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Health check of the models directory

use std::path::Path;
use std::time::Instant;

use greenprint_core::constants::service_names;
use greenprint_intelligence::predictor::DenseNetwork;
use greenprint_intelligence::{Predictor, PredictorBackend};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::config::{Environment, InferenceConfig};
use crate::metadata::{load_recommendation_metadata, load_tabular_metadata};
use crate::pipeline::PipelineKind;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Artifacts present and consistent
    Healthy,
    /// Usable through the reference fallback
    Degraded,
    /// The pipeline would fail
    Unhealthy,
}

impl HealthStatus {
    /// Process exit status for a health report
    #[must_use]
    pub const fn exit_status(self) -> u8 {
        match self {
            Self::Healthy | Self::Degraded => 0,
            Self::Unhealthy => 1,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Worst component status
    pub status: HealthStatus,
    /// Service information
    pub service: ServiceInfo,
    /// One check per pipeline
    pub checks: Vec<ComponentHealth>,
    /// Time spent checking, in milliseconds
    pub response_time_ms: u64,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Deployment environment
    pub environment: Environment,
    /// Predictor backend the checks assumed
    pub backend: PredictorBackend,
}

/// Health of one pipeline's artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Pipeline name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
    /// Check duration in milliseconds
    pub duration_ms: u64,
    /// Artifact details
    pub metadata: Option<serde_json::Value>,
}

/// Outcome of loading a metadata file: input width or failure message
fn metadata_width(kind: PipelineKind, path: &Path) -> Result<usize, String> {
    let width = match kind {
        PipelineKind::Recommendation | PipelineKind::Enhanced => {
            load_recommendation_metadata(path).map(|metadata| metadata.feature_order.len())
        }
        PipelineKind::Carbon | PipelineKind::Future => {
            load_tabular_metadata(path).map(|metadata| metadata.feature_width())
        }
    };
    width.map_err(|e| e.to_string())
}

/// Checks the artifacts of every pipeline
pub struct HealthChecker<'a> {
    config: &'a InferenceConfig,
}

impl<'a> HealthChecker<'a> {
    /// Check the models directory named by `config`
    #[must_use]
    pub const fn new(config: &'a InferenceConfig) -> Self {
        Self { config }
    }

    /// Run every check
    #[must_use]
    pub fn check(&self) -> HealthResponse {
        let start = Instant::now();
        let checks: Vec<ComponentHealth> = PipelineKind::ALL
            .iter()
            .map(|kind| self.check_pipeline(*kind))
            .collect();
        let status = checks
            .iter()
            .map(|check| check.status)
            .max()
            .unwrap_or(HealthStatus::Healthy);

        info!(
            service = service_names::GREENPRINT,
            status = ?status,
            models_dir = %self.config.models_dir.display(),
            "health check complete"
        );

        HealthResponse {
            status,
            service: ServiceInfo {
                name: service_names::GREENPRINT.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                environment: self.config.environment,
                backend: self.config.backend,
            },
            checks,
            response_time_ms: elapsed_ms(start),
        }
    }

    /// Check one pipeline
    #[must_use]
    pub fn check_pipeline(&self, kind: PipelineKind) -> ComponentHealth {
        let start = Instant::now();
        let metadata_path = self.config.artifact(kind.metadata_file());
        let weights_path = self.config.artifact(kind.weights_file());
        let metadata_exists = metadata_path.is_file();
        let weights_exists = weights_path.is_file();
        let metadata = metadata_width(kind, &metadata_path);

        let (status, message) = match &metadata {
            Err(reason) => (HealthStatus::Unhealthy, reason.clone()),
            Ok(width) => self.weights_status(&weights_path, weights_exists, *width),
        };
        if status != HealthStatus::Healthy {
            warn!(pipeline = %kind, status = ?status, %message, "pipeline artifacts need attention");
        }

        ComponentHealth {
            name: kind.as_str().to_owned(),
            status,
            message,
            duration_ms: elapsed_ms(start),
            metadata: Some(json!({
                "metadata_file": kind.metadata_file(),
                "metadata_exists": metadata_exists,
                "metadata_valid": metadata.is_ok(),
                "feature_width": metadata.ok(),
                "weights_file": kind.weights_file(),
                "weights_exists": weights_exists,
            })),
        }
    }

    fn weights_status(
        &self,
        weights_path: &Path,
        weights_exists: bool,
        width: usize,
    ) -> (HealthStatus, String) {
        if self.config.backend == PredictorBackend::Reference {
            return (HealthStatus::Healthy, "reference model in use".to_owned());
        }
        if !weights_exists {
            return if self.config.backend == PredictorBackend::Network {
                (HealthStatus::Unhealthy, "network weights missing".to_owned())
            } else {
                (
                    HealthStatus::Degraded,
                    "network weights missing, reference model will be used".to_owned(),
                )
            };
        }
        match DenseNetwork::load(weights_path) {
            Ok(network) if network.expected_inputs() == Some(width) => {
                (HealthStatus::Healthy, "metadata and weights loaded".to_owned())
            }
            Ok(network) => (
                HealthStatus::Unhealthy,
                format!(
                    "weights expect {} inputs but metadata produces {width}",
                    network.input_width()
                ),
            ),
            Err(e) => (HealthStatus::Unhealthy, e.to_string()),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
