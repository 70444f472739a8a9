// ABOUTME: Shared test utilities for the integration tests
// ABOUTME: Builds temporary models directories from the bundled metadata and configures runners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `greenprint`

use std::fs;
use std::path::Path;
use std::sync::Once;

use greenprint::config::InferenceConfig;
use greenprint::pipeline::PipelineRunner;
use greenprint_core::constants::artifacts;
use greenprint_core::models::{CommuteMode, DietType, UserInput};
use greenprint_intelligence::PredictorBackend;
use tempfile::TempDir;

pub const RECOMMENDATION_META: &str = include_str!("../models/recommendation_v2_meta.json");
pub const CARBON_META: &str = include_str!("../models/carbon_meta.json");
pub const FUTURE_META: &str = include_str!("../models/future_meta.json");
pub const CARBON_WEIGHTS: &str = include_str!("../models/carbonemission_surrogate.weights.json");

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Models directory holding all three metadata files and no weights
pub fn metadata_only_dir() -> TempDir {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), artifacts::RECOMMENDATION_META, RECOMMENDATION_META);
    write_artifact(dir.path(), artifacts::CARBON_META, CARBON_META);
    write_artifact(dir.path(), artifacts::FUTURE_META, FUTURE_META);
    dir
}

pub fn write_artifact(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

pub fn runner(dir: &Path, backend: PredictorBackend) -> PipelineRunner {
    PipelineRunner::new(
        InferenceConfig::default().with_overrides(Some(dir.to_path_buf()), Some(backend)),
    )
}

/// Car commuter, 30 km, meat-based diet, 400 kWh
pub fn car_commuter() -> UserInput {
    UserInput {
        commute_mode: CommuteMode::Car,
        distance_km: 30.0,
        diet_type: DietType::NonVeg,
        energy_usage_kwh: 400.0,
    }
}

pub fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}
