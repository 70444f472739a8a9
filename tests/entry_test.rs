// ABOUTME: Tests of the request boundary shared by every binary
// ABOUTME: Covers lenient field decoding, fatal parse errors, and zeroed error payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{metadata_only_dir, runner};
use greenprint::entry::{process, respond};
use greenprint::pipeline::PipelineKind;
use greenprint_core::errors::ErrorCode;
use greenprint_intelligence::PredictorBackend;
use serde_json::json;

#[test]
fn test_malformed_fields_take_defaults() {
    let dir = metadata_only_dir();
    let runner = runner(dir.path(), PredictorBackend::Reference);

    let defaults = process(&runner, PipelineKind::Recommendation, "{}".as_bytes()).unwrap();
    let malformed = process(
        &runner,
        PipelineKind::Recommendation,
        r#"{"commute_mode": 7, "distance_km": "far", "diet_type": null, "energy_usage_kWh": [1]}"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(defaults, malformed);
    // car, 10 km, mixed, 300 kWh: 2.1 + 2.7 + 4.0
    assert_eq!(defaults["current_emission"], 8.8);
}

#[test]
fn test_negative_numbers_clamp_to_zero() {
    let dir = metadata_only_dir();
    let runner = runner(dir.path(), PredictorBackend::Reference);
    let document = process(
        &runner,
        PipelineKind::Enhanced,
        r#"{"commute_mode": "walk", "distance_km": -12, "diet_type": "veg", "energy_usage_kWh": "-5"}"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(document["user_profile"]["mobility_type"], "local_traveler");
    assert_eq!(document["user_profile"]["energy_profile"], "low_consumer");
    // veg diet only
    assert_eq!(document["current_emission"], 1.5);
}

#[test]
fn test_invalid_json_produces_zeroed_payload() {
    let dir = metadata_only_dir();
    let runner = runner(dir.path(), PredictorBackend::Reference);
    let result = process(&runner, PipelineKind::Enhanced, "not json".as_bytes());
    assert_eq!(result.as_ref().unwrap_err().code, ErrorCode::InvalidInput);

    let (document, status) = respond(PipelineKind::Enhanced, "req-1", result);
    assert_eq!(status, 1);
    assert!(document["error"].as_str().unwrap().starts_with("Invalid JSON input"));
    assert_eq!(document["current_emission"], 0);
    assert_eq!(document["green_score"], 0);
    assert_eq!(document["user_profile"], json!({}));
    assert_eq!(document["recommendations"], json!([]));
}

#[test]
fn test_non_object_document_is_rejected() {
    let dir = metadata_only_dir();
    let runner = runner(dir.path(), PredictorBackend::Reference);
    let result = process(&runner, PipelineKind::Carbon, "[1, 2, 3]".as_bytes());
    let (document, status) = respond(PipelineKind::Carbon, "req-2", result);
    assert_eq!(status, 1);
    assert_eq!(
        document,
        json!({ "error": "Expected a JSON object, got an array", "emission": 0 })
    );
}

#[test]
fn test_missing_metadata_payload_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(dir.path(), PredictorBackend::Auto);
    let result = process(&runner, PipelineKind::Future, "{}".as_bytes());
    let (document, status) = respond(PipelineKind::Future, "req-3", result);
    assert_eq!(status, 1);
    assert!(document["error"].as_str().unwrap().contains("future_meta.json"));
    assert_eq!(document["future_emission"], 0);
}
