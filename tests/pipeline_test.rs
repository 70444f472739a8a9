// ABOUTME: End-to-end tests of the four inference pipelines over temporary models directories
// ABOUTME: Covers reference and network predictors, metadata failures, and the health report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{car_commuter, metadata_only_dir, runner, write_artifact, CARBON_WEIGHTS};
use greenprint::health::{HealthChecker, HealthStatus};
use greenprint::output::PipelineOutput;
use greenprint::pipeline::PipelineKind;
use greenprint_core::constants::artifacts;
use greenprint_core::errors::ErrorCode;
use greenprint_core::models::{
    CommuteMode, DietType, EcoAwareness, FutureInput, LifestyleInput, MobilityType,
};
use greenprint_intelligence::PredictorBackend;
use serde_json::json;

#[test]
fn test_recommendation_pipeline_end_to_end() {
    let dir = metadata_only_dir();
    let output = runner(dir.path(), PredictorBackend::Auto)
        .run_recommendation(&car_commuter())
        .unwrap();

    // 30 * 0.21 + 4.2 + (400 / 30) * 0.4
    assert!((output.current_emission - 15.83).abs() < 1e-9);
    assert!((output.green_score - 77.38).abs() < 1e-9);
    assert_eq!(output.recommendations.len(), 3);

    let best = &output.recommendations[0];
    assert_eq!(best.commute_mode, CommuteMode::Walk);
    assert_eq!(best.diet_type, DietType::Veg);
    assert!((best.emission_saving - 9.0).abs() < 1e-9);
    assert_eq!(output.recommendations[1].commute_mode, CommuteMode::Bike);
    assert!(output
        .recommendations
        .windows(2)
        .all(|pair| pair[0].emission_saving >= pair[1].emission_saving));
}

#[test]
fn test_enhanced_pipeline_end_to_end() {
    let dir = metadata_only_dir();
    let output = runner(dir.path(), PredictorBackend::Reference)
        .run_enhanced(&car_commuter())
        .unwrap();

    assert_eq!(output.user_profile.mobility_type, MobilityType::ModerateCommuter);
    assert_eq!(output.user_profile.eco_awareness, EcoAwareness::Low);
    assert_eq!(output.user_profile.eco_score, 0);
    assert_eq!(
        output.personalization_note,
        "Recommendations tailored for moderate_commuter with low environmental awareness"
    );
    assert_eq!(output.recommendations.len(), 6);
    assert_eq!(output.recommendations[0].title, "Switch to Public Transportation");
    // Carbon Tracking App saves 10% of the unrounded estimate
    let tracking = output
        .recommendations
        .iter()
        .find(|recommendation| recommendation.title == "Carbon Tracking App")
        .unwrap();
    assert!((tracking.co2_saving - 1.58).abs() < 1e-9);
}

#[test]
fn test_enhanced_document_shape() {
    let dir = metadata_only_dir();
    let fields = json!({
        "commute_mode": "bike",
        "distance_km": "8",
        "diet_type": "veg",
        "energy_usage_kWh": 250
    });
    let output = runner(dir.path(), PredictorBackend::Auto)
        .run(PipelineKind::Enhanced, fields.as_object().unwrap())
        .unwrap();
    let document = serde_json::to_value(&output).unwrap();

    assert_eq!(document["user_profile"]["mobility_type"], "short_commuter");
    assert_eq!(document["user_profile"]["energy_profile"], "low_consumer");
    assert_eq!(document["user_profile"]["eco_awareness"], "high");
    assert_eq!(document["user_profile"]["eco_score"], 5);
    let first = &document["recommendations"][0];
    for key in [
        "type",
        "title",
        "description",
        "impact",
        "difficulty",
        "co2_saving",
        "implementation",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_carbon_pipeline_with_defaults() {
    let dir = metadata_only_dir();
    let output = runner(dir.path(), PredictorBackend::Reference)
        .run_carbon(&LifestyleInput::default())
        .unwrap();
    // 0.002*500 + 0.001*400 + 0.2*(4/12) + 0.15*(2/8) + 0.5 = 2.0042
    assert!((output.emission - 2.0).abs() < 1e-9);
}

#[test]
fn test_carbon_network_weights_match_reference() {
    let dir = metadata_only_dir();
    write_artifact(dir.path(), artifacts::CARBON_WEIGHTS, CARBON_WEIGHTS);
    let fields = json!({ "vehicle_distance": 1800, "grocery": 250, "internet_daily": 10 });
    let fields = fields.as_object().unwrap();

    let network = runner(dir.path(), PredictorBackend::Network)
        .run(PipelineKind::Carbon, fields)
        .unwrap();
    let reference = runner(dir.path(), PredictorBackend::Reference)
        .run(PipelineKind::Carbon, fields)
        .unwrap();
    // 3.6 + 0.25 + 0.1667 + 0.0375 + 0.5
    assert_eq!(
        serde_json::to_value(&network).unwrap(),
        json!({ "emission": 4.55 })
    );
    assert_eq!(network, reference);
}

#[test]
fn test_future_pipeline_applies_diet_bonus() {
    let dir = metadata_only_dir();
    let runner = runner(dir.path(), PredictorBackend::Auto);
    let omnivore = runner.run_future(&FutureInput::default()).unwrap();
    let fields = json!({ "diet": "vegan", "energy_efficiency": "Yes" });
    let vegan = runner
        .run_future(&FutureInput::from_fields(fields.as_object().unwrap()))
        .unwrap();
    // base = 1.0 + 0.4 + 0.1 + 0.04 = 1.54
    assert!((omnivore.future_emission - 2.69).abs() < 1e-9);
    assert!((vegan.future_emission - 1.83).abs() < 1e-9);
}

#[test]
fn test_missing_metadata_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let error = runner(dir.path(), PredictorBackend::Auto)
        .run_recommendation(&car_commuter())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains(artifacts::RECOMMENDATION_META));
}

#[test]
fn test_inconsistent_metadata_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(
        dir.path(),
        artifacts::RECOMMENDATION_META,
        r#"{"le_commute_classes": ["car"], "le_diet_classes": ["veg"],
            "scaler_mean": [0.0, 0.0, 0.0], "scaler_scale": [1.0, 1.0, 1.0]}"#,
    );
    let error = runner(dir.path(), PredictorBackend::Auto)
        .run_enhanced(&car_commuter())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_network_backend_requires_weights() {
    let dir = metadata_only_dir();
    let error = runner(dir.path(), PredictorBackend::Network)
        .run(PipelineKind::Future, &serde_json::Map::new())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_wrong_width_weights_fail_prediction() {
    let dir = metadata_only_dir();
    write_artifact(
        dir.path(),
        artifacts::RECOMMENDATION_WEIGHTS,
        r#"{"layers": [{"weights": [[1.0, 1.0]], "bias": [0.0]}]}"#,
    );
    let error = runner(dir.path(), PredictorBackend::Auto)
        .run_recommendation(&car_commuter())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::PredictionFailed);
}

#[test]
fn test_negative_prediction_is_clamped() {
    let dir = metadata_only_dir();
    write_artifact(
        dir.path(),
        artifacts::RECOMMENDATION_WEIGHTS,
        r#"{"layers": [{"weights": [[0.0, 0.0, 0.0, 0.0]], "bias": [-5.0]}]}"#,
    );
    let output = runner(dir.path(), PredictorBackend::Network)
        .run(PipelineKind::Recommendation, &serde_json::Map::new())
        .unwrap();
    match output {
        PipelineOutput::Recommendation(output) => {
            assert!(output.current_emission.abs() < f64::EPSILON);
            assert!((output.green_score - 100.0).abs() < f64::EPSILON);
            assert!(output.recommendations.is_empty());
        }
        other => panic!("unexpected output {other:?}"),
    }
}

#[test]
fn test_health_report_degrades_without_weights() {
    let dir = metadata_only_dir();
    write_artifact(dir.path(), artifacts::CARBON_WEIGHTS, CARBON_WEIGHTS);
    let runner = runner(dir.path(), PredictorBackend::Auto);
    let response = HealthChecker::new(runner.config()).check();

    assert_eq!(response.status, HealthStatus::Degraded);
    let carbon = response
        .checks
        .iter()
        .find(|check| check.name == "carbon")
        .unwrap();
    assert_eq!(carbon.status, HealthStatus::Healthy);
    let future = response
        .checks
        .iter()
        .find(|check| check.name == "future")
        .unwrap();
    assert_eq!(future.status, HealthStatus::Degraded);
    assert_eq!(future.metadata.as_ref().unwrap()["metadata_valid"], true);
}
