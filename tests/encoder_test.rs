// ABOUTME: Integration tests for the label-encoded and one-hot feature encoders
// ABOUTME: Uses the bundled metadata to check layout, fallbacks, and inverse scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{car_commuter, CARBON_META, RECOMMENDATION_META};
use greenprint_core::models::{
    CommuteMode, DietType, LifestyleInput, RecommendationMetadata, TabularMetadata, UserInput,
};
use greenprint_intelligence::{LabelFeatureEncoder, OneHotFeatureEncoder};
use serde_json::json;

fn label_encoder() -> LabelFeatureEncoder {
    let metadata: RecommendationMetadata = serde_json::from_str(RECOMMENDATION_META).unwrap();
    LabelFeatureEncoder::new(Arc::new(metadata)).unwrap()
}

fn carbon_encoder() -> OneHotFeatureEncoder {
    let metadata: TabularMetadata = serde_json::from_str(CARBON_META).unwrap();
    OneHotFeatureEncoder::new(Arc::new(metadata)).unwrap()
}

#[test]
fn test_label_encoding_standardises_every_feature() {
    let encoder = label_encoder();
    let features = encoder.encode(&car_commuter());
    let expected = [
        (3.0 - 2.5) / 1.2845,
        (30.0 - 60.5) / 34.35,
        (1.0 - 1.1) / 0.8307,
        0.0,
    ];
    assert_eq!(features.len(), 4);
    for (actual, expected) in features.as_slice().iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-12);
    }
}

#[test]
fn test_unknown_labels_fall_back_to_first_class() {
    let encoder = label_encoder();
    let scooter = UserInput {
        commute_mode: CommuteMode::from_label("scooter"),
        diet_type: DietType::from_label("keto"),
        ..car_commuter()
    };
    let first_classes = UserInput {
        commute_mode: CommuteMode::Ev,
        diet_type: DietType::Mixed,
        ..car_commuter()
    };
    assert_eq!(encoder.encode(&scooter), encoder.encode(&first_classes));
}

#[test]
fn test_label_matching_is_case_sensitive() {
    let encoder = label_encoder();
    let shouting = UserInput {
        commute_mode: CommuteMode::from_label("CAR"),
        ..car_commuter()
    };
    assert_ne!(encoder.encode(&shouting), encoder.encode(&car_commuter()));
}

#[test]
fn test_inverse_scaling_recovers_numeric_fields() {
    let encoder = label_encoder();
    let input = UserInput {
        distance_km: 42.5,
        energy_usage_kwh: 812.0,
        ..car_commuter()
    };
    let raw = encoder.decode_numeric(encoder.encode(&input).as_slice());
    assert!((raw[1] - 42.5).abs() < 1e-9);
    assert!((raw[3] - 812.0).abs() < 1e-9);

    let decoded = encoder.decode(encoder.encode(&input).as_slice());
    assert_eq!(decoded.commute_mode, CommuteMode::Car);
    assert_eq!(decoded.diet_type, DietType::NonVeg);
}

#[test]
fn test_one_hot_layout_and_fallbacks() {
    let encoder = carbon_encoder();
    let features = encoder.encode(&LifestyleInput::default());
    // 37 dummies over 12 columns, then 6 numeric columns
    assert_eq!(features.len(), 43);
    assert_eq!(encoder.width(), 43);

    let dummies = &features.as_slice()[..37];
    // One hot dummy per categorical column
    assert!((dummies.iter().sum::<f64>() - 12.0).abs() < f64::EPSILON);
    assert_eq!(encoder.categorical_value(features.as_slice(), "Diet"), Some("omnivore"));
    assert_eq!(encoder.categorical_value(features.as_slice(), "Body Type"), Some("average"));
    assert_eq!(encoder.categorical_value(features.as_slice(), "Heating"), Some("gas"));

    let grocery_mean = encoder.metadata().num_scaler_mean[0];
    let fields = json!({ "diet": "fruitarian", "body_type": "obese", "grocery": grocery_mean });
    let unknown = encoder.encode(&LifestyleInput::from_fields(fields.as_object().unwrap()));
    assert_eq!(encoder.categorical_value(unknown.as_slice(), "Diet"), Some("omnivore"));
    assert_eq!(encoder.categorical_value(unknown.as_slice(), "Body Type"), Some("average"));
    // Grocery at its mean standardises to zero
    assert!(unknown.as_slice()[37].abs() < 1e-12);
}

#[test]
fn test_one_hot_numeric_round_trip() {
    let encoder = carbon_encoder();
    let fields = json!({ "vehicle_distance": 1234.5, "tv_daily_hour": "6" });
    let features = encoder.encode(&LifestyleInput::from_fields(fields.as_object().unwrap()));
    let distance = encoder
        .numeric_value(features.as_slice(), "Vehicle Distance")
        .unwrap();
    let tv = encoder.numeric_value(features.as_slice(), "TV Daily Hour").unwrap();
    assert!((distance - 1234.5).abs() < 1e-9);
    assert!((tv - 6.0).abs() < 1e-9);
    assert_eq!(encoder.numeric_value(features.as_slice(), "Shoe Size"), None);
}

#[test]
fn test_zero_scale_is_rejected() {
    let metadata: RecommendationMetadata = serde_json::from_value(json!({
        "le_commute_classes": ["car"],
        "le_diet_classes": ["veg"],
        "scaler_mean": [0.0, 0.0, 0.0, 0.0],
        "scaler_scale": [1.0, 0.0, 1.0, 1.0]
    }))
    .unwrap();
    assert!(LabelFeatureEncoder::new(Arc::new(metadata)).is_err());
}
