// ABOUTME: Criterion benchmarks for the recommendation pipeline's pure stages
// ABOUTME: Measures encoding, reference prediction, scenario enumeration, and personalised ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Criterion benchmarks for the recommendation stages.
//!
//! Uses the bundled recommendation metadata so the numbers reflect the
//! shipped class lists.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greenprint_core::models::{CommuteMode, DietType, RecommendationMetadata, UserInput};
use greenprint_intelligence::predictor::ReferenceRecommendationModel;
use greenprint_intelligence::{
    classify, LabelFeatureEncoder, PersonalizedRecommendationEngine, Predictor, ScenarioGenerator,
};

const RECOMMENDATION_META: &str = include_str!("../models/recommendation_v2_meta.json");

fn metadata() -> Arc<RecommendationMetadata> {
    Arc::new(serde_json::from_str(RECOMMENDATION_META).unwrap())
}

fn inputs() -> Vec<(&'static str, UserInput)> {
    vec![
        (
            "local_walker",
            UserInput {
                commute_mode: CommuteMode::Walk,
                distance_km: 3.0,
                diet_type: DietType::Veg,
                energy_usage_kwh: 180.0,
            },
        ),
        (
            "car_commuter",
            UserInput {
                commute_mode: CommuteMode::Car,
                distance_km: 30.0,
                diet_type: DietType::NonVeg,
                energy_usage_kwh: 400.0,
            },
        ),
        (
            "long_distance",
            UserInput {
                commute_mode: CommuteMode::Car,
                distance_km: 85.0,
                diet_type: DietType::Mixed,
                energy_usage_kwh: 950.0,
            },
        ),
    ]
}

fn bench_encode_and_predict(c: &mut Criterion) {
    let encoder = LabelFeatureEncoder::new(metadata()).unwrap();
    let model = ReferenceRecommendationModel::new(encoder.clone());
    let mut group = c.benchmark_group("encode_predict");

    for (name, input) in inputs() {
        group.bench_with_input(BenchmarkId::new("encode", name), &input, |b, input| {
            b.iter(|| encoder.encode(black_box(input)));
        });
        let features = encoder.encode(&input).to_f32();
        group.bench_with_input(BenchmarkId::new("reference", name), &features, |b, features| {
            b.iter(|| model.predict(black_box(features)).unwrap());
        });
    }
    group.finish();
}

fn bench_recommendations(c: &mut Criterion) {
    let metadata = metadata();
    let generator = ScenarioGenerator::new();
    let engine = PersonalizedRecommendationEngine::new();
    let mut group = c.benchmark_group("recommendations");

    for (name, input) in inputs() {
        let current = 25.0;
        group.bench_with_input(BenchmarkId::new("scenarios", name), &input, |b, input| {
            b.iter(|| {
                generator.top_scenarios(
                    black_box(current),
                    black_box(input),
                    &metadata.le_commute_classes,
                    &metadata.le_diet_classes,
                )
            });
        });
        group.bench_with_input(BenchmarkId::new("personalised", name), &input, |b, input| {
            b.iter(|| {
                let profile = classify(black_box(input));
                engine.generate_recommendations(black_box(current), input, &profile)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode_and_predict, bench_recommendations);
criterion_main!(benches);
