// ABOUTME: Result and error documents written to stdout by each pipeline
// ABOUTME: Error payloads carry the pipeline's fields zeroed so clients can read them uniformly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use greenprint_core::errors::AppError;
use greenprint_core::models::{Recommendation, ScenarioAlternative, UserProfile};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::pipeline::PipelineKind;

/// `carbon` pipeline result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonOutput {
    /// Estimated emission, non-negative, 2 decimals
    pub emission: f64,
}

/// `future` pipeline result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FutureOutput {
    /// Projected emission, non-negative, 2 decimals
    pub future_emission: f64,
}

/// `recommendation` pipeline result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationOutput {
    /// Estimated emission, 2 decimals
    pub current_emission: f64,
    /// 0-100 score, 2 decimals
    pub green_score: f64,
    /// Best scenario alternatives
    pub recommendations: Vec<ScenarioAlternative>,
}

/// `enhanced` pipeline result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedOutput {
    /// Estimated emission, 2 decimals
    pub current_emission: f64,
    /// 0-100 score, 2 decimals
    pub green_score: f64,
    /// Derived profile
    pub user_profile: UserProfile,
    /// Best personalised recommendations
    pub recommendations: Vec<Recommendation>,
    /// Which profile the recommendations target
    pub personalization_note: String,
}

/// Result of any pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineOutput {
    /// `{emission}`
    Carbon(CarbonOutput),
    /// `{future_emission}`
    Future(FutureOutput),
    /// `{current_emission, green_score, recommendations}`
    Recommendation(RecommendationOutput),
    /// `{current_emission, green_score, user_profile, recommendations, personalization_note}`
    Enhanced(EnhancedOutput),
}

/// Fields a failed pipeline reports with zero values
#[must_use]
pub fn zeroed_fields(kind: PipelineKind) -> Map<String, Value> {
    let zeroed = match kind {
        PipelineKind::Carbon => json!({ "emission": 0 }),
        PipelineKind::Future => json!({ "future_emission": 0 }),
        PipelineKind::Recommendation => json!({
            "current_emission": 0,
            "green_score": 0,
            "recommendations": [],
        }),
        PipelineKind::Enhanced => json!({
            "current_emission": 0,
            "green_score": 0,
            "user_profile": {},
            "recommendations": [],
        }),
    };
    match zeroed {
        Value::Object(fields) => fields,
        _ => Map::new(),
    }
}

/// `{"error": message, ...zeroed fields}` for a failed request
#[must_use]
pub fn error_payload(kind: PipelineKind, message: &str) -> Value {
    let mut document = Map::new();
    document.insert("error".to_owned(), Value::String(message.to_owned()));
    document.extend(zeroed_fields(kind));
    Value::Object(document)
}

/// Error payload for an [`AppError`]; the message omits the code description
#[must_use]
pub fn app_error_payload(kind: PipelineKind, error: &AppError) -> Value {
    error_payload(kind, &error.message)
}
