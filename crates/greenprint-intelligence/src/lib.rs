// ABOUTME: Carbon intelligence engine: feature encoding, prediction, scoring, and recommendations
// ABOUTME: Pure business rules with no I/O beyond loading exported network weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Greenprint Intelligence
//!
//! Turns a household lifestyle description into an emission estimate and a
//! ranked list of ways to reduce it.
//!
//! - [`encoder`]: label-encoded and one-hot feature encoders
//! - [`predictor`]: the [`predictor::Predictor`] trait, a dense network
//!   evaluator and closed-form reference models
//! - [`green_score`]: maps an estimate onto a 0-100 scale
//! - [`profile`]: mobility, energy, and eco-awareness tiers
//! - [`scenario`]: lower-emission commute and diet alternatives
//! - [`recommendation_engine`]: profile-targeted recommendation templates

/// Engine configuration and limits
pub mod config;
/// Feature encoders
pub mod encoder;
/// Green score derivation
pub mod green_score;
/// Rounding helpers for reported values
pub mod numeric;
/// Surrogate model predictors
pub mod predictor;
/// User profile classification
pub mod profile;
/// Personalised recommendation engine
pub mod recommendation_engine;
/// Scenario alternative generation
pub mod scenario;

pub use config::{ConfigError, RecommendationEngineConfig, RecommendationLimits};
pub use encoder::{FeatureVector, LabelFeatureEncoder, OneHotFeatureEncoder};
pub use green_score::green_score;
pub use predictor::{select_predictor, Predictor, PredictorBackend};
pub use profile::classify;
pub use recommendation_engine::PersonalizedRecommendationEngine;
pub use scenario::ScenarioGenerator;
