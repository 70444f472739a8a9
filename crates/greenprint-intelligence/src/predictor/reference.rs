// ABOUTME: Closed-form reference models reproducing the targets the surrogates were trained on
// ABOUTME: Decode the standardised feature vector back to raw quantities, then apply the formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Reference models
//!
//! Each model owns the encoder of its pipeline so it can invert the
//! standardisation applied to its input. Columns missing from the metadata
//! contribute zero.

use greenprint_core::errors::PredictorError;

use super::{check_finite, check_input_len, Predictor};
use crate::encoder::{FeatureVector, LabelFeatureEncoder, OneHotFeatureEncoder};
use crate::scenario::alternative_emission;

/// Carbon surrogate target: `0.002*distance + 0.001*grocery + 0.2*internet/12 + 0.15*tv/8 + 0.5`
mod carbon {
    pub const VEHICLE_DISTANCE: &str = "Vehicle Distance";
    pub const GROCERY: &str = "Grocery";
    pub const INTERNET_DAILY: &str = "Internet Daily";
    pub const TV_DAILY_HOUR: &str = "TV Daily Hour";

    pub const DISTANCE_WEIGHT: f64 = 0.002;
    pub const GROCERY_WEIGHT: f64 = 0.001;
    pub const INTERNET_WEIGHT: f64 = 0.2;
    pub const INTERNET_HOURS_NORM: f64 = 12.0;
    pub const TV_WEIGHT: f64 = 0.15;
    pub const TV_HOURS_NORM: f64 = 8.0;
    pub const BASELINE: f64 = 0.5;
}

/// Future surrogate target: `base * diet_bonus * efficiency + 1.0`
mod future {
    pub const VEHICLE_DISTANCE: &str = "Vehicle Monthly Distance Km";
    pub const GROCERY: &str = "Monthly Grocery Bill";
    pub const INTERNET_DAILY: &str = "How Long Internet Daily Hour";
    pub const TV_DAILY_HOUR: &str = "How Long TV PC Daily Hour";
    pub const DIET: &str = "Diet";
    pub const ENERGY_EFFICIENCY: &str = "Energy efficiency";

    pub const DISTANCE_WEIGHT: f64 = 0.002;
    pub const GROCERY_WEIGHT: f64 = 0.001;
    pub const INTERNET_WEIGHT: f64 = 0.3;
    pub const INTERNET_HOURS_NORM: f64 = 12.0;
    pub const TV_WEIGHT: f64 = 0.2;
    pub const TV_HOURS_NORM: f64 = 10.0;
    pub const BASELINE: f64 = 1.0;

    pub fn diet_bonus(diet: Option<&str>) -> f64 {
        match diet {
            Some("vegetarian") => 0.8,
            Some("vegan") => 0.6,
            _ => 1.0,
        }
    }

    pub fn efficiency_factor(answer: Option<&str>) -> f64 {
        match answer {
            Some("Yes") => 0.9,
            Some("No") => 1.1,
            _ => 1.0,
        }
    }
}

/// `bias + sum(weight * value)`
fn weighted_sum(terms: &[(f64, f64)], bias: f64) -> f64 {
    terms
        .iter()
        .fold(bias, |acc, (weight, value)| weight.mul_add(*value, acc))
}

fn finish(predictor: &dyn Predictor, value: f64) -> Result<f32, PredictorError> {
    check_finite(predictor, value as f32)
}

/// Factor-table emission of the decoded request
#[derive(Debug, Clone)]
pub struct ReferenceRecommendationModel {
    encoder: LabelFeatureEncoder,
}

impl ReferenceRecommendationModel {
    /// Wrap the pipeline's encoder
    #[must_use]
    pub const fn new(encoder: LabelFeatureEncoder) -> Self {
        Self { encoder }
    }
}

impl Predictor for ReferenceRecommendationModel {
    fn name(&self) -> &str {
        "reference-recommendation"
    }

    fn expected_inputs(&self) -> Option<usize> {
        Some(self.encoder.width())
    }

    fn predict(&self, features: &[f32]) -> Result<f32, PredictorError> {
        check_input_len(self, features)?;
        let input = self.encoder.decode(FeatureVector::from_f32(features).as_slice());
        let emission = alternative_emission(
            &input.commute_mode,
            &input.diet_type,
            input.distance_km.max(0.0),
            input.energy_usage_kwh.max(0.0),
        );
        finish(self, emission)
    }
}

/// Heuristic carbon emission target
#[derive(Debug, Clone)]
pub struct ReferenceCarbonModel {
    encoder: OneHotFeatureEncoder,
}

impl ReferenceCarbonModel {
    /// Wrap the pipeline's encoder
    #[must_use]
    pub const fn new(encoder: OneHotFeatureEncoder) -> Self {
        Self { encoder }
    }
}

impl Predictor for ReferenceCarbonModel {
    fn name(&self) -> &str {
        "reference-carbon"
    }

    fn expected_inputs(&self) -> Option<usize> {
        Some(self.encoder.width())
    }

    fn predict(&self, features: &[f32]) -> Result<f32, PredictorError> {
        check_input_len(self, features)?;
        let features = FeatureVector::from_f32(features);
        let value = |column| {
            self.encoder
                .numeric_value(features.as_slice(), column)
                .unwrap_or(0.0)
        };
        let emission = weighted_sum(
            &[
                (carbon::DISTANCE_WEIGHT, value(carbon::VEHICLE_DISTANCE)),
                (carbon::GROCERY_WEIGHT, value(carbon::GROCERY)),
                (
                    carbon::INTERNET_WEIGHT,
                    value(carbon::INTERNET_DAILY) / carbon::INTERNET_HOURS_NORM,
                ),
                (
                    carbon::TV_WEIGHT,
                    value(carbon::TV_DAILY_HOUR) / carbon::TV_HOURS_NORM,
                ),
            ],
            carbon::BASELINE,
        );
        finish(self, emission)
    }
}

/// Heuristic future emission target
#[derive(Debug, Clone)]
pub struct ReferenceFutureModel {
    encoder: OneHotFeatureEncoder,
}

impl ReferenceFutureModel {
    /// Wrap the pipeline's encoder
    #[must_use]
    pub const fn new(encoder: OneHotFeatureEncoder) -> Self {
        Self { encoder }
    }
}

impl Predictor for ReferenceFutureModel {
    fn name(&self) -> &str {
        "reference-future"
    }

    fn expected_inputs(&self) -> Option<usize> {
        Some(self.encoder.width())
    }

    fn predict(&self, features: &[f32]) -> Result<f32, PredictorError> {
        check_input_len(self, features)?;
        let features = FeatureVector::from_f32(features);
        let row = features.as_slice();
        let value = |column| self.encoder.numeric_value(row, column).unwrap_or(0.0);

        let base = weighted_sum(
            &[
                (future::DISTANCE_WEIGHT, value(future::VEHICLE_DISTANCE)),
                (future::GROCERY_WEIGHT, value(future::GROCERY)),
                (
                    future::INTERNET_WEIGHT,
                    value(future::INTERNET_DAILY) / future::INTERNET_HOURS_NORM,
                ),
                (
                    future::TV_WEIGHT,
                    value(future::TV_DAILY_HOUR) / future::TV_HOURS_NORM,
                ),
            ],
            0.0,
        );
        let bonus = future::diet_bonus(self.encoder.categorical_value(row, future::DIET));
        let efficiency =
            future::efficiency_factor(self.encoder.categorical_value(row, future::ENERGY_EFFICIENCY));
        finish(self, (base * bonus).mul_add(efficiency, future::BASELINE))
    }
}
