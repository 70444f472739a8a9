// ABOUTME: Scenario generator enumerating lower-emission commute and diet combinations
// ABOUTME: Applies distance plausibility rules, rates comfort, and ranks alternatives by saving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! # Scenario Enumeration
//!
//! Every (commute class, diet class) pair stored in the recommendation metadata
//! is priced with the factor tables:
//!
//! ```text
//! alt = distance * commute_factor + diet_factor + (energy / 30) * 0.4
//! ```
//!
//! Pairs that are implausible for the user's distance, or that would not save
//! anything against the current estimate, are dropped.

use greenprint_core::constants::emission_factors::{DAYS_PER_MONTH, GRID_KG_PER_KWH};
use greenprint_core::constants::plausibility::{
    LOW_COMFORT_ACTIVE_TRAVEL_KM, MAX_ACTIVE_TRAVEL_KM, MAX_BUS_KM, MIN_MOTORISED_KM,
};
use greenprint_core::models::{Comfort, CommuteMode, DietType, ScenarioAlternative, UserInput};
use tracing::debug;

use crate::config::RecommendationEngineConfig;
use crate::numeric::round_reported;

/// Daily household energy emission for a monthly reading
#[must_use]
pub fn energy_emission(energy_usage_kwh: f64) -> f64 {
    (energy_usage_kwh / DAYS_PER_MONTH) * GRID_KG_PER_KWH
}

/// Estimated emission of a hypothetical commute/diet combination
#[must_use]
pub fn alternative_emission(
    commute: &CommuteMode,
    diet: &DietType,
    distance_km: f64,
    energy_usage_kwh: f64,
) -> f64 {
    distance_km.mul_add(commute.emission_factor(), diet.emission_factor())
        + energy_emission(energy_usage_kwh)
}

/// Whether a commute mode is realistic for a daily distance
#[must_use]
pub fn is_plausible(commute: &CommuteMode, distance_km: f64) -> bool {
    if commute.is_active_travel() && distance_km > MAX_ACTIVE_TRAVEL_KM {
        return false;
    }
    if *commute == CommuteMode::Bus && distance_km > MAX_BUS_KM {
        return false;
    }
    !(commute.is_motorised_shared_or_private() && distance_km < MIN_MOTORISED_KM)
}

/// Comfort rating of switching to a commute mode
#[must_use]
pub fn comfort_level(commute: &CommuteMode, distance_km: f64) -> Comfort {
    if commute.is_active_travel() && distance_km > LOW_COMFORT_ACTIVE_TRAVEL_KM {
        Comfort::Low
    } else if commute.is_public_transport() {
        Comfort::Medium
    } else if *commute == CommuteMode::Ev {
        Comfort::High
    } else {
        Comfort::VeryHigh
    }
}

/// Ranks scenario alternatives for a request
#[derive(Debug, Clone, Default)]
pub struct ScenarioGenerator {
    config: RecommendationEngineConfig,
}

impl ScenarioGenerator {
    /// Create a generator with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Every plausible alternative with a positive saving
    ///
    /// The saving is compared before rounding, so a saving below half a cent
    /// is kept and reported as `0.0`. Sorted by descending reported saving; ties keep enumeration order (commute
    /// classes outer, diet classes inner).
    #[must_use]
    pub fn enumerate_scenarios(
        &self,
        current_emission: f64,
        input: &UserInput,
        commute_classes: &[String],
        diet_classes: &[String],
    ) -> Vec<ScenarioAlternative> {
        let distance = input.distance_km;
        let mut alternatives = Vec::new();

        for commute in commute_classes.iter().map(|label| CommuteMode::from_label(label)) {
            if !is_plausible(&commute, distance) {
                debug!(commute = %commute, distance, "skipping implausible commute alternative");
                continue;
            }
            for diet in diet_classes.iter().map(|label| DietType::from_label(label)) {
                let alt = alternative_emission(&commute, &diet, distance, input.energy_usage_kwh);
                let saving = current_emission - alt;
                if saving > 0.0 {
                    alternatives.push(ScenarioAlternative {
                        comfort_level: comfort_level(&commute, distance),
                        commute_mode: commute.clone(),
                        diet_type: diet,
                        emission_saving: round_reported(saving),
                    });
                }
            }
        }

        alternatives.sort_by(|a, b| b.emission_saving.total_cmp(&a.emission_saving));
        alternatives
    }

    /// The best `max_scenarios` alternatives
    #[must_use]
    pub fn top_scenarios(
        &self,
        current_emission: f64,
        input: &UserInput,
        commute_classes: &[String],
        diet_classes: &[String],
    ) -> Vec<ScenarioAlternative> {
        let mut alternatives =
            self.enumerate_scenarios(current_emission, input, commute_classes, diet_classes);
        alternatives.truncate(self.config.limits.max_scenarios);
        alternatives
    }
}
