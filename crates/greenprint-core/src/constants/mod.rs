// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Emission factors, classifier thresholds, scoring weights, and artifact file names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. The factor tables themselves are keyed by enum and live next to
//! the enums in [`crate::models`]; the raw numbers are kept here.

/// Emission factors used by the scenario and recommendation formulas
pub mod emission_factors {
    /// Car, kg CO2 per km
    pub const CAR_KG_PER_KM: f64 = 0.21;
    /// Bus, kg CO2 per km
    pub const BUS_KG_PER_KM: f64 = 0.089;
    /// Bike, kg CO2 per km
    pub const BIKE_KG_PER_KM: f64 = 0.018;
    /// Walking, kg CO2 per km
    pub const WALK_KG_PER_KM: f64 = 0.0;
    /// Train, kg CO2 per km
    pub const TRAIN_KG_PER_KM: f64 = 0.041;
    /// Electric vehicle, kg CO2 per km
    pub const EV_KG_PER_KM: f64 = 0.045;
    /// Fallback for commute modes without a factor
    pub const UNKNOWN_COMMUTE_KG_PER_KM: f64 = 0.1;

    /// Vegetarian diet, kg CO2 per day
    pub const VEG_KG_PER_DAY: f64 = 1.5;
    /// Meat-based diet, kg CO2 per day
    pub const NON_VEG_KG_PER_DAY: f64 = 4.2;
    /// Mixed diet, kg CO2 per day
    pub const MIXED_KG_PER_DAY: f64 = 2.7;
    /// Fallback for diets without a factor
    pub const UNKNOWN_DIET_KG_PER_DAY: f64 = 2.0;

    /// Days the monthly energy reading is spread over
    pub const DAYS_PER_MONTH: f64 = 30.0;
    /// Grid intensity, kg CO2 per kWh
    pub const GRID_KG_PER_KWH: f64 = 0.4;
}

/// Green score calibration
pub mod green_score {
    /// Emission units per green-score point.
    ///
    /// Tied to the emission distribution the recommendation surrogate was
    /// trained on; recalibrate whenever the predictor is retrained.
    pub const GREEN_SCORE_DIVISOR: f64 = 0.7;
    /// Best possible score
    pub const MAX_GREEN_SCORE: f64 = 100.0;
    /// Worst possible score
    pub const MIN_GREEN_SCORE: f64 = 0.0;
}

/// Profile classifier thresholds (all comparisons are strict `>` / `<`)
pub mod profile_thresholds {
    /// Daily distance above which a user is a long-distance commuter
    pub const LONG_DISTANCE_KM: f64 = 50.0;
    /// Daily distance above which a user is a moderate commuter
    pub const MODERATE_DISTANCE_KM: f64 = 20.0;
    /// Daily distance above which a user is a short commuter
    pub const SHORT_DISTANCE_KM: f64 = 5.0;

    /// Monthly energy above which a household is a high consumer
    pub const HIGH_ENERGY_KWH: f64 = 600.0;
    /// Monthly energy above which a household is an average consumer
    pub const AVERAGE_ENERGY_KWH: f64 = 300.0;
    /// Monthly energy below which the eco score earns a point
    pub const LOW_ENERGY_KWH: f64 = 300.0;

    /// Eco score at or above which awareness is high
    pub const HIGH_AWARENESS_SCORE: u8 = 4;
    /// Eco score at or above which awareness is moderate
    pub const MODERATE_AWARENESS_SCORE: u8 = 2;
    /// Largest reachable eco score
    pub const MAX_ECO_SCORE: u8 = 5;
}

/// Distance plausibility rules for scenario alternatives
pub mod plausibility {
    /// Walking and cycling are not offered above this distance
    pub const MAX_ACTIVE_TRAVEL_KM: f64 = 40.0;
    /// Buses are not offered above this distance
    pub const MAX_BUS_KM: f64 = 90.0;
    /// Motorised modes are not offered below this distance
    pub const MIN_MOTORISED_KM: f64 = 2.0;
    /// Walking and cycling above this distance are rated low comfort
    pub const LOW_COMFORT_ACTIVE_TRAVEL_KM: f64 = 30.0;
}

/// Recommendation ranking limits
pub mod limits {
    /// Scenario alternatives returned per request
    pub const DEFAULT_MAX_SCENARIOS: usize = 3;
    /// Personalised recommendations returned per request
    pub const DEFAULT_MAX_PERSONALIZED: usize = 6;
    /// Decimal places kept on reported emissions and savings
    pub const REPORTED_DECIMALS: i32 = 2;
}

/// Model artifact file names inside the models directory
pub mod artifacts {
    /// Label-encoded recommendation metadata
    pub const RECOMMENDATION_META: &str = "recommendation_v2_meta.json";
    /// Recommendation surrogate weights
    pub const RECOMMENDATION_WEIGHTS: &str = "recommendation_model_v2.weights.json";
    /// One-hot carbon surrogate metadata
    pub const CARBON_META: &str = "carbon_meta.json";
    /// Carbon surrogate weights
    pub const CARBON_WEIGHTS: &str = "carbonemission_surrogate.weights.json";
    /// One-hot future surrogate metadata
    pub const FUTURE_META: &str = "future_meta.json";
    /// Future surrogate weights
    pub const FUTURE_WEIGHTS: &str = "future_prediction.weights.json";
}

/// Service identity used in logs
pub mod service_names {
    /// Service name reported by every entry point
    pub const GREENPRINT: &str = "greenprint";
}
