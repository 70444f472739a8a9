// ABOUTME: Profile classifier deriving mobility, energy, and eco-awareness tiers from a request
// ABOUTME: Pure threshold rules; every comparison is strict so boundary values fall to the lower tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use greenprint_core::constants::profile_thresholds::{
    AVERAGE_ENERGY_KWH, HIGH_AWARENESS_SCORE, HIGH_ENERGY_KWH, LONG_DISTANCE_KM, LOW_ENERGY_KWH,
    MAX_ECO_SCORE, MODERATE_AWARENESS_SCORE, MODERATE_DISTANCE_KM, SHORT_DISTANCE_KM,
};
use greenprint_core::models::{EcoAwareness, EnergyProfile, MobilityType, UserInput, UserProfile};

/// Commute distance tier
#[must_use]
pub fn mobility_type(distance_km: f64) -> MobilityType {
    if distance_km > LONG_DISTANCE_KM {
        MobilityType::LongDistanceCommuter
    } else if distance_km > MODERATE_DISTANCE_KM {
        MobilityType::ModerateCommuter
    } else if distance_km > SHORT_DISTANCE_KM {
        MobilityType::ShortCommuter
    } else {
        MobilityType::LocalTraveler
    }
}

/// Household energy tier
#[must_use]
pub fn energy_profile(energy_usage_kwh: f64) -> EnergyProfile {
    if energy_usage_kwh > HIGH_ENERGY_KWH {
        EnergyProfile::HighConsumer
    } else if energy_usage_kwh > AVERAGE_ENERGY_KWH {
        EnergyProfile::AverageConsumer
    } else {
        EnergyProfile::LowConsumer
    }
}

/// Eco score in `[0, 5]`: commute points, diet points, and one point for low energy use
#[must_use]
pub fn eco_score(input: &UserInput) -> u8 {
    let low_energy = u8::from(input.energy_usage_kwh < LOW_ENERGY_KWH);
    let score = input.commute_mode.eco_points() + input.diet_type.eco_points() + low_energy;
    score.min(MAX_ECO_SCORE)
}

/// Awareness tier for an eco score
#[must_use]
pub const fn eco_awareness(score: u8) -> EcoAwareness {
    if score >= HIGH_AWARENESS_SCORE {
        EcoAwareness::High
    } else if score >= MODERATE_AWARENESS_SCORE {
        EcoAwareness::Moderate
    } else {
        EcoAwareness::Low
    }
}

/// Derive the full profile for a request
#[must_use]
pub fn classify(input: &UserInput) -> UserProfile {
    let score = eco_score(input);
    UserProfile {
        mobility_type: mobility_type(input.distance_km),
        energy_profile: energy_profile(input.energy_usage_kwh),
        eco_awareness: eco_awareness(score),
        eco_score: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenprint_core::models::{CommuteMode, DietType};

    #[test]
    fn test_mobility_boundaries_are_strict() {
        assert_eq!(mobility_type(50.1), MobilityType::LongDistanceCommuter);
        assert_eq!(mobility_type(50.0), MobilityType::ModerateCommuter);
        assert_eq!(mobility_type(20.0), MobilityType::ShortCommuter);
        assert_eq!(mobility_type(5.0), MobilityType::LocalTraveler);
        assert_eq!(mobility_type(0.0), MobilityType::LocalTraveler);
    }

    #[test]
    fn test_energy_boundaries_are_strict() {
        assert_eq!(energy_profile(601.0), EnergyProfile::HighConsumer);
        assert_eq!(energy_profile(600.0), EnergyProfile::AverageConsumer);
        assert_eq!(energy_profile(300.0), EnergyProfile::LowConsumer);
    }

    #[test]
    fn test_eco_score_extremes() {
        let greenest = UserInput {
            commute_mode: CommuteMode::Bike,
            distance_km: 3.0,
            diet_type: DietType::Veg,
            energy_usage_kwh: 120.0,
        };
        assert_eq!(eco_score(&greenest), 5);
        assert_eq!(classify(&greenest).eco_awareness, EcoAwareness::High);

        let heaviest = UserInput {
            commute_mode: CommuteMode::Car,
            distance_km: 80.0,
            diet_type: DietType::NonVeg,
            energy_usage_kwh: 900.0,
        };
        let profile = classify(&heaviest);
        assert_eq!(profile.eco_score, 0);
        assert_eq!(profile.eco_awareness, EcoAwareness::Low);
        assert_eq!(profile.mobility_type, MobilityType::LongDistanceCommuter);
        assert_eq!(profile.energy_profile, EnergyProfile::HighConsumer);
    }

    #[test]
    fn test_energy_point_needs_strictly_less_than_300() {
        let at_threshold = UserInput {
            commute_mode: CommuteMode::Train,
            diet_type: DietType::Mixed,
            energy_usage_kwh: 300.0,
            ..UserInput::default()
        };
        assert_eq!(eco_score(&at_threshold), 2);
        assert_eq!(eco_awareness(2), EcoAwareness::Moderate);
        assert_eq!(eco_awareness(1), EcoAwareness::Low);
        assert_eq!(eco_awareness(4), EcoAwareness::High);
    }
}
