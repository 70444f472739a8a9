// ABOUTME: Commute mode and diet enumerations with their emission factor tables
// ABOUTME: Tagged variants replace free-form strings; unknown labels are preserved as Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::emission_factors::{
    BIKE_KG_PER_KM, BUS_KG_PER_KM, CAR_KG_PER_KM, EV_KG_PER_KM, MIXED_KG_PER_DAY,
    NON_VEG_KG_PER_DAY, TRAIN_KG_PER_KM, UNKNOWN_COMMUTE_KG_PER_KM, UNKNOWN_DIET_KG_PER_DAY,
    VEG_KG_PER_DAY, WALK_KG_PER_KM,
};

/// How a user commutes
///
/// Labels are matched case-sensitively against the categories the
/// recommendation surrogate was trained with. Anything else is kept verbatim
/// in `Other` so the encoder can apply its index-0 fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommuteMode {
    /// Private petrol/diesel car
    Car,
    /// Public bus
    Bus,
    /// Bicycle
    Bike,
    /// On foot
    Walk,
    /// Rail
    Train,
    /// Electric vehicle
    Ev,
    /// Label not covered by the standard categories
    Other(String),
}

impl CommuteMode {
    /// Every known mode, in a stable order
    pub const KNOWN: [Self; 6] = [
        Self::Car,
        Self::Bus,
        Self::Bike,
        Self::Walk,
        Self::Train,
        Self::Ev,
    ];

    /// Parse a wire label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "car" => Self::Car,
            "bus" => Self::Bus,
            "bike" => Self::Bike,
            "walk" => Self::Walk,
            "train" => Self::Train,
            "EV" => Self::Ev,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Bike => "bike",
            Self::Walk => "walk",
            Self::Train => "train",
            Self::Ev => "EV",
            Self::Other(label) => label,
        }
    }

    /// kg CO2 per km travelled
    #[must_use]
    pub const fn emission_factor(&self) -> f64 {
        match self {
            Self::Car => CAR_KG_PER_KM,
            Self::Bus => BUS_KG_PER_KM,
            Self::Bike => BIKE_KG_PER_KM,
            Self::Walk => WALK_KG_PER_KM,
            Self::Train => TRAIN_KG_PER_KM,
            Self::Ev => EV_KG_PER_KM,
            Self::Other(_) => UNKNOWN_COMMUTE_KG_PER_KM,
        }
    }

    /// Walking or cycling
    #[must_use]
    pub const fn is_active_travel(&self) -> bool {
        matches!(self, Self::Walk | Self::Bike)
    }

    /// Bus or train
    #[must_use]
    pub const fn is_public_transport(&self) -> bool {
        matches!(self, Self::Bus | Self::Train)
    }

    /// Car, train or bus
    #[must_use]
    pub const fn is_motorised_shared_or_private(&self) -> bool {
        matches!(self, Self::Car | Self::Train | Self::Bus)
    }

    /// Eco-score contribution: zero-emission or electric modes 2, public transport 1
    #[must_use]
    pub const fn eco_points(&self) -> u8 {
        match self {
            Self::Bike | Self::Walk | Self::Ev => 2,
            Self::Train | Self::Bus => 1,
            Self::Car | Self::Other(_) => 0,
        }
    }
}

impl fmt::Display for CommuteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CommuteMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CommuteMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// What a user mostly eats
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DietType {
    /// Vegetarian
    Veg,
    /// Meat-based
    NonVeg,
    /// Mixed
    Mixed,
    /// Label not covered by the standard categories
    Other(String),
}

impl DietType {
    /// Every known diet, in a stable order
    pub const KNOWN: [Self; 3] = [Self::Veg, Self::NonVeg, Self::Mixed];

    /// Parse a wire label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "veg" => Self::Veg,
            "non-veg" => Self::NonVeg,
            "mixed" => Self::Mixed,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
            Self::Mixed => "mixed",
            Self::Other(label) => label,
        }
    }

    /// kg CO2 per day
    #[must_use]
    pub const fn emission_factor(&self) -> f64 {
        match self {
            Self::Veg => VEG_KG_PER_DAY,
            Self::NonVeg => NON_VEG_KG_PER_DAY,
            Self::Mixed => MIXED_KG_PER_DAY,
            Self::Other(_) => UNKNOWN_DIET_KG_PER_DAY,
        }
    }

    /// Eco-score contribution: vegetarian 2, mixed 1
    #[must_use]
    pub const fn eco_points(&self) -> u8 {
        match self {
            Self::Veg => 2,
            Self::Mixed => 1,
            Self::NonVeg | Self::Other(_) => 0,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DietType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DietType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_for_known_modes() {
        for mode in CommuteMode::KNOWN {
            assert_eq!(CommuteMode::from_label(mode.label()), mode);
        }
        for diet in DietType::KNOWN {
            assert_eq!(DietType::from_label(diet.label()), diet);
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(
            CommuteMode::from_label("ev"),
            CommuteMode::Other("ev".to_owned())
        );
        assert_eq!(CommuteMode::from_label("EV"), CommuteMode::Ev);
        assert_eq!(
            DietType::from_label("Veg"),
            DietType::Other("Veg".to_owned())
        );
    }

    #[test]
    fn test_unknown_labels_use_fallback_factors() {
        assert!((CommuteMode::from_label("scooter").emission_factor() - 0.1).abs() < f64::EPSILON);
        assert!((DietType::from_label("keto").emission_factor() - 2.0).abs() < f64::EPSILON);
        assert_eq!(CommuteMode::from_label("scooter").eco_points(), 0);
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&CommuteMode::Ev).unwrap();
        assert_eq!(json, "\"EV\"");
        let diet: DietType = serde_json::from_str("\"non-veg\"").unwrap();
        assert_eq!(diet, DietType::NonVeg);
    }
}
