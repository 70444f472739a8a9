// ABOUTME: Derived user profile tiers for mobility, energy use, and eco-awareness
// ABOUTME: Serialized with the snake_case tier names consumed by the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Commute distance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityType {
    /// More than 50 km
    LongDistanceCommuter,
    /// More than 20 km, up to 50 km
    ModerateCommuter,
    /// More than 5 km, up to 20 km
    ShortCommuter,
    /// Up to 5 km
    LocalTraveler,
}

impl MobilityType {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LongDistanceCommuter => "long_distance_commuter",
            Self::ModerateCommuter => "moderate_commuter",
            Self::ShortCommuter => "short_commuter",
            Self::LocalTraveler => "local_traveler",
        }
    }
}

impl fmt::Display for MobilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Household energy tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyProfile {
    /// More than 600 kWh per month
    HighConsumer,
    /// More than 300 kWh, up to 600 kWh
    AverageConsumer,
    /// Up to 300 kWh
    LowConsumer,
}

impl EnergyProfile {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HighConsumer => "high_consumer",
            Self::AverageConsumer => "average_consumer",
            Self::LowConsumer => "low_consumer",
        }
    }
}

impl fmt::Display for EnergyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a user's environmentally favourable choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EcoAwareness {
    /// Eco score 4 or 5
    High,
    /// Eco score 2 or 3
    Moderate,
    /// Eco score 0 or 1
    Low,
}

impl EcoAwareness {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for EcoAwareness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived per-request profile, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Commute distance tier
    pub mobility_type: MobilityType,
    /// Household energy tier
    pub energy_profile: EnergyProfile,
    /// Eco-awareness tier
    pub eco_awareness: EcoAwareness,
    /// Raw eco score in [0, 5]
    pub eco_score: u8,
}

impl UserProfile {
    /// Human-readable note explaining which profile the recommendations target
    #[must_use]
    pub fn personalization_note(&self) -> String {
        format!(
            "Recommendations tailored for {} with {} environmental awareness",
            self.mobility_type, self.eco_awareness
        )
    }
}
