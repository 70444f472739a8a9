// ABOUTME: Recommendation and scenario alternative models with impact and difficulty ratings
// ABOUTME: Ranking weights live on the rating enums so scoring is a pure lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::travel::{CommuteMode, DietType};

/// Area of life a recommendation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Commuting and travel
    Transport,
    /// Household energy
    Energy,
    /// Food
    Diet,
    /// Habits and community
    Lifestyle,
}

/// Expected emission impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Small effect
    Low,
    /// Noticeable effect
    Medium,
    /// Large effect
    High,
    /// Largest effect
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Impact {
    /// Ranking weight: Very High 4, High 3, Medium 2, Low 1
    #[must_use]
    pub const fn weight(&self) -> u32 {
        match self {
            Self::VeryHigh => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Effort needed to adopt a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Little effort
    Easy,
    /// Some effort
    Medium,
    /// Significant effort or investment
    High,
}

impl Difficulty {
    /// Ranking weight: Easy 3, Medium 2, High 1
    #[must_use]
    pub const fn weight(&self) -> u32 {
        match self {
            Self::Easy => 3,
            Self::Medium => 2,
            Self::High => 1,
        }
    }
}

/// A personalised recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Area of life targeted
    #[serde(rename = "type")]
    pub category: RecommendationCategory,
    /// Short title
    pub title: String,
    /// One-sentence description
    pub description: String,
    /// Expected impact
    pub impact: Impact,
    /// Adoption effort
    pub difficulty: Difficulty,
    /// Estimated kg CO2 saved
    pub co2_saving: f64,
    /// How to get started
    pub implementation: String,
}

impl Recommendation {
    /// `impact_weight * difficulty_weight`; higher ranks first
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.impact.weight() * self.difficulty.weight()
    }
}

/// Discrete comfort rating of a scenario alternative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Comfort {
    /// Long walk or ride
    Low,
    /// Public transport
    Medium,
    /// Electric vehicle
    High,
    /// Door-to-door private travel or short active trips
    VeryHigh,
}

impl Comfort {
    /// Star rendering shown to users
    #[must_use]
    pub const fn stars(&self) -> &'static str {
        match self {
            Self::Low => "★☆☆ (Low)",
            Self::Medium => "★★★ (Medium)",
            Self::High => "★★★★ (High)",
            Self::VeryHigh => "★★★★★ (Very High)",
        }
    }
}

impl fmt::Display for Comfort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stars())
    }
}

impl Serialize for Comfort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.stars())
    }
}

/// A hypothetical commute/diet combination that lowers emissions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioAlternative {
    /// Alternative commute mode
    pub commute_mode: CommuteMode,
    /// Alternative diet
    pub diet_type: DietType,
    /// kg CO2 saved versus the current estimate, rounded to 2 decimals
    pub emission_saving: f64,
    /// Comfort rating
    pub comfort_level: Comfort,
}
