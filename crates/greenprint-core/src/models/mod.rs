// ABOUTME: Core data models shared by the intelligence engine and the inference entry points
// ABOUTME: Re-exports travel enums, request payloads, profiles, recommendations, and metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

/// Request payloads and lenient field decoding
pub mod input;
/// Persisted preprocessing metadata schemas
pub mod metadata;
/// Derived user profile tiers
pub mod profile;
/// Recommendations, scenario alternatives, and their ratings
pub mod recommendation;
/// Commute and diet enumerations
pub mod travel;

pub use input::{FieldReader, FutureInput, LifestyleInput, TabularRecord, UserInput};
pub use metadata::{RecommendationMetadata, TabularMetadata};
pub use profile::{EcoAwareness, EnergyProfile, MobilityType, UserProfile};
pub use recommendation::{
    Comfort, Difficulty, Impact, Recommendation, RecommendationCategory, ScenarioAlternative,
};
pub use travel::{CommuteMode, DietType};
