// ABOUTME: Personalised recommendation engine selecting template bundles by user profile
// ABOUTME: Merges mobility, energy, diet, and lifestyle bundles and ranks them by impact and effort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Personalised recommendation engine
//!
//! Each profile dimension selects a small bundle of recommendation templates
//! whose `co2_saving` is a closed-form estimate over the current emission,
//! commute distance, energy reading, and the factor tables. Bundles are merged
//! in the order mobility, energy, diet, lifestyle and ranked by
//! [`Recommendation::score`].

use std::cmp::Reverse;

use greenprint_core::constants::emission_factors::{
    BUS_KG_PER_KM, CAR_KG_PER_KM, DAYS_PER_MONTH, EV_KG_PER_KM, GRID_KG_PER_KWH,
    MIXED_KG_PER_DAY, NON_VEG_KG_PER_DAY, TRAIN_KG_PER_KM, VEG_KG_PER_DAY,
};
use greenprint_core::models::{
    DietType, Difficulty, EcoAwareness, EnergyProfile, Impact, MobilityType, Recommendation,
    RecommendationCategory, UserInput, UserProfile,
};
use tracing::debug;

use crate::config::RecommendationEngineConfig;
use crate::numeric::round_reported;

/// Flat saving for users who are already plant-based
const PLANT_BASED_SAVING: f64 = 0.2;

fn template(
    category: RecommendationCategory,
    title: &str,
    description: String,
    impact: Impact,
    difficulty: Difficulty,
    co2_saving: f64,
    implementation: &str,
) -> Recommendation {
    Recommendation {
        category,
        title: title.to_owned(),
        description,
        impact,
        difficulty,
        co2_saving,
        implementation: implementation.to_owned(),
    }
}

/// Energy emission avoided by cutting a share of the monthly reading
fn energy_saving(energy_usage_kwh: f64, share: f64) -> f64 {
    (energy_usage_kwh * share / DAYS_PER_MONTH) * GRID_KG_PER_KWH
}

fn mobility_bundle(
    mobility: MobilityType,
    current_emission: f64,
    input: &UserInput,
) -> Vec<Recommendation> {
    let distance = input.distance_km;
    match mobility {
        MobilityType::LongDistanceCommuter => vec![
            template(
                RecommendationCategory::Transport,
                "Consider Carpooling or Ride-sharing",
                format!(
                    "For your {distance}km daily commute, carpooling can reduce emissions by 50-75%"
                ),
                Impact::High,
                Difficulty::Easy,
                current_emission * 0.5,
                "Use apps like BlaBlaCar or organize with colleagues",
            ),
            template(
                RecommendationCategory::Transport,
                "Hybrid Work Schedule",
                "Work from home 2-3 days per week to reduce commute frequency".to_owned(),
                Impact::VeryHigh,
                Difficulty::Medium,
                current_emission * 0.4,
                "Discuss flexible work arrangements with your employer",
            ),
        ],
        MobilityType::ModerateCommuter => vec![
            template(
                RecommendationCategory::Transport,
                "Switch to Public Transportation",
                format!("Replace car trips with train/bus for your {distance}km commute"),
                Impact::High,
                Difficulty::Medium,
                distance * (CAR_KG_PER_KM - TRAIN_KG_PER_KM),
                "Check local transit schedules and monthly pass options",
            ),
            template(
                RecommendationCategory::Transport,
                "Electric Vehicle Transition",
                "Consider switching to an electric vehicle for daily commuting".to_owned(),
                Impact::VeryHigh,
                Difficulty::High,
                distance * (CAR_KG_PER_KM - EV_KG_PER_KM),
                "Research EV models, charging infrastructure, and incentives",
            ),
        ],
        MobilityType::ShortCommuter => vec![
            template(
                RecommendationCategory::Transport,
                "Cycling Infrastructure",
                format!("Bike to work for your {distance}km commute - great exercise too!"),
                Impact::High,
                Difficulty::Medium,
                distance * CAR_KG_PER_KM,
                "Invest in a good bike, helmet, and check cycling routes",
            ),
            template(
                RecommendationCategory::Transport,
                "Walking + Public Transport Combo",
                "Walk to nearest transit stop and use public transport".to_owned(),
                Impact::Medium,
                Difficulty::Easy,
                distance * (CAR_KG_PER_KM - BUS_KG_PER_KM) * 0.8,
                "Plan multi-modal routes using transit apps",
            ),
        ],
        MobilityType::LocalTraveler => vec![template(
            RecommendationCategory::Transport,
            "Active Transportation",
            "Walk or bike for most of your local trips".to_owned(),
            Impact::Medium,
            Difficulty::Easy,
            distance * input.commute_mode.emission_factor(),
            "Plan walking/cycling routes, invest in comfortable shoes/bike",
        )],
    }
}

fn energy_bundle(profile: EnergyProfile, energy_usage_kwh: f64) -> Vec<Recommendation> {
    match profile {
        EnergyProfile::HighConsumer => vec![
            template(
                RecommendationCategory::Energy,
                "Smart Home Energy Audit",
                format!("Your {energy_usage_kwh}kWh usage is high - identify energy waste"),
                Impact::VeryHigh,
                Difficulty::Medium,
                energy_saving(energy_usage_kwh, 0.3),
                "Use smart plugs, LED bulbs, and energy-efficient appliances",
            ),
            template(
                RecommendationCategory::Energy,
                "Solar Panel Installation",
                "Generate renewable energy to offset high consumption".to_owned(),
                Impact::VeryHigh,
                Difficulty::High,
                energy_saving(energy_usage_kwh, 0.8),
                "Get solar quotes, check local incentives and net metering",
            ),
        ],
        EnergyProfile::AverageConsumer => vec![template(
            RecommendationCategory::Energy,
            "Energy Efficiency Upgrades",
            "Small changes can reduce your energy usage by 15-20%".to_owned(),
            Impact::Medium,
            Difficulty::Easy,
            energy_saving(energy_usage_kwh, 0.2),
            "Programmable thermostat, LED lighting, unplug devices",
        )],
        EnergyProfile::LowConsumer => vec![template(
            RecommendationCategory::Energy,
            "Maintain Efficient Habits",
            "You're already doing great! Consider renewable energy".to_owned(),
            Impact::Low,
            Difficulty::Easy,
            energy_saving(energy_usage_kwh, 0.1),
            "Switch to renewable energy provider if available",
        )],
    }
}

fn diet_bundle(diet: &DietType) -> Vec<Recommendation> {
    match diet {
        DietType::NonVeg => vec![
            template(
                RecommendationCategory::Diet,
                "Meatless Monday Challenge",
                "Start with one plant-based day per week".to_owned(),
                Impact::Medium,
                Difficulty::Easy,
                (NON_VEG_KG_PER_DAY - MIXED_KG_PER_DAY) * 0.3,
                "Try new vegetarian recipes, explore plant-based proteins",
            ),
            template(
                RecommendationCategory::Diet,
                "Reduce Red Meat Consumption",
                "Replace beef with chicken, fish, or plant proteins".to_owned(),
                Impact::High,
                Difficulty::Medium,
                (NON_VEG_KG_PER_DAY - MIXED_KG_PER_DAY) * 0.6,
                "Plan meals with less carbon-intensive proteins",
            ),
        ],
        DietType::Mixed => vec![template(
            RecommendationCategory::Diet,
            "Increase Plant-Based Meals",
            "Aim for 4-5 vegetarian days per week".to_owned(),
            Impact::Medium,
            Difficulty::Medium,
            (MIXED_KG_PER_DAY - VEG_KG_PER_DAY) * 0.7,
            "Discover new vegetarian cuisines and recipes",
        )],
        DietType::Veg | DietType::Other(_) => vec![template(
            RecommendationCategory::Diet,
            "Local & Seasonal Eating",
            "You're plant-based! Focus on local, seasonal produce".to_owned(),
            Impact::Low,
            Difficulty::Easy,
            PLANT_BASED_SAVING,
            "Shop at farmers markets, grow herbs at home",
        )],
    }
}

fn lifestyle_bundle(awareness: EcoAwareness, current_emission: f64) -> Vec<Recommendation> {
    let recommendation = match awareness {
        EcoAwareness::Low => template(
            RecommendationCategory::Lifestyle,
            "Carbon Tracking App",
            "Start monitoring your daily carbon footprint".to_owned(),
            Impact::Medium,
            Difficulty::Easy,
            current_emission * 0.1,
            "Use apps to track and gamify carbon reduction",
        ),
        EcoAwareness::Moderate => template(
            RecommendationCategory::Lifestyle,
            "Eco-Friendly Shopping",
            "Choose products with lower environmental impact".to_owned(),
            Impact::Medium,
            Difficulty::Easy,
            current_emission * 0.05,
            "Buy local, reduce packaging, choose sustainable brands",
        ),
        // Multiplier effect of inspiring others
        EcoAwareness::High => template(
            RecommendationCategory::Lifestyle,
            "Community Leadership",
            "Share your eco-knowledge and inspire others".to_owned(),
            Impact::VeryHigh,
            Difficulty::Medium,
            current_emission * 0.2,
            "Organize community events, mentor others in sustainability",
        ),
    };
    vec![recommendation]
}

/// Profile-targeted recommendation engine
#[derive(Debug, Clone, Default)]
pub struct PersonalizedRecommendationEngine {
    config: RecommendationEngineConfig,
}

impl PersonalizedRecommendationEngine {
    /// Create an engine with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Every template selected for the profile, merged in bundle order and unranked
    #[must_use]
    pub fn candidate_recommendations(
        &self,
        current_emission: f64,
        input: &UserInput,
        profile: &UserProfile,
    ) -> Vec<Recommendation> {
        let mut candidates = mobility_bundle(profile.mobility_type, current_emission, input);
        candidates.extend(energy_bundle(profile.energy_profile, input.energy_usage_kwh));
        candidates.extend(diet_bundle(&input.diet_type));
        candidates.extend(lifestyle_bundle(profile.eco_awareness, current_emission));
        candidates
    }

    /// Ranked, truncated recommendations with savings rounded for reporting
    ///
    /// Ranking is a stable descending sort on [`Recommendation::score`], so
    /// equal scores keep bundle order.
    #[must_use]
    pub fn generate_recommendations(
        &self,
        current_emission: f64,
        input: &UserInput,
        profile: &UserProfile,
    ) -> Vec<Recommendation> {
        let mut recommendations = self.candidate_recommendations(current_emission, input, profile);
        recommendations.sort_by_key(|recommendation| Reverse(recommendation.score()));
        recommendations.truncate(self.config.limits.max_personalized);
        for recommendation in &mut recommendations {
            recommendation.co2_saving = round_reported(recommendation.co2_saving);
        }
        debug!(
            count = recommendations.len(),
            mobility = %profile.mobility_type,
            "generated personalised recommendations"
        );
        recommendations
    }
}
