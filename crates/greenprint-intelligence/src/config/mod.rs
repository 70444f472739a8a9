// ABOUTME: Recommendation engine configuration with defaults, env overrides, and validation
// ABOUTME: Limits how many scenario alternatives and personalised recommendations are returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Recommendation Engine Configuration
//!
//! Defaults come from [`greenprint_core::constants::limits`] and are also the
//! ceilings: a `GREENPRINT_*` environment variable can only lower a limit.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use greenprint_core::constants::limits::{DEFAULT_MAX_PERSONALIZED, DEFAULT_MAX_SCENARIOS};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Limits on recommendation generation
    pub limits: RecommendationLimits,
}

/// Limits on recommendation generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Scenario alternatives returned by the scenario generator
    pub max_scenarios: usize,
    /// Recommendations returned by the personalised engine
    pub max_personalized: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_scenarios: DEFAULT_MAX_SCENARIOS,
            max_personalized: DEFAULT_MAX_PERSONALIZED,
        }
    }
}

impl RecommendationEngineConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero or above its default
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_scenarios == 0 {
            return Err(ConfigError::ValueOutOfRange("max_scenarios must be > 0"));
        }
        if self.limits.max_personalized == 0 {
            return Err(ConfigError::ValueOutOfRange("max_personalized must be > 0"));
        }
        if self.limits.max_scenarios > DEFAULT_MAX_SCENARIOS {
            return Err(ConfigError::ValueOutOfRange("max_scenarios must be <= 3"));
        }
        if self.limits.max_personalized > DEFAULT_MAX_PERSONALIZED {
            return Err(ConfigError::ValueOutOfRange("max_personalized must be <= 6"));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("GREENPRINT_MAX_SCENARIOS", &mut self.limits.max_scenarios)?;
        Self::apply_env_var(
            "GREENPRINT_MAX_PERSONALIZED",
            &mut self.limits.max_personalized,
        )?;
        Ok(self)
    }
}
