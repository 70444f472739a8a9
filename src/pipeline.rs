// ABOUTME: The four inference pipelines sharing one encode, predict, and post-process flow
// ABOUTME: Carbon and future surrogates, scenario recommendations, and personalised recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! # Inference Pipelines
//!
//! Every pipeline follows the same steps:
//!
//! 1. decode the request fields, substituting defaults
//! 2. load (or reuse) the pipeline's metadata and build its encoder
//! 3. select the predictor: dense network weights or the reference model
//! 4. predict once, clamp to non-negative
//! 5. derive the reported document
//!
//! Metadata and predictor failures abort the request; everything after the
//! prediction is total.

use std::fmt;

use clap::ValueEnum;
use greenprint_core::constants::artifacts;
use greenprint_core::errors::AppResult;
use greenprint_core::models::{FutureInput, LifestyleInput, UserInput};
use greenprint_intelligence::numeric::round_reported;
use greenprint_intelligence::predictor::{
    ReferenceCarbonModel, ReferenceFutureModel, ReferenceRecommendationModel,
};
use greenprint_intelligence::{
    classify, green_score, select_predictor, FeatureVector, LabelFeatureEncoder,
    OneHotFeatureEncoder, PersonalizedRecommendationEngine, Predictor, ScenarioGenerator,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::InferenceConfig;
use crate::metadata::InferenceContext;
use crate::output::{
    CarbonOutput, EnhancedOutput, FutureOutput, PipelineOutput, RecommendationOutput,
};

/// Which surrogate and post-processing to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    /// Lifestyle questionnaire to current emission
    Carbon,
    /// Lifestyle questionnaire to projected emission
    Future,
    /// Commute/diet/energy to emission plus scenario alternatives
    #[value(alias = "scenario")]
    Recommendation,
    /// Commute/diet/energy to emission plus profile-targeted recommendations
    #[value(alias = "personalized")]
    Enhanced,
}

impl PipelineKind {
    /// Every pipeline, in reporting order
    pub const ALL: [Self; 4] = [Self::Carbon, Self::Future, Self::Recommendation, Self::Enhanced];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Carbon => "carbon",
            Self::Future => "future",
            Self::Recommendation => "recommendation",
            Self::Enhanced => "enhanced",
        }
    }

    /// Metadata file read by this pipeline
    #[must_use]
    pub const fn metadata_file(&self) -> &'static str {
        match self {
            Self::Carbon => artifacts::CARBON_META,
            Self::Future => artifacts::FUTURE_META,
            Self::Recommendation | Self::Enhanced => artifacts::RECOMMENDATION_META,
        }
    }

    /// Network weights file read by this pipeline
    #[must_use]
    pub const fn weights_file(&self) -> &'static str {
        match self {
            Self::Carbon => artifacts::CARBON_WEIGHTS,
            Self::Future => artifacts::FUTURE_WEIGHTS,
            Self::Recommendation | Self::Enhanced => artifacts::RECOMMENDATION_WEIGHTS,
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs pipelines against one models directory
#[derive(Debug)]
pub struct PipelineRunner {
    config: InferenceConfig,
    context: InferenceContext,
}

impl PipelineRunner {
    /// Create a runner with an empty metadata cache
    #[must_use]
    pub fn new(config: InferenceConfig) -> Self {
        let context = InferenceContext::new(config.models_dir.clone());
        Self { config, context }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Metadata cache
    #[must_use]
    pub const fn context(&self) -> &InferenceContext {
        &self.context
    }

    /// Decode `fields` for `kind` and run it
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be loaded or the predictor fails
    pub fn run(&self, kind: PipelineKind, fields: &Map<String, Value>) -> AppResult<PipelineOutput> {
        match kind {
            PipelineKind::Carbon => self
                .run_carbon(&LifestyleInput::from_fields(fields))
                .map(PipelineOutput::Carbon),
            PipelineKind::Future => self
                .run_future(&FutureInput::from_fields(fields))
                .map(PipelineOutput::Future),
            PipelineKind::Recommendation => self
                .run_recommendation(&UserInput::from_fields(fields))
                .map(PipelineOutput::Recommendation),
            PipelineKind::Enhanced => self
                .run_enhanced(&UserInput::from_fields(fields))
                .map(PipelineOutput::Enhanced),
        }
    }

    /// Current emission from the lifestyle questionnaire
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be loaded or the predictor fails
    pub fn run_carbon(&self, input: &LifestyleInput) -> AppResult<CarbonOutput> {
        let encoder = OneHotFeatureEncoder::new(self.context.carbon_metadata()?)?;
        let features = encoder.encode(input);
        let reference = Box::new(ReferenceCarbonModel::new(encoder));
        let emission = self.predict(PipelineKind::Carbon, reference, &features)?;
        Ok(CarbonOutput {
            emission: round_reported(emission),
        })
    }

    /// Projected emission from the future questionnaire
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be loaded or the predictor fails
    pub fn run_future(&self, input: &FutureInput) -> AppResult<FutureOutput> {
        let encoder = OneHotFeatureEncoder::new(self.context.future_metadata()?)?;
        let features = encoder.encode(input);
        let reference = Box::new(ReferenceFutureModel::new(encoder));
        let emission = self.predict(PipelineKind::Future, reference, &features)?;
        Ok(FutureOutput {
            future_emission: round_reported(emission),
        })
    }

    /// Current emission plus the best scenario alternatives
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be loaded or the predictor fails
    pub fn run_recommendation(&self, input: &UserInput) -> AppResult<RecommendationOutput> {
        let current = self.current_emission(PipelineKind::Recommendation, input)?;
        let metadata = self.context.recommendation_metadata()?;
        let recommendations = ScenarioGenerator::with_config(self.config.engine.clone())
            .top_scenarios(
                current,
                input,
                &metadata.le_commute_classes,
                &metadata.le_diet_classes,
            );
        info!(
            pipeline = %PipelineKind::Recommendation,
            current_emission = current,
            alternatives = recommendations.len(),
            "scenario recommendations ready"
        );
        Ok(RecommendationOutput {
            current_emission: round_reported(current),
            green_score: green_score(current),
            recommendations,
        })
    }

    /// Current emission plus profile-targeted recommendations
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be loaded or the predictor fails
    pub fn run_enhanced(&self, input: &UserInput) -> AppResult<EnhancedOutput> {
        let current = self.current_emission(PipelineKind::Enhanced, input)?;
        let profile = classify(input);
        let recommendations = PersonalizedRecommendationEngine::with_config(self.config.engine.clone())
            .generate_recommendations(current, input, &profile);
        info!(
            pipeline = %PipelineKind::Enhanced,
            current_emission = current,
            mobility = %profile.mobility_type,
            awareness = %profile.eco_awareness,
            recommendations = recommendations.len(),
            "personalised recommendations ready"
        );
        Ok(EnhancedOutput {
            current_emission: round_reported(current),
            green_score: green_score(current),
            personalization_note: profile.personalization_note(),
            user_profile: profile,
            recommendations,
        })
    }

    fn current_emission(&self, kind: PipelineKind, input: &UserInput) -> AppResult<f64> {
        let encoder = LabelFeatureEncoder::new(self.context.recommendation_metadata()?)?;
        let features = encoder.encode(input);
        let reference = Box::new(ReferenceRecommendationModel::new(encoder));
        self.predict(kind, reference, &features)
    }

    fn predict(
        &self,
        kind: PipelineKind,
        reference: Box<dyn Predictor>,
        features: &FeatureVector,
    ) -> AppResult<f64> {
        let weights = self.context.artifact_path(kind.weights_file());
        let predictor = select_predictor(self.config.backend, &weights, reference)?;
        let raw = f64::from(predictor.predict(&features.to_f32())?);
        let prediction = raw.max(0.0);
        debug!(
            pipeline = %kind,
            predictor = predictor.name(),
            raw,
            prediction,
            "prediction complete"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_artifacts() {
        assert_eq!(PipelineKind::Carbon.metadata_file(), "carbon_meta.json");
        assert_eq!(
            PipelineKind::Enhanced.weights_file(),
            PipelineKind::Recommendation.weights_file()
        );
        assert_eq!(PipelineKind::Future.to_string(), "future");
    }

    #[test]
    fn test_value_enum_aliases() {
        assert_eq!(
            PipelineKind::from_str("scenario", true),
            Ok(PipelineKind::Recommendation)
        );
        assert_eq!(
            PipelineKind::from_str("enhanced", true),
            Ok(PipelineKind::Enhanced)
        );
        assert!(PipelineKind::from_str("weather", true).is_err());
    }
}
