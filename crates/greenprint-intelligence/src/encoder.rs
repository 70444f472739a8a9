// ABOUTME: Feature encoders turning request payloads into standardised model input vectors
// ABOUTME: Label-encoded variant for the recommendation surrogate, one-hot variant for tabular surrogates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! # Feature Encoding
//!
//! Both encoders share the same contract: vector length and order are fixed by
//! the metadata they were built from, unknown categorical labels silently fall
//! back to the first stored category, and encoding never fails once the
//! metadata has been validated.
//!
//! The `decode_*` methods invert the numeric standardisation. Reference
//! predictors use them to recover raw quantities from the model input.

use std::sync::Arc;

use greenprint_core::errors::MetadataError;
use greenprint_core::models::metadata::feature_names;
use greenprint_core::models::{
    CommuteMode, DietType, RecommendationMetadata, TabularMetadata, TabularRecord, UserInput,
};
use tracing::trace;

/// Model input row in metadata order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wrap raw values
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Values in model input order
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of features
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the vector has no features
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single-precision copy handed to predictors
    #[must_use]
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|value| *value as f32).collect()
    }

    /// Widen a predictor input back to double precision
    #[must_use]
    pub fn from_f32(values: &[f32]) -> Self {
        Self(values.iter().copied().map(f64::from).collect())
    }
}

fn class_index(classes: &[String], label: &str) -> usize {
    classes.iter().position(|class| class == label).unwrap_or_else(|| {
        trace!(label, "unknown category encoded as index 0");
        0
    })
}

/// Map a decoded, possibly fractional index back onto a class label
fn nearest_class(classes: &[String], value: f64) -> &str {
    let last = classes.len().saturating_sub(1);
    let index = (value.round().max(0.0) as usize).min(last);
    classes.get(index).map_or("", String::as_str)
}

/// Label-encoded, fully standardised encoder for [`UserInput`]
#[derive(Debug, Clone)]
pub struct LabelFeatureEncoder {
    metadata: Arc<RecommendationMetadata>,
}

impl LabelFeatureEncoder {
    /// Build an encoder over validated metadata
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the metadata shapes are inconsistent
    pub fn new(metadata: Arc<RecommendationMetadata>) -> Result<Self, MetadataError> {
        metadata.validate()?;
        Ok(Self { metadata })
    }

    /// Metadata this encoder was built from
    #[must_use]
    pub fn metadata(&self) -> &RecommendationMetadata {
        &self.metadata
    }

    /// Output vector length
    #[must_use]
    pub fn width(&self) -> usize {
        self.metadata.feature_order.len()
    }

    /// Encode a request: label lookup, then `(value - mean) / scale` on every feature
    #[must_use]
    pub fn encode(&self, input: &UserInput) -> FeatureVector {
        let meta = &self.metadata;
        let values = meta
            .feature_order
            .iter()
            .zip(meta.scaler_mean.iter().zip(&meta.scaler_scale))
            .map(|(name, (mean, scale))| (self.raw_value(name, input) - mean) / scale)
            .collect();
        FeatureVector(values)
    }

    fn raw_value(&self, name: &str, input: &UserInput) -> f64 {
        match name {
            feature_names::COMMUTE_MODE_ENCODED => {
                class_index(&self.metadata.le_commute_classes, input.commute_mode.label()) as f64
            }
            feature_names::DISTANCE_KM => input.distance_km,
            feature_names::DIET_TYPE_ENCODED => {
                class_index(&self.metadata.le_diet_classes, input.diet_type.label()) as f64
            }
            // validate() admits no other name
            _ => input.energy_usage_kwh,
        }
    }

    /// Undo standardisation, returning raw values in feature order
    #[must_use]
    pub fn decode_numeric(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.metadata.scaler_mean.iter().zip(&self.metadata.scaler_scale))
            .map(|(value, (mean, scale))| value.mul_add(*scale, *mean))
            .collect()
    }

    /// Recover a request from an encoded vector
    ///
    /// Label indices are rounded to the nearest stored class. Features absent
    /// from `feature_order` take their request defaults.
    #[must_use]
    pub fn decode(&self, features: &[f64]) -> UserInput {
        let meta = &self.metadata;
        let mut input = UserInput::default();
        for (name, value) in meta.feature_order.iter().zip(self.decode_numeric(features)) {
            match name.as_str() {
                feature_names::COMMUTE_MODE_ENCODED => {
                    input.commute_mode =
                        CommuteMode::from_label(nearest_class(&meta.le_commute_classes, value));
                }
                feature_names::DISTANCE_KM => input.distance_km = value,
                feature_names::DIET_TYPE_ENCODED => {
                    input.diet_type =
                        DietType::from_label(nearest_class(&meta.le_diet_classes, value));
                }
                _ => input.energy_usage_kwh = value,
            }
        }
        input
    }
}

/// One-hot encoder for [`TabularRecord`] requests
///
/// Output layout: one dummy block per categorical column, in `cat_cols`
/// order, followed by the standardised numeric columns. Dummies are not
/// scaled.
#[derive(Debug, Clone)]
pub struct OneHotFeatureEncoder {
    metadata: Arc<TabularMetadata>,
}

impl OneHotFeatureEncoder {
    /// Build an encoder over validated metadata
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the metadata shapes are inconsistent
    pub fn new(metadata: Arc<TabularMetadata>) -> Result<Self, MetadataError> {
        metadata.validate()?;
        Ok(Self { metadata })
    }

    /// Metadata this encoder was built from
    #[must_use]
    pub fn metadata(&self) -> &TabularMetadata {
        &self.metadata
    }

    /// Output vector length
    #[must_use]
    pub fn width(&self) -> usize {
        self.metadata.feature_width()
    }

    /// Encode a record
    ///
    /// Unknown or missing categorical values set the first dummy of their
    /// block. Numeric columns the record does not know take the stored mean,
    /// which standardises to zero.
    #[must_use]
    pub fn encode<R: TabularRecord + ?Sized>(&self, record: &R) -> FeatureVector {
        let meta = &self.metadata;
        let mut values = Vec::with_capacity(meta.feature_width());

        for (column, categories) in meta.cat_cols.iter().zip(&meta.onehot_categories) {
            let hot = record
                .categorical(column)
                .map_or(0, |value| class_index(categories, value));
            values.extend((0..categories.len()).map(|i| if i == hot { 1.0 } else { 0.0 }));
        }

        for (column, (mean, scale)) in meta
            .num_cols
            .iter()
            .zip(meta.num_scaler_mean.iter().zip(&meta.num_scaler_scale))
        {
            let raw = record.numeric(column).unwrap_or(*mean);
            values.push((raw - mean) / scale);
        }

        FeatureVector(values)
    }

    /// Undo standardisation of the numeric tail, in `num_cols` order
    #[must_use]
    pub fn decode_numeric(&self, features: &[f64]) -> Vec<f64> {
        let meta = &self.metadata;
        features
            .iter()
            .skip(meta.dummy_width())
            .zip(meta.num_scaler_mean.iter().zip(&meta.num_scaler_scale))
            .map(|(value, (mean, scale))| value.mul_add(*scale, *mean))
            .collect()
    }

    /// Raw value of one numeric column
    #[must_use]
    pub fn numeric_value(&self, features: &[f64], column: &str) -> Option<f64> {
        let meta = &self.metadata;
        let position = meta.num_cols.iter().position(|name| name == column)?;
        let value = features.get(meta.dummy_width() + position)?;
        Some(value.mul_add(meta.num_scaler_scale[position], meta.num_scaler_mean[position]))
    }

    /// Category whose dummy is set for one categorical column
    ///
    /// Ties resolve to the earliest category, matching the encoding fallback.
    #[must_use]
    pub fn categorical_value(&self, features: &[f64], column: &str) -> Option<&str> {
        let meta = &self.metadata;
        let position = meta.cat_cols.iter().position(|name| name == column)?;
        let offset: usize = meta.onehot_categories[..position].iter().map(Vec::len).sum();
        let categories = &meta.onehot_categories[position];
        let block = features.get(offset..offset + categories.len())?;

        let mut best = 0;
        for (i, value) in block.iter().enumerate() {
            if *value > block[best] {
                best = i;
            }
        }
        categories.get(best).map(String::as_str)
    }
}
