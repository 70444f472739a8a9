// ABOUTME: Persisted preprocessing metadata schemas exported alongside each surrogate model
// ABOUTME: Label-encoded (recommendation) and one-hot (carbon, future) shapes with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::MetadataError;

/// Canonical feature names of the label-encoded recommendation schema
pub mod feature_names {
    /// Label index of the commute mode
    pub const COMMUTE_MODE_ENCODED: &str = "commute_mode_encoded";
    /// Daily distance in km
    pub const DISTANCE_KM: &str = "distance_km";
    /// Label index of the diet
    pub const DIET_TYPE_ENCODED: &str = "diet_type_encoded";
    /// Monthly energy in kWh
    pub const ENERGY_USAGE_KWH: &str = "energy_usage_kWh";

    /// Training order
    pub const ALL: [&str; 4] = [
        COMMUTE_MODE_ENCODED,
        DISTANCE_KM,
        DIET_TYPE_ENCODED,
        ENERGY_USAGE_KWH,
    ];
}

fn default_feature_order() -> Vec<String> {
    feature_names::ALL
        .iter()
        .map(|name| (*name).to_owned())
        .collect()
}

/// Metadata of the label-encoded recommendation surrogate
///
/// `scaler_mean[i]` and `scaler_scale[i]` apply to `feature_order[i]`; the order
/// must match the one used when the scaler was fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    /// Feature names in model input order
    #[serde(default = "default_feature_order")]
    pub feature_order: Vec<String>,
    /// Commute labels in encoder order
    pub le_commute_classes: Vec<String>,
    /// Diet labels in encoder order
    pub le_diet_classes: Vec<String>,
    /// Per-feature standardisation mean
    pub scaler_mean: Vec<f64>,
    /// Per-feature standardisation scale
    pub scaler_scale: Vec<f64>,
}

impl RecommendationMetadata {
    /// Check that lists agree in length and scales are usable
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownFeature`] for feature names outside
    /// [`feature_names::ALL`], [`MetadataError::DuplicateName`] for a repeated
    /// feature, [`MetadataError::Shape`] for mismatched or empty lists and
    /// [`MetadataError::InvalidScale`] for zero or non-finite scales.
    pub fn validate(&self) -> Result<(), MetadataError> {
        check_non_empty("feature_order", self.feature_order.len())?;
        check_unique("feature_order", &self.feature_order)?;
        if let Some(name) = self
            .feature_order
            .iter()
            .find(|name| !feature_names::ALL.contains(&name.as_str()))
        {
            return Err(MetadataError::UnknownFeature { name: name.clone() });
        }
        let width = self.feature_order.len();
        check_len("scaler_mean", width, self.scaler_mean.len())?;
        check_len("scaler_scale", width, self.scaler_scale.len())?;
        check_non_empty("le_commute_classes", self.le_commute_classes.len())?;
        check_non_empty("le_diet_classes", self.le_diet_classes.len())?;
        check_scales("scaler_scale", &self.scaler_scale)
    }
}

/// Metadata of a one-hot encoded tabular surrogate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularMetadata {
    /// Categorical column names in model input order
    pub cat_cols: Vec<String>,
    /// Numeric column names in model input order
    pub num_cols: Vec<String>,
    /// Category list per categorical column
    pub onehot_categories: Vec<Vec<String>>,
    /// Standardisation mean per numeric column
    pub num_scaler_mean: Vec<f64>,
    /// Standardisation scale per numeric column
    pub num_scaler_scale: Vec<f64>,
}

impl TabularMetadata {
    /// Check that lists agree in length and scales are usable
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Shape`] for mismatched lists, no columns or
    /// empty category lists, [`MetadataError::DuplicateName`] for a repeated
    /// column or category and [`MetadataError::InvalidScale`] for zero or
    /// non-finite scales.
    pub fn validate(&self) -> Result<(), MetadataError> {
        check_non_empty("cat_cols + num_cols", self.cat_cols.len() + self.num_cols.len())?;
        let columns: Vec<String> = self.cat_cols.iter().chain(&self.num_cols).cloned().collect();
        check_unique("cat_cols + num_cols", &columns)?;
        check_len(
            "onehot_categories",
            self.cat_cols.len(),
            self.onehot_categories.len(),
        )?;
        for categories in &self.onehot_categories {
            check_non_empty("onehot_categories", categories.len())?;
            check_unique("onehot_categories", categories)?;
        }
        check_len("num_scaler_mean", self.num_cols.len(), self.num_scaler_mean.len())?;
        check_len(
            "num_scaler_scale",
            self.num_cols.len(),
            self.num_scaler_scale.len(),
        )?;
        check_scales("num_scaler_scale", &self.num_scaler_scale)
    }

    /// Number of one-hot dummy columns
    #[must_use]
    pub fn dummy_width(&self) -> usize {
        self.onehot_categories.iter().map(Vec::len).sum()
    }

    /// Total model input width: dummies followed by numeric columns
    #[must_use]
    pub fn feature_width(&self) -> usize {
        self.dummy_width() + self.num_cols.len()
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), MetadataError> {
    if expected == actual {
        Ok(())
    } else {
        Err(MetadataError::Shape {
            field,
            expected,
            actual,
        })
    }
}

fn check_non_empty(field: &'static str, len: usize) -> Result<(), MetadataError> {
    if len == 0 {
        return Err(MetadataError::Shape {
            field,
            expected: 1,
            actual: 0,
        });
    }
    Ok(())
}

fn check_unique(field: &'static str, names: &[String]) -> Result<(), MetadataError> {
    let mut seen = HashSet::with_capacity(names.len());
    match names.iter().find(|name| !seen.insert(name.as_str())) {
        Some(name) => Err(MetadataError::DuplicateName {
            field,
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

fn check_scales(field: &'static str, scales: &[f64]) -> Result<(), MetadataError> {
    match scales
        .iter()
        .enumerate()
        .find(|(_, scale)| !scale.is_finite() || **scale == 0.0)
    {
        Some((index, value)) => Err(MetadataError::InvalidScale {
            field,
            index,
            value: *value,
        }),
        None => Ok(()),
    }
}
