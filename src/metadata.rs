// ABOUTME: Loads and validates preprocessing metadata exported next to each surrogate model
// ABOUTME: InferenceContext caches parsed metadata for the lifetime of the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! Metadata loading
//!
//! Metadata is read at most once per process and shared by `Arc`. There is no
//! invalidation: a process answers a single request and exits.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use greenprint_core::constants::artifacts;
use greenprint_core::errors::MetadataError;
use greenprint_core::models::{RecommendationMetadata, TabularMetadata};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read and parse a JSON metadata file
///
/// # Errors
///
/// Returns [`MetadataError::NotFound`] when the file is missing,
/// [`MetadataError::Io`] when it cannot be read and [`MetadataError::Parse`]
/// when it does not match the schema
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, MetadataError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            MetadataError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            MetadataError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&contents).map_err(|source| MetadataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate label-encoded recommendation metadata
///
/// # Errors
///
/// Returns a [`MetadataError`] if the file cannot be loaded or is inconsistent
pub fn load_recommendation_metadata(path: &Path) -> Result<RecommendationMetadata, MetadataError> {
    let metadata: RecommendationMetadata = load_json(path)?;
    metadata.validate()?;
    debug!(
        path = %path.display(),
        commute_classes = metadata.le_commute_classes.len(),
        diet_classes = metadata.le_diet_classes.len(),
        "loaded recommendation metadata"
    );
    Ok(metadata)
}

/// Load and validate one-hot tabular metadata
///
/// # Errors
///
/// Returns a [`MetadataError`] if the file cannot be loaded or is inconsistent
pub fn load_tabular_metadata(path: &Path) -> Result<TabularMetadata, MetadataError> {
    let metadata: TabularMetadata = load_json(path)?;
    metadata.validate()?;
    debug!(
        path = %path.display(),
        categorical = metadata.cat_cols.len(),
        numeric = metadata.num_cols.len(),
        width = metadata.feature_width(),
        "loaded tabular metadata"
    );
    Ok(metadata)
}

fn cached<T>(
    cell: &OnceLock<Arc<T>>,
    load: impl FnOnce() -> Result<T, MetadataError>,
) -> Result<Arc<T>, MetadataError> {
    if let Some(value) = cell.get() {
        return Ok(Arc::clone(value));
    }
    let loaded = Arc::new(load()?);
    Ok(Arc::clone(cell.get_or_init(|| loaded)))
}

/// Per-process cache of the metadata files in one models directory
#[derive(Debug)]
pub struct InferenceContext {
    models_dir: PathBuf,
    recommendation: OnceLock<Arc<RecommendationMetadata>>,
    carbon: OnceLock<Arc<TabularMetadata>>,
    future: OnceLock<Arc<TabularMetadata>>,
}

impl InferenceContext {
    /// Create an empty cache over `models_dir`
    #[must_use]
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
            recommendation: OnceLock::new(),
            carbon: OnceLock::new(),
            future: OnceLock::new(),
        }
    }

    /// Directory the artifacts are read from
    #[must_use]
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Path of an artifact inside the models directory
    #[must_use]
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.models_dir.join(file_name)
    }

    /// Recommendation metadata, loaded on first use
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be loaded or is inconsistent
    pub fn recommendation_metadata(&self) -> Result<Arc<RecommendationMetadata>, MetadataError> {
        cached(&self.recommendation, || {
            load_recommendation_metadata(&self.artifact_path(artifacts::RECOMMENDATION_META))
        })
    }

    /// Carbon surrogate metadata, loaded on first use
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be loaded or is inconsistent
    pub fn carbon_metadata(&self) -> Result<Arc<TabularMetadata>, MetadataError> {
        cached(&self.carbon, || {
            load_tabular_metadata(&self.artifact_path(artifacts::CARBON_META))
        })
    }

    /// Future surrogate metadata, loaded on first use
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be loaded or is inconsistent
    pub fn future_metadata(&self) -> Result<Arc<TabularMetadata>, MetadataError> {
        cached(&self.future, || {
            load_tabular_metadata(&self.artifact_path(artifacts::FUTURE_META))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECOMMENDATION_META: &str = r#"{
        "le_commute_classes": ["EV", "bike", "bus", "car", "train", "walk"],
        "le_diet_classes": ["mixed", "non-veg", "veg"],
        "scaler_mean": [2.5, 60.5, 1.1, 400.0],
        "scaler_scale": [1.2845, 34.35, 0.8307, 173.2]
    }"#;

    #[test]
    fn test_context_caches_after_first_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(artifacts::RECOMMENDATION_META);
        fs::write(&path, RECOMMENDATION_META).unwrap();

        let context = InferenceContext::new(dir.path());
        let first = context.recommendation_metadata().unwrap();
        fs::remove_file(&path).unwrap();
        let second = context.recommendation_metadata().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.feature_order.len(), 4);
    }

    #[test]
    fn test_missing_metadata_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let context = InferenceContext::new(dir.path());
        assert!(matches!(
            context.carbon_metadata(),
            Err(MetadataError::NotFound { .. })
        ));
    }

    #[test]
    fn test_corrupt_and_inconsistent_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{\"le_commute_classes\": [").unwrap();
        assert!(matches!(
            load_recommendation_metadata(&corrupt),
            Err(MetadataError::Parse { .. })
        ));

        let short = dir.path().join("short.json");
        fs::write(
            &short,
            r#"{"cat_cols": ["Diet"], "num_cols": ["Grocery"], "onehot_categories": [["vegan"]],
                "num_scaler_mean": [1.0, 2.0], "num_scaler_scale": [1.0]}"#,
        )
        .unwrap();
        assert!(matches!(
            load_tabular_metadata(&short),
            Err(MetadataError::Shape { .. })
        ));
    }
}
