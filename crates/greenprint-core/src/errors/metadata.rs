// ABOUTME: Metadata error types for persisted encoder category lists and scaling statistics
// ABOUTME: Covers missing files, unreadable files, JSON parse failures, and inconsistent shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use std::io;
use std::path::PathBuf;

/// Errors raised while loading or validating preprocessing metadata
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Metadata file does not exist
    #[error("Metadata file not found: {}", .path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Metadata file exists but could not be read
    #[error("Failed to read metadata file {}", .path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Metadata file is not valid JSON for the expected schema
    #[error("Failed to parse metadata file {}: {source}", .path.display())]
    Parse {
        /// Path that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Lists inside the metadata disagree in length
    #[error("Inconsistent metadata shape for '{field}': expected {expected}, found {actual}")]
    Shape {
        /// Field whose length is wrong
        field: &'static str,
        /// Length implied by the rest of the metadata
        expected: usize,
        /// Length actually found
        actual: usize,
    },

    /// A scaling factor is zero or non-finite
    #[error("Invalid scale for feature {index} in '{field}': {value}")]
    InvalidScale {
        /// Scale list the value came from
        field: &'static str,
        /// Feature position
        index: usize,
        /// Offending value
        value: f64,
    },

    /// `feature_order` names a feature the encoder cannot produce
    #[error("Unknown feature '{name}' in feature_order")]
    UnknownFeature {
        /// Offending feature name
        name: String,
    },

    /// A feature or column name appears more than once
    #[error("Duplicate name '{name}' in '{field}'")]
    DuplicateName {
        /// List holding the duplicate
        field: &'static str,
        /// Repeated name
        name: String,
    },
}
