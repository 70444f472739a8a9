// ABOUTME: Predictor error types for exported network weights and inference calls
// ABOUTME: Distinguishes artifact problems (missing, corrupt, mis-shaped) from evaluation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use std::io;
use std::path::PathBuf;

/// Errors raised by a predictor
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// Weights file does not exist
    #[error("Model weights not found: {}", .path.display())]
    WeightsNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Weights file could not be read
    #[error("Failed to read model weights {}", .path.display())]
    WeightsIo {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Weights file is not valid JSON for the layer schema
    #[error("Failed to parse model weights {}: {source}", .path.display())]
    WeightsParse {
        /// Path that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Layers do not chain (dimension mismatch, empty network, bad activation)
    #[error("Invalid network architecture at layer {layer}: {reason}")]
    Architecture {
        /// Zero-based layer index
        layer: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Feature vector length does not match the model input
    #[error("Feature vector has {actual} values, model expects {expected}")]
    InputLength {
        /// Model input width
        expected: usize,
        /// Received width
        actual: usize,
    },

    /// Evaluation produced NaN or infinity
    #[error("Predictor '{model}' produced a non-finite value")]
    NonFinite {
        /// Predictor name
        model: String,
    },
}
