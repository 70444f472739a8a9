// ABOUTME: Predictor abstraction mapping an encoded feature vector to a scalar emission estimate
// ABOUTME: Backends are an exported dense network or closed-form reference formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! # Predictors
//!
//! The surrogate models are opaque collaborators: given a numeric feature
//! vector they return one number. [`DenseNetwork`] evaluates weights exported
//! next to the metadata; the reference models evaluate the closed-form
//! targets the surrogates were trained to approximate.

/// Sequential dense network evaluator
pub mod dense;
/// Closed-form reference models
pub mod reference;

pub use dense::{Activation, DenseLayer, DenseNetwork};
pub use reference::{ReferenceCarbonModel, ReferenceFutureModel, ReferenceRecommendationModel};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use greenprint_core::errors::PredictorError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Maps a feature vector to a scalar prediction
pub trait Predictor: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Input width the predictor requires, if fixed
    fn expected_inputs(&self) -> Option<usize>;

    /// Evaluate one feature vector
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::InputLength`] for a vector of the wrong width
    /// and [`PredictorError::NonFinite`] when evaluation yields NaN or infinity
    fn predict(&self, features: &[f32]) -> Result<f32, PredictorError>;
}

/// Reject vectors whose width differs from the predictor's input
///
/// # Errors
///
/// Returns [`PredictorError::InputLength`] on mismatch
pub fn check_input_len(predictor: &dyn Predictor, features: &[f32]) -> Result<(), PredictorError> {
    match predictor.expected_inputs() {
        Some(expected) if expected != features.len() => Err(PredictorError::InputLength {
            expected,
            actual: features.len(),
        }),
        _ => Ok(()),
    }
}

/// Reject NaN and infinite outputs
///
/// # Errors
///
/// Returns [`PredictorError::NonFinite`] when `value` is not finite
pub fn check_finite(predictor: &dyn Predictor, value: f32) -> Result<f32, PredictorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PredictorError::NonFinite {
            model: predictor.name().to_owned(),
        })
    }
}

/// Which predictor implementation a pipeline uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictorBackend {
    /// Dense network when its weights exist, reference model otherwise
    #[default]
    Auto,
    /// Dense network only; missing weights are fatal
    Network,
    /// Reference model only
    Reference,
}

impl PredictorBackend {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Network => "network",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for PredictorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictorBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "network" | "dense" => Ok(Self::Network),
            "reference" | "formula" => Ok(Self::Reference),
            other => Err(format!(
                "unknown predictor backend '{other}' (expected auto, network or reference)"
            )),
        }
    }
}

/// Select a predictor for a pipeline
///
/// # Errors
///
/// Returns [`PredictorError`] if the network backend is selected (explicitly,
/// or by `Auto` because the weights exist) and the weights cannot be loaded
pub fn select_predictor(
    backend: PredictorBackend,
    weights_path: &Path,
    reference: Box<dyn Predictor>,
) -> Result<Box<dyn Predictor>, PredictorError> {
    let use_network = match backend {
        PredictorBackend::Network => true,
        PredictorBackend::Reference => false,
        PredictorBackend::Auto => {
            let exists = weights_path.exists();
            if !exists {
                warn!(
                    weights = %weights_path.display(),
                    fallback = reference.name(),
                    "network weights not found, falling back to reference model"
                );
            }
            exists
        }
    };
    let predictor: Box<dyn Predictor> = if use_network {
        Box::new(DenseNetwork::load(weights_path)?)
    } else {
        reference
    };
    info!(predictor = predictor.name(), %backend, "predictor selected");
    Ok(predictor)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant;

    impl Predictor for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn expected_inputs(&self) -> Option<usize> {
            Some(2)
        }

        fn predict(&self, features: &[f32]) -> Result<f32, PredictorError> {
            check_input_len(self, features)?;
            check_finite(self, 1.5)
        }
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!("AUTO".parse::<PredictorBackend>(), Ok(PredictorBackend::Auto));
        assert_eq!("network".parse::<PredictorBackend>(), Ok(PredictorBackend::Network));
        assert_eq!("formula".parse::<PredictorBackend>(), Ok(PredictorBackend::Reference));
        assert!("tflite".parse::<PredictorBackend>().is_err());
        assert_eq!(PredictorBackend::default().to_string(), "auto");
    }

    #[test]
    fn test_input_length_is_checked() {
        assert!(Constant.predict(&[0.0, 1.0]).is_ok());
        assert!(matches!(
            Constant.predict(&[0.0]),
            Err(PredictorError::InputLength {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_auto_falls_back_when_weights_are_missing() {
        let predictor = select_predictor(
            PredictorBackend::Auto,
            Path::new("/nonexistent/model.weights.json"),
            Box::new(Constant),
        )
        .unwrap();
        assert_eq!(predictor.name(), "constant");
    }

    #[test]
    fn test_network_backend_requires_weights() {
        let result = select_predictor(
            PredictorBackend::Network,
            Path::new("/nonexistent/model.weights.json"),
            Box::new(Constant),
        );
        assert!(matches!(result, Err(PredictorError::WeightsNotFound { .. })));
    }
}
