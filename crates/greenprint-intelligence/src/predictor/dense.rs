// ABOUTME: Sequential dense network evaluator for surrogate weights exported as JSON
// ABOUTME: Validates layer chaining at load time and evaluates relu/linear/sigmoid/tanh layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use std::fs;
use std::io;
use std::path::Path;

use greenprint_core::errors::PredictorError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{check_finite, check_input_len, Predictor};

/// Element-wise layer activation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// `max(0, x)`
    Relu,
    /// Identity
    #[default]
    Linear,
    /// Logistic function
    Sigmoid,
    /// Hyperbolic tangent
    Tanh,
}

impl Activation {
    fn apply(self, x: f32) -> f32 {
        match self {
            Self::Relu => x.max(0.0),
            Self::Linear => x,
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
        }
    }
}

/// Fully connected layer; `weights[out][in]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    /// One row per output unit
    pub weights: Vec<Vec<f32>>,
    /// One bias per output unit
    pub bias: Vec<f32>,
    /// Activation applied after the affine map
    #[serde(default)]
    pub activation: Activation,
}

impl DenseLayer {
    fn inputs(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    fn outputs(&self) -> usize {
        self.weights.len()
    }

    fn forward(&self, input: &[f32]) -> Vec<f32> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| {
                let sum = row
                    .iter()
                    .zip(input)
                    .fold(*bias, |acc, (weight, x)| weight.mul_add(*x, acc));
                self.activation.apply(sum)
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct WeightsFile {
    #[serde(default)]
    name: Option<String>,
    layers: Vec<DenseLayer>,
}

/// Sequential stack of dense layers producing a single output
#[derive(Debug, Clone)]
pub struct DenseNetwork {
    name: String,
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    /// Build a network from layers, checking that they chain into one output
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::Architecture`] for an empty network, ragged
    /// weight rows, bias/row count mismatch, layers that do not chain, a final
    /// layer with more than one unit, or non-finite parameters
    pub fn from_layers(name: impl Into<String>, layers: Vec<DenseLayer>) -> Result<Self, PredictorError> {
        if layers.is_empty() {
            return Err(architecture(0, "network has no layers"));
        }

        let mut previous_outputs = None;
        for (index, layer) in layers.iter().enumerate() {
            let inputs = layer.inputs();
            if layer.outputs() == 0 || inputs == 0 {
                return Err(architecture(index, "layer has no units"));
            }
            if layer.bias.len() != layer.outputs() {
                return Err(architecture(
                    index,
                    format!("{} bias values for {} units", layer.bias.len(), layer.outputs()),
                ));
            }
            if layer.weights.iter().any(|row| row.len() != inputs) {
                return Err(architecture(index, "weight rows have different lengths"));
            }
            if let Some(expected) = previous_outputs {
                if inputs != expected {
                    return Err(architecture(
                        index,
                        format!("expects {inputs} inputs but previous layer has {expected} units"),
                    ));
                }
            }
            let finite = layer.weights.iter().flatten().chain(&layer.bias).all(|v| v.is_finite());
            if !finite {
                return Err(architecture(index, "non-finite parameter"));
            }
            previous_outputs = Some(layer.outputs());
        }

        if previous_outputs != Some(1) {
            return Err(architecture(layers.len() - 1, "final layer must have one unit"));
        }

        Ok(Self {
            name: name.into(),
            layers,
        })
    }

    /// Load `{"name": ..., "layers": [...]}` weights from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`PredictorError::WeightsNotFound`] if the file is missing,
    /// [`PredictorError::WeightsIo`] or [`PredictorError::WeightsParse`] if it
    /// cannot be read, and [`PredictorError::Architecture`] if it is mis-shaped
    pub fn load(path: &Path) -> Result<Self, PredictorError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                PredictorError::WeightsNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                PredictorError::WeightsIo {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let file: WeightsFile =
            serde_json::from_str(&contents).map_err(|source| PredictorError::WeightsParse {
                path: path.to_path_buf(),
                source,
            })?;
        let name = file.name.unwrap_or_else(|| {
            path.file_stem()
                .map_or_else(|| "dense".to_owned(), |stem| stem.to_string_lossy().into_owned())
        });
        let network = Self::from_layers(name, file.layers)?;
        debug!(
            model = %network.name,
            layers = network.layers.len(),
            inputs = network.input_width(),
            "loaded dense network weights"
        );
        Ok(network)
    }

    /// Number of inputs of the first layer
    #[must_use]
    pub fn input_width(&self) -> usize {
        self.layers.first().map_or(0, DenseLayer::inputs)
    }
}

fn architecture(layer: usize, reason: impl Into<String>) -> PredictorError {
    PredictorError::Architecture {
        layer,
        reason: reason.into(),
    }
}

impl Predictor for DenseNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    fn expected_inputs(&self) -> Option<usize> {
        Some(self.input_width())
    }

    fn predict(&self, features: &[f32]) -> Result<f32, PredictorError> {
        check_input_len(self, features)?;
        let mut activations = features.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }
        let output = activations.first().copied().unwrap_or(f32::NAN);
        check_finite(self, output)
    }
}
