// ABOUTME: Unified error handling with error codes, context, and structured error payloads
// ABOUTME: Defines AppError plus the metadata and predictor error families that convert into it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace eventually surfaces as an
//! [`AppError`]. Entry points catch it once at the outermost boundary and turn
//! it into a single JSON error document plus a non-zero exit status.

/// Metadata loading and validation errors
pub mod metadata;
/// Predictor loading and evaluation errors
pub mod predictor;

pub use metadata::MetadataError;
pub use predictor::PredictorError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input document could not be parsed
    InvalidInput = 3000,
    /// Input document had the wrong shape
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// A model artifact was not found
    ResourceNotFound = 4000,

    // External collaborators (5000-5999)
    /// The predictor failed to produce a value
    PredictionFailed = 5000,

    // Configuration (6000-6999)
    /// Generic configuration error
    ConfigError = 6000,
    /// Required configuration is missing
    ConfigMissing = 6001,
    /// Configuration is present but invalid
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Reading or writing a stream failed
    StorageError = 9002,
    /// Output serialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested model artifact was not found",
            Self::PredictionFailed => "The predictor failed to produce an estimate",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Stream operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit status reported for this error
    ///
    /// Every failure exits with status 1; the code only refines the message.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        1
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Invocation ID for log correlation
    pub request_id: Option<String>,
    /// Artifact or field the error refers to
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input document
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Model artifact not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
            .with_resource_id(resource)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Predictor failure
    #[must_use]
    pub fn prediction(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PredictionFailed, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<MetadataError> for AppError {
    fn from(error: MetadataError) -> Self {
        let code = match &error {
            MetadataError::NotFound { .. } => ErrorCode::ResourceNotFound,
            MetadataError::Io { .. } => ErrorCode::StorageError,
            MetadataError::Parse { .. }
            | MetadataError::Shape { .. }
            | MetadataError::InvalidScale { .. }
            | MetadataError::UnknownFeature { .. }
            | MetadataError::DuplicateName { .. } => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<PredictorError> for AppError {
    fn from(error: PredictorError) -> Self {
        let code = match &error {
            PredictorError::WeightsNotFound { .. } => ErrorCode::ResourceNotFound,
            PredictorError::WeightsIo { .. }
            | PredictorError::WeightsParse { .. }
            | PredictorError::Architecture { .. } => ErrorCode::ConfigInvalid,
            PredictorError::InputLength { .. } | PredictorError::NonFinite { .. } => {
                ErrorCode::PredictionFailed
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}
