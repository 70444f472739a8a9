// ABOUTME: Core types and constants for the Greenprint carbon inference workspace
// ABOUTME: Foundation crate with error handling, domain models, metadata schemas, and factor tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

#![deny(unsafe_code)]

//! # Greenprint Core
//!
//! Foundation crate providing shared types and constants for the Greenprint
//! carbon surrogate inference tools. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Emission factor tables, classifier thresholds, and artifact names
//! - **models**: Commute/diet enums, user input, profiles, recommendations, and metadata schemas

/// Unified error handling system with standard error codes
pub mod errors;

/// Emission factors, thresholds, and other constants organized by domain
pub mod constants;

/// Core data models (`UserInput`, `CommuteMode`, `Recommendation`, metadata, etc.)
pub mod models;
