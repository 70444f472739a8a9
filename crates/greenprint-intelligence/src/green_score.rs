// ABOUTME: Green score derivation mapping an emission estimate onto a 0-100 scale
// ABOUTME: Higher is greener; the divisor is calibrated to the surrogate's training distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use greenprint_core::constants::green_score::{
    GREEN_SCORE_DIVISOR, MAX_GREEN_SCORE, MIN_GREEN_SCORE,
};

use crate::numeric::round_reported;

/// `clamp(100 - prediction / 0.7, 0, 100)`, rounded to 2 decimals
///
/// Non-finite predictions score 0.
#[must_use]
pub fn green_score(prediction: f64) -> f64 {
    if !prediction.is_finite() {
        return MIN_GREEN_SCORE;
    }
    let raw = MAX_GREEN_SCORE - prediction / GREEN_SCORE_DIVISOR;
    round_reported(raw.clamp(MIN_GREEN_SCORE, MAX_GREEN_SCORE))
}
