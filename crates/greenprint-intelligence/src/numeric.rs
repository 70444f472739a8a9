// ABOUTME: Rounding helpers for values reported to users
// ABOUTME: Emissions, scores, and savings are all reported with two decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Greenprint Carbon Intelligence

use greenprint_core::constants::limits::REPORTED_DECIMALS;

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the reported precision (2 decimals)
#[must_use]
pub fn round_reported(value: f64) -> f64 {
    round_to(value, REPORTED_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_reported() {
        assert!((round_reported(1.234_9) - 1.23).abs() < 1e-12);
        assert!((round_reported(0.005_1) - 0.01).abs() < 1e-12);
        assert!((round_reported(-2.346) + 2.35).abs() < 1e-12);
    }
}
