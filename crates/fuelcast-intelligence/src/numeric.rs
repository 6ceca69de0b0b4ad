// ABOUTME: Numeric helpers for the fueling pipeline: rounding and band interpolation
// ABOUTME: All helpers are total over finite inputs and never panic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::IntensityBand;

/// Round to `decimals` decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Position of `value` between `low` and `high`, clamped to `[0, 1]`
///
/// A degenerate range (`high <= low`) yields 0.
#[must_use]
pub fn fraction_between(value: f64, low: f64, high: f64) -> f64 {
    if high <= low {
        return 0.0;
    }
    ((value - low) / (high - low)).clamp(0.0, 1.0)
}

/// Linear interpolation from `(low, high)` at fraction `t`
#[must_use]
pub fn lerp(range: (f64, f64), t: f64) -> f64 {
    (range.1 - range.0).mul_add(t, range.0)
}

/// Interpolate `ratio` through ascending bands
///
/// Ratios below the first band land on its low effort; ratios beyond the
/// last band land on its high effort. Returns `None` for an empty band list.
#[must_use]
pub fn interpolate_bands(bands: &[IntensityBand], ratio: f64) -> Option<f64> {
    let band = bands
        .iter()
        .find(|band| ratio <= band.ratio_high)
        .or_else(|| bands.last())?;
    let t = fraction_between(ratio, band.ratio_low, band.ratio_high);
    Some(lerp((band.effort_low, band.effort_high), t))
}
