//! Single-vertex weight transforms: contrast and gain.
//!
//! Contrast historically shipped with two different curves doing the
//! same job. Both are kept as named strategies on [`ContrastCurve`] and
//! selected by configuration instead of by duplicated code paths.

use serde::{Deserialize, Serialize};

use crate::field::{Extrema, Intensity, WeightField};
use crate::math::normal_cdf;

/// Which sharpening curve the contrast operator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastCurve {
    /// Piecewise-linear push away from the midpoint of `[min, max]`.
    /// The extrema are exact fixed points, and full intensity snaps
    /// every interior weight onto the nearest extremum.
    #[default]
    Linear,
    /// Saturating push derived from the CDF of a normal distribution
    /// with standard deviation `0.1 * (max - min)`, centered at the
    /// midpoint. Softer near the extrema than the linear curve.
    Gaussian,
}

/// Sharpen one weight against the field's extrema using the selected
/// curve.
///
/// The result always stays within `[extrema.min, extrema.max]`. Weights
/// sitting exactly on an extremum are left to the call sites to skip
/// (see [`Extrema::contains_open`]); applied here they do not move
/// under the linear curve.
pub fn contrast(curve: ContrastCurve, value: Intensity, weight: f64, extrema: Extrema) -> f64 {
    match curve {
        ContrastCurve::Linear => contrast_linear(value, weight, extrema),
        ContrastCurve::Gaussian => contrast_gaussian(value, weight, extrema),
    }
}

/// Extremum-preserving linear contrast.
///
/// Weights above the midpoint move toward the maximum, weights below it
/// toward the minimum, each by `value` of the remaining distance. The
/// midpoint itself does not move.
pub fn contrast_linear(value: Intensity, weight: f64, extrema: Extrema) -> f64 {
    let difference = weight - extrema.midpoint();
    let value = value.value();
    if difference > 0.0 {
        (weight + (extrema.max - weight) * value).min(extrema.max)
    } else if difference < 0.0 {
        (weight - (weight - extrema.min) * value).max(extrema.min)
    } else {
        weight
    }
}

/// Distribution-based contrast.
///
/// The modifier is the normal CDF of the weight's offset from the
/// midpoint, minus the weight itself; the weight moves by `value` of
/// that modifier, clamped into `[min, max]`.
pub fn contrast_gaussian(value: Intensity, weight: f64, extrema: Extrema) -> f64 {
    let difference = weight - extrema.midpoint();
    let modifier = normal_cdf(difference, 0.0, 0.1 * extrema.range()) - weight;
    (weight + value.value() * modifier).clamp(extrema.min, extrema.max)
}

/// Gain: scale a weight up by `value` of itself, capped at `1.0`.
///
/// Exact zero is a fixed point, so unpainted vertices stay unpainted;
/// call sites additionally skip the write-back for zero weights so the
/// paint layer never marks them as touched.
pub fn gain(value: Intensity, weight: f64) -> f64 {
    (weight + weight * value.value()).min(1.0)
}

/// Apply contrast to every vertex of a field, skipping weights that sit
/// on either extremum.
pub fn contrast_map(curve: ContrastCurve, value: Intensity, field: &WeightField) -> Vec<f64> {
    let extrema = field.extrema();
    field
        .as_slice()
        .iter()
        .map(|&weight| {
            if extrema.contains_open(weight) {
                contrast(curve, value, weight, extrema)
            } else {
                weight
            }
        })
        .collect()
}

/// Apply gain to every vertex of a field, skipping unpainted vertices.
pub fn gain_map(value: Intensity, field: &WeightField) -> Vec<f64> {
    field
        .as_slice()
        .iter()
        .map(|&weight| {
            if weight == 0.0 {
                weight
            } else {
                gain(value, weight)
            }
        })
        .collect()
}
