//! Selection-wide equalize operators.
//!
//! Pull every weight in an ordered vertex selection toward a statistic
//! of that selection's own weights. The selection order matters for the
//! `first` and `last` statistics; the host supplies it deduplicated and
//! in pick order.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::field::{Intensity, VertexId, WeightField};
use crate::math::lerp;

/// Which statistic of the selection the weights are pulled toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    /// Largest weight in the selection.
    Max,
    /// Smallest weight in the selection.
    Min,
    /// Arithmetic mean of the selection's weights.
    Avg,
    /// Weight of the first-picked vertex.
    First,
    /// Weight of the last-picked vertex.
    Last,
}

impl Statistic {
    /// Evaluate this statistic over the selection's weights.
    ///
    /// Returns `None` for an empty selection.
    fn evaluate(self, selected_weights: &[f64]) -> Option<f64> {
        let first = *selected_weights.first()?;
        Some(match self {
            Statistic::Max => selected_weights.iter().copied().fold(first, f64::max),
            Statistic::Min => selected_weights.iter().copied().fold(first, f64::min),
            Statistic::Avg => {
                selected_weights.iter().sum::<f64>() / selected_weights.len() as f64
            }
            Statistic::First => first,
            Statistic::Last => *selected_weights.last()?,
        })
    }
}

/// Move every selected vertex's weight toward the selection statistic
/// by fraction `value`, leaving non-selected vertices untouched.
///
/// A single interpolation toward the target pulls from either side, so
/// no per-statistic special casing is needed. A vertex whose weight
/// already equals the statistic is left unchanged, and an empty
/// selection returns the field unmodified.
pub fn equalize(
    field: &WeightField,
    selection: &[VertexId],
    statistic: Statistic,
    value: Intensity,
) -> CoreResult<Vec<f64>> {
    let mut result = field.as_slice().to_vec();
    let mut selected_weights = Vec::with_capacity(selection.len());
    for &vertex in selection {
        selected_weights.push(field.get(vertex)?);
    }
    let Some(target) = statistic.evaluate(&selected_weights) else {
        return Ok(result);
    };
    for (&vertex, &weight) in selection.iter().zip(&selected_weights) {
        if weight == target {
            continue;
        }
        result[vertex] = lerp(weight, target, value.value());
    }
    Ok(result)
}
