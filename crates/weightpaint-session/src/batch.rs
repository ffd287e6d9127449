//! Whole-map flood and selection equalize entry points.
//!
//! Unlike a stroke, each batch call re-reads a fresh weight snapshot
//! and extrema from the store, so edits made between calls are picked
//! up. The host wraps each call in one undo chunk.

use serde::{Deserialize, Serialize};
use weightpaint_core::{
    contrast_map, equalize, gain_map, grow_map, retract_map, shrink_map, spread_map,
    ContrastCurve, Intensity, Statistic, WeightField,
};

use crate::context::PaintContext;
use crate::error::{SessionError, SessionResult};
use crate::host::{InfluenceId, LayerId, MeshAdapter, MeshHost, WeightStore};

/// Which operator a flood applies to every vertex of the active map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MapOp {
    /// Lower-only smoothing across the whole map.
    Retract,
    /// Raise-only smoothing across the whole map.
    Spread,
    /// Sharpen the whole map against its extrema.
    Contrast {
        /// Sharpening curve; defaults to the linear variant.
        #[serde(default)]
        curve: ContrastCurve,
    },
    /// Scale every painted weight up, preserving exact zeros.
    Gain,
    /// Push the weight-map border outward.
    Grow,
    /// Pull the weight-map border inward.
    Shrink,
}

/// Apply a flood operator to every vertex of the current paint target
/// and persist the result.
pub fn apply_map<S: WeightStore, M: MeshHost>(
    store: &mut S,
    mesh: &M,
    op: MapOp,
    value: f64,
) -> SessionResult<()> {
    let context = PaintContext::capture(store, mesh);
    let field = read_field(store, context.layer, context.influence, context.vertex_count)?;
    let value = Intensity::new(value);
    let adapter = MeshAdapter(mesh);
    let weights = match op {
        MapOp::Retract => retract_map(&adapter, &field, value)?,
        MapOp::Spread => spread_map(&adapter, &field, value)?,
        MapOp::Contrast { curve } => contrast_map(curve, value, &field),
        MapOp::Gain => gain_map(value, &field),
        MapOp::Grow => grow_map(&adapter, &field, value)?,
        MapOp::Shrink => shrink_map(&adapter, &field, value)?,
    };
    store.set_influence_weights(context.layer, context.influence, weights);
    Ok(())
}

/// Pull the selected vertices' weights toward a statistic of the
/// selection, either for the current paint target only or for every
/// influence active on the current layer.
///
/// An empty selection is a silent no-op: nothing is read or written.
pub fn apply_equalize<S: WeightStore, M: MeshHost>(
    store: &mut S,
    mesh: &M,
    statistic: Statistic,
    value: f64,
    affect_all_influences: bool,
) -> SessionResult<()> {
    let selection = mesh.selection();
    if selection.is_empty() {
        return Ok(());
    }
    let context = PaintContext::capture(store, mesh);
    let influences = if affect_all_influences {
        store.active_influences(context.layer)
    } else {
        vec![context.influence]
    };
    let value = Intensity::new(value);
    for influence in influences {
        let field = read_field(store, context.layer, influence, context.vertex_count)?;
        let weights = equalize(&field, &selection, statistic, value)?;
        store.set_influence_weights(context.layer, influence, weights);
    }
    Ok(())
}

/// Read one influence's weight vector and validate it against the mesh.
fn read_field<S: WeightStore>(
    store: &S,
    layer: LayerId,
    influence: InfluenceId,
    vertex_count: usize,
) -> SessionResult<WeightField> {
    let weights = store.influence_weights(layer, influence);
    if weights.len() != vertex_count {
        return Err(SessionError::weight_count_mismatch(
            vertex_count,
            weights.len(),
        ));
    }
    Ok(WeightField::new(weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_map_op_serde_keys() {
        let op: MapOp = serde_json::from_str(r#"{"mode": "grow"}"#).unwrap();
        assert_eq!(op, MapOp::Grow);

        let op: MapOp = serde_json::from_str(r#"{"mode": "contrast", "curve": "gaussian"}"#)
            .unwrap();
        assert_eq!(
            op,
            MapOp::Contrast {
                curve: ContrastCurve::Gaussian
            }
        );
    }
}
