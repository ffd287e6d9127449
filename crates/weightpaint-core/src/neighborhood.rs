//! Weight transforms that consult the mesh neighborhood of a vertex.
//!
//! Retract and spread are one-sided smoothing brushes (lower-only and
//! raise-only), grow and shrink dilate or erode the border of the
//! weight map, and volume equalize matches weights across a spherical
//! volume around the stroked vertex.
//!
//! Every operator here returns `Ok(None)` when the vertex should not be
//! written: zero intensity, an isolated vertex with no edge-connected
//! neighbors, or a neighborhood already saturated within the smoothing
//! threshold. Skipped vertices are never marked as touched by the
//! caller.

use crate::error::CoreResult;
use crate::field::{Extrema, Intensity, VertexId, WeightField};

/// Edge-adjacency oracle, implemented atop the host mesh.
///
/// Returns the vertex ids directly edge-connected to `vertex`, not
/// including `vertex` itself. Queried on demand and never cached here,
/// since topology is owned by the host.
pub trait Adjacency {
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId>;
}

/// 3D vertex position oracle, used only by [`volume_equalize`].
pub trait VertexPositions {
    fn position(&self, vertex: VertexId) -> [f64; 3];
}

/// Aggregate weight statistics over a vertex's direct neighbors.
#[derive(Debug, Clone, Copy)]
struct LocalStats {
    avg: f64,
    min: f64,
    max: f64,
}

/// Compute neighborhood statistics, or `None` for an isolated vertex.
fn local_stats<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    vertex: VertexId,
) -> CoreResult<Option<LocalStats>> {
    let neighbors = adjacency.neighbors(vertex);
    if neighbors.is_empty() {
        return Ok(None);
    }
    let mut sum = 0.0;
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &neighbor in &neighbors {
        let weight = field.get(neighbor)?;
        sum += weight;
        min = min.min(weight);
        max = max.max(weight);
    }
    Ok(Some(LocalStats {
        avg: sum / neighbors.len() as f64,
        min,
        max,
    }))
}

/// Retract: smoothing that only ever lowers a weight.
///
/// The weight shrinks by its distance to the neighborhood average,
/// scaled by intensity, and never undershoots the neighborhood minimum.
/// A plateau already saturated at the field maximum is left alone when
/// the distance is below the smoothing threshold.
pub fn retract<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    extrema: Extrema,
    vertex: VertexId,
    value: Intensity,
) -> CoreResult<Option<f64>> {
    if value.is_zero() {
        return Ok(None);
    }
    let weight = field.get(vertex)?;
    if weight <= extrema.min {
        return Ok(None);
    }
    let Some(stats) = local_stats(adjacency, field, vertex)? else {
        return Ok(None);
    };
    let weight_diff = (stats.avg - weight).abs();
    if stats.avg >= extrema.max && weight_diff < value.smoothing_threshold() {
        return Ok(None);
    }
    let retracted = weight * (1.0 - weight_diff * value.value());
    Ok(Some(retracted.max(stats.min)))
}

/// Spread: smoothing that only ever raises a weight; mirror of
/// [`retract`], capped at the neighborhood maximum.
pub fn spread<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    extrema: Extrema,
    vertex: VertexId,
    value: Intensity,
) -> CoreResult<Option<f64>> {
    if value.is_zero() {
        return Ok(None);
    }
    let weight = field.get(vertex)?;
    if weight >= extrema.max {
        return Ok(None);
    }
    let Some(stats) = local_stats(adjacency, field, vertex)? else {
        return Ok(None);
    };
    let weight_diff = (stats.avg - weight).abs();
    if stats.avg <= extrema.min && weight_diff < value.smoothing_threshold() {
        return Ok(None);
    }
    let spread_weight = weight + weight_diff * value.value();
    Ok(Some(spread_weight.min(stats.max)))
}

/// Grow: push the border of the weight map outward by pulling a vertex
/// toward its strongest neighbor, capped at the field maximum.
pub fn grow<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    extrema: Extrema,
    vertex: VertexId,
    value: Intensity,
) -> CoreResult<Option<f64>> {
    if value.is_zero() {
        return Ok(None);
    }
    let weight = field.get(vertex)?;
    if weight >= extrema.max {
        return Ok(None);
    }
    let Some(stats) = local_stats(adjacency, field, vertex)? else {
        return Ok(None);
    };
    if stats.max <= extrema.min {
        return Ok(None);
    }
    let grown = weight + (weight - stats.max).abs() * value.value();
    Ok(Some(grown.min(extrema.max)))
}

/// Shrink: pull the border of the weight map inward toward the weakest
/// neighbor, floored at the field minimum; mirror of [`grow`].
pub fn shrink<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    extrema: Extrema,
    vertex: VertexId,
    value: Intensity,
) -> CoreResult<Option<f64>> {
    if value.is_zero() {
        return Ok(None);
    }
    let weight = field.get(vertex)?;
    if weight <= extrema.min {
        return Ok(None);
    }
    let Some(stats) = local_stats(adjacency, field, vertex)? else {
        return Ok(None);
    };
    if stats.min >= extrema.max {
        return Ok(None);
    }
    let shrunk = weight - (weight - stats.min).abs() * value.value();
    Ok(Some(shrunk.max(extrema.min)))
}

/// Volume equalize: pull every vertex within `radius * value` of the
/// stroked vertex's position toward the stroked vertex's weight, with a
/// linear falloff over the radius.
///
/// Returns the list of `(vertex, new_weight)` updates; the stroked
/// vertex itself and vertices already at the same weight are skipped.
/// This is an O(vertex_count) scan per stroke sample, which is
/// acceptable because the host bounds the stroke sampling rate.
pub fn volume_equalize<P: VertexPositions>(
    positions: &P,
    field: &WeightField,
    vertex: VertexId,
    value: Intensity,
    radius: f64,
) -> CoreResult<Vec<(VertexId, f64)>> {
    let mut updates = Vec::new();
    if value.is_zero() || radius <= 0.0 {
        return Ok(updates);
    }
    let weight = field.get(vertex)?;
    let origin = positions.position(vertex);
    for target in 0..field.vertex_count() {
        if target == vertex {
            continue;
        }
        let target_weight = field.as_slice()[target];
        if target_weight == weight {
            continue;
        }
        let p = positions.position(target);
        let distance = ((p[0] - origin[0]).powi(2)
            + (p[1] - origin[1]).powi(2)
            + (p[2] - origin[2]).powi(2))
        .sqrt();
        if distance > radius * value.value() {
            continue;
        }
        let falloff = (radius - distance) / radius;
        let equalized = target_weight - (target_weight - weight) * value.value() * falloff;
        updates.push((target, equalized));
    }
    Ok(updates)
}

/// Apply [`retract`] to every vertex, with extrema recomputed from the
/// field snapshot.
pub fn retract_map<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    value: Intensity,
) -> CoreResult<Vec<f64>> {
    let extrema = field.extrema();
    map_each(field, |vertex, weight| {
        Ok(retract(adjacency, field, extrema, vertex, value)?.unwrap_or(weight))
    })
}

/// Apply [`spread`] to every vertex.
pub fn spread_map<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    value: Intensity,
) -> CoreResult<Vec<f64>> {
    let extrema = field.extrema();
    map_each(field, |vertex, weight| {
        Ok(spread(adjacency, field, extrema, vertex, value)?.unwrap_or(weight))
    })
}

/// Apply [`grow`] to every vertex, dilating the weight-map border.
pub fn grow_map<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    value: Intensity,
) -> CoreResult<Vec<f64>> {
    let extrema = field.extrema();
    map_each(field, |vertex, weight| {
        Ok(grow(adjacency, field, extrema, vertex, value)?.unwrap_or(weight))
    })
}

/// Apply [`shrink`] to every vertex, eroding the weight-map border.
pub fn shrink_map<A: Adjacency>(
    adjacency: &A,
    field: &WeightField,
    value: Intensity,
) -> CoreResult<Vec<f64>> {
    let extrema = field.extrema();
    map_each(field, |vertex, weight| {
        Ok(shrink(adjacency, field, extrema, vertex, value)?.unwrap_or(weight))
    })
}

fn map_each<F>(field: &WeightField, mut op: F) -> CoreResult<Vec<f64>>
where
    F: FnMut(VertexId, f64) -> CoreResult<f64>,
{
    let mut result = Vec::with_capacity(field.vertex_count());
    for (vertex, &weight) in field.as_slice().iter().enumerate() {
        result.push(op(vertex, weight)?);
    }
    Ok(result)
}
