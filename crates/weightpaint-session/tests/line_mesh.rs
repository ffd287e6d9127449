//! End-to-end scenarios over a small line mesh: vertices 0-1-2-3-4,
//! each adjacent to its immediate neighbors only, with the weight
//! vector `[0.0, 0.2, 0.5, 0.8, 1.0]` used throughout.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p weightpaint-session --test line_mesh
//! ```

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use weightpaint_core::{ContrastCurve, Statistic, VertexId};
use weightpaint_session::{
    apply_equalize, apply_map, BrushOp, InfluenceId, LayerId, MapOp, MeshHost, SessionError,
    StrokeSession, WeightStore,
};

/// Line mesh with vertices spaced along the x axis.
struct LineMesh {
    vertex_count: usize,
    spacing: f64,
    selection: Vec<VertexId>,
}

impl LineMesh {
    fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            spacing: 1.0,
            selection: Vec::new(),
        }
    }
}

impl MeshHost for LineMesh {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn adjacent_vertices(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut neighbors = Vec::new();
        if vertex > 0 {
            neighbors.push(vertex - 1);
        }
        if vertex + 1 < self.vertex_count {
            neighbors.push(vertex + 1);
        }
        neighbors
    }

    fn vertex_position(&self, vertex: VertexId) -> [f64; 3] {
        [vertex as f64 * self.spacing, 0.0, 0.0]
    }

    fn selection(&self) -> Vec<VertexId> {
        self.selection.clone()
    }
}

/// In-memory weight storage for one layer with a few influences.
struct MemoryStore {
    layer: LayerId,
    paint_target: InfluenceId,
    weights: BTreeMap<(LayerId, InfluenceId), Vec<f64>>,
    write_count: usize,
}

impl MemoryStore {
    fn single_influence(weights: Vec<f64>) -> Self {
        let mut map = BTreeMap::new();
        map.insert((0, 0), weights);
        Self {
            layer: 0,
            paint_target: 0,
            weights: map,
            write_count: 0,
        }
    }
}

impl WeightStore for MemoryStore {
    fn current_layer(&self) -> LayerId {
        self.layer
    }

    fn current_paint_target(&self) -> InfluenceId {
        self.paint_target
    }

    fn active_influences(&self, layer: LayerId) -> Vec<InfluenceId> {
        self.weights
            .keys()
            .filter(|(l, _)| *l == layer)
            .map(|&(_, influence)| influence)
            .collect()
    }

    fn influence_weights(&self, layer: LayerId, influence: InfluenceId) -> Vec<f64> {
        self.weights[&(layer, influence)].clone()
    }

    fn set_influence_weights(
        &mut self,
        layer: LayerId,
        influence: InfluenceId,
        weights: Vec<f64>,
    ) {
        self.weights.insert((layer, influence), weights);
        self.write_count += 1;
    }
}

fn line_weights() -> Vec<f64> {
    vec![0.0, 0.2, 0.5, 0.8, 1.0]
}

#[test]
fn retract_stroke_lowers_unbalanced_vertex() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    let mut stroke = StrokeSession::begin(&store, &mesh, BrushOp::Retract).unwrap();
    // vertex 1: neighborhood average 0.25, diff 0.05, 0.2 * 0.95 = 0.19
    assert_eq!(stroke.sample(&mesh, 1, 1.0).unwrap(), 1);
    // vertex 0 sits on the field minimum and is skipped
    assert_eq!(stroke.sample(&mesh, 0, 1.0).unwrap(), 0);
    // vertex 2 is already balanced against its neighborhood
    assert_eq!(stroke.sample(&mesh, 2, 1.0).unwrap(), 1);
    stroke.end(&mut store).unwrap();

    let weights = store.influence_weights(0, 0);
    assert!((weights[1] - 0.19).abs() < 1e-12);
    assert_eq!(weights[2], 0.5);
    assert_eq!(weights[0], 0.0);
    assert_eq!(store.write_count, 1);
}

#[test]
fn stroke_with_no_recorded_samples_writes_nothing() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    let mut stroke = StrokeSession::begin(&store, &mesh, BrushOp::Gain).unwrap();
    // zero weight: gain must not mark the vertex as touched
    assert_eq!(stroke.sample(&mesh, 0, 1.0).unwrap(), 0);
    stroke.end(&mut store).unwrap();

    assert_eq!(store.write_count, 0);
    assert_eq!(store.influence_weights(0, 0), line_weights());
}

#[test]
fn failed_sample_does_not_abort_the_stroke() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    let mut stroke = StrokeSession::begin(&store, &mesh, BrushOp::Retract).unwrap();
    assert!(stroke.sample(&mesh, 99, 1.0).is_err());
    // the stroke keeps accepting samples after the bad vertex id
    assert_eq!(stroke.sample(&mesh, 1, 1.0).unwrap(), 1);
    stroke.end(&mut store).unwrap();

    assert!((store.influence_weights(0, 0)[1] - 0.19).abs() < 1e-12);
}

#[test]
fn volume_equalize_stroke_matches_within_radius() {
    let mut mesh = LineMesh::new(2);
    mesh.spacing = 0.5;
    let mut store = MemoryStore::single_influence(vec![0.0, 1.0]);

    let mut stroke =
        StrokeSession::begin(&store, &mesh, BrushOp::VolumeEqualize { radius: 1.0 }).unwrap();
    // vertex 1 is at distance 0.5: falloff 0.5, pulled halfway to 0.0
    assert_eq!(stroke.sample(&mesh, 0, 1.0).unwrap(), 1);
    stroke.end(&mut store).unwrap();

    assert_eq!(store.influence_weights(0, 0), vec![0.0, 0.5]);
}

#[test]
fn contrast_flood_sharpens_interior_weights() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    apply_map(
        &mut store,
        &mesh,
        MapOp::Contrast {
            curve: ContrastCurve::Linear,
        },
        1.0,
    )
    .unwrap();

    assert_eq!(store.influence_weights(0, 0), vec![0.0, 0.0, 0.5, 1.0, 1.0]);
}

#[test]
fn grow_flood_is_monotonic() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    apply_map(&mut store, &mesh, MapOp::Grow, 1.0).unwrap();

    let before = line_weights();
    let after = store.influence_weights(0, 0);
    for (b, a) in before.iter().zip(&after) {
        assert!(a >= b);
        assert!(*a <= 1.0);
    }
    assert!(after[0] > 0.0);
}

#[test]
fn gain_flood_preserves_unpainted_vertices() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    apply_map(&mut store, &mesh, MapOp::Gain, 1.0).unwrap();

    let after = store.influence_weights(0, 0);
    assert_eq!(after[0], 0.0);
    assert!((after[1] - 0.4).abs() < 1e-12);
    assert_eq!(after[4], 1.0);
}

#[test]
fn equalize_to_first_selected_weight() {
    let mut mesh = LineMesh::new(5);
    mesh.selection = vec![1, 3];
    let mut store = MemoryStore::single_influence(line_weights());

    apply_equalize(&mut store, &mesh, Statistic::First, 1.0, false).unwrap();

    let weights = store.influence_weights(0, 0);
    // vertex 1 already holds the target weight; vertex 3 moves onto it
    assert_eq!(weights[1], 0.2);
    assert!((weights[3] - 0.2).abs() < 1e-12);
    assert_eq!(weights[0], 0.0);
    assert_eq!(weights[2], 0.5);
    assert_eq!(weights[4], 1.0);
}

#[test]
fn equalize_empty_selection_is_silent_noop() {
    let mesh = LineMesh::new(5);
    let mut store = MemoryStore::single_influence(line_weights());

    apply_equalize(&mut store, &mesh, Statistic::Avg, 1.0, true).unwrap();

    assert_eq!(store.write_count, 0);
    assert_eq!(store.influence_weights(0, 0), line_weights());
}

#[test]
fn equalize_affects_every_active_influence_when_asked() {
    let mut mesh = LineMesh::new(5);
    mesh.selection = vec![1, 2, 3];
    let mut store = MemoryStore::single_influence(line_weights());
    store
        .weights
        .insert((0, 1), vec![1.0, 0.9, 0.6, 0.3, 0.0]);

    apply_equalize(&mut store, &mesh, Statistic::Avg, 1.0, true).unwrap();

    let first = store.influence_weights(0, 0);
    let mean_first = (0.2 + 0.5 + 0.8) / 3.0;
    for &vertex in &[1usize, 2, 3] {
        assert!((first[vertex] - mean_first).abs() < 1e-12);
    }

    let second = store.influence_weights(0, 1);
    let mean_second = (0.9 + 0.6 + 0.3) / 3.0;
    for &vertex in &[1usize, 2, 3] {
        assert!((second[vertex] - mean_second).abs() < 1e-12);
    }
    assert_eq!(store.write_count, 2);
}

#[test]
fn stale_weight_vector_is_rejected() {
    let mesh = LineMesh::new(6);
    let mut store = MemoryStore::single_influence(line_weights());

    let err = apply_map(&mut store, &mesh, MapOp::Gain, 1.0);
    assert_eq!(
        err,
        Err(SessionError::weight_count_mismatch(6, 5))
    );
}
