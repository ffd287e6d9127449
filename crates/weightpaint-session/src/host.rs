//! Traits the host application implements to plug into the session
//! layer.

use weightpaint_core::{Adjacency, VertexId, VertexPositions};

/// Identifier of a paint layer in the host's skinning plugin.
pub type LayerId = u32;

/// Identifier of an influence (skeletal joint) within a layer.
pub type InfluenceId = u32;

/// Mesh-side services: topology, positions, and the component
/// selection. All queries reflect live host state at call time.
pub trait MeshHost {
    /// Number of vertices in the mesh.
    fn vertex_count(&self) -> usize;

    /// Vertex ids directly edge-connected to `vertex`, excluding
    /// `vertex` itself.
    fn adjacent_vertices(&self, vertex: VertexId) -> Vec<VertexId>;

    /// 3D position of a vertex, in whatever space the host paints in.
    fn vertex_position(&self, vertex: VertexId) -> [f64; 3];

    /// The current component selection as an ordered, deduplicated
    /// sequence of vertex ids. Order is pick order; the equalize
    /// `first` and `last` statistics depend on it.
    fn selection(&self) -> Vec<VertexId>;
}

/// Weight-storage services provided by the skinning plugin.
pub trait WeightStore {
    /// The currently active paint layer.
    fn current_layer(&self) -> LayerId;

    /// The influence currently selected as the paint target.
    fn current_paint_target(&self) -> InfluenceId;

    /// Every influence active on the given layer.
    fn active_influences(&self, layer: LayerId) -> Vec<InfluenceId>;

    /// The weight vector for one (layer, influence) pair, indexed by
    /// vertex id.
    fn influence_weights(&self, layer: LayerId, influence: InfluenceId) -> Vec<f64>;

    /// Persist a whole weight vector for one (layer, influence) pair.
    fn set_influence_weights(
        &mut self,
        layer: LayerId,
        influence: InfluenceId,
        weights: Vec<f64>,
    );
}

/// Adapts a [`MeshHost`] to the oracle traits the core operators
/// consume.
pub struct MeshAdapter<'a, H: MeshHost>(pub &'a H);

impl<H: MeshHost> Adjacency for MeshAdapter<'_, H> {
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.0.adjacent_vertices(vertex)
    }
}

impl<H: MeshHost> VertexPositions for MeshAdapter<'_, H> {
    fn position(&self, vertex: VertexId) -> [f64; 3] {
        self.0.vertex_position(vertex)
    }
}
