//! Per-operation snapshot of the paint target.

use crate::host::{InfluenceId, LayerId, MeshHost, WeightStore};

/// Which (layer, influence) pair an operation writes to, captured once
/// at the start of a stroke or batch call.
///
/// Operators take this explicit value instead of re-querying the host's
/// mutable editor state mid-operation, so a layer or target switch
/// during a stroke cannot split the write-back across targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintContext {
    /// The active paint layer.
    pub layer: LayerId,
    /// The influence being painted.
    pub influence: InfluenceId,
    /// Mesh vertex count at capture time.
    pub vertex_count: usize,
}

impl PaintContext {
    /// Capture the current layer, paint target, and vertex count.
    pub fn capture<S: WeightStore, M: MeshHost>(store: &S, mesh: &M) -> Self {
        Self {
            layer: store.current_layer(),
            influence: store.current_paint_target(),
            vertex_count: mesh.vertex_count(),
        }
    }
}
