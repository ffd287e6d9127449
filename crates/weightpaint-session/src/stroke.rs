//! Brush-stroke lifecycle.
//!
//! One continuous brush interaction is one [`StrokeSession`]. The
//! session captures a snapshot of the active weight vector and its
//! extrema when the stroke begins, feeds every sampled vertex through
//! the configured operator against that immutable snapshot, and writes
//! the accumulated result back in one call when the stroke ends. The
//! host wraps begin-to-end in a single undo chunk so undo reverts the
//! whole stroke.

use serde::{Deserialize, Serialize};
use weightpaint_core::{
    contrast, gain, retract, spread, volume_equalize, ContrastCurve, Extrema, Intensity, VertexId,
    WeightField,
};

use crate::context::PaintContext;
use crate::error::{SessionError, SessionResult};
use crate::host::{MeshAdapter, MeshHost, WeightStore};

/// Which operator a brush stroke applies at each sampled vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BrushOp {
    /// One-sided smoothing that only lowers weights.
    Retract,
    /// One-sided smoothing that only raises weights.
    Spread,
    /// Sharpen against the stroke snapshot's extrema.
    Contrast {
        /// Sharpening curve; defaults to the linear variant.
        #[serde(default)]
        curve: ContrastCurve,
    },
    /// Scale painted weights up, preserving exact zeros.
    Gain,
    /// Match weights across a spherical volume around the stroked
    /// vertex. The radius comes from the host's brush context.
    VolumeEqualize { radius: f64 },
}

/// State of one in-flight brush stroke.
pub struct StrokeSession {
    context: PaintContext,
    op: BrushOp,
    snapshot: WeightField,
    extrema: Extrema,
    pending: Vec<(VertexId, f64)>,
}

impl StrokeSession {
    /// Begin a stroke: capture the paint context and snapshot the
    /// active weight vector with its extrema.
    pub fn begin<S: WeightStore, M: MeshHost>(
        store: &S,
        mesh: &M,
        op: BrushOp,
    ) -> SessionResult<Self> {
        let context = PaintContext::capture(store, mesh);
        let weights = store.influence_weights(context.layer, context.influence);
        if weights.len() != context.vertex_count {
            return Err(SessionError::weight_count_mismatch(
                context.vertex_count,
                weights.len(),
            ));
        }
        let snapshot = WeightField::new(weights);
        let extrema = snapshot.extrema();
        Ok(Self {
            context,
            op,
            snapshot,
            extrema,
            pending: Vec::new(),
        })
    }

    /// The paint target this stroke writes to.
    pub fn context(&self) -> PaintContext {
        self.context
    }

    /// The operator this stroke applies.
    pub fn op(&self) -> BrushOp {
        self.op
    }

    /// Process one stroke sample at `vertex` with the given normalized
    /// paint value.
    ///
    /// Returns the number of vertices the sample touched; `0` means the
    /// operator skipped the sample (zero weight for gain, a weight on
    /// an extremum for contrast, a saturated or isolated neighborhood
    /// for the smoothing brushes) and nothing was recorded. An error
    /// for one sample leaves the session intact, so the caller can keep
    /// feeding the remaining samples of the stroke.
    pub fn sample<M: MeshHost>(
        &mut self,
        mesh: &M,
        vertex: VertexId,
        value: f64,
    ) -> SessionResult<usize> {
        let value = Intensity::new(value);
        let adapter = MeshAdapter(mesh);
        let touched = match self.op {
            BrushOp::Retract => {
                let result = retract(&adapter, &self.snapshot, self.extrema, vertex, value)?;
                self.record_option(vertex, result)
            }
            BrushOp::Spread => {
                let result = spread(&adapter, &self.snapshot, self.extrema, vertex, value)?;
                self.record_option(vertex, result)
            }
            BrushOp::Contrast { curve } => {
                let weight = self.snapshot.get(vertex)?;
                if self.extrema.contains_open(weight) {
                    let result = contrast(curve, value, weight, self.extrema);
                    self.record_option(vertex, Some(result))
                } else {
                    0
                }
            }
            BrushOp::Gain => {
                let weight = self.snapshot.get(vertex)?;
                if weight == 0.0 {
                    0
                } else {
                    self.record_option(vertex, Some(gain(value, weight)))
                }
            }
            BrushOp::VolumeEqualize { radius } => {
                let updates = volume_equalize(&adapter, &self.snapshot, vertex, value, radius)?;
                let count = updates.len();
                self.pending.extend(updates);
                count
            }
        };
        Ok(touched)
    }

    /// End the stroke: fold the recorded samples into the snapshot and
    /// persist the result in one write-back. A stroke with no recorded
    /// samples writes nothing.
    pub fn end<S: WeightStore>(self, store: &mut S) -> SessionResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let mut weights = self.snapshot.into_weights();
        for (vertex, weight) in self.pending {
            weights[vertex] = weight;
        }
        store.set_influence_weights(self.context.layer, self.context.influence, weights);
        Ok(())
    }

    fn record_option(&mut self, vertex: VertexId, result: Option<f64>) -> usize {
        match result {
            Some(weight) => {
                self.pending.push((vertex, weight));
                1
            }
            None => 0,
        }
    }
}
