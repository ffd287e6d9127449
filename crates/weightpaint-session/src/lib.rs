//! Session glue between a host application and the weightpaint
//! operators.
//!
//! The host owns the mesh, the selection, the brush context, and the
//! weight storage; this crate intercepts brush-stroke events and batch
//! commands, runs the [`weightpaint_core`] operators over a snapshot of
//! one influence's weight vector, and hands the result back to the
//! store. The host plugs in by implementing two traits:
//!
//! - [`MeshHost`]: vertex count, edge adjacency, vertex positions, and
//!   the ordered component selection.
//! - [`WeightStore`]: per-(layer, influence) weight vectors plus the
//!   current layer, current paint target, and active influence listing.
//!
//! A brush interaction is one [`StrokeSession`]: begin it when the
//! stroke starts, feed it every sampled vertex, and end it to persist
//! the result in one write-back (which the host is expected to wrap in
//! a single undo chunk). Whole-map floods and selection equalizes go
//! through [`apply_map`] and [`apply_equalize`], which re-read a fresh
//! snapshot per call.
//!
//! # Modules
//!
//! - [`batch`]: Whole-map flood and selection equalize entry points
//! - [`context`]: Per-operation snapshot of the paint target
//! - [`error`]: Session error types
//! - [`host`]: Traits the host application implements
//! - [`stroke`]: Brush-stroke lifecycle

pub mod batch;
pub mod context;
pub mod error;
pub mod host;
pub mod stroke;

// Re-export commonly used types at the crate root
pub use batch::{apply_equalize, apply_map, MapOp};
pub use context::PaintContext;
pub use error::{SessionError, SessionResult};
pub use host::{InfluenceId, LayerId, MeshAdapter, MeshHost, WeightStore};
pub use stroke::{BrushOp, StrokeSession};
