//! Weight-map editing operators for skinning weight layers.
//!
//! This crate is the numeric kernel behind a set of brush and whole-map
//! weight-editing tools: it transforms the per-vertex weight vector of a
//! single influence (one skeletal joint's blend weights) with small,
//! deterministic operators. The surrounding application owns the mesh,
//! the selection, and the weight storage; this crate only ever sees a
//! dense weight vector, an adjacency oracle, and an intensity value.
//!
//! # Overview
//!
//! Three operator families:
//!
//! - **Pointwise** ([`pointwise`]): contrast (two selectable curves) and
//!   gain. Pure functions of `(intensity, weight, extrema)`.
//! - **Neighborhood** ([`neighborhood`]): retract, spread, grow, shrink,
//!   and volume equalize. These additionally consult an [`Adjacency`]
//!   oracle (and, for volume equalize, vertex positions).
//! - **Reduction** ([`reduction`]): pull every weight in an ordered
//!   vertex selection toward a statistic of that selection.
//!
//! # Example
//!
//! ```
//! use weightpaint_core::{contrast, ContrastCurve, Extrema, Intensity};
//!
//! let extrema = Extrema { min: 0.0, max: 1.0 };
//! let value = Intensity::new(1.0);
//!
//! // Full-intensity linear contrast snaps weights to the nearest extremum.
//! assert_eq!(contrast(ContrastCurve::Linear, value, 0.8, extrema), 1.0);
//! assert_eq!(contrast(ContrastCurve::Linear, value, 0.2, extrema), 0.0);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types shared by all operators
//! - [`field`]: Weight field, extrema, intensity, and vertex id types
//! - [`math`]: Numeric helpers (lerp, normal CDF)
//! - [`pointwise`]: Single-vertex transforms
//! - [`neighborhood`]: Transforms that consult mesh adjacency
//! - [`reduction`]: Selection-wide equalize operators

pub mod error;
pub mod field;
pub mod math;
pub mod neighborhood;
pub mod pointwise;
pub mod reduction;

// Re-export commonly used types at the crate root
pub use error::{CoreError, CoreResult};
pub use field::{Extrema, Intensity, VertexId, WeightField};
pub use neighborhood::{
    grow, grow_map, retract, retract_map, shrink, shrink_map, spread, spread_map, volume_equalize,
    Adjacency, VertexPositions,
};
pub use pointwise::{contrast, contrast_map, gain, gain_map, ContrastCurve};
pub use reduction::{equalize, Statistic};
