//! Weight field and the small value types every operator shares.

use crate::error::{CoreError, CoreResult};

/// Index of a vertex in the host mesh, in `[0, vertex_count)`.
///
/// Only stable within one mesh topology; never persisted.
pub type VertexId = usize;

/// Cached minimum and maximum of a weight vector (or of a selected
/// subset of it). Recomputed whenever the vector may have changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    /// Compute the extrema of a weight slice. An empty slice yields
    /// `(0.0, 0.0)`.
    pub fn of(weights: &[f64]) -> Self {
        let mut iter = weights.iter().copied();
        let Some(first) = iter.next() else {
            return Self { min: 0.0, max: 0.0 };
        };
        let (min, max) = iter.fold((first, first), |(min, max), w| (min.min(w), max.max(w)));
        Self { min, max }
    }

    /// Midpoint between the minimum and maximum.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    /// Distance between the minimum and maximum.
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `weight` lies strictly between the minimum and maximum.
    ///
    /// Weights sitting exactly on an extremum are skipped by the
    /// contrast call sites so the extrema themselves never move.
    #[inline]
    pub fn contains_open(&self, weight: f64) -> bool {
        self.min < weight && weight < self.max
    }
}

/// Brush or batch intensity, clamped into `[0.0, 1.0]` on construction.
///
/// `0.0` is a no-op for every operator and `1.0` is that operator's
/// maximal effect. Out-of-range input is clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity(f64);

impl Intensity {
    /// Create an intensity, clamping into `[0.0, 1.0]`.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// The clamped value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this intensity makes every operator a no-op.
    ///
    /// Callers check this before [`Intensity::smoothing_threshold`],
    /// which divides by the intensity.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Threshold under which a smoothing update is considered
    /// visually imperceptible: `0.1 / value`.
    ///
    /// Must not be called at zero intensity.
    #[inline]
    pub fn smoothing_threshold(self) -> f64 {
        debug_assert!(!self.is_zero());
        0.1 / self.0
    }
}

/// A dense, zero-indexed vector of per-vertex weights for one influence.
///
/// One instance exists per (paint layer, influence) pair; the operators
/// borrow it for the duration of one stroke or batch call and the host
/// persists the result wholesale afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightField {
    weights: Vec<f64>,
}

impl WeightField {
    /// Wrap a weight vector read from the host's weight storage.
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Number of vertices covered by this field.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.weights.len()
    }

    /// Validate a vertex id against this field.
    pub fn check_vertex(&self, vertex: VertexId) -> CoreResult<()> {
        if vertex < self.weights.len() {
            Ok(())
        } else {
            Err(CoreError::vertex_out_of_range(vertex, self.weights.len()))
        }
    }

    /// Weight of one vertex.
    pub fn get(&self, vertex: VertexId) -> CoreResult<f64> {
        self.check_vertex(vertex)?;
        Ok(self.weights[vertex])
    }

    /// The raw weight slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Unwrap back into the vector handed to the host for write-back.
    pub fn into_weights(self) -> Vec<f64> {
        self.weights
    }

    /// Extrema over the whole field.
    pub fn extrema(&self) -> Extrema {
        Extrema::of(&self.weights)
    }
}
