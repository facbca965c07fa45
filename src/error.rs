//! Error types for mesh construction.

use thiserror::Error;

/// Errors that can occur while building a mesh.
///
/// These are configuration errors: once construction succeeds the resulting
/// mesh and any operators built from it are fully valid, and application
/// never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A grid extent smaller than one cell.
    #[error("extent in direction {dir} must be at least 1, got {extent}")]
    InvalidExtents { dir: usize, extent: i64 },

    /// Degenerate or inverted physical bounds.
    #[error("bounds in direction {dir} must satisfy min < max, got [{min}, {max}]")]
    InvalidBounds { dir: usize, min: f64, max: f64 },

    /// A shape whose bounding region leaves the domain.
    #[error("shape {shape_id} extends outside the computational domain")]
    ShapeOutsideDomain { shape_id: i64 },
}
