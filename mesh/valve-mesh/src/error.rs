//! Error types for mesh generation.

use thiserror::Error;

/// Result type for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while triangulating or revolving a profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Input polygon or polyline has too few vertices.
    #[error("need at least {min} vertices, got {actual}")]
    TooFewVertices {
        /// Minimum required vertices.
        min: usize,
        /// Actual vertex count.
        actual: usize,
    },

    /// Triangulation produced no usable triangles for a non-trivial input.
    ///
    /// This signals a malformed or self-intersecting boundary; no partial
    /// mesh is ever returned.
    #[error("triangulation failed for a {vertex_count}-vertex polygon")]
    GenerationFailed {
        /// Vertex count of the rejected polygon.
        vertex_count: usize,
    },

    /// The Delaunay backend rejected an input vertex or constraint edge.
    #[error("triangulation backend rejected input: {message}")]
    ConstraintRejected {
        /// Backend-reported reason.
        message: String,
    },

    /// Too few angular subdivisions for a surface of revolution.
    #[error("revolution needs at least {min} angular segments, got {actual}")]
    TooFewSegments {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },
}
