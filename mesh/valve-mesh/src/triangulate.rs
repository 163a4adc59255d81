//! The triangulator seam: one interface, two backends.

use nalgebra::Point2;

use crate::error::{MeshError, MeshResult};
use crate::mesh::PlanarMesh;

/// Quality controls for mesh refinement.
///
/// The ear-clipping fallback inserts no Steiner points and therefore
/// ignores these; only the Delaunay backend refines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityOptions {
    /// Target minimum interior angle in degrees.
    pub min_angle_deg: f64,
    /// Optional maximum triangle area; `None` leaves area unconstrained.
    pub max_area: Option<f64>,
}

impl Default for QualityOptions {
    fn default() -> Self {
        Self {
            min_angle_deg: 30.0,
            max_area: None,
        }
    }
}

impl QualityOptions {
    /// Set the minimum interior angle in degrees.
    #[must_use]
    pub fn with_min_angle_deg(mut self, min_angle_deg: f64) -> Self {
        self.min_angle_deg = min_angle_deg;
        self
    }

    /// Set the maximum triangle area.
    #[must_use]
    pub fn with_max_area(mut self, max_area: f64) -> Self {
        self.max_area = Some(max_area);
        self
    }
}

/// Triangulates the interior of a closed simple polygon.
///
/// The polygon is an ordered vertex list with an implicit closing edge.
/// Implementations must either return a mesh whose triangles cover the
/// polygon interior or fail; a partial cover is never returned.
pub trait Triangulator {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Triangulate the polygon interior.
    ///
    /// # Errors
    ///
    /// - [`MeshError::TooFewVertices`] for fewer than three vertices
    /// - [`MeshError::GenerationFailed`] when no triangles can be produced
    fn triangulate(
        &self,
        polygon: &[Point2<f64>],
        quality: &QualityOptions,
    ) -> MeshResult<PlanarMesh>;
}

/// The preferred triangulator for this build.
///
/// Quality constrained Delaunay when the `delaunay` feature is compiled in,
/// otherwise the ear-clipping fallback. The choice happens here, once, at
/// configuration time.
#[must_use]
pub fn default_triangulator() -> Box<dyn Triangulator> {
    #[cfg(feature = "delaunay")]
    {
        Box::new(crate::delaunay::DelaunayTriangulator)
    }
    #[cfg(not(feature = "delaunay"))]
    {
        Box::new(crate::earclip::EarClipTriangulator)
    }
}

/// Shared input validation for both backends.
pub(crate) fn check_polygon(polygon: &[Point2<f64>]) -> MeshResult<()> {
    if polygon.len() < 3 {
        return Err(MeshError::TooFewVertices {
            min: 3,
            actual: polygon.len(),
        });
    }
    Ok(())
}
