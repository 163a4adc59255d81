//! Planar and surface triangle meshes.

use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D triangle mesh with indexed vertices.
///
/// Faces are `[v0, v1, v2]` index triples into the vertex list with
/// counter-clockwise winding. Every index must reference a vertex and every
/// triangle must have positive area; the triangulators guarantee both for
/// non-degenerate input.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2<f64>>,
    /// Triangles as vertex index triples.
    pub triangles: Vec<[u32; 3]>,
}

impl PlanarMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Signed area of one triangle; positive for CCW winding.
    ///
    /// Returns `None` for an out-of-range triangle index.
    #[must_use]
    pub fn triangle_area(&self, index: usize) -> Option<f64> {
        let [i0, i1, i2] = *self.triangles.get(index)?;
        let v0 = self.vertices.get(i0 as usize)?;
        let v1 = self.vertices.get(i1 as usize)?;
        let v2 = self.vertices.get(i2 as usize)?;
        Some(((v1 - v0).perp(&(v2 - v0))) / 2.0)
    }

    /// Sum of unsigned triangle areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        (0..self.triangles.len())
            .filter_map(|i| self.triangle_area(i))
            .map(f64::abs)
            .sum()
    }
}

/// A 3-D triangle mesh with indexed vertices.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Triangles as vertex index triples.
    pub triangles: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Signed area of a simple polygon by the shoelace formula.
///
/// Positive for counter-clockwise vertex order.
#[must_use]
pub fn polygon_signed_area(polygon: &[Point2<f64>]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut doubled = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        doubled += p.x * q.y - q.x * p.y;
    }
    doubled / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_right_triangle() -> PlanarMesh {
        PlanarMesh {
            vertices: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn triangle_area_signed() {
        let mesh = unit_right_triangle();
        assert_relative_eq!(mesh.triangle_area(0).unwrap_or(0.0), 0.5);
        assert!(mesh.triangle_area(1).is_none());
    }

    #[test]
    fn total_area_sums_triangles() {
        let mut mesh = unit_right_triangle();
        mesh.vertices.push(Point2::new(1.0, 1.0));
        mesh.triangles.push([1, 3, 2]);
        assert_relative_eq!(mesh.total_area(), 1.0);
    }

    #[test]
    fn empty_mesh() {
        let mesh = PlanarMesh::new();
        assert!(mesh.is_empty());
        assert_relative_eq!(mesh.total_area(), 0.0);
    }

    #[test]
    fn polygon_area_square() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert_relative_eq!(polygon_signed_area(&square), 4.0);

        let reversed: Vec<_> = square.iter().rev().copied().collect();
        assert_relative_eq!(polygon_signed_area(&reversed), -4.0);
    }
}
