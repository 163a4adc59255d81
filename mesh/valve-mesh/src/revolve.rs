//! Surface-of-revolution generation from a half-profile polyline.
//!
//! Each polyline sample contributes one ring: its radius is `|x|` and its
//! axial position is `y`. Rings are swept about the axial axis, giving a
//! 3-D point at `(r cos(theta), y, r sin(theta))` for each angle.

use nalgebra::{Point2, Point3};
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::mesh::SurfaceMesh;

/// Default angular resolution for the structured preview grid.
pub const DEFAULT_GRID_SEGMENTS: usize = 80;

/// Default angular resolution for the exported revolution mesh.
pub const DEFAULT_MESH_SEGMENTS: usize = 200;

/// A structured surface-of-revolution grid, row per axial sample and column
/// per angle, directly consumable by a surface renderer.
///
/// The last column duplicates the first so that rendered surfaces close
/// seamlessly; the triangle mesh from [`revolve_mesh`] instead wraps the
/// angular index and shares seam vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevolutionGrid {
    /// X coordinates, `x[row][column]`.
    pub x: Vec<Vec<f64>>,
    /// Axial coordinates, `y[row][column]`.
    pub y: Vec<Vec<f64>>,
    /// Z coordinates, `z[row][column]`.
    pub z: Vec<Vec<f64>>,
}

impl RevolutionGrid {
    /// Number of axial rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.x.len()
    }

    /// Number of angular columns (including the duplicated seam column).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.x.first().map_or(0, Vec::len)
    }
}

fn check_revolution_input(profile: &[Point2<f64>], angular_segments: usize) -> MeshResult<()> {
    if profile.len() < 2 {
        return Err(MeshError::TooFewVertices {
            min: 2,
            actual: profile.len(),
        });
    }
    if angular_segments < 3 {
        return Err(MeshError::TooFewSegments {
            min: 3,
            actual: angular_segments,
        });
    }
    Ok(())
}

/// Sweep a half-profile polyline into a structured grid.
///
/// # Errors
///
/// - [`MeshError::TooFewVertices`] for fewer than two profile samples
/// - [`MeshError::TooFewSegments`] for fewer than three angular segments
pub fn revolve_grid(
    profile: &[Point2<f64>],
    angular_segments: usize,
) -> MeshResult<RevolutionGrid> {
    check_revolution_input(profile, angular_segments)?;

    let columns = angular_segments + 1;
    let mut grid = RevolutionGrid {
        x: Vec::with_capacity(profile.len()),
        y: Vec::with_capacity(profile.len()),
        z: Vec::with_capacity(profile.len()),
    };

    for sample in profile {
        let radius = sample.x.abs();
        let mut row_x = Vec::with_capacity(columns);
        let mut row_y = Vec::with_capacity(columns);
        let mut row_z = Vec::with_capacity(columns);
        for j in 0..columns {
            #[allow(clippy::cast_precision_loss)]
            let theta = 2.0 * std::f64::consts::PI * j as f64 / angular_segments as f64;
            row_x.push(radius * theta.cos());
            row_y.push(sample.y);
            row_z.push(radius * theta.sin());
        }
        grid.x.push(row_x);
        grid.y.push(row_y);
        grid.z.push(row_z);
    }

    Ok(grid)
}

/// Sweep a half-profile polyline into an unstructured triangle mesh.
///
/// Two triangles per structured quad cell; the angular index wraps modulo
/// `angular_segments`, so the tube closes without duplicated seam vertices.
///
/// # Errors
///
/// Same conditions as [`revolve_grid`].
pub fn revolve_mesh(profile: &[Point2<f64>], angular_segments: usize) -> MeshResult<SurfaceMesh> {
    check_revolution_input(profile, angular_segments)?;

    let rows = profile.len();
    let mut mesh = SurfaceMesh::with_capacity(
        rows * angular_segments,
        2 * (rows - 1) * angular_segments,
    );

    for sample in profile {
        let radius = sample.x.abs();
        for j in 0..angular_segments {
            #[allow(clippy::cast_precision_loss)]
            let theta = 2.0 * std::f64::consts::PI * j as f64 / angular_segments as f64;
            mesh.vertices.push(Point3::new(
                radius * theta.cos(),
                sample.y,
                radius * theta.sin(),
            ));
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let ring = angular_segments as u32;
    for i in 0..rows - 1 {
        #[allow(clippy::cast_possible_truncation)]
        let row_base = (i * angular_segments) as u32;
        for j in 0..ring {
            let j2 = (j + 1) % ring;
            let v00 = row_base + j;
            let v01 = row_base + j2;
            let v10 = row_base + ring + j;
            let v11 = row_base + ring + j2;
            mesh.triangles.push([v00, v10, v11]);
            mesh.triangles.push([v00, v11, v01]);
        }
    }

    debug!(
        profile_samples = rows,
        angular_segments,
        vertex_count = mesh.vertex_count(),
        triangle_count = mesh.triangle_count(),
        "revolution mesh complete"
    );
    Ok(mesh)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cylinder_profile() -> Vec<Point2<f64>> {
        vec![Point2::new(-1.0, 0.0), Point2::new(-1.0, 2.0)]
    }

    #[test]
    fn grid_shape_and_seam() {
        let grid = revolve_grid(&cylinder_profile(), 8).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 9);
        // Seam column repeats the first.
        assert_relative_eq!(grid.x[0][0], grid.x[0][8], epsilon = 1e-12);
        assert_relative_eq!(grid.z[0][0], grid.z[0][8], epsilon = 1e-12);
        // Radius comes from |x|.
        assert_relative_eq!(grid.x[0][0], 1.0);
    }

    #[test]
    fn mesh_counts_for_cylinder() {
        let segments = 16;
        let mesh = revolve_mesh(&cylinder_profile(), segments).unwrap();
        assert_eq!(mesh.vertex_count(), 2 * segments);
        assert_eq!(mesh.triangle_count(), 2 * segments);
    }

    #[test]
    fn mesh_vertices_lie_on_cylinder() {
        let mesh = revolve_mesh(&cylinder_profile(), 24).unwrap();
        for vertex in &mesh.vertices {
            let radius = vertex.x.hypot(vertex.z);
            assert_relative_eq!(radius, 1.0, epsilon = 1e-12);
            assert!(vertex.y == 0.0 || vertex.y == 2.0);
        }
    }

    #[test]
    fn mesh_indices_are_valid_and_wrap() {
        let mesh = revolve_mesh(&cylinder_profile(), 5).unwrap();
        #[allow(clippy::cast_possible_truncation)]
        let vertex_count = mesh.vertex_count() as u32;
        for triangle in &mesh.triangles {
            for &index in triangle {
                assert!(index < vertex_count);
            }
        }
    }

    #[test]
    fn rejects_short_profiles_and_coarse_sweeps() {
        assert!(matches!(
            revolve_mesh(&[Point2::new(-1.0, 0.0)], 8),
            Err(MeshError::TooFewVertices { .. })
        ));
        assert!(matches!(
            revolve_grid(&cylinder_profile(), 2),
            Err(MeshError::TooFewSegments { .. })
        ));
    }
}
