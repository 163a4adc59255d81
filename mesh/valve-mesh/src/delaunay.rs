//! Quality constrained-Delaunay backend (spade).

use std::collections::HashSet;

use nalgebra::Point2;
use tracing::{debug, warn};

use spade::{
    AngleLimit, ConstrainedDelaunayTriangulation, Point2 as SpadePoint, RefinementParameters,
    Triangulation,
};

use crate::error::{MeshError, MeshResult};
use crate::mesh::PlanarMesh;
use crate::triangulate::{check_polygon, QualityOptions, Triangulator};

/// Constrained Delaunay triangulation with quality refinement.
///
/// The polygon edges become a closed constraint chain bounding a single
/// region; refinement inserts Steiner points until every interior triangle
/// meets the minimum-angle bound (and the maximum-area bound when set).
/// Faces outside the constraint chain are excluded from the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    fn name(&self) -> &'static str {
        "constrained-delaunay"
    }

    fn triangulate(
        &self,
        polygon: &[Point2<f64>],
        quality: &QualityOptions,
    ) -> MeshResult<PlanarMesh> {
        check_polygon(polygon)?;

        let mut cdt: ConstrainedDelaunayTriangulation<SpadePoint<f64>> =
            ConstrainedDelaunayTriangulation::new();

        let mut handles = Vec::with_capacity(polygon.len());
        for point in polygon {
            let handle = cdt
                .insert(SpadePoint::new(point.x, point.y))
                .map_err(|error| MeshError::ConstraintRejected {
                    message: error.to_string(),
                })?;
            handles.push(handle);
        }

        // Close the boundary as a constraint chain.
        for i in 0..handles.len() {
            let j = (i + 1) % handles.len();
            if handles[i] != handles[j] {
                cdt.add_constraint(handles[i], handles[j]);
            }
        }

        let mut parameters = RefinementParameters::<f64>::new()
            .exclude_outer_faces(true)
            .with_angle_limit(AngleLimit::from_deg(quality.min_angle_deg));
        if let Some(max_area) = quality.max_area {
            parameters = parameters.with_max_allowed_area(max_area);
        }

        let outcome = cdt.refine(parameters);
        if !outcome.refinement_complete {
            warn!(
                vertex_count = polygon.len(),
                "refinement hit its insertion budget before meeting all quality bounds"
            );
        }
        let excluded: HashSet<_> = outcome.excluded_faces.into_iter().collect();

        let mut mesh = PlanarMesh::with_capacity(cdt.num_vertices(), cdt.num_inner_faces());
        for vertex in cdt.vertices() {
            let position = vertex.position();
            mesh.vertices.push(Point2::new(position.x, position.y));
        }

        #[allow(clippy::cast_possible_truncation)]
        for face in cdt.inner_faces() {
            if excluded.contains(&face.fix()) {
                continue;
            }
            let [v0, v1, v2] = face.vertices();
            mesh.triangles.push([
                v0.fix().index() as u32,
                v1.fix().index() as u32,
                v2.fix().index() as u32,
            ]);
        }

        if mesh.is_empty() {
            return Err(MeshError::GenerationFailed {
                vertex_count: polygon.len(),
            });
        }

        debug!(
            input_vertices = polygon.len(),
            mesh_vertices = mesh.vertex_count(),
            triangle_count = mesh.triangle_count(),
            "constrained Delaunay triangulation complete"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_area_is_preserved() {
        let mesh = DelaunayTriangulator
            .triangulate(&unit_square(), &QualityOptions::default())
            .unwrap();
        assert!(!mesh.is_empty());
        assert_relative_eq!(mesh.total_area(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn max_area_refines_further() {
        let coarse = DelaunayTriangulator
            .triangulate(&unit_square(), &QualityOptions::default())
            .unwrap();
        let fine = DelaunayTriangulator
            .triangulate(
                &unit_square(),
                &QualityOptions::default().with_max_area(0.01),
            )
            .unwrap();
        assert!(fine.triangle_count() > coarse.triangle_count());
        assert_relative_eq!(fine.total_area(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn concave_region_stays_inside_boundary() {
        let l_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let mesh = DelaunayTriangulator
            .triangulate(&l_shape, &QualityOptions::default())
            .unwrap();
        // The notch square must not be filled.
        assert_relative_eq!(mesh.total_area(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_vertex_rejected() {
        let bad = vec![
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(0.0, 1.0),
        ];
        let result = DelaunayTriangulator.triangulate(&bad, &QualityOptions::default());
        assert!(matches!(result, Err(MeshError::ConstraintRejected { .. })));
    }
}
