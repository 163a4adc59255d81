//! Ear-clipping fallback triangulator.
//!
//! Used when the Delaunay backend is not compiled in, or directly when a
//! coarse boundary-only mesh is wanted. Inserts no Steiner points, so the
//! output is strictly coarser than the Delaunay path and the quality
//! options are ignored.

use nalgebra::Point2;
use tracing::{debug, warn};

use crate::error::{MeshError, MeshResult};
use crate::mesh::{polygon_signed_area, PlanarMesh};
use crate::triangulate::{check_polygon, QualityOptions, Triangulator};

/// Ear-clipping triangulation of a simple polygon.
///
/// Termination is structural: every clipped ear removes exactly one vertex
/// from the active list, so the main loop runs at most `n - 3` times. A
/// full scan that finds no ear means the boundary is not a simple polygon
/// and fails with [`MeshError::GenerationFailed`] rather than returning a
/// partial mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarClipTriangulator;

/// Strict convexity at `curr`: positive cross product of the edge vectors,
/// so collinear vertices never qualify as ear tips.
fn is_convex(polygon: &[Point2<f64>], prev: u32, curr: u32, next: u32) -> bool {
    let p0 = polygon[prev as usize];
    let p1 = polygon[curr as usize];
    let p2 = polygon[next as usize];
    (p1 - p0).perp(&(p2 - p0)) > 0.0
}

/// Barycentric point-in-triangle test; a degenerate triangle contains nothing.
fn point_in_triangle(
    point: Point2<f64>,
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = point - a;
    let den = v0.perp(&v1);
    if den.abs() < 1e-12 {
        return false;
    }
    let u = v2.perp(&v1) / den;
    let v = v0.perp(&v2) / den;
    u >= 0.0 && v >= 0.0 && u + v <= 1.0
}

impl Triangulator for EarClipTriangulator {
    fn name(&self) -> &'static str {
        "ear-clipping"
    }

    fn triangulate(
        &self,
        polygon: &[Point2<f64>],
        _quality: &QualityOptions,
    ) -> MeshResult<PlanarMesh> {
        check_polygon(polygon)?;
        let n = polygon.len();

        // Walk the polygon in CCW order but keep the caller's indices, so
        // the emitted triangles reference the input vertex list directly.
        #[allow(clippy::cast_possible_truncation)]
        let mut active: Vec<u32> = if polygon_signed_area(polygon) >= 0.0 {
            (0..n as u32).collect()
        } else {
            (0..n as u32).rev().collect()
        };

        let mut triangles: Vec<[u32; 3]> = Vec::with_capacity(n - 2);

        while active.len() > 3 {
            let mut clipped = false;
            for k in 0..active.len() {
                let prev = active[(k + active.len() - 1) % active.len()];
                let curr = active[k];
                let next = active[(k + 1) % active.len()];

                if !is_convex(polygon, prev, curr, next) {
                    continue;
                }

                let a = polygon[prev as usize];
                let b = polygon[curr as usize];
                let c = polygon[next as usize];
                let blocked = active.iter().any(|&j| {
                    j != prev && j != curr && j != next && point_in_triangle(polygon[j as usize], a, b, c)
                });
                if blocked {
                    continue;
                }

                triangles.push([prev, curr, next]);
                active.remove(k);
                clipped = true;
                break;
            }

            if !clipped {
                warn!(
                    vertex_count = n,
                    remaining = active.len(),
                    "no ear found; boundary is not a simple polygon"
                );
                return Err(MeshError::GenerationFailed { vertex_count: n });
            }
        }

        // The remaining triple must close the cover with a CCW triangle. A
        // reversed one means the boundary crosses itself, so the triangles
        // clipped so far do not cover the interior; only an exactly
        // collinear sliver may be dropped.
        let (f0, f1, f2) = (active[0], active[1], active[2]);
        let closing_cross = (polygon[f1 as usize] - polygon[f0 as usize])
            .perp(&(polygon[f2 as usize] - polygon[f0 as usize]));
        if closing_cross > 0.0 {
            triangles.push([f0, f1, f2]);
        } else if closing_cross.abs() > 1e-12 {
            warn!(
                vertex_count = n,
                "closing triangle is reversed; boundary is not a simple polygon"
            );
            return Err(MeshError::GenerationFailed { vertex_count: n });
        }

        if triangles.is_empty() {
            return Err(MeshError::GenerationFailed { vertex_count: n });
        }

        debug!(
            vertex_count = n,
            triangle_count = triangles.len(),
            "ear-clipping triangulation complete"
        );

        Ok(PlanarMesh {
            vertices: polygon.to_vec(),
            triangles,
        })
    }
}
