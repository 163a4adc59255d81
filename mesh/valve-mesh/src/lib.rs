//! Planar triangulation and surface-of-revolution meshing for valve profiles.
//!
//! This crate turns the closed boundary loop produced by `valve-profile`
//! into a 2-D triangle mesh, and a half-profile polyline into a 3-D surface
//! of revolution:
//!
//! - [`PlanarMesh`] / [`SurfaceMesh`] - indexed triangle meshes
//! - [`Triangulator`] - one seam, two backends: quality constrained
//!   Delaunay (feature `delaunay`, on by default) and an always-available
//!   ear-clipping fallback
//! - [`revolve_grid`] / [`revolve_mesh`] - structured and unstructured
//!   surfaces of revolution
//!
//! # Example
//!
//! ```
//! use nalgebra::Point2;
//! use valve_mesh::{default_triangulator, QualityOptions};
//!
//! let square = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let mesh = default_triangulator()
//!     .triangulate(&square, &QualityOptions::default())
//!     .unwrap();
//! assert!((mesh.total_area() - 1.0).abs() < 1e-9);
//! ```
//!
//! # Backend selection
//!
//! [`default_triangulator`] picks the best backend compiled into this
//! build; both backends can also be used directly (the fallback is handy
//! in tests and produces a strictly coarser, boundary-only mesh).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

#[cfg(feature = "delaunay")]
mod delaunay;
mod earclip;
mod error;
mod mesh;
mod revolve;
mod triangulate;

#[cfg(feature = "delaunay")]
pub use delaunay::DelaunayTriangulator;
pub use earclip::EarClipTriangulator;
pub use error::{MeshError, MeshResult};
pub use mesh::{polygon_signed_area, PlanarMesh, SurfaceMesh};
pub use revolve::{
    revolve_grid, revolve_mesh, RevolutionGrid, DEFAULT_GRID_SEGMENTS, DEFAULT_MESH_SEGMENTS,
};
pub use triangulate::{default_triangulator, QualityOptions, Triangulator};

// Re-export the point types used throughout the public API.
pub use nalgebra::{Point2, Point3};
