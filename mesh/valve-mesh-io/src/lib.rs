//! Text export formats for valve meshes.
//!
//! Two line-oriented ASCII formats, both consumable by common external
//! tooling:
//!
//! - **ASCII STL** ([`write_stl_ascii`], [`read_stl_ascii`]) for the 3-D
//!   surface-of-revolution mesh
//! - **Gmsh 2.2** ([`write_msh`]) for the planar lumen mesh, 1-indexed
//!   nodes and 3-node triangle elements at z = 0
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use valve_mesh::SurfaceMesh;
//! use valve_mesh_io::{read_stl_ascii, stl_ascii_string};
//!
//! let mesh = SurfaceMesh {
//!     vertices: vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     triangles: vec![[0, 1, 2]],
//! };
//!
//! let text = stl_ascii_string(&mesh, "valve").unwrap();
//! let reloaded = read_stl_ascii(text.as_bytes()).unwrap();
//! assert_eq!(reloaded.triangle_count(), mesh.triangle_count());
//! assert_eq!(reloaded.vertex_count(), mesh.vertex_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod msh;
mod stl;

pub use error::{IoError, IoResult};
pub use msh::{msh_string, save_msh, write_msh};
pub use stl::{load_stl_ascii, read_stl_ascii, save_stl_ascii, stl_ascii_string, write_stl_ascii};
