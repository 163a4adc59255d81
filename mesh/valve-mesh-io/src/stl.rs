//! ASCII STL (solid-facet) export and re-import.
//!
//! # Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Normals are recomputed from the triangle edges on write; a degenerate
//! triangle falls back to the +Z axis instead of dividing by zero. The
//! reader ignores stored normals entirely.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::{Point3, Vector3};
use valve_mesh::SurfaceMesh;

use crate::error::{IoError, IoResult};

/// Outward normal of a triangle, or +Z when the edge cross product is
/// degenerate.
fn facet_normal(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> Vector3<f64> {
    let normal = (v1 - v0).cross(&(v2 - v0));
    let length = normal.norm();
    if length > f64::EPSILON {
        normal / length
    } else {
        Vector3::new(0.0, 0.0, 1.0)
    }
}

/// Write a mesh as ASCII STL.
///
/// One facet block per triangle, framed by `solid <name>` / `endsolid
/// <name>`.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_stl_ascii<W: Write>(mesh: &SurfaceMesh, name: &str, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid {name}")?;

    for &[i0, i1, i2] in &mesh.triangles {
        let v0 = &mesh.vertices[i0 as usize];
        let v1 = &mesh.vertices[i1 as usize];
        let v2 = &mesh.vertices[i2 as usize];
        let normal = facet_normal(v0, v1, v2);

        writeln!(
            writer,
            "  facet normal {:.7e} {:.7e} {:.7e}",
            normal.x, normal.y, normal.z
        )?;
        writeln!(writer, "    outer loop")?;
        for vertex in [v0, v1, v2] {
            writeln!(
                writer,
                "      vertex {:.7e} {:.7e} {:.7e}",
                vertex.x, vertex.y, vertex.z
            )?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

/// Render a mesh as an ASCII STL string.
///
/// # Errors
///
/// Returns an error if formatting fails (it cannot for in-memory writes,
/// but the writer interface is fallible).
pub fn stl_ascii_string(mesh: &SurfaceMesh, name: &str) -> IoResult<String> {
    let mut buffer = Vec::new();
    write_stl_ascii(mesh, name, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| IoError::invalid_content("non-UTF-8 STL output"))
}

/// Write a mesh as ASCII STL to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_stl_ascii<P: AsRef<Path>>(mesh: &SurfaceMesh, name: &str, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_stl_ascii(mesh, name, BufWriter::new(file))
}

/// Read an ASCII STL stream back into a mesh.
///
/// Line-oriented and tolerant: unknown lines are skipped and stored
/// normals are ignored. Vertices with identical parsed coordinates are
/// merged back into one indexed vertex; shared vertices serialize to
/// identical text under the fixed `{:.7e}` format, so writing a mesh and
/// re-reading it yields the same vertex and triangle counts.
///
/// # Errors
///
/// Returns an error on I/O failure or a malformed vertex line.
pub fn read_stl_ascii<R: BufRead>(reader: R) -> IoResult<SurfaceMesh> {
    let mut mesh = SurfaceMesh::new();
    let mut index_of: HashMap<[u64; 3], u32> = HashMap::new();
    let mut facet_vertices: Vec<Point3<f64>> = Vec::with_capacity(3);
    let mut in_loop = false;

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("outer") => {
                in_loop = true;
                facet_vertices.clear();
            }
            Some("vertex") if in_loop => {
                let mut coordinate = || -> IoResult<f64> {
                    let field = parts
                        .next()
                        .ok_or_else(|| IoError::invalid_content("vertex line with < 3 fields"))?;
                    Ok(field.parse()?)
                };
                let x = coordinate()?;
                let y = coordinate()?;
                let z = coordinate()?;
                facet_vertices.push(Point3::new(x, y, z));
            }
            Some("endloop") => in_loop = false,
            Some("endfacet") => {
                if facet_vertices.len() == 3 {
                    let mut triangle = [0_u32; 3];
                    for (slot, vertex) in triangle.iter_mut().zip(facet_vertices.drain(..)) {
                        let key = [vertex.x.to_bits(), vertex.y.to_bits(), vertex.z.to_bits()];
                        *slot = *index_of.entry(key).or_insert_with(|| {
                            #[allow(clippy::cast_possible_truncation)]
                            let index = mesh.vertices.len() as u32;
                            mesh.vertices.push(vertex);
                            index
                        });
                    }
                    mesh.triangles.push(triangle);
                }
                facet_vertices.clear();
            }
            Some("endsolid") => break,
            _ => {}
        }
    }

    Ok(mesh)
}

/// Load an ASCII STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_stl_ascii<P: AsRef<Path>>(path: P) -> IoResult<SurfaceMesh> {
    let file = File::open(path)?;
    read_stl_ascii(BufReader::new(file))
}
