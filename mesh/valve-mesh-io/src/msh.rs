//! Gmsh 2.2 node/element export for planar meshes.
//!
//! The legacy MSH 2.2 ASCII layout:
//!
//! ```text
//! $MeshFormat
//! 2.2 0 8
//! $EndMeshFormat
//! $Nodes
//! <node count>
//! <index> <x> <y> 0.0
//! $EndNodes
//! $Elements
//! <element count>
//! <index> 2 0 <n1> <n2> <n3>
//! $EndElements
//! ```
//!
//! Nodes and elements are 1-indexed; element type 2 is the 3-node
//! triangle. The planar mesh is embedded at z = 0.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use valve_mesh::PlanarMesh;

use crate::error::{IoError, IoResult};

/// Gmsh element type tag for a 3-node triangle.
const TRIANGLE_ELEMENT_TYPE: u32 = 2;

/// Write a planar mesh in Gmsh 2.2 ASCII format.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_msh<W: Write>(mesh: &PlanarMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "$MeshFormat")?;
    writeln!(writer, "2.2 0 8")?;
    writeln!(writer, "$EndMeshFormat")?;

    writeln!(writer, "$Nodes")?;
    writeln!(writer, "{}", mesh.vertex_count())?;
    for (index, vertex) in mesh.vertices.iter().enumerate() {
        writeln!(writer, "{} {:.16e} {:.16e} 0.0", index + 1, vertex.x, vertex.y)?;
    }
    writeln!(writer, "$EndNodes")?;

    writeln!(writer, "$Elements")?;
    writeln!(writer, "{}", mesh.triangle_count())?;
    for (index, [n0, n1, n2]) in mesh.triangles.iter().enumerate() {
        writeln!(
            writer,
            "{} {TRIANGLE_ELEMENT_TYPE} 0 {} {} {}",
            index + 1,
            n0 + 1,
            n1 + 1,
            n2 + 1
        )?;
    }
    writeln!(writer, "$EndElements")?;
    Ok(())
}

/// Render a planar mesh as a Gmsh 2.2 string.
///
/// # Errors
///
/// Returns an error if formatting fails (it cannot for in-memory writes,
/// but the writer interface is fallible).
pub fn msh_string(mesh: &PlanarMesh) -> IoResult<String> {
    let mut buffer = Vec::new();
    write_msh(mesh, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| IoError::invalid_content("non-UTF-8 MSH output"))
}

/// Write a planar mesh in Gmsh 2.2 format to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_msh<P: AsRef<Path>>(mesh: &PlanarMesh, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_msh(mesh, BufWriter::new(file))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn two_triangle_mesh() -> PlanarMesh {
        PlanarMesh {
            vertices: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    #[test]
    fn sections_and_counts() {
        let text = msh_string(&two_triangle_mesh()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "$MeshFormat");
        assert_eq!(lines[1], "2.2 0 8");
        assert_eq!(lines[2], "$EndMeshFormat");
        assert_eq!(lines[3], "$Nodes");
        assert_eq!(lines[4], "4");
        assert_eq!(lines[9], "$EndNodes");
        assert_eq!(lines[10], "$Elements");
        assert_eq!(lines[11], "2");
        assert_eq!(lines[14], "$EndElements");
    }

    #[test]
    fn nodes_and_elements_are_one_indexed() {
        let text = msh_string(&two_triangle_mesh()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // First node row.
        assert!(lines[5].starts_with("1 "));
        assert!(lines[5].ends_with(" 0.0"));

        // First element row: index, type 2, zero tags, 1-based node ids.
        assert_eq!(lines[12], "1 2 0 1 2 3");
        assert_eq!(lines[13], "2 2 0 1 3 4");
    }

    #[test]
    fn empty_mesh_writes_zero_counts() {
        let text = msh_string(&PlanarMesh::new()).unwrap();
        assert!(text.contains("$Nodes\n0\n$EndNodes"));
        assert!(text.contains("$Elements\n0\n$EndElements"));
    }
}
