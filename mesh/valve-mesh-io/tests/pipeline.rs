//! End-to-end pipeline: parameters -> profile -> mesh -> export.

#![allow(clippy::unwrap_used)]

use valve_mesh::{
    revolve_mesh, EarClipTriangulator, QualityOptions, Triangulator, DEFAULT_MESH_SEGMENTS,
};
use valve_mesh_io::{load_stl_ascii, msh_string, read_stl_ascii, save_stl_ascii, stl_ascii_string};
use valve_profile::{boundary_loop, solve_cross_section, wall_polyline, ValveParams};

// Arc resolution kept moderate so the quadratic fallback stays fast.
const ARC_SAMPLES: usize = 40;

#[test]
fn revolution_mesh_exports_and_reimports() {
    let section = solve_cross_section(&ValveParams::default()).unwrap();
    let profile_polyline = wall_polyline(&section.left, ARC_SAMPLES);

    let mesh = revolve_mesh(&profile_polyline, DEFAULT_MESH_SEGMENTS).unwrap();
    assert!(!mesh.is_empty());

    let text = stl_ascii_string(&mesh, "venous_valve_3d").unwrap();
    assert!(text.starts_with("solid venous_valve_3d"));

    let reloaded = read_stl_ascii(text.as_bytes()).unwrap();
    assert_eq!(reloaded.triangle_count(), mesh.triangle_count());
    // Seam-shared vertices merge back on read, so both counts survive.
    assert_eq!(reloaded.vertex_count(), mesh.vertex_count());
}

#[test]
fn revolution_mesh_round_trips_through_a_file() {
    let section = solve_cross_section(&ValveParams::default()).unwrap();
    let profile_polyline = wall_polyline(&section.left, 12);
    let mesh = revolve_mesh(&profile_polyline, 16).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("valve.stl");
    save_stl_ascii(&mesh, "venous_valve_3d", &path).unwrap();

    let reloaded = load_stl_ascii(&path).unwrap();
    assert_eq!(reloaded.triangle_count(), mesh.triangle_count());
    assert_eq!(reloaded.vertex_count(), mesh.vertex_count());
}

#[test]
fn planar_mesh_exports_as_gmsh() {
    let section = solve_cross_section(&ValveParams::default()).unwrap();
    let polygon = boundary_loop(&section, ARC_SAMPLES);
    let mesh = EarClipTriangulator
        .triangulate(&polygon, &QualityOptions::default())
        .unwrap();

    let text = msh_string(&mesh).unwrap();
    assert!(text.starts_with("$MeshFormat\n2.2 0 8\n"));
    assert!(text.contains(&format!("$Nodes\n{}\n", mesh.vertex_count())));
    assert!(text.contains(&format!("$Elements\n{}\n", mesh.triangle_count())));
}
