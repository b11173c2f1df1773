mod support;

use normals_editor::{
    EditMesh, GenerateParams, Generator, NormalHost, NormalMode,
    editor::{convert_mode, generate},
};
use support::*;

#[test]
fn uniform_shading_round_trips() {
    let mut cube = EditMesh::cuboid("cube", 1.0, 2.0, 3.0);
    scramble_vertex_normals(&mut cube);
    cube.vertices[5].normal = -cube.vertices[5].normal;
    let original = cube.vertex_normals();

    convert_mode(&mut cube, NormalMode::SplitNormals).unwrap();
    assert_eq!(cube.mode(), NormalMode::SplitNormals);
    assert_eq!(cube.corner_normals().len(), 24);

    convert_mode(&mut cube, NormalMode::VertexNormals).unwrap();
    assert_eq!(cube.mode(), NormalMode::VertexNormals);
    for (after, before) in cube.vertex_normals().iter().zip(&original) {
        assert_vec_eq(after, before, 1e-12);
    }
}

#[test]
fn hard_edges_average_away() {
    let mut cube = EditMesh::cuboid("cube", 2.0, 2.0, 2.0);
    convert_mode(&mut cube, NormalMode::SplitNormals).unwrap();
    generate(&mut cube, Generator::Flat, &GenerateParams::default()).unwrap();
    let corners = cube.corner_normals();

    convert_mode(&mut cube, NormalMode::VertexNormals).unwrap();
    let vertex_normals = cube.vertex_normals();
    let corner_vertices = cube.faces.iter().flat_map(|f| f.indices.iter());
    for (&v, corner) in corner_vertices.zip(&corners) {
        // every corner holds an axis-aligned face normal, every vertex the diagonal
        assert!(!approx_vec(&vertex_normals[v], corner, 1e-3));
        assert!(is_unit(&vertex_normals[v]));
    }

    let center = nalgebra::Point3::new(1.0, 1.0, 1.0);
    for v in &cube.vertices {
        assert_vec_eq(&v.normal, &(v.pos - center).normalize(), 1e-9);
    }
}

#[test]
fn converting_to_the_current_mode_writes_nothing() {
    let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
    scramble_vertex_normals(&mut cube);
    let before = cube.vertex_normals();
    let outcome = convert_mode(&mut cube, NormalMode::VertexNormals).unwrap();
    assert_eq!(outcome.changed, 0);
    assert_eq!(cube.vertex_normals(), before);
}

#[test]
fn cancelled_seam_corners_keep_the_vertex_normal() {
    // flip the right face of a 2×1 strip; vertices 1 and 4 sit on the seam and get one
    // corner from each side
    let mut strip = EditMesh::grid("strip", 2, 1);
    convert_mode(&mut strip, NormalMode::SplitNormals).unwrap();
    strip.select_faces(&[1]);
    generate(
        &mut strip,
        Generator::Flip,
        &GenerateParams::default().selected_only(true),
    )
    .unwrap();
    let up = nalgebra::Vector3::z();
    assert_vec_eq(&strip.corner_normals()[4], &-up, 1e-12);

    convert_mode(&mut strip, NormalMode::VertexNormals).unwrap();
    let normals = strip.vertex_normals();
    assert!(normals.iter().all(is_unit), "{:?}", normals);
    for v in [0, 1, 3, 4] {
        assert_vec_eq(&normals[v], &up, 1e-12);
    }
    for v in [2, 5] {
        assert_vec_eq(&normals[v], &-up, 1e-12);
    }
}
