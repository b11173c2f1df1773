//! Test support library
//! Provides various helper functions & fixtures for tests.
#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use normals_editor::{EditMesh, NormalHost, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise comparison of two vectors.
pub fn approx_vec(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Panics with both vectors if they differ by more than `eps`.
pub fn assert_vec_eq(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) {
    assert!(approx_vec(a, b, eps), "expected {:?}, got {:?}", b, a);
}

pub fn is_unit(v: &Vector3<Real>) -> bool {
    approx_eq(v.norm(), 1.0, 1e-9)
}

/// Unit triangle in the plane `z = height`, facing +Z.
pub fn flat_triangle(name: &str, height: Real) -> EditMesh {
    EditMesh::triangle(
        name,
        Point3::new(0.0, 0.0, height),
        Point3::new(1.0, 0.0, height),
        Point3::new(0.0, 1.0, height),
    )
}

/// Unit triangle in the plane `x = offset`, facing +X.
pub fn wall_triangle(name: &str, offset: Real) -> EditMesh {
    EditMesh::triangle(
        name,
        Point3::new(offset, 0.0, 0.0),
        Point3::new(offset, 1.0, 0.0),
        Point3::new(offset, 0.0, 1.0),
    )
}

/// Overwrite every vertex normal with a fixed, deliberately "wrong" direction, so tests
/// can tell recomputed normals from untouched ones.
pub fn scramble_vertex_normals(mesh: &mut EditMesh) {
    let tilted = Vector3::new(1.0, 2.0, 3.0).normalize();
    let count = mesh.vertex_count();
    mesh.set_vertex_normals(&vec![tilted; count]);
}

/// Same as [`scramble_vertex_normals`] for the custom corner store.
pub fn scramble_corner_normals(mesh: &mut EditMesh) {
    let tilted = Vector3::new(-3.0, 1.0, 2.0).normalize();
    let count = mesh.corner_count();
    mesh.set_corner_normals(&vec![tilted; count]);
}
