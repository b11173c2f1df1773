//! Single write-back of a finished normal array into the host mesh.

use crate::errors::NormalsError;
use crate::traits::NormalHost;
use crate::view::NormalArray;

/// Write `normals` into the host's store matching the array's shape.
///
/// The array length is checked against the host before anything is written, so a
/// mismatched array leaves the host untouched. Corner writes clear the host's
/// sharp-edge hints first.
pub fn apply<H: NormalHost + ?Sized>(host: &mut H, normals: &NormalArray) -> Result<(), NormalsError> {
    match normals {
        NormalArray::PerVertex(vertex_normals) => {
            let expected = host.vertex_count();
            if vertex_normals.len() != expected {
                return Err(NormalsError::NormalCountMismatch {
                    expected,
                    found: vertex_normals.len(),
                });
            }
            host.set_vertex_normals(vertex_normals);
        },
        NormalArray::PerCorner(faces) => {
            let face_sizes: Vec<usize> = host.faces().iter().map(Vec::len).collect();
            let expected: usize = face_sizes.iter().sum();
            if faces.len() != face_sizes.len()
                || faces.iter().zip(&face_sizes).any(|(f, &size)| f.len() != size)
            {
                return Err(NormalsError::NormalCountMismatch {
                    expected,
                    found: normals.len(),
                });
            }
            host.clear_sharp_edges();
            host.set_corner_normals(&normals.flatten());
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EditMesh;
    use crate::traits::NormalMode;
    use nalgebra::Vector3;

    #[test]
    fn mismatched_corner_layout_is_rejected_without_writing() {
        let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
        cube.set_mode(NormalMode::SplitNormals);
        cube.mark_sharp_edge(0, 1);
        // right total, wrong per-face split
        let mut faces = vec![vec![Vector3::x(); 4]; 6];
        faces[0].pop();
        faces[1].push(Vector3::x());
        let err = apply(&mut cube, &NormalArray::PerCorner(faces)).unwrap_err();
        assert_eq!(err, NormalsError::NormalCountMismatch { expected: 24, found: 24 });
        assert!(!cube.has_custom_corner_normals());
        assert!(cube.is_sharp_edge(0, 1));
    }

    #[test]
    fn corner_write_clears_sharp_edges() {
        let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
        cube.set_mode(NormalMode::SplitNormals);
        cube.mark_sharp_edge(0, 1);
        apply(&mut cube, &NormalArray::PerCorner(vec![vec![Vector3::y(); 4]; 6])).unwrap();
        assert!(!cube.is_sharp_edge(0, 1));
        assert_eq!(cube.corner_normals()[23], Vector3::y());
    }

    #[test]
    fn vertex_write() {
        let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
        let err = apply(&mut cube, &NormalArray::PerVertex(vec![Vector3::y(); 7])).unwrap_err();
        assert_eq!(err, NormalsError::NormalCountMismatch { expected: 8, found: 7 });
        apply(&mut cube, &NormalArray::PerVertex(vec![Vector3::y(); 8])).unwrap();
        assert!(cube.vertex_normals().iter().all(|n| *n == Vector3::y()));
    }
}
