//! Small primitive meshes, mostly used to exercise the normal tools

use super::{EditFace, EditMesh, EditVertex};
use crate::float_types::Real;
use nalgebra::Point3;

impl EditMesh {
    /// Single triangle `a, b, c` (counter-clockwise seen from the normal side).
    pub fn triangle(
        name: impl Into<String>,
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
    ) -> EditMesh {
        Self::polygon(name, &[a, b, c])
    }

    /// Single quad face `a, b, c, d`.
    pub fn quad(
        name: impl Into<String>,
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
        d: Point3<Real>,
    ) -> EditMesh {
        Self::polygon(name, &[a, b, c, d])
    }

    /// One n-gon face over `points` in order.
    pub fn polygon(name: impl Into<String>, points: &[Point3<Real>]) -> EditMesh {
        let vertices = points.iter().copied().map(EditVertex::at).collect();
        let faces = vec![EditFace::new((0..points.len()).collect())];
        let mut mesh = EditMesh::new(name, vertices, faces);
        mesh.recalculate_vertex_normals();
        mesh
    }

    /// **Axis-aligned box with shared corners**
    ///
    /// ```text
    ///     4-------5
    ///    /|      /|
    ///   0-------1 |
    ///   | |     | |
    ///   | 7-----|-6
    ///   |/      |/
    ///   3-------2
    /// ```
    /// Eight shared vertices, six quads wound counter-clockwise from outside, so every
    /// vertex is touched by three faces and every corner normal of a freshly split box
    /// starts out as the diagonal vertex normal.
    pub fn cuboid(name: impl Into<String>, width: Real, length: Real, height: Real) -> EditMesh {
        let vertices = vec![
            EditVertex::at(Point3::new(0.0, 0.0, 0.0)),          // 0: origin
            EditVertex::at(Point3::new(width, 0.0, 0.0)),        // 1: +X
            EditVertex::at(Point3::new(width, length, 0.0)),     // 2: +X+Y
            EditVertex::at(Point3::new(0.0, length, 0.0)),       // 3: +Y
            EditVertex::at(Point3::new(0.0, 0.0, height)),       // 4: +Z
            EditVertex::at(Point3::new(width, 0.0, height)),     // 5: +X+Z
            EditVertex::at(Point3::new(width, length, height)),  // 6: +X+Y+Z
            EditVertex::at(Point3::new(0.0, length, height)),    // 7: +Y+Z
        ];

        let faces = vec![
            EditFace::new(vec![0, 3, 2, 1]), // Bottom face
            EditFace::new(vec![4, 5, 6, 7]), // Top face
            EditFace::new(vec![0, 1, 5, 4]), // Front face
            EditFace::new(vec![3, 7, 6, 2]), // Back face
            EditFace::new(vec![0, 4, 7, 3]), // Left face
            EditFace::new(vec![1, 2, 6, 5]), // Right face
        ];

        let mut mesh = EditMesh::new(name, vertices, faces);
        mesh.recalculate_vertex_normals();
        mesh
    }

    /// Flat `cols × rows` grid of unit quads in the XY plane, facing +Z.
    pub fn grid(name: impl Into<String>, cols: usize, rows: usize) -> EditMesh {
        let mut vertices = Vec::with_capacity((cols + 1) * (rows + 1));
        for y in 0..=rows {
            for x in 0..=cols {
                vertices.push(EditVertex::at(Point3::new(x as Real, y as Real, 0.0)));
            }
        }

        let stride = cols + 1;
        let mut faces = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                let i = y * stride + x;
                faces.push(EditFace::new(vec![i, i + 1, i + 1 + stride, i + stride]));
            }
        }

        let mut mesh = EditMesh::new(name, vertices, faces);
        mesh.recalculate_vertex_normals();
        mesh
    }
}
