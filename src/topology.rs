//! Per-operation topology snapshot: face normals and areas, vertex→face adjacency,
//! corner offsets and boundary classification.
//!
//! Built fresh for every operation from the host's current state; nothing here is cached
//! across calls.

use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::traits::NormalHost;
use crate::vector::{corner_angle, newell_normal, try_normalize};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashMap;

/// **Indexed connectivity for normal computation**
///
/// ## **Derived data**
/// - **Face normals**: Newell's method, so non-planar and concave n-gons still get a
///   sensible averaged direction. Degenerate faces get a zero normal.
/// - **Face areas**: half the length of the Newell vector.
/// - **Vertex→face adjacency**: each incident face listed once, in ascending order, even
///   when a face references the vertex more than once.
/// - **Corner offsets**: `corner_offsets[f]` is the flat index of face `f`'s first corner;
///   the last entry is the total corner count.
/// - **Boundary vertices**: vertices on at least one edge used by exactly one face.
#[derive(Debug, Clone)]
pub struct MeshTopology {
    pub positions: Vec<Point3<Real>>,
    pub faces: Vec<Vec<usize>>,
    pub face_normals: Vec<Vector3<Real>>,
    pub face_areas: Vec<Real>,
    pub vertex_faces: Vec<Vec<usize>>,
    pub corner_offsets: Vec<usize>,
    pub boundary_vertices: Vec<bool>,
}

impl MeshTopology {
    /// Build from raw arrays. Every face index must be `< positions.len()`;
    /// use [`MeshTopology::from_host`] for unchecked input.
    pub fn new(positions: Vec<Point3<Real>>, faces: Vec<Vec<usize>>) -> Self {
        let vertex_count = positions.len();

        let mut face_normals = Vec::with_capacity(faces.len());
        let mut face_areas = Vec::with_capacity(faces.len());
        for face in &faces {
            let newell = newell_normal(face.iter().map(|&i| &positions[i]));
            face_areas.push(newell.norm() * 0.5);
            face_normals.push(try_normalize(&newell).unwrap_or_else(Vector3::zeros));
        }

        let mut vertex_faces: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
        for (face_idx, face) in faces.iter().enumerate() {
            for &v in face {
                // faces are visited in ascending order, so a repeat can only be the last entry
                if vertex_faces[v].last() != Some(&face_idx) {
                    vertex_faces[v].push(face_idx);
                }
            }
        }

        let mut corner_offsets = Vec::with_capacity(faces.len() + 1);
        let mut offset = 0;
        for face in &faces {
            corner_offsets.push(offset);
            offset += face.len();
        }
        corner_offsets.push(offset);

        let mut edge_use: HashMap<(usize, usize), usize> = HashMap::new();
        for face in &faces {
            let n = face.len();
            for i in 0..n {
                let (a, b) = (face[i], face[(i + 1) % n]);
                if a != b {
                    *edge_use.entry((a.min(b), a.max(b))).or_insert(0) += 1;
                }
            }
        }
        let mut boundary_vertices = vec![false; vertex_count];
        for (&(a, b), &count) in &edge_use {
            if count == 1 {
                boundary_vertices[a] = true;
                boundary_vertices[b] = true;
            }
        }

        MeshTopology {
            positions,
            faces,
            face_normals,
            face_areas,
            vertex_faces,
            corner_offsets,
            boundary_vertices,
        }
    }

    /// Snapshot a host's geometry, rejecting faces that reference missing vertices.
    pub fn from_host<H: NormalHost + ?Sized>(host: &H) -> Result<Self, NormalsError> {
        let positions = host.positions();
        let faces = host.faces();
        let vertex_count = positions.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&vertex) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(NormalsError::FaceIndexOutOfRange {
                    face,
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(Self::new(positions, faces))
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn corner_count(&self) -> usize {
        self.corner_offsets.last().copied().unwrap_or(0)
    }

    /// Flat index of `corner` within `face`.
    #[inline]
    pub fn corner_index(&self, face: usize, corner: usize) -> usize {
        self.corner_offsets[face] + corner
    }

    /// **Geometrically natural vertex normals**
    ///
    /// Each incident face contributes its unit normal weighted by the interior angle the
    /// face makes at the vertex:
    /// ```text
    /// n_v = normalize( Σ_f  θ_f(v) · n_f )
    /// ```
    /// Angle weighting makes the result independent of how a surface is triangulated.
    /// Vertices without faces (or whose faces are all degenerate) get a zero vector.
    pub fn natural_vertex_normals(&self) -> Vec<Vector3<Real>> {
        let mut sums = vec![Vector3::zeros(); self.vertex_count()];
        for (face_idx, face) in self.faces.iter().enumerate() {
            let n = face.len();
            let face_normal = self.face_normals[face_idx];
            for i in 0..n {
                let prev = &self.positions[face[(i + n - 1) % n]];
                let curr = &self.positions[face[i]];
                let next = &self.positions[face[(i + 1) % n]];
                sums[face[i]] += face_normal * corner_angle(prev, curr, next);
            }
        }
        sums.iter()
            .map(|s| try_normalize(s).unwrap_or_else(Vector3::zeros))
            .collect()
    }
}
