//! `EditMesh`: an in-memory polygon mesh implementing [`NormalHost`]

use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::topology::MeshTopology;
use crate::traits::{NormalHost, NormalMode};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "hashmap")]
use hashbrown::HashSet;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashSet;

pub mod face;
pub mod vertex;

/// Simple shape builders for EditMesh
pub mod shapes;

pub use face::EditFace;
pub use vertex::EditVertex;

/// A polygon mesh with shared vertices, per-vertex selection and an optional store of
/// custom per-corner normals.
///
/// This is the reference host for the normals engine: it owns storage and topology while
/// the engine only reads snapshots from it and writes whole normal arrays back.
#[derive(Debug, Clone)]
pub struct EditMesh {
    pub name: String,
    pub vertices: Vec<EditVertex>,
    pub faces: Vec<EditFace>,
    /// Reference point for bent normals (the "3D cursor")
    pub cursor: Point3<Real>,
    mode: NormalMode,
    /// Custom corner normals in face/corner order. `None` means every corner shows its
    /// vertex normal.
    custom_corner_normals: Option<Vec<Vector3<Real>>>,
    /// Edges (smaller index first) flagged as shading discontinuities
    sharp_edges: HashSet<(usize, usize)>,
}

impl EditMesh {
    /// Build a mesh from already-constructed vertices and faces. Normals are taken as given.
    pub fn new(name: impl Into<String>, vertices: Vec<EditVertex>, faces: Vec<EditFace>) -> Self {
        EditMesh {
            name: name.into(),
            vertices,
            faces,
            cursor: Point3::origin(),
            mode: NormalMode::VertexNormals,
            custom_corner_normals: None,
            sharp_edges: HashSet::new(),
        }
    }

    /// Build a mesh from raw positions and face index lists, then compute geometric vertex
    /// normals. Fails if a face references a vertex that does not exist.
    pub fn from_positions(
        name: impl Into<String>,
        positions: &[[Real; 3]],
        faces: Vec<Vec<usize>>,
    ) -> Result<Self, NormalsError> {
        let vertices = positions
            .iter()
            .map(|p| EditVertex::at(Point3::new(p[0], p[1], p[2])))
            .collect();
        let faces = faces.into_iter().map(EditFace::new).collect();
        let mut mesh = EditMesh::new(name, vertices, faces);
        mesh.validate()?;
        mesh.recalculate_vertex_normals();
        Ok(mesh)
    }

    pub fn with_cursor(mut self, cursor: Point3<Real>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Check that every face index is in range.
    pub fn validate(&self) -> Result<(), NormalsError> {
        let vertex_count = self.vertices.len();
        for (face, f) in self.faces.iter().enumerate() {
            if let Some(&vertex) = f.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(NormalsError::FaceIndexOutOfRange {
                    face,
                    vertex,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Replace vertex normals with the angle-weighted average of incident face normals.
    pub fn recalculate_vertex_normals(&mut self) {
        let topology = MeshTopology::new(self.positions(), self.faces());
        let natural = topology.natural_vertex_normals();
        for (vertex, normal) in self.vertices.iter_mut().zip(natural) {
            vertex.normal = normal;
        }
    }

    /// Select or deselect every vertex and face.
    pub fn select_all(&mut self, selected: bool) {
        self.vertices.iter_mut().for_each(|v| v.selected = selected);
        self.faces.iter_mut().for_each(|f| f.selected = selected);
    }

    /// Select the given vertices, and every face whose vertices are now all selected.
    pub fn select_vertices(&mut self, indices: &[usize]) {
        for &i in indices {
            if let Some(v) = self.vertices.get_mut(i) {
                v.selected = true;
            }
        }
        for face in &mut self.faces {
            face.selected = face.indices.iter().all(|&i| self.vertices[i].selected);
        }
    }

    /// Select the given faces together with their vertices.
    pub fn select_faces(&mut self, indices: &[usize]) {
        for &i in indices {
            if let Some(face) = self.faces.get_mut(i) {
                face.selected = true;
                for &v in &face.indices {
                    self.vertices[v].selected = true;
                }
            }
        }
    }

    /// Flag the edge `a`–`b` as a shading discontinuity.
    pub fn mark_sharp_edge(&mut self, a: usize, b: usize) {
        self.sharp_edges.insert((a.min(b), a.max(b)));
    }

    pub fn is_sharp_edge(&self, a: usize, b: usize) -> bool {
        self.sharp_edges.contains(&(a.min(b), a.max(b)))
    }

    pub fn has_custom_corner_normals(&self) -> bool {
        self.custom_corner_normals.is_some()
    }
}

impl NormalHost for EditMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> NormalMode {
        self.mode
    }

    fn set_mode(&mut self, mode: NormalMode) {
        if mode == NormalMode::VertexNormals {
            self.custom_corner_normals = None;
        }
        self.mode = mode;
    }

    fn positions(&self) -> Vec<Point3<Real>> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    fn vertex_selection(&self) -> Vec<bool> {
        self.vertices.iter().map(|v| v.selected).collect()
    }

    fn faces(&self) -> Vec<Vec<usize>> {
        self.faces.iter().map(|f| f.indices.clone()).collect()
    }

    fn face_selection(&self) -> Vec<bool> {
        self.faces.iter().map(|f| f.selected).collect()
    }

    fn cursor(&self) -> Point3<Real> {
        self.cursor
    }

    fn vertex_normals(&self) -> Vec<Vector3<Real>> {
        self.vertices.iter().map(|v| v.normal).collect()
    }

    fn corner_normals(&self) -> Vec<Vector3<Real>> {
        let corner_count = self.corner_count();
        match &self.custom_corner_normals {
            Some(custom) if custom.len() == corner_count => custom.clone(),
            _ => self
                .faces
                .iter()
                .flat_map(|f| f.indices.iter().map(|&i| self.vertices[i].normal))
                .collect(),
        }
    }

    fn set_vertex_normals(&mut self, normals: &[Vector3<Real>]) {
        for (vertex, normal) in self.vertices.iter_mut().zip(normals) {
            vertex.normal = *normal;
        }
    }

    fn set_corner_normals(&mut self, normals: &[Vector3<Real>]) {
        self.custom_corner_normals = Some(normals.to_vec());
    }

    fn clear_sharp_edges(&mut self) {
        self.sharp_edges.clear();
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn corner_count(&self) -> usize {
        self.faces.iter().map(EditFace::len).sum()
    }
}
