//! Read path shared by every generator and by transfer: a value-typed snapshot of the
//! normal-bearing points of a mesh (vertices in vertex mode, corners in split mode).

use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::topology::MeshTopology;
use crate::traits::{NormalHost, NormalMode};
use nalgebra::{Point3, Vector3};

/// One normal-bearing point: a vertex in vertex mode, a face corner in split mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalPoint {
    pub position: Point3<Real>,
    pub normal: Vector3<Real>,
    pub selected: bool,
    /// Vertex this point is (or references)
    pub vertex: usize,
    /// Owning face for corners, `None` for vertices
    pub face: Option<usize>,
}

/// A finished normal array in the shape of the mesh mode it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalArray {
    /// One normal per vertex, indexed by vertex
    PerVertex(Vec<Vector3<Real>>),
    /// One normal per corner, indexed `[face][corner_in_face]`
    PerCorner(Vec<Vec<Vector3<Real>>>),
}

impl NormalArray {
    pub const fn mode(&self) -> NormalMode {
        match self {
            NormalArray::PerVertex(_) => NormalMode::VertexNormals,
            NormalArray::PerCorner(_) => NormalMode::SplitNormals,
        }
    }

    /// Total number of normals.
    pub fn len(&self) -> usize {
        match self {
            NormalArray::PerVertex(normals) => normals.len(),
            NormalArray::PerCorner(faces) => faces.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every normal in storage order: vertex order, or faces in mesh order with corners in
    /// winding order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Vector3<Real>> + '_> {
        match self {
            NormalArray::PerVertex(normals) => Box::new(normals.iter()),
            NormalArray::PerCorner(faces) => Box::new(faces.iter().flatten()),
        }
    }

    /// Flat copy in storage order, as expected by the host's write methods.
    pub fn flatten(&self) -> Vec<Vector3<Real>> {
        self.iter().copied().collect()
    }

    /// Split a flat corner array into per-face groups of `face_sizes[f]` corners.
    pub fn nest_corners(
        flat: Vec<Vector3<Real>>,
        face_sizes: &[usize],
    ) -> Result<NormalArray, NormalsError> {
        let expected: usize = face_sizes.iter().sum();
        if flat.len() != expected {
            return Err(NormalsError::NormalCountMismatch {
                expected,
                found: flat.len(),
            });
        }
        let mut flat = flat.into_iter();
        let nested = face_sizes
            .iter()
            .map(|&size| flat.by_ref().take(size).collect())
            .collect();
        Ok(NormalArray::PerCorner(nested))
    }
}

/// **Snapshot of a mesh's normal-bearing points**
///
/// Points are stored flat in the mesh's fixed order (vertex order, or face/corner order
/// in split mode) together with the face sizes needed to restore the nested per-face
/// shape. Generators work on `points` without caring which mode produced them; only
/// [`NormalView::with_normals`] converts back to the mode-specific [`NormalArray`].
#[derive(Debug, Clone)]
pub struct NormalView {
    pub mode: NormalMode,
    pub points: Vec<NormalPoint>,
    /// Face selection flags, used by generators that filter incident faces
    pub face_selected: Vec<bool>,
    /// Corner count of each face
    pub face_sizes: Vec<usize>,
    /// The host's reference point for bent normals
    pub cursor: Point3<Real>,
}

impl NormalView {
    /// Build a view in the host's current mode.
    ///
    /// In split mode the host's corner normals are recomputed first and corner selection
    /// follows `select_by_face`: the owning face's flag when `true`, the referenced
    /// vertex's flag otherwise.
    ///
    /// Fails with [`NormalsError::EmptyMesh`] for meshes without vertices or faces; callers
    /// treat that as a no-op.
    pub fn build<H: NormalHost + ?Sized>(
        host: &H,
        topology: &MeshTopology,
        select_by_face: bool,
    ) -> Result<NormalView, NormalsError> {
        Self::build_as(host, topology, host.mode(), select_by_face)
    }

    /// Build a view in an explicit `mode`, regardless of the host's current one.
    pub fn build_as<H: NormalHost + ?Sized>(
        host: &H,
        topology: &MeshTopology,
        mode: NormalMode,
        select_by_face: bool,
    ) -> Result<NormalView, NormalsError> {
        if topology.vertex_count() == 0 || topology.face_count() == 0 {
            return Err(NormalsError::EmptyMesh {
                vertices: topology.vertex_count(),
                faces: topology.face_count(),
            });
        }

        let vertex_selected = host.vertex_selection();
        let face_selected = host.face_selection();
        let is_vertex_selected = |v: usize| vertex_selected.get(v).copied().unwrap_or(false);
        let is_face_selected = |f: usize| face_selected.get(f).copied().unwrap_or(false);

        let points = match mode {
            NormalMode::VertexNormals => {
                let normals = host.vertex_normals();
                if normals.len() != topology.vertex_count() {
                    return Err(NormalsError::NormalCountMismatch {
                        expected: topology.vertex_count(),
                        found: normals.len(),
                    });
                }
                topology
                    .positions
                    .iter()
                    .zip(normals)
                    .enumerate()
                    .map(|(vertex, (&position, normal))| NormalPoint {
                        position,
                        normal,
                        selected: is_vertex_selected(vertex),
                        vertex,
                        face: None,
                    })
                    .collect()
            },
            NormalMode::SplitNormals => {
                let normals = host.corner_normals();
                if normals.len() != topology.corner_count() {
                    return Err(NormalsError::NormalCountMismatch {
                        expected: topology.corner_count(),
                        found: normals.len(),
                    });
                }
                let mut points = Vec::with_capacity(normals.len());
                let mut normals = normals.into_iter();
                for (face, indices) in topology.faces.iter().enumerate() {
                    for (&vertex, normal) in indices.iter().zip(normals.by_ref()) {
                        let selected = if select_by_face {
                            is_face_selected(face)
                        } else {
                            is_vertex_selected(vertex)
                        };
                        points.push(NormalPoint {
                            position: topology.positions[vertex],
                            normal,
                            selected,
                            vertex,
                            face: Some(face),
                        });
                    }
                }
                points
            },
        };

        Ok(NormalView {
            mode,
            points,
            face_selected: (0..topology.face_count()).map(is_face_selected).collect(),
            face_sizes: topology.faces.iter().map(Vec::len).collect(),
            cursor: host.cursor(),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.points.iter().filter(|p| p.selected).count()
    }

    /// The current normals, in the view's shape.
    pub fn current_normals(&self) -> NormalArray {
        match self.mode {
            NormalMode::VertexNormals => {
                NormalArray::PerVertex(self.points.iter().map(|p| p.normal).collect())
            },
            NormalMode::SplitNormals => {
                let mut points = self.points.iter();
                NormalArray::PerCorner(
                    self.face_sizes
                        .iter()
                        .map(|&size| points.by_ref().take(size).map(|p| p.normal).collect())
                        .collect(),
                )
            },
        }
    }

    /// Package one new normal per point into the view's shape.
    pub fn with_normals(&self, normals: Vec<Vector3<Real>>) -> Result<NormalArray, NormalsError> {
        if normals.len() != self.points.len() {
            return Err(NormalsError::NormalCountMismatch {
                expected: self.points.len(),
                found: normals.len(),
            });
        }
        match self.mode {
            NormalMode::VertexNormals => Ok(NormalArray::PerVertex(normals)),
            NormalMode::SplitNormals => NormalArray::nest_corners(normals, &self.face_sizes),
        }
    }
}
