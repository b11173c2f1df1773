//! The boundary between the normals engine and the application that owns the mesh.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Which normal representation a mesh currently carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalMode {
    /// One normal per vertex, shared by every face touching it.
    #[default]
    VertexNormals,
    /// One independent normal per face corner.
    SplitNormals,
}

impl NormalMode {
    pub const fn is_split(self) -> bool {
        matches!(self, NormalMode::SplitNormals)
    }
}

/// Capabilities a host mesh must expose so normals can be read, computed and written back.
///
/// Corners are always addressed in one fixed order: faces in mesh order and, within a
/// face, vertices in winding order. [`corner_normals`](NormalHost::corner_normals) returns
/// and [`set_corner_normals`](NormalHost::set_corner_normals) expects exactly that order.
///
/// The engine never holds on to a host beyond a single operation and only writes through
/// the `set_*` and [`clear_sharp_edges`](NormalHost::clear_sharp_edges) methods.
pub trait NormalHost {
    /// Identity used to tell source meshes apart from the destination during transfer.
    ///
    /// Must be unique among the meshes passed to one transfer: a source whose name matches
    /// the destination or an earlier source is skipped.
    fn name(&self) -> &str;

    fn mode(&self) -> NormalMode;
    fn set_mode(&mut self, mode: NormalMode);

    fn positions(&self) -> Vec<Point3<Real>>;
    fn vertex_selection(&self) -> Vec<bool>;

    /// Vertex indices of each face, in winding order.
    fn faces(&self) -> Vec<Vec<usize>>;
    fn face_selection(&self) -> Vec<bool>;

    /// Fixed reference point the bent generator aims away from.
    fn cursor(&self) -> Point3<Real>;

    fn vertex_normals(&self) -> Vec<Vector3<Real>>;

    /// (Re)compute the current per-corner normals in stable face/corner order.
    fn corner_normals(&self) -> Vec<Vector3<Real>>;

    /// Replace every vertex normal. `normals.len()` equals the vertex count.
    fn set_vertex_normals(&mut self, normals: &[Vector3<Real>]);

    /// Replace every corner normal. `normals.len()` equals the total corner count.
    fn set_corner_normals(&mut self, normals: &[Vector3<Real>]);

    /// Drop any sharp-edge shading hints; called before every split-normal write.
    fn clear_sharp_edges(&mut self);

    fn vertex_count(&self) -> usize {
        self.positions().len()
    }

    fn corner_count(&self) -> usize {
        self.faces().iter().map(Vec::len).sum()
    }
}
