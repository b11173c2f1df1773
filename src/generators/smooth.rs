//! Averaged face normals: plain (smooth) and area-weighted.

use super::traits::{NormalGenerator, face_passes};
use crate::float_types::Real;
use crate::params::GenerateParams;
use crate::topology::MeshTopology;
use crate::vector::try_normalize;
use crate::view::NormalView;
use nalgebra::Vector3;

/// How incident face normals are weighted before averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceWeighting {
    /// Every incident face counts once.
    #[default]
    Uniform,
    /// Each face normal is scaled by the face's area.
    Area,
}

/// **Averaged incident face normals**
///
/// For a vertex `v` with distinct incident faces `F(v)` passing the selection filter:
/// ```text
/// n_v = normalize( Σ_{f∈F(v)}  w_f · n_f )      w_f = 1  or  area(f)
/// ```
/// A face counts once per vertex even if several of its corners reference that vertex.
/// In split mode every corner of `v` receives the same target, taken over all faces
/// touching `v` rather than only those sharing the corner's edges.
///
/// When `selected_only` is set only selected faces contribute; a vertex with no
/// contributing face keeps its normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothNormals {
    pub weighting: FaceWeighting,
}

impl SmoothNormals {
    pub const fn uniform() -> Self {
        SmoothNormals {
            weighting: FaceWeighting::Uniform,
        }
    }

    pub const fn area_weighted() -> Self {
        SmoothNormals {
            weighting: FaceWeighting::Area,
        }
    }

    fn averaged_vertex_normals(
        &self,
        view: &NormalView,
        topology: &MeshTopology,
        params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>> {
        topology
            .vertex_faces
            .iter()
            .map(|faces| {
                let sum = faces
                    .iter()
                    .filter(|&&f| face_passes(view, params, f))
                    .fold(Vector3::zeros(), |acc, &f| {
                        let weight = match self.weighting {
                            FaceWeighting::Uniform => 1.0,
                            FaceWeighting::Area => topology.face_areas[f],
                        };
                        acc + topology.face_normals[f] * weight
                    });
                try_normalize(&sum)
            })
            .collect()
    }
}

impl NormalGenerator for SmoothNormals {
    fn name(&self) -> &'static str {
        match self.weighting {
            FaceWeighting::Uniform => "smooth",
            FaceWeighting::Area => "weighted-area",
        }
    }

    fn targets(
        &self,
        view: &NormalView,
        topology: &MeshTopology,
        params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>> {
        let per_vertex = self.averaged_vertex_normals(view, topology, params);
        view.points.iter().map(|p| per_vertex[p.vertex]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EditMesh;

    /// A large flat quad next to a small quad tilted up by 45°, sharing the edge 1–2.
    fn hinge() -> EditMesh {
        EditMesh::from_positions(
            "hinge",
            &[
                [-4.0, 0.0, 0.0],
                [0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-4.0, 1.0, 0.0],
                [0.5, 0.0, 0.5],
                [0.5, 1.0, 0.5],
            ],
            vec![vec![0, 1, 2, 3], vec![1, 4, 5, 2]],
        )
        .unwrap()
    }

    #[test]
    fn uniform_average_is_the_bisector() {
        let mesh = hinge();
        let topo = MeshTopology::from_host(&mesh).unwrap();
        let view = NormalView::build(&mesh, &topo, true).unwrap();
        let result = SmoothNormals::uniform()
            .generate(&view, &topo, &GenerateParams::default())
            .unwrap()
            .flatten();
        let expected = (topo.face_normals[0] + topo.face_normals[1]).normalize();
        assert!((result[1] - expected).norm() < 1e-9);
        // vertices of one face only get that face's normal
        assert!((result[0] - Vector3::z()).norm() < 1e-9);
    }

    #[test]
    fn area_weighting_favours_the_larger_face() {
        let mesh = hinge();
        let topo = MeshTopology::from_host(&mesh).unwrap();
        let view = NormalView::build(&mesh, &topo, true).unwrap();
        let params = GenerateParams::default();
        let uniform = SmoothNormals::uniform().generate(&view, &topo, &params).unwrap().flatten();
        let weighted = SmoothNormals::area_weighted()
            .generate(&view, &topo, &params)
            .unwrap()
            .flatten();
        let flat = Vector3::z();
        assert!(weighted[1].dot(&flat) > uniform[1].dot(&flat));
        assert!((weighted[1].norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn only_selected_faces_contribute() {
        let mut mesh = hinge();
        mesh.select_faces(&[0]);
        let topo = MeshTopology::from_host(&mesh).unwrap();
        let view = NormalView::build(&mesh, &topo, true).unwrap();
        let before = mesh.vertices[4].normal;
        let result = SmoothNormals::uniform()
            .generate(&view, &topo, &GenerateParams::default().selected_only(true))
            .unwrap()
            .flatten();
        // the shared vertex now only sees the flat face
        assert!((result[1] - Vector3::z()).norm() < 1e-9);
        // unselected vertices pass through
        assert_eq!(result[4], before);
    }
}
