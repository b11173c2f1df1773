//! Default normals: reset toward the mesh's natural shading.

use super::traits::NormalGenerator;
use crate::float_types::Real;
use crate::params::GenerateParams;
use crate::topology::MeshTopology;
use crate::vector::try_normalize;
use crate::view::NormalView;
use nalgebra::Vector3;

/// Blends every point toward its vertex's angle-weighted natural normal
/// ([`MeshTopology::natural_vertex_normals`]). With a ratio below one part of any
/// earlier custom edit survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormals;

impl NormalGenerator for DefaultNormals {
    fn name(&self) -> &'static str {
        "default"
    }

    fn targets(
        &self,
        view: &NormalView,
        topology: &MeshTopology,
        _params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>> {
        let natural = topology.natural_vertex_normals();
        view.points
            .iter()
            .map(|p| try_normalize(&natural[p.vertex]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EditMesh;
    use crate::traits::{NormalHost, NormalMode};
    use crate::view::NormalArray;

    #[test]
    fn resets_custom_corner_normals() {
        let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
        let natural = cube.vertex_normals();
        cube.set_mode(NormalMode::SplitNormals);
        cube.set_corner_normals(&vec![Vector3::x(); 24]);

        let topo = MeshTopology::from_host(&cube).unwrap();
        let view = NormalView::build(&cube, &topo, true).unwrap();
        let result = DefaultNormals
            .generate(&view, &topo, &GenerateParams::default())
            .unwrap();

        let NormalArray::PerCorner(faces) = result else {
            panic!("split mode must produce corner normals");
        };
        for (face, normals) in cube.faces.iter().zip(&faces) {
            for (&v, n) in face.indices.iter().zip(normals) {
                assert!((n - natural[v]).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn partial_ratio_keeps_part_of_edit() {
        let mut quad = EditMesh::grid("grid", 1, 1);
        quad.vertices[0].normal = Vector3::x();
        let topo = MeshTopology::from_host(&quad).unwrap();
        let view = NormalView::build(&quad, &topo, true).unwrap();
        let result = DefaultNormals
            .generate(&view, &topo, &GenerateParams::with_ratio(0.5))
            .unwrap();
        let expected = Vector3::new(1.0, 0.0, 1.0).normalize();
        assert!((result.flatten()[0] - expected).norm() < 1e-9);
    }
}
