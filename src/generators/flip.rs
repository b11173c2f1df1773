//! Flip: negate normals.

use super::traits::NormalGenerator;
use crate::float_types::Real;
use crate::params::GenerateParams;
use crate::topology::MeshTopology;
use crate::view::NormalView;
use nalgebra::Vector3;

/// Negates every (selected) normal outright; the ratio is not applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipNormals;

impl NormalGenerator for FlipNormals {
    fn name(&self) -> &'static str {
        "flip"
    }

    fn blends(&self) -> bool {
        false
    }

    fn targets(
        &self,
        view: &NormalView,
        _topology: &MeshTopology,
        _params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>> {
        view.points.iter().map(|p| Some(-p.normal)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EditMesh;

    #[test]
    fn flips_only_the_selection() {
        let mut grid = EditMesh::grid("grid", 1, 1);
        grid.select_vertices(&[0, 2]);
        let topo = MeshTopology::from_host(&grid).unwrap();
        let view = NormalView::build(&grid, &topo, true).unwrap();
        let before: Vec<Vector3<Real>> = grid.vertices.iter().map(|v| v.normal).collect();
        let result = FlipNormals
            .generate(&view, &topo, &GenerateParams::default().selected_only(true))
            .unwrap()
            .flatten();
        assert_eq!(result[0], -before[0]);
        assert_eq!(result[1], before[1]);
        assert_eq!(result[2], -before[2]);
        assert_eq!(result[3], before[3]);
    }
}
