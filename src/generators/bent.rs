//! Bent normals: bias each normal toward the direction pointing away from a reference point.

use super::traits::NormalGenerator;
use crate::float_types::Real;
use crate::params::GenerateParams;
use crate::topology::MeshTopology;
use crate::vector::try_normalize;
use crate::view::NormalView;
use nalgebra::Vector3;

/// **Bent normals**
///
/// For a point `P` with normal `N` and reference point `C` (the cursor):
/// ```text
/// D  = normalize(P - C)
/// N' = normalize((1 - r)·N + r·D)
/// ```
/// A point sitting exactly on the cursor has no direction and keeps `N`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BentNormals;

impl NormalGenerator for BentNormals {
    fn name(&self) -> &'static str {
        "bent"
    }

    fn targets(
        &self,
        view: &NormalView,
        _topology: &MeshTopology,
        params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>> {
        let cursor = params.cursor.unwrap_or(view.cursor);
        view.points
            .iter()
            .map(|p| try_normalize(&(p.position - cursor)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EditMesh;
    use nalgebra::Point3;

    #[test]
    fn points_away_from_cursor() {
        let grid = EditMesh::grid("grid", 2, 2).with_cursor(Point3::new(1.0, 1.0, -1.0));
        let topo = MeshTopology::from_host(&grid).unwrap();
        let view = NormalView::build(&grid, &topo, true).unwrap();
        let result = BentNormals
            .generate(&view, &topo, &GenerateParams::default())
            .unwrap()
            .flatten();
        for (v, n) in grid.vertices.iter().zip(&result) {
            let expected = (v.pos - Point3::new(1.0, 1.0, -1.0)).normalize();
            assert!((n - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn explicit_cursor_overrides_host() {
        let grid = EditMesh::grid("grid", 1, 1).with_cursor(Point3::new(100.0, 0.0, 0.0));
        let topo = MeshTopology::from_host(&grid).unwrap();
        let view = NormalView::build(&grid, &topo, true).unwrap();
        let params = GenerateParams::default().cursor(Point3::new(0.0, 0.0, -1.0));
        let result = BentNormals.generate(&view, &topo, &params).unwrap().flatten();
        assert!((result[0] - Vector3::z()).norm() < 1e-9);
    }
}
