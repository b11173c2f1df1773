//! Flat normals: blend every corner toward its own face's normal.

use super::traits::NormalGenerator;
use crate::float_types::Real;
use crate::params::GenerateParams;
use crate::topology::MeshTopology;
use crate::vector::try_normalize;
use crate::view::NormalView;
use nalgebra::Vector3;

/// Targets each corner's own face normal. Per-corner only; vertex-mode views are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatNormals;

impl NormalGenerator for FlatNormals {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn requires_split(&self) -> bool {
        true
    }

    fn targets(
        &self,
        view: &NormalView,
        topology: &MeshTopology,
        _params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>> {
        view.points
            .iter()
            .map(|p| p.face.and_then(|f| try_normalize(&topology.face_normals[f])))
            .collect()
    }
}
