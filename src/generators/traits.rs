//! Trait for normal generators and the shared blend/selection driver.

use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::params::GenerateParams;
use crate::topology::MeshTopology;
use crate::vector::blend_normalized;
use crate::view::{NormalArray, NormalView};
use nalgebra::Vector3;

/// A generator computes a fresh target normal for every point of a view. Selection,
/// blending and packaging into a [`NormalArray`] are handled once by [`NormalGenerator::generate`].
pub trait NormalGenerator {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Generators that only make sense per corner reject vertex-mode views.
    fn requires_split(&self) -> bool {
        false
    }

    /// Whether the target is blended with the current normal by the ratio, or written as is.
    fn blends(&self) -> bool {
        true
    }

    /// One target per point of `view`, in point order. `None` marks a degenerate target
    /// (zero-length direction) and keeps the point's current normal.
    fn targets(
        &self,
        view: &NormalView,
        topology: &MeshTopology,
        params: &GenerateParams,
    ) -> Vec<Option<Vector3<Real>>>;

    /// Run the generator over `view`.
    ///
    /// With `selected_only`, unselected points pass through unchanged; otherwise every
    /// point is recomputed. The result has the same shape as the view.
    fn generate(
        &self,
        view: &NormalView,
        topology: &MeshTopology,
        params: &GenerateParams,
    ) -> Result<NormalArray, NormalsError> {
        if self.requires_split() && !view.mode.is_split() {
            return Err(NormalsError::RequiresSplitMode {
                operation: self.name(),
                mode: view.mode,
            });
        }

        let targets = self.targets(view, topology, params);
        let normals = view
            .points
            .iter()
            .zip(targets)
            .map(|(point, target)| {
                if params.selected_only && !point.selected {
                    return point.normal;
                }
                match target {
                    Some(target) if self.blends() => {
                        blend_normalized(&point.normal, &target, params.ratio)
                            .unwrap_or(point.normal)
                    },
                    Some(target) => target,
                    None => point.normal,
                }
            })
            .collect();

        view.with_normals(normals)
    }
}

/// Whether face `face` may contribute to averaged normals under `params`.
#[inline]
pub(crate) fn face_passes(view: &NormalView, params: &GenerateParams, face: usize) -> bool {
    !params.selected_only || view.face_selected.get(face).copied().unwrap_or(false)
}
