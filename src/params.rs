//! Caller-supplied parameters for each operation, with the defaults the normals editing
//! tools have always used.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Parameters shared by every normal generator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerateParams {
    /// Blend between the current (0.0) and the freshly generated (1.0) normal.
    /// Negative values blend toward the inverted generated normal.
    pub ratio: Real,
    /// Only touch selected vertices/corners; everything else passes through unchanged.
    pub selected_only: bool,
    /// In split mode, a corner is selected when its face is selected (`true`) or when its
    /// vertex is selected (`false`).
    pub select_by_face: bool,
    /// Overrides the host's cursor as the bent generator's reference point.
    pub cursor: Option<Point3<Real>>,
}

impl Default for GenerateParams {
    fn default() -> Self {
        GenerateParams {
            ratio: 1.0,
            selected_only: false,
            select_by_face: true,
            cursor: None,
        }
    }
}

impl GenerateParams {
    pub fn with_ratio(ratio: Real) -> Self {
        GenerateParams {
            ratio,
            ..Default::default()
        }
    }

    pub const fn selected_only(mut self, selected_only: bool) -> Self {
        self.selected_only = selected_only;
        self
    }

    pub const fn select_by_face(mut self, select_by_face: bool) -> Self {
        self.select_by_face = select_by_face;
        self
    }

    pub fn cursor(mut self, cursor: Point3<Real>) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

/// Which source points take part in a transfer, relative to open mesh borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryMode {
    /// Discard source points that lie on boundary (single-face) edges.
    Ignore,
    /// Scan every source point.
    #[default]
    Include,
    /// Only transfer between boundary points, for joining seams of separate pieces.
    Only,
}

/// Parameters for transferring normals from source meshes onto a destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferParams {
    /// Blend between the destination's own (0.0) and the nearest source (1.0) normal.
    /// Exactly zero skips the transfer; negative values invert the source normal.
    pub influence: Real,
    /// Search radius around each destination point. `<= 0.0` means unlimited.
    pub max_distance: Real,
    /// The sign of this value selects the result's orientation (+1 or −1).
    pub direction: Real,
    /// Only write destination points that are selected.
    pub selected_only: bool,
    /// Only read source points that are selected in their own mesh.
    pub source_selected_only: bool,
    pub select_by_face: bool,
    pub bounds: BoundaryMode,
}

impl Default for TransferParams {
    fn default() -> Self {
        TransferParams {
            influence: 1.0,
            max_distance: 0.01,
            direction: 1.0,
            selected_only: false,
            source_selected_only: false,
            select_by_face: true,
            bounds: BoundaryMode::Include,
        }
    }
}

impl TransferParams {
    /// Effective search radius, substituting the far sentinel for "unlimited".
    pub fn search_radius(&self) -> Real {
        if self.max_distance > 0.0 {
            self.max_distance
        } else {
            crate::float_types::FAR_DISTANCE
        }
    }

    /// +1 or −1 from the sign of [`direction`](Self::direction).
    pub fn sign(&self) -> Real {
        if self.direction < 0.0 { -1.0 } else { 1.0 }
    }
}

/// Parameters for manually setting or reading a normal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManualParams {
    /// Direction written by a manual set; normalized before use.
    pub direction: Vector3<Real>,
    /// Only edit normals of the selection.
    pub selected_only: bool,
    /// In split mode, which of a selected vertex's incident faces to address.
    /// `None` addresses every incident face.
    pub face_slot: Option<usize>,
}

impl Default for ManualParams {
    fn default() -> Self {
        ManualParams {
            direction: Vector3::z(),
            selected_only: false,
            face_slot: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_distance_uses_finite_sentinel() {
        let params = TransferParams {
            max_distance: 0.0,
            ..Default::default()
        };
        let radius = params.search_radius();
        assert!(radius.is_finite());
        assert!((radius * radius).is_finite());
        assert_eq!(TransferParams::default().search_radius(), 0.01);
    }

    #[test]
    fn direction_sign() {
        let mut params = TransferParams::default();
        assert_eq!(params.sign(), 1.0);
        params.direction = -0.2;
        assert_eq!(params.sign(), -1.0);
    }
}
