//! Errors and diagnostics

use crate::traits::NormalMode;
use thiserror::Error;

/// Everything that can stop a normal operation before its write-back.
///
/// None of these leave the host mesh in a modified state: operations compute into a
/// private buffer and only commit after every check has passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalsError {
    /// (EmptyMesh) The mesh has no vertices or no faces to build a view from
    #[error("(EmptyMesh) mesh has {vertices} vertices and {faces} faces, nothing to edit")]
    EmptyMesh { vertices: usize, faces: usize },
    /// (NeedMoreThanOneObject) Transfer needs a destination and at least one distinct source
    #[error("(NeedMoreThanOneObject) need more than one object")]
    NeedMoreThanOneObject,
    /// (ZeroInfluence) Transfer influence of exactly zero would change nothing
    #[error("(ZeroInfluence) transfer influence is zero")]
    ZeroInfluence,
    /// (RequiresSplitMode) The operation is only defined on per-corner normals
    #[error("(RequiresSplitMode) {operation} requires split normals, mesh is in {mode:?} mode")]
    RequiresSplitMode {
        operation: &'static str,
        mode: NormalMode,
    },
    /// (NormalCountMismatch) A normal array does not match the mesh layout
    #[error("(NormalCountMismatch) expected {expected} normals, found {found}")]
    NormalCountMismatch { expected: usize, found: usize },
    /// (FaceIndexOutOfRange) A face references a vertex that does not exist
    #[error("(FaceIndexOutOfRange) face {face} references vertex {vertex} (vertex count {vertex_count})")]
    FaceIndexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// (NothingSelected) Selection-only editing was requested with an empty selection
    #[error("(NothingSelected) no selected vertices or faces")]
    NothingSelected,
    /// (DegenerateDirection) A supplied direction has zero length
    #[error("(DegenerateDirection) direction has zero length")]
    DegenerateDirection,
}

impl NormalsError {
    /// `true` for "insufficient input" diagnostics: the caller asked for something that
    /// legitimately does nothing. `false` means the inputs broke a contract.
    pub const fn is_noop(&self) -> bool {
        matches!(
            self,
            NormalsError::EmptyMesh { .. }
                | NormalsError::NeedMoreThanOneObject
                | NormalsError::ZeroInfluence
                | NormalsError::NothingSelected
                | NormalsError::DegenerateDirection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_input_is_a_noop() {
        assert!(NormalsError::NeedMoreThanOneObject.is_noop());
        assert!(NormalsError::ZeroInfluence.is_noop());
        assert!(NormalsError::EmptyMesh { vertices: 0, faces: 0 }.is_noop());
        assert!(
            !NormalsError::RequiresSplitMode {
                operation: "flat",
                mode: NormalMode::VertexNormals
            }
            .is_noop()
        );
        assert!(!NormalsError::NormalCountMismatch { expected: 3, found: 4 }.is_noop());
    }

    #[test]
    fn transfer_diagnostic_message() {
        assert_eq!(
            NormalsError::NeedMoreThanOneObject.to_string(),
            "(NeedMoreThanOneObject) need more than one object"
        );
    }
}
