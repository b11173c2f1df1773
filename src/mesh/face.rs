//! Face storage for [`EditMesh`](super::EditMesh)

/// A polygon face, defined by indices into the vertex array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFace {
    /// Indices into the vertex array, in winding order
    pub indices: Vec<usize>,
    pub selected: bool,
}

impl EditFace {
    pub fn new(indices: Vec<usize>) -> Self {
        EditFace {
            indices,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Number of corners (equal to the number of vertex references).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
