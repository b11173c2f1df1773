//! Vertex storage for [`EditMesh`](super::EditMesh)

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh vertex: position, current vertex normal and selection state.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct EditVertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub selected: bool,
}

impl EditVertex {
    /// Create a new unselected vertex with sanitized coordinates
    #[inline]
    pub const fn new(mut pos: Point3<Real>, mut normal: Vector3<Real>) -> Self {
        let [[x, y, z]]: &mut [[_; 3]; 1] = &mut pos.coords.data.0;
        if !x.is_finite() {
            *x = 0.0;
        }
        if !y.is_finite() {
            *y = 0.0;
        }
        if !z.is_finite() {
            *z = 0.0;
        }

        let [[nx, ny, nz]]: &mut [[_; 3]; 1] = &mut normal.data.0;
        if !nx.is_finite() {
            *nx = 0.0;
        }
        if !ny.is_finite() {
            *ny = 0.0;
        }
        if !nz.is_finite() {
            *nz = 0.0;
        }

        EditVertex {
            pos,
            normal,
            selected: false,
        }
    }

    /// Vertex at `pos` with a zero normal, to be filled in by normal recalculation.
    #[inline]
    pub fn at(pos: Point3<Real>) -> Self {
        Self::new(pos, Vector3::zeros())
    }

    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
