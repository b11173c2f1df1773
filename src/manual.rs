//! Manual normal editing: write a fixed direction into the selection, or read one back.
//!
//! Both operations address normals through the *vertex* selection, also in split mode, so
//! views handed to them come from [`snapshot`].

use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::params::ManualParams;
use crate::topology::MeshTopology;
use crate::traits::{NormalHost, NormalMode};
use crate::vector::try_normalize;
use crate::view::{NormalArray, NormalView};
use nalgebra::Vector3;

/// View of `host` whose corners carry their vertex's selection flag.
pub fn snapshot<H: NormalHost + ?Sized>(
    host: &H,
    topology: &MeshTopology,
) -> Result<NormalView, NormalsError> {
    NormalView::build(host, topology, false)
}

/// Per-vertex selection as seen through `view`.
fn selected_vertices(view: &NormalView, topology: &MeshTopology) -> Vec<bool> {
    let mut selected = vec![false; topology.vertex_count()];
    for point in view.points.iter().filter(|p| p.selected) {
        selected[point.vertex] = true;
    }
    selected
}

/// Flat indices of the corners a manual set on `vertex` addresses.
fn addressed_corners(
    topology: &MeshTopology,
    vertex: usize,
    face_slot: Option<usize>,
    selected: &[bool],
) -> Vec<usize> {
    let incident = &topology.vertex_faces[vertex];
    let faces: &[usize] = match face_slot {
        None => incident,
        Some(slot) => incident.get(slot..=slot).unwrap_or(&[]),
    };
    faces
        .iter()
        .flat_map(|&face| {
            topology.faces[face]
                .iter()
                .enumerate()
                .filter(move |&(_, &v)| selected[v])
                .map(move |(corner, _)| topology.corner_index(face, corner))
        })
        .collect()
}

/// **Manual set**
///
/// Writes `normalize(params.direction)` into:
/// - vertex mode: every selected vertex (every vertex without `selected_only`);
/// - split mode: for each selected vertex, the corners of its incident faces (or only its
///   `face_slot`-th incident face) that reference a selected vertex. Without
///   `selected_only`, every corner.
///
/// Fails with [`NormalsError::DegenerateDirection`] for a zero-length direction and with
/// [`NormalsError::NothingSelected`] when `selected_only` is set but no vertex is
/// selected.
pub fn set_normals(
    view: &NormalView,
    topology: &MeshTopology,
    params: &ManualParams,
) -> Result<NormalArray, NormalsError> {
    let direction = try_normalize(&params.direction).ok_or(NormalsError::DegenerateDirection)?;

    let mut normals: Vec<Vector3<Real>> = view.points.iter().map(|p| p.normal).collect();
    if !params.selected_only {
        normals.iter_mut().for_each(|n| *n = direction);
        return view.with_normals(normals);
    }

    let selected = selected_vertices(view, topology);
    if !selected.contains(&true) {
        return Err(NormalsError::NothingSelected);
    }

    match view.mode {
        NormalMode::VertexNormals => {
            for (normal, _) in normals.iter_mut().zip(&selected).filter(|(_, s)| **s) {
                *normal = direction;
            }
        },
        NormalMode::SplitNormals => {
            for vertex in (0..selected.len()).filter(|&v| selected[v]) {
                for corner in addressed_corners(topology, vertex, params.face_slot, &selected) {
                    normals[corner] = direction;
                }
            }
        },
    }

    view.with_normals(normals)
}

/// **Manual get**
///
/// The current normal of the first selected vertex, or in split mode its corner normal in
/// the `face_slot`-th incident face (slot 0 when unset). `None` when nothing is selected
/// or the vertex has no such face.
pub fn get_normal(
    view: &NormalView,
    topology: &MeshTopology,
    params: &ManualParams,
) -> Option<Vector3<Real>> {
    let selected = selected_vertices(view, topology);
    let vertex = selected.iter().position(|&s| s)?;

    match view.mode {
        NormalMode::VertexNormals => view.points.get(vertex).map(|p| p.normal),
        NormalMode::SplitNormals => {
            let slot = params.face_slot.unwrap_or(0);
            let face = *topology.vertex_faces[vertex].get(slot)?;
            let corner = topology.faces[face].iter().position(|&v| v == vertex)?;
            view.points
                .get(topology.corner_index(face, corner))
                .map(|p| p.normal)
        },
    }
}
