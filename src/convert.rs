//! Conversion between vertex normals and split (per-corner) normals.

use crate::commit;
use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::topology::MeshTopology;
use crate::traits::{NormalHost, NormalMode};
use crate::vector::try_normalize;
use crate::view::NormalArray;
use nalgebra::Vector3;

/// Copy each vertex's normal into every corner that references it. Lossless: every corner
/// starts out identical to its vertex.
pub fn vertex_to_split(topology: &MeshTopology, vertex_normals: &[Vector3<Real>]) -> NormalArray {
    NormalArray::PerCorner(
        topology
            .faces
            .iter()
            .map(|face| face.iter().map(|&v| vertex_normals[v]).collect())
            .collect(),
    )
}

/// **Equal-weight corner averaging**
///
/// Every vertex receives the normalized sum of the normals of all corners referencing
/// it, across all incident faces:
/// ```text
/// n_v = normalize( Σ_{c : vertex(c) = v}  n_c )
/// ```
/// Where corners of a vertex disagree (hard edges) the discontinuity is averaged away.
/// Vertices without corners get a zero vector; a vertex whose corners cancel out keeps
/// its entry from `prior_vertex_normals`.
pub fn split_to_vertex(
    topology: &MeshTopology,
    corner_normals: &[Vector3<Real>],
    prior_vertex_normals: &[Vector3<Real>],
) -> NormalArray {
    let mut sums = vec![Vector3::zeros(); topology.vertex_count()];
    let corners = topology.faces.iter().flatten();
    for (&v, n) in corners.zip(corner_normals) {
        sums[v] += n;
    }
    NormalArray::PerVertex(
        sums.iter()
            .enumerate()
            .map(|(v, s)| {
                if topology.vertex_faces[v].is_empty() {
                    return Vector3::zeros();
                }
                try_normalize(s)
                    .or_else(|| prior_vertex_normals.get(v).copied())
                    .unwrap_or_else(Vector3::zeros)
            })
            .collect(),
    )
}

/// Switch `host` to `target` mode, carrying its normals across.
///
/// Returns `Ok(false)` without touching the host when it already is in `target` mode.
pub fn convert_mode<H: NormalHost + ?Sized>(
    host: &mut H,
    target: NormalMode,
) -> Result<bool, NormalsError> {
    if host.mode() == target {
        return Ok(false);
    }

    let topology = MeshTopology::from_host(&*host)?;
    if topology.vertex_count() == 0 || topology.face_count() == 0 {
        return Err(NormalsError::EmptyMesh {
            vertices: topology.vertex_count(),
            faces: topology.face_count(),
        });
    }

    let converted = match target {
        NormalMode::SplitNormals => {
            let vertex_normals = host.vertex_normals();
            if vertex_normals.len() != topology.vertex_count() {
                return Err(NormalsError::NormalCountMismatch {
                    expected: topology.vertex_count(),
                    found: vertex_normals.len(),
                });
            }
            vertex_to_split(&topology, &vertex_normals)
        },
        NormalMode::VertexNormals => {
            let corner_normals = host.corner_normals();
            if corner_normals.len() != topology.corner_count() {
                return Err(NormalsError::NormalCountMismatch {
                    expected: topology.corner_count(),
                    found: corner_normals.len(),
                });
            }
            split_to_vertex(&topology, &corner_normals, &host.vertex_normals())
        },
    };

    commit::apply(host, &converted)?;
    host.set_mode(target);
    Ok(true)
}
