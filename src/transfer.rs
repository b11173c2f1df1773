//! Nearest-point normal transfer from one or more source meshes onto a destination.

use crate::errors::NormalsError;
use crate::float_types::Real;
use crate::params::{BoundaryMode, TransferParams};
use crate::topology::MeshTopology;
use crate::traits::NormalHost;
use crate::vector::{blend, try_normalize};
use crate::view::{NormalArray, NormalView};
use nalgebra::{Point3, Vector3};

/// The candidate points of one source mesh: vertices, or corners when the source is in
/// split mode, already reduced by the source-side selection and boundary filters.
#[derive(Debug, Clone, Default)]
pub struct SourcePoints {
    pub name: String,
    pub points: Vec<(Point3<Real>, Vector3<Real>)>,
}

impl SourcePoints {
    /// Snapshot `host` in its own mode and keep the points a transfer may read from.
    ///
    /// An empty source mesh yields no points rather than an error, so it simply never
    /// contributes.
    pub fn collect<H: NormalHost + ?Sized>(
        host: &H,
        params: &TransferParams,
    ) -> Result<SourcePoints, NormalsError> {
        let topology = MeshTopology::from_host(host)?;
        let view = match NormalView::build(host, &topology, params.select_by_face) {
            Ok(view) => view,
            Err(NormalsError::EmptyMesh { .. }) => {
                return Ok(SourcePoints {
                    name: host.name().to_owned(),
                    points: Vec::new(),
                });
            },
            Err(e) => return Err(e),
        };

        let points = view
            .points
            .iter()
            .filter(|p| !params.source_selected_only || p.selected)
            .filter(|p| {
                let on_boundary = topology.boundary_vertices[p.vertex];
                match params.bounds {
                    BoundaryMode::Ignore => !on_boundary,
                    BoundaryMode::Include => true,
                    BoundaryMode::Only => on_boundary,
                }
            })
            .map(|p| (p.position, p.normal))
            .collect();

        Ok(SourcePoints {
            name: host.name().to_owned(),
            points,
        })
    }

    /// Normal of the closest point within `radius` of `target`, if any.
    ///
    /// Linear scan; ties keep the first point found.
    pub fn nearest(&self, target: &Point3<Real>, radius: Real) -> Option<Vector3<Real>> {
        let mut best_dist_sq = radius * radius;
        let mut best = None;
        for (position, normal) in &self.points {
            let dist_sq = (position - target).norm_squared();
            if dist_sq <= best_dist_sq && (best.is_none() || dist_sq < best_dist_sq) {
                best_dist_sq = dist_sq;
                best = Some(*normal);
            }
        }
        best
    }
}

/// **Nearest-point transfer**
///
/// For every destination point `P` with normal `N` that passes the selection (and,
/// with [`BoundaryMode::Only`], lies on a boundary):
/// 1. each source independently finds its closest point within the search radius;
/// 2. a contributing source yields `normalize(s · blend(N, N_src, influence))`, with
///    `s = ±1` from the sign of `direction`;
/// 3. contributions are summed and renormalized, so several sources average with equal
///    weight.
///
/// Points with no source in range, or whose contributions cancel out, keep `N`.
/// Cost is `O(destination points × source points)` per source.
pub fn transfer_normals(
    view: &NormalView,
    topology: &MeshTopology,
    sources: &[SourcePoints],
    params: &TransferParams,
) -> Result<NormalArray, NormalsError> {
    if params.influence == 0.0 {
        return Err(NormalsError::ZeroInfluence);
    }

    let radius = params.search_radius();
    let sign = params.sign();

    let normals = view
        .points
        .iter()
        .map(|point| {
            if params.selected_only && !point.selected {
                return point.normal;
            }
            if params.bounds == BoundaryMode::Only && !topology.boundary_vertices[point.vertex] {
                return point.normal;
            }

            let mut sum = Vector3::zeros();
            let mut contributions = 0usize;
            for source in sources {
                let Some(source_normal) = source.nearest(&point.position, radius) else {
                    continue;
                };
                let blended = blend(&point.normal, &source_normal, params.influence) * sign;
                if let Some(n) = try_normalize(&blended) {
                    sum += n;
                    contributions += 1;
                }
            }

            if contributions == 0 {
                return point.normal;
            }
            try_normalize(&sum).unwrap_or(point.normal)
        })
        .collect();

    view.with_normals(normals)
}
