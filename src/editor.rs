//! Entry points: snapshot the host, compute, commit once.
//!
//! Every function here either commits a complete normal array or returns an error with
//! the host untouched. Errors for which [`NormalsError::is_noop`] holds are logged as
//! warnings; callers may treat them as "nothing happened".

use crate::commit;
use crate::convert;
use crate::errors::NormalsError;
use crate::float_types::{Real, tolerance};
use crate::generators::{Generator, NormalGenerator};
use crate::manual;
use crate::params::{GenerateParams, ManualParams, TransferParams};
use crate::topology::MeshTopology;
use crate::traits::{NormalHost, NormalMode};
use crate::transfer::{self, SourcePoints};
use crate::view::{NormalArray, NormalView};
use log::{debug, info, warn};
use nalgebra::Vector3;

/// What a committed operation did to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Mode of the array that was written
    pub mode: NormalMode,
    /// Number of normals written
    pub total: usize,
    /// Number of normals that moved by more than the crate tolerance
    pub changed: usize,
}

impl Outcome {
    fn between(before: &NormalArray, after: &NormalArray) -> Outcome {
        Outcome {
            mode: after.mode(),
            total: after.len(),
            changed: before
                .iter()
                .zip(after.iter())
                .filter(|(a, b)| (*a - *b).norm() > tolerance())
                .count(),
        }
    }

    /// An operation that committed nothing.
    const fn unchanged(mode: NormalMode) -> Outcome {
        Outcome {
            mode,
            total: 0,
            changed: 0,
        }
    }
}

fn report<T>(operation: &str, mesh: &str, result: Result<T, NormalsError>) -> Result<T, NormalsError> {
    if let Err(e) = &result {
        if e.is_noop() {
            warn!("{operation} on '{mesh}' did nothing: {e}");
        } else {
            warn!("{operation} on '{mesh}' rejected: {e}");
        }
    }
    result
}

fn commit_view<H: NormalHost + ?Sized>(
    host: &mut H,
    view: &NormalView,
    normals: NormalArray,
) -> Result<Outcome, NormalsError> {
    let outcome = Outcome::between(&view.current_normals(), &normals);
    commit::apply(host, &normals)?;
    Ok(outcome)
}

/// Run one of the built-in generators on `host`.
pub fn generate<H: NormalHost + ?Sized>(
    host: &mut H,
    generator: Generator,
    params: &GenerateParams,
) -> Result<Outcome, NormalsError> {
    generate_with(host, generator.as_generator(), params)
}

/// Run any [`NormalGenerator`] on `host`.
pub fn generate_with<H: NormalHost + ?Sized>(
    host: &mut H,
    generator: &dyn NormalGenerator,
    params: &GenerateParams,
) -> Result<Outcome, NormalsError> {
    let name = host.name().to_owned();
    let result = (|| -> Result<Outcome, NormalsError> {
        let topology = MeshTopology::from_host(&*host)?;
        let view = NormalView::build(&*host, &topology, params.select_by_face)?;
        debug!(
            "{} on '{}': {} points ({} selected), ratio {}",
            generator.name(),
            name,
            view.len(),
            view.selected_count(),
            params.ratio
        );
        let normals = generator.generate(&view, &topology, params)?;
        commit_view(host, &view, normals)
    })();
    report(generator.name(), &name, result)
}

/// Transfer normals from `sources` onto `dest`.
///
/// Sources sharing the destination's name, and repeated names, are skipped. Fails with
/// [`NormalsError::NeedMoreThanOneObject`] when no distinct source remains.
pub fn transfer<H: NormalHost + ?Sized>(
    dest: &mut H,
    sources: &[&dyn NormalHost],
    params: &TransferParams,
) -> Result<Outcome, NormalsError> {
    let name = dest.name().to_owned();
    let result = (|| -> Result<Outcome, NormalsError> {
        if params.influence == 0.0 {
            return Err(NormalsError::ZeroInfluence);
        }

        let mut seen: Vec<&str> = vec![name.as_str()];
        let mut points = Vec::with_capacity(sources.len());
        for source in sources {
            if seen.contains(&source.name()) {
                debug!(
                    "transfer onto '{}': skipping source '{}', name already used",
                    name,
                    source.name()
                );
                continue;
            }
            seen.push(source.name());
            points.push(SourcePoints::collect(*source, params)?);
        }
        if points.is_empty() {
            return Err(NormalsError::NeedMoreThanOneObject);
        }

        let topology = MeshTopology::from_host(&*dest)?;
        let view = NormalView::build(&*dest, &topology, params.select_by_face)?;
        debug!(
            "transfer onto '{}': {} points from {} sources ({} source points), radius {}",
            name,
            view.len(),
            points.len(),
            points.iter().map(|s| s.points.len()).sum::<usize>(),
            params.search_radius()
        );
        let normals = transfer::transfer_normals(&view, &topology, &points, params)?;
        commit_view(dest, &view, normals)
    })();
    report("transfer", &name, result)
}

/// Switch `host` between vertex and split normals.
///
/// Already being in `target` mode is not an error; the outcome then reports no writes.
pub fn convert_mode<H: NormalHost + ?Sized>(
    host: &mut H,
    target: NormalMode,
) -> Result<Outcome, NormalsError> {
    let name = host.name().to_owned();
    let from = host.mode();
    let result = convert::convert_mode(host, target).map(|converted| {
        if converted {
            info!("'{name}': {from:?} -> {target:?}");
            let total = match target {
                NormalMode::VertexNormals => host.vertex_count(),
                NormalMode::SplitNormals => host.corner_count(),
            };
            Outcome {
                mode: target,
                total,
                changed: total,
            }
        } else {
            debug!("'{name}' already uses {target:?}");
            Outcome::unchanged(target)
        }
    });
    report("convert", &name, result)
}

/// Overwrite normals of `host` with a fixed direction. See [`manual::set_normals`].
pub fn set_normals<H: NormalHost + ?Sized>(
    host: &mut H,
    params: &ManualParams,
) -> Result<Outcome, NormalsError> {
    let name = host.name().to_owned();
    let result = (|| -> Result<Outcome, NormalsError> {
        let topology = MeshTopology::from_host(&*host)?;
        let view = manual::snapshot(&*host, &topology)?;
        let normals = manual::set_normals(&view, &topology, params)?;
        commit_view(host, &view, normals)
    })();
    report("set", &name, result)
}

/// Read one normal back from `host`. See [`manual::get_normal`].
pub fn get_normal<H: NormalHost + ?Sized>(
    host: &H,
    params: &ManualParams,
) -> Result<Option<Vector3<Real>>, NormalsError> {
    let topology = MeshTopology::from_host(host)?;
    let view = manual::snapshot(host, &topology)?;
    Ok(manual::get_normal(&view, &topology, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::EditMesh;

    #[test]
    fn outcome_counts_changes() {
        let mut grid = EditMesh::grid("grid", 1, 1);
        grid.select_vertices(&[0]);
        let outcome = generate(
            &mut grid,
            Generator::Flip,
            &GenerateParams::default().selected_only(true),
        )
        .unwrap();
        assert_eq!(
            outcome,
            Outcome {
                mode: NormalMode::VertexNormals,
                total: 4,
                changed: 1
            }
        );
    }

    #[test]
    fn failed_operation_leaves_host_untouched() {
        let mut grid = EditMesh::grid("grid", 1, 1);
        let before = grid.vertex_normals();
        let err = generate(&mut grid, Generator::Flat, &GenerateParams::default()).unwrap_err();
        assert!(!err.is_noop());
        assert_eq!(grid.vertex_normals(), before);
    }

    #[test]
    fn transfer_needs_a_distinct_source() {
        let mut a = EditMesh::grid("a", 1, 1);
        let twin = EditMesh::grid("a", 1, 1);
        let err = transfer(&mut a, &[&twin], &TransferParams::default()).unwrap_err();
        assert_eq!(err, NormalsError::NeedMoreThanOneObject);
        let err = transfer(&mut a, &[], &TransferParams::default()).unwrap_err();
        assert_eq!(err, NormalsError::NeedMoreThanOneObject);
    }

    #[test]
    fn repeated_source_names_are_read_once() {
        let mut dest = EditMesh::grid("dest", 1, 1);
        let before = dest.vertex_normals();
        // first "src" is far out of range; the coincident second one is skipped
        let mut far = EditMesh::grid("src", 1, 1);
        far.vertices.iter_mut().for_each(|v| v.pos.z += 10.0);
        let mut near = EditMesh::grid("src", 1, 1);
        near.vertices.iter_mut().for_each(|v| v.normal = Vector3::x());
        let outcome = transfer(&mut dest, &[&far, &near], &TransferParams::default()).unwrap();
        assert_eq!(outcome.changed, 0);
        assert_eq!(dest.vertex_normals(), before);
    }

    #[test]
    fn convert_reports_writes() {
        let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
        let outcome = convert_mode(&mut cube, NormalMode::SplitNormals).unwrap();
        assert_eq!(outcome.total, 24);
        let again = convert_mode(&mut cube, NormalMode::SplitNormals).unwrap();
        assert_eq!(again.total, 0);
    }

    #[test]
    fn set_then_get() {
        let mut cube = EditMesh::cuboid("cube", 1.0, 1.0, 1.0);
        cube.select_vertices(&[6]);
        let params = ManualParams {
            direction: Vector3::new(0.0, 3.0, 0.0),
            selected_only: true,
            face_slot: None,
        };
        let outcome = set_normals(&mut cube, &params).unwrap();
        assert_eq!(outcome.changed, 1);
        assert_eq!(get_normal(&cube, &params).unwrap(), Some(Vector3::y()));
    }
}
