// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Squared-length threshold below which a vector is treated as zero before normalization.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-10;
/// Squared-length threshold below which a vector is treated as zero before normalization.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-20;

/// Cutoff used by normal transfer when no maximum search distance is set.
///
/// Squaring this stays finite for both precisions, so distance comparisons never
/// overflow to infinity.
#[cfg(feature = "f32")]
pub const FAR_DISTANCE: Real = 1e15;
/// Cutoff used by normal transfer when no maximum search distance is set.
///
/// Squaring this stays finite for both precisions, so distance comparisons never
/// overflow to infinity.
#[cfg(feature = "f64")]
pub const FAR_DISTANCE: Real = 1e150;

/// Lazily-initialized tolerance used for comparisons across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `NORMALS_TOLERANCE` (e.g. `NORMALS_TOLERANCE=1e-7 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Returns the current tolerance value.
/// If not set yet, it tries `NORMALS_TOLERANCE` (parsed as the active `Real`) and
/// falls back to the precision default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("NORMALS_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `normals_editor::float_types::set_tolerance(1e-7);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;
