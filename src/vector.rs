//! Small vector helpers shared by the generators, the converter and transfer.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// Normalize `v`, or `None` when it is too short to have a direction.
#[inline]
pub fn try_normalize(v: &Vector3<Real>) -> Option<Vector3<Real>> {
    let norm_sq = v.norm_squared();
    if norm_sq > EPSILON && norm_sq.is_finite() {
        Some(v / norm_sq.sqrt())
    } else {
        None
    }
}

/// **Linear blend between an existing normal and a freshly computed one**
///
/// ```text
/// t = |ratio|
/// n' = (1 - t)·old + t·sign(ratio)·new
/// ```
/// A ratio of 0 returns `old` untouched, a ratio of ±1 returns `±new`. A negative
/// ratio inverts the computed component before blending. The result is not
/// normalized; see [`blend_normalized`].
#[inline]
pub fn blend(old: &Vector3<Real>, new: &Vector3<Real>, ratio: Real) -> Vector3<Real> {
    let t = ratio.abs();
    let target = if ratio < 0.0 { -new } else { *new };
    old * (1.0 - t) + target * t
}

/// [`blend`] followed by normalization.
///
/// Returns `None` if the blended vector degenerates (e.g. blending a normal halfway
/// toward its exact opposite), letting the caller keep the prior normal.
#[inline]
pub fn blend_normalized(
    old: &Vector3<Real>,
    new: &Vector3<Real>,
    ratio: Real,
) -> Option<Vector3<Real>> {
    if ratio == 0.0 {
        return Some(*old);
    }
    try_normalize(&blend(old, new, ratio))
}

/// Area-weighted (Newell) normal of a closed polygon loop. The returned vector's
/// length is twice the polygon's area, so normalizing it yields the face normal.
pub fn newell_normal<'a>(points: impl IntoIterator<Item = &'a Point3<Real>>) -> Vector3<Real> {
    let points: Vec<&Point3<Real>> = points.into_iter().collect();
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = points[i];
        let next = points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Interior angle at `corner` between the edges toward `prev` and `next`.
pub fn corner_angle(
    prev: &Point3<Real>,
    corner: &Point3<Real>,
    next: &Point3<Real>,
) -> Real {
    let (Some(a), Some(b)) = (try_normalize(&(prev - corner)), try_normalize(&(next - corner)))
    else {
        return 0.0;
    };
    a.dot(&b).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_does_not_normalize() {
        assert!(try_normalize(&Vector3::zeros()).is_none());
        assert!(try_normalize(&Vector3::new(Real::NAN, 0.0, 0.0)).is_none());
        let n = try_normalize(&Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((n.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn blend_endpoints() {
        let old = Vector3::z();
        let new = Vector3::x();
        assert_eq!(blend(&old, &new, 0.0), old);
        assert_eq!(blend(&old, &new, 1.0), new);
        assert_eq!(blend(&old, &new, -1.0), -new);
    }

    #[test]
    fn opposite_halfway_blend_is_degenerate() {
        let old = Vector3::z();
        assert!(blend_normalized(&old, &-old, 0.5).is_none());
    }

    #[test]
    fn newell_unit_square() {
        let square = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let n = newell_normal(square.iter());
        assert!((n - Vector3::new(0.0, 0.0, 2.0)).norm() < 1e-6);
    }

    #[test]
    fn right_angle_corner() {
        let angle = corner_angle(
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::origin(),
            &Point3::new(0.0, 1.0, 0.0),
        );
        assert!((angle - crate::float_types::PI / 2.0).abs() < 1e-6);
    }
}
