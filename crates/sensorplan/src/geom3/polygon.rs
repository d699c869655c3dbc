//! Planar convex polygons embedded in R³: ordering and measurement.
//!
//! Points handed in here are the unordered vertices of a convex polygon lying
//! in a plane with known normal (the clipper's output). Ordering is by the
//! atan2 angle around the centroid in an in-plane frame, which gives every
//! point a strictly defined key in (−π, π] and a counter-clockwise winding
//! about the normal.

use nalgebra::Vector3;

use super::cfg::SORT_REF_EPS;

/// Arithmetic mean; the zero vector for an empty slice.
pub fn centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    if points.is_empty() {
        return Vector3::zeros();
    }
    let mut acc = Vector3::zeros();
    for p in points {
        acc += p;
    }
    acc / (points.len() as f64)
}

/// Sort convex-polygon vertices counter-clockwise about `normal`.
///
/// No-op for fewer than 3 points, for a zero normal, or when every point sits
/// on the centroid (no reference direction exists).
pub fn sort_by_angle(points: &mut [Vector3<f64>], normal: &Vector3<f64>) {
    if points.len() < 3 {
        return;
    }
    let n_len = normal.norm();
    if !n_len.is_finite() || n_len <= 0.0 {
        return;
    }
    let axis = normal / n_len;
    let center = centroid(points);
    let Some(reference) = points
        .iter()
        .map(|p| p - center)
        .find(|v| v.norm() > SORT_REF_EPS)
    else {
        return;
    };
    // reference rotated +90° about the axis
    let perp = axis.cross(&reference);

    let mut items: Vec<(f64, Vector3<f64>)> = points
        .iter()
        .map(|&p| {
            let v = p - center;
            (perp.dot(&v).atan2(reference.dot(&v)), p)
        })
        .collect();
    items.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (slot, (_, p)) in points.iter_mut().zip(items) {
        *slot = p;
    }
}

/// Area of an ordered convex polygon by fan triangulation from vertex 0,
/// multiplied by `unit_scale²`. Returns 0 for fewer than 3 points.
pub fn area(points: &[Vector3<f64>], unit_scale: f64) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let p0 = points[0];
    let mut total = 0.0;
    for w in points[1..].windows(2) {
        let ab = w[0] - p0;
        let ac = w[1] - p0;
        total += 0.5 * ab.cross(&ac).norm();
    }
    total * unit_scale * unit_scale
}

/// Remove points within `tol` of an earlier point, keeping first occurrences.
pub fn dedup_points(points: &mut Vec<Vector3<f64>>, tol: f64) {
    if points.len() < 2 {
        return;
    }
    let mut kept: Vec<Vector3<f64>> = Vec::with_capacity(points.len());
    for p in points.drain(..) {
        if !kept.iter().any(|q| (q - p).norm() <= tol) {
            kept.push(p);
        }
    }
    *points = kept;
}
