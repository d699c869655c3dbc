//! Plane∩plane and line∩line solves with axis pivoting.
//!
//! Both solves reduce to a 2×2 system after fixing one coordinate. Which
//! coordinate to fix is chosen by looping over `Axis` in order of decreasing
//! pivot magnitude, taking the first whose determinant clears `PIVOT_EPS`.
//! Absent results (parallel, coincident, skew, degenerate input) are `None`;
//! callers treat them as "contributes nothing".

use nalgebra::{Matrix2, Vector2, Vector3};

use super::cfg::{COPLANAR_EPS, PARALLEL_EPS, PIVOT_EPS};
use super::types::{Axis, Plane, Ray};

/// Line of intersection of two planes, or `None` if they are parallel,
/// coincident, or either normal is degenerate.
///
/// The direction is `normalize(n1 × n2)`. The origin is the point of the line
/// whose fixed coordinate is 0; fixing axis k leaves the system in the other
/// two coordinates (i, j), whose determinant `n1[i] n2[j] − n1[j] n2[i]` is
/// exactly the k-th component of `n1 × n2`.
pub fn intersect_planes(p1: &Plane, p2: &Plane) -> Option<Ray> {
    let n1 = p1.normal;
    let n2 = p2.normal;
    if n1.norm() < PARALLEL_EPS || n2.norm() < PARALLEL_EPS {
        return None;
    }
    let dir = n1.cross(&n2);
    if dir.norm() < PARALLEL_EPS {
        return None;
    }
    for fixed in Axis::by_decreasing_magnitude(&dir) {
        let (ai, aj) = fixed.others();
        let (i, j) = (ai.index(), aj.index());
        let m = Matrix2::new(n1[i], n1[j], n2[i], n2[j]);
        if m.determinant().abs() <= PIVOT_EPS {
            continue;
        }
        let sol = m.try_inverse()? * Vector2::new(-p1.constant, -p2.constant);
        let mut origin = Vector3::zeros();
        origin[i] = sol.x;
        origin[j] = sol.y;
        return Some(Ray {
            origin,
            direction: dir.normalize(),
        });
    }
    None
}

/// Intersection point of two lines, or `None` if they are parallel,
/// coincident, skew, or either direction is degenerate.
///
/// Writing `o1 + t d1 = o2 + s d2`, the equation along the primary axis `a`
/// (largest `|d2[a]|`) eliminates `s`; a secondary axis `b` then gives
/// `(d2[a] d1[b] − d2[b] d1[a]) t = d2[b] (o1[a] − o2[a]) + d2[a] (o2[b] − o1[b])`.
pub fn intersect_rays(r1: &Ray, r2: &Ray) -> Option<Vector3<f64>> {
    let (o1, d1) = (r1.origin, r1.direction);
    let (o2, d2) = (r2.origin, r2.direction);
    if d1.norm() < PARALLEL_EPS || d2.norm() < PARALLEL_EPS {
        return None;
    }
    let normal = d1.cross(&d2);
    let len = normal.norm();
    if len < PARALLEL_EPS {
        return None;
    }
    if (normal / len).dot(&(o2 - o1)).abs() > COPLANAR_EPS {
        return None;
    }

    let [primary, ..] = Axis::by_decreasing_magnitude(&d2);
    let a = primary.index();
    let den = |b: usize| d2[a] * d1[b] - d2[b] * d1[a];
    let (b1, b2) = primary.others();
    let mut secondaries = [b1.index(), b2.index()];
    secondaries.sort_by(|x, y| den(*y).abs().total_cmp(&den(*x).abs()));
    for b in secondaries {
        let d = den(b);
        if d.abs() <= PIVOT_EPS {
            continue;
        }
        let t = (d2[b] * (o1[a] - o2[a]) + d2[a] * (o2[b] - o1[b])) / d;
        return Some(r1.at(t));
    }
    None
}

/// All pairwise intersection points of `rays` (i < j), skipping absent ones.
pub fn pairwise_intersections(rays: &[Ray]) -> Vec<Vector3<f64>> {
    let mut out = Vec::with_capacity(rays.len() * rays.len().saturating_sub(1) / 2);
    for (i, r1) in rays.iter().enumerate() {
        for r2 in &rays[i + 1..] {
            if let Some(p) = intersect_rays(r1, r2) {
                out.push(p);
            }
        }
    }
    out
}
