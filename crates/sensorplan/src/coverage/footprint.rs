//! Floor footprints as convex 2D H-representations over world (x, z).
//!
//! Used to check that a set of sensors jointly covers the tracked rectangle
//! without rasterizing anything.

use std::cmp::Ordering;

use nalgebra::{Vector2, Vector3};

use super::CoverageResult;

const HULL_DEDUP_EPS: f64 = 1e-12;
const COVER_EPS: f64 = 1e-9;

/// Closed half-plane `n·x <= c` with unit `n`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hs2 {
    pub n: Vector2<f64>,
    pub c: f64,
}

impl Hs2 {
    /// Normalizes `n`; `None` for a zero or non-finite normal.
    pub fn new(n: Vector2<f64>, c: f64) -> Option<Self> {
        let norm = n.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        Some(Self {
            n: n / norm,
            c: c / norm,
        })
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}

/// Convex region of the floor seen by one sensor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloorFootprint {
    pub hs: Vec<Hs2>,
}

impl FloorFootprint {
    /// Half-planes of the convex hull of `points`; `None` with fewer than
    /// three non-collinear points.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let hull = convex_hull(points)?;
        if hull.len() < 3 {
            return None;
        }
        let hs = hull
            .iter()
            .zip(hull.iter().cycle().skip(1))
            .filter_map(|(p, q)| {
                let edge = q - p;
                // hull is ccw, so the outward normal is the edge turned cw
                let n = Vector2::new(edge.y, -edge.x);
                Hs2::new(n, n.dot(p))
            })
            .collect();
        Some(Self { hs })
    }

    /// Footprint of a coverage result's floor polygon, projected to (x, z).
    pub fn from_coverage(cov: &CoverageResult) -> Option<Self> {
        if cov.is_empty() {
            return None;
        }
        let pts: Vec<Vector2<f64>> = cov.floor.iter().map(project).collect();
        Self::from_points(&pts)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        !self.hs.is_empty() && self.hs.iter().all(|h| h.satisfies_eps(p, eps))
    }
}

#[inline]
pub fn project(p: &Vector3<f64>) -> Vector2<f64> {
    Vector2::new(p.x, p.z)
}

/// Centres of a `samples × samples` grid over `[0, width] × [0, height]`.
fn grid(width: f64, height: f64, samples: usize) -> impl Iterator<Item = Vector2<f64>> {
    let n = samples.max(1);
    let (dx, dz) = (width / n as f64, height / n as f64);
    (0..n).flat_map(move |i| {
        (0..n).map(move |j| Vector2::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dz))
    })
}

/// Share of grid samples in `[0, width] × [0, height]` inside some footprint.
///
/// Samples are the centres of a `samples × samples` cell grid, so this is an
/// estimate of the covered area share, not an exact measure.
pub fn covered_fraction(footprints: &[FloorFootprint], width: f64, height: f64, samples: usize) -> f64 {
    let n = samples.max(1);
    let hit = grid(width, height, n)
        .filter(|p| footprints.iter().any(|f| f.contains(*p, COVER_EPS)))
        .count();
    hit as f64 / (n * n) as f64
}

/// Whether every grid sample of the rectangle lies in some footprint.
///
/// This is a sampled check on the centres of a `samples × samples` cell grid,
/// not an exact polygon containment test: an uncovered sliver narrower than
/// half a cell along the rectangle border, or between footprints, can go
/// unnoticed.
pub fn covers_rect(footprints: &[FloorFootprint], width: f64, height: f64, samples: usize) -> bool {
    grid(width, height, samples).all(|p| footprints.iter().any(|f| f.contains(p, COVER_EPS)))
}

/// Andrew's monotone chain; ccw, without collinear points.
fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < HULL_DEDUP_EPS);
    if pts.len() < 3 {
        return None;
    }
    let mut hull = half_chain(pts.iter());
    hull.extend(half_chain(pts.iter().rev()));
    Some(hull)
}

fn half_chain<'a>(points: impl Iterator<Item = &'a Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut chain: Vec<Vector2<f64>> = Vec::new();
    for p in points {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], *p) <= 0.0 {
            chain.pop();
        }
        chain.push(*p);
    }
    chain.pop();
    chain
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
