//! Sensor view volumes and their cross-sections with room surfaces.
//!
//! Purpose
//! - `Frustum`: six inward-facing planes (near, far, left, right, top, bottom)
//!   in world coordinates.
//! - `camera`: build a frustum from a perspective sensor and its mount pose.
//! - `clip`: the convex polygon where a frustum meets a room surface.
//!
//! Why this construction
//! - A frustum's cross-section with a plane is convex, and its vertices are
//!   pairwise intersections of the plane traces, filtered to the interior.
//!   No scan conversion or general polygon clipping is needed.

pub mod camera;
mod clip;

pub use camera::{PerspectiveCamera, Pose};
pub use clip::{clip, ClipCfg};

use nalgebra::{Isometry3, Vector3};

use crate::geom3::Plane;

/// Six planes with normals pointing into the view volume.
///
/// Invariants:
/// - Order is `NEAR, FAR, LEFT, RIGHT, TOP, BOTTOM`.
/// - A point is inside iff its signed distance to every plane is `>= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    pub const NEAR: usize = 0;
    pub const FAR: usize = 1;
    pub const LEFT: usize = 2;
    pub const RIGHT: usize = 3;
    pub const TOP: usize = 4;
    pub const BOTTOM: usize = 5;

    #[inline]
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    #[inline]
    pub fn contains_point(&self, p: &Vector3<f64>) -> bool {
        self.planes.iter().all(|pl| pl.distance_to_point(p) >= 0.0)
    }

    /// Copy with every plane pushed outward by `eps` (points within `eps` of a
    /// face count as inside).
    pub fn inflated(&self, eps: f64) -> Self {
        let mut planes = self.planes;
        for pl in &mut planes {
            pl.constant += eps;
        }
        Self { planes }
    }

    pub fn transformed(&self, iso: &Isometry3<f64>) -> Self {
        Self {
            planes: self.planes.map(|pl| pl.transformed(iso)),
        }
    }
}
