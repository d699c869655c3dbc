//! 3D plane/line algebra and planar polygon measurement.
//!
//! Purpose
//! - Provide the small, explicit primitives the frustum clipper is built on:
//!   unit-normal planes, undirected lines, their pairwise intersections, and
//!   ordering/area of the resulting convex polygons.
//!
//! Conventions
//! - Planes satisfy `normal · p + constant = 0`; signed distance is positive
//!   on the side the normal points to.
//! - Intersection results are `Option`s. `None` is an expected outcome, not an
//!   error, and is never logged.
//! - Tolerances are fixed (`cfg`): 1e-3 for parallel/pivot/coplanar checks.
//!
//! Code cross-refs: `crate::frustum::clip`, `crate::coverage::compute_coverage`

pub(crate) mod cfg;
pub mod intersect;
pub mod polygon;
mod types;

pub use intersect::{intersect_planes, intersect_rays, pairwise_intersections};
pub use polygon::{area, centroid, dedup_points, sort_by_angle};
pub use types::{Axis, GeomError, Plane, Ray};

#[cfg(test)]
mod tests;
