//! Tolerance defaults for 3D coverage geometry (internal).
//!
//! Policy
//! - Defaults are fixed constants so call sites agree on what "parallel",
//!   "coplanar" and "on the boundary" mean. Runtime knobs that callers may
//!   legitimately tune (the clip slack) live in `frustum::ClipCfg` instead.

/// Minimum norm of a normal/direction, and of a cross product before two
/// planes or rays are treated as parallel.
pub(crate) const PARALLEL_EPS: f64 = 1e-3;
/// Minimum |determinant| of a 2×2 pivot system in the intersection solves.
pub(crate) const PIVOT_EPS: f64 = 1e-3;
/// Max signed distance between two lines before they count as skew.
pub(crate) const COPLANAR_EPS: f64 = 1e-3;
/// Minimum offset from the centroid for an angle-sort reference vector.
pub(crate) const SORT_REF_EPS: f64 = 1e-3;
/// Coincidence tolerance for candidate polygon vertices.
pub(crate) const DEDUP_EPS: f64 = 1e-9;
