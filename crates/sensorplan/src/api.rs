//! Curated surface for the CLI and other front ends (UNSTABLE).
//!
//! Important
//! - Breaking changes are allowed; prefer these re-exports over reaching into
//!   submodules so callers move together when internals change.

// 3D primitives
pub use crate::geom3::{
    area, centroid, intersect_planes, intersect_rays, pairwise_intersections, sort_by_angle, Axis,
    GeomError, Plane, Ray,
};
// View volumes
pub use crate::frustum::camera::DEFAULT_NEAR;
pub use crate::frustum::{clip, ClipCfg, Frustum, PerspectiveCamera, Pose};
// Room and coverage
pub use crate::coverage::footprint::{
    covered_fraction, covers_rect, project as project_to_floor, FloorFootprint, Hs2,
};
pub use crate::coverage::{compute_coverage, for_placement, CoverageCfg, CoverageResult, Jitter};
pub use crate::room::{RoomBounds, Surface};
// Layout
pub use crate::layout::catalog::{
    builtin as builtin_catalog, find as find_sensor_type, max_range_far, select as select_types,
};
pub use crate::layout::{
    solve, LayoutConfig, LayoutError, LayoutRequest, Overlap, Placement, SensorType, MAX_OVERLAP,
    MAX_SENSORS,
};
pub use crate::units::{Unit, UnknownUnit};
