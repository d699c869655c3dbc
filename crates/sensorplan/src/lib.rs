//! Sensor coverage planning: geometry and layout.
//!
//! - `geom3`: plane/line intersections and planar polygon measurement.
//! - `frustum`: sensor view volumes and their cross-sections with the room.
//! - `coverage`: per-sensor floor and wall coverage, rectangle checks.
//! - `layout`: choose a sensor type and tile a rectangle with it.
//!
//! API Policy
//! - Every function is pure over its inputs; nothing here holds state between
//!   calls. Callers (the CLI, a renderer) own scenes and units.
//! - Lengths are meters. Display units only scale reported areas.

pub mod api;
pub mod coverage;
pub mod frustum;
pub mod geom3;
pub mod layout;
pub mod room;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use coverage::{compute_coverage, CoverageCfg, CoverageResult};
pub use layout::{solve, LayoutConfig, LayoutError, LayoutRequest};
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coverage::footprint::{covers_rect, FloorFootprint};
    pub use crate::coverage::{compute_coverage, for_placement, CoverageCfg, CoverageResult, Jitter};
    pub use crate::frustum::{clip, ClipCfg, Frustum, PerspectiveCamera, Pose};
    pub use crate::geom3::{area, sort_by_angle, Plane, Ray};
    pub use crate::layout::{
        catalog, solve, LayoutConfig, LayoutError, LayoutRequest, Overlap, Placement, SensorType,
    };
    pub use crate::room::{RoomBounds, Surface};
    pub use crate::units::Unit;
    pub use nalgebra::Vector3 as Vec3;
}
