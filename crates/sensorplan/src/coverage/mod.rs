//! Per-sensor coverage: the polygons a frustum paints on the floor and the two
//! walls, plus the covered floor area.
//!
//! - `compute_coverage`: clip one frustum against all three surfaces.
//! - `footprint`: 2D view of floor polygons for rectangle coverage checks.

pub mod footprint;

use nalgebra::Vector3;

use crate::frustum::{clip, ClipCfg, Frustum, PerspectiveCamera};
use crate::geom3::{area, centroid};
use crate::layout::{Placement, SensorType};
use crate::room::{RoomBounds, Surface};

/// Render nudge step; sensor `index` of `total` is shifted by `STEP·index/total`.
const JITTER_STEP: f64 = 0.01;

/// Output-only offset that keeps coplanar polygons of different sensors apart
/// when drawn. Applied after the area is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jitter {
    pub index: usize,
    pub total: usize,
}

impl Jitter {
    #[inline]
    fn amount(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            JITTER_STEP * self.index as f64 / self.total as f64
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverageCfg {
    /// Display units per meter; the area is scaled by its square.
    pub unit_scale: f64,
    pub clip: ClipCfg,
    pub jitter: Option<Jitter>,
}

impl Default for CoverageCfg {
    fn default() -> Self {
        Self {
            unit_scale: 1.0,
            clip: ClipCfg::default(),
            jitter: None,
        }
    }
}

/// Coverage of one sensor. Polygons are ordered for fan triangulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverageResult {
    pub floor: Vec<Vector3<f64>>,
    pub wall_x: Vec<Vector3<f64>>,
    pub wall_z: Vec<Vector3<f64>>,
    /// Floor area in display units squared.
    pub area: f64,
    /// Where a label belongs: floor centroid, or the sensor itself when the
    /// floor polygon is empty.
    pub anchor: Vector3<f64>,
}

impl CoverageResult {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floor.len() < 3
    }

    pub fn polygon(&self, surface: Surface) -> &[Vector3<f64>] {
        match surface {
            Surface::Floor => &self.floor,
            Surface::WallX => &self.wall_x,
            Surface::WallZ => &self.wall_z,
        }
    }
}

pub fn compute_coverage(
    frustum: &Frustum,
    sensor_position: Vector3<f64>,
    room: &RoomBounds,
    cfg: &CoverageCfg,
) -> CoverageResult {
    let mut floor = clip(frustum, Surface::Floor, room, &cfg.clip);
    let mut wall_x = clip(frustum, Surface::WallX, room, &cfg.clip);
    let mut wall_z = clip(frustum, Surface::WallZ, room, &cfg.clip);

    let area = if floor.len() >= 3 {
        area(&floor, cfg.unit_scale)
    } else {
        0.0
    };

    if let Some(j) = cfg.jitter {
        let d = j.amount();
        floor.iter_mut().for_each(|p| p.y += d);
        wall_x.iter_mut().for_each(|p| p.x += d);
        wall_z.iter_mut().for_each(|p| p.z += d);
    }

    let anchor = if floor.len() >= 3 {
        centroid(&floor)
    } else {
        sensor_position
    };

    CoverageResult {
        floor,
        wall_x,
        wall_z,
        area,
        anchor,
    }
}

/// Coverage of a catalog sensor mounted at `placement`.
pub fn for_placement(
    sensor: &SensorType,
    placement: &Placement,
    room: &RoomBounds,
    cfg: &CoverageCfg,
) -> CoverageResult {
    let frustum = PerspectiveCamera::for_sensor(sensor).world_frustum(&placement.pose());
    compute_coverage(&frustum, placement.position, room, cfg)
}
