//! JSON shapes read and written by the CLI.
//!
//! Positions are meters; only areas are converted to the display unit.

use anyhow::{Context, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use sensorplan::api::{
    CoverageResult, LayoutConfig, LayoutRequest, Placement, RoomBounds, SensorType, Unit,
};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RoomDto {
    pub elevation: f64,
    pub wall_x_depth: f64,
    pub wall_z_depth: f64,
}

impl Default for RoomDto {
    fn default() -> Self {
        RoomBounds::default().into()
    }
}

impl From<RoomBounds> for RoomDto {
    fn from(r: RoomBounds) -> Self {
        Self {
            elevation: r.elevation,
            wall_x_depth: r.wall_x_depth,
            wall_z_depth: r.wall_z_depth,
        }
    }
}

impl From<RoomDto> for RoomBounds {
    fn from(r: RoomDto) -> Self {
        RoomBounds::new(r.elevation, r.wall_x_depth, r.wall_z_depth)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct SensorDto {
    pub type_id: u32,
    pub position: [f64; 3],
    #[serde(default)]
    pub rotated: bool,
}

impl From<&SensorDto> for Placement {
    fn from(s: &SensorDto) -> Self {
        Placement {
            sensor_type: s.type_id,
            position: Vector3::from(s.position),
            rotated: s.rotated,
        }
    }
}

/// Scene file accepted by `cli coverage`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Scene {
    #[serde(default)]
    pub room: RoomDto,
    pub sensors: Vec<SensorDto>,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SensorTypeDto {
    pub id: u32,
    pub name: String,
    pub hfov_deg: f64,
    pub vfov_deg: f64,
    pub range_near: f64,
    pub range_far: f64,
    pub recommended: bool,
    pub checked_default: bool,
}

impl From<&SensorType> for SensorTypeDto {
    fn from(t: &SensorType) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            hfov_deg: t.hfov_deg,
            vfov_deg: t.vfov_deg,
            range_near: t.range_near,
            range_far: t.range_far,
            recommended: t.recommended,
            checked_default: t.checked_default,
        }
    }
}

fn points(ps: &[Vector3<f64>]) -> Vec<[f64; 3]> {
    ps.iter().map(|p| [p.x, p.y, p.z]).collect()
}

/// Coverage of one placed sensor.
#[derive(Clone, Debug, Serialize)]
pub struct SensorCoverageDto {
    pub index: usize,
    pub type_id: u32,
    pub position: [f64; 3],
    pub rotated: bool,
    pub area: f64,
    pub anchor: [f64; 3],
    pub floor: Vec<[f64; 3]>,
    pub wall_x: Vec<[f64; 3]>,
    pub wall_z: Vec<[f64; 3]>,
}

impl SensorCoverageDto {
    pub fn new(index: usize, placement: &Placement, cov: &CoverageResult) -> Self {
        let p = placement.position;
        Self {
            index,
            type_id: placement.sensor_type,
            position: [p.x, p.y, p.z],
            rotated: placement.rotated,
            area: cov.area,
            anchor: [cov.anchor.x, cov.anchor.y, cov.anchor.z],
            floor: points(&cov.floor),
            wall_x: points(&cov.wall_x),
            wall_z: points(&cov.wall_z),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LayoutDto {
    pub sensor_type: u32,
    pub sensor_name: String,
    pub count_w: usize,
    pub count_h: usize,
    pub rotated: bool,
    pub tile_width: f64,
    pub tile_height: f64,
    pub mount_height: f64,
}

impl LayoutDto {
    pub fn new(cfg: &LayoutConfig, sensor: &SensorType) -> Self {
        Self {
            sensor_type: cfg.sensor_type,
            sensor_name: sensor.name.clone(),
            count_w: cfg.count_w,
            count_h: cfg.count_h,
            rotated: cfg.rotated,
            tile_width: cfg.tile_width,
            tile_height: cfg.tile_height,
            mount_height: cfg.mount_height,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RequestDto {
    pub width: f64,
    pub height: f64,
    pub mount_height: f64,
    pub overlap: f64,
}

impl From<&LayoutRequest> for RequestDto {
    fn from(r: &LayoutRequest) -> Self {
        Self {
            width: r.width,
            height: r.height,
            mount_height: r.mount_height,
            overlap: r.overlap.fraction(),
        }
    }
}

/// Output of `cli plan`.
#[derive(Clone, Debug, Serialize)]
pub struct PlanReport {
    pub area_unit: &'static str,
    pub request: RequestDto,
    pub layout: LayoutDto,
    pub sensors: Vec<SensorCoverageDto>,
    /// Every cell centre of a grid over the rectangle lies in some floor
    /// footprint. Sampled, so slivers narrower than half a cell can be missed.
    pub covered: bool,
    /// Share of those cell centres that are covered.
    pub covered_fraction: f64,
}

/// Output of `cli coverage`.
#[derive(Clone, Debug, Serialize)]
pub struct CoverageReport {
    pub area_unit: &'static str,
    pub room: RoomDto,
    pub sensors: Vec<SensorCoverageDto>,
    pub total_area: f64,
}

impl CoverageReport {
    pub fn new(unit: Unit, room: RoomDto, sensors: Vec<SensorCoverageDto>) -> Self {
        let total_area = sensors.iter().map(|s| s.area).sum();
        Self {
            area_unit: unit.squared_label(),
            room,
            sensors,
            total_area,
        }
    }
}
