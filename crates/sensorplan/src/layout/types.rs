//! Layout inputs and outputs: sensor types, requests, configurations, placements.

use nalgebra::Vector3;
use thiserror::Error;

use crate::frustum::Pose;
use crate::units::Unit;

/// Largest admissible overlap fraction (exclusive).
pub const MAX_OVERLAP: f64 = 0.99;

/// Largest layout `solve` will produce; bigger requests are rejected.
pub const MAX_SENSORS: usize = 100_000;

/// Failures of a layout request.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The request itself is malformed; the caller should fix its inputs.
    #[error("invalid layout parameters: {reason}")]
    InvalidParameters { reason: String },
    /// Inputs are fine but no enabled sensor type works at this mount height.
    #[error("no enabled sensor type can be mounted at {mount_height} m")]
    NoFeasibleLayout { mount_height: f64 },
    #[error("unknown sensor type id {0}")]
    UnknownSensorType(u32),
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Immutable description of a sensor model.
///
/// Invariants:
/// - `id` is unique within a catalog; lower ids are preferred on ties.
/// - FOV angles are full angles in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorType {
    pub id: u32,
    pub name: String,
    pub hfov_deg: f64,
    pub vfov_deg: f64,
    /// Mount-height bounds (meters) within which the sensor tracks reliably.
    pub range_near: f64,
    pub range_far: f64,
    pub recommended: bool,
    pub checked_default: bool,
}

impl SensorType {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        hfov_deg: f64,
        vfov_deg: f64,
        range_near: f64,
        range_far: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            hfov_deg,
            vfov_deg,
            range_near,
            range_far,
            recommended: true,
            checked_default: true,
        }
    }

    /// Derive the FOVs from lens data: `optic_ratio` is throw distance over
    /// image width, `aspect_ratio` image width over height. Angles are rounded
    /// to two decimals.
    pub fn from_optics(
        id: u32,
        name: impl Into<String>,
        aspect_ratio: f64,
        optic_ratio: f64,
        range_near: f64,
        range_far: f64,
    ) -> Self {
        let fov = |r: f64| round2((1.0 / (2.0 * r)).atan().to_degrees() * 2.0);
        Self::new(
            id,
            name,
            fov(optic_ratio),
            fov(optic_ratio * aspect_ratio),
            range_near,
            range_far,
        )
    }

    #[inline]
    pub fn supports_height(&self, mount_height: f64) -> bool {
        mount_height >= self.range_near && mount_height <= self.range_far
    }

    /// Unclipped floor footprint `(along hfov, along vfov)` at `mount_height`.
    pub fn footprint(&self, mount_height: f64) -> (f64, f64) {
        (
            footprint_extent(self.hfov_deg, mount_height),
            footprint_extent(self.vfov_deg, mount_height),
        )
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[inline]
pub(crate) fn footprint_extent(fov_deg: f64, mount_height: f64) -> f64 {
    2.0 * (fov_deg.to_radians() / 2.0).tan().abs() * mount_height
}

/// Fraction of each footprint shared with its neighbours, in `[0, 0.99)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Overlap(f64);

impl Overlap {
    pub const NONE: Overlap = Overlap(0.0);

    pub fn from_fraction(fraction: f64) -> Result<Self, LayoutError> {
        if !(0.0..MAX_OVERLAP).contains(&fraction) {
            return Err(LayoutError::invalid(format!(
                "overlap must be within [0, {MAX_OVERLAP}), got {fraction}"
            )));
        }
        Ok(Self(fraction))
    }

    /// Percent (0–100) as typed by a user.
    pub fn from_percent(percent: f64) -> Result<Self, LayoutError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(LayoutError::invalid(format!(
                "overlap percentage must be within 0–100, got {percent}"
            )));
        }
        Self::from_fraction(percent / 100.0)
    }

    #[inline]
    pub fn fraction(self) -> f64 {
        self.0
    }
}

/// A tiling request, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRequest {
    pub width: f64,
    pub height: f64,
    pub mount_height: f64,
    pub overlap: Overlap,
}

impl LayoutRequest {
    pub fn new(width: f64, height: f64, mount_height: f64, overlap: Overlap) -> Self {
        Self {
            width,
            height,
            mount_height,
            overlap,
        }
    }

    /// Build a request from values typed in `unit`, with the overlap given in
    /// percent. Width and height round up to the centimetre, the mount height
    /// to the nearest centimetre.
    pub fn from_display_units(
        unit: Unit,
        width: f64,
        height: f64,
        mount_height: f64,
        overlap_percent: f64,
    ) -> Result<Self, LayoutError> {
        let request = Self {
            width: (unit.to_meters(width) * 100.0).ceil() / 100.0,
            height: (unit.to_meters(height) * 100.0).ceil() / 100.0,
            mount_height: (unit.to_meters(mount_height) * 100.0).round() / 100.0,
            overlap: Overlap::from_percent(overlap_percent)?,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("mount height", self.mount_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(LayoutError::invalid(format!(
                    "{name} must be a positive number, got {v}"
                )));
            }
        }
        Overlap::from_fraction(self.overlap.fraction()).map(|_| ())
    }
}

/// Chosen tiling. Tile dimensions are the pre-overlap footprint already
/// swapped for rotated sensors, so `tile_width` always runs along world X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub sensor_type: u32,
    pub tile_width: f64,
    pub tile_height: f64,
    pub count_w: usize,
    pub count_h: usize,
    pub rotated: bool,
    pub mount_height: f64,
    /// Centre of the first tile along X and Z.
    pub offset_x: f64,
    pub offset_z: f64,
    /// Centre-to-centre spacing along X and Z.
    pub step_x: f64,
    pub step_z: f64,
}

impl LayoutConfig {
    #[inline]
    pub fn sensor_count(&self) -> usize {
        self.count_w * self.count_h
    }

    /// One placement per tile, column-major (X index outer).
    pub fn placements(&self) -> Vec<Placement> {
        let mut out = Vec::with_capacity(self.sensor_count());
        for i in 0..self.count_w {
            for j in 0..self.count_h {
                out.push(Placement {
                    sensor_type: self.sensor_type,
                    position: Vector3::new(
                        self.offset_x + i as f64 * self.step_x,
                        self.mount_height,
                        self.offset_z + j as f64 * self.step_z,
                    ),
                    rotated: self.rotated,
                });
            }
        }
        out
    }
}

/// A concrete device: where it hangs and whether it is yawed by 90°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub sensor_type: u32,
    pub position: Vector3<f64>,
    pub rotated: bool,
}

impl Placement {
    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::looking_down(self.position, self.rotated)
    }
}
