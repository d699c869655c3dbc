//! Perspective sensor model and mount poses.
//!
//! Camera space follows the usual graphics convention: the sensor looks down
//! local −Z, local +Y is up, and the horizontal field of view spans local X.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

use super::Frustum;
use crate::geom3::Plane;
use crate::layout::SensorType;

/// Near clip distance used for catalog sensors.
pub const DEFAULT_NEAR: f64 = 0.01;

/// Symmetric perspective projection (angles in degrees, distances in meters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub hfov_deg: f64,
    pub vfov_deg: f64,
    pub near: f64,
    pub far: f64,
}

impl PerspectiveCamera {
    pub fn new(hfov_deg: f64, vfov_deg: f64, near: f64, far: f64) -> Self {
        Self {
            hfov_deg,
            vfov_deg,
            near,
            far,
        }
    }

    /// Camera for a catalog sensor: its FOVs, seeing out to `range_far`.
    pub fn for_sensor(sensor: &SensorType) -> Self {
        Self::new(sensor.hfov_deg, sensor.vfov_deg, DEFAULT_NEAR, sensor.range_far)
    }

    /// Frustum in camera space.
    pub fn local_frustum(&self) -> Frustum {
        let th = (self.hfov_deg.to_radians() / 2.0).tan();
        let tv = (self.vfov_deg.to_radians() / 2.0).tan();
        let side = |n: Vector3<f64>| Plane {
            normal: n.normalize(),
            constant: 0.0,
        };
        Frustum::new([
            Plane {
                normal: -Vector3::z(),
                constant: -self.near,
            },
            Plane {
                normal: Vector3::z(),
                constant: self.far,
            },
            side(Vector3::new(1.0, 0.0, -th)),
            side(Vector3::new(-1.0, 0.0, -th)),
            side(Vector3::new(0.0, -1.0, -tv)),
            side(Vector3::new(0.0, 1.0, -tv)),
        ])
    }

    /// Frustum in world space for a sensor mounted at `pose`.
    pub fn world_frustum(&self, pose: &Pose) -> Frustum {
        self.local_frustum().transformed(&pose.isometry)
    }
}

/// Rigid camera-to-world transform of a mounted sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub isometry: Isometry3<f64>,
}

impl Pose {
    #[inline]
    pub fn from_isometry(isometry: Isometry3<f64>) -> Self {
        Self { isometry }
    }

    /// Sensor pointing straight at the floor from `position`.
    ///
    /// Unrotated, the horizontal FOV spans world X and the vertical FOV world Z;
    /// `rotated` yaws the sensor 90° about world Y, swapping the two.
    pub fn looking_down(position: Vector3<f64>, rotated: bool) -> Self {
        let tilt = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2);
        let yaw = if rotated {
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2)
        } else {
            UnitQuaternion::identity()
        };
        Self {
            isometry: Isometry3::from_parts(Translation3::from(position), yaw * tilt),
        }
    }

    /// Sensor at `eye` aimed at `target`; `up` fixes the roll.
    pub fn looking_at(eye: Vector3<f64>, target: Vector3<f64>, up: Vector3<f64>) -> Self {
        let view = Isometry3::look_at_rh(&Point3::from(eye), &Point3::from(target), &up);
        Self {
            isometry: view.inverse(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vector3<f64> {
        self.isometry.translation.vector
    }
}
