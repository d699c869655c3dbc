//! Basic 3D types: coordinate axes, planes and rays.
//!
//! - `Axis`: enumerated coordinate selection used by the pivoting solves.
//! - `Plane`: `normal · p + constant = 0` with a unit normal.
//! - `Ray`: origin plus unit direction, treated as an undirected line.
//!
//! Code cross-refs: `intersect::{intersect_planes, intersect_rays}`

use nalgebra::{Isometry3, Vector3};
use thiserror::Error;

/// Validation failures of the checked constructors.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeomError {
    #[error("plane normal must be a finite non-zero vector")]
    DegenerateNormal,
    #[error("ray direction must be a finite non-zero vector")]
    DegenerateDirection,
}

/// Coordinate axis of R³.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two remaining axes in cyclic order (X → (Y, Z), Y → (Z, X), Z → (X, Y)).
    #[inline]
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Axes sorted by decreasing `|v[axis]|` (stable: X before Y before Z on ties).
    pub fn by_decreasing_magnitude(v: &Vector3<f64>) -> [Axis; 3] {
        let mut axes = Axis::ALL;
        axes.sort_by(|a, b| v[b.index()].abs().total_cmp(&v[a.index()].abs()));
        axes
    }
}

/// Plane `normal · p + constant = 0`.
///
/// Invariants:
/// - `normal` has unit length when built through `new`/`from_normal_and_point`.
/// - Fields are public; the intersectors still guard against a degenerate
///   normal written directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub constant: f64,
}

impl Plane {
    /// Normalize `normal` (scaling `constant` by the same factor so the
    /// geometric plane is unchanged). Rejects zero or non-finite normals.
    pub fn new(normal: Vector3<f64>, constant: f64) -> Result<Self, GeomError> {
        let norm = normal.norm();
        if !norm.is_finite() || norm <= 0.0 || !constant.is_finite() {
            return Err(GeomError::DegenerateNormal);
        }
        Ok(Self {
            normal: normal / norm,
            constant: constant / norm,
        })
    }

    /// Plane through `point` with the given normal direction.
    pub fn from_normal_and_point(
        normal: Vector3<f64>,
        point: Vector3<f64>,
    ) -> Result<Self, GeomError> {
        let norm = normal.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(GeomError::DegenerateNormal);
        }
        let n = normal / norm;
        Ok(Self {
            normal: n,
            constant: -n.dot(&point),
        })
    }

    /// Signed distance (positive on the side the normal points to).
    #[inline]
    pub fn distance_to_point(&self, p: &Vector3<f64>) -> f64 {
        self.normal.dot(p) + self.constant
    }

    /// Image of the plane under a rigid motion `p ↦ R p + t`.
    ///
    /// With `n' = R n` and `c' = c − n'·t`, every image point `R p + t`
    /// satisfies `n'·(R p + t) + c' = n·p + c`.
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Self {
        let normal = iso.rotation * self.normal;
        let constant = self.constant - normal.dot(&iso.translation.vector);
        Self { normal, constant }
    }
}

/// Line through `origin` along unit `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>) -> Result<Self, GeomError> {
        let norm = direction.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(GeomError::DegenerateDirection);
        }
        Ok(Self {
            origin,
            direction: direction / norm,
        })
    }

    /// Point at parameter `t`; negative values are valid.
    #[inline]
    pub fn at(&self, t: f64) -> Vector3<f64> {
        self.origin + self.direction * t
    }
}
