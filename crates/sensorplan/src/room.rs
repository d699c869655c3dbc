//! Room boundary surfaces: the floor and the two walls coverage is measured on.
//!
//! The room is the octant-like region above the floor and in front of both
//! walls: `x > wall_x_depth`, `y > elevation`, `z > wall_z_depth`. The three
//! planes and their pairwise edges are fixed for a given configuration.

use nalgebra::Vector3;

use crate::geom3::{intersect_planes, Plane, Ray};

/// One of the three tracked boundary surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Floor,
    WallX,
    WallZ,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Floor, Surface::WallX, Surface::WallZ];

    /// Unit normal pointing into the room.
    #[inline]
    pub fn normal(self) -> Vector3<f64> {
        match self {
            Surface::Floor => Vector3::y(),
            Surface::WallX => Vector3::x(),
            Surface::WallZ => Vector3::z(),
        }
    }

    /// The two other surfaces whose shared edges border this one.
    #[inline]
    pub fn neighbours(self) -> [Surface; 2] {
        match self {
            Surface::Floor => [Surface::WallX, Surface::WallZ],
            Surface::WallX => [Surface::Floor, Surface::WallZ],
            Surface::WallZ => [Surface::WallX, Surface::Floor],
        }
    }
}

/// Positions of the floor and wall planes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomBounds {
    pub elevation: f64,
    pub wall_x_depth: f64,
    pub wall_z_depth: f64,
}

impl Default for RoomBounds {
    fn default() -> Self {
        Self {
            elevation: 0.0,
            wall_x_depth: -10.0,
            wall_z_depth: -10.0,
        }
    }
}

impl RoomBounds {
    pub fn new(elevation: f64, wall_x_depth: f64, wall_z_depth: f64) -> Self {
        Self {
            elevation,
            wall_x_depth,
            wall_z_depth,
        }
    }

    #[inline]
    pub fn floor(&self) -> Plane {
        self.plane(Surface::Floor)
    }

    #[inline]
    pub fn wall_x(&self) -> Plane {
        self.plane(Surface::WallX)
    }

    #[inline]
    pub fn wall_z(&self) -> Plane {
        self.plane(Surface::WallZ)
    }

    /// Plane of `surface`; its normal points into the room.
    pub fn plane(&self, surface: Surface) -> Plane {
        let offset = match surface {
            Surface::Floor => self.elevation,
            Surface::WallX => self.wall_x_depth,
            Surface::WallZ => self.wall_z_depth,
        };
        Plane {
            normal: surface.normal(),
            constant: -offset,
        }
    }

    /// Room edges lying in `surface` (its intersections with both neighbours).
    pub fn edges(&self, surface: Surface) -> Vec<Ray> {
        let own = self.plane(surface);
        surface
            .neighbours()
            .iter()
            .filter_map(|&other| intersect_planes(&own, &self.plane(other)))
            .collect()
    }

    /// Valid-extent test with slack `eps` on all three axes.
    #[inline]
    pub fn contains(&self, p: &Vector3<f64>, eps: f64) -> bool {
        p.x > self.wall_x_depth - eps && p.y > self.elevation - eps && p.z > self.wall_z_depth - eps
    }
}
