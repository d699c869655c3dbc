use nalgebra::Vector3;

use super::Frustum;
use crate::geom3::cfg::DEDUP_EPS;
use crate::geom3::{dedup_points, intersect_planes, pairwise_intersections, sort_by_angle, Ray};
use crate::room::{RoomBounds, Surface};

/// Slack used when deciding whether a candidate vertex is inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCfg {
    /// Outward nudge applied to the frustum planes and the room extent.
    pub eps: f64,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self { eps: 0.01 }
    }
}

/// Ordered convex polygon where `frustum` meets `surface`, limited to the room.
///
/// Candidate lines are the traces of the six frustum planes on the surface
/// plus the room edges bordering it, so coverage cut off by an adjacent wall
/// or the floor gets a vertex on that edge. Candidate vertices are all pairwise
/// line intersections, kept if inside the inflated frustum and the room.
/// Fewer than three points means the sensor sees at most a sliver.
pub fn clip(
    frustum: &Frustum,
    surface: Surface,
    room: &RoomBounds,
    cfg: &ClipCfg,
) -> Vec<Vector3<f64>> {
    let target = room.plane(surface);
    let mut lines: Vec<Ray> = frustum
        .planes
        .iter()
        .filter_map(|pl| intersect_planes(pl, &target))
        .collect();
    lines.extend(room.edges(surface));

    let inflated = frustum.inflated(cfg.eps);
    let mut points: Vec<Vector3<f64>> = pairwise_intersections(&lines)
        .into_iter()
        .filter(|p| inflated.contains_point(p) && room.contains(p, cfg.eps))
        .collect();
    dedup_points(&mut points, DEDUP_EPS);
    sort_by_angle(&mut points, &surface.normal());
    points
}
