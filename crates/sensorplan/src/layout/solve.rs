use super::types::{
    footprint_extent, LayoutConfig, LayoutError, LayoutRequest, SensorType, MAX_SENSORS,
};

/// Absorbs float noise in `extent / pitch` so an exact fit does not round up.
const COUNT_EPS: f64 = 1e-9;

/// Counts stay in `f64` (whole numbers) until the chosen layout is bounded
/// by `MAX_SENSORS`, so huge requests cannot wrap or saturate.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    sensor_type: u32,
    tile_width: f64,
    tile_height: f64,
    count_w: f64,
    count_h: f64,
    rotated: bool,
}

impl Candidate {
    #[inline]
    fn count(&self) -> f64 {
        self.count_w * self.count_h
    }
}

/// Tiles needed along one axis of length `extent`; at least 1.
fn tile_count(extent: f64, tile: f64, overlap: f64) -> f64 {
    let pitch = tile * (1.0 - overlap);
    let raw = extent / pitch - overlap / (1.0 - overlap) - COUNT_EPS;
    raw.ceil().max(1.0)
}

/// `(first centre, step)` along one axis: a lone tile is centred, otherwise
/// the first tile starts at 0 and the last ends at `extent`.
fn axis_offsets(extent: f64, tile: f64, count: usize) -> (f64, f64) {
    if count <= 1 {
        return (extent / 2.0, 0.0);
    }
    let n = count as f64;
    let gap = (n * tile - extent) / (n - 1.0);
    (tile / 2.0, tile - gap)
}

fn best_orientation(req: &LayoutRequest, t: &SensorType) -> Candidate {
    let p = req.overlap.fraction();
    let fw = footprint_extent(t.hfov_deg, req.mount_height);
    let fh = footprint_extent(t.vfov_deg, req.mount_height);
    let upright = Candidate {
        sensor_type: t.id,
        tile_width: fw,
        tile_height: fh,
        count_w: tile_count(req.width, fw, p),
        count_h: tile_count(req.height, fh, p),
        rotated: false,
    };
    let rotated = Candidate {
        sensor_type: t.id,
        tile_width: fh,
        tile_height: fw,
        count_w: tile_count(req.width, fh, p),
        count_h: tile_count(req.height, fw, p),
        rotated: true,
    };
    if rotated.count() < upright.count() {
        rotated
    } else {
        upright
    }
}

/// Choose the sensor type and orientation that cover the request with the
/// fewest sensors, then lay the tiles out edge to edge.
///
/// Ties on sensor count go to the lowest type id; per type, ties keep the
/// unrotated orientation.
pub fn solve(req: &LayoutRequest, types: &[SensorType]) -> Result<LayoutConfig, LayoutError> {
    req.validate()?;

    let mut best: Option<Candidate> = None;
    for t in types.iter().filter(|t| t.supports_height(req.mount_height)) {
        let c = best_orientation(req, t);
        tracing::debug!(
            sensor_type = c.sensor_type,
            count_w = c.count_w,
            count_h = c.count_h,
            rotated = c.rotated,
            "candidate"
        );
        let better = match &best {
            None => true,
            Some(b) => (c.count(), c.sensor_type) < (b.count(), b.sensor_type),
        };
        if better {
            best = Some(c);
        }
    }

    let c = best.ok_or(LayoutError::NoFeasibleLayout {
        mount_height: req.mount_height,
    })?;
    if !(c.count() <= MAX_SENSORS as f64) {
        return Err(LayoutError::invalid(format!(
            "layout would need more than {MAX_SENSORS} sensors ({} × {})",
            c.count_w, c.count_h
        )));
    }
    // bounded above, so both casts are exact
    let (count_w, count_h) = (c.count_w as usize, c.count_h as usize);
    let (offset_x, step_x) = axis_offsets(req.width, c.tile_width, count_w);
    let (offset_z, step_z) = axis_offsets(req.height, c.tile_height, count_h);
    let config = LayoutConfig {
        sensor_type: c.sensor_type,
        tile_width: c.tile_width,
        tile_height: c.tile_height,
        count_w,
        count_h,
        rotated: c.rotated,
        mount_height: req.mount_height,
        offset_x,
        offset_z,
        step_x,
        step_z,
    };
    tracing::debug!(
        sensor_type = config.sensor_type,
        sensors = config.sensor_count(),
        rotated = config.rotated,
        "layout"
    );
    Ok(config)
}
