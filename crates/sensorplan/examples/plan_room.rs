//! Solve a layout for a rectangle and print each sensor's floor coverage.
//!
//! Usage:
//!   cargo run -p sensorplan --example plan_room -- 12 8 3.5 [overlap%]

use sensorplan::coverage::footprint::{covers_rect, FloorFootprint};
use sensorplan::prelude::*;

fn main() {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let (width, height, mount) = match args.as_slice() {
        [w, h, m, ..] => (*w, *h, *m),
        _ => (12.0, 8.0, 3.5),
    };
    let overlap = args.get(3).copied().unwrap_or(10.0);

    let req = match LayoutRequest::from_display_units(Unit::Meters, width, height, mount, overlap) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let types = catalog::builtin();
    let cfg = match solve(&req, &types) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let Ok(sensor) = catalog::find(&types, cfg.sensor_type) else {
        return;
    };
    println!(
        "{} x {} of `{}` (rotated: {})",
        cfg.count_w, cfg.count_h, sensor.name, cfg.rotated
    );

    let room = RoomBounds::default();
    let mut footprints = Vec::new();
    for (i, p) in cfg.placements().iter().enumerate() {
        let cov = for_placement(sensor, p, &room, &CoverageCfg::default());
        println!(
            "  #{i:<2} at ({:>6.2}, {:>5.2}, {:>6.2})  floor {:>7.2} m²",
            p.position.x, p.position.y, p.position.z, cov.area
        );
        footprints.extend(FloorFootprint::from_coverage(&cov));
    }
    println!("covered: {}", covers_rect(&footprints, req.width, req.height, 32));
}
