use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use sensorplan::api::{
    builtin_catalog, covered_fraction, covers_rect, find_sensor_type, for_placement,
    max_range_far, select_types, solve, CoverageCfg, FloorFootprint, Jitter, LayoutRequest,
    Placement, RoomBounds, Unit,
};

mod provenance;
mod scene;

use provenance::Payload;
use scene::{
    CoverageReport, LayoutDto, PlanReport, RequestDto, RoomDto, Scene, SensorCoverageDto,
    SensorTypeDto,
};

/// Grid resolution (cells per side) for the sampled rectangle coverage check.
const COVER_SAMPLES: usize = 64;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Plan ceiling sensor layouts and measure their coverage")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the built-in sensor catalog as JSON
    Catalog,
    /// Choose a sensor type and tile a rectangle with it
    Plan(PlanArgs),
    /// Measure the coverage of the sensors in a scene file
    Coverage(CoverageArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct PlanArgs {
    /// Rectangle extent along X, in `--unit`
    #[arg(long)]
    width: f64,
    /// Rectangle extent along Z, in `--unit`
    #[arg(long)]
    height: f64,
    /// Sensor mount height, in `--unit`
    #[arg(long)]
    mount_height: f64,
    /// Overlap between neighbouring footprints, percent
    #[arg(long, default_value_t = 15.0)]
    overlap: f64,
    /// Enabled sensor type ids (default: recommended types)
    #[arg(long, value_delimiter = ',')]
    types: Option<Vec<u32>>,
    #[arg(long, default_value = "m")]
    unit: Unit,
    /// Nudge each sensor's polygons apart for rendering
    #[arg(long)]
    jitter: bool,
    /// Write the report here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct CoverageArgs {
    #[arg(long)]
    scene: PathBuf,
    #[arg(long, default_value = "m")]
    unit: Unit,
    #[arg(long)]
    jitter: bool,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Catalog => catalog(),
        Action::Plan(args) => plan(args),
        Action::Coverage(args) => coverage(args),
        Action::Report => report(),
    }
}

fn catalog() -> Result<()> {
    let types: Vec<SensorTypeDto> = builtin_catalog().iter().map(SensorTypeDto::from).collect();
    println!("{}", serde_json::to_string_pretty(&types)?);
    Ok(())
}

fn coverage_cfg(unit: Unit, jitter: bool, index: usize, total: usize) -> CoverageCfg {
    CoverageCfg {
        unit_scale: unit.factor(),
        jitter: jitter.then_some(Jitter { index, total }),
        ..CoverageCfg::default()
    }
}

fn plan(args: PlanArgs) -> Result<()> {
    tracing::info!(
        width = args.width,
        height = args.height,
        mount_height = args.mount_height,
        overlap = args.overlap,
        unit = %args.unit,
        "plan"
    );
    let req = LayoutRequest::from_display_units(
        args.unit,
        args.width,
        args.height,
        args.mount_height,
        args.overlap,
    )
    .context("invalid plan request")?;

    let catalog = builtin_catalog();
    let types = select_types(&catalog, args.types.as_deref()).context("selecting sensor types")?;
    if let Some(max_far) = max_range_far(&types) {
        if req.mount_height > max_far {
            tracing::warn!(
                mount_height = req.mount_height,
                max_far,
                "mount height is beyond every enabled sensor's range"
            );
        }
    }
    let layout = solve(&req, &types).context("no layout for this request")?;
    let sensor = find_sensor_type(&types, layout.sensor_type)?;

    let room = RoomBounds::default();
    let placements = layout.placements();
    let total = placements.len();
    let mut sensors = Vec::with_capacity(total);
    let mut footprints = Vec::with_capacity(total);
    for (i, p) in placements.iter().enumerate() {
        let cfg = coverage_cfg(args.unit, args.jitter, i, total);
        let cov = for_placement(sensor, p, &room, &cfg);
        footprints.extend(FloorFootprint::from_coverage(&cov));
        sensors.push(SensorCoverageDto::new(i, p, &cov));
    }
    let covered = covers_rect(&footprints, req.width, req.height, COVER_SAMPLES);
    tracing::info!(
        sensor_type = layout.sensor_type,
        sensors = total,
        rotated = layout.rotated,
        covered,
        "layout"
    );

    let report = PlanReport {
        area_unit: args.unit.squared_label(),
        request: RequestDto::from(&req),
        layout: LayoutDto::new(&layout, sensor),
        sensors,
        covered,
        covered_fraction: covered_fraction(&footprints, req.width, req.height, COVER_SAMPLES),
    };
    let params = json!({
        "width": args.width,
        "height": args.height,
        "mount_height": args.mount_height,
        "overlap_percent": args.overlap,
        "types": args.types,
        "unit": args.unit.label(),
    });
    emit(&report, args.out.as_deref(), Payload::new("plan", params))
}

fn coverage(args: CoverageArgs) -> Result<()> {
    tracing::info!(scene = %args.scene.display(), unit = %args.unit, "coverage");
    let scene = Scene::load(&args.scene)?;
    let catalog = builtin_catalog();
    let room = RoomBounds::from(scene.room);
    let total = scene.sensors.len();

    let mut sensors = Vec::with_capacity(total);
    for (i, s) in scene.sensors.iter().enumerate() {
        let sensor = find_sensor_type(&catalog, s.type_id)
            .with_context(|| format!("sensor #{i} in {}", args.scene.display()))?;
        let placement = Placement::from(s);
        let cfg = coverage_cfg(args.unit, args.jitter, i, total);
        let cov = for_placement(sensor, &placement, &room, &cfg);
        if cov.is_empty() {
            tracing::debug!(index = i, "sensor sees no floor");
        }
        sensors.push(SensorCoverageDto::new(i, &placement, &cov));
    }

    let report = CoverageReport::new(args.unit, RoomDto::from(room), sensors);
    let params = json!({
        "scene": args.scene.to_string_lossy(),
        "unit": args.unit.label(),
    });
    emit(&report, args.out.as_deref(), Payload::new("coverage", params))
}

/// Print `report`, or write it to `out` together with its provenance sidecar.
fn emit<T: Serialize>(report: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    let Some(out) = out else {
        println!("{body}");
        return Ok(());
    };
    provenance::ensure_parent(out)?;
    fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": sensorplan::VERSION,
        "catalog_size": builtin_catalog().len(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
