//! Sensor layout: pick a sensor type and orientation, then tile a rectangle.
//!
//! The floor rectangle spans `[0, width] × [0, height]` in world (x, z).
//! Each sensor hangs at the mount height looking straight down; its
//! unclipped footprint is the tile. Tiles are laid out so the outermost ones
//! touch the rectangle edges and the interior overlap is spread evenly.

pub mod catalog;
mod solve;
mod types;

pub use solve::solve;
pub use types::{
    LayoutConfig, LayoutError, LayoutRequest, Overlap, Placement, SensorType, MAX_OVERLAP,
    MAX_SENSORS,
};
