//! Built-in sensor catalog and type selection.

use super::types::{LayoutError, SensorType};

const ASPECTS: [(&str, f64); 3] = [("16/10", 16.0 / 10.0), ("4/3", 4.0 / 3.0), ("16/9", 16.0 / 9.0)];
const OPTICS: [f64; 3] = [0.5, 0.8, 1.1];
const RANGE_NEAR: f64 = 0.6;
const RANGE_FAR: f64 = 50.0;

/// The nine stock sensors: every aspect ratio paired with every optic ratio,
/// ids ascending in that order.
pub fn builtin() -> Vec<SensorType> {
    let mut out = Vec::with_capacity(ASPECTS.len() * OPTICS.len());
    for (label, aspect) in ASPECTS {
        for optic in OPTICS {
            let id = out.len() as u32;
            out.push(SensorType::from_optics(
                id,
                format!("Ratio: {label} - Optic Ratio: {optic}"),
                aspect,
                optic,
                RANGE_NEAR,
                RANGE_FAR,
            ));
        }
    }
    out
}

/// Enabled sensor types, in ascending id order.
///
/// With `ids == None` the recommended, checked-by-default types are returned;
/// otherwise exactly the listed ones, failing on the first unknown id.
/// Explicit ids bypass the `recommended` and `checked_default` flags, so a
/// caller can opt into any catalog entry.
pub fn select(types: &[SensorType], ids: Option<&[u32]>) -> Result<Vec<SensorType>, LayoutError> {
    let mut out = match ids {
        None => types
            .iter()
            .filter(|t| t.recommended && t.checked_default)
            .cloned()
            .collect::<Vec<_>>(),
        Some(ids) => ids
            .iter()
            .map(|&id| {
                types
                    .iter()
                    .find(|t| t.id == id)
                    .cloned()
                    .ok_or(LayoutError::UnknownSensorType(id))
            })
            .collect::<Result<Vec<_>, _>>()?,
    };
    out.sort_by_key(|t| t.id);
    out.dedup_by_key(|t| t.id);
    Ok(out)
}

/// Largest `range_far` among `types`; `None` when empty.
pub fn max_range_far(types: &[SensorType]) -> Option<f64> {
    types.iter().map(|t| t.range_far).reduce(f64::max)
}

/// Look a type up by id.
pub fn find(types: &[SensorType], id: u32) -> Result<&SensorType, LayoutError> {
    types
        .iter()
        .find(|t| t.id == id)
        .ok_or(LayoutError::UnknownSensorType(id))
}
