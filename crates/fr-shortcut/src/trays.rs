//! Ideal plates to actual trays.

use crate::error::{ShortcutError, ShortcutResult};
use serde::Serialize;

pub const DEFAULT_TRAY_EFFICIENCY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActualTrays {
    /// Fractional efficiency in (0, 1]
    pub efficiency: f64,
    pub trays: u32,
}

/// Values above 1 are read as percentages.
pub fn normalize_efficiency(efficiency: f64) -> ShortcutResult<f64> {
    let e = if efficiency > 1.0 { efficiency / 100.0 } else { efficiency };
    if !(e.is_finite() && e > 0.0 && e <= 1.0) {
        return Err(ShortcutError::EfficiencyOutOfRange { efficiency });
    }
    Ok(e)
}

pub fn actual_trays(ideal_plates: u32, efficiency: f64) -> ShortcutResult<ActualTrays> {
    let efficiency = normalize_efficiency(efficiency)?;
    Ok(ActualTrays {
        efficiency,
        trays: (ideal_plates as f64 / efficiency).ceil() as u32,
    })
}
