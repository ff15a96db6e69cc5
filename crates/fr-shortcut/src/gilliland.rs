//! Gilliland correlation (Molokanov form) for ideal plates at operating reflux.

use crate::error::{ShortcutError, ShortcutResult};
use fr_core::ensure_finite;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Accepted multiples of the minimum reflux.
pub const REFLUX_FACTOR_RANGE: RangeInclusive<f64> = 1.1..=1.5;

pub const DEFAULT_REFLUX_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GillilandResult {
    pub reflux_factor: f64,
    pub reflux_ratio: f64,
    /// `(R - Rmin) / (R + 1)`
    pub x: f64,
    /// `(N - Nmin) / (N + 1)`
    pub y: f64,
    pub ideal_plates: u32,
}

/// `Y = 1 - exp(((1 + 54.4X) / (11 + 117.2X)) (X - 1) / sqrt(X))`.
pub fn gilliland_y(x: f64) -> f64 {
    1.0 - (((1.0 + 54.4 * x) / (11.0 + 117.2 * x)) * ((x - 1.0) / x.sqrt())).exp()
}

pub fn gilliland(min_stages: u32, r_min: f64, reflux_factor: f64) -> ShortcutResult<GillilandResult> {
    if !REFLUX_FACTOR_RANGE.contains(&reflux_factor) {
        return Err(ShortcutError::RefluxFactorOutOfRange { factor: reflux_factor });
    }
    if !(r_min > 0.0) {
        return Err(ShortcutError::NonPositiveMinimumReflux { r_min });
    }

    let reflux_ratio = reflux_factor * r_min;
    let x = (reflux_ratio - r_min) / (reflux_ratio + 1.0);
    let y = ensure_finite(gilliland_y(x), "Gilliland Y")?;
    let plates = ensure_finite(((min_stages as f64 + y) / (1.0 - y)).ceil(), "ideal plates")?;

    Ok(GillilandResult {
        reflux_factor,
        reflux_ratio,
        x,
        y,
        ideal_plates: plates as u32,
    })
}
