//! Kirkbride feed-stage location.

use crate::error::{ShortcutError, ShortcutResult};
use fr_core::ensure_finite;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KirkbrideResult {
    /// `Nr / Ns`
    pub ratio: f64,
    pub rectifying: u32,
    pub stripping: u32,
}

impl KirkbrideResult {
    /// Feed tray counted from the bottom, i.e. the number of stripping trays.
    pub fn feed_tray(&self) -> u32 {
        self.stripping
    }
}

/// `Nr/Ns = ((zHK / zLK) (xB_LK / xD_HK)^2 (B / D))^0.206`,
/// `Ns = round(N / (ratio + 1))`, `Nr = N - Ns`.
pub fn feed_stage_location(
    ideal_plates: u32,
    zf_lk: f64,
    zf_hk: f64,
    xb_lk: f64,
    xd_hk: f64,
    bottoms_to_distillate: f64,
) -> ShortcutResult<KirkbrideResult> {
    if !(zf_lk > 0.0 && xd_hk > 0.0) {
        return Err(ShortcutError::InvalidArg {
            what: "Kirkbride needs the light key in the feed and the heavy key overhead",
        });
    }
    let inside = (zf_hk / zf_lk) * (xb_lk / xd_hk).powi(2) * bottoms_to_distillate;
    let ratio = ensure_finite(inside.powf(0.206), "Kirkbride ratio")?;
    let stripping = ((ideal_plates as f64) / (ratio + 1.0)).round() as u32;
    let stripping = stripping.min(ideal_plates);

    Ok(KirkbrideResult {
        ratio,
        rectifying: ideal_plates - stripping,
        stripping,
    })
}
