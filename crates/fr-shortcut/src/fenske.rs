//! Fenske minimum stages at total reflux.

use crate::error::{ShortcutError, ShortcutResult};
use fr_core::ensure_finite;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FenskeResult {
    /// `(xD_LK / xD_HK) (xB_HK / xB_LK)`
    pub separation_factor: f64,
    pub alpha_lk: f64,
    pub min_stages: u32,
}

/// `Nmin = ceil(ln(separation factor) / ln(alpha_LK))`, one less when the
/// reboiler does not count as a stage. Never negative.
pub fn minimum_stages(
    xd_lk: f64,
    xd_hk: f64,
    xb_lk: f64,
    xb_hk: f64,
    alpha_lk: f64,
    partial_reboiler: bool,
) -> ShortcutResult<FenskeResult> {
    if !(xd_hk > 0.0 && xb_lk > 0.0) {
        return Err(ShortcutError::InvalidArg {
            what: "both keys must appear in both products",
        });
    }
    if !(alpha_lk > 1.0) {
        return Err(ShortcutError::InvalidArg {
            what: "light key relative volatility must exceed 1",
        });
    }

    let separation_factor = ensure_finite((xd_lk / xd_hk) * (xb_hk / xb_lk), "Fenske separation factor")?;
    let n = ensure_finite((separation_factor.ln() / alpha_lk.ln()).ceil(), "Fenske stages")?;
    let n = if partial_reboiler { n } else { n - 1.0 };

    Ok(FenskeResult {
        separation_factor,
        alpha_lk,
        min_stages: n.max(0.0) as u32,
    })
}
