//! Distillate/bottoms split from key recoveries.
//!
//! Non-key components follow a sharp split: anything more volatile than the
//! heavy key leaves entirely overhead, anything else leaves entirely in the
//! bottoms. This is a permanent modelling choice, not a placeholder for a
//! distributed non-key model.

use crate::error::ShortcutResult;
use crate::volatility::RelativeVolatility;
use fr_props::MoleFlows;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyRecoveries {
    /// Fraction of the light key recovered overhead
    pub top: f64,
    /// Fraction of the heavy key recovered in the bottoms
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSplit {
    pub distillate: MoleFlows,
    pub bottoms: MoleFlows,
}

impl ProductSplit {
    /// `B / D` on a molar basis.
    pub fn bottoms_to_distillate(&self) -> f64 {
        self.bottoms.total_kmol_per_h() / self.distillate.total_kmol_per_h()
    }
}

pub fn split_products(
    feed: &MoleFlows,
    volatilities: &[RelativeVolatility],
    light_key: &str,
    heavy_key: &str,
    recoveries: KeyRecoveries,
) -> ShortcutResult<ProductSplit> {
    let mut top = Vec::new();
    let mut bottom = Vec::new();

    for component in feed.iter() {
        let overhead_fraction = if component.name == light_key {
            recoveries.top
        } else if component.name == heavy_key {
            1.0 - recoveries.bottom
        } else {
            let alpha = crate::volatility::alpha_of(volatilities, &component.name)?;
            if alpha > 1.0 { 1.0 } else { 0.0 }
        };
        let overhead = component.kmol_per_h * overhead_fraction;
        top.push(component.with_moles(overhead));
        bottom.push(component.with_moles(component.kmol_per_h - overhead));
    }

    Ok(ProductSplit {
        distillate: MoleFlows::new(top)?,
        bottoms: MoleFlows::new(bottom)?,
    })
}
