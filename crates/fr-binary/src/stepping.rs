//! McCabe-Thiele stage stepping from the distillate down to the bottoms.

use crate::equilibrium::EquilibriumCurve;
use crate::error::{BinaryError, BinaryResult};
use crate::operating::OperatingLines;
use serde::Serialize;

/// Stepping configuration.
#[derive(Debug, Clone, Copy)]
pub struct SteppingConfig {
    /// Hard cap on stepped stages (reboiler included)
    pub max_stages: u32,
}

impl Default for SteppingConfig {
    fn default() -> Self {
        Self { max_stages: 200 }
    }
}

/// One equilibrium stage: liquid leaving, vapor entering from below is
/// read off the operating line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stage {
    /// 1-based, counted from the top
    pub number: u32,
    /// Vapor leaving the stage
    pub y: f64,
    /// Liquid leaving the stage
    pub x: f64,
    pub temperature_k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteppingResult {
    /// Stepped stages minus the reboiler
    pub ideal_stages: u32,
    /// First stage whose liquid is leaner than the feed
    pub feed_stage: Option<u32>,
    /// Every stepped stage, the reboiler last
    pub stages: Vec<Stage>,
    /// Staircase vertices starting at `(xD, xD)`
    pub staircase: Vec<[f64; 2]>,
}

impl SteppingResult {
    pub fn reboiler(&self) -> Option<&Stage> {
        self.stages.last()
    }
}

/// Alternate equilibrium and operating-line steps until the liquid is at or
/// below `xB`. Each step must lower the liquid fraction; a step that does
/// not means the operating line touches the curve.
pub fn step_stages(
    curve: &EquilibriumCurve,
    lines: &OperatingLines,
    cfg: &SteppingConfig,
) -> BinaryResult<SteppingResult> {
    let comps = lines.compositions;
    let mut x = comps.x_d;
    let mut y = comps.x_d;
    let mut stages = Vec::new();
    let mut staircase = vec![[x, y]];
    let mut feed_stage = None;
    let mut n = 0u32;

    while x > comps.x_b {
        n += 1;
        if n > cfg.max_stages {
            return Err(BinaryError::StageLimit {
                max_stages: cfg.max_stages,
            });
        }

        let t = curve.temperature_for_y(y)?;
        let x_next = curve.x_at(t);
        if !(x_next < x) {
            return Err(BinaryError::Pinch { stage: n, x });
        }
        x = x_next.max(0.0);
        stages.push(Stage {
            number: n,
            y,
            x,
            temperature_k: t,
        });
        staircase.push([x, y]);

        if x > comps.x_b {
            if feed_stage.is_none() && x < comps.x_f {
                feed_stage = Some(n);
            }
            y = lines.y_at(x);
            staircase.push([x, y]);
        }
        tracing::trace!(stage = n, x, y, t_k = t, "stepped");
    }

    let ideal_stages = n.saturating_sub(1);
    tracing::debug!(ideal_stages, ?feed_stage, "stage stepping done");
    Ok(SteppingResult {
        ideal_stages,
        feed_stage,
        stages,
        staircase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operating::Compositions;
    use fr_core::units::pa;
    use fr_props::PropertyTable;

    fn curve() -> EquilibriumCurve {
        let table = PropertyTable::builtin();
        EquilibriumCurve::new(
            table.get("benzene").unwrap().clone(),
            table.get("toluene").unwrap().clone(),
            pa(101_325.0),
        )
        .unwrap()
    }

    fn comps() -> Compositions {
        Compositions::new(0.0235, 0.4402, 0.97445).unwrap()
    }

    #[test]
    fn benzene_toluene_stage_count() {
        let lines = OperatingLines::new(3.5, comps()).unwrap();
        let result = step_stages(&curve(), &lines, &SteppingConfig::default()).unwrap();
        assert!((8..=14).contains(&result.ideal_stages), "N = {}", result.ideal_stages);
        let feed = result.feed_stage.unwrap();
        assert!(feed >= 1 && feed < result.ideal_stages);
        assert_eq!(result.stages.len() as u32, result.ideal_stages + 1);
    }

    #[test]
    fn liquid_fractions_strictly_decrease() {
        let lines = OperatingLines::new(3.5, comps()).unwrap();
        let result = step_stages(&curve(), &lines, &SteppingConfig::default()).unwrap();
        for pair in result.stages.windows(2) {
            assert!(pair[1].x < pair[0].x);
            assert!(pair[1].temperature_k > pair[0].temperature_k);
        }
        assert!(result.reboiler().unwrap().x <= comps().x_b);
    }

    #[test]
    fn more_reflux_needs_fewer_stages() {
        let c = curve();
        let cfg = SteppingConfig::default();
        let low = step_stages(&c, &OperatingLines::new(2.0, comps()).unwrap(), &cfg).unwrap();
        let high = step_stages(&c, &OperatingLines::new(8.0, comps()).unwrap(), &cfg).unwrap();
        assert!(high.ideal_stages <= low.ideal_stages);
    }

    #[test]
    fn reflux_below_minimum_is_bounded() {
        let lines = OperatingLines::new(0.5, comps()).unwrap();
        let err = step_stages(&curve(), &lines, &SteppingConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            BinaryError::Pinch { .. } | BinaryError::StageLimit { .. }
        ));
    }

    #[test]
    fn stage_cap_is_enforced() {
        let lines = OperatingLines::new(3.5, comps()).unwrap();
        let err = step_stages(&curve(), &lines, &SteppingConfig { max_stages: 3 }).unwrap_err();
        assert_eq!(err, BinaryError::StageLimit { max_stages: 3 });
    }
}
