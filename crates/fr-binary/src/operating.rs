//! Rectifying and stripping operating lines for a saturated-liquid feed.

use crate::error::{BinaryError, BinaryResult};
use fr_core::ensure_finite;
use serde::Serialize;

/// Light-component mole fractions of feed, distillate and bottoms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Compositions {
    pub x_b: f64,
    pub x_f: f64,
    pub x_d: f64,
}

impl Compositions {
    /// Require `0 <= xB < xF < xD <= 1`.
    pub fn new(x_b: f64, x_f: f64, x_d: f64) -> BinaryResult<Self> {
        for (v, what) in [(x_b, "bottoms fraction"), (x_f, "feed fraction"), (x_d, "distillate fraction")] {
            fr_core::ensure_fraction(v, what)?;
        }
        if !(x_b < x_f && x_f < x_d) {
            return Err(BinaryError::InconsistentCompositions { x_b, x_f, x_d });
        }
        Ok(Self { x_b, x_f, x_d })
    }
}

/// Both operating lines meet the vertical q-line at `(xF, zF)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingLines {
    pub reflux_ratio: f64,
    pub compositions: Compositions,
    /// `R / (R + 1)`
    pub rectifying_slope: f64,
    /// `xD / (R + 1)`
    pub rectifying_intercept: f64,
    /// Ordinate of the intersection at `x = xF`
    pub z_f: f64,
    /// `(zF - xB) / (xF - xB)`
    pub stripping_slope: f64,
    /// Boil-up ratio `1 / (slope - 1)`
    pub boilup_ratio: f64,
}

impl OperatingLines {
    pub fn new(reflux_ratio: f64, compositions: Compositions) -> BinaryResult<Self> {
        let r = ensure_finite(reflux_ratio, "reflux ratio")?;
        if r < 0.0 {
            return Err(BinaryError::InvalidArg {
                what: "reflux ratio must be non-negative",
            });
        }
        let Compositions { x_b, x_f, x_d } = compositions;

        let rectifying_slope = r / (r + 1.0);
        let rectifying_intercept = x_d / (r + 1.0);
        let z_f = rectifying_slope * x_f + rectifying_intercept;
        let stripping_slope = (z_f - x_b) / (x_f - x_b);
        // zF > xF whenever xF < xD, so the slope is strictly above one.
        let boilup_ratio = ensure_finite(1.0 / (stripping_slope - 1.0), "boil-up ratio")?;

        Ok(Self {
            reflux_ratio: r,
            compositions,
            rectifying_slope,
            rectifying_intercept,
            z_f,
            stripping_slope,
            boilup_ratio,
        })
    }

    pub fn rectifying(&self, x: f64) -> f64 {
        self.rectifying_slope * x + self.rectifying_intercept
    }

    pub fn stripping(&self, x: f64) -> f64 {
        let x_b = self.compositions.x_b;
        x_b + self.stripping_slope * (x - x_b)
    }

    /// Vapor composition on the active line: the lower of the two.
    pub fn y_at(&self, x: f64) -> f64 {
        self.rectifying(x).min(self.stripping(x))
    }
}

/// Minimum reflux for a saturated-liquid feed, from the pinch at `(xF, yF)`:
/// `Rmin = (xD - yF) / (yF - xF)`.
pub fn minimum_reflux(x_d: f64, x_f: f64, y_f: f64) -> BinaryResult<f64> {
    if y_f <= x_f {
        return Err(BinaryError::InvalidArg {
            what: "feed vapor must be richer than feed liquid",
        });
    }
    let r_min = ensure_finite((x_d - y_f) / (y_f - x_f), "minimum reflux")?;
    Ok(r_min.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> OperatingLines {
        let comps = Compositions::new(0.0235, 0.4402, 0.97445).unwrap();
        OperatingLines::new(3.5, comps).unwrap()
    }

    #[test]
    fn intercepts_match_hand_calculation() {
        let l = lines();
        assert!((l.rectifying_intercept - 0.2165).abs() < 1e-3);
        assert!((l.z_f - 0.5589).abs() < 1e-3);
        assert!((l.boilup_ratio - 3.51).abs() < 0.02);
    }

    #[test]
    fn lines_pass_through_products_and_meet_at_feed() {
        let l = lines();
        let c = l.compositions;
        assert!((l.rectifying(c.x_d) - c.x_d).abs() < 1e-12);
        assert!((l.stripping(c.x_b) - c.x_b).abs() < 1e-12);
        assert!((l.rectifying(c.x_f) - l.stripping(c.x_f)).abs() < 1e-12);
    }

    #[test]
    fn active_line_switches_at_feed() {
        let l = lines();
        assert_eq!(l.y_at(0.8), l.rectifying(0.8));
        assert_eq!(l.y_at(0.2), l.stripping(0.2));
    }

    #[test]
    fn compositions_must_be_ordered() {
        assert!(matches!(
            Compositions::new(0.5, 0.4, 0.9),
            Err(BinaryError::InconsistentCompositions { .. })
        ));
        assert!(Compositions::new(0.0, 0.4, 1.0).is_ok());
        assert!(Compositions::new(-0.1, 0.4, 0.9).is_err());
    }

    #[test]
    fn negative_reflux_is_rejected() {
        let comps = Compositions::new(0.02, 0.44, 0.97).unwrap();
        assert!(OperatingLines::new(-1.0, comps).is_err());
        assert!(OperatingLines::new(0.0, comps).is_ok());
    }

    #[test]
    fn minimum_reflux_from_pinch() {
        let r = minimum_reflux(0.97, 0.44, 0.66).unwrap();
        assert!((r - 0.31 / 0.22).abs() < 1e-12);
        assert!(minimum_reflux(0.97, 0.44, 0.40).is_err());
    }
}
