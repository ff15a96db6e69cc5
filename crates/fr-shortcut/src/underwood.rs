//! Underwood minimum reflux.
//!
//! First equation: `sum(z_i alpha_i / (alpha_i - phi)) = 1 - q`, root between
//! the heavy key (alpha = 1) and the light key. Second equation:
//! `Rmin = sum(alpha_i xD_i / (alpha_i - phi)) - 1`.

use crate::error::{ShortcutError, ShortcutResult};
use fr_core::{RootConfig, bisect, ensure_finite};
use serde::{Deserialize, Serialize};

/// Root search for `phi`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderwoodMethod {
    /// Bisection on the pole-free interval above the heavy key
    #[default]
    Bisection,
    /// Fixed-step scan upward from zero, accepted within a tolerance band
    FixedStep,
}

/// Parameters of the fixed-step scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepScan {
    pub step: f64,
    /// Half-width of the acceptance band around `1 - q`
    pub tolerance: f64,
    pub max_steps: usize,
}

impl Default for FixedStepScan {
    fn default() -> Self {
        Self {
            step: 0.01,
            tolerance: 0.01,
            max_steps: 10_000,
        }
    }
}

/// One component's contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderwoodTerm {
    pub z_f: f64,
    pub x_d: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnderwoodResult {
    pub method: UnderwoodMethod,
    pub phi: f64,
    pub min_reflux: f64,
}

/// `sum(z_i alpha_i / (alpha_i - phi)) - (1 - q)`. Components absent from
/// the feed contribute nothing, even at their own pole.
pub fn feed_residual(terms: &[UnderwoodTerm], q: f64, phi: f64) -> f64 {
    terms
        .iter()
        .filter(|t| t.z_f > 0.0)
        .map(|t| t.z_f * t.alpha / (t.alpha - phi))
        .sum::<f64>()
        - (1.0 - q)
}

/// Upper end of the search interval: the light key, or the first feed
/// component whose volatility lies between the keys.
fn upper_pole(terms: &[UnderwoodTerm], alpha_lk: f64) -> f64 {
    terms
        .iter()
        .filter(|t| t.z_f > 0.0 && t.alpha > 1.0 && t.alpha < alpha_lk)
        .map(|t| t.alpha)
        .fold(alpha_lk, f64::min)
}

fn bisect_phi(terms: &[UnderwoodTerm], q: f64, alpha_lk: f64) -> ShortcutResult<f64> {
    let hi_pole = upper_pole(terms, alpha_lk);
    let margin = 1e-12 * (hi_pole - 1.0);
    let cfg = RootConfig {
        x_tol: 1e-12,
        ..RootConfig::default()
    };
    let root = bisect(
        "Underwood phi",
        |phi| feed_residual(terms, q, phi),
        1.0 + margin,
        hi_pole - margin,
        &cfg,
    )?;
    Ok(root.x)
}

fn scan_phi(terms: &[UnderwoodTerm], q: f64, scan: &FixedStepScan) -> ShortcutResult<f64> {
    if !(scan.step > 0.0 && scan.tolerance > 0.0) {
        return Err(ShortcutError::InvalidArg {
            what: "Underwood scan step and tolerance must be positive",
        });
    }
    (0..=scan.max_steps)
        .map(|i| i as f64 * scan.step)
        .find(|&phi| {
            let r = feed_residual(terms, q, phi);
            r.is_finite() && r.abs() < scan.tolerance
        })
        .ok_or(ShortcutError::UnderwoodNotConverged {
            steps: scan.max_steps,
        })
}

/// `Rmin` from a known `phi`.
pub fn minimum_reflux(terms: &[UnderwoodTerm], phi: f64) -> ShortcutResult<f64> {
    let sum: f64 = terms
        .iter()
        .filter(|t| t.x_d > 0.0)
        .map(|t| t.alpha * t.x_d / (t.alpha - phi))
        .sum();
    Ok(ensure_finite(sum - 1.0, "Underwood minimum reflux")?)
}

/// Solve for `phi`, check `1 < phi < alpha_LK`, then evaluate `Rmin`.
pub fn underwood(
    terms: &[UnderwoodTerm],
    q: f64,
    alpha_lk: f64,
    method: UnderwoodMethod,
    scan: &FixedStepScan,
) -> ShortcutResult<UnderwoodResult> {
    if !(alpha_lk > 1.0) {
        return Err(ShortcutError::InvalidArg {
            what: "light key relative volatility must exceed 1",
        });
    }
    let q = ensure_finite(q, "thermal condition q")?;

    let phi = match method {
        UnderwoodMethod::Bisection => bisect_phi(terms, q, alpha_lk)?,
        UnderwoodMethod::FixedStep => scan_phi(terms, q, scan)?,
    };
    if !(phi > 1.0 && phi < alpha_lk) {
        return Err(ShortcutError::UnderwoodRootOutOfRange { phi, alpha_lk });
    }

    let min_reflux = minimum_reflux(terms, phi)?;
    tracing::debug!(?method, phi, min_reflux, "Underwood");
    Ok(UnderwoodResult {
        method,
        phi,
        min_reflux,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three-component feed with keys at alpha 2 and 1.
    fn terms() -> Vec<UnderwoodTerm> {
        vec![
            UnderwoodTerm { z_f: 0.3, x_d: 0.45, alpha: 4.0 },
            UnderwoodTerm { z_f: 0.3, x_d: 0.50, alpha: 2.0 },
            UnderwoodTerm { z_f: 0.4, x_d: 0.05, alpha: 1.0 },
        ]
    }

    #[test]
    fn bisection_root_satisfies_first_equation() {
        let r = underwood(&terms(), 1.0, 2.0, UnderwoodMethod::Bisection, &FixedStepScan::default()).unwrap();
        assert!(r.phi > 1.0 && r.phi < 2.0);
        assert!(feed_residual(&terms(), 1.0, r.phi).abs() < 1e-6);
        assert!(r.min_reflux > 0.0);
    }

    #[test]
    fn fine_scan_agrees_with_bisection() {
        let scan = FixedStepScan {
            step: 0.001,
            ..FixedStepScan::default()
        };
        let exact = underwood(&terms(), 1.0, 2.0, UnderwoodMethod::Bisection, &scan).unwrap();
        let coarse = underwood(&terms(), 1.0, 2.0, UnderwoodMethod::FixedStep, &scan).unwrap();
        assert!((exact.phi - coarse.phi).abs() < 0.005);
    }

    #[test]
    fn coarse_scan_overshooting_the_band_is_rejected() {
        // Steps of 0.01 jump across the band near phi = 1.305 and land on
        // the root above the light key.
        let err = underwood(&terms(), 1.0, 2.0, UnderwoodMethod::FixedStep, &FixedStepScan::default()).unwrap_err();
        assert!(matches!(err, ShortcutError::UnderwoodRootOutOfRange { phi, .. } if phi > 2.0));
    }

    #[test]
    fn scan_is_bounded() {
        let scan = FixedStepScan {
            max_steps: 5,
            ..FixedStepScan::default()
        };
        assert_eq!(
            underwood(&terms(), 1.0, 2.0, UnderwoodMethod::FixedStep, &scan).unwrap_err(),
            ShortcutError::UnderwoodNotConverged { steps: 5 }
        );
    }

    #[test]
    fn intermediate_pole_narrows_the_bracket() {
        let mut t = terms();
        t.push(UnderwoodTerm { z_f: 0.1, x_d: 0.0, alpha: 1.5 });
        let r = underwood(&t, 1.0, 2.0, UnderwoodMethod::Bisection, &FixedStepScan::default()).unwrap();
        assert!(r.phi > 1.0 && r.phi < 1.5);
    }

    #[test]
    fn absent_components_do_not_create_poles() {
        let mut t = terms();
        t.push(UnderwoodTerm { z_f: 0.0, x_d: 0.0, alpha: 1.5 });
        let with = underwood(&t, 1.0, 2.0, UnderwoodMethod::Bisection, &FixedStepScan::default()).unwrap();
        let without = underwood(&terms(), 1.0, 2.0, UnderwoodMethod::Bisection, &FixedStepScan::default()).unwrap();
        assert!((with.phi - without.phi).abs() < 1e-9);
    }
}
