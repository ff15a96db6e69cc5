//! Pure-component correlations: vapor pressure and heat of vaporization.

use fr_core::units::{Pressure, Temperature, pa, to_k};
use fr_core::{FrError, FrResult, RootConfig, ensure_finite, find_root_from_seed};

/// Seed temperature for saturation-temperature searches [K].
pub const TSAT_SEED_K: f64 = 400.0;

/// Where a temperature falls relative to a correlation's validated window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeCheck {
    /// Inside `[t_min, t_max]`.
    Within,
    /// Below `t_min`; result is an extrapolation.
    BelowMin { t_min_k: f64 },
    /// Above `t_max`; result is an extrapolation.
    AboveMax { t_max_k: f64 },
    /// The correlation declares no validity window.
    Unbounded,
}

impl RangeCheck {
    pub fn classify(t_k: f64, t_min_k: f64, t_max_k: f64) -> Self {
        if t_k < t_min_k {
            RangeCheck::BelowMin { t_min_k }
        } else if t_k > t_max_k {
            RangeCheck::AboveMax { t_max_k }
        } else {
            RangeCheck::Within
        }
    }

    /// False only when the value was extrapolated outside a declared window.
    pub fn is_validated(&self) -> bool {
        matches!(self, RangeCheck::Within | RangeCheck::Unbounded)
    }

    /// Short advisory for console output, `None` when validated.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            RangeCheck::BelowMin { .. } => Some("Inaccurate below T-min"),
            RangeCheck::AboveMax { .. } => Some("Inaccurate above T-max"),
            RangeCheck::Within | RangeCheck::Unbounded => None,
        }
    }
}

/// Perry vapor pressure equation, `ln(P/Pa) = C1 + C2/T + C3 ln T + C4 T^C5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerryVaporPressure {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
    pub t_min_k: f64,
    pub t_max_k: f64,
}

/// Reduced-temperature (Wagner-type) form,
/// `P = Pc exp((A x + B x^1.5 + C x^3 + D x^6) / (1 - x))` with `x = 1 - T/Tc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedAntoine {
    pub critical_pressure_pa: f64,
    pub critical_temperature_k: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VaporPressureCorrelation {
    Perry(PerryVaporPressure),
    ReducedAntoine(ReducedAntoine),
}

/// Vapor pressure together with its range flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporPressure {
    pub pressure: Pressure,
    pub range: RangeCheck,
}

/// Saturation temperature together with its range flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationTemperature {
    pub temperature: Temperature,
    pub range: RangeCheck,
}

fn checked_kelvin(t: Temperature) -> FrResult<f64> {
    let t_k = ensure_finite(to_k(t), "temperature")?;
    if t_k <= 0.0 {
        return Err(FrError::InvalidArg {
            what: "temperature must be positive",
        });
    }
    Ok(t_k)
}

impl VaporPressureCorrelation {
    /// Natural log of the vapor pressure in Pa.
    ///
    /// Working in log space keeps the saturation search finite where the
    /// pressure itself underflows.
    pub fn ln_pressure_pa(&self, t_k: f64) -> f64 {
        match self {
            VaporPressureCorrelation::Perry(c) => {
                c.c1 + c.c2 / t_k + c.c3 * t_k.ln() + c.c4 * t_k.powf(c.c5)
            }
            VaporPressureCorrelation::ReducedAntoine(c) => {
                let x = 1.0 - t_k / c.critical_temperature_k;
                let poly = c.a * x + c.b * x.powf(1.5) + c.c * x.powi(3) + c.d * x.powi(6);
                c.critical_pressure_pa.ln() + poly / (1.0 - x)
            }
        }
    }

    pub fn range_check(&self, t_k: f64) -> RangeCheck {
        match self {
            VaporPressureCorrelation::Perry(c) => RangeCheck::classify(t_k, c.t_min_k, c.t_max_k),
            VaporPressureCorrelation::ReducedAntoine(_) => RangeCheck::Unbounded,
        }
    }

    /// Temperature interval searched by `saturation_temperature`.
    fn search_domain_k(&self) -> (f64, f64) {
        match self {
            VaporPressureCorrelation::Perry(c) => (0.5 * c.t_min_k, 1.5 * c.t_max_k),
            VaporPressureCorrelation::ReducedAntoine(c) => (1.0, c.critical_temperature_k),
        }
    }

    /// Vapor pressure at `t`. Never fails on range; extrapolations are flagged.
    pub fn vapor_pressure(&self, t: Temperature) -> FrResult<VaporPressure> {
        let t_k = checked_kelvin(t)?;
        let p_pa = ensure_finite(self.ln_pressure_pa(t_k).exp(), "vapor pressure")?;
        Ok(VaporPressure {
            pressure: pa(p_pa),
            range: self.range_check(t_k),
        })
    }

    /// Temperature at which the vapor pressure equals `p`.
    pub fn saturation_temperature(&self, p: Pressure, cfg: &RootConfig) -> FrResult<SaturationTemperature> {
        let p_pa = ensure_finite(p.value, "pressure")?;
        if p_pa <= 0.0 {
            return Err(FrError::InvalidArg {
                what: "pressure must be positive",
            });
        }
        let ln_p = p_pa.ln();
        let root = find_root_from_seed(
            "saturation temperature",
            |t_k| self.ln_pressure_pa(t_k) - ln_p,
            TSAT_SEED_K,
            self.search_domain_k(),
            cfg,
        )?;
        Ok(SaturationTemperature {
            temperature: fr_core::units::k(root.x),
            range: self.range_check(root.x),
        })
    }
}

/// Perry heat of vaporization,
/// `ΔHv = C1 (1 - Tr)^(C2 + C3 Tr + C4 Tr²)` in J/kmol with `Tr = T/Tc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerryHeatOfVaporization {
    pub c1_j_per_kmol: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub critical_temperature_k: f64,
}

impl PerryHeatOfVaporization {
    /// Heat of vaporization [J/kmol]; zero at and above the critical point.
    pub fn at(&self, t: Temperature) -> FrResult<f64> {
        let t_k = checked_kelvin(t)?;
        let tr = t_k / self.critical_temperature_k;
        if tr >= 1.0 {
            return Ok(0.0);
        }
        let exponent = self.c2 + self.c3 * tr + self.c4 * tr * tr;
        ensure_finite(self.c1_j_per_kmol * (1.0 - tr).powf(exponent), "heat of vaporization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::units::{k, to_pa};

    fn pentane() -> VaporPressureCorrelation {
        VaporPressureCorrelation::Perry(PerryVaporPressure {
            c1: 78.741,
            c2: -5420.3,
            c3: -8.8253,
            c4: 9.6171e-6,
            c5: 2.0,
            t_min_k: 143.42,
            t_max_k: 469.7,
        })
    }

    fn benzene() -> VaporPressureCorrelation {
        VaporPressureCorrelation::ReducedAntoine(ReducedAntoine {
            critical_pressure_pa: 48.9e5,
            critical_temperature_k: 562.2,
            a: -6.98273,
            b: 1.33213,
            c: -2.62863,
            d: -3.33399,
        })
    }

    #[test]
    fn range_classification() {
        assert_eq!(RangeCheck::classify(300.0, 200.0, 400.0), RangeCheck::Within);
        assert!(matches!(
            RangeCheck::classify(100.0, 200.0, 400.0),
            RangeCheck::BelowMin { .. }
        ));
        assert!(matches!(
            RangeCheck::classify(500.0, 200.0, 400.0),
            RangeCheck::AboveMax { .. }
        ));
        assert!(RangeCheck::Unbounded.is_validated());
        assert_eq!(
            RangeCheck::AboveMax { t_max_k: 1.0 }.advisory(),
            Some("Inaccurate above T-max")
        );
    }

    #[test]
    fn pentane_normal_boiling_point() {
        // n-pentane boils near 309 K at 1 atm
        let tsat = pentane()
            .saturation_temperature(pa(101_325.0), &RootConfig::default())
            .unwrap();
        let t_k = to_k(tsat.temperature);
        assert!((t_k - 309.2).abs() < 1.0, "Tsat = {t_k}");
        assert_eq!(tsat.range, RangeCheck::Within);
    }

    #[test]
    fn perry_out_of_range_is_flagged_not_failed() {
        let vp = pentane().vapor_pressure(k(520.0)).unwrap();
        assert!(to_pa(vp.pressure) > 0.0);
        assert!(matches!(vp.range, RangeCheck::AboveMax { .. }));
        assert!(!vp.range.is_validated());
    }

    #[test]
    fn benzene_normal_boiling_point() {
        let tsat = benzene()
            .saturation_temperature(pa(101_325.0), &RootConfig::default())
            .unwrap();
        let t_k = to_k(tsat.temperature);
        assert!((t_k - 353.3).abs() < 0.5, "Tsat = {t_k}");
        assert_eq!(tsat.range, RangeCheck::Unbounded);
    }

    #[test]
    fn reduced_form_has_no_window() {
        for t in [150.0, 300.0, 450.0, 560.0] {
            let vp = benzene().vapor_pressure(k(t)).unwrap();
            assert_eq!(vp.range, RangeCheck::Unbounded);
        }
    }

    #[test]
    fn rejects_non_positive_temperature() {
        assert!(pentane().vapor_pressure(k(0.0)).is_err());
        assert!(pentane().vapor_pressure(k(f64::NAN)).is_err());
    }

    #[test]
    fn heat_of_vaporization_vanishes_at_critical_point() {
        let hv = PerryHeatOfVaporization {
            c1_j_per_kmol: 3.91e7,
            c2: 0.39,
            c3: 0.0,
            c4: 0.0,
            critical_temperature_k: 469.7,
        };
        let at_nbp = hv.at(k(309.2)).unwrap();
        // ~25.8 MJ/kmol for n-pentane at its normal boiling point
        assert!(at_nbp > 2.4e7 && at_nbp < 2.8e7, "ΔHv = {at_nbp}");
        assert_eq!(hv.at(k(469.7)).unwrap(), 0.0);
        assert_eq!(hv.at(k(500.0)).unwrap(), 0.0);
    }
}
