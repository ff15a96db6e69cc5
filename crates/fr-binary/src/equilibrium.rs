//! Ideal (Raoult's law) vapor-liquid equilibrium of a binary at fixed pressure.
//!
//! The curve is parameterised by temperature between the two boiling points:
//! `x(T) = (P - Pb(T)) / (Pa(T) - Pb(T))`, `y(T) = x(T) Pa(T) / P`.

use crate::error::{BinaryError, BinaryResult};
use fr_core::units::{Pressure, k, to_k, to_pa};
use fr_core::{RootConfig, bisect, ensure_finite, linspace};
use fr_props::CompoundProperties;

#[derive(Debug, Clone)]
pub struct EquilibriumCurve {
    light: CompoundProperties,
    heavy: CompoundProperties,
    pressure_pa: f64,
    /// Boiling point of the light component at column pressure [K]
    t_light_k: f64,
    /// Boiling point of the heavy component at column pressure [K]
    t_heavy_k: f64,
    root_cfg: RootConfig,
}

impl EquilibriumCurve {
    pub fn new(light: CompoundProperties, heavy: CompoundProperties, pressure: Pressure) -> BinaryResult<Self> {
        let pressure_pa = ensure_finite(to_pa(pressure), "column pressure")?;
        if pressure_pa <= 0.0 {
            return Err(BinaryError::InvalidArg {
                what: "column pressure must be positive",
            });
        }
        let t_light_k = to_k(light.saturation_temperature(pressure)?.temperature);
        let t_heavy_k = to_k(heavy.saturation_temperature(pressure)?.temperature);
        if t_light_k >= t_heavy_k {
            return Err(BinaryError::InvalidArg {
                what: "light component must boil below the heavy component at column pressure",
            });
        }
        tracing::debug!(
            light = light.key,
            heavy = heavy.key,
            t_light_k,
            t_heavy_k,
            "equilibrium curve bounds"
        );
        Ok(Self {
            light,
            heavy,
            pressure_pa,
            t_light_k,
            t_heavy_k,
            root_cfg: RootConfig::default(),
        })
    }

    pub fn light(&self) -> &CompoundProperties {
        &self.light
    }

    pub fn heavy(&self) -> &CompoundProperties {
        &self.heavy
    }

    pub fn pressure_pa(&self) -> f64 {
        self.pressure_pa
    }

    /// `(T_light, T_heavy)`: the temperature span of the two-phase region [K].
    pub fn temperature_range_k(&self) -> (f64, f64) {
        (self.t_light_k, self.t_heavy_k)
    }

    fn psat_pa(&self, c: &CompoundProperties, t_k: f64) -> f64 {
        c.vapor_pressure.ln_pressure_pa(t_k).exp()
    }

    /// Liquid mole fraction of the light component at bubble temperature `t_k`.
    pub fn x_at(&self, t_k: f64) -> f64 {
        let pa = self.psat_pa(&self.light, t_k);
        let pb = self.psat_pa(&self.heavy, t_k);
        (self.pressure_pa - pb) / (pa - pb)
    }

    /// Vapor mole fraction of the light component at temperature `t_k`.
    pub fn y_at(&self, t_k: f64) -> f64 {
        self.x_at(t_k) * self.psat_pa(&self.light, t_k) / self.pressure_pa
    }

    /// Dew temperature of a vapor with light-component fraction `y`.
    pub fn temperature_for_y(&self, y: f64) -> BinaryResult<f64> {
        let y = fr_core::ensure_fraction(y, "vapor mole fraction")?;
        let root = bisect(
            "dew temperature",
            |t| self.y_at(t) - y,
            self.t_light_k,
            self.t_heavy_k,
            &self.root_cfg,
        )?;
        Ok(root.x)
    }

    /// Bubble temperature of a liquid with light-component fraction `x`.
    pub fn temperature_for_x(&self, x: f64) -> BinaryResult<f64> {
        let x = fr_core::ensure_fraction(x, "liquid mole fraction")?;
        let root = bisect(
            "bubble temperature",
            |t| self.x_at(t) - x,
            self.t_light_k,
            self.t_heavy_k,
            &self.root_cfg,
        )?;
        Ok(root.x)
    }

    /// Liquid in equilibrium with vapor `y`.
    pub fn x_for_y(&self, y: f64) -> BinaryResult<f64> {
        let t = self.temperature_for_y(y)?;
        Ok(ensure_finite(self.x_at(t), "equilibrium liquid fraction")?)
    }

    /// Vapor in equilibrium with liquid `x`.
    pub fn y_for_x(&self, x: f64) -> BinaryResult<f64> {
        let t = self.temperature_for_x(x)?;
        Ok(ensure_finite(self.y_at(t), "equilibrium vapor fraction")?)
    }

    /// `n` `(x, y)` points sampled evenly in temperature.
    pub fn sample(&self, n: usize) -> Vec<[f64; 2]> {
        linspace(self.t_light_k, self.t_heavy_k, n)
            .into_iter()
            .map(|t| [self.x_at(t), self.y_at(t)])
            .filter(|[x, y]| x.is_finite() && y.is_finite())
            .collect()
    }

    /// Bubble point of liquid `x` as a typed temperature.
    pub fn bubble_temperature(&self, x: f64) -> BinaryResult<fr_core::units::Temperature> {
        Ok(k(self.temperature_for_x(x)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::units::pa;
    use fr_props::PropertyTable;

    fn benzene_toluene() -> EquilibriumCurve {
        let table = PropertyTable::builtin();
        EquilibriumCurve::new(
            table.get("benzene").unwrap().clone(),
            table.get("toluene").unwrap().clone(),
            pa(101_325.0),
        )
        .unwrap()
    }

    #[test]
    fn curve_spans_boiling_points() {
        let curve = benzene_toluene();
        let (t_lo, t_hi) = curve.temperature_range_k();
        assert!((t_lo - 353.3).abs() < 0.5);
        assert!((t_hi - 383.9).abs() < 0.5);
        assert!((curve.x_at(t_lo) - 1.0).abs() < 1e-6);
        assert!(curve.x_at(t_hi).abs() < 1e-6);
    }

    #[test]
    fn vapor_is_richer_than_liquid() {
        let curve = benzene_toluene();
        for x in [0.05, 0.2, 0.44, 0.7, 0.95] {
            let y = curve.y_for_x(x).unwrap();
            assert!(y > x, "x={x}, y={y}");
        }
    }

    #[test]
    fn dew_and_bubble_are_inverse() {
        let curve = benzene_toluene();
        let y = curve.y_for_x(0.44).unwrap();
        let x = curve.x_for_y(y).unwrap();
        assert!((x - 0.44).abs() < 1e-7);
    }

    #[test]
    fn sample_is_monotone() {
        let pts = benzene_toluene().sample(50);
        assert_eq!(pts.len(), 50);
        for pair in pts.windows(2) {
            assert!(pair[1][0] < pair[0][0]);
            assert!(pair[1][1] < pair[0][1]);
        }
    }

    #[test]
    fn reversed_keys_are_rejected() {
        let table = PropertyTable::builtin();
        let err = EquilibriumCurve::new(
            table.get("toluene").unwrap().clone(),
            table.get("benzene").unwrap().clone(),
            pa(101_325.0),
        )
        .unwrap_err();
        assert!(matches!(err, BinaryError::InvalidArg { .. }));
    }

    #[test]
    fn out_of_range_fraction_is_rejected() {
        assert!(benzene_toluene().x_for_y(1.2).is_err());
    }
}
