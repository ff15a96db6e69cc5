//! Vapor pressures at the column temperature and volatilities relative to
//! the heavy key.

use crate::error::{ShortcutError, ShortcutResult};
use fr_core::units::{Pressure, Temperature, to_k, to_pa};
use fr_props::{PropertyTable, RangeCheck};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaporPressureEntry {
    pub name: String,
    pub pressure_pa: f64,
    /// Ideal K-value `Psat / P`
    pub k_value: f64,
    #[serde(skip)]
    pub range: RangeCheck,
}

impl VaporPressureEntry {
    pub fn advisory(&self) -> Option<&'static str> {
        self.range.advisory()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeVolatility {
    pub name: String,
    pub alpha: f64,
}

/// Evaluate every named component at `t`. Extrapolated results are kept and
/// flagged.
pub fn vapor_pressures<'a, I>(
    table: &PropertyTable,
    names: I,
    t: Temperature,
    p: Pressure,
) -> ShortcutResult<Vec<VaporPressureEntry>>
where
    I: IntoIterator<Item = &'a str>,
{
    let p_pa = to_pa(p);
    if !(p_pa.is_finite() && p_pa > 0.0) {
        return Err(ShortcutError::InvalidArg {
            what: "column pressure must be positive",
        });
    }

    names
        .into_iter()
        .map(|name| {
            let vp = table.get(name)?.vapor_pressure(t)?;
            let pressure_pa = to_pa(vp.pressure);
            if let Some(advisory) = vp.range.advisory() {
                tracing::warn!(component = name, t_k = to_k(t), advisory, "vapor pressure outside validated range");
            }
            Ok(VaporPressureEntry {
                name: name.to_string(),
                pressure_pa,
                k_value: pressure_pa / p_pa,
                range: vp.range,
            })
        })
        .collect()
}

/// `alpha_i = Psat_i / Psat_HK`.
pub fn relative_volatilities(
    entries: &[VaporPressureEntry],
    heavy_key: &str,
) -> ShortcutResult<Vec<RelativeVolatility>> {
    let hk = entries
        .iter()
        .find(|e| e.name == heavy_key)
        .ok_or_else(|| ShortcutError::KeyNotInFeed {
            name: heavy_key.to_string(),
        })?;
    if hk.pressure_pa <= 0.0 {
        return Err(ShortcutError::InvalidArg {
            what: "heavy key vapor pressure must be positive",
        });
    }

    entries
        .iter()
        .map(|e| {
            let alpha = fr_core::ensure_finite(e.pressure_pa / hk.pressure_pa, "relative volatility")?;
            Ok(RelativeVolatility {
                name: e.name.clone(),
                alpha,
            })
        })
        .collect()
}

pub fn alpha_of(volatilities: &[RelativeVolatility], name: &str) -> ShortcutResult<f64> {
    volatilities
        .iter()
        .find(|v| v.name == name)
        .map(|v| v.alpha)
        .ok_or_else(|| ShortcutError::KeyNotInFeed { name: name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::units::{k, kpa};

    #[test]
    fn debutanizer_volatilities() {
        let table = PropertyTable::builtin();
        let names = ["methyl-acetylene", "ethyl-acetylene", "1-butene", "butane", "pentane"];
        let vps = vapor_pressures(&table, names, k(413.0), kpa(1810.0)).unwrap();
        let alphas = relative_volatilities(&vps, "pentane").unwrap();

        assert_eq!(alpha_of(&alphas, "pentane").unwrap(), 1.0);
        assert!((alpha_of(&alphas, "ethyl-acetylene").unwrap() - 2.226).abs() < 0.01);
        assert!((alpha_of(&alphas, "methyl-acetylene").unwrap() - 5.066).abs() < 0.02);
        assert!((alpha_of(&alphas, "butane").unwrap() - 2.341).abs() < 0.01);
    }

    #[test]
    fn out_of_range_components_are_flagged_not_failed() {
        let table = PropertyTable::builtin();
        let vps = vapor_pressures(&table, ["hydrogen", "pentane"], k(413.0), kpa(1810.0)).unwrap();
        assert!(vps[0].advisory().is_some());
        assert!(vps[1].advisory().is_none());
    }

    #[test]
    fn missing_heavy_key_is_reported() {
        let table = PropertyTable::builtin();
        let vps = vapor_pressures(&table, ["butane"], k(413.0), kpa(1810.0)).unwrap();
        assert!(matches!(
            relative_volatilities(&vps, "pentane"),
            Err(ShortcutError::KeyNotInFeed { .. })
        ));
    }
}
