//! Property-table queries behind the `compounds`, `constants`,
//! `vapor-pressure` and `tsat` commands.

use crate::error::{AppError, AppResult};
use fr_core::units::{k, pa, to_k, to_pa};
use fr_props::{CompoundProperties, PropertyTable, RangeCheck};

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundSummary {
    pub key: &'static str,
    pub display_name: &'static str,
    pub formula: &'static str,
    pub molar_mass: f64,
    pub has_heat_of_vaporization: bool,
}

impl From<&CompoundProperties> for CompoundSummary {
    fn from(c: &CompoundProperties) -> Self {
        Self {
            key: c.key,
            display_name: c.display_name,
            formula: c.formula,
            molar_mass: c.molar_mass,
            has_heat_of_vaporization: c.heat_of_vaporization.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VaporPressureQuery {
    pub compound: &'static str,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub range: RangeCheck,
    /// J/kmol, when tabulated
    pub heat_of_vaporization: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaturationQuery {
    pub compound: &'static str,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub range: RangeCheck,
}

pub fn list_compounds(table: &PropertyTable, query: Option<&str>) -> Vec<CompoundSummary> {
    table
        .filter(query.unwrap_or(""))
        .into_iter()
        .map(CompoundSummary::from)
        .collect()
}

pub fn compound<'t>(table: &'t PropertyTable, name: &str) -> AppResult<&'t CompoundProperties> {
    Ok(table.get(name)?)
}

pub fn vapor_pressure(table: &PropertyTable, name: &str, temperature_k: f64) -> AppResult<VaporPressureQuery> {
    if !(temperature_k.is_finite() && temperature_k > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "temperature must be positive, got {temperature_k} K"
        )));
    }
    let c = table.get(name)?;
    let vp = c.vapor_pressure(k(temperature_k))?;
    Ok(VaporPressureQuery {
        compound: c.key,
        temperature_k,
        pressure_pa: to_pa(vp.pressure),
        range: vp.range,
        heat_of_vaporization: c.heat_of_vaporization(k(temperature_k))?,
    })
}

pub fn saturation_temperature(table: &PropertyTable, name: &str, pressure_pa: f64) -> AppResult<SaturationQuery> {
    if !(pressure_pa.is_finite() && pressure_pa > 0.0) {
        return Err(AppError::InvalidInput(format!(
            "pressure must be positive, got {pressure_pa} Pa"
        )));
    }
    let c = table.get(name)?;
    let sat = c.saturation_temperature(pa(pressure_pa))?;
    Ok(SaturationQuery {
        compound: c.key,
        pressure_pa,
        temperature_k: to_k(sat.temperature),
        range: sat.range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_filters_by_query() {
        let table = PropertyTable::builtin();
        assert_eq!(list_compounds(&table, None).len(), table.len());
        let butanes = list_compounds(&table, Some("but"));
        assert!(butanes.iter().any(|c| c.key == "butane"));
        assert!(butanes.iter().all(|c| c.key != "pentane"));
    }

    #[test]
    fn saturation_inverts_vapor_pressure() {
        let table = PropertyTable::builtin();
        let vp = vapor_pressure(&table, "pentane", 380.0).unwrap();
        let sat = saturation_temperature(&table, "pentane", vp.pressure_pa).unwrap();
        assert!((sat.temperature_k - 380.0).abs() < 1e-6);
        assert_eq!(sat.compound, "pentane");
    }

    #[test]
    fn unknown_compound_and_bad_input() {
        let table = PropertyTable::builtin();
        assert!(matches!(vapor_pressure(&table, "unobtainium", 300.0), Err(AppError::Props(_))));
        assert!(matches!(vapor_pressure(&table, "pentane", -1.0), Err(AppError::InvalidInput(_))));
        assert!(matches!(saturation_temperature(&table, "pentane", 0.0), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn latent_heat_only_where_tabulated() {
        let table = PropertyTable::builtin();
        assert!(vapor_pressure(&table, "pentane", 300.0).unwrap().heat_of_vaporization.is_some());
        assert!(vapor_pressure(&table, "hydrogen", 20.0).unwrap().heat_of_vaporization.is_none());
    }
}
