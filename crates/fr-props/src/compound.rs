//! A single compound's constants.

use crate::correlation::{
    PerryHeatOfVaporization, SaturationTemperature, VaporPressure, VaporPressureCorrelation,
};
use crate::error::PropsResult;
use fr_core::RootConfig;
use fr_core::units::{Pressure, Temperature, to_k};

/// Immutable per-compound property record.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundProperties {
    /// Canonical lookup key (lowercase, e.g. `"ethyl-acetylene"`).
    pub key: &'static str,
    pub display_name: &'static str,
    pub formula: &'static str,
    pub aliases: &'static [&'static str],
    /// Molar mass [kg/kmol]
    pub molar_mass: f64,
    pub vapor_pressure: VaporPressureCorrelation,
    pub heat_of_vaporization: Option<PerryHeatOfVaporization>,
}

impl CompoundProperties {
    /// Exact (case-insensitive) match against key, display name or alias.
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.key.eq_ignore_ascii_case(name)
            || self.display_name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Substring search used by listings.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.key.contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    pub fn vapor_pressure(&self, t: Temperature) -> PropsResult<VaporPressure> {
        let vp = self.vapor_pressure.vapor_pressure(t)?;
        if let Some(advisory) = vp.range.advisory() {
            tracing::debug!(compound = self.key, t_k = to_k(t), advisory, "vapor pressure extrapolated");
        }
        Ok(vp)
    }

    pub fn saturation_temperature(&self, p: Pressure) -> PropsResult<SaturationTemperature> {
        self.saturation_temperature_with(p, &RootConfig::default())
    }

    pub fn saturation_temperature_with(
        &self,
        p: Pressure,
        cfg: &RootConfig,
    ) -> PropsResult<SaturationTemperature> {
        Ok(self.vapor_pressure.saturation_temperature(p, cfg)?)
    }

    /// Heat of vaporization [J/kmol], `None` when no constants are tabulated.
    pub fn heat_of_vaporization(&self, t: Temperature) -> PropsResult<Option<f64>> {
        match &self.heat_of_vaporization {
            Some(hv) => Ok(Some(hv.at(t)?)),
            None => Ok(None),
        }
    }
}
