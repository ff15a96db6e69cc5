//! The FUG(K) pipeline over one multicomponent column.
//!
//! Each step caches its result on the column. Steps must run in order; a
//! step whose input has not been computed returns
//! [`ShortcutError::Precondition`] naming the missing step.

use crate::error::{ShortcutError, ShortcutResult};
use crate::fenske::{FenskeResult, minimum_stages};
use crate::gilliland::{DEFAULT_REFLUX_FACTOR, GillilandResult, gilliland};
use crate::kirkbride::{KirkbrideResult, feed_stage_location};
use crate::split::{KeyRecoveries, ProductSplit, split_products};
use crate::trays::{ActualTrays, DEFAULT_TRAY_EFFICIENCY, actual_trays};
use crate::underwood::{FixedStepScan, UnderwoodMethod, UnderwoodResult, UnderwoodTerm, underwood};
use crate::volatility::{
    RelativeVolatility, VaporPressureEntry, alpha_of, relative_volatilities, vapor_pressures,
};
use fr_core::units::{Pressure, Temperature, to_k, to_pa};
use fr_props::{FeedStream, MoleFlows, PropertyTable};
use serde::Serialize;

/// Column inputs. The column is treated as isothermal at `temperature`.
#[derive(Debug, Clone)]
pub struct ShortcutSpec {
    pub feed: FeedStream,
    pub light_key: String,
    pub heavy_key: String,
    pub pressure: Pressure,
    pub temperature: Temperature,
    /// Thermal condition, liquid fraction of the feed
    pub q: f64,
    pub recoveries: KeyRecoveries,
    pub reflux_factor: f64,
    pub tray_efficiency: f64,
    pub partial_reboiler: bool,
    pub underwood: UnderwoodMethod,
    pub scan: FixedStepScan,
}

impl ShortcutSpec {
    /// Spec with the documented defaults for the optional fields.
    pub fn new(
        feed: FeedStream,
        light_key: impl Into<String>,
        heavy_key: impl Into<String>,
        pressure: Pressure,
        temperature: Temperature,
        q: f64,
        recoveries: KeyRecoveries,
    ) -> Self {
        Self {
            feed,
            light_key: light_key.into(),
            heavy_key: heavy_key.into(),
            pressure,
            temperature,
            q,
            recoveries,
            reflux_factor: DEFAULT_REFLUX_FACTOR,
            tray_efficiency: DEFAULT_TRAY_EFFICIENCY,
            partial_reboiler: true,
            underwood: UnderwoodMethod::default(),
            scan: FixedStepScan::default(),
        }
    }
}

/// All step results of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcutReport {
    pub light_key: String,
    pub heavy_key: String,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub q: f64,
    pub vapor_pressures: Vec<VaporPressureEntry>,
    pub volatilities: Vec<RelativeVolatility>,
    pub fenske: FenskeResult,
    pub underwood: UnderwoodResult,
    pub gilliland: GillilandResult,
    pub kirkbride: KirkbrideResult,
    pub trays: ActualTrays,
    #[serde(skip)]
    pub feed: MoleFlows,
    #[serde(skip)]
    pub split: ProductSplit,
}

#[derive(Debug, Clone)]
pub struct ShortcutColumn {
    spec: ShortcutSpec,
    feed: MoleFlows,
    vapor_pressures: Option<Vec<VaporPressureEntry>>,
    volatilities: Option<Vec<RelativeVolatility>>,
    split: Option<ProductSplit>,
    fenske: Option<FenskeResult>,
    underwood: Option<UnderwoodResult>,
    gilliland: Option<GillilandResult>,
    kirkbride: Option<KirkbrideResult>,
    trays: Option<ActualTrays>,
}

fn require<'a, T>(value: &'a Option<T>, step: &'static str, requires: &'static str) -> ShortcutResult<&'a T> {
    value.as_ref().ok_or(ShortcutError::Precondition { step, requires })
}

impl ShortcutColumn {
    /// Validate the column spec and convert the feed to moles. Component and key
    /// names are resolved to canonical table keys.
    pub fn new(mut spec: ShortcutSpec, table: &PropertyTable) -> ShortcutResult<Self> {
        let canonical: Vec<(String, f64)> = spec
            .feed
            .iter()
            .map(|(name, flow)| Ok((table.get(name)?.key.to_string(), flow)))
            .collect::<ShortcutResult<_>>()?;
        spec.feed = FeedStream::new(canonical)?;
        spec.light_key = table.get(&spec.light_key)?.key.to_string();
        spec.heavy_key = table.get(&spec.heavy_key)?.key.to_string();

        if spec.light_key == spec.heavy_key {
            return Err(ShortcutError::InvalidArg {
                what: "light and heavy keys must differ",
            });
        }
        for key in [&spec.light_key, &spec.heavy_key] {
            if spec.feed.mass_flow(key) <= 0.0 {
                return Err(ShortcutError::KeyNotInFeed { name: key.clone() });
            }
        }
        for r in [spec.recoveries.top, spec.recoveries.bottom] {
            if !(r > 0.0 && r < 1.0) {
                return Err(ShortcutError::InvalidArg {
                    what: "key recoveries must lie strictly between 0 and 1",
                });
            }
        }
        fr_core::ensure_finite(spec.q, "thermal condition q")?;
        if !(to_k(spec.temperature) > 0.0) {
            return Err(ShortcutError::InvalidArg {
                what: "column temperature must be positive",
            });
        }

        let feed = spec.feed.to_moles(table)?;
        tracing::debug!(
            components = feed.iter().count(),
            total_kmol_per_h = feed.total_kmol_per_h(),
            "shortcut feed"
        );

        Ok(Self {
            spec,
            feed,
            vapor_pressures: None,
            volatilities: None,
            split: None,
            fenske: None,
            underwood: None,
            gilliland: None,
            kirkbride: None,
            trays: None,
        })
    }

    pub fn spec(&self) -> &ShortcutSpec {
        &self.spec
    }

    pub fn feed(&self) -> &MoleFlows {
        &self.feed
    }

    pub fn find_vapor_pressures(&mut self, table: &PropertyTable) -> ShortcutResult<&[VaporPressureEntry]> {
        let names: Vec<&str> = self.feed.iter().map(|c| c.name.as_str()).collect();
        let entries = vapor_pressures(table, names, self.spec.temperature, self.spec.pressure)?;
        let entries = self.vapor_pressures.insert(entries);
        Ok(entries.as_slice())
    }

    pub fn find_relative_volatilities(&mut self) -> ShortcutResult<&[RelativeVolatility]> {
        let vps = require(&self.vapor_pressures, "relative volatilities", "vapor pressures")?;
        let alphas = relative_volatilities(vps, &self.spec.heavy_key)?;
        let alpha_lk = alpha_of(&alphas, &self.spec.light_key)?;
        if !(alpha_lk > 1.0) {
            return Err(ShortcutError::KeysNotOrdered {
                light: self.spec.light_key.clone(),
                heavy: self.spec.heavy_key.clone(),
                alpha: alpha_lk,
            });
        }
        let alphas = self.volatilities.insert(alphas);
        Ok(alphas.as_slice())
    }

    pub fn split_products(&mut self) -> ShortcutResult<&ProductSplit> {
        let alphas = require(&self.volatilities, "product split", "relative volatilities")?;
        let split = split_products(
            &self.feed,
            alphas,
            &self.spec.light_key,
            &self.spec.heavy_key,
            self.spec.recoveries,
        )?;
        Ok(&*self.split.insert(split))
    }

    pub fn find_minimum_stages(&mut self) -> ShortcutResult<FenskeResult> {
        let split = require(&self.split, "Fenske", "product split")?;
        let alphas = require(&self.volatilities, "Fenske", "relative volatilities")?;
        let (lk, hk) = (&self.spec.light_key, &self.spec.heavy_key);
        let result = minimum_stages(
            split.distillate.mole_fraction(lk),
            split.distillate.mole_fraction(hk),
            split.bottoms.mole_fraction(lk),
            split.bottoms.mole_fraction(hk),
            alpha_of(alphas, lk)?,
            self.spec.partial_reboiler,
        )?;
        tracing::debug!(min_stages = result.min_stages, "Fenske");
        Ok(*self.fenske.insert(result))
    }

    pub fn find_minimum_reflux(&mut self) -> ShortcutResult<UnderwoodResult> {
        let split = require(&self.split, "Underwood", "product split")?;
        let alphas = require(&self.volatilities, "Underwood", "relative volatilities")?;
        let terms: Vec<UnderwoodTerm> = self
            .feed
            .iter()
            .map(|c| {
                Ok(UnderwoodTerm {
                    z_f: self.feed.mole_fraction(&c.name),
                    x_d: split.distillate.mole_fraction(&c.name),
                    alpha: alpha_of(alphas, &c.name)?,
                })
            })
            .collect::<ShortcutResult<_>>()?;
        let result = underwood(
            &terms,
            self.spec.q,
            alpha_of(alphas, &self.spec.light_key)?,
            self.spec.underwood,
            &self.spec.scan,
        )?;
        Ok(*self.underwood.insert(result))
    }

    /// Ideal plates at `reflux_factor * Rmin`; factor must lie in `[1.1, 1.5]`.
    pub fn apply_gilliland(&mut self, reflux_factor: f64) -> ShortcutResult<GillilandResult> {
        let fenske = require(&self.fenske, "Gilliland", "Fenske")?;
        let uw = require(&self.underwood, "Gilliland", "Underwood")?;
        let result = gilliland(fenske.min_stages, uw.min_reflux, reflux_factor)?;
        tracing::debug!(ideal_plates = result.ideal_plates, reflux_ratio = result.reflux_ratio, "Gilliland");
        Ok(*self.gilliland.insert(result))
    }

    pub fn locate_feed_stage(&mut self) -> ShortcutResult<KirkbrideResult> {
        let gl = require(&self.gilliland, "Kirkbride", "Gilliland")?;
        let split = require(&self.split, "Kirkbride", "product split")?;
        let (lk, hk) = (&self.spec.light_key, &self.spec.heavy_key);
        let result = feed_stage_location(
            gl.ideal_plates,
            self.feed.mole_fraction(lk),
            self.feed.mole_fraction(hk),
            split.bottoms.mole_fraction(lk),
            split.distillate.mole_fraction(hk),
            split.bottoms_to_distillate(),
        )?;
        Ok(*self.kirkbride.insert(result))
    }

    pub fn find_actual_trays(&mut self, efficiency: f64) -> ShortcutResult<ActualTrays> {
        let gl = require(&self.gilliland, "actual trays", "Gilliland")?;
        let result = actual_trays(gl.ideal_plates, efficiency)?;
        Ok(*self.trays.insert(result))
    }

    /// Run every step with the column spec's reflux factor and efficiency.
    pub fn run(&mut self, table: &PropertyTable) -> ShortcutResult<ShortcutReport> {
        self.find_vapor_pressures(table)?;
        self.find_relative_volatilities()?;
        self.split_products()?;
        let fenske = self.find_minimum_stages()?;
        let underwood = self.find_minimum_reflux()?;
        let gilliland = self.apply_gilliland(self.spec.reflux_factor)?;
        let kirkbride = self.locate_feed_stage()?;
        let trays = self.find_actual_trays(self.spec.tray_efficiency)?;

        Ok(ShortcutReport {
            light_key: self.spec.light_key.clone(),
            heavy_key: self.spec.heavy_key.clone(),
            pressure_pa: to_pa(self.spec.pressure),
            temperature_k: to_k(self.spec.temperature),
            q: self.spec.q,
            vapor_pressures: require(&self.vapor_pressures, "report", "vapor pressures")?.clone(),
            volatilities: require(&self.volatilities, "report", "relative volatilities")?.clone(),
            fenske,
            underwood,
            gilliland,
            kirkbride,
            trays,
            feed: self.feed.clone(),
            split: require(&self.split, "report", "product split")?.clone(),
        })
    }
}
