//! Binary column: derived compositions and the full McCabe-Thiele design.

use crate::diagram::McCabeThieleDiagram;
use crate::equilibrium::EquilibriumCurve;
use crate::error::{BinaryError, BinaryResult};
use crate::operating::{Compositions, OperatingLines, minimum_reflux};
use crate::stepping::{SteppingConfig, SteppingResult, step_stages};
use fr_core::ensure_fraction;
use fr_core::units::Pressure;
use fr_props::{FeedStream, PropertyTable, binary_mole_fraction};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// How the operating reflux is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefluxSpec {
    /// Fixed reflux ratio `R >= 0`
    Ratio(f64),
    /// Multiple of the minimum reflux, `R = f * Rmin` with `f > 1`
    Factor(f64),
}

/// Inputs for a binary column. The first feed component is the light one.
#[derive(Debug, Clone)]
pub struct BinaryColumnSpec {
    pub feed: FeedStream,
    pub pressure: Pressure,
    /// Mass fraction of the light component in the distillate
    pub top_purity: Option<f64>,
    /// Mass fraction of the heavy component in the bottoms
    pub bottom_purity: Option<f64>,
    pub reflux: RefluxSpec,
    pub stepping: SteppingConfig,
}

/// Feed bubble point and the vapor in equilibrium with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedPoint {
    pub x: f64,
    pub y: f64,
    pub bubble_temperature_k: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnTemperatures {
    pub top_k: f64,
    pub bottom_k: f64,
    pub mean_k: f64,
}

/// Everything a binary report needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryDesign {
    pub light: String,
    pub heavy: String,
    pub pressure_pa: f64,
    pub temperatures: ColumnTemperatures,
    pub feed_point: FeedPoint,
    pub minimum_reflux: f64,
    pub lines: OperatingLines,
    pub stepping: SteppingResult,
}

/// Compositions and the feed point are derived at construction. Stage
/// stepping runs on first use and is cached.
#[derive(Debug, Clone)]
pub struct BinaryColumn {
    curve: EquilibriumCurve,
    x_f: f64,
    x_d: Option<f64>,
    x_b: Option<f64>,
    feed_point: FeedPoint,
    reflux: RefluxSpec,
    stepping: SteppingConfig,
    stepped: OnceCell<SteppingResult>,
}

impl BinaryColumn {
    pub fn new(spec: BinaryColumnSpec, table: &PropertyTable) -> BinaryResult<Self> {
        let mut names = spec.feed.names();
        let (Some(light_name), Some(heavy_name), None) = (names.next(), names.next(), names.next()) else {
            return Err(BinaryError::InvalidArg {
                what: "a binary column needs exactly two feed components",
            });
        };
        let light = table.get(light_name)?.clone();
        let heavy = table.get(heavy_name)?.clone();

        let x_f = spec.feed.to_moles(table)?.mole_fraction(light_name);
        let x_d = spec
            .top_purity
            .map(|p| -> BinaryResult<f64> {
                let p = ensure_fraction(p, "top purity")?;
                if p == 0.0 || p == 1.0 {
                    return Err(BinaryError::InvalidArg {
                        what: "top purity must lie strictly between 0 and 1",
                    });
                }
                Ok(binary_mole_fraction(p, light.molar_mass, 1.0 - p, heavy.molar_mass)?)
            })
            .transpose()?;
        let x_b = spec
            .bottom_purity
            .map(|p| -> BinaryResult<f64> {
                let p = ensure_fraction(p, "bottom purity")?;
                if p == 0.0 || p == 1.0 {
                    return Err(BinaryError::InvalidArg {
                        what: "bottom purity must lie strictly between 0 and 1",
                    });
                }
                Ok(binary_mole_fraction(1.0 - p, light.molar_mass, p, heavy.molar_mass)?)
            })
            .transpose()?;

        if spec.stepping.max_stages == 0 {
            return Err(BinaryError::InvalidArg {
                what: "max_stages must be at least 1",
            });
        }

        let curve = EquilibriumCurve::new(light, heavy, spec.pressure)?;
        let bubble_temperature_k = curve.temperature_for_x(x_f)?;
        let feed_point = FeedPoint {
            x: x_f,
            y: curve.y_at(bubble_temperature_k),
            bubble_temperature_k,
        };
        tracing::debug!(x_f, ?x_d, ?x_b, y_f = feed_point.y, "binary column compositions");

        Ok(Self {
            curve,
            x_f,
            x_d,
            x_b,
            feed_point,
            reflux: spec.reflux,
            stepping: spec.stepping,
            stepped: OnceCell::new(),
        })
    }

    pub fn curve(&self) -> &EquilibriumCurve {
        &self.curve
    }

    pub fn x_f(&self) -> f64 {
        self.x_f
    }

    pub fn x_d(&self) -> Option<f64> {
        self.x_d
    }

    pub fn x_b(&self) -> Option<f64> {
        self.x_b
    }

    pub fn feed_point(&self) -> FeedPoint {
        self.feed_point
    }

    pub fn temperatures(&self) -> ColumnTemperatures {
        let (top_k, bottom_k) = self.curve.temperature_range_k();
        ColumnTemperatures {
            top_k,
            bottom_k,
            mean_k: 0.5 * (top_k + bottom_k),
        }
    }

    /// Ordered product compositions; both purities must be set.
    pub fn compositions(&self) -> BinaryResult<Compositions> {
        let x_d = self.x_d.ok_or(BinaryError::MissingPurity { which: "top" })?;
        let x_b = self.x_b.ok_or(BinaryError::MissingPurity { which: "bottom" })?;
        Compositions::new(x_b, self.x_f, x_d)
    }

    pub fn minimum_reflux(&self) -> BinaryResult<f64> {
        let x_d = self.x_d.ok_or(BinaryError::MissingPurity { which: "top" })?;
        minimum_reflux(x_d, self.x_f, self.feed_point.y)
    }

    /// Operating reflux ratio resolved from the reflux spec.
    pub fn reflux_ratio(&self) -> BinaryResult<f64> {
        match self.reflux {
            RefluxSpec::Ratio(r) => Ok(r),
            RefluxSpec::Factor(f) => {
                if !(f.is_finite() && f > 1.0) {
                    return Err(BinaryError::InvalidArg {
                        what: "reflux factor must be greater than 1",
                    });
                }
                Ok(f * self.minimum_reflux()?)
            }
        }
    }

    pub fn operating_lines(&self) -> BinaryResult<OperatingLines> {
        OperatingLines::new(self.reflux_ratio()?, self.compositions()?)
    }

    /// Stepped stages; errors are not cached.
    pub fn step_stages(&self) -> BinaryResult<&SteppingResult> {
        if let Some(stepped) = self.stepped.get() {
            return Ok(stepped);
        }
        let stepped = step_stages(&self.curve, &self.operating_lines()?, &self.stepping)?;
        Ok(self.stepped.get_or_init(|| stepped))
    }

    pub fn design(&self) -> BinaryResult<BinaryDesign> {
        let lines = self.operating_lines()?;
        let stepping = self.step_stages()?.clone();
        Ok(BinaryDesign {
            light: self.curve.light().display_name.to_string(),
            heavy: self.curve.heavy().display_name.to_string(),
            pressure_pa: self.curve.pressure_pa(),
            temperatures: self.temperatures(),
            feed_point: self.feed_point,
            minimum_reflux: self.minimum_reflux()?,
            lines,
            stepping,
        })
    }

    /// Diagram series for a finished design.
    pub fn diagram(&self, design: &BinaryDesign) -> McCabeThieleDiagram {
        McCabeThieleDiagram::build(&self.curve, &design.lines, self.feed_point.y, Some(&design.stepping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_core::units::bar;

    fn spec(reflux: RefluxSpec) -> BinaryColumnSpec {
        BinaryColumnSpec {
            feed: FeedStream::new(vec![("benzene".into(), 40.0), ("toluene".into(), 60.0)]).unwrap(),
            pressure: bar(1.01325),
            top_purity: Some(0.97),
            bottom_purity: Some(0.98),
            reflux,
            stepping: SteppingConfig::default(),
        }
    }

    fn column(reflux: RefluxSpec) -> BinaryColumn {
        BinaryColumn::new(spec(reflux), &PropertyTable::builtin()).unwrap()
    }

    #[test]
    fn derived_compositions() {
        let c = column(RefluxSpec::Ratio(3.5));
        assert!((c.x_f() - 0.44).abs() < 0.005);
        assert!((c.x_d().unwrap() - 0.974).abs() < 0.001);
        let x_b = c.x_b().unwrap();
        assert!(x_b < c.x_f() && (x_b - 0.0174).abs() < 0.01);
    }

    #[test]
    fn feed_point_lies_between_boiling_points() {
        let c = column(RefluxSpec::Ratio(3.5));
        let fp = c.feed_point();
        let t = c.temperatures();
        assert!(fp.y > fp.x);
        assert!(t.top_k < fp.bubble_temperature_k && fp.bubble_temperature_k < t.bottom_k);
        assert!((t.mean_k - 0.5 * (t.top_k + t.bottom_k)).abs() < 1e-12);
    }

    #[test]
    fn reflux_factor_scales_minimum_reflux() {
        let c = column(RefluxSpec::Factor(1.5));
        let r_min = c.minimum_reflux().unwrap();
        assert!(r_min > 0.0);
        assert!((c.reflux_ratio().unwrap() - 1.5 * r_min).abs() < 1e-12);
        assert!(column(RefluxSpec::Factor(0.9)).reflux_ratio().is_err());
    }

    #[test]
    fn missing_purity_blocks_stepping() {
        let mut s = spec(RefluxSpec::Ratio(3.5));
        s.bottom_purity = None;
        let c = BinaryColumn::new(s, &PropertyTable::builtin()).unwrap();
        assert_eq!(
            c.step_stages().unwrap_err(),
            BinaryError::MissingPurity { which: "bottom" }
        );
    }

    #[test]
    fn pure_products_are_rejected_up_front() {
        let mut s = spec(RefluxSpec::Ratio(3.5));
        s.top_purity = Some(1.0);
        assert_eq!(
            BinaryColumn::new(s, &PropertyTable::builtin()).unwrap_err(),
            BinaryError::InvalidArg {
                what: "top purity must lie strictly between 0 and 1"
            }
        );

        let mut s = spec(RefluxSpec::Ratio(3.5));
        s.bottom_purity = Some(0.0);
        assert!(matches!(
            BinaryColumn::new(s, &PropertyTable::builtin()),
            Err(BinaryError::InvalidArg { .. })
        ));
    }

    #[test]
    fn three_components_are_rejected() {
        let mut s = spec(RefluxSpec::Ratio(3.5));
        s.feed = FeedStream::new(vec![
            ("benzene".into(), 40.0),
            ("toluene".into(), 60.0),
            ("water".into(), 1.0),
        ])
        .unwrap();
        assert!(matches!(
            BinaryColumn::new(s, &PropertyTable::builtin()),
            Err(BinaryError::InvalidArg { .. })
        ));
    }

    #[test]
    fn unknown_component_surfaces_lookup_error() {
        let mut s = spec(RefluxSpec::Ratio(3.5));
        s.feed = FeedStream::new(vec![("benzene".into(), 40.0), ("xylene".into(), 60.0)]).unwrap();
        assert!(matches!(
            BinaryColumn::new(s, &PropertyTable::builtin()),
            Err(BinaryError::Props(fr_props::PropsError::UnknownCompound { .. }))
        ));
    }

    #[test]
    fn design_bundles_every_result() {
        let c = column(RefluxSpec::Ratio(3.5));
        let d = c.design().unwrap();
        assert_eq!(d.light, "Benzene");
        assert!((d.pressure_pa - 101_325.0).abs() < 1e-6);
        assert!(d.stepping.ideal_stages > 0);
        assert!(d.minimum_reflux < d.lines.reflux_ratio);
        assert!(!c.diagram(&d).staircase.is_empty());
    }

    #[test]
    fn stepping_runs_once() {
        let c = column(RefluxSpec::Ratio(3.5));
        let first = c.step_stages().unwrap();
        let second = c.step_stages().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(c.design().unwrap().stepping, *first);
    }
}
