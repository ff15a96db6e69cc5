//! Plain-text console reports.

use crate::query::{SaturationQuery, VaporPressureQuery};
use crate::run_service::BinaryRun;
use fr_binary::BinaryColumnSpec;
use fr_core::units::{k, pa, to_bar};
use fr_props::{CompoundProperties, PropertyTable, RangeCheck, VaporPressureCorrelation};
use fr_shortcut::ShortcutReport;
use std::fmt::Write;

const KELVIN_OFFSET: f64 = 273.15;

/// Distillate and bottoms mass flows of a binary column, from the light
/// component balance. Indexed `[light, heavy]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryProducts {
    pub distillate_kg_per_h: [f64; 2],
    pub bottoms_kg_per_h: [f64; 2],
}

impl BinaryProducts {
    /// `None` unless both purities are given and separate the feed.
    pub fn from_spec(spec: &BinaryColumnSpec) -> Option<Self> {
        let w_d = spec.top_purity?;
        let w_b = 1.0 - spec.bottom_purity?;
        let total = spec.feed.total_mass_flow();
        let w_f = spec.feed.mass_fractions().first()?.1;
        if !(w_d > w_b) {
            return None;
        }
        let d = total * (w_f - w_b) / (w_d - w_b);
        let b = total - d;
        Some(Self {
            distillate_kg_per_h: [d * w_d, d * (1.0 - w_d)],
            bottoms_kg_per_h: [b * w_b, b * (1.0 - w_b)],
        })
    }
}

fn celsius(t_k: f64) -> f64 {
    t_k - KELVIN_OFFSET
}

fn range_note(range: RangeCheck) -> &'static str {
    range.advisory().unwrap_or("")
}

pub fn compound_listing(compounds: &[crate::query::CompoundSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<18} {:<18} {:<8} {:>10}  {}", "key", "name", "formula", "M [kg/kmol]", "dHv");
    for c in compounds {
        let _ = writeln!(
            out,
            "{:<18} {:<18} {:<8} {:>10.3}  {}",
            c.key,
            c.display_name,
            c.formula,
            c.molar_mass,
            if c.has_heat_of_vaporization { "yes" } else { "-" }
        );
    }
    out
}

pub fn constants_listing(c: &CompoundProperties) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}), key '{}'", c.display_name, c.formula, c.key);
    if !c.aliases.is_empty() {
        let _ = writeln!(out, "  aliases: {}", c.aliases.join(", "));
    }
    let _ = writeln!(out, "  molar mass: {:.4} kg/kmol", c.molar_mass);
    match &c.vapor_pressure {
        VaporPressureCorrelation::Perry(p) => {
            let _ = writeln!(out, "  vapor pressure: ln(P/Pa) = C1 + C2/T + C3 ln T + C4 T^C5");
            let _ = writeln!(
                out,
                "    C1 = {}, C2 = {}, C3 = {}, C4 = {:e}, C5 = {}",
                p.c1, p.c2, p.c3, p.c4, p.c5
            );
            let _ = writeln!(out, "    valid {:.2} K to {:.2} K", p.t_min_k, p.t_max_k);
        }
        VaporPressureCorrelation::ReducedAntoine(r) => {
            let _ = writeln!(
                out,
                "  vapor pressure: P = Pc exp((A x + B x^1.5 + C x^3 + D x^6) / (1 - x)), x = 1 - T/Tc"
            );
            let _ = writeln!(
                out,
                "    Pc = {} Pa, Tc = {} K, A = {}, B = {}, C = {}, D = {}",
                r.critical_pressure_pa, r.critical_temperature_k, r.a, r.b, r.c, r.d
            );
            let _ = writeln!(out, "    no declared validity window");
        }
    }
    match &c.heat_of_vaporization {
        Some(h) => {
            let _ = writeln!(out, "  heat of vaporization: C1 (1 - Tr)^(C2 + C3 Tr + C4 Tr^2)");
            let _ = writeln!(
                out,
                "    C1 = {:e} J/kmol, C2 = {}, C3 = {}, C4 = {}, Tc = {} K",
                h.c1_j_per_kmol, h.c2, h.c3, h.c4, h.critical_temperature_k
            );
        }
        None => {
            let _ = writeln!(out, "  heat of vaporization: not tabulated");
        }
    }
    out
}

pub fn vapor_pressure_line(q: &VaporPressureQuery) -> String {
    let mut out = format!(
        "{}: Psat({:.2} K) = {:.3} kPa",
        q.compound,
        q.temperature_k,
        q.pressure_pa / 1000.0
    );
    if let Some(h) = q.heat_of_vaporization {
        let _ = write!(out, ", dHv = {:.1} kJ/kmol", h / 1000.0);
    }
    if let Some(advisory) = q.range.advisory() {
        let _ = write!(out, "  [{advisory}]");
    }
    out
}

pub fn saturation_line(q: &SaturationQuery) -> String {
    let mut out = format!(
        "{}: Tsat({:.3} kPa) = {:.3} K ({:.2} C)",
        q.compound,
        q.pressure_pa / 1000.0,
        q.temperature_k,
        celsius(q.temperature_k)
    );
    if let Some(advisory) = q.range.advisory() {
        let _ = write!(out, "  [{advisory}]");
    }
    out
}

pub fn binary_report(run: &BinaryRun) -> String {
    let d = &run.design;
    let lines = &d.lines;
    let comps = lines.compositions;
    let mut out = String::new();

    let _ = writeln!(out, "McCabe-Thiele design: {}", run.case_name);
    let _ = writeln!(
        out,
        "  {} / {} at {:.3} kPa ({:.5} bar)",
        d.light,
        d.heavy,
        d.pressure_pa / 1000.0,
        to_bar(pa(d.pressure_pa))
    );
    let _ = writeln!(
        out,
        "  column temperatures: top {:.2} K ({:.2} C), bottom {:.2} K ({:.2} C), mean {:.2} K",
        d.temperatures.top_k,
        celsius(d.temperatures.top_k),
        d.temperatures.bottom_k,
        celsius(d.temperatures.bottom_k),
        d.temperatures.mean_k
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<12} {:>12} {:>12} {:>12}", "stream [kg/h]", d.light, d.heavy, "total");
    let feed: Vec<f64> = run.spec.feed.iter().map(|(_, m)| m).collect();
    let _ = writeln!(
        out,
        "{:<12} {:>12.3} {:>12.3} {:>12.3}",
        "feed",
        feed[0],
        feed[1],
        run.spec.feed.total_mass_flow()
    );
    if let Some(p) = BinaryProducts::from_spec(&run.spec) {
        for (label, flows) in [("distillate", p.distillate_kg_per_h), ("bottoms", p.bottoms_kg_per_h)] {
            let _ = writeln!(
                out,
                "{:<12} {:>12.3} {:>12.3} {:>12.3}",
                label,
                flows[0],
                flows[1],
                flows[0] + flows[1]
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  mole fractions of {}: xF = {:.4}, xD = {:.4}, xB = {:.4}",
        d.light, comps.x_f, comps.x_d, comps.x_b
    );
    let _ = writeln!(
        out,
        "  feed bubble point {:.2} K, yF = {:.4}",
        d.feed_point.bubble_temperature_k, d.feed_point.y
    );
    let _ = writeln!(out, "  minimum reflux Rmin = {:.4}", d.minimum_reflux);
    let _ = writeln!(out, "  reflux ratio R = {:.4}", lines.reflux_ratio);
    let _ = writeln!(
        out,
        "  rectifying line: y = {:.4} x + {:.4}",
        lines.rectifying_slope, lines.rectifying_intercept
    );
    let _ = writeln!(
        out,
        "  stripping line:  y = {:.4} x - {:.4}  (boilup S = {:.4}, meets q-line at y = {:.4})",
        lines.stripping_slope,
        (lines.stripping_slope - 1.0) * comps.x_b,
        lines.boilup_ratio,
        lines.z_f
    );

    let steps = &d.stepping;
    let _ = writeln!(out);
    let _ = writeln!(out, "  ideal stages: {} plus reboiler", steps.ideal_stages);
    match steps.feed_stage {
        Some(f) => {
            let _ = writeln!(out, "  feed stage: {f}");
        }
        None => {
            let _ = writeln!(out, "  feed stage: not reached above the reboiler");
        }
    }
    let _ = writeln!(out, "{:>6} {:>10} {:>10} {:>10}", "stage", "x", "y", "T [K]");
    let last = steps.stages.len();
    for (i, s) in steps.stages.iter().enumerate() {
        let tag = if i + 1 == last { " reboiler" } else { "" };
        let _ = writeln!(
            out,
            "{:>6} {:>10.4} {:>10.4} {:>10.2}{}",
            s.number, s.x, s.y, s.temperature_k, tag
        );
    }
    out
}

pub fn shortcut_report(case_name: &str, r: &ShortcutReport, table: &PropertyTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "FUG(K) shortcut design: {case_name}");
    let _ = writeln!(out, "  light key {}, heavy key {}", r.light_key, r.heavy_key);
    let _ = writeln!(
        out,
        "  P = {:.1} kPa, T = {:.2} K ({:.2} C), q = {:.3}",
        r.pressure_pa / 1000.0,
        r.temperature_k,
        celsius(r.temperature_k),
        r.q
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<18} {:>12} {:>10} {:>10} {:>14}  {}",
        "component", "Psat [kPa]", "K", "alpha", "dHv [kJ/kmol]", "note"
    );
    for (vp, rv) in r.vapor_pressures.iter().zip(&r.volatilities) {
        let dhv = table
            .get(&vp.name)
            .ok()
            .and_then(|c| c.heat_of_vaporization(k(r.temperature_k)).ok().flatten())
            .map(|h| format!("{:.1}", h / 1000.0))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<18} {:>12.3} {:>10.4} {:>10.4} {:>14}  {}",
            vp.name,
            vp.pressure_pa / 1000.0,
            vp.k_value,
            rv.alpha,
            dhv,
            range_note(vp.range)
        );
    }

    let feed = &r.feed;
    let dist = &r.split.distillate;
    let bott = &r.split.bottoms;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<18} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "flows", "F kg/h", "D kg/h", "B kg/h", "F kmol/h", "D kmol/h", "B kmol/h", "zF", "xD", "xB"
    );
    for f in feed.iter() {
        let (d_mass, d_mol) = dist
            .get(&f.name)
            .map(|c| (c.mass_kg_per_h, c.kmol_per_h))
            .unwrap_or_default();
        let (b_mass, b_mol) = bott
            .get(&f.name)
            .map(|c| (c.mass_kg_per_h, c.kmol_per_h))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<18} {:>10.2} {:>10.2} {:>10.2} {:>10.3} {:>10.3} {:>10.3} {:>8.4} {:>8.4} {:>8.4}",
            f.name,
            f.mass_kg_per_h,
            d_mass,
            b_mass,
            f.kmol_per_h,
            d_mol,
            b_mol,
            feed.mole_fraction(&f.name),
            dist.mole_fraction(&f.name),
            bott.mole_fraction(&f.name)
        );
    }
    let _ = writeln!(
        out,
        "{:<18} {:>10.2} {:>10.2} {:>10.2} {:>10.3} {:>10.3} {:>10.3}",
        "total",
        feed.total_mass_kg_per_h(),
        dist.total_mass_kg_per_h(),
        bott.total_mass_kg_per_h(),
        feed.total_kmol_per_h(),
        dist.total_kmol_per_h(),
        bott.total_kmol_per_h()
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<18} {:>8} {:>8} {:>8}", "mass fractions", "wF", "wD", "wB");
    for f in feed.iter().filter(|f| f.mass_kg_per_h > 0.0) {
        let _ = writeln!(
            out,
            "{:<18} {:>8.4} {:>8.4} {:>8.4}",
            f.name,
            feed.mass_fraction(&f.name),
            dist.mass_fraction(&f.name),
            bott.mass_fraction(&f.name)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Fenske:    S = {:.4e}, alpha_LK = {:.4}, Nmin = {}",
        r.fenske.separation_factor, r.fenske.alpha_lk, r.fenske.min_stages
    );
    let _ = writeln!(
        out,
        "  Underwood: phi = {:.5}, Rmin = {:.4} ({:?})",
        r.underwood.phi, r.underwood.min_reflux, r.underwood.method
    );
    let _ = writeln!(
        out,
        "  Gilliland: Rf = {:.2}, R = {:.4}, X = {:.4}, Y = {:.4}, N = {}",
        r.gilliland.reflux_factor,
        r.gilliland.reflux_ratio,
        r.gilliland.x,
        r.gilliland.y,
        r.gilliland.ideal_plates
    );
    let _ = writeln!(
        out,
        "  Kirkbride: Nr/Ns = {:.4}, Nr = {}, Ns = {}, feed on plate {} from the bottom",
        r.kirkbride.ratio,
        r.kirkbride.rectifying,
        r.kirkbride.stripping,
        r.kirkbride.feed_tray()
    );
    let _ = writeln!(
        out,
        "  Trays:     efficiency {:.1} %, {} actual trays",
        r.trays.efficiency * 100.0,
        r.trays.trays
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fr_binary::{RefluxSpec, SteppingConfig};
    use fr_core::units::pa;
    use fr_props::FeedStream;

    fn spec(top: Option<f64>, bottom: Option<f64>) -> BinaryColumnSpec {
        BinaryColumnSpec {
            feed: FeedStream::new(vec![("benzene".into(), 40.0), ("toluene".into(), 60.0)]).unwrap(),
            pressure: pa(101_325.0),
            top_purity: top,
            bottom_purity: bottom,
            reflux: RefluxSpec::Ratio(3.5),
            stepping: SteppingConfig::default(),
        }
    }

    #[test]
    fn binary_mass_balance_closes() {
        let p = BinaryProducts::from_spec(&spec(Some(0.97), Some(0.98))).unwrap();
        let d: f64 = p.distillate_kg_per_h.iter().sum();
        let b: f64 = p.bottoms_kg_per_h.iter().sum();
        assert!((d - 40.0).abs() < 1e-9);
        assert!((b - 60.0).abs() < 1e-9);
        assert!((p.distillate_kg_per_h[0] + p.bottoms_kg_per_h[0] - 40.0).abs() < 1e-9);
    }

    #[test]
    fn missing_purity_means_no_products() {
        assert!(BinaryProducts::from_spec(&spec(Some(0.97), None)).is_none());
        assert!(BinaryProducts::from_spec(&spec(None, Some(0.98))).is_none());
    }

    #[test]
    fn constants_listing_names_the_correlation() {
        let table = PropertyTable::builtin();
        let text = constants_listing(table.get("pentane").unwrap());
        assert!(text.contains("ln(P/Pa)"));
        assert!(text.contains("valid"));
        assert!(text.contains("heat of vaporization: C1"));
    }
}
