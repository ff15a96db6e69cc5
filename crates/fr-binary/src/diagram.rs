//! Plot-ready McCabe-Thiele diagram data.
//!
//! Rendering lives in the UI; this only assembles the series so the CLI can
//! export them and tests can inspect them.

use crate::equilibrium::EquilibriumCurve;
use crate::operating::OperatingLines;
use crate::stepping::SteppingResult;
use serde::Serialize;
use std::fmt::Write as _;

/// Number of temperature samples on the equilibrium curve.
pub const CURVE_POINTS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub label: String,
    pub point: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McCabeThieleDiagram {
    pub title: String,
    pub equilibrium: Vec<[f64; 2]>,
    pub diagonal: [[f64; 2]; 2],
    /// `(xD, xD)` to `(xF, zF)`
    pub rectifying: [[f64; 2]; 2],
    /// `(xB, xB)` to `(xF, zF)`
    pub stripping: [[f64; 2]; 2],
    /// Vertical q-line from `(xF, xF)` to the curve
    pub q_line: [[f64; 2]; 2],
    pub staircase: Vec<[f64; 2]>,
    pub markers: Vec<Marker>,
}

impl McCabeThieleDiagram {
    pub fn build(
        curve: &EquilibriumCurve,
        lines: &OperatingLines,
        y_f: f64,
        stepping: Option<&SteppingResult>,
    ) -> Self {
        let c = lines.compositions;
        let mut markers = vec![
            Marker {
                label: "xD".into(),
                point: [c.x_d, c.x_d],
            },
            Marker {
                label: "xF".into(),
                point: [c.x_f, c.x_f],
            },
            Marker {
                label: "xB".into(),
                point: [c.x_b, c.x_b],
            },
        ];
        if let Some(step) = stepping {
            markers.extend(step.stages.iter().map(|s| Marker {
                label: s.number.to_string(),
                point: [s.x, s.y],
            }));
        }

        Self {
            title: format!(
                "{}/{} at {:.1} kPa",
                curve.light().display_name,
                curve.heavy().display_name,
                curve.pressure_pa() / 1000.0
            ),
            equilibrium: curve.sample(CURVE_POINTS),
            diagonal: [[0.0, 0.0], [1.0, 1.0]],
            rectifying: [[c.x_d, c.x_d], [c.x_f, lines.z_f]],
            stripping: [[c.x_b, c.x_b], [c.x_f, lines.z_f]],
            q_line: [[c.x_f, c.x_f], [c.x_f, y_f]],
            staircase: stepping.map(|s| s.staircase.clone()).unwrap_or_default(),
            markers,
        }
    }

    /// Long-format CSV: `series,x,y`.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("series,x,y\n");
        let mut push = |series: &str, pts: &[[f64; 2]]| {
            for [x, y] in pts {
                let _ = writeln!(out, "{series},{x:.6},{y:.6}");
            }
        };
        push("equilibrium", &self.equilibrium);
        push("diagonal", &self.diagonal);
        push("rectifying", &self.rectifying);
        push("stripping", &self.stripping);
        push("q_line", &self.q_line);
        push("staircase", &self.staircase);
        for m in &self.markers {
            push(&format!("marker:{}", m.label), &[m.point]);
        }
        out
    }
}
