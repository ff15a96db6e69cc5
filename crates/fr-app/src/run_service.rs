//! Turning case definitions into column runs.

use crate::error::{AppError, AppResult};
use fr_binary::{
    BinaryColumn, BinaryColumnSpec, BinaryDesign, McCabeThieleDiagram, RefluxSpec, SteppingConfig,
};
use fr_core::units::{k, pa};
use fr_project::{BinaryCaseDef, CaseDef, CaseFile, RefluxDef, ShortcutCaseDef};
use fr_props::{FeedStream, PropertyTable};
use fr_shortcut::{KeyRecoveries, ShortcutColumn, ShortcutReport, ShortcutSpec};

/// Command-line overrides for a binary run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryOverrides {
    pub reflux_ratio: Option<f64>,
}

/// Command-line overrides for a shortcut run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutOverrides {
    pub reflux_factor: Option<f64>,
    pub tray_efficiency: Option<f64>,
}

/// Everything produced by a binary run.
#[derive(Debug, Clone)]
pub struct BinaryRun {
    pub case_name: String,
    pub spec: BinaryColumnSpec,
    pub column: BinaryColumn,
    pub design: BinaryDesign,
    pub diagram: McCabeThieleDiagram,
}

pub fn binary_case(case: &CaseFile) -> AppResult<&BinaryCaseDef> {
    match &case.case {
        CaseDef::Binary(b) => Ok(b),
        other => Err(AppError::WrongCaseKind {
            expected: "binary",
            found: other.kind(),
        }),
    }
}

pub fn shortcut_case(case: &CaseFile) -> AppResult<&ShortcutCaseDef> {
    match &case.case {
        CaseDef::Shortcut(s) => Ok(s),
        other => Err(AppError::WrongCaseKind {
            expected: "shortcut",
            found: other.kind(),
        }),
    }
}

fn reflux_spec(def: &RefluxDef) -> AppResult<RefluxSpec> {
    match (def.ratio, def.factor) {
        (Some(r), None) => Ok(RefluxSpec::Ratio(r)),
        (None, Some(f)) => Ok(RefluxSpec::Factor(f)),
        _ => Err(AppError::InvalidInput(
            "reflux needs exactly one of ratio or factor".to_string(),
        )),
    }
}

pub fn binary_spec(def: &BinaryCaseDef, overrides: BinaryOverrides) -> AppResult<BinaryColumnSpec> {
    let reflux = match overrides.reflux_ratio {
        Some(r) => RefluxSpec::Ratio(r),
        None => reflux_spec(&def.reflux)?,
    };
    Ok(BinaryColumnSpec {
        feed: FeedStream::from_components(&def.components, &def.feed_kg_per_h)?,
        pressure: pa(def.pressure_pa),
        top_purity: def.top_purity,
        bottom_purity: def.bottom_purity,
        reflux,
        stepping: SteppingConfig {
            max_stages: def.max_stages,
        },
    })
}

pub fn shortcut_spec(def: &ShortcutCaseDef, overrides: ShortcutOverrides) -> AppResult<ShortcutSpec> {
    let feed = FeedStream::from_components(&def.components, &def.feed_kg_per_h)?;
    let mut spec = ShortcutSpec::new(
        feed,
        def.light_key.clone(),
        def.heavy_key.clone(),
        pa(def.pressure_pa),
        k(def.temperature_k),
        def.q,
        KeyRecoveries {
            top: def.top_recovery,
            bottom: def.bottom_recovery,
        },
    );
    spec.reflux_factor = overrides.reflux_factor.unwrap_or(def.reflux_factor);
    spec.tray_efficiency = overrides.tray_efficiency.unwrap_or(def.tray_efficiency);
    spec.partial_reboiler = def.partial_reboiler;
    spec.underwood = def.underwood;
    Ok(spec)
}

pub fn run_binary(case: &CaseFile, overrides: BinaryOverrides, table: &PropertyTable) -> AppResult<BinaryRun> {
    let spec = binary_spec(binary_case(case)?, overrides)?;
    let column = BinaryColumn::new(spec.clone(), table)?;
    let design = column.design()?;
    let diagram = column.diagram(&design);
    tracing::info!(
        case = %case.name,
        reflux_ratio = design.lines.reflux_ratio,
        ideal_stages = design.stepping.ideal_stages,
        "binary design complete"
    );
    Ok(BinaryRun {
        case_name: case.name.clone(),
        spec,
        column,
        design,
        diagram,
    })
}

pub fn run_shortcut(
    case: &CaseFile,
    overrides: ShortcutOverrides,
    table: &PropertyTable,
) -> AppResult<ShortcutReport> {
    let spec = shortcut_spec(shortcut_case(case)?, overrides)?;
    let report = ShortcutColumn::new(spec, table)?.run(table)?;
    tracing::info!(
        case = %case.name,
        ideal_plates = report.gilliland.ideal_plates,
        trays = report.trays.trays,
        "shortcut design complete"
    );
    Ok(report)
}
