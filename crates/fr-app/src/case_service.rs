//! Case loading, saving and summaries.

use crate::error::AppResult;
use fr_project::{CaseDef, CaseFile};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseSummary {
    pub name: String,
    pub kind: &'static str,
    pub version: u32,
    pub components: Vec<String>,
    pub total_feed_kg_per_h: f64,
}

/// Load, migrate and validate a case; the format follows the extension.
pub fn load_case(path: &Path) -> AppResult<CaseFile> {
    let case = fr_project::load(path)?;
    tracing::debug!(path = %path.display(), kind = case.case.kind(), "case loaded");
    Ok(case)
}

/// Validate and write a case; the format follows the extension.
pub fn save_case(path: &Path, case: &CaseFile) -> AppResult<()> {
    fr_project::save(path, case)?;
    tracing::debug!(path = %path.display(), kind = case.case.kind(), "case saved");
    Ok(())
}

pub fn summarize(case: &CaseFile) -> CaseSummary {
    CaseSummary {
        name: case.name.clone(),
        kind: case.case.kind(),
        version: case.version,
        components: case.case.components().to_vec(),
        total_feed_kg_per_h: case.case.feed_kg_per_h().iter().sum(),
    }
}

/// Only components with a positive feed, in case order.
pub fn fed_components(case: &CaseDef) -> Vec<&str> {
    case.components()
        .iter()
        .zip(case.feed_kg_per_h())
        .filter(|&(_, &m)| m > 0.0)
        .map(|(c, _)| c.as_str())
        .collect()
}
