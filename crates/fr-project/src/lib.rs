//! fr-project: case file format, versioning and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_case};

use fr_props::PropertyTable;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validate against the built-in property table.
pub fn validate(case: &CaseFile) -> ProjectResult<()> {
    validate_case(case, &PropertyTable::builtin())?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let mut case: CaseFile = serde_yaml::from_str(&content)?;
    case = migrate_to_latest(case)?;
    validate(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    validate(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let mut case: CaseFile = serde_json::from_str(&content)?;
    case = migrate_to_latest(case)?;
    validate(&case)?;
    Ok(case)
}

pub fn save_json(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    validate(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Pick the format from the extension: `.json` is JSON, `.yaml`/`.yml` YAML.
pub fn load(path: &Path) -> ProjectResult<CaseFile> {
    match extension(path)?.as_str() {
        "json" => load_json(path),
        _ => load_yaml(path),
    }
}

pub fn save(path: &Path, case: &CaseFile) -> ProjectResult<()> {
    match extension(path)?.as_str() {
        "json" => save_json(path, case),
        _ => save_yaml(path, case),
    }
}

fn extension(path: &Path) -> ProjectResult<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" | "yaml" | "yml" => Ok(ext),
        other => Err(ProjectError::Serialization(format!(
            "unrecognized case file extension '{}' in {}",
            other,
            path.display()
        ))),
    }
}
