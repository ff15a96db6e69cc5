//! Error types for the fr-app service layer.

use std::path::PathBuf;

/// Application error shared by the CLI and the UI. Backend errors are
/// flattened to their messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Failed to write {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Expected a {expected} case, found a {found} case")]
    WrongCaseKind {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Property error: {0}")]
    Props(String),

    #[error("Binary column error: {0}")]
    Binary(String),

    #[error("Shortcut column error: {0}")]
    Shortcut(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<fr_project::ProjectError> for AppError {
    fn from(err: fr_project::ProjectError) -> Self {
        AppError::Case(err.to_string())
    }
}

impl From<fr_props::PropsError> for AppError {
    fn from(err: fr_props::PropsError) -> Self {
        AppError::Props(err.to_string())
    }
}

impl From<fr_binary::BinaryError> for AppError {
    fn from(err: fr_binary::BinaryError) -> Self {
        AppError::Binary(err.to_string())
    }
}

impl From<fr_shortcut::ShortcutError> for AppError {
    fn from(err: fr_shortcut::ShortcutError) -> Self {
        AppError::Shortcut(err.to_string())
    }
}
