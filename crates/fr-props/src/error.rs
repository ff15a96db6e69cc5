//! Property lookup errors.

use fr_core::FrError;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur during property lookups and feed conversions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// Compound name not present in the property table.
    #[error("Unknown compound: {name}")]
    UnknownCompound { name: String },

    /// Two table entries (or two feed entries) resolve to the same name.
    #[error("Duplicate compound: {name}")]
    DuplicateCompound { name: String },

    /// Non-physical values (negative flowrate, non-positive molar mass, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Numeric failure from the core layer (non-finite value, root not bracketed).
    #[error("Numeric error: {0}")]
    Numeric(#[from] FrError),
}
