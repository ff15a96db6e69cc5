//! Error types for binary column calculations.

use fr_core::FrError;
use fr_props::PropsError;
use thiserror::Error;

/// Errors that can occur while designing a binary column.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinaryError {
    #[error("Property error: {0}")]
    Props(#[from] PropsError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] FrError),

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Missing {which} purity; stage stepping needs both product specifications")]
    MissingPurity { which: &'static str },

    #[error("Compositions must satisfy xB < xF < xD (xB={x_b:.4}, xF={x_f:.4}, xD={x_d:.4})")]
    InconsistentCompositions { x_b: f64, x_f: f64, x_d: f64 },

    #[error("Operating line pinches the equilibrium curve at stage {stage} (x={x:.4})")]
    Pinch { stage: u32, x: f64 },

    #[error("Stage stepping exceeded {max_stages} stages without reaching xB")]
    StageLimit { max_stages: u32 },
}

pub type BinaryResult<T> = Result<T, BinaryError>;
