//! Error types for the FUG(K) shortcut pipeline.

use fr_core::FrError;
use fr_props::PropsError;
use thiserror::Error;

/// Errors that can occur while running the shortcut method.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShortcutError {
    #[error("Property error: {0}")]
    Props(#[from] PropsError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] FrError),

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Key component {name} is not in the feed")]
    KeyNotInFeed { name: String },

    #[error("Light key {light} is not more volatile than heavy key {heavy} (alpha = {alpha:.4})")]
    KeysNotOrdered {
        light: String,
        heavy: String,
        alpha: f64,
    },

    #[error("Reflux factor {factor} is outside [1.1, 1.5]")]
    RefluxFactorOutOfRange { factor: f64 },

    #[error("Tray efficiency {efficiency} does not normalise into (0, 1]")]
    EfficiencyOutOfRange { efficiency: f64 },

    #[error("Minimum reflux {r_min:.4} is not positive")]
    NonPositiveMinimumReflux { r_min: f64 },

    #[error("Underwood root phi = {phi:.4} is outside (1, {alpha_lk:.4})")]
    UnderwoodRootOutOfRange { phi: f64, alpha_lk: f64 },

    #[error("Underwood scan found no root within {steps} steps")]
    UnderwoodNotConverged { steps: usize },

    #[error("Step '{step}' requires '{requires}' to run first")]
    Precondition {
        step: &'static str,
        requires: &'static str,
    },
}

pub type ShortcutResult<T> = Result<T, ShortcutError>;
