use thiserror::Error;

pub type FrResult<T> = Result<T, FrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("No sign change bracketing the root of {what} in [{lo}, {hi}]")]
    NoBracket { what: &'static str, lo: f64, hi: f64 },

    #[error("Root finding for {what} did not converge after {iterations} iterations")]
    NotConverged { what: &'static str, iterations: usize },
}
