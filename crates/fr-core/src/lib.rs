//! fr-core: numeric foundation for fractionate.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - roots (bracketed scalar root finding)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod roots;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FrError, FrResult};
pub use numeric::*;
pub use roots::{RootConfig, RootResult, bisect, find_root_from_seed};
pub use units::*;
