//! fr-props: pure-component property data for fractionate.
//!
//! Provides:
//! - A canonical `PropertyTable` with one record per compound
//! - Vapor-pressure correlations (Perry equation, reduced-temperature form)
//!   with validity-window flags instead of hard failures
//! - Saturation temperature by bounded root finding
//! - Heat of vaporization where constants are tabulated
//! - Feed streams and mass-to-mole conversion
//!
//! # Example
//!
//! ```no_run
//! use fr_props::PropertyTable;
//! use fr_core::units::{k, to_kpa};
//!
//! let table = PropertyTable::builtin();
//! let pentane = table.get("pentane").unwrap();
//! let vp = pentane.vapor_pressure(k(413.0)).unwrap();
//! println!("Psat = {:.1} kPa ({:?})", to_kpa(vp.pressure), vp.range);
//! ```

pub mod catalog;
pub mod compound;
pub mod correlation;
pub mod error;
pub mod feed;
pub mod table;

// Re-exports for ergonomics
pub use catalog::builtin_compounds;
pub use compound::CompoundProperties;
pub use correlation::{
    PerryHeatOfVaporization, PerryVaporPressure, RangeCheck, ReducedAntoine, SaturationTemperature,
    VaporPressure, VaporPressureCorrelation,
};
pub use error::{PropsError, PropsResult};
pub use feed::{ComponentFlow, FeedStream, MoleFlows, binary_mole_fraction};
pub use table::PropertyTable;
