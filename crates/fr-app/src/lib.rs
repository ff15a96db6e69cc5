//! Shared application service layer for fractionate.
//!
//! Both the CLI and the UI go through this crate for case loading, running
//! the binary and shortcut designs, property queries and text reports.

pub mod case_service;
pub mod error;
pub mod query;
pub mod report;
pub mod run_service;

pub use case_service::{CaseSummary, fed_components, load_case, save_case, summarize};
pub use error::{AppError, AppResult};
pub use query::{
    CompoundSummary, SaturationQuery, VaporPressureQuery, compound, list_compounds,
    saturation_temperature, vapor_pressure,
};
pub use report::BinaryProducts;
pub use run_service::{
    BinaryOverrides, BinaryRun, ShortcutOverrides, binary_case, binary_spec, run_binary,
    run_shortcut, shortcut_case, shortcut_spec,
};
