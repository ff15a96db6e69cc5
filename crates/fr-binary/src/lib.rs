//! fr-binary: McCabe-Thiele design of a binary distillation column.
//!
//! - `equilibrium`: Raoult's-law x-y curve at column pressure
//! - `operating`: rectifying/stripping lines, minimum reflux
//! - `stepping`: bounded stage stepping with feed-stage detection
//! - `column`: spec → derived compositions → full design
//! - `diagram`: plot-ready series and CSV export

pub mod column;
pub mod diagram;
pub mod equilibrium;
pub mod error;
pub mod operating;
pub mod stepping;

pub use column::{BinaryColumn, BinaryColumnSpec, BinaryDesign, ColumnTemperatures, FeedPoint, RefluxSpec};
pub use diagram::{Marker, McCabeThieleDiagram};
pub use equilibrium::EquilibriumCurve;
pub use error::{BinaryError, BinaryResult};
pub use operating::{Compositions, OperatingLines, minimum_reflux};
pub use stepping::{Stage, SteppingConfig, SteppingResult, step_stages};
