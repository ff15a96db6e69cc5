//! fr-shortcut: Fenske-Underwood-Gilliland-Kirkbride shortcut design of a
//! multicomponent column.
//!
//! The pipeline (`ShortcutColumn`) runs, in order: vapor pressures at the
//! column temperature, relative volatilities to the heavy key, a sharp
//! product split, Fenske minimum stages, Underwood minimum reflux, the
//! Gilliland correlation, Kirkbride feed location and actual trays. The
//! individual correlations are plain functions in their own modules.

pub mod column;
pub mod error;
pub mod fenske;
pub mod gilliland;
pub mod kirkbride;
pub mod split;
pub mod trays;
pub mod underwood;
pub mod volatility;

pub use column::{ShortcutColumn, ShortcutReport, ShortcutSpec};
pub use error::{ShortcutError, ShortcutResult};
pub use fenske::FenskeResult;
pub use gilliland::{DEFAULT_REFLUX_FACTOR, GillilandResult, REFLUX_FACTOR_RANGE};
pub use kirkbride::KirkbrideResult;
pub use split::{KeyRecoveries, ProductSplit};
pub use trays::{ActualTrays, DEFAULT_TRAY_EFFICIENCY, normalize_efficiency};
pub use underwood::{FixedStepScan, UnderwoodMethod, UnderwoodResult};
pub use volatility::{RelativeVolatility, VaporPressureEntry};
