//! Case file schema definitions.

use serde::{Deserialize, Serialize};

pub use fr_shortcut::UnderwoodMethod;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    /// Missing in files written before versioning; read as 0
    #[serde(default)]
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub case: CaseDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaseDef {
    Binary(BinaryCaseDef),
    Shortcut(ShortcutCaseDef),
}

impl CaseDef {
    pub fn kind(&self) -> &'static str {
        match self {
            CaseDef::Binary(_) => "binary",
            CaseDef::Shortcut(_) => "shortcut",
        }
    }

    pub fn components(&self) -> &[String] {
        match self {
            CaseDef::Binary(b) => &b.components,
            CaseDef::Shortcut(s) => &s.components,
        }
    }

    pub fn feed_kg_per_h(&self) -> &[f64] {
        match self {
            CaseDef::Binary(b) => &b.feed_kg_per_h,
            CaseDef::Shortcut(s) => &s.feed_kg_per_h,
        }
    }
}

/// Two-component McCabe-Thiele case; the first component is the light one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinaryCaseDef {
    pub components: Vec<String>,
    pub feed_kg_per_h: Vec<f64>,
    #[serde(default = "default_pressure_pa")]
    pub pressure_pa: f64,
    /// Mass fraction of the light component in the distillate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_purity: Option<f64>,
    /// Mass fraction of the heavy component in the bottoms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_purity: Option<f64>,
    pub reflux: RefluxDef,
    #[serde(default = "default_max_stages")]
    pub max_stages: u32,
}

/// Exactly one of `ratio` and `factor` must be set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct RefluxDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// Multiple of the minimum reflux
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

impl RefluxDef {
    pub fn ratio(r: f64) -> Self {
        Self {
            ratio: Some(r),
            factor: None,
        }
    }

    pub fn factor(f: f64) -> Self {
        Self {
            ratio: None,
            factor: Some(f),
        }
    }
}

/// Multicomponent FUG(K) case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortcutCaseDef {
    pub components: Vec<String>,
    pub feed_kg_per_h: Vec<f64>,
    pub light_key: String,
    pub heavy_key: String,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub q: f64,
    pub top_recovery: f64,
    pub bottom_recovery: f64,
    #[serde(default = "default_reflux_factor")]
    pub reflux_factor: f64,
    /// Fraction, or percent when above 1
    #[serde(default = "default_tray_efficiency")]
    pub tray_efficiency: f64,
    #[serde(default = "default_partial_reboiler")]
    pub partial_reboiler: bool,
    #[serde(default)]
    pub underwood: UnderwoodMethod,
}

pub fn default_pressure_pa() -> f64 {
    fr_core::units::constants::ATM_PA
}

pub fn default_max_stages() -> u32 {
    200
}

pub fn default_reflux_factor() -> f64 {
    1.2
}

pub fn default_tray_efficiency() -> f64 {
    0.7
}

fn default_partial_reboiler() -> bool {
    true
}
