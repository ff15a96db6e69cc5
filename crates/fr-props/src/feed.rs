//! Feed streams: mass flowrates by component and their mole composition.

use crate::error::{PropsError, PropsResult};
use crate::table::PropertyTable;
use fr_core::FrResult;
use fr_core::numeric::ensure_finite;

/// Mass flowrates [kg/h] keyed by compound name, in caller order.
///
/// Flowrates are finite and non-negative with a positive total. Fractions are
/// derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedStream {
    items: Vec<(String, f64)>,
}

impl FeedStream {
    pub fn new(flows: Vec<(String, f64)>) -> PropsResult<Self> {
        if flows.is_empty() {
            return Err(PropsError::InvalidArg {
                what: "empty feed stream",
            });
        }

        let mut total = 0.0;
        for (i, (name, flow)) in flows.iter().enumerate() {
            if !flow.is_finite() {
                return Err(PropsError::NonPhysical {
                    what: "non-finite feed flowrate",
                });
            }
            if *flow < 0.0 {
                return Err(PropsError::NonPhysical {
                    what: "negative feed flowrate",
                });
            }
            if flows[..i].iter().any(|(other, _)| other.trim().eq_ignore_ascii_case(name.trim())) {
                return Err(PropsError::DuplicateCompound { name: name.clone() });
            }
            total += flow;
        }

        if total <= 0.0 {
            return Err(PropsError::NonPhysical {
                what: "feed flowrates sum to zero",
            });
        }

        Ok(Self { items: flows })
    }

    /// Pair a component list with a parallel flowrate list.
    pub fn from_components(components: &[String], flows_kg_per_h: &[f64]) -> PropsResult<Self> {
        if components.len() != flows_kg_per_h.len() {
            return Err(PropsError::InvalidArg {
                what: "component and flowrate lists differ in length",
            });
        }
        Self::new(
            components
                .iter()
                .cloned()
                .zip(flows_kg_per_h.iter().copied())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(name, flow)| (name.as_str(), *flow))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|(name, _)| name.as_str())
    }

    /// Mass flowrate [kg/h] (0.0 if the component is absent).
    pub fn mass_flow(&self, name: &str) -> f64 {
        self.items
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    pub fn total_mass_flow(&self) -> f64 {
        self.items.iter().map(|(_, f)| f).sum()
    }

    pub fn mass_fractions(&self) -> Vec<(&str, f64)> {
        let total = self.total_mass_flow();
        self.iter().map(|(name, flow)| (name, flow / total)).collect()
    }

    /// Convert to molar flows using the table's molar masses.
    pub fn to_moles(&self, table: &PropertyTable) -> PropsResult<MoleFlows> {
        let mut items = Vec::with_capacity(self.items.len());
        for (name, mass_flow) in &self.items {
            let molar_mass = table.molar_mass(name)?;
            items.push(ComponentFlow {
                name: name.clone(),
                mass_kg_per_h: *mass_flow,
                molar_mass,
                kmol_per_h: mass_flow / molar_mass,
            });
        }
        MoleFlows::new(items)
    }
}

/// One component's flow in both bases.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFlow {
    pub name: String,
    pub mass_kg_per_h: f64,
    /// Molar mass [kg/kmol]
    pub molar_mass: f64,
    pub kmol_per_h: f64,
}

impl ComponentFlow {
    /// Same component carrying `kmol_per_h` with a consistent mass flow.
    pub fn with_moles(&self, kmol_per_h: f64) -> Self {
        Self {
            name: self.name.clone(),
            mass_kg_per_h: kmol_per_h * self.molar_mass,
            molar_mass: self.molar_mass,
            kmol_per_h,
        }
    }
}

/// Molar flows with derived fractions. Totals may be zero for an empty
/// product; fractions are then reported as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleFlows {
    items: Vec<ComponentFlow>,
}

impl MoleFlows {
    pub fn new(items: Vec<ComponentFlow>) -> PropsResult<Self> {
        for item in &items {
            ensure_finite(item.kmol_per_h, "molar flowrate")?;
            if item.kmol_per_h < 0.0 {
                return Err(PropsError::NonPhysical {
                    what: "negative molar flowrate",
                });
            }
        }
        Ok(Self { items })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentFlow> + '_ {
        self.items.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ComponentFlow> {
        self.items.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn total_kmol_per_h(&self) -> f64 {
        self.items.iter().map(|c| c.kmol_per_h).sum()
    }

    pub fn total_mass_kg_per_h(&self) -> f64 {
        self.items.iter().map(|c| c.mass_kg_per_h).sum()
    }

    /// Mole fraction of `name` (0.0 if absent or the stream is empty).
    pub fn mole_fraction(&self, name: &str) -> f64 {
        let total = self.total_kmol_per_h();
        match self.get(name) {
            Some(c) if total > 0.0 => c.kmol_per_h / total,
            _ => 0.0,
        }
    }

    pub fn mole_fractions(&self) -> Vec<(&str, f64)> {
        self.items
            .iter()
            .map(|c| (c.name.as_str(), self.mole_fraction(&c.name)))
            .collect()
    }

    /// Mass fraction of `name` (0.0 if absent or the stream is empty).
    pub fn mass_fraction(&self, name: &str) -> f64 {
        let total = self.total_mass_kg_per_h();
        match self.get(name) {
            Some(c) if total > 0.0 => c.mass_kg_per_h / total,
            _ => 0.0,
        }
    }
}

/// Light-component mole fraction of a binary given by mass,
/// `x = (m_A/M_A) / (m_A/M_A + m_B/M_B)`.
pub fn binary_mole_fraction(mass_a: f64, molar_mass_a: f64, mass_b: f64, molar_mass_b: f64) -> FrResult<f64> {
    let n_a = ensure_finite(mass_a / molar_mass_a, "light component moles")?;
    let n_b = ensure_finite(mass_b / molar_mass_b, "heavy component moles")?;
    ensure_finite(n_a / (n_a + n_b), "binary mole fraction")
}
