//! The canonical property table.

use crate::catalog::builtin_compounds;
use crate::compound::CompoundProperties;
use crate::correlation::VaporPressureCorrelation;
use crate::error::{PropsError, PropsResult};

/// Name-indexed set of compounds; one record per compound.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    entries: Vec<CompoundProperties>,
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PropertyTable {
    /// Table holding the built-in compounds.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_compounds().to_vec(),
        }
    }

    /// Build a table from explicit entries.
    ///
    /// Rejects entries whose key, display name or alias resolves to an
    /// already-registered compound, non-positive molar masses, and inverted
    /// Perry temperature windows.
    pub fn from_entries(entries: Vec<CompoundProperties>) -> PropsResult<Self> {
        let mut table = Self {
            entries: Vec::with_capacity(entries.len()),
        };
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, entry: CompoundProperties) -> PropsResult<()> {
        if !entry.molar_mass.is_finite() || entry.molar_mass <= 0.0 {
            return Err(PropsError::NonPhysical { what: "molar mass" });
        }
        if let VaporPressureCorrelation::Perry(c) = entry.vapor_pressure {
            if !(c.t_min_k < c.t_max_k) {
                return Err(PropsError::InvalidArg {
                    what: "Perry temperature window must satisfy Tmin < Tmax",
                });
            }
        }
        let names = std::iter::once(entry.key)
            .chain(std::iter::once(entry.display_name))
            .chain(entry.aliases.iter().copied());
        for name in names {
            if self.find(name).is_some() {
                return Err(PropsError::DuplicateCompound {
                    name: name.to_string(),
                });
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&CompoundProperties> {
        self.entries.iter().find(|entry| entry.is_named(name))
    }

    /// Look up a compound by key, display name or alias.
    pub fn get(&self, name: &str) -> PropsResult<&CompoundProperties> {
        self.find(name).ok_or_else(|| PropsError::UnknownCompound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Fail on the first name that is not in the table.
    pub fn require_all<'a, I>(&self, names: I) -> PropsResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            self.get(name)?;
        }
        Ok(())
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self, name: &str) -> PropsResult<f64> {
        Ok(self.get(name)?.molar_mass)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompoundProperties> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter(&self, query: &str) -> Vec<&CompoundProperties> {
        self.entries
            .iter()
            .filter(|entry| entry.matches_query(query))
            .collect()
    }
}
