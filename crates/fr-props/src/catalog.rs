//! Built-in compound data.
//!
//! Perry coefficients are `[C1, C2, C3, C4, C5, Tmin, Tmax]` with P in Pa and
//! T in K. Benzene and toluene use the reduced-temperature form instead.

use crate::compound::CompoundProperties;
use crate::correlation::{
    PerryHeatOfVaporization, PerryVaporPressure, ReducedAntoine, VaporPressureCorrelation,
};

const fn perry(c: [f64; 7]) -> VaporPressureCorrelation {
    VaporPressureCorrelation::Perry(PerryVaporPressure {
        c1: c[0],
        c2: c[1],
        c3: c[2],
        c4: c[3],
        c5: c[4],
        t_min_k: c[5],
        t_max_k: c[6],
    })
}

/// Perry ΔHv constants; `c1` is given in units of 1e7 J/kmol.
const fn hvap(c1_e7: f64, c2: f64, c3: f64, c4: f64, tc: f64) -> Option<PerryHeatOfVaporization> {
    Some(PerryHeatOfVaporization {
        c1_j_per_kmol: c1_e7 * 1.0e7,
        c2,
        c3,
        c4,
        critical_temperature_k: tc,
    })
}

const BUILTIN_COMPOUNDS: [CompoundProperties; 19] = [
    CompoundProperties {
        key: "hydrogen",
        display_name: "Hydrogen",
        formula: "H2",
        aliases: &[],
        molar_mass: 2.016,
        vapor_pressure: perry([12.69, -94.896, 1.1125, 3.2915e-4, 2.0, 13.95, 33.19]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "carbon monoxide",
        display_name: "Carbon Monoxide",
        formula: "CO",
        aliases: &["carbonmonoxide"],
        molar_mass: 28.01,
        vapor_pressure: perry([45.698, -1076.6, -4.8814, 7.5673e-5, 2.0, 68.15, 132.92]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "carbon dioxide",
        display_name: "Carbon Dioxide",
        formula: "CO2",
        aliases: &["carbondioxide"],
        molar_mass: 44.01,
        vapor_pressure: perry([47.0169, -2839.0, -3.86388, 2.8e-16, 6.0, 216.58, 304.21]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "methane",
        display_name: "Methane",
        formula: "CH4",
        aliases: &[],
        molar_mass: 16.04,
        vapor_pressure: perry([39.205, -1324.4, -3.4366, 3.1019e-5, 2.0, 90.69, 190.56]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "acetylene",
        display_name: "Acetylene",
        formula: "C2H2",
        aliases: &["ethyne"],
        molar_mass: 26.04,
        vapor_pressure: perry([39.63, -2552.2, -2.78, 2.39e-16, 6.0, 192.4, 308.3]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "ethylene",
        display_name: "Ethylene",
        formula: "C2H4",
        aliases: &["ethene"],
        molar_mass: 28.05,
        vapor_pressure: perry([53.963, -2443.0, -5.5643, 1.9079e-5, 2.0, 104.0, 282.34]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "ethane",
        display_name: "Ethane",
        formula: "C2H6",
        aliases: &[],
        molar_mass: 30.07,
        vapor_pressure: perry([51.857, -2598.7, -5.1283, 1.4913e-5, 2.0, 90.35, 305.32]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "methyl-acetylene",
        display_name: "Methyl-Acetylene",
        formula: "C3H4",
        aliases: &["propyne"],
        molar_mass: 40.06,
        vapor_pressure: perry([50.242, -3811.9, -4.2526, 6.53e-17, 6.0, 170.45, 402.4]),
        heat_of_vaporization: hvap(3.19, 0.38, 0.0, 0.0, 402.4),
    },
    CompoundProperties {
        key: "propadiene",
        display_name: "Propadiene",
        formula: "C3H4",
        aliases: &["allene"],
        molar_mass: 40.06,
        vapor_pressure: perry([57.069, -3682.7, -5.5662, 6.5133e-6, 2.0, 136.87, 394.0]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "propylene",
        display_name: "Propylene",
        formula: "C3H6",
        aliases: &["propene"],
        molar_mass: 42.08,
        vapor_pressure: perry([43.905, -3097.8, -3.4425, 1.0e-16, 6.0, 87.89, 364.85]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "propane",
        display_name: "Propane",
        formula: "C3H8",
        aliases: &["n-propane"],
        molar_mass: 44.1,
        vapor_pressure: perry([59.078, -3492.6, -6.0669, 1.0919e-5, 2.0, 85.47, 369.83]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "ethyl-acetylene",
        display_name: "Ethyl-Acetylene",
        formula: "C4H6",
        aliases: &["1-butyne"],
        molar_mass: 54.09,
        vapor_pressure: perry([77.004, -5054.5, -8.5665, 1.0161e-5, 2.0, 147.43, 440.0]),
        heat_of_vaporization: hvap(3.70, 0.39, 0.0, 0.0, 440.0),
    },
    CompoundProperties {
        key: "1-butene",
        display_name: "1-Butene",
        formula: "C4H8",
        aliases: &["butene"],
        molar_mass: 56.11,
        vapor_pressure: perry([51.836, -4019.2, -4.5229, 4.88e-17, 6.0, 87.8, 419.5]),
        heat_of_vaporization: hvap(3.38, 0.51, 0.0, 0.0, 419.5),
    },
    CompoundProperties {
        key: "butane",
        display_name: "Butane",
        formula: "C4H10",
        aliases: &["n-butane"],
        molar_mass: 58.12,
        vapor_pressure: perry([66.343, -4363.2, -7.046, 9.4509e-6, 2.0, 134.86, 425.12]),
        heat_of_vaporization: hvap(3.62, 0.83, -0.82, 0.4, 425.12),
    },
    CompoundProperties {
        key: "pentane",
        display_name: "Pentane",
        formula: "C5H12",
        aliases: &["n-pentane"],
        molar_mass: 72.15,
        vapor_pressure: perry([78.741, -5420.3, -8.8253, 9.6171e-6, 2.0, 143.42, 469.7]),
        heat_of_vaporization: hvap(3.91, 0.39, 0.0, 0.0, 469.7),
    },
    CompoundProperties {
        key: "water",
        display_name: "Water",
        formula: "H2O",
        aliases: &[],
        molar_mass: 18.02,
        vapor_pressure: perry([73.649, -7258.2, -7.3037, 4.1653e-6, 2.0, 273.16, 647.1]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "nitrogen",
        display_name: "Nitrogen",
        formula: "N2",
        aliases: &[],
        molar_mass: 28.01,
        vapor_pressure: perry([58.282, -1084.1, -8.3144, 0.044127, 1.0, 63.15, 126.2]),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "benzene",
        display_name: "Benzene",
        formula: "C6H6",
        aliases: &[],
        molar_mass: 78.11,
        vapor_pressure: VaporPressureCorrelation::ReducedAntoine(ReducedAntoine {
            critical_pressure_pa: 48.9e5,
            critical_temperature_k: 562.2,
            a: -6.98273,
            b: 1.33213,
            c: -2.62863,
            d: -3.33399,
        }),
        heat_of_vaporization: None,
    },
    CompoundProperties {
        key: "toluene",
        display_name: "Toluene",
        formula: "C7H8",
        aliases: &["methylbenzene"],
        molar_mass: 92.14,
        vapor_pressure: VaporPressureCorrelation::ReducedAntoine(ReducedAntoine {
            critical_pressure_pa: 41.0e5,
            critical_temperature_k: 591.8,
            a: -7.28607,
            b: 1.38091,
            c: -2.83433,
            d: -2.79168,
        }),
        heat_of_vaporization: None,
    },
];

pub fn builtin_compounds() -> &'static [CompoundProperties] {
    &BUILTIN_COMPOUNDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for entry in builtin_compounds() {
            assert!(seen.insert(entry.key), "duplicate key: {}", entry.key);
            assert_eq!(entry.key, entry.key.to_ascii_lowercase());
        }
    }

    #[test]
    fn perry_windows_are_ordered() {
        for entry in builtin_compounds() {
            if let VaporPressureCorrelation::Perry(c) = entry.vapor_pressure {
                assert!(c.t_min_k < c.t_max_k, "{}", entry.key);
            }
            assert!(entry.molar_mass > 0.0, "{}", entry.key);
        }
    }

    #[test]
    fn debutanizer_keys_have_latent_heat() {
        for key in ["methyl-acetylene", "ethyl-acetylene", "1-butene", "butane", "pentane"] {
            let entry = builtin_compounds().iter().find(|e| e.key == key).unwrap();
            assert!(entry.heat_of_vaporization.is_some(), "{key}");
        }
    }
}
