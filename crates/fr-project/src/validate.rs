//! Case validation logic.

use crate::schema::{BinaryCaseDef, CaseDef, CaseFile, RefluxDef, ShortcutCaseDef};
use fr_props::PropertyTable;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(invalid(field, v, "must be positive and finite"));
    }
    Ok(())
}

fn open_fraction(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() || v <= 0.0 || v >= 1.0 {
        return Err(invalid(field, v, "must lie strictly between 0 and 1"));
    }
    Ok(())
}

/// Check a case against the schema rules and the property table.
pub fn validate_case(case: &CaseFile, table: &PropertyTable) -> Result<(), ValidationError> {
    if case.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    validate_feed(&case.case, table)?;
    match &case.case {
        CaseDef::Binary(b) => validate_binary(b),
        CaseDef::Shortcut(s) => validate_shortcut(s, table),
    }
}

fn validate_feed(case: &CaseDef, table: &PropertyTable) -> Result<(), ValidationError> {
    let components = case.components();
    let flows = case.feed_kg_per_h();
    if components.len() != flows.len() {
        return Err(invalid(
            "feed_kg_per_h",
            flows.len(),
            "must have one flowrate per component",
        ));
    }
    if components.is_empty() {
        return Err(invalid("components", 0, "at least one component is required"));
    }

    let mut seen = HashSet::new();
    for name in components {
        let compound = table.get(name).map_err(|_| ValidationError::MissingReference {
            id: name.clone(),
            context: "property table".to_string(),
        })?;
        if !seen.insert(compound.key) {
            return Err(ValidationError::DuplicateId {
                id: name.clone(),
                context: "components".to_string(),
            });
        }
    }

    let mut total = 0.0;
    for (name, &flow) in components.iter().zip(flows) {
        if !flow.is_finite() || flow < 0.0 {
            return Err(invalid(
                &format!("feed_kg_per_h[{name}]"),
                flow,
                "must be non-negative and finite",
            ));
        }
        total += flow;
    }
    if total <= 0.0 {
        return Err(invalid("feed_kg_per_h", total, "total feed must be positive"));
    }
    Ok(())
}

fn validate_reflux(reflux: &RefluxDef) -> Result<(), ValidationError> {
    match (reflux.ratio, reflux.factor) {
        (Some(r), None) => {
            if !r.is_finite() || r < 0.0 {
                return Err(invalid("reflux.ratio", r, "must be non-negative and finite"));
            }
            Ok(())
        }
        (None, Some(f)) => {
            if !f.is_finite() || f <= 1.0 {
                return Err(invalid("reflux.factor", f, "must be greater than 1"));
            }
            Ok(())
        }
        (Some(_), Some(_)) => Err(invalid("reflux", "ratio and factor", "give exactly one of ratio or factor")),
        (None, None) => Err(invalid("reflux", "none", "give exactly one of ratio or factor")),
    }
}

fn validate_binary(case: &BinaryCaseDef) -> Result<(), ValidationError> {
    if case.components.len() != 2 {
        return Err(invalid(
            "components",
            case.components.len(),
            "a binary case needs exactly two components",
        ));
    }
    positive("pressure_pa", case.pressure_pa)?;
    if let Some(p) = case.top_purity {
        open_fraction("top_purity", p)?;
    }
    if let Some(p) = case.bottom_purity {
        open_fraction("bottom_purity", p)?;
    }
    validate_reflux(&case.reflux)?;
    if case.max_stages == 0 {
        return Err(invalid("max_stages", 0, "must be at least 1"));
    }
    Ok(())
}

fn validate_shortcut(case: &ShortcutCaseDef, table: &PropertyTable) -> Result<(), ValidationError> {
    positive("pressure_pa", case.pressure_pa)?;
    positive("temperature_k", case.temperature_k)?;
    if !case.q.is_finite() {
        return Err(invalid("q", case.q, "must be finite"));
    }
    open_fraction("top_recovery", case.top_recovery)?;
    open_fraction("bottom_recovery", case.bottom_recovery)?;

    if !(1.1..=1.5).contains(&case.reflux_factor) {
        return Err(invalid("reflux_factor", case.reflux_factor, "must lie in [1.1, 1.5]"));
    }
    let efficiency = if case.tray_efficiency > 1.0 {
        case.tray_efficiency / 100.0
    } else {
        case.tray_efficiency
    };
    if !efficiency.is_finite() || efficiency <= 0.0 || efficiency > 1.0 {
        return Err(invalid(
            "tray_efficiency",
            case.tray_efficiency,
            "must be a fraction in (0, 1] or a percentage in (1, 100]",
        ));
    }

    let keys: Vec<&str> = case
        .components
        .iter()
        .filter_map(|c| table.get(c).ok().map(|p| p.key))
        .collect();
    let mut key_ids = Vec::new();
    for (field, key) in [("light_key", &case.light_key), ("heavy_key", &case.heavy_key)] {
        let resolved = table.get(key).ok().map(|p| p.key);
        match resolved {
            Some(id) if keys.contains(&id) => key_ids.push(id),
            _ => {
                return Err(ValidationError::MissingReference {
                    id: key.clone(),
                    context: format!("{field} (not among components)"),
                });
            }
        }
    }
    if key_ids[0] == key_ids[1] {
        return Err(invalid("heavy_key", &case.heavy_key, "must differ from light_key"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::UnderwoodMethod;

    fn binary() -> BinaryCaseDef {
        BinaryCaseDef {
            components: vec!["benzene".into(), "toluene".into()],
            feed_kg_per_h: vec![40.0, 60.0],
            pressure_pa: 101_325.0,
            top_purity: Some(0.97),
            bottom_purity: Some(0.98),
            reflux: RefluxDef::ratio(3.5),
            max_stages: 200,
        }
    }

    fn shortcut() -> ShortcutCaseDef {
        ShortcutCaseDef {
            components: vec!["butane".into(), "pentane".into()],
            feed_kg_per_h: vec![500.0, 1500.0],
            light_key: "butane".into(),
            heavy_key: "pentane".into(),
            pressure_pa: 1.81e6,
            temperature_k: 413.0,
            q: 0.5,
            top_recovery: 0.95,
            bottom_recovery: 0.9999,
            reflux_factor: 1.2,
            tray_efficiency: 0.72,
            partial_reboiler: true,
            underwood: UnderwoodMethod::Bisection,
        }
    }

    fn wrap(case: CaseDef) -> CaseFile {
        CaseFile {
            version: 1,
            name: "t".into(),
            description: None,
            case,
        }
    }

    fn check(case: CaseDef) -> Result<(), ValidationError> {
        validate_case(&wrap(case), &PropertyTable::builtin())
    }

    #[test]
    fn valid_cases_pass() {
        check(CaseDef::Binary(binary())).unwrap();
        check(CaseDef::Shortcut(shortcut())).unwrap();
    }

    #[test]
    fn unknown_compound_is_a_missing_reference() {
        let mut b = binary();
        b.components[1] = "xylene".into();
        assert!(matches!(
            check(CaseDef::Binary(b)),
            Err(ValidationError::MissingReference { id, .. }) if id == "xylene"
        ));
    }

    #[test]
    fn alias_duplicates_are_caught() {
        let mut b = binary();
        b.components = vec!["toluene".into(), "methylbenzene".into()];
        assert!(matches!(
            check(CaseDef::Binary(b)),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn reflux_needs_exactly_one_form() {
        let mut b = binary();
        b.reflux = RefluxDef::default();
        assert!(check(CaseDef::Binary(b.clone())).is_err());
        b.reflux = RefluxDef {
            ratio: Some(2.0),
            factor: Some(1.3),
        };
        assert!(check(CaseDef::Binary(b.clone())).is_err());
        b.reflux = RefluxDef::factor(1.3);
        assert!(check(CaseDef::Binary(b)).is_ok());
    }

    #[test]
    fn binary_ranges() {
        let mut b = binary();
        b.top_purity = Some(1.2);
        assert!(check(CaseDef::Binary(b)).is_err());

        for (top, bottom, field) in [(1.0, 0.98, "top_purity"), (0.97, 0.0, "bottom_purity")] {
            let mut b = binary();
            b.top_purity = Some(top);
            b.bottom_purity = Some(bottom);
            assert!(matches!(
                check(CaseDef::Binary(b)),
                Err(ValidationError::InvalidValue { field: f, .. }) if f == field
            ));
        }

        let mut b = binary();
        b.feed_kg_per_h = vec![40.0, -1.0];
        assert!(check(CaseDef::Binary(b)).is_err());

        let mut b = binary();
        b.feed_kg_per_h = vec![40.0];
        assert!(check(CaseDef::Binary(b)).is_err());
    }

    #[test]
    fn shortcut_ranges() {
        let mut s = shortcut();
        s.reflux_factor = 1.6;
        assert!(check(CaseDef::Shortcut(s)).is_err());

        let mut s = shortcut();
        s.tray_efficiency = 72.0;
        assert!(check(CaseDef::Shortcut(s)).is_ok());

        let mut s = shortcut();
        s.tray_efficiency = 0.0;
        assert!(check(CaseDef::Shortcut(s)).is_err());

        let mut s = shortcut();
        s.bottom_recovery = 1.0;
        assert!(check(CaseDef::Shortcut(s)).is_err());
    }

    #[test]
    fn keys_must_be_listed_components() {
        let mut s = shortcut();
        s.light_key = "propane".into();
        assert!(matches!(
            check(CaseDef::Shortcut(s)),
            Err(ValidationError::MissingReference { .. })
        ));

        let mut s = shortcut();
        s.light_key = "n-pentane".into();
        assert!(check(CaseDef::Shortcut(s)).is_err());

        let mut s = shortcut();
        s.light_key = "n-butane".into();
        assert!(check(CaseDef::Shortcut(s)).is_ok());
    }

    #[test]
    fn newer_versions_are_rejected() {
        let mut case = wrap(CaseDef::Binary(binary()));
        case.version = 99;
        assert_eq!(
            validate_case(&case, &PropertyTable::builtin()),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        );
    }
}
