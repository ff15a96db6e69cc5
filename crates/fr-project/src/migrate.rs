//! Case file versioning.

use crate::ProjectError;
use crate::schema::CaseFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    while case.version < LATEST_VERSION {
        case = migrate_one_version(case)?;
    }
    Ok(case)
}

fn migrate_one_version(case: CaseFile) -> Result<CaseFile, ProjectError> {
    match case.version {
        0 => migrate_v0_to_v1(case),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files predate the `version` field; the layout is unchanged.
fn migrate_v0_to_v1(mut case: CaseFile) -> Result<CaseFile, ProjectError> {
    case.version = 1;
    Ok(case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BinaryCaseDef, CaseDef, RefluxDef};

    fn case(version: u32) -> CaseFile {
        CaseFile {
            version,
            name: "test".to_string(),
            description: None,
            case: CaseDef::Binary(BinaryCaseDef {
                components: vec!["benzene".into(), "toluene".into()],
                feed_kg_per_h: vec![40.0, 60.0],
                pressure_pa: 101_325.0,
                top_purity: Some(0.97),
                bottom_purity: Some(0.98),
                reflux: RefluxDef::ratio(3.5),
                max_stages: 200,
            }),
        }
    }

    #[test]
    fn migrate_latest_is_noop() {
        let latest = case(LATEST_VERSION);
        assert_eq!(migrate_to_latest(latest.clone()).unwrap(), latest);
    }

    #[test]
    fn unversioned_files_are_upgraded() {
        let migrated = migrate_to_latest(case(0)).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.case, case(0).case);
    }
}
