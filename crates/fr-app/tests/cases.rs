use fr_app::report::{binary_report, shortcut_report};
use fr_app::*;
use fr_props::PropertyTable;
use std::path::{Path, PathBuf};

fn case_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases").join(name)
}

#[test]
fn debutanizer_case_runs() {
    let table = PropertyTable::builtin();
    let case = load_case(&case_path("debutanizer.yaml")).unwrap();
    let report = run_shortcut(&case, ShortcutOverrides::default(), &table).unwrap();

    assert_eq!(report.fenske.min_stages, 16);
    assert_eq!(report.gilliland.ideal_plates, 35);
    assert_eq!(report.trays.trays, 49);

    let text = shortcut_report(&case.name, &report, &table);
    assert!(text.contains("Nmin = 16"));
    assert!(text.contains("49 actual trays"));
    assert!(text.contains("Inaccurate"), "hydrogen at 413 K is extrapolated");
}

#[test]
fn shortcut_overrides_apply() {
    let table = PropertyTable::builtin();
    let case = load_case(&case_path("debutanizer.yaml")).unwrap();
    let overrides = ShortcutOverrides {
        reflux_factor: Some(1.5),
        tray_efficiency: Some(100.0),
    };
    let report = run_shortcut(&case, overrides, &table).unwrap();
    assert_eq!(report.gilliland.ideal_plates, 28);
    assert_eq!(report.trays.trays, 28);

    let bad = ShortcutOverrides {
        reflux_factor: Some(2.0),
        tray_efficiency: None,
    };
    assert!(matches!(run_shortcut(&case, bad, &table), Err(AppError::Shortcut(_))));
}

#[test]
fn benzene_toluene_case_runs() {
    let table = PropertyTable::builtin();
    let case = load_case(&case_path("benzene_toluene.yaml")).unwrap();
    let run = run_binary(&case, BinaryOverrides::default(), &table).unwrap();

    assert_eq!(run.design.lines.reflux_ratio, 3.5);
    assert!(run.design.stepping.ideal_stages > 0);
    assert!(!run.diagram.staircase.is_empty());

    let text = binary_report(&run);
    assert!(text.contains("reflux ratio R = 3.5000"));
    assert!(text.contains("reboiler"));
    assert!(text.contains("distillate"));
}

#[test]
fn reflux_override_changes_stage_count() {
    let table = PropertyTable::builtin();
    let case = load_case(&case_path("benzene_toluene.yaml")).unwrap();
    let base = run_binary(&case, BinaryOverrides::default(), &table).unwrap();
    let high = run_binary(&case, BinaryOverrides { reflux_ratio: Some(10.0) }, &table).unwrap();
    assert!(high.design.stepping.ideal_stages <= base.design.stepping.ideal_stages);
}

#[test]
fn factor_case_runs() {
    let table = PropertyTable::builtin();
    let case = load_case(&case_path("benzene_toluene_factor.json")).unwrap();
    let run = run_binary(&case, BinaryOverrides::default(), &table).unwrap();
    assert!((run.design.lines.reflux_ratio / run.design.minimum_reflux - 1.3).abs() < 1e-9);
}

#[test]
fn report_notes_a_missing_feed_stage() {
    let table = PropertyTable::builtin();
    let mut case = load_case(&case_path("benzene_toluene.yaml")).unwrap();
    let fr_project::CaseDef::Binary(def) = &mut case.case else {
        panic!("expected a binary case");
    };
    def.bottom_purity = Some(0.61);
    let run = run_binary(&case, BinaryOverrides { reflux_ratio: Some(3.5) }, &table).unwrap();

    assert_eq!(run.design.stepping.feed_stage, None);
    assert!(binary_report(&run).contains("feed stage: not reached above the reboiler"));
}
