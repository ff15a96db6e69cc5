use fr_core::units::{k, kpa};
use fr_props::{FeedStream, PropertyTable};
use fr_shortcut::{KeyRecoveries, ShortcutColumn, ShortcutError, ShortcutSpec, UnderwoodMethod};

const COMPONENTS: [&str; 17] = [
    "hydrogen",
    "carbon monoxide",
    "carbon dioxide",
    "methane",
    "acetylene",
    "ethylene",
    "ethane",
    "methyl-acetylene",
    "propadiene",
    "propylene",
    "propane",
    "ethyl-acetylene",
    "1-butene",
    "butane",
    "pentane",
    "water",
    "nitrogen",
];

const FLOWS: [f64; 17] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 532.0, 0.0, 0.0, 0.0, 2097.0, 2163.0, 507.0, 15399.0, 0.0, 0.0,
];

fn spec() -> ShortcutSpec {
    let names: Vec<String> = COMPONENTS.iter().map(|s| s.to_string()).collect();
    let feed = FeedStream::from_components(&names, &FLOWS).unwrap();
    let mut spec = ShortcutSpec::new(
        feed,
        "ethyl-acetylene",
        "pentane",
        kpa(1810.0),
        k(413.0),
        0.5,
        KeyRecoveries {
            top: 0.95,
            bottom: 0.9999,
        },
    );
    spec.reflux_factor = 1.2;
    spec.tray_efficiency = 0.72;
    spec
}

fn run(spec: ShortcutSpec) -> Result<fr_shortcut::ShortcutReport, ShortcutError> {
    let table = PropertyTable::builtin();
    ShortcutColumn::new(spec, &table)?.run(&table)
}

#[test]
fn worked_example() {
    let r = run(spec()).unwrap();

    assert_eq!(r.fenske.min_stages, 16);
    assert!((r.underwood.phi - 1.8465).abs() < 1e-3);
    assert!((r.underwood.min_reflux - 3.077).abs() < 1e-2);
    assert_eq!(r.gilliland.ideal_plates, 35);
    assert_eq!(r.kirkbride.stripping, 4);
    assert_eq!(r.kirkbride.rectifying, 31);
    assert_eq!(r.trays.trays, 49);
}

#[test]
fn worked_example_invariants() {
    let r = run(spec()).unwrap();
    assert!(r.fenske.min_stages >= 1);
    assert!(r.underwood.min_reflux > 0.0);
    assert!(r.gilliland.ideal_plates >= r.fenske.min_stages);
    assert_eq!(r.kirkbride.rectifying + r.kirkbride.stripping, r.gilliland.ideal_plates);
    assert!(r.trays.trays >= r.gilliland.ideal_plates);

    let fed = r.feed.total_mass_kg_per_h();
    let out = r.split.distillate.total_mass_kg_per_h() + r.split.bottoms.total_mass_kg_per_h();
    assert!((fed - out).abs() < 1e-6 * fed);
}

#[test]
fn plates_fall_as_reflux_factor_rises() {
    let plates = |rf: f64| {
        let mut s = spec();
        s.reflux_factor = rf;
        run(s).unwrap().gilliland.ideal_plates
    };
    assert_eq!(plates(1.1), 40);
    assert_eq!(plates(1.5), 28);
    assert!(plates(1.1) > plates(1.5));
}

#[test]
fn percentage_efficiency_matches_fraction() {
    let mut s = spec();
    s.tray_efficiency = 72.0;
    assert_eq!(run(s).unwrap().trays.trays, 49);
}

#[test]
fn total_reboiler_drops_one_stage() {
    let mut s = spec();
    s.partial_reboiler = false;
    assert_eq!(run(s).unwrap().fenske.min_stages, 15);
}

#[test]
fn coarse_underwood_scan_lands_outside_the_keys() {
    let mut s = spec();
    s.underwood = UnderwoodMethod::FixedStep;
    assert!(matches!(
        run(s),
        Err(ShortcutError::UnderwoodRootOutOfRange { .. })
    ));
}

#[test]
fn reflux_factor_outside_range_is_rejected() {
    let mut s = spec();
    s.reflux_factor = 1.05;
    assert_eq!(
        run(s).unwrap_err(),
        ShortcutError::RefluxFactorOutOfRange { factor: 1.05 }
    );
}
