use std::io::Write;

use cubepuzzle::Face;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_yaml_matches_default_impl() {
    assert_eq!(*DEFAULT_PREFS, Preferences::default());
    assert_eq!(DEFAULT_PREFS.validate(), Ok(()));
    assert_eq!(DEFAULT_PREFS.engine.queue_capacity, 5);
    assert_eq!(DEFAULT_PREFS.engine.scramble_length, 25);
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let prefs = Preferences::from_yaml_str(
        "
animation:
  twist_interpolation: cosine
engine:
  queue_capacity: 2
",
    )
    .expect("error parsing preferences");

    let mut expected = Preferences::default();
    expected.animation.twist_interpolation = InterpolateFn::Cosine;
    expected.engine.queue_capacity = 2;
    assert_eq!(prefs, expected);
}

fn assert_rejected(yaml: &str, expected_in_message: &str) {
    let err = Preferences::from_yaml_str(yaml).expect_err(yaml);
    let message = format!("{err:?}");
    assert!(
        message.contains(expected_in_message),
        "expected {expected_in_message:?} in {message:?}",
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    assert_rejected("engine:\n  solved_threshold: 1.5\n", "engine.solved_threshold");
    assert_rejected("engine:\n  solved_threshold: 0\n", "engine.solved_threshold");
    assert_rejected("engine:\n  scramble_length: 0\n", "engine.scramble_length");
    assert_rejected("animation:\n  twist_duration: -1.0\n", "animation.twist_duration");
    assert_rejected("view:\n  pitch_limit: 500.0\n", "view.pitch_limit");
    assert_rejected("view:\n  drag_threshold: -2.0\n", "view.drag_threshold");
    assert_rejected("colors:\n  u: \"white\"\n", "white");
    assert_rejected("animation:\n  twist_interpolation: bouncy\n", "bouncy");
}

#[test]
fn test_validate_names_field() {
    let mut prefs = Preferences::default();
    prefs.view.drag_sensitivity = f32::NAN;
    assert_eq!(
        prefs.validate(),
        Err(PrefsError::OutOfRange {
            field: "view.drag_sensitivity",
            reason: "must be finite",
        }),
    );
    assert_eq!(
        prefs.validate().map_err(|e| e.to_string()),
        Err("view.drag_sensitivity must be finite".to_owned()),
    );
}

#[test]
fn test_load_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").expect("error creating file");
    writeln!(file, "view:\n  pitch_limit: 500.0").expect("error writing file");
    assert_eq!(Preferences::load(Some(file.path())), Preferences::default());

    let missing = file.path().with_file_name("does_not_exist.yaml");
    assert_eq!(Preferences::load(Some(&missing)), Preferences::default());
    assert_eq!(Preferences::load(None), Preferences::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::with_suffix(".yaml").expect("error creating file");
    writeln!(file, "view:\n  drag_sensitivity: 0.8\ncolors:\n  r: \"#ff0000\"")
        .expect("error writing file");
    let prefs = Preferences::try_load(Some(file.path())).expect("error loading preferences");
    assert_eq!(prefs.view.drag_sensitivity, 0.8);
    assert_eq!(prefs.colors.get(Face::R), Rgb::new(0xff, 0, 0));
    assert_eq!(prefs.colors.get(Face::L), ColorPreferences::default().l);
}

#[test]
fn test_yaml_roundtrip() {
    let mut prefs = Preferences::default();
    prefs.engine.solved_threshold = 0.5;
    let yaml = prefs.to_yaml_string().expect("error serializing");
    assert_eq!(Preferences::from_yaml_str(&yaml).expect("error parsing"), prefs);
}

#[test]
fn test_rgb() {
    assert_eq!("#4caf50".parse(), Ok(Rgb::new(0x4c, 0xaf, 0x50)));
    assert_eq!(Rgb::new(0xff, 0xeb, 0x3b).to_string(), "#ffeb3b");
    for bad in ["4caf50", "#4caf5", "#4caf500", "#zzzzzz", "#ééé", "#+f+f+f"] {
        assert_eq!(
            bad.parse::<Rgb>(),
            Err(PrefsError::InvalidColor(bad.to_owned())),
            "{bad}",
        );
    }
}

#[test]
fn test_interpolation() {
    for f in [InterpolateFn::Linear, InterpolateFn::Cosine] {
        assert_eq!(f.interpolate(0.0), 0.0, "{f}");
        assert!((f.interpolate(1.0) - 1.0).abs() < 1e-6, "{f}");
        assert!((f.interpolate(0.5) - 0.5).abs() < 1e-6, "{f}");
        assert_eq!(f.interpolate(-3.0), 0.0, "{f}");
    }
    assert!(InterpolateFn::Cosine.interpolate(0.25) < 0.25);
    assert_eq!(InterpolateFn::Cosine.to_string(), "cosine");
}
