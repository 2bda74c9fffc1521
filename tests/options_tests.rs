//! Integrationstests für das Laden und Speichern der TOML-Optionen.

use procedural_track_generator::engine::{OrientationConvention, SplineKind, StartPlacement};
use procedural_track_generator::GeneratorOptions;

fn temp_file(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("ptg_{}_{}.toml", name, std::process::id()))
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_file("roundtrip");
    let mut options = GeneratorOptions {
        track_count: 5,
        seed_base: Some(4242),
        export_path: Some("tracks.json".to_string()),
        pretty_json: true,
        ..GeneratorOptions::default()
    };
    options.track.point_count = 30;
    options.track.spline = SplineKind::Natural;
    options.track.start_placement = StartPlacement::ArcLength;
    options.track.orientation = OrientationConvention::Mathematical;
    options.track.schedule.k = 250.0;

    options.save_to_file(&path).expect("Speichern erwartet");
    let loaded = GeneratorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, options);
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_file("does_not_exist");
    let _ = std::fs::remove_file(&path);
    assert_eq!(GeneratorOptions::load_from_file(&path), GeneratorOptions::default());
}

#[test]
fn test_broken_file_gives_defaults() {
    let path = temp_file("broken");
    std::fs::write(&path, "track_count = \"neun\"\n[track\n").expect("Schreiben erwartet");
    let loaded = GeneratorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, GeneratorOptions::default());
}

#[test]
fn test_config_path_file_name() {
    let path = GeneratorOptions::config_path();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("procedural_track_generator.toml")
    );
}
