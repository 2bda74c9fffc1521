//! Integrationstests für den JSON-Export.

use procedural_track_generator::engine::{RandomStream, TrackParams, TrackResult};
use procedural_track_generator::export::{board_to_json, write_board_json};
use procedural_track_generator::TrackBoard;

fn board_with_one_track() -> TrackBoard {
    let params = TrackParams {
        iterations: 100,
        sample_count: 100,
        ..TrackParams::default()
    };
    let mut board = TrackBoard::new(3, params);
    board
        .renew(1, &mut RandomStream::from_seed(31))
        .expect("Erneuerung erwartet");
    board
}

#[test]
fn test_export_skips_empty_slots() {
    let board = board_with_one_track();
    let json = board_to_json(&board, false).expect("JSON erwartet");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON erwartet");

    let tracks = value.as_array().expect("Array erwartet");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0]["index"], 1);
    assert_eq!(tracks[0]["seed"], 31);
    assert_eq!(tracks[0]["generation"], 1);
}

#[test]
fn test_exported_track_deserializes() {
    let board = board_with_one_track();
    let json = board_to_json(&board, true).expect("JSON erwartet");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON erwartet");

    let track: TrackResult =
        serde_json::from_value(value[0]["track"].clone()).expect("TrackResult erwartet");
    let original = board.slot(1).and_then(|s| s.result.as_ref()).expect("Strecke erwartet");
    assert_eq!(track.curve.len(), original.curve.len());
    assert_eq!(track.start_index, original.start_index);
    assert_eq!(track.tour.len(), original.tour.len());
}

#[test]
fn test_write_board_json_creates_file() {
    let board = board_with_one_track();
    let path = std::env::temp_dir().join(format!("ptg_export_{}.json", std::process::id()));

    write_board_json(&board, &path, false).expect("Export erwartet");
    let content = std::fs::read_to_string(&path).expect("Datei erwartet");
    let _ = std::fs::remove_file(&path);

    assert!(content.starts_with('['));
    assert!(content.contains("\"start_orientation\""));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let board = board_with_one_track();
    let path = std::env::temp_dir()
        .join("ptg_gibt_es_nicht")
        .join("sub")
        .join("tracks.json");
    let err = write_board_json(&board, &path, false).expect_err("Fehler erwartet");
    assert!(err.to_string().contains("Export nach"));
}

#[test]
fn test_export_keeps_seed_of_kept_track_after_failed_renewal() {
    let mut board = board_with_one_track();
    let original = board.slot(1).and_then(|s| s.result.clone()).expect("Strecke erwartet");

    let failing = TrackParams {
        point_count: 2,
        ..board.params().clone()
    };
    board.set_params(failing);
    assert!(board.renew(1, &mut RandomStream::from_seed(99)).is_err());
    assert_eq!(board.slot(1).and_then(|s| s.last_seed), Some(99));

    let json = board_to_json(&board, false).expect("JSON erwartet");
    let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON erwartet");
    assert_eq!(value[0]["seed"], 31);

    // Seed aus dem Export reproduziert die exportierte Strecke
    let params = TrackParams {
        iterations: 100,
        sample_count: 100,
        ..TrackParams::default()
    };
    let mut replay = TrackBoard::new(1, params);
    replay
        .renew(0, &mut RandomStream::from_seed(31))
        .expect("Erneuerung erwartet");
    assert_eq!(replay.slot(0).and_then(|s| s.result.as_ref()), Some(&original));
}
