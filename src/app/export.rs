//! JSON-Export eines Boards.

use std::path::Path;

use anyhow::Context;
use procedural_track_engine::TrackResult;
use serde::Serialize;

use super::TrackBoard;

/// Eine exportierte Strecke mit Board-Position und Seed.
#[derive(Debug, Serialize)]
pub struct ExportedTrack<'a> {
    pub index: usize,
    /// Seed, mit dem sich `track` reproduzieren lässt
    pub seed: Option<u64>,
    pub generation: u64,
    pub track: &'a TrackResult,
}

/// Alle generierten Strecken eines Boards (leere Plätze werden übersprungen).
pub fn exported_tracks(board: &TrackBoard) -> Vec<ExportedTrack<'_>> {
    board
        .slots()
        .iter()
        .filter_map(|slot| {
            slot.result.as_ref().map(|track| ExportedTrack {
                index: slot.index,
                seed: slot.result_seed,
                generation: slot.generation,
                track,
            })
        })
        .collect()
}

/// Serialisiert das Board als JSON-Array.
pub fn board_to_json(board: &TrackBoard, pretty: bool) -> anyhow::Result<String> {
    let tracks = exported_tracks(board);
    let json = if pretty {
        serde_json::to_string_pretty(&tracks)
    } else {
        serde_json::to_string(&tracks)
    };
    json.context("Board konnte nicht serialisiert werden")
}

/// Schreibt das Board als JSON-Datei.
pub fn write_board_json(board: &TrackBoard, path: &Path, pretty: bool) -> anyhow::Result<()> {
    let json = board_to_json(board, pretty)?;
    std::fs::write(path, json)
        .with_context(|| format!("Export nach '{}' fehlgeschlagen", path.display()))?;
    log::info!(
        "{} Strecken exportiert nach: {}",
        board.tracks().count(),
        path.display()
    );
    Ok(())
}
