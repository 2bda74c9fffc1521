//! Procedural Track Generator.
//!
//! Erneuert ein Board prozeduraler Rennstrecken und exportiert es optional als JSON.

use procedural_track_generator::{export, GeneratorOptions, TrackBoard};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Procedural Track Generator v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = GeneratorOptions::config_path();
    let options = GeneratorOptions::load_from_file(&config_path);
    options.validate()?;
    let factory = options.stream_factory();
    log::info!("Seed-Basis: {}", factory.base());

    let mut board = TrackBoard::from_options(&options);
    let summary = board.renew_all(&factory);
    if summary.all_failed() {
        anyhow::bail!("Keine Strecke generiert ({} fehlgeschlagen)", summary.failed);
    }

    for slot in board.slots() {
        if let Some(track) = &slot.result {
            log::info!(
                "Strecke {}: {} Punkte, Länge {:.1}, Start ({:.1}, {:.1}) @ {:.1}°",
                slot.index,
                track.sample_count(),
                track.length,
                track.start_position.x,
                track.start_position.y,
                track.start_orientation
            );
        }
    }

    if let Some(path) = &options.export_path {
        export::write_board_json(&board, std::path::Path::new(path), options.pretty_json)?;
    }

    Ok(())
}
