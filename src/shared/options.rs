//! Zentrale Konfiguration für den Procedural Track Generator.
//!
//! `GeneratorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use procedural_track_engine::{RandomStreamFactory, TrackParams};
use serde::{Deserialize, Serialize};

// ── Board ───────────────────────────────────────────────────────────

/// Anzahl gleichzeitig erneuerter Strecken.
pub const DEFAULT_TRACK_COUNT: usize = 9;
/// Obergrenze, damit ein Tippfehler in der TOML nicht tausende Threads startet.
pub const MAX_TRACK_COUNT: usize = 256;

// ── Strecke ─────────────────────────────────────────────────────────

/// Canvas-Breite einer Strecke.
pub const TRACK_WIDTH: f64 = 200.0;
/// Canvas-Höhe einer Strecke.
pub const TRACK_HEIGHT: f64 = 160.0;
/// Zufällige Kontrollpunkte pro Strecke.
pub const TRACK_POINTS: usize = 20;

/// Name der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "procedural_track_generator.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Generator-Optionen.
/// Wird als `procedural_track_generator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Anzahl Strecken im Board
    #[serde(default = "default_track_count")]
    pub track_count: usize,
    /// Fester Seed-Basiswert (reproduzierbare Boards); ohne: Systemzeit
    #[serde(default)]
    pub seed_base: Option<u64>,
    /// Optionaler JSON-Export nach jeder Erneuerung
    #[serde(default)]
    pub export_path: Option<String>,
    /// JSON eingerückt schreiben
    #[serde(default)]
    pub pretty_json: bool,

    // ── Strecke ─────────────────────────────────────────────────
    /// Parameter jeder einzelnen Strecke
    #[serde(default = "default_track_params")]
    pub track: TrackParams,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            track_count: DEFAULT_TRACK_COUNT,
            seed_base: None,
            export_path: None,
            pretty_json: false,
            track: default_track_params(),
        }
    }
}

/// Serde-Default für `track_count`.
fn default_track_count() -> usize {
    DEFAULT_TRACK_COUNT
}

/// Serde-Default für `track` (gleiche Werte wie die Konstanten oben).
fn default_track_params() -> TrackParams {
    TrackParams::new(TRACK_WIDTH, TRACK_HEIGHT, TRACK_POINTS)
}

impl GeneratorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    if let Err(e) = Self::validate(&opts) {
                        log::warn!("{:#}", e);
                    }
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("procedural_track_generator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Prüft die Strecken-Parameter, ohne Zufallszahlen zu verbrauchen.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.track
            .validate()
            .context("Ungültige Strecken-Parameter in [track]")
    }

    /// Effektive Strecken-Anzahl, begrenzt auf [`MAX_TRACK_COUNT`].
    pub fn effective_track_count(&self) -> usize {
        if self.track_count > MAX_TRACK_COUNT {
            log::warn!(
                "track_count {} zu groß, begrenze auf {}",
                self.track_count,
                MAX_TRACK_COUNT
            );
        }
        self.track_count.min(MAX_TRACK_COUNT)
    }

    /// Stream-Fabrik passend zu `seed_base`.
    pub fn stream_factory(&self) -> RandomStreamFactory {
        match self.seed_base {
            Some(base) => RandomStreamFactory::with_base(base),
            None => RandomStreamFactory::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = GeneratorOptions::default();
        assert_eq!(opts.track_count, 9);
        assert_eq!(opts.track.width, TRACK_WIDTH);
        assert_eq!(opts.track.height, TRACK_HEIGHT);
        assert_eq!(opts.track.point_count, TRACK_POINTS);
        assert!(opts.seed_base.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts: GeneratorOptions = toml::from_str(
            r#"
            track_count = 3
            seed_base = 42

            [track]
            point_count = 12
            spline = "natural"
            "#,
        )
        .expect("TOML erwartet");
        assert_eq!(opts.track_count, 3);
        assert_eq!(opts.seed_base, Some(42));
        assert_eq!(opts.track.point_count, 12);
        assert_eq!(opts.track.width, TRACK_WIDTH);
        assert!(!opts.pretty_json);
    }

    #[test]
    fn test_validate_reports_track_section() {
        assert!(GeneratorOptions::default().validate().is_ok());

        let opts: GeneratorOptions = toml::from_str(
            r#"
            [track]
            width = 0.0
            "#,
        )
        .expect("TOML erwartet");
        let err = opts.validate().expect_err("Fehler erwartet");
        let message = format!("{:#}", err);
        assert!(message.contains("[track]"));
        assert!(message.contains("Canvas"));
    }

    #[test]
    fn test_track_count_is_capped() {
        let opts = GeneratorOptions {
            track_count: 10_000,
            ..GeneratorOptions::default()
        };
        assert_eq!(opts.effective_track_count(), MAX_TRACK_COUNT);
    }

    #[test]
    fn test_seed_base_makes_factory_reproducible() {
        let opts = GeneratorOptions {
            seed_base: Some(500),
            ..GeneratorOptions::default()
        };
        assert_eq!(opts.stream_factory().next_seed(), 500);
    }
}
