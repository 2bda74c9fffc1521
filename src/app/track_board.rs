//! Board mit mehreren Strecken, die parallel erneuert werden.
//!
//! Jede Strecke bekommt pro Erneuerung einen eigenen Zufallsstrom aus der
//! gemeinsamen Fabrik. Die Generierung selbst läuft in `std::thread::scope`,
//! das Board wird erst nach dem Join aktualisiert.

use procedural_track_engine::{
    generate_track_with, RandomStream, RandomStreamFactory, TrackError, TrackParams, TrackResult,
};

use crate::shared::GeneratorOptions;

/// Eine Strecke im Board samt Herkunft.
#[derive(Debug, Clone, Default)]
pub struct TrackSlot {
    /// Position im Board (0-basiert)
    pub index: usize,
    /// Zuletzt erfolgreich generierte Strecke
    pub result: Option<TrackResult>,
    /// Seed, aus dem `result` erzeugt wurde
    pub result_seed: Option<u64>,
    /// Seed der letzten Erneuerung (auch bei Fehler)
    pub last_seed: Option<u64>,
    /// Fehler der letzten Erneuerung, falls sie fehlschlug
    pub last_error: Option<TrackError>,
    /// Anzahl erfolgreicher Erneuerungen
    pub generation: u64,
}

impl TrackSlot {
    fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Übernimmt das Ergebnis einer Erneuerung.
    ///
    /// Bei Fehler bleibt die vorherige Strecke erhalten.
    fn apply(&mut self, seed: u64, outcome: Result<TrackResult, TrackError>) -> bool {
        self.last_seed = Some(seed);
        match outcome {
            Ok(track) => {
                self.result = Some(track);
                self.result_seed = Some(seed);
                self.last_error = None;
                self.generation += 1;
                true
            }
            Err(e) => {
                log::warn!(
                    "Strecke {} (Seed {}) nicht erneuert: {}",
                    self.index,
                    seed,
                    e
                );
                self.last_error = Some(e);
                false
            }
        }
    }
}

/// Ergebnis eines `renew_all`-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenewSummary {
    pub renewed: usize,
    pub failed: usize,
}

impl RenewSummary {
    pub fn all_failed(&self) -> bool {
        self.renewed == 0 && self.failed > 0
    }
}

/// Feste Anzahl Strecken mit gemeinsamen Parametern.
#[derive(Debug, Clone)]
pub struct TrackBoard {
    slots: Vec<TrackSlot>,
    params: TrackParams,
}

impl TrackBoard {
    /// Erstellt ein leeres Board mit `count` Plätzen.
    pub fn new(count: usize, params: TrackParams) -> Self {
        Self {
            slots: (0..count).map(TrackSlot::new).collect(),
            params,
        }
    }

    /// Erstellt ein Board aus den Laufzeit-Optionen.
    pub fn from_options(options: &GeneratorOptions) -> Self {
        Self::new(options.effective_track_count(), options.track.clone())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[TrackSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&TrackSlot> {
        self.slots.get(index)
    }

    pub fn params(&self) -> &TrackParams {
        &self.params
    }

    /// Ersetzt die Parameter; bestehende Strecken bleiben bis zur nächsten Erneuerung.
    pub fn set_params(&mut self, params: TrackParams) {
        self.params = params;
    }

    /// Alle erfolgreich generierten Strecken in Board-Reihenfolge.
    pub fn tracks(&self) -> impl Iterator<Item = &TrackResult> {
        self.slots.iter().filter_map(|slot| slot.result.as_ref())
    }

    /// Erneuert eine einzelne Strecke mit dem übergebenen Strom.
    pub fn renew(&mut self, index: usize, rng: &mut RandomStream) -> Result<(), TrackError> {
        let params = &self.params;
        let Some(slot) = self.slots.get_mut(index) else {
            return Err(TrackError::InvalidInput {
                context: format!("Strecken-Index {} außerhalb des Boards", index),
            });
        };

        let seed = rng.seed();
        let outcome = generate_track_with(params, rng);
        let error = outcome.as_ref().err().cloned();
        if slot.apply(seed, outcome) {
            log::info!("Strecke {} erneuert (Seed {})", index, seed);
        }
        match error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Erneuert alle Strecken parallel, ein Thread pro Strecke.
    ///
    /// Ungültige Parameter werden vor dem Start erkannt; dann bleibt das
    /// Board unverändert und jeder Platz zählt als fehlgeschlagen.
    pub fn renew_all(&mut self, factory: &RandomStreamFactory) -> RenewSummary {
        if let Err(e) = self.params.validate() {
            log::error!("Parameter ungültig, Board bleibt unverändert: {}", e);
            return RenewSummary {
                renewed: 0,
                failed: self.slots.len(),
            };
        }

        let start = std::time::Instant::now();
        let params = &self.params;
        let streams: Vec<RandomStream> = self.slots.iter().map(|_| factory.next_stream()).collect();

        let outcomes: Vec<(u64, Option<Result<TrackResult, TrackError>>)> =
            std::thread::scope(|scope| {
                let handles: Vec<_> = streams
                    .into_iter()
                    .map(|mut rng| {
                        let seed = rng.seed();
                        let handle = scope.spawn(move || generate_track_with(params, &mut rng));
                        (seed, handle)
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|(seed, handle)| (seed, handle.join().ok()))
                    .collect()
            });

        let mut summary = RenewSummary::default();
        for (slot, (seed, outcome)) in self.slots.iter_mut().zip(outcomes) {
            let outcome = outcome.unwrap_or_else(|| {
                Err(TrackError::NumericalFailure {
                    context: "Generierungs-Thread abgebrochen".to_string(),
                })
            });
            if slot.apply(seed, outcome) {
                summary.renewed += 1;
            } else {
                summary.failed += 1;
            }
        }

        log::info!(
            "{} von {} Strecken erneuert in {:.1} ms",
            summary.renewed,
            self.slots.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        summary
    }
}
