//! Geschlossene Tour und Simulated-Annealing-Optimierer (2-opt).

use crate::error::{EngineResult, TrackError};
use crate::geometry::{closed_length, is_finite_point, Point2D};
use crate::random::RandomSource;
use crate::{DEFAULT_ITERATIONS, MIN_TRACK_POINTS};
use serde::{Deserialize, Serialize};

/// Geordneter, geschlossener Zyklus durch Kontrollpunkte.
///
/// Der letzte Punkt ist implizit mit dem ersten verbunden, ein doppelter
/// Schlusspunkt wird nicht gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    points: Vec<Point2D>,
}

impl Tour {
    /// Erstellt eine Tour. Verlangt mindestens [`MIN_TRACK_POINTS`] endliche Punkte.
    pub fn new(points: Vec<Point2D>) -> EngineResult<Self> {
        if points.len() < MIN_TRACK_POINTS {
            return Err(TrackError::invalid(format!(
                "Tour braucht mindestens {} Punkte, erhalten: {}",
                MIN_TRACK_POINTS,
                points.len()
            )));
        }
        if let Some(index) = points.iter().position(|p| !is_finite_point(*p)) {
            return Err(TrackError::invalid(format!(
                "Punkt {} ist nicht endlich: {:?}",
                index, points[index]
            )));
        }
        Ok(Self { points })
    }

    /// Anzahl der (verschiedenen) Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn die Tour keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }

    /// Länge des Zyklus inkl. Schlusskante.
    pub fn closed_length(&self) -> f64 {
        closed_length(&self.points)
    }

    /// 2-opt-Zug: kehrt die Reihenfolge im Bereich `[id1, id2]` (inklusiv) um.
    ///
    /// Die Indizes werden sortiert und auf den gültigen Bereich begrenzt.
    /// Zweimal mit denselben Indizes angewendet ergibt die Ausgangstour.
    pub fn reverse_segment(&mut self, id1: usize, id2: usize) {
        let Some(last) = self.points.len().checked_sub(1) else {
            return;
        };
        let lo = id1.min(id2).min(last);
        let hi = id1.max(id2).min(last);
        self.points[lo..=hi].reverse();
    }
}

/// Temperaturverlauf des Annealings.
///
/// `T(step) = ((1 + k) / (step + 1 + k)) / 2`, Akzeptanz schlechterer Züge mit
/// `exp(-Δ / (T * scale)) / 2`. Kühlt monoton ab, kein Wiederaufheizen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingSchedule {
    /// Dämpfung des Abkühlens (größer = langsamer)
    pub k: f64,
    /// Skalierung der Längendifferenz
    pub scale: f64,
}

impl AnnealingSchedule {
    pub fn temperature(&self, step: usize) -> f64 {
        ((1.0 + self.k) / (step as f64 + 1.0 + self.k)) / 2.0
    }

    /// Wahrscheinlichkeit, einen um `delta` längeren Kandidaten zu übernehmen.
    pub fn acceptance_probability(&self, delta: f64, step: usize) -> f64 {
        (-delta / (self.temperature(step) * self.scale)).exp() / 2.0
    }
}

impl Default for AnnealingSchedule {
    fn default() -> Self {
        Self {
            k: 100.0,
            scale: 100.0,
        }
    }
}

/// Beste gefundene Tour samt Länge.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedTour {
    pub tour: Tour,
    pub length: f64,
}

/// Simulated Annealing über 2-opt-Segmentumkehrungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourOptimizer {
    iterations: usize,
    schedule: AnnealingSchedule,
}

impl TourOptimizer {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            schedule: AnnealingSchedule::default(),
        }
    }

    pub fn with_schedule(mut self, schedule: AnnealingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn schedule(&self) -> AnnealingSchedule {
        self.schedule
    }

    /// Sucht eine kurze geschlossene Tour durch `points`.
    ///
    /// Die Eingabereihenfolge ist die Starttour. Zurückgegeben wird die
    /// kürzeste je akzeptierte Tour, nicht der Endzustand. Wird kein Zug
    /// akzeptiert, bleibt es bei der Eingabereihenfolge.
    ///
    /// Zufallszüge pro Schritt: `id1`, dann `id2` bis `id2 != id1`, und nur
    /// bei einem längeren Kandidaten eine Zahl für die Akzeptanz.
    pub fn optimize<R: RandomSource + ?Sized>(
        &self,
        points: &[Point2D],
        rng: &mut R,
    ) -> EngineResult<OptimizedTour> {
        if self.iterations == 0 {
            return Err(TrackError::invalid("Iterationsanzahl muss > 0 sein"));
        }

        let mut current = Tour::new(points.to_vec())?;
        let n = current.len();
        let mut current_length = current.closed_length();
        let mut candidate = current.clone();
        let mut best = current.clone();
        let mut best_length = f64::INFINITY;

        for step in 0..self.iterations {
            let id1 = rng.next_int(n);
            let mut id2 = rng.next_int(n);
            while id2 == id1 {
                id2 = rng.next_int(n);
            }

            candidate.points.copy_from_slice(&current.points);
            candidate.reverse_segment(id1, id2);
            let candidate_length = candidate.closed_length();

            if candidate_length > current_length
                && rng.next_double()
                    > self
                        .schedule
                        .acceptance_probability(candidate_length - current_length, step)
            {
                continue;
            }

            std::mem::swap(&mut current, &mut candidate);
            current_length = candidate_length;
            if current_length < best_length {
                best_length = current_length;
                best.points.copy_from_slice(&current.points);
            }
        }

        if !best_length.is_finite() {
            best_length = best.closed_length();
        }

        Ok(OptimizedTour {
            tour: best,
            length: best_length,
        })
    }
}

impl Default for TourOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}
