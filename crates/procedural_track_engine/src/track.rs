//! Einstiegspunkt: Zufallspunkte → optimierte Tour → geglättete Kurve.

use crate::curve::{CurveFitter, StartPlacement};
use crate::error::{EngineResult, TrackError};
use crate::geometry::{closed_length, OrientationConvention, Point2D};
use crate::random::{RandomSource, RandomStream, RandomStreamFactory};
use crate::spline::SplineKind;
use crate::tour::{AnnealingSchedule, Tour, TourOptimizer};
use crate::{DEFAULT_ITERATIONS, DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT, MIN_TRACK_POINTS};
use serde::{Deserialize, Serialize};

/// Parameter einer Strecken-Generierung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackParams {
    /// Canvas-Breite (Kontrollpunkte liegen in `[0, width)`)
    pub width: f64,
    /// Canvas-Höhe (Kontrollpunkte liegen in `[0, height)`)
    pub height: f64,
    /// Anzahl der zufälligen Kontrollpunkte
    pub point_count: usize,
    /// Annealing-Schritte
    pub iterations: usize,
    /// Abtastpunkte der fertigen Kurve
    pub sample_count: usize,
    pub spline: SplineKind,
    pub start_placement: StartPlacement,
    pub orientation: OrientationConvention,
    pub schedule: AnnealingSchedule,
}

impl TrackParams {
    pub fn new(width: f64, height: f64, point_count: usize) -> Self {
        Self {
            width,
            height,
            point_count,
            ..Self::default()
        }
    }

    /// Prüft alle Vorbedingungen, bevor Zufallszahlen verbraucht werden.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(TrackError::invalid(format!(
                "Canvas muss positiv und endlich sein, erhalten: {} x {}",
                self.width, self.height
            )));
        }
        if self.point_count < MIN_TRACK_POINTS {
            return Err(TrackError::invalid(format!(
                "point_count muss >= {} sein, erhalten: {}",
                MIN_TRACK_POINTS, self.point_count
            )));
        }
        if self.iterations == 0 {
            return Err(TrackError::invalid("Iterationsanzahl muss > 0 sein"));
        }
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(TrackError::invalid(format!(
                "sample_count muss >= {} sein, erhalten: {}",
                MIN_SAMPLE_COUNT, self.sample_count
            )));
        }
        Ok(())
    }

    fn optimizer(&self) -> TourOptimizer {
        TourOptimizer::new(self.iterations).with_schedule(self.schedule)
    }

    fn fitter(&self) -> CurveFitter {
        CurveFitter::new(self.sample_count)
            .with_spline(self.spline)
            .with_start_placement(self.start_placement)
            .with_orientation(self.orientation)
    }
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 160.0,
            point_count: 20,
            iterations: DEFAULT_ITERATIONS,
            sample_count: DEFAULT_SAMPLE_COUNT,
            spline: SplineKind::default(),
            start_placement: StartPlacement::default(),
            orientation: OrientationConvention::default(),
            schedule: AnnealingSchedule::default(),
        }
    }
}

/// Unveränderlicher Schnappschuss einer generierten Strecke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackResult {
    /// Geschlossene Mittellinie, gleichmäßig nach Bogenlänge abgetastet
    pub curve: Vec<Point2D>,
    /// Kurvenlänge inkl. Schlusssegment
    pub length: f64,
    pub start_position: Point2D,
    /// Grad, [-180, 180]
    pub start_orientation: f64,
    /// Index von `start_position` in `curve`
    pub start_index: usize,
    /// Optimierte Kontrollpunkt-Tour
    pub tour: Tour,
    pub tour_length: f64,
}

impl TrackResult {
    pub fn sample_count(&self) -> usize {
        self.curve.len()
    }

    /// Länge neu aus den Abtastpunkten berechnet.
    pub fn measured_length(&self) -> f64 {
        closed_length(&self.curve)
    }
}

/// Gleichverteilte Kontrollpunkte im Canvas (pro Punkt erst x, dann y).
pub fn random_points<R: RandomSource + ?Sized>(
    width: f64,
    height: f64,
    count: usize,
    rng: &mut R,
) -> Vec<Point2D> {
    (0..count)
        .map(|_| {
            let x = rng.next_double() * width;
            let y = rng.next_double() * height;
            Point2D::new(x, y)
        })
        .collect()
}

/// Generiert eine Strecke mit explizitem Zufallsstrom.
///
/// Gleicher Strom (gleicher Seed) und gleiche Parameter ergeben exakt
/// dieselbe Strecke.
pub fn generate_track_with<R: RandomSource + ?Sized>(
    params: &TrackParams,
    rng: &mut R,
) -> EngineResult<TrackResult> {
    params.validate()?;

    let points = random_points(params.width, params.height, params.point_count, rng);
    let optimized = params.optimizer().optimize(&points, rng)?;
    let fit = params.fitter().fit(&optimized.tour)?;

    Ok(TrackResult {
        curve: fit.curve,
        length: fit.length,
        start_position: fit.start_position,
        start_orientation: fit.start_orientation,
        start_index: fit.start_index,
        tour: optimized.tour,
        tour_length: optimized.length,
    })
}

/// Generiert eine Strecke mit Standard-Abtastung (2000 Punkte).
///
/// Ohne `rng_seed` wird ein frischer, zeitbasierter Strom verwendet.
pub fn generate_track(
    width: f64,
    height: f64,
    point_count: usize,
    iterations: usize,
    rng_seed: Option<u64>,
) -> EngineResult<TrackResult> {
    let params = TrackParams {
        iterations,
        ..TrackParams::new(width, height, point_count)
    };
    let mut rng = match rng_seed {
        Some(seed) => RandomStream::from_seed(seed),
        None => RandomStreamFactory::new().next_stream(),
    };
    generate_track_with(&params, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_canvas() {
        for (w, h) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0), (10.0, f64::INFINITY)] {
            let params = TrackParams::new(w, h, 20);
            assert!(
                matches!(params.validate(), Err(TrackError::InvalidInput { .. })),
                "Canvas {} x {} hätte abgelehnt werden müssen",
                w,
                h
            );
        }
    }

    #[test]
    fn test_validate_rejects_counts() {
        let mut params = TrackParams::new(200.0, 160.0, 3);
        assert!(params.validate().is_err());
        params.point_count = 4;
        assert!(params.validate().is_ok());
        params.iterations = 0;
        assert!(params.validate().is_err());
        params.iterations = 1;
        params.sample_count = 3;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_random_points_inside_canvas() {
        let mut rng = RandomStream::from_seed(9);
        let points = random_points(200.0, 160.0, 500, &mut rng);
        assert_eq!(points.len(), 500);
        assert!(points
            .iter()
            .all(|p| (0.0..200.0).contains(&p.x) && (0.0..160.0).contains(&p.y)));
    }

    #[test]
    fn test_invalid_params_consume_no_randomness() {
        let mut rng = RandomStream::from_seed(5);
        let params = TrackParams::new(200.0, 160.0, 2);
        assert!(generate_track_with(&params, &mut rng).is_err());

        let mut fresh = RandomStream::from_seed(5);
        assert_eq!(rng.next_double().to_bits(), fresh.next_double().to_bits());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: TrackParams =
            serde_json::from_str(r#"{ "point_count": 12, "spline": "natural" }"#)
                .expect("JSON erwartet");
        assert_eq!(params.point_count, 12);
        assert_eq!(params.spline, SplineKind::Natural);
        assert_eq!(params.width, 200.0);
        assert_eq!(params.iterations, DEFAULT_ITERATIONS);
    }
}
