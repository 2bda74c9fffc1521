//! Glättung einer geschlossenen Tour zu einer gleichmäßig abgetasteten Kurve.
//!
//! Die Tour wird periodisch erweitert (`[p(n-1), p0, …, p(n-1), p0, p1]`),
//! damit die Splines über die Naht hinweg glatt bleiben. Parameter ist die
//! kumulierte Sehnenlänge; x und y bekommen je einen eigenen Spline.

use crate::error::{EngineResult, TrackError};
use crate::geometry::{
    closed_length, cumulative_distances, is_finite_point, longest_edge_index,
    orientation_degrees, OrientationConvention, Point2D,
};
use crate::spline::{CubicSpline, SplineKind};
use crate::tour::Tour;
use crate::{DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT, MIN_TRACK_POINTS};
use serde::{Deserialize, Serialize};

/// Wie die längste Tour-Kante auf einen Kurvenindex abgebildet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPlacement {
    /// `kante * sample_count / (n + 1)`, unabhängig von den Kantenlängen
    #[default]
    IndexScaled,
    /// Abtastpunkt, der dem Kantenanfang in Bogenlänge am nächsten liegt
    ArcLength,
}

/// Ergebnis der Glättung.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFit {
    pub curve: Vec<Point2D>,
    /// Geschlossene Länge der abgetasteten Kurve
    pub length: f64,
    pub start_index: usize,
    pub start_position: Point2D,
    /// Grad, gemäß [`OrientationConvention`]
    pub start_orientation: f64,
}

/// Passt Splines an eine Tour an und tastet sie gleichmäßig ab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFitter {
    sample_count: usize,
    spline: SplineKind,
    start_placement: StartPlacement,
    orientation: OrientationConvention,
}

impl CurveFitter {
    pub fn new(sample_count: usize) -> Self {
        Self {
            sample_count,
            spline: SplineKind::default(),
            start_placement: StartPlacement::default(),
            orientation: OrientationConvention::default(),
        }
    }

    pub fn with_spline(mut self, spline: SplineKind) -> Self {
        self.spline = spline;
        self
    }

    pub fn with_start_placement(mut self, start_placement: StartPlacement) -> Self {
        self.start_placement = start_placement;
        self
    }

    pub fn with_orientation(mut self, orientation: OrientationConvention) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Glättet `tour` und leitet Länge und Startpose ab.
    ///
    /// Abgetastet wird genau ein Umlauf `[d1, d_end)` mit Schrittweite
    /// `umlauf / sample_count`; erster und letzter Punkt sind verschieden.
    pub fn fit(&self, tour: &Tour) -> EngineResult<CurveFit> {
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(TrackError::invalid(format!(
                "sample_count muss >= {} sein, erhalten: {}",
                MIN_SAMPLE_COUNT, self.sample_count
            )));
        }
        let points = tour.points();
        let n = points.len();
        if n < MIN_TRACK_POINTS {
            return Err(TrackError::invalid(format!(
                "Tour braucht mindestens {} Punkte, erhalten: {}",
                MIN_TRACK_POINTS, n
            )));
        }

        let extended = periodic_extension(points);
        let distances = cumulative_distances(&extended);
        let xs: Vec<f64> = extended.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = extended.iter().map(|p| p.y).collect();
        let spline_x = CubicSpline::fit(self.spline, &distances, &xs)?;
        let spline_y = CubicSpline::fit(self.spline, &distances, &ys)?;

        let span_start = distances[1];
        let span = distances[distances.len() - 2] - span_start;
        if !(span > 0.0) || !span.is_finite() {
            return Err(TrackError::numerical(format!(
                "Umlauflänge der Tour ist {}",
                span
            )));
        }

        let step = span / self.sample_count as f64;
        let mut curve = Vec::with_capacity(self.sample_count);
        for i in 0..self.sample_count {
            let d = span_start + step * i as f64;
            let point = Point2D::new(spline_x.interpolate(d), spline_y.interpolate(d));
            if !is_finite_point(point) {
                return Err(TrackError::numerical(format!(
                    "Spline liefert keinen endlichen Wert bei Distanz {:.3}",
                    d
                )));
            }
            curve.push(point);
        }

        let edge = longest_edge_index(points).unwrap_or(0);
        let start_index = match self.start_placement {
            StartPlacement::IndexScaled => edge * self.sample_count / (n + 1),
            StartPlacement::ArcLength => {
                let target = distances[edge + 1] - span_start;
                (target / step).round() as usize % self.sample_count
            }
        };
        let start_position = curve[start_index];
        let next = curve[(start_index + 1) % self.sample_count];
        let start_orientation = orientation_degrees(start_position, next, self.orientation);
        let length = closed_length(&curve);

        Ok(CurveFit {
            curve,
            length,
            start_index,
            start_position,
            start_orientation,
        })
    }
}

impl Default for CurveFitter {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_COUNT)
    }
}

/// `[p(n-1), p0, p1, …, p(n-1), p0, p1]`
fn periodic_extension(points: &[Point2D]) -> Vec<Point2D> {
    let n = points.len();
    let mut extended = Vec::with_capacity(n + 3);
    extended.push(points[n - 1]);
    extended.extend_from_slice(points);
    extended.push(points[0]);
    extended.push(points[1]);
    extended
}
