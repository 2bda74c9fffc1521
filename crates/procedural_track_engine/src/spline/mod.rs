//! Kubische 1D-Splines in Hermite-Form.
//!
//! Beide Varianten bestimmen nur die Steigungen an den Knoten; Auswertung und
//! Koeffizienten teilen sich [`CubicSpline`].
//!
//! - [`SplineKind::Robust`]: Akima-Spline, lokal gewichtete Steigungen,
//!   unempfindlich gegen Ausreißer und ungleichmäßige Knotenabstände
//! - [`SplineKind::Natural`]: natürlicher Spline (zweite Ableitung 0 an den Enden)

mod akima;
mod natural;

use crate::error::{EngineResult, TrackError};
use serde::{Deserialize, Serialize};

/// Minimale Knotenanzahl (Akima braucht zwei Nachbarn auf jeder Seite).
pub const MIN_SPLINE_KNOTS: usize = 5;

/// Spline-Variante für die Kurvenglättung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineKind {
    /// Akima-Spline (Standard)
    #[default]
    Robust,
    /// Natürlicher kubischer Spline
    Natural,
}

/// Stückweise kubisches Polynom über streng monoton steigenden Knoten.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    /// Je Segment: c0 + t*(c1 + t*(c2 + t*c3)), t = x - x[k]
    coefficients: Vec<[f64; 4]>,
}

impl CubicSpline {
    /// Passt einen Spline der Variante `kind` an die Stützstellen an.
    ///
    /// Fehler: zu wenige Knoten oder ungleiche Längen → `InvalidInput`;
    /// nicht streng steigende bzw. nicht endliche Werte → `NumericalFailure`.
    pub fn fit(kind: SplineKind, x: &[f64], y: &[f64]) -> EngineResult<Self> {
        validate_knots(x, y)?;
        let slopes = match kind {
            SplineKind::Robust => akima::slopes(x, y),
            SplineKind::Natural => natural::slopes(x, y),
        };
        Self::from_hermite(x, y, &slopes)
    }

    fn from_hermite(x: &[f64], y: &[f64], slopes: &[f64]) -> EngineResult<Self> {
        let mut coefficients = Vec::with_capacity(x.len() - 1);
        for k in 0..x.len() - 1 {
            let w = x[k + 1] - x[k];
            let c0 = y[k];
            let c1 = slopes[k];
            let c2 = (3.0 * (y[k + 1] - y[k]) / w - 2.0 * slopes[k] - slopes[k + 1]) / w;
            let c3 = (2.0 * (y[k] - y[k + 1]) / w + slopes[k] + slopes[k + 1]) / (w * w);
            let segment = [c0, c1, c2, c3];
            if segment.iter().any(|c| !c.is_finite()) {
                return Err(TrackError::numerical(format!(
                    "Spline-Segment {} hat nicht-endliche Koeffizienten",
                    k
                )));
            }
            coefficients.push(segment);
        }

        Ok(Self {
            x: x.to_vec(),
            coefficients,
        })
    }

    /// Wertet den Spline an `t` aus. Außerhalb der Knoten wird das
    /// Randsegment fortgesetzt.
    pub fn interpolate(&self, t: f64) -> f64 {
        let k = self.segment_index(t);
        let [c0, c1, c2, c3] = self.coefficients[k];
        let dt = t - self.x[k];
        c0 + dt * (c1 + dt * (c2 + dt * c3))
    }

    /// Erste Ableitung an `t`.
    #[cfg(test)]
    pub(crate) fn differentiate(&self, t: f64) -> f64 {
        let k = self.segment_index(t);
        let [_, c1, c2, c3] = self.coefficients[k];
        let dt = t - self.x[k];
        c1 + dt * (2.0 * c2 + dt * 3.0 * c3)
    }

    /// Definitionsbereich `(x_min, x_max)`.
    #[cfg(test)]
    pub(crate) fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    fn segment_index(&self, t: f64) -> usize {
        self.x
            .partition_point(|&knot| knot <= t)
            .saturating_sub(1)
            .min(self.coefficients.len() - 1)
    }
}

fn validate_knots(x: &[f64], y: &[f64]) -> EngineResult<()> {
    if x.len() != y.len() {
        return Err(TrackError::invalid(format!(
            "Spline: {} x-Werte, aber {} y-Werte",
            x.len(),
            y.len()
        )));
    }
    if x.len() < MIN_SPLINE_KNOTS {
        return Err(TrackError::invalid(format!(
            "Spline braucht mindestens {} Knoten, erhalten: {}",
            MIN_SPLINE_KNOTS,
            x.len()
        )));
    }
    if let Some(i) = y.iter().position(|v| !v.is_finite()) {
        return Err(TrackError::numerical(format!(
            "Spline: y[{}] ist nicht endlich",
            i
        )));
    }
    if let Some(i) = x.windows(2).position(|w| !(w[1] > w[0]) || !w[1].is_finite()) {
        return Err(TrackError::numerical(format!(
            "Spline: Knoten nicht streng steigend bei Index {} ({} → {})",
            i,
            x[i],
            x[i + 1]
        )));
    }
    Ok(())
}
