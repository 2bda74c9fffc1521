//! Reine Geometrie-Funktionen auf Punktfolgen.
//!
//! Geschlossene Folgen werden ohne doppelten Schlusspunkt gespeichert; die
//! Kante vom letzten zum ersten Punkt ist implizit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D-Punkt mit f64-Koordinaten.
pub type Point2D = DVec2;

/// Länge einer offenen Polyline.
pub fn polyline_length(points: &[Point2D]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Länge einer geschlossenen Polyline inkl. Schlusskante.
pub fn closed_length(points: &[Point2D]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => polyline_length(points) + last.distance(*first),
        _ => 0.0,
    }
}

/// Kumulierte Sehnenlängen, beginnend bei `0.0`.
pub fn cumulative_distances(points: &[Point2D]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += point.distance(points[i - 1]);
        }
        distances.push(total);
    }
    distances
}

/// Index der längsten Kante einer geschlossenen Folge.
///
/// Kante `i` verbindet Punkt `i` mit Punkt `i + 1` (bzw. den letzten mit dem
/// ersten). Bei Gleichstand gewinnt die erste Kante. `None` bei weniger als
/// zwei Punkten.
pub fn longest_edge_index(points: &[Point2D]) -> Option<usize> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len();
    let mut best_index = 0;
    let mut best_length = 0.0;
    for i in 0..n {
        let length = points[i].distance(points[(i + 1) % n]);
        if length > best_length {
            best_index = i;
            best_length = length;
        }
    }
    Some(best_index)
}

/// `true` wenn beide Koordinaten endlich sind.
pub fn is_finite_point(point: Point2D) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Winkelkonvention für die Start-Orientierung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationConvention {
    /// `-atan2(dx, dy)`: 0° = +Y (Bildschirm unten), +90° = −X
    #[default]
    Screen,
    /// `atan2(dy, dx)`: 0° = +X, gegen den Uhrzeigersinn positiv
    Mathematical,
}

impl OrientationConvention {
    /// Winkel des Vektors `v` in Grad, Wertebereich [-180, 180].
    pub fn angle_degrees(self, v: DVec2) -> f64 {
        match self {
            Self::Screen => -v.x.atan2(v.y).to_degrees(),
            Self::Mathematical => v.y.atan2(v.x).to_degrees(),
        }
    }
}

/// Orientierung des Vektors von `next` zurück nach `start`.
pub fn orientation_degrees(
    start: Point2D,
    next: Point2D,
    convention: OrientationConvention,
) -> f64 {
    convention.angle_degrees(start - next)
}
