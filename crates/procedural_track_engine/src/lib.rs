//! `procedural_track_engine`: prozedurale Rennstrecken aus Zufallspunkten.
//!
//! Der Kern ist host-unabhängig: keine UI-Thread-Bindung, kein globaler
//! Zustand, kein Logging. Ablauf einer Generierung:
//!
//! ```text
//! RandomStream → random_points → TourOptimizer → CurveFitter → TrackResult
//! ```
//!
//! - [`random`] - Reproduzierbare, voneinander unabhängige Zufallsströme
//! - [`geometry`] - Distanzen, geschlossene Längen, Orientierung
//! - [`tour`] - Simulated Annealing über 2-opt-Umkehrungen
//! - [`spline`] - Kubische Splines (Akima/robust und natürlich)
//! - [`curve`] - Geschlossene Kurve mit gleichmäßiger Bogenlängen-Abtastung
//! - [`track`] - `generate_track` als Einstiegspunkt
//!
//! # Beispiel
//! ```
//! use procedural_track_engine::generate_track;
//!
//! let track = generate_track(200.0, 160.0, 20, 2000, Some(42))?;
//! assert_eq!(track.curve.len(), 2000);
//! # Ok::<(), procedural_track_engine::TrackError>(())
//! ```

pub mod curve;
pub mod error;
pub mod geometry;
pub mod random;
pub mod spline;
pub mod tour;
pub mod track;

pub use curve::{CurveFit, CurveFitter, StartPlacement};
pub use error::{EngineResult, TrackError};
pub use geometry::{OrientationConvention, Point2D};
pub use random::{RandomSource, RandomStream, RandomStreamFactory};
pub use spline::SplineKind;
pub use tour::{AnnealingSchedule, OptimizedTour, Tour, TourOptimizer};
pub use track::{generate_track, generate_track_with, random_points, TrackParams, TrackResult};

/// Minimale Anzahl an Kontrollpunkten für Optimierer und Spline-Erweiterung.
pub const MIN_TRACK_POINTS: usize = 4;
/// Minimale Anzahl an Abtastpunkten der Kurve.
pub const MIN_SAMPLE_COUNT: usize = 4;
/// Standard-Iterationsbudget des Optimierers.
pub const DEFAULT_ITERATIONS: usize = 2000;
/// Standard-Abtastdichte der Kurve.
pub const DEFAULT_SAMPLE_COUNT: usize = 2000;
