//! Procedural Track Generator.
//!
//! Erzeugt geschlossene Rennstrecken aus zufälligen Kontrollpunkten.
//! Die Engine (`procedural_track_engine`) liefert Tour-Optimierung und
//! Spline-Glättung, diese Crate das Board mit mehreren Strecken, die
//! TOML-Konfiguration und den JSON-Export.

pub mod app;
pub mod shared;

pub use app::{export, RenewSummary, TrackBoard, TrackSlot};
pub use procedural_track_engine as engine;
pub use shared::GeneratorOptions;
