//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die Binary und App-Layer teilen.

pub mod options;

pub use options::GeneratorOptions;
pub use options::{DEFAULT_TRACK_COUNT, MAX_TRACK_COUNT};
