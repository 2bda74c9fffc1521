//! Fehler-Taxonomie des Kerns.

use thiserror::Error;

/// Fehlschlag einer Strecken-Generierung. Es gibt nie ein Teilergebnis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// Eingabeparameter verletzen eine Vorbedingung (Punktanzahl, Canvas, Iterationen)
    #[error("ungültige Eingabe: {context}")]
    InvalidInput { context: String },
    /// Spline liefert keinen endlichen Wert (z.B. zusammenfallende Punkte)
    #[error("numerischer Fehler: {context}")]
    NumericalFailure { context: String },
}

impl TrackError {
    pub(crate) fn invalid(context: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
        }
    }

    pub(crate) fn numerical(context: impl Into<String>) -> Self {
        Self::NumericalFailure {
            context: context.into(),
        }
    }

    /// `true` wenn ein erneuter Versuch mit anderem Seed sinnvoll sein kann.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NumericalFailure { .. })
    }
}

/// Ergebnis-Alias für alle Kern-Operationen.
pub type EngineResult<T> = Result<T, TrackError>;
