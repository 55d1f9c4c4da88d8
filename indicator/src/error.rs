// =============================================================================
// error.rs - Erreurs de configuration / Configuration errors
// =============================================================================

use thiserror::Error;

/// Configuration rejected when building an indicator
/// Configuration refusée lors de la construction d'un indicateur
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    /// Aucune barre demandée / No bar requested
    #[error("bar count must be at least 1")]
    NoBars,

    /// Durée nulle / Zero duration
    #[error("animation duration must be greater than zero")]
    ZeroDuration,

    /// Taille négative, nulle ou non finie / Negative, zero or non-finite size
    #[error("indicator size must be a positive number, got {0}")]
    InvalidSize(f64),
}
