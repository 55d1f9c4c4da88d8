//! Default values for the indicator and the bar indicator.
//!
//! Valeurs par défaut de l'indicateur et de l'indicateur à barres.

use std::time::Duration;

/// Frame budget used to pick the number of curve samples (frames per second)
/// Budget d'images utilisé pour choisir le nombre d'échantillons (images par seconde)
pub const FRAME_RATE: f64 = 60.0;

/// Smallest number of samples a curve can have.
/// With a single sample the bell curve has no midpoint to dip to.
pub const MIN_SAMPLES: usize = 2;

/// Default duration of one progress loop for a generic indicator
/// Durée par défaut d'une boucle de progression pour un indicateur générique
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1200);

/// Duration of the show/hide fade
/// Durée du fondu d'apparition/disparition
pub const DEFAULT_HIDE_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Default number of items for a generic indicator
pub const DEFAULT_COUNT: usize = 1;

/// Default number of bars
/// Nombre de barres par défaut
pub const DEFAULT_BAR_COUNT: usize = 3;

/// Default bar color
/// Couleur des barres par défaut
pub const DEFAULT_BAR_COLOR: &str = "rgb(0, 0, 0)";

/// Default indicator size in pixels (bars are derived from it)
/// Taille par défaut de l'indicateur en pixels (les barres en sont dérivées)
pub const DEFAULT_BAR_SIZE: f64 = 40.0;

/// Default loop duration for the bar indicator
/// Durée de boucle par défaut pour l'indicateur à barres
pub const DEFAULT_BAR_ANIMATION_DURATION: Duration = Duration::from_millis(1000);
