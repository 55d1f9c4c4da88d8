// =============================================================================
// timing.rs - Rampes linéaires pilotées par l'horloge d'animation
// timing.rs - Linear ramps driven by the animation clock
// =============================================================================
//
// Une rampe ne possède pas de minuterie : elle avance uniquement quand
// l'appelant lui transmet le temps écoulé depuis la frame précédente.
// A ramp owns no timer: it only advances when the caller hands it the time
// elapsed since the previous frame.

use std::time::Duration;

/// Result of advancing a ramp by one frame
/// Résultat de l'avancement d'une rampe d'une frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RampStep {
    /// Valeur courante / Current value
    pub value: f64,

    /// La rampe a atteint sa cible (jamais vrai pour une boucle)
    /// The ramp reached its target (never true for a loop)
    pub finished: bool,
}

/// Linear interpolation from `from` to `to` over `duration`
/// Interpolation linéaire de `from` vers `to` sur `duration`
///
/// A looping ramp restarts from 0 each time it reaches its target, keeping
/// the full duration for every cycle.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Ramp {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    looping: bool,
}

impl Ramp {
    /// Crée une rampe simple / Creates a one-shot ramp
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            looping: false,
        }
    }

    /// Convertit la rampe en boucle infinie / Turns the ramp into an endless loop
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Valeur à l'instant courant / Value at the current instant
    pub fn value(&self) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        self.from + (self.to - self.from) * t
    }

    /// Avance la rampe de `dt` / Advances the ramp by `dt`
    pub fn advance(&mut self, dt: Duration) -> RampStep {
        self.elapsed += dt;

        if self.elapsed < self.duration {
            return RampStep {
                value: self.value(),
                finished: false,
            };
        }

        // Une boucle de durée nulle ne peut pas progresser : elle reste à sa cible
        // A zero-length loop cannot make progress: it stays at its target
        if self.looping && !self.duration.is_zero() {
            while self.elapsed >= self.duration {
                self.elapsed -= self.duration;
                self.from = 0.0;
            }
            return RampStep {
                value: self.value(),
                finished: false,
            };
        }

        self.elapsed = self.duration;
        RampStep {
            value: self.to,
            finished: !self.looping,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
