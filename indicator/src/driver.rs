// =============================================================================
// driver.rs - Pilote de progression / Progress driver
// =============================================================================
//
// Le pilote possède le scalaire de progression partagé par toutes les barres
// d'un indicateur, ainsi qu'un scalaire de fondu indépendant.
// The driver owns the progress scalar shared by every bar of one indicator,
// plus an independent fade scalar.
//
// Cycle de vie / Lifecycle:
//   Idle --start()--> Running --stop()--> Stopping --(next frame)--> Idle
//   Idle --resume()--> Running --(partial ramp done)--> Idle --start()--> Running

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::timing::Ramp;

// =============================================================================
// ÉTAT / STATE
// =============================================================================

/// État d'exécution du scalaire principal
/// Run state of the primary scalar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Aucune rampe active / No active ramp
    #[default]
    Idle,

    /// Une rampe (boucle ou reprise) est active / A loop or resume ramp is active
    Running,

    /// Capture en attente ; bloque start() et resume()
    /// Capture pending; locks out start() and resume()
    Stopping,
}

// =============================================================================
// FONDU / FADE
// =============================================================================

/// Scalaire de visibilité animé vers l'intention courante
/// Visibility scalar animated toward the current intent
#[derive(Clone, Debug)]
pub struct Fade {
    value: f64,
    duration: Duration,
    ramp: Option<Ramp>,
}

impl Fade {
    pub fn new(visible: bool, duration: Duration) -> Self {
        Self {
            value: if visible { 1.0 } else { 0.0 },
            duration,
            ramp: None,
        }
    }

    /// Redirige le fondu vers 1 (visible) ou 0 (caché)
    /// Retargets the fade toward 1 (shown) or 0 (hidden)
    pub fn set_visible(&mut self, visible: bool) {
        let target = if visible { 1.0 } else { 0.0 };
        self.ramp = Some(Ramp::new(self.value, target, self.duration));
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(ramp) = self.ramp.as_mut() {
            let step = ramp.advance(dt);
            self.value = step.value;
            if step.finished {
                self.ramp = None;
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    fn cancel(&mut self) {
        self.ramp = None;
    }
}

// =============================================================================
// PILOTE / DRIVER
// =============================================================================

/// Pilote du scalaire de progression [0, 1]
/// Driver of the [0, 1] progress scalar
///
/// Le pilote n'a pas d'horloge propre : [`ProgressDriver::tick`] doit être
/// appelé une fois par frame avec le temps écoulé.
/// The driver has no clock of its own: [`ProgressDriver::tick`] must be
/// called once per frame with the elapsed time.
#[derive(Clone, Debug)]
pub struct ProgressDriver {
    progress: f64,
    saved: f64,
    state: RunState,
    animating: bool,
    duration: Duration,
    ramp: Option<Ramp>,
    fade: Fade,
}

impl ProgressDriver {
    /// Crée un pilote au repos / Creates an idle driver
    ///
    /// # Arguments
    /// * `duration` - Durée d'une boucle / Length of one loop
    /// * `hide_duration` - Durée du fondu / Fade length
    /// * `animating` - Intention initiale / Initial intent
    pub fn new(duration: Duration, hide_duration: Duration, animating: bool) -> Self {
        Self {
            progress: 0.0,
            saved: 0.0,
            state: RunState::Idle,
            animating,
            duration,
            ramp: None,
            fade: Fade::new(animating, hide_duration),
        }
    }

    /// Démarre la boucle si le pilote est au repos
    /// Starts the loop if the driver is idle
    pub fn start(&mut self) {
        if self.state != RunState::Idle {
            return;
        }
        self.ramp = Some(Ramp::new(self.progress, 1.0, self.duration).looping());
        self.state = RunState::Running;
        debug!(from = self.progress, "progress loop started");
    }

    /// Demande l'arrêt ; la valeur est capturée à la frame suivante
    /// Requests a stop; the value is captured on the next frame
    pub fn stop(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        self.state = RunState::Stopping;
        debug!("progress stop requested");
    }

    /// Reprend depuis la valeur capturée sur le temps restant
    /// Resumes from the captured value over the remaining time
    pub fn resume(&mut self) {
        if self.state != RunState::Idle || !self.animating {
            return;
        }
        let remaining = self.duration.mul_f64((1.0 - self.saved).clamp(0.0, 1.0));
        self.progress = self.saved;
        self.ramp = Some(Ramp::new(self.saved, 1.0, remaining));
        debug!(from = self.saved, ?remaining, "progress resumed");
        self.saved = 0.0;
        self.state = RunState::Running;
    }

    /// Lit la valeur courante de façon synchrone
    /// Reads the current value synchronously
    pub fn sample(&self) -> f64 {
        self.progress
    }

    /// Met à jour l'intention d'animation
    /// Updates the animating intent
    pub fn set_animating(&mut self, animating: bool) {
        if self.animating == animating {
            return;
        }
        self.animating = animating;
        self.fade.set_visible(animating);

        if animating {
            if self.state == RunState::Idle && self.saved > 0.0 {
                self.resume();
            } else {
                self.start();
            }
        } else {
            self.stop();
        }
    }

    /// Avance les deux scalaires d'une frame et retourne la progression
    /// Advances both scalars by one frame and returns the progress
    pub fn tick(&mut self, dt: Duration) -> f64 {
        self.fade.tick(dt);

        match self.state {
            RunState::Idle => {}
            RunState::Stopping => {
                let value = self.sample();
                self.ramp = None;
                self.settle(value);
            }
            RunState::Running => {
                let finished = match self.ramp.as_mut() {
                    Some(ramp) => {
                        let step = ramp.advance(dt);
                        self.progress = step.value;
                        step.finished
                    }
                    None => false,
                };
                if finished {
                    self.ramp = None;
                    self.progress = 0.0;
                    self.state = RunState::Idle;
                    self.start();
                }
            }
        }

        self.progress
    }

    /// Annule toute rampe et toute capture en attente
    /// Cancels any ramp and any pending capture
    pub fn cancel(&mut self) {
        self.ramp = None;
        self.fade.cancel();
        self.state = RunState::Idle;
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Valeur capturée lors du dernier arrêt / Value captured by the last stop
    pub fn saved(&self) -> f64 {
        self.saved
    }

    pub fn fade(&self) -> f64 {
        self.fade.value()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change la durée des prochaines rampes / Changes the length of future ramps
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    fn settle(&mut self, value: f64) {
        self.saved = value;
        self.state = RunState::Idle;
        debug!(captured = value, "progress captured");

        if self.animating {
            self.resume();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
