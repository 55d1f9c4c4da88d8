// =============================================================================
// indicator.rs - Hôte générique d'indicateur / Generic indicator host
// =============================================================================
//
// L'hôte possède un pilote de progression et délègue le rendu de chaque
// élément à une stratégie fournie à la construction.
// The host owns one progress driver and delegates the rendering of each item
// to a strategy provided at construction.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::driver::{ProgressDriver, RunState};
use crate::error::IndicatorError;

// =============================================================================
// STRATÉGIE DE RENDU / RENDER STRATEGY
// =============================================================================

/// Contexte transmis à la stratégie pour chaque élément
/// Context handed to the strategy for each item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarContext {
    /// Index de l'élément / Item index
    pub index: usize,

    /// Nombre total d'éléments / Total number of items
    pub count: usize,

    /// Progression partagée [0, 1] / Shared progress [0, 1]
    pub progress: f64,
}

/// Rendu d'un élément de l'indicateur / Renders one item of the indicator
pub trait RenderComponent {
    type Output;

    fn render(&self, ctx: BarContext) -> Self::Output;
}

impl<F, T> RenderComponent for F
where
    F: Fn(BarContext) -> T,
{
    type Output = T;

    fn render(&self, ctx: BarContext) -> T {
        self(ctx)
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Options de l'hôte / Host options
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorOptions {
    pub animation_duration: Duration,
    pub hide_animation_duration: Duration,
    pub animating: bool,
    pub hides_when_stopped: bool,
    pub count: usize,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            animation_duration: config::DEFAULT_ANIMATION_DURATION,
            hide_animation_duration: config::DEFAULT_HIDE_ANIMATION_DURATION,
            animating: true,
            hides_when_stopped: true,
            count: config::DEFAULT_COUNT,
        }
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// Résultat d'une frame de rendu / Output of one rendered frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorFrame<T> {
    /// Opacité du conteneur / Container opacity
    pub opacity: f64,

    /// Progression partagée / Shared progress
    pub progress: f64,

    /// État du pilote / Driver state
    pub state: RunState,

    /// Un élément rendu par index / One rendered item per index
    pub items: Vec<T>,
}

// =============================================================================
// HÔTE / HOST
// =============================================================================

/// Indicateur animé générique / Generic animated indicator
pub struct Indicator<R> {
    driver: ProgressDriver,
    count: usize,
    hides_when_stopped: bool,
    renderer: R,
}

impl<R: RenderComponent> Indicator<R> {
    /// Construit l'indicateur et démarre la boucle si `animating` est vrai
    /// Builds the indicator and starts the loop when `animating` is true
    pub fn new(options: IndicatorOptions, renderer: R) -> Result<Self, IndicatorError> {
        if options.animation_duration.is_zero() {
            return Err(IndicatorError::ZeroDuration);
        }

        let mut driver = ProgressDriver::new(
            options.animation_duration,
            options.hide_animation_duration,
            options.animating,
        );
        if options.animating {
            driver.start();
        }

        Ok(Self {
            driver,
            count: options.count,
            hides_when_stopped: options.hides_when_stopped,
            renderer,
        })
    }

    /// Change l'intention d'animation / Changes the animating intent
    pub fn set_animating(&mut self, animating: bool) {
        self.driver.set_animating(animating);
    }

    /// Avance l'horloge puis rend la frame / Advances the clock then renders the frame
    pub fn tick(&mut self, dt: Duration) -> IndicatorFrame<R::Output> {
        self.driver.tick(dt);
        self.frame()
    }

    /// Rend la frame courante sans avancer l'horloge
    /// Renders the current frame without advancing the clock
    pub fn frame(&self) -> IndicatorFrame<R::Output> {
        let progress = self.driver.sample();
        let items = (0..self.count)
            .map(|index| {
                self.renderer.render(BarContext {
                    index,
                    count: self.count,
                    progress,
                })
            })
            .collect();

        IndicatorFrame {
            opacity: if self.hides_when_stopped { self.driver.fade() } else { 1.0 },
            progress,
            state: self.driver.state(),
            items,
        }
    }

    /// Démonte l'indicateur : plus aucune rampe ni capture en attente
    /// Unmounts the indicator: no ramp and no pending capture remain
    pub fn cancel(&mut self) {
        debug!("indicator cancelled");
        self.driver.cancel();
    }

    pub fn driver(&self) -> &ProgressDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut ProgressDriver {
        &mut self.driver
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub(crate) fn replace(&mut self, count: usize, renderer: R) {
        self.count = count;
        self.renderer = renderer;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_closure_strategy() {
        let options = IndicatorOptions {
            animation_duration: ms(1000),
            count: 3,
            ..Default::default()
        };
        let mut indicator =
            Indicator::new(options, |ctx: BarContext| (ctx.index, ctx.progress)).unwrap();

        let frame = indicator.tick(ms(500));
        assert_eq!(frame.state, RunState::Running);
        assert_eq!(frame.items.len(), 3);
        assert_eq!(frame.items[2].0, 2);
        assert!((frame.items[0].1 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_not_animating_on_mount() {
        let options = IndicatorOptions {
            animating: false,
            ..Default::default()
        };
        let indicator = Indicator::new(options, |ctx: BarContext| ctx.index).unwrap();
        let frame = indicator.frame();
        assert_eq!(frame.state, RunState::Idle);
        assert_eq!(frame.opacity, 0.0);
    }

    #[test]
    fn test_opacity_without_hiding() {
        let options = IndicatorOptions {
            animating: false,
            hides_when_stopped: false,
            ..Default::default()
        };
        let indicator = Indicator::new(options, |ctx: BarContext| ctx.index).unwrap();
        assert_eq!(indicator.frame().opacity, 1.0);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let options = IndicatorOptions {
            animation_duration: Duration::ZERO,
            ..Default::default()
        };
        let result = Indicator::new(options, |ctx: BarContext| ctx.index);
        assert_eq!(result.err(), Some(IndicatorError::ZeroDuration));
    }

    #[test]
    fn test_cancel() {
        let mut indicator =
            Indicator::new(IndicatorOptions::default(), |ctx: BarContext| ctx.progress).unwrap();
        indicator.tick(ms(100));
        indicator.cancel();
        let frame = indicator.tick(ms(100));
        assert_eq!(frame.state, RunState::Idle);
    }
}
