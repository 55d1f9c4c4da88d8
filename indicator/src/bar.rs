// =============================================================================
// bar.rs - Indicateur à barres / Bar indicator
// =============================================================================
//
// Chaque barre est composée de deux demi-barres (haut et bas) qui se
// déplacent en sens opposés le long de la courbe déphasée de la barre.
// Each bar is made of two halves (top and bottom) moving in opposite
// directions along the bar's phase-shifted curve.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::curve;
use crate::error::IndicatorError;
use crate::indicator::{BarContext, Indicator, IndicatorOptions, RenderComponent};

// =============================================================================
// GÉOMÉTRIE / GEOMETRY
// =============================================================================

/// Géométrie fixe d'une barre, dérivée de la taille de l'indicateur
/// Fixed geometry of one bar, derived from the indicator size
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    /// Largeur d'une demi-barre / Width of one half
    pub width: f64,

    /// Hauteur d'une demi-barre / Height of one half
    pub height: f64,

    /// Rayon des coins arrondis / Rounded corner radius
    pub radius: f64,

    /// Hauteur du conteneur de la barre / Height of the bar container
    pub container_height: f64,

    /// Marge horizontale de chaque côté / Horizontal margin on each side
    pub margin_horizontal: f64,
}

impl BarGeometry {
    pub fn from_size(size: f64) -> Self {
        let width = (size / 5.0).floor();
        let height = (size / 2.0).floor();
        let radius = (width / 2.0).ceil();

        Self {
            width,
            height,
            radius,
            container_height: size,
            margin_horizontal: radius,
        }
    }

    /// Amplitude du déplacement vertical / Vertical travel amplitude
    pub fn amplitude(&self) -> f64 {
        (self.height - self.radius) / 2.0
    }
}

// =============================================================================
// PROPRIÉTÉS / PROPERTIES
// =============================================================================

/// Propriétés de l'indicateur à barres / Bar indicator properties
#[derive(Clone, Debug, PartialEq)]
pub struct BarIndicatorProps {
    pub count: usize,
    pub color: String,
    pub size: f64,
    pub animation_duration: Duration,
}

impl Default for BarIndicatorProps {
    fn default() -> Self {
        Self {
            count: config::DEFAULT_BAR_COUNT,
            color: config::DEFAULT_BAR_COLOR.to_string(),
            size: config::DEFAULT_BAR_SIZE,
            animation_duration: config::DEFAULT_BAR_ANIMATION_DURATION,
        }
    }
}

impl BarIndicatorProps {
    fn validate(&self) -> Result<(), IndicatorError> {
        if self.count == 0 {
            return Err(IndicatorError::NoBars);
        }
        if self.animation_duration.is_zero() {
            return Err(IndicatorError::ZeroDuration);
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(IndicatorError::InvalidSize(self.size));
        }
        Ok(())
    }
}

// =============================================================================
// RENDU / RENDERING
// =============================================================================

/// Position d'une barre pour une frame / Position of one bar for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarFrame {
    pub index: usize,
    pub color: String,
    pub geometry: BarGeometry,

    /// Translation verticale de la demi-barre du haut
    /// Vertical translation of the top half
    pub top_offset: f64,

    /// Translation verticale de la demi-barre du bas
    /// Vertical translation of the bottom half
    pub bottom_offset: f64,
}

#[derive(Clone, Debug)]
struct BarCurves {
    top: Vec<f64>,
    bottom: Vec<f64>,
}

/// Stratégie de rendu des barres, avec ses tables de courbes précalculées
/// Bar render strategy, with its precomputed curve tables
#[derive(Clone, Debug)]
pub struct BarRenderer {
    props: BarIndicatorProps,
    geometry: BarGeometry,
    samples: usize,
    inputs: Vec<f64>,
    curves: Vec<BarCurves>,
}

impl BarRenderer {
    pub fn new(props: BarIndicatorProps) -> Result<Self, IndicatorError> {
        props.validate()?;

        let geometry = BarGeometry::from_size(props.size);
        let samples = curve::sample_count(props.count, props.animation_duration);
        let inputs = curve::input_range(samples);
        let amplitude = geometry.amplitude();

        let curves = (0..props.count)
            .map(|index| BarCurves {
                top: curve::output_curve(amplitude, index, props.count, samples),
                bottom: curve::output_curve(-amplitude, index, props.count, samples),
            })
            .collect();

        debug!(count = props.count, samples, "bar curves built");

        Ok(Self {
            props,
            geometry,
            samples,
            inputs,
            curves,
        })
    }

    pub fn props(&self) -> &BarIndicatorProps {
        &self.props
    }

    pub fn geometry(&self) -> BarGeometry {
        self.geometry
    }

    /// Nombre d'échantillons par courbe / Samples per curve
    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl RenderComponent for BarRenderer {
    type Output = BarFrame;

    fn render(&self, ctx: BarContext) -> BarFrame {
        let (top_offset, bottom_offset) = match self.curves.get(ctx.index) {
            Some(c) => (
                curve::interpolate(&self.inputs, &c.top, ctx.progress),
                curve::interpolate(&self.inputs, &c.bottom, ctx.progress),
            ),
            None => (0.0, 0.0),
        };

        BarFrame {
            index: ctx.index,
            color: self.props.color.clone(),
            geometry: self.geometry,
            top_offset,
            bottom_offset,
        }
    }
}

// =============================================================================
// INDICATEUR À BARRES / BAR INDICATOR
// =============================================================================

pub type BarIndicator = Indicator<BarRenderer>;

impl Indicator<BarRenderer> {
    /// Construit un indicateur à barres / Builds a bar indicator
    pub fn bars(props: BarIndicatorProps, animating: bool) -> Result<Self, IndicatorError> {
        let options = IndicatorOptions {
            animation_duration: props.animation_duration,
            animating,
            count: props.count,
            ..Default::default()
        };
        Indicator::new(options, BarRenderer::new(props)?)
    }

    /// Remplace les propriétés ; les courbes sont recalculées mais la
    /// progression est conservée.
    /// Replaces the properties; curves are rebuilt but progress is kept.
    pub fn set_props(&mut self, props: BarIndicatorProps) -> Result<(), IndicatorError> {
        if &props == self.renderer().props() {
            return Ok(());
        }
        let renderer = BarRenderer::new(props)?;
        self.driver_mut().set_duration(renderer.props().animation_duration);
        self.replace(renderer.props().count, renderer);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
