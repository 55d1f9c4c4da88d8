//! =============================================================================
//! bar-indicator - Indicateur de chargement à barres
//! bar-indicator - Bar loading indicator
//! =============================================================================
//!
//! Cette bibliothèque calcule, frame après frame, la position des barres d'un
//! indicateur de chargement. Elle ne dessine rien : le front-end reçoit des
//! [`IndicatorFrame`] sérialisables et les affiche.
//!
//! This library computes, frame by frame, the position of the bars of a
//! loading indicator. It draws nothing: the front-end receives serializable
//! [`IndicatorFrame`]s and displays them.
//!
//! # Composants / Components
//! - [`ProgressDriver`] : scalaire de progression et fondu / progress scalar and fade
//! - [`curve`] : courbes déphasées par barre / per-bar phase-shifted curves
//! - [`BarRenderer`] : géométrie et positions des barres / bar geometry and offsets
//! - [`Indicator`] : hôte générique avec stratégie de rendu / generic host with render strategy

// =============================================================================
// MODULES
// =============================================================================

/// Valeurs par défaut / Default values
pub mod config;

/// Courbes en cloche déphasées / Phase-shifted bell curves
pub mod curve;

mod bar;
mod driver;
mod error;
mod indicator;
mod timing;

pub use bar::{BarFrame, BarGeometry, BarIndicator, BarIndicatorProps, BarRenderer};
pub use driver::{Fade, ProgressDriver, RunState};
pub use error::IndicatorError;
pub use indicator::{BarContext, Indicator, IndicatorFrame, IndicatorOptions, RenderComponent};
