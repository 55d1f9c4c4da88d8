// =============================================================================
// curve.rs - Courbes déphasées par barre / Per-bar phase-shifted curves
// =============================================================================
//
// Chaque barre suit la même courbe en cloche |cos|, décalée d'une fraction
// égale du cycle par rapport à la barre précédente. Les courbes sont des
// tables de correspondance interpolées contre le scalaire de progression.
// Every bar follows the same |cos| bell curve, lagging the previous bar by an
// equal fraction of the cycle. Curves are lookup tables interpolated against
// the progress scalar.

use std::f64::consts::PI;
use std::time::Duration;

use crate::config::{FRAME_RATE, MIN_SAMPLES};

/// Nombre d'échantillons pour couvrir `duration` à 60 images par seconde
/// Number of samples needed to cover `duration` at 60 frames per second
///
/// Retourne le plus petit multiple de `total_bars` supérieur ou égal au
/// nombre de frames (et au minimum [`MIN_SAMPLES`]).
/// Returns the smallest multiple of `total_bars` that is at least the number
/// of frames (and at least [`MIN_SAMPLES`]).
///
/// `total_bars` of 0 is treated as 1.
pub fn sample_count(total_bars: usize, duration: Duration) -> usize {
    let step = total_bars.max(1);
    let frames = FRAME_RATE * duration.as_millis() as f64 / 1000.0;

    let mut samples = 0;
    while (samples as f64) < frames || samples < MIN_SAMPLES {
        samples += step;
    }
    samples
}

/// Décalage de rotation de la barre `bar_index`, en positions
/// Rotation offset of bar `bar_index`, in positions
///
/// La division entière est voulue : quand `samples` n'est pas un multiple de
/// `total_bars`, le pas est tronqué.
/// Integer division is intended: when `samples` is not a multiple of
/// `total_bars`, the step is truncated.
pub fn rotation_offset(bar_index: usize, total_bars: usize, samples: usize) -> usize {
    bar_index * (samples / total_bars.max(1))
}

/// Courbe en cloche de base / Base bell curve
///
/// `amplitude` at both ends, 0 at the midpoint.
pub fn bell_curve(amplitude: f64, samples: usize) -> Vec<f64> {
    let denom = samples.saturating_sub(1).max(1) as f64;
    (0..samples)
        .map(|k| amplitude * (PI * k as f64 / denom).cos().abs())
        .collect()
}

/// Courbe de sortie d'une barre : `samples + 1` valeurs
/// Output curve of one bar: `samples + 1` values
///
/// 1. courbe en cloche / bell curve
/// 2. rotation à droite de [`rotation_offset`] / right rotation by [`rotation_offset`]
/// 3. duplication du dernier élément en tête / last element duplicated at the front
///
/// Le premier et le dernier élément sont égaux, ce qui rend la boucle continue.
/// First and last elements are equal, which keeps the loop seamless.
pub fn output_curve(amplitude: f64, bar_index: usize, total_bars: usize, samples: usize) -> Vec<f64> {
    let base = bell_curve(amplitude, samples);
    let mut range = rotated(base, rotation_offset(bar_index, total_bars, samples));

    if let Some(&last) = range.last() {
        range.insert(0, last);
    }
    range
}

/// Points d'entrée régulièrement espacés dans [0, 1]
/// Evenly spaced input breakpoints in [0, 1]
pub fn input_range(samples: usize) -> Vec<f64> {
    if samples == 0 {
        return vec![0.0];
    }
    (0..=samples).map(|i| i as f64 / samples as f64).collect()
}

/// Interpolation linéaire par morceaux de `x` sur (`inputs`, `outputs`)
/// Piecewise-linear interpolation of `x` over (`inputs`, `outputs`)
///
/// `x` is clamped to the input range. Both slices must be sorted by input
/// and have the same length.
pub fn interpolate(inputs: &[f64], outputs: &[f64], x: f64) -> f64 {
    let len = inputs.len().min(outputs.len());
    match len {
        0 => return 0.0,
        1 => return outputs[0],
        _ => {}
    }

    let x = x.clamp(inputs[0], inputs[len - 1]);
    let i = inputs[..len]
        .partition_point(|&v| v <= x)
        .saturating_sub(1)
        .min(len - 2);

    let span = inputs[i + 1] - inputs[i];
    if span == 0.0 {
        return outputs[i];
    }
    let t = (x - inputs[i]) / span;
    outputs[i] + (outputs[i + 1] - outputs[i]) * t
}

fn rotated(mut range: Vec<f64>, steps: usize) -> Vec<f64> {
    if !range.is_empty() {
        let len = range.len();
        range.rotate_right(steps % len);
    }
    range
}

// =============================================================================
// TESTS
// =============================================================================
