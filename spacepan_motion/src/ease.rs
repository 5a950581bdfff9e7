// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing modes and curves.

use spacepan_view2d::ViewTransform;

/// How a change of the target transform is played back.
///
/// The mode is chosen by whoever changes the view: wheel input and clicks want
/// short, crisp feedback, drags want a near-instant catch-up, double-tap wants
/// a slow ease that leaves time for the tap's own click to land first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    /// Jump straight to the target. Used for resize corrections.
    None,
    /// Very short quadratic ease-out; lets a drag catch up with the pointer.
    Least,
    /// Short quadratic ease-out for wheel and click feedback.
    #[default]
    Fast,
    /// Quintic ease-out whose duration grows with distance and zoom ratio.
    Smooth,
    /// Delayed quadratic ease-in-out for double-tap zoom and reset.
    Slow,
}

/// Durations and scaling for the easing modes, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EaseConfig {
    /// Duration of [`Ease::Least`].
    pub least_ms: f64,
    /// Duration of [`Ease::Fast`].
    pub fast_ms: f64,
    /// Base duration of [`Ease::Smooth`].
    pub smooth_ms: f64,
    /// Base duration of [`Ease::Slow`], not counting the delay.
    pub slow_ms: f64,
    /// Initial window of [`Ease::Slow`] during which nothing moves.
    pub slow_delay_ms: f64,
    /// Travel distance (client pixels) that counts as one duration unit.
    pub distance_unit: f64,
    /// Zoom ratio that counts as one duration unit.
    pub zoom_ratio_unit: f64,
    /// Largest duration multiplier for distance, and for zoom in [`Ease::Smooth`].
    pub stretch_cap: f64,
    /// Largest duration multiplier for zoom in [`Ease::Slow`].
    pub slow_zoom_cap: f64,
}

impl Default for EaseConfig {
    fn default() -> Self {
        Self {
            least_ms: 25.0,
            fast_ms: 50.0,
            smooth_ms: 250.0,
            slow_ms: 400.0,
            slow_delay_ms: 150.0,
            distance_unit: 130.0,
            zoom_ratio_unit: 1.3,
            stretch_cap: 2.0,
            slow_zoom_cap: 2.5,
        }
    }
}

impl Ease {
    /// Progress in `[0, 1]` after `elapsed` milliseconds of a `from → to`
    /// transition.
    #[must_use]
    pub fn progress(
        self,
        config: &EaseConfig,
        elapsed: f64,
        from: &ViewTransform,
        to: &ViewTransform,
    ) -> f64 {
        match self {
            Self::None => 1.0,
            Self::Least => quad_ease_out(ratio(elapsed, config.least_ms)),
            Self::Fast => quad_ease_out(ratio(elapsed, config.fast_ms)),
            Self::Smooth => {
                let (distance, zoom) = stretch(config, from, to, config.stretch_cap);
                let duration = config.smooth_ms * distance.max(zoom);
                quintic_ease_out(ratio(elapsed, duration))
            }
            Self::Slow => {
                if elapsed < config.slow_delay_ms {
                    return 0.0;
                }
                let (distance, zoom) = stretch(config, from, to, config.slow_zoom_cap);
                let duration = config.slow_ms * distance.max(zoom);
                quad_ease_in_out(ratio(elapsed - config.slow_delay_ms, duration))
            }
        }
    }
}

/// Duration multipliers for travel distance and zoom ratio.
fn stretch(
    config: &EaseConfig,
    from: &ViewTransform,
    to: &ViewTransform,
    zoom_cap: f64,
) -> (f64, f64) {
    let travel = (to.translate - from.translate).hypot();
    let zoom_ratio = if from.zoom > to.zoom {
        from.zoom / to.zoom
    } else {
        to.zoom / from.zoom
    };
    (
        (travel / config.distance_unit).clamp(1.0, config.stretch_cap.max(1.0)),
        (zoom_ratio / config.zoom_ratio_unit).clamp(1.0, zoom_cap.max(1.0)),
    )
}

fn ratio(elapsed: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        elapsed / duration
    } else {
        1.0
    }
}

/// `1 - (1 - t)^2`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn quad_ease_out(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u
}

/// `1 - (1 - t)^5`, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn quintic_ease_out(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u * u * u
}

/// Quadratic ease-in-out, with `t` clamped to `[0, 1]`.
#[must_use]
pub fn quad_ease_in_out(t: f64) -> f64 {
    let x = t.clamp(0.0, 1.0);
    if x < 0.5 {
        2.0 * x * x
    } else {
        let u = -2.0 * x + 2.0;
        1.0 - u * u / 2.0
    }
}
