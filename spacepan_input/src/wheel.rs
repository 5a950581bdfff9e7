// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel classification: discrete mouse wheel vs. smooth trackpad scrolling.
//!
//! Browsers and windowing systems report both devices through the same wheel
//! event. Notched wheels produce bursts of identical, large deltas (often
//! multiples of each other); trackpads produce streams of small, varied
//! deltas. The classifier looks at consecutive magnitudes per axis and picks
//! a [`WheelKind`]:
//!
//! - [`WheelKind::Wheel`]: both the current and the previous magnitude exceed
//!   the scroll step and one evenly divides the other. Pans one step.
//! - [`WheelKind::Unknown`]: first event of a session (or after a pause
//!   longer than the break window). Pans the raw delta, capped at one step.
//! - [`WheelKind::Smooth`]: anything else. Pans the raw delta.
//!
//! A sample where both axes are smooth clears the magnitude history, so a
//! trackpad stream never turns into a notched wheel by accident.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::{Point, Vec2};
use spacepan_motion::Ease;
use spacepan_view2d::geometry::ApproxEq;
use tracing::trace;

use crate::control::ViewControl;
use crate::event::{DeltaMode, WheelDelta};

/// Wheel tuning, in client pixels and milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelConfig {
    /// Pixels per line for [`DeltaMode::Line`].
    pub line_px: f64,
    /// Pixels per page for [`DeltaMode::Page`].
    pub page_px: f64,
    /// Pan distance of one wheel notch.
    pub scroll_step: f64,
    /// Zoom percentage of one wheel notch with the zoom modifier held.
    pub zoom_step: f64,
    /// A pause longer than this starts a new wheel session.
    pub break_ms: f64,
    /// How long a scroll owner keeps the wheel after its last event.
    pub hold_ms: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            line_px: 40.0,
            page_px: 800.0,
            scroll_step: 50.0,
            zoom_step: 15.0,
            break_ms: 100.0,
            hold_ms: 300.0,
        }
    }
}

/// Device guess for one axis of a wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WheelKind {
    /// Not enough history to tell.
    #[default]
    Unknown,
    /// Notched mouse wheel.
    Wheel,
    /// Trackpad or other smooth source.
    Smooth,
}

/// One classified axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisSample {
    /// Device guess.
    pub kind: WheelKind,
    /// Delta in pixels.
    pub delta: f64,
}

impl AxisSample {
    /// Distance to pan along this axis, in the direction of `delta`.
    #[must_use]
    pub fn pan_delta(&self, step: f64) -> f64 {
        match self.kind {
            WheelKind::Wheel if self.delta < 0.0 => -step,
            WheelKind::Wheel => step,
            WheelKind::Unknown => self.delta.clamp(-step, step),
            WheelKind::Smooth => self.delta,
        }
    }

    /// Zoom percentage for this axis, ignoring direction.
    #[must_use]
    pub fn zoom_amount(&self, step: f64) -> f64 {
        match self.kind {
            WheelKind::Wheel => step,
            WheelKind::Unknown => self.delta.abs().min(step),
            WheelKind::Smooth => self.delta.abs(),
        }
    }
}

/// Result of classifying one wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WheelSample {
    /// Horizontal axis.
    pub x: AxisSample,
    /// Vertical axis.
    pub y: AxisSample,
    /// Whether this event started a new wheel session.
    pub new_session: bool,
}

impl WheelSample {
    /// Whether both axes look like a smooth source.
    #[must_use]
    pub fn is_smooth(&self) -> bool {
        self.x.kind == WheelKind::Smooth && self.y.kind == WheelKind::Smooth
    }

    /// Pan vector in wheel direction (the view moves the opposite way).
    #[must_use]
    pub fn pan(&self, step: f64) -> Vec2 {
        Vec2::new(self.x.pan_delta(step), self.y.pan_delta(step))
    }

    /// Zoom factor for a modifier-wheel event; wheel-up zooms in.
    #[must_use]
    pub fn zoom_factor(&self, step: f64) -> f64 {
        let factor = 1.0 + self.y.zoom_amount(step) / 100.0;
        if self.y.delta > 0.0 { 1.0 / factor } else { factor }
    }
}

/// Stateful wheel classifier.
///
/// Keeps the time of the previous event and, per axis, the previous
/// magnitude. A missing magnitude means "no usable history", either because
/// the session just started or because a smooth sample cleared it.
#[derive(Clone, Debug, Default)]
pub struct WheelClassifier {
    config: WheelConfig,
    last_time: Option<f64>,
    last_magnitude: [Option<f64>; 2],
}

impl WheelClassifier {
    /// Creates a classifier with no history.
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self {
            config,
            last_time: None,
            last_magnitude: [None, None],
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Converts a raw delta into pixels.
    #[must_use]
    pub fn normalize(&self, delta: WheelDelta) -> Vec2 {
        let scale = match delta.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => self.config.line_px,
            DeltaMode::Page => self.config.page_px,
        };
        Vec2::new(delta.dx * scale, delta.dy * scale)
    }

    /// Whether an event at `timestamp` would start a new wheel session.
    #[must_use]
    pub fn starts_session(&self, timestamp: f64) -> bool {
        self.last_time
            .is_none_or(|last| timestamp - last > self.config.break_ms)
    }

    /// Classifies one event and updates the history.
    pub fn classify(&mut self, delta: WheelDelta, timestamp: f64) -> WheelSample {
        let px = self.normalize(delta);
        let new_session = self.starts_session(timestamp);
        let sample = WheelSample {
            x: self.classify_axis(px.x, self.last_magnitude[0], new_session),
            y: self.classify_axis(px.y, self.last_magnitude[1], new_session),
            new_session,
        };
        self.last_magnitude = if sample.is_smooth() {
            [None, None]
        } else {
            [Some(px.x.abs()), Some(px.y.abs())]
        };
        self.last_time = Some(timestamp);
        sample
    }

    fn classify_axis(&self, delta: f64, last: Option<f64>, new_session: bool) -> AxisSample {
        let step = self.config.scroll_step;
        let magnitude = delta.abs();
        let kind = if magnitude == 0.0 {
            WheelKind::Unknown
        } else if last.is_some_and(|last| {
            magnitude > step && last > step && evenly_divides(magnitude, last)
        }) {
            WheelKind::Wheel
        } else if new_session {
            WheelKind::Unknown
        } else {
            WheelKind::Smooth
        };
        AxisSample { kind, delta }
    }

    /// Classifies one event and applies it to `view`.
    ///
    /// With `modifier_zoom` the vertical axis zooms about `position`;
    /// otherwise both axes pan, with the content moving against the wheel.
    /// Changes are played back with [`Ease::Fast`].
    pub fn handle(
        &mut self,
        delta: WheelDelta,
        position: Point,
        modifier_zoom: bool,
        timestamp: f64,
        view: &mut impl ViewControl,
    ) -> WheelSample {
        view.interrupt();
        let sample = self.classify(delta, timestamp);
        trace!(
            x = ?sample.x.kind,
            y = ?sample.y.kind,
            new_session = sample.new_session,
            "wheel"
        );
        if modifier_zoom {
            if sample.y.delta != 0.0 {
                view.zoom_to(sample.zoom_factor(self.config.zoom_step), position);
                view.animate(Ease::Fast);
            }
        } else {
            let pan = sample.pan(self.config.scroll_step);
            if pan != Vec2::ZERO {
                view.pan(-pan);
                view.animate(Ease::Fast);
            }
        }
        sample
    }
}

/// Whether the smaller of two positive magnitudes evenly divides the larger.
fn evenly_divides(a: f64, b: f64) -> bool {
    let (small, large) = if a <= b { (a, b) } else { (b, a) };
    let rest = large % small;
    rest.approx_eq(&0.0, large) || rest.approx_eq(&small, large)
}
