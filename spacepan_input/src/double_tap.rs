// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use spacepan_view2d::geometry::distance;

use crate::event::{DeviceType, TapCategory};

/// A tap remembered for double-tap detection.
#[derive(Clone, Debug, PartialEq)]
pub struct TapRecord<T> {
    /// Timestamp of the pointer-down, in milliseconds.
    pub time: f64,
    /// Device that tapped.
    pub device: DeviceType,
    /// Client position.
    pub position: Point,
    /// Element tapped, if any.
    pub target: Option<T>,
    /// Double-tap participation of `target`.
    pub category: TapCategory,
}

/// Double-tap detector honoring per-element [`TapCategory`].
///
/// Two taps form a double-tap when they come from the same device type, land
/// within `radius` of each other and start less than `window_ms` apart. On
/// top of that:
/// - A tap on a [`TapCategory::Disable`] element never completes a
///   double-tap and is never remembered.
/// - If either tap hit a [`TapCategory::Toggle`] element, both must have hit
///   the same element. Otherwise the new tap replaces the remembered one.
///
/// A completed double-tap clears the memory, so a triple tap is one
/// double-tap followed by a fresh first tap.
#[derive(Clone, Debug)]
pub struct DoubleTap<T> {
    window_ms: f64,
    radius: f64,
    last: Option<TapRecord<T>>,
}

impl<T: PartialEq> DoubleTap<T> {
    /// Creates a detector with no remembered tap.
    #[must_use]
    pub fn new(window_ms: f64, radius: f64) -> Self {
        Self {
            window_ms,
            radius,
            last: None,
        }
    }

    /// The remembered tap, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TapRecord<T>> {
        self.last.as_ref()
    }

    /// Forgets the remembered tap, for example because it turned into a drag.
    pub fn forget(&mut self) {
        self.last = None;
    }

    /// Registers `tap` and returns whether it completes a double-tap.
    pub fn check(&mut self, tap: TapRecord<T>) -> bool {
        let (window_ms, radius) = (self.window_ms, self.radius);
        let Some(last) = self
            .last
            .take_if(|last| qualifies(window_ms, radius, last, &tap))
        else {
            self.remember(tap);
            return false;
        };
        if tap.category == TapCategory::Disable {
            return false;
        }
        let toggle = tap.category == TapCategory::Toggle || last.category == TapCategory::Toggle;
        if toggle && (tap.target.is_none() || tap.target != last.target) {
            self.remember(tap);
            return false;
        }
        true
    }

    fn remember(&mut self, tap: TapRecord<T>) {
        self.last = (tap.category != TapCategory::Disable).then_some(tap);
    }
}

fn qualifies<T>(window_ms: f64, radius: f64, last: &TapRecord<T>, tap: &TapRecord<T>) -> bool {
    tap.time - last.time < window_ms
        && tap.device == last.device
        && distance(tap.position, last.position) < radius
}
