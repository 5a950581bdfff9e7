// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use spacepan_motion::Ease;
use spacepan_view2d::ViewSnapshot;

/// The view operations input handling is allowed to perform.
///
/// [`WheelClassifier`](crate::WheelClassifier) and
/// [`GestureRecognizer`](crate::GestureRecognizer) drive the viewport only
/// through this trait, so they can be tested against a plain
/// `ViewportState` without a host or an animator.
///
/// Operations mutate the authoritative view. Nothing is displayed until
/// [`ViewControl::animate`] is called with the ease the change should be
/// played back with.
pub trait ViewControl {
    /// Stops any running animation and makes the displayed transform
    /// authoritative. Called before new input reads or writes the view.
    fn interrupt(&mut self);

    /// Current authoritative translation.
    fn translate(&self) -> Vec2;

    /// Current authoritative zoom.
    fn zoom(&self) -> f64;

    /// Transform and reset flag, for later use with
    /// [`ViewControl::manipulate`].
    fn snapshot(&self) -> ViewSnapshot;

    /// Restores a snapshot taken with [`ViewControl::snapshot`], reset flag
    /// included.
    fn restore(&mut self, snapshot: &ViewSnapshot);

    /// Pans so the translation becomes `translate` (clamped).
    fn set_translate(&mut self, translate: Vec2);

    /// Pans by `delta` client pixels (clamped).
    fn pan(&mut self, delta: Vec2);

    /// Zooms by `factor` about the client point `origin`.
    fn zoom_to(&mut self, factor: f64, origin: Point);

    /// Zooms to the double-tap target about `origin` and recenters on it.
    fn zoom_in(&mut self, origin: Point);

    /// Anchor-preserving two-finger manipulation relative to `from`.
    fn manipulate(&mut self, from: &ViewSnapshot, anchor_start: Point, factor: f64, anchor_now: Point);

    /// Returns to the reset view.
    fn reset(&mut self);

    /// Whether the view is in the reset state.
    fn is_reset(&self) -> bool;

    /// Overrides the reset flag.
    fn set_reset(&mut self, is_reset: bool);

    /// Plays back the changes made since the last call with `ease`.
    fn animate(&mut self, ease: Ease);
}
