// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use spacepan_input::TargetTraits;
use spacepan_view2d::ViewTransform;

/// The environment a [`Controller`](crate::Controller) drives.
///
/// A host owns the real container and content nodes (DOM elements, widgets,
/// scene nodes). It reports their geometry, classifies event targets, and
/// applies what the controller computes. The controller never renders.
///
/// Rendering contract: the content is drawn centered in the container,
/// scaled by `base_scale * transform.zoom` and offset by
/// `transform.translate` client pixels, which is exactly
/// [`ViewTransform::to_affine`].
pub trait ViewportHost {
    /// Opaque handle for the element an input event landed on.
    type Target: Clone + PartialEq;

    /// Container rectangle in client coordinates, or `None` if it is gone.
    fn container_rect(&self) -> Option<Rect>;

    /// Unscaled content size, or `None` if it is gone.
    fn content_size(&self) -> Option<Size>;

    /// Double-tap and nested-scroll traits of `target`.
    fn target_traits(&self, target: &Self::Target) -> TargetTraits;

    /// Registers input and resize listeners and saves any style the host is
    /// about to change.
    fn attach(&mut self);

    /// Unregisters listeners and restores the saved style.
    fn detach(&mut self);

    /// Applies a new contain-fit base scale.
    fn apply_base_scale(&mut self, scale: f64);

    /// Applies the displayed transform.
    fn apply_transform(&mut self, transform: ViewTransform);

    /// Reports a Reset/Adjusted transition (for styling, "reset" buttons).
    fn reset_changed(&mut self, is_reset: bool);

    /// Asks for one call to [`Controller::frame`](crate::Controller::frame)
    /// on the next display frame.
    fn request_frame(&mut self);

    /// Reports that the view started or stopped following a pointer. Hosts
    /// typically disable text selection while dragging.
    fn dragging_changed(&mut self, dragging: bool) {
        let _ = dragging;
    }
}
