// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{ViewConfig, ZoomLimits};
use crate::geometry::{ApproxEq, clamp_symmetric, magnitude_hint};

/// Zoom and translation applied to the content node on top of the base scale.
///
/// `translate` is in container (client) pixels and moves the content center
/// away from the container center. `zoom` multiplies the base scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Zoom relative to the base scale.
    pub zoom: f64,
    /// Offset of the content center from the container center.
    pub translate: Vec2,
}

impl ViewTransform {
    /// The reset transform: zoom `1`, no translation.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(zoom: f64, translate: Vec2) -> Self {
        Self { zoom, translate }
    }

    /// Linear interpolation towards `to`; `t = 0` is `self`, `t = 1` is `to`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            zoom: self.zoom + (to.zoom - self.zoom) * t,
            translate: self.translate.lerp(to.translate, t),
        }
    }

    /// Returns `true` if both zoom and translation match within a
    /// magnitude-scaled epsilon.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        let mag = magnitude_hint(self.translate, other.translate);
        self.zoom
            .approx_eq(&other.zoom, self.zoom.max(other.zoom) * 4.0)
            && self.translate.approx_eq(&other.translate, mag * 4.0)
    }

    /// Returns `true` if this is (approximately) the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY)
    }

    /// Content-local → client affine.
    ///
    /// Content-local coordinates have their origin at the content center and
    /// are in unscaled content units.
    #[must_use]
    pub fn to_affine(&self, base_scale: f64, container_center: Point) -> Affine {
        Affine::translate(container_center.to_vec2() + self.translate)
            * Affine::scale(base_scale * self.zoom)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Saved view used to restore a cancelled gesture or anchor a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSnapshot {
    /// Transform at the time of the snapshot.
    pub transform: ViewTransform,
    /// Whether the view was in the reset state.
    pub is_reset: bool,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            is_reset: true,
        }
    }
}

/// Authoritative pan/zoom state of one mounted viewport.
///
/// `ViewportState` tracks the container rectangle (client coordinates), the
/// fixed content size, the contain-fit base scale and the current
/// [`ViewTransform`]. All mutations go through the clamping operations on
/// this type:
/// - [`ViewportState::pan`] keeps the content from being panned out of reach.
/// - [`ViewportState::zoom_by`] keeps zoom in `[min, max]`.
/// - [`ViewportState::zoom_to`] zooms about a client-space origin.
/// - [`ViewportState::manipulate`] drives two-finger pinch/pan from a snapshot.
///
/// It also carries the binary Reset/Adjusted classification surfaced to the
/// host. Any mutation that moves the view marks it adjusted; only
/// [`ViewportState::reset`] and [`ViewportState::restore`] make it reset
/// again.
#[derive(Clone, Debug)]
pub struct ViewportState {
    config: ViewConfig,
    container: Rect,
    content: Size,
    base_scale: f64,
    limits: ZoomLimits,
    zoom: f64,
    translate: Vec2,
    is_reset: bool,
}

impl ViewportState {
    /// Creates a reset viewport for `content` centered in `container`.
    ///
    /// If the container is too small to fit anything (see
    /// [`ViewConfig::fit_scale`]) the base scale falls back to `1.0` until the
    /// next successful [`ViewportState::resize`].
    #[must_use]
    pub fn new(container: Rect, content: Size, config: ViewConfig) -> Self {
        let base_scale = config.fit_scale(container.size(), content).unwrap_or(1.0);
        Self {
            config,
            container,
            content,
            base_scale,
            limits: config.limits(base_scale),
            zoom: 1.0,
            translate: Vec2::ZERO,
            is_reset: true,
        }
    }

    /// Returns the configuration used for fitting and limits.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the container rectangle in client coordinates.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Returns the unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Returns the contain-fit scale applied once at container scope.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    /// Returns the current zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the current zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.zoom, self.translate)
    }

    /// Returns `true` while the view is in the reset state.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.is_reset
    }

    /// Overrides the Reset/Adjusted classification.
    pub fn set_reset(&mut self, is_reset: bool) {
        self.is_reset = is_reset;
    }

    /// Captures the current transform and reset flag.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            transform: self.transform(),
            is_reset: self.is_reset,
        }
    }

    /// Center of the container in client coordinates.
    #[must_use]
    pub fn container_center(&self) -> Point {
        self.container.center()
    }

    /// Center of the content in client coordinates.
    #[must_use]
    pub fn content_center(&self) -> Point {
        self.container_center() + self.translate
    }

    /// Moves the container without changing its size.
    ///
    /// Used when the page scrolled the container; zoom origins are client
    /// coordinates, so the center has to follow.
    pub fn set_container_origin(&mut self, origin: Point) {
        self.container = Rect::from_origin_size(origin, self.container.size());
    }

    /// Recomputes geometry for a new container (and content) size.
    ///
    /// A reset view stays reset. An adjusted view keeps its on-screen
    /// magnification and pan, re-clamped for the new size. Returns `false`
    /// and leaves the state untouched when the new geometry is degenerate.
    #[must_use]
    pub fn resize(&mut self, container: Rect, content: Size) -> bool {
        let Some(base_scale) = self.config.fit_scale(container.size(), content) else {
            return false;
        };
        let prev_base = self.base_scale;
        let prev_translate = self.translate;

        self.container = container;
        self.content = content;
        self.base_scale = base_scale;
        self.limits = self.config.limits(base_scale);
        self.translate = Vec2::ZERO;

        if self.is_reset {
            self.zoom = 1.0;
        } else {
            self.zoom = self.limits.clamp(self.zoom * prev_base / base_scale);
            self.translate = clamp_symmetric(prev_translate, self.pan_bound());
        }
        true
    }

    /// Per-axis translation bound for the current zoom.
    ///
    /// `max(half_extent - quarter, 2 * quarter - half_extent - padding)`
    /// where `half_extent` is the scaled content half size and `quarter` a
    /// quarter of the container size. The content can be pushed until roughly
    /// three quarters of it are off screen, never further.
    #[must_use]
    pub fn pan_bound(&self) -> Vec2 {
        let scale = self.base_scale * self.zoom;
        let half = Vec2::new(self.content.width, self.content.height) * (scale / 2.0);
        let quarter = Vec2::new(self.container.width(), self.container.height()) / 4.0;
        let bound = |half: f64, quarter: f64| {
            (half - quarter)
                .max(quarter * 2.0 - half - self.config.padding)
                .max(0.0)
        };
        Vec2::new(bound(half.x, quarter.x), bound(half.y, quarter.y))
    }

    /// Pans by `delta` client pixels, clamped to [`ViewportState::pan_bound`].
    ///
    /// Returns the delta that was actually applied.
    pub fn pan(&mut self, delta: Vec2) -> Vec2 {
        let before = self.translate;
        self.translate = clamp_symmetric(before + delta, self.pan_bound());
        let applied = self.translate - before;
        if !applied.approx_eq(&Vec2::ZERO, magnitude_hint(before, self.translate)) {
            self.is_reset = false;
        }
        applied
    }

    /// Pans so that the translation becomes `translate` (clamped).
    pub fn set_translate(&mut self, translate: Vec2) -> Vec2 {
        self.pan(translate - self.translate)
    }

    /// Multiplies zoom by `factor`, clamped to the zoom limits.
    ///
    /// Returns the ratio that was actually applied (`1.0` for a no-op or an
    /// invalid factor). The translation is re-clamped for the new bounds.
    pub fn zoom_by(&mut self, factor: f64) -> f64 {
        if !factor.is_finite() || factor <= 0.0 {
            return 1.0;
        }
        let before = self.zoom;
        self.zoom = self.limits.clamp(before * factor);
        let ratio = self.zoom / before;
        if !ratio.approx_eq(&1.0, 4.0) {
            self.is_reset = false;
            self.translate = clamp_symmetric(self.translate, self.pan_bound());
        }
        ratio
    }

    /// Zooms by `factor` about `origin` (client coordinates).
    ///
    /// The content point under `origin` stays under it, unless pan clamping
    /// has to move it.
    pub fn zoom_to(&mut self, factor: f64, origin: Point) {
        let center = self.content_center();
        let ratio = self.zoom_by(factor);
        if ratio.approx_eq(&1.0, 4.0) {
            return;
        }
        self.pan((center - origin) * (ratio - 1.0));
    }

    /// Zooms to the double-tap target about `origin`, then recenters the
    /// camera on the point that was under `origin`.
    pub fn zoom_in_at(&mut self, origin: Point) {
        self.zoom_to(self.limits.target / self.zoom, origin);
        let center = self.container_center();
        self.pan(center - origin);
    }

    /// Two-finger manipulation relative to a snapshot taken when the second
    /// finger landed.
    ///
    /// The zoom becomes `from.zoom * factor` (clamped) and the translation is
    /// chosen so that the content point that was under `anchor_start` in the
    /// snapshot is under `anchor_now`.
    pub fn manipulate(
        &mut self,
        from: &ViewSnapshot,
        anchor_start: Point,
        factor: f64,
        anchor_now: Point,
    ) {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            1.0
        };
        let start = from.transform;
        let zoom = self.limits.clamp(start.zoom * factor);
        let ratio = zoom / start.zoom;
        let center = self.container_center().to_vec2();
        let offset = anchor_start.to_vec2() - center - start.translate;
        let translate = anchor_now.to_vec2() - center - offset * ratio;

        let before = self.transform();
        self.zoom = zoom;
        self.translate = clamp_symmetric(translate, self.pan_bound());
        if !self.transform().approx_eq(&before) {
            self.is_reset = false;
        }
    }

    /// Returns to zoom `1` and no translation, and marks the view reset.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.translate = Vec2::ZERO;
        self.is_reset = true;
    }

    /// Restores a snapshot: transform (clamped to the current limits) and
    /// reset flag.
    pub fn restore(&mut self, snapshot: &ViewSnapshot) {
        self.zoom = self.limits.clamp(snapshot.transform.zoom);
        self.translate = clamp_symmetric(snapshot.transform.translate, self.pan_bound());
        self.is_reset = snapshot.is_reset;
    }

    /// Adopts a transform the user is currently seeing.
    ///
    /// Used when an in-flight animation is interrupted: the displayed value
    /// becomes authoritative. If it differs from the current target the view
    /// is no longer reset.
    pub fn adopt(&mut self, shown: ViewTransform) {
        if shown.approx_eq(&self.transform()) {
            return;
        }
        self.zoom = self.limits.clamp(shown.zoom);
        self.translate = clamp_symmetric(shown.translate, self.pan_bound());
        self.is_reset = false;
    }

    /// Content-local → client affine for the current transform.
    #[must_use]
    pub fn content_to_client(&self) -> Affine {
        self.transform()
            .to_affine(self.base_scale, self.container_center())
    }

    /// Converts a client point into content-local coordinates (origin at the
    /// content center, unscaled units).
    #[must_use]
    pub fn client_to_content_point(&self, pt: Point) -> Point {
        self.content_to_client().inverse() * pt
    }

    /// Converts a content-local point into client coordinates.
    #[must_use]
    pub fn content_to_client_point(&self, pt: Point) -> Point {
        self.content_to_client() * pt
    }
}
