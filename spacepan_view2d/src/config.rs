// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Tunable constants for fitting and zoom limits.
///
/// Zoom limits are expressed relative to the base (contain-fit) scale so they
/// stay perceptually constant across container sizes: a large container with
/// a small base scale gets a proportionally larger `max_zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Padding in container pixels kept around the content when fitting.
    pub padding: f64,
    /// Minimum zoom relative to the base scale.
    pub min_zoom: f64,
    /// Largest on-screen magnification (`base_scale * zoom`) allowed.
    pub max_visual_zoom: f64,
    /// Lower bound for `max_zoom`, whatever the base scale.
    pub max_zoom_floor: f64,
    /// On-screen magnification a double-tap zooms in to.
    pub target_visual_zoom: f64,
    /// Lower bound for the double-tap target zoom.
    pub target_zoom_floor: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            padding: 10.0,
            min_zoom: 0.5,
            max_visual_zoom: 3.0,
            max_zoom_floor: 2.0,
            target_visual_zoom: 2.0,
            target_zoom_floor: 1.3,
        }
    }
}

impl ViewConfig {
    /// Computes the zoom limits for a given base scale.
    #[must_use]
    pub fn limits(&self, base_scale: f64) -> ZoomLimits {
        let max = (self.max_visual_zoom / base_scale).max(self.max_zoom_floor);
        let target = (self.target_visual_zoom / base_scale).max(self.target_zoom_floor);
        ZoomLimits {
            min: self.min_zoom.min(max),
            max,
            target: target.clamp(self.min_zoom.min(max), max),
        }
    }

    /// Contain-fit scale of `content` inside `container`, minus padding on
    /// both sides of each dimension.
    ///
    /// Returns `None` when the result would not be a positive finite number,
    /// for example when the container collapsed to zero size.
    #[must_use]
    pub fn fit_scale(&self, container: Size, content: Size) -> Option<f64> {
        if content.width <= 0.0 || content.height <= 0.0 {
            return None;
        }
        let sx = (container.width - self.padding * 2.0) / content.width;
        let sy = (container.height - self.padding * 2.0) / content.height;
        let scale = sx.min(sy);
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }
}

/// Zoom range and double-tap target derived from [`ViewConfig::limits`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed zoom.
    pub min: f64,
    /// Largest allowed zoom.
    pub max: f64,
    /// Zoom a double-tap on a reset view animates to.
    pub target: f64,
}

impl ZoomLimits {
    /// Clamps `zoom` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}
