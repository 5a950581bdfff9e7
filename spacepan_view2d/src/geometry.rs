// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small geometry helpers shared by the viewport, gesture and animation code.
//!
//! Values coming out of pan/zoom math are never compared with `==`. Every
//! comparison goes through [`ApproxEq`], which scales [`f64::EPSILON`] by the
//! expected magnitude of the operands. This is the tolerance used for
//! animation convergence and for deciding whether an operation changed the
//! view at all.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::{Point, Vec2};

/// Approximate equality with a magnitude-scaled epsilon.
pub trait ApproxEq {
    /// Returns `true` if `self` and `other` differ by less than
    /// `f64::EPSILON * magnitude` on every component.
    ///
    /// `magnitude` should approximate the largest absolute value involved. It
    /// is floored at `1.0` so values near zero still get a usable tolerance.
    fn approx_eq(&self, other: &Self, magnitude: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, magnitude: f64) -> bool {
        (self - other).abs() < f64::EPSILON * magnitude.abs().max(1.0)
    }
}

impl ApproxEq for Point {
    fn approx_eq(&self, other: &Self, magnitude: f64) -> bool {
        self.x.approx_eq(&other.x, magnitude) && self.y.approx_eq(&other.y, magnitude)
    }
}

impl ApproxEq for Vec2 {
    fn approx_eq(&self, other: &Self, magnitude: f64) -> bool {
        self.x.approx_eq(&other.x, magnitude) && self.y.approx_eq(&other.y, magnitude)
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

/// Clamps each component of `v` into `[-bound, bound]`.
///
/// Negative bounds are treated as zero.
#[must_use]
pub fn clamp_symmetric(v: Vec2, bound: Vec2) -> Vec2 {
    let bx = bound.x.max(0.0);
    let by = bound.y.max(0.0);
    Vec2::new(v.x.clamp(-bx, bx), v.y.clamp(-by, by))
}

/// Largest absolute component of a vector, used as the `magnitude` hint for
/// [`ApproxEq`].
#[must_use]
pub fn magnitude_hint(a: Vec2, b: Vec2) -> f64 {
    a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs())
}
