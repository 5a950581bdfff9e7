// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spacepan --heading-base-level=0

//! Spacepan: a headless pan/zoom viewport controller for infinite-canvas UIs.
//!
//! A [`Controller`] shows fixed-size content inside a resizable container.
//! It fits the content with padding, lets the user pan and zoom it with
//! wheels, trackpads, pens and touch, keeps it from getting lost off screen,
//! and eases every change. It never renders; a [`ViewportHost`] applies the
//! results.
//!
//! The building blocks live in their own crates and are re-exported here:
//! - `spacepan_view2d`: viewport state, fitting and clamping.
//! - `spacepan_motion`: interruptible easing.
//! - `spacepan_input`: wheel classification and gesture recognition.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use spacepan::{Controller, ControllerConfig, ViewportHost};
//! use spacepan::input::{InputEvent, TargetTraits, WheelDelta};
//! use spacepan::view2d::ViewTransform;
//!
//! #[derive(Default)]
//! struct Host {
//!     shown: ViewTransform,
//!     frames: usize,
//! }
//!
//! impl ViewportHost for Host {
//!     type Target = u32;
//!     fn container_rect(&self) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 800.0, 600.0)) }
//!     fn content_size(&self) -> Option<Size> { Some(Size::new(400.0, 250.0)) }
//!     fn target_traits(&self, _: &u32) -> TargetTraits { TargetTraits::default() }
//!     fn attach(&mut self) {}
//!     fn detach(&mut self) {}
//!     fn apply_base_scale(&mut self, _: f64) {}
//!     fn apply_transform(&mut self, t: ViewTransform) { self.shown = t; }
//!     fn reset_changed(&mut self, _: bool) {}
//!     fn request_frame(&mut self) { self.frames += 1; }
//! }
//!
//! let mut viewport = Controller::new(Host::default(), ControllerConfig::default()).unwrap();
//! let wheel = InputEvent::wheel(WheelDelta::pixels(0.0, 120.0), Point::new(400.0, 300.0), 0.0);
//! viewport.handle_event(&wheel);
//! assert!(!viewport.is_reset());
//!
//! // Drive frames until the animation settles.
//! let mut now = 0.0;
//! while viewport.frame(now) {
//!     now += 16.0;
//! }
//! assert_eq!(viewport.host().shown.translate.y, -50.0);
//! ```
//!
//! ## Logging
//!
//! The crates log through `tracing`: `warn!` for ignored bad input
//! (unknown devices, degenerate sizes, stray pointer releases), `debug!` for
//! gesture and lifecycle transitions, `trace!` for per-event wheel
//! classification. Install any subscriber to see them.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod error;
mod host;

pub use controller::{Controller, ControllerConfig};
pub use error::ControllerError;
pub use host::ViewportHost;

pub use spacepan_input as input;
pub use spacepan_motion as motion;
pub use spacepan_view2d as view2d;
