// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spacepan_input --heading-base-level=0

//! Spacepan Input: turn raw wheel and pointer events into view operations.
//!
//! This crate contains the input state machines of a pan/zoom viewport. They
//! are independent of any windowing system and of the viewport itself:
//! - [`WheelClassifier`]: tells notched mouse wheels from trackpads and turns
//!   wheel events into pans or modifier zooms.
//! - [`ScrollLock`]: decides whether a wheel burst belongs to the viewport or
//!   to scrollable content inside it.
//! - [`GestureRecognizer`]: pen, touch and (optionally) mouse drags,
//!   double-tap, two-finger pinch, and cancellation.
//! - [`DoubleTap`]: double-tap detection with per-element
//!   [`TapCategory`] rules.
//!
//! The state machines act on the view through the [`ViewControl`] trait and
//! never touch a clock: timestamps come with the events.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use spacepan_input::{ViewControl, WheelClassifier, WheelConfig, WheelDelta};
//! use spacepan_motion::Ease;
//! use spacepan_view2d::{ViewConfig, ViewSnapshot, ViewportState};
//!
//! // Drive a bare viewport; a real host would also animate.
//! struct Bare(ViewportState);
//!
//! impl ViewControl for Bare {
//!     fn interrupt(&mut self) {}
//!     fn translate(&self) -> Vec2 { self.0.translate() }
//!     fn zoom(&self) -> f64 { self.0.zoom() }
//!     fn snapshot(&self) -> ViewSnapshot { self.0.snapshot() }
//!     fn restore(&mut self, s: &ViewSnapshot) { self.0.restore(s) }
//!     fn set_translate(&mut self, t: Vec2) { self.0.set_translate(t); }
//!     fn pan(&mut self, d: Vec2) { self.0.pan(d); }
//!     fn zoom_to(&mut self, f: f64, o: Point) { self.0.zoom_to(f, o) }
//!     fn zoom_in(&mut self, o: Point) { self.0.zoom_in_at(o) }
//!     fn manipulate(&mut self, from: &ViewSnapshot, a: Point, f: f64, b: Point) {
//!         self.0.manipulate(from, a, f, b)
//!     }
//!     fn reset(&mut self) { self.0.reset() }
//!     fn is_reset(&self) -> bool { self.0.is_reset() }
//!     fn set_reset(&mut self, r: bool) { self.0.set_reset(r) }
//!     fn animate(&mut self, _: Ease) {}
//! }
//!
//! let container = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let mut view = Bare(ViewportState::new(container, Size::new(400.0, 250.0), ViewConfig::default()));
//! let mut wheel = WheelClassifier::new(WheelConfig::default());
//!
//! wheel.handle(WheelDelta::pixels(0.0, 120.0), Point::new(400.0, 300.0), false, 0.0, &mut view);
//! assert_eq!(view.0.translate(), Vec2::new(0.0, -50.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod control;
mod double_tap;
pub mod event;
mod gesture;
mod scroll_lock;
#[cfg(test)]
mod testing;
mod wheel;

pub use control::ViewControl;
pub use double_tap::{DoubleTap, TapRecord};
pub use event::{
    Buttons, DeltaMode, DeviceType, EventKind, InputEvent, PointerId, Response, TapCategory,
    TargetTraits, WheelDelta,
};
pub use gesture::{GestureConfig, GesturePhase, GestureRecognizer};
pub use scroll_lock::{ScrollLock, ScrollOwner};
pub use wheel::{AxisSample, WheelClassifier, WheelConfig, WheelKind, WheelSample};
