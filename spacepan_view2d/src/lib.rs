// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spacepan_view2d --heading-base-level=0

//! Spacepan View 2D: viewport state and boundary policy.
//!
//! This crate holds the authoritative pan/zoom state of a viewport that shows
//! a fixed-size content node inside a resizable container. It focuses on:
//! - Contain-fit base scale with padding, recomputed on resize.
//! - Zoom limits that stay perceptually constant across container sizes.
//! - Clamped panning that never lets the content get lost off screen.
//! - Zoom about a client-space origin and anchor-preserving pinch.
//! - The Reset/Adjusted classification hosts use for styling.
//!
//! It does **not** read input or animate. Callers are expected to:
//! - Translate input into [`ViewportState`] operations (see `spacepan_input`).
//! - Ease the painted transform toward [`ViewportState::transform`] (see
//!   `spacepan_motion`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use spacepan_view2d::{ViewConfig, ViewportState};
//!
//! let container = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let mut view = ViewportState::new(container, Size::new(400.0, 250.0), ViewConfig::default());
//! assert!((view.base_scale() - 1.95).abs() < 1e-12);
//!
//! // Wheel scroll: content moves opposite to the wheel.
//! view.pan(Vec2::new(0.0, -50.0));
//! assert!(!view.is_reset());
//!
//! // Zoom about the pointer.
//! view.zoom_to(1.15, Point::new(500.0, 300.0));
//!
//! view.reset();
//! assert!(view.is_reset());
//! ```
//!
//! ## Coordinates
//!
//! - Client coordinates: the host's pointer coordinate space. The container
//!   rectangle and every zoom origin are expressed in it.
//! - Content-local coordinates: origin at the content center, unscaled
//!   content units. [`ViewTransform::to_affine`] maps them to client space.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod geometry;
mod viewport;

pub use config::{ViewConfig, ZoomLimits};
pub use viewport::{ViewSnapshot, ViewTransform, ViewportState};
