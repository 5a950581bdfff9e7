// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=spacepan_motion --heading-base-level=0

//! Spacepan Motion: interruptible easing of view transforms.
//!
//! The authoritative view (see `spacepan_view2d`) changes in discrete steps as
//! input arrives. What gets painted is a second, animated transform that
//! [`Animator`] eases toward the authoritative one, one host frame at a time.
//!
//! The crate does not own a clock or a frame loop. Hosts drive it with their
//! own timestamps:
//! - Call [`Animator::animate`] with the new target and an [`Ease`] whenever
//!   the view changes.
//! - Call [`Animator::tick`] on every frame callback while it reports
//!   [`Tick::Running`], and paint [`Animator::shown`].
//! - Call [`Animator::interrupt`] before handling new input; it stops the
//!   session and hands back the displayed transform so the next gesture
//!   starts from what the user sees.
//!
//! Sessions always terminate: every curve reaches progress `1` after a finite,
//! capped duration, at which point the animator snaps to the target and goes
//! idle.
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
pub mod ease;

pub use animator::{AnimationSession, AnimationState, Animator, Tick};
pub use ease::{Ease, EaseConfig};
