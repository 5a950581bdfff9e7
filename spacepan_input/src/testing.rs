// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-crate fake for [`ViewControl`].

extern crate std;

use std::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use spacepan_motion::Ease;
use spacepan_view2d::{ViewConfig, ViewSnapshot, ViewportState};

use crate::ViewControl;

/// `ViewportState` plus a log of what the input code asked for.
#[derive(Debug)]
pub(crate) struct FakeView {
    pub(crate) state: ViewportState,
    pub(crate) eases: Vec<Ease>,
    pub(crate) interrupts: usize,
}

impl FakeView {
    /// 800x600 container at the origin showing 400x250 content
    /// (base scale 1.95).
    pub(crate) fn new() -> Self {
        Self {
            state: ViewportState::new(
                Rect::new(0.0, 0.0, 800.0, 600.0),
                Size::new(400.0, 250.0),
                ViewConfig::default(),
            ),
            eases: Vec::new(),
            interrupts: 0,
        }
    }

    pub(crate) fn last_ease(&self) -> Option<Ease> {
        self.eases.last().copied()
    }
}

impl ViewControl for FakeView {
    fn interrupt(&mut self) {
        self.interrupts += 1;
    }

    fn translate(&self) -> Vec2 {
        self.state.translate()
    }

    fn zoom(&self) -> f64 {
        self.state.zoom()
    }

    fn snapshot(&self) -> ViewSnapshot {
        self.state.snapshot()
    }

    fn restore(&mut self, snapshot: &ViewSnapshot) {
        self.state.restore(snapshot);
    }

    fn set_translate(&mut self, translate: Vec2) {
        self.state.set_translate(translate);
    }

    fn pan(&mut self, delta: Vec2) {
        self.state.pan(delta);
    }

    fn zoom_to(&mut self, factor: f64, origin: Point) {
        self.state.zoom_to(factor, origin);
    }

    fn zoom_in(&mut self, origin: Point) {
        self.state.zoom_in_at(origin);
    }

    fn manipulate(&mut self, from: &ViewSnapshot, anchor_start: Point, factor: f64, anchor_now: Point) {
        self.state.manipulate(from, anchor_start, factor, anchor_now);
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn is_reset(&self) -> bool {
        self.state.is_reset()
    }

    fn set_reset(&mut self, is_reset: bool) {
        self.state.set_reset(is_reset);
    }

    fn animate(&mut self, ease: Ease) {
        self.eases.push(ease);
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
