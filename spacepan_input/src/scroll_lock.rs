// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Who currently owns the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollOwner {
    /// Nobody; the next event decides.
    #[default]
    None,
    /// The viewport pans or zooms.
    Viewport,
    /// A scrollable element inside the content scrolls natively.
    Nested,
}

/// Arbitrates wheel events between the viewport and scrollable content.
///
/// Whoever receives the first event of a burst keeps the wheel until no
/// event arrived for `hold_ms`. This stops a pan from turning into a nested
/// scroll (or the other way around) when the content moves under a
/// stationary pointer.
#[derive(Clone, Debug)]
pub struct ScrollLock {
    hold_ms: f64,
    owner: ScrollOwner,
    last_time: f64,
}

impl ScrollLock {
    /// Creates an unowned lock.
    #[must_use]
    pub fn new(hold_ms: f64) -> Self {
        Self {
            hold_ms,
            owner: ScrollOwner::None,
            last_time: f64::NEG_INFINITY,
        }
    }

    /// Owner at time `now`, after expiring a stale claim.
    #[must_use]
    pub fn owner(&self, now: f64) -> ScrollOwner {
        if now - self.last_time > self.hold_ms {
            ScrollOwner::None
        } else {
            self.owner
        }
    }

    /// Decides who handles a wheel event at `now` and renews the claim.
    ///
    /// Zoom-modifier events always go to the viewport. Otherwise an existing
    /// claim wins; an unowned wheel goes to nested content when the pointer
    /// is over a scrollable element.
    pub fn route(&mut self, now: f64, over_scrollable: bool, modifier_zoom: bool) -> ScrollOwner {
        let owner = if modifier_zoom {
            ScrollOwner::Viewport
        } else {
            match self.owner(now) {
                ScrollOwner::None if over_scrollable => ScrollOwner::Nested,
                ScrollOwner::None => ScrollOwner::Viewport,
                claimed => claimed,
            }
        };
        self.owner = owner;
        self.last_time = now;
        owner
    }

    /// Drops any claim.
    pub fn release(&mut self) {
        self.owner = ScrollOwner::None;
        self.last_time = f64::NEG_INFINITY;
    }
}
