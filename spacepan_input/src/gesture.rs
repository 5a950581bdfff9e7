// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture recognition: tap vs. drag, double-tap, two-finger pinch.
//!
//! ## Sessions
//!
//! At most one pointer-driven action is active at a time. A pointer-down
//! while an action is active is ignored, except for further touch fingers,
//! which join the running touch action:
//!
//! - Pen (and, when enabled, primary-button mouse) presses start a single
//!   pointer drag.
//! - The first finger starts a touch drag. The second finger switches it to
//!   a pinch. Any further fingers are remembered only so their events can be
//!   ignored.
//!
//! A press is a *tap* until the pointer travels `tap_deadzone` pixels from
//! where it went down; only then does the view start to follow. Once a
//! session has dragged it never goes back to being a tap.
//!
//! ## Pinch
//!
//! When the second finger lands, the view is snapshotted together with the
//! finger distance and midpoint. Each move then zooms by
//! `current_distance / start_distance` relative to that snapshot and pans so
//! the content point that was under the starting midpoint stays under the
//! current midpoint. When either finger lifts, the remaining one continues as
//! a plain drag from where it is, without a jump.
//!
//! ## Cancel
//!
//! `pointercancel` restores the view to the snapshot taken when the action
//! started and ends the action. A touch action stops being cancellable once
//! a second finger has landed; a cancel after that counts as that finger
//! lifting. A cancel for a pointer the action does not track is handled like
//! any other stray release.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use spacepan_motion::Ease;
use spacepan_view2d::ViewSnapshot;
use spacepan_view2d::geometry::distance;
use tracing::{debug, trace, warn};

use crate::control::ViewControl;
use crate::double_tap::{DoubleTap, TapRecord};
use crate::event::{Buttons, DeviceType, EventKind, InputEvent, PointerId, Response, TapCategory};

/// Gesture tuning, in client pixels and milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Travel below which a press still counts as a tap.
    pub tap_deadzone: f64,
    /// Longest gap between the two presses of a double-tap.
    pub double_tap_ms: f64,
    /// Largest distance between the two presses of a double-tap.
    pub double_tap_radius: f64,
    /// Whether a primary-button mouse drag pans the view.
    pub mouse_drag: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_deadzone: 21.0,
            double_tap_ms: 400.0,
            double_tap_radius: 42.0,
            mouse_drag: false,
        }
    }
}

/// Coarse state of a [`GestureRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer-driven action.
    #[default]
    Idle,
    /// A pointer is down but has not left the tap deadzone.
    Pressed,
    /// A single pointer is dragging the view.
    Dragging,
    /// Two fingers are pinching.
    Pinching,
}

impl GesturePhase {
    /// Whether the view is following a pointer.
    #[must_use]
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Dragging | Self::Pinching)
    }
}

#[derive(Clone, Copy, Debug)]
struct Finger {
    id: PointerId,
    position: Point,
}

#[derive(Clone, Debug)]
struct DragSession {
    pointer_id: PointerId,
    device: DeviceType,
    /// Pointer position the current drag is measured from.
    start: Point,
    /// Translation at `start`.
    from: Vec2,
    /// View when the action began; restored on cancel.
    snapshot: ViewSnapshot,
    is_tap: bool,
}

impl DragSession {
    fn begin(pointer_id: PointerId, device: DeviceType, position: Point, view: &impl ViewControl) -> Self {
        Self {
            pointer_id,
            device,
            start: position,
            from: view.translate(),
            snapshot: view.snapshot(),
            is_tap: true,
        }
    }

    /// Measures further movement from `anchor` and the current translation.
    fn rebase(&mut self, anchor: Point, view: &impl ViewControl) {
        self.start = anchor;
        self.from = view.translate();
    }

    fn drag_to<T: PartialEq>(
        &mut self,
        position: Point,
        config: &GestureConfig,
        taps: &mut DoubleTap<T>,
        view: &mut impl ViewControl,
    ) {
        let ease = if self.is_tap {
            if distance(position, self.start) < config.tap_deadzone {
                return;
            }
            self.is_tap = false;
            taps.forget();
            debug!(pointer_id = self.pointer_id, device = ?self.device, "drag started");
            Ease::Fast
        } else {
            Ease::Least
        };
        view.set_translate(self.from + (position - self.start));
        view.animate(ease);
    }

    fn cancel<T: PartialEq>(&self, taps: &mut DoubleTap<T>, view: &mut impl ViewControl) {
        taps.forget();
        view.restore(&self.snapshot);
        view.animate(Ease::Fast);
        debug!(pointer_id = self.pointer_id, device = ?self.device, "gesture cancelled");
    }
}

#[derive(Clone, Debug)]
struct SecondFinger {
    finger: Finger,
    start_distance: f64,
    view_start: ViewSnapshot,
}

enum Lift {
    Remaining,
    Ended,
    Untracked,
}

#[derive(Clone, Debug)]
struct TouchAction {
    session: DragSession,
    first: Finger,
    second: Option<SecondFinger>,
    extra: SmallVec<[PointerId; 4]>,
    /// Cleared once a second finger joins.
    cancelable: bool,
}

impl TouchAction {
    fn new(session: DragSession) -> Self {
        let first = Finger {
            id: session.pointer_id,
            position: session.start,
        };
        Self {
            session,
            first,
            second: None,
            extra: SmallVec::new(),
            cancelable: true,
        }
    }

    fn is_tracked(&self, id: PointerId) -> bool {
        id == self.first.id
            || self.second.as_ref().is_some_and(|s| s.finger.id == id)
            || self.extra.contains(&id)
    }

    fn add_finger<T: PartialEq>(
        &mut self,
        id: PointerId,
        position: Point,
        taps: &mut DoubleTap<T>,
        view: &mut impl ViewControl,
    ) {
        if self.is_tracked(id) {
            return;
        }
        if self.second.is_some() {
            self.extra.push(id);
            trace!(pointer_id = id, "extra finger ignored");
            return;
        }
        view.interrupt();
        self.session.is_tap = false;
        self.cancelable = false;
        taps.forget();
        self.session
            .rebase(self.first.position.midpoint(position), &*view);
        self.second = Some(SecondFinger {
            finger: Finger { id, position },
            start_distance: distance(self.first.position, position),
            view_start: view.snapshot(),
        });
        debug!(pointer_id = id, "pinch started");
    }

    fn track<T: PartialEq>(
        &mut self,
        id: PointerId,
        position: Point,
        config: &GestureConfig,
        taps: &mut DoubleTap<T>,
        view: &mut impl ViewControl,
    ) -> Response {
        if id == self.first.id {
            self.first.position = position;
        } else if let Some(second) = self.second.as_mut().filter(|s| s.finger.id == id) {
            second.finger.position = position;
        } else if self.is_tracked(id) {
            return Response::Ignored;
        } else {
            // A finger whose press was delivered elsewhere.
            self.add_finger(id, position, taps, view);
            return Response::Captured;
        }
        match &self.second {
            Some(second) => {
                let factor = if second.start_distance > 0.0 {
                    distance(self.first.position, second.finger.position) / second.start_distance
                } else {
                    1.0
                };
                view.manipulate(
                    &second.view_start,
                    self.session.start,
                    factor,
                    self.first.position.midpoint(second.finger.position),
                );
                view.animate(Ease::Least);
            }
            None => self.session.drag_to(position, config, taps, view),
        }
        Response::Captured
    }

    fn lift(&mut self, id: PointerId, view: &impl ViewControl) -> Lift {
        if self.second.as_ref().is_some_and(|s| s.finger.id == id) {
            self.second = None;
        } else if id == self.first.id {
            match self.second.take() {
                Some(second) => self.first = second.finger,
                None => return Lift::Ended,
            }
        } else if let Some(index) = self.extra.iter().position(|&e| e == id) {
            self.extra.swap_remove(index);
            return Lift::Remaining;
        } else {
            return Lift::Untracked;
        }
        self.session.rebase(self.first.position, view);
        debug!(pointer_id = self.first.id, "pinch ended, dragging with remaining finger");
        Lift::Remaining
    }
}

#[derive(Clone, Debug)]
enum Action {
    /// Pen or mouse.
    Drag(DragSession),
    Touch(TouchAction),
}

/// Turns pointer events into view operations.
///
/// The recognizer only keeps gesture state; the view is driven through
/// [`ViewControl`]. Hosts feed it every pointer event together with the
/// [`TapCategory`] of the event target (only consulted on pointer-down).
#[derive(Clone, Debug)]
pub struct GestureRecognizer<T> {
    config: GestureConfig,
    action: Option<Action>,
    taps: DoubleTap<T>,
}

impl<T: Clone + PartialEq> GestureRecognizer<T> {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            action: None,
            taps: DoubleTap::new(config.double_tap_ms, config.double_tap_radius),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the coarse state.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match &self.action {
            None => GesturePhase::Idle,
            Some(Action::Touch(touch)) if touch.second.is_some() => GesturePhase::Pinching,
            Some(Action::Drag(session) | Action::Touch(TouchAction { session, .. })) => {
                if session.is_tap {
                    GesturePhase::Pressed
                } else {
                    GesturePhase::Dragging
                }
            }
        }
    }

    /// Dispatches a pointer event. Wheel events are [`Response::Ignored`].
    pub fn handle(
        &mut self,
        event: &InputEvent<T>,
        tap: TapCategory,
        view: &mut impl ViewControl,
    ) -> Response {
        match event.kind {
            EventKind::PointerDown => self.pointer_down(event, tap, view),
            EventKind::PointerMove => self.pointer_move(event, view),
            EventKind::PointerUp => self.pointer_end(event, false, view),
            EventKind::PointerCancel => self.pointer_end(event, true, view),
            EventKind::Wheel(_) => Response::Ignored,
        }
    }

    /// Starts a session, adds a finger, or completes a double-tap.
    pub fn pointer_down(
        &mut self,
        event: &InputEvent<T>,
        tap: TapCategory,
        view: &mut impl ViewControl,
    ) -> Response {
        let Self {
            config,
            action,
            taps,
        } = self;
        if let Some(current) = action {
            return match current {
                Action::Touch(touch) if event.device == DeviceType::Touch => {
                    touch.add_finger(event.pointer_id, event.position, taps, view);
                    Response::Captured
                }
                _ => {
                    trace!(pointer_id = event.pointer_id, "pointer down during active gesture ignored");
                    Response::Ignored
                }
            };
        }
        match event.device {
            DeviceType::Unknown => {
                warn!(pointer_id = event.pointer_id, "pointer down from unknown device ignored");
                Response::Ignored
            }
            DeviceType::Mouse
                if !config.mouse_drag || !event.buttons.contains(Buttons::PRIMARY) =>
            {
                Response::Ignored
            }
            DeviceType::Mouse => {
                view.interrupt();
                *action = Some(Action::Drag(DragSession::begin(
                    event.pointer_id,
                    event.device,
                    event.position,
                    &*view,
                )));
                Response::Captured
            }
            DeviceType::Pen | DeviceType::Touch => {
                view.interrupt();
                let record = TapRecord {
                    time: event.timestamp,
                    device: event.device,
                    position: event.position,
                    target: event.target.clone(),
                    category: tap,
                };
                if taps.check(record) {
                    debug!(device = ?event.device, reset = view.is_reset(), "double tap");
                    if view.is_reset() {
                        view.zoom_in(event.position);
                    } else {
                        view.reset();
                    }
                    view.animate(Ease::Slow);
                    return Response::Captured;
                }
                let session =
                    DragSession::begin(event.pointer_id, event.device, event.position, &*view);
                *action = Some(if event.device == DeviceType::Touch {
                    Action::Touch(TouchAction::new(session))
                } else {
                    Action::Drag(session)
                });
                Response::Captured
            }
        }
    }

    /// Drags or pinches.
    pub fn pointer_move(&mut self, event: &InputEvent<T>, view: &mut impl ViewControl) -> Response {
        let Self {
            config,
            action,
            taps,
        } = self;
        match action {
            None => Response::Ignored,
            Some(Action::Drag(session)) => {
                if event.device != session.device || event.pointer_id != session.pointer_id {
                    return Response::Ignored;
                }
                session.drag_to(event.position, config, taps, view);
                Response::Captured
            }
            Some(Action::Touch(touch)) => {
                if event.device != DeviceType::Touch {
                    return Response::Ignored;
                }
                touch.track(event.pointer_id, event.position, config, taps, view)
            }
        }
    }

    /// Ends (or, with `cancelled`, rolls back) the session the pointer
    /// belongs to.
    pub fn pointer_end(
        &mut self,
        event: &InputEvent<T>,
        cancelled: bool,
        view: &mut impl ViewControl,
    ) -> Response {
        let Self { action, taps, .. } = self;
        let Some(current) = action.as_mut() else {
            return Response::Ignored;
        };
        let response = match current {
            Action::Drag(session) => {
                if event.device != session.device {
                    return Response::Ignored;
                }
                if event.pointer_id != session.pointer_id {
                    warn!(pointer_id = event.pointer_id, "release of untracked pointer, ending gesture");
                    taps.forget();
                    *action = None;
                    return Response::Ignored;
                }
                if cancelled {
                    session.cancel(taps, view);
                }
                Response::Captured
            }
            Action::Touch(touch) => {
                if event.device != DeviceType::Touch {
                    return Response::Ignored;
                }
                if cancelled && touch.cancelable && touch.is_tracked(event.pointer_id) {
                    touch.session.cancel(taps, view);
                    Response::Captured
                } else {
                    match touch.lift(event.pointer_id, &*view) {
                        Lift::Remaining => return Response::Captured,
                        Lift::Ended => Response::Captured,
                        Lift::Untracked => {
                            warn!(
                                pointer_id = event.pointer_id,
                                cancelled,
                                "release of untracked finger, ending gesture"
                            );
                            taps.forget();
                            Response::Ignored
                        }
                    }
                }
            }
        };
        trace!(pointer_id = event.pointer_id, cancelled, "gesture ended");
        *action = None;
        response
    }

    /// Drops the active session and the remembered tap without touching the
    /// view.
    pub fn abort(&mut self) {
        self.action = None;
        self.taps.forget();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use spacepan_motion::Ease;

    use super::{GestureConfig, GesturePhase, GestureRecognizer};
    use crate::event::{Buttons, DeviceType, EventKind, InputEvent, Response, TapCategory};
    use crate::testing::{FakeView, assert_close};

    type Event = InputEvent<&'static str>;

    fn ev(kind: EventKind, device: DeviceType, id: i64, x: f64, y: f64, t: f64) -> Event {
        InputEvent::pointer(kind, device, id, Point::new(x, y), t).with_target("content")
    }

    fn recognizer() -> GestureRecognizer<&'static str> {
        GestureRecognizer::new(GestureConfig::default())
    }

    fn tap(g: &mut GestureRecognizer<&'static str>, view: &mut FakeView, device: DeviceType, x: f64, y: f64, t: f64) {
        g.handle(&ev(EventKind::PointerDown, device, 1, x, y, t), TapCategory::Normal, view);
        g.handle(&ev(EventKind::PointerUp, device, 1, x, y, t + 50.0), TapCategory::Normal, view);
    }

    #[test]
    fn pen_drag_waits_for_deadzone() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        let down = ev(EventKind::PointerDown, DeviceType::Pen, 1, 100.0, 100.0, 0.0);
        assert_eq!(g.handle(&down, TapCategory::Normal, &mut view), Response::Captured);
        assert_eq!(g.phase(), GesturePhase::Pressed);
        assert_eq!(view.interrupts, 1);

        g.pointer_move(&ev(EventKind::PointerMove, DeviceType::Pen, 1, 110.0, 100.0, 10.0), &mut view);
        assert_eq!(view.state.translate(), Vec2::ZERO);
        assert!(view.eases.is_empty());

        g.pointer_move(&ev(EventKind::PointerMove, DeviceType::Pen, 1, 130.0, 100.0, 20.0), &mut view);
        assert_eq!(g.phase(), GesturePhase::Dragging);
        assert_eq!(view.state.translate(), Vec2::new(30.0, 0.0));
        assert_eq!(view.last_ease(), Some(Ease::Fast));

        g.pointer_move(&ev(EventKind::PointerMove, DeviceType::Pen, 1, 140.0, 90.0, 30.0), &mut view);
        assert_eq!(view.state.translate(), Vec2::new(40.0, -10.0));
        assert_eq!(view.last_ease(), Some(Ease::Least));

        let up = ev(EventKind::PointerUp, DeviceType::Pen, 1, 140.0, 90.0, 40.0);
        assert_eq!(g.handle(&up, TapCategory::Normal, &mut view), Response::Captured);
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert!(!view.state.is_reset());
    }

    #[test]
    fn mouse_drag_is_opt_in() {
        let mut view = FakeView::new();
        let mut g = recognizer();
        let down = ev(EventKind::PointerDown, DeviceType::Mouse, 1, 100.0, 100.0, 0.0);
        assert_eq!(g.handle(&down, TapCategory::Normal, &mut view), Response::Ignored);
        assert_eq!(g.phase(), GesturePhase::Idle);

        let mut g = GestureRecognizer::new(GestureConfig {
            mouse_drag: true,
            ..GestureConfig::default()
        });
        let right = down.clone().with_buttons(Buttons::SECONDARY);
        assert_eq!(g.handle(&right, TapCategory::Normal, &mut view), Response::Ignored);
        assert_eq!(g.handle(&down, TapCategory::Normal, &mut view), Response::Captured);
        g.pointer_move(&ev(EventKind::PointerMove, DeviceType::Mouse, 1, 100.0, 160.0, 10.0), &mut view);
        assert_eq!(view.state.translate(), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn unknown_device_is_ignored() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        let down = ev(EventKind::PointerDown, DeviceType::Unknown, 1, 100.0, 100.0, 0.0);
        assert_eq!(g.handle(&down, TapCategory::Normal, &mut view), Response::Ignored);
        assert_eq!(g.phase(), GesturePhase::Idle);
        assert_eq!(view.interrupts, 0);
    }

    #[test]
    fn double_tap_zooms_in_then_resets() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        tap(&mut g, &mut view, DeviceType::Pen, 200.0, 200.0, 0.0);
        tap(&mut g, &mut view, DeviceType::Pen, 205.0, 200.0, 200.0);
        assert!(!view.state.is_reset());
        assert_close(view.state.zoom(), 1.3);
        assert_eq!(view.last_ease(), Some(Ease::Slow));
        assert_eq!(g.phase(), GesturePhase::Idle);

        tap(&mut g, &mut view, DeviceType::Pen, 300.0, 300.0, 1_000.0);
        tap(&mut g, &mut view, DeviceType::Pen, 300.0, 300.0, 1_200.0);
        assert!(view.state.is_reset());
        assert_eq!(view.state.zoom(), 1.0);
    }

    #[test]
    fn drag_forgets_pending_tap() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 200.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 2, 260.0, 200.0, 20.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerUp, DeviceType::Touch, 2, 260.0, 200.0, 40.0), TapCategory::Normal, &mut view);
        view.state.reset();
        // Close in time and space to the press that became a drag.
        tap(&mut g, &mut view, DeviceType::Touch, 200.0, 200.0, 200.0);
        assert!(view.state.is_reset());
        assert_eq!(view.state.zoom(), 1.0);
    }

    #[test]
    fn pinch_zooms_about_finger_midpoint() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        let anchor = view.state.client_to_content_point(Point::new(150.0, 100.0));

        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 100.0, 5.0), TapCategory::Normal, &mut view);
        assert_eq!(g.phase(), GesturePhase::Pinching);

        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 1, 100.0, 150.0, 20.0), TapCategory::Normal, &mut view);
        assert_close(view.state.zoom(), 1.25_f64.sqrt());
        assert_eq!(view.last_ease(), Some(Ease::Least));
        let under_fingers = view.state.client_to_content_point(Point::new(150.0, 125.0));
        assert_close(under_fingers.x, anchor.x);
        assert_close(under_fingers.y, anchor.y);
    }

    #[test]
    fn pinch_keeps_anchor_pinned_across_moves() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        let anchor = view.state.client_to_content_point(Point::new(150.0, 100.0));

        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 100.0, 5.0), TapCategory::Normal, &mut view);

        let mut first = Point::new(100.0, 100.0);
        let mut second = Point::new(200.0, 100.0);
        for step in 1..=4 {
            let k = f64::from(step);
            let t = 10.0 * k;
            first = Point::new(100.0 - 5.0 * k, 100.0 + 5.0 * k);
            g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 1, first.x, first.y, t), TapCategory::Normal, &mut view);
            let pinned = view.state.client_to_content_point(first.midpoint(second));
            assert_close(pinned.x, anchor.x);
            assert_close(pinned.y, anchor.y);

            second = Point::new(200.0 + 5.0 * k, 100.0 + 10.0 * k);
            g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 2, second.x, second.y, t + 5.0), TapCategory::Normal, &mut view);
            let pinned = view.state.client_to_content_point(first.midpoint(second));
            assert_close(pinned.x, anchor.x);
            assert_close(pinned.y, anchor.y);
            assert_close(view.state.zoom(), first.distance(second) / 100.0);
        }
    }

    #[test]
    fn lifting_a_finger_continues_without_jump() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 100.0, 5.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 1, 100.0, 150.0, 20.0), TapCategory::Normal, &mut view);
        let pinched = view.state.transform();

        g.handle(&ev(EventKind::PointerUp, DeviceType::Touch, 1, 100.0, 150.0, 30.0), TapCategory::Normal, &mut view);
        assert_eq!(g.phase(), GesturePhase::Dragging);
        assert_eq!(view.state.transform(), pinched);

        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 2, 210.0, 100.0, 40.0), TapCategory::Normal, &mut view);
        let moved = view.state.translate() - pinched.translate;
        assert_close(moved.x, 10.0);
        assert_close(moved.y, 0.0);
        assert_eq!(view.state.zoom(), pinched.zoom);

        g.handle(&ev(EventKind::PointerUp, DeviceType::Touch, 2, 210.0, 100.0, 50.0), TapCategory::Normal, &mut view);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 100.0, 5.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 3, 300.0, 300.0, 6.0), TapCategory::Normal, &mut view);
        let before = view.state.transform();
        let third = ev(EventKind::PointerMove, DeviceType::Touch, 3, 500.0, 500.0, 10.0);
        assert_eq!(g.pointer_move(&third, &mut view), Response::Ignored);
        assert_eq!(view.state.transform(), before);
        g.handle(&ev(EventKind::PointerUp, DeviceType::Touch, 3, 500.0, 500.0, 12.0), TapCategory::Normal, &mut view);
        assert_eq!(g.phase(), GesturePhase::Pinching);
    }

    #[test]
    fn other_devices_cannot_join_a_session() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Pen, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        let touch = ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 100.0, 5.0);
        assert_eq!(g.handle(&touch, TapCategory::Normal, &mut view), Response::Ignored);
        let pen2 = ev(EventKind::PointerDown, DeviceType::Pen, 7, 200.0, 100.0, 5.0);
        assert_eq!(g.handle(&pen2, TapCategory::Normal, &mut view), Response::Ignored);
        assert_eq!(g.phase(), GesturePhase::Pressed);
    }

    #[test]
    fn cancel_rolls_back_drag() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Pen, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerMove, DeviceType::Pen, 1, 200.0, 100.0, 10.0), TapCategory::Normal, &mut view);
        assert!(!view.state.is_reset());
        g.handle(&ev(EventKind::PointerCancel, DeviceType::Pen, 1, 200.0, 100.0, 20.0), TapCategory::Normal, &mut view);
        assert_eq!(view.state.translate(), Vec2::ZERO);
        assert!(view.state.is_reset());
        assert_eq!(view.last_ease(), Some(Ease::Fast));
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn cancel_rolls_back_single_finger_drag() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 1, 200.0, 100.0, 10.0), TapCategory::Normal, &mut view);
        assert_eq!(view.state.translate(), Vec2::new(100.0, 0.0));
        let cancel = ev(EventKind::PointerCancel, DeviceType::Touch, 1, 200.0, 100.0, 20.0);
        assert_eq!(g.handle(&cancel, TapCategory::Normal, &mut view), Response::Captured);
        assert_eq!(view.state.translate(), Vec2::ZERO);
        assert!(view.state.is_reset());
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn cancel_after_pinch_lifts_the_finger() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 2, 200.0, 100.0, 5.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 2, 300.0, 100.0, 20.0), TapCategory::Normal, &mut view);
        let pinched = view.state.transform();
        assert!(pinched.zoom > 1.5);

        let cancel = ev(EventKind::PointerCancel, DeviceType::Touch, 2, 300.0, 100.0, 30.0);
        assert_eq!(g.handle(&cancel, TapCategory::Normal, &mut view), Response::Captured);
        assert_eq!(view.state.transform(), pinched);
        assert_eq!(g.phase(), GesturePhase::Dragging);

        let next = ev(EventKind::PointerMove, DeviceType::Touch, 1, 120.0, 100.0, 40.0);
        assert_eq!(g.handle(&next, TapCategory::Normal, &mut view), Response::Captured);
        let moved = view.state.translate() - pinched.translate;
        assert_close(moved.x, 20.0);
        assert_close(moved.y, 0.0);
        assert_eq!(view.state.zoom(), pinched.zoom);
    }

    #[test]
    fn stray_cancel_keeps_the_dragged_view() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Touch, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        g.handle(&ev(EventKind::PointerMove, DeviceType::Touch, 1, 200.0, 100.0, 10.0), TapCategory::Normal, &mut view);
        let eases = view.eases.len();

        let stray = ev(EventKind::PointerCancel, DeviceType::Touch, 99, 200.0, 100.0, 20.0);
        assert_eq!(g.handle(&stray, TapCategory::Normal, &mut view), Response::Ignored);
        assert_eq!(view.state.translate(), Vec2::new(100.0, 0.0));
        assert_eq!(view.eases.len(), eases);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_of_unknown_pointer_ends_session() {
        let mut g = recognizer();
        let mut view = FakeView::new();
        g.handle(&ev(EventKind::PointerDown, DeviceType::Pen, 1, 100.0, 100.0, 0.0), TapCategory::Normal, &mut view);
        let stray = ev(EventKind::PointerUp, DeviceType::Pen, 9, 100.0, 100.0, 5.0);
        assert_eq!(g.handle(&stray, TapCategory::Normal, &mut view), Response::Ignored);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }
}
