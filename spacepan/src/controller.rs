// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};
use spacepan_input::{
    EventKind, GestureConfig, GesturePhase, GestureRecognizer, InputEvent, Response, ScrollLock,
    ScrollOwner, TargetTraits, ViewControl, WheelClassifier, WheelConfig, WheelDelta,
};
use spacepan_motion::{Animator, Ease, EaseConfig, Tick};
use spacepan_view2d::{ViewConfig, ViewSnapshot, ViewTransform, ViewportState};
use tracing::{debug, trace, warn};

use crate::error::ControllerError;
use crate::host::ViewportHost;

/// All tunables of a [`Controller`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControllerConfig {
    /// Fitting, padding and zoom limits.
    pub view: ViewConfig,
    /// Wheel classification and nested-scroll hold.
    pub wheel: WheelConfig,
    /// Tap, double-tap and drag thresholds.
    pub gesture: GestureConfig,
    /// Animation durations.
    pub ease: EaseConfig,
}

/// Authoritative state, animator and host, driven through [`ViewControl`].
struct ViewCore<H> {
    host: H,
    state: ViewportState,
    animator: Animator,
    /// Latest host timestamp seen (event or frame), in milliseconds.
    now: f64,
    frame_pending: bool,
    reported_reset: bool,
}

impl<H: ViewportHost> ViewCore<H> {
    /// Follows the container if the page moved it.
    fn track_container(&mut self) {
        if let Some(rect) = self.host.container_rect() {
            self.state.set_container_origin(rect.origin());
        }
    }

    fn report_reset(&mut self) {
        let is_reset = self.state.is_reset();
        if is_reset != self.reported_reset {
            self.reported_reset = is_reset;
            self.host.reset_changed(is_reset);
        }
    }

    fn present(&mut self) {
        self.host.apply_transform(self.animator.shown());
    }

    fn schedule(&mut self) {
        if !self.frame_pending {
            self.frame_pending = true;
            self.host.request_frame();
        }
    }
}

impl<H: ViewportHost> ViewControl for ViewCore<H> {
    fn interrupt(&mut self) {
        if let Some(shown) = self.animator.interrupt() {
            self.state.adopt(shown);
            self.report_reset();
        }
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
        self.report_reset();
        match self.animator.animate(self.now, self.state.transform(), ease) {
            Tick::Settled => self.present(),
            Tick::Running => self.schedule(),
        }
    }
}

/// Pan/zoom controller for one container/content pair.
///
/// The controller owns its [`ViewportHost`] and is driven entirely by the
/// host's calls:
/// - [`Controller::handle_event`] for every wheel and pointer event on the
///   container. The returned [`Response`] says whether to prevent the
///   default action.
/// - [`Controller::frame`] once per display frame after
///   [`ViewportHost::request_frame`].
/// - [`Controller::resize`] whenever the container or content size changes.
/// - [`Controller::destroy`] (or drop) to detach.
///
/// Event timestamps and frame times must come from the same monotonic clock,
/// in milliseconds.
pub struct Controller<H: ViewportHost> {
    core: ViewCore<H>,
    wheel: WheelClassifier,
    scroll: ScrollLock,
    gestures: GestureRecognizer<H::Target>,
    attached: bool,
    dragging: bool,
}

impl<H: ViewportHost> Controller<H> {
    /// Measures the host, attaches to it and shows the reset view.
    ///
    /// A container too small to fit the content is tolerated (the base scale
    /// falls back to `1.0` until the next resize); missing nodes and
    /// degenerate content are not.
    pub fn new(mut host: H, config: ControllerConfig) -> Result<Self, ControllerError> {
        let container = host
            .container_rect()
            .ok_or(ControllerError::MissingContainer)?;
        let content = host.content_size().ok_or(ControllerError::MissingContent)?;
        if !(content.width > 0.0 && content.height > 0.0 && content.is_finite()) {
            return Err(ControllerError::DegenerateContent {
                width: content.width,
                height: content.height,
            });
        }
        if config.view.fit_scale(container.size(), content).is_none() {
            warn!(?container, ?content, "container too small to fit content, using base scale 1");
        }
        let state = ViewportState::new(container, content, config.view);

        host.attach();
        host.apply_base_scale(state.base_scale());
        host.apply_transform(state.transform());
        host.reset_changed(true);
        debug!(base_scale = state.base_scale(), "viewport attached");

        Ok(Self {
            core: ViewCore {
                host,
                animator: Animator::new(config.ease, state.transform()),
                state,
                now: 0.0,
                frame_pending: false,
                reported_reset: true,
            },
            wheel: WheelClassifier::new(config.wheel),
            scroll: ScrollLock::new(config.wheel.hold_ms),
            gestures: GestureRecognizer::new(config.gesture),
            attached: true,
            dragging: false,
        })
    }

    /// Handles one input event.
    pub fn handle_event(&mut self, event: &InputEvent<H::Target>) -> Response {
        if !self.attached {
            return Response::Ignored;
        }
        self.core.now = event.timestamp;
        let response = match event.kind {
            EventKind::Wheel(delta) => self.wheel_event(event, delta),
            kind => {
                let traits = self.target_traits(event);
                if kind == EventKind::PointerDown {
                    self.core.track_container();
                }
                self.gestures.handle(event, traits.tap, &mut self.core)
            }
        };
        self.sync_dragging();
        response
    }

    fn wheel_event(&mut self, event: &InputEvent<H::Target>, delta: WheelDelta) -> Response {
        let traits = self.target_traits(event);
        let owner = self
            .scroll
            .route(event.timestamp, traits.scrollable, event.modifier_zoom);
        if owner == ScrollOwner::Nested {
            trace!("wheel left to nested scroller");
            return Response::Ignored;
        }
        if self.wheel.starts_session(event.timestamp) {
            self.core.track_container();
        }
        self.wheel.handle(
            delta,
            event.position,
            event.modifier_zoom,
            event.timestamp,
            &mut self.core,
        );
        Response::Captured
    }

    fn target_traits(&self, event: &InputEvent<H::Target>) -> TargetTraits {
        event
            .target
            .as_ref()
            .map_or(TargetTraits::DETACHED, |target| {
                self.core.host.target_traits(target)
            })
    }

    fn sync_dragging(&mut self) {
        let dragging = self.gestures.phase().is_moving();
        if dragging != self.dragging {
            self.dragging = dragging;
            self.core.host.dragging_changed(dragging);
        }
    }

    /// Advances the animation to host time `now` and applies the displayed
    /// transform.
    ///
    /// Returns `true` if another frame was requested.
    pub fn frame(&mut self, now: f64) -> bool {
        self.core.frame_pending = false;
        if !self.attached {
            return false;
        }
        self.core.now = now;
        let tick = self.core.animator.tick(now);
        self.core.present();
        match tick {
            Tick::Running => {
                self.core.schedule();
                true
            }
            Tick::Settled => false,
        }
    }

    /// Re-measures the host after a size change.
    ///
    /// Returns `false` (keeping the previous geometry) if the container or
    /// content is missing or too small.
    pub fn resize(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        let (Some(container), Some(content)) =
            (self.core.host.container_rect(), self.core.host.content_size())
        else {
            warn!("container or content missing on resize, keeping geometry");
            return false;
        };
        if !self.core.state.resize(container, content) {
            warn!(?container, ?content, "degenerate resize ignored");
            return false;
        }
        self.core.host.apply_base_scale(self.core.state.base_scale());
        self.core.animate(Ease::None);
        debug!(base_scale = self.core.state.base_scale(), "viewport resized");
        true
    }

    /// Detaches from the host. Later calls do nothing.
    pub fn destroy(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.gestures.abort();
        self.scroll.release();
        self.core.animator.interrupt();
        self.core.frame_pending = false;
        if self.dragging {
            self.dragging = false;
            self.core.host.dragging_changed(false);
        }
        self.core.host.detach();
        debug!("viewport detached");
    }

    /// Whether the controller is still attached to its host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the view is in the reset state.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.core.state.is_reset()
    }

    /// Animates back to the reset view.
    pub fn reset(&mut self) {
        self.programmatic(|view| view.reset());
    }

    /// Pans by `delta` client pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.programmatic(|view| view.pan(delta));
    }

    /// Zooms by `factor` about the container center.
    pub fn zoom_by(&mut self, factor: f64) {
        let center = self.core.state.container_center();
        self.zoom_to(factor, center);
    }

    /// Zooms by `factor` about the client point `origin`.
    pub fn zoom_to(&mut self, factor: f64, origin: Point) {
        self.programmatic(|view| view.zoom_to(factor, origin));
    }

    fn programmatic(&mut self, op: impl FnOnce(&mut ViewCore<H>)) {
        if !self.attached {
            return;
        }
        self.core.interrupt();
        op(&mut self.core);
        self.core.animate(Ease::Smooth);
    }

    /// Authoritative (target) transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.core.state.transform()
    }

    /// Transform currently displayed.
    #[must_use]
    pub fn shown(&self) -> ViewTransform {
        self.core.animator.shown()
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.animator.is_running()
    }

    /// Viewport geometry and state.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.core.state
    }

    /// Coarse gesture state.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.core.host
    }

    /// The host, mutably (for example to update its geometry before
    /// [`Controller::resize`]).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.core.host
    }
}

impl<H: ViewportHost> Drop for Controller<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<H: ViewportHost> fmt::Debug for Controller<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.core.state)
            .field("shown", &self.core.animator.shown())
            .field("phase", &self.gestures.phase())
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}
