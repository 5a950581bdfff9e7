// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use spacepan_view2d::ViewTransform;

use crate::ease::{Ease, EaseConfig};

/// One running interpolation between two transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSession {
    /// Transform that was displayed when the session started.
    pub from: ViewTransform,
    /// Target transform.
    pub to: ViewTransform,
    /// Host timestamp (ms) the session started at.
    pub started_at: f64,
    /// Curve used for this session.
    pub ease: Ease,
}

/// Whether an [`Animator`] is currently interpolating.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AnimationState {
    /// Displayed transform equals the target; no frames are needed.
    #[default]
    Idle,
    /// Frames are needed until the session converges.
    Running(AnimationSession),
}

/// Result of [`Animator::animate`] and [`Animator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Another frame is needed.
    Running,
    /// The displayed transform reached the target; the frame loop can stop.
    Settled,
}

/// Eases the displayed transform toward a target.
///
/// The animator never owns the authoritative view. Callers pass the new
/// target to [`Animator::animate`] whenever the view changes and call
/// [`Animator::tick`] once per host frame until it reports
/// [`Tick::Settled`]. Retargeting mid-flight starts the next session from the
/// transform currently displayed, so the painted value never jumps.
///
/// ```rust
/// use kurbo::Vec2;
/// use spacepan_motion::{Animator, Ease, EaseConfig, Tick};
/// use spacepan_view2d::ViewTransform;
///
/// let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
/// let target = ViewTransform::new(1.0, Vec2::new(0.0, -50.0));
/// assert_eq!(anim.animate(0.0, target, Ease::Fast), Tick::Running);
///
/// let mut now = 0.0;
/// while anim.tick(now) == Tick::Running {
///     now += 16.0;
/// }
/// assert_eq!(anim.shown(), target);
/// ```
#[derive(Clone, Debug)]
pub struct Animator {
    config: EaseConfig,
    shown: ViewTransform,
    state: AnimationState,
}

impl Animator {
    /// Creates an idle animator displaying `shown`.
    #[must_use]
    pub fn new(config: EaseConfig, shown: ViewTransform) -> Self {
        Self {
            config,
            shown,
            state: AnimationState::Idle,
        }
    }

    /// Returns the easing configuration.
    #[must_use]
    pub fn config(&self) -> &EaseConfig {
        &self.config
    }

    /// Returns the transform that should currently be painted.
    #[must_use]
    pub fn shown(&self) -> ViewTransform {
        self.shown
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns `true` while frames are needed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running(_))
    }

    /// Starts (or retargets) an animation toward `target`.
    ///
    /// Returns [`Tick::Settled`] when there is nothing to animate, either
    /// because `ease` is [`Ease::None`] or the displayed transform already
    /// matches; the displayed transform is then `target`.
    pub fn animate(&mut self, now: f64, target: ViewTransform, ease: Ease) -> Tick {
        if ease == Ease::None || self.shown.approx_eq(&target) {
            self.jump(target);
            return Tick::Settled;
        }
        self.state = AnimationState::Running(AnimationSession {
            from: self.shown,
            to: target,
            started_at: now,
            ease,
        });
        Tick::Running
    }

    /// Advances the displayed transform to host time `now`.
    ///
    /// A non-finite clock reading finishes the session on its target.
    pub fn tick(&mut self, now: f64) -> Tick {
        let AnimationState::Running(session) = self.state else {
            return Tick::Settled;
        };
        let elapsed = now - session.started_at;
        if !elapsed.is_finite() {
            self.jump(session.to);
            return Tick::Settled;
        }
        let progress = session
            .ease
            .progress(&self.config, elapsed.max(0.0), &session.from, &session.to);
        if progress.is_nan() || progress >= 1.0 {
            self.jump(session.to);
            return Tick::Settled;
        }
        self.shown = session.from.lerp(session.to, progress);
        if self.shown.approx_eq(&session.to) {
            self.jump(session.to);
            return Tick::Settled;
        }
        Tick::Running
    }

    /// Stops a running session where it is.
    ///
    /// Returns the displayed transform if a session was running, so the
    /// caller can fold it back into the authoritative state.
    pub fn interrupt(&mut self) -> Option<ViewTransform> {
        match self.state {
            AnimationState::Idle => None,
            AnimationState::Running(_) => {
                self.state = AnimationState::Idle;
                Some(self.shown)
            }
        }
    }

    /// Displays `to` immediately and stops any session.
    pub fn jump(&mut self, to: ViewTransform) {
        self.shown = to;
        self.state = AnimationState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use spacepan_view2d::ViewTransform;

    use super::{AnimationState, Animator, Tick};
    use crate::ease::{Ease, EaseConfig};

    fn run_to_rest(anim: &mut Animator, mut now: f64) -> (f64, usize) {
        let mut frames = 0;
        while anim.tick(now) == Tick::Running {
            now += 16.0;
            frames += 1;
            assert!(frames < 1_000, "animation did not converge");
        }
        (now, frames)
    }

    #[test]
    fn settles_on_target_and_stops() {
        let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
        let target = ViewTransform::new(1.8, Vec2::new(-120.0, 40.0));
        for ease in [Ease::Least, Ease::Fast, Ease::Smooth, Ease::Slow] {
            anim.jump(ViewTransform::IDENTITY);
            assert_eq!(anim.animate(0.0, target, ease), Tick::Running);
            let (_, frames) = run_to_rest(&mut anim, 0.0);
            assert!(frames > 0);
            assert_eq!(anim.shown(), target);
            assert_eq!(anim.state(), AnimationState::Idle);
            assert_eq!(anim.tick(10_000.0), Tick::Settled);
        }
    }

    #[test]
    fn non_finite_clock_finishes_the_session() {
        let target = ViewTransform::new(1.4, Vec2::new(30.0, -60.0));
        for now in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
            anim.animate(0.0, target, Ease::Smooth);
            assert_eq!(anim.tick(now), Tick::Settled);
            assert_eq!(anim.shown(), target);
            assert!(!anim.is_running());
        }

        // A session started from a bad timestamp settles on the next frame.
        let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
        assert_eq!(anim.animate(f64::NAN, target, Ease::Fast), Tick::Running);
        assert_eq!(anim.tick(16.0), Tick::Settled);
        assert_eq!(anim.shown(), target);
    }

    #[test]
    fn none_and_noop_settle_immediately() {
        let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
        let target = ViewTransform::new(1.2, Vec2::new(5.0, 5.0));
        assert_eq!(anim.animate(0.0, target, Ease::None), Tick::Settled);
        assert_eq!(anim.shown(), target);
        assert_eq!(anim.animate(5.0, target, Ease::Slow), Tick::Settled);
        assert!(!anim.is_running());
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
        let first = ViewTransform::new(1.0, Vec2::new(100.0, 0.0));
        anim.animate(0.0, first, Ease::Fast);
        assert_eq!(anim.tick(25.0), Tick::Running);
        let mid = anim.shown();
        assert!(mid.translate.x > 0.0 && mid.translate.x < 100.0);

        let second = ViewTransform::new(1.0, Vec2::new(-100.0, 0.0));
        anim.animate(25.0, second, Ease::Fast);
        match anim.state() {
            AnimationState::Running(session) => assert_eq!(session.from, mid),
            AnimationState::Idle => panic!("retarget should keep running"),
        }
        // No jump on the first frame after retargeting.
        anim.tick(25.0);
        assert_eq!(anim.shown(), mid);
    }

    #[test]
    fn interrupt_returns_displayed_value_once() {
        let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
        anim.animate(0.0, ViewTransform::new(2.0, Vec2::ZERO), Ease::Smooth);
        anim.tick(100.0);
        let shown = anim.shown();
        assert_eq!(anim.interrupt(), Some(shown));
        assert_eq!(anim.interrupt(), None);
        assert_eq!(anim.tick(200.0), Tick::Settled);
        assert_eq!(anim.shown(), shown);
    }

    #[test]
    fn clock_going_backwards_does_not_overshoot() {
        let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
        let target = ViewTransform::new(1.0, Vec2::new(0.0, 60.0));
        anim.animate(100.0, target, Ease::Fast);
        assert_eq!(anim.tick(50.0), Tick::Running);
        assert_eq!(anim.shown(), ViewTransform::IDENTITY);
    }
}
