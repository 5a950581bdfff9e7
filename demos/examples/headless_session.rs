// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless viewport session.
//!
//! Drive a `spacepan::Controller` with a scripted mix of wheel, pen and touch
//! input and print what a renderer would be asked to paint.
//!
//! Run:
//! - `cargo run -p spacepan_demos --example headless_session`
//! - `RUST_LOG=spacepan_input=trace cargo run -p spacepan_demos --example headless_session`

use kurbo::{Point, Rect, Size};
use spacepan::input::{
    DeviceType, EventKind, InputEvent, TapCategory, TargetTraits, WheelDelta,
};
use spacepan::view2d::ViewTransform;
use spacepan::{Controller, ControllerConfig, ViewportHost};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Host that paints by logging.
struct LogHost {
    container: Rect,
    content: Size,
    frame_requested: bool,
}

impl ViewportHost for LogHost {
    type Target = &'static str;

    fn container_rect(&self) -> Option<Rect> {
        Some(self.container)
    }

    fn content_size(&self) -> Option<Size> {
        Some(self.content)
    }

    fn target_traits(&self, target: &&'static str) -> TargetTraits {
        match *target {
            "checkbox" => TargetTraits {
                tap: TapCategory::Toggle,
                scrollable: false,
            },
            "notes" => TargetTraits {
                tap: TapCategory::Normal,
                scrollable: true,
            },
            _ => TargetTraits::default(),
        }
    }

    fn attach(&mut self) {
        info!("attach");
    }

    fn detach(&mut self) {
        info!("detach");
    }

    fn apply_base_scale(&mut self, scale: f64) {
        info!(scale, "base scale");
    }

    fn apply_transform(&mut self, transform: ViewTransform) {
        info!(
            zoom = transform.zoom,
            x = transform.translate.x,
            y = transform.translate.y,
            "paint"
        );
    }

    fn reset_changed(&mut self, is_reset: bool) {
        info!(is_reset, "reset state");
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    fn dragging_changed(&mut self, dragging: bool) {
        info!(dragging, "dragging");
    }
}

/// Runs 60 Hz frames while the controller asks for them.
fn run_frames(viewport: &mut Controller<LogHost>, now: &mut f64) {
    while viewport.host().frame_requested {
        viewport.host_mut().frame_requested = false;
        viewport.frame(*now);
        *now += 16.0;
    }
}

fn pointer(kind: EventKind, device: DeviceType, id: i64, x: f64, y: f64, t: f64) -> InputEvent<&'static str> {
    InputEvent::pointer(kind, device, id, Point::new(x, y), t).with_target("canvas")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let host = LogHost {
        container: Rect::new(0.0, 0.0, 800.0, 600.0),
        content: Size::new(400.0, 250.0),
        frame_requested: false,
    };
    let mut viewport = match Controller::new(host, ControllerConfig::default()) {
        Ok(viewport) => viewport,
        Err(err) => {
            eprintln!("cannot create viewport: {err}");
            return;
        }
    };
    let mut now = 0.0;

    info!("two wheel notches");
    for _ in 0..2 {
        viewport.handle_event(&InputEvent::wheel(
            WheelDelta::pixels(0.0, 120.0),
            Point::new(400.0, 300.0),
            now,
        ));
        run_frames(&mut viewport, &mut now);
    }

    info!("wheel over scrollable notes is left alone");
    now += 500.0;
    let response = viewport.handle_event(
        &InputEvent::wheel(WheelDelta::pixels(0.0, 40.0), Point::new(300.0, 200.0), now)
            .with_target("notes"),
    );
    info!(?response, "notes wheel");

    info!("ctrl-wheel zoom about the pointer");
    now += 500.0;
    viewport.handle_event(
        &InputEvent::wheel(WheelDelta::pixels(0.0, -120.0), Point::new(250.0, 200.0), now)
            .with_modifier_zoom(true),
    );
    run_frames(&mut viewport, &mut now);

    info!("pen drag");
    viewport.handle_event(&pointer(EventKind::PointerDown, DeviceType::Pen, 1, 300.0, 300.0, now));
    for step in 1..=5 {
        now += 16.0;
        let x = 300.0 + f64::from(step) * 15.0;
        viewport.handle_event(&pointer(EventKind::PointerMove, DeviceType::Pen, 1, x, 300.0, now));
        run_frames(&mut viewport, &mut now);
    }
    viewport.handle_event(&pointer(EventKind::PointerUp, DeviceType::Pen, 1, 375.0, 300.0, now));

    info!("two-finger pinch");
    now += 500.0;
    viewport.handle_event(&pointer(EventKind::PointerDown, DeviceType::Touch, 10, 100.0, 100.0, now));
    viewport.handle_event(&pointer(EventKind::PointerDown, DeviceType::Touch, 11, 200.0, 100.0, now));
    now += 16.0;
    viewport.handle_event(&pointer(EventKind::PointerMove, DeviceType::Touch, 10, 100.0, 150.0, now));
    run_frames(&mut viewport, &mut now);
    viewport.handle_event(&pointer(EventKind::PointerUp, DeviceType::Touch, 10, 100.0, 150.0, now));
    viewport.handle_event(&pointer(EventKind::PointerUp, DeviceType::Touch, 11, 200.0, 100.0, now));

    info!("double tap resets");
    for _ in 0..2 {
        now += 100.0;
        viewport.handle_event(&pointer(EventKind::PointerDown, DeviceType::Touch, 20, 400.0, 300.0, now));
        viewport.handle_event(&pointer(EventKind::PointerUp, DeviceType::Touch, 20, 400.0, 300.0, now + 30.0));
    }
    run_frames(&mut viewport, &mut now);

    info!(is_reset = viewport.is_reset(), "session done");
    viewport.destroy();
}
