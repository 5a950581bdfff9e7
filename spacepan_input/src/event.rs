// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-agnostic input events.

use kurbo::Point;

/// Identifier correlating the events of one pointer (one finger, one pen).
pub type PointerId = i64;

/// Kind of pointing device that produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Mouse or other indirect pointer.
    Mouse,
    /// Pen or stylus.
    Pen,
    /// Finger on a touch screen.
    Touch,
    /// Anything the host could not map to one of the above.
    Unknown,
}

impl DeviceType {
    /// Maps a DOM-style `pointerType` string.
    #[must_use]
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            "touch" => Self::Touch,
            _ => Self::Unknown,
        }
    }
}

bitflags::bitflags! {
    /// Pressed pointer buttons, using the DOM `buttons` bit layout.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        /// Left mouse button, pen contact, or finger contact.
        const PRIMARY = 1;
        /// Right mouse button or pen barrel button.
        const SECONDARY = 1 << 1;
        /// Middle mouse button.
        const AUXILIARY = 1 << 2;
        /// "Back" mouse button.
        const BACK = 1 << 3;
        /// "Forward" mouse button.
        const FORWARD = 1 << 4;
        /// Pen eraser button.
        const ERASER = 1 << 5;
    }
}

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Pixels.
    #[default]
    Pixel,
    /// Lines of text.
    Line,
    /// Pages.
    Page,
}

impl DeltaMode {
    /// Maps a DOM `deltaMode` value; unknown values are treated as pixels.
    #[must_use]
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Raw wheel deltas as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WheelDelta {
    /// Horizontal delta in `mode` units.
    pub dx: f64,
    /// Vertical delta in `mode` units.
    pub dy: f64,
    /// Unit of `dx` and `dy`.
    pub mode: DeltaMode,
}

impl WheelDelta {
    /// Pixel-mode wheel delta.
    #[must_use]
    pub const fn pixels(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            mode: DeltaMode::Pixel,
        }
    }
}

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventKind {
    /// Wheel or trackpad scroll.
    Wheel(WheelDelta),
    /// A pointer was pressed.
    PointerDown,
    /// A pointer moved.
    PointerMove,
    /// A pointer was released.
    PointerUp,
    /// The platform took the pointer away (for example for a system gesture).
    PointerCancel,
}

/// Input event consumed by the viewport controller.
///
/// `T` is the host's opaque element handle; it is only compared for equality
/// (double-tap on "toggle" elements) and handed back to the host to look up
/// [`TargetTraits`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent<T> {
    /// Event kind, with wheel deltas for [`EventKind::Wheel`].
    pub kind: EventKind,
    /// Device that produced the event.
    pub device: DeviceType,
    /// Pointer identifier for multi-touch correlation.
    pub pointer_id: PointerId,
    /// Position in client coordinates.
    pub position: Point,
    /// Buttons held during the event.
    pub buttons: Buttons,
    /// Monotonic timestamp in milliseconds.
    pub timestamp: f64,
    /// Whether the zoom modifier (Ctrl / Cmd) is held.
    pub modifier_zoom: bool,
    /// Element the event landed on, if any.
    pub target: Option<T>,
}

impl<T> InputEvent<T> {
    /// Pointer event with the primary button held and no target.
    #[must_use]
    pub fn pointer(
        kind: EventKind,
        device: DeviceType,
        pointer_id: PointerId,
        position: Point,
        timestamp: f64,
    ) -> Self {
        Self {
            kind,
            device,
            pointer_id,
            position,
            buttons: Buttons::PRIMARY,
            timestamp,
            modifier_zoom: false,
            target: None,
        }
    }

    /// Mouse wheel event with no target.
    #[must_use]
    pub fn wheel(delta: WheelDelta, position: Point, timestamp: f64) -> Self {
        Self {
            kind: EventKind::Wheel(delta),
            device: DeviceType::Mouse,
            pointer_id: 1,
            position,
            buttons: Buttons::empty(),
            timestamp,
            modifier_zoom: false,
            target: None,
        }
    }

    /// Sets the target element.
    #[must_use]
    pub fn with_target(mut self, target: T) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Sets whether the zoom modifier is held.
    #[must_use]
    pub fn with_modifier_zoom(mut self, modifier_zoom: bool) -> Self {
        self.modifier_zoom = modifier_zoom;
        self
    }
}

/// How an element takes part in double-tap detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TapCategory {
    /// Double-tap fires whenever two qualifying taps land close together.
    #[default]
    Normal,
    /// Double-tap only fires when both taps hit the same element (checkboxes
    /// and other toggles that users click twice in quick succession).
    Toggle,
    /// Never double-tap (counters, buttons meant to be hammered).
    Disable,
}

/// Per-element information the host provides for a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TargetTraits {
    /// Double-tap participation.
    pub tap: TapCategory,
    /// Whether the element (or an ancestor inside the viewport) scrolls on
    /// its own and should get plain wheel events.
    pub scrollable: bool,
}

impl TargetTraits {
    /// Traits for events without a target: no double-tap, not scrollable.
    pub const DETACHED: Self = Self {
        tap: TapCategory::Disable,
        scrollable: false,
    };
}

/// What the host should do with the native event after it was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// The viewport consumed the event; prevent the default action and stop
    /// propagation.
    Captured,
    /// The viewport did not use the event; let it through.
    Ignored,
}
