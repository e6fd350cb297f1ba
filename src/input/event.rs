//! Raw and normalized input events.
//!
//! Three physical modalities (mouse/pointer, touch, keyboard/wheel) are
//! folded into one logical event model. A single active touch point is
//! indistinguishable from the corresponding mouse event downstream; wheel
//! input arrives as a zoom request already anchored at the pointer.

use crate::constants::{WHEEL_LINE_ZOOM_DIVISOR, WHEEL_PIXEL_ZOOM_DIVISOR};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Modifier-key flags carried by every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Cmd on macOS, Win elsewhere
    pub platform: bool,
}

impl Modifiers {
    /// The primary command modifier: Ctrl, or Cmd on macOS.
    #[inline]
    pub fn primary(&self) -> bool {
        self.control || self.platform
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

/// Mouse button of a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// Wheel delta as delivered by the platform; the DOM reports either
/// pixels or lines depending on the device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    Pixels(Point),
    Lines(Point),
}

impl WheelDelta {
    /// Convert the vertical delta into a multiplicative zoom factor.
    /// Scrolling up (negative y) zooms in.
    pub fn zoom_factor(&self) -> f32 {
        match self {
            WheelDelta::Pixels(delta) => 1.0 - delta.y / WHEEL_PIXEL_ZOOM_DIVISOR,
            WheelDelta::Lines(delta) => 1.0 - delta.y / WHEEL_LINE_ZOOM_DIVISOR,
        }
    }
}

/// A single touch point in a touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point,
}

/// Keys the canvas reacts to. Everything else stays unrecognized and is
/// passed through to the embedder untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Character(char),
    Delete,
    Backspace,
    Escape,
    Enter,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn parse(key: &str) -> Option<Key> {
        match key {
            "Delete" => Some(Key::Delete),
            "Backspace" => Some(Key::Backspace),
            "Escape" => Some(Key::Escape),
            "Enter" => Some(Key::Enter),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Character(c)),
                    _ => None,
                }
            }
        }
    }
}

/// An event as delivered by the embedding surface, before normalization.
#[derive(Clone, Debug, PartialEq)]
pub enum RawEvent {
    MouseDown {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    MouseMove {
        position: Point,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    MouseUp {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    Wheel {
        position: Point,
        delta: WheelDelta,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    KeyDown {
        key: String,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    KeyUp {
        key: String,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    TouchStart {
        touches: Vec<TouchPoint>,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    TouchMove {
        touches: Vec<TouchPoint>,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
    TouchEnd {
        touches: Vec<TouchPoint>,
        modifiers: Modifiers,
        timestamp_ms: u64,
    },
}

/// The normalized event consumed by the tool handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    pub kind: InputEventKind,
    pub modifiers: Modifiers,
    /// Monotonically non-decreasing, for gesture correlation
    pub timestamp_ms: u64,
}

/// The closed set of logical event kinds, exhaustively matched by the
/// handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEventKind {
    PointerDown { position: Point, button: MouseButton },
    PointerMove { position: Point },
    PointerUp { position: Point, button: MouseButton },
    /// Zoom request anchored at the pointer's screen position
    Wheel { position: Point, zoom_factor: f32 },
    KeyDown { key: Key },
    KeyUp { key: Key },
}
