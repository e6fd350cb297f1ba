//! Raw-event normalization.
//!
//! The pipeline is the single entry point for platform events. It enforces
//! monotonic timestamps, folds single-touch input onto the pointer events,
//! converts wheel deltas into anchored zoom requests, and drops what the
//! canvas does not understand so the embedder can let those events take
//! their default course.

use crate::constants::WHEEL_ZOOM_EPSILON;
use crate::input::event::{InputEvent, InputEventKind, Key, MouseButton, RawEvent, TouchPoint};
use crate::geometry::Point;
use tracing::trace;

/// What happened to an event handed to the editor.
///
/// `Consumed` means a tool handler acted on it and the embedder should
/// prevent the browser default action (page scroll, text selection).
/// `Ignored` means the event was unrecognized or irrelevant and must pass
/// through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}

impl EventOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventOutcome::Consumed)
    }
}

/// Normalizes raw platform events into the logical event stream.
#[derive(Debug, Default)]
pub struct InputPipeline {
    /// High-water mark enforcing non-decreasing timestamps
    last_timestamp_ms: u64,
    /// The single touch currently standing in for the pointer
    active_touch: Option<TouchPoint>,
}

impl InputPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard transient normalization state (on teardown or tool cancel).
    pub fn reset(&mut self) {
        self.active_touch = None;
    }

    /// Normalize one raw event. `None` means the event is not part of the
    /// canvas's logical stream (multi-touch, unknown key, noise wheel) and
    /// should keep its default behavior.
    pub fn normalize(&mut self, raw: RawEvent) -> Option<InputEvent> {
        match raw {
            RawEvent::MouseDown {
                position,
                button,
                modifiers,
                timestamp_ms,
            } => Some(InputEvent {
                kind: InputEventKind::PointerDown { position, button },
                modifiers,
                timestamp_ms: self.clamp_timestamp(timestamp_ms),
            }),

            RawEvent::MouseMove {
                position,
                modifiers,
                timestamp_ms,
            } => Some(InputEvent {
                kind: InputEventKind::PointerMove { position },
                modifiers,
                timestamp_ms: self.clamp_timestamp(timestamp_ms),
            }),

            RawEvent::MouseUp {
                position,
                button,
                modifiers,
                timestamp_ms,
            } => Some(InputEvent {
                kind: InputEventKind::PointerUp { position, button },
                modifiers,
                timestamp_ms: self.clamp_timestamp(timestamp_ms),
            }),

            RawEvent::Wheel {
                position,
                delta,
                modifiers,
                timestamp_ms,
            } => {
                let zoom_factor = delta.zoom_factor();
                if (zoom_factor - 1.0).abs() <= WHEEL_ZOOM_EPSILON {
                    return None;
                }
                Some(InputEvent {
                    kind: InputEventKind::Wheel {
                        position,
                        zoom_factor,
                    },
                    modifiers,
                    timestamp_ms: self.clamp_timestamp(timestamp_ms),
                })
            }

            RawEvent::KeyDown {
                key,
                modifiers,
                timestamp_ms,
            } => Key::parse(&key).map(|key| InputEvent {
                kind: InputEventKind::KeyDown { key },
                modifiers,
                timestamp_ms: self.clamp_timestamp(timestamp_ms),
            }),

            RawEvent::KeyUp {
                key,
                modifiers,
                timestamp_ms,
            } => Key::parse(&key).map(|key| InputEvent {
                kind: InputEventKind::KeyUp { key },
                modifiers,
                timestamp_ms: self.clamp_timestamp(timestamp_ms),
            }),

            RawEvent::TouchStart {
                touches,
                modifiers,
                timestamp_ms,
            } => {
                if touches.len() != 1 {
                    // Multi-touch is not part of the logical stream; also
                    // drop any single-touch gesture that grew a finger.
                    self.active_touch = None;
                    trace!(touches = touches.len(), "multi-touch ignored");
                    return None;
                }
                let touch = touches[0];
                self.active_touch = Some(touch);
                Some(InputEvent {
                    kind: InputEventKind::PointerDown {
                        position: touch.position,
                        button: MouseButton::Left,
                    },
                    modifiers,
                    timestamp_ms: self.clamp_timestamp(timestamp_ms),
                })
            }

            RawEvent::TouchMove {
                touches,
                modifiers,
                timestamp_ms,
            } => {
                let active = self.active_touch?;
                let touch = touches.iter().find(|t| t.id == active.id)?;
                self.active_touch = Some(*touch);
                Some(InputEvent {
                    kind: InputEventKind::PointerMove {
                        position: touch.position,
                    },
                    modifiers,
                    timestamp_ms: self.clamp_timestamp(timestamp_ms),
                })
            }

            RawEvent::TouchEnd {
                touches,
                modifiers,
                timestamp_ms,
            } => {
                let active = self.active_touch.take()?;
                // TouchEnd may or may not carry the lifted touch; fall
                // back to its last known position.
                let position = touches
                    .iter()
                    .find(|t| t.id == active.id)
                    .map(|t| t.position)
                    .unwrap_or(active.position);
                Some(InputEvent {
                    kind: InputEventKind::PointerUp {
                        position,
                        button: MouseButton::Left,
                    },
                    modifiers,
                    timestamp_ms: self.clamp_timestamp(timestamp_ms),
                })
            }
        }
    }

    /// Last touch position seen, if a touch gesture is active.
    pub fn active_touch_position(&self) -> Option<Point> {
        self.active_touch.map(|t| t.position)
    }

    fn clamp_timestamp(&mut self, timestamp_ms: u64) -> u64 {
        self.last_timestamp_ms = self.last_timestamp_ms.max(timestamp_ms);
        self.last_timestamp_ms
    }
}
