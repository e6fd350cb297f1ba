//! Input handling for the canvas.
//!
//! This module turns raw pointer, wheel, keyboard and touch events into
//! the logical event stream consumed by the editor's tool handlers.
//!
//! ## Architecture
//!
//! The gesture layer uses an explicit state machine (`GestureState`) to
//! track the current interaction mode. This replaces scattered boolean
//! flags and makes impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `event` - Raw and normalized event models, modifiers, keys
//! - `pipeline` - Normalization: touch folding, wheel-to-zoom, timestamps
//! - `state` - Gesture state machine enum and helper methods

pub mod event;
mod pipeline;
mod state;

pub use event::{
    InputEvent, InputEventKind, Key, Modifiers, MouseButton, RawEvent, TouchPoint, WheelDelta,
};
pub use pipeline::{EventOutcome, InputPipeline};
pub use state::GestureState;
