//! Gesture state machine - unified state for in-flight pointer gestures.
//!
//! A single explicit enum replaces scattered boolean flags, making
//! impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning           (pointer down with pan tool)
//! Idle -> DraggingNodes     (pointer down on a node with select tool)
//! Idle -> MarqueeSelecting  (pointer down on empty canvas with select tool)
//!
//! Any -> Idle               (pointer up - finalizes; or cancellation)
//! ```
//!
//! The connect tool's pending source is not here: it spans two click
//! gestures and lives in the `ToolController`'s tool-local buffer.

use crate::geometry::Point;
use crate::types::NodeId;

/// Unified state for all in-flight pointer gestures.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No active pointer gesture
    #[default]
    Idle,

    /// Canvas panning with the pan tool
    Panning {
        /// Last pointer position for delta calculation (screen space)
        last_pos: Point,
    },

    /// Dragging the selected nodes
    DraggingNodes {
        /// The node under the cursor when the drag started
        primary: NodeId,
        /// Offset from the primary node's origin to the pointer, in graph
        /// units, so the node does not jump to the cursor
        grab_offset: Point,
    },

    /// Marquee/box selection (screen space until finalized)
    MarqueeSelecting {
        /// Selection box start position
        start: Point,
        /// Current pointer position
        current: Point,
    },
}

impl GestureState {
    /// Returns true if no gesture is in flight.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the canvas.
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if currently dragging nodes.
    pub fn is_dragging_nodes(&self) -> bool {
        matches!(self, Self::DraggingNodes { .. })
    }

    /// Returns true if currently marquee selecting.
    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    /// Discard the gesture and return to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start panning from a screen position.
    pub fn start_panning(&mut self, last_pos: Point) {
        *self = Self::Panning { last_pos };
    }

    /// Start dragging nodes.
    pub fn start_dragging(&mut self, primary: NodeId, grab_offset: Point) {
        *self = Self::DraggingNodes {
            primary,
            grab_offset,
        };
    }

    /// Start marquee selection.
    pub fn start_marquee(&mut self, start: Point) {
        *self = Self::MarqueeSelecting {
            start,
            current: start,
        };
    }

    /// Update the marquee's current corner.
    pub fn set_marquee_current(&mut self, current: Point) {
        if let Self::MarqueeSelecting { current: c, .. } = self {
            *c = current;
        }
    }

    /// Get the marquee start position, if marquee selecting.
    pub fn marquee_start(&self) -> Option<Point> {
        match self {
            Self::MarqueeSelecting { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Get the marquee current position, if marquee selecting.
    pub fn marquee_current(&self) -> Option<Point> {
        match self {
            Self::MarqueeSelecting { current, .. } => Some(*current),
            _ => None,
        }
    }

    /// Get the node being dragged, if any.
    pub fn dragged_node(&self) -> Option<NodeId> {
        match self {
            Self::DraggingNodes { primary, .. } => Some(*primary),
            _ => None,
        }
    }

    /// Get the drag grab offset, if dragging.
    pub fn grab_offset(&self) -> Option<Point> {
        match self {
            Self::DraggingNodes { grab_offset, .. } => Some(*grab_offset),
            _ => None,
        }
    }

    /// Get the last pointer position, if panning.
    pub fn last_pointer_pos(&self) -> Option<Point> {
        match self {
            Self::Panning { last_pos } => Some(*last_pos),
            _ => None,
        }
    }

    /// Update the last pointer position while panning.
    pub fn update_last_pointer_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }
}
