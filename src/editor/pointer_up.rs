//! Pointer up event handling - finalize marquee selection and drags.

use super::CanvasEditor;
use crate::constants::MIN_MARQUEE_SIZE;
use crate::geometry::{Point, Rect};
use crate::input::{EventOutcome, GestureState, Modifiers, MouseButton};

impl CanvasEditor {
    pub(super) fn handle_pointer_up(
        &mut self,
        position: Point,
        button: MouseButton,
        _modifiers: Modifiers,
    ) -> EventOutcome {
        if button != MouseButton::Left {
            return EventOutcome::Ignored;
        }

        match self.gesture {
            GestureState::MarqueeSelecting { start, .. } => {
                self.finalize_marquee(start, position);
                self.gesture.reset();
                EventOutcome::Consumed
            }
            GestureState::Panning { .. } | GestureState::DraggingNodes { .. } => {
                self.gesture.reset();
                EventOutcome::Consumed
            }
            GestureState::Idle => EventOutcome::Ignored,
        }
    }

    /// Select every node intersecting the marquee rectangle.
    ///
    /// Marquees below the minimum size are treated as plain background
    /// clicks: the selection was already cleared on pointer down and
    /// nothing gets selected here.
    fn finalize_marquee(&mut self, start: Point, end: Point) {
        let screen_rect = Rect::from_corners(start, end);
        if screen_rect.width() <= MIN_MARQUEE_SIZE && screen_rect.height() <= MIN_MARQUEE_SIZE {
            return;
        }

        let viewport = self.store.viewport();
        let graph_rect = Rect::from_corners(
            viewport.screen_to_graph(screen_rect.min),
            viewport.screen_to_graph(screen_rect.max),
        );

        let hit = self.store.nodes_in_rect(graph_rect);
        if !hit.is_empty() {
            self.store.extend_node_selection(&hit);
        }
    }
}
