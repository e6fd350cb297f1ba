//! Pointer move handling - pan, node dragging, marquee growth.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during drag operations (60+ times
//! per second). Early exits keep the idle path free, and group moves
//! reuse one delta for every selected node.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::CanvasEditor;
use crate::geometry::Point;
use crate::input::{EventOutcome, GestureState, Modifiers};
use crate::profile_scope;
use crate::store::NodePatch;

impl CanvasEditor {
    pub(super) fn handle_pointer_move(
        &mut self,
        position: Point,
        _modifiers: Modifiers,
    ) -> EventOutcome {
        profile_scope!("handle_pointer_move");

        match self.gesture {
            GestureState::Panning { last_pos } => {
                let delta = position - last_pos;
                self.store.pan_by(delta);
                self.gesture.update_last_pointer_pos(position);
                EventOutcome::Consumed
            }

            GestureState::DraggingNodes {
                primary,
                grab_offset,
            } => {
                profile_scope!("node_drag");

                let graph_pos = self.store.viewport().screen_to_graph(position);
                let Some(node) = self.store.node(primary) else {
                    // The dragged node vanished (e.g. a subscriber-driven
                    // deletion); drop the gesture
                    self.gesture.reset();
                    return EventOutcome::Consumed;
                };

                let new_primary_pos = graph_pos - grab_offset;
                let delta = new_primary_pos - node.position;
                if delta == Point::ZERO {
                    return EventOutcome::Consumed;
                }

                // Move every selected node by the same delta; the drag
                // only arms on a selected node, so primary is included.
                let selected = self.store.selection().sorted_nodes();
                for id in selected {
                    let Some(node) = self.store.node(id) else {
                        continue;
                    };
                    let target = node.position + delta;
                    let _ = self
                        .store
                        .update_node(id, NodePatch::new().with_position(target));
                }
                EventOutcome::Consumed
            }

            GestureState::MarqueeSelecting { .. } => {
                self.gesture.set_marquee_current(position);
                EventOutcome::Consumed
            }

            GestureState::Idle => EventOutcome::Ignored,
        }
    }
}
