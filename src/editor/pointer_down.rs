//! Pointer down event handling - selection, drag/marquee initiation,
//! node placement, connection building.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction. Hit testing goes
//! through the store's R-tree spatial index (O(log n)), with z-order
//! resolved front to back over the candidate set.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::CanvasEditor;
use crate::config::AddNodeBehavior;
use crate::geometry::Point;
use crate::input::{EventOutcome, Modifiers, MouseButton};
use crate::profile_scope;
use crate::tools::Tool;
use crate::types::NodeId;
use tracing::{debug, trace};

impl CanvasEditor {
    pub(super) fn handle_pointer_down(
        &mut self,
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> EventOutcome {
        profile_scope!("handle_pointer_down");

        if button != MouseButton::Left {
            return EventOutcome::Ignored;
        }

        let graph_pos = self.store.viewport().screen_to_graph(position);

        match self.store.active_tool() {
            Tool::Select => {
                let hit = {
                    profile_scope!("hit_test_nodes");
                    self.store.node_at_point(graph_pos)
                };

                match hit {
                    Some(node_id) => self.select_pointer_down_on_node(node_id, graph_pos, modifiers),
                    None => {
                        // Clicked on empty canvas: start a marquee
                        trace!(?position, "marquee started");
                        self.gesture.start_marquee(position);
                        if !modifiers.shift {
                            self.store.clear_selection();
                        }
                    }
                }
                EventOutcome::Consumed
            }

            Tool::Pan => {
                self.gesture.start_panning(position);
                EventOutcome::Consumed
            }

            Tool::AddNode => {
                self.place_node(graph_pos);
                EventOutcome::Consumed
            }

            Tool::Connect => {
                self.connect_pointer_down(graph_pos);
                EventOutcome::Consumed
            }
        }
    }

    /// Select-tool click on a node: resolve the selection, then arm a drag
    /// if the node ended up selected.
    fn select_pointer_down_on_node(
        &mut self,
        node_id: NodeId,
        graph_pos: Point,
        modifiers: Modifiers,
    ) {
        if modifiers.shift {
            self.store.toggle_node_selection(node_id);
        } else if self.store.selection().contains_node(node_id) {
            // Clicked an already-selected node - keep the group for a move
        } else {
            self.store.select_nodes(&[node_id]);
        }

        if self.store.selection().contains_node(node_id) {
            if let Some(node) = self.store.node(node_id) {
                let grab_offset = graph_pos - node.position;
                trace!(node = %node_id, "node drag started");
                self.gesture.start_dragging(node_id, grab_offset);
            }
        }
    }

    /// Add-node tool click: place a node of the pending kind, select it,
    /// and apply the configured stickiness policy.
    fn place_node(&mut self, graph_pos: Point) {
        let kind = self.tools.pending_node_kind().to_string();
        match self.store.add_node(&kind, graph_pos) {
            Ok(id) => {
                self.store.select_nodes(&[id]);
                if let Some(callback) = self.callbacks.on_node_create.as_mut() {
                    callback(id, &kind, graph_pos);
                }
                if self.config.add_node_behavior == AddNodeBehavior::RevertToSelect {
                    self.set_active_tool(Tool::Select);
                }
            }
            Err(err) => {
                // An unregistered pending kind; nothing was placed
                debug!(%err, kind = %kind, "node placement rejected");
            }
        }
    }

    /// Connect tool click: first node click arms the source, a second
    /// click on a different node completes the connection, empty canvas
    /// cancels.
    fn connect_pointer_down(&mut self, graph_pos: Point) {
        let Some(target) = self.store.node_at_point(graph_pos) else {
            self.tools.reset();
            return;
        };

        match self.tools.pending_connect_source() {
            None => self.tools.begin_connection(target),
            Some(source) if source == target => {
                // Re-clicking the armed source keeps it armed
            }
            Some(source) => {
                self.tools.take_connect_source();
                match self.store.add_connection(source, target) {
                    Ok(id) => {
                        if let Some(callback) = self.callbacks.on_connection_create.as_mut() {
                            callback(id, source, target);
                        }
                    }
                    Err(err) => {
                        // Duplicate or raced-away endpoint; the gesture
                        // simply ends without a new edge
                        debug!(%err, %source, %target, "connection rejected");
                    }
                }
            }
        }
    }
}
