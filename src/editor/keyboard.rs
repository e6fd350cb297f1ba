//! Keyboard handling - tool shortcuts, deletion, escape, undo/redo.
//!
//! Shortcuts are a parallel surface onto the same transitions the toolbar
//! drives; nothing here mutates state any other path could not.

use super::CanvasEditor;
use crate::input::{EventOutcome, Key, Modifiers};
use crate::tools::Tool;

impl CanvasEditor {
    pub(super) fn handle_key_down(&mut self, key: Key, modifiers: Modifiers) -> EventOutcome {
        match key {
            // Escape always returns to the select tool and cancels any
            // gesture, even when select is already active.
            Key::Escape => {
                self.tools.reset();
                self.gesture.reset();
                self.set_active_tool(Tool::Select);
                EventOutcome::Consumed
            }

            Key::Delete | Key::Backspace => self.delete_selected(),

            Key::Character(c) if modifiers.primary() => match c.to_ascii_lowercase() {
                'z' if modifiers.shift => {
                    self.store.request_redo();
                    EventOutcome::Consumed
                }
                'z' => {
                    self.store.request_undo();
                    EventOutcome::Consumed
                }
                'y' => {
                    self.store.request_redo();
                    EventOutcome::Consumed
                }
                _ => EventOutcome::Ignored,
            },

            Key::Character(c) if !modifiers.alt => match Tool::from_shortcut(c) {
                Some(tool) => {
                    self.set_active_tool(tool);
                    EventOutcome::Consumed
                }
                None => EventOutcome::Ignored,
            },

            _ => EventOutcome::Ignored,
        }
    }

    /// Bulk-delete the current selection. A no-op (and pass-through) when
    /// nothing is selected, so Backspace keeps its default behavior in
    /// that case.
    fn delete_selected(&mut self) -> EventOutcome {
        let nodes = self.store.selection().sorted_nodes();
        let connections = self.store.selection().sorted_connections();
        if nodes.is_empty() && connections.is_empty() {
            return EventOutcome::Ignored;
        }

        if !nodes.is_empty() {
            self.store.delete_nodes(&nodes);
            if let Some(callback) = self.callbacks.on_node_delete.as_mut() {
                callback(&nodes);
            }
        }
        // Connections selected on their own; cascade already removed the
        // ones incident to deleted nodes.
        for id in connections {
            self.store.delete_connection(id);
        }
        EventOutcome::Consumed
    }
}
