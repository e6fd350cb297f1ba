//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestGraphBuilder` - Builder pattern for creating stores with nodes
//! - Editor constructors pre-loaded with nodes
//! - Raw-event constructors for driving the input pipeline
//! - Common assertion helpers

use flowcanvas::geometry::{point, Point};
use flowcanvas::input::{Modifiers, MouseButton, RawEvent, WheelDelta};
use flowcanvas::store::GraphStore;
use flowcanvas::types::NodeId;
use flowcanvas::viewport::ZoomBounds;
use flowcanvas::{CanvasConfig, CanvasEditor, NodeFactory};

// ============================================================================
// TestGraphBuilder - Builder pattern for creating test stores
// ============================================================================

/// Builder for creating test stores with nodes and viewport configuration.
///
/// # Example
/// ```ignore
/// let (store, ids) = TestGraphBuilder::new()
///     .with_node("start", (0.0, 0.0))
///     .with_node("action", (200.0, 0.0))
///     .with_zoom(1.5)
///     .build_with_ids();
/// ```
pub struct TestGraphBuilder {
    nodes: Vec<(String, Point)>,
    zoom: f32,
    pan: Point,
}

impl Default for TestGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            zoom: 1.0,
            pan: Point::ZERO,
        }
    }

    /// Queue a node of the given kind at the given graph position.
    pub fn with_node(mut self, kind: impl Into<String>, pos: (f32, f32)) -> Self {
        self.nodes.push((kind.into(), point(pos.0, pos.1)));
        self
    }

    /// Queue N action nodes at (i * spacing, 0).
    pub fn with_n_action_nodes(mut self, count: usize, spacing: f32) -> Self {
        for i in 0..count {
            self.nodes
                .push(("action".to_string(), point(i as f32 * spacing, 0.0)));
        }
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_pan(mut self, x: f32, y: f32) -> Self {
        self.pan = point(x, y);
        self
    }

    /// Build the store with all queued nodes.
    pub fn build(self) -> GraphStore {
        self.build_with_ids().0
    }

    /// Build the store, returning the ids of the queued nodes in order.
    pub fn build_with_ids(self) -> (GraphStore, Vec<NodeId>) {
        let mut store = GraphStore::new(NodeFactory::new(), ZoomBounds::default());
        store.set_viewport(flowcanvas::ViewportPatch {
            pan: Some(self.pan),
            zoom: Some(self.zoom),
        });

        let ids = self
            .nodes
            .into_iter()
            .map(|(kind, pos)| {
                store
                    .add_node(&kind, pos)
                    .expect("builder kinds must be registered")
            })
            .collect();
        (store, ids)
    }
}

// ============================================================================
// Standalone helper functions
// ============================================================================

/// Create an empty store with default factory and zoom bounds.
pub fn empty_store() -> GraphStore {
    GraphStore::new(NodeFactory::new(), ZoomBounds::default())
}

/// Create an editor with the default configuration.
pub fn editor() -> CanvasEditor {
    flowcanvas::init_logging();
    CanvasEditor::new(CanvasConfig::default())
}

/// Create an editor pre-loaded with nodes; returns the ids in order.
pub fn editor_with_nodes(nodes: &[(&str, (f32, f32))]) -> (CanvasEditor, Vec<NodeId>) {
    let mut editor = editor();
    let ids = nodes
        .iter()
        .map(|(kind, pos)| {
            editor
                .store_mut()
                .add_node(kind, point(pos.0, pos.1))
                .expect("test kinds must be registered")
        })
        .collect();
    (editor, ids)
}

// ============================================================================
// Raw-event constructors
// ============================================================================

pub fn mouse_down(x: f32, y: f32) -> RawEvent {
    mouse_down_with(x, y, Modifiers::default())
}

pub fn mouse_down_with(x: f32, y: f32, modifiers: Modifiers) -> RawEvent {
    RawEvent::MouseDown {
        position: point(x, y),
        button: MouseButton::Left,
        modifiers,
        timestamp_ms: 0,
    }
}

pub fn mouse_move(x: f32, y: f32) -> RawEvent {
    RawEvent::MouseMove {
        position: point(x, y),
        modifiers: Modifiers::default(),
        timestamp_ms: 0,
    }
}

pub fn mouse_up(x: f32, y: f32) -> RawEvent {
    mouse_up_with(x, y, Modifiers::default())
}

pub fn mouse_up_with(x: f32, y: f32, modifiers: Modifiers) -> RawEvent {
    RawEvent::MouseUp {
        position: point(x, y),
        button: MouseButton::Left,
        modifiers,
        timestamp_ms: 0,
    }
}

/// A full click (down then up) at one position.
pub fn click(editor: &mut CanvasEditor, x: f32, y: f32) {
    editor.handle_raw_event(mouse_down(x, y));
    editor.handle_raw_event(mouse_up(x, y));
}

pub fn key_down(key: &str) -> RawEvent {
    key_down_with(key, Modifiers::default())
}

pub fn key_down_with(key: &str, modifiers: Modifiers) -> RawEvent {
    RawEvent::KeyDown {
        key: key.to_string(),
        modifiers,
        timestamp_ms: 0,
    }
}

pub fn wheel_pixels(x: f32, y: f32, delta_y: f32) -> RawEvent {
    RawEvent::Wheel {
        position: point(x, y),
        delta: WheelDelta::Pixels(point(0.0, delta_y)),
        modifiers: Modifiers::default(),
        timestamp_ms: 0,
    }
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert that a store has a specific number of nodes.
pub fn assert_node_count(store: &GraphStore, expected: usize) {
    assert_eq!(
        store.node_count(),
        expected,
        "Expected {} nodes, found {}",
        expected,
        store.node_count()
    );
}

/// Assert that a node sits at a specific graph position.
pub fn assert_node_position(store: &GraphStore, id: NodeId, expected: (f32, f32)) {
    let node = store.node(id);
    assert!(node.is_some(), "Node {} not found", id);
    assert_eq!(
        node.unwrap().position,
        point(expected.0, expected.1),
        "Node {} has wrong position",
        id
    );
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_empty_store() {
        let store = TestGraphBuilder::new().build();
        assert_eq!(store.node_count(), 0);
        assert_eq!(store.viewport().zoom, 1.0);
    }

    #[test]
    fn test_builder_with_nodes() {
        let (store, ids) = TestGraphBuilder::new()
            .with_node("start", (0.0, 0.0))
            .with_node("action", (200.0, 0.0))
            .build_with_ids();

        assert_node_count(&store, 2);
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_builder_with_viewport() {
        let store = TestGraphBuilder::new()
            .with_zoom(2.0)
            .with_pan(50.0, 75.0)
            .build();
        assert_eq!(store.viewport().zoom, 2.0);
        assert_eq!(store.viewport().pan, point(50.0, 75.0));
    }

    #[test]
    fn test_editor_with_nodes() {
        let (editor, ids) = editor_with_nodes(&[("start", (0.0, 0.0)), ("action", (100.0, 0.0))]);
        assert_node_count(editor.store(), 2);
        assert_eq!(ids.len(), 2);
    }
}
