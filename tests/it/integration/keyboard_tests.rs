//! Keyboard shortcut tests.

use crate::helpers::{editor, editor_with_nodes, key_down, key_down_with, mouse_down, mouse_move};
use flowcanvas::input::Modifiers;
use flowcanvas::store::{ActionRecord, HistorySink};
use flowcanvas::Tool;
use std::cell::RefCell;
use std::rc::Rc;

fn ctrl() -> Modifiers {
    Modifiers {
        control: true,
        ..Default::default()
    }
}

fn ctrl_shift() -> Modifiers {
    Modifiers {
        control: true,
        shift: true,
        ..Default::default()
    }
}

#[test]
fn test_single_letter_tool_shortcuts() {
    let mut editor = editor();

    editor.handle_raw_event(key_down("h"));
    assert_eq!(editor.store().active_tool(), Tool::Pan);

    editor.handle_raw_event(key_down("a"));
    assert_eq!(editor.store().active_tool(), Tool::AddNode);

    editor.handle_raw_event(key_down("c"));
    assert_eq!(editor.store().active_tool(), Tool::Connect);

    // Case-insensitive
    editor.handle_raw_event(key_down("V"));
    assert_eq!(editor.store().active_tool(), Tool::Select);
}

#[test]
fn test_shortcut_with_primary_modifier_is_not_a_tool_switch() {
    let mut editor = editor();
    let outcome = editor.handle_raw_event(key_down_with("h", ctrl()));
    assert!(!outcome.is_consumed());
    assert_eq!(editor.store().active_tool(), Tool::Select);
}

#[test]
fn test_unbound_key_passes_through() {
    let mut editor = editor();
    assert!(!editor.handle_raw_event(key_down("x")).is_consumed());
    assert!(!editor.handle_raw_event(key_down("F13")).is_consumed());
}

#[test]
fn test_delete_removes_selection() {
    let (mut editor, ids) = editor_with_nodes(&[("action", (0.0, 0.0)), ("action", (200.0, 0.0)), ("action", (400.0, 0.0))]);
    let deleted: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let deleted = Rc::clone(&deleted);
        editor.callbacks_mut().on_node_delete =
            Some(Box::new(move |ids| deleted.borrow_mut().push(ids.len())));
    }

    editor.store_mut().select_nodes(&ids);
    let outcome = editor.handle_raw_event(key_down("Delete"));

    assert!(outcome.is_consumed());
    assert_eq!(editor.store().node_count(), 0);
    assert!(editor.store().selection().is_empty());
    assert_eq!(deleted.borrow().as_slice(), [3]);
}

#[test]
fn test_delete_with_empty_selection_is_noop() {
    let (mut editor, _ids) = editor_with_nodes(&[("action", (0.0, 0.0))]);

    let outcome = editor.handle_raw_event(key_down("Backspace"));
    assert!(!outcome.is_consumed());
    assert_eq!(editor.store().node_count(), 1);

    // Still a no-op the second time
    assert!(!editor.handle_raw_event(key_down("Delete")).is_consumed());
}

#[test]
fn test_escape_returns_to_select_and_cancels_gesture() {
    let (mut editor, _ids) = editor_with_nodes(&[("action", (0.0, 0.0))]);
    editor.set_active_tool(Tool::Pan);

    // Escape mid-drag: the pan gesture dies with the tool switch
    editor.handle_raw_event(mouse_down(100.0, 100.0));
    assert!(editor.gesture().is_panning());
    let outcome = editor.handle_raw_event(key_down("Escape"));

    assert!(outcome.is_consumed());
    assert_eq!(editor.store().active_tool(), Tool::Select);
    assert!(editor.gesture().is_idle());

    // The stale pointer stream after cancellation is ignored
    assert!(!editor.handle_raw_event(mouse_move(200.0, 200.0)).is_consumed());
}

#[test]
fn test_escape_cancels_marquee_without_selecting() {
    let (mut editor, _ids) = editor_with_nodes(&[("action", (0.0, 0.0))]);

    editor.handle_raw_event(mouse_down(-50.0, -50.0));
    editor.handle_raw_event(mouse_move(400.0, 100.0));
    editor.handle_raw_event(key_down("Escape"));

    assert!(editor.gesture().is_idle());
    assert!(editor.store().selection().is_empty());
}

// ============================================================================
// Undo/redo requests
// ============================================================================

#[derive(Clone, Default)]
struct RecordingHistory {
    log: Rc<RefCell<Vec<String>>>,
}

impl HistorySink for RecordingHistory {
    fn record_action(&mut self, action: &ActionRecord) {
        let label = match action {
            ActionRecord::NodeAdded { .. } => "node-added",
            ActionRecord::NodeUpdated { .. } => "node-updated",
            ActionRecord::NodesDeleted { .. } => "nodes-deleted",
            ActionRecord::ConnectionAdded { .. } => "connection-added",
            ActionRecord::ConnectionDeleted { .. } => "connection-deleted",
        };
        self.log.borrow_mut().push(format!("record:{label}"));
    }

    fn undo(&mut self) {
        self.log.borrow_mut().push("undo".to_string());
    }

    fn redo(&mut self) {
        self.log.borrow_mut().push("redo".to_string());
    }
}

#[test]
fn test_undo_redo_shortcuts_reach_history_sink() {
    let mut editor = editor();
    let history = RecordingHistory::default();
    let log = Rc::clone(&history.log);
    editor.store_mut().set_history_sink(Box::new(history));

    editor.handle_raw_event(key_down_with("z", ctrl()));
    editor.handle_raw_event(key_down_with("Z", ctrl_shift()));
    editor.handle_raw_event(key_down_with("y", ctrl()));

    assert_eq!(log.borrow().as_slice(), ["undo", "redo", "redo"]);
}

#[test]
fn test_platform_modifier_works_like_control() {
    let mut editor = editor();
    let history = RecordingHistory::default();
    let log = Rc::clone(&history.log);
    editor.store_mut().set_history_sink(Box::new(history));

    let cmd = Modifiers {
        platform: true,
        ..Default::default()
    };
    editor.handle_raw_event(key_down_with("z", cmd));
    assert_eq!(log.borrow().as_slice(), ["undo"]);
}

#[test]
fn test_mutations_are_reported_to_history() {
    let mut editor = editor();
    let history = RecordingHistory::default();
    let log = Rc::clone(&history.log);
    editor.store_mut().set_history_sink(Box::new(history));

    let a = editor
        .store_mut()
        .add_node("start", flowcanvas::point(0.0, 0.0))
        .unwrap();
    let b = editor
        .store_mut()
        .add_node("action", flowcanvas::point(200.0, 0.0))
        .unwrap();
    editor.store_mut().add_connection(a, b).unwrap();
    editor.store_mut().delete_node(a);

    assert_eq!(
        log.borrow().as_slice(),
        [
            "record:node-added",
            "record:node-added",
            "record:connection-added",
            "record:nodes-deleted",
        ]
    );
}
