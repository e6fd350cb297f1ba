//! Store subscription and lifecycle tests.

use crate::helpers::{editor_with_nodes, empty_store, key_down, TestGraphBuilder};
use flowcanvas::geometry::point;
use flowcanvas::store::{GraphSnapshot, NodePatch};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_one_notification_per_action() {
    let mut store = empty_store();
    let count = Rc::new(RefCell::new(0_usize));
    let seen = Rc::clone(&count);
    let _sub = store.subscribe(move |_| *seen.borrow_mut() += 1);

    let a = store.add_node("start", point(0.0, 0.0)).unwrap();
    let b = store.add_node("action", point(200.0, 0.0)).unwrap();
    assert_eq!(*count.borrow(), 2);

    store.add_connection(a, b).unwrap();
    assert_eq!(*count.borrow(), 3);

    // A bulk delete is one action and one notification, even though it
    // removes two nodes and a connection
    store.delete_nodes(&[a, b]);
    assert_eq!(*count.borrow(), 4);
}

#[test]
fn test_subscribers_see_committed_state_only() {
    let mut store = empty_store();
    let observed: Rc<RefCell<Vec<(usize, usize)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&observed);
    let _sub = store.subscribe(move |snapshot: &GraphSnapshot| {
        sink.borrow_mut()
            .push((snapshot.nodes.len(), snapshot.connections.len()));
    });

    let a = store.add_node("start", point(0.0, 0.0)).unwrap();
    let b = store.add_node("action", point(200.0, 0.0)).unwrap();
    store.add_connection(a, b).unwrap();
    store.delete_node(a);

    assert_eq!(
        observed.borrow().as_slice(),
        [(1, 0), (2, 0), (2, 1), (1, 0)]
    );
}

#[test]
fn test_rejected_action_does_not_notify() {
    let (mut store, ids) = TestGraphBuilder::new()
        .with_node("action", (0.0, 0.0))
        .build_with_ids();

    let count = Rc::new(RefCell::new(0_usize));
    let seen = Rc::clone(&count);
    let _sub = store.subscribe(move |_| *seen.borrow_mut() += 1);

    assert!(store.add_node("bogus", point(0.0, 0.0)).is_err());
    assert!(store.add_connection(ids[0], ids[0]).is_err());
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_notification_order_matches_registration() {
    let mut store = empty_store();
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    let _a = store.subscribe(move |_| first.borrow_mut().push("renderer"));
    let second = Rc::clone(&order);
    let _b = store.subscribe(move |_| second.borrow_mut().push("toolbar"));

    store.add_node("start", point(0.0, 0.0)).unwrap();
    assert_eq!(order.borrow().as_slice(), ["renderer", "toolbar"]);
}

#[test]
fn test_unsubscribe_is_exact_and_idempotent() {
    let mut store = empty_store();
    let count = Rc::new(RefCell::new(0_usize));
    let seen = Rc::clone(&count);
    let mut sub = store.subscribe(move |_| *seen.borrow_mut() += 1);

    store.add_node("start", point(0.0, 0.0)).unwrap();
    assert_eq!(*count.borrow(), 1);

    assert!(sub.is_active());
    sub.unsubscribe();
    sub.unsubscribe();
    assert!(!sub.is_active());

    store.add_node("action", point(100.0, 0.0)).unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_dropping_guard_unsubscribes() {
    let mut store = empty_store();
    let count = Rc::new(RefCell::new(0_usize));

    {
        let seen = Rc::clone(&count);
        let _sub = store.subscribe(move |_| *seen.borrow_mut() += 1);
        store.add_node("start", point(0.0, 0.0)).unwrap();
    }

    store.add_node("action", point(100.0, 0.0)).unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_snapshot_revision_increases_monotonically() {
    let mut store = empty_store();
    let revisions: Rc<RefCell<Vec<u64>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&revisions);
    let _sub = store.subscribe(move |snapshot: &GraphSnapshot| {
        sink.borrow_mut().push(snapshot.revision);
    });

    let id = store.add_node("start", point(0.0, 0.0)).unwrap();
    store
        .update_node(id, NodePatch::new().with_position(point(50.0, 50.0)))
        .unwrap();
    store.select_nodes(&[id]);
    store.clear_selection();

    let seen = revisions.borrow();
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "revisions: {:?}", seen);
}

// ============================================================================
// Editor teardown
// ============================================================================

#[test]
fn test_teardown_removes_subscribers_and_ignores_events() {
    let (mut editor, ids) = editor_with_nodes(&[("action", (0.0, 0.0))]);
    let count = Rc::new(RefCell::new(0_usize));
    let seen = Rc::clone(&count);
    let _sub = editor.store().subscribe(move |_| *seen.borrow_mut() += 1);

    editor.store_mut().select_nodes(&ids);
    assert_eq!(*count.borrow(), 1);

    editor.teardown();
    assert!(editor.is_torn_down());

    // Events after teardown are ignored wholesale
    assert!(!editor.handle_raw_event(key_down("Delete")).is_consumed());
    assert_eq!(editor.store().node_count(), 1);

    // Direct store access no longer reaches the removed subscribers
    editor.store_mut().clear_selection();
    assert_eq!(*count.borrow(), 1);

    // Teardown is idempotent
    editor.teardown();
}
