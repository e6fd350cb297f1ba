//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the wire shape of the types the persistence and
//! rendering collaborators consume. The store's document id is random per
//! instance and gets redacted.

use crate::helpers::empty_store;
use flowcanvas::geometry::{point, size};
use flowcanvas::types::{Connection, ConnectionId, Node, NodeId, NodeStyle};

#[test]
fn snapshot_node_plain() {
    let node = Node {
        id: NodeId(1),
        kind: "start".to_string(),
        position: point(100.0, 200.0),
        size: size(120.0, 48.0),
        data: serde_json::json!({}),
        style: None,
    };
    insta::assert_json_snapshot!(node, @r#"
    {
      "id": 1,
      "kind": "start",
      "position": {
        "x": 100.0,
        "y": 200.0
      },
      "size": {
        "width": 120.0,
        "height": 48.0
      },
      "data": {}
    }
    "#);
}

#[test]
fn snapshot_node_with_style_and_data() {
    let node = Node {
        id: NodeId(2),
        kind: "action".to_string(),
        position: point(0.0, 0.0),
        size: size(160.0, 64.0),
        data: serde_json::json!({ "label": "Send email" }),
        style: Some(NodeStyle {
            fill_color: Some("#336699".to_string()),
            border_color: None,
            border_width: None,
        }),
    };
    insta::assert_json_snapshot!(node, @r##"
    {
      "id": 2,
      "kind": "action",
      "position": {
        "x": 0.0,
        "y": 0.0
      },
      "size": {
        "width": 160.0,
        "height": 64.0
      },
      "data": {
        "label": "Send email"
      },
      "style": {
        "fill_color": "#336699"
      }
    }
    "##);
}

#[test]
fn snapshot_connection_with_ports() {
    let connection = Connection {
        id: ConnectionId(5),
        source: NodeId(1),
        target: NodeId(2),
        source_port: Some("out".to_string()),
        target_port: Some("in".to_string()),
    };
    insta::assert_json_snapshot!(connection, @r#"
    {
      "id": 5,
      "source": 1,
      "target": 2,
      "source_port": "out",
      "target_port": "in"
    }
    "#);
}

#[test]
fn snapshot_store_state() {
    let mut store = empty_store();
    let a = store.add_node("start", point(0.0, 0.0)).unwrap();
    let b = store.add_node("action", point(200.0, 100.0)).unwrap();
    store.add_connection(a, b).unwrap();
    store.select_nodes(&[a]);

    insta::assert_json_snapshot!(store.snapshot(), {".document_id" => "[document-id]"}, @r#"
    {
      "document_id": "[document-id]",
      "revision": 4,
      "nodes": [
        {
          "id": 0,
          "kind": "start",
          "position": {
            "x": 0.0,
            "y": 0.0
          },
          "size": {
            "width": 120.0,
            "height": 48.0
          },
          "data": {}
        },
        {
          "id": 1,
          "kind": "action",
          "position": {
            "x": 200.0,
            "y": 100.0
          },
          "size": {
            "width": 160.0,
            "height": 64.0
          },
          "data": {}
        }
      ],
      "connections": [
        {
          "id": 0,
          "source": 0,
          "target": 1
        }
      ],
      "viewport": {
        "pan": {
          "x": 0.0,
          "y": 0.0
        },
        "zoom": 1.0
      },
      "selected_nodes": [
        0
      ],
      "selected_connections": [],
      "active_tool": "Select"
    }
    "#);
}

#[test]
fn snapshot_round_trips_through_serde() {
    let mut store = empty_store();
    let a = store.add_node("condition", point(10.0, 20.0)).unwrap();
    let b = store.add_node("action", point(300.0, 20.0)).unwrap();
    store
        .add_connection_with_ports(a, b, Some("true".to_string()), None)
        .unwrap();

    let snapshot = store.snapshot();
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let restored: flowcanvas::GraphSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
