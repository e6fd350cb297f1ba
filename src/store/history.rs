//! History collaboration contract.
//!
//! Undo/redo is owned by an external collaborator, not by the store. The
//! store reports one [`ActionRecord`] per committed graph mutation and
//! forwards undo/redo requests (from the keyboard shortcuts) to the sink;
//! it never replays state itself. The collaborator re-enters through the
//! normal action surface when it applies an undo.

use crate::geometry::Point;
use crate::types::{Connection, ConnectionId, Node, NodeId};

/// One committed graph mutation, reported to the history sink.
///
/// Deleted entities are carried in full so the collaborator can rebuild
/// them on undo. Selection, viewport and tool changes are transient UI
/// state and are not reported.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionRecord {
    NodeAdded {
        id: NodeId,
        kind: String,
        position: Point,
    },
    NodeUpdated {
        id: NodeId,
        before: Box<Node>,
        after: Box<Node>,
    },
    NodesDeleted {
        nodes: Vec<Node>,
        connections: Vec<Connection>,
    },
    ConnectionAdded {
        id: ConnectionId,
        source: NodeId,
        target: NodeId,
    },
    ConnectionDeleted {
        connection: Connection,
    },
}

/// External history collaborator.
///
/// The default [`NullHistory`] ignores everything, so embedders that do
/// not care about undo pay nothing.
pub trait HistorySink {
    /// Called once per committed mutation, after subscribers were notified.
    fn record_action(&mut self, action: &ActionRecord);

    /// The user requested undo (Ctrl/Cmd+Z).
    fn undo(&mut self);

    /// The user requested redo (Ctrl/Cmd+Y or Ctrl/Cmd+Shift+Z).
    fn redo(&mut self);
}

/// History sink that drops every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHistory;

impl HistorySink for NullHistory {
    fn record_action(&mut self, _action: &ActionRecord) {}

    fn undo(&mut self) {}

    fn redo(&mut self) {}
}
