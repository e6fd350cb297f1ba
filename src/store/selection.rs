//! Selection state for nodes and connections.
//!
//! The selection is always a subset of ids currently present in the store;
//! the store prunes it on deletion and filters replacement sets before they
//! land here.

use crate::types::{ConnectionId, NodeId};
use std::collections::HashSet;

#[derive(Clone, Debug, Default)]
pub struct SelectionManager {
    nodes: HashSet<NodeId>,
    connections: HashSet<ConnectionId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the node selection with the given set.
    pub fn replace_nodes(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.nodes = ids.into_iter().collect();
    }

    /// Replace the connection selection with the given set.
    pub fn replace_connections(&mut self, ids: impl IntoIterator<Item = ConnectionId>) {
        self.connections = ids.into_iter().collect();
    }

    /// Toggle a single node in and out of the selection (Shift-click).
    pub fn toggle_node(&mut self, id: NodeId) {
        if !self.nodes.remove(&id) {
            self.nodes.insert(id);
        }
    }

    pub fn insert_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    pub fn remove_node(&mut self, id: NodeId) {
        self.nodes.remove(&id);
    }

    pub fn remove_connection(&mut self, id: ConnectionId) {
        self.connections.remove(&id);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.connections.clear();
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn contains_connection(&self, id: ConnectionId) -> bool {
        self.connections.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Selected node ids in ascending order, for deterministic iteration.
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Selected connection ids in ascending order.
    pub fn sorted_connections(&self) -> Vec<ConnectionId> {
        let mut ids: Vec<ConnectionId> = self.connections.iter().copied().collect();
        ids.sort();
        ids
    }
}
