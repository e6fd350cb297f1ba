//! Graph store - canonical canvas state and its action surface.
//!
//! The store exclusively owns nodes, connections, viewport, selection and
//! the active tool. Every other component holds ids or snapshots and
//! requests changes through the action methods here; nothing else writes
//! these fields. Actions validate first and commit all-or-nothing, so a
//! rejected operation leaves the store untouched and usable.
//!
//! Subscribers are notified synchronously, in registration order, exactly
//! once per committed action, always with a fully committed snapshot.

mod history;
mod selection;
mod subscribers;

pub use history::{ActionRecord, HistorySink, NullHistory};
pub use selection::SelectionManager;
pub use subscribers::{SubscriberRegistry, Subscription};

use crate::error::{GraphResult, NotFoundError, ValidationError};
use crate::factory::NodeFactory;
use crate::geometry::{Point, Rect, Size};
use crate::spatial_index::SpatialIndex;
use crate::tools::Tool;
use crate::types::{Connection, ConnectionId, Node, NodeId, NodeStyle};
use crate::viewport::{Viewport, ZoomBounds};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Partial update applied to an existing node by [`GraphStore::update_node`].
///
/// Unset fields are left untouched; `data` replaces the whole payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub data: Option<serde_json::Value>,
    pub style: Option<NodeStyle>,
}

impl NodePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = Some(style);
        self
    }

    fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.size.is_none()
            && self.data.is_none()
            && self.style.is_none()
    }
}

/// Partial viewport update. Zoom is clamped before commit, never rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportPatch {
    pub pan: Option<Point>,
    pub zoom: Option<f32>,
}

impl ViewportPatch {
    pub fn pan(pan: Point) -> Self {
        Self {
            pan: Some(pan),
            zoom: None,
        }
    }

    pub fn zoom(zoom: f32) -> Self {
        Self {
            pan: None,
            zoom: Some(zoom),
        }
    }
}

/// Full committed state, handed to subscribers and serializable for the
/// persistence collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Identity of the owning store (UUID v4 string)
    pub document_id: String,
    /// Monotonic commit counter
    pub revision: u64,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    pub viewport: Viewport,
    pub selected_nodes: Vec<NodeId>,
    pub selected_connections: Vec<ConnectionId>,
    pub active_tool: Tool,
}

/// The canonical canvas state container.
///
/// Explicitly constructed, never a module-level singleton; multiple
/// independent stores can coexist in one process.
pub struct GraphStore {
    document_id: String,
    factory: NodeFactory,
    /// Nodes in insertion order; the order doubles as z-order, last on top
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    next_node_id: u64,
    next_connection_id: u64,
    viewport: Viewport,
    zoom_bounds: ZoomBounds,
    selection: SelectionManager,
    active_tool: Tool,
    spatial: SpatialIndex,
    subscribers: SubscriberRegistry,
    history: Box<dyn HistorySink>,
    revision: u64,
}

impl GraphStore {
    pub fn new(factory: NodeFactory, zoom_bounds: ZoomBounds) -> Self {
        Self {
            document_id: Uuid::new_v4().to_string(),
            factory,
            nodes: Vec::new(),
            connections: Vec::new(),
            next_node_id: 0,
            next_connection_id: 0,
            viewport: Viewport::default(),
            zoom_bounds,
            selection: SelectionManager::new(),
            active_tool: Tool::default(),
            spatial: SpatialIndex::new(),
            subscribers: SubscriberRegistry::new(),
            history: Box::new(NullHistory),
            revision: 0,
        }
    }

    /// Replace the no-op history sink with a real collaborator.
    pub fn set_history_sink(&mut self, sink: Box<dyn HistorySink>) {
        self.history = sink;
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn zoom_bounds(&self) -> ZoomBounds {
        self.zoom_bounds
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut NodeFactory {
        &mut self.factory
    }

    /// Topmost node whose bounds contain the given graph-space point.
    ///
    /// Candidates come from the spatial index (O(log n)); ties are broken
    /// by z-order, scanning front to back.
    pub fn node_at_point(&self, p: Point) -> Option<NodeId> {
        let candidates: HashSet<NodeId> = self.spatial.query_point(p).into_iter().collect();
        self.nodes
            .iter()
            .rev()
            .find(|node| candidates.contains(&node.id))
            .map(|node| node.id)
    }

    /// All nodes whose bounds intersect the given graph-space rect.
    pub fn nodes_in_rect(&self, rect: Rect) -> Vec<NodeId> {
        self.spatial.query_rect(rect)
    }

    /// Full state snapshot with deterministic selection ordering.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            document_id: self.document_id.clone(),
            revision: self.revision,
            nodes: self.nodes.clone(),
            connections: self.connections.clone(),
            viewport: self.viewport,
            selected_nodes: self.selection.sorted_nodes(),
            selected_connections: self.selection.sorted_connections(),
            active_tool: self.active_tool,
        }
    }

    /// Register a subscriber; it receives the snapshot after every commit
    /// until the returned guard is dropped or unsubscribed.
    pub fn subscribe(&self, callback: impl FnMut(&GraphSnapshot) + 'static) -> Subscription {
        self.subscribers.subscribe(callback)
    }

    /// Drop every subscriber. Called from editor teardown.
    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    // ========================================================================
    // Node actions
    // ========================================================================

    /// Create a node of a registered kind at a graph position.
    ///
    /// Rejects unregistered kinds with a validation error; valid requests
    /// never fail.
    pub fn add_node(&mut self, kind: &str, position: Point) -> GraphResult<NodeId> {
        let id = NodeId(self.next_node_id);
        let node = self.factory.create_node(kind, position, id)?;
        self.next_node_id += 1;

        self.spatial.insert(node.id, node.position, node.size);
        debug!(node = %node.id, kind, "node added");
        let record = ActionRecord::NodeAdded {
            id: node.id,
            kind: node.kind.clone(),
            position: node.position,
        };
        self.nodes.push(node);

        self.commit(record);
        Ok(id)
    }

    /// Merge a partial update into an existing node.
    pub fn update_node(&mut self, id: NodeId, patch: NodePatch) -> GraphResult<()> {
        if patch.is_empty() {
            // Nothing to change; still validate the id so callers hear
            // about stale references.
            return match self.node(id) {
                Some(_) => Ok(()),
                None => Err(NotFoundError::Node(id).into()),
            };
        }

        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotFoundError::Node(id))?;

        let before = node.clone();
        if let Some(position) = patch.position {
            node.position = position;
        }
        if let Some(size) = patch.size {
            node.size = size;
        }
        if let Some(data) = patch.data {
            node.data = data;
        }
        if let Some(style) = patch.style {
            node.style = Some(style);
        }
        let after = node.clone();

        self.spatial.update(id, after.position, after.size);
        self.commit(ActionRecord::NodeUpdated {
            id,
            before: Box::new(before),
            after: Box::new(after),
        });
        Ok(())
    }

    /// Delete a single node, cascading its incident connections.
    /// A no-op for an id that is already gone.
    pub fn delete_node(&mut self, id: NodeId) {
        self.delete_nodes(&[id]);
    }

    /// Delete a set of nodes, cascading incident connections and pruning
    /// the selection. Absent ids are skipped so stale bulk requests stay
    /// idempotent.
    pub fn delete_nodes(&mut self, ids: &[NodeId]) {
        let targets: HashSet<NodeId> = ids
            .iter()
            .copied()
            .filter(|id| self.node(*id).is_some())
            .collect();
        if targets.is_empty() {
            return;
        }

        let mut removed_nodes = Vec::with_capacity(targets.len());
        self.nodes.retain(|node| {
            if targets.contains(&node.id) {
                removed_nodes.push(node.clone());
                false
            } else {
                true
            }
        });

        let mut removed_connections = Vec::new();
        self.connections.retain(|connection| {
            if targets.iter().any(|id| connection.touches(*id)) {
                removed_connections.push(connection.clone());
                false
            } else {
                true
            }
        });

        for node in &removed_nodes {
            self.spatial.remove(node.id);
            self.selection.remove_node(node.id);
        }
        for connection in &removed_connections {
            self.selection.remove_connection(connection.id);
        }

        debug!(
            nodes = removed_nodes.len(),
            connections = removed_connections.len(),
            "nodes deleted"
        );
        self.commit(ActionRecord::NodesDeleted {
            nodes: removed_nodes,
            connections: removed_connections,
        });
    }

    // ========================================================================
    // Connection actions
    // ========================================================================

    /// Connect two nodes without ports.
    pub fn add_connection(&mut self, source: NodeId, target: NodeId) -> GraphResult<ConnectionId> {
        self.add_connection_with_ports(source, target, None, None)
    }

    /// Connect two nodes through optional named ports.
    ///
    /// Rejects absent endpoints, self-loops, and duplicates of an existing
    /// connection (same endpoints and ports).
    pub fn add_connection_with_ports(
        &mut self,
        source: NodeId,
        target: NodeId,
        source_port: Option<String>,
        target_port: Option<String>,
    ) -> GraphResult<ConnectionId> {
        if self.node(source).is_none() {
            return Err(ValidationError::MissingEndpoint(source).into());
        }
        if self.node(target).is_none() {
            return Err(ValidationError::MissingEndpoint(target).into());
        }
        if source == target {
            return Err(ValidationError::SelfLoop(source).into());
        }

        let connection = Connection {
            id: ConnectionId(self.next_connection_id),
            source,
            target,
            source_port,
            target_port,
        };
        if self.connections.iter().any(|c| c.same_endpoints(&connection)) {
            return Err(ValidationError::DuplicateConnection { source, target }.into());
        }
        self.next_connection_id += 1;

        let id = connection.id;
        debug!(connection = %id, %source, %target, "connection added");
        self.connections.push(connection);
        self.commit(ActionRecord::ConnectionAdded { id, source, target });
        Ok(id)
    }

    /// Delete a connection. A no-op for an id that is already gone.
    pub fn delete_connection(&mut self, id: ConnectionId) {
        let Some(index) = self.connections.iter().position(|c| c.id == id) else {
            return;
        };
        let connection = self.connections.remove(index);
        self.selection.remove_connection(id);
        self.commit(ActionRecord::ConnectionDeleted { connection });
    }

    // ========================================================================
    // Selection actions
    // ========================================================================

    /// Replace the node selection. Ids not present in the store are
    /// silently dropped; selections often derive from stale UI events.
    pub fn select_nodes(&mut self, ids: &[NodeId]) {
        let live: Vec<NodeId> = ids
            .iter()
            .copied()
            .filter(|id| self.node(*id).is_some())
            .collect();
        self.selection.replace_nodes(live);
        self.touch();
    }

    /// Replace the connection selection, dropping unknown ids.
    pub fn select_connections(&mut self, ids: &[ConnectionId]) {
        let live: Vec<ConnectionId> = ids
            .iter()
            .copied()
            .filter(|id| self.connection(*id).is_some())
            .collect();
        self.selection.replace_connections(live);
        self.touch();
    }

    /// Toggle one node in or out of the selection (additive selection via
    /// a modifier key). Unknown ids are ignored.
    pub fn toggle_node_selection(&mut self, id: NodeId) {
        if self.node(id).is_none() {
            return;
        }
        self.selection.toggle_node(id);
        self.touch();
    }

    /// Grow the node selection without replacing it (marquee finalize).
    /// Unknown ids are ignored.
    pub fn extend_node_selection(&mut self, ids: &[NodeId]) {
        for id in ids {
            if self.node(*id).is_some() {
                self.selection.insert_node(*id);
            }
        }
        self.touch();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.touch();
    }

    // ========================================================================
    // Viewport actions
    // ========================================================================

    /// Apply a partial viewport update; zoom is clamped to bounds.
    pub fn set_viewport(&mut self, patch: ViewportPatch) {
        if let Some(pan) = patch.pan {
            self.viewport.pan = pan;
        }
        if let Some(zoom) = patch.zoom {
            self.viewport.zoom = self.zoom_bounds.clamp(zoom);
        }
        self.touch();
    }

    /// Translate the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.viewport = self.viewport.panned_by(delta);
        self.touch();
    }

    /// Anchor-preserving zoom: the graph point under `anchor` stays put.
    pub fn zoom_at(&mut self, anchor: Point, factor: f32) {
        self.viewport = self.viewport.zoomed_at(anchor, factor, self.zoom_bounds);
        self.touch();
    }

    // ========================================================================
    // Tool actions
    // ========================================================================

    /// Commit a new active tool, returning the previous one. The editor
    /// cancels any in-flight gesture when the returned tool differs.
    pub fn set_active_tool(&mut self, tool: Tool) -> Tool {
        let previous = self.active_tool;
        if previous != tool {
            self.active_tool = tool;
            debug!(from = previous.label(), to = tool.label(), "tool switched");
            self.touch();
        }
        previous
    }

    // ========================================================================
    // History requests
    // ========================================================================

    /// Forward an undo request to the history collaborator.
    pub fn request_undo(&mut self) {
        self.history.undo();
    }

    /// Forward a redo request to the history collaborator.
    pub fn request_redo(&mut self) {
        self.history.redo();
    }

    // ========================================================================
    // Commit plumbing
    // ========================================================================

    /// Commit a graph mutation: bump the revision, notify subscribers with
    /// the fresh snapshot, then report the action to the history sink.
    fn commit(&mut self, record: ActionRecord) {
        self.touch();
        self.history.record_action(&record);
    }

    /// Commit a transient-state change (selection/viewport/tool) that is
    /// not reported to history.
    fn touch(&mut self) {
        self.revision += 1;
        let snapshot = self.snapshot();
        self.subscribers.notify(&snapshot);
    }
}
