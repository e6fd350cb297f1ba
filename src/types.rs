//! Core types for the graph canvas.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: nodes, connections, their identifiers, and style overrides.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a node, unique within one store for the node's
/// lifetime. Assigned by the store, never reused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Stable identifier of a connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A node placed on the infinite canvas.
///
/// Each node has a unique ID, a kind tag from the factory's registry, a
/// position and size in graph coordinates, a kind-specific data payload,
/// and optional per-node style overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,
    /// Kind tag, e.g. "start", "action", "condition"
    pub kind: String,
    /// Position on the canvas in graph coordinates
    pub position: Point,
    /// Size of the node in graph units
    pub size: Size,
    /// Kind-specific payload; an empty object for freshly created nodes
    pub data: serde_json::Value,
    /// Per-node style overrides, absent unless customized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NodeStyle>,
}

/// Per-node visual overrides. The rendering surface interprets these; the
/// core only stores and round-trips them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Fill color as hex string (e.g. "#2d2d2d")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Border color as hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Border width in pixels at zoom 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
}

/// A directed connection between two nodes.
///
/// Both endpoints always reference nodes currently present in the store;
/// deleting a node cascades deletion of its incident connections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique identifier for this connection
    pub id: ConnectionId,
    /// Node the connection originates from
    pub source: NodeId,
    /// Node the connection terminates at
    pub target: NodeId,
    /// Optional port name on the source node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    /// Optional port name on the target node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_port: Option<String>,
}

impl Connection {
    /// Returns true if `other` joins the same endpoints through the same
    /// ports. Used for duplicate rejection.
    pub fn same_endpoints(&self, other: &Connection) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.source_port == other.source_port
            && self.target_port == other.target_port
    }

    /// Returns true if this connection touches the given node on either end.
    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}
