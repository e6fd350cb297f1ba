//! Error types for graph mutations.
//!
//! Provides unified error handling for the store's action surface. Two
//! classes exist: requests that are malformed or disallowed
//! (`ValidationError`) and requests referencing ids that are no longer
//! present (`NotFoundError`). Bulk operations never produce either class;
//! absent ids are skipped so stale selections stay harmless.

use crate::types::{ConnectionId, NodeId};
use std::fmt;
use thiserror::Error;

/// A mutation request that is malformed or disallowed by policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Node kind is not registered with the factory
    UnknownNodeKind(String),

    /// Connection endpoint does not exist in the store
    MissingEndpoint(NodeId),

    /// Connection from a node to itself
    SelfLoop(NodeId),

    /// An identical connection already exists
    DuplicateConnection { source: NodeId, target: NodeId },
}

// Display/Error are implemented by hand rather than via `#[derive(Error)]`:
// `DuplicateConnection`'s `source` field is a connection endpoint, not an
// error source, but thiserror unconditionally treats any field named
// `source` as the `Error::source()` value (no opt-out attribute exists),
// which would require `NodeId: std::error::Error`. These impls reproduce the
// same messages while keeping the endpoints as plain data (no error chain).
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownNodeKind(kind) => {
                write!(f, "unknown node kind: {kind:?}")
            }
            ValidationError::MissingEndpoint(id) => {
                write!(f, "connection endpoint {id} does not exist")
            }
            ValidationError::SelfLoop(id) => {
                write!(f, "self-loop connections are not allowed (node {id})")
            }
            ValidationError::DuplicateConnection { source, target } => {
                write!(f, "duplicate connection {source} -> {target}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// An operation referencing an id that is not in the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("node not found: {0}")]
    Node(NodeId),

    #[error("connection not found: {0}")]
    Connection(ConnectionId),
}

/// Any error the store's action surface can surface to a caller.
///
/// No variant is fatal; the store is left untouched by a rejected
/// operation and remains usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl GraphError {
    /// Returns true if the request itself was malformed or disallowed.
    pub fn is_validation(&self) -> bool {
        matches!(self, GraphError::Validation(_))
    }

    /// Returns true if the request referenced an absent id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound(_))
    }
}

/// Result type alias for store operations
pub type GraphResult<T> = Result<T, GraphError>;
