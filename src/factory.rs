//! Node construction.
//!
//! The factory owns the registry of known node kinds and builds fresh node
//! records. It is pure: id generation and uniqueness are the store's
//! responsibility, the factory just assembles the record it is asked for.

use crate::constants::{CONDITION_NODE_SIZE, DEFAULT_NODE_SIZE, START_NODE_SIZE};
use crate::error::ValidationError;
use crate::geometry::{Point, Size};
use crate::types::{Node, NodeId};

/// Builds node records for registered kinds.
///
/// Ships with the built-in workflow kinds (`start`, `action`, `condition`);
/// embedders extend the set through [`NodeFactory::register_kind`].
#[derive(Clone, Debug)]
pub struct NodeFactory {
    kinds: Vec<KindSpec>,
}

/// Registered kind metadata: the tag plus the default size new nodes get.
#[derive(Clone, Debug)]
struct KindSpec {
    tag: String,
    default_size: Size,
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeFactory {
    /// Create a factory with the built-in workflow kinds registered.
    pub fn new() -> Self {
        let mut factory = Self { kinds: Vec::new() };
        factory.register_kind("start", START_NODE_SIZE.into());
        factory.register_kind("action", DEFAULT_NODE_SIZE.into());
        factory.register_kind("condition", CONDITION_NODE_SIZE.into());
        factory
    }

    /// Register a node kind. Re-registering an existing tag replaces its
    /// default size.
    pub fn register_kind(&mut self, tag: impl Into<String>, default_size: Size) {
        let tag = tag.into();
        if let Some(existing) = self.kinds.iter_mut().find(|k| k.tag == tag) {
            existing.default_size = default_size;
        } else {
            self.kinds.push(KindSpec { tag, default_size });
        }
    }

    /// Returns true if `tag` names a registered kind.
    pub fn knows_kind(&self, tag: &str) -> bool {
        self.kinds.iter().any(|k| k.tag == tag)
    }

    /// All registered kind tags, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(|k| k.tag.as_str())
    }

    /// Build a fresh node record of the given kind at the given position.
    ///
    /// The payload starts as an empty object and no style overrides are
    /// set. Fails for unregistered kinds.
    pub fn create_node(
        &self,
        kind: &str,
        position: Point,
        id: NodeId,
    ) -> Result<Node, ValidationError> {
        let spec = self
            .kinds
            .iter()
            .find(|k| k.tag == kind)
            .ok_or_else(|| ValidationError::UnknownNodeKind(kind.to_string()))?;

        Ok(Node {
            id,
            kind: spec.tag.clone(),
            position,
            size: spec.default_size,
            data: serde_json::Value::Object(serde_json::Map::new()),
            style: None,
        })
    }
}
