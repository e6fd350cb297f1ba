//! Tool selection and tool-local gesture buffers.
//!
//! Exactly one tool is active at a time. Entering a tool resets the
//! buffers of the previous one, so an unfinished gesture (a half-built
//! connection, a marquee in flight) never leaks across a switch.

mod palette;

pub use palette::{delete_button_enabled, palette, ToolButton};

use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// The closed set of canvas tools.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Pan,
    AddNode,
    Connect,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pan => "Pan",
            Tool::AddNode => "Add Node",
            Tool::Connect => "Connect",
        }
    }

    /// Default single-key shortcut for this tool.
    pub fn shortcut(&self) -> char {
        match self {
            Tool::Select => 'v',
            Tool::Pan => 'h',
            Tool::AddNode => 'a',
            Tool::Connect => 'c',
        }
    }

    /// Resolve a single-key shortcut (case-insensitive) to a tool.
    pub fn from_shortcut(key: char) -> Option<Tool> {
        match key.to_ascii_lowercase() {
            'v' => Some(Tool::Select),
            'h' => Some(Tool::Pan),
            'a' => Some(Tool::AddNode),
            'c' => Some(Tool::Connect),
            _ => None,
        }
    }

    pub fn all() -> &'static [Tool] {
        &[Tool::Select, Tool::Pan, Tool::AddNode, Tool::Connect]
    }
}

/// Tool-local transient state.
///
/// The connect tool's pending source lives here (not in the drag-gesture
/// state machine) because it spans two separate click gestures. The
/// add-node tool carries the kind it will place next.
#[derive(Clone, Debug)]
pub struct ToolController {
    /// Source node of a half-built connection, if the first click landed
    pending_connect_source: Option<NodeId>,
    /// Kind the add-node tool places on the next click
    pending_node_kind: String,
}

impl Default for ToolController {
    fn default() -> Self {
        Self {
            pending_connect_source: None,
            pending_node_kind: "action".to_string(),
        }
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all tool-local gesture state. Called on every tool switch
    /// and on Escape.
    pub fn reset(&mut self) {
        self.pending_connect_source = None;
    }

    pub fn pending_connect_source(&self) -> Option<NodeId> {
        self.pending_connect_source
    }

    pub fn begin_connection(&mut self, source: NodeId) {
        self.pending_connect_source = Some(source);
    }

    /// Take the pending source, clearing it.
    pub fn take_connect_source(&mut self) -> Option<NodeId> {
        self.pending_connect_source.take()
    }

    pub fn pending_node_kind(&self) -> &str {
        &self.pending_node_kind
    }

    /// Choose the kind the add-node tool places. Survives tool switches;
    /// only the in-flight gesture state is reset.
    pub fn set_pending_node_kind(&mut self, kind: impl Into<String>) {
        self.pending_node_kind = kind.into();
    }
}
