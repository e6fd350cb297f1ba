//! Flowcanvas - the interaction core of a visual workflow editor.
//!
//! Users place nodes on an infinite pannable/zoomable canvas, connect them
//! with edges, and manipulate them with pointer, keyboard and touch input.
//! This crate owns the hard part of that surface and nothing else:
//!
//! - [`store::GraphStore`] - canonical graph state with an atomic action
//!   surface and synchronous full-snapshot subscriber notification
//! - [`viewport::Viewport`] - screen/graph coordinate math with clamped,
//!   anchor-preserving zoom
//! - [`tools`] - the closed tool set and its tool-local gesture buffers
//! - [`input`] - normalization of raw pointer/touch/wheel/keyboard events
//!   into one logical stream
//! - [`editor::CanvasEditor`] - the shell routing normalized events to
//!   per-tool handlers
//!
//! Rendering, persistence and history management are external
//! collaborators: they subscribe to the store, call the action surface,
//! and implement [`store::HistorySink`].

pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod spatial_index;
pub mod store;
pub mod tools;
pub mod types;
pub mod viewport;

pub use config::{AddNodeBehavior, CanvasConfig};
pub use editor::{init_logging, CanvasEditor, EditorCallbacks};
pub use error::{GraphError, GraphResult, NotFoundError, ValidationError};
pub use factory::NodeFactory;
pub use geometry::{point, size, Point, Rect, Size};
pub use store::{GraphSnapshot, GraphStore, NodePatch, Subscription, ViewportPatch};
pub use tools::Tool;
pub use types::{Connection, ConnectionId, Node, NodeId, NodeStyle};
pub use viewport::{Viewport, ZoomBounds};
