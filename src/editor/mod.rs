//! Editor shell - wires the store, tools and input pipeline together.
//!
//! A `CanvasEditor` is an explicit value with explicit teardown; several
//! independent editors can live in one process (separate documents, tests).
//! Event handlers are implemented across the sibling modules:
//!
//! - `pointer_down` - selection, marquee/drag initiation, node placement
//! - `drag` - pointer move: pan, node drag, marquee growth
//! - `pointer_up` - finalize marquee and drags
//! - `scroll` - wheel events as anchored zoom requests
//! - `keyboard` - shortcuts, delete, escape, undo/redo

mod drag;
mod keyboard;
mod pointer_down;
mod pointer_up;
mod scroll;

use crate::config::CanvasConfig;
use crate::factory::NodeFactory;
use crate::geometry::Rect;
use crate::input::{EventOutcome, GestureState, InputEvent, InputEventKind, InputPipeline, RawEvent};
use crate::store::GraphStore;
use crate::tools::{Tool, ToolController};
use crate::types::{ConnectionId, NodeId};
use crate::viewport::ZoomBounds;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Hooks the embedding application wires to persistence or higher-level
/// workflow logic. All optional.
#[derive(Default)]
pub struct EditorCallbacks {
    pub on_node_create: Option<Box<dyn FnMut(NodeId, &str, crate::geometry::Point)>>,
    pub on_node_delete: Option<Box<dyn FnMut(&[NodeId])>>,
    pub on_connection_create: Option<Box<dyn FnMut(ConnectionId, NodeId, NodeId)>>,
}

/// The canvas interaction core: store + tool controller + input pipeline.
pub struct CanvasEditor {
    config: CanvasConfig,
    store: GraphStore,
    tools: ToolController,
    gesture: GestureState,
    pipeline: InputPipeline,
    callbacks: EditorCallbacks,
    torn_down: bool,
}

impl CanvasEditor {
    /// Build an editor from an immutable configuration.
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_factory(config, NodeFactory::new())
    }

    /// Build an editor with a custom node-kind registry.
    pub fn with_factory(config: CanvasConfig, factory: NodeFactory) -> Self {
        let bounds = ZoomBounds::new(config.min_zoom, config.max_zoom);
        Self {
            store: GraphStore::new(factory, bounds),
            tools: ToolController::new(),
            gesture: GestureState::Idle,
            pipeline: InputPipeline::new(),
            callbacks: EditorCallbacks::default(),
            config,
            torn_down: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolController {
        &mut self.tools
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Screen-space marquee rectangle, while one is in flight.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match (self.gesture.marquee_start(), self.gesture.marquee_current()) {
            (Some(start), Some(current)) => Some(Rect::from_corners(start, current)),
            _ => None,
        }
    }

    pub fn callbacks_mut(&mut self) -> &mut EditorCallbacks {
        &mut self.callbacks
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // ========================================================================
    // Tool switching
    // ========================================================================

    /// Switch the active tool. Cancels any in-flight gesture and the
    /// connect tool's pending source; switching away from the select tool
    /// also clears the selection.
    pub fn set_active_tool(&mut self, tool: Tool) {
        let previous = self.store.set_active_tool(tool);
        if previous == tool {
            return;
        }

        self.tools.reset();
        self.gesture.reset();
        if tool != Tool::Select {
            self.store.clear_selection();
        }
    }

    // ========================================================================
    // Event entry points
    // ========================================================================

    /// Feed one raw platform event through normalization and dispatch.
    pub fn handle_raw_event(&mut self, raw: RawEvent) -> EventOutcome {
        if self.torn_down {
            return EventOutcome::Ignored;
        }
        match self.pipeline.normalize(raw) {
            Some(event) => self.handle_event(event),
            None => EventOutcome::Ignored,
        }
    }

    /// Dispatch a normalized event to the handler for its kind.
    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        if self.torn_down {
            return EventOutcome::Ignored;
        }
        match event.kind {
            InputEventKind::PointerDown { position, button } => {
                self.handle_pointer_down(position, button, event.modifiers)
            }
            InputEventKind::PointerMove { position } => {
                self.handle_pointer_move(position, event.modifiers)
            }
            InputEventKind::PointerUp { position, button } => {
                self.handle_pointer_up(position, button, event.modifiers)
            }
            InputEventKind::Wheel {
                position,
                zoom_factor,
            } => self.handle_wheel(position, zoom_factor),
            InputEventKind::KeyDown { key } => self.handle_key_down(key, event.modifiers),
            // Key releases carry no canvas semantics today
            InputEventKind::KeyUp { .. } => EventOutcome::Ignored,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Tear the editor down: every subscriber is removed and all gesture
    /// state discarded. Idempotent; events after teardown are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.store.clear_subscribers();
        self.tools.reset();
        self.gesture.reset();
        self.pipeline.reset();
        debug!(document = self.store.document_id(), "editor torn down");
    }
}

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber, honoring `RUST_LOG`. Safe to
/// call more than once; only the first call wins.
pub fn init_logging() {
    LOGGING_INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
