//! Immutable canvas configuration.
//!
//! Supplied once at editor construction and never mutated during a
//! session. Zoom bounds feed the viewport transform's clamping.

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_ZOOM, MIN_ZOOM,
};
use serde::{Deserialize, Serialize};

/// What the add-node tool does after placing a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddNodeBehavior {
    /// Snap back to the select tool after a single placement
    #[default]
    RevertToSelect,
    /// Stay armed for repeated placement
    Sticky,
}

/// Canvas configuration, fixed for the lifetime of an editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Background color as hex string
    pub background_color: String,
    /// Minimum zoom factor
    pub min_zoom: f32,
    /// Maximum zoom factor
    pub max_zoom: f32,
    /// Add-node tool placement policy
    pub add_node_behavior: AddNodeBehavior,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            add_node_behavior: AddNodeBehavior::default(),
        }
    }
}

impl CanvasConfig {
    pub fn with_zoom_bounds(mut self, min: f32, max: f32) -> Self {
        self.min_zoom = min;
        self.max_zoom = max;
        self
    }

    pub fn with_add_node_behavior(mut self, behavior: AddNodeBehavior) -> Self {
        self.add_node_behavior = behavior;
        self
    }

    pub fn with_dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
