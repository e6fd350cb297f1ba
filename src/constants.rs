//! Crate-wide constants.
//!
//! Centralizes magic numbers and interaction thresholds to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Divisor converting pixel wheel deltas into a zoom factor
pub const WHEEL_PIXEL_ZOOM_DIVISOR: f32 = 500.0;

/// Divisor converting line wheel deltas into a zoom factor
pub const WHEEL_LINE_ZOOM_DIVISOR: f32 = 50.0;

/// Wheel zoom factors closer to 1.0 than this are dropped as noise
pub const WHEEL_ZOOM_EPSILON: f32 = 0.001;

// ============================================================================
// Canvas Defaults
// ============================================================================

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: f32 = 1280.0;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: f32 = 720.0;

/// Default canvas background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#1a1a1a";

// ============================================================================
// Node Defaults
// ============================================================================

/// Default node size in graph units (width, height)
pub const DEFAULT_NODE_SIZE: (f32, f32) = (160.0, 64.0);

/// Default size for condition nodes, which render as diamonds
pub const CONDITION_NODE_SIZE: (f32, f32) = (120.0, 120.0);

/// Default size for start nodes
pub const START_NODE_SIZE: (f32, f32) = (120.0, 48.0);

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum size for marquee selection to trigger (prevents accidental selection)
pub const MIN_MARQUEE_SIZE: f32 = 5.0;
