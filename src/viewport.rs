//! Viewport state and coordinate conversion.
//!
//! The viewport is a pan offset plus a zoom factor. All conversions between
//! screen and graph coordinates go through this module so the formulas live
//! in exactly one place.
//!
//! Invariant: `zoom` never leaves the configured `[min_zoom, max_zoom]`
//! range. Out-of-range requests are clamped, not rejected.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::geometry::{point, Point};
use serde::{Deserialize, Serialize};

/// Zoom clamping bounds, taken from the canvas configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
        }
    }
}

impl ZoomBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min, self.max)
    }
}

/// Pan offset and zoom factor of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset in screen pixels
    pub pan: Point,
    /// Zoom factor, kept within the editor's zoom bounds
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Point::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Convert a screen position to graph coordinates.
    #[inline]
    pub fn screen_to_graph(&self, screen_pos: Point) -> Point {
        point(
            (screen_pos.x - self.pan.x) / self.zoom,
            (screen_pos.y - self.pan.y) / self.zoom,
        )
    }

    /// Convert a graph position to screen coordinates.
    #[inline]
    pub fn graph_to_screen(&self, graph_pos: Point) -> Point {
        point(
            graph_pos.x * self.zoom + self.pan.x,
            graph_pos.y * self.zoom + self.pan.y,
        )
    }

    /// Convert a delta from screen to graph units (for drag operations).
    #[inline]
    pub fn delta_screen_to_graph(&self, delta: Point) -> Point {
        point(delta.x / self.zoom, delta.y / self.zoom)
    }

    /// Translate the pan offset by a screen-space delta.
    pub fn panned_by(&self, delta: Point) -> Viewport {
        Viewport {
            pan: self.pan + delta,
            zoom: self.zoom,
        }
    }

    /// Rescale zoom by `factor`, clamped to `bounds`, keeping the graph
    /// point under `anchor` (a screen position) visually fixed.
    ///
    /// The pan is re-derived from the anchor's graph coordinate so that the
    /// point that was under the cursor before the zoom is still under it
    /// after, up to clamping.
    pub fn zoomed_at(&self, anchor: Point, factor: f32, bounds: ZoomBounds) -> Viewport {
        let new_zoom = bounds.clamp(self.zoom * factor);
        if new_zoom == self.zoom {
            return *self;
        }

        let anchor_graph = self.screen_to_graph(anchor);
        let pan = point(
            anchor.x - anchor_graph.x * new_zoom,
            anchor.y - anchor_graph.y * new_zoom,
        );

        Viewport {
            pan,
            zoom: new_zoom,
        }
    }
}
