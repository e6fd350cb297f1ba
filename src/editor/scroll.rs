//! Wheel handling - anchored zoom requests.

use super::CanvasEditor;
use crate::geometry::Point;
use crate::input::EventOutcome;

impl CanvasEditor {
    /// Apply a wheel-derived zoom factor anchored at the pointer's screen
    /// position. The graph point under the cursor stays visually fixed;
    /// the store clamps the resulting zoom to the configured bounds.
    pub(super) fn handle_wheel(&mut self, position: Point, zoom_factor: f32) -> EventOutcome {
        self.store.zoom_at(position, zoom_factor);
        EventOutcome::Consumed
    }
}
