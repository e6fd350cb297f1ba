//! Toolbar view-model.
//!
//! The rendering surface draws the tool dock; this module only computes
//! what each control should show: pressed state mirroring the active tool,
//! a tooltip naming the shortcut, and whether the control is applicable.

use super::Tool;

/// One control in the tool dock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolButton {
    pub tool: Tool,
    /// Mirrors the active tool
    pub pressed: bool,
    /// Label plus shortcut, e.g. "Pan (H)"
    pub tooltip: String,
    pub enabled: bool,
}

/// Build the dock state for the current active tool.
///
/// Every tool control is always enabled; action controls that depend on
/// context (delete-selected) are modeled separately by the embedder using
/// [`delete_button_enabled`].
pub fn palette(active: Tool) -> Vec<ToolButton> {
    Tool::all()
        .iter()
        .map(|&tool| ToolButton {
            tool,
            pressed: tool == active,
            tooltip: format!("{} ({})", tool.label(), tool.shortcut().to_ascii_uppercase()),
            enabled: true,
        })
        .collect()
}

/// Whether the delete-selected control is applicable.
pub fn delete_button_enabled(selection_count: usize) -> bool {
    selection_count > 0
}
