//! Resolved geometry stored on each node and the snapshot handed to callers.

use serde::Serialize;

/// Geometry written by a layout pass. Zeroed until the first successful pass.
///
/// `computed_width`/`computed_height` are the node's sizing-box dimensions (content box, or
/// border box under `border-box`). Offsets locate the border box relative to the parent's
/// border box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResolvedBox {
    pub computed_width: f32,
    pub computed_height: f32,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Final box of one node: border-box size, and its distance from each edge of the parent's
/// border box (`right = parent width - left - width`). The root reports 0 on every edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}
