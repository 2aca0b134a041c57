//! Content distribution along the main axis (`justify-content`) and between flex lines
//! (`align-content`).
//! See <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
//! See <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use crate::chapter5::{AlignContent, JustifyContent};

/// Compute justify-content start offset and between-spacing.
///
/// `remaining` may be negative when items overflow: `flex-end` and `center` then overflow the
/// start edge, `space-between` degrades to `flex-start` and `space-around` to `center`.
pub fn justify_params(
    justify: JustifyContent,
    container_main: f32,
    content_total: f32,
    item_count: usize,
) -> (f32, f32) {
    let remaining = container_main - content_total;
    match (justify, item_count) {
        (JustifyContent::FlexEnd, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 && remaining > 0.0 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 && remaining > 0.0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        (JustifyContent::SpaceAround, _) => (remaining * 0.5, 0.0),
        // flex-start, and space-between with a single item or no free space
        _ => (0.0, 0.0),
    }
}

/// Compute align-content start offset and between-spacing for lines.
///
/// Modes:
/// - flex-start/flex-end/center: pack lines against start/end or center them.
/// - space-between/space-around: distribute remaining space between line boxes.
/// - stretch: packs at start; the leftover space was already added to the line sizes.
pub fn align_content_params(
    align: AlignContent,
    container_cross: f32,
    content_total: f32,
    line_count: usize,
) -> (f32, f32) {
    let remaining = container_cross - content_total;
    match (align, line_count) {
        (AlignContent::FlexEnd, _) => (remaining, 0.0),
        (AlignContent::Center, _) => (remaining * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 && remaining > 0.0 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (AlignContent::SpaceAround, count) if count > 0 && remaining > 0.0 => {
            (remaining / (count as f32 * 2.0), remaining / count as f32)
        }
        (AlignContent::SpaceAround, _) => (remaining * 0.5, 0.0),
        _ => (0.0, 0.0),
    }
}
