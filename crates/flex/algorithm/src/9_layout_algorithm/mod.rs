//! Flex layout algorithm for one container: lines, main sizes, cross sizes and offsets.
//! See <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use log::debug;

use crate::chapter5::{AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent};
use crate::chapter7::resolve_axes;
use crate::chapter8::{
    CrossSize, align_content_params, align_item_in_line, justify_params,
    resolve_auto_margins_and_outer,
};

pub mod flexible_lengths;
pub mod line_breaking;

pub use flexible_lengths::{clamp, resolve_flexible_lengths};
pub use line_breaking::{LineRange, break_into_lines};

/// Inputs for one flex item. All sizes are in px.
///
/// "Sizing box" is the box the item's declared size refers to (content box or border box,
/// depending on `box-sizing`); `main_extra`/`cross_extra` hold whatever border and padding
/// lies outside it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    /// Flex base size (used as hypothetical main size before flexing).
    pub flex_basis: f32,
    /// Flex grow factor (>= 0).
    pub flex_grow: f32,
    /// Flex shrink factor (>= 0).
    pub flex_shrink: f32,
    /// Min main size constraint.
    pub min_main: f32,
    /// Max main size constraint.
    pub max_main: f32,
    /// Border + padding outside the sizing box on the main axis.
    pub main_extra: f32,
    /// Main-axis margins; ignored on a side whose `auto` flag is set.
    pub margin_main_start: f32,
    pub margin_main_end: f32,
    pub margin_main_start_auto: bool,
    pub margin_main_end_auto: bool,
    /// Cross size before alignment.
    pub cross_size: CrossSize,
    pub min_cross: f32,
    pub max_cross: f32,
    /// Border + padding outside the sizing box on the cross axis.
    pub cross_extra: f32,
    pub margin_cross_start: f32,
    pub margin_cross_end: f32,
    pub margin_cross_start_auto: bool,
    pub margin_cross_end_auto: bool,
    /// Effective cross alignment (`align-self` resolved against `align-items`).
    pub align: AlignItems,
    /// Outer hypothetical main size as measured by the caller's box model. `None` derives it
    /// from the fields above.
    pub outer_main: Option<f32>,
    /// Outer hypothetical cross size, likewise.
    pub outer_cross: Option<f32>,
}

impl FlexChild {
    /// Item with the given flex base size and initial values for everything else
    /// (`flex-shrink: 1`, no constraints, no margins, auto cross size of 0, stretch).
    pub const fn with_basis(flex_basis: f32) -> Self {
        Self {
            flex_basis,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            min_main: 0.0,
            max_main: f32::INFINITY,
            main_extra: 0.0,
            margin_main_start: 0.0,
            margin_main_end: 0.0,
            margin_main_start_auto: false,
            margin_main_end_auto: false,
            cross_size: CrossSize::Auto(0.0),
            min_cross: 0.0,
            max_cross: f32::INFINITY,
            cross_extra: 0.0,
            margin_cross_start: 0.0,
            margin_cross_end: 0.0,
            margin_cross_start_auto: false,
            margin_cross_end_auto: false,
            align: AlignItems::Stretch,
            outer_main: None,
            outer_cross: None,
        }
    }

    /// Clamped flex base size plus main extra and non-auto main margins, unless supplied in
    /// `outer_main`.
    pub fn hypothetical_outer_main(&self) -> f32 {
        self.outer_main.unwrap_or_else(|| {
            clamp(self.flex_basis, self.min_main, self.max_main) + self.fixed_main_outer()
        })
    }

    /// Main-axis extra plus non-auto main margins.
    pub fn fixed_main_outer(&self) -> f32 {
        let start = if self.margin_main_start_auto {
            0.0
        } else {
            self.margin_main_start
        };
        let end = if self.margin_main_end_auto {
            0.0
        } else {
            self.margin_main_end
        };
        self.main_extra + start + end
    }
}

/// Container inputs needed for layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexContainerInputs {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
    /// Content-box size on the main axis; `None` when indefinite.
    pub main_size: Option<f32>,
    /// Content-box size on the cross axis; `None` when indefinite.
    pub cross_size: Option<f32>,
}

/// Resolved per-item sizes and offsets.
///
/// Sizes are of the item's sizing box; offsets locate the item's border box relative to the
/// container's content-box origin along each axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexPlacement {
    pub main_size: f32,
    pub main_offset: f32,
    pub cross_size: f32,
    pub cross_offset: f32,
}

/// One flex line after cross-axis packing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexLine {
    /// Items `[start, end)` on this line, in layout order.
    pub range: LineRange,
    pub cross_offset: f32,
    pub cross_size: f32,
}

/// Full result for one container, placements in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexContainerLayout {
    pub placements: Vec<FlexPlacement>,
    pub lines: Vec<FlexLine>,
    /// Main size used for placement (the definite size, or the longest line).
    pub main_size: f32,
    /// Cross size used for placement (the definite size, or the sum of line sizes).
    pub cross_size: f32,
}

/// Per-line main-axis `(size, offset)` pairs plus the line's outer length.
type LineMain = (Vec<(f32, f32)>, f32);

/// Compute main-axis sizes and offsets for the items of one line.
///
/// Behavior:
/// - Resolves flexible lengths against the container main size.
/// - Gives leftover space to `auto` margins; when any exist, `justify-content` acts as
///   `flex-start`.
/// - Places items according to `justify_content`, mirroring for reverse directions.
fn layout_line_main(
    container: &FlexContainerInputs,
    main_reverse: bool,
    items: &[FlexChild],
) -> LineMain {
    let sizes = resolve_flexible_lengths(container.main_size, items);
    let (outer_sizes, effective_start_margins, auto_slots, sum_outer) =
        resolve_auto_margins_and_outer(items, &sizes, container.main_size);
    let line_main = container.main_size.unwrap_or(sum_outer);
    let effective_justify = if auto_slots > 0 {
        JustifyContent::FlexStart
    } else {
        container.justify_content
    };
    let (start_offset, between_spacing) =
        justify_params(effective_justify, line_main, sum_outer, items.len());
    debug!(
        target: "flex::single_line",
        "[FLEX-JUSTIFY] justify={:?} start_offset={:.3} between_spacing={:.3} sum_outer={:.3} line_main={:.3}",
        effective_justify,
        start_offset,
        between_spacing,
        sum_outer,
        line_main
    );
    let mut cursor = start_offset;
    let placed = items
        .iter()
        .zip(sizes.iter().copied())
        .zip(outer_sizes.iter().copied().zip(effective_start_margins))
        .map(|((child, size), (outer, start_margin))| {
            let offset = cursor + start_margin;
            cursor += outer + between_spacing;
            let border_size = size + child.main_extra;
            if main_reverse {
                (size, line_main - offset - border_size)
            } else {
                (size, offset)
            }
        })
        .collect();
    (placed, sum_outer)
}

/// Line cross sizes before align-content packing.
///
/// A single-line (`nowrap`) container with a definite cross size uses it directly; otherwise
/// each line is as large as its largest outer hypothetical cross size, and a wrapping container
/// with `align-content: stretch` then shares any leftover space equally between its lines.
fn line_cross_sizes(
    container: &FlexContainerInputs,
    items: &[FlexChild],
    line_ranges: &[LineRange],
) -> Vec<f32> {
    let mut line_cross: Vec<f32> = line_ranges
        .iter()
        .map(|&(start, end)| {
            items
                .get(start..end)
                .unwrap_or(&[])
                .iter()
                .map(FlexChild::hypothetical_outer_cross)
                .fold(0.0f32, f32::max)
        })
        .collect();
    match (container.wrap.is_wrapping(), container.cross_size) {
        (false, Some(cross)) => {
            for value in &mut line_cross {
                *value = cross;
            }
        }
        (true, Some(cross))
            if matches!(container.align_content, AlignContent::Stretch)
                && !line_cross.is_empty() =>
        {
            let total: f32 = line_cross.iter().copied().sum();
            let add_each = (cross - total).max(0.0) / line_cross.len() as f32;
            debug!(
                target: "flex::multi_line",
                "[ALIGN-CONTENT] stretch: container_cross={cross:.3} lines_total={total:.3} add_each={add_each:.3}"
            );
            for value in &mut line_cross {
                *value += add_each;
            }
        }
        _ => {}
    }
    line_cross
}

/// Lay out all items of one flex container.
///
/// Steps: break into lines (only when wrapping with a definite main size), resolve main sizes
/// and offsets per line, size lines on the cross axis, pack lines with `align-content`, then
/// align each item within its line. `wrap-reverse` mirrors the cross axis.
pub fn layout_flex_container(
    container: &FlexContainerInputs,
    items: &[FlexChild],
) -> FlexContainerLayout {
    if items.is_empty() {
        return FlexContainerLayout {
            main_size: container.main_size.unwrap_or(0.0),
            cross_size: container.cross_size.unwrap_or(0.0),
            ..FlexContainerLayout::default()
        };
    }
    let axes = resolve_axes(container.direction);
    let line_ranges = match container.main_size {
        Some(main) if container.wrap.is_wrapping() => break_into_lines(main, items),
        _ => vec![(0, items.len())],
    };

    let mut mains: Vec<(f32, f32)> = Vec::with_capacity(items.len());
    let mut longest_line = 0.0f32;
    for &(start, end) in &line_ranges {
        let line_items = items.get(start..end).unwrap_or(&[]);
        let (line_main, line_outer) = layout_line_main(container, axes.main_reverse, line_items);
        mains.extend(line_main);
        longest_line = longest_line.max(line_outer);
    }
    let used_main = container.main_size.unwrap_or(longest_line);

    let line_cross = line_cross_sizes(container, items, &line_ranges);
    let lines_total: f32 = line_cross.iter().copied().sum();
    let used_cross = container.cross_size.unwrap_or(lines_total);
    let (start_offset, between_spacing) = if container.wrap.is_wrapping() {
        align_content_params(
            container.align_content,
            used_cross,
            lines_total,
            line_ranges.len(),
        )
    } else {
        (0.0, 0.0)
    };
    debug!(
        target: "flex::multi_line",
        "[ALIGN-CONTENT] mode={:?} lines={} used_cross={:.3} lines_total={:.3} start={:.3} between={:.3}",
        container.align_content,
        line_ranges.len(),
        used_cross,
        lines_total,
        start_offset,
        between_spacing
    );
    let reverse_cross = matches!(container.wrap, FlexWrap::WrapReverse);

    let mut placements: Vec<FlexPlacement> = Vec::with_capacity(items.len());
    let mut lines: Vec<FlexLine> = Vec::with_capacity(line_ranges.len());
    let mut cross_cursor = start_offset;
    for (&(start, end), line_size) in line_ranges.iter().zip(line_cross.iter().copied()) {
        let line_items = items.get(start..end).unwrap_or(&[]);
        let line_mains = mains.get(start..end).unwrap_or(&[]);
        for (child, &(main_size, main_offset)) in line_items.iter().zip(line_mains) {
            let within = align_item_in_line(child.align, line_size, child);
            let mut cross_offset = cross_cursor + within.cross_offset;
            if reverse_cross {
                cross_offset = used_cross - cross_offset - (within.cross_size + child.cross_extra);
            }
            placements.push(FlexPlacement {
                main_size,
                main_offset,
                cross_size: within.cross_size,
                cross_offset,
            });
        }
        let line_offset = if reverse_cross {
            used_cross - cross_cursor - line_size
        } else {
            cross_cursor
        };
        lines.push(FlexLine {
            range: (start, end),
            cross_offset: line_offset,
            cross_size: line_size,
        });
        cross_cursor += line_size + between_spacing;
    }

    FlexContainerLayout {
        placements,
        lines,
        main_size: used_main,
        cross_size: used_cross,
    }
}

#[cfg(test)]
mod tests;
