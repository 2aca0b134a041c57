//! Box-model arithmetic on top of `FlexStyle`: percentage resolution against the parent's
//! content box, flex-basis resolution, min/max, edges and memoised outer sizes.
//!
//! Sizes returned here are of the node's *sizing box*: the content box for `content-box` and
//! the border box for `border-box`. `box_extra` is whatever border and padding lies outside it.

use flex_algorithm::{Axis, FlexDirection, clamp, resolve_axes};
use log::trace;

use crate::error::LayoutError;
use crate::shorthand::Edge;
use crate::style::{BoxSizing, FlexStyle};
use crate::values::Length;

/// The parent's resolved content box, as seen by one child.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainingBlock {
    /// The parent's `flex-direction`, which decides the child's main axis.
    pub direction: FlexDirection,
    /// Content width, `None` while unresolved.
    pub width: Option<f32>,
    /// Content height, `None` while unresolved.
    pub height: Option<f32>,
}

impl ContainingBlock {
    pub const fn new(direction: FlexDirection, width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            direction,
            width,
            height,
        }
    }

    pub const fn size(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub const fn main_axis(&self) -> Axis {
        resolve_axes(self.direction).main
    }
}

/// What an outer size was computed for: the containing block and whether the node was a leaf.
type MemoKey = (ContainingBlock, bool);

/// Outer sizes per axis, each tagged with the key it was computed for.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OuterMemo {
    horizontal: Option<(MemoKey, f32)>,
    vertical: Option<(MemoKey, f32)>,
}

impl OuterMemo {
    const fn get(&self, axis: Axis, block: &ContainingBlock, is_leaf: bool) -> Option<f32> {
        let slot = match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        };
        match slot {
            Some(((cached_for, was_leaf), value))
                if was_leaf == is_leaf && same_block(&cached_for, block) =>
            {
                Some(value)
            }
            _ => None,
        }
    }

    const fn with(mut self, axis: Axis, key: MemoKey, value: f32) -> Self {
        match axis {
            Axis::Horizontal => self.horizontal = Some((key, value)),
            Axis::Vertical => self.vertical = Some((key, value)),
        }
        self
    }
}

/// Bitwise comparison so a memo hit reproduces exactly what a recomputation would.
const fn same_block(left: &ContainingBlock, right: &ContainingBlock) -> bool {
    same_size(left.width, right.width)
        && same_size(left.height, right.height)
        && left.direction as u8 == right.direction as u8
}

const fn same_size(left: Option<f32>, right: Option<f32>) -> bool {
    match (left, right) {
        (Some(first), Some(second)) => first.to_bits() == second.to_bits(),
        (None, None) => true,
        _ => false,
    }
}

const fn size_name(axis: Axis, kind: SizeKind) -> &'static str {
    match (axis, kind) {
        (Axis::Horizontal, SizeKind::Declared) => "width",
        (Axis::Vertical, SizeKind::Declared) => "height",
        (Axis::Horizontal, SizeKind::Min) => "minWidth",
        (Axis::Vertical, SizeKind::Min) => "minHeight",
        (Axis::Horizontal, SizeKind::Max) => "maxWidth",
        (Axis::Vertical, SizeKind::Max) => "maxHeight",
    }
}

const fn margin_name(edge: Edge) -> &'static str {
    match edge {
        Edge::Top => "marginTop",
        Edge::Right => "marginRight",
        Edge::Bottom => "marginBottom",
        Edge::Left => "marginLeft",
    }
}

const fn offset_name(edge: Edge) -> &'static str {
    match edge {
        Edge::Top => "top",
        Edge::Right => "right",
        Edge::Bottom => "bottom",
        Edge::Left => "left",
    }
}

#[derive(Copy, Clone)]
enum SizeKind {
    Declared,
    Min,
    Max,
}

fn resolve_on(
    property: &'static str,
    length: Length,
    axis: Axis,
    block: &ContainingBlock,
) -> Result<Option<f32>, LayoutError> {
    length.resolve(block.size(axis), || LayoutError::UnresolvedPercentage { property, axis })
}

impl FlexStyle {
    const fn size_field(&self, axis: Axis, kind: SizeKind) -> Length {
        match (axis, kind) {
            (Axis::Horizontal, SizeKind::Declared) => self.width,
            (Axis::Vertical, SizeKind::Declared) => self.height,
            (Axis::Horizontal, SizeKind::Min) => self.min_width,
            (Axis::Vertical, SizeKind::Min) => self.min_height,
            (Axis::Horizontal, SizeKind::Max) => self.max_width,
            (Axis::Vertical, SizeKind::Max) => self.max_height,
        }
    }

    fn resolve_size(
        &self,
        axis: Axis,
        kind: SizeKind,
        block: &ContainingBlock,
    ) -> Result<Option<f32>, LayoutError> {
        resolve_on(size_name(axis, kind), self.size_field(axis, kind), axis, block)
    }

    /// The explicit `flex-basis`, only when `axis` is this node's main axis (the parent's
    /// direction decides). The basis never stands in for a cross size.
    ///
    /// # Errors
    /// `UnresolvedPercentage` when a percentage basis meets an unresolved parent size.
    pub fn resolved_flex_basis(
        &self,
        axis: Axis,
        block: &ContainingBlock,
    ) -> Result<Option<f32>, LayoutError> {
        if axis == block.main_axis() {
            resolve_on("flexBasis", self.flex_basis, axis, block)
        } else {
            Ok(None)
        }
    }

    /// Declared `width`/`height`; `None` for `auto`.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn declared_size(
        &self,
        axis: Axis,
        block: &ContainingBlock,
    ) -> Result<Option<f32>, LayoutError> {
        self.resolve_size(axis, SizeKind::Declared, block)
    }

    /// Lower bound of the sizing box. A `border-box` node never goes below its border and
    /// padding.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn min_size(&self, axis: Axis, block: &ContainingBlock) -> Result<f32, LayoutError> {
        let declared = self.resolve_size(axis, SizeKind::Min, block)?.unwrap_or(0.0);
        let floor = match self.box_sizing {
            BoxSizing::ContentBox => 0.0,
            BoxSizing::BorderBox => self.border_padding(axis),
        };
        Ok(declared.max(floor))
    }

    /// Upper bound of the sizing box; infinite for `none`.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn max_size(&self, axis: Axis, block: &ContainingBlock) -> Result<f32, LayoutError> {
        Ok(self
            .resolve_size(axis, SizeKind::Max, block)?
            .unwrap_or(f32::INFINITY))
    }

    /// Border plus padding on both edges of `axis`.
    pub fn border_padding(&self, axis: Axis) -> f32 {
        let (start, end) = (Edge::start(axis), Edge::end(axis));
        self.border.get(start) + self.border.get(end) + self.padding.get(start) + self.padding.get(end)
    }

    /// Border plus padding lying outside the sizing box.
    pub fn box_extra(&self, axis: Axis) -> f32 {
        match self.box_sizing {
            BoxSizing::ContentBox => self.border_padding(axis),
            BoxSizing::BorderBox => 0.0,
        }
    }

    /// Border-box length for a sizing-box length.
    pub fn border_box_size(&self, axis: Axis, sizing: f32) -> f32 {
        sizing + self.box_extra(axis)
    }

    /// Content-box length for a sizing-box length.
    pub fn content_size(&self, axis: Axis, sizing: f32) -> f32 {
        match self.box_sizing {
            BoxSizing::ContentBox => sizing,
            BoxSizing::BorderBox => (sizing - self.border_padding(axis)).max(0.0),
        }
    }

    pub const fn margin_is_auto(&self, edge: Edge) -> bool {
        self.margin.get(edge).is_auto()
    }

    /// Used margin on `edge`; `auto` counts as 0 here and only absorbs free space during
    /// distribution.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn resolved_margin(&self, edge: Edge, block: &ContainingBlock) -> Result<f32, LayoutError> {
        Ok(resolve_on(margin_name(edge), self.margin.get(edge), edge.axis(), block)?.unwrap_or(0.0))
    }

    /// Size before flexing: the main-axis basis, else the declared size, else the measured
    /// size of a leaf, else 0. Not clamped. A node with children ignores its measured size.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn hypothetical_size(
        &self,
        axis: Axis,
        block: &ContainingBlock,
        is_leaf: bool,
    ) -> Result<f32, LayoutError> {
        if let Some(basis) = self.resolved_flex_basis(axis, block)? {
            return Ok(basis);
        }
        if let Some(size) = self.declared_size(axis, block)? {
            return Ok(size);
        }
        let Some((width, height)) = self.measured.filter(|_| is_leaf) else {
            return Ok(0.0);
        };
        let measured = match axis {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        };
        // Measured sizes are content sizes.
        Ok(match self.box_sizing {
            BoxSizing::ContentBox => measured,
            BoxSizing::BorderBox => measured + self.border_padding(axis),
        })
    }

    /// Outer layout size on `axis`: hypothetical size clamped to min/max, plus border and
    /// padding outside the sizing box, plus both margins. Memoised until the next mutation, a
    /// different containing block or a change of leaf-ness.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn outer_size(
        &self,
        axis: Axis,
        block: &ContainingBlock,
        is_leaf: bool,
    ) -> Result<f32, LayoutError> {
        let memo = self.memo.get();
        if let Some(cached) = memo.get(axis, block, is_leaf) {
            return Ok(cached);
        }
        let sizing = clamp(
            self.hypothetical_size(axis, block, is_leaf)?,
            self.min_size(axis, block)?,
            self.max_size(axis, block)?,
        );
        let margins = self.resolved_margin(Edge::start(axis), block)?
            + self.resolved_margin(Edge::end(axis), block)?;
        let outer = sizing + self.box_extra(axis) + margins;
        trace!(
            target: "flex::compose",
            "[OUTER-SIZE] axis={axis:?} sizing={sizing:.3} extra={:.3} margins={margins:.3} outer={outer:.3}",
            self.box_extra(axis)
        );
        self.memo.set(memo.with(axis, (*block, is_leaf), outer));
        Ok(outer)
    }

    /// Outer size along the parent's main axis.
    ///
    /// # Errors
    /// See [`Self::outer_size`].
    pub fn outer_main_size(&self, block: &ContainingBlock, is_leaf: bool) -> Result<f32, LayoutError> {
        self.outer_size(block.main_axis(), block, is_leaf)
    }

    /// Outer size along the parent's cross axis.
    ///
    /// # Errors
    /// See [`Self::outer_size`].
    pub fn outer_cross_size(&self, block: &ContainingBlock, is_leaf: bool) -> Result<f32, LayoutError> {
        self.outer_size(block.main_axis().cross(), block, is_leaf)
    }

    /// Relative-positioning shift on `axis`: the start offset, else the negated end offset,
    /// else 0.
    ///
    /// # Errors
    /// `UnresolvedPercentage` for a percentage against an unresolved parent size.
    pub fn relative_offset(&self, axis: Axis, block: &ContainingBlock) -> Result<f32, LayoutError> {
        let (start, end) = (Edge::start(axis), Edge::end(axis));
        if let Some(shift) = resolve_on(offset_name(start), self.position.get(start), axis, block)? {
            return Ok(shift);
        }
        Ok(resolve_on(offset_name(end), self.position.get(end), axis, block)?.map_or(0.0, |shift| -shift))
    }
}
