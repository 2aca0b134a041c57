//! Layout pass over a tree: size the root, then lay out each container's children with the
//! flex algorithm, top-down, writing the resolved boxes back onto the nodes.
//!
//! A container is laid out only once its own box is fixed, and each child reads nothing but
//! its parent's resolved content box, so the walk is a single pre-order pass with no
//! intrinsic (bottom-up) sizing.

use flex_algorithm::{
    AlignItems, Axis, CrossSize, FlexChild, FlexContainerInputs, FlexDirection, clamp,
    layout_flex_container, resolve_axes, sort_items_by_order_stable,
};
use flex_style::{ConfigError, ContainingBlock, Edge, FlexStyle, LayoutError, Length};
use indextree::NodeId;
use log::{debug, trace, warn};

use crate::error::FlexError;
use crate::layout_result::ResolvedBox;
use crate::tree::FlexTree;

/// What a container offers its children.
#[derive(Copy, Clone, Debug)]
struct ContentBox {
    /// Content size; `None` when indefinite (only ever at the root).
    width: Option<f32>,
    height: Option<f32>,
    /// Border + padding between the border-box origin and the content-box origin.
    inset_left: f32,
    inset_top: f32,
    /// Border-box size, used for the `right`/`bottom` distances of children.
    border_width: f32,
    border_height: f32,
}

fn content_box(style: &FlexStyle, sizing_width: Option<f32>, sizing_height: Option<f32>) -> ContentBox {
    let (border, padding) = (style.border(), style.padding());
    ContentBox {
        width: sizing_width.map(|size| style.content_size(Axis::Horizontal, size)),
        height: sizing_height.map(|size| style.content_size(Axis::Vertical, size)),
        inset_left: border.left + padding.left,
        inset_top: border.top + padding.top,
        border_width: style.border_box_size(Axis::Horizontal, sizing_width.unwrap_or(0.0)),
        border_height: style.border_box_size(Axis::Vertical, sizing_height.unwrap_or(0.0)),
    }
}

/// Root sizing-box size on `axis`: the declared size, else the measured size of a leaf,
/// clamped to min/max. `None` leaves the axis indefinite.
fn root_size(style: &FlexStyle, axis: Axis, is_leaf: bool) -> Result<Option<f32>, LayoutError> {
    let detached = ContainingBlock::new(style.flex_direction(), None, None);
    let measured = style
        .measured_size()
        .filter(|_| is_leaf)
        .map(|(width, height)| {
            let content = match axis {
                Axis::Horizontal => width,
                Axis::Vertical => height,
            };
            content + style.border_padding(axis) - style.box_extra(axis)
        });
    let Some(size) = style.declared_size(axis, &detached)?.or(measured) else {
        return Ok(None);
    };
    Ok(Some(clamp(
        size,
        style.min_size(axis, &detached)?,
        style.max_size(axis, &detached)?,
    )))
}

/// Algorithm inputs for one child of a container whose content box is `block`. The outer
/// sizes come from the style's memo, so an unchanged child under an unchanged parent is not
/// measured again.
fn flex_child(
    style: &FlexStyle,
    block: &ContainingBlock,
    align_items: AlignItems,
    is_leaf: bool,
) -> Result<FlexChild, LayoutError> {
    let main = block.main_axis();
    let cross = main.cross();
    let cross_hypothetical = style.hypothetical_size(cross, block, is_leaf)?;
    let cross_size = if style.declared_size(cross, block)?.is_some() {
        CrossSize::Definite(cross_hypothetical)
    } else {
        CrossSize::Auto(cross_hypothetical)
    };
    let align = style.align_self().resolve(align_items);
    if matches!(align, AlignItems::Baseline) {
        warn!(target: "flex::compose", "[ALIGN] baseline alignment is unsupported, laying out as flex-start");
    }
    let outer_main = style.outer_main_size(block, is_leaf)?;
    let outer_cross = style.outer_cross_size(block, is_leaf)?;
    trace!(
        target: "flex::compose",
        "[ITEM] outer_main={outer_main:.3} outer_cross={outer_cross:.3} align={align:?}"
    );
    Ok(FlexChild {
        flex_basis: style.hypothetical_size(main, block, is_leaf)?,
        flex_grow: style.flex_grow(),
        flex_shrink: style.flex_shrink(),
        min_main: style.min_size(main, block)?,
        max_main: style.max_size(main, block)?,
        main_extra: style.box_extra(main),
        margin_main_start: style.resolved_margin(Edge::start(main), block)?,
        margin_main_end: style.resolved_margin(Edge::end(main), block)?,
        margin_main_start_auto: style.margin_is_auto(Edge::start(main)),
        margin_main_end_auto: style.margin_is_auto(Edge::end(main)),
        cross_size,
        min_cross: style.min_size(cross, block)?,
        max_cross: style.max_size(cross, block)?,
        cross_extra: style.box_extra(cross),
        margin_cross_start: style.resolved_margin(Edge::start(cross), block)?,
        margin_cross_end: style.resolved_margin(Edge::end(cross), block)?,
        margin_cross_start_auto: style.margin_is_auto(Edge::start(cross)),
        margin_cross_end_auto: style.margin_is_auto(Edge::end(cross)),
        align,
        outer_main: Some(outer_main),
        outer_cross: Some(outer_cross),
    })
}

/// A seed size must be a finite, non-negative pixel amount.
fn seed(property: &'static str, size: Option<f32>) -> Result<Option<Length>, ConfigError> {
    size.map(|pixels| {
        if pixels >= 0.0 && pixels.is_finite() {
            Ok(Length::Px(pixels))
        } else {
            Err(ConfigError::InvalidValue {
                property,
                value: pixels.to_string(),
            })
        }
    })
    .transpose()
}

impl FlexTree {
    /// Lay out the subtree rooted at `root`.
    ///
    /// `width`, `height` and `direction`, when given, are first written to the root's style.
    /// The root's size is taken as declared (it never looks at a parent); an axis with neither
    /// a declared nor a measured size stays indefinite, so its children are not flexed or
    /// wrapped along it and the root reports 0 there. The root sits at the origin.
    ///
    /// # Errors
    /// `Config` for a negative or non-finite seed size, in which case nothing is written.
    /// `Layout` when a percentage meets an unresolved reference or `root` is not in this tree.
    /// A failure aborts the walk and leaves already visited nodes updated.
    pub fn calculate_layout(
        &mut self,
        root: NodeId,
        width: Option<f32>,
        height: Option<f32>,
        direction: Option<FlexDirection>,
    ) -> Result<(), FlexError> {
        self.get(root)?;
        let seeded_width = seed("width", width)?;
        let seeded_height = seed("height", height)?;
        let is_leaf = self.children(root).next().is_none();
        let node = self.get_mut(root)?;
        if let Some(seeded) = direction {
            node.style.set_flex_direction(seeded);
        }
        if let Some(seeded) = seeded_width {
            node.style.set_width(seeded)?;
        }
        if let Some(seeded) = seeded_height {
            node.style.set_height(seeded)?;
        }
        let sizing_width = root_size(&node.style, Axis::Horizontal, is_leaf)?;
        let sizing_height = root_size(&node.style, Axis::Vertical, is_leaf)?;
        node.resolved = ResolvedBox {
            computed_width: sizing_width.unwrap_or(0.0),
            computed_height: sizing_height.unwrap_or(0.0),
            ..ResolvedBox::default()
        };
        debug!(
            target: "flex::compose",
            "[LAYOUT] root={root:?} width={sizing_width:?} height={sizing_height:?} direction={}",
            node.style.flex_direction().keyword()
        );
        let content = content_box(&node.style, sizing_width, sizing_height);
        self.layout_container(root, content)
    }

    /// Place the children of `container`, then descend into each of them.
    fn layout_container(&mut self, container: NodeId, content: ContentBox) -> Result<(), FlexError> {
        let children: Vec<NodeId> = self.children(container).collect();
        if children.is_empty() {
            return Ok(());
        }
        let style = &self.get(container)?.style;
        let direction = style.flex_direction();
        let block = ContainingBlock::new(direction, content.width, content.height);
        let axes = resolve_axes(direction);
        let inputs = FlexContainerInputs {
            direction,
            wrap: style.flex_wrap(),
            justify_content: style.justify_content(),
            align_content: style.align_content(),
            main_size: block.size(axes.main),
            cross_size: block.size(axes.cross()),
        };
        let align_items = style.align_items();

        let keyed = children
            .iter()
            .map(|&child| Ok((child, self.get(child)?.style.order())))
            .collect::<Result<Vec<(NodeId, i32)>, LayoutError>>()?;
        let ordered = sort_items_by_order_stable(&keyed);
        let mut items: Vec<FlexChild> = Vec::with_capacity(ordered.len());
        for &child in &ordered {
            let is_leaf = self.children(child).next().is_none();
            let child_style = &self.get(child)?.style;
            items.push(flex_child(child_style, &block, align_items, is_leaf)?);
        }

        let layout = layout_flex_container(&inputs, &items);
        debug!(
            target: "flex::compose",
            "[COMPOSE] container={container:?} direction={} wrap={} items={} lines={} main={:.3} cross={:.3}",
            direction.keyword(),
            inputs.wrap.keyword(),
            items.len(),
            layout.lines.len(),
            layout.main_size,
            layout.cross_size
        );

        let mut nested: Vec<(NodeId, ContentBox)> = Vec::with_capacity(ordered.len());
        for (&child, placement) in ordered.iter().zip(&layout.placements) {
            let node = self.get_mut(child)?;
            let (sizing_width, sizing_height, offset_x, offset_y) = match axes.main {
                Axis::Horizontal => (
                    placement.main_size,
                    placement.cross_size,
                    placement.main_offset,
                    placement.cross_offset,
                ),
                Axis::Vertical => (
                    placement.cross_size,
                    placement.main_size,
                    placement.cross_offset,
                    placement.main_offset,
                ),
            };
            let left = content.inset_left
                + offset_x
                + node.style.relative_offset(Axis::Horizontal, &block)?;
            let top = content.inset_top
                + offset_y
                + node.style.relative_offset(Axis::Vertical, &block)?;
            let width = node.style.border_box_size(Axis::Horizontal, sizing_width);
            let height = node.style.border_box_size(Axis::Vertical, sizing_height);
            node.resolved = ResolvedBox {
                computed_width: sizing_width,
                computed_height: sizing_height,
                left,
                top,
                right: content.border_width - left - width,
                bottom: content.border_height - top - height,
            };
            trace!(
                target: "flex::compose",
                "[PLACE] node={child:?} left={left:.3} top={top:.3} width={width:.3} height={height:.3}"
            );
            nested.push((
                child,
                content_box(&node.style, Some(sizing_width), Some(sizing_height)),
            ));
        }

        for (child, child_content) in nested {
            self.layout_container(child, child_content)?;
        }
        Ok(())
    }
}
