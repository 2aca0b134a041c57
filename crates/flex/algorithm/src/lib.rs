//! CSS Flexible Box Layout Module Level 1: per-container flex algorithm.
//! See <https://www.w3.org/TR/css-flexbox-1/>
//!
//! Everything here works on plain `f32` inputs for one flex container and its items.
//! Style storage and tree walking live in `flex_style` and `flex_layout`.

// Chapter modules follow the section numbering of Flexbox Level 1.
// §5 Flex Containers (container keywords)
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// §7 Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// §8 Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// §9 Flex Layout Algorithm
#[path = "9_layout_algorithm/mod.rs"]
/// Line breaking, flexible length resolution and line packing (§9)
mod chapter9;

pub use chapter5::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
pub use chapter7::{Axes, Axis, order_key, resolve_axes, sort_items_by_order_stable};
pub use chapter8::{
    CrossPlacement, CrossSize, align_content_params, align_item_in_line, justify_params,
};
pub use chapter9::{
    FlexChild, FlexContainerInputs, FlexContainerLayout, FlexLine, FlexPlacement, LineRange,
    break_into_lines, clamp, layout_flex_container, resolve_flexible_lengths,
};
