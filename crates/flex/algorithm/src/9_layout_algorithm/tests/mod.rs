//! Tests for whole-container flex layout.

use super::*;

mod justify_tests;

/// Row container with a definite main and cross size and initial alignment values.
#[inline]
pub fn row_container(main: f32, cross: f32) -> FlexContainerInputs {
    FlexContainerInputs {
        direction: FlexDirection::Row,
        wrap: FlexWrap::Nowrap,
        justify_content: JustifyContent::FlexStart,
        align_content: AlignContent::Stretch,
        main_size: Some(main),
        cross_size: Some(cross),
    }
}

/// Helper to create an item with the given basis and definite cross size.
#[inline]
pub fn item(basis: f32, cross: f32) -> FlexChild {
    let mut child = FlexChild::with_basis(basis);
    child.cross_size = CrossSize::Definite(cross);
    child
}

/// Main offsets of all placements in order.
pub fn main_offsets(layout: &FlexContainerLayout) -> Vec<f32> {
    layout
        .placements
        .iter()
        .map(|placement| placement.main_offset)
        .collect()
}

/// Cross offsets of all placements in order.
pub fn cross_offsets(layout: &FlexContainerLayout) -> Vec<f32> {
    layout
        .placements
        .iter()
        .map(|placement| placement.cross_offset)
        .collect()
}
