//! Tests for main-axis placement on a single line.

use super::*;

#[test]
/// # Panics
/// Panics if flex-end does not pack items against the end edge.
fn flex_end_packs_at_end() {
    let mut container = row_container(300.0, 50.0);
    container.justify_content = JustifyContent::FlexEnd;
    let out = layout_flex_container(&container, &[item(50.0, 10.0), item(50.0, 10.0)]);
    assert_eq!(main_offsets(&out), vec![200.0, 250.0]);
}

#[test]
/// # Panics
/// Panics if center does not center the packed group.
fn center_centers_group() {
    let mut container = row_container(300.0, 50.0);
    container.justify_content = JustifyContent::Center;
    let out = layout_flex_container(&container, &[item(50.0, 10.0), item(50.0, 10.0)]);
    assert_eq!(main_offsets(&out), vec![100.0, 150.0]);
}

#[test]
/// # Panics
/// Panics if space-between leaves gaps at the line ends.
fn space_between_gaps_only_between() {
    let mut container = row_container(300.0, 50.0);
    container.justify_content = JustifyContent::SpaceBetween;
    let items = [item(50.0, 10.0), item(50.0, 10.0), item(50.0, 10.0)];
    let out = layout_flex_container(&container, &items);
    assert_eq!(main_offsets(&out), vec![0.0, 125.0, 250.0]);
}

#[test]
/// # Panics
/// Panics if a single item under space-between is not packed at start.
fn space_between_single_item_at_start() {
    let mut container = row_container(300.0, 50.0);
    container.justify_content = JustifyContent::SpaceBetween;
    let out = layout_flex_container(&container, &[item(50.0, 10.0)]);
    assert_eq!(main_offsets(&out), vec![0.0]);
}

#[test]
/// # Panics
/// Panics if space-around does not use half gaps at both ends.
fn space_around_half_gaps() {
    let mut container = row_container(300.0, 50.0);
    container.justify_content = JustifyContent::SpaceAround;
    let out = layout_flex_container(&container, &[item(50.0, 10.0), item(50.0, 10.0)]);
    // remaining 200 → end gaps 50, between 100
    assert_eq!(main_offsets(&out), vec![50.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if auto margins do not take priority over justify-content.
fn auto_margin_overrides_justify() {
    let mut container = row_container(300.0, 50.0);
    container.justify_content = JustifyContent::Center;
    let mut pushed = item(100.0, 10.0);
    pushed.margin_main_start_auto = true;
    let out = layout_flex_container(&container, &[pushed]);
    assert_eq!(main_offsets(&out), vec![200.0]);
}

#[test]
/// # Panics
/// Panics if growth does not take precedence over auto margins.
fn grow_consumes_space_before_auto_margins() {
    let container = row_container(300.0, 50.0);
    let mut grower = item(0.0, 10.0);
    grower.flex_grow = 1.0;
    let mut pushed = item(100.0, 10.0);
    pushed.margin_main_start_auto = true;
    let out = layout_flex_container(&container, &[grower, pushed]);
    let sizes: Vec<f32> = out.placements.iter().map(|placement| placement.main_size).collect();
    assert_eq!(sizes, vec![200.0, 100.0]);
    assert_eq!(main_offsets(&out), vec![0.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if nowrap lines do not take the container's cross size for stretching.
fn nowrap_line_uses_container_cross_size() {
    let container = row_container(300.0, 80.0);
    let mut stretchy = FlexChild::with_basis(50.0);
    stretchy.margin_cross_end = 10.0;
    let out = layout_flex_container(&container, &[stretchy, item(50.0, 20.0)]);
    let crosses: Vec<f32> = out.placements.iter().map(|placement| placement.cross_size).collect();
    assert_eq!(crosses, vec![70.0, 20.0]);
    assert_eq!(out.lines.len(), 1);
    assert!(out.lines.iter().all(|line| (line.cross_size - 80.0).abs() < 0.001));
}

#[test]
/// # Panics
/// Panics if an indefinite container does not size itself from its items.
fn indefinite_container_uses_content_extent() {
    let mut container = row_container(0.0, 0.0);
    container.main_size = None;
    container.cross_size = None;
    let mut grower = item(40.0, 30.0);
    grower.flex_grow = 1.0;
    let out = layout_flex_container(&container, &[grower, item(60.0, 10.0)]);
    assert!((out.main_size - 100.0).abs() < 0.001);
    assert!((out.cross_size - 30.0).abs() < 0.001);
    assert_eq!(main_offsets(&out), vec![0.0, 40.0]);
}
