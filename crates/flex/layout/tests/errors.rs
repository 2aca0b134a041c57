//! Failure reporting of the layout pass.

use anyhow::Result;
use flex_layout::{Axis, ConfigError, FlexDirection, FlexError, FlexTree, LayoutError, Length};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn percentage_margin_needs_a_definite_parent() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node_from([("height", 100.0)])?;
    let child = tree.new_node_from([("marginLeft", "10%")])?;
    tree.insert_child(root, child)?;
    let outcome = tree.calculate_layout(root, None, None, None);
    assert!(
        matches!(
            outcome,
            Err(FlexError::Layout(LayoutError::UnresolvedPercentage {
                property: "marginLeft",
                axis: Axis::Horizontal,
            }))
        ),
        "unexpected outcome {outcome:?}"
    );
    Ok(())
}

#[test]
fn percentage_size_below_an_indefinite_root_fails_per_axis() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node_from([("width", 100.0)])?;
    let child = tree.new_node_from([("width", "50%")])?;
    tree.insert_child(root, child)?;
    tree.calculate_layout(root, None, None, None)?;
    assert_eq!(tree.computed_layout(child)?.width, 50.0);

    tree.node_mut(child)
        .ok_or_else(|| anyhow::anyhow!("child vanished"))?
        .set_property("height", "50%")?;
    assert!(matches!(
        tree.calculate_layout(root, None, None, None),
        Err(FlexError::Layout(LayoutError::UnresolvedPercentage {
            property: "height",
            axis: Axis::Vertical,
        }))
    ));
    Ok(())
}

#[test]
fn unknown_root_is_reported() -> Result<()> {
    init_logs();
    let mut larger = FlexTree::new();
    for _ in 0..3 {
        larger.new_node_from([("width", 1.0)])?;
    }
    let foreign = larger.new_node_from([("width", 1.0)])?;
    let mut tree = FlexTree::new();
    tree.new_node_from([("width", 1.0)])?;

    assert!(matches!(
        tree.calculate_layout(foreign, Some(10.0), None, None),
        Err(FlexError::Layout(LayoutError::UnknownNode))
    ));
    assert_eq!(tree.computed_layout(foreign), Err(LayoutError::UnknownNode));
    Ok(())
}

#[test]
fn invalid_seed_size_is_a_config_error() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node_from([("width", 10.0)])?;
    let outcome = tree.calculate_layout(root, Some(-5.0), None, None);
    assert!(matches!(
        outcome,
        Err(FlexError::Config(ConfigError::InvalidValue { property: "width", .. }))
    ));
    assert!(matches!(
        tree.calculate_layout(root, None, Some(f32::NAN), None),
        Err(FlexError::Config(_))
    ));
    Ok(())
}

#[test]
fn rejected_seed_writes_nothing() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node_from([("width", 10.0)])?;
    let outcome = tree.calculate_layout(
        root,
        Some(50.0),
        Some(-1.0),
        Some(FlexDirection::Column),
    );
    assert!(matches!(
        outcome,
        Err(FlexError::Config(ConfigError::InvalidValue { property: "height", .. }))
    ));
    let node = tree.node(root).ok_or_else(|| anyhow::anyhow!("root vanished"))?;
    assert_eq!(node.flex_direction(), FlexDirection::Row);
    assert_eq!(node.width(), Length::Px(10.0));
    Ok(())
}

#[test]
fn failed_pass_keeps_previous_geometry() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node_from([("width", 100.0), ("height", 100.0)])?;
    let good = tree.new_node_from([("width", 40.0), ("height", 10.0)])?;
    let shifted = tree.new_node_from([("width", "40"), ("marginTop", "10%")])?;
    tree.insert_child(root, good)?;
    tree.insert_child(root, shifted)?;
    tree.calculate_layout(root, None, None, None)?;
    assert_eq!(tree.computed_layout(shifted)?.top, 10.0);

    tree.node_mut(root)
        .ok_or_else(|| anyhow::anyhow!("root vanished"))?
        .set_property("height", "auto")?;
    assert!(matches!(tree.calculate_layout(root, None, None, None), Err(_)));
    assert_eq!(tree.computed_layout(shifted)?.top, 10.0);
    assert_eq!(tree.computed_layout(good)?.width, 40.0);
    Ok(())
}

#[test]
fn errors_render_readable_messages() {
    let error = FlexError::from(LayoutError::UnknownNode);
    assert!(error.to_string().starts_with("layout error: "));
    let error = FlexError::from(ConfigError::UnknownProperty("flexGrowth".to_owned()));
    assert!(error.to_string().contains("flexGrowth"));
}
