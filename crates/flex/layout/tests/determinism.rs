//! Repeated passes and style-driven configuration produce stable output.

use anyhow::Result;
use flex_layout::{FlexStyle, FlexTree, LayoutResult, NodeId, PropertyValue};
use serde_json::{Value, json};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn snapshot(tree: &FlexTree, ids: &[NodeId]) -> Result<Vec<Value>> {
    ids.iter()
        .map(|&id| Ok(serde_json::to_value(tree.computed_layout(id)?)?))
        .collect()
}

/// A small dashboard: a wrapping toolbar over a growing body.
fn dashboard(tree: &mut FlexTree) -> Result<(NodeId, Vec<NodeId>)> {
    let root_style: FlexStyle = serde_json::from_value(json!({
        "flexDirection": "column",
        "padding": "4 8",
    }))?;
    let root = tree.new_node(root_style);
    let toolbar = tree.new_node(serde_json::from_value(json!({
        "flexWrap": "wrap",
        "justifyContent": "space-between",
        "alignContent": "flex-start",
    }))?);
    tree.insert_child(root, toolbar)?;
    let mut ids = vec![root, toolbar];
    for width in [70.0, 90.0, 110.0, 50.0] {
        let button = tree.new_node_from([("width", width), ("height", 24.0)])?;
        tree.insert_child(toolbar, button)?;
        ids.push(button);
    }
    let body = tree.new_node(serde_json::from_value(json!({ "flex": "1 1 0", "margin": 6 }))?);
    tree.insert_child(root, body)?;
    ids.push(body);
    Ok((root, ids))
}

#[test]
fn repeated_passes_are_identical() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let (root, ids) = dashboard(&mut tree)?;
    tree.calculate_layout(root, Some(240.0), Some(300.0), None)?;
    let first = snapshot(&tree, &ids)?;
    tree.calculate_layout(root, None, None, None)?;
    let second = snapshot(&tree, &ids)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn style_changes_are_picked_up_by_the_next_pass() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let (root, ids) = dashboard(&mut tree)?;
    tree.calculate_layout(root, Some(240.0), Some(300.0), None)?;
    let narrow = snapshot(&tree, &ids)?;
    tree.calculate_layout(root, Some(400.0), None, None)?;
    let wide = snapshot(&tree, &ids)?;
    assert_ne!(narrow, wide);
    tree.calculate_layout(root, Some(240.0), None, None)?;
    assert_eq!(snapshot(&tree, &ids)?, narrow);
    Ok(())
}

#[test]
fn dashboard_geometry() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let (root, ids) = dashboard(&mut tree)?;
    tree.calculate_layout(root, Some(240.0), Some(300.0), None)?;
    let [_, toolbar, first, second, third, fourth, body] = ids[..] else {
        anyhow::bail!("unexpected node count");
    };
    let toolbar_box = tree.computed_layout(toolbar)?;
    assert_eq!((toolbar_box.left, toolbar_box.top), (8.0, 4.0));
    assert_eq!((toolbar_box.width, toolbar_box.height), (240.0, 0.0));

    let lefts: Vec<f32> = [first, second, third, fourth]
        .iter()
        .map(|&id| tree.computed_layout(id).map(|layout| layout.left))
        .collect::<Result<_, _>>()?;
    assert_eq!(lefts, vec![0.0, 150.0, 0.0, 190.0]);
    assert_eq!(tree.computed_layout(third)?.top, 24.0);

    assert_eq!(
        tree.computed_layout(body)?,
        LayoutResult {
            left: 14.0,
            right: 14.0,
            top: 10.0,
            bottom: 10.0,
            width: 228.0,
            height: 288.0,
        }
    );
    assert_eq!(
        serde_json::to_value(tree.computed_layout(root)?)?,
        json!({
            "left": 0.0, "right": 0.0, "top": 0.0, "bottom": 0.0,
            "width": 256.0, "height": 308.0,
        })
    );
    Ok(())
}

#[test]
fn resized_parent_remeasures_percentage_children() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node(FlexStyle::new());
    let half = tree.new_node_from([("width", PropertyValue::from("50%")), ("height", PropertyValue::from(10.0))])?;
    let next = tree.new_node_from([("width", 10.0), ("height", 10.0)])?;
    tree.insert_child(root, half)?;
    tree.insert_child(root, next)?;
    tree.calculate_layout(root, Some(200.0), Some(50.0), None)?;
    assert_eq!(tree.computed_layout(next)?.left, 100.0);
    tree.calculate_layout(root, Some(400.0), None, None)?;
    assert_eq!(tree.computed_layout(half)?.width, 200.0);
    assert_eq!(tree.computed_layout(next)?.left, 200.0);
    Ok(())
}

#[test]
fn leaf_that_gains_a_child_drops_its_measured_size() -> Result<()> {
    init_logs();
    let mut tree = FlexTree::new();
    let root = tree.new_node(FlexStyle::new());
    let mut measured = FlexStyle::new();
    measured.set_measured_size(80.0, 20.0)?;
    let label = tree.new_node(measured);
    tree.insert_child(root, label)?;
    tree.calculate_layout(root, Some(200.0), Some(50.0), None)?;
    assert_eq!(tree.computed_layout(label)?.width, 80.0);

    let icon = tree.new_node_from([("width", 12.0), ("height", 12.0)])?;
    tree.insert_child(label, icon)?;
    tree.calculate_layout(root, None, None, None)?;
    assert_eq!(tree.computed_layout(label)?.width, 0.0);
    Ok(())
}
