//! Tree node: one style plus the geometry the last layout pass resolved for it.

use flex_algorithm::{AlignContent, AlignItems, AlignSelf, Axis, FlexDirection, FlexWrap, JustifyContent};
use flex_style::{BoxSizing, ConfigError, Edge, FlexStyle, Length, PropertyValue, Sides};

use crate::layout_result::{LayoutResult, ResolvedBox};

/// A node of a [`FlexTree`](crate::FlexTree).
#[derive(Clone, Debug, Default)]
pub struct FlexNode {
    pub(crate) style: FlexStyle,
    pub(crate) resolved: ResolvedBox,
}

impl FlexNode {
    pub fn new(style: FlexStyle) -> Self {
        Self {
            style,
            resolved: ResolvedBox::default(),
        }
    }

    pub const fn style(&self) -> &FlexStyle {
        &self.style
    }

    pub const fn style_mut(&mut self) -> &mut FlexStyle {
        &mut self.style
    }

    /// Geometry from the last layout pass; stale after a failed pass, zeroed before any.
    pub const fn resolved(&self) -> ResolvedBox {
        self.resolved
    }

    /// Snapshot of the resolved geometry with the border box computed from the current style.
    pub fn computed_layout(&self) -> LayoutResult {
        LayoutResult {
            left: self.resolved.left,
            right: self.resolved.right,
            top: self.resolved.top,
            bottom: self.resolved.bottom,
            width: self
                .style
                .border_box_size(Axis::Horizontal, self.resolved.computed_width),
            height: self
                .style
                .border_box_size(Axis::Vertical, self.resolved.computed_height),
        }
    }

    /// # Errors
    /// See [`FlexStyle::set_property`].
    pub fn set_property(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ConfigError> {
        self.style.set_property(name, value)
    }

    /// # Errors
    /// See [`FlexStyle::property`].
    pub fn property(&self, name: &str) -> Result<PropertyValue, ConfigError> {
        self.style.property(name)
    }
}

/// Forwards accessors to the node's [`FlexStyle`].
macro_rules! delegate_to_style {
    (&self: $($getter:ident -> $ret:ty;)+) => {
        impl FlexNode {
            $(
                #[doc = concat!("Forwards to [`FlexStyle::", stringify!($getter), "`].")]
                pub fn $getter(&self) -> $ret {
                    self.style.$getter()
                }
            )+
        }
    };
    (&mut self: $($setter:ident($($arg:ident: $ty:ty),+) $(-> $ret:ty)?;)+) => {
        impl FlexNode {
            $(
                #[doc = concat!("Forwards to [`FlexStyle::", stringify!($setter), "`].")]
                $(#[doc = concat!("\n# Errors\nSee [`FlexStyle::", stringify!($setter), "`]; returns `", stringify!($ret), "`.")])?
                pub fn $setter(&mut self, $($arg: $ty),+) $(-> $ret)? {
                    self.style.$setter($($arg),+)
                }
            )+
        }
    };
}

delegate_to_style! {
    &self:
    width -> Length;
    height -> Length;
    min_width -> Length;
    min_height -> Length;
    max_width -> Length;
    max_height -> Length;
    box_sizing -> BoxSizing;
    border -> Sides<f32>;
    padding -> Sides<f32>;
    margin -> Sides<Length>;
    position -> Sides<Length>;
    flex_direction -> FlexDirection;
    flex_wrap -> FlexWrap;
    flex_grow -> f32;
    flex_shrink -> f32;
    flex_basis -> Length;
    justify_content -> JustifyContent;
    align_items -> AlignItems;
    align_self -> AlignSelf;
    align_content -> AlignContent;
    order -> i32;
    measured_size -> Option<(f32, f32)>;
}

delegate_to_style! {
    &mut self:
    set_width(value: Length) -> Result<(), ConfigError>;
    set_height(value: Length) -> Result<(), ConfigError>;
    set_min_width(value: Length) -> Result<(), ConfigError>;
    set_min_height(value: Length) -> Result<(), ConfigError>;
    set_max_width(value: Length) -> Result<(), ConfigError>;
    set_max_height(value: Length) -> Result<(), ConfigError>;
    set_box_sizing(value: BoxSizing);
    set_border(edge: Edge, value: f32) -> Result<(), ConfigError>;
    set_border_sides(sides: Sides<f32>) -> Result<(), ConfigError>;
    set_padding(edge: Edge, value: f32) -> Result<(), ConfigError>;
    set_padding_sides(sides: Sides<f32>) -> Result<(), ConfigError>;
    set_margin(edge: Edge, value: Length) -> Result<(), ConfigError>;
    set_margin_sides(sides: Sides<Length>) -> Result<(), ConfigError>;
    set_position(edge: Edge, value: Length) -> Result<(), ConfigError>;
    set_position_sides(sides: Sides<Length>) -> Result<(), ConfigError>;
    set_flex_direction(value: FlexDirection);
    set_flex_wrap(value: FlexWrap);
    set_flex_grow(value: f32) -> Result<(), ConfigError>;
    set_flex_shrink(value: f32) -> Result<(), ConfigError>;
    set_flex_basis(value: Length) -> Result<(), ConfigError>;
    set_justify_content(value: JustifyContent);
    set_align_items(value: AlignItems);
    set_align_self(value: AlignSelf);
    set_align_content(value: AlignContent);
    set_order(value: i32);
    set_measured_size(width: f32, height: f32) -> Result<(), ConfigError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if node accessors do not read and write the node's own style.
    fn accessors_forward_to_style() -> Result<(), ConfigError> {
        let mut node = FlexNode::default();
        node.set_flex_grow(2.0)?;
        node.set_margin(Edge::Top, Length::Percent(5.0))?;
        node.set_flex_direction(FlexDirection::Column);
        assert_eq!(node.flex_grow(), 2.0);
        assert_eq!(node.style().flex_grow(), 2.0);
        assert_eq!(node.margin().top, Length::Percent(5.0));
        assert_eq!(node.property("flexDirection")?, PropertyValue::from("column"));
        node.set_property("alignSelf", "center")?;
        assert_eq!(node.align_self(), AlignSelf::Center);
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if a node reports anything but zeros before layout.
    fn unlaid_node_is_zeroed() {
        assert_eq!(FlexNode::default().computed_layout(), LayoutResult::default());
    }
}
