//! Validated per-node style storage with typed accessors.
//!
//! Every setter validates before writing, so a rejected value leaves the style untouched, and
//! every successful write drops the memoised outer sizes (see `box_model`).

use core::cell::Cell;

use flex_algorithm::{
    AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent, keyword_enum,
};

use crate::box_model::OuterMemo;
use crate::error::ConfigError;
use crate::shorthand::{Edge, Sides};
use crate::values::{Length, PropertyValue};

keyword_enum! {
    /// Whether declared sizes measure the content box or the border box.
    /// See <https://www.w3.org/TR/css-sizing-3/#box-sizing>
    BoxSizing {
        ContentBox => "content-box",
        BorderBox => "border-box",
    }
}

/// Style of one node: sizes, box edges, flex container and item properties.
#[derive(Clone, Debug)]
pub struct FlexStyle {
    pub(crate) width: Length,
    pub(crate) height: Length,
    /// `Auto` means no lower bound.
    pub(crate) min_width: Length,
    pub(crate) min_height: Length,
    /// `Auto` means no upper bound (`none`).
    pub(crate) max_width: Length,
    pub(crate) max_height: Length,
    pub(crate) box_sizing: BoxSizing,
    pub(crate) border: Sides<f32>,
    pub(crate) padding: Sides<f32>,
    pub(crate) margin: Sides<Length>,
    pub(crate) position: Sides<Length>,
    pub(crate) flex_direction: FlexDirection,
    pub(crate) flex_wrap: FlexWrap,
    pub(crate) flex_grow: f32,
    pub(crate) flex_shrink: f32,
    pub(crate) flex_basis: Length,
    pub(crate) justify_content: JustifyContent,
    pub(crate) align_items: AlignItems,
    pub(crate) align_self: AlignSelf,
    pub(crate) align_content: AlignContent,
    pub(crate) order: i32,
    pub(crate) measured: Option<(f32, f32)>,
    /// Last accepted `flex` value, dropped when grow, shrink or basis is set on its own.
    pub(crate) flex_shorthand: Option<PropertyValue>,
    /// Last accepted `flexFlow` value, dropped when direction or wrap is set on its own.
    pub(crate) flex_flow_shorthand: Option<PropertyValue>,
    pub(crate) memo: Cell<OuterMemo>,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::Auto,
            min_height: Length::Auto,
            max_width: Length::Auto,
            max_height: Length::Auto,
            box_sizing: BoxSizing::default(),
            border: Sides::uniform(0.0),
            padding: Sides::uniform(0.0),
            margin: Sides::uniform(Length::Px(0.0)),
            position: Sides::uniform(Length::Auto),
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Length::Auto,
            justify_content: JustifyContent::default(),
            align_items: AlignItems::default(),
            align_self: AlignSelf::default(),
            align_content: AlignContent::default(),
            order: 0,
            measured: None,
            flex_shorthand: None,
            flex_flow_shorthand: None,
            memo: Cell::new(OuterMemo::default()),
        }
    }
}

/// Sizes cannot be negative; percentages are checked by sign too.
fn non_negative_length(property: &'static str, value: Length) -> Result<Length, ConfigError> {
    match value {
        Length::Px(amount) | Length::Percent(amount) if amount < 0.0 || !amount.is_finite() => {
            Err(ConfigError::invalid(property, value))
        }
        other @ (Length::Px(_) | Length::Percent(_) | Length::Auto) => Ok(other),
    }
}

fn non_negative(property: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::invalid(property, value))
    }
}

fn finite_length(property: &'static str, value: Length) -> Result<Length, ConfigError> {
    match value {
        Length::Px(amount) | Length::Percent(amount) if !amount.is_finite() => {
            Err(ConfigError::invalid(property, value))
        }
        other @ (Length::Px(_) | Length::Percent(_) | Length::Auto) => Ok(other),
    }
}

/// Generates a getter and a setter for a field whose type needs no validation. A trailing
/// `clears <field>` names a stored shorthand the setter drops.
macro_rules! plain_accessors {
    ($($(#[$meta:meta])* $field:ident, $setter:ident: $ty:ty $(, clears $shorthand:ident)?;)+) => {
        impl FlexStyle {
            $(
                $(#[$meta])*
                pub const fn $field(&self) -> $ty {
                    self.$field
                }

                pub fn $setter(&mut self, value: $ty) {
                    self.$field = value;
                    $(self.$shorthand = None;)?
                    self.invalidate();
                }
            )+
        }
    };
}

plain_accessors! {
    box_sizing, set_box_sizing: BoxSizing;
    flex_direction, set_flex_direction: FlexDirection, clears flex_flow_shorthand;
    flex_wrap, set_flex_wrap: FlexWrap, clears flex_flow_shorthand;
    justify_content, set_justify_content: JustifyContent;
    align_items, set_align_items: AlignItems;
    align_self, set_align_self: AlignSelf;
    align_content, set_align_content: AlignContent;
    /// Layout order among siblings; ties keep document order.
    order, set_order: i32;
}

/// Generates a getter and a validating setter for a size-like length field.
macro_rules! size_accessors {
    ($($field:ident, $setter:ident, $name:literal $(, clears $shorthand:ident)?;)+) => {
        impl FlexStyle {
            $(
                pub const fn $field(&self) -> Length {
                    self.$field
                }

                /// # Errors
                /// `InvalidValue` for negative or non-finite amounts.
                pub fn $setter(&mut self, value: Length) -> Result<(), ConfigError> {
                    self.$field = non_negative_length($name, value)?;
                    $(self.$shorthand = None;)?
                    self.invalidate();
                    Ok(())
                }
            )+
        }
    };
}

size_accessors! {
    width, set_width, "width";
    height, set_height, "height";
    min_width, set_min_width, "minWidth";
    min_height, set_min_height, "minHeight";
    max_width, set_max_width, "maxWidth";
    max_height, set_max_height, "maxHeight";
    flex_basis, set_flex_basis, "flexBasis", clears flex_shorthand;
}

impl FlexStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn flex_grow(&self) -> f32 {
        self.flex_grow
    }

    /// # Errors
    /// `InvalidValue` for negative or non-finite factors.
    pub fn set_flex_grow(&mut self, value: f32) -> Result<(), ConfigError> {
        self.flex_grow = non_negative("flexGrow", value)?;
        self.flex_shorthand = None;
        self.invalidate();
        Ok(())
    }

    pub const fn flex_shrink(&self) -> f32 {
        self.flex_shrink
    }

    /// # Errors
    /// `InvalidValue` for negative or non-finite factors.
    pub fn set_flex_shrink(&mut self, value: f32) -> Result<(), ConfigError> {
        self.flex_shrink = non_negative("flexShrink", value)?;
        self.flex_shorthand = None;
        self.invalidate();
        Ok(())
    }

    pub const fn border(&self) -> Sides<f32> {
        self.border
    }

    /// # Errors
    /// `InvalidValue` for a negative or non-finite width.
    pub fn set_border(&mut self, edge: Edge, value: f32) -> Result<(), ConfigError> {
        let checked = non_negative("border", value)?;
        self.border.set(edge, checked);
        self.invalidate();
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` when any side is negative or non-finite.
    pub fn set_border_sides(&mut self, sides: Sides<f32>) -> Result<(), ConfigError> {
        for value in sides.to_array() {
            non_negative("border", value)?;
        }
        self.border = sides;
        self.invalidate();
        Ok(())
    }

    pub const fn padding(&self) -> Sides<f32> {
        self.padding
    }

    /// # Errors
    /// `InvalidValue` for a negative or non-finite amount.
    pub fn set_padding(&mut self, edge: Edge, value: f32) -> Result<(), ConfigError> {
        let checked = non_negative("padding", value)?;
        self.padding.set(edge, checked);
        self.invalidate();
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` when any side is negative or non-finite.
    pub fn set_padding_sides(&mut self, sides: Sides<f32>) -> Result<(), ConfigError> {
        for value in sides.to_array() {
            non_negative("padding", value)?;
        }
        self.padding = sides;
        self.invalidate();
        Ok(())
    }

    pub const fn margin(&self) -> Sides<Length> {
        self.margin
    }

    /// Margins may be negative or `auto`.
    ///
    /// # Errors
    /// `InvalidValue` for a non-finite amount.
    pub fn set_margin(&mut self, edge: Edge, value: Length) -> Result<(), ConfigError> {
        let checked = finite_length("margin", value)?;
        self.margin.set(edge, checked);
        self.invalidate();
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` when any side is non-finite.
    pub fn set_margin_sides(&mut self, sides: Sides<Length>) -> Result<(), ConfigError> {
        for value in sides.to_array() {
            finite_length("margin", value)?;
        }
        self.margin = sides;
        self.invalidate();
        Ok(())
    }

    /// Relative offsets (`top`, `right`, `bottom`, `left`).
    pub const fn position(&self) -> Sides<Length> {
        self.position
    }

    /// # Errors
    /// `InvalidValue` for a non-finite amount.
    pub fn set_position(&mut self, edge: Edge, value: Length) -> Result<(), ConfigError> {
        let checked = finite_length("position", value)?;
        self.position.set(edge, checked);
        self.invalidate();
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` when any side is non-finite.
    pub fn set_position_sides(&mut self, sides: Sides<Length>) -> Result<(), ConfigError> {
        for value in sides.to_array() {
            finite_length("position", value)?;
        }
        self.position = sides;
        self.invalidate();
        Ok(())
    }

    /// Size reported by an external measurer (text, images) for a leaf.
    pub const fn measured_size(&self) -> Option<(f32, f32)> {
        self.measured
    }

    /// # Errors
    /// `InvalidValue` for a negative or non-finite dimension.
    pub fn set_measured_size(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let checked_width = non_negative("measuredWidth", width)?;
        let checked_height = non_negative("measuredHeight", height)?;
        self.measured = Some((checked_width, checked_height));
        self.invalidate();
        Ok(())
    }

    pub fn clear_measured_size(&mut self) {
        self.measured = None;
        self.invalidate();
    }

    /// Drop memoised derived sizes. Called by every setter.
    pub fn invalidate(&self) {
        self.memo.set(OuterMemo::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if defaults differ from the initial values.
    fn initial_values() {
        let style = FlexStyle::new();
        assert_eq!(style.flex_grow(), 0.0);
        assert_eq!(style.flex_shrink(), 1.0);
        assert_eq!(style.flex_basis(), Length::Auto);
        assert_eq!(style.width(), Length::Auto);
        assert_eq!(style.box_sizing(), BoxSizing::ContentBox);
        assert_eq!(style.margin(), Sides::uniform(Length::Px(0.0)));
        assert_eq!(style.order(), 0);
    }

    #[test]
    /// # Panics
    /// Panics if a rejected value changes the stored one.
    fn rejected_values_leave_state() {
        let mut style = FlexStyle::new();
        assert!(matches!(style.set_flex_grow(2.0), Ok(_)));
        assert!(matches!(style.set_flex_grow(-1.0), Err(_)));
        assert_eq!(style.flex_grow(), 2.0);
        assert!(matches!(style.set_width(Length::Px(-5.0)), Err(_)));
        assert_eq!(style.width(), Length::Auto);
        let bad = Sides {
            top: 1.0,
            right: -1.0,
            bottom: 1.0,
            left: 1.0,
        };
        assert!(matches!(style.set_padding_sides(bad), Err(_)));
        assert_eq!(style.padding(), Sides::uniform(0.0));
    }

    #[test]
    /// # Panics
    /// Panics if negative margins are refused.
    fn margins_may_be_negative() -> Result<(), ConfigError> {
        let mut style = FlexStyle::new();
        style.set_margin(Edge::Left, Length::Px(-10.0))?;
        assert_eq!(style.margin().left, Length::Px(-10.0));
        Ok(())
    }

    #[test]
    /// # Panics
    /// Panics if the box-sizing keyword table is not consistent.
    fn box_sizing_keywords() {
        for keyword in BoxSizing::KEYWORDS {
            assert_eq!(BoxSizing::from_keyword(keyword).map(BoxSizing::keyword), Some(*keyword));
        }
        assert_eq!(BoxSizing::from_keyword("padding-box"), None);
    }
}
