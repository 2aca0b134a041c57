//! Four-sided values and combined-value expansion for `border`, `padding`, `margin` and
//! `position`.

use flex_algorithm::Axis;

use crate::error::ConfigError;
use crate::values::PropertyValue;

/// One side of a box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in shorthand order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Leading edge on a physical axis.
    pub const fn start(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Left,
            Axis::Vertical => Self::Top,
        }
    }

    /// Trailing edge on a physical axis.
    pub const fn end(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::Right,
            Axis::Vertical => Self::Bottom,
        }
    }

    /// Axis whose size a percentage on this edge refers to.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Suffix used in longhand names (`marginTop`, `borderLeft`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Right => "Right",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
        }
    }
}

/// Per-side values, in CSS shorthand order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    pub const fn uniform(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expand 1, 2 or 4 values: `[a]` → all sides, `[a, b]` → `[a, b, a, b]`, four as given.
    pub fn expand(values: &[T]) -> Option<Self> {
        match *values {
            [all] => Some(Self::uniform(all)),
            [vertical, horizontal] => Some(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, right, bottom, left] => Some(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }

    pub const fn get(&self, edge: Edge) -> T {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn set(&mut self, edge: Edge, value: T) {
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
    }

    /// `[top, right, bottom, left]`.
    pub const fn to_array(&self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl<T: Copy + PartialEq> Sides<T> {
    /// Shortest value list that expands back to these sides.
    pub fn collapse(&self) -> Vec<T> {
        if self.top == self.bottom && self.right == self.left {
            if self.top == self.right {
                vec![self.top]
            } else {
                vec![self.top, self.right]
            }
        } else {
            self.to_array().to_vec()
        }
    }
}

/// Parse a combined value into sides, validating every component with `parse_one`.
///
/// A number applies to all four sides; text is split on whitespace.
///
/// # Errors
/// `ShorthandArity` for a component count other than 1, 2 or 4, and `InvalidValue` when any
/// component is rejected by `parse_one`.
pub fn parse_sides<T: Copy>(
    property: &'static str,
    value: &PropertyValue,
    parse_one: impl Fn(&PropertyValue) -> Option<T>,
) -> Result<Sides<T>, ConfigError> {
    let components: Vec<PropertyValue> = match value {
        PropertyValue::Number(_) => vec![value.clone()],
        PropertyValue::Text(text) => text
            .split_whitespace()
            .map(|token| PropertyValue::Text(token.to_owned()))
            .collect(),
    };
    let parsed = components
        .iter()
        .map(|component| parse_one(component).ok_or_else(|| ConfigError::invalid(property, value)))
        .collect::<Result<Vec<T>, ConfigError>>()?;
    Sides::expand(&parsed).ok_or(ConfigError::ShorthandArity {
        property,
        count: parsed.len(),
    })
}
