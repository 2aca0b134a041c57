//! Axis resolution and ordering utilities
//! See <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! See <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use crate::chapter5::FlexDirection;

/// Physical axis of a box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left to right; sized by width.
    Horizontal,
    /// Top to bottom; sized by height.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Name of the size property on this axis.
    pub const fn size_name(self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }
}

/// Resolved axes information for a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    /// Physical axis items are laid out along.
    pub main: Axis,
    /// True when main axis is reversed (row-reverse or column-reverse)
    pub main_reverse: bool,
}

impl Axes {
    /// Physical cross axis.
    pub const fn cross(self) -> Axis {
        self.main.cross()
    }
}

/// Resolve main/cross axes and direction given flex-direction.
///
/// Only the horizontal-tb writing mode is modelled: rows run left to right, columns top to
/// bottom.
///
/// See <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    match direction {
        FlexDirection::Row => Axes {
            main: Axis::Horizontal,
            main_reverse: false,
        },
        FlexDirection::RowReverse => Axes {
            main: Axis::Horizontal,
            main_reverse: true,
        },
        FlexDirection::Column => Axes {
            main: Axis::Vertical,
            main_reverse: false,
        },
        FlexDirection::ColumnReverse => Axes {
            main: Axis::Vertical,
            main_reverse: true,
        },
    }
}

/// Compute a stable ordering key for a flex item.
/// Returns (order, `original_index`) so a stable sort by this key respects document order ties.
///
/// See <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> (i32, usize) {
    (order, original_index)
}

type OrderKey = (i32, usize);

/// Stable sort of items by order, preserving input order for ties.
///
/// See <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable<Handle: Copy>(items: &[(Handle, i32)]) -> Vec<Handle> {
    let mut with_index: Vec<(OrderKey, Handle)> = items
        .iter()
        .enumerate()
        .map(|(original_index, &(handle, order))| (order_key(order, original_index), handle))
        .collect();
    with_index.sort_by(|key_a, key_b| key_a.0.cmp(&key_b.0));
    with_index.into_iter().map(|(_, handle)| handle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if axes resolution does not match the expected physical mapping.
    fn axes_for_each_direction() {
        assert_eq!(
            resolve_axes(FlexDirection::Row),
            Axes {
                main: Axis::Horizontal,
                main_reverse: false
            }
        );
        assert_eq!(
            resolve_axes(FlexDirection::RowReverse),
            Axes {
                main: Axis::Horizontal,
                main_reverse: true
            }
        );
        let column = resolve_axes(FlexDirection::Column);
        assert_eq!(column.main, Axis::Vertical);
        assert_eq!(column.cross(), Axis::Horizontal);
        assert!(resolve_axes(FlexDirection::ColumnReverse).main_reverse);
    }

    #[test]
    /// # Panics
    /// Panics if stable order sorting does not preserve input order for ties.
    fn stable_order_sorting() {
        let items = vec![(10u64, 1i32), (11u64, 0i32), (12u64, 1i32), (13u64, -1i32)];
        let sorted = sort_items_by_order_stable(&items);
        // Expect -1 first, then order=0, then order=1 preserving input order within the group
        assert_eq!(sorted, vec![13, 11, 10, 12]);
    }
}
