//! Cross-axis alignment and sizing of a flex item within its line.
//! See <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use crate::chapter5::AlignItems;
use crate::chapter9::{FlexChild, clamp};

/// Cross-size specification for flex items, distinguishing between
/// explicit sizes and items that may stretch to fill the line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CrossSize {
    /// Item has a definite cross size.
    Definite(f32),
    /// Item has an `auto` cross size; value is the measured size (or 0) used when not stretching.
    Auto(f32),
}

impl CrossSize {
    /// The size before alignment/stretching.
    pub const fn hypothetical(self) -> f32 {
        match self {
            Self::Definite(size) | Self::Auto(size) => size,
        }
    }

    /// Whether `stretch` may resize this item.
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

/// Cross-axis placement result when aligning an item within its line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossPlacement {
    /// The resolved cross size of the item's sizing box after alignment and clamping.
    pub cross_size: f32,
    /// Offset of the item's border box from the line's cross-start edge.
    pub cross_offset: f32,
}

impl FlexChild {
    /// Clamped hypothetical cross size including border/padding extra and margins, unless
    /// supplied in `outer_cross`. `auto` cross margins count as 0.
    pub fn hypothetical_outer_cross(&self) -> f32 {
        self.outer_cross.unwrap_or_else(|| {
            clamp(self.cross_size.hypothetical(), self.min_cross, self.max_cross)
                + self.cross_extra
                + self.fixed_cross_margins()
        })
    }

    fn fixed_cross_margins(&self) -> f32 {
        let start = if self.margin_cross_start_auto {
            0.0
        } else {
            self.margin_cross_start
        };
        let end = if self.margin_cross_end_auto {
            0.0
        } else {
            self.margin_cross_end
        };
        start + end
    }
}

/// Compute cross-axis size and offset of one item inside a line of `line_cross_size`.
///
/// Behavior:
/// - Auto cross margins take precedence and split the leftover line space.
/// - `stretch` fills the line (minus margins and extra) when the item's cross size is `auto`.
/// - `flex-start`/`flex-end`/`center` position without resizing.
/// - `baseline` is laid out as `flex-start`.
pub fn align_item_in_line(
    align: AlignItems,
    line_cross_size: f32,
    item: &FlexChild,
) -> CrossPlacement {
    let auto_slots =
        usize::from(item.margin_cross_start_auto) + usize::from(item.margin_cross_end_auto);
    let margins = item.fixed_cross_margins();
    let cross_size = if auto_slots == 0
        && matches!(align, AlignItems::Stretch)
        && item.cross_size.is_auto()
    {
        clamp(
            line_cross_size - margins - item.cross_extra,
            item.min_cross,
            item.max_cross,
        )
    } else {
        clamp(item.cross_size.hypothetical(), item.min_cross, item.max_cross)
    };
    let free = line_cross_size - (cross_size + item.cross_extra + margins);
    let start_margin = if item.margin_cross_start_auto {
        0.0
    } else {
        item.margin_cross_start
    };
    let cross_offset = if auto_slots > 0 {
        let auto_each = free.max(0.0) / auto_slots as f32;
        if item.margin_cross_start_auto {
            auto_each
        } else {
            start_margin
        }
    } else {
        match align {
            AlignItems::Stretch | AlignItems::FlexStart | AlignItems::Baseline => start_margin,
            AlignItems::FlexEnd => start_margin + free,
            AlignItems::Center => start_margin + free * 0.5,
        }
    };
    CrossPlacement {
        cross_size,
        cross_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(cross: CrossSize) -> FlexChild {
        let mut child = FlexChild::with_basis(10.0);
        child.cross_size = cross;
        child
    }

    #[test]
    /// # Panics
    /// Panics if stretch does not fill the line for an auto cross size.
    fn stretch_fills_line_for_auto_size() {
        let mut child = item(CrossSize::Auto(0.0));
        child.margin_cross_start = 5.0;
        child.cross_extra = 2.0;
        let placed = align_item_in_line(AlignItems::Stretch, 100.0, &child);
        assert!((placed.cross_size - 93.0).abs() < 0.001);
        assert!((placed.cross_offset - 5.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if stretch resizes an item that has a definite cross size.
    fn stretch_keeps_definite_size() {
        let placed = align_item_in_line(AlignItems::Stretch, 100.0, &item(CrossSize::Definite(30.0)));
        assert!((placed.cross_size - 30.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if stretch ignores max-cross.
    fn stretch_respects_max_cross() {
        let mut child = item(CrossSize::Auto(0.0));
        child.max_cross = 40.0;
        let placed = align_item_in_line(AlignItems::Stretch, 100.0, &child);
        assert!((placed.cross_size - 40.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if end/center offsets are wrong.
    fn end_and_center_offsets() {
        let child = item(CrossSize::Definite(20.0));
        let end = align_item_in_line(AlignItems::FlexEnd, 100.0, &child);
        assert!((end.cross_offset - 80.0).abs() < 0.001);
        let center = align_item_in_line(AlignItems::Center, 100.0, &child);
        assert!((center.cross_offset - 40.0).abs() < 0.001);
        let baseline = align_item_in_line(AlignItems::Baseline, 100.0, &child);
        assert!(baseline.cross_offset.abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if auto cross margins do not center the item.
    fn auto_cross_margins_center_item() {
        let mut child = item(CrossSize::Auto(20.0));
        child.margin_cross_start_auto = true;
        child.margin_cross_end_auto = true;
        let placed = align_item_in_line(AlignItems::Stretch, 100.0, &child);
        assert!((placed.cross_size - 20.0).abs() < 0.001);
        assert!((placed.cross_offset - 40.0).abs() < 0.001);
    }
}
