//! Line breaking logic for multi-line flex layouts.
//! See <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::trace;

use super::FlexChild;

/// Line start/end indices for items included in the line: `[start, end)`.
pub type LineRange = (usize, usize);

/// Break items into lines by accumulating outer hypothetical main sizes.
///
/// An item that would push the running total past `container_main_size` opens a new line,
/// unless the current line is still empty, in which case it is placed anyway. The item that
/// opens a wrapped line is not charged against that line's running total, so the following
/// item is measured against the full container size.
pub fn break_into_lines(container_main_size: f32, items: &[FlexChild]) -> Vec<LineRange> {
    let mut line_ranges: Vec<LineRange> = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (idx, child) in items.iter().enumerate() {
        let size = child.hypothetical_outer_main();
        let line_is_empty = idx == start;
        if line_is_empty || cursor + size <= container_main_size {
            cursor += size;
        } else {
            trace!(
                target: "flex::multi_line",
                "[LINE-BREAK] item={idx} size={size:.3} cursor={cursor:.3} available={container_main_size:.3}"
            );
            line_ranges.push((start, idx));
            start = idx;
            cursor = 0.0;
        }
    }
    if start < items.len() {
        line_ranges.push((start, items.len()));
    }
    line_ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(basis: f32) -> FlexChild {
        FlexChild::with_basis(basis)
    }

    #[test]
    /// # Panics
    /// Panics if a wrapped line does not start with the overflowing item.
    fn overflowing_item_opens_next_line() {
        let items = [sized(60.0), sized(60.0), sized(60.0)];
        assert_eq!(break_into_lines(100.0, &items), vec![(0, 1), (1, 3)]);
    }

    #[test]
    /// # Panics
    /// Panics if the opener of each wrapped line is charged against it.
    fn uniform_items_pair_up_after_first_line() {
        let items = [sized(60.0); 5];
        assert_eq!(break_into_lines(100.0, &items), vec![(0, 1), (1, 3), (3, 5)]);
    }

    #[test]
    /// # Panics
    /// Panics if a supplied outer size is not what the line is charged.
    fn supplied_outer_size_drives_breaks() {
        let mut wide = sized(10.0);
        wide.outer_main = Some(70.0);
        let items = [sized(40.0), wide];
        assert_eq!(break_into_lines(100.0, &items), vec![(0, 1), (1, 2)]);
    }

    #[test]
    /// # Panics
    /// Panics if items that fit exactly are split.
    fn exact_fit_stays_on_one_line() {
        let items = [sized(50.0), sized(50.0)];
        assert_eq!(break_into_lines(100.0, &items), vec![(0, 2)]);
    }

    #[test]
    /// # Panics
    /// Panics if an oversized first item produces an empty line.
    fn oversized_item_still_gets_a_line() {
        let items = [sized(150.0), sized(10.0)];
        assert_eq!(break_into_lines(100.0, &items), vec![(0, 1), (1, 2)]);
    }

    #[test]
    /// # Panics
    /// Panics if margins are ignored while breaking.
    fn margins_count_toward_line_length() {
        let mut first = sized(40.0);
        first.margin_main_end = 20.0;
        let items = [first, sized(50.0)];
        assert_eq!(break_into_lines(100.0, &items), vec![(0, 1), (1, 2)]);
    }

    #[test]
    /// # Panics
    /// Panics if breaking an empty item list yields lines.
    fn no_items_no_lines() {
        assert!(break_into_lines(100.0, &[]).is_empty());
    }
}
