//! Auto margin resolution for flex items along the main axis.
//! See <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

use crate::chapter9::FlexChild;

/// Result type for auto margin calculations:
/// `(outer_sizes, effective_start_margins, auto_slots, sum_outer)`.
pub type OuterCalc = (Vec<f32>, Vec<f32>, usize, f32);

/// Distribute the main-axis space left after flexing across any `auto` margins on the line.
///
/// `inner_sizes` are the flexed sizes of each item's sizing box; each item's `main_extra`
/// (border and padding outside that box) is added to form its outer size. With an indefinite
/// container or no positive leftover space, auto margins resolve to 0.
pub fn resolve_auto_margins_and_outer(
    items: &[FlexChild],
    inner_sizes: &[f32],
    container_main_size: Option<f32>,
) -> OuterCalc {
    // Count auto slots and sum non-auto margins
    let mut fixed_sum = 0.0f32;
    let auto_slots = items
        .iter()
        .zip(inner_sizes.iter().copied())
        .fold(0usize, |acc, (child, inner)| {
            fixed_sum += inner + child.main_extra;
            if !child.margin_main_start_auto {
                fixed_sum += child.margin_main_start;
            }
            if !child.margin_main_end_auto {
                fixed_sum += child.margin_main_end;
            }
            acc.saturating_add(usize::from(child.margin_main_start_auto))
                .saturating_add(usize::from(child.margin_main_end_auto))
        });
    let leftover = container_main_size.map_or(0.0, |main| (main - fixed_sum).max(0.0));
    let auto_each = if auto_slots > 0 {
        leftover / auto_slots as f32
    } else {
        0.0
    };
    let mut outer_sizes: Vec<f32> = Vec::with_capacity(items.len());
    let mut effective_start_margins: Vec<f32> = Vec::with_capacity(items.len());
    for (child, inner) in items.iter().zip(inner_sizes.iter().copied()) {
        let eff_start = if child.margin_main_start_auto {
            auto_each
        } else {
            child.margin_main_start
        };
        let eff_end = if child.margin_main_end_auto {
            auto_each
        } else {
            child.margin_main_end
        };
        effective_start_margins.push(eff_start);
        outer_sizes.push(inner + child.main_extra + eff_start + eff_end);
    }
    let sum_outer: f32 = outer_sizes.iter().copied().sum();
    (outer_sizes, effective_start_margins, auto_slots, sum_outer)
}
