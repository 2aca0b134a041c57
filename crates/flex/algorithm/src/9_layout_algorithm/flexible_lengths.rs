//! Resolving flexible lengths: grow and shrink distribution with clamp freezing.
//! See <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::{debug, trace};

use super::FlexChild;

/// Clamp a value between min and max inclusive. When the constraints conflict, `min` wins.
pub const fn clamp(value: f32, min_v: f32, max_v: f32) -> f32 {
    value.min(max_v).max(min_v)
}

/// Which way free space flows on a line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum FlexMode {
    Grow,
    Shrink,
}

/// Resolve the main size of every item on one line.
///
/// Sizes start at each item's flex base size clamped to its min/max. With a definite
/// `available` main size the free space (available minus outer hypothetical sizes, with `auto`
/// margins counted as 0) is distributed by `flex-grow` when positive, or taken away in
/// proportion to `flex-shrink × base size` when negative. Any item whose share violates its
/// min/max is clamped and frozen, and the space is redistributed among the remaining items;
/// this repeats at most once per item. An indefinite line keeps the hypothetical sizes.
pub fn resolve_flexible_lengths(available: Option<f32>, items: &[FlexChild]) -> Vec<f32> {
    let bases: Vec<f32> = items
        .iter()
        .map(|child| clamp(child.flex_basis, child.min_main, child.max_main))
        .collect();
    let Some(available) = available else {
        return bases;
    };
    let outer: f32 = items.iter().map(FlexChild::hypothetical_outer_main).sum();
    let sum: f32 = bases.iter().copied().sum();
    let fixed = outer - sum;
    let free_space = available - outer;
    debug!(
        target: "flex::single_line",
        "[FLEX-LENGTHS] items={} sum_bases={:.3} fixed_outer={:.3} available={:.3} free_space={:.3}",
        items.len(),
        sum,
        fixed,
        available,
        free_space
    );
    let mode = if free_space > 0.0 {
        FlexMode::Grow
    } else if free_space < 0.0 {
        FlexMode::Shrink
    } else {
        return bases;
    };
    distribute(mode, available - fixed, items, &bases)
}

/// Weight of an item in the current distribution mode.
fn flex_weight(mode: FlexMode, child: &FlexChild, base: f32) -> f32 {
    match mode {
        FlexMode::Grow => child.flex_grow.max(0.0),
        FlexMode::Shrink => child.flex_shrink.max(0.0) * base.max(0.0),
    }
}

/// Iteratively distribute `inner_available - Σ sizes` among unfrozen items.
fn distribute(
    mode: FlexMode,
    inner_available: f32,
    items: &[FlexChild],
    bases: &[f32],
) -> Vec<f32> {
    let mut sizes = bases.to_vec();
    // Inflexible items never take part in the distribution.
    let mut frozen: Vec<bool> = items
        .iter()
        .zip(bases.iter().copied())
        .map(|(child, base)| flex_weight(mode, child, base) <= 0.0)
        .collect();
    for pass in 0..items.len() {
        let mut sum_weight = 0.0f32;
        let mut occupied = 0.0f32;
        for (((child, base), size), is_frozen) in items
            .iter()
            .zip(bases.iter().copied())
            .zip(sizes.iter().copied())
            .zip(frozen.iter().copied())
        {
            if is_frozen {
                occupied += size;
            } else {
                occupied += base;
                sum_weight += flex_weight(mode, child, base);
            }
        }
        let remaining = inner_available - occupied;
        let wrong_sign = match mode {
            FlexMode::Grow => remaining <= 0.0,
            FlexMode::Shrink => remaining >= 0.0,
        };
        if sum_weight <= 0.0 || wrong_sign {
            break;
        }
        let mut any_clamped = false;
        for (((child, base), size_ref), frozen_ref) in items
            .iter()
            .zip(bases.iter().copied())
            .zip(sizes.iter_mut())
            .zip(frozen.iter_mut())
        {
            if *frozen_ref {
                continue;
            }
            let share = remaining * flex_weight(mode, child, base) / sum_weight;
            let target = base + share;
            let clamped = clamp(target, child.min_main, child.max_main);
            *size_ref = clamped;
            if (clamped - target).abs() > f32::EPSILON {
                *frozen_ref = true;
                any_clamped = true;
            }
        }
        trace!(
            target: "flex::single_line",
            "[FLEX-LENGTHS] mode={mode:?} pass={pass} remaining={remaining:.3} sizes={sizes:?}"
        );
        if !any_clamped {
            break;
        }
    }
    sizes
}
