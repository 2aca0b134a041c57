//! Alignment: auto margins, content distribution and cross-axis item alignment.
//! See <https://www.w3.org/TR/css-flexbox-1/#alignment>

pub mod auto_margins;
pub mod content_distribution;
pub mod cross_axis;

pub use auto_margins::resolve_auto_margins_and_outer;
pub use content_distribution::{align_content_params, justify_params};
pub use cross_axis::{CrossPlacement, CrossSize, align_item_in_line};
