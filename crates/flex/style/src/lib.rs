//! Per-node flexbox style model: validated property storage, shorthand expansion and the
//! box-model arithmetic layout needs (percentages, flex basis, min/max, outer sizes).
//!
//! Property names follow the camelCase spelling (`flexDirection`, `marginLeft`). Values are
//! plain numbers (pixels) or text (`"50%"`, `"auto"`, keywords, shorthand lists).

mod box_model;
mod error;
mod property;
mod shorthand;
mod style;
mod values;

pub use box_model::ContainingBlock;
pub use error::{ConfigError, LayoutError};
pub use property::property_names;
pub use shorthand::{Edge, Sides, parse_sides};
pub use style::{BoxSizing, FlexStyle};
pub use values::{Length, PropertyValue};
