//! Flexbox layout over a tree of styled nodes.
//!
//! Build a [`FlexTree`], configure each node's style, call
//! [`FlexTree::calculate_layout`] on the root, then read any node's
//! [`FlexTree::computed_layout`].
//!
//! ```
//! use flex_layout::{FlexError, FlexTree};
//!
//! # fn main() -> Result<(), FlexError> {
//! let mut tree = FlexTree::new();
//! let root = tree.new_node_from([("width", 300.0)])?;
//! let child = tree.new_node_from([("flexGrow", 1.0)])?;
//! tree.insert_child(root, child)?;
//! tree.calculate_layout(root, None, Some(100.0), None)?;
//! assert_eq!(tree.computed_layout(child)?.width, 300.0);
//! # Ok(())
//! # }
//! ```

mod compose;
mod error;
mod layout_result;
mod node;
mod tree;

pub use error::FlexError;
pub use flex_algorithm::{
    AlignContent, AlignItems, AlignSelf, Axis, FlexDirection, FlexWrap, JustifyContent,
};
pub use flex_style::{
    BoxSizing, ConfigError, ContainingBlock, Edge, FlexStyle, LayoutError, Length, PropertyValue,
    Sides,
};
pub use indextree::NodeId;
pub use layout_result::{LayoutResult, ResolvedBox};
pub use node::FlexNode;
pub use tree::FlexTree;
