//! Arena-backed node tree. Parents own an ordered child list; each child keeps a handle back
//! to its parent.

use indextree::{Arena, Node, NodeError, NodeId};
use log::trace;

use flex_style::{ConfigError, FlexStyle, LayoutError, PropertyValue};

use crate::layout_result::LayoutResult;
use crate::node::FlexNode;

/// A forest of flex nodes addressed by [`NodeId`].
#[derive(Clone, Debug, Default)]
pub struct FlexTree {
    arena: Arena<FlexNode>,
}

impl FlexTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node.
    pub fn new_node(&mut self, style: FlexStyle) -> NodeId {
        self.arena.new_node(FlexNode::new(style))
    }

    /// Add a detached node configured from `(name, value)` pairs.
    ///
    /// # Errors
    /// The first invalid name or value; no node is created in that case.
    pub fn new_node_from<I, K, V>(&mut self, properties: I) -> Result<NodeId, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        let style = FlexStyle::from_properties(properties)?;
        Ok(self.new_node(style))
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    ///
    /// # Errors
    /// `NodeError` when `child` is `parent` itself or one of its ancestors, or either node was
    /// removed.
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        parent.checked_append(child, &mut self.arena)?;
        trace!(target: "flex::compose", "[TREE] appended {child:?} under {parent:?}");
        Ok(())
    }

    /// Children of `node` in document order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.parent()
    }

    pub fn node(&self, node: NodeId) -> Option<&FlexNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut FlexNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(Node::get_mut)
    }

    /// Resolved box of `node` as of the last layout pass.
    ///
    /// # Errors
    /// `UnknownNode` when `node` is not part of this tree.
    pub fn computed_layout(&self, node: NodeId) -> Result<LayoutResult, LayoutError> {
        self.node(node)
            .map(FlexNode::computed_layout)
            .ok_or(LayoutError::UnknownNode)
    }

    pub(crate) fn get(&self, node: NodeId) -> Result<&FlexNode, LayoutError> {
        self.node(node).ok_or(LayoutError::UnknownNode)
    }

    pub(crate) fn get_mut(&mut self, node: NodeId) -> Result<&mut FlexNode, LayoutError> {
        self.node_mut(node).ok_or(LayoutError::UnknownNode)
    }

    pub fn len(&self) -> usize {
        self.arena.count()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
