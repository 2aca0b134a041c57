//! Umbrella error for building and laying out a tree in one fallible function.

use core::fmt::{self, Display, Formatter};

use flex_style::{ConfigError, LayoutError};
use indextree::NodeError;

#[derive(Debug)]
pub enum FlexError {
    Config(ConfigError),
    Layout(LayoutError),
    Tree(NodeError),
}

impl Display for FlexError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(formatter, "configuration error: {error}"),
            Self::Layout(error) => write!(formatter, "layout error: {error}"),
            Self::Tree(error) => write!(formatter, "tree error: {error}"),
        }
    }
}

impl std::error::Error for FlexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(error) => Some(error),
            Self::Layout(error) => Some(error),
            Self::Tree(error) => Some(error),
        }
    }
}

impl From<ConfigError> for FlexError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<LayoutError> for FlexError {
    fn from(error: LayoutError) -> Self {
        Self::Layout(error)
    }
}

impl From<NodeError> for FlexError {
    fn from(error: NodeError) -> Self {
        Self::Tree(error)
    }
}
