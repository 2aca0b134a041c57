//! Errors raised by property assignment and by percentage resolution during layout.

use core::fmt::{self, Display, Formatter};

use flex_algorithm::Axis;

/// Rejected property assignment. The style is left unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The name is not a recognised property.
    UnknownProperty(String),
    /// The value is outside what the property accepts.
    InvalidValue { property: &'static str, value: String },
    /// A four-sided shorthand received a value count other than 1, 2 or 4.
    ShorthandArity { property: &'static str, count: usize },
}

impl ConfigError {
    pub(crate) fn invalid(property: &'static str, value: impl Display) -> Self {
        Self::InvalidValue {
            property,
            value: value.to_string(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty(name) => write!(formatter, "unknown property `{name}`"),
            Self::InvalidValue { property, value } => {
                write!(formatter, "invalid value `{value}` for `{property}`")
            }
            Self::ShorthandArity { property, count } => write!(
                formatter,
                "`{property}` takes 1, 2 or 4 values, got {count}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure during a layout pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A percentage was met while its reference size on `axis` was still unresolved.
    UnresolvedPercentage { property: &'static str, axis: Axis },
    /// The node handle does not belong to the tree being laid out.
    UnknownNode,
}

impl Display for LayoutError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedPercentage { property, axis } => write!(
                formatter,
                "percentage `{property}` needs a resolved parent {}",
                axis.size_name()
            ),
            Self::UnknownNode => formatter.write_str("node is not part of this tree"),
        }
    }
}

impl std::error::Error for LayoutError {}
