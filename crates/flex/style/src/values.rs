//! Property values as callers supply them, and the length type they resolve to.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw property value: a plain number (pixels, factors, integers) or a text form such as
/// `"50%"`, `"12px"`, `"auto"`, a keyword, or a whitespace-separated shorthand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f32),
    Text(String),
}

impl PropertyValue {
    /// The value as a number, accepting numeric text (`"2"`, `"2.5"`).
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse::<f32>().ok(),
        }
    }

    /// The value as trimmed text; numbers are formatted with `Display`.
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.trim().to_owned(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Text(text) => formatter.write_str(text),
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A length-valued property after validation.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the reference dimension, stored as written (`50.0` for `50%`).
    Percent(f32),
    /// `auto`.
    #[default]
    Auto,
}

impl Length {
    /// Parse `"12"`, `"12px"`, `"50%"` or `"auto"`. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed == "auto" {
            return Some(Self::Auto);
        }
        if let Some(percent) = trimmed.strip_suffix('%') {
            return parse_finite(percent).map(Self::Percent);
        }
        let pixels = trimmed.strip_suffix("px").unwrap_or(trimmed);
        parse_finite(pixels).map(Self::Px)
    }

    /// Convert a raw value; numbers are pixels.
    pub fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Number(number) if number.is_finite() => Some(Self::Px(*number)),
            PropertyValue::Number(_) => None,
            PropertyValue::Text(text) => Self::parse(text),
        }
    }

    /// Resolve against `reference` (used only for percentages).
    ///
    /// `auto` resolves to `Ok(None)`; a percentage with no reference yields `unresolved()`.
    pub fn resolve<Error>(
        self,
        reference: Option<f32>,
        unresolved: impl FnOnce() -> Error,
    ) -> Result<Option<f32>, Error> {
        match self {
            Self::Px(pixels) => Ok(Some(pixels)),
            Self::Percent(percent) => reference
                .map(|basis| Some(basis * percent / 100.0))
                .ok_or_else(unresolved),
            Self::Auto => Ok(None),
        }
    }

    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(pixels) => write!(formatter, "{pixels}"),
            Self::Percent(percent) => write!(formatter, "{percent}%"),
            Self::Auto => formatter.write_str("auto"),
        }
    }
}

impl From<Length> for PropertyValue {
    fn from(value: Length) -> Self {
        match value {
            Length::Px(pixels) => Self::Number(pixels),
            other @ (Length::Percent(_) | Length::Auto) => Self::Text(other.to_string()),
        }
    }
}

fn parse_finite(text: &str) -> Option<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|number| number.is_finite())
}
