//! Access to style properties by their camelCase names, including the `flex`, `flexFlow` and
//! four-sided shorthands, plus construction from a flat name → value mapping.

use core::fmt;

use flex_algorithm::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::ConfigError;
use crate::shorthand::{Edge, Sides, parse_sides};
use crate::style::{BoxSizing, FlexStyle};
use crate::values::{Length, PropertyValue};

/// Which sides a box-edge property addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Sided {
    All,
    One(Edge),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Property {
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    BoxSizing,
    Border(Sided),
    Padding(Sided),
    Margin(Sided),
    Position(Sided),
    FlexDirection,
    FlexWrap,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    Flex,
    FlexFlow,
    JustifyContent,
    AlignItems,
    AlignSelf,
    AlignContent,
    Order,
}

/// Every recognised property name.
const PROPERTIES: &[(&str, Property)] = &[
    ("width", Property::Width),
    ("height", Property::Height),
    ("minWidth", Property::MinWidth),
    ("minHeight", Property::MinHeight),
    ("maxWidth", Property::MaxWidth),
    ("maxHeight", Property::MaxHeight),
    ("boxSizing", Property::BoxSizing),
    ("border", Property::Border(Sided::All)),
    ("borderTop", Property::Border(Sided::One(Edge::Top))),
    ("borderRight", Property::Border(Sided::One(Edge::Right))),
    ("borderBottom", Property::Border(Sided::One(Edge::Bottom))),
    ("borderLeft", Property::Border(Sided::One(Edge::Left))),
    ("padding", Property::Padding(Sided::All)),
    ("paddingTop", Property::Padding(Sided::One(Edge::Top))),
    ("paddingRight", Property::Padding(Sided::One(Edge::Right))),
    ("paddingBottom", Property::Padding(Sided::One(Edge::Bottom))),
    ("paddingLeft", Property::Padding(Sided::One(Edge::Left))),
    ("margin", Property::Margin(Sided::All)),
    ("marginTop", Property::Margin(Sided::One(Edge::Top))),
    ("marginRight", Property::Margin(Sided::One(Edge::Right))),
    ("marginBottom", Property::Margin(Sided::One(Edge::Bottom))),
    ("marginLeft", Property::Margin(Sided::One(Edge::Left))),
    ("position", Property::Position(Sided::All)),
    ("top", Property::Position(Sided::One(Edge::Top))),
    ("right", Property::Position(Sided::One(Edge::Right))),
    ("bottom", Property::Position(Sided::One(Edge::Bottom))),
    ("left", Property::Position(Sided::One(Edge::Left))),
    ("flexDirection", Property::FlexDirection),
    ("flexWrap", Property::FlexWrap),
    ("flexGrow", Property::FlexGrow),
    ("flexShrink", Property::FlexShrink),
    ("flexBasis", Property::FlexBasis),
    ("flex", Property::Flex),
    ("flexFlow", Property::FlexFlow),
    ("justifyContent", Property::JustifyContent),
    ("alignItems", Property::AlignItems),
    ("alignSelf", Property::AlignSelf),
    ("alignContent", Property::AlignContent),
    ("order", Property::Order),
];

fn lookup(name: &str) -> Result<(&'static str, Property), ConfigError> {
    PROPERTIES
        .iter()
        .find(|(known, _)| *known == name)
        .copied()
        .ok_or_else(|| ConfigError::UnknownProperty(name.to_owned()))
}

/// Names accepted by [`FlexStyle::set_property`] and [`FlexStyle::property`].
pub fn property_names() -> impl Iterator<Item = &'static str> {
    PROPERTIES.iter().map(|(name, _)| *name)
}

fn keyword<T>(
    property: &'static str,
    value: &PropertyValue,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match value {
        PropertyValue::Text(text) => parse(text.trim()),
        PropertyValue::Number(_) => None,
    }
    .ok_or_else(|| ConfigError::invalid(property, value))
}

fn length(property: &'static str, value: &PropertyValue) -> Result<Length, ConfigError> {
    Length::from_value(value).ok_or_else(|| ConfigError::invalid(property, value))
}

/// Min/max bounds: a length without `auto`; `auto` and `none` clear the bound.
fn bound(property: &'static str, value: &PropertyValue) -> Result<Length, ConfigError> {
    match value {
        PropertyValue::Text(text) if matches!(text.trim(), "none" | "auto") => Ok(Length::Auto),
        PropertyValue::Number(_) | PropertyValue::Text(_) => length(property, value),
    }
}

fn number(property: &'static str, value: &PropertyValue) -> Result<f32, ConfigError> {
    value
        .as_number()
        .ok_or_else(|| ConfigError::invalid(property, value))
}

/// Border and padding components: plain non-negative pixels.
fn pixels(value: &PropertyValue) -> Option<f32> {
    match Length::from_value(value)? {
        Length::Px(amount) if amount >= 0.0 => Some(amount),
        Length::Px(_) | Length::Percent(_) | Length::Auto => None,
    }
}

/// `flex` components after validation: grow, shrink, optional basis.
type FlexParts = (f32, f32, Option<Length>);

/// Parse `<grow> [<shrink>] [<basis>]`, or a lone basis. `None` for `none`.
fn parse_flex(value: &PropertyValue) -> Result<Option<FlexParts>, ConfigError> {
    let invalid = || ConfigError::invalid("flex", value);
    let text = match value {
        PropertyValue::Number(grow) if *grow >= 0.0 && grow.is_finite() => {
            return Ok(Some((*grow, 1.0, None)));
        }
        PropertyValue::Number(_) => return Err(invalid()),
        PropertyValue::Text(text) => text.trim(),
    };
    match text {
        "none" => return Ok(None),
        "auto" => return Ok(Some((1.0, 1.0, Some(Length::Auto)))),
        _ => {}
    }
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let factor = |token: &str| {
        token
            .parse::<f32>()
            .ok()
            .filter(|parsed| *parsed >= 0.0 && parsed.is_finite())
    };
    let basis = |token: &str| {
        Length::parse(token).filter(|parsed| match parsed {
            Length::Px(amount) | Length::Percent(amount) => *amount >= 0.0,
            Length::Auto => true,
        })
    };
    match tokens.as_slice() {
        [grow] => match factor(*grow) {
            Some(grow_factor) => Ok(Some((grow_factor, 1.0, None))),
            None => basis(*grow)
                .filter(|parsed| !parsed.is_auto())
                .map(|parsed| Some((1.0, 1.0, Some(parsed))))
                .ok_or_else(invalid),
        },
        [grow, second] => {
            let grow_factor = factor(*grow).ok_or_else(invalid)?;
            match factor(*second) {
                Some(shrink) => Ok(Some((grow_factor, shrink, None))),
                None => {
                    let parsed = basis(*second).ok_or_else(invalid)?;
                    Ok(Some((grow_factor, 1.0, Some(parsed))))
                }
            }
        }
        [grow, shrink, third] => {
            let grow_factor = factor(*grow).ok_or_else(invalid)?;
            let shrink_factor = factor(*shrink).ok_or_else(invalid)?;
            let basis_length = basis(*third).ok_or_else(invalid)?;
            Ok(Some((grow_factor, shrink_factor, Some(basis_length))))
        }
        _ => Err(invalid()),
    }
}

/// Parse `flexFlow`: at most one direction and one wrap keyword, in any order.
fn parse_flex_flow(
    value: &PropertyValue,
) -> Result<(Option<FlexDirection>, Option<FlexWrap>), ConfigError> {
    let invalid = || ConfigError::invalid("flexFlow", value);
    let PropertyValue::Text(text) = value else {
        return Err(invalid());
    };
    let mut direction = None;
    let mut wrap = None;
    let mut seen = 0usize;
    for token in text.split_whitespace() {
        seen += 1;
        if let Some(parsed) = FlexDirection::from_keyword(token)
            && direction.is_none()
        {
            direction = Some(parsed);
        } else if let Some(parsed) = FlexWrap::from_keyword(token)
            && wrap.is_none()
        {
            wrap = Some(parsed);
        } else {
            return Err(invalid());
        }
    }
    if seen == 0 {
        return Err(invalid());
    }
    Ok((direction, wrap))
}

/// Read-back form of four-sided values: a single value when all sides agree, otherwise the
/// shortest whitespace-separated list.
fn collapse_sides<T: Copy + PartialEq>(sides: &Sides<T>, to_value: fn(T) -> PropertyValue) -> PropertyValue {
    let parts = sides.collapse();
    if let [only] = parts.as_slice() {
        return to_value(*only);
    }
    let text: Vec<String> = parts.into_iter().map(|part| to_value(part).to_text()).collect();
    PropertyValue::Text(text.join(" "))
}

impl FlexStyle {
    /// Assign a property by name.
    ///
    /// # Errors
    /// `UnknownProperty` for an unrecognised name, `InvalidValue` for a value the property
    /// does not accept, `ShorthandArity` for a four-sided shorthand with 3 or 5+ values. On
    /// error nothing is changed.
    pub fn set_property(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ConfigError> {
        let raw = value.into();
        let (canonical, property) = lookup(name)?;
        match property {
            Property::Width => self.set_width(length(canonical, &raw)?),
            Property::Height => self.set_height(length(canonical, &raw)?),
            Property::MinWidth => self.set_min_width(bound(canonical, &raw)?),
            Property::MinHeight => self.set_min_height(bound(canonical, &raw)?),
            Property::MaxWidth => self.set_max_width(bound(canonical, &raw)?),
            Property::MaxHeight => self.set_max_height(bound(canonical, &raw)?),
            Property::BoxSizing => {
                self.set_box_sizing(keyword(canonical, &raw, BoxSizing::from_keyword)?);
                Ok(())
            }
            Property::Border(Sided::All) => {
                self.set_border_sides(parse_sides(canonical, &raw, pixels)?)
            }
            Property::Border(Sided::One(edge)) => {
                let amount = pixels(&raw).ok_or_else(|| ConfigError::invalid(canonical, &raw))?;
                self.set_border(edge, amount)
            }
            Property::Padding(Sided::All) => {
                self.set_padding_sides(parse_sides(canonical, &raw, pixels)?)
            }
            Property::Padding(Sided::One(edge)) => {
                let amount = pixels(&raw).ok_or_else(|| ConfigError::invalid(canonical, &raw))?;
                self.set_padding(edge, amount)
            }
            Property::Margin(Sided::All) => {
                self.set_margin_sides(parse_sides(canonical, &raw, Length::from_value)?)
            }
            Property::Margin(Sided::One(edge)) => self.set_margin(edge, length(canonical, &raw)?),
            Property::Position(Sided::All) => {
                self.set_position_sides(parse_sides(canonical, &raw, Length::from_value)?)
            }
            Property::Position(Sided::One(edge)) => {
                self.set_position(edge, length(canonical, &raw)?)
            }
            Property::FlexDirection => {
                self.set_flex_direction(keyword(canonical, &raw, FlexDirection::from_keyword)?);
                Ok(())
            }
            Property::FlexWrap => {
                self.set_flex_wrap(keyword(canonical, &raw, FlexWrap::from_keyword)?);
                Ok(())
            }
            Property::FlexGrow => self.set_flex_grow(number(canonical, &raw)?),
            Property::FlexShrink => self.set_flex_shrink(number(canonical, &raw)?),
            Property::FlexBasis => self.set_flex_basis(length(canonical, &raw)?),
            Property::Flex => {
                self.apply_flex(&raw)?;
                self.flex_shorthand = Some(raw);
                Ok(())
            }
            Property::FlexFlow => {
                let (direction, wrap) = parse_flex_flow(&raw)?;
                if let Some(parsed) = direction {
                    self.set_flex_direction(parsed);
                }
                if let Some(parsed) = wrap {
                    self.set_flex_wrap(parsed);
                }
                self.flex_flow_shorthand = Some(raw);
                Ok(())
            }
            Property::JustifyContent => {
                self.set_justify_content(keyword(canonical, &raw, JustifyContent::from_keyword)?);
                Ok(())
            }
            Property::AlignItems => {
                self.set_align_items(keyword(canonical, &raw, AlignItems::from_keyword)?);
                Ok(())
            }
            Property::AlignSelf => {
                self.set_align_self(keyword(canonical, &raw, AlignSelf::from_keyword)?);
                Ok(())
            }
            Property::AlignContent => {
                self.set_align_content(keyword(canonical, &raw, AlignContent::from_keyword)?);
                Ok(())
            }
            Property::Order => {
                let order = number(canonical, &raw)?;
                if order.fract() != 0.0 || !order.is_finite() {
                    return Err(ConfigError::invalid(canonical, &raw));
                }
                self.set_order(order as i32);
                Ok(())
            }
        }
    }

    /// `flex`: a number sets grow and resets shrink to 1, `none` leaves both untouched.
    fn apply_flex(&mut self, raw: &PropertyValue) -> Result<(), ConfigError> {
        let Some((grow, shrink, basis)) = parse_flex(raw)? else {
            return Ok(());
        };
        // Every component is validated by now, so none of these can fail halfway.
        if let Some(parsed) = basis {
            self.set_flex_basis(parsed)?;
        }
        self.set_flex_grow(grow)?;
        self.set_flex_shrink(shrink)
    }

    /// Read a property by name. Four-sided shorthands collapse to their shortest form. `flex`
    /// and `flexFlow` read back as last assigned; once a longhand they cover is set on its own
    /// they read as `"<grow> <shrink> <basis>"` and `"<direction> <wrap>"`.
    ///
    /// # Errors
    /// `UnknownProperty` for an unrecognised name.
    pub fn property(&self, name: &str) -> Result<PropertyValue, ConfigError> {
        let (_, property) = lookup(name)?;
        let bound_value = |bound_length: Length, unset: &str| match bound_length {
            Length::Auto => PropertyValue::from(unset),
            Length::Px(_) | Length::Percent(_) => PropertyValue::from(bound_length),
        };
        Ok(match property {
            Property::Width => self.width.into(),
            Property::Height => self.height.into(),
            Property::MinWidth => bound_value(self.min_width, "auto"),
            Property::MinHeight => bound_value(self.min_height, "auto"),
            Property::MaxWidth => bound_value(self.max_width, "none"),
            Property::MaxHeight => bound_value(self.max_height, "none"),
            Property::BoxSizing => self.box_sizing.keyword().into(),
            Property::Border(Sided::All) => collapse_sides(&self.border, PropertyValue::Number),
            Property::Border(Sided::One(edge)) => PropertyValue::Number(self.border.get(edge)),
            Property::Padding(Sided::All) => collapse_sides(&self.padding, PropertyValue::Number),
            Property::Padding(Sided::One(edge)) => PropertyValue::Number(self.padding.get(edge)),
            Property::Margin(Sided::All) => collapse_sides(&self.margin, PropertyValue::from),
            Property::Margin(Sided::One(edge)) => self.margin.get(edge).into(),
            Property::Position(Sided::All) => collapse_sides(&self.position, PropertyValue::from),
            Property::Position(Sided::One(edge)) => self.position.get(edge).into(),
            Property::FlexDirection => self.flex_direction.keyword().into(),
            Property::FlexWrap => self.flex_wrap.keyword().into(),
            Property::FlexGrow => PropertyValue::Number(self.flex_grow),
            Property::FlexShrink => PropertyValue::Number(self.flex_shrink),
            Property::FlexBasis => self.flex_basis.into(),
            Property::Flex => self.flex_shorthand.clone().unwrap_or_else(|| {
                PropertyValue::Text(format!(
                    "{} {} {}",
                    self.flex_grow, self.flex_shrink, self.flex_basis
                ))
            }),
            Property::FlexFlow => self.flex_flow_shorthand.clone().unwrap_or_else(|| {
                PropertyValue::Text(format!(
                    "{} {}",
                    self.flex_direction.keyword(),
                    self.flex_wrap.keyword()
                ))
            }),
            Property::JustifyContent => self.justify_content.keyword().into(),
            Property::AlignItems => self.align_items.keyword().into(),
            Property::AlignSelf => self.align_self.keyword().into(),
            Property::AlignContent => self.align_content.keyword().into(),
            Property::Order => self.order.into(),
        })
    }

    /// Build a style from `(name, value)` pairs applied in iteration order.
    ///
    /// # Errors
    /// The first `ConfigError` raised by [`Self::set_property`].
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        let mut style = Self::default();
        for (name, value) in properties {
            style.set_property(name.as_ref(), value)?;
        }
        Ok(style)
    }
}

struct FlexStyleVisitor;

impl<'de> Visitor<'de> for FlexStyleVisitor {
    type Value = FlexStyle;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of style property names to numbers or strings")
    }

    fn visit_map<Access: MapAccess<'de>>(self, mut map: Access) -> Result<FlexStyle, Access::Error> {
        let mut style = FlexStyle::default();
        while let Some((name, value)) = map.next_entry::<String, PropertyValue>()? {
            style.set_property(&name, value).map_err(de::Error::custom)?;
        }
        Ok(style)
    }
}

/// Entries are applied in document order, so a later longhand overrides an earlier shorthand.
impl<'de> Deserialize<'de> for FlexStyle {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_map(FlexStyleVisitor)
    }
}
