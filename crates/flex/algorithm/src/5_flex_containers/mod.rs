//! Flex Containers: container and item keyword properties.
//! See <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
//!
//! Each enum carries its fixed keyword table. The first entry of every table is the
//! initial value, so `Default` and `KEYWORDS[0]` always agree.

/// Generates the keyword table plus `from_keyword`/`keyword` for a keyword enum.
/// The first variant is the initial value.
#[macro_export]
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$variant_meta:meta])* $variant:ident => $keyword:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub enum $name {
            #[default]
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Allowed keywords, initial value first.
            pub const KEYWORDS: &'static [&'static str] = &[$($keyword),+];

            /// Look up a keyword; `None` when it is not in the allowed set.
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $($keyword => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The keyword spelling of this value.
            pub const fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }
        }
    };
}

keyword_enum! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
    FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_enum! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
    FlexWrap {
        Nowrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
    JustifyContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

keyword_enum! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
    AlignItems {
        Stretch => "stretch",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        /// Accepted but laid out as `FlexStart`; baseline metrics are not tracked.
        Baseline => "baseline",
    }
}

keyword_enum! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
    AlignSelf {
        Auto => "auto",
        Stretch => "stretch",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
    }
}

keyword_enum! {
    /// See <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
    AlignContent {
        Stretch => "stretch",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

impl FlexWrap {
    /// True for `wrap` and `wrap-reverse`.
    pub const fn is_wrapping(self) -> bool {
        !matches!(self, Self::Nowrap)
    }
}

impl AlignSelf {
    /// Resolve `auto` against the container's `align-items`.
    pub const fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            Self::Auto => parent,
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a keyword enum default does not match the first table entry.
    fn defaults_are_first_keyword() {
        assert_eq!(FlexDirection::default().keyword(), FlexDirection::KEYWORDS[0]);
        assert_eq!(FlexWrap::default(), FlexWrap::Nowrap);
        assert_eq!(JustifyContent::default(), JustifyContent::FlexStart);
        assert_eq!(AlignItems::default(), AlignItems::Stretch);
        assert_eq!(AlignSelf::default(), AlignSelf::Auto);
        assert_eq!(AlignContent::default(), AlignContent::Stretch);
    }

    #[test]
    /// # Panics
    /// Panics if every keyword does not map back to itself.
    fn keywords_round_trip_through_the_table() {
        for keyword in FlexDirection::KEYWORDS {
            let parsed = FlexDirection::from_keyword(keyword);
            assert_eq!(parsed.map(FlexDirection::keyword), Some(*keyword));
        }
        for keyword in AlignContent::KEYWORDS {
            let parsed = AlignContent::from_keyword(keyword);
            assert_eq!(parsed.map(AlignContent::keyword), Some(*keyword));
        }
    }

    #[test]
    /// # Panics
    /// Panics if values outside the table are accepted.
    fn rejects_unknown_keywords() {
        assert_eq!(FlexDirection::from_keyword("diagonal"), None);
        assert_eq!(FlexWrap::from_keyword("Wrap"), None);
        assert_eq!(JustifyContent::from_keyword("space-evenly"), None);
        assert_eq!(AlignItems::from_keyword(""), None);
    }

    #[test]
    /// # Panics
    /// Panics if `align-self: auto` does not defer to the container.
    fn align_self_auto_defers_to_align_items() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(AlignSelf::FlexEnd.resolve(AlignItems::Center), AlignItems::FlexEnd);
    }
}
