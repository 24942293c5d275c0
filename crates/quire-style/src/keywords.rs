//! Keyword-valued properties that decide how boxes are generated and
//! positioned.
//!
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)

use std::str::FromStr;

use quire_common::warning::warn_once;
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Parse a keyword for `property`, falling back to the type's initial value
/// (with a warning) when the keyword is not recognized.
#[must_use]
pub fn parse_keyword<T>(property: &str, keyword: &str) -> T
where
    T: FromStr + Default,
{
    keyword.trim().parse().unwrap_or_else(|_| {
        warn_once(
            "Style",
            &format!("unsupported {property} value '{keyword}', using initial value"),
        );
        T::default()
    })
}

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The CSS 2.1 display keywords. Which box kind an element generates is a
/// function of this value and of whether the element is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayValue {
    /// "The element generates an inline-level box."
    #[default]
    Inline,
    /// "The element generates a block-level box."
    Block,
    /// A block box plus a marker box.
    ListItem,
    /// "an inline-level block container"
    InlineBlock,
    /// Block-level table wrapper.
    Table,
    /// Inline-level table wrapper.
    InlineTable,
    /// Table-internal row group.
    TableRowGroup,
    /// Table-internal header group.
    TableHeaderGroup,
    /// Table-internal footer group.
    TableFooterGroup,
    /// Table-internal row.
    TableRow,
    /// Table-internal column group.
    TableColumnGroup,
    /// Table-internal column.
    TableColumn,
    /// Table cell, a block container.
    TableCell,
    /// Table caption, a block container.
    TableCaption,
    /// "The element and its descendants generate no boxes."
    None,
}

impl DisplayValue {
    /// [§ 2.1 Outer Display Roles](https://www.w3.org/TR/css-display-3/#outer-role)
    ///
    /// Whether the principal box participates in an inline formatting
    /// context.
    #[must_use]
    pub const fn is_inline_level(self) -> bool {
        matches!(self, Self::Inline | Self::InlineBlock | Self::InlineTable)
    }
}

/// [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but in addition, the box is fixed with respect to some reference."
    Fixed,
}

impl Position {
    /// "An element is said to be positioned if its 'position' property has
    /// a value other than 'static'."
    #[must_use]
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }

    /// Absolute and fixed boxes are taken out of the normal flow.
    #[must_use]
    pub const fn is_absolute_scheme(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Float {
    /// "The box is not floated."
    #[default]
    None,
    /// "The element generates a block box that is floated to the left."
    Left,
    /// "Similar to 'left', except the box is floated to the right."
    Right,
}

/// [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// "content is not clipped"
    #[default]
    Visible,
    /// "the content is clipped and that no scrolling user interface should
    /// be provided"
    Hidden,
    /// "the content is clipped and ... a scrolling mechanism is provided"
    Scroll,
    /// "should cause a scrolling mechanism to be provided for overflowing
    /// boxes"
    Auto,
}

/// [§ 9.10 Text direction](https://www.w3.org/TR/CSS2/visuren.html#direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// "Left-to-right direction."
    #[default]
    Ltr,
    /// "Right-to-left direction."
    Rtl,
}

/// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// "The generated box is visible."
    #[default]
    Visible,
    /// "The generated box is invisible (fully transparent), but still
    /// affects layout."
    Hidden,
    /// Same as hidden outside of tables.
    Collapse,
}
