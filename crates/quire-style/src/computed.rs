//! CSS Computed Style
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."
//!
//! The cascade itself happens outside this workspace. Boxes receive a
//! [`ComputedStyle`] per element and own a private copy of it.

use serde::Serialize;

use crate::keywords::{Direction, DisplayValue, Float, Overflow, Position, Visibility};
use crate::side::Side;
use crate::values::{AutoLength, ColorValue, LengthValue};

/// Computed styles for an element or a page.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// All values are `Option`: `None` means the initial value. Entries can be
/// nulled again after the fact, which is how a box drops spacing on a side
/// it no longer has (see [`ComputedStyle::clear_spacing`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComputedStyle {
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayValue>,
    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// [§ 9.5.1 'float'](https://www.w3.org/TR/CSS2/visuren.html#float-position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float: Option<Float>,
    /// [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,

    /// [§ 9.10 'direction'](https://www.w3.org/TR/CSS2/visuren.html#direction)
    ///
    /// Inherited: yes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// [§ 11.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#visibility)
    ///
    /// Inherited: yes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    ///
    /// Inherited: yes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
    /// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<LengthValue>,
    /// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// [§ 16.2 'text-align'](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// [§ 16.1 'text-indent'](https://www.w3.org/TR/CSS2/text.html#indentation-prop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_indent: Option<LengthValue>,
    /// [§ 16.6 'white-space'](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_space: Option<String>,
    /// [§ 12.5.1 'list-style-type'](https://www.w3.org/TR/CSS2/generate.html#list-style)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style_type: Option<String>,
    /// [§ 12.5.1 'list-style-image'](https://www.w3.org/TR/CSS2/generate.html#list-style)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style_image: Option<String>,
    /// [§ 12.5.1 'list-style-position'](https://www.w3.org/TR/CSS2/generate.html#list-style)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style_position: Option<String>,

    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorValue>,

    /// [§ 6.1 'margin-top'](https://www.w3.org/TR/css-box-4/#margin-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<AutoLength>,
    /// [§ 6.1 'margin-right'](https://www.w3.org/TR/css-box-4/#margin-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<AutoLength>,
    /// [§ 6.1 'margin-bottom'](https://www.w3.org/TR/css-box-4/#margin-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<AutoLength>,
    /// [§ 6.1 'margin-left'](https://www.w3.org/TR/css-box-4/#margin-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<AutoLength>,

    /// [§ 6.2 'padding-top'](https://www.w3.org/TR/css-box-4/#padding-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<LengthValue>,
    /// [§ 6.2 'padding-right'](https://www.w3.org/TR/css-box-4/#padding-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<LengthValue>,
    /// [§ 6.2 'padding-bottom'](https://www.w3.org/TR/css-box-4/#padding-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<LengthValue>,
    /// [§ 6.2 'padding-left'](https://www.w3.org/TR/css-box-4/#padding-physical)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<LengthValue>,

    /// [§ 4.3 'border-top-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<LengthValue>,
    /// [§ 4.3 'border-right-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right_width: Option<LengthValue>,
    /// [§ 4.3 'border-bottom-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<LengthValue>,
    /// [§ 4.3 'border-left-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<LengthValue>,

    /// [§ 10.2 'width'](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<AutoLength>,
    /// [§ 10.5 'height'](https://www.w3.org/TR/CSS2/visudet.html#the-height-property)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<AutoLength>,
    /// [§ 10.4 'min-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<LengthValue>,
    /// [§ 10.4 'max-width'](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// `None` is 'none'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<LengthValue>,
    /// [§ 10.7 'min-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<LengthValue>,
    /// [§ 10.7 'max-height'](https://www.w3.org/TR/CSS2/visudet.html#min-max-heights)
    ///
    /// `None` is 'none'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<LengthValue>,

    /// [§ 7.1 'size'](https://www.w3.org/TR/css-page-3/#page-size-prop)
    ///
    /// Only meaningful on `@page` styles: the page's outer `(width, height)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<(LengthValue, LengthValue)>,
}

impl ComputedStyle {
    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "The properties of anonymous boxes are inherited from the enclosing
    /// non-anonymous box... Non-inherited properties have their initial
    /// value."
    ///
    /// Builds the style of an anonymous box from the computed style of the
    /// nearest element: inherited properties are copied, everything else is
    /// left at its initial value.
    #[must_use]
    pub fn inherit_from(parent: &Self) -> Self {
        Self {
            direction: parent.direction,
            visibility: parent.visibility,
            color: parent.color,
            font_family: parent.font_family.clone(),
            font_size: parent.font_size,
            font_weight: parent.font_weight,
            line_height: parent.line_height,
            text_align: parent.text_align.clone(),
            text_indent: parent.text_indent,
            white_space: parent.white_space.clone(),
            list_style_type: parent.list_style_type.clone(),
            list_style_image: parent.list_style_image.clone(),
            list_style_position: parent.list_style_position.clone(),
            ..Self::default()
        }
    }

    /// Used `display`, initial `inline`.
    #[must_use]
    pub fn display(&self) -> DisplayValue {
        self.display.unwrap_or_default()
    }

    /// Used `position`, initial `static`.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    /// Used `float`, initial `none`.
    #[must_use]
    pub fn float(&self) -> Float {
        self.float.unwrap_or_default()
    }

    /// Used `overflow`, initial `visible`.
    #[must_use]
    pub fn overflow(&self) -> Overflow {
        self.overflow.unwrap_or_default()
    }

    /// Used `direction`, initial `ltr`.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction.unwrap_or_default()
    }

    /// The `margin-<side>` entry.
    #[must_use]
    pub const fn margin(&self, side: Side) -> Option<AutoLength> {
        match side {
            Side::Top => self.margin_top,
            Side::Right => self.margin_right,
            Side::Bottom => self.margin_bottom,
            Side::Left => self.margin_left,
        }
    }

    /// The `padding-<side>` entry.
    #[must_use]
    pub const fn padding(&self, side: Side) -> Option<LengthValue> {
        match side {
            Side::Top => self.padding_top,
            Side::Right => self.padding_right,
            Side::Bottom => self.padding_bottom,
            Side::Left => self.padding_left,
        }
    }

    /// The `border-<side>-width` entry.
    #[must_use]
    pub const fn border_width(&self, side: Side) -> Option<LengthValue> {
        match side {
            Side::Top => self.border_top_width,
            Side::Right => self.border_right_width,
            Side::Bottom => self.border_bottom_width,
            Side::Left => self.border_left_width,
        }
    }

    /// Null out `margin-<side>`, `padding-<side>` and `border-<side>-width`.
    pub fn clear_spacing(&mut self, side: Side) {
        match side {
            Side::Top => {
                self.margin_top = None;
                self.padding_top = None;
                self.border_top_width = None;
            }
            Side::Right => {
                self.margin_right = None;
                self.padding_right = None;
                self.border_right_width = None;
            }
            Side::Bottom => {
                self.margin_bottom = None;
                self.padding_bottom = None;
                self.border_bottom_width = None;
            }
            Side::Left => {
                self.margin_left = None;
                self.padding_left = None;
                self.border_left_width = None;
            }
        }
    }
}
