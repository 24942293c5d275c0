//! CSS Length values
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f32),
    /// "1pt = 1/72th of 1in"
    Pt(f32),
    /// "1mm = 1/10th of 1cm"
    Mm(f32),
    /// "1in = 2.54cm = 96px"
    In(f32),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f32),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    Percent(f32),
}

impl LengthValue {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolve to pixels. Percentages resolve against `reference`, `em`
    /// against `font_size`.
    ///
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    /// NOTE: Margin and padding percentages refer to the containing block's
    /// **width**, even for top/bottom; passing the right reference is the
    /// caller's job.
    #[must_use]
    pub fn to_px(&self, reference: f32, font_size: f32) -> f32 {
        match *self {
            Self::Px(px) => px,
            Self::Pt(pt) => pt * 96.0 / 72.0,
            Self::Mm(mm) => mm * 96.0 / 25.4,
            Self::In(inches) => inches * 96.0,
            Self::Em(em) => em * font_size,
            Self::Percent(pct) => pct * reference / 100.0,
        }
    }

    /// Whether resolving this length needs a reference dimension.
    #[must_use]
    pub const fn is_percentage(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// A value that is either 'auto' or a specific length, as taken by margins,
/// `width` and `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutoLength {
    /// "The keyword 'auto'... allows the user agent to compute the value
    /// based on other properties."
    Auto,
    /// A specific length value.
    Length(LengthValue),
}

impl AutoLength {
    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// The length, or `None` when 'auto'.
    #[must_use]
    pub const fn length(&self) -> Option<LengthValue> {
        match self {
            Self::Auto => None,
            Self::Length(len) => Some(*len),
        }
    }
}
