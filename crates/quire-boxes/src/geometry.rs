//! Box geometry.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)
//!
//! Layout fills in the content size and the twelve edge values of a box;
//! everything else is derived here. All queries fail with
//! [`BoxError::IncompleteGeometry`] while a field they need is unresolved.

use quire_style::Side;

use crate::error::{BoxError, BoxResult};
use crate::layout_box::LayoutBox;

/// Margin, border or padding widths on the four sides of a box, each
/// `None` until resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    /// Top edge size.
    pub top: Option<f32>,
    /// Right edge size.
    pub right: Option<f32>,
    /// Bottom edge size.
    pub bottom: Option<f32>,
    /// Left edge size.
    pub left: Option<f32>,
}

impl Edges {
    /// All four sides resolved to zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// All four sides resolved to `value`.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }

    /// The value on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<f32> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Set the value on `side`.
    pub fn set(&mut self, side: Side, value: Option<f32>) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }
}

/// A rectangle positioned in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// Which edge list a field belongs to, for error reporting.
#[derive(Clone, Copy)]
enum EdgeKind {
    Margin,
    Border,
    Padding,
}

const fn field_name(kind: EdgeKind, side: Side) -> &'static str {
    match (kind, side) {
        (EdgeKind::Margin, Side::Top) => "margin_top",
        (EdgeKind::Margin, Side::Right) => "margin_right",
        (EdgeKind::Margin, Side::Bottom) => "margin_bottom",
        (EdgeKind::Margin, Side::Left) => "margin_left",
        (EdgeKind::Border, Side::Top) => "border_top_width",
        (EdgeKind::Border, Side::Right) => "border_right_width",
        (EdgeKind::Border, Side::Bottom) => "border_bottom_width",
        (EdgeKind::Border, Side::Left) => "border_left_width",
        (EdgeKind::Padding, Side::Top) => "padding_top",
        (EdgeKind::Padding, Side::Right) => "padding_right",
        (EdgeKind::Padding, Side::Bottom) => "padding_bottom",
        (EdgeKind::Padding, Side::Left) => "padding_left",
    }
}

impl LayoutBox {
    // [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    //
    // ┌─────────────────────────────────────────┐
    // │              margin-top                 │
    // │   ┌─────────────────────────────────┐   │
    // │   │          border-top             │   │
    // │   │   ┌─────────────────────────┐   │   │
    // │   │   │      padding-top        │   │   │
    // │   │   │   ┌─────────────────┐   │   │   │
    // │ m │ b │ p │                 │ p │ b │ m │
    // │ a │ o │ a │     CONTENT     │ a │ o │ a │
    // │ r │ r │ d │                 │ d │ r │ r │
    // │ g │ d │ d │                 │ d │ d │ g │
    // │ i │ e │ i │                 │ i │ e │ i │
    // │ n │ r │ n │                 │ n │ r │ n │
    // │   │   │ g │                 │ g │   │   │
    // │   │   │   └─────────────────┘   │   │   │
    // │   │   │      padding-bottom     │   │   │
    // │   │   └─────────────────────────┘   │   │
    // │   │          border-bottom          │   │
    // │   └─────────────────────────────────┘   │
    // │              margin-bottom              │
    // └─────────────────────────────────────────┘
    //
    // position_x/position_y is the top-left corner of the margin box, in
    // page coordinates. Sizes grow outward from the content box.

    fn resolved(&self, value: Option<f32>, field: &'static str) -> BoxResult<f32> {
        value.ok_or(BoxError::IncompleteGeometry {
            box_type: self.box_type(),
            field,
        })
    }

    fn margin_side(&self, side: Side) -> BoxResult<f32> {
        self.resolved(self.margin.get(side), field_name(EdgeKind::Margin, side))
    }

    fn border_side(&self, side: Side) -> BoxResult<f32> {
        self.resolved(self.border.get(side), field_name(EdgeKind::Border, side))
    }

    fn padding_side(&self, side: Side) -> BoxResult<f32> {
        self.resolved(self.padding.get(side), field_name(EdgeKind::Padding, side))
    }

    /// Content width.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if `width` is unresolved.
    pub fn content_width(&self) -> BoxResult<f32> {
        self.resolved(self.width, "width")
    }

    /// Content height.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if `height` is unresolved.
    pub fn content_height(&self) -> BoxResult<f32> {
        self.resolved(self.height, "height")
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// Width of the padding box: `width + padding-left + padding-right`.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any operand is unresolved.
    pub fn padding_width(&self) -> BoxResult<f32> {
        Ok(self.content_width()? + self.padding_side(Side::Left)? + self.padding_side(Side::Right)?)
    }

    /// Height of the padding box: `height + padding-top + padding-bottom`.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any operand is unresolved.
    pub fn padding_height(&self) -> BoxResult<f32> {
        Ok(self.content_height()? + self.padding_side(Side::Top)? + self.padding_side(Side::Bottom)?)
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// Width of the border box: padding width plus the left and right
    /// border widths.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any operand is unresolved.
    pub fn border_width(&self) -> BoxResult<f32> {
        Ok(self.padding_width()? + self.border_side(Side::Left)? + self.border_side(Side::Right)?)
    }

    /// Height of the border box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any operand is unresolved.
    pub fn border_height(&self) -> BoxResult<f32> {
        Ok(self.padding_height()? + self.border_side(Side::Top)? + self.border_side(Side::Bottom)?)
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// Width of the margin box, a.k.a. the outer width.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any operand is unresolved.
    pub fn margin_width(&self) -> BoxResult<f32> {
        Ok(self.border_width()? + self.margin_side(Side::Left)? + self.margin_side(Side::Right)?)
    }

    /// Height of the margin box, a.k.a. the outer height.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any operand is unresolved.
    pub fn margin_height(&self) -> BoxResult<f32> {
        Ok(self.border_height()? + self.margin_side(Side::Top)? + self.margin_side(Side::Bottom)?)
    }

    /// Sum of the left and right margins, borders and paddings. Layout
    /// subtracts it from an outer width to get a content width.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any edge value is unresolved.
    pub fn horizontal_surroundings(&self) -> BoxResult<f32> {
        self.surroundings(Side::Left, Side::Right)
    }

    /// Sum of the top and bottom margins, borders and paddings.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if any edge value is unresolved.
    pub fn vertical_surroundings(&self) -> BoxResult<f32> {
        self.surroundings(Side::Top, Side::Bottom)
    }

    fn surroundings(&self, start: Side, end: Side) -> BoxResult<f32> {
        Ok(self.margin_side(start)?
            + self.margin_side(end)?
            + self.padding_side(start)?
            + self.padding_side(end)?
            + self.border_side(start)?
            + self.border_side(end)?)
    }

    /// Absolute horizontal position of the border box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if `margin_left` is unresolved.
    pub fn border_box_x(&self) -> BoxResult<f32> {
        Ok(self.position_x + self.margin_side(Side::Left)?)
    }

    /// Absolute vertical position of the border box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if `margin_top` is unresolved.
    pub fn border_box_y(&self) -> BoxResult<f32> {
        Ok(self.position_y + self.margin_side(Side::Top)?)
    }

    /// Absolute horizontal position of the padding box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if a left edge value is unresolved.
    pub fn padding_box_x(&self) -> BoxResult<f32> {
        Ok(self.border_box_x()? + self.border_side(Side::Left)?)
    }

    /// Absolute vertical position of the padding box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if a top edge value is unresolved.
    pub fn padding_box_y(&self) -> BoxResult<f32> {
        Ok(self.border_box_y()? + self.border_side(Side::Top)?)
    }

    /// Absolute horizontal position of the content box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if a left edge value is unresolved.
    pub fn content_box_x(&self) -> BoxResult<f32> {
        Ok(self.padding_box_x()? + self.padding_side(Side::Left)?)
    }

    /// Absolute vertical position of the content box.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if a top edge value is unresolved.
    pub fn content_box_y(&self) -> BoxResult<f32> {
        Ok(self.padding_box_y()? + self.padding_side(Side::Top)?)
    }

    /// "The content box contains the actual content of the element."
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if geometry is incomplete.
    pub fn content_box(&self) -> BoxResult<Rect> {
        Ok(Rect {
            x: self.content_box_x()?,
            y: self.content_box_y()?,
            width: self.content_width()?,
            height: self.content_height()?,
        })
    }

    /// "The padding box contains both the content and padding areas."
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if geometry is incomplete.
    pub fn padding_box(&self) -> BoxResult<Rect> {
        Ok(Rect {
            x: self.padding_box_x()?,
            y: self.padding_box_y()?,
            width: self.padding_width()?,
            height: self.padding_height()?,
        })
    }

    /// "The border box contains content, padding, and border areas."
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if geometry is incomplete.
    pub fn border_box(&self) -> BoxResult<Rect> {
        Ok(Rect {
            x: self.border_box_x()?,
            y: self.border_box_y()?,
            width: self.border_width()?,
            height: self.border_height()?,
        })
    }

    /// "The margin box is the outermost box, and contains all four areas."
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if geometry is incomplete.
    pub fn margin_box(&self) -> BoxResult<Rect> {
        Ok(Rect {
            x: self.position_x,
            y: self.position_y,
            width: self.margin_width()?,
            height: self.margin_height()?,
        })
    }

    /// Set margin, padding and border width of `side` to zero and null
    /// the matching style entries.
    ///
    /// Used when a box is split across a page break: the piece on the
    /// earlier page loses its bottom spacing and the rest loses its top.
    pub fn reset_spacing(&mut self, side: Side) {
        self.margin.set(side, Some(0.0));
        self.padding.set(side, Some(0.0));
        self.border.set(side, Some(0.0));
        self.style.clear_spacing(side);
    }
}
