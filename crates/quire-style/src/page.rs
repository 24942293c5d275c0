//! Page pseudo-element selection.
//!
//! [CSS Paged Media Module Level 3](https://www.w3.org/TR/css-page-3/)

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::keywords::Direction;
use crate::values::LengthValue;

/// [§ 4.2 Page selectors](https://www.w3.org/TR/css-page-3/#page-selectors)
///
/// The `@page` style a page box is computed from. Spelled the way the style
/// table keys them (`first_right`, `left`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// First page, on the left side of a spread.
    FirstLeft,
    /// First page, on the right side of a spread.
    FirstRight,
    /// Any later left page.
    Left,
    /// Any later right page.
    Right,
}

/// [§ 4.2.1 Spread-placement pseudo-classes](https://www.w3.org/TR/css-page-3/#spread-pseudos)
///
/// "Whether the first page of a document is :left or :right depends on the
/// major writing direction of the root element."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PageProgression {
    /// The first page is a right page.
    #[default]
    LeftToRight,
    /// The first page is a left page.
    RightToLeft,
}

impl PageProgression {
    /// Progression implied by the root element's `direction`.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Ltr => Self::LeftToRight,
            Direction::Rtl => Self::RightToLeft,
        }
    }

    /// Whether page 1 sits on the right side of a spread.
    #[must_use]
    pub const fn first_is_right(self) -> bool {
        matches!(self, Self::LeftToRight)
    }
}

impl PageType {
    /// Page type for the 1-based `page_number`.
    ///
    /// Right pages are the odd pages when the first page is a right page,
    /// and the even pages otherwise.
    #[must_use]
    pub const fn for_page(page_number: u32, progression: PageProgression) -> Self {
        let first_is_right = progression.first_is_right();
        let is_right = (page_number % 2 == 1) == first_is_right;
        match (page_number == 1, is_right) {
            (true, true) => Self::FirstRight,
            (true, false) => Self::FirstLeft,
            (false, true) => Self::Right,
            (false, false) => Self::Left,
        }
    }
}

/// [§ 7.1.1 Page size keywords](https://www.w3.org/TR/css-page-3/#page-size)
///
/// `(width, height)` of a named paper size in portrait orientation.
#[must_use]
pub fn named_page_size(name: &str) -> Option<(LengthValue, LengthValue)> {
    use LengthValue::{In, Mm};
    let size = match name.to_ascii_lowercase().as_str() {
        "a5" => (Mm(148.0), Mm(210.0)),
        "a4" => (Mm(210.0), Mm(297.0)),
        "a3" => (Mm(297.0), Mm(420.0)),
        "b5" => (Mm(176.0), Mm(250.0)),
        "b4" => (Mm(250.0), Mm(353.0)),
        "letter" => (In(8.5), In(11.0)),
        "legal" => (In(8.5), In(14.0)),
        "ledger" => (In(11.0), In(17.0)),
        _ => return None,
    };
    Some(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_types_left_to_right() {
        let ltr = PageProgression::LeftToRight;
        assert_eq!(PageType::for_page(1, ltr), PageType::FirstRight);
        assert_eq!(PageType::for_page(2, ltr), PageType::Left);
        assert_eq!(PageType::for_page(3, ltr), PageType::Right);
    }

    #[test]
    fn test_page_types_right_to_left() {
        let rtl = PageProgression::RightToLeft;
        assert_eq!(PageType::for_page(1, rtl), PageType::FirstLeft);
        assert_eq!(PageType::for_page(2, rtl), PageType::Right);
        assert_eq!(PageType::for_page(3, rtl), PageType::Left);
    }

    #[test]
    fn test_page_type_style_key_spelling() {
        assert_eq!(PageType::FirstRight.to_string(), "first_right");
        assert_eq!("left".parse::<PageType>().ok(), Some(PageType::Left));
    }

    #[test]
    fn test_named_page_size() {
        let (w, h) = named_page_size("A4").unwrap();
        assert!((w.to_px(0.0, 16.0) - 793.700_8).abs() < 1e-2);
        assert!((h.to_px(0.0, 16.0) - 1_122.519_7).abs() < 1e-2);
        assert!(named_page_size("tabloid").is_none());
    }
}
