//! Box kinds and their capabilities.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
//!
//! Every box kind is a combination of an "outside" behavior (how the box
//! takes part in its parent's formatting context) and an "inside" behavior
//! (how it lays out what it contains), plus the atomic and anonymous flags.
//! The combinations are closed: [`BoxType`] lists every legal one and the
//! capability queries are plain matches on it.

use quire_style::DisplayValue;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// [§ 2.1 Outer Display Roles](https://www.w3.org/TR/css-display-3/#outer-role)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outside {
    /// "A block-level box is a box that participates in a block formatting
    /// context."
    BlockLevel,
    /// "An inline-level box is a box that participates in an inline
    /// formatting context."
    InlineLevel,
}

/// [§ 2.2 Inner Display Layout Models](https://www.w3.org/TR/css-display-3/#inner-model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inside {
    /// "A block container box either contains only block-level boxes or
    /// establishes an inline formatting context and thus contains only
    /// inline-level boxes."
    BlockContainer,
    /// Content that takes part in the enclosing inline formatting context:
    /// inline boxes, text, and the inline-level children of a line.
    InlineContent,
    /// "An element whose content is outside the scope of the CSS formatting
    /// model."
    Replaced,
}

/// The concrete kind of a box.
///
/// | Kind                     | Outside | Inside          | Atomic | Anonymous |
/// |--------------------------|---------|-----------------|--------|-----------|
/// | `PageBox`                | -       | block container | no     | no        |
/// | `BlockBox`               | block   | block container | no     | no        |
/// | `AnonymousBlockBox`      | block   | block container | no     | yes       |
/// | `LineBox`                | -       | inline content  | no     | yes       |
/// | `InlineBox`              | inline  | inline content  | no     | no        |
/// | `TextBox`                | inline  | inline content  | no     | yes       |
/// | `InlineBlockBox`         | inline  | block container | yes    | no        |
/// | `BlockLevelReplacedBox`  | block   | replaced        | no     | no        |
/// | `InlineLevelReplacedBox` | inline  | replaced        | yes    | no        |
/// | `ImageMarkerBox`         | inline  | replaced        | yes    | yes       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
pub enum BoxType {
    /// A page. The root of a box tree; its containing block is the page
    /// itself.
    #[strum(to_string = "PageBox")]
    Page,
    /// [§ 9.2.1](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    /// "Block-level boxes that are also block containers are called block
    /// boxes."
    #[strum(to_string = "BlockBox")]
    Block,
    /// [§ 9.2.1.1](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    /// Wraps inline-level boxes where only block-level boxes are allowed.
    #[strum(to_string = "AnonymousBlockBox")]
    AnonymousBlock,
    /// [§ 9.4.2](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
    /// "The rectangular area that contains the boxes that form a line is
    /// called a line box."
    #[strum(to_string = "LineBox")]
    Line,
    /// [§ 9.2.2](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    /// "An inline box is one that is both inline-level and whose contents
    /// participate in its containing inline formatting context."
    #[strum(to_string = "InlineBox")]
    Inline,
    /// Literal text. What CSS calls anonymous inline boxes are text boxes,
    /// but every run of text ends up in one.
    #[strum(to_string = "TextBox")]
    Text,
    /// "An inline-level block container."
    #[strum(to_string = "InlineBlockBox")]
    InlineBlock,
    /// A replaced element with a block-level display.
    #[strum(to_string = "BlockLevelReplacedBox")]
    BlockLevelReplaced,
    /// A replaced element with an inline-level display.
    #[strum(to_string = "InlineLevelReplacedBox")]
    InlineLevelReplaced,
    /// [§ 12.5.1 'list-style-image'](https://www.w3.org/TR/CSS2/generate.html#list-style)
    /// The image marker of a list item.
    #[strum(to_string = "ImageMarkerBox")]
    ImageMarker,
}

impl BoxType {
    /// Pick the kind of the principal box of an element.
    ///
    /// [§ 9.2.4 The 'display' property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
    ///
    /// Returns `None` for `display: none`. Table-internal and table wrapper
    /// displays generate block boxes; table layout is not modelled here.
    #[must_use]
    pub const fn for_element(display: DisplayValue, replaced: bool) -> Option<Self> {
        let kind = match (display, replaced) {
            (DisplayValue::None, _) => return None,
            (_, true) if display.is_inline_level() => Self::InlineLevelReplaced,
            (_, true) => Self::BlockLevelReplaced,
            (DisplayValue::Inline, false) => Self::Inline,
            (DisplayValue::InlineBlock | DisplayValue::InlineTable, false) => Self::InlineBlock,
            (_, false) => Self::Block,
        };
        Some(kind)
    }

    /// The outside behavior. Page and line boxes have none: they never sit
    /// in a formatting context of their parent.
    #[must_use]
    pub const fn outside(self) -> Option<Outside> {
        match self {
            Self::Page | Self::Line => None,
            Self::Block | Self::AnonymousBlock | Self::BlockLevelReplaced => {
                Some(Outside::BlockLevel)
            }
            Self::Inline
            | Self::Text
            | Self::InlineBlock
            | Self::InlineLevelReplaced
            | Self::ImageMarker => Some(Outside::InlineLevel),
        }
    }

    /// The inside behavior.
    #[must_use]
    pub const fn inside(self) -> Inside {
        match self {
            Self::Page | Self::Block | Self::AnonymousBlock | Self::InlineBlock => {
                Inside::BlockContainer
            }
            Self::Line | Self::Inline | Self::Text => Inside::InlineContent,
            Self::BlockLevelReplaced | Self::InlineLevelReplaced | Self::ImageMarker => {
                Inside::Replaced
            }
        }
    }

    /// Whether boxes of this kind hold child boxes.
    #[must_use]
    pub const fn is_parent(self) -> bool {
        !matches!(
            self,
            Self::Text | Self::BlockLevelReplaced | Self::InlineLevelReplaced | Self::ImageMarker
        )
    }

    /// Whether this kind takes part in a block formatting context.
    #[must_use]
    pub const fn is_block_level(self) -> bool {
        matches!(self.outside(), Some(Outside::BlockLevel))
    }

    /// Whether this kind takes part in an inline formatting context.
    #[must_use]
    pub const fn is_inline_level(self) -> bool {
        matches!(self.outside(), Some(Outside::InlineLevel))
    }

    /// Whether this kind contains only block-level boxes or only line boxes.
    #[must_use]
    pub const fn is_block_container(self) -> bool {
        matches!(self.inside(), Inside::BlockContainer)
    }

    /// Whether the content is replaced.
    #[must_use]
    pub const fn is_replaced(self) -> bool {
        matches!(self.inside(), Inside::Replaced)
    }

    /// [§ 9.2.2](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    ///
    /// "Inline-level boxes that are not inline boxes (such as replaced
    /// inline-level elements, inline-block elements, and inline-table
    /// elements) are called atomic inline-level boxes because they
    /// participate in their inline formatting context as a single opaque
    /// box." Atomic boxes are never split across lines.
    #[must_use]
    pub const fn is_atomic(self) -> bool {
        matches!(
            self,
            Self::InlineBlock | Self::InlineLevelReplaced | Self::ImageMarker
        )
    }

    /// Whether this kind is generated without a source element of its own.
    /// Anonymous boxes inherit their style and carry no spacing.
    #[must_use]
    pub const fn is_anonymous(self) -> bool {
        matches!(
            self,
            Self::AnonymousBlock | Self::Line | Self::Text | Self::ImageMarker
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_has_one_combination() {
        for kind in BoxType::iter() {
            // Replaced content never has children and vice versa for
            // block containers.
            if kind.is_replaced() {
                assert!(!kind.is_parent(), "{kind}");
            }
            if kind.is_block_container() {
                assert!(kind.is_parent(), "{kind}");
            }
            // Atomic implies inline-level.
            if kind.is_atomic() {
                assert!(kind.is_inline_level(), "{kind}");
            }
            assert!(!(kind.is_block_level() && kind.is_inline_level()), "{kind}");
        }
    }

    #[test]
    fn test_capability_table() {
        assert_eq!(BoxType::Page.outside(), None);
        assert_eq!(BoxType::Line.outside(), None);
        assert!(BoxType::AnonymousBlock.is_block_level());
        assert!(BoxType::AnonymousBlock.is_anonymous());
        assert!(!BoxType::AnonymousBlock.is_atomic());
        assert!(BoxType::InlineBlock.is_atomic());
        assert!(BoxType::InlineBlock.is_block_container());
        assert!(BoxType::ImageMarker.is_anonymous());
        assert!(BoxType::ImageMarker.is_replaced());
        assert!(!BoxType::BlockLevelReplaced.is_atomic());
        assert!(!BoxType::Text.is_parent());
        assert!(BoxType::Line.is_parent());
    }

    #[test]
    fn test_kind_selection_is_total() {
        assert_eq!(BoxType::for_element(DisplayValue::Block, false), Some(BoxType::Block));
        assert_eq!(BoxType::for_element(DisplayValue::ListItem, false), Some(BoxType::Block));
        assert_eq!(BoxType::for_element(DisplayValue::TableCell, false), Some(BoxType::Block));
        assert_eq!(BoxType::for_element(DisplayValue::Inline, false), Some(BoxType::Inline));
        assert_eq!(
            BoxType::for_element(DisplayValue::InlineBlock, false),
            Some(BoxType::InlineBlock)
        );
        assert_eq!(
            BoxType::for_element(DisplayValue::Inline, true),
            Some(BoxType::InlineLevelReplaced)
        );
        assert_eq!(
            BoxType::for_element(DisplayValue::Block, true),
            Some(BoxType::BlockLevelReplaced)
        );
        assert_eq!(BoxType::for_element(DisplayValue::None, true), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(BoxType::InlineLevelReplaced.to_string(), "InlineLevelReplacedBox");
        let name: &'static str = BoxType::Page.into();
        assert_eq!(name, "PageBox");
    }
}
