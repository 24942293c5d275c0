//! Boxes of the formatting structure.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
//!
//! A [`LayoutBox`] is one flat struct: the fields every box has (identity,
//! style, geometry) plus a [`BoxContent`] payload whose variant is the box's
//! kind. Kinds never change after construction.

use std::fmt;
use std::rc::Rc;

use quire_common::warning::warn_once;
use quire_dom::NodeId;
use quire_style::{ComputedStyle, Document, Float, Overflow};

use crate::geometry::Edges;
use crate::kind::BoxType;
use crate::tree::BoxId;

/// Content of a replaced element, already fetched and decoded elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    /// Where the content came from.
    pub url: String,
    /// Intrinsic width in CSS pixels.
    pub intrinsic_width: f32,
    /// Intrinsic height in CSS pixels.
    pub intrinsic_height: f32,
}

impl Replacement {
    /// [§ 10.3.2](https://www.w3.org/TR/CSS2/visudet.html#inline-replaced-width)
    /// Width divided by height, if the height is not zero.
    #[must_use]
    pub fn intrinsic_ratio(&self) -> Option<f32> {
        (self.intrinsic_height != 0.0).then(|| self.intrinsic_width / self.intrinsic_height)
    }
}

/// Page-specific data.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    /// 1-based page number.
    pub page_number: u32,
    /// Outer page width, set by pagination from the `size` property.
    pub outer_width: Option<f32>,
    /// Outer page height, set by pagination from the `size` property.
    pub outer_height: Option<f32>,
    /// The page's child boxes; normally just the root element's box.
    pub children: Vec<BoxId>,
}

/// Children of a block box, plus its list marker when placed outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockData {
    /// Child boxes, in document order.
    pub children: Vec<BoxId>,
    /// Marker box of a list item with `list-style-position: outside`.
    pub outside_list_marker: Option<BoxId>,
}

/// Kind-specific payload. The variant is the box's [`BoxType`].
#[derive(Debug, Clone, PartialEq)]
pub enum BoxContent {
    /// See [`BoxType::Page`].
    Page(PageData),
    /// See [`BoxType::Block`].
    Block(BlockData),
    /// See [`BoxType::AnonymousBlock`].
    AnonymousBlock(BlockData),
    /// See [`BoxType::Line`].
    Line(Vec<BoxId>),
    /// See [`BoxType::Inline`].
    Inline(Vec<BoxId>),
    /// See [`BoxType::Text`].
    Text(String),
    /// See [`BoxType::InlineBlock`].
    InlineBlock(Vec<BoxId>),
    /// See [`BoxType::BlockLevelReplaced`].
    BlockLevelReplaced(Replacement),
    /// See [`BoxType::InlineLevelReplaced`].
    InlineLevelReplaced(Replacement),
    /// See [`BoxType::ImageMarker`].
    ImageMarker(Replacement),
}

impl BoxContent {
    /// Empty payload for a parent kind, `None` for kinds that need a text or
    /// replacement payload.
    #[must_use]
    pub const fn empty_parent(box_type: BoxType) -> Option<Self> {
        let content = match box_type {
            BoxType::Block => Self::Block(BlockData {
                children: Vec::new(),
                outside_list_marker: None,
            }),
            BoxType::AnonymousBlock => Self::AnonymousBlock(BlockData {
                children: Vec::new(),
                outside_list_marker: None,
            }),
            BoxType::Line => Self::Line(Vec::new()),
            BoxType::Inline => Self::Inline(Vec::new()),
            BoxType::InlineBlock => Self::InlineBlock(Vec::new()),
            BoxType::Page
            | BoxType::Text
            | BoxType::BlockLevelReplaced
            | BoxType::InlineLevelReplaced
            | BoxType::ImageMarker => return None,
        };
        Some(content)
    }

    /// The kind this payload belongs to.
    #[must_use]
    pub const fn box_type(&self) -> BoxType {
        match self {
            Self::Page(_) => BoxType::Page,
            Self::Block(_) => BoxType::Block,
            Self::AnonymousBlock(_) => BoxType::AnonymousBlock,
            Self::Line(_) => BoxType::Line,
            Self::Inline(_) => BoxType::Inline,
            Self::Text(_) => BoxType::Text,
            Self::InlineBlock(_) => BoxType::InlineBlock,
            Self::BlockLevelReplaced(_) => BoxType::BlockLevelReplaced,
            Self::InlineLevelReplaced(_) => BoxType::InlineLevelReplaced,
            Self::ImageMarker(_) => BoxType::ImageMarker,
        }
    }

    /// The children, for parent kinds.
    #[must_use]
    pub fn children(&self) -> Option<&[BoxId]> {
        match self {
            Self::Page(page) => Some(&page.children),
            Self::Block(block) | Self::AnonymousBlock(block) => Some(&block.children),
            Self::Line(children) | Self::Inline(children) | Self::InlineBlock(children) => {
                Some(children)
            }
            Self::Text(_)
            | Self::BlockLevelReplaced(_)
            | Self::InlineLevelReplaced(_)
            | Self::ImageMarker(_) => None,
        }
    }

    /// Mutable children, for parent kinds.
    pub fn children_mut(&mut self) -> Option<&mut Vec<BoxId>> {
        match self {
            Self::Page(page) => Some(&mut page.children),
            Self::Block(block) | Self::AnonymousBlock(block) => Some(&mut block.children),
            Self::Line(children) | Self::Inline(children) | Self::InlineBlock(children) => {
                Some(children)
            }
            Self::Text(_)
            | Self::BlockLevelReplaced(_)
            | Self::InlineLevelReplaced(_)
            | Self::ImageMarker(_) => None,
        }
    }
}

/// A box in the formatting structure.
///
/// Geometry fields start unresolved (`None`) except for the edges of
/// anonymous boxes, which are zero from the start. Layout fills them in.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    /// The document this box was generated from. Shared, read-only.
    pub document: Rc<Document>,
    /// Generating element. For anonymous boxes, the element they inherit
    /// from; `None` for page boxes.
    pub element: Option<NodeId>,
    /// Parent box. `None` for the root and for boxes not attached yet.
    pub parent: Option<BoxId>,
    /// This box's own copy of its computed style.
    pub style: ComputedStyle,

    /// Content width.
    pub width: Option<f32>,
    /// Content height.
    pub height: Option<f32>,
    /// Page-absolute x of the margin box's top-left corner.
    pub position_x: f32,
    /// Page-absolute y of the margin box's top-left corner.
    pub position_y: f32,
    /// Margin widths.
    pub margin: Edges,
    /// Border widths.
    pub border: Edges,
    /// Padding widths.
    pub padding: Edges,

    /// Used `min-width`.
    pub min_width: Option<f32>,
    /// Used `max-width`.
    pub max_width: Option<f32>,
    /// Used `min-height`.
    pub min_height: Option<f32>,
    /// Used `max-height`.
    pub max_height: Option<f32>,
    /// Used `text-indent`.
    pub text_indent: Option<f32>,
    /// Distance from the top of the margin box to the baseline, for lines
    /// and inline-level boxes.
    pub baseline: Option<f32>,
    /// Set by the painter once the background has been drawn.
    pub background_drawn: bool,

    /// Kind-specific payload.
    pub content: BoxContent,
}

impl LayoutBox {
    fn with_style(
        document: &Rc<Document>,
        element: Option<NodeId>,
        style: ComputedStyle,
        content: BoxContent,
    ) -> Self {
        Self {
            document: Rc::clone(document),
            element,
            parent: None,
            style,
            width: None,
            height: None,
            position_x: 0.0,
            position_y: 0.0,
            margin: Edges::default(),
            border: Edges::default(),
            padding: Edges::default(),
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            text_indent: None,
            baseline: None,
            background_drawn: false,
            content,
        }
    }

    /// A box generated by `element`, styled with a copy of its computed
    /// style.
    fn principal(document: &Rc<Document>, element: NodeId, content: BoxContent) -> Self {
        let style = document.style_for(element);
        Self::with_style(document, Some(element), style, content)
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "The properties of anonymous boxes are inherited from the enclosing
    /// non-anonymous box."
    ///
    /// `element` may be a text node; style comes from its nearest element.
    /// Margins, borders and paddings are not inherited, so their initial
    /// value, zero, is also their used value.
    fn anonymous(document: &Rc<Document>, element: NodeId, content: BoxContent) -> Self {
        let parent_style = match document.dom.nearest_element(element) {
            Some(source) => document.style_for(source),
            None => {
                warn_once(
                    "Style",
                    &format!("no element encloses node {element}, using initial values"),
                );
                ComputedStyle::default()
            }
        };
        let style = ComputedStyle::inherit_from(&parent_style);
        let mut anonymous = Self::with_style(document, Some(element), style, content);
        anonymous.margin = Edges::ZERO;
        anonymous.border = Edges::ZERO;
        anonymous.padding = Edges::ZERO;
        anonymous
    }

    /// Page box for the 1-based `page_number`. Its style is the `@page`
    /// style for the page type derived from the number and the document's
    /// page progression.
    #[must_use]
    pub fn page(document: &Rc<Document>, page_number: u32) -> Self {
        let style = document.page_style_for(document.page_type(page_number));
        let content = BoxContent::Page(PageData {
            page_number,
            outer_width: None,
            outer_height: None,
            children: Vec::new(),
        });
        Self::with_style(document, None, style, content)
    }

    /// Block box for a non-replaced `block`/`list-item` element.
    #[must_use]
    pub fn block(document: &Rc<Document>, element: NodeId) -> Self {
        Self::principal(document, element, BoxContent::Block(BlockData::default()))
    }

    /// Anonymous block box wrapping inline-level content of `element`.
    #[must_use]
    pub fn anonymous_block(document: &Rc<Document>, element: NodeId) -> Self {
        Self::anonymous(document, element, BoxContent::AnonymousBlock(BlockData::default()))
    }

    /// Line box in the inline formatting context established by `element`.
    #[must_use]
    pub fn line(document: &Rc<Document>, element: NodeId) -> Self {
        Self::anonymous(document, element, BoxContent::Line(Vec::new()))
    }

    /// Inline box for a non-replaced `inline` element.
    #[must_use]
    pub fn inline(document: &Rc<Document>, element: NodeId) -> Self {
        Self::principal(document, element, BoxContent::Inline(Vec::new()))
    }

    /// Text box holding `text`, styled from `element` (the text node or its
    /// parent element).
    #[must_use]
    pub fn text(document: &Rc<Document>, element: NodeId, text: &str) -> Self {
        Self::anonymous(document, element, BoxContent::Text(text.to_string()))
    }

    /// Inline-block box for a non-replaced `inline-block` element.
    #[must_use]
    pub fn inline_block(document: &Rc<Document>, element: NodeId) -> Self {
        Self::principal(document, element, BoxContent::InlineBlock(Vec::new()))
    }

    /// Replaced box for a block-level replaced element.
    #[must_use]
    pub fn block_level_replaced(
        document: &Rc<Document>,
        element: NodeId,
        replacement: Replacement,
    ) -> Self {
        Self::principal(document, element, BoxContent::BlockLevelReplaced(replacement))
    }

    /// Replaced box for an inline-level replaced element.
    #[must_use]
    pub fn inline_level_replaced(
        document: &Rc<Document>,
        element: NodeId,
        replacement: Replacement,
    ) -> Self {
        Self::principal(document, element, BoxContent::InlineLevelReplaced(replacement))
    }

    /// Image marker of the list item `element`, from its `list-style-image`.
    #[must_use]
    pub fn image_marker(document: &Rc<Document>, element: NodeId, replacement: Replacement) -> Self {
        Self::anonymous(document, element, BoxContent::ImageMarker(replacement))
    }

    /// Principal box of `element` for its computed `display`.
    ///
    /// An element with a `replacement` generates a replaced box. Returns
    /// `None` for `display: none`.
    #[must_use]
    pub fn for_element(
        document: &Rc<Document>,
        element: NodeId,
        replacement: Option<Replacement>,
    ) -> Option<Self> {
        let style = document.style_for(element);
        let box_type = BoxType::for_element(style.display(), replacement.is_some())?;
        let content = match replacement {
            Some(replacement) if box_type == BoxType::InlineLevelReplaced => {
                BoxContent::InlineLevelReplaced(replacement)
            }
            Some(replacement) => BoxContent::BlockLevelReplaced(replacement),
            None => BoxContent::empty_parent(box_type)?,
        };
        Some(Self::with_style(document, Some(element), style, content))
    }

    /// This box's kind.
    #[must_use]
    pub const fn box_type(&self) -> BoxType {
        self.content.box_type()
    }

    /// Child ids, empty for leaf kinds.
    #[must_use]
    pub fn children(&self) -> &[BoxId] {
        self.content.children().unwrap_or(&[])
    }

    /// Page data, for page boxes.
    #[must_use]
    pub const fn page_data(&self) -> Option<&PageData> {
        match &self.content {
            BoxContent::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Mutable page data, for page boxes.
    pub fn page_data_mut(&mut self) -> Option<&mut PageData> {
        match &mut self.content {
            BoxContent::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Literal text, for text boxes.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            BoxContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Replaced content, for replaced kinds.
    #[must_use]
    pub const fn replacement(&self) -> Option<&Replacement> {
        match &self.content {
            BoxContent::BlockLevelReplaced(replacement)
            | BoxContent::InlineLevelReplaced(replacement)
            | BoxContent::ImageMarker(replacement) => Some(replacement),
            _ => None,
        }
    }

    /// Marker box placed outside a list item's principal box.
    #[must_use]
    pub const fn outside_list_marker(&self) -> Option<BoxId> {
        match &self.content {
            BoxContent::Block(block) => block.outside_list_marker,
            _ => None,
        }
    }

    /// [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
    #[must_use]
    pub fn is_floated(&self) -> bool {
        self.style.float() != Float::None
    }

    /// [§ 9.6 Absolute positioning](https://www.w3.org/TR/CSS2/visuren.html#absolute-positioning)
    ///
    /// Whether the box is in the absolute positioning scheme (`absolute` or
    /// `fixed`).
    #[must_use]
    pub fn is_absolutely_positioned(&self) -> bool {
        self.style.position().is_absolute_scheme()
    }

    /// [§ 9.4 Normal flow](https://www.w3.org/TR/CSS2/visuren.html#normal-flow)
    #[must_use]
    pub fn is_in_normal_flow(&self) -> bool {
        !(self.is_floated() || self.is_absolutely_positioned())
    }

    /// [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// "Floats, absolutely positioned elements, block containers (such as
    /// inline-blocks, table-cells, and table-captions) that are not block
    /// boxes, and block boxes with 'overflow' other than 'visible' (except
    /// when that value has been propagated to the viewport) establish new
    /// block formatting contexts for their contents."
    #[must_use]
    pub fn establishes_formatting_context(&self) -> bool {
        let box_type = self.box_type();
        self.is_floated()
            || self.is_absolutely_positioned()
            || (box_type.is_block_container()
                && !matches!(box_type, BoxType::Block | BoxType::AnonymousBlock))
            || (matches!(box_type, BoxType::Block | BoxType::AnonymousBlock)
                && self.style.overflow() != Overflow::Visible)
    }
}

impl fmt::Display for LayoutBox {
    /// `<BlockBox div 12>`: kind, tag and source line of the generating
    /// element; `<PageBox 3>` for pages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let box_type = self.box_type();
        if let Some(page) = self.page_data() {
            return write!(f, "<{box_type} {}>", page.page_number);
        }
        let source = self
            .element
            .and_then(|id| self.document.dom.nearest_element(id))
            .and_then(|id| self.document.dom.as_element(id));
        match source {
            Some(element) => write!(f, "<{box_type} {} {}>", element.tag_name, element.source_line),
            None => write!(f, "<{box_type}>"),
        }
    }
}
