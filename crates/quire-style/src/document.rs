//! The document handle shared by every box.
//!
//! A [`Document`] couples the source tree with the style table computed for
//! it. Boxes hold it behind an `Rc` and only ever read from it; each box asks
//! it for its own copy of a style.

use std::collections::HashMap;

use quire_common::warning::warn_once;
use quire_dom::{DomTree, NodeId};

use crate::computed::ComputedStyle;
use crate::page::{PageProgression, PageType};

/// Source of computed styles, the seam to the cascade.
///
/// Implementations answer with borrowed values; [`Document`] does the
/// copying so no box can alias another box's style.
pub trait StyleProvider {
    /// Computed style of `element`, if the cascade produced one.
    fn computed_style(&self, element: NodeId) -> Option<&ComputedStyle>;

    /// Computed style of the `@page` pseudo-element for `page_type`.
    fn page_style(&self, page_type: PageType) -> Option<&ComputedStyle>;
}

/// Style table keyed the way the cascade emits it.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    /// Per-element computed styles.
    pub elements: HashMap<NodeId, ComputedStyle>,
    /// `@page` styles per page type.
    pub pages: HashMap<PageType, ComputedStyle>,
}

impl StyleProvider for StyleTable {
    fn computed_style(&self, element: NodeId) -> Option<&ComputedStyle> {
        self.elements.get(&element)
    }

    fn page_style(&self, page_type: PageType) -> Option<&ComputedStyle> {
        self.pages.get(&page_type)
    }
}

/// Document-wide settings that influence box construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentOptions {
    /// Which side of a spread the first page sits on.
    pub page_progression: PageProgression,
}

/// A parsed document together with its computed styles.
pub struct Document {
    /// Source element tree.
    pub dom: DomTree,
    /// Document-wide settings.
    pub options: DocumentOptions,
    styles: Box<dyn StyleProvider>,
}

impl Document {
    /// Wrap a tree and its styles.
    #[must_use]
    pub fn new(dom: DomTree, styles: impl StyleProvider + 'static, options: DocumentOptions) -> Self {
        Self {
            dom,
            options,
            styles: Box::new(styles),
        }
    }

    /// Like [`Document::new`], taking the page progression from the
    /// `direction` of the document element.
    #[must_use]
    pub fn from_root_direction(dom: DomTree, styles: impl StyleProvider + 'static) -> Self {
        let direction = dom
            .document_element()
            .and_then(|root| styles.computed_style(root))
            .map(ComputedStyle::direction)
            .unwrap_or_default();
        let options = DocumentOptions {
            page_progression: PageProgression::from_direction(direction),
        };
        Self::new(dom, styles, options)
    }

    /// A fresh copy of the computed style of `element`.
    ///
    /// An element missing from the style table gets initial values and a
    /// warning rather than an error; the cascade is expected to cover every
    /// element.
    #[must_use]
    pub fn style_for(&self, element: NodeId) -> ComputedStyle {
        if let Some(style) = self.styles.computed_style(element) {
            return style.clone();
        }
        warn_once(
            "Style",
            &format!("no computed style for element {element}, using initial values"),
        );
        ComputedStyle::default()
    }

    /// A fresh copy of the `@page` style for `page_type`.
    #[must_use]
    pub fn page_style_for(&self, page_type: PageType) -> ComputedStyle {
        if let Some(style) = self.styles.page_style(page_type) {
            return style.clone();
        }
        warn_once(
            "Style",
            &format!("no @page style for {page_type}, using initial values"),
        );
        ComputedStyle::default()
    }

    /// Page type of the 1-based `page_number` under this document's page
    /// progression.
    #[must_use]
    pub const fn page_type(&self, page_number: u32) -> PageType {
        PageType::for_page(page_number, self.options.page_progression)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.dom.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
