//! Computed style representation consumed by the Quire box-model core.
//!
//! # Scope
//!
//! This crate does not run the cascade. It defines:
//! - **Computed values** ([`ComputedStyle`]): the per-element property bag a
//!   box owns a copy of, including the inheritance-only derivation used for
//!   anonymous boxes
//! - **Keywords** for `display`, `position`, `float`, `overflow`,
//!   `direction` and `visibility`
//! - **Pages** ([`PageType`], [`PageProgression`]): which `@page` style a
//!   page box uses
//! - **Documents** ([`Document`], [`StyleProvider`]): the shared handle
//!   boxes read their styles from

/// Computed style representation per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod computed;
/// The shared document handle and the style provider seam.
pub mod document;
/// Keyword-valued properties per [CSS 2.1 § 9](https://www.w3.org/TR/CSS2/visuren.html).
pub mod keywords;
/// Page selection per [CSS Paged Media Level 3](https://www.w3.org/TR/css-page-3/).
pub mod page;
/// Physical sides per [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/).
pub mod side;
/// Length and color values per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use computed::ComputedStyle;
pub use document::{Document, DocumentOptions, StyleProvider, StyleTable};
pub use keywords::{Direction, DisplayValue, Float, Overflow, Position, Visibility, parse_keyword};
pub use page::{PageProgression, PageType, named_page_size};
pub use side::Side;
pub use values::{AutoLength, ColorValue, DEFAULT_FONT_SIZE_PX, LengthValue};
