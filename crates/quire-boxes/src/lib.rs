//! Box-model core of the Quire document formatter.
//!
//! # Scope
//!
//! Turns elements plus their computed styles into boxes, and answers
//! geometric questions about them. It covers:
//! - **Taxonomy** ([`BoxType`]): the closed set of box kinds and their
//!   outside/inside behavior
//! - **Geometry**: content, padding, border and margin boxes per
//!   [CSS 2.1 § 8.1](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
//! - **Containing blocks** per
//!   [CSS 2.1 § 10.1](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
//! - **The box tree** ([`BoxTree`]): attaching, copying, translating and
//!   walking boxes
//!
//! Layout itself (widths, line breaking, floats, tables) happens elsewhere
//! and writes its results into the fields exposed here.

/// Containing block resolution.
pub mod containing_block;
/// Error type shared by box operations.
pub mod error;
/// The box model's rectangles and edge arithmetic.
pub mod geometry;
/// Box kinds and their capabilities.
pub mod kind;
/// The box struct and its per-kind payloads.
pub mod layout_box;
/// The arena that owns boxes and links them together.
pub mod tree;

// Re-exports for convenience
pub use error::{BoxError, BoxResult};
pub use geometry::{Edges, Rect};
pub use kind::{BoxType, Inside, Outside};
pub use layout_box::{BlockData, BoxContent, LayoutBox, PageData, Replacement};
pub use tree::{Ancestors, BoxId, BoxTree, Descendants};
