//! Containing blocks.
//!
//! [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
//!
//! "The position and size of an element's box(es) are sometimes calculated
//! relative to a certain rectangle, called the containing block of the
//! element."

use quire_style::Position;

use crate::error::{BoxError, BoxResult};
use crate::kind::BoxType;
use crate::layout_box::LayoutBox;
use crate::tree::{BoxId, BoxTree};

impl LayoutBox {
    /// Content size `(width, height)`, as used when this box is somebody's
    /// containing block.
    ///
    /// # Errors
    /// [`BoxError::IncompleteGeometry`] if either dimension is unresolved.
    pub fn content_size(&self) -> BoxResult<(f32, f32)> {
        Ok((self.content_width()?, self.content_height()?))
    }

    /// Outer page size of a page box.
    fn outer_page_size(&self) -> BoxResult<(f32, f32)> {
        let page = self.page_data().ok_or(BoxError::ContainingBlockNotFound {
            box_type: self.box_type(),
        })?;
        let width = page.outer_width.ok_or(BoxError::IncompleteGeometry {
            box_type: BoxType::Page,
            field: "outer_width",
        })?;
        let height = page.outer_height.ok_or(BoxError::IncompleteGeometry {
            box_type: BoxType::Page,
            field: "outer_height",
        })?;
        Ok((width, height))
    }
}

impl BoxTree {
    /// `(width, height)` of the containing block of `id`.
    ///
    /// - A page box is its own containing block: its outer page size.
    /// - A box directly on a page uses the page's content size.
    /// - `static` and `relative` boxes use their parent's content size.
    /// - `fixed` boxes use the content size of the page they are on.
    /// - `absolute` boxes use the nearest positioned ancestor, or the page
    ///   when there is none.
    ///
    /// NOTE: [§ 10.1](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    /// says an inline positioned ancestor forms the containing block from
    /// the bounding box of its first and last inline boxes. Inline ancestors
    /// are resolved exactly like block ones here, from their content size.
    ///
    /// # Errors
    /// [`BoxError::ContainingBlockNotFound`] if the box is not under a page
    /// box, [`BoxError::IncompleteGeometry`] if the size it resolves to is
    /// not computed yet.
    pub fn containing_block_size(&self, id: BoxId) -> BoxResult<(f32, f32)> {
        let layout_box = self.get(id)?;
        let box_type = layout_box.box_type();
        let not_found = BoxError::ContainingBlockNotFound { box_type };

        if box_type == BoxType::Page {
            return layout_box.outer_page_size();
        }

        // STEP 1: A box placed directly on a page.
        let Some(parent_id) = layout_box.parent else {
            return Err(not_found);
        };
        let parent = self.get(parent_id)?;
        if parent.box_type() == BoxType::Page {
            return parent.content_size();
        }

        let position = layout_box.style.position();
        #[cfg(feature = "box-trace")]
        eprintln!("[CONTAINING BLOCK] {layout_box} position={position}");

        // STEP 2: Dispatch on the positioning scheme.
        match position {
            // [§ 10.1 item 2](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
            // "For other elements, if the element's position is 'relative' or
            // 'static', the containing block is formed by the content edge of
            // the nearest ancestor box that is a block container or which
            // establishes a formatting context."
            Position::Static | Position::Relative => parent.content_size(),

            // [§ 10.1 item 3]
            // "If the element has 'position: fixed', the containing block is
            // established by the viewport in the case of continuous media or
            // the page area in the case of paged media."
            Position::Fixed => {
                for ancestor_id in self.ancestors(id) {
                    let ancestor = self.get(ancestor_id)?;
                    if ancestor.box_type() == BoxType::Page {
                        return ancestor.content_size();
                    }
                }
                Err(not_found)
            }

            // [§ 10.1 item 4]
            // "If the element has 'position: absolute', the containing block
            // is established by the nearest ancestor with a 'position' of
            // 'absolute', 'relative' or 'fixed'."
            Position::Absolute => {
                for ancestor_id in self.ancestors(id) {
                    let ancestor = self.get(ancestor_id)?;
                    if ancestor.style.position().is_positioned() {
                        #[cfg(feature = "box-trace")]
                        eprintln!("[CONTAINING BLOCK]   positioned ancestor {ancestor}");
                        return ancestor.content_size();
                    }
                    // "If there is no such ancestor, the containing block is
                    // the initial containing block."
                    if ancestor.box_type() == BoxType::Page {
                        return ancestor.content_size();
                    }
                }
                Err(not_found)
            }
        }
    }
}
