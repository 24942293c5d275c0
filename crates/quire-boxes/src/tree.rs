//! The box tree.
//!
//! Boxes live in an arena owned by [`BoxTree`] and refer to each other by
//! [`BoxId`]. A child list is the owning direction; the parent link is a
//! plain index, so there is no reference cycle to manage.
//!
//! Traversals borrow the tree immutably and mutations borrow it mutably,
//! so the tree cannot change under a running traversal.

use std::fmt::{self, Write as _};
use std::ops::Index;

use crate::error::{BoxError, BoxResult};
use crate::layout_box::{BoxContent, LayoutBox};

/// Index of a box in its [`BoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub usize);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena of boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    boxes: Vec<LayoutBox>,
}

impl BoxTree {
    /// An empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Number of boxes ever allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no box was allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Move a detached box into the tree.
    pub fn push(&mut self, layout_box: LayoutBox) -> BoxId {
        let id = BoxId(self.boxes.len());
        self.boxes.push(layout_box);
        id
    }

    /// The box with `id`.
    ///
    /// # Errors
    /// [`BoxError::UnknownBox`] if `id` is not from this tree.
    pub fn get(&self, id: BoxId) -> BoxResult<&LayoutBox> {
        self.boxes.get(id.0).ok_or(BoxError::UnknownBox(id))
    }

    /// The box with `id`, mutably.
    ///
    /// # Errors
    /// [`BoxError::UnknownBox`] if `id` is not from this tree.
    pub fn get_mut(&mut self, id: BoxId) -> BoxResult<&mut LayoutBox> {
        self.boxes.get_mut(id.0).ok_or(BoxError::UnknownBox(id))
    }

    /// Make `child` the last child of `parent`.
    ///
    /// The same child may be appended more than once; nothing checks for
    /// duplicates.
    ///
    /// # Errors
    /// [`BoxError::NotAContainer`] if `parent` cannot hold children,
    /// [`BoxError::UnknownBox`] for a foreign id.
    pub fn add_child(&mut self, parent: BoxId, child: BoxId) -> BoxResult<()> {
        let _ = self.get(child)?;
        let parent_box = self.get_mut(parent)?;
        let box_type = parent_box.box_type();
        parent_box
            .content
            .children_mut()
            .ok_or(BoxError::NotAContainer { box_type })?
            .push(child);
        self.boxes[child.0].parent = Some(parent);
        Ok(())
    }

    /// [§ 12.5.1 Lists](https://www.w3.org/TR/CSS2/generate.html#lists)
    ///
    /// Attach `marker` as the `list-style-position: outside` marker of the
    /// block box `list_item`. The marker is parented to the list item but
    /// is not one of its children.
    ///
    /// # Errors
    /// [`BoxError::NotAContainer`] if `list_item` is not a block box,
    /// [`BoxError::UnknownBox`] for a foreign id.
    pub fn set_outside_list_marker(&mut self, list_item: BoxId, marker: BoxId) -> BoxResult<()> {
        let _ = self.get(marker)?;
        let item = self.get_mut(list_item)?;
        let box_type = item.box_type();
        let BoxContent::Block(block) = &mut item.content else {
            return Err(BoxError::NotAContainer { box_type });
        };
        block.outside_list_marker = Some(marker);
        self.boxes[marker.0].parent = Some(list_item);
        Ok(())
    }

    /// Reset the children of `id` to an empty list.
    ///
    /// # Errors
    /// [`BoxError::NotAContainer`] if `id` cannot hold children.
    pub fn empty(&mut self, id: BoxId) -> BoxResult<()> {
        let parent_box = self.get_mut(id)?;
        let box_type = parent_box.box_type();
        parent_box
            .content
            .children_mut()
            .ok_or(BoxError::NotAContainer { box_type })?
            .clear();
        Ok(())
    }

    /// Shallow copy of `id` as a new box of the same kind.
    ///
    /// The style is copied; everything else is shared by value, so the
    /// copy points at the same children and the same parent as the
    /// original until the caller re-parents them. The copy is not added to
    /// its parent's children.
    ///
    /// # Errors
    /// [`BoxError::UnknownBox`] for a foreign id.
    pub fn copy(&mut self, id: BoxId) -> BoxResult<BoxId> {
        let copy = self.get(id)?.clone();
        Ok(self.push(copy))
    }

    /// Copy `id` with `children` instead of its own children, and make the
    /// copy their parent.
    ///
    /// # Errors
    /// [`BoxError::NotAContainer`] if `id` cannot hold children,
    /// [`BoxError::UnknownBox`] for a foreign id.
    pub fn copy_with_children(&mut self, id: BoxId, children: Vec<BoxId>) -> BoxResult<BoxId> {
        for &child in &children {
            let _ = self.get(child)?;
        }
        let mut copy = self.get(id)?.clone();
        let box_type = copy.box_type();
        let slot = copy
            .content
            .children_mut()
            .ok_or(BoxError::NotAContainer { box_type })?;
        slot.clone_from(&children);
        let new_id = self.push(copy);
        for child in children {
            self.boxes[child.0].parent = Some(new_id);
        }
        Ok(new_id)
    }

    /// Move `id` by `(dx, dy)` along with every box below it.
    ///
    /// Positions are page-absolute rather than relative to the parent, so
    /// every descendant has to be shifted explicitly.
    ///
    /// # Errors
    /// [`BoxError::UnknownBox`] for a foreign id.
    pub fn translate(&mut self, id: BoxId, dx: f32, dy: f32) -> BoxResult<()> {
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let layout_box = self.get_mut(current)?;
            layout_box.position_x += dx;
            layout_box.position_y += dy;
            pending.extend(layout_box.children().iter().rev());
        }
        Ok(())
    }

    /// `id` followed by all of its descendants, depth-first, pre-order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn descendants(&self, id: BoxId) -> Descendants<'_> {
        Descendants {
            tree: self,
            pending: vec![id],
        }
    }

    /// Parent of `id`, then its parent, up to the root.
    #[must_use]
    pub fn ancestors(&self, id: BoxId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.boxes.get(id.0).and_then(|b| b.parent),
        }
    }

    /// Indented outline of the subtree at `id`, one box per line.
    ///
    /// ```text
    /// <PageBox 1>
    ///   <BlockBox html 1>
    ///     <LineBox p 3>
    ///       <TextBox p 3> "Hello"
    /// ```
    #[must_use]
    pub fn dump(&self, id: BoxId) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, id, 0);
        out
    }

    fn dump_into(&self, out: &mut String, id: BoxId, depth: usize) {
        let Some(layout_box) = self.boxes.get(id.0) else {
            return;
        };
        let indent = "  ".repeat(depth);
        // Writing to a String cannot fail.
        let _ = match layout_box.text_content() {
            Some(text) => writeln!(out, "{indent}{layout_box} {text:?}"),
            None => writeln!(out, "{indent}{layout_box}"),
        };
        for &child in layout_box.children() {
            self.dump_into(out, child, depth + 1);
        }
    }
}

impl Index<BoxId> for BoxTree {
    type Output = LayoutBox;

    /// # Panics
    /// Panics if `id` is not from this tree; use [`BoxTree::get`] otherwise.
    fn index(&self, id: BoxId) -> &LayoutBox {
        &self.boxes[id.0]
    }
}

/// Pre-order iterator returned by [`BoxTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a BoxTree,
    pending: Vec<BoxId>,
}

impl Iterator for Descendants<'_> {
    type Item = BoxId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop()?;
        if let Some(layout_box) = self.tree.boxes.get(id.0) {
            self.pending.extend(layout_box.children().iter().rev());
        }
        Some(id)
    }
}

/// Iterator returned by [`BoxTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a BoxTree,
    current: Option<BoxId>,
}

impl Iterator for Ancestors<'_> {
    type Item = BoxId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.boxes.get(id.0).and_then(|b| b.parent);
        Some(id)
    }
}
