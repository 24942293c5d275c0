//! Errors raised by box operations.
//!
//! Every variant is a broken structural invariant rather than bad input:
//! callers are expected to propagate them and abandon the current document.

use thiserror::Error;

use crate::kind::BoxType;
use crate::tree::BoxId;

/// Result alias for box operations.
pub type BoxResult<T> = Result<T, BoxError>;

/// Error type for box tree and geometry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxError {
    /// A geometry query ran before layout resolved the field it needs.
    /// Never defaulted to zero: that would corrupt page geometry silently.
    #[error("{box_type} has no resolved {field}")]
    IncompleteGeometry {
        /// Kind of the queried box.
        box_type: BoxType,
        /// First unresolved field, e.g. `margin_left`.
        field: &'static str,
    },

    /// The ancestor walk ended without reaching a page box. The box was
    /// never attached under a page.
    #[error("no containing block for {box_type}: not attached under a page box")]
    ContainingBlockNotFound {
        /// Kind of the box being resolved.
        box_type: BoxType,
    },

    /// `add_child` or `empty` on a kind that cannot hold children, or an
    /// outside list marker on anything but a block box.
    #[error("{box_type} cannot have children")]
    NotAContainer {
        /// Kind of the would-be parent.
        box_type: BoxType,
    },

    /// The id was not allocated by this tree.
    #[error("box {0} does not belong to this tree")]
    UnknownBox(BoxId),
}
