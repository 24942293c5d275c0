//! CSS value types carried by computed styles
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

mod color;
mod length;

pub use color::ColorValue;
pub use length::{AutoLength, DEFAULT_FONT_SIZE_PX, LengthValue};
