//! Document model types.
//!
//! The in-memory representation that editors build and the codec maps to and
//! from bytes: a [`Document`] is an ordered list of [`Page`]s, each holding an
//! ordered list of [`Element`]s.

mod document;
mod element;
mod page;

pub use document::Document;
pub use element::{
    detect_image_mime_type, Element, ElementKind, ImageElement, TextElement, TextStyle,
    DEFAULT_FONT_SIZE,
};
pub use page::{Page, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
