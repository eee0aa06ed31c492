//! Read-only views of a document for tools and previews.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
