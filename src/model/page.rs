//! Page-level types.

use super::Element;

/// Default page width used by the editor for new documents.
pub const DEFAULT_PAGE_WIDTH: f32 = 800.0;

/// Default page height used by the editor for new documents.
pub const DEFAULT_PAGE_HEIGHT: f32 = 1000.0;

/// A sized canvas holding an ordered sequence of elements.
///
/// Dimensions are not validated: zero or negative sizes describe an empty
/// canvas and are stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Canvas width
    pub width: f32,

    /// Canvas height
    pub height: f32,

    /// Elements in drawing order
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Add an element to the page.
    pub fn add_element(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Get plain text content of the page, one element per line.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|element| element.as_text().map(|t| t.text().into_owned()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements on the page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT)
    }
}
