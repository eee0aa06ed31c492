//! Document-level types.

use super::{Element, ImageElement, Page, TextElement};
use crate::error::{Error, Result};

/// An ordered sequence of pages; the unit of load and save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Pages in file order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a page by index (0-based).
    pub fn get_page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Get a mutable page by index (0-based).
    pub fn get_page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Append an empty page.
    pub fn add_page(&mut self, width: f32, height: f32) {
        self.pages.push(Page::new(width, height));
    }

    /// Append an element to the page at `page_index`.
    pub fn add_element(&mut self, page_index: usize, element: impl Into<Element>) -> Result<()> {
        let page_count = self.pages.len();
        let page = self
            .pages
            .get_mut(page_index)
            .ok_or(Error::InvalidPageIndex {
                index: page_index,
                page_count,
            })?;
        page.add_element(element);
        Ok(())
    }

    /// Append a text element with default styling flags.
    pub fn add_text(
        &mut self,
        page_index: usize,
        text: &str,
        x: f32,
        y: f32,
        font_size: f32,
        color: i32,
    ) -> Result<()> {
        let element = TextElement::new(text, x, y)
            .with_font_size(font_size)
            .with_color(color);
        self.add_element(page_index, element)
    }

    /// Append an image element with zero display size.
    pub fn add_image(&mut self, page_index: usize, data: Vec<u8>, x: f32, y: f32) -> Result<()> {
        self.add_element(page_index, ImageElement::new(data, x, y))
    }

    /// Append an image element with an explicit display size.
    pub fn add_image_with_size(
        &mut self,
        page_index: usize,
        data: Vec<u8>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        self.add_element(
            page_index,
            ImageElement::new(data, x, y).with_size(width, height),
        )
    }

    /// Total number of elements across all pages.
    pub fn element_count(&self) -> usize {
        self.pages.iter().map(Page::element_count).sum()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_FONT_SIZE;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.element_count(), 0);
    }

    #[test]
    fn test_add_text_defaults() {
        let mut doc = Document::new();
        doc.add_page(800.0, 1000.0);
        doc.add_text(0, "Hi", 10.0, 20.0, DEFAULT_FONT_SIZE, 0)
            .unwrap();

        let text = doc.pages[0].elements[0].as_text().unwrap();
        assert_eq!((text.x, text.y), (10.0, 20.0));
        assert_eq!(text.font_size, 12.0);
        assert!(!text.style.has_styling());
        assert_eq!(text.data, b"Hi");
    }

    #[test]
    fn test_add_image_zero_size() {
        let mut doc = Document::new();
        doc.add_page(100.0, 100.0);
        doc.add_image(0, vec![1, 2, 3], 4.0, 5.0).unwrap();

        let image = doc.pages[0].elements[0].as_image().unwrap();
        assert_eq!((image.width, image.height), (0.0, 0.0));
        assert_eq!(image.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_page_index_on_empty_document() {
        let mut doc = Document::new();
        let err = doc.add_text(0, "x", 0.0, 0.0, 12.0, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPageIndex {
                index: 0,
                page_count: 0
            }
        ));
    }

    #[test]
    fn test_invalid_page_index_leaves_document_untouched() {
        let mut doc = Document::new();
        doc.add_page(100.0, 100.0);
        let before = doc.clone();

        assert!(doc.add_image(1, vec![0], 0.0, 0.0).is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_plain_text_joins_pages() {
        let mut doc = Document::new();
        doc.add_page(10.0, 10.0);
        doc.add_page(10.0, 10.0);
        doc.add_text(0, "one", 0.0, 0.0, 12.0, 0).unwrap();
        doc.add_text(1, "two", 0.0, 0.0, 12.0, 0).unwrap();

        assert_eq!(doc.plain_text(), "one\n\ntwo");
        assert_eq!(doc.element_count(), 2);
    }
}
