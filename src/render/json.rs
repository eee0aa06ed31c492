//! JSON outline rendering for NOOD documents.
//!
//! Image bytes are summarised by size and sniffed MIME type instead of being
//! inlined.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Document, Element, Page};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct DocumentOutline {
    page_count: usize,
    pages: Vec<PageOutline>,
}

#[derive(Serialize)]
struct PageOutline {
    index: usize,
    width: f32,
    height: f32,
    elements: Vec<ElementOutline>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ElementOutline {
    Text {
        x: f32,
        y: f32,
        font_size: f32,
        color: String,
        bold: bool,
        italic: bool,
        underline: bool,
        strikethrough: bool,
        text: String,
    },
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        size: usize,
        mime_type: Option<&'static str>,
    },
}

impl From<&Element> for ElementOutline {
    fn from(element: &Element) -> Self {
        match element {
            Element::Text(t) => ElementOutline::Text {
                x: t.x,
                y: t.y,
                font_size: t.font_size,
                color: format!("#{:06X}", t.color & 0x00FF_FFFF),
                bold: t.style.bold,
                italic: t.style.italic,
                underline: t.style.underline,
                strikethrough: t.style.strikethrough,
                text: t.text().into_owned(),
            },
            Element::Image(i) => ElementOutline::Image {
                x: i.x,
                y: i.y,
                width: i.width,
                height: i.height,
                size: i.data.len(),
                mime_type: i.mime_type(),
            },
        }
    }
}

fn page_outline(index: usize, page: &Page) -> PageOutline {
    PageOutline {
        index,
        width: page.width,
        height: page.height,
        elements: page.elements.iter().map(ElementOutline::from).collect(),
    }
}

/// Convert a document outline to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let outline = DocumentOutline {
        page_count: doc.page_count(),
        pages: doc
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| page_outline(index, page))
            .collect(),
    };

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&outline),
        JsonFormat::Compact => serde_json::to_string(&outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_page(800.0, 1000.0);
        doc.add_text(0, "Hello", 10.0, 20.0, 12.0, 0xFF0000).unwrap();
        doc.add_image(0, vec![0xFF, 0xD8, 0xFF, 0xE0], 0.0, 0.0)
            .unwrap();
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\": \"text\""));
        assert!(json.contains("\"text\": \"Hello\""));
        assert!(json.contains("\"color\": \"#FF0000\""));
        assert!(json.contains("\"mime_type\": \"image/jpeg\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["page_count"], 1);
        assert_eq!(value["pages"][0]["elements"][1]["size"], 4);
    }
}
