//! Plain text rendering for NOOD documents.

use crate::model::Document;

/// Convert a document to plain text.
///
/// Text elements appear in stored order, one per line, with a blank line
/// between pages. Invalid UTF-8 is replaced rather than rejected.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_page(800.0, 1000.0);
        doc.add_text(0, "Hello, world!", 0.0, 0.0, 12.0, 0).unwrap();
        doc.add_image(0, vec![1, 2, 3], 0.0, 0.0).unwrap();
        doc.add_text(0, "Second line.", 0.0, 20.0, 12.0, 0).unwrap();

        assert_eq!(to_text(&doc), "Hello, world!\nSecond line.");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(to_text(&Document::new()), "");
    }
}
