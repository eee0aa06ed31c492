//! Flat payload codec.
//!
//! Maps a [`Document`] to the uncompressed byte layout stored inside the
//! container and back. All multi-byte fields are little-endian; there is no
//! padding or alignment.
//!
//! ```text
//! pageCount: i32
//! per page:     width: f32, height: f32, elementCount: i32
//! per element:  tag: u8, x: f32, y: f32
//!               Text:  fontSize: f32, color: i32, bold, italic, underline, strikethrough (1 byte each)
//!               Image: width: f32, height: f32
//!               dataLength: i32, data
//! ```

mod reader;
mod writer;

pub use reader::PayloadReader;
pub use writer::PayloadWriter;

use crate::error::{Error, Result};
use crate::model::{Document, Element, ElementKind, ImageElement, Page, TextElement, TextStyle};

const COUNT_LEN: usize = 4;
const PAGE_HEADER_LEN: usize = 4 + 4 + COUNT_LEN;
const ELEMENT_HEADER_LEN: usize = 1 + 4 + 4;
const TEXT_FIELDS_LEN: usize = 4 + 4 + 4;
const IMAGE_FIELDS_LEN: usize = 4 + 4;
const MIN_ELEMENT_LEN: usize = ELEMENT_HEADER_LEN + IMAGE_FIELDS_LEN + COUNT_LEN;

/// Exact size of the flat payload for `doc`.
pub fn encoded_len(doc: &Document) -> usize {
    COUNT_LEN
        + doc
            .pages
            .iter()
            .map(|page| {
                PAGE_HEADER_LEN
                    + page
                        .elements
                        .iter()
                        .map(element_encoded_len)
                        .sum::<usize>()
            })
            .sum::<usize>()
}

fn element_encoded_len(element: &Element) -> usize {
    let fields = match element {
        Element::Text(_) => TEXT_FIELDS_LEN,
        Element::Image(_) => IMAGE_FIELDS_LEN,
    };
    ELEMENT_HEADER_LEN + fields + COUNT_LEN + element.data().len()
}

/// Encode a document to the flat payload layout.
///
/// Only fails when a count or blob length does not fit the format's
/// signed 32-bit length fields.
pub fn encode(doc: &Document) -> Result<Vec<u8>> {
    let mut writer = PayloadWriter::with_capacity(encoded_len(doc));

    writer.write_len(doc.pages.len())?;
    for page in &doc.pages {
        writer.write_f32(page.width);
        writer.write_f32(page.height);
        writer.write_len(page.elements.len())?;

        for element in &page.elements {
            encode_element(&mut writer, element)?;
        }
    }

    Ok(writer.into_inner())
}

fn encode_element(writer: &mut PayloadWriter, element: &Element) -> Result<()> {
    writer.write_u8(element.kind().tag());
    let (x, y) = element.position();
    writer.write_f32(x);
    writer.write_f32(y);

    match element {
        Element::Text(text) => {
            writer.write_f32(text.font_size);
            writer.write_i32(text.color);
            writer.write_bool(text.style.bold);
            writer.write_bool(text.style.italic);
            writer.write_bool(text.style.underline);
            writer.write_bool(text.style.strikethrough);
        }
        Element::Image(image) => {
            writer.write_f32(image.width);
            writer.write_f32(image.height);
        }
    }

    writer.write_blob(element.data())
}

/// Decode a flat payload into a document.
///
/// The whole buffer must be consumed; any truncation, unknown tag, negative
/// count or trailing byte is reported as [`Error::MalformedPayload`].
pub fn decode(data: &[u8]) -> Result<Document> {
    let mut reader = PayloadReader::new(data);

    let page_count = reader.read_len("page count")?;
    let mut pages = Vec::with_capacity(page_count.min(reader.remaining() / PAGE_HEADER_LEN));

    for page_index in 0..page_count {
        pages.push(decode_page(&mut reader, page_index)?);
    }

    if !reader.is_exhausted() {
        return Err(Error::malformed(format!(
            "{} unexpected bytes after the last page",
            reader.remaining()
        )));
    }

    Ok(Document { pages })
}

fn decode_page(reader: &mut PayloadReader<'_>, page_index: usize) -> Result<Page> {
    let width = reader.read_f32("page width")?;
    let height = reader.read_f32("page height")?;
    let element_count = reader.read_len("element count")?;

    let mut page = Page::new(width, height);
    page.elements = Vec::with_capacity(element_count.min(reader.remaining() / MIN_ELEMENT_LEN));

    for _ in 0..element_count {
        page.elements.push(decode_element(reader, page_index)?);
    }

    Ok(page)
}

fn decode_element(reader: &mut PayloadReader<'_>, page_index: usize) -> Result<Element> {
    let offset = reader.position();
    let tag = reader.read_u8("element type")?;
    let kind = ElementKind::from_tag(tag).ok_or_else(|| {
        Error::malformed(format!(
            "unknown element type {} on page {} at offset {}",
            tag, page_index, offset
        ))
    })?;

    let x = reader.read_f32("element x")?;
    let y = reader.read_f32("element y")?;

    let element = match kind {
        ElementKind::Text => {
            let font_size = reader.read_f32("font size")?;
            let color = reader.read_i32("color")?;
            let style = TextStyle {
                bold: reader.read_bool("bold flag")?,
                italic: reader.read_bool("italic flag")?,
                underline: reader.read_bool("underline flag")?,
                strikethrough: reader.read_bool("strikethrough flag")?,
            };
            let data = reader.read_blob("text data")?.to_vec();
            Element::Text(TextElement {
                x,
                y,
                font_size,
                color,
                style,
                data,
            })
        }
        ElementKind::Image => {
            let width = reader.read_f32("image width")?;
            let height = reader.read_f32("image height")?;
            let data = reader.read_blob("image data")?.to_vec();
            Element::Image(ImageElement {
                x,
                y,
                width,
                height,
                data,
            })
        }
    };

    Ok(element)
}
