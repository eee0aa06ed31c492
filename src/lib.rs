//! # nood
//!
//! Reader and writer for NOOD, a paginated document container that mixes
//! styled text runs and raster images.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nood::{load, save, Document};
//!
//! fn main() -> nood::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_page(800.0, 1000.0);
//!     doc.add_text(0, "Hello", 10.0, 20.0, 12.0, 0x000000)?;
//!     save(&doc, "hello.nood")?;
//!
//!     let loaded = load("hello.nood")?;
//!     assert_eq!(loaded, doc);
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`codec`]: the flat, uncompressed payload layout (pure, in-memory)
//! - [`container`]: signature, version and gzip framing around the payload
//! - [`detect`]: header sniffing without decompression
//! - [`render`]: plain text and JSON outline views

pub mod codec;
pub mod container;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use container::{LoadOptions, SaveOptions, FORMAT_VERSION, SIGNATURE};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_nood, NoodFormat};
pub use error::{Error, Result};
pub use model::{Document, Element, ElementKind, ImageElement, Page, TextElement, TextStyle};
pub use render::JsonFormat;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Serialize a document to container bytes.
///
/// # Example
///
/// ```
/// use nood::{from_bytes, to_bytes, Document};
///
/// let mut doc = Document::new();
/// doc.add_page(800.0, 1000.0);
/// let bytes = to_bytes(&doc).unwrap();
/// assert_eq!(&bytes[..4], b"NOOD");
/// assert_eq!(from_bytes(&bytes).unwrap(), doc);
/// ```
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    to_bytes_with_options(doc, &SaveOptions::default())
}

/// Serialize a document to container bytes with custom options.
pub fn to_bytes_with_options(doc: &Document, options: &SaveOptions) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    save_to_writer_with_options(doc, &mut out, options)?;
    Ok(out)
}

/// Deserialize a document from container bytes.
pub fn from_bytes(data: &[u8]) -> Result<Document> {
    from_bytes_with_options(data, &LoadOptions::default())
}

/// Deserialize a document from container bytes with custom options.
pub fn from_bytes_with_options(data: &[u8], options: &LoadOptions) -> Result<Document> {
    load_from_reader_with_options(data, options)
}

/// Write a document to any writer.
pub fn save_to_writer<W: Write>(doc: &Document, writer: W) -> Result<()> {
    save_to_writer_with_options(doc, writer, &SaveOptions::default())
}

/// Write a document to any writer with custom options.
pub fn save_to_writer_with_options<W: Write>(
    doc: &Document,
    writer: W,
    options: &SaveOptions,
) -> Result<()> {
    let payload = codec::encode(doc)?;
    log::debug!(
        "Encoded {} pages, {} elements into {} payload bytes",
        doc.page_count(),
        doc.element_count(),
        payload.len()
    );
    container::write_container(writer, &payload, options)
}

/// Read a document from any reader.
///
/// # Example
///
/// ```no_run
/// use nood::load_from_reader;
/// use std::fs::File;
///
/// let file = File::open("document.nood").unwrap();
/// let doc = load_from_reader(file).unwrap();
/// ```
pub fn load_from_reader<R: Read>(reader: R) -> Result<Document> {
    load_from_reader_with_options(reader, &LoadOptions::default())
}

/// Read a document from any reader with custom options.
pub fn load_from_reader_with_options<R: Read>(reader: R, options: &LoadOptions) -> Result<Document> {
    let payload = container::read_container(reader, options)?;
    let doc = codec::decode(&payload)?;
    log::debug!(
        "Decoded {} pages, {} elements",
        doc.page_count(),
        doc.element_count()
    );
    Ok(doc)
}

/// Save a document to a file.
///
/// The document is fully encoded before the file is created, so an encoding
/// failure leaves any existing file untouched.
///
/// # Example
///
/// ```no_run
/// use nood::{save, Document};
///
/// let mut doc = Document::new();
/// doc.add_page(800.0, 1000.0);
/// save(&doc, "empty.nood").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    save_with_options(doc, path, &SaveOptions::default())
}

/// Save a document to a file with custom options.
pub fn save_with_options<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &SaveOptions,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes_with_options(doc, options)?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;

    log::debug!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Load a document from a file.
///
/// Nothing is returned unless the whole file decodes; a failed load never
/// yields a partial document.
///
/// # Example
///
/// ```no_run
/// use nood::load;
///
/// let doc = load("document.nood").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    load_with_options(path, &LoadOptions::default())
}

/// Load a document from a file with custom options.
pub fn load_with_options<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("Loading {}", path.display());
    let file = File::open(path)?;
    load_from_reader_with_options(BufReader::new(file), options)
}
