//! Integration tests for saving and loading NOOD containers.

use nood::{
    from_bytes, load, save, to_bytes, Document, Element, Error, ImageElement, TextElement,
    TextStyle,
};
use tempfile::TempDir;

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn create_sample_document() -> Document {
    let mut doc = Document::new();

    // Page 1: mixed content
    doc.add_page(800.0, 1000.0);
    doc.add_text(0, "Title", 40.0, 30.0, 24.0, 0x202020).unwrap();
    doc.add_element(
        0,
        TextElement::new("Bold and struck", 40.0, 80.0)
            .with_color(0xFF0000)
            .with_style(TextStyle {
                bold: true,
                italic: false,
                underline: false,
                strikethrough: true,
            }),
    )
    .unwrap();
    let mut image = PNG_HEADER.to_vec();
    image.extend((0..=255u8).cycle().take(2048));
    doc.add_image_with_size(0, image, 100.0, 200.0, 320.0, 240.0)
        .unwrap();

    // Page 2: empty, landscape
    doc.add_page(1000.0, 800.0);

    // Page 3: unicode text and an image without a display size
    doc.add_page(595.0, 842.0);
    doc.add_text(2, "Grüße, 世界 🌍", 0.5, -3.25, 9.5, -1).unwrap();
    doc.add_image(2, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00], 12.0, 34.0)
        .unwrap();

    doc
}

#[test]
fn test_roundtrip_through_bytes() {
    let doc = create_sample_document();
    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();

    assert_eq!(loaded, doc);
    assert_eq!(loaded.page_count(), 3);
    assert!(loaded.pages[1].is_empty());
    assert_eq!(
        loaded.pages[2].elements[0].as_text().unwrap().text(),
        "Grüße, 世界 🌍"
    );
}

#[test]
fn test_roundtrip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.nood");

    let doc = create_sample_document();
    save(&doc, &path).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(loaded, doc);
}

#[test]
fn test_element_order_preserved() {
    let mut doc = Document::new();
    doc.add_page(100.0, 100.0);
    for i in 0..50 {
        if i % 3 == 0 {
            doc.add_image(0, vec![i as u8], i as f32, 0.0).unwrap();
        } else {
            doc.add_text(0, &format!("run {}", i), i as f32, 0.0, 12.0, 0)
                .unwrap();
        }
    }

    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();
    let xs: Vec<f32> = loaded.pages[0]
        .elements
        .iter()
        .map(|e| e.position().0)
        .collect();
    assert_eq!(xs, (0..50).map(|i| i as f32).collect::<Vec<_>>());
    assert_eq!(loaded, doc);
}

#[test]
fn test_resave_is_byte_identical() {
    let first = to_bytes(&create_sample_document()).unwrap();
    let second = to_bytes(&from_bytes(&first).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_document_roundtrip() {
    let doc = Document::new();
    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_degenerate_page_sizes_roundtrip() {
    let mut doc = Document::new();
    doc.add_page(0.0, 0.0);
    doc.add_page(-10.0, -0.0);
    doc.add_page(f32::MAX, f32::MIN_POSITIVE);

    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();
    for (a, b) in loaded.pages.iter().zip(&doc.pages) {
        assert_eq!(a.width.to_bits(), b.width.to_bits());
        assert_eq!(a.height.to_bits(), b.height.to_bits());
    }
}

#[test]
fn test_nan_coordinates_keep_their_bits() {
    let mut doc = Document::new();
    doc.add_page(1.0, 1.0);
    doc.add_image(0, vec![], f32::NAN, f32::INFINITY).unwrap();

    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();
    let (x, y) = loaded.pages[0].elements[0].position();
    assert_eq!(x.to_bits(), f32::NAN.to_bits());
    assert_eq!(y, f32::INFINITY);
}

#[test]
fn test_empty_blobs_roundtrip() {
    let mut doc = Document::new();
    doc.add_page(1.0, 1.0);
    doc.add_text(0, "", 0.0, 0.0, 12.0, 0).unwrap();
    doc.add_image(0, Vec::new(), 0.0, 0.0).unwrap();

    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();
    assert!(loaded.pages[0].elements.iter().all(|e| e.data().is_empty()));
}

#[test]
fn test_non_utf8_text_bytes_stored_verbatim() {
    let mut doc = Document::new();
    doc.add_page(1.0, 1.0);
    let mut text = TextElement::new("", 0.0, 0.0);
    text.data = vec![0xC3, 0x28, 0xFF];
    doc.add_element(0, text).unwrap();

    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();
    assert_eq!(loaded.pages[0].elements[0].data(), &[0xC3, 0x28, 0xFF]);
}

#[test]
fn test_invalid_signature_rejected() {
    let mut bytes = to_bytes(&create_sample_document()).unwrap();
    bytes[..4].copy_from_slice(b"DOON");
    assert!(matches!(from_bytes(&bytes), Err(Error::InvalidSignature)));
}

#[test]
fn test_invalid_signature_rejected_before_decompression() {
    // Garbage after a bad signature is never looked at
    let mut bytes = b"ABCD".to_vec();
    bytes.extend_from_slice(&[0xFF; 64]);
    assert!(matches!(from_bytes(&bytes), Err(Error::InvalidSignature)));
}

#[test]
fn test_other_versions_rejected() {
    for version in [0u16, 2, 256, u16::MAX] {
        let mut bytes = to_bytes(&create_sample_document()).unwrap();
        bytes[4..6].copy_from_slice(&version.to_le_bytes());
        let result = from_bytes(&bytes);
        assert!(
            matches!(result, Err(Error::UnsupportedVersion(v)) if v == version),
            "version {} was accepted",
            version
        );
    }
}

#[test]
fn test_every_truncation_fails_cleanly() {
    let bytes = to_bytes(&create_sample_document()).unwrap();
    for len in 0..bytes.len() {
        match from_bytes(&bytes[..len]) {
            Err(Error::TruncatedFile(_)) | Err(Error::MalformedPayload(_)) => {}
            other => panic!("truncation at {} gave {:?}", len, other.map(|_| ())),
        }
    }
}

#[test]
fn test_truncated_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cut.nood");
    let bytes = to_bytes(&create_sample_document()).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(load(&path), Err(Error::TruncatedFile(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load(dir.path().join("missing.nood"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_variants_decode_to_their_own_fields() {
    let doc = create_sample_document();
    let loaded = from_bytes(&to_bytes(&doc).unwrap()).unwrap();

    match &loaded.pages[0].elements[2] {
        Element::Image(ImageElement {
            width,
            height,
            data,
            ..
        }) => {
            assert_eq!((*width, *height), (320.0, 240.0));
            assert!(data.starts_with(&PNG_HEADER));
        }
        other => panic!("expected image, got {:?}", other.kind()),
    }

    let styled = loaded.pages[0].elements[1].as_text().unwrap();
    assert!(styled.style.bold && styled.style.strikethrough);
    assert!(!styled.style.italic && !styled.style.underline);
    assert_eq!(styled.rgb(), (0xFF, 0, 0));
}
