//! Element-level types: the placed text and image items on a page.

use std::borrow::Cow;

/// Default font size for text added through the convenience API.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// One-byte tag that identifies an element's kind in the flat layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ElementKind {
    /// Styled text run
    Text = 0,
    /// Embedded raster image
    Image = 1,
}

impl ElementKind {
    /// The tag byte written to the flat layout.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Map a tag byte back to a kind.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(ElementKind::Text),
            1 => Some(ElementKind::Image),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Text => write!(f, "text"),
            ElementKind::Image => write!(f, "image"),
        }
    }
}

/// A placed item on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A text run
    Text(TextElement),

    /// An image blob
    Image(ImageElement),
}

impl Element {
    /// Tag of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Image(_) => ElementKind::Image,
        }
    }

    /// Top-left position as (x, y).
    pub fn position(&self) -> (f32, f32) {
        match self {
            Element::Text(t) => (t.x, t.y),
            Element::Image(i) => (i.x, i.y),
        }
    }

    /// Raw payload bytes (UTF-8 text or encoded image).
    pub fn data(&self) -> &[u8] {
        match self {
            Element::Text(t) => &t.data,
            Element::Image(i) => &i.data,
        }
    }

    /// Check if this element is text.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Element::Image(_))
    }

    /// Get the text element, if this is one.
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(t) => Some(t),
            Element::Image(_) => None,
        }
    }

    /// Get the image element, if this is one.
    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            Element::Image(i) => Some(i),
            Element::Text(_) => None,
        }
    }
}

impl From<TextElement> for Element {
    fn from(text: TextElement) -> Self {
        Element::Text(text)
    }
}

impl From<ImageElement> for Element {
    fn from(image: ImageElement) -> Self {
        Element::Image(image)
    }
}

/// A run of styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    /// X position
    pub x: f32,

    /// Y position
    pub y: f32,

    /// Font size
    pub font_size: f32,

    /// Packed 0xRRGGBB color, stored as a signed 32-bit value
    pub color: i32,

    /// Style flags
    pub style: TextStyle,

    /// UTF-8 encoded text, stored verbatim
    pub data: Vec<u8>,
}

impl TextElement {
    /// Create a text element with default size, black color and no styling.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            font_size: DEFAULT_FONT_SIZE,
            color: 0,
            style: TextStyle::default(),
            data: text.into().into_bytes(),
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the packed color.
    pub fn with_color(mut self, color: i32) -> Self {
        self.color = color;
        self
    }

    /// Set the style flags.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Decode the text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Split the packed color into (r, g, b).
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.color >> 16) & 0xFF) as u8,
            ((self.color >> 8) & 0xFF) as u8,
            (self.color & 0xFF) as u8,
        )
    }
}

/// Text styling flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strikethrough: bool,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough
    }
}

/// An embedded image. The bytes are whatever encoded form the caller supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    /// X position
    pub x: f32,

    /// Y position
    pub y: f32,

    /// Display width (0 when not yet laid out)
    pub width: f32,

    /// Display height (0 when not yet laid out)
    pub height: f32,

    /// Encoded image bytes
    pub data: Vec<u8>,
}

impl ImageElement {
    /// Create an image element with zero display size.
    pub fn new(data: Vec<u8>, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
            data,
        }
    }

    /// Set the display size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sniff the MIME type of the image bytes.
    pub fn mime_type(&self) -> Option<&'static str> {
        detect_image_mime_type(&self.data)
    }

    /// File extension matching the sniffed MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type() {
            Some("image/png") => "png",
            Some("image/jpeg") => "jpg",
            Some("image/gif") => "gif",
            Some("image/bmp") => "bmp",
            Some("image/tiff") => "tiff",
            Some("image/webp") => "webp",
            _ => "bin",
        }
    }
}

/// Detect an image MIME type from magic bytes.
pub fn detect_image_mime_type(data: &[u8]) -> Option<&'static str> {
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
    {
        return Some("image/tiff");
    }

    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    None
}
