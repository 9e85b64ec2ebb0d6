use std::borrow::Cow;
use std::fs;
use std::io::Result;
use std::path::Path;
use encoding_rs::UTF_8;
use log::{debug, warn};

/// Decode raw file bytes as text.
///
/// A leading BOM selects UTF-8 or UTF-16 and is removed; anything else is
/// read as UTF-8, with malformed sequences replaced by U+FFFD.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    decode_flagged(bytes).0
}

fn decode_flagged(bytes: &[u8]) -> (Cow<'_, str>, bool) {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        warn!("malformed {} sequences replaced while decoding", encoding.name());
    }
    (text, had_errors)
}

/// Decoded contents of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    /// Set when malformed bytes were replaced during decoding
    pub lossy: bool,
}

/// Read a whole document into memory.
pub fn load_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    let (text, lossy) = decode_flagged(&bytes);
    Ok(Document { text: text.into_owned(), lossy })
}
