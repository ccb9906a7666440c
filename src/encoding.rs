//! Text encoding boundary for password byte export
//!
//! The encoding is supplied by the caller and must be deterministic: the
//! same input text and encoding always produce the same byte sequence.

/// Externally supplied text encoding
pub trait TextEncoding: Send + Sync {
    /// Human-readable encoding name
    fn name(&self) -> &str;

    /// Encode `text` into bytes under this encoding
    fn encode(&self, text: &str) -> Vec<u8>;
}

/// UTF-8 encoding
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl TextEncoding for Utf8 {
    fn name(&self) -> &str {
        "utf-8"
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }
}

/// UTF-16 little-endian encoding, no byte order mark
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Le;

impl TextEncoding for Utf16Le {
    fn name(&self) -> &str {
        "utf-16le"
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        text.encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect()
    }
}
