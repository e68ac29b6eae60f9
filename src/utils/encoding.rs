// Text decoding for ID3 text frames

use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

/// Text encodings an ID3v2 frame may declare in its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Iso8859_1 = 0,
    Utf16 = 1,
    Utf16BE = 2,
    Utf8 = 3,
}

impl TextEncoding {
    /// Unknown values fall back to ISO-8859-1.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => TextEncoding::Iso8859_1,
            1 => TextEncoding::Utf16,
            2 => TextEncoding::Utf16BE,
            3 => TextEncoding::Utf8,
            _ => TextEncoding::Iso8859_1,
        }
    }

    /// Decode `data` in this encoding, dropping trailing NUL characters.
    pub fn decode(self, data: &[u8]) -> String {
        let text = match self {
            TextEncoding::Iso8859_1 => WINDOWS_1252.decode_without_bom_handling(data).0,
            TextEncoding::Utf16 => {
                // Detect BOM
                if data.starts_with(&[0xFF, 0xFE]) {
                    UTF_16LE.decode_without_bom_handling(&data[2..]).0
                } else if data.starts_with(&[0xFE, 0xFF]) {
                    UTF_16BE.decode_without_bom_handling(&data[2..]).0
                } else {
                    UTF_16LE.decode_without_bom_handling(data).0
                }
            }
            TextEncoding::Utf16BE => UTF_16BE.decode_without_bom_handling(data).0,
            TextEncoding::Utf8 => UTF_8.decode_with_bom_removal(data).0,
        };
        text.trim_end_matches('\0').to_string()
    }
}

/// Decode bytes as they are, with no charset detection.
///
/// Invalid UTF-8 sequences become U+FFFD.
pub fn decode_verbatim(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
