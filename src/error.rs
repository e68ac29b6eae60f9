//! Error types returned by the tag parser.

use thiserror::Error;

/// Everything that can go wrong while reading a tag.
///
/// Every variant is terminal for the parse call that produced it.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// The buffer does not start with the `ID3` identifier.
    #[error("tag header: invalid identifier")]
    InvalidIdentifier,

    /// Only ID3v2.3 and ID3v2.4 are accepted.
    #[error("tag header: invalid version {0:#06x}")]
    InvalidVersion(u16),

    /// One of the reserved low flag bits is set.
    #[error("tag header: invalid flags {0:#010b}")]
    InvalidFlags(u8),

    /// A byte of the declared size has its high bit set, so it is not synchsafe.
    #[error("tag header: invalid size {0:02x?}")]
    InvalidSize([u8; 4]),

    /// A text frame body too short to carry the encoding and terminator bytes.
    #[error("text frame {id}: body of {len} bytes is too short")]
    MalformedTextFrame { id: String, len: usize },

    /// The APIC sub-structure could not be located inside the frame body.
    #[error("picture frame: {0}")]
    MalformedPictureFrame(&'static str),

    /// The embedded picture bytes were rejected by the image decoder.
    #[error("picture frame: invalid image data: {0}")]
    MalformedPictureData(#[source] image::ImageError),

    /// A read would run past the end of the input buffer.
    #[error("read of {wanted} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        wanted: usize,
        available: usize,
    },

    /// Reading the byte source into memory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using the crate's `Id3Error` type.
pub type Result<T> = std::result::Result<T, Id3Error>;
