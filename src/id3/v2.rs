// ID3v2 tag header and frame walking

use std::borrow::Cow;

use log::{debug, trace};

use crate::error::{Id3Error, Result};
use crate::utils::io::{self, ByteCursor};

/// Supported tag revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagVersion {
    V2_3,
    V2_4,
}

impl TagVersion {
    pub fn major(self) -> u8 {
        match self {
            TagVersion::V2_3 => 3,
            TagVersion::V2_4 => 4,
        }
    }
}

impl std::fmt::Display for TagVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "2.{}.0", self.major())
    }
}

/// Validated ID3v2 header structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    pub version: TagVersion,
    pub flags: u8,
    /// Tag body size excluding the header, decoded from its synchsafe form.
    pub size: u32,
}

impl TagHeader {
    pub const SIZE: usize = 10;
    const ID: [u8; 3] = *b"ID3";
    const EXTENDED_HEADER: u8 = 0b0100_0000;
    const RESERVED_FLAGS: u8 = 0b0001_1111;

    /// Validate the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::read(&mut ByteCursor::new(data))
    }

    /// Read and validate the 10-byte header at the cursor.
    ///
    /// Identifier, version, flags and size are checked in that order and the
    /// first failure is returned.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let raw = cursor.read_bytes(Self::SIZE)?;

        if raw[0..3] != Self::ID {
            return Err(Id3Error::InvalidIdentifier);
        }

        // The version word is read little-endian, so the revision byte must be zero.
        let version = match u16::from_le_bytes([raw[3], raw[4]]) {
            3 => TagVersion::V2_3,
            4 => TagVersion::V2_4,
            other => return Err(Id3Error::InvalidVersion(other)),
        };

        let flags = raw[5];
        if flags & Self::RESERVED_FLAGS != 0 {
            return Err(Id3Error::InvalidFlags(flags));
        }

        let size_bytes = [raw[6], raw[7], raw[8], raw[9]];
        if !io::is_synchsafe(size_bytes) {
            return Err(Id3Error::InvalidSize(size_bytes));
        }

        Ok(TagHeader {
            version,
            flags,
            size: io::decode_synchsafe(size_bytes),
        })
    }

    pub fn has_extended_header(&self) -> bool {
        self.flags & Self::EXTENDED_HEADER != 0
    }
}

/// Skip the extended header that directly follows the tag header.
///
/// Its 4-byte big-endian size counts the bytes after the size field. Returns
/// the number of bytes skipped.
pub fn skip_extended_header(cursor: &mut ByteCursor<'_>) -> Result<usize> {
    let size = cursor.read_be_u32()? as usize;
    cursor.skip(size)?;
    Ok(4 + size)
}

/// One frame as laid out in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub id: [u8; 4],
    pub size: u32,
    pub flags: u16,
    /// Absolute offset of the body within the input buffer.
    pub offset: usize,
    pub body: &'a [u8],
}

impl Frame<'_> {
    pub const HEADER_SIZE: usize = 10;
    const SENTINEL: [u8; 4] = [0; 4];

    pub fn id_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.id)
    }
}

/// Iterator over the frames of a tag.
///
/// Stops cleanly at an all-zero frame id. Running out of input before that is
/// reported as [`Id3Error::OutOfBounds`], after which the walker is exhausted.
#[derive(Debug, Clone)]
pub struct FrameWalker<'a> {
    cursor: ByteCursor<'a>,
    done: bool,
}

impl<'a> FrameWalker<'a> {
    pub fn new(cursor: ByteCursor<'a>) -> Self {
        FrameWalker {
            cursor,
            done: false,
        }
    }

    /// Offset of the next byte the walker will read.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn next_frame(&mut self) -> Result<Option<Frame<'a>>> {
        let id: [u8; 4] = self.cursor.read_array()?;
        if id == Frame::SENTINEL {
            return Ok(None);
        }

        // Plain big-endian, not synchsafe, for 2.3 and 2.4 alike.
        let size = self.cursor.read_be_u32()?;
        let flags = self.cursor.read_be_u16()?;
        let offset = self.cursor.position();
        let body = self.cursor.read_bytes(size as usize)?;

        Ok(Some(Frame {
            id,
            size,
            flags,
            offset,
            body,
        }))
    }
}

impl<'a> Iterator for FrameWalker<'a> {
    type Item = Result<Frame<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_frame() {
            Ok(Some(frame)) => {
                trace!(
                    "frame {} at {}: {} bytes, flags {:#06x}",
                    frame.id_str(),
                    frame.offset,
                    frame.size,
                    frame.flags
                );
                Some(Ok(frame))
            }
            Ok(None) => {
                trace!("end of frames at {}", self.cursor.position());
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Validate the header, skip any extended header, and return a walker
/// positioned on the first frame.
pub fn walk(data: &[u8]) -> Result<(TagHeader, FrameWalker<'_>)> {
    let mut cursor = ByteCursor::new(data);
    let header = TagHeader::read(&mut cursor)?;
    debug!(
        "ID3v{} tag: flags {:#010b}, declared size {}",
        header.version, header.flags, header.size
    );

    if header.has_extended_header() {
        let skipped = skip_extended_header(&mut cursor)?;
        debug!("skipped {} byte extended header", skipped);
    }

    Ok((header, FrameWalker::new(cursor)))
}
