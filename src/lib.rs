//! id3album - read title, artist and cover art from ID3v2.3/2.4 tags.
//!
//! The parser works on the complete file contents held in memory:
//!
//! ```no_run
//! let data = std::fs::read("song.mp3")?;
//! let album = id3album::parse(&data)?;
//! println!("{} - {}", album.artist, album.title);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every call builds its own [`Album`]; nothing is shared between calls, so
//! independent buffers can be parsed from several threads at once.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

pub mod album;
pub mod error;
pub mod id3;
pub mod options;
pub mod utils;

pub use album::{default_cover, Album, CoverSource, PictureInfo, DEFAULT_COVER_PNG};
pub use error::{Id3Error, Result};
pub use id3::frames::{frame_ids, AttachedPicture, PictureType};
pub use id3::v2::{Frame, FrameWalker, TagHeader, TagVersion};
pub use options::{ParseOptions, TextMode};

use id3::frames::{extract_picture, extract_text};

/// Parse a tag with the default options.
pub fn parse(data: &[u8]) -> Result<Album> {
    parse_with(data, &ParseOptions::default())
}

/// Parse a tag from the start of `data`.
///
/// Stops at the first error. Frames other than title, artist and picture are
/// skipped; if a recognised frame occurs twice the later one wins.
pub fn parse_with(data: &[u8], options: &ParseOptions) -> Result<Album> {
    let (header, walker) = id3::v2::walk(data)?;
    let mut title = String::new();
    let mut artist = String::new();
    let mut embedded = None;
    let mut visited = 0usize;

    for frame in walker {
        let frame = frame?;
        visited += 1;
        match frame.id {
            frame_ids::TITLE => title = extract_text(&frame, options.text_mode)?,
            frame_ids::ARTIST => artist = extract_text(&frame, options.text_mode)?,
            frame_ids::PICTURE => {
                let picture = extract_picture(&frame)?;
                match picture.decode() {
                    Ok(cover) => embedded = Some((cover, PictureInfo::from(&picture))),
                    Err(e) if options.fallback_cover => {
                        debug!("using default cover, APIC at {} unusable: {}", frame.offset, e);
                        embedded = None;
                    }
                    Err(e) => return Err(e),
                }
            }
            _ => {}
        }
    }

    let album = Album::from_parts(artist, title, embedded);
    debug!(
        "ID3v{} tag: {} frames, cover {:?}",
        header.version, visited, album.cover_source
    );
    Ok(album)
}

/// Read `reader` to the end, then parse it.
pub fn parse_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Album> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_with(&data, options)
}

/// Parse the tag of the file at `path`.
pub fn parse_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Album> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    parse_reader(File::open(path)?, options)
}

/// Validate only the 10-byte tag header.
pub fn read_header(data: &[u8]) -> Result<TagHeader> {
    TagHeader::parse(data)
}

/// Validate the header and enumerate the frames of the tag in `data`.
pub fn frames(data: &[u8]) -> Result<(TagHeader, FrameWalker<'_>)> {
    id3::v2::walk(data)
}
