// Synthetic ID3v2 buffers for integration tests
#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

pub const TITLE: &str = "They Live By Night";
pub const ARTIST: &str = "Soft Tags";

/// Builds an ID3v2 tag followed by some fake audio bytes.
pub struct TagBuilder {
    version: u8,
    flags: u8,
    extended: Option<Vec<u8>>,
    frames: Vec<u8>,
    terminate: bool,
}

impl TagBuilder {
    pub fn new() -> Self {
        TagBuilder {
            version: 3,
            flags: 0,
            extended: None,
            frames: Vec::new(),
            terminate: true,
        }
    }

    pub fn version(mut self, major: u8) -> Self {
        self.version = major;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// Set the extended header flag and add an extended header carrying `payload`.
    pub fn extended_header(mut self, payload: &[u8]) -> Self {
        self.flags |= 0b0100_0000;
        self.extended = Some(payload.to_vec());
        self
    }

    pub fn frame(mut self, id: &[u8; 4], body: &[u8]) -> Self {
        self.frames.extend_from_slice(id);
        self.frames.extend_from_slice(&(body.len() as u32).to_be_bytes());
        self.frames.extend_from_slice(&[0, 0]);
        self.frames.extend_from_slice(body);
        self
    }

    /// A text frame with a leading ISO-8859-1 encoding byte and a NUL terminator.
    pub fn text(self, id: &[u8; 4], text: &str) -> Self {
        let mut body = vec![0u8];
        body.extend_from_slice(text.as_bytes());
        body.push(0);
        self.frame(id, &body)
    }

    pub fn picture(self, mime: &str, description: &str, data: &[u8]) -> Self {
        self.frame(b"APIC", &apic_body(mime, description, data))
    }

    /// Leave out the all-zero frame id that ends the frame list.
    pub fn without_sentinel(mut self) -> Self {
        self.terminate = false;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut body = Vec::new();
        if let Some(extended) = &self.extended {
            body.extend_from_slice(&(extended.len() as u32).to_be_bytes());
            body.extend_from_slice(extended);
        }
        body.extend_from_slice(&self.frames);
        if self.terminate {
            // Padding, the first four bytes act as the sentinel.
            body.extend_from_slice(&[0; 16]);
        }

        let mut data = vec![b'I', b'D', b'3', self.version, 0, self.flags];
        data.extend_from_slice(&synchsafe(body.len() as u32));
        data.extend(body);
        if self.terminate {
            // Start of an MPEG audio frame.
            data.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00]);
        }
        data
    }
}

pub fn apic_body(mime: &str, description: &str, data: &[u8]) -> Vec<u8> {
    let mut body = vec![0u8];
    body.extend_from_slice(mime.as_bytes());
    body.push(0);
    body.push(3); // front cover
    body.extend_from_slice(description.as_bytes());
    body.push(0);
    body.extend_from_slice(data);
    body
}

pub fn synchsafe(value: u32) -> [u8; 4] {
    [
        ((value >> 21) & 0x7F) as u8,
        ((value >> 14) & 0x7F) as u8,
        ((value >> 7) & 0x7F) as u8,
        (value & 0x7F) as u8,
    ]
}

/// A small gradient image, so every pixel differs from the default cover.
pub fn sample_image() -> DynamicImage {
    let img = RgbImage::from_fn(12, 8, |x, y| Rgb([(x * 20) as u8, (y * 30) as u8, 200]));
    DynamicImage::ImageRgb8(img)
}

pub fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

/// Tag with title and artist but no picture.
pub fn no_cover_tag() -> Vec<u8> {
    TagBuilder::new()
        .text(b"TIT2", TITLE)
        .text(b"TPE1", ARTIST)
        .build()
}
