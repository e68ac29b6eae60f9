// ID3 frame content extractors

use image::DynamicImage;

use super::v2::Frame;
use crate::error::{Id3Error, Result};
use crate::options::TextMode;
use crate::utils::encoding::{self, TextEncoding};
use crate::utils::io::find_nul;

/// Frame identifiers the album reader understands
pub mod frame_ids {
    pub const TITLE: [u8; 4] = *b"TIT2"; // Title/songname/content description
    pub const ARTIST: [u8; 4] = *b"TPE1"; // Lead performer(s)/Soloist(s)
    pub const PICTURE: [u8; 4] = *b"APIC"; // Attached picture
}

/// Text of a `T***` frame.
///
/// In [`TextMode::Verbatim`] the first (encoding) and last (terminator) bytes
/// are dropped and nothing else is interpreted.
pub fn extract_text(frame: &Frame<'_>, mode: TextMode) -> Result<String> {
    let body = frame.body;
    if body.len() < 2 {
        return Err(Id3Error::MalformedTextFrame {
            id: frame.id_str().into_owned(),
            len: body.len(),
        });
    }

    Ok(match mode {
        TextMode::Verbatim => encoding::decode_verbatim(&body[1..body.len() - 1]),
        TextMode::Declared => TextEncoding::from_byte(body[0]).decode(&body[1..]),
    })
}

/// APIC picture types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureType {
    Other = 0,
    FileIcon = 1,
    OtherFileIcon = 2,
    CoverFront = 3,
    CoverBack = 4,
    LeafletPage = 5,
    Media = 6,
    LeadArtist = 7,
    Artist = 8,
    Conductor = 9,
    Band = 10,
    Composer = 11,
    Lyricist = 12,
    RecordingLocation = 13,
    DuringRecording = 14,
    DuringPerformance = 15,
    VideoScreenCapture = 16,
    BrightColouredFish = 17,
    Illustration = 18,
    BandLogo = 19,
    PublisherLogo = 20,
}

impl PictureType {
    pub fn from_byte(value: u8) -> Self {
        match value {
            1 => PictureType::FileIcon,
            2 => PictureType::OtherFileIcon,
            3 => PictureType::CoverFront,
            4 => PictureType::CoverBack,
            5 => PictureType::LeafletPage,
            6 => PictureType::Media,
            7 => PictureType::LeadArtist,
            8 => PictureType::Artist,
            9 => PictureType::Conductor,
            10 => PictureType::Band,
            11 => PictureType::Composer,
            12 => PictureType::Lyricist,
            13 => PictureType::RecordingLocation,
            14 => PictureType::DuringRecording,
            15 => PictureType::DuringPerformance,
            16 => PictureType::VideoScreenCapture,
            17 => PictureType::BrightColouredFish,
            18 => PictureType::Illustration,
            19 => PictureType::BandLogo,
            20 => PictureType::PublisherLogo,
            _ => PictureType::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PictureType::Other => "Other",
            PictureType::FileIcon => "File Icon",
            PictureType::OtherFileIcon => "Other File Icon",
            PictureType::CoverFront => "Cover (front)",
            PictureType::CoverBack => "Cover (back)",
            PictureType::LeafletPage => "Leaflet page",
            PictureType::Media => "Media",
            PictureType::LeadArtist => "Lead artist",
            PictureType::Artist => "Artist",
            PictureType::Conductor => "Conductor",
            PictureType::Band => "Band",
            PictureType::Composer => "Composer",
            PictureType::Lyricist => "Lyricist",
            PictureType::RecordingLocation => "Recording Location",
            PictureType::DuringRecording => "During recording",
            PictureType::DuringPerformance => "During performance",
            PictureType::VideoScreenCapture => "Video screen capture",
            PictureType::BrightColouredFish => "Bright coloured fish",
            PictureType::Illustration => "Illustration",
            PictureType::BandLogo => "Band logo",
            PictureType::PublisherLogo => "Publisher logo",
        }
    }
}

/// Decoded APIC sub-structure, borrowing from the frame body.
///
/// ```text
/// Text encoding   $xx
/// MIME type       <text string> $00
/// Picture type    $xx
/// Description     <text string according to encoding> $00
/// Picture data    <binary data>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedPicture<'a> {
    pub encoding: TextEncoding,
    pub mime_type: String,
    pub picture_type: PictureType,
    pub description: String,
    pub data: &'a [u8],
}

impl<'a> AttachedPicture<'a> {
    /// Locate the picture data inside an APIC body.
    ///
    /// Both NUL scans are confined to the body.
    pub fn parse(body: &'a [u8]) -> Result<Self> {
        let encoding_byte = *body
            .first()
            .ok_or(Id3Error::MalformedPictureFrame("missing text encoding"))?;
        let encoding = TextEncoding::from_byte(encoding_byte);

        let mime_start = 1;
        let mime_end = mime_start
            + find_nul(&body[mime_start..])
                .ok_or(Id3Error::MalformedPictureFrame("unterminated MIME type"))?;

        let type_pos = mime_end + 1;
        let picture_type = *body
            .get(type_pos)
            .ok_or(Id3Error::MalformedPictureFrame("missing picture type"))?;

        let desc_start = type_pos + 1;
        let desc_end = desc_start
            + find_nul(&body[desc_start..])
                .ok_or(Id3Error::MalformedPictureFrame("unterminated description"))?;

        Ok(AttachedPicture {
            encoding,
            mime_type: TextEncoding::Iso8859_1.decode(&body[mime_start..mime_end]),
            picture_type: PictureType::from_byte(picture_type),
            description: encoding.decode(&body[desc_start..desc_end]),
            data: &body[desc_end + 1..],
        })
    }

    /// Decode the picture data, sniffing the format from its content.
    pub fn decode(&self) -> Result<DynamicImage> {
        image::load_from_memory(self.data).map_err(Id3Error::MalformedPictureData)
    }
}

/// Parse the APIC structure of `frame`.
pub fn extract_picture<'a>(frame: &Frame<'a>) -> Result<AttachedPicture<'a>> {
    AttachedPicture::parse(frame.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame<'a>(id: &[u8; 4], body: &'a [u8]) -> Frame<'a> {
        Frame {
            id: *id,
            size: body.len() as u32,
            flags: 0,
            offset: 0,
            body,
        }
    }

    #[test]
    fn verbatim_text_strips_first_and_last_byte() {
        let body = b"\x00They Live By Night\x00";
        let text = extract_text(&frame(b"TIT2", body), TextMode::Verbatim).unwrap();
        assert_eq!(text, "They Live By Night");

        // Whatever the last byte is, it goes.
        let text = extract_text(&frame(b"TPE1", b"\x03Soft Tagsx"), TextMode::Verbatim).unwrap();
        assert_eq!(text, "Soft Tags");

        let text = extract_text(&frame(b"TPE1", b"\x00\x00"), TextMode::Verbatim).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn declared_text_uses_the_encoding_byte() {
        let body = [1, 0xFF, 0xFE, b'S', 0, b'T', 0, 0, 0];
        let text = extract_text(&frame(b"TPE1", &body), TextMode::Declared).unwrap();
        assert_eq!(text, "ST");

        let text = extract_text(&frame(b"TIT2", b"\x00Caf\xe9\x00"), TextMode::Declared).unwrap();
        assert_eq!(text, "Café");
    }

    #[test]
    fn short_text_body_is_malformed() {
        for body in [&b""[..], &b"\x00"[..]] {
            match extract_text(&frame(b"TIT2", body), TextMode::Verbatim) {
                Err(Id3Error::MalformedTextFrame { id, len }) => {
                    assert_eq!(id, "TIT2");
                    assert_eq!(len, body.len());
                }
                other => panic!("expected MalformedTextFrame, got {:?}", other),
            }
        }
    }

    #[test]
    fn apic_fields_are_located() {
        let body = b"\x00image/png\x00\x03front\x00\x89PNG-ish";
        let picture = extract_picture(&frame(b"APIC", body)).unwrap();
        assert_eq!(picture.encoding, TextEncoding::Iso8859_1);
        assert_eq!(picture.mime_type, "image/png");
        assert_eq!(picture.picture_type, PictureType::CoverFront);
        assert_eq!(picture.picture_type.label(), "Cover (front)");
        assert_eq!(picture.description, "front");
        assert_eq!(picture.data, b"\x89PNG-ish");
    }

    #[test]
    fn empty_mime_and_description_are_fine() {
        let picture = AttachedPicture::parse(b"\x00\x00\x00\x00data").unwrap();
        assert_eq!(picture.mime_type, "");
        assert_eq!(picture.picture_type, PictureType::Other);
        assert_eq!(picture.data, b"data");
    }

    #[test]
    fn apic_structure_errors() {
        let cases: [(&[u8], &str); 4] = [
            (b"", "missing text encoding"),
            (b"\x00image/jpeg", "unterminated MIME type"),
            (b"\x00image/jpeg\x00", "missing picture type"),
            (b"\x00image/jpeg\x00\x03no terminator", "unterminated description"),
        ];
        for (body, reason) in cases {
            match AttachedPicture::parse(body) {
                Err(Id3Error::MalformedPictureFrame(r)) => assert_eq!(r, reason),
                other => panic!("expected MalformedPictureFrame, got {:?}", other),
            }
        }
    }

    #[test]
    fn undecodable_data_is_reported() {
        let picture = AttachedPicture::parse(b"\x00image/png\x00\x03\x00not an image").unwrap();
        assert!(matches!(picture.decode(), Err(Id3Error::MalformedPictureData(_))));
    }
}
