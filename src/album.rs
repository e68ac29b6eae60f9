// Album metadata record

use image::DynamicImage;

use crate::id3::frames::{AttachedPicture, PictureType};

/// Placeholder cover shipped with the crate, PNG encoded.
pub const DEFAULT_COVER_PNG: &[u8] = include_bytes!("../assets/default-cover.png");

/// Where an album's cover came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverSource {
    /// Decoded from an APIC frame.
    Embedded,
    /// The bundled placeholder.
    #[default]
    Default,
}

/// Descriptive fields of the APIC frame an embedded cover came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureInfo {
    pub mime_type: String,
    pub picture_type: PictureType,
    pub description: String,
}

impl From<&AttachedPicture<'_>> for PictureInfo {
    fn from(picture: &AttachedPicture<'_>) -> Self {
        PictureInfo {
            mime_type: picture.mime_type.clone(),
            picture_type: picture.picture_type,
            description: picture.description.clone(),
        }
    }
}

/// Title, artist and cover read from a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub artist: String,
    pub title: String,
    pub cover: DynamicImage,
    pub cover_source: CoverSource,
    /// Set only for [`CoverSource::Embedded`].
    pub picture: Option<PictureInfo>,
}

impl Album {
    /// An album with empty text fields and the default cover.
    pub fn new() -> Self {
        Self::from_parts(String::new(), String::new(), None)
    }

    /// Assemble an album, decoding the default cover only when no embedded one is given.
    pub fn from_parts(
        artist: String,
        title: String,
        embedded: Option<(DynamicImage, PictureInfo)>,
    ) -> Self {
        let (cover, cover_source, picture) = match embedded {
            Some((cover, info)) => (cover, CoverSource::Embedded, Some(info)),
            None => (default_cover(), CoverSource::Default, None),
        };
        Album {
            artist,
            title,
            cover,
            cover_source,
            picture,
        }
    }

    pub fn has_embedded_cover(&self) -> bool {
        self.cover_source == CoverSource::Embedded
    }
}

impl Default for Album {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the bundled placeholder cover.
pub fn default_cover() -> DynamicImage {
    match image::load_from_memory_with_format(DEFAULT_COVER_PNG, image::ImageFormat::Png) {
        Ok(img) => img,
        // Only reachable if the bundled asset is corrupt.
        Err(_) => DynamicImage::new_rgb8(1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cover_is_the_bundled_png() {
        let img = default_cover();
        assert_eq!((img.width(), img.height()), (64, 64));
        let direct = image::load_from_memory(DEFAULT_COVER_PNG).unwrap();
        assert_eq!(img, direct);
    }

    #[test]
    fn new_album_is_empty_with_default_cover() {
        let album = Album::default();
        assert!(album.title.is_empty());
        assert!(album.artist.is_empty());
        assert!(!album.has_embedded_cover());
        assert!(album.picture.is_none());
        assert_eq!(album.cover, default_cover());
    }

    #[test]
    fn embedded_parts_keep_picture_info() {
        let info = PictureInfo {
            mime_type: "image/png".to_string(),
            picture_type: PictureType::CoverBack,
            description: "back".to_string(),
        };
        let album = Album::from_parts(
            "a".to_string(),
            "t".to_string(),
            Some((DynamicImage::new_rgba8(2, 3), info.clone())),
        );
        assert!(album.has_embedded_cover());
        assert_eq!(album.cover.width(), 2);
        assert_eq!(album.picture, Some(info));
    }
}
