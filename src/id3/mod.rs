// ID3v2 tag reading
pub mod frames;
pub mod v2;

pub use frames::AttachedPicture;
pub use v2::{FrameWalker, TagHeader};
