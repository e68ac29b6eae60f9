// Parse options

/// How text frame bodies are turned into strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Drop the encoding byte and the trailing terminator, keep the rest as UTF-8.
    #[default]
    Verbatim,
    /// Decode according to the encoding byte at the start of the body.
    Declared,
}

/// Knobs for [`crate::parse_with`]. The default reproduces [`crate::parse`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub text_mode: TextMode,
    /// Use the default cover when an APIC frame carries undecodable image data.
    pub fallback_cover: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = mode;
        self
    }

    pub fn fallback_cover(mut self, enabled: bool) -> Self {
        self.fallback_cover = enabled;
        self
    }
}
