// Output formatting for CLI

use std::io::{Cursor, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use id3album::{Album, CoverSource, TagHeader};
use image::ImageFormat;
use serde::Serialize;

use crate::cli::{CliResult, OutputFormat};

/// What `read` reports for one file
#[derive(Debug, Serialize)]
pub struct AlbumReport {
    pub file: String,
    pub title: String,
    pub artist: String,
    pub cover_source: &'static str,
    pub cover_width: u32,
    pub cover_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_picture_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_png_base64: Option<String>,
}

impl AlbumReport {
    pub fn new(file: &str, album: &Album, embed_cover: bool) -> CliResult<Self> {
        let cover_png_base64 = if embed_cover {
            Some(STANDARD.encode(encode_png(album)?))
        } else {
            None
        };

        Ok(AlbumReport {
            file: file.to_string(),
            title: album.title.clone(),
            artist: album.artist.clone(),
            cover_source: match album.cover_source {
                CoverSource::Embedded => "embedded",
                CoverSource::Default => "default",
            },
            cover_width: album.cover.width(),
            cover_height: album.cover.height(),
            cover_mime_type: album.picture.as_ref().map(|p| p.mime_type.clone()),
            cover_picture_type: album.picture.as_ref().map(|p| p.picture_type.label()),
            cover_description: album.picture.as_ref().map(|p| p.description.clone()),
            cover_png_base64,
        })
    }
}

/// What `detect` reports for one file
#[derive(Debug, Serialize)]
pub struct HeaderReport {
    pub file: String,
    pub version: String,
    pub flags: String,
    pub extended_header: bool,
    pub declared_size: u32,
    pub frames: Vec<String>,
}

impl HeaderReport {
    pub fn new(file: &str, header: &TagHeader, frames: Vec<String>) -> Self {
        HeaderReport {
            file: file.to_string(),
            version: header.version.to_string(),
            flags: format!("{:#010b}", header.flags),
            extended_header: header.has_extended_header(),
            declared_size: header.size,
            frames,
        }
    }
}

/// PNG bytes of the album cover
pub fn encode_png(album: &Album) -> CliResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    album.cover.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Format and output data
pub struct OutputFormatter {
    format: OutputFormat,
    pub quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Serialize `report` and write it in the configured format
    pub fn output<T: Serialize>(&self, report: &T, writer: &mut dyn Write) -> CliResult<()> {
        let value = serde_json::to_value(report)?;
        self.output_value(&value, writer)
    }

    fn output_value(&self, value: &serde_json::Value, writer: &mut dyn Write) -> CliResult<()> {
        match self.format {
            OutputFormat::Pretty => {
                writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
            }
            OutputFormat::Json => {
                writeln!(writer, "{}", serde_json::to_string(value)?)?;
            }
            OutputFormat::KeyValue => {
                self.output_key_value(value, writer)?;
            }
            OutputFormat::Table => {
                self.output_table(value, writer)?;
            }
        }
        Ok(())
    }

    /// Output as key-value pairs
    fn output_key_value(&self, value: &serde_json::Value, writer: &mut dyn Write) -> CliResult<()> {
        if let Some(obj) = value.as_object() {
            let mut items: Vec<_> = obj.iter().collect();
            items.sort_by(|a, b| a.0.cmp(b.0));

            for (key, value) in items {
                writeln!(writer, "{}: {}", key, format_value(value))?;
            }
        }
        Ok(())
    }

    /// Output as table
    fn output_table(&self, value: &serde_json::Value, writer: &mut dyn Write) -> CliResult<()> {
        if let Some(obj) = value.as_object() {
            let max_key_len = obj.keys().map(|k| k.len()).max().unwrap_or(0);

            writeln!(writer, "{}", "=".repeat(max_key_len + 30))?;
            for (key, value) in obj {
                writeln!(
                    writer,
                    "{:<width$} {}",
                    format!("{}:", key),
                    format_value(value),
                    width = max_key_len + 1
                )?;
            }
            writeln!(writer, "{}", "=".repeat(max_key_len + 30))?;
        }
        Ok(())
    }

    /// Print success message
    pub fn print_success(&self, message: &str) {
        if !self.quiet {
            println!("✓ {}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            println!("  {}", message);
        }
    }
}

/// Format a JSON value for display
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "(null)".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Object(obj) => format!("{{{} items}}", obj.len()),
    }
}
