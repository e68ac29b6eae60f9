// CLI module for id3album
//
// Command-line front end over the library: argument parsing, the subcommands,
// and output formatting.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::run;
pub use config::{Commands, Config, OutputFormat};

// Error type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    FileNotFound(String),
    IoError(std::io::Error),
    TagError(id3album::Id3Error),
    ImageError(image::ImageError),
    ParseError(String),
    Other(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path),
            CliError::IoError(e) => write!(f, "I/O error: {}", e),
            CliError::TagError(e) => write!(f, "{}", e),
            CliError::ImageError(e) => write!(f, "Image error: {}", e),
            CliError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CliError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError(e) => Some(e),
            CliError::TagError(e) => Some(e),
            CliError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::IoError(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::ParseError(e.to_string())
    }
}

impl From<id3album::Id3Error> for CliError {
    fn from(e: id3album::Id3Error) -> Self {
        CliError::TagError(e)
    }
}

impl From<image::ImageError> for CliError {
    fn from(e: image::ImageError) -> Self {
        CliError::ImageError(e)
    }
}
