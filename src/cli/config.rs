// CLI configuration
use clap::{Parser, Subcommand, ValueEnum};
use id3album::{ParseOptions, TextMode};

/// id3album - read title, artist and cover art from MP3 tags
#[derive(Parser, Debug)]
#[command(name = "id3album")]
#[command(about = "Reads title, artist and cover art from ID3v2 tags", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging, overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Decode text frames according to their encoding byte
    #[arg(long, global = true)]
    pub declared_encoding: bool,

    /// Use the default cover when embedded image data cannot be decoded
    #[arg(long, global = true)]
    pub fallback_cover: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        let text_mode = if self.declared_encoding {
            TextMode::Declared
        } else {
            TextMode::Verbatim
        };
        ParseOptions::new()
            .text_mode(text_mode)
            .fallback_cover(self.fallback_cover)
    }

    /// Default log filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Output format for metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Pretty,
    /// Compact JSON
    Json,
    /// Key-value pairs
    KeyValue,
    /// Table format
    Table,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read title, artist and cover details from audio file(s)
    Read {
        /// Audio file path(s)
        #[arg(value_name = "FILE")]
        files: Vec<String>,

        /// Output to file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Include the cover as base64-encoded PNG
        #[arg(long)]
        embed_cover: bool,
    },

    /// Validate the tag header and list frame ids
    Detect {
        /// Audio file path(s)
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },

    /// Write the album cover (embedded or default) as PNG
    Cover {
        /// Audio file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Destination PNG path
        #[arg(short, long)]
        output: String,
    },

    /// Parse every matching file below a directory
    Batch {
        /// Directory path
        #[arg(value_name = "DIR")]
        directory: String,

        /// File pattern (e.g., "*.mp3")
        #[arg(short, long, default_value = "*.mp3")]
        pattern: String,
    },
}
