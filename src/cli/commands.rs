// CLI command implementations
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use id3album::{ParseOptions, Result as TagResult};
use image::ImageFormat;
use log::info;

use crate::cli::output::{AlbumReport, HeaderReport, OutputFormatter};
use crate::cli::{CliError, CliResult, Commands, Config};

/// Dispatch the parsed command line
pub fn run(config: &Config) -> CliResult<()> {
    let formatter = OutputFormatter::new(config.format, config.quiet);
    let options = config.parse_options();

    match &config.command {
        Commands::Read {
            files,
            output,
            embed_cover,
        } => command_read(files, output.as_deref(), *embed_cover, &options, &formatter),
        Commands::Detect { files } => command_detect(files, &formatter),
        Commands::Cover { file, output } => command_cover(file, output, &options, &formatter),
        Commands::Batch { directory, pattern } => {
            command_batch(directory, pattern, &options, &formatter)
        }
    }
}

/// Read metadata from files
pub fn command_read(
    files: &[String],
    output: Option<&str>,
    embed_cover: bool,
    options: &ParseOptions,
    formatter: &OutputFormatter,
) -> CliResult<()> {
    if files.is_empty() {
        return Err(CliError::Other("No files specified".to_string()));
    }

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        let file = File::create(path)?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(std::io::stdout())
    };

    for file_path in files {
        if !Path::new(file_path).exists() {
            formatter.print_error(&format!("File not found: {}", file_path));
            continue;
        }

        match id3album::parse_file(file_path, options) {
            Ok(album) => {
                let report = AlbumReport::new(file_path, &album, embed_cover)?;
                formatter.output(&report, &mut *writer)?;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Validate headers and list frames
pub fn command_detect(files: &[String], formatter: &OutputFormatter) -> CliResult<()> {
    if files.is_empty() {
        return Err(CliError::Other("No files specified".to_string()));
    }

    let mut stdout = std::io::stdout();
    for file_path in files {
        if !Path::new(file_path).exists() {
            formatter.print_error(&format!("File not found: {}", file_path));
            continue;
        }

        let data = std::fs::read(file_path)?;
        match detect(&data) {
            Ok((header, frames)) => {
                let report = HeaderReport::new(file_path, &header, frames);
                formatter.output(&report, &mut stdout)?;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
            }
        }
    }

    Ok(())
}

fn detect(data: &[u8]) -> TagResult<(id3album::TagHeader, Vec<String>)> {
    let (header, walker) = id3album::frames(data)?;
    let frames = walker
        .map(|frame| frame.map(|f| f.id_str().into_owned()))
        .collect::<TagResult<Vec<_>>>()?;
    Ok((header, frames))
}

/// Export the album cover as PNG
pub fn command_cover(
    file: &str,
    output: &str,
    options: &ParseOptions,
    formatter: &OutputFormatter,
) -> CliResult<()> {
    if !Path::new(file).exists() {
        return Err(CliError::FileNotFound(file.to_string()));
    }

    let album = id3album::parse_file(file, options)?;
    album.cover.save_with_format(output, ImageFormat::Png)?;

    let source = if album.has_embedded_cover() {
        "embedded"
    } else {
        "default"
    };
    formatter.print_success(&format!("Wrote {} cover of {} to {}", source, file, output));
    Ok(())
}

/// Batch process directory
pub fn command_batch(
    directory: &str,
    pattern: &str,
    options: &ParseOptions,
    formatter: &OutputFormatter,
) -> CliResult<()> {
    use glob::glob;

    // Build glob pattern
    let glob_pattern = if pattern.contains('/') {
        format!("{}/{}", directory, pattern)
    } else {
        format!("{}/**/{}", directory, pattern)
    };

    let mut files: Vec<String> = Vec::new();
    for entry in glob(&glob_pattern)
        .map_err(|e| CliError::Other(format!("Invalid glob pattern: {}", e)))?
    {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    if let Some(path_str) = path.to_str() {
                        files.push(path_str.to_string());
                    }
                }
            }
            Err(e) => {
                formatter.print_error(&format!("Error reading path: {}", e));
            }
        }
    }

    let total = files.len();
    if total == 0 {
        formatter.print_info("No files found matching pattern");
        return Ok(());
    }

    info!("batch: {} files under {}", total, directory);
    formatter.print_info(&format!("Processing {} files...", total));

    let mut success_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        match id3album::parse_file(file_path, options) {
            Ok(album) => {
                formatter.print_success(&format!(
                    "{}: {} - {}",
                    file_path, album.artist, album.title
                ));
                success_count += 1;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
                error_count += 1;
            }
        }
    }

    formatter.print_info(&format!(
        "Completed: {} successful, {} errors",
        success_count, error_count
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(frames: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
        let mut data = vec![b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 0];
        for (id, body) in frames {
            data.extend_from_slice(*id);
            data.extend_from_slice(&(body.len() as u32).to_be_bytes());
            data.extend_from_slice(&[0, 0]);
            data.extend_from_slice(body);
        }
        data.extend_from_slice(&[0; 4]);
        data
    }

    #[test]
    fn detect_lists_frame_ids_in_order() {
        let data = tag(&[
            (b"TIT2", &b"\0a\0"[..]),
            (b"TALB", &b"\0b\0"[..]),
            (b"TPE1", &b"\0c\0"[..]),
        ]);
        let (header, frames) = detect(&data).unwrap();
        assert_eq!(header.version, id3album::TagVersion::V2_4);
        assert_eq!(frames, ["TIT2", "TALB", "TPE1"]);
    }

    #[test]
    fn detect_reports_walk_errors() {
        let mut data = tag(&[(b"TIT2", &b"\0a\0"[..])]);
        data.truncate(data.len() - 6);
        assert!(detect(&data).is_err());
    }

    #[test]
    fn read_without_files_fails() {
        let formatter = OutputFormatter::new(crate::cli::OutputFormat::Json, true);
        let result = command_read(&[], None, false, &ParseOptions::default(), &formatter);
        assert!(matches!(result, Err(CliError::Other(_))));
    }
}
