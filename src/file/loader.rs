//! Document loading from files and stdin.
//!
//! Input is YAML (JSON included, as a YAML subset) and may be a
//! multi-document stream; one [`Document`] is produced per document, in
//! stream order. Files ending in `.gz` and stdin streams starting with the
//! gzip magic bytes decompress transparently.

use crate::document::parser::parse_yaml_documents;
use crate::document::tree::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a document stream from the filesystem.
///
/// Files whose name ends in `.gz` are decompressed before parsing.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid gzip despite
/// the `.gz` extension, or does not parse as YAML.
///
/// # Example
///
/// ```no_run
/// use yamldig::file::loader::load_file;
///
/// let documents = load_file("config.yaml").unwrap();
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path)?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?
    };

    parse_yaml_documents(&content)
        .with_context(|| format!("Failed to parse YAML from {}", path.display()))
}

/// Loads and parses a document stream from standard input.
///
/// Gzip-compressed input is detected by its magic bytes (`0x1f 0x8b`) and
/// decompressed before parsing, so piping a `.yaml.gz` file works without
/// flags.
pub fn load_stdin() -> Result<Vec<Document>> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 on stdin")?
    };

    parse_yaml_documents(&content).context("Failed to parse YAML from stdin")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let path = path.as_ref();
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open gzipped file: {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder.read_to_string(&mut content).with_context(|| {
        format!(
            "Failed to decompress {} - file may be corrupted",
            path.display()
        )
    })?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
