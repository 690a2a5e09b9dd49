//! Streaming parser for FASTQ-style 4-line records.
//!
//! Supports plain and gzip-compressed files (`.fastq`, `.fq`, `.fastq.gz`,
//! `.fq.gz`). The parser is deliberately permissive: it groups every 4
//! non-blank lines positionally, and a partial record at end-of-file is still
//! emitted with empty strings for the missing lines. Malformed records never
//! raise; validation is not this layer's job.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::warn;

use crate::core::record::RawRecord;
use crate::parsing::ParseError;

/// Check if the path has a FASTQ extension (plain or gzipped)
#[must_use]
pub fn is_fastq_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    if path_str.ends_with(".fastq.gz") || path_str.ends_with(".fq.gz") {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fastq" | "fq")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Lazy, finite, non-restartable stream of [`RawRecord`]s.
///
/// One reader owns one pass over one source; re-reading requires re-opening
/// the source. There is no parser state shared across files.
pub struct FastqReader<R: BufRead> {
    reader: R,
    line_buf: String,
    finished: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_buf: String::with_capacity(256),
            finished: false,
        }
    }

    /// Read the next non-blank line, stripped of its line ending.
    /// Returns `Ok(None)` at end-of-stream.
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        loop {
            self.line_buf.clear();
            let n = self.reader.read_line(&mut self.line_buf)?;
            if n == 0 {
                return Ok(None);
            }
            let line = self.line_buf.trim_end_matches(['\n', '\r']);
            if !line.trim().is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<RawRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut lines: Vec<String> = Vec::with_capacity(4);
        while lines.len() < 4 {
            match self.next_line() {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => {
                    self.finished = true;
                    break;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }

        if lines.is_empty() {
            return None;
        }

        // Positional roles: header, sequence, separator, quality. A partial
        // group at EOF keeps whatever lines it has.
        let mut lines = lines.into_iter();
        let raw_header = lines.next().unwrap_or_default();
        let header = raw_header
            .strip_prefix('@')
            .map(str::to_string)
            .unwrap_or(raw_header);

        Some(Ok(RawRecord {
            header,
            sequence: lines.next().unwrap_or_default(),
            separator: lines.next().unwrap_or_default(),
            quality: lines.next().unwrap_or_default(),
        }))
    }
}

/// Read all records from a FASTQ file, decompressing by extension.
///
/// A missing file is treated as an empty source and logged, matching the
/// pipeline's degrade-gracefully posture.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file exists but cannot be read.
pub fn read_fastq_file(path: &Path) -> Result<Vec<RawRecord>, ParseError> {
    if !path.exists() {
        warn!("FASTQ file not found, treating as empty: {}", path.display());
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    FastqReader::from_reader(reader).collect()
}
