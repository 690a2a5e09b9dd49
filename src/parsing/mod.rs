//! Parsers for the three input formats: FASTQ reads, comma-delimited
//! statistics exports, and tab-delimited sample mappings.
//!
//! All parsers share the same failure posture: a missing input file yields an
//! empty result (logged, non-fatal), and malformed content degrades to
//! empty/default fields rather than raising. Only I/O failures mid-read
//! surface as errors.

use thiserror::Error;

pub mod fastq;
pub mod tabular;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
