//! # seqfuse
//!
//! A library for extracting per-read features from FASTQ files and merging
//! them with tabular sample metadata into one flat training table.
//!
//! Sequencing runs often arrive as a directory of FASTQ files plus loose
//! spreadsheets: a tab-delimited sample mapping (sample names, barcodes,
//! platform) and statistics exported as CSV. `seqfuse` turns that pile into a
//! single analysis-ready CSV with a fixed superset schema.
//!
//! ## Pipeline
//!
//! 1. Parse FASTQ-style 4-line records (plain or gzip-compressed), one file
//!    at a time, tolerating truncated or malformed records.
//! 2. Compute per-read features: length, GC content, base composition, mean
//!    Phred+33 quality, distinct 3-mer complexity.
//! 3. Ingest the CSV/TSV side tables, header-row driven.
//! 4. Merge everything into one ordered record stream with a summary report.
//!
//! ## Example
//!
//! ```rust
//! use seqfuse::extract::extract_features;
//! use seqfuse::core::record::RawRecord;
//! use seqfuse::merge;
//!
//! let read = RawRecord {
//!     header: "read_1".to_string(),
//!     sequence: "GATTACA".to_string(),
//!     separator: "+".to_string(),
//!     quality: "IIIIIII".to_string(),
//! };
//! let features = extract_features(&read, 1, "sample.fastq");
//! let output = merge::merge(&[features], &[], &[]).unwrap();
//! assert_eq!(output.summary.sequence_records, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for reads, features, rows, and merged records
//! - [`extract`]: Pure per-read feature extraction
//! - [`parsing`]: FASTQ, CSV, and TSV parsers
//! - [`merge`]: Record merging, identity matching, and summary statistics
//! - [`output`]: CSV writing and summary reports
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod extract;
pub mod merge;
pub mod output;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::merged::MergedRecord;
pub use core::record::{BaseCounts, RawRecord, SequenceFeatures};
pub use core::row::TabularRow;
pub use core::types::DataType;
pub use merge::{MergeError, MergeOutput, MergeSummary};
