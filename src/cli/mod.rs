//! Command-line interface for seqfuse.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **merge**: Run the full pipeline over a FASTQ directory plus side tables
//! - **features**: Extract per-read features from FASTQ files
//! - **tabular**: Inspect the shape of one CSV/TSV file
//!
//! ## Usage
//!
//! ```text
//! # Full merge into one training CSV
//! seqfuse merge --fastq-dir reads/ --faostat faostat.csv \
//!     --mapping mapping.tsv --output merged_training_data.csv
//!
//! # Per-read features as JSON
//! seqfuse features sample.fastq.gz --format json
//!
//! # Quick look at a side table
//! seqfuse tabular mapping.tsv
//! ```

use clap::{Parser, Subcommand};

pub mod features;
pub mod merge;
pub mod tabular;

#[derive(Parser)]
#[command(name = "seqfuse")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract FASTQ read features and merge them with tabular sample metadata")]
#[command(
    long_about = "seqfuse turns a directory of FASTQ files plus loose spreadsheets (a tab-delimited sample mapping and a FAOSTAT-style CSV export) into one flat, analysis-ready CSV.\n\nPer-read features (length, GC content, base composition, mean quality, 3-mer complexity) are matched against the sample mapping by best-effort identity matching; statistics rows are carried alongside under a shared superset schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge FASTQ features with mapping and statistics tables
    Merge(merge::MergeArgs),

    /// Extract per-read features from FASTQ files
    Features(features::FeaturesArgs),

    /// Inspect a CSV/TSV file: columns, row count, sample rows
    Tabular(tabular::TabularArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
