use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::record::SequenceFeatures;
use crate::extract::extract_features;
use crate::merge;
use crate::output;
use crate::parsing::fastq::{is_fastq_file, read_fastq_file};
use crate::parsing::tabular::{read_csv_file, read_tsv_file};

#[derive(Args)]
pub struct MergeArgs {
    /// Directory containing FASTQ files (.fastq, .fq, optionally .gz)
    #[arg(long)]
    pub fastq_dir: Option<PathBuf>,

    /// FAOSTAT-style CSV export
    #[arg(long)]
    pub faostat: Option<PathBuf>,

    /// Tab-delimited sample mapping file
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = "merged_training_data.csv")]
    pub output: PathBuf,
}

/// Execute merge subcommand.
///
/// Per-file read failures are logged and skipped; the run fails only when no
/// source yielded any records at all.
///
/// # Errors
///
/// Returns an error when every input source is empty, or when the output
/// file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MergeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let features = match &args.fastq_dir {
        Some(dir) => collect_features(dir),
        None => Vec::new(),
    };

    let agricultural = match &args.faostat {
        Some(path) => read_csv_file(path)?,
        None => Vec::new(),
    };

    let mapping = match &args.mapping {
        Some(path) => read_tsv_file(path)?,
        None => Vec::new(),
    };

    if verbose {
        eprintln!(
            "Collected {} reads, {} statistics rows, {} mapping rows",
            features.len(),
            agricultural.len(),
            mapping.len()
        );
    }

    let merged = merge::merge(&features, &agricultural, &mapping)?;

    let file = File::create(&args.output)?;
    let mut writer = BufWriter::new(file);
    output::write_merged_csv(&mut writer, &merged.records)?;
    writer.flush()?;
    info!(
        "wrote {} records to {}",
        merged.records.len(),
        args.output.display()
    );

    match format {
        OutputFormat::Text => print!("{}", output::summary_text(&merged.summary)),
        OutputFormat::Json => println!("{}", output::summary_json(&merged.summary)?),
    }

    Ok(())
}

/// Scan a directory for FASTQ files and extract features from each.
///
/// Files are processed in name order for deterministic output. A file that
/// fails to read is logged and skipped; the remaining files still contribute.
fn collect_features(dir: &Path) -> Vec<SequenceFeatures> {
    let mut paths: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| is_fastq_file(p))
            .collect(),
        Err(e) => {
            warn!("cannot read FASTQ directory {}: {e}", dir.display());
            return Vec::new();
        }
    };
    paths.sort();

    let mut features = Vec::new();
    for path in &paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match read_fastq_file(path) {
            Ok(records) => {
                info!("parsed {} records from {file_name}", records.len());
                for (i, record) in records.iter().enumerate() {
                    features.push(extract_features(record, i as u64 + 1, &file_name));
                }
            }
            Err(e) => {
                warn!("skipping {file_name}: {e}");
            }
        }
    }
    features
}
