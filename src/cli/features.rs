use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::SequenceFeatures;
use crate::extract::extract_features;
use crate::output::escape_csv_field;
use crate::parsing::fastq::read_fastq_file;

#[derive(Args)]
pub struct FeaturesArgs {
    /// FASTQ input files (.fastq, .fq, optionally .gz)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Execute features subcommand: extract per-read features and print them.
///
/// # Errors
///
/// Returns an error if an input file exists but cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FeaturesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut features: Vec<SequenceFeatures> = Vec::new();

    for path in &args.inputs {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let records = read_fastq_file(path)?;
        if verbose {
            eprintln!("Parsed {} records from {file_name}", records.len());
        }
        for (i, record) in records.iter().enumerate() {
            features.push(extract_features(record, i as u64 + 1, &file_name));
        }
    }

    match format {
        OutputFormat::Text => print_csv(&features),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&features)?),
    }

    Ok(())
}

fn print_csv(features: &[SequenceFeatures]) {
    println!(
        "sequence_id,header,source_file,length,gc_content,a_count,t_count,g_count,c_count,n_count,avg_quality,complexity,has_ambiguous"
    );
    for f in features {
        println!(
            "{},{},{},{},{:.2},{},{},{},{},{},{:.2},{},{}",
            f.sequence_id,
            escape_csv_field(&f.header),
            escape_csv_field(&f.source_file),
            f.length,
            f.gc_content,
            f.base_counts.a,
            f.base_counts.t,
            f.base_counts.g,
            f.base_counts.c,
            f.base_counts.n,
            f.avg_quality,
            f.complexity,
            f.has_ambiguous,
        );
    }
}
