use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::row::TabularRow;
use crate::parsing::tabular::{read_csv_file, read_tsv_file};

#[derive(Args)]
pub struct TabularArgs {
    /// CSV or TSV file (detected by extension; default TSV)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Number of sample rows to show
    #[arg(short = 'n', long, default_value = "5")]
    pub sample_rows: usize,
}

/// Execute tabular subcommand: parse one delimited file and report its shape.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TabularArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let rows = if is_csv(&args.input) {
        read_csv_file(&args.input)?
    } else {
        read_tsv_file(&args.input)?
    };

    if verbose {
        eprintln!("Parsed {} rows from {}", rows.len(), args.input.display());
    }

    match format {
        OutputFormat::Text => print_text(&rows, args.sample_rows),
        OutputFormat::Json => print_json(&rows, args.sample_rows)?,
    }

    Ok(())
}

fn is_csv(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("csv")
    )
}

fn print_text(rows: &[TabularRow], sample_rows: usize) {
    println!("Rows: {}", rows.len());
    match rows.first() {
        Some(first) => {
            let columns: Vec<&str> = first.columns().collect();
            println!("Columns ({}): {}", columns.len(), columns.join(", "));
            for row in rows.iter().take(sample_rows) {
                let values: Vec<&str> = row.values().collect();
                println!("  {}", values.join(" | "));
            }
        }
        None => println!("Columns (0):"),
    }
}

fn print_json(rows: &[TabularRow], sample_rows: usize) -> anyhow::Result<()> {
    let columns: Vec<&str> = rows.first().map(|r| r.columns().collect()).unwrap_or_default();
    let sample: Vec<Vec<&str>> = rows
        .iter()
        .take(sample_rows)
        .map(|r| r.values().collect())
        .collect();

    let json = serde_json::json!({
        "rows": rows.len(),
        "columns": columns,
        "sample": sample,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
