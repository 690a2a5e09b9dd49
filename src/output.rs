//! CSV writing for the merged table and text/JSON summary reports.
//!
//! The output schema is a fixed superset across both record kinds so one
//! flat file covers the whole merge. Quoting is minimal: a value is quoted
//! only when it contains a comma, quote, or newline, with internal quotes
//! doubled. Output is byte-identical across runs on identical inputs.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::core::merged::MergedRecord;
use crate::merge::MergeSummary;

/// Column order of the merged CSV
pub const MERGED_COLUMNS: [&str; 26] = [
    "record_id",
    "data_type",
    "sequence_id",
    "header",
    "source_file",
    "length",
    "gc_content",
    "a_count",
    "t_count",
    "g_count",
    "c_count",
    "n_count",
    "avg_quality",
    "complexity",
    "has_ambiguous",
    "sample_name",
    "barcode",
    "platform",
    "run_id",
    "lane",
    "area",
    "item",
    "element",
    "year",
    "value",
    "unit",
];

/// Quote a CSV value only when it needs it; internal quotes are doubled
#[must_use]
pub fn escape_csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn record_fields(record: &MergedRecord) -> Vec<String> {
    vec![
        record.record_id.to_string(),
        record.data_type.as_str().to_string(),
        record.sequence_id.to_string(),
        record.header.clone(),
        record.source_file.clone(),
        record.length.to_string(),
        format!("{:.2}", record.gc_content),
        record.a_count.to_string(),
        record.t_count.to_string(),
        record.g_count.to_string(),
        record.c_count.to_string(),
        record.n_count.to_string(),
        format!("{:.2}", record.avg_quality),
        record.complexity.to_string(),
        record.has_ambiguous.to_string(),
        record.sample_name.clone(),
        record.barcode.clone(),
        record.platform.clone(),
        record.run_id.clone(),
        record.lane.clone(),
        record.area.clone(),
        record.item.clone(),
        record.element.clone(),
        record.year.clone(),
        record.value.clone(),
        record.unit.clone(),
    ]
}

/// Write the merged table as CSV, header row first.
///
/// # Errors
///
/// Returns `io::Error` if the underlying writer fails.
pub fn write_merged_csv<W: Write>(writer: &mut W, records: &[MergedRecord]) -> io::Result<()> {
    writeln!(writer, "{}", MERGED_COLUMNS.join(","))?;
    for record in records {
        let fields = record_fields(record);
        let line: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_csv_field(f)).collect();
        writeln!(writer, "{}", line.join(","))?;
    }
    Ok(())
}

/// Render the summary as an aligned key/value text block
#[must_use]
pub fn summary_text(summary: &MergeSummary) -> String {
    format!(
        "Merge summary\n\
         \x20 Total records:          {}\n\
         \x20 Sequence records:       {}\n\
         \x20 Agricultural records:   {}\n\
         \x20 Mean sequence length:   {:.2}\n\
         \x20 Mean GC content:        {:.2}\n\
         \x20 Distinct source files:  {}\n",
        summary.total_records,
        summary.sequence_records,
        summary.agricultural_records,
        summary.mean_sequence_length,
        summary.mean_gc_content,
        summary.distinct_source_files,
    )
}

/// Render the summary as pretty-printed JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn summary_json(summary: &MergeSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
