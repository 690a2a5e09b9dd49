use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::merged::MergedRecord;
use crate::core::types::DataType;

/// Aggregate statistics over one merge pass.
///
/// Means are computed over sequence-derived records only and are 0 when
/// there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub total_records: usize,
    pub sequence_records: usize,
    pub agricultural_records: usize,
    /// Mean read length, 2 decimals
    pub mean_sequence_length: f64,
    /// Mean GC percentage, 2 decimals
    pub mean_gc_content: f64,
    /// Distinct non-empty source file names
    pub distinct_source_files: usize,
}

impl MergeSummary {
    #[must_use]
    pub fn calculate(records: &[MergedRecord]) -> Self {
        let mut sequence_records = 0usize;
        let mut length_sum = 0u64;
        let mut gc_sum = 0.0f64;
        let mut sources: HashSet<&str> = HashSet::new();

        for record in records {
            if record.data_type == DataType::GenomicSequence {
                sequence_records += 1;
                length_sum += record.length;
                gc_sum += record.gc_content;
                if !record.source_file.is_empty() {
                    sources.insert(record.source_file.as_str());
                }
            }
        }

        let (mean_sequence_length, mean_gc_content) = if sequence_records == 0 {
            (0.0, 0.0)
        } else {
            let n = count_to_f64(sequence_records as u64);
            (round2(count_to_f64(length_sum) / n), round2(gc_sum / n))
        };

        Self {
            total_records: records.len(),
            sequence_records,
            agricultural_records: records.len() - sequence_records,
            mean_sequence_length,
            mean_gc_content,
            distinct_source_files: sources.len(),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}
