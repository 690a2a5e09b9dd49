//! Pure per-read feature extraction.
//!
//! Every function here is deterministic and stateless: features depend only
//! on the record, its 1-based index within the file, and the file name.

use std::collections::HashSet;

use crate::core::record::{BaseCounts, RawRecord, SequenceFeatures};

/// K-mer length used for the complexity measure
pub const COMPLEXITY_K: usize = 3;

/// Phred quality offset (Sanger / Illumina 1.8+)
const PHRED_OFFSET: f64 = 33.0;

/// Compute all features for one read.
///
/// `sequence_id` is the 1-based position of the read within `source_file`,
/// reset per file.
#[must_use]
pub fn extract_features(record: &RawRecord, sequence_id: u64, source_file: &str) -> SequenceFeatures {
    let base_counts = base_counts(&record.sequence);
    let length = base_counts.total();

    SequenceFeatures {
        sequence_id,
        header: record.header.clone(),
        length,
        gc_content: gc_content(&base_counts, length),
        base_counts,
        avg_quality: avg_quality(&record.quality),
        complexity: complexity(&record.sequence),
        has_ambiguous: base_counts.n > 0,
        source_file: source_file.to_string(),
    }
}

/// Count bases case-sensitively; anything outside uppercase A/T/G/C counts
/// as N. Every character lands in exactly one bucket, so the total equals
/// the sequence length.
#[must_use]
pub fn base_counts(sequence: &str) -> BaseCounts {
    let mut counts = BaseCounts::default();
    for c in sequence.chars() {
        match c {
            'A' => counts.a += 1,
            'T' => counts.t += 1,
            'G' => counts.g += 1,
            'C' => counts.c += 1,
            _ => counts.n += 1,
        }
    }
    counts
}

/// G+C percentage over the full length, 0 for an empty sequence
fn gc_content(counts: &BaseCounts, length: u64) -> f64 {
    if length == 0 {
        return 0.0;
    }
    round2(100.0 * count_to_f64(counts.g + counts.c) / count_to_f64(length))
}

/// Mean Phred+33 quality over the quality string, 0 if empty.
///
/// Each character decodes as its code point minus 33; characters below the
/// offset (corrupt input) contribute negative scores rather than raising.
#[must_use]
pub fn avg_quality(quality: &str) -> f64 {
    let mut sum = 0.0;
    let mut count: u64 = 0;
    for c in quality.chars() {
        sum += f64::from(c as u32) - PHRED_OFFSET;
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    round2(sum / count_to_f64(count))
}

/// Number of distinct 3-mers across all sliding positions (set cardinality,
/// not occurrence count). 0 for sequences shorter than 3.
#[must_use]
pub fn complexity(sequence: &str) -> u64 {
    let bytes = sequence.as_bytes();
    if bytes.len() < COMPLEXITY_K {
        return 0;
    }
    let kmers: HashSet<&[u8]> = bytes.windows(COMPLEXITY_K).collect();
    kmers.len() as u64
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
