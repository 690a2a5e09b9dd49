use serde::{Deserialize, Serialize};

/// One raw 4-line FASTQ record, exactly as parsed.
///
/// The parser is permissive: a truncated record at end-of-file keeps its
/// header and carries empty strings for the missing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawRecord {
    /// Header line with the leading `@` stripped
    pub header: String,

    /// Base calls (typically A/T/G/C/N, uppercase)
    pub sequence: String,

    /// Separator line (typically `+`, sometimes repeating the header)
    pub separator: String,

    /// Phred+33 encoded quality string
    pub quality: String,
}

impl RawRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
            separator: String::new(),
            quality: String::new(),
        }
    }

    #[cfg(test)]
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }
}

/// Per-base composition of one read.
///
/// Counting is case-sensitive over uppercase A/T/G/C; every other character
/// (lowercase bases, N, IUPAC ambiguity codes) counts as N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BaseCounts {
    pub a: u64,
    pub t: u64,
    pub g: u64,
    pub c: u64,
    pub n: u64,
}

impl BaseCounts {
    /// Sum of all counters; equals the sequence length by construction
    #[must_use]
    pub fn total(&self) -> u64 {
        self.a + self.t + self.g + self.c + self.n
    }
}

/// Numeric descriptors computed from one read.
///
/// Immutable once computed; deterministic for a given record, index, and
/// source file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceFeatures {
    /// 1-based position of the read within its source file
    pub sequence_id: u64,

    /// Header line with the leading `@` stripped
    pub header: String,

    /// Sequence length in characters
    pub length: u64,

    /// G+C percentage over the full length, 0-100, rounded to 2 decimals
    pub gc_content: f64,

    /// Per-base composition
    pub base_counts: BaseCounts,

    /// Mean Phred+33 quality score, rounded to 2 decimals
    pub avg_quality: f64,

    /// Number of distinct 3-mers in the sequence
    pub complexity: u64,

    /// True when at least one character fell into the N bucket
    pub has_ambiguous: bool,

    /// File name the read came from
    pub source_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_counts_total() {
        let counts = BaseCounts {
            a: 3,
            t: 1,
            g: 2,
            c: 2,
            n: 1,
        };
        assert_eq!(counts.total(), 9);
    }

    #[test]
    fn test_raw_record_new() {
        let record = RawRecord::new("read_1", "ACGT");
        assert_eq!(record.header, "read_1");
        assert_eq!(record.sequence, "ACGT");
        assert!(record.quality.is_empty());
    }
}
