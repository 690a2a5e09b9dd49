//! Merging of sequence features with sample-mapping and statistics rows.
//!
//! Matching a read to its mapping row is best-effort: reads rarely carry the
//! sample name verbatim, so after an exact key lookup fails we fall back to
//! substring containment in either direction. The fallback scans mapping keys
//! in file order, which makes it O(reads x mapping rows) - fine at the small
//! scale this tool targets, and a known scalability limit rather than a
//! correctness one.

use std::collections::HashMap;

use tracing::debug;

use crate::core::merged::MergedRecord;
use crate::core::record::SequenceFeatures;
use crate::core::row::TabularRow;
use crate::merge::summary::MergeSummary;
use crate::merge::MergeError;

/// Mapping-file columns whose values become lookup keys
const IDENTITY_COLUMNS: [&str; 2] = ["sample_name", "barcode"];

/// Lookup over sample-mapping rows, keyed by every non-empty value of the
/// identity columns.
///
/// Later rows overwrite earlier ones on key collision (last-write-wins), but
/// keys keep their first-insertion position so the substring fallback scans
/// in a deterministic file order.
#[derive(Debug, Default)]
pub struct MappingLookup {
    keys: Vec<String>,
    rows: HashMap<String, TabularRow>,
}

impl MappingLookup {
    #[must_use]
    pub fn build(mapping_rows: &[TabularRow]) -> Self {
        let mut lookup = Self::default();
        for row in mapping_rows {
            for column in IDENTITY_COLUMNS {
                let Some(value) = row.get_loose(column) else {
                    continue;
                };
                if value.is_empty() {
                    continue;
                }
                if lookup.rows.insert(value.to_string(), row.clone()).is_none() {
                    lookup.keys.push(value.to_string());
                }
            }
        }
        lookup
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn get_exact(&self, key: &str) -> Option<&TabularRow> {
        self.rows.get(key)
    }

    /// First key (in insertion order) containing the candidate or contained
    /// by it
    fn find_containing(&self, candidate: &str) -> Option<&TabularRow> {
        self.keys
            .iter()
            .find(|key| key.contains(candidate) || candidate.contains(key.as_str()))
            .and_then(|key| self.rows.get(key))
    }

    /// Find the mapping row for one read.
    ///
    /// Candidates are tried in order - sequence id, header, source file -
    /// each first as an exact key, then by substring containment. The first
    /// hit wins; no hit leaves the mapping columns empty.
    #[must_use]
    pub fn find_match(&self, features: &SequenceFeatures) -> Option<&TabularRow> {
        let id = features.sequence_id.to_string();
        let candidates = [
            id.as_str(),
            features.header.as_str(),
            features.source_file.as_str(),
        ];

        for candidate in candidates {
            if candidate.is_empty() {
                continue;
            }
            if let Some(row) = self.get_exact(candidate) {
                return Some(row);
            }
            if let Some(row) = self.find_containing(candidate) {
                return Some(row);
            }
        }
        None
    }
}

/// Result of one merge pass
#[derive(Debug)]
pub struct MergeOutput {
    /// All merged records: sequence-derived first, then agricultural, with
    /// `record_id` assigned 1-based across that combined order
    pub records: Vec<MergedRecord>,

    /// Aggregate statistics over `records`
    pub summary: MergeSummary,
}

/// Merge extracted features, agricultural statistics rows, and the sample
/// mapping into one ordered record stream.
///
/// Emission order is a pure function of input order, so identical inputs
/// produce byte-identical output downstream.
///
/// # Errors
///
/// Returns [`MergeError::NoData`] when both `features` and `agricultural`
/// are empty. A mapping table alone is not data; it only annotates reads.
pub fn merge(
    features: &[SequenceFeatures],
    agricultural: &[TabularRow],
    mapping_rows: &[TabularRow],
) -> Result<MergeOutput, MergeError> {
    if features.is_empty() && agricultural.is_empty() {
        return Err(MergeError::NoData);
    }

    let lookup = MappingLookup::build(mapping_rows);
    debug!(
        "merging {} reads and {} statistics rows against {} mapping keys",
        features.len(),
        agricultural.len(),
        lookup.len()
    );

    let mut records = Vec::with_capacity(features.len() + agricultural.len());
    let mut next_id: u64 = 1;

    for feature in features {
        let mapping = lookup.find_match(feature);
        records.push(MergedRecord::from_features(next_id, feature, mapping));
        next_id += 1;
    }

    for row in agricultural {
        records.push(MergedRecord::from_agricultural(next_id, row));
        next_id += 1;
    }

    let summary = MergeSummary::calculate(&records);
    Ok(MergeOutput { records, summary })
}
