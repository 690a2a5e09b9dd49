use serde::{Deserialize, Serialize};

use crate::core::record::SequenceFeatures;
use crate::core::row::TabularRow;
use crate::core::types::DataType;

/// One row of the flat output table.
///
/// The schema is a fixed superset across both record kinds so that the whole
/// merge fits one CSV: a genomic record carries empty agricultural columns
/// and vice versa. Write-once; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    /// Unique, monotonically assigned across the whole merge
    pub record_id: u64,
    pub data_type: DataType,

    // === Sequence-derived fields ===
    pub sequence_id: u64,
    pub header: String,
    pub source_file: String,
    pub length: u64,
    pub gc_content: f64,
    pub a_count: u64,
    pub t_count: u64,
    pub g_count: u64,
    pub c_count: u64,
    pub n_count: u64,
    pub avg_quality: f64,
    pub complexity: u64,
    pub has_ambiguous: bool,

    // === Sample-mapping fields ===
    pub sample_name: String,
    pub barcode: String,
    pub platform: String,
    pub run_id: String,
    pub lane: String,

    // === Agricultural statistics fields ===
    pub area: String,
    pub item: String,
    pub element: String,
    pub year: String,
    pub value: String,
    pub unit: String,
}

impl MergedRecord {
    /// Build a genomic record from extracted features and an optional matched
    /// mapping row. Agricultural columns stay empty.
    #[must_use]
    pub fn from_features(
        record_id: u64,
        features: &SequenceFeatures,
        mapping: Option<&TabularRow>,
    ) -> Self {
        let field = |column: &str| -> String {
            mapping
                .and_then(|row| row.get_loose(column))
                .unwrap_or_default()
                .to_string()
        };

        Self {
            record_id,
            data_type: DataType::GenomicSequence,
            sequence_id: features.sequence_id,
            header: features.header.clone(),
            source_file: features.source_file.clone(),
            length: features.length,
            gc_content: features.gc_content,
            a_count: features.base_counts.a,
            t_count: features.base_counts.t,
            g_count: features.base_counts.g,
            c_count: features.base_counts.c,
            n_count: features.base_counts.n,
            avg_quality: features.avg_quality,
            complexity: features.complexity,
            has_ambiguous: features.has_ambiguous,
            sample_name: field("sample_name"),
            barcode: field("barcode"),
            platform: field("platform"),
            run_id: field("run_id"),
            lane: field("lane"),
            area: String::new(),
            item: String::new(),
            element: String::new(),
            year: String::new(),
            value: String::new(),
            unit: String::new(),
        }
    }

    /// Build an agricultural record from one FAOSTAT row, matching the known
    /// columns case-insensitively. Sequence and mapping columns stay
    /// empty/zero.
    #[must_use]
    pub fn from_agricultural(record_id: u64, row: &TabularRow) -> Self {
        let field = |column: &str| -> String { row.get_loose(column).unwrap_or_default().to_string() };

        Self {
            record_id,
            data_type: DataType::AgriculturalStatistics,
            sequence_id: 0,
            header: String::new(),
            source_file: String::new(),
            length: 0,
            gc_content: 0.0,
            a_count: 0,
            t_count: 0,
            g_count: 0,
            c_count: 0,
            n_count: 0,
            avg_quality: 0.0,
            complexity: 0,
            has_ambiguous: false,
            sample_name: String::new(),
            barcode: String::new(),
            platform: String::new(),
            run_id: String::new(),
            lane: String::new(),
            area: field("area"),
            item: field("item"),
            element: field("element"),
            year: field("year"),
            value: field("value"),
            unit: field("unit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::BaseCounts;

    fn sample_features() -> SequenceFeatures {
        SequenceFeatures {
            sequence_id: 1,
            header: "read_1".to_string(),
            length: 4,
            gc_content: 50.0,
            base_counts: BaseCounts {
                a: 1,
                t: 1,
                g: 1,
                c: 1,
                n: 0,
            },
            avg_quality: 40.0,
            complexity: 2,
            has_ambiguous: false,
            source_file: "sample.fastq".to_string(),
        }
    }

    #[test]
    fn test_from_features_without_mapping() {
        let record = MergedRecord::from_features(7, &sample_features(), None);
        assert_eq!(record.record_id, 7);
        assert_eq!(record.data_type, DataType::GenomicSequence);
        assert_eq!(record.length, 4);
        assert!(record.sample_name.is_empty());
        assert!(record.area.is_empty());
    }

    #[test]
    fn test_from_features_with_mapping() {
        let headers = vec!["Sample Name".to_string(), "barcode".to_string()];
        let row =
            TabularRow::from_headers(&headers, vec!["soil_a".to_string(), "BC1".to_string()]);
        let record = MergedRecord::from_features(1, &sample_features(), Some(&row));
        assert_eq!(record.sample_name, "soil_a");
        assert_eq!(record.barcode, "BC1");
        assert!(record.platform.is_empty());
    }

    #[test]
    fn test_from_agricultural() {
        let headers: Vec<String> = ["Area", "Item", "Element", "Year", "Value", "Unit"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let values: Vec<String> = ["Kenya", "Maize", "Production", "2020", "3800000", "tonnes"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        let row = TabularRow::from_headers(&headers, values);

        let record = MergedRecord::from_agricultural(9, &row);
        assert_eq!(record.data_type, DataType::AgriculturalStatistics);
        assert_eq!(record.area, "Kenya");
        assert_eq!(record.year, "2020");
        assert_eq!(record.length, 0);
        assert!(record.header.is_empty());
    }
}
