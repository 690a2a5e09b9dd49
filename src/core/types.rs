use serde::{Deserialize, Serialize};

/// Kind of data carried by one merged record.
///
/// Every merged record has exactly one data type; the columns belonging to
/// the other type are present in the output schema but empty or zero-valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// A record derived from one sequencing read
    GenomicSequence,
    /// A record derived from one agricultural statistics row
    AgriculturalStatistics,
}

impl DataType {
    /// Tag string used in the `data_type` output column
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GenomicSequence => "genomic_sequence",
            Self::AgriculturalStatistics => "agricultural_statistics",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_tags() {
        assert_eq!(DataType::GenomicSequence.as_str(), "genomic_sequence");
        assert_eq!(
            DataType::AgriculturalStatistics.to_string(),
            "agricultural_statistics"
        );
    }
}
