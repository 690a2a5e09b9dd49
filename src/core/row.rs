use serde::{Deserialize, Serialize};

/// One row of a delimited tabular file, keyed by the header row.
///
/// Column order follows the header line; every row of a file shares the same
/// column set, with short rows padded with empty strings and extra trailing
/// fields dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TabularRow {
    entries: Vec<(String, String)>,
}

impl TabularRow {
    #[must_use]
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Build a row by zipping values against headers positionally.
    ///
    /// Missing trailing values default to the empty string; values beyond the
    /// header count are dropped.
    #[must_use]
    pub fn from_headers(headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let entries = headers
            .iter()
            .map(|h| (h.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { entries }
    }

    /// Look up a value by exact column name
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a value by column name, ignoring ASCII case and treating
    /// spaces and underscores as equivalent (`Sample Name` == `sample_name`)
    #[must_use]
    pub fn get_loose(&self, column: &str) -> Option<&str> {
        let wanted = normalize_column(column);
        self.entries
            .iter()
            .find(|(name, _)| normalize_column(name) == wanted)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Values in header order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_column(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_from_headers_pads_short_rows() {
        let row = TabularRow::from_headers(&headers(&["a", "b", "c"]), vec!["1".to_string()]);
        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), Some(""));
        assert_eq!(row.get("c"), Some(""));
    }

    #[test]
    fn test_from_headers_drops_extra_fields() {
        let row = TabularRow::from_headers(
            &headers(&["a"]),
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
        );
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("a"), Some("1"));
    }

    #[test]
    fn test_get_loose() {
        let row = TabularRow::from_headers(
            &headers(&["Sample Name", "Barcode"]),
            vec!["s1".to_string(), "BC1".to_string()],
        );
        assert_eq!(row.get_loose("sample_name"), Some("s1"));
        assert_eq!(row.get_loose("BARCODE"), Some("BC1"));
        assert_eq!(row.get_loose("platform"), None);
    }

    #[test]
    fn test_column_order_preserved() {
        let row = TabularRow::from_headers(
            &headers(&["z", "a", "m"]),
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
        );
        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(columns, vec!["z", "a", "m"]);
    }
}
