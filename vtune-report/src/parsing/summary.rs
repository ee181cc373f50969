//! Reader for `summary.csv`: one `key,value` pair per row.

use csv::{ReaderBuilder, Trim};
use log::warn;
use std::io::Read;

/// Ordered key/value pairs from a summary export.
///
/// A repeated key keeps its first position but takes the latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    entries: Vec<(String, String)>,
}

impl SummaryTable {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
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

/// Read a summary export. Rows with fewer than two fields are ignored, as are
/// any columns past the second. Malformed records are logged and skipped.
pub fn read_summary<R: Read>(reader: R) -> SummaryTable {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut table = SummaryTable::default();
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed summary row: {e}");
                continue;
            }
        };
        if let (Some(key), Some(value)) = (record.get(0), record.get(1)) {
            table.insert(key.to_string(), value.to_string());
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_key_value_rows() {
        let csv = "Elapsed Time, 12.5s\nCPU Time,40.1s,extra\nlonely\n";
        let table = read_summary(csv.as_bytes());

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Elapsed Time"), Some("12.5s"));
        assert_eq!(table.get("CPU Time"), Some("40.1s"));
        assert_eq!(table.get("lonely"), None);
    }

    #[test]
    fn test_repeated_key_keeps_position_takes_latest_value() {
        let csv = "a,1\nb,2\na,3\n";
        let table = read_summary(csv.as_bytes());

        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }
}
