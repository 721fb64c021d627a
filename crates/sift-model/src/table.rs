#![deny(unsafe_code)]

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Ordered column names exactly as they appear in the source header row.
///
/// The order defines the output column order, so it is never sorted or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSet(Vec<String>);

impl HeaderSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self(headers)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Position of the first column named exactly `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|header| header == name)
    }
}

impl Index<usize> for HeaderSet {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// One data row, values aligned with the table's [`HeaderSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based position of the row among the data rows of the source file.
    pub position: usize,
    values: Vec<String>,
}

impl Record {
    pub fn new(position: usize, values: Vec<String>) -> Self {
        Self { position, values }
    }

    /// Value at column `index`; columns missing from a short row read as empty.
    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// A decoded tabular file: header row plus data rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: HeaderSet,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(headers: HeaderSet) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record values projected onto the header width, in header order.
    ///
    /// Short rows are padded with empty strings and values beyond the last
    /// header are left out, so every yielded row has exactly `headers.len()`
    /// fields.
    pub fn aligned_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        let width = self.headers.len();
        self.records
            .iter()
            .map(move |record| (0..width).map(|idx| record.value(idx)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> HeaderSet {
        HeaderSet::new(names.iter().map(|name| (*name).to_string()).collect())
    }

    #[test]
    fn position_uses_first_exact_match() {
        let set = headers(&["Status", "Date", "Status"]);
        assert_eq!(set.position("Status"), Some(0));
        assert_eq!(set.position("status"), None);
        assert_eq!(&set[1], "Date");
    }

    #[test]
    fn aligned_rows_pad_and_truncate() {
        let mut table = Table::new(headers(&["A", "B", "C"]));
        table.push_record(Record::new(1, vec!["1".into()]));
        table.push_record(Record::new(
            2,
            vec!["1".into(), "2".into(), "3".into(), "4".into()],
        ));

        let rows: Vec<Vec<&str>> = table.aligned_rows().collect();
        assert_eq!(rows[0], vec!["1", "", ""]);
        assert_eq!(rows[1], vec!["1", "2", "3"]);
    }
}
