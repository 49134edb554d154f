//! Data Table Module
//! Two-column tabular data in the "first row is the header" shape used by
//! the schedule chart package.

use serde::{Deserialize, Serialize};

/// An ordered (label, value) table with a two-column header.
/// Row order is meaningful and preserved exactly as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    header: [String; 2],
    rows: Vec<(String, f64)>,
}

impl DataTable {
    pub fn new(header: [String; 2], rows: Vec<(String, f64)>) -> Self {
        Self { header, rows }
    }

    /// Column headers, e.g. `["Macro", "Grams"]`.
    pub fn header(&self) -> &[String; 2] {
        &self.header
    }

    /// Data rows, excluding the header.
    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(label, _)| label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|&(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        DataTable::new(
            ["Macro".into(), "Grams".into()],
            vec![
                ("Carbohydrates".into(), 11.0),
                ("Playing".into(), 2.0),
                ("Sleep".into(), 7.0),
            ],
        )
    }

    #[test]
    fn header_is_separate_from_rows() {
        let table = sample();
        assert_eq!(table.header(), &["Macro".to_string(), "Grams".to_string()]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0], ("Carbohydrates".to_string(), 11.0));
    }

    #[test]
    fn preserves_row_order() {
        let table = sample();
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, ["Carbohydrates", "Playing", "Sleep"]);
        let values: Vec<f64> = table.values().collect();
        assert_eq!(values, [11.0, 2.0, 7.0]);
    }

    #[test]
    fn empty_table_is_allowed() {
        let table = DataTable::new(["A".into(), "B".into()], vec![]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
